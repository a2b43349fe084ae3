//! Particle background simulator.
//!
//! [`ParticleSystem`] owns the field, the viewport it lives in, the current
//! theme and the random source used to sample new fields. It is driven from
//! the outside: the host calls [`ParticleSystem::resize`] whenever the
//! viewport changes and [`ParticleSystem::step`] once per animation frame.
//! Nothing here schedules frames, so a test can single-step it.

use crate::constants::*;
use crate::particles::ParticleField;
use crate::surface::{backing_size, effective_dpr, BackingSize, Glow, Rgba, Stroke, Surface};
use crate::theme::Theme;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;

pub struct ParticleSystem<R: Rng = StdRng> {
    field: ParticleField,
    width: f32,
    height: f32,
    dpr: f64,
    theme: Theme,
    rng: R,
}

impl<R: Rng> ParticleSystem<R> {
    /// Empty system; call [`resize`](Self::resize) before the first frame.
    pub fn new(rng: R) -> Self {
        Self {
            field: ParticleField::default(),
            width: 0.0,
            height: 0.0,
            dpr: 1.0,
            theme: Theme::default(),
            rng,
        }
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[inline]
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Replace the field with a fresh sample for a `width × height` viewport.
    pub fn init_particles(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.field = ParticleField::generate(&mut self.rng, width, height);
    }

    /// Adopt a new viewport: rescale the surface, then resample the field.
    ///
    /// Returns the backing buffer size handed to the surface.
    pub fn resize<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        width: f32,
        height: f32,
        device_pixel_ratio: f64,
    ) -> BackingSize {
        self.dpr = effective_dpr(device_pixel_ratio);
        let backing = backing_size(width, height, self.dpr);
        surface.resize(width, height, backing, self.dpr);
        self.init_particles(width, height);
        log::debug!(
            "[particles] resize {}x{} dpr={} -> {} particles",
            width,
            height,
            self.dpr,
            self.field.len()
        );
        backing
    }

    /// Advance one frame and draw it.
    pub fn step<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (w, h) = (self.width, self.height);
        surface.clear(w, h);
        self.draw_grid(surface);
        self.field.advance(w, h);
        self.draw_links(surface);
        self.draw_particles(surface);
    }

    fn draw_grid<S: Surface + ?Sized>(&self, surface: &mut S) {
        let color = match self.theme {
            Theme::Light => Rgba(GRID_RGBA_LIGHT),
            Theme::Dark => Rgba(GRID_RGBA_DARK),
        };
        let stroke = Stroke::Solid {
            color,
            global_alpha: GRID_GLOBAL_ALPHA,
        };
        let (w, h) = (self.width, self.height);
        let segments: Vec<(Vec2, Vec2)> = grid_offsets(w)
            .map(|x| (Vec2::new(x, 0.0), Vec2::new(x, h)))
            .chain(grid_offsets(h).map(|y| (Vec2::new(0.0, y), Vec2::new(w, y))))
            .collect();
        if !segments.is_empty() {
            surface.stroke_lines(&segments, stroke);
        }
    }

    fn draw_links<S: Surface + ?Sized>(&self, surface: &mut S) {
        let ps = self.field.particles();
        for link in self.field.links(self.theme) {
            let (a, b) = (&ps[link.a], &ps[link.b]);
            let stroke = Stroke::Gradient {
                start: a.hue.hsla(LINE_LIGHTNESS, link.alpha),
                end: b.hue.hsla(LINE_LIGHTNESS, link.alpha),
            };
            surface.stroke_line(a.position, b.position, stroke);
        }
    }

    fn draw_particles<S: Surface + ?Sized>(&self, surface: &mut S) {
        for p in self.field.particles() {
            let glow = Glow {
                color: p.hue.hsla(GLOW_LIGHTNESS, p.alpha),
                fill_radius: p.radius * GLOW_FILL_SCALE,
                fade_radius: p.radius * GLOW_FADE_SCALE,
            };
            surface.fill_glow(p.position, glow);
        }
    }
}

// 0, 28, 56, ... strictly below `extent`
fn grid_offsets(extent: f32) -> impl Iterator<Item = f32> {
    (0u32..)
        .map(|i| i as f32 * GRID_SPACING)
        .take_while(move |v| *v < extent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::{Hue, Particle};
    use rand::SeedableRng;

    #[derive(Debug, PartialEq)]
    enum Op {
        Resize(BackingSize, f64),
        Clear(f32, f32),
        Line(Vec2, Vec2, Stroke),
        Glow(Vec2, Glow),
    }

    #[derive(Default)]
    struct Recorder(Vec<Op>);

    impl Surface for Recorder {
        fn resize(&mut self, _w: f32, _h: f32, backing: BackingSize, scale: f64) {
            self.0.push(Op::Resize(backing, scale));
        }
        fn clear(&mut self, width: f32, height: f32) {
            self.0.push(Op::Clear(width, height));
        }
        fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
            self.0.push(Op::Line(from, to, stroke));
        }
        fn fill_glow(&mut self, center: Vec2, glow: Glow) {
            self.0.push(Op::Glow(center, glow));
        }
    }

    impl Recorder {
        fn gradient_lines(&self) -> Vec<(Vec2, Vec2, Stroke)> {
            self.0
                .iter()
                .filter_map(|op| match op {
                    Op::Line(a, b, s @ Stroke::Gradient { .. }) => Some((*a, *b, *s)),
                    _ => None,
                })
                .collect()
        }
    }

    fn system() -> ParticleSystem {
        ParticleSystem::new(StdRng::seed_from_u64(42))
    }

    #[test]
    fn resize_scales_surface_and_resamples() {
        let mut sys = system();
        let mut rec = Recorder::default();
        let backing = sys.resize(&mut rec, 1000.0, 700.0, 3.0);
        assert_eq!(backing, BackingSize { width: 2000, height: 1400 });
        assert_eq!(rec.0, vec![Op::Resize(backing, 2.0)]);
        assert_eq!(sys.field().len(), 50);
        assert_eq!(sys.size(), (1000.0, 700.0));
    }

    #[test]
    fn resize_to_same_size_keeps_count_but_resamples() {
        let mut sys = system();
        let mut rec = Recorder::default();
        sys.resize(&mut rec, 1000.0, 700.0, 1.0);
        let first = sys.field().particles().to_vec();
        sys.resize(&mut rec, 1000.0, 700.0, 1.0);
        assert_eq!(sys.field().len(), first.len());
        assert_ne!(sys.field().particles(), first.as_slice());
    }

    #[test]
    fn empty_field_step_draws_only_grid() {
        let mut sys = system();
        let mut rec = Recorder::default();
        sys.resize(&mut rec, 100.0, 100.0, 1.0);
        rec.0.clear();
        sys.step(&mut rec);
        assert_eq!(rec.0[0], Op::Clear(100.0, 100.0));
        // x and y at 0, 28, 56, 84
        let lines = rec.0.iter().filter(|op| matches!(op, Op::Line(..))).count();
        assert_eq!(lines, 8);
        assert!(!rec.0.iter().any(|op| matches!(op, Op::Glow(..))));
    }

    #[test]
    fn grid_color_follows_theme() {
        let mut sys = system();
        let mut rec = Recorder::default();
        sys.resize(&mut rec, 50.0, 50.0, 1.0);
        sys.set_theme(Theme::Light);
        rec.0.clear();
        sys.step(&mut rec);
        match &rec.0[1] {
            Op::Line(_, _, Stroke::Solid { color, global_alpha }) => {
                assert_eq!(*color, Rgba(GRID_RGBA_LIGHT));
                assert_eq!(*global_alpha, GRID_GLOBAL_ALPHA);
            }
            other => panic!("expected grid line, got {:?}", other),
        }
    }

    #[test]
    fn step_draws_links_with_endpoint_hues() {
        let mut sys = system();
        let mut rec = Recorder::default();
        sys.resize(&mut rec, 400.0, 400.0, 1.0);
        sys.field = ParticleField::from_particles(vec![
            Particle {
                position: Vec2::new(0.0, 0.0),
                velocity: Vec2::ZERO,
                radius: 1.0,
                hue: Hue::Cool,
                alpha: 0.5,
            },
            Particle {
                position: Vec2::new(50.0, 0.0),
                velocity: Vec2::ZERO,
                radius: 2.0,
                hue: Hue::Warm,
                alpha: 0.8,
            },
        ]);
        rec.0.clear();
        sys.step(&mut rec);

        let links = rec.gradient_lines();
        assert_eq!(links.len(), 1);
        let (from, to, stroke) = links[0];
        assert_eq!(from, Vec2::new(0.0, 0.0));
        assert_eq!(to, Vec2::new(50.0, 0.0));
        match stroke {
            Stroke::Gradient { start, end } => {
                assert_eq!(start.hue, COOL_HUE);
                assert_eq!(end.hue, WARM_HUE);
                assert_eq!(start.lightness, LINE_LIGHTNESS);
                assert!((start.alpha - 0.2042).abs() < 1e-4);
            }
            _ => unreachable!(),
        }

        let glows: Vec<_> = rec
            .0
            .iter()
            .filter_map(|op| match op {
                Op::Glow(c, g) => Some((*c, *g)),
                _ => None,
            })
            .collect();
        assert_eq!(glows.len(), 2);
        assert_eq!(glows[1].1.fill_radius, 4.0);
        assert_eq!(glows[1].1.fade_radius, 10.0);
        assert_eq!(glows[1].1.color.lightness, GLOW_LIGHTNESS);
        assert_eq!(glows[1].1.color.alpha, 0.8);
    }

    #[test]
    fn draw_order_is_clear_grid_links_glows() {
        let mut sys = system();
        let mut rec = Recorder::default();
        sys.resize(&mut rec, 1000.0, 700.0, 1.0);
        rec.0.clear();
        sys.step(&mut rec);
        let rank = |op: &Op| match op {
            Op::Resize(..) => 0,
            Op::Clear(..) => 1,
            Op::Line(_, _, Stroke::Solid { .. }) => 2,
            Op::Line(_, _, Stroke::Gradient { .. }) => 3,
            Op::Glow(..) => 4,
        };
        let ranks: Vec<_> = rec.0.iter().map(rank).collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(ranks.iter().filter(|r| **r == 4).count(), 50);
    }

    #[derive(Default)]
    struct Batches(Vec<(usize, Stroke)>);

    impl Surface for Batches {
        fn resize(&mut self, _w: f32, _h: f32, _backing: BackingSize, _scale: f64) {}
        fn clear(&mut self, _width: f32, _height: f32) {}
        fn stroke_line(&mut self, _from: Vec2, _to: Vec2, stroke: Stroke) {
            self.0.push((1, stroke));
        }
        fn stroke_lines(&mut self, segments: &[(Vec2, Vec2)], stroke: Stroke) {
            self.0.push((segments.len(), stroke));
        }
        fn fill_glow(&mut self, _center: Vec2, _glow: Glow) {}
    }

    #[test]
    fn grid_is_stroked_as_one_batch() {
        let mut sys = system();
        let mut surface = Batches::default();
        sys.resize(&mut surface, 100.0, 100.0, 1.0);
        sys.step(&mut surface);
        assert_eq!(surface.0.len(), 1);
        let (count, stroke) = surface.0[0];
        assert_eq!(count, 8);
        assert!(matches!(stroke, Stroke::Solid { .. }));

        surface.0.clear();
        sys.resize(&mut surface, 0.0, 0.0, 1.0);
        sys.step(&mut surface);
        assert!(surface.0.is_empty());
    }

    #[test]
    fn step_integrates_every_particle_once() {
        let mut sys = system();
        let mut rec = Recorder::default();
        sys.resize(&mut rec, 1000.0, 700.0, 1.0);
        let before = sys.field().particles().to_vec();
        sys.step(&mut rec);
        for (old, new) in before.iter().zip(sys.field().particles()) {
            assert_eq!(new.position, old.position + old.velocity);
            assert_eq!(new.velocity.x.abs(), old.velocity.x.abs());
            assert_eq!(new.velocity.y.abs(), old.velocity.y.abs());
        }
    }
}
