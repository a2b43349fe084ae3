use crate::constants::*;
use crate::surface::Hsla;
use crate::theme::Theme;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hue {
    Cool,
    Warm,
}

impl Hue {
    #[inline]
    pub fn degrees(self) -> u16 {
        match self {
            Hue::Cool => COOL_HUE,
            Hue::Warm => WARM_HUE,
        }
    }

    #[inline]
    pub fn hsla(self, lightness: u8, alpha: f32) -> Hsla {
        Hsla {
            hue: self.degrees(),
            saturation: HUE_SATURATION,
            lightness,
            alpha,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub hue: Hue,
    pub alpha: f32,
}

impl Particle {
    /// Sample a particle uniformly inside `[0,width) × [0,height)`.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let position = Vec2::new(uniform(rng, 0.0, width), uniform(rng, 0.0, height));
        let velocity = Vec2::new(
            uniform(rng, SPEED_RANGE.0, SPEED_RANGE.1),
            uniform(rng, SPEED_RANGE.0, SPEED_RANGE.1),
        );
        let radius = uniform(rng, RADIUS_RANGE.0, RADIUS_RANGE.1);
        let hue = if rng.gen::<f32>() < 0.5 {
            Hue::Cool
        } else {
            Hue::Warm
        };
        let alpha = uniform(rng, ALPHA_RANGE.0, ALPHA_RANGE.1);
        Self {
            position,
            velocity,
            radius,
            hue,
            alpha,
        }
    }

    /// Move by one frame of velocity, then flip any axis that left the box.
    ///
    /// Position is not clamped: a particle may sit just outside the bounds for
    /// a frame before the flipped velocity brings it back.
    #[inline]
    pub fn advance(&mut self, width: f32, height: f32) {
        self.position += self.velocity;
        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y = -self.velocity.y;
        }
    }
}

// `lo + r * (hi - lo)` with r in [0,1); stays half-open even for an empty range
#[inline]
fn uniform<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    let r: f32 = rng.gen();
    let v = lo + r * (hi - lo);
    if hi > lo && v >= hi {
        lo
    } else {
        v
    }
}

/// Particle count for a css-pixel viewport: `floor(min(120, w*h/14000))`.
#[inline]
pub fn particle_count(width: f32, height: f32) -> usize {
    let area = width as f64 * height as f64;
    // `f64::min` drops NaN, so it has to be caught first
    if area.is_nan() || area <= 0.0 {
        return 0;
    }
    (area / AREA_PER_PARTICLE as f64)
        .min(MAX_PARTICLES as f64)
        .floor() as usize
}

/// Line opacity for two particles `distance` apart, or `None` when too far.
#[inline]
pub fn link_alpha(distance: f32, theme: Theme) -> Option<f32> {
    if distance < LINK_DISTANCE {
        let k = match theme {
            Theme::Light => LINK_ALPHA_LIGHT,
            Theme::Dark => LINK_ALPHA_DARK,
        };
        Some((1.0 - distance / LINK_DISTANCE) * k)
    } else {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub alpha: f32,
}

/// Ordered set of particles regenerated wholesale for each viewport.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let n = particle_count(width, height);
        let particles = (0..n)
            .map(|_| Particle::sample(rng, width, height))
            .collect();
        Self { particles }
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn advance(&mut self, width: f32, height: f32) {
        for p in &mut self.particles {
            p.advance(width, height);
        }
    }

    /// Every unordered pair `i < j` closer than the link distance.
    pub fn links(&self, theme: Theme) -> impl Iterator<Item = Link> + '_ {
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            ((i + 1)..ps.len()).filter_map(move |j| {
                let d = ps[i].position.distance(ps[j].position);
                link_alpha(d, theme).map(|alpha| Link { a: i, b: j, alpha })
            })
        })
    }
}
