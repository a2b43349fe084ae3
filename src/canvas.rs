use anyhow::anyhow;
use glam::Vec2;
use portfolio_core::{BackingSize, Glow, Stroke, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by the background `<canvas>` and its 2D context.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self { canvas, ctx })
    }

    #[inline]
    fn segment(&self, from: Vec2, to: Vec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, css_width: f32, css_height: f32, backing: BackingSize, scale: f64) {
        // Assigning width/height resets the context state, so the transform goes last.
        self.canvas.set_width(backing.width);
        self.canvas.set_height(backing.height);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", css_width));
        _ = style.set_property("height", &format!("{}px", css_height));
        _ = self.ctx.set_transform(scale, 0.0, 0.0, scale, 0.0, 0.0);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        match stroke {
            Stroke::Solid {
                color,
                global_alpha,
            } => {
                self.ctx.save();
                self.ctx.set_global_alpha(global_alpha as f64);
                self.ctx.set_stroke_style_str(&color.to_string());
                self.segment(from, to);
                self.ctx.restore();
            }
            Stroke::Gradient { start, end } => {
                let g = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                _ = g.add_color_stop(0.0, &start.to_string());
                _ = g.add_color_stop(1.0, &end.to_string());
                self.ctx.set_stroke_style_canvas_gradient(&g);
                self.segment(from, to);
            }
        }
    }

    fn stroke_lines(&mut self, segments: &[(Vec2, Vec2)], stroke: Stroke) {
        let Stroke::Solid {
            color,
            global_alpha,
        } = stroke
        else {
            for &(from, to) in segments {
                self.stroke_line(from, to, stroke);
            }
            return;
        };
        self.ctx.save();
        self.ctx.set_global_alpha(global_alpha as f64);
        self.ctx.set_stroke_style_str(&color.to_string());
        for &(from, to) in segments {
            self.segment(from, to);
        }
        self.ctx.restore();
    }

    fn fill_glow(&mut self, center: Vec2, glow: Glow) {
        let (x, y) = (center.x as f64, center.y as f64);
        let g = match self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, glow.fade_radius as f64)
        {
            Ok(g) => g,
            Err(_) => return,
        };
        _ = g.add_color_stop(0.0, &glow.color.to_string());
        _ = g.add_color_stop(1.0, "transparent");
        self.ctx.begin_path();
        self.ctx.set_fill_style_canvas_gradient(&g);
        _ = self.ctx.arc(x, y, glow.fill_radius as f64, 0.0, TAU);
        self.ctx.fill();
    }
}
