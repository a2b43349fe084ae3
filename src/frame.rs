use crate::canvas::CanvasSurface;
use crate::dom;
use instant::Instant;
use portfolio_core::{FrameStats, ParticleSystem, Theme};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Particle background bound to its canvas.
pub struct Background {
    pub system: ParticleSystem,
    pub surface: CanvasSurface,
    pub theme: Rc<Cell<Theme>>,
    pub stats: FrameStats,
}

impl Background {
    /// Re-read the viewport and resample the field for it.
    pub fn resize_to_viewport(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let (w, h) = dom::viewport_size(&window);
        let dpr = window.device_pixel_ratio();
        self.system.resize(&mut self.surface, w, h, dpr);
    }

    pub fn frame(&mut self) {
        self.system.set_theme(self.theme.get());
        self.system.step(&mut self.surface);
        self.stats.tick(Instant::now(), self.system.field().len());
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to the running animation-frame chain.
#[derive(Clone)]
pub struct FrameLoop {
    tick: Tick,
    pending: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        !self.stopped.get()
    }

    /// Cancel the pending frame and release the tick closure.
    ///
    /// Must be called from outside the tick itself (e.g. a `pagehide` handler).
    pub fn stop(&self) {
        if self.stopped.replace(true) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(tick: &Tick, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        pending.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

pub fn start_loop(background: Rc<RefCell<Background>>) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let stopped = Rc::new(Cell::new(false));

    let tick_clone = tick.clone();
    let pending_tick = pending.clone();
    let stopped_tick = stopped.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if stopped_tick.get() {
            return;
        }
        background.borrow_mut().frame();
        request_frame(&tick_clone, &pending_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&tick, &pending);

    FrameLoop {
        tick,
        pending,
        stopped,
    }
}

/// Bind the particle background to `#bg-canvas` and run it until page teardown.
pub fn start_canvas(
    canvas: web::HtmlCanvasElement,
    theme: Rc<Cell<Theme>>,
) -> anyhow::Result<FrameLoop> {
    let surface = CanvasSurface::new(canvas)?;
    let rng = {
        use rand::SeedableRng;
        rand::rngs::StdRng::from_entropy()
    };
    let background = Rc::new(RefCell::new(Background {
        system: ParticleSystem::new(rng),
        surface,
        theme,
        stats: FrameStats::default(),
    }));
    background.borrow_mut().resize_to_viewport();
    log::info!(
        "[frame] canvas started with {} particles",
        background.borrow().system.field().len()
    );

    if let Some(window) = web::window() {
        let bg = background.clone();
        dom::add_listener(window.as_ref(), "resize", false, move |_| {
            bg.borrow_mut().resize_to_viewport();
        });
    }

    let frame_loop = start_loop(background);
    let teardown = frame_loop.clone();
    if let Some(window) = web::window() {
        dom::add_listener(window.as_ref(), "pagehide", true, move |ev| {
            // bfcache restores keep the page alive; only stop on real unloads
            let persisted = js_sys::Reflect::get(&ev, &"persisted".into())
                .ok()
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            if !persisted {
                teardown.stop();
            }
        });
    }
    Ok(frame_loop)
}
