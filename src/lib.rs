#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use portfolio_core::Theme;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod input;
mod nav;
mod reveal;
mod slider;
mod theme;

use constants::{CANVAS_ID, REDUCED_MOTION_QUERY};

// Light page wiring; safe to run as soon as the DOM is parsed.
fn init_ui(window: &web::Window, document: &web::Document, current_theme: &Rc<Cell<Theme>>) {
    nav::wire_active_links(window, document);
    nav::wire_mobile_menu(document);
    reveal::wire_reveals(document);
    theme::wire_theme_toggle(window, document, current_theme.clone());
    contact::wire_contact_form(window, document);
    slider::wire_sliders(window, document);
    contact::stamp_year(document);
}

fn start_background(
    window: &web::Window,
    document: &web::Document,
    current_theme: Rc<Cell<Theme>>,
) -> anyhow::Result<()> {
    if dom::media_matches(window, REDUCED_MOTION_QUERY) {
        log::info!("reduced motion requested; particle background disabled");
        return Ok(());
    }
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    let frame_loop = frame::start_canvas(canvas, current_theme)?;
    log::debug!("[frame] loop running={}", frame_loop.is_running());
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_and_document()?;
    let current_theme = Rc::new(Cell::new(Theme::default()));

    dom::dom_ready(&document).await?;
    init_ui(&window, &document, &current_theme);

    // The canvas waits for full load so it does not compete with first paint.
    dom::window_loaded(&window, &document).await?;
    start_background(&window, &document, current_theme)
}
