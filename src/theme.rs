use crate::constants::*;
use crate::dom;
use portfolio_core::Theme;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

fn saved_theme(window: &web::Window) -> Option<String> {
    window
        .local_storage()
        .ok()
        .flatten()?
        .get_item(THEME_STORAGE_KEY)
        .ok()
        .flatten()
}

/// Publish `theme` to the page, the particle background and local storage.
pub fn apply(window: &web::Window, document: &web::Document, current: &Cell<Theme>, theme: Theme) {
    current.set(theme);
    if let Some(root) = document.document_element() {
        _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
    match window.local_storage() {
        Ok(Some(storage)) => {
            if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
                log::warn!("[theme] could not persist: {:?}", e);
            }
        }
        _ => log::warn!("[theme] local storage unavailable"),
    }
}

/// Restore the saved theme and flip it on `#themeToggle` clicks.
///
/// Without the toggle button the page keeps its default (dark) theme.
pub fn wire_theme_toggle(window: &web::Window, document: &web::Document, current: Rc<Cell<Theme>>) {
    let Some(btn) = document.get_element_by_id(THEME_TOGGLE_ID) else {
        return;
    };
    let saved = saved_theme(window);
    let initial = Theme::resolve_initial(
        saved.as_deref(),
        dom::media_matches(window, PREFERS_LIGHT_QUERY),
    );
    log::info!("[theme] initial={} (saved={:?})", initial, saved);
    apply(window, document, &current, initial);

    let window = window.clone();
    let document = document.clone();
    dom::add_click_listener(btn.as_ref(), move |_| {
        let next = current.get().toggled();
        apply(&window, &document, &current, next);
    });
}
