use wasm_bindgen::JsCast;
use web_sys as web;

/// Horizontal client coordinate of a mouse or touch event.
///
/// Touch events report their first touch point; `touchend` has none left and
/// yields `None`.
#[inline]
pub fn client_x(ev: &web::Event) -> Option<f64> {
    if is_touch_event(&ev.type_()) {
        let touch: &web::TouchEvent = ev.unchecked_ref();
        touch.touches().get(0).map(|t| t.client_x() as f64)
    } else {
        ev.dyn_ref::<web::MouseEvent>().map(|m| m.client_x() as f64)
    }
}

#[inline]
pub fn is_touch_event(event_type: &str) -> bool {
    event_type.starts_with("touch")
}
