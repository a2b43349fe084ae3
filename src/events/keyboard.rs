use crate::slider::SharedSlider;
use portfolio_core::slider::key_command;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Arrow/Home/End control on the slider handle.
pub fn wire_slider_keys(ba: &SharedSlider) {
    let handle = ba.borrow().handle().clone();
    let ba = ba.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(cmd) = key_command(&ev.key(), ev.shift_key()) {
            ba.borrow_mut().apply_key(cmd);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = handle.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
