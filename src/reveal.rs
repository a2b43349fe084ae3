use crate::dom;
use js_sys::{Array, Function, Object, Reflect};
use portfolio_core::reveal::{keyframes, timing, REVEAL_SELECTOR};
use portfolio_core::REVEAL_THRESHOLD;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn set(obj: &Object, key: &str, value: JsValue) {
    _ = Reflect::set(obj, &JsValue::from_str(key), &value);
}

fn keyframes_js() -> Array {
    keyframes()
        .iter()
        .map(|k| {
            let o = Object::new();
            set(&o, "transform", JsValue::from_str(&k.transform));
            set(&o, "opacity", JsValue::from_f64(k.opacity as f64));
            JsValue::from(o)
        })
        .collect()
}

fn timing_js() -> Object {
    let t = timing();
    let o = Object::new();
    set(&o, "duration", JsValue::from_f64(t.duration_ms));
    set(&o, "easing", JsValue::from_str(t.easing));
    set(&o, "fill", JsValue::from_str(t.fill));
    o
}

// `Element.animate` is looked up dynamically; browsers without the Web
// Animations API simply show the element as-is.
fn animate(el: &web::Element) {
    let func = Reflect::get(el, &JsValue::from_str("animate"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok());
    if let Some(f) = func {
        _ = f.call2(el, &keyframes_js(), &timing_js());
    }
}

/// Play the entrance animation once per element as it enters the viewport.
pub fn wire_reveals(document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let items = dom::query_all(&root, REVEAL_SELECTOR);
    if items.is_empty() {
        return;
    }

    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    animate(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &opts,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[reveal] IntersectionObserver unavailable: {:?}", e);
            return;
        }
    };
    callback.forget();
    for el in &items {
        observer.observe(el);
    }
    log::debug!("[reveal] observing {} elements", items.len());
}
