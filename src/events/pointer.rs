use crate::dom;
use crate::input;
use crate::slider::SharedSlider;
use web_sys as web;

/// Mouse and touch dragging for one before/after slider.
///
/// Presses land on the slider root; moves and releases are tracked on the
/// window so a drag continues when the pointer leaves the widget.
pub fn wire_slider_pointer(window: &web::Window, ba: &SharedSlider) {
    let root = ba.borrow().root.clone();

    for event in ["mousedown", "touchstart"] {
        let ba = ba.clone();
        // not passive: the press cancels text selection and page scroll
        dom::add_listener(root.as_ref(), event, false, move |ev| {
            if let Some(x) = input::client_x(&ev) {
                ba.borrow_mut().press(x);
            }
            ev.prevent_default();
        });
    }

    for event in ["mousemove", "touchmove"] {
        let ba = ba.clone();
        dom::add_listener(window.as_ref(), event, true, move |ev| {
            if let Some(x) = input::client_x(&ev) {
                ba.borrow_mut().drag(x);
            }
        });
    }

    for event in ["mouseup", "touchend"] {
        let ba = ba.clone();
        dom::add_listener(window.as_ref(), event, true, move |_| {
            ba.borrow_mut().release();
        });
    }

    let ba = ba.clone();
    dom::add_listener(window.as_ref(), "resize", false, move |_| {
        ba.borrow_mut().update_rect();
    });
}
