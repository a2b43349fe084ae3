use crate::constants::*;
use crate::dom;
use crate::events;
use portfolio_core::slider::{initial_pct, transition_css, KeyCommand, Slider, Span};
use portfolio_core::{SHEEN_FADE_MS, SLIDER_TRANSITION_CLEAR_MS};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// One `.before-after` widget and the elements it moves.
pub struct BeforeAfter {
    pub root: web::Element,
    clip: web::HtmlElement,
    handle: web::HtmlElement,
    sheen: Option<web::Element>,
    slider: Slider,
    clear_timer: Option<i32>,
}

fn span_of(el: &web::Element) -> Span {
    let rect = el.get_bounding_client_rect();
    Span {
        left: rect.left(),
        width: rect.width(),
    }
}

impl BeforeAfter {
    fn new(root: web::Element) -> Option<Self> {
        let clip = dom::query_html(&root, SLIDER_CLIP_SELECTOR)?;
        let handle = dom::query_html(&root, SLIDER_HANDLE_SELECTOR)?;
        let sheen = root.query_selector(SLIDER_SHEEN_SELECTOR).ok().flatten();
        let initial = initial_pct(root.get_attribute(SLIDER_INITIAL_ATTRIBUTE).as_deref());
        let slider = Slider::new(initial, span_of(&root));
        Some(Self {
            root,
            clip,
            handle,
            sheen,
            slider,
            clear_timer: None,
        })
    }

    pub fn handle(&self) -> &web::HtmlElement {
        &self.handle
    }

    fn place(&mut self, x: f64, with_transition: bool) {
        _ = self.clip.style().set_property("width", &format!("{}px", x));
        _ = self
            .handle
            .style()
            .set_property("transform", &format!("translateX({}px)", x));
        if !with_transition {
            return;
        }
        let (clip_t, handle_t) = transition_css();
        _ = self.clip.style().set_property("transition", &clip_t);
        _ = self.handle.style().set_property("transition", &handle_t);
        if let Some(id) = self.clear_timer.take() {
            dom::clear_timeout(id);
        }
        let clip = self.clip.clone();
        let handle = self.handle.clone();
        self.clear_timer = dom::set_timeout(SLIDER_TRANSITION_CLEAR_MS, move || {
            _ = clip.style().set_property("transition", "");
            _ = handle.style().set_property("transition", "");
        });
    }

    pub fn set_pct(&mut self, v: f64, with_transition: bool) {
        let x = self.slider.set_pct(v);
        self.place(x, with_transition);
    }

    pub fn update_rect(&mut self) {
        let x = self.slider.set_span(span_of(&self.root));
        self.place(x, false);
    }

    pub fn press(&mut self, client_x: f64) {
        let x = self.slider.press(client_x);
        _ = self.root.class_list().add_1(DRAGGING_CLASS);
        if let Some(sheen) = &self.sheen {
            _ = sheen
                .class_list()
                .add_2(SHEEN_ANIMATE_CLASS, SHEEN_VISIBLE_CLASS);
        }
        self.place(x, false);
    }

    pub fn drag(&mut self, client_x: f64) {
        if let Some(x) = self.slider.drag(client_x) {
            self.place(x, false);
        }
    }

    pub fn release(&mut self) {
        if !self.slider.release() {
            return;
        }
        _ = self.root.class_list().remove_1(DRAGGING_CLASS);
        if let Some(sheen) = &self.sheen {
            _ = sheen.class_list().remove_1(SHEEN_ANIMATE_CLASS);
            let sheen = sheen.clone();
            dom::set_timeout(SHEEN_FADE_MS, move || {
                _ = sheen.class_list().remove_1(SHEEN_VISIBLE_CLASS);
            });
        }
    }

    pub fn apply_key(&mut self, cmd: KeyCommand) {
        let x = self.slider.apply_key(cmd);
        self.place(x, true);
    }
}

/// Wire every before/after slider on the page.
pub fn wire_sliders(window: &web::Window, document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let mut wired = 0usize;
    for el in dom::query_all(&root, SLIDER_ROOT_SELECTOR) {
        let Some(mut ba) = BeforeAfter::new(el) else {
            log::warn!("[slider] .before-after without clip or handle; skipped");
            continue;
        };
        let pct = ba.slider.pct();
        ba.set_pct(pct, true);
        let ba = Rc::new(RefCell::new(ba));
        events::wire_slider_pointer(window, &ba);
        events::wire_slider_keys(&ba);
        wired += 1;
    }
    if wired > 0 {
        log::debug!("[slider] wired {} before/after sliders", wired);
    }
}

pub type SharedSlider = Rc<RefCell<BeforeAfter>>;
