use crate::constants::*;
use crate::dom;
use portfolio_core::{active_index, is_in_page_link, MobileMenu};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Highlight the `.nav-link` whose in-page section is under the scroll probe.
pub fn wire_active_links(window: &web::Window, document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let links: Vec<web::Element> = dom::query_all(&root, NAV_LINK_SELECTOR)
        .into_iter()
        .filter(|a| is_in_page_link(&a.get_attribute("href").unwrap_or_default()))
        .collect();
    if links.is_empty() {
        return;
    }
    let sections: Vec<Option<web::HtmlElement>> = links
        .iter()
        .map(|a| {
            let sel = a.get_attribute("href").unwrap_or_default();
            document
                .query_selector(&sel)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        })
        .collect();

    let window_scroll = window.clone();
    let on_scroll = move || {
        let y = window_scroll.scroll_y().unwrap_or(0.0);
        let tops: Vec<Option<f64>> = sections
            .iter()
            .map(|s| s.as_ref().map(|el| el.offset_top() as f64))
            .collect();
        let active = active_index(y, &tops);
        for (i, link) in links.iter().enumerate() {
            _ = link.class_list().toggle_with_force(ACTIVE_CLASS, i == active);
        }
    };
    on_scroll();
    dom::add_listener(window.as_ref(), "scroll", true, move |_| on_scroll());
}

/// Collapse/expand the header menu on small screens.
pub fn wire_mobile_menu(document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let (header, btn, links) = match (
        dom::query_html(&root, NAV_SELECTOR),
        dom::query_html(&root, NAV_TOGGLE_SELECTOR),
        dom::query_html(&root, NAV_LINKS_SELECTOR),
    ) {
        (Some(h), Some(b), Some(l)) => (h, b, l),
        _ => {
            log::warn!("[nav] mobile menu markup missing; toggle not wired");
            return;
        }
    };
    let menu = Rc::new(Cell::new(MobileMenu::default()));

    let render = {
        let header = header.clone();
        let btn = btn.clone();
        move |m: MobileMenu| {
            _ = header.class_list().toggle_with_force(NAV_OPEN_CLASS, m.is_open());
            _ = btn.set_attribute("aria-expanded", m.aria_expanded());
        }
    };

    let menu_toggle = menu.clone();
    let render_toggle = render.clone();
    dom::add_click_listener(btn.as_ref(), move |_| {
        let mut m = menu_toggle.get();
        m.toggle();
        menu_toggle.set(m);
        render_toggle(m);
    });

    dom::add_click_listener(links.as_ref(), move |ev| {
        let on_anchor = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest("a").ok().flatten())
            .is_some();
        if on_anchor {
            let mut m = menu.get();
            m.close();
            menu.set(m);
            render(m);
        }
    });
}
