use crate::constants::*;
use portfolio_core::contact::MISSING_FIELDS_MESSAGE;
use portfolio_core::ContactForm;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn field(data: &web::FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

/// Turn `#contactForm` submissions into a `mailto:` navigation.
pub fn wire_contact_form(window: &web::Window, document: &web::Document) {
    let Some(form) = document
        .get_element_by_id(CONTACT_FORM_ID)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok())
    else {
        return;
    };
    let window = window.clone();
    let form_submit = form.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
        let data = match web::FormData::new_with_form(&form_submit) {
            Ok(d) => d,
            Err(e) => {
                log::error!("[contact] form data: {:?}", e);
                return;
            }
        };
        let contact = ContactForm::new(
            &field(&data, "name"),
            &field(&data, "email"),
            &field(&data, "message"),
        );
        match contact.mailto(CONTACT_RECIPIENT) {
            Ok(href) => {
                _ = window.location().set_href(&href);
            }
            Err(e) => {
                log::debug!("[contact] {}", e);
                _ = window.alert_with_message(MISSING_FIELDS_MESSAGE);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Stamp the current year into the footer.
pub fn stamp_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
