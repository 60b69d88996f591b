use crate::constants::CONTACT_FORM_SELECTOR;
use crate::dom::{self, Listener};
use crate::overlay;
use site_core::contact::{AcknowledgeOnly, ContactForm, ContactSink, Field};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn field_value(form: &web::HtmlFormElement, field: Field) -> String {
    let selector = format!("[name=\"{}\"]", field.name());
    let Some(el) = form.query_selector(&selector).ok().flatten() else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<web::HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn read_form(form: &web::HtmlFormElement) -> ContactForm {
    let mut contact = ContactForm::default();
    for field in Field::ALL {
        contact.set(field, field_value(form, field));
    }
    contact
}

fn acknowledge(document: &web::Document, message: &str) {
    if !overlay::show(document, message) {
        if let Some(w) = web::window() {
            _ = w.alert_with_message(message);
        }
    }
}

/// Intercept submission of the contact form and hand valid messages to
/// `sink`. Invalid forms fall back to the browser's own constraint UI.
pub fn wire_contact_form<S: ContactSink + 'static>(
    document: &web::Document,
    sink: S,
) -> Option<Listener> {
    let form = dom::query_doc(document, CONTACT_FORM_SELECTOR)?
        .dyn_into::<web::HtmlFormElement>()
        .ok()?;
    let sink = Rc::new(RefCell::new(sink));
    let document = document.clone();
    let form_for_submit = form.clone();
    let listener = Listener::new(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        overlay::hide(&document);
        let message = match read_form(&form_for_submit).validate() {
            Ok(message) => message,
            Err(e) => {
                log::warn!("[contact] not sent: {}", e);
                _ = form_for_submit.report_validity();
                return;
            }
        };
        match sink.borrow_mut().submit(message) {
            Ok(ack) => {
                acknowledge(&document, &ack);
                form_for_submit.reset();
            }
            Err(e) => log::warn!("[contact] sink rejected message: {}", e),
        }
    });
    match listener {
        Ok(l) => {
            log::info!("[contact] form ready");
            Some(l)
        }
        Err(e) => {
            log::warn!("[contact] submit listener failed: {:?}", e);
            None
        }
    }
}

/// The form as shipped: acknowledge locally, send nothing.
pub fn wire_default_contact_form(document: &web::Document) -> Option<Listener> {
    wire_contact_form(document, AcknowledgeOnly)
}
