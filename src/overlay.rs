use crate::constants::{CONTACT_ACK_SELECTOR, HIDDEN_CLASS};
use web_sys as web;

fn ack_element(document: &web::Document) -> Option<web::Element> {
    document.query_selector(CONTACT_ACK_SELECTOR).ok().flatten()
}

/// Show `message` in the acknowledgement banner. Returns false when the page
/// has no banner, so the caller can fall back to an alert.
pub fn show(document: &web::Document, message: &str) -> bool {
    let Some(el) = ack_element(document) else {
        return false;
    };
    el.set_text_content(Some(message));
    _ = el.class_list().remove_1(HIDDEN_CLASS);
    _ = el.set_attribute("role", "status");
    true
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = ack_element(document) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
    }
}
