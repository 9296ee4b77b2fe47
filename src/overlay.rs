use crate::constants::STATUS_OVERLAY_ID;
use web_sys as web;

#[inline]
pub fn show_status(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        el.set_text_content(Some(message));
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without the .hidden rule
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide_status(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}
