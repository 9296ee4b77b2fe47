use crate::core::{RippleStore, SimClock};
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Each click on the canvas spawns a ripple at the clicked surface position.
/// Clicks on a full store are dropped.
pub fn wire_click_ripples(
    canvas: &web::HtmlCanvasElement,
    store: Rc<RefCell<RippleStore>>,
    clock: SimClock,
) {
    let canvas_for_uv = canvas.clone();
    dom::listen(canvas.as_ref(), "click", move |ev: web::MouseEvent| {
        let Some([u, v]) = input::click_surface_uv(&ev, &canvas_for_uv) else {
            return;
        };
        let inserted = store.borrow_mut().add(u, v, clock.now_sec());
        if !inserted {
            log::debug!("[click] ripple store full, click dropped");
        }
    });
}
