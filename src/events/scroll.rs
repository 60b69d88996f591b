use crate::dom::{self, Listener};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Receives window scroll and resize notifications.
pub trait ScrollAware {
    fn on_scroll(&mut self, scroll_y: f32);
    fn on_resize(&mut self, viewport: Vec2, scroll_y: f32);
}

/// Forward window `scroll` and `resize` events to `state`. Both events are
/// handled synchronously; the frame loop picks up the new state.
pub fn wire_window_listeners<S: ScrollAware + 'static>(
    window: &web::Window,
    state: &Rc<RefCell<S>>,
) -> Vec<Listener> {
    let mut listeners = Vec::with_capacity(2);

    let on_scroll = state.clone();
    match Listener::new(window, "scroll", move |_| {
        if let Ok(mut s) = on_scroll.try_borrow_mut() {
            s.on_scroll(dom::scroll_y());
        }
    }) {
        Ok(l) => listeners.push(l),
        Err(e) => log::warn!("[page] scroll listener failed: {:?}", e),
    }

    let on_resize = state.clone();
    match Listener::new(window, "resize", move |_| {
        if let Ok(mut s) = on_resize.try_borrow_mut() {
            s.on_resize(dom::viewport(), dom::scroll_y());
        }
    }) {
        Ok(l) => listeners.push(l),
        Err(e) => log::warn!("[page] resize listener failed: {:?}", e),
    }

    listeners
}
