use crate::dom::{self, Listener};
use crate::page::PageState;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer events a magnetic control reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PointerKind {
    Enter,
    Move,
    Leave,
    Down,
    Up,
}

const POINTER_EVENTS: [(&str, PointerKind); 5] = [
    ("pointerenter", PointerKind::Enter),
    ("pointermove", PointerKind::Move),
    ("pointerleave", PointerKind::Leave),
    ("pointerdown", PointerKind::Down),
    ("pointerup", PointerKind::Up),
];

/// Wire pointer tracking onto every mounted magnetic control. Nothing here
/// prevents default handling, so clicks and keyboard activation are unaffected.
pub fn wire_magnetic_handlers(state: &Rc<RefCell<PageState>>) -> Vec<Listener> {
    let targets: Vec<web::EventTarget> = state
        .borrow()
        .magnets
        .iter()
        .map(|m| m.el.clone().into())
        .collect();

    let mut listeners = Vec::with_capacity(targets.len() * POINTER_EVENTS.len());
    for (index, target) in targets.iter().enumerate() {
        for (name, kind) in POINTER_EVENTS {
            let state = state.clone();
            let listener = Listener::new(target, name, move |ev: web::Event| {
                let Ok(mut page) = state.try_borrow_mut() else {
                    return;
                };
                let Some(control) = page.magnets.get_mut(index) else {
                    return;
                };
                match kind {
                    PointerKind::Enter => control.button.on_pointer_enter(),
                    PointerKind::Move => {
                        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                            let rect = dom::client_rect(&control.el);
                            control.button.on_pointer_move(pointer, rect);
                        }
                    }
                    PointerKind::Leave => control.button.on_pointer_leave(),
                    PointerKind::Down => control.button.on_pointer_down(),
                    PointerKind::Up => control.button.on_pointer_up(),
                }
            });
            match listener {
                Ok(l) => listeners.push(l),
                Err(e) => log::warn!("[magnetic] failed to listen for {}: {:?}", name, e),
            }
        }
    }
    if !listeners.is_empty() {
        log::info!("[magnetic] tracking {} controls", targets.len());
    }
    listeners
}
