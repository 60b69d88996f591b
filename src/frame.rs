use crate::layout::clamp_frame_dt;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Anything advanced once per animation frame.
pub trait Animated {
    fn frame(&mut self, dt: Duration);
}

pub struct FrameContext<A: Animated> {
    pub target: Rc<RefCell<A>>,
    pub last_instant: Instant,
}

impl<A: Animated> FrameContext<A> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = clamp_frame_dt(now - self.last_instant);
        self.last_instant = now;
        // Skipped while an event handler holds the state.
        if let Ok(mut target) = self.target.try_borrow_mut() {
            target.frame(dt);
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running `requestAnimationFrame` loop; dropping it stops the loop.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
}

fn request(tick: &Tick) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop<A: Animated + 'static>(target: Rc<RefCell<A>>) -> FrameLoop {
    let mut ctx = FrameContext {
        target,
        last_instant: Instant::now(),
    };
    let tick: Tick = Rc::new(RefCell::new(None));
    let handle = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        ctx.frame();
        handle_tick.set(request(&tick_clone));
    }) as Box<dyn FnMut()>));
    handle.set(request(&tick));

    FrameLoop { tick, handle }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(w), Some(id)) = (web::window(), self.handle.take()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself.
        self.tick.borrow_mut().take();
    }
}
