use crate::constants::{BREAKPOINT_ATTR, NAV_LINK_SELECTOR};
use crate::contact;
use crate::dom::{self, Listener};
use crate::events::{self, ScrollAware};
use crate::frame::{self, Animated, FrameLoop};
use crate::hero::HeroSection;
use crate::magnetic::MagneticControl;
use crate::observer::Observer;
use crate::particles::ParticleCanvas;
use crate::process::ProcessSection;
use crate::reveal::RevealSet;
use glam::Vec2;
use site_core::routes::{Breakpoint, Route};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use web_sys as web;

/// Every animated component on the current page.
pub struct PageState {
    pub process: Option<ProcessSection>,
    pub hero: Option<HeroSection>,
    pub magnets: Vec<MagneticControl>,
    pub reveals: RevealSet,
    pub particles: Vec<ParticleCanvas>,
    breakpoint: Option<Breakpoint>,
}

impl PageState {
    fn mount(document: &web::Document) -> Self {
        Self {
            process: ProcessSection::mount(document),
            hero: HeroSection::mount(document),
            magnets: MagneticControl::mount_all(document),
            reveals: RevealSet::mount(document),
            particles: ParticleCanvas::mount_all(document),
            breakpoint: None,
        }
    }

    fn sync_breakpoint(&mut self, width: f32) {
        let bp = Breakpoint::from_width(width);
        if self.breakpoint == Some(bp) {
            return;
        }
        self.breakpoint = Some(bp);
        if let Some(body) = dom::window_document().and_then(|d| d.body()) {
            _ = body.set_attribute(BREAKPOINT_ATTR, bp.as_str());
        }
        log::debug!("[page] breakpoint {}", bp.as_str());
    }
}

impl ScrollAware for PageState {
    fn on_scroll(&mut self, scroll_y: f32) {
        if let Some(process) = self.process.as_mut() {
            process.on_scroll(scroll_y);
        }
        if let Some(hero) = self.hero.as_mut() {
            hero.on_scroll(scroll_y);
        }
        for p in &mut self.particles {
            p.on_scroll(scroll_y);
        }
    }

    fn on_resize(&mut self, viewport: Vec2, scroll_y: f32) {
        self.sync_breakpoint(viewport.x);
        if let Some(process) = self.process.as_mut() {
            process.on_resize(viewport, scroll_y);
        }
        if let Some(hero) = self.hero.as_mut() {
            hero.on_resize();
        }
    }
}

impl Animated for PageState {
    fn frame(&mut self, dt: Duration) {
        if let Some(process) = self.process.as_mut() {
            process.frame(dt);
        }
        if let Some(hero) = self.hero.as_mut() {
            hero.frame(dt);
        }
        for m in &mut self.magnets {
            m.frame(dt);
        }
        self.reveals.frame(dt);
        for p in &mut self.particles {
            p.frame(dt);
        }
    }
}

/// A mounted page. Dropping it removes every listener and observer it
/// installed and stops the frame loop.
pub struct Page {
    _state: Rc<RefCell<PageState>>,
    _listeners: Vec<Listener>,
    _observer: Option<Observer>,
    _frame_loop: FrameLoop,
}

fn observe_reveals(state: &Rc<RefCell<PageState>>) -> Option<Observer> {
    let thresholds = {
        let s = state.borrow();
        if s.reveals.elements().next().is_none() {
            return None;
        }
        s.reveals.thresholds()
    };
    let weak = Rc::downgrade(state);
    let observer = Observer::new(&thresholds, move |el, ratio| {
        let Some(state) = weak.upgrade() else {
            return false;
        };
        let Some(index) = RevealSet::index_of(el) else {
            return false;
        };
        match state.try_borrow_mut() {
            Ok(mut s) => s.reveals.on_intersection(index, ratio),
            Err(_) => true,
        }
    });
    match observer {
        Ok(observer) => {
            for el in state.borrow().reveals.elements() {
                observer.observe(el);
            }
            Some(observer)
        }
        Err(e) => {
            log::warn!("[reveal] no IntersectionObserver, showing content statically: {:?}", e);
            state.borrow_mut().reveals.show_all();
            None
        }
    }
}

/// Mark the navbar link for `current` with `aria-current="page"`.
fn mark_nav(document: &web::Document, current: Route) {
    let entry = current.nav_entry();
    for link in dom::query_all_doc(document, NAV_LINK_SELECTOR) {
        let target = link
            .get_attribute("href")
            .and_then(|href| Route::parse(&href).ok())
            .filter(|r| Route::nav().contains(r));
        if target == Some(entry) {
            _ = link.set_attribute("aria-current", "page");
        } else {
            _ = link.remove_attribute("aria-current");
        }
    }
}

impl Page {
    pub fn mount() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let route = window
            .location()
            .pathname()
            .ok()
            .and_then(|p| Route::parse(&p).ok());
        match route {
            Some(r) => {
                log::info!("[page] mounting {}", r);
                mark_nav(&document, r);
            }
            None => log::info!("[page] mounting unrouted page"),
        }

        let state = Rc::new(RefCell::new(PageState::mount(&document)));
        {
            let mut s = state.borrow_mut();
            s.sync_breakpoint(dom::viewport().x);
            s.on_scroll(dom::scroll_y());
        }

        let mut listeners = events::wire_window_listeners(&window, &state);
        listeners.extend(events::wire_magnetic_handlers(&state));
        listeners.extend(contact::wire_default_contact_form(&document));

        let observer = observe_reveals(&state);
        let frame_loop = frame::start_loop(state.clone());

        Ok(Self {
            _state: state,
            _listeners: listeners,
            _observer: observer,
            _frame_loop: frame_loop,
        })
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        log::info!("[page] unmounted");
    }
}
