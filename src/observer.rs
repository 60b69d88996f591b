use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type Callback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// An `IntersectionObserver` that disconnects when dropped.
pub struct Observer {
    observer: web::IntersectionObserver,
    _callback: Callback,
}

impl Observer {
    /// `on_entry` receives each changed target and its intersection ratio,
    /// and returns whether the target should stay observed.
    pub fn new<F>(thresholds: &[f32], mut on_entry: F) -> anyhow::Result<Self>
    where
        F: FnMut(&web::Element, f32) -> bool + 'static,
    {
        let callback: Callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if !on_entry(&target, entry.intersection_ratio() as f32) {
                        observer.unobserve(&target);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let steps: js_sys::Array = thresholds
            .iter()
            .map(|t| JsValue::from_f64(*t as f64))
            .collect();
        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&steps);
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, el: &web::Element) {
        self.observer.observe(el);
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
