use anyhow::anyhow;
use glam::Vec2;
use site_core::magnetic::Rect;
use site_core::ElementStyle;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn query(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_doc(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

fn collect(list: Result<web::NodeList, wasm_bindgen::JsValue>) -> Vec<web::HtmlElement> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    collect(root.query_selector_all(selector))
}

pub fn query_all_doc(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    collect(document.query_selector_all(selector))
}

/// Viewport size in CSS pixels.
pub fn viewport() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Vec2::new(px(w.inner_width()), px(w.inner_height()))
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Client rect of `el`, in viewport pixels.
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

/// Distance from the top of the document to the top of `el`.
pub fn document_top(el: &web::Element) -> f32 {
    el.get_bounding_client_rect().top() as f32 + scroll_y()
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn apply_style(el: &web::HtmlElement, style: &ElementStyle) {
    let css = el.style();
    _ = css.set_property("opacity", &style.css_opacity());
    _ = css.set_property("transform", &style.to_css_transform());
}

/// Copy `data-*` attributes named in `names` that are present on `el`.
pub fn data_attrs(el: &web::Element, names: &[&'static str]) -> Vec<(&'static str, String)> {
    names
        .iter()
        .filter_map(|name| el.get_attribute(name).map(|v| (*name, v)))
        .collect()
}

/// Keep the canvas backing store at CSS size times device pixel ratio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> f32 {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let w = ((rect.width() * dpr).round() as u32).max(1);
    let h = ((rect.height() * dpr).round() as u32).max(1);
    if canvas.width() != w || canvas.height() != h {
        canvas.set_width(w);
        canvas.set_height(h);
    }
    dpr as f32
}

/// An event listener that is removed when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new<F>(target: &web::EventTarget, kind: &'static str, f: F) -> anyhow::Result<Self>
    where
        F: FnMut(web::Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(f) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("{:?}", e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
