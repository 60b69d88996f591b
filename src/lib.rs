#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod contact;
mod dom;
mod events;
mod frame;
mod hero;
mod layout;
mod magnetic;
mod observer;
mod overlay;
mod page;
mod particles;
mod process;
mod reveal;

thread_local! {
    static PAGE: RefCell<Option<page::Page>> = const { RefCell::new(None) };
}

/// One-time process-wide setup: panic hook and console logger. Safe to call
/// any number of times; only the first call does anything.
#[wasm_bindgen]
pub fn init() {
    static INITIALIZED: AtomicBool = AtomicBool::new(false);
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");
}

/// Resolve once the DOM is parsed.
async fn document_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let doc = document.clone();
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init();
    spawn_local(async move {
        let Some(document) = dom::window_document() else {
            log::warn!("no document; page stays static");
            return;
        };
        if let Err(e) = document_ready(&document).await {
            log::error!("init error: {:?}", e);
            return;
        }
        mount_page();
    });
    Ok(())
}

/// Mount animations onto the current document, replacing any mounted page.
#[wasm_bindgen]
pub fn mount_page() {
    init();
    unmount_page();
    match page::Page::mount() {
        Ok(p) => PAGE.with(|slot| *slot.borrow_mut() = Some(p)),
        Err(e) => log::error!("init error: {:?}", e),
    }
}

/// Tear down every listener, observer and the frame loop, e.g. before a
/// client-side navigation swaps the page content.
#[wasm_bindgen]
pub fn unmount_page() {
    let page = PAGE.with(|slot| slot.borrow_mut().take());
    drop(page);
}
