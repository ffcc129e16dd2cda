use crate::platform::WebPlatform;
use folio_core::OrbHandle;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

thread_local! {
    static ORB: RefCell<Option<OrbHandle>> = const { RefCell::new(None) };
}

pub fn init_glass_orb(window: &web::Window, document: &web::Document) {
    let platform = WebPlatform::new(window, document);
    if let Some(handle) = folio_core::init_glass_orb(&platform) {
        ORB.with(|orb| *orb.borrow_mut() = Some(handle));
    }
}

/// Halts the orb animation, e.g. before the host page tears the element down.
#[wasm_bindgen]
pub fn stop_glass_orb() {
    ORB.with(|orb| {
        if let Some(handle) = orb.borrow_mut().take() {
            handle.stop();
            log::info!("[orb] stopped");
        }
    });
}
