#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod chrome;
mod dom;
mod frame;
mod gallery;
mod orb;
mod parallax;
mod platform;
mod tilt;

pub use orb::stop_glass_orb;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = when_dom_ready(init) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Runs `f` now if the document has been parsed, otherwise on DOMContentLoaded.
fn when_dom_ready(f: fn() -> anyhow::Result<()>) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    if document.ready_state() != "loading" {
        return f();
    }
    dom::listen(&document, "DOMContentLoaded", move |_: web::Event| {
        if let Err(e) = f() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    chrome::set_year_stamp(&document);
    orb::init_glass_orb(&window, &document);
    if let Err(e) = gallery::init_work_reveal(&window, &document) {
        log::warn!("[gallery] reveal disabled: {:?}", e);
    }
    gallery::init_work_filters(&document);
    chrome::init_page_transitions(&window, &document);
    if let Err(e) = chrome::init_scroll_progress(&window, &document) {
        log::warn!("[chrome] scroll progress disabled: {:?}", e);
    }
    tilt::init_contact_card_tilt(&window, &document);
    parallax::init_home_scroll_effects(&window, &document);
    log::info!("folio-web ready");
    Ok(())
}
