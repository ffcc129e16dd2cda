use crate::dom;
use crate::frame::{self, FrameSlot};
use folio_core::parallax::*;
use folio_core::PARALLAX_SMALL_SCREEN_QUERY;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub fn init_home_scroll_effects(window: &web::Window, document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    if body.dataset().get("page").as_deref() != Some(HOME_PAGE) {
        return;
    }
    // Small screens and reduced motion keep a static layout.
    if dom::prefers_reduced_motion(window) || dom::media_matches(window, PARALLAX_SMALL_SCREEN_QUERY)
    {
        return;
    }

    let hero = dom::query_html(document, HERO_SELECTOR);
    let sections = dom::query_all_html(document, SECTION_SELECTOR);
    let factors = layer_factors(hero.is_some(), sections.len());
    if factors.is_empty() {
        return;
    }
    let layers: Vec<web::HtmlElement> = hero.into_iter().chain(sections).collect();
    let scroll = Rc::new(RefCell::new(ParallaxScroll::new(
        dom::scroll_y(window, document),
        factors,
    )));

    let tick = FrameSlot::new();
    {
        let scroll = scroll.clone();
        let tick_clone = tick.clone();
        tick.set(Closure::wrap(Box::new(move || {
            let (offsets, more) = scroll.borrow_mut().step();
            for (el, offset) in layers.iter().zip(offsets) {
                dom::set_style(el, "transform", &layer_transform(offset));
            }
            if more {
                frame::request_frame(&tick_clone);
            }
        }) as Box<dyn FnMut()>));
    }

    let on_scroll = {
        let window = window.clone();
        let document = document.clone();
        Rc::new(move || {
            let y = dom::scroll_y(&window, &document);
            if scroll.borrow_mut().on_scroll(y) {
                frame::request_frame(&tick);
            }
        })
    };
    {
        let on_scroll = on_scroll.clone();
        dom::listen(window, "scroll", move |_: web::Event| on_scroll());
    }
    // Page may load already scrolled.
    on_scroll();
    log::debug!("[parallax] home scroll lag active");
}
