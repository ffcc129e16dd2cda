use folio_core::{Rect, REDUCED_MOTION_QUERY};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("addEventListener({event}) failed: {:?}", e);
    }
    closure.forget();
}

pub fn media_matches(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

#[inline]
pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    media_matches(window, REDUCED_MOTION_QUERY)
}

pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all_html(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Inline style write; an empty value removes the declaration.
#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    let _ = el.style().set_property(name, value);
}

/// `window.scrollY`, falling back to the root element's scrollTop.
pub fn scroll_y(window: &web::Window, document: &web::Document) -> f64 {
    let y = window.scroll_y().unwrap_or(0.0);
    if y != 0.0 {
        return y;
    }
    document
        .document_element()
        .map(|root| root.scroll_top() as f64)
        .unwrap_or(0.0)
}
