use crate::dom;
use folio_core::tilt::{CardTilt, CONTACT_CARD_SELECTOR};
use glam::DVec2;
use web_sys as web;

pub fn init_contact_card_tilt(window: &web::Window, document: &web::Document) {
    let cards = dom::query_all_html(document, CONTACT_CARD_SELECTOR);
    if cards.is_empty() || dom::prefers_reduced_motion(window) {
        return;
    }

    for card in cards {
        let target = card.clone();
        dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
            let pointer = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
            if let Some(tilt) = CardTilt::from_pointer(dom::rect_of(&target), pointer) {
                dom::set_style(&target, "transform", &tilt.transform());
            }
        });
        let target = card.clone();
        dom::listen(&card, "mouseleave", move |_: web::Event| {
            dom::set_style(&target, "transform", "");
        });
    }
}
