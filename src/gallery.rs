use crate::dom;
use folio_core::gallery::*;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn apply(el: &web::Element, op: CardClassOp) {
    let classes = el.class_list();
    match op {
        CardClassOp::Add(class) => {
            _ = classes.add_1(class);
        }
        CardClassOp::Swap(swap) => {
            _ = classes.remove_1(swap.remove);
            _ = classes.add_1(swap.add);
        }
    }
}

pub fn init_work_reveal(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let cards = dom::query_all_html(document, CARD_SELECTOR);
    if cards.is_empty() {
        return Ok(());
    }
    let plan = RevealPlan::for_motion(dom::prefers_reduced_motion(window));
    let on_load = plan.on_load();
    for card in &cards {
        for op in &on_load {
            apply(card, *op);
        }
    }
    let RevealPlan::OnIntersect {
        threshold,
        root_margin,
    } = plan
    else {
        return Ok(());
    };

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if let Some(action) = on_intersect(entry.is_intersecting()) {
                    let target = entry.target();
                    apply(&target, CardClassOp::Swap(action.swap));
                    if action.unobserve {
                        observer.unobserve(&target);
                    }
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    for card in &cards {
        observer.observe(card);
    }
    callback.forget();
    log::debug!("[gallery] observing {} cards", cards.len());
    Ok(())
}

pub fn init_work_filters(document: &web::Document) {
    let filters = dom::query_all_html(document, FILTER_SELECTOR);
    let cards = dom::query_all_html(document, CARD_SELECTOR);
    if filters.is_empty() || cards.is_empty() {
        return;
    }
    let filters = Rc::new(filters);
    let cards = Rc::new(cards);

    for (index, btn) in filters.iter().enumerate() {
        let filters = filters.clone();
        let cards = cards.clone();
        let clicked = btn.clone();
        dom::listen(btn, "click", move |_: web::Event| {
            let active = active_flags(index, filters.len());
            for (b, on) in filters.iter().zip(active) {
                _ = b.class_list().toggle_with_force(FILTER_ACTIVE_CLASS, on);
            }
            let sel = FilterSelection::from_attr(clicked.dataset().get("filter").as_deref());
            for card in cards.iter() {
                let cats = card.dataset().get("cat");
                dom::set_style(card, "display", sel.display_for(cats.as_deref()));
            }
        });
    }
}
