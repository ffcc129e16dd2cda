use crate::dom;
use folio_core::chrome::*;
use folio_core::PAGE_EXIT_DELAY_MS;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub fn set_year_stamp(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ELEMENT_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year_text(year)));
    }
}

async fn sleep_ms(ms: i32) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

async fn navigate_after_exit(href: String) -> anyhow::Result<()> {
    sleep_ms(PAGE_EXIT_DELAY_MS).await?;
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    window
        .location()
        .set_href(&href)
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

pub fn init_page_transitions(window: &web::Window, document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    let plan = TransitionPlan::for_motion(dom::prefers_reduced_motion(window));
    _ = body.class_list().add_1(plan.body_class);
    if !plan.intercept_links {
        return;
    }

    let links = dom::query_all_html(document, TRANSITION_LINK_SELECTOR);
    for link in links {
        let body = body.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |ev: web::MouseEvent| {
            let click = ClickModifiers {
                meta: ev.meta_key(),
                ctrl: ev.ctrl_key(),
                shift: ev.shift_key(),
                alt: ev.alt_key(),
                button: ev.button(),
            };
            let href = anchor.get_attribute("href");
            let Some(target) = transition_target(click, href.as_deref()) else {
                return;
            };
            ev.prevent_default();
            _ = body.class_list().add_1(PAGE_EXIT_CLASS);
            let target = target.to_string();
            spawn_local(async move {
                if let Err(e) = navigate_after_exit(target).await {
                    log::error!("[transition] navigation failed: {:?}", e);
                }
            });
        });
    }
}

fn scroll_metrics(window: &web::Window, document: &web::Document) -> ScrollMetrics {
    let scroll_height = document
        .document_element()
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    ScrollMetrics {
        scroll_top: dom::scroll_y(window, document),
        scroll_height,
        viewport_height,
    }
}

pub fn init_scroll_progress(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let bar = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    bar.set_class_name(PROGRESS_BAR_CLASS);
    body.append_child(&bar)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let reduced = dom::prefers_reduced_motion(window);
    let update = {
        let window = window.clone();
        let document = document.clone();
        Rc::new(move || {
            let width = scroll_progress(scroll_metrics(&window, &document), reduced);
            dom::set_style(&bar, "width", &width.to_string());
        })
    };
    for event in ["scroll", "resize"] {
        let update = update.clone();
        dom::listen(window, event, move |_: web::Event| update());
    }
    update();
    Ok(())
}
