use crate::{dom, frame};
use folio_core::{
    FrameCallback, FrameLoop, Platform, PointerHandler, Rect, ScrollHandler, Surface,
};
use glam::DVec2;
use web_sys as web;

pub const ORB_SELECTOR: &str = ".glass-orb";

/// An element whose inline style the core writes to.
pub struct ElementSurface(web::HtmlElement);

impl Surface for ElementSurface {
    fn bounding_rect(&self) -> Rect {
        dom::rect_of(&self.0)
    }

    fn set_style_property(&self, name: &str, value: &str) {
        dom::set_style(&self.0, name, value);
    }

    fn set_transform(&self, value: &str) {
        dom::set_style(&self.0, "transform", value);
    }
}

/// The browser window as seen by the orb driver.
pub struct WebPlatform {
    window: web::Window,
    document: web::Document,
}

impl WebPlatform {
    pub fn new(window: &web::Window, document: &web::Document) -> Self {
        Self {
            window: window.clone(),
            document: document.clone(),
        }
    }
}

impl Platform for WebPlatform {
    type Surface = ElementSurface;

    fn find_orb(&self) -> Option<ElementSurface> {
        dom::query_html(&self.document, ORB_SELECTOR).map(ElementSurface)
    }

    fn prefers_reduced_motion(&self) -> bool {
        dom::prefers_reduced_motion(&self.window)
    }

    fn on_pointer_move(&self, mut handler: PointerHandler) {
        dom::listen(&self.window, "mousemove", move |ev: web::MouseEvent| {
            handler(DVec2::new(ev.client_x() as f64, ev.client_y() as f64));
        });
    }

    fn on_scroll(&self, mut handler: ScrollHandler) {
        let window = self.window.clone();
        dom::listen(&self.window, "scroll", move |_: web::Event| {
            handler(window.scroll_y().unwrap_or(0.0));
        });
    }

    fn start_frame_loop(&self, frame: FrameCallback) -> FrameLoop {
        let frames = FrameLoop::new();
        frame::run_frame_loop(frame, frames.clone());
        frames
    }
}
