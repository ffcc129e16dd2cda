use folio_core::{run_tick, CallbackSlot, FrameCallback, FrameLoop, Tick};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Holder for a self-rescheduling requestAnimationFrame callback.
pub type FrameSlot = CallbackSlot<Closure<dyn FnMut()>>;

pub fn request_frame(slot: &FrameSlot) {
    if let Some(w) = web::window() {
        slot.with(|cb| {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        });
    }
}

/// Runs `frame` once per animation frame while `frames` is running. Once
/// stopped the closure empties its own slot, which frees it and whatever
/// `frame` captured after the current invocation returns.
pub fn run_frame_loop(mut frame: FrameCallback, frames: FrameLoop) {
    let tick = FrameSlot::new();
    let tick_clone = tick.clone();
    tick.set(Closure::wrap(Box::new(move || {
        match run_tick(&frames, &mut frame) {
            Tick::Reschedule => request_frame(&tick_clone),
            Tick::Release => drop(tick_clone.take()),
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
