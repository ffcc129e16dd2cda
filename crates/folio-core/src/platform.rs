//! Seams between the interaction logic and whatever hosts it.
//!
//! The browser frontend implements these over `web_sys`; tests implement them
//! with plain recorders.

use crate::math::Rect;
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A styled element the core can measure and write to.
pub trait Surface {
    fn bounding_rect(&self) -> Rect;
    fn set_style_property(&self, name: &str, value: &str);
    fn set_transform(&self, value: &str);
}

pub type PointerHandler = Box<dyn FnMut(DVec2)>;
pub type ScrollHandler = Box<dyn FnMut(f64)>;
pub type FrameCallback = Box<dyn FnMut()>;

/// Everything the orb driver asks of its environment.
pub trait Platform {
    type Surface: Surface + 'static;

    fn find_orb(&self) -> Option<Self::Surface>;
    /// Sampled once per feature initialization.
    fn prefers_reduced_motion(&self) -> bool;
    /// `handler` receives the pointer position in viewport coordinates.
    fn on_pointer_move(&self, handler: PointerHandler);
    /// `handler` receives the vertical scroll offset.
    fn on_scroll(&self, handler: ScrollHandler);
    /// Runs `frame` once per display frame until the returned loop is stopped.
    fn start_frame_loop(&self, frame: FrameCallback) -> FrameLoop;
}

/// Shared run flag for a self-rescheduling frame loop. Clones observe the
/// same flag; the loop checks it before every step and before rescheduling.
#[derive(Clone, Debug)]
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn stop(&self) {
        self.running.set(false);
    }
}

/// What a frame loop does after one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Reschedule,
    /// The loop was stopped; drop the callback so everything it captured is freed.
    Release,
}

/// Runs one step of a stoppable loop. `frame` is skipped if the loop was
/// stopped between frames.
pub fn run_tick(frames: &FrameLoop, frame: &mut dyn FnMut()) -> Tick {
    if !frames.is_running() {
        return Tick::Release;
    }
    frame();
    if frames.is_running() {
        Tick::Reschedule
    } else {
        Tick::Release
    }
}

/// Shared holder for a self-rescheduling callback. The callback usually keeps
/// a clone of its own slot, so the cycle has to be broken with [`take`].
///
/// [`take`]: CallbackSlot::take
pub struct CallbackSlot<C> {
    inner: Rc<RefCell<Option<C>>>,
}

impl<C> Clone for CallbackSlot<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C> Default for CallbackSlot<C> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }
}

impl<C> CallbackSlot<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, callback: C) {
        *self.inner.borrow_mut() = Some(callback);
    }

    pub fn take(&self) -> Option<C> {
        self.inner.borrow_mut().take()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_none()
    }

    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> Option<R> {
        self.inner.borrow().as_ref().map(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Weak;

    #[test]
    fn tick_skips_frame_once_stopped() {
        let frames = FrameLoop::new();
        let mut calls = 0;
        assert_eq!(run_tick(&frames, &mut || calls += 1), Tick::Reschedule);
        frames.stop();
        assert_eq!(run_tick(&frames, &mut || calls += 1), Tick::Release);
        assert_eq!(calls, 1);
    }

    #[test]
    fn stop_during_frame_releases_after_it() {
        let frames = FrameLoop::new();
        let inner = frames.clone();
        assert_eq!(run_tick(&frames, &mut || inner.stop()), Tick::Release);
    }

    #[test]
    fn releasing_a_self_referencing_slot_frees_captures() {
        let slot: CallbackSlot<Box<dyn FnMut()>> = CallbackSlot::new();
        let captured = Rc::new(());
        let weak: Weak<()> = Rc::downgrade(&captured);
        {
            let own_slot = slot.clone();
            slot.set(Box::new(move || {
                let _ = (&own_slot, &captured);
            }));
        }
        assert!(weak.upgrade().is_some());
        assert!(slot.take().is_some());
        assert!(slot.is_empty());
        assert!(weak.upgrade().is_none());
    }
}
