use crate::config::{ConfigError, OrbConfig};
use crate::orb::OrbState;
use crate::platform::{FrameLoop, Platform, Surface};
use std::cell::RefCell;
use std::rc::Rc;

/// A running glass orb: shared state plus the frame loop that renders it.
pub struct OrbHandle {
    state: Rc<RefCell<OrbState>>,
    frames: FrameLoop,
}

impl OrbHandle {
    /// Snapshot of the target and current parameters.
    pub fn state(&self) -> OrbState {
        *self.state.borrow()
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    /// Halts the frame loop. Input handlers stay registered but only move
    /// targets, so nothing is written to the surface afterwards.
    pub fn stop(&self) {
        self.frames.stop();
    }
}

/// Wires the orb with the default tuning.
///
/// Returns `None` without touching the platform further when there is no orb
/// element or the user prefers reduced motion.
pub fn init_glass_orb<P: Platform>(platform: &P) -> Option<OrbHandle> {
    wire(platform, OrbState::new())
}

pub fn init_glass_orb_with<P: Platform>(
    platform: &P,
    config: OrbConfig,
) -> Result<Option<OrbHandle>, ConfigError> {
    let state = OrbState::with_config(config)?;
    Ok(wire(platform, state))
}

fn wire<P: Platform>(platform: &P, state: OrbState) -> Option<OrbHandle> {
    let Some(surface) = platform.find_orb() else {
        log::debug!("[orb] no orb element; skipping");
        return None;
    };
    if platform.prefers_reduced_motion() {
        log::debug!("[orb] reduced motion preferred; skipping");
        return None;
    }

    let surface = Rc::new(surface);
    let state = Rc::new(RefCell::new(state));

    {
        let state = state.clone();
        let surface = surface.clone();
        platform.on_pointer_move(Box::new(move |pointer| {
            let rect = surface.bounding_rect();
            state.borrow_mut().on_pointer_move(rect, pointer);
        }));
    }
    {
        let state = state.clone();
        platform.on_scroll(Box::new(move |scroll_y| {
            state.borrow_mut().on_scroll(scroll_y);
        }));
    }

    let frames = {
        let state = state.clone();
        platform.start_frame_loop(Box::new(move || {
            let style = {
                let mut s = state.borrow_mut();
                s.step();
                s.style()
            };
            style.apply(surface.as_ref());
        }))
    };
    log::info!("[orb] glass orb running");

    Some(OrbHandle { state, frames })
}

