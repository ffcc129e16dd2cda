//! Home page scroll lag: hero and sections trail the scroll position at
//! slightly different rates.

use crate::constants::*;
use crate::math::{css_number, lerp};

pub const HOME_PAGE: &str = "home";
pub const HERO_SELECTOR: &str = ".hero";
pub const SECTION_SELECTOR: &str = ".home-section";

/// Lag factor per layer: the hero first (if present), then each section.
pub fn layer_factors(has_hero: bool, section_count: usize) -> Vec<f64> {
    let hero = has_hero.then_some(PARALLAX_HERO_FACTOR);
    hero.into_iter()
        .chain((0..section_count).map(|i| PARALLAX_SECTION_BASE + i as f64 * PARALLAX_SECTION_STEP))
        .collect()
}

/// Smoothed scroll position with an on-demand frame loop. Unlike the orb it
/// parks itself once settled and is woken by the next scroll.
#[derive(Clone, Debug)]
pub struct ParallaxScroll {
    target: f64,
    current: f64,
    ticking: bool,
    factors: Vec<f64>,
}

impl ParallaxScroll {
    pub fn new(initial_scroll: f64, factors: Vec<f64>) -> Self {
        Self {
            target: initial_scroll,
            current: initial_scroll,
            ticking: false,
            factors,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn is_ticking(&self) -> bool {
        self.ticking
    }

    /// Records the new scroll offset. Returns `true` when the caller must
    /// request a frame, i.e. the loop was parked.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.target = scroll_y;
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// One frame. Returns per-layer offsets in px and whether another frame
    /// is needed; when it is not, the loop is parked.
    pub fn step(&mut self) -> (Vec<f64>, bool) {
        self.current = lerp(self.current, self.target, PARALLAX_SMOOTHING);
        let offsets = self.factors.iter().map(|f| -self.current * f).collect();
        let more = (self.target - self.current).abs() > PARALLAX_SETTLE_PX;
        if !more {
            self.ticking = false;
        }
        (offsets, more)
    }
}

pub fn layer_transform(offset: f64) -> String {
    format!("translateY({}px)", css_number(offset))
}
