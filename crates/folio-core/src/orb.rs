//! Glass orb visual state.
//!
//! Input handlers write `target` directly; the per-frame step eases `current`
//! toward it and is the only writer of `current`. Nothing here reads the clock
//! or the DOM, so the whole interpolator is driven by explicit calls.

use crate::config::{ConfigError, OrbConfig};
use crate::math::{css_number, lerp, Rect};
use crate::platform::Surface;
use glam::DVec2;

pub const HIGHLIGHT_X_PROPERTY: &str = "--hx";
pub const HIGHLIGHT_Y_PROPERTY: &str = "--hy";
pub const GLOW_PROPERTY: &str = "--glow";

/// The six animated parameters of the orb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualParams {
    /// Highlight position, percent of the orb box.
    pub highlight_x: f64,
    pub highlight_y: f64,
    /// Glow spread in px.
    pub glow_radius: f64,
    /// Rotation in degrees.
    pub tilt_x: f64,
    pub tilt_y: f64,
    /// Parallax offset in px.
    pub translate_y: f64,
}

impl VisualParams {
    pub fn resting(config: &OrbConfig) -> Self {
        Self {
            highlight_x: config.rest_highlight_x,
            highlight_y: config.rest_highlight_y,
            glow_radius: config.rest_glow_px,
            tilt_x: 0.0,
            tilt_y: 0.0,
            translate_y: 0.0,
        }
    }
}

impl Default for VisualParams {
    fn default() -> Self {
        Self::resting(&OrbConfig::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbState {
    pub target: VisualParams,
    pub current: VisualParams,
    config: OrbConfig,
}

impl Default for OrbState {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbState {
    pub fn new() -> Self {
        Self::from_valid_config(OrbConfig::default())
    }

    pub fn with_config(config: OrbConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: OrbConfig) -> Self {
        let rest = VisualParams::resting(&config);
        Self {
            target: rest,
            current: rest,
            config,
        }
    }

    pub fn config(&self) -> &OrbConfig {
        &self.config
    }

    /// Retargets highlight, glow and tilt from a pointer position in viewport
    /// coordinates. Samples taken while the orb has no extent are dropped.
    ///
    /// Pointers outside the orb box extrapolate past the 25..75 highlight
    /// range; the mapping is linear everywhere and nothing is clamped.
    pub fn on_pointer_move(&mut self, rect: Rect, pointer: DVec2) {
        let Some(n) = rect.centered_offset(pointer) else {
            return;
        };
        let c = &self.config;
        self.target.highlight_x = c.highlight_center + n.x * c.highlight_span;
        self.target.highlight_y = c.highlight_center + n.y * c.highlight_span;
        self.target.glow_radius = c.glow_min_px + (1.0 - (n.y + 1.0) / 2.0) * c.glow_span_px;
        self.target.tilt_y = n.x * c.tilt_max_deg;
        self.target.tilt_x = -n.y * c.tilt_max_deg;
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        let y = scroll_y.min(self.config.scroll_clamp_px);
        self.target.translate_y = y * self.config.parallax_factor;
    }

    /// One animation frame: ease every current value toward its target.
    pub fn step(&mut self) {
        let (t, c) = (&self.target, &mut self.current);
        let hs = self.config.highlight_smoothing;
        let ms = self.config.motion_smoothing;
        c.highlight_x = lerp(c.highlight_x, t.highlight_x, hs);
        c.highlight_y = lerp(c.highlight_y, t.highlight_y, hs);
        c.glow_radius = lerp(c.glow_radius, t.glow_radius, ms);
        c.tilt_x = lerp(c.tilt_x, t.tilt_x, ms);
        c.tilt_y = lerp(c.tilt_y, t.tilt_y, ms);
        c.translate_y = lerp(c.translate_y, t.translate_y, ms);
    }

    pub fn style(&self) -> OrbStyle {
        OrbStyle::from_params(&self.current)
    }
}

/// Rendered form of the current parameters, ready to hand to a style sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrbStyle {
    pub highlight_x: String,
    pub highlight_y: String,
    pub glow: String,
    pub transform: String,
}

impl OrbStyle {
    pub fn from_params(p: &VisualParams) -> Self {
        Self {
            highlight_x: format!("{:.2}", p.highlight_x + 0.0),
            highlight_y: format!("{:.2}", p.highlight_y + 0.0),
            glow: format!("{}px", css_number(p.glow_radius.round())),
            transform: compose_transform(p.translate_y, p.tilt_x, p.tilt_y),
        }
    }

    pub fn apply<S: Surface + ?Sized>(&self, surface: &S) {
        surface.set_style_property(HIGHLIGHT_X_PROPERTY, &self.highlight_x);
        surface.set_style_property(HIGHLIGHT_Y_PROPERTY, &self.highlight_y);
        surface.set_style_property(GLOW_PROPERTY, &self.glow);
        surface.set_transform(&self.transform);
    }
}

/// Translation first, then rotation about X, then about Y.
pub fn compose_transform(translate_y: f64, rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "translateY({}px) rotateX({}deg) rotateY({}deg)",
        css_number(translate_y),
        css_number(rotate_x),
        css_number(rotate_y)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Rect {
        Rect::new(0.0, 0.0, 200.0, 200.0)
    }

    #[test]
    fn starts_at_rest_with_current_equal_target() {
        let s = OrbState::new();
        assert_eq!(s.target, s.current);
        assert_eq!(s.current.highlight_x, 30.0);
        assert_eq!(s.current.highlight_y, 25.0);
        assert_eq!(s.current.glow_radius, 24.0);
        assert_eq!(s.current.translate_y, 0.0);
    }

    #[test]
    fn pointer_at_top_left_corner() {
        let mut s = OrbState::new();
        s.on_pointer_move(square(), DVec2::new(0.0, 0.0));
        assert_eq!(s.target.highlight_x, 25.0);
        assert_eq!(s.target.highlight_y, 25.0);
        assert_eq!(s.target.glow_radius, 34.0);
        assert_eq!(s.target.tilt_y, -6.0);
        assert_eq!(s.target.tilt_x, 6.0);
    }

    #[test]
    fn pointer_at_bottom_right_corner() {
        let mut s = OrbState::new();
        s.on_pointer_move(square(), DVec2::new(200.0, 200.0));
        assert_eq!(s.target.highlight_x, 75.0);
        assert_eq!(s.target.highlight_y, 75.0);
        assert_eq!(s.target.glow_radius, 22.0);
        assert_eq!(s.target.tilt_y, 6.0);
        assert_eq!(s.target.tilt_x, -6.0);
    }

    #[test]
    fn pointer_move_leaves_current_and_translation_alone() {
        let mut s = OrbState::new();
        let before = s.current;
        s.on_pointer_move(square(), DVec2::new(150.0, 20.0));
        assert_eq!(s.current, before);
        assert_eq!(s.target.translate_y, 0.0);
    }

    #[test]
    fn scroll_only_touches_translation() {
        let mut s = OrbState::new();
        s.on_scroll(100.0);
        assert_eq!(s.target.translate_y, 5.0);
        assert_eq!(s.target.highlight_x, 30.0);
        assert_eq!(s.current.translate_y, 0.0);
    }

    #[test]
    fn step_uses_per_field_smoothing() {
        let mut s = OrbState::new();
        s.target.highlight_x = 130.0;
        s.target.tilt_y = 10.0;
        s.step();
        assert!((s.current.highlight_x - 42.0).abs() < 1e-12);
        assert!((s.current.tilt_y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn style_formats_each_property() {
        let p = VisualParams {
            highlight_x: 42.123,
            highlight_y: 50.0,
            glow_radius: 27.6,
            tilt_x: 2.0,
            tilt_y: -3.0,
            translate_y: 5.0,
        };
        let style = OrbStyle::from_params(&p);
        assert_eq!(style.highlight_x, "42.12");
        assert_eq!(style.highlight_y, "50.00");
        assert_eq!(style.glow, "28px");
        assert_eq!(
            style.transform,
            "translateY(5px) rotateX(2deg) rotateY(-3deg)"
        );
    }

    #[test]
    fn glow_rounds_half_up() {
        let p = VisualParams {
            glow_radius: 22.5,
            ..VisualParams::default()
        };
        assert_eq!(OrbStyle::from_params(&p).glow, "23px");
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let cfg = OrbConfig {
            highlight_smoothing: 0.0,
            ..OrbConfig::default()
        };
        assert!(OrbState::with_config(cfg).is_err());
    }
}
