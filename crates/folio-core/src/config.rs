//! Tuning for the glass orb interpolator.
//!
//! The defaults reproduce the site's shipped feel; tests and experiments can
//! build a custom [`OrbConfig`] and validate it before handing it to the driver.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("smoothing factor `{name}` must be in (0, 1], got {value}")]
    SmoothingOutOfRange { name: &'static str, value: f64 },
    #[error("`{name}` must be finite and non-negative, got {value}")]
    NegativeOrNonFinite { name: &'static str, value: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbConfig {
    pub rest_highlight_x: f64,
    pub rest_highlight_y: f64,
    pub rest_glow_px: f64,

    pub highlight_center: f64,
    pub highlight_span: f64,
    pub glow_min_px: f64,
    pub glow_span_px: f64,
    pub tilt_max_deg: f64,

    pub scroll_clamp_px: f64,
    pub parallax_factor: f64,

    pub highlight_smoothing: f64,
    pub motion_smoothing: f64,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            rest_highlight_x: ORB_DEFAULT_HIGHLIGHT_X,
            rest_highlight_y: ORB_DEFAULT_HIGHLIGHT_Y,
            rest_glow_px: ORB_DEFAULT_GLOW_PX,
            highlight_center: ORB_HIGHLIGHT_CENTER,
            highlight_span: ORB_HIGHLIGHT_SPAN,
            glow_min_px: ORB_GLOW_MIN_PX,
            glow_span_px: ORB_GLOW_SPAN_PX,
            tilt_max_deg: ORB_TILT_MAX_DEG,
            scroll_clamp_px: ORB_SCROLL_CLAMP_PX,
            parallax_factor: ORB_PARALLAX_FACTOR,
            highlight_smoothing: ORB_HIGHLIGHT_SMOOTHING,
            motion_smoothing: ORB_MOTION_SMOOTHING,
        }
    }
}

impl OrbConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("highlight_smoothing", self.highlight_smoothing),
            ("motion_smoothing", self.motion_smoothing),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::SmoothingOutOfRange { name, value });
            }
        }
        for (name, value) in [
            ("highlight_span", self.highlight_span),
            ("glow_span_px", self.glow_span_px),
            ("tilt_max_deg", self.tilt_max_deg),
            ("scroll_clamp_px", self.scroll_clamp_px),
            ("parallax_factor", self.parallax_factor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeOrNonFinite { name, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(OrbConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_and_oversized_smoothing() {
        let cfg = OrbConfig {
            motion_smoothing: 0.0,
            ..OrbConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::SmoothingOutOfRange {
                name: "motion_smoothing",
                ..
            })
        ));

        let cfg = OrbConfig {
            highlight_smoothing: 1.5,
            ..OrbConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_negative_or_nan_spans() {
        let cfg = OrbConfig {
            scroll_clamp_px: -1.0,
            ..OrbConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NegativeOrNonFinite {
                name: "scroll_clamp_px",
                value: -1.0
            })
        );

        let cfg = OrbConfig {
            glow_span_px: f64::NAN,
            ..OrbConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ConfigError::SmoothingOutOfRange {
            name: "motion_smoothing",
            value: 2.0,
        };
        assert_eq!(
            err.to_string(),
            "smoothing factor `motion_smoothing` must be in (0, 1], got 2"
        );
    }
}
