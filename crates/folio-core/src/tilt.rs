//! 3D hover tilt for contact cards.

use crate::constants::{CARD_LIFT_BASE_PX, CARD_LIFT_MAX_PX, CARD_TILT_MAX_DEG};
use crate::math::Rect;
use crate::orb::compose_transform;
use glam::DVec2;

pub const CONTACT_CARD_SELECTOR: &str = ".contact-card";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTilt {
    pub translate_y: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl CardTilt {
    /// Tilt toward the pointer and lift the card more the further the pointer
    /// is from its horizontal midline. `None` for a card with no extent.
    pub fn from_pointer(rect: Rect, pointer: DVec2) -> Option<Self> {
        let f = rect.fraction(pointer)?;
        let nx = f.x - 0.5;
        let ny = f.y - 0.5;
        Some(Self {
            translate_y: -ny.abs() * CARD_LIFT_MAX_PX - CARD_LIFT_BASE_PX,
            rotate_x: -ny * CARD_TILT_MAX_DEG,
            rotate_y: nx * CARD_TILT_MAX_DEG,
        })
    }

    pub fn transform(&self) -> String {
        compose_transform(self.translate_y, self.rotate_x, self.rotate_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_only_lifts() {
        let t = CardTilt::from_pointer(Rect::new(10.0, 10.0, 100.0, 50.0), DVec2::new(60.0, 35.0))
            .unwrap();
        assert_eq!(t.transform(), "translateY(-2px) rotateX(0deg) rotateY(0deg)");
    }

    #[test]
    fn corner_pointer_tilts_and_lifts_fully() {
        let t = CardTilt::from_pointer(Rect::new(0.0, 0.0, 100.0, 100.0), DVec2::new(100.0, 0.0))
            .unwrap();
        assert_eq!(t.rotate_x, 3.0);
        assert_eq!(t.rotate_y, 3.0);
        assert_eq!(t.translate_y, -5.0);
    }

    #[test]
    fn zero_sized_card_is_ignored() {
        assert!(CardTilt::from_pointer(Rect::default(), DVec2::ZERO).is_none());
    }
}
