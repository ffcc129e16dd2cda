use glam::DVec2;

/// Linear interpolation: moves `factor` of the remaining distance from `a` to `b`.
#[inline]
pub fn lerp(a: f64, b: f64, factor: f64) -> f64 {
    a + (b - a) * factor
}

/// Axis-aligned box in viewport (client) coordinates, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A box that is hidden or not laid out yet reports a zero extent.
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Offset of `point` from the box center, scaled so the box edges map to -1 and 1.
    /// `None` for an unmeasurable box.
    pub fn centered_offset(&self, point: DVec2) -> Option<DVec2> {
        if !self.is_measurable() {
            return None;
        }
        let half = DVec2::new(self.width / 2.0, self.height / 2.0);
        Some((point - self.center()) / half)
    }

    /// Position of `point` inside the box as a 0..1 fraction of each side.
    /// `None` for an unmeasurable box.
    pub fn fraction(&self, point: DVec2) -> Option<DVec2> {
        if !self.is_measurable() {
            return None;
        }
        let local = point - DVec2::new(self.left, self.top);
        Some(local / DVec2::new(self.width, self.height))
    }
}

/// Formats a number the way CSS text is usually written: shortest form,
/// no trailing `.0`, and never a negative zero.
#[inline]
pub fn css_number(v: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{}", v + 0.0)
}
