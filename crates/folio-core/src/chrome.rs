//! Page-level chrome: footer year, page transitions, scroll progress bar.

use std::fmt;

pub const YEAR_ELEMENT_ID: &str = "y";
pub const PAGE_ENTER_CLASS: &str = "page-enter";
pub const PAGE_EXIT_CLASS: &str = "page-exit";
pub const TRANSITION_LINK_SELECTOR: &str = r#"a[href$=".html"]:not([target="_blank"])"#;
pub const PROGRESS_BAR_CLASS: &str = "scroll-progress";

pub fn year_text(year: u32) -> String {
    year.to_string()
}

/// What page transitions do on load: the enter class always goes on the body,
/// link interception only when motion is allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionPlan {
    pub body_class: &'static str,
    pub intercept_links: bool,
}

impl TransitionPlan {
    pub fn for_motion(reduced_motion: bool) -> Self {
        Self {
            body_class: PAGE_ENTER_CLASS,
            intercept_links: !reduced_motion,
        }
    }
}

/// Modifier state of a link click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub button: i16,
}

impl ClickModifiers {
    /// Primary button with no modifier keys; anything else is the browser's
    /// (new tab, download, ...).
    pub fn is_plain_primary(&self) -> bool {
        !(self.meta || self.ctrl || self.shift || self.alt) && self.button == 0
    }
}

/// The href to navigate to after the exit animation, or `None` when the click
/// should be left to the browser.
pub fn transition_target(click: ClickModifiers, href: Option<&str>) -> Option<&str> {
    if !click.is_plain_primary() {
        return None;
    }
    href.filter(|h| !h.is_empty() && !h.starts_with('#'))
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

/// Inline width of the progress bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProgressWidth {
    Collapsed,
    Percent(f64),
}

impl fmt::Display for ProgressWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressWidth::Collapsed => f.write_str("0"),
            ProgressWidth::Percent(p) => write!(f, "{}%", crate::math::css_number(*p)),
        }
    }
}

pub fn scroll_progress(metrics: ScrollMetrics, reduced_motion: bool) -> ProgressWidth {
    if reduced_motion {
        return ProgressWidth::Collapsed;
    }
    let scrollable = metrics.scroll_height - metrics.viewport_height;
    let progress = if scrollable > 0.0 {
        metrics.scroll_top / scrollable * 100.0
    } else {
        0.0
    };
    ProgressWidth::Percent(progress)
}
