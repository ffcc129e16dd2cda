// Interaction tuning constants shared by the core logic and the web frontend.

// Glass orb resting state (percentages of the orb box, glow in px)
pub const ORB_DEFAULT_HIGHLIGHT_X: f64 = 30.0;
pub const ORB_DEFAULT_HIGHLIGHT_Y: f64 = 25.0;
pub const ORB_DEFAULT_GLOW_PX: f64 = 24.0;

// Pointer mapping
pub const ORB_HIGHLIGHT_CENTER: f64 = 50.0;
pub const ORB_HIGHLIGHT_SPAN: f64 = 25.0; // 25..75 inside the box
pub const ORB_GLOW_MIN_PX: f64 = 22.0;
pub const ORB_GLOW_SPAN_PX: f64 = 12.0; // brighter toward the top
pub const ORB_TILT_MAX_DEG: f64 = 6.0;

// Scroll parallax
pub const ORB_SCROLL_CLAMP_PX: f64 = 240.0;
pub const ORB_PARALLAX_FACTOR: f64 = 0.05;

// Per-frame smoothing factors
pub const ORB_HIGHLIGHT_SMOOTHING: f64 = 0.12;
pub const ORB_MOTION_SMOOTHING: f64 = 0.10;

// Contact card tilt
pub const CARD_TILT_MAX_DEG: f64 = 6.0;
pub const CARD_LIFT_MAX_PX: f64 = 6.0;
pub const CARD_LIFT_BASE_PX: f64 = 2.0;

// Home page scroll lag
pub const PARALLAX_HERO_FACTOR: f64 = 0.16;
pub const PARALLAX_SECTION_BASE: f64 = 0.06;
pub const PARALLAX_SECTION_STEP: f64 = 0.02;
pub const PARALLAX_SMOOTHING: f64 = 0.14;
pub const PARALLAX_SETTLE_PX: f64 = 0.5;
pub const PARALLAX_SMALL_SCREEN_QUERY: &str = "(max-width: 700px)";

// Work gallery reveal
pub const REVEAL_THRESHOLD: f64 = 0.18;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

// Page transitions
pub const PAGE_EXIT_DELAY_MS: i32 = 220;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
