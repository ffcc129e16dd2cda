//! Platform-free interaction logic for the folio portfolio site.
//!
//! Nothing in here touches the DOM. The web frontend implements the
//! [`Platform`] and [`Surface`] seams and forwards browser events; the
//! same code runs unchanged under host-side tests with a fake platform.

pub mod chrome;
pub mod config;
pub mod constants;
pub mod driver;
pub mod gallery;
pub mod math;
pub mod orb;
pub mod parallax;
pub mod platform;
pub mod tilt;

pub use config::*;
pub use constants::*;
pub use driver::*;
pub use math::*;
pub use orb::*;
pub use platform::*;
