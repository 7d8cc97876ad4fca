#![forbid(unsafe_code)]

//! Perceptual color foundation: ARGB, CAM16, HCT, contrast, and tonal palettes.

pub mod argb;
pub mod blend;
pub mod cam16;
pub mod contrast;
pub mod dislike;
pub mod hct;
pub mod logging;
pub mod math;
pub mod palette;
pub mod solver;
pub mod temperature;
pub mod viewing;

pub use argb::Argb;
pub use cam16::Cam16;
pub use hct::Hct;
pub use palette::TonalPalette;
pub use viewing::ViewingConditions;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace};
