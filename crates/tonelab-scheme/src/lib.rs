#![forbid(unsafe_code)]

//! Dynamic color resolution: roles, contrast curves, and per-version role
//! tables.
//!
//! A [`DynamicScheme`] pairs a seed color with a variant, a light or dark
//! mode, a contrast preference, and six tonal palettes. Every color role is
//! defined by a [`DynamicColor`] in the role table for the scheme's spec
//! version, and resolves to a tone that honors the role's contrast curve
//! against its background plus any tone-delta anchoring to a sibling role.
//!
//! ```
//! use tonelab_hct::Hct;
//! use tonelab_scheme::{DynamicScheme, Role, Variant};
//!
//! let scheme = DynamicScheme::builder(Hct::from(280.0, 40.0, 50.0))
//!     .variant(Variant::TonalSpot)
//!     .dark(true)
//!     .build();
//! assert_eq!(scheme.tone(Role::Primary), 80.0);
//! ```

pub mod contrast_curve;
pub mod dynamic_color;
pub mod logging;
pub mod palettes;
pub mod resolver;
pub mod role;
pub mod scheme;
pub mod tables;
pub mod tone_delta_pair;
pub mod tone_search;
pub mod variant;
pub mod version;

pub use contrast_curve::ContrastCurve;
pub use dynamic_color::DynamicColor;
pub use role::Role;
pub use scheme::{DynamicScheme, DynamicSchemeBuilder};
pub use tone_delta_pair::{DeltaConstraint, ToneDeltaPair, TonePolarity};
pub use variant::Variant;
pub use version::{Platform, SpecVersion};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
