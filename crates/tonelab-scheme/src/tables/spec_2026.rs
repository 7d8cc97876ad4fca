#![forbid(unsafe_code)]

//! Source-anchored role overrides.
//!
//! Accent tones track the seed color directly (clamped into per-role bands)
//! instead of searching the palette, and surfaces gain a single flat chroma
//! multiplier. Only chroma-formula schemes resolve against this table; the
//! scheme builder downgrades every other variant to an earlier version, so
//! the non-matching arms below are never reached.

use std::sync::Arc;

use tonelab_hct::Hct;

use crate::contrast_curve::curve_for_default_contrast;
use crate::dynamic_color::DynamicColor;
use crate::resolver::highest_surface;
use crate::role::Role;
use crate::tone_delta_pair::{DeltaConstraint, ToneDeltaPair, TonePolarity};
use crate::tone_search::{t_max_c, t_min_c};
use crate::variant::Variant;

/// The override layered over the composed 2025 definition, or `None` for
/// roles these rules leave untouched.
pub(super) fn override_for(role: Role) -> Option<DynamicColor> {
    let color = match role {
        Role::Surface => surface(),
        Role::SurfaceDim => surface_dim(),
        Role::SurfaceBright => surface_bright(),
        Role::SurfaceContainerLowest => surface_container_lowest(),
        Role::SurfaceContainerLow => surface_container_low(),
        Role::SurfaceContainer => surface_container(),
        Role::SurfaceContainerHigh => surface_container_high(),
        Role::SurfaceContainerHighest => surface_container_highest(),
        Role::OnSurface => on_surface(),
        Role::OnSurfaceVariant => on_surface_variant(),
        Role::InverseSurface => inverse_surface(),
        Role::InverseOnSurface => inverse_on_surface(),
        Role::Outline => outline(),
        Role::OutlineVariant => outline_variant(),
        Role::Primary => primary(),
        Role::OnPrimary => on_primary(),
        Role::PrimaryContainer => primary_container(),
        Role::OnPrimaryContainer => on_primary_container(),
        Role::PrimaryFixed => primary_fixed(),
        Role::PrimaryFixedDim => primary_fixed_dim(),
        Role::OnPrimaryFixed => on_primary_fixed(),
        Role::OnPrimaryFixedVariant => on_primary_fixed_variant(),
        Role::Secondary => secondary(),
        Role::OnSecondary => on_secondary(),
        Role::SecondaryContainer => secondary_container(),
        Role::OnSecondaryContainer => on_secondary_container(),
        Role::SecondaryFixed => secondary_fixed(),
        Role::SecondaryFixedDim => secondary_fixed_dim(),
        Role::OnSecondaryFixed => on_secondary_fixed(),
        Role::OnSecondaryFixedVariant => on_secondary_fixed_variant(),
        Role::Tertiary => tertiary(),
        Role::OnTertiary => on_tertiary(),
        Role::TertiaryContainer => tertiary_container(),
        Role::OnTertiaryContainer => on_tertiary_container(),
        Role::TertiaryFixed => tertiary_fixed(),
        Role::TertiaryFixedDim => tertiary_fixed_dim(),
        Role::OnTertiaryFixed => on_tertiary_fixed(),
        Role::OnTertiaryFixedVariant => on_tertiary_fixed_variant(),
        Role::Error => error(),
        Role::OnError => on_error(),
        Role::ErrorContainer => error_container(),
        Role::OnErrorContainer => on_error_container(),
        _ => return None,
    };
    Some(color)
}

// --- Surfaces ---

fn surface() -> DynamicColor {
    DynamicColor::builder(Role::Surface, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
        .tone(|s| {
            if s.variant == Variant::Cmf {
                if s.is_dark { 4.0 } else { 98.0 }
            } else {
                0.0
            }
        })
        .build()
}

fn surface_dim() -> DynamicColor {
    DynamicColor::builder(Role::SurfaceDim, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
        .chroma_multiplier(|s| {
            if s.variant == Variant::Cmf {
                if s.is_dark { 1.0 } else { 1.7 }
            } else {
                0.0
            }
        })
        .tone(|s| {
            if s.variant == Variant::Cmf {
                if s.is_dark { 4.0 } else { 87.0 }
            } else {
                0.0
            }
        })
        .build()
}

fn surface_bright() -> DynamicColor {
    DynamicColor::builder(Role::SurfaceBright, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
        .chroma_multiplier(|s| {
            if s.variant == Variant::Cmf {
                if s.is_dark { 1.7 } else { 1.0 }
            } else {
                0.0
            }
        })
        .tone(|s| {
            if s.variant == Variant::Cmf {
                if s.is_dark { 18.0 } else { 98.0 }
            } else {
                0.0
            }
        })
        .build()
}

fn surface_container_lowest() -> DynamicColor {
    DynamicColor::builder(
        Role::SurfaceContainerLowest,
        Arc::new(|s| s.neutral_palette.clone()),
    )
    .is_background(true)
    .tone(|s| {
        if s.variant == Variant::Cmf {
            if s.is_dark { 0.0 } else { 100.0 }
        } else {
            0.0
        }
    })
    .build()
}

fn surface_container_low() -> DynamicColor {
    DynamicColor::builder(
        Role::SurfaceContainerLow,
        Arc::new(|s| s.neutral_palette.clone()),
    )
    .is_background(true)
    .chroma_multiplier(|s| if s.variant == Variant::Cmf { 1.25 } else { 0.0 })
    .tone(|s| {
        if s.variant == Variant::Cmf {
            if s.is_dark { 6.0 } else { 96.0 }
        } else {
            0.0
        }
    })
    .build()
}

fn surface_container() -> DynamicColor {
    DynamicColor::builder(
        Role::SurfaceContainer,
        Arc::new(|s| s.neutral_palette.clone()),
    )
    .is_background(true)
    .chroma_multiplier(|s| if s.variant == Variant::Cmf { 1.4 } else { 0.0 })
    .tone(|s| {
        if s.variant == Variant::Cmf {
            if s.is_dark { 9.0 } else { 94.0 }
        } else {
            0.0
        }
    })
    .build()
}

fn surface_container_high() -> DynamicColor {
    DynamicColor::builder(
        Role::SurfaceContainerHigh,
        Arc::new(|s| s.neutral_palette.clone()),
    )
    .is_background(true)
    .chroma_multiplier(|s| if s.variant == Variant::Cmf { 1.5 } else { 0.0 })
    .tone(|s| {
        if s.variant == Variant::Cmf {
            if s.is_dark { 12.0 } else { 92.0 }
        } else {
            0.0
        }
    })
    .build()
}

fn surface_container_highest() -> DynamicColor {
    DynamicColor::builder(
        Role::SurfaceContainerHighest,
        Arc::new(|s| s.neutral_palette.clone()),
    )
    .is_background(true)
    .chroma_multiplier(|s| if s.variant == Variant::Cmf { 1.7 } else { 0.0 })
    .tone(|s| {
        if s.variant == Variant::Cmf {
            if s.is_dark { 15.0 } else { 90.0 }
        } else {
            0.0
        }
    })
    .build()
}

fn on_surface() -> DynamicColor {
    DynamicColor::builder(Role::OnSurface, Arc::new(|s| s.neutral_palette.clone()))
        .chroma_multiplier(|s| if s.variant == Variant::Cmf { 1.7 } else { 1.0 })
        .background_fn(|s| Some(highest_surface(s)))
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(if s.is_dark { 11.0 } else { 9.0 }))
        })
        .build()
}

fn on_surface_variant() -> DynamicColor {
    DynamicColor::builder(
        Role::OnSurfaceVariant,
        Arc::new(|s| s.neutral_palette.clone()),
    )
    .chroma_multiplier(|s| if s.variant == Variant::Cmf { 1.7 } else { 1.0 })
    .background_fn(|s| Some(highest_surface(s)))
    .contrast_curve_fn(|s| {
        Some(curve_for_default_contrast(if s.is_dark { 6.0 } else { 4.5 }))
    })
    .build()
}

fn inverse_surface() -> DynamicColor {
    DynamicColor::builder(Role::InverseSurface, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
        .chroma_multiplier(|s| if s.variant == Variant::Cmf { 1.7 } else { 1.0 })
        .tone(|s| if s.is_dark { 98.0 } else { 4.0 })
        .build()
}

fn inverse_on_surface() -> DynamicColor {
    DynamicColor::builder(
        Role::InverseOnSurface,
        Arc::new(|s| s.neutral_palette.clone()),
    )
    .background(Role::InverseSurface)
    .contrast_curve(curve_for_default_contrast(7.0))
    .build()
}

fn outline() -> DynamicColor {
    DynamicColor::builder(Role::Outline, Arc::new(|s| s.neutral_palette.clone()))
        .chroma_multiplier(|s| if s.variant == Variant::Cmf { 1.7 } else { 1.0 })
        .background_fn(|s| Some(highest_surface(s)))
        .contrast_curve(curve_for_default_contrast(3.0))
        .build()
}

fn outline_variant() -> DynamicColor {
    DynamicColor::builder(Role::OutlineVariant, Arc::new(|s| s.neutral_palette.clone()))
        .chroma_multiplier(|s| if s.variant == Variant::Cmf { 1.7 } else { 1.0 })
        .background_fn(|s| Some(highest_surface(s)))
        .contrast_curve(curve_for_default_contrast(1.5))
        .build()
}

// --- Primaries ---

fn primary() -> DynamicColor {
    DynamicColor::builder(Role::Primary, Arc::new(|s| s.primary_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| {
            let source = s.source_color_hct();
            if source.chroma() <= 12.0 {
                if s.is_dark { 80.0 } else { 40.0 }
            } else {
                source.tone()
            }
        })
        .contrast_curve(curve_for_default_contrast(4.5))
        .build()
}

fn on_primary() -> DynamicColor {
    DynamicColor::builder(Role::OnPrimary, Arc::new(|s| s.primary_palette.clone()))
        .background(Role::Primary)
        .contrast_curve(curve_for_default_contrast(6.0))
        .build()
}

fn primary_container() -> DynamicColor {
    DynamicColor::builder(
        Role::PrimaryContainer,
        Arc::new(|s| s.primary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| {
        let source = s.source_color_hct();
        if !s.is_dark && source.chroma() <= 12.0 {
            90.0
        } else if source.tone() > 55.0 {
            source.tone().clamp(61.0, 90.0)
        } else {
            source.tone().clamp(30.0, 49.0)
        }
    })
    .contrast_curve_fn(|s| {
        if s.contrast_level > 0.0 {
            Some(curve_for_default_contrast(1.5))
        } else {
            None
        }
    })
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::PrimaryContainer,
            Role::Primary,
            5.0,
            TonePolarity::RelativeLighter,
            true,
            DeltaConstraint::Farther,
        ))
    })
    .build()
}

fn on_primary_container() -> DynamicColor {
    DynamicColor::builder(
        Role::OnPrimaryContainer,
        Arc::new(|s| s.primary_palette.clone()),
    )
    .background(Role::PrimaryContainer)
    .contrast_curve(curve_for_default_contrast(6.0))
    .build()
}

fn primary_fixed() -> DynamicColor {
    DynamicColor::builder(Role::PrimaryFixed, Arc::new(|s| s.primary_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| {
            let fixed = s.with_mode_and_contrast(false, 0.0);
            fixed.tone(Role::PrimaryContainer)
        })
        .contrast_curve_fn(|s| {
            if s.contrast_level > 0.0 {
                Some(curve_for_default_contrast(1.5))
            } else {
                None
            }
        })
        .build()
}

fn primary_fixed_dim() -> DynamicColor {
    DynamicColor::builder(
        Role::PrimaryFixedDim,
        Arc::new(|s| s.primary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| s.tone(Role::PrimaryFixed))
    .contrast_curve_fn(|s| {
        if s.contrast_level > 0.0 {
            Some(curve_for_default_contrast(1.5))
        } else {
            None
        }
    })
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::PrimaryFixedDim,
            Role::PrimaryFixed,
            5.0,
            TonePolarity::Darker,
            true,
            DeltaConstraint::Exact,
        ))
    })
    .build()
}

fn on_primary_fixed() -> DynamicColor {
    DynamicColor::builder(
        Role::OnPrimaryFixed,
        Arc::new(|s| s.primary_palette.clone()),
    )
    .background(Role::PrimaryFixedDim)
    .contrast_curve(curve_for_default_contrast(7.0))
    .build()
}

fn on_primary_fixed_variant() -> DynamicColor {
    DynamicColor::builder(
        Role::OnPrimaryFixedVariant,
        Arc::new(|s| s.primary_palette.clone()),
    )
    .background(Role::PrimaryFixedDim)
    .contrast_curve(curve_for_default_contrast(4.5))
    .build()
}

// --- Secondaries ---

fn secondary() -> DynamicColor {
    DynamicColor::builder(Role::Secondary, Arc::new(|s| s.secondary_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| {
            if s.is_dark {
                t_min_c(&s.secondary_palette, 0.0, 100.0)
            } else {
                t_max_c(&s.secondary_palette, 0.0, 100.0, 1.0)
            }
        })
        .contrast_curve(curve_for_default_contrast(4.5))
        .build()
}

fn on_secondary() -> DynamicColor {
    DynamicColor::builder(Role::OnSecondary, Arc::new(|s| s.secondary_palette.clone()))
        .background(Role::Secondary)
        .contrast_curve(curve_for_default_contrast(6.0))
        .build()
}

fn secondary_container() -> DynamicColor {
    DynamicColor::builder(
        Role::SecondaryContainer,
        Arc::new(|s| s.secondary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| {
        if s.is_dark {
            t_min_c(&s.secondary_palette, 20.0, 49.0)
        } else {
            t_max_c(&s.secondary_palette, 61.0, 90.0, 1.0)
        }
    })
    .contrast_curve_fn(|s| {
        if s.contrast_level > 0.0 {
            Some(curve_for_default_contrast(1.5))
        } else {
            None
        }
    })
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::SecondaryContainer,
            Role::Secondary,
            5.0,
            TonePolarity::RelativeLighter,
            true,
            DeltaConstraint::Farther,
        ))
    })
    .build()
}

fn on_secondary_container() -> DynamicColor {
    DynamicColor::builder(
        Role::OnSecondaryContainer,
        Arc::new(|s| s.secondary_palette.clone()),
    )
    .background(Role::SecondaryContainer)
    .contrast_curve(curve_for_default_contrast(6.0))
    .build()
}

fn secondary_fixed() -> DynamicColor {
    DynamicColor::builder(
        Role::SecondaryFixed,
        Arc::new(|s| s.secondary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| {
        let fixed = s.with_mode_and_contrast(false, 0.0);
        fixed.tone(Role::SecondaryContainer)
    })
    .contrast_curve_fn(|s| {
        if s.contrast_level > 0.0 {
            Some(curve_for_default_contrast(1.5))
        } else {
            None
        }
    })
    .build()
}

fn secondary_fixed_dim() -> DynamicColor {
    DynamicColor::builder(
        Role::SecondaryFixedDim,
        Arc::new(|s| s.secondary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| s.tone(Role::SecondaryFixed))
    .contrast_curve_fn(|s| {
        if s.contrast_level > 0.0 {
            Some(curve_for_default_contrast(1.5))
        } else {
            None
        }
    })
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::SecondaryFixedDim,
            Role::SecondaryFixed,
            5.0,
            TonePolarity::Darker,
            true,
            DeltaConstraint::Exact,
        ))
    })
    .build()
}

fn on_secondary_fixed() -> DynamicColor {
    DynamicColor::builder(
        Role::OnSecondaryFixed,
        Arc::new(|s| s.secondary_palette.clone()),
    )
    .background(Role::SecondaryFixedDim)
    .contrast_curve(curve_for_default_contrast(7.0))
    .build()
}

fn on_secondary_fixed_variant() -> DynamicColor {
    DynamicColor::builder(
        Role::OnSecondaryFixedVariant,
        Arc::new(|s| s.secondary_palette.clone()),
    )
    .background(Role::SecondaryFixedDim)
    .contrast_curve(curve_for_default_contrast(4.5))
    .build()
}

// --- Tertiaries ---
//
// Tertiary tracks the second seed color when the scheme was built from more
// than one, falling back to the primary seed otherwise.

fn tertiary() -> DynamicColor {
    DynamicColor::builder(Role::Tertiary, Arc::new(|s| s.tertiary_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| {
            s.source_color_hct_list
                .get(1)
                .map_or_else(|| s.source_color_hct().tone(), Hct::tone)
        })
        .contrast_curve(curve_for_default_contrast(4.5))
        .build()
}

fn on_tertiary() -> DynamicColor {
    DynamicColor::builder(Role::OnTertiary, Arc::new(|s| s.tertiary_palette.clone()))
        .background(Role::Tertiary)
        .contrast_curve(curve_for_default_contrast(6.0))
        .build()
}

fn tertiary_container() -> DynamicColor {
    DynamicColor::builder(
        Role::TertiaryContainer,
        Arc::new(|s| s.tertiary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| {
        let seed = s
            .source_color_hct_list
            .get(1)
            .unwrap_or_else(|| s.source_color_hct());
        if seed.tone() > 55.0 {
            seed.tone().clamp(61.0, 90.0)
        } else {
            seed.tone().clamp(20.0, 49.0)
        }
    })
    .contrast_curve_fn(|s| {
        if s.contrast_level > 0.0 {
            Some(curve_for_default_contrast(1.5))
        } else {
            None
        }
    })
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::TertiaryContainer,
            Role::Tertiary,
            5.0,
            TonePolarity::RelativeLighter,
            true,
            DeltaConstraint::Farther,
        ))
    })
    .build()
}

fn on_tertiary_container() -> DynamicColor {
    DynamicColor::builder(
        Role::OnTertiaryContainer,
        Arc::new(|s| s.tertiary_palette.clone()),
    )
    .background(Role::TertiaryContainer)
    .contrast_curve(curve_for_default_contrast(6.0))
    .build()
}

fn tertiary_fixed() -> DynamicColor {
    DynamicColor::builder(
        Role::TertiaryFixed,
        Arc::new(|s| s.tertiary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| {
        let fixed = s.with_mode_and_contrast(false, 0.0);
        fixed.tone(Role::TertiaryContainer)
    })
    .contrast_curve_fn(|s| {
        if s.contrast_level > 0.0 {
            Some(curve_for_default_contrast(1.5))
        } else {
            None
        }
    })
    .build()
}

fn tertiary_fixed_dim() -> DynamicColor {
    DynamicColor::builder(
        Role::TertiaryFixedDim,
        Arc::new(|s| s.tertiary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| s.tone(Role::TertiaryFixed))
    .contrast_curve_fn(|s| {
        if s.contrast_level > 0.0 {
            Some(curve_for_default_contrast(1.5))
        } else {
            None
        }
    })
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::TertiaryFixedDim,
            Role::TertiaryFixed,
            5.0,
            TonePolarity::Darker,
            true,
            DeltaConstraint::Exact,
        ))
    })
    .build()
}

fn on_tertiary_fixed() -> DynamicColor {
    DynamicColor::builder(
        Role::OnTertiaryFixed,
        Arc::new(|s| s.tertiary_palette.clone()),
    )
    .background(Role::TertiaryFixedDim)
    .contrast_curve(curve_for_default_contrast(7.0))
    .build()
}

fn on_tertiary_fixed_variant() -> DynamicColor {
    DynamicColor::builder(
        Role::OnTertiaryFixedVariant,
        Arc::new(|s| s.tertiary_palette.clone()),
    )
    .background(Role::TertiaryFixedDim)
    .contrast_curve(curve_for_default_contrast(4.5))
    .build()
}

// --- Errors ---

fn error() -> DynamicColor {
    DynamicColor::builder(Role::Error, Arc::new(|s| s.error_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| t_max_c(&s.error_palette, 0.0, 100.0, 1.0))
        .contrast_curve(curve_for_default_contrast(4.5))
        .build()
}

fn on_error() -> DynamicColor {
    DynamicColor::builder(Role::OnError, Arc::new(|s| s.error_palette.clone()))
        .background(Role::Error)
        .contrast_curve(curve_for_default_contrast(6.0))
        .build()
}

fn error_container() -> DynamicColor {
    DynamicColor::builder(Role::ErrorContainer, Arc::new(|s| s.error_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| {
            if s.is_dark {
                t_min_c(&s.error_palette, 0.0, 100.0)
            } else {
                t_max_c(&s.error_palette, 0.0, 100.0, 1.0)
            }
        })
        .contrast_curve_fn(|s| {
            if s.contrast_level > 0.0 {
                Some(curve_for_default_contrast(1.5))
            } else {
                None
            }
        })
        .tone_delta_pair(|_| {
            Some(ToneDeltaPair::new(
                Role::ErrorContainer,
                Role::Error,
                5.0,
                TonePolarity::RelativeLighter,
                true,
                DeltaConstraint::Farther,
            ))
        })
        .build()
}

fn on_error_container() -> DynamicColor {
    DynamicColor::builder(
        Role::OnErrorContainer,
        Arc::new(|s| s.error_palette.clone()),
    )
    .background(Role::ErrorContainer)
    .contrast_curve(curve_for_default_contrast(6.0))
    .build()
}
