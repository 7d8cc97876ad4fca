#![forbid(unsafe_code)]

//! Base role definitions.
//!
//! Every role reads its palette straight off the scheme and picks a fixed
//! tone per mode, shifted only by the variant families that predate the
//! platform-aware rules. Later tables wrap these definitions rather than
//! replace them.

use std::sync::Arc;

use tonelab_hct::{Hct, dislike};

use crate::contrast_curve::ContrastCurve;
use crate::dynamic_color::{DynamicColor, foreground_tone};
use crate::resolver::highest_surface;
use crate::role::Role;
use crate::scheme::DynamicScheme;
use crate::tables;
use crate::tone_delta_pair::{DeltaConstraint, ToneDeltaPair, TonePolarity};
use crate::variant::Variant;

pub(super) fn define(role: Role) -> DynamicColor {
    match role {
        Role::PrimaryPaletteKeyColor => primary_palette_key_color(),
        Role::SecondaryPaletteKeyColor => secondary_palette_key_color(),
        Role::TertiaryPaletteKeyColor => tertiary_palette_key_color(),
        Role::NeutralPaletteKeyColor => neutral_palette_key_color(),
        Role::NeutralVariantPaletteKeyColor => neutral_variant_palette_key_color(),
        Role::ErrorPaletteKeyColor => error_palette_key_color(),
        Role::Background => background(),
        Role::OnBackground => on_background(),
        Role::Surface => surface(),
        Role::SurfaceDim => surface_dim(),
        Role::SurfaceBright => surface_bright(),
        Role::SurfaceContainerLowest => surface_container_lowest(),
        Role::SurfaceContainerLow => surface_container_low(),
        Role::SurfaceContainer => surface_container(),
        Role::SurfaceContainerHigh => surface_container_high(),
        Role::SurfaceContainerHighest => surface_container_highest(),
        Role::OnSurface => on_surface(),
        Role::SurfaceVariant => surface_variant(),
        Role::OnSurfaceVariant => on_surface_variant(),
        Role::InverseSurface => inverse_surface(),
        Role::InverseOnSurface => inverse_on_surface(),
        Role::Outline => outline(),
        Role::OutlineVariant => outline_variant(),
        Role::Shadow => shadow(),
        Role::Scrim => scrim(),
        Role::SurfaceTint => surface_tint(),
        Role::Primary => primary(),
        Role::OnPrimary => on_primary(),
        Role::PrimaryContainer => primary_container(),
        Role::OnPrimaryContainer => on_primary_container(),
        Role::InversePrimary => inverse_primary(),
        Role::Secondary => secondary(),
        Role::OnSecondary => on_secondary(),
        Role::SecondaryContainer => secondary_container(),
        Role::OnSecondaryContainer => on_secondary_container(),
        Role::Tertiary => tertiary(),
        Role::OnTertiary => on_tertiary(),
        Role::TertiaryContainer => tertiary_container(),
        Role::OnTertiaryContainer => on_tertiary_container(),
        Role::Error => error(),
        Role::OnError => on_error(),
        Role::ErrorContainer => error_container(),
        Role::OnErrorContainer => on_error_container(),
        Role::PrimaryFixed => primary_fixed(),
        Role::PrimaryFixedDim => primary_fixed_dim(),
        Role::OnPrimaryFixed => on_primary_fixed(),
        Role::OnPrimaryFixedVariant => on_primary_fixed_variant(),
        Role::SecondaryFixed => secondary_fixed(),
        Role::SecondaryFixedDim => secondary_fixed_dim(),
        Role::OnSecondaryFixed => on_secondary_fixed(),
        Role::OnSecondaryFixedVariant => on_secondary_fixed_variant(),
        Role::TertiaryFixed => tertiary_fixed(),
        Role::TertiaryFixedDim => tertiary_fixed_dim(),
        Role::OnTertiaryFixed => on_tertiary_fixed(),
        Role::OnTertiaryFixedVariant => on_tertiary_fixed_variant(),
        Role::PrimaryDim | Role::SecondaryDim | Role::TertiaryDim | Role::ErrorDim => {
            unreachable!("dim roles have no base-table definition")
        }
    }
}

fn is_fidelity(s: &DynamicScheme) -> bool {
    matches!(s.variant, Variant::Fidelity | Variant::Content)
}

fn is_monochrome(s: &DynamicScheme) -> bool {
    s.variant == Variant::Monochrome
}

/// Walks tones away from `tone` until the palette can actually produce
/// `chroma` there, or chroma stops improving.
fn find_desired_chroma_by_tone(
    hue: f64,
    chroma: f64,
    tone: f64,
    by_decreasing_tone: bool,
) -> f64 {
    let mut answer = tone;
    let mut closest_to_chroma = Hct::from(hue, chroma, tone);
    if closest_to_chroma.chroma() < chroma {
        let mut chroma_peak = closest_to_chroma.chroma();
        while closest_to_chroma.chroma() < chroma {
            answer += if by_decreasing_tone { -1.0 } else { 1.0 };
            let potential_solution = Hct::from(hue, chroma, answer);
            if chroma_peak > potential_solution.chroma() {
                break;
            }
            if (potential_solution.chroma() - chroma).abs() < 0.4 {
                break;
            }
            let potential_delta = (potential_solution.chroma() - chroma).abs();
            let current_delta = (closest_to_chroma.chroma() - chroma).abs();
            if potential_delta < current_delta {
                closest_to_chroma = potential_solution;
            }
            chroma_peak = chroma_peak.max(potential_solution.chroma());
        }
    }
    answer
}

// --- Palette key colors ---

fn primary_palette_key_color() -> DynamicColor {
    DynamicColor::builder(
        Role::PrimaryPaletteKeyColor,
        Arc::new(|s| s.primary_palette.clone()),
    )
    .tone(|s| s.primary_palette.key_color.tone())
    .build()
}

fn secondary_palette_key_color() -> DynamicColor {
    DynamicColor::builder(
        Role::SecondaryPaletteKeyColor,
        Arc::new(|s| s.secondary_palette.clone()),
    )
    .tone(|s| s.secondary_palette.key_color.tone())
    .build()
}

fn tertiary_palette_key_color() -> DynamicColor {
    DynamicColor::builder(
        Role::TertiaryPaletteKeyColor,
        Arc::new(|s| s.tertiary_palette.clone()),
    )
    .tone(|s| s.tertiary_palette.key_color.tone())
    .build()
}

fn neutral_palette_key_color() -> DynamicColor {
    DynamicColor::builder(
        Role::NeutralPaletteKeyColor,
        Arc::new(|s| s.neutral_palette.clone()),
    )
    .tone(|s| s.neutral_palette.key_color.tone())
    .build()
}

fn neutral_variant_palette_key_color() -> DynamicColor {
    DynamicColor::builder(
        Role::NeutralVariantPaletteKeyColor,
        Arc::new(|s| s.neutral_variant_palette.clone()),
    )
    .tone(|s| s.neutral_variant_palette.key_color.tone())
    .build()
}

fn error_palette_key_color() -> DynamicColor {
    DynamicColor::builder(
        Role::ErrorPaletteKeyColor,
        Arc::new(|s| s.error_palette.clone()),
    )
    .tone(|s| s.error_palette.key_color.tone())
    .build()
}

// --- Surfaces ---

fn background() -> DynamicColor {
    DynamicColor::builder(Role::Background, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
        .tone(|s| if s.is_dark { 6.0 } else { 98.0 })
        .build()
}

fn on_background() -> DynamicColor {
    DynamicColor::builder(Role::OnBackground, Arc::new(|s| s.neutral_palette.clone()))
        .background(Role::Background)
        .tone(|s| if s.is_dark { 90.0 } else { 10.0 })
        .contrast_curve(ContrastCurve::new(3.0, 3.0, 4.5, 7.0))
        .build()
}

fn surface() -> DynamicColor {
    DynamicColor::builder(Role::Surface, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
        .tone(|s| if s.is_dark { 6.0 } else { 98.0 })
        .build()
}

fn surface_dim() -> DynamicColor {
    DynamicColor::builder(Role::SurfaceDim, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
        .tone(|s| {
            if s.is_dark {
                6.0
            } else {
                ContrastCurve::new(87.0, 87.0, 80.0, 75.0).get(s.contrast_level)
            }
        })
        .build()
}

fn surface_bright() -> DynamicColor {
    DynamicColor::builder(Role::SurfaceBright, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
        .tone(|s| {
            if s.is_dark {
                ContrastCurve::new(24.0, 24.0, 29.0, 34.0).get(s.contrast_level)
            } else {
                98.0
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
        if s.is_dark {
            ContrastCurve::new(4.0, 4.0, 2.0, 0.0).get(s.contrast_level)
        } else {
            100.0
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
    .tone(|s| {
        if s.is_dark {
            ContrastCurve::new(10.0, 10.0, 11.0, 12.0).get(s.contrast_level)
        } else {
            ContrastCurve::new(96.0, 96.0, 96.0, 95.0).get(s.contrast_level)
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
    .tone(|s| {
        if s.is_dark {
            ContrastCurve::new(12.0, 12.0, 16.0, 20.0).get(s.contrast_level)
        } else {
            ContrastCurve::new(94.0, 94.0, 92.0, 90.0).get(s.contrast_level)
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
    .tone(|s| {
        if s.is_dark {
            ContrastCurve::new(17.0, 17.0, 21.0, 25.0).get(s.contrast_level)
        } else {
            ContrastCurve::new(92.0, 92.0, 88.0, 85.0).get(s.contrast_level)
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
    .tone(|s| {
        if s.is_dark {
            ContrastCurve::new(22.0, 22.0, 26.0, 30.0).get(s.contrast_level)
        } else {
            ContrastCurve::new(90.0, 90.0, 84.0, 80.0).get(s.contrast_level)
        }
    })
    .build()
}

fn on_surface() -> DynamicColor {
    DynamicColor::builder(Role::OnSurface, Arc::new(|s| s.neutral_palette.clone()))
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| if s.is_dark { 90.0 } else { 10.0 })
        .contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0))
        .build()
}

fn surface_variant() -> DynamicColor {
    DynamicColor::builder(
        Role::SurfaceVariant,
        Arc::new(|s| s.neutral_variant_palette.clone()),
    )
    .is_background(true)
    .tone(|s| if s.is_dark { 30.0 } else { 90.0 })
    .build()
}

fn on_surface_variant() -> DynamicColor {
    DynamicColor::builder(
        Role::OnSurfaceVariant,
        Arc::new(|s| s.neutral_variant_palette.clone()),
    )
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| if s.is_dark { 80.0 } else { 30.0 })
    .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0))
    .build()
}

fn inverse_surface() -> DynamicColor {
    DynamicColor::builder(Role::InverseSurface, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
        .tone(|s| if s.is_dark { 90.0 } else { 20.0 })
        .build()
}

fn inverse_on_surface() -> DynamicColor {
    DynamicColor::builder(
        Role::InverseOnSurface,
        Arc::new(|s| s.neutral_palette.clone()),
    )
    .background(Role::InverseSurface)
    .tone(|s| if s.is_dark { 20.0 } else { 95.0 })
    .contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0))
    .build()
}

fn outline() -> DynamicColor {
    DynamicColor::builder(
        Role::Outline,
        Arc::new(|s| s.neutral_variant_palette.clone()),
    )
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| if s.is_dark { 60.0 } else { 50.0 })
    .contrast_curve(ContrastCurve::new(1.5, 3.0, 4.5, 7.0))
    .build()
}

fn outline_variant() -> DynamicColor {
    DynamicColor::builder(
        Role::OutlineVariant,
        Arc::new(|s| s.neutral_variant_palette.clone()),
    )
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| if s.is_dark { 30.0 } else { 80.0 })
    .contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
    .build()
}

fn shadow() -> DynamicColor {
    DynamicColor::builder(Role::Shadow, Arc::new(|s| s.neutral_palette.clone()))
        .tone(|_| 0.0)
        .build()
}

fn scrim() -> DynamicColor {
    DynamicColor::builder(Role::Scrim, Arc::new(|s| s.neutral_palette.clone()))
        .tone(|_| 0.0)
        .build()
}

fn surface_tint() -> DynamicColor {
    DynamicColor::builder(Role::SurfaceTint, Arc::new(|s| s.primary_palette.clone()))
        .is_background(true)
        .tone(|s| if s.is_dark { 80.0 } else { 40.0 })
        .build()
}

// --- Primaries ---

fn primary() -> DynamicColor {
    DynamicColor::builder(Role::Primary, Arc::new(|s| s.primary_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| {
            if is_monochrome(s) {
                if s.is_dark { 100.0 } else { 0.0 }
            } else if s.is_dark {
                80.0
            } else {
                40.0
            }
        })
        .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
        .tone_delta_pair(|_| {
            Some(ToneDeltaPair::new(
                Role::PrimaryContainer,
                Role::Primary,
                10.0,
                TonePolarity::RelativeLighter,
                false,
                DeltaConstraint::Nearer,
            ))
        })
        .build()
}

fn on_primary() -> DynamicColor {
    DynamicColor::builder(Role::OnPrimary, Arc::new(|s| s.primary_palette.clone()))
        .background(Role::Primary)
        .tone(|s| {
            if is_monochrome(s) {
                if s.is_dark { 10.0 } else { 90.0 }
            } else if s.is_dark {
                20.0
            } else {
                100.0
            }
        })
        .contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0))
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
        if is_fidelity(s) {
            s.source_color_hct().tone()
        } else if is_monochrome(s) {
            if s.is_dark { 85.0 } else { 25.0 }
        } else if s.is_dark {
            30.0
        } else {
            90.0
        }
    })
    .contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::PrimaryContainer,
            Role::Primary,
            10.0,
            TonePolarity::RelativeLighter,
            false,
            DeltaConstraint::Nearer,
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
    .tone(|s| {
        if is_fidelity(s) {
            // The container's preferred tone, before contrast adjustment.
            let container = tables::role_table(s.spec_version).get(Role::PrimaryContainer);
            foreground_tone((container.tone)(s), 4.5)
        } else if is_monochrome(s) {
            if s.is_dark { 0.0 } else { 100.0 }
        } else if s.is_dark {
            90.0
        } else {
            30.0
        }
    })
    .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0))
    .build()
}

fn inverse_primary() -> DynamicColor {
    DynamicColor::builder(Role::InversePrimary, Arc::new(|s| s.primary_palette.clone()))
        .background(Role::InverseSurface)
        .tone(|s| if s.is_dark { 40.0 } else { 80.0 })
        .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
        .build()
}

// --- Secondaries ---

fn secondary() -> DynamicColor {
    DynamicColor::builder(Role::Secondary, Arc::new(|s| s.secondary_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| if s.is_dark { 80.0 } else { 40.0 })
        .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
        .tone_delta_pair(|_| {
            Some(ToneDeltaPair::new(
                Role::SecondaryContainer,
                Role::Secondary,
                10.0,
                TonePolarity::RelativeLighter,
                false,
                DeltaConstraint::Nearer,
            ))
        })
        .build()
}

fn on_secondary() -> DynamicColor {
    DynamicColor::builder(Role::OnSecondary, Arc::new(|s| s.secondary_palette.clone()))
        .background(Role::Secondary)
        .tone(|s| {
            if is_monochrome(s) {
                if s.is_dark { 10.0 } else { 100.0 }
            } else if s.is_dark {
                20.0
            } else {
                100.0
            }
        })
        .contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0))
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
        let initial = if s.is_dark { 30.0 } else { 90.0 };
        if is_monochrome(s) {
            if s.is_dark { 30.0 } else { 85.0 }
        } else if !is_fidelity(s) {
            initial
        } else {
            find_desired_chroma_by_tone(
                s.secondary_palette.hue,
                s.secondary_palette.chroma,
                initial,
                !s.is_dark,
            )
        }
    })
    .contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::SecondaryContainer,
            Role::Secondary,
            10.0,
            TonePolarity::RelativeLighter,
            false,
            DeltaConstraint::Nearer,
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
    .tone(|s| {
        if is_monochrome(s) {
            if s.is_dark { 90.0 } else { 10.0 }
        } else if !is_fidelity(s) {
            if s.is_dark { 90.0 } else { 30.0 }
        } else {
            let container = tables::role_table(s.spec_version).get(Role::SecondaryContainer);
            foreground_tone((container.tone)(s), 4.5)
        }
    })
    .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0))
    .build()
}

// --- Tertiaries ---

fn tertiary() -> DynamicColor {
    DynamicColor::builder(Role::Tertiary, Arc::new(|s| s.tertiary_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| {
            if is_monochrome(s) {
                if s.is_dark { 90.0 } else { 25.0 }
            } else if s.is_dark {
                80.0
            } else {
                40.0
            }
        })
        .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
        .tone_delta_pair(|_| {
            Some(ToneDeltaPair::new(
                Role::TertiaryContainer,
                Role::Tertiary,
                10.0,
                TonePolarity::RelativeLighter,
                false,
                DeltaConstraint::Nearer,
            ))
        })
        .build()
}

fn on_tertiary() -> DynamicColor {
    DynamicColor::builder(Role::OnTertiary, Arc::new(|s| s.tertiary_palette.clone()))
        .background(Role::Tertiary)
        .tone(|s| {
            if is_monochrome(s) {
                if s.is_dark { 10.0 } else { 90.0 }
            } else if s.is_dark {
                20.0
            } else {
                100.0
            }
        })
        .contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0))
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
        if is_monochrome(s) {
            if s.is_dark { 60.0 } else { 49.0 }
        } else if !is_fidelity(s) {
            if s.is_dark { 30.0 } else { 90.0 }
        } else {
            let proposed = s.tertiary_palette.get_hct(s.source_color_hct().tone());
            dislike::fix_if_disliked(proposed).tone()
        }
    })
    .contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::TertiaryContainer,
            Role::Tertiary,
            10.0,
            TonePolarity::RelativeLighter,
            false,
            DeltaConstraint::Nearer,
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
    .tone(|s| {
        if is_monochrome(s) {
            if s.is_dark { 0.0 } else { 100.0 }
        } else if !is_fidelity(s) {
            if s.is_dark { 90.0 } else { 30.0 }
        } else {
            let container = tables::role_table(s.spec_version).get(Role::TertiaryContainer);
            foreground_tone((container.tone)(s), 4.5)
        }
    })
    .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0))
    .build()
}

// --- Errors ---

fn error() -> DynamicColor {
    DynamicColor::builder(Role::Error, Arc::new(|s| s.error_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| if s.is_dark { 80.0 } else { 40.0 })
        .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 7.0))
        .tone_delta_pair(|_| {
            Some(ToneDeltaPair::new(
                Role::ErrorContainer,
                Role::Error,
                10.0,
                TonePolarity::RelativeLighter,
                false,
                DeltaConstraint::Nearer,
            ))
        })
        .build()
}

fn on_error() -> DynamicColor {
    DynamicColor::builder(Role::OnError, Arc::new(|s| s.error_palette.clone()))
        .background(Role::Error)
        .tone(|s| if s.is_dark { 20.0 } else { 100.0 })
        .contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0))
        .build()
}

fn error_container() -> DynamicColor {
    DynamicColor::builder(Role::ErrorContainer, Arc::new(|s| s.error_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| if s.is_dark { 30.0 } else { 90.0 })
        .contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
        .tone_delta_pair(|_| {
            Some(ToneDeltaPair::new(
                Role::ErrorContainer,
                Role::Error,
                10.0,
                TonePolarity::RelativeLighter,
                false,
                DeltaConstraint::Nearer,
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
    .tone(|s| {
        if is_monochrome(s) {
            if s.is_dark { 90.0 } else { 10.0 }
        } else if s.is_dark {
            90.0
        } else {
            30.0
        }
    })
    .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0))
    .build()
}

// --- Fixed colors ---

fn primary_fixed() -> DynamicColor {
    DynamicColor::builder(Role::PrimaryFixed, Arc::new(|s| s.primary_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| if is_monochrome(s) { 40.0 } else { 90.0 })
        .contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
        .tone_delta_pair(|_| {
            Some(ToneDeltaPair::new(
                Role::PrimaryFixed,
                Role::PrimaryFixedDim,
                10.0,
                TonePolarity::Lighter,
                true,
                DeltaConstraint::Exact,
            ))
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
    .tone(|s| if is_monochrome(s) { 30.0 } else { 80.0 })
    .contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::PrimaryFixed,
            Role::PrimaryFixedDim,
            10.0,
            TonePolarity::Lighter,
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
    .second_background(Role::PrimaryFixed)
    .tone(|s| if is_monochrome(s) { 100.0 } else { 10.0 })
    .contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0))
    .build()
}

fn on_primary_fixed_variant() -> DynamicColor {
    DynamicColor::builder(
        Role::OnPrimaryFixedVariant,
        Arc::new(|s| s.primary_palette.clone()),
    )
    .background(Role::PrimaryFixedDim)
    .second_background(Role::PrimaryFixed)
    .tone(|s| if is_monochrome(s) { 90.0 } else { 30.0 })
    .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0))
    .build()
}

fn secondary_fixed() -> DynamicColor {
    DynamicColor::builder(
        Role::SecondaryFixed,
        Arc::new(|s| s.secondary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| if is_monochrome(s) { 80.0 } else { 90.0 })
    .contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::SecondaryFixed,
            Role::SecondaryFixedDim,
            10.0,
            TonePolarity::Lighter,
            true,
            DeltaConstraint::Exact,
        ))
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
    .tone(|s| if is_monochrome(s) { 70.0 } else { 80.0 })
    .contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::SecondaryFixed,
            Role::SecondaryFixedDim,
            10.0,
            TonePolarity::Lighter,
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
    .second_background(Role::SecondaryFixed)
    .tone(|_| 10.0)
    .contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0))
    .build()
}

fn on_secondary_fixed_variant() -> DynamicColor {
    DynamicColor::builder(
        Role::OnSecondaryFixedVariant,
        Arc::new(|s| s.secondary_palette.clone()),
    )
    .background(Role::SecondaryFixedDim)
    .second_background(Role::SecondaryFixed)
    .tone(|s| if is_monochrome(s) { 25.0 } else { 30.0 })
    .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0))
    .build()
}

fn tertiary_fixed() -> DynamicColor {
    DynamicColor::builder(
        Role::TertiaryFixed,
        Arc::new(|s| s.tertiary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| Some(highest_surface(s)))
    .tone(|s| if is_monochrome(s) { 40.0 } else { 90.0 })
    .contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::TertiaryFixed,
            Role::TertiaryFixedDim,
            10.0,
            TonePolarity::Lighter,
            true,
            DeltaConstraint::Exact,
        ))
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
    .tone(|s| if is_monochrome(s) { 30.0 } else { 80.0 })
    .contrast_curve(ContrastCurve::new(1.0, 1.0, 3.0, 4.5))
    .tone_delta_pair(|_| {
        Some(ToneDeltaPair::new(
            Role::TertiaryFixed,
            Role::TertiaryFixedDim,
            10.0,
            TonePolarity::Lighter,
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
    .second_background(Role::TertiaryFixed)
    .tone(|s| if is_monochrome(s) { 100.0 } else { 10.0 })
    .contrast_curve(ContrastCurve::new(4.5, 7.0, 11.0, 21.0))
    .build()
}

fn on_tertiary_fixed_variant() -> DynamicColor {
    DynamicColor::builder(
        Role::OnTertiaryFixedVariant,
        Arc::new(|s| s.tertiary_palette.clone()),
    )
    .background(Role::TertiaryFixedDim)
    .second_background(Role::TertiaryFixed)
    .tone(|s| if is_monochrome(s) { 90.0 } else { 30.0 })
    .contrast_curve(ContrastCurve::new(3.0, 4.5, 7.0, 11.0))
    .build()
}
