#![forbid(unsafe_code)]

//! Platform-aware role overrides, plus the dim accent roles they introduce.
//!
//! Tones here come from chroma searches over the scheme's palettes instead
//! of fixed per-mode values, surfaces gain variant-specific chroma
//! multipliers, and watch schemes drop the shared surface background in
//! favor of tone-delta anchoring against the dim accents.

use std::sync::Arc;

use tonelab_hct::hct::{is_cyan_hue, is_yellow_hue};

use crate::contrast_curve::curve_for_default_contrast;
use crate::dynamic_color::DynamicColor;
use crate::resolver::highest_surface;
use crate::role::Role;
use crate::scheme::DynamicScheme;
use crate::tables;
use crate::tone_delta_pair::{DeltaConstraint, ToneDeltaPair, TonePolarity};
use crate::tone_search::{t_max_c, t_min_c};
use crate::variant::Variant;
use crate::version::Platform;

/// The override layered over the base definition, or `None` for roles the
/// 2025 rules leave untouched.
pub(super) fn override_for(role: Role) -> Option<DynamicColor> {
    let color = match role {
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
        _ => return None,
    };
    Some(color)
}

/// The dim accent roles first defined by these rules. They carry the same
/// definition in every table so the role set stays total.
pub(super) fn dim_definition(role: Role) -> DynamicColor {
    match role {
        Role::PrimaryDim => primary_dim(),
        Role::SecondaryDim => secondary_dim(),
        Role::TertiaryDim => tertiary_dim(),
        Role::ErrorDim => error_dim(),
        _ => unreachable!("{} is not a dim role", role.name()),
    }
}

// Shared by on_surface, on_surface_variant, outline and outline_variant.
fn foreground_chroma_multiplier(s: &DynamicScheme) -> f64 {
    if s.platform == Platform::Phone {
        match s.variant {
            Variant::Neutral => 2.2,
            Variant::TonalSpot => 1.7,
            Variant::Expressive => {
                if is_yellow_hue(s.neutral_palette.hue) {
                    if s.is_dark { 3.0 } else { 2.3 }
                } else {
                    1.6
                }
            }
            _ => 1.0,
        }
    } else {
        1.0
    }
}

fn dim_bright_chroma_multiplier(s: &DynamicScheme) -> f64 {
    match s.variant {
        Variant::Neutral => 2.5,
        Variant::TonalSpot => 1.7,
        Variant::Expressive => {
            if is_yellow_hue(s.neutral_palette.hue) {
                2.7
            } else {
                1.75
            }
        }
        Variant::Vibrant => 1.36,
        _ => 1.0,
    }
}

// --- Surfaces ---

fn surface() -> DynamicColor {
    DynamicColor::builder(Role::Surface, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
        .tone(|s| {
            if s.platform == Platform::Phone {
                if s.is_dark {
                    4.0
                } else if is_yellow_hue(s.neutral_palette.hue) {
                    99.0
                } else if s.variant == Variant::Vibrant {
                    97.0
                } else {
                    98.0
                }
            } else {
                0.0
            }
        })
        .build()
}

fn background() -> DynamicColor {
    DynamicColor::builder(
        Role::Background,
        Arc::new(|s| (tables::role_table(s.spec_version).get(Role::Surface).palette)(s)),
    )
    .is_background(true)
    .tone(|s| s.tone(Role::Surface))
    .build()
}

fn on_background() -> DynamicColor {
    DynamicColor::builder(
        Role::OnBackground,
        Arc::new(|s| (tables::role_table(s.spec_version).get(Role::OnSurface).palette)(s)),
    )
    .background_fn(|s| {
        tables::role_table(s.spec_version)
            .get(Role::OnSurface)
            .background
            .as_ref()
            .and_then(|f| f(s))
    })
    .tone(|s| {
        if s.platform == Platform::Watch {
            100.0
        } else {
            s.tone(Role::OnSurface)
        }
    })
    .contrast_curve_fn(|s| {
        tables::role_table(s.spec_version)
            .get(Role::OnSurface)
            .contrast_curve
            .as_ref()
            .and_then(|f| f(s))
    })
    .build()
}

fn surface_dim() -> DynamicColor {
    DynamicColor::builder(Role::SurfaceDim, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
        .chroma_multiplier(|s| {
            if s.is_dark {
                1.0
            } else {
                dim_bright_chroma_multiplier(s)
            }
        })
        .tone(|s| {
            if s.is_dark {
                4.0
            } else if is_yellow_hue(s.neutral_palette.hue) {
                90.0
            } else if s.variant == Variant::Vibrant {
                85.0
            } else {
                87.0
            }
        })
        .build()
}

fn surface_bright() -> DynamicColor {
    DynamicColor::builder(Role::SurfaceBright, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
        .chroma_multiplier(|s| {
            if s.is_dark {
                dim_bright_chroma_multiplier(s)
            } else {
                1.0
            }
        })
        .tone(|s| {
            if s.is_dark {
                18.0
            } else if is_yellow_hue(s.neutral_palette.hue) {
                99.0
            } else if s.variant == Variant::Vibrant {
                97.0
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
    .tone(|s| if s.is_dark { 0.0 } else { 100.0 })
    .build()
}

fn surface_container_low() -> DynamicColor {
    DynamicColor::builder(
        Role::SurfaceContainerLow,
        Arc::new(|s| s.neutral_palette.clone()),
    )
    .is_background(true)
    .chroma_multiplier(|s| {
        if s.platform == Platform::Phone {
            match s.variant {
                Variant::Neutral => 1.3,
                Variant::TonalSpot => 1.25,
                Variant::Expressive => {
                    if is_yellow_hue(s.neutral_palette.hue) {
                        1.3
                    } else {
                        1.15
                    }
                }
                Variant::Vibrant => 1.08,
                _ => 1.0,
            }
        } else {
            1.0
        }
    })
    .tone(|s| {
        if s.platform == Platform::Phone {
            if s.is_dark {
                6.0
            } else if is_yellow_hue(s.neutral_palette.hue) {
                98.0
            } else if s.variant == Variant::Vibrant {
                95.0
            } else {
                96.0
            }
        } else {
            15.0
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
    .chroma_multiplier(|s| {
        if s.platform == Platform::Phone {
            match s.variant {
                Variant::Neutral => 1.6,
                Variant::TonalSpot => 1.4,
                Variant::Expressive => {
                    if is_yellow_hue(s.neutral_palette.hue) {
                        1.6
                    } else {
                        1.3
                    }
                }
                Variant::Vibrant => 1.15,
                _ => 1.0,
            }
        } else {
            1.0
        }
    })
    .tone(|s| {
        if s.platform == Platform::Phone {
            if s.is_dark {
                9.0
            } else if is_yellow_hue(s.neutral_palette.hue) {
                96.0
            } else if s.variant == Variant::Vibrant {
                92.0
            } else {
                94.0
            }
        } else {
            20.0
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
    .chroma_multiplier(|s| {
        if s.platform == Platform::Phone {
            match s.variant {
                Variant::Neutral => 1.9,
                Variant::TonalSpot => 1.5,
                Variant::Expressive => {
                    if is_yellow_hue(s.neutral_palette.hue) {
                        1.95
                    } else {
                        1.45
                    }
                }
                Variant::Vibrant => 1.22,
                _ => 1.0,
            }
        } else {
            1.0
        }
    })
    .tone(|s| {
        if s.platform == Platform::Phone {
            if s.is_dark {
                12.0
            } else if is_yellow_hue(s.neutral_palette.hue) {
                94.0
            } else if s.variant == Variant::Vibrant {
                90.0
            } else {
                92.0
            }
        } else {
            25.0
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
    .chroma_multiplier(|s| match s.variant {
        Variant::Neutral => 2.2,
        Variant::TonalSpot => 1.7,
        Variant::Expressive => {
            if is_yellow_hue(s.neutral_palette.hue) {
                2.3
            } else {
                1.6
            }
        }
        Variant::Vibrant => 1.29,
        _ => 1.0,
    })
    .tone(|s| {
        if s.is_dark {
            15.0
        } else if is_yellow_hue(s.neutral_palette.hue) {
            92.0
        } else if s.variant == Variant::Vibrant {
            88.0
        } else {
            90.0
        }
    })
    .build()
}

fn on_surface() -> DynamicColor {
    DynamicColor::builder(Role::OnSurface, Arc::new(|s| s.neutral_palette.clone()))
        .chroma_multiplier(foreground_chroma_multiplier)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| {
            if s.variant == Variant::Vibrant {
                t_max_c(&s.neutral_palette, 0.0, 100.0, 1.1)
            } else {
                s.tone(highest_surface(s))
            }
        })
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(
                if s.is_dark && s.platform == Platform::Phone {
                    11.0
                } else {
                    9.0
                },
            ))
        })
        .build()
}

fn surface_variant() -> DynamicColor {
    DynamicColor::builder(
        Role::SurfaceVariant,
        Arc::new(|s| {
            (tables::role_table(s.spec_version)
                .get(Role::SurfaceContainerHighest)
                .palette)(s)
        }),
    )
    .is_background(true)
    .chroma_multiplier(|s| {
        tables::role_table(s.spec_version)
            .get(Role::SurfaceContainerHighest)
            .chroma_multiplier
            .as_ref()
            .map_or(1.0, |f| f(s))
    })
    .tone(|s| s.tone(Role::SurfaceContainerHighest))
    .build()
}

fn on_surface_variant() -> DynamicColor {
    DynamicColor::builder(
        Role::OnSurfaceVariant,
        Arc::new(|s| s.neutral_palette.clone()),
    )
    .chroma_multiplier(foreground_chroma_multiplier)
    .background_fn(|s| Some(highest_surface(s)))
    .contrast_curve_fn(|s| {
        Some(curve_for_default_contrast(
            if s.platform == Platform::Phone {
                if s.is_dark { 6.0 } else { 4.5 }
            } else {
                7.0
            },
        ))
    })
    .build()
}

fn inverse_surface() -> DynamicColor {
    DynamicColor::builder(Role::InverseSurface, Arc::new(|s| s.neutral_palette.clone()))
        .is_background(true)
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
        .chroma_multiplier(foreground_chroma_multiplier)
        .background_fn(|s| Some(highest_surface(s)))
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(
                if s.platform == Platform::Phone {
                    3.0
                } else {
                    4.5
                },
            ))
        })
        .build()
}

fn outline_variant() -> DynamicColor {
    DynamicColor::builder(Role::OutlineVariant, Arc::new(|s| s.neutral_palette.clone()))
        .chroma_multiplier(foreground_chroma_multiplier)
        .background_fn(|s| Some(highest_surface(s)))
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(
                if s.platform == Platform::Phone {
                    1.5
                } else {
                    3.0
                },
            ))
        })
        .build()
}

fn surface_tint() -> DynamicColor {
    DynamicColor::builder(
        Role::SurfaceTint,
        Arc::new(|s| (tables::role_table(s.spec_version).get(Role::Primary).palette)(s)),
    )
    .is_background(true)
    .chroma_multiplier(|s| {
        tables::role_table(s.spec_version)
            .get(Role::Primary)
            .chroma_multiplier
            .as_ref()
            .map_or(1.0, |f| f(s))
    })
    .tone(|s| s.tone(Role::Primary))
    .build()
}

// --- Primaries ---

fn primary() -> DynamicColor {
    DynamicColor::builder(Role::Primary, Arc::new(|s| s.primary_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| match s.variant {
            Variant::Neutral => {
                if s.platform == Platform::Phone {
                    if s.is_dark { 80.0 } else { 40.0 }
                } else {
                    90.0
                }
            }
            Variant::TonalSpot => {
                if s.platform == Platform::Phone {
                    if s.is_dark {
                        80.0
                    } else {
                        t_max_c(&s.primary_palette, 0.0, 100.0, 1.0)
                    }
                } else {
                    t_max_c(&s.primary_palette, 0.0, 90.0, 1.0)
                }
            }
            Variant::Expressive => {
                if s.platform == Platform::Phone {
                    let hue = s.primary_palette.hue;
                    let upper = if is_yellow_hue(hue) {
                        25.0
                    } else if is_cyan_hue(hue) {
                        88.0
                    } else {
                        98.0
                    };
                    t_max_c(&s.primary_palette, 0.0, upper, 1.0)
                } else {
                    t_max_c(&s.primary_palette, 0.0, 100.0, 1.0)
                }
            }
            _ => {
                if s.platform == Platform::Phone {
                    let upper = if is_cyan_hue(s.primary_palette.hue) {
                        88.0
                    } else {
                        98.0
                    };
                    t_max_c(&s.primary_palette, 0.0, upper, 1.0)
                } else {
                    t_max_c(&s.primary_palette, 0.0, 100.0, 1.0)
                }
            }
        })
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(
                if s.platform == Platform::Phone {
                    4.5
                } else {
                    7.0
                },
            ))
        })
        .tone_delta_pair(|s| {
            if s.platform == Platform::Phone {
                Some(ToneDeltaPair::new(
                    Role::PrimaryContainer,
                    Role::Primary,
                    5.0,
                    TonePolarity::RelativeLighter,
                    true,
                    DeltaConstraint::Farther,
                ))
            } else {
                None
            }
        })
        .build()
}

fn primary_dim() -> DynamicColor {
    DynamicColor::builder(Role::PrimaryDim, Arc::new(|s| s.primary_palette.clone()))
        .is_background(true)
        .background(Role::SurfaceContainerHigh)
        .tone(|s| match s.variant {
            Variant::Neutral => 85.0,
            Variant::TonalSpot => t_max_c(&s.primary_palette, 0.0, 90.0, 1.0),
            _ => t_max_c(&s.primary_palette, 0.0, 100.0, 1.0),
        })
        .contrast_curve(curve_for_default_contrast(4.5))
        .tone_delta_pair(|_| {
            Some(ToneDeltaPair::new(
                Role::PrimaryDim,
                Role::Primary,
                5.0,
                TonePolarity::Darker,
                true,
                DeltaConstraint::Farther,
            ))
        })
        .build()
}

fn on_primary() -> DynamicColor {
    DynamicColor::builder(Role::OnPrimary, Arc::new(|s| s.primary_palette.clone()))
        .background_fn(|s| {
            if s.platform == Platform::Phone {
                Some(Role::Primary)
            } else {
                Some(Role::PrimaryDim)
            }
        })
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(
                if s.platform == Platform::Phone {
                    6.0
                } else {
                    7.0
                },
            ))
        })
        .build()
}

fn primary_container() -> DynamicColor {
    DynamicColor::builder(
        Role::PrimaryContainer,
        Arc::new(|s| s.primary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| {
        if s.platform == Platform::Phone {
            Some(highest_surface(s))
        } else {
            None
        }
    })
    .tone(|s| {
        if s.platform == Platform::Watch {
            30.0
        } else {
            match s.variant {
                Variant::Neutral => {
                    if s.is_dark { 30.0 } else { 90.0 }
                }
                Variant::TonalSpot => {
                    if s.is_dark {
                        t_min_c(&s.primary_palette, 35.0, 93.0)
                    } else {
                        t_max_c(&s.primary_palette, 0.0, 90.0, 1.0)
                    }
                }
                Variant::Expressive => {
                    if s.is_dark {
                        t_max_c(&s.primary_palette, 30.0, 93.0, 1.0)
                    } else {
                        let upper = if is_cyan_hue(s.primary_palette.hue) {
                            88.0
                        } else {
                            90.0
                        };
                        t_max_c(&s.primary_palette, 78.0, upper, 1.0)
                    }
                }
                _ => {
                    if s.is_dark {
                        t_min_c(&s.primary_palette, 66.0, 93.0)
                    } else {
                        let upper = if is_cyan_hue(s.primary_palette.hue) {
                            88.0
                        } else {
                            93.0
                        };
                        t_max_c(&s.primary_palette, 66.0, upper, 1.0)
                    }
                }
            }
        }
    })
    .contrast_curve_fn(|s| {
        if s.platform == Platform::Phone && s.contrast_level > 0.0 {
            Some(curve_for_default_contrast(1.5))
        } else {
            None
        }
    })
    .tone_delta_pair(|s| {
        if s.platform == Platform::Watch {
            Some(ToneDeltaPair::new(
                Role::PrimaryContainer,
                Role::PrimaryDim,
                10.0,
                TonePolarity::Darker,
                true,
                DeltaConstraint::Farther,
            ))
        } else {
            None
        }
    })
    .build()
}

fn on_primary_container() -> DynamicColor {
    DynamicColor::builder(
        Role::OnPrimaryContainer,
        Arc::new(|s| s.primary_palette.clone()),
    )
    .background(Role::PrimaryContainer)
    .contrast_curve_fn(|s| {
        Some(curve_for_default_contrast(
            if s.platform == Platform::Phone {
                6.0
            } else {
                7.0
            },
        ))
    })
    .build()
}

fn inverse_primary() -> DynamicColor {
    DynamicColor::builder(Role::InversePrimary, Arc::new(|s| s.primary_palette.clone()))
        .background(Role::InverseSurface)
        .tone(|s| t_max_c(&s.primary_palette, 0.0, 100.0, 1.0))
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(
                if s.platform == Platform::Phone {
                    6.0
                } else {
                    7.0
                },
            ))
        })
        .build()
}

// --- Secondaries ---

fn secondary() -> DynamicColor {
    DynamicColor::builder(Role::Secondary, Arc::new(|s| s.secondary_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| {
            if s.platform == Platform::Watch {
                if s.variant == Variant::Neutral {
                    90.0
                } else {
                    t_max_c(&s.secondary_palette, 0.0, 90.0, 1.0)
                }
            } else {
                match s.variant {
                    Variant::Neutral => {
                        if s.is_dark {
                            t_min_c(&s.secondary_palette, 0.0, 98.0)
                        } else {
                            t_max_c(&s.secondary_palette, 0.0, 100.0, 1.0)
                        }
                    }
                    Variant::Vibrant => t_max_c(
                        &s.secondary_palette,
                        0.0,
                        if s.is_dark { 90.0 } else { 98.0 },
                        1.0,
                    ),
                    _ => {
                        if s.is_dark {
                            80.0
                        } else {
                            t_max_c(&s.secondary_palette, 0.0, 100.0, 1.0)
                        }
                    }
                }
            }
        })
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(
                if s.platform == Platform::Phone {
                    4.5
                } else {
                    7.0
                },
            ))
        })
        .tone_delta_pair(|s| {
            if s.platform == Platform::Phone {
                Some(ToneDeltaPair::new(
                    Role::SecondaryContainer,
                    Role::Secondary,
                    5.0,
                    TonePolarity::RelativeLighter,
                    true,
                    DeltaConstraint::Farther,
                ))
            } else {
                None
            }
        })
        .build()
}

fn secondary_dim() -> DynamicColor {
    DynamicColor::builder(Role::SecondaryDim, Arc::new(|s| s.secondary_palette.clone()))
        .is_background(true)
        .background(Role::SurfaceContainerHigh)
        .tone(|s| {
            if s.variant == Variant::Neutral {
                85.0
            } else {
                t_max_c(&s.secondary_palette, 0.0, 90.0, 1.0)
            }
        })
        .contrast_curve(curve_for_default_contrast(4.5))
        .tone_delta_pair(|_| {
            Some(ToneDeltaPair::new(
                Role::SecondaryDim,
                Role::Secondary,
                5.0,
                TonePolarity::Darker,
                true,
                DeltaConstraint::Farther,
            ))
        })
        .build()
}

fn on_secondary() -> DynamicColor {
    DynamicColor::builder(Role::OnSecondary, Arc::new(|s| s.secondary_palette.clone()))
        .background_fn(|s| {
            if s.platform == Platform::Phone {
                Some(Role::Secondary)
            } else {
                Some(Role::SecondaryDim)
            }
        })
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(
                if s.platform == Platform::Phone {
                    6.0
                } else {
                    7.0
                },
            ))
        })
        .build()
}

fn secondary_container() -> DynamicColor {
    DynamicColor::builder(
        Role::SecondaryContainer,
        Arc::new(|s| s.secondary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| {
        if s.platform == Platform::Phone {
            Some(highest_surface(s))
        } else {
            None
        }
    })
    .tone(|s| {
        if s.platform == Platform::Watch {
            30.0
        } else {
            match s.variant {
                Variant::Vibrant => {
                    if s.is_dark {
                        t_min_c(&s.secondary_palette, 30.0, 40.0)
                    } else {
                        t_max_c(&s.secondary_palette, 84.0, 90.0, 1.0)
                    }
                }
                Variant::Expressive => {
                    if s.is_dark {
                        15.0
                    } else {
                        t_max_c(&s.secondary_palette, 90.0, 95.0, 1.0)
                    }
                }
                _ => {
                    if s.is_dark { 25.0 } else { 90.0 }
                }
            }
        }
    })
    .contrast_curve_fn(|s| {
        if s.platform == Platform::Phone && s.contrast_level > 0.0 {
            Some(curve_for_default_contrast(1.5))
        } else {
            None
        }
    })
    .tone_delta_pair(|s| {
        if s.platform == Platform::Watch {
            Some(ToneDeltaPair::new(
                Role::SecondaryContainer,
                Role::SecondaryDim,
                10.0,
                TonePolarity::Darker,
                true,
                DeltaConstraint::Farther,
            ))
        } else {
            None
        }
    })
    .build()
}

fn on_secondary_container() -> DynamicColor {
    DynamicColor::builder(
        Role::OnSecondaryContainer,
        Arc::new(|s| s.secondary_palette.clone()),
    )
    .background(Role::SecondaryContainer)
    .contrast_curve_fn(|s| {
        Some(curve_for_default_contrast(
            if s.platform == Platform::Phone {
                6.0
            } else {
                7.0
            },
        ))
    })
    .build()
}

// --- Tertiaries ---

fn tertiary() -> DynamicColor {
    DynamicColor::builder(Role::Tertiary, Arc::new(|s| s.tertiary_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| {
            if s.platform == Platform::Watch {
                if s.variant == Variant::TonalSpot {
                    t_max_c(&s.tertiary_palette, 0.0, 90.0, 1.0)
                } else {
                    t_max_c(&s.tertiary_palette, 0.0, 100.0, 1.0)
                }
            } else {
                match s.variant {
                    Variant::Expressive | Variant::Vibrant => {
                        let upper = if is_cyan_hue(s.tertiary_palette.hue) {
                            88.0
                        } else if s.is_dark {
                            98.0
                        } else {
                            100.0
                        };
                        t_max_c(&s.tertiary_palette, 0.0, upper, 1.0)
                    }
                    _ => {
                        if s.is_dark {
                            t_max_c(&s.tertiary_palette, 0.0, 98.0, 1.0)
                        } else {
                            t_max_c(&s.tertiary_palette, 0.0, 100.0, 1.0)
                        }
                    }
                }
            }
        })
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(
                if s.platform == Platform::Phone {
                    4.5
                } else {
                    7.0
                },
            ))
        })
        .tone_delta_pair(|s| {
            if s.platform == Platform::Phone {
                Some(ToneDeltaPair::new(
                    Role::TertiaryContainer,
                    Role::Tertiary,
                    5.0,
                    TonePolarity::RelativeLighter,
                    true,
                    DeltaConstraint::Farther,
                ))
            } else {
                None
            }
        })
        .build()
}

fn tertiary_dim() -> DynamicColor {
    DynamicColor::builder(Role::TertiaryDim, Arc::new(|s| s.tertiary_palette.clone()))
        .is_background(true)
        .background(Role::SurfaceContainerHigh)
        .tone(|s| {
            if s.variant == Variant::TonalSpot {
                t_max_c(&s.tertiary_palette, 0.0, 90.0, 1.0)
            } else {
                t_max_c(&s.tertiary_palette, 0.0, 100.0, 1.0)
            }
        })
        .contrast_curve(curve_for_default_contrast(4.5))
        .tone_delta_pair(|_| {
            Some(ToneDeltaPair::new(
                Role::TertiaryDim,
                Role::Tertiary,
                5.0,
                TonePolarity::Darker,
                true,
                DeltaConstraint::Farther,
            ))
        })
        .build()
}

fn on_tertiary() -> DynamicColor {
    DynamicColor::builder(Role::OnTertiary, Arc::new(|s| s.tertiary_palette.clone()))
        .background_fn(|s| {
            if s.platform == Platform::Phone {
                Some(Role::Tertiary)
            } else {
                Some(Role::TertiaryDim)
            }
        })
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(
                if s.platform == Platform::Phone {
                    6.0
                } else {
                    7.0
                },
            ))
        })
        .build()
}

fn tertiary_container() -> DynamicColor {
    DynamicColor::builder(
        Role::TertiaryContainer,
        Arc::new(|s| s.tertiary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| {
        if s.platform == Platform::Phone {
            Some(highest_surface(s))
        } else {
            None
        }
    })
    .tone(|s| {
        if s.platform == Platform::Watch {
            if s.variant == Variant::TonalSpot {
                t_max_c(&s.tertiary_palette, 0.0, 90.0, 1.0)
            } else {
                t_max_c(&s.tertiary_palette, 0.0, 100.0, 1.0)
            }
        } else {
            match s.variant {
                Variant::Neutral => {
                    if s.is_dark {
                        t_max_c(&s.tertiary_palette, 0.0, 93.0, 1.0)
                    } else {
                        t_max_c(&s.tertiary_palette, 0.0, 96.0, 1.0)
                    }
                }
                Variant::TonalSpot => t_max_c(
                    &s.tertiary_palette,
                    0.0,
                    if s.is_dark { 93.0 } else { 100.0 },
                    1.0,
                ),
                Variant::Expressive => {
                    let upper = if is_cyan_hue(s.tertiary_palette.hue) {
                        88.0
                    } else if s.is_dark {
                        93.0
                    } else {
                        100.0
                    };
                    t_max_c(&s.tertiary_palette, 75.0, upper, 1.0)
                }
                _ => {
                    if s.is_dark {
                        t_max_c(&s.tertiary_palette, 0.0, 93.0, 1.0)
                    } else {
                        t_max_c(&s.tertiary_palette, 72.0, 100.0, 1.0)
                    }
                }
            }
        }
    })
    .contrast_curve_fn(|s| {
        if s.platform == Platform::Phone && s.contrast_level > 0.0 {
            Some(curve_for_default_contrast(1.5))
        } else {
            None
        }
    })
    .tone_delta_pair(|s| {
        if s.platform == Platform::Watch {
            Some(ToneDeltaPair::new(
                Role::TertiaryContainer,
                Role::TertiaryDim,
                10.0,
                TonePolarity::Darker,
                true,
                DeltaConstraint::Farther,
            ))
        } else {
            None
        }
    })
    .build()
}

fn on_tertiary_container() -> DynamicColor {
    DynamicColor::builder(
        Role::OnTertiaryContainer,
        Arc::new(|s| s.tertiary_palette.clone()),
    )
    .background(Role::TertiaryContainer)
    .contrast_curve_fn(|s| {
        Some(curve_for_default_contrast(
            if s.platform == Platform::Phone {
                6.0
            } else {
                7.0
            },
        ))
    })
    .build()
}

// --- Errors ---

fn error() -> DynamicColor {
    DynamicColor::builder(Role::Error, Arc::new(|s| s.error_palette.clone()))
        .is_background(true)
        .background_fn(|s| Some(highest_surface(s)))
        .tone(|s| {
            if s.platform == Platform::Phone {
                if s.is_dark {
                    t_min_c(&s.error_palette, 0.0, 98.0)
                } else {
                    t_max_c(&s.error_palette, 0.0, 100.0, 1.0)
                }
            } else {
                t_min_c(&s.error_palette, 0.0, 100.0)
            }
        })
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(
                if s.platform == Platform::Phone {
                    4.5
                } else {
                    7.0
                },
            ))
        })
        .tone_delta_pair(|s| {
            if s.platform == Platform::Phone {
                Some(ToneDeltaPair::new(
                    Role::ErrorContainer,
                    Role::Error,
                    5.0,
                    TonePolarity::RelativeLighter,
                    true,
                    DeltaConstraint::Farther,
                ))
            } else {
                None
            }
        })
        .build()
}

fn error_dim() -> DynamicColor {
    DynamicColor::builder(Role::ErrorDim, Arc::new(|s| s.error_palette.clone()))
        .is_background(true)
        .background(Role::SurfaceContainerHigh)
        .tone(|s| t_min_c(&s.error_palette, 0.0, 100.0))
        .contrast_curve(curve_for_default_contrast(4.5))
        .tone_delta_pair(|_| {
            Some(ToneDeltaPair::new(
                Role::ErrorDim,
                Role::Error,
                5.0,
                TonePolarity::Darker,
                true,
                DeltaConstraint::Farther,
            ))
        })
        .build()
}

fn on_error() -> DynamicColor {
    DynamicColor::builder(Role::OnError, Arc::new(|s| s.error_palette.clone()))
        .background_fn(|s| {
            if s.platform == Platform::Phone {
                Some(Role::Error)
            } else {
                Some(Role::ErrorDim)
            }
        })
        .contrast_curve_fn(|s| {
            Some(curve_for_default_contrast(
                if s.platform == Platform::Phone {
                    6.0
                } else {
                    7.0
                },
            ))
        })
        .build()
}

fn error_container() -> DynamicColor {
    DynamicColor::builder(Role::ErrorContainer, Arc::new(|s| s.error_palette.clone()))
        .is_background(true)
        .background_fn(|s| {
            if s.platform == Platform::Phone {
                Some(highest_surface(s))
            } else {
                None
            }
        })
        .tone(|s| {
            if s.platform == Platform::Watch {
                30.0
            } else if s.is_dark {
                t_min_c(&s.error_palette, 30.0, 93.0)
            } else {
                t_max_c(&s.error_palette, 0.0, 90.0, 1.0)
            }
        })
        .contrast_curve_fn(|s| {
            if s.platform == Platform::Phone && s.contrast_level > 0.0 {
                Some(curve_for_default_contrast(1.5))
            } else {
                None
            }
        })
        .tone_delta_pair(|s| {
            if s.platform == Platform::Watch {
                Some(ToneDeltaPair::new(
                    Role::ErrorContainer,
                    Role::ErrorDim,
                    10.0,
                    TonePolarity::Darker,
                    true,
                    DeltaConstraint::Farther,
                ))
            } else {
                None
            }
        })
        .build()
}

fn on_error_container() -> DynamicColor {
    DynamicColor::builder(
        Role::OnErrorContainer,
        Arc::new(|s| s.error_palette.clone()),
    )
    .background(Role::ErrorContainer)
    .contrast_curve_fn(|s| {
        Some(curve_for_default_contrast(
            if s.platform == Platform::Phone {
                4.5
            } else {
                7.0
            },
        ))
    })
    .build()
}

// --- Fixed colors ---
//
// Fixed roles hold the light-mode, default-contrast container tone in every
// mode, so they resolve their container against a neutralized scheme.

fn primary_fixed() -> DynamicColor {
    DynamicColor::builder(Role::PrimaryFixed, Arc::new(|s| s.primary_palette.clone()))
        .is_background(true)
        .background_fn(|s| {
            if s.platform == Platform::Phone {
                Some(highest_surface(s))
            } else {
                None
            }
        })
        .tone(|s| {
            let fixed = s.with_mode_and_contrast(false, 0.0);
            fixed.tone(Role::PrimaryContainer)
        })
        .contrast_curve_fn(|s| {
            if s.platform == Platform::Phone && s.contrast_level > 0.0 {
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
    .tone(|s| s.tone(Role::PrimaryFixed))
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

fn secondary_fixed() -> DynamicColor {
    DynamicColor::builder(
        Role::SecondaryFixed,
        Arc::new(|s| s.secondary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| {
        if s.platform == Platform::Phone {
            Some(highest_surface(s))
        } else {
            None
        }
    })
    .tone(|s| {
        let fixed = s.with_mode_and_contrast(false, 0.0);
        fixed.tone(Role::SecondaryContainer)
    })
    .contrast_curve_fn(|s| {
        if s.platform == Platform::Phone && s.contrast_level > 0.0 {
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
    .tone(|s| s.tone(Role::SecondaryFixed))
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

fn tertiary_fixed() -> DynamicColor {
    DynamicColor::builder(
        Role::TertiaryFixed,
        Arc::new(|s| s.tertiary_palette.clone()),
    )
    .is_background(true)
    .background_fn(|s| {
        if s.platform == Platform::Phone {
            Some(highest_surface(s))
        } else {
            None
        }
    })
    .tone(|s| {
        let fixed = s.with_mode_and_contrast(false, 0.0);
        fixed.tone(Role::TertiaryContainer)
    })
    .contrast_curve_fn(|s| {
        if s.platform == Platform::Phone && s.contrast_level > 0.0 {
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
    .tone(|s| s.tone(Role::TertiaryFixed))
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
