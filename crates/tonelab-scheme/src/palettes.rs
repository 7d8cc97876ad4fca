#![forbid(unsafe_code)]

//! Seed-to-palette plans, one per spec version.
//!
//! Each plan is a pure function of the seed list, the variant, and the
//! mode/platform/contrast inputs. The 2026 plan reuses the 2025 rules for
//! every variant except [`Variant::Cmf`], which derives all six palettes
//! directly from seed chroma.

use crate::scheme::DynamicScheme;
use crate::variant::Variant;
use crate::version::{Platform, SpecVersion};
use tonelab_hct::dislike::fix_if_disliked;
use tonelab_hct::hct::{is_blue_hue, is_yellow_hue};
use tonelab_hct::math::sanitize_degrees;
use tonelab_hct::temperature::TemperatureCache;
use tonelab_hct::{Hct, TonalPalette};

/// The six palettes every scheme carries.
pub struct CorePalettes {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
    pub error: TonalPalette,
}

/// Builds the palettes for a resolved spec version.
///
/// `seeds` must be non-empty; only [`Variant::Cmf`] reads past the first
/// entry.
#[must_use]
pub fn build(
    spec_version: SpecVersion,
    variant: Variant,
    seeds: &[Hct],
    is_dark: bool,
    platform: Platform,
    _contrast_level: f64,
) -> CorePalettes {
    if variant == Variant::Cmf {
        return cmf(seeds);
    }
    let src = &seeds[0];
    match spec_version {
        SpecVersion::Spec2021 => CorePalettes {
            primary: primary_2021(variant, src),
            secondary: secondary_2021(variant, src),
            tertiary: tertiary_2021(variant, src),
            neutral: neutral_2021(variant, src),
            neutral_variant: neutral_variant_2021(variant, src),
            error: TonalPalette::from_hue_and_chroma(25.0, 84.0),
        },
        SpecVersion::Spec2025 | SpecVersion::Spec2026 => CorePalettes {
            primary: primary_2025(variant, src, is_dark, platform),
            secondary: secondary_2025(variant, src, is_dark, platform),
            tertiary: tertiary_2025(variant, src, platform),
            neutral: neutral_2025(variant, src, is_dark, platform),
            neutral_variant: neutral_variant_2025(variant, src, is_dark, platform),
            error: error_2025(variant, src, platform),
        },
    }
}

fn cmf(seeds: &[Hct]) -> CorePalettes {
    let src = &seeds[0];
    let second = seeds.get(1).unwrap_or(src);
    let tertiary = if src.to_argb() == second.to_argb() {
        TonalPalette::from_hue_and_chroma(src.hue(), src.chroma() * 0.75)
    } else {
        TonalPalette::from_hue_and_chroma(second.hue(), second.chroma())
    };
    CorePalettes {
        primary: TonalPalette::from_hue_and_chroma(src.hue(), src.chroma()),
        secondary: TonalPalette::from_hue_and_chroma(src.hue(), src.chroma() * 0.5),
        tertiary,
        neutral: TonalPalette::from_hue_and_chroma(src.hue(), src.chroma() * 0.2),
        neutral_variant: TonalPalette::from_hue_and_chroma(src.hue(), src.chroma() * 0.2),
        error: TonalPalette::from_hue_and_chroma(23.0, src.chroma().max(50.0)),
    }
}

fn primary_2021(variant: Variant, src: &Hct) -> TonalPalette {
    match variant {
        Variant::Content | Variant::Fidelity => {
            TonalPalette::from_hue_and_chroma(src.hue(), src.chroma())
        }
        Variant::FruitSalad => {
            TonalPalette::from_hue_and_chroma(sanitize_degrees(src.hue() - 50.0), 48.0)
        }
        Variant::Monochrome => TonalPalette::from_hue_and_chroma(src.hue(), 0.0),
        Variant::Neutral => TonalPalette::from_hue_and_chroma(src.hue(), 12.0),
        Variant::Rainbow => TonalPalette::from_hue_and_chroma(src.hue(), 48.0),
        Variant::TonalSpot => TonalPalette::from_hue_and_chroma(src.hue(), 36.0),
        Variant::Expressive => {
            TonalPalette::from_hue_and_chroma(sanitize_degrees(src.hue() + 240.0), 40.0)
        }
        Variant::Vibrant => TonalPalette::from_hue_and_chroma(src.hue(), 200.0),
        Variant::Cmf => unreachable!("cmf palettes are built by the cmf plan"),
    }
}

fn secondary_2021(variant: Variant, src: &Hct) -> TonalPalette {
    match variant {
        Variant::Content | Variant::Fidelity => TonalPalette::from_hue_and_chroma(
            src.hue(),
            (src.chroma() - 32.0).max(src.chroma() * 0.5),
        ),
        Variant::FruitSalad => {
            TonalPalette::from_hue_and_chroma(sanitize_degrees(src.hue() - 50.0), 36.0)
        }
        Variant::Monochrome => TonalPalette::from_hue_and_chroma(src.hue(), 0.0),
        Variant::Neutral => TonalPalette::from_hue_and_chroma(src.hue(), 8.0),
        Variant::Rainbow | Variant::TonalSpot => {
            TonalPalette::from_hue_and_chroma(src.hue(), 16.0)
        }
        Variant::Expressive => TonalPalette::from_hue_and_chroma(
            DynamicScheme::rotated_hue(
                src,
                &[0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0],
                &[45.0, 95.0, 45.0, 20.0, 45.0, 90.0, 45.0, 45.0, 45.0],
            ),
            24.0,
        ),
        Variant::Vibrant => TonalPalette::from_hue_and_chroma(
            DynamicScheme::rotated_hue(
                src,
                &[0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0],
                &[18.0, 15.0, 10.0, 12.0, 15.0, 18.0, 15.0, 12.0, 12.0],
            ),
            24.0,
        ),
        Variant::Cmf => unreachable!("cmf palettes are built by the cmf plan"),
    }
}

fn tertiary_2021(variant: Variant, src: &Hct) -> TonalPalette {
    match variant {
        Variant::Content => TonalPalette::from_hct(fix_if_disliked(
            TemperatureCache::new(*src).analogous_with(3, 6)[2],
        )),
        Variant::Fidelity => {
            TonalPalette::from_hct(fix_if_disliked(TemperatureCache::new(*src).complement()))
        }
        Variant::FruitSalad => TonalPalette::from_hue_and_chroma(src.hue(), 36.0),
        Variant::Monochrome => TonalPalette::from_hue_and_chroma(src.hue(), 0.0),
        Variant::Neutral => TonalPalette::from_hue_and_chroma(src.hue(), 16.0),
        Variant::Rainbow | Variant::TonalSpot => {
            TonalPalette::from_hue_and_chroma(sanitize_degrees(src.hue() + 60.0), 24.0)
        }
        Variant::Expressive => TonalPalette::from_hue_and_chroma(
            DynamicScheme::rotated_hue(
                src,
                &[0.0, 21.0, 51.0, 121.0, 151.0, 191.0, 271.0, 321.0, 360.0],
                &[120.0, 120.0, 20.0, 45.0, 20.0, 15.0, 20.0, 120.0, 120.0],
            ),
            32.0,
        ),
        Variant::Vibrant => TonalPalette::from_hue_and_chroma(
            DynamicScheme::rotated_hue(
                src,
                &[0.0, 41.0, 61.0, 101.0, 131.0, 181.0, 251.0, 301.0, 360.0],
                &[35.0, 30.0, 20.0, 25.0, 30.0, 35.0, 30.0, 25.0, 25.0],
            ),
            32.0,
        ),
        Variant::Cmf => unreachable!("cmf palettes are built by the cmf plan"),
    }
}

fn neutral_2021(variant: Variant, src: &Hct) -> TonalPalette {
    match variant {
        Variant::Content | Variant::Fidelity => {
            TonalPalette::from_hue_and_chroma(src.hue(), src.chroma() / 8.0)
        }
        Variant::FruitSalad | Variant::Vibrant => {
            TonalPalette::from_hue_and_chroma(src.hue(), 10.0)
        }
        Variant::Monochrome | Variant::Rainbow => {
            TonalPalette::from_hue_and_chroma(src.hue(), 0.0)
        }
        Variant::Neutral => TonalPalette::from_hue_and_chroma(src.hue(), 2.0),
        Variant::TonalSpot => TonalPalette::from_hue_and_chroma(src.hue(), 6.0),
        Variant::Expressive => {
            TonalPalette::from_hue_and_chroma(sanitize_degrees(src.hue() + 15.0), 8.0)
        }
        Variant::Cmf => unreachable!("cmf palettes are built by the cmf plan"),
    }
}

fn neutral_variant_2021(variant: Variant, src: &Hct) -> TonalPalette {
    match variant {
        Variant::Content | Variant::Fidelity => {
            TonalPalette::from_hue_and_chroma(src.hue(), src.chroma() / 8.0 + 4.0)
        }
        Variant::FruitSalad => TonalPalette::from_hue_and_chroma(src.hue(), 16.0),
        Variant::Monochrome | Variant::Rainbow => {
            TonalPalette::from_hue_and_chroma(src.hue(), 0.0)
        }
        Variant::Neutral => TonalPalette::from_hue_and_chroma(src.hue(), 2.0),
        Variant::TonalSpot => TonalPalette::from_hue_and_chroma(src.hue(), 8.0),
        Variant::Expressive => {
            TonalPalette::from_hue_and_chroma(sanitize_degrees(src.hue() + 15.0), 12.0)
        }
        Variant::Vibrant => TonalPalette::from_hue_and_chroma(src.hue(), 12.0),
        Variant::Cmf => unreachable!("cmf palettes are built by the cmf plan"),
    }
}

fn primary_2025(variant: Variant, src: &Hct, is_dark: bool, platform: Platform) -> TonalPalette {
    match variant {
        Variant::Neutral => TonalPalette::from_hue_and_chroma(
            src.hue(),
            match (platform, is_blue_hue(src.hue())) {
                (Platform::Phone, true) => 12.0,
                (Platform::Phone, false) => 8.0,
                (Platform::Watch, true) => 16.0,
                (Platform::Watch, false) => 12.0,
            },
        ),
        Variant::TonalSpot => TonalPalette::from_hue_and_chroma(
            src.hue(),
            if platform == Platform::Phone && is_dark { 26.0 } else { 32.0 },
        ),
        Variant::Expressive => TonalPalette::from_hue_and_chroma(
            src.hue(),
            match platform {
                Platform::Phone if is_dark => 36.0,
                Platform::Phone => 48.0,
                Platform::Watch => 40.0,
            },
        ),
        Variant::Vibrant => TonalPalette::from_hue_and_chroma(
            src.hue(),
            if platform == Platform::Phone { 74.0 } else { 56.0 },
        ),
        _ => primary_2021(variant, src),
    }
}

fn secondary_2025(variant: Variant, src: &Hct, is_dark: bool, platform: Platform) -> TonalPalette {
    match variant {
        Variant::Neutral => TonalPalette::from_hue_and_chroma(
            src.hue(),
            match (platform, is_blue_hue(src.hue())) {
                (Platform::Phone, true) => 6.0,
                (Platform::Phone, false) => 4.0,
                (Platform::Watch, true) => 10.0,
                (Platform::Watch, false) => 6.0,
            },
        ),
        Variant::TonalSpot => TonalPalette::from_hue_and_chroma(src.hue(), 16.0),
        Variant::Expressive => TonalPalette::from_hue_and_chroma(
            DynamicScheme::rotated_hue(
                src,
                &[0.0, 105.0, 140.0, 204.0, 253.0, 278.0, 300.0, 333.0, 360.0],
                &[-160.0, 155.0, -100.0, 96.0, -96.0, -156.0, -165.0, -160.0],
            ),
            match platform {
                Platform::Phone if is_dark => 16.0,
                Platform::Phone => 24.0,
                Platform::Watch => 24.0,
            },
        ),
        Variant::Vibrant => TonalPalette::from_hue_and_chroma(
            DynamicScheme::rotated_hue(
                src,
                &[0.0, 38.0, 105.0, 140.0, 333.0, 360.0],
                &[-14.0, 10.0, -14.0, 10.0, -14.0],
            ),
            if platform == Platform::Phone { 56.0 } else { 36.0 },
        ),
        _ => secondary_2021(variant, src),
    }
}

fn tertiary_2025(variant: Variant, src: &Hct, platform: Platform) -> TonalPalette {
    match variant {
        Variant::Neutral => TonalPalette::from_hue_and_chroma(
            DynamicScheme::rotated_hue(
                src,
                &[0.0, 38.0, 105.0, 161.0, 204.0, 278.0, 333.0, 360.0],
                &[-32.0, 26.0, 10.0, -39.0, 24.0, -15.0, -32.0],
            ),
            if platform == Platform::Phone { 20.0 } else { 36.0 },
        ),
        Variant::TonalSpot => TonalPalette::from_hue_and_chroma(
            DynamicScheme::rotated_hue(
                src,
                &[0.0, 20.0, 71.0, 161.0, 333.0, 360.0],
                &[-40.0, 48.0, -32.0, 40.0, -32.0],
            ),
            if platform == Platform::Phone { 28.0 } else { 32.0 },
        ),
        Variant::Expressive => TonalPalette::from_hue_and_chroma(
            DynamicScheme::rotated_hue(
                src,
                &[0.0, 105.0, 140.0, 204.0, 253.0, 278.0, 300.0, 333.0, 360.0],
                &[-165.0, 160.0, -105.0, 101.0, -101.0, -160.0, -170.0, -165.0],
            ),
            48.0,
        ),
        Variant::Vibrant => TonalPalette::from_hue_and_chroma(
            DynamicScheme::rotated_hue(
                src,
                &[0.0, 38.0, 71.0, 105.0, 140.0, 161.0, 253.0, 333.0, 360.0],
                &[-72.0, 35.0, 24.0, -24.0, 62.0, 50.0, 62.0, -72.0],
            ),
            56.0,
        ),
        _ => tertiary_2021(variant, src),
    }
}

// Shared by the neutral and neutral-variant rules.
fn expressive_neutral_hue(src: &Hct) -> f64 {
    DynamicScheme::rotated_hue(
        src,
        &[0.0, 71.0, 124.0, 253.0, 278.0, 300.0, 360.0],
        &[10.0, 0.0, 10.0, 0.0, 10.0, 0.0],
    )
}

fn expressive_neutral_chroma(hue: f64, is_dark: bool, platform: Platform) -> f64 {
    match platform {
        Platform::Phone if is_dark => {
            if is_yellow_hue(hue) {
                6.0
            } else {
                14.0
            }
        }
        Platform::Phone => 18.0,
        Platform::Watch => 12.0,
    }
}

fn vibrant_neutral_hue(src: &Hct) -> f64 {
    DynamicScheme::rotated_hue(
        src,
        &[0.0, 38.0, 105.0, 140.0, 333.0, 360.0],
        &[-14.0, 10.0, -14.0, 10.0, -14.0],
    )
}

fn vibrant_neutral_chroma(hue: f64, platform: Platform) -> f64 {
    match platform {
        Platform::Phone => 28.0,
        Platform::Watch => {
            if is_blue_hue(hue) {
                28.0
            } else {
                20.0
            }
        }
    }
}

fn neutral_2025(variant: Variant, src: &Hct, is_dark: bool, platform: Platform) -> TonalPalette {
    match variant {
        Variant::Neutral => TonalPalette::from_hue_and_chroma(
            src.hue(),
            if platform == Platform::Phone { 1.4 } else { 6.0 },
        ),
        Variant::TonalSpot => TonalPalette::from_hue_and_chroma(
            src.hue(),
            if platform == Platform::Phone { 5.0 } else { 10.0 },
        ),
        Variant::Expressive => {
            let hue = expressive_neutral_hue(src);
            TonalPalette::from_hue_and_chroma(
                hue,
                expressive_neutral_chroma(hue, is_dark, platform),
            )
        }
        Variant::Vibrant => {
            let hue = vibrant_neutral_hue(src);
            TonalPalette::from_hue_and_chroma(hue, vibrant_neutral_chroma(hue, platform))
        }
        _ => neutral_2021(variant, src),
    }
}

fn neutral_variant_2025(
    variant: Variant,
    src: &Hct,
    is_dark: bool,
    platform: Platform,
) -> TonalPalette {
    match variant {
        Variant::Neutral => TonalPalette::from_hue_and_chroma(
            src.hue(),
            (if platform == Platform::Phone { 1.4 } else { 6.0 }) * 2.2,
        ),
        Variant::TonalSpot => TonalPalette::from_hue_and_chroma(
            src.hue(),
            (if platform == Platform::Phone { 5.0 } else { 10.0 }) * 1.7,
        ),
        Variant::Expressive => {
            let hue = expressive_neutral_hue(src);
            let chroma = expressive_neutral_chroma(hue, is_dark, platform);
            TonalPalette::from_hue_and_chroma(
                hue,
                chroma * if (105.0..125.0).contains(&hue) { 1.6 } else { 2.3 },
            )
        }
        Variant::Vibrant => {
            let hue = vibrant_neutral_hue(src);
            TonalPalette::from_hue_and_chroma(hue, vibrant_neutral_chroma(hue, platform) * 1.29)
        }
        _ => neutral_variant_2021(variant, src),
    }
}

fn error_2025(variant: Variant, src: &Hct, platform: Platform) -> TonalPalette {
    let error_hue = DynamicScheme::piecewise_value(
        src,
        &[0.0, 3.0, 13.0, 23.0, 33.0, 43.0, 153.0, 273.0, 360.0],
        &[12.0, 22.0, 32.0, 12.0, 22.0, 32.0, 22.0, 12.0],
    );
    let chroma = match variant {
        Variant::Neutral => {
            if platform == Platform::Phone {
                50.0
            } else {
                40.0
            }
        }
        Variant::TonalSpot => {
            if platform == Platform::Phone {
                60.0
            } else {
                48.0
            }
        }
        Variant::Expressive => {
            if platform == Platform::Phone {
                64.0
            } else {
                48.0
            }
        }
        Variant::Vibrant => {
            if platform == Platform::Phone {
                80.0
            } else {
                60.0
            }
        }
        _ => return TonalPalette::from_hue_and_chroma(25.0, 84.0),
    };
    TonalPalette::from_hue_and_chroma(error_hue, chroma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monochrome_palettes_have_no_chroma() {
        let src = Hct::from(120.0, 60.0, 50.0);
        let palettes = build(
            SpecVersion::Spec2021,
            Variant::Monochrome,
            &[src],
            false,
            Platform::Phone,
            0.0,
        );
        assert_eq!(palettes.primary.chroma, 0.0);
        assert_eq!(palettes.neutral.chroma, 0.0);
    }

    #[test]
    fn tonal_spot_2025_dark_primary_is_muted() {
        let src = Hct::from(280.0, 40.0, 50.0);
        let dark = build(
            SpecVersion::Spec2025,
            Variant::TonalSpot,
            &[src],
            true,
            Platform::Phone,
            0.0,
        );
        let light = build(
            SpecVersion::Spec2025,
            Variant::TonalSpot,
            &[src],
            false,
            Platform::Phone,
            0.0,
        );
        assert_eq!(dark.primary.chroma, 26.0);
        assert_eq!(light.primary.chroma, 32.0);
    }

    #[test]
    fn cmf_second_seed_drives_tertiary() {
        let seeds = vec![Hct::from(280.0, 40.0, 50.0), Hct::from(120.0, 30.0, 50.0)];
        let palettes = build(
            SpecVersion::Spec2026,
            Variant::Cmf,
            &seeds,
            false,
            Platform::Phone,
            0.0,
        );
        assert!((palettes.tertiary.hue - seeds[1].hue()).abs() < 1e-9);
    }

    #[test]
    fn cmf_single_seed_tertiary_reuses_primary_hue() {
        let seeds = vec![Hct::from(280.0, 40.0, 50.0)];
        let palettes = build(
            SpecVersion::Spec2026,
            Variant::Cmf,
            &seeds,
            false,
            Platform::Phone,
            0.0,
        );
        assert!((palettes.tertiary.hue - seeds[0].hue()).abs() < 1e-9);
        assert!((palettes.tertiary.chroma - seeds[0].chroma() * 0.75).abs() < 1e-9);
    }

    #[test]
    fn error_2025_hue_follows_seed_band() {
        let src = Hct::from(100.0, 40.0, 50.0);
        let palettes = build(
            SpecVersion::Spec2025,
            Variant::TonalSpot,
            &[src],
            false,
            Platform::Phone,
            0.0,
        );
        assert_eq!(palettes.error.hue, 32.0);
        assert_eq!(palettes.error.chroma, 60.0);
    }
}
