//! Property tests for scheme resolution: range, purity, and version fallback.

use proptest::prelude::*;
use tonelab_hct::Hct;
use tonelab_scheme::{DynamicScheme, Platform, Role, SpecVersion, Variant};

const VARIANTS: [Variant; 10] = [
    Variant::Monochrome,
    Variant::Neutral,
    Variant::TonalSpot,
    Variant::Vibrant,
    Variant::Expressive,
    Variant::Fidelity,
    Variant::Content,
    Variant::Rainbow,
    Variant::FruitSalad,
    Variant::Cmf,
];

fn any_variant() -> impl Strategy<Value = Variant> {
    (0..VARIANTS.len()).prop_map(|i| VARIANTS[i])
}

fn any_version() -> impl Strategy<Value = SpecVersion> {
    (0..SpecVersion::ALL.len()).prop_map(|i| SpecVersion::ALL[i])
}

fn any_platform() -> impl Strategy<Value = Platform> {
    prop_oneof![Just(Platform::Phone), Just(Platform::Watch)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every role of every scheme resolves to a tone inside [0, 100].
    #[test]
    fn all_tones_in_range(
        hue in 0.0f64..360.0,
        chroma in 0.0f64..120.0,
        tone in 0.0f64..100.0,
        variant in any_variant(),
        version in any_version(),
        platform in any_platform(),
        is_dark in any::<bool>(),
        contrast_level in -1.0f64..=1.0,
    ) {
        let scheme = DynamicScheme::builder(Hct::from(hue, chroma, tone))
            .variant(variant)
            .spec_version(version)
            .platform(platform)
            .dark(is_dark)
            .contrast_level(contrast_level)
            .build();
        for role in Role::ALL {
            let resolved = scheme.tone(role);
            prop_assert!(
                (0.0..=100.0).contains(&resolved),
                "{}: {resolved}",
                role.name()
            );
        }
    }

    /// Building the same scheme twice yields identical colors for every role.
    #[test]
    fn resolution_is_pure(
        hue in 0.0f64..360.0,
        chroma in 0.0f64..120.0,
        variant in any_variant(),
        version in any_version(),
        is_dark in any::<bool>(),
    ) {
        let build = || {
            DynamicScheme::builder(Hct::from(hue, chroma, 50.0))
                .variant(variant)
                .spec_version(version)
                .dark(is_dark)
                .build()
        };
        let a = build();
        let b = build();
        for role in Role::ALL {
            prop_assert_eq!(a.argb(role), b.argb(role), "{}", role.name());
        }
    }

    /// The resolved version never exceeds the requested one.
    #[test]
    fn fallback_never_upgrades(
        hue in 0.0f64..360.0,
        variant in any_variant(),
        version in any_version(),
    ) {
        let scheme = DynamicScheme::builder(Hct::from(hue, 40.0, 50.0))
            .variant(variant)
            .spec_version(version)
            .build();
        prop_assert!(scheme.spec_version <= version);
    }

    /// Flipping the mode away and back reproduces every role exactly.
    #[test]
    fn mode_flip_round_trip(
        hue in 0.0f64..360.0,
        chroma in 0.0f64..120.0,
        variant in any_variant(),
        version in any_version(),
        is_dark in any::<bool>(),
    ) {
        let scheme = DynamicScheme::builder(Hct::from(hue, chroma, 50.0))
            .variant(variant)
            .spec_version(version)
            .dark(is_dark)
            .build();
        let round_trip = scheme.with_mode(!is_dark).with_mode(is_dark);
        for role in Role::ALL {
            prop_assert_eq!(scheme.argb(role), round_trip.argb(role), "{}", role.name());
        }
    }
}
