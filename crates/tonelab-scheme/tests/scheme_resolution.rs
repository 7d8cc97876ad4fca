//! End-to-end resolution: schemes built from a seed, resolved through the
//! version role tables.

use tonelab_hct::Hct;
use tonelab_hct::contrast;
use tonelab_scheme::{ContrastCurve, DynamicScheme, Platform, Role, SpecVersion, Variant};

fn seed() -> Hct {
    Hct::from(280.0, 40.0, 50.0)
}

#[test]
fn legacy_variant_requested_at_2026_resolves_under_2021() {
    let scheme = DynamicScheme::builder(seed())
        .variant(Variant::Rainbow)
        .spec_version(SpecVersion::Spec2026)
        .build();
    assert_eq!(scheme.spec_version, SpecVersion::Spec2021);
    assert_eq!(scheme.tone(Role::Primary), 40.0);
}

#[test]
fn core_variant_requested_at_2026_resolves_under_2025() {
    let scheme = DynamicScheme::builder(seed())
        .variant(Variant::TonalSpot)
        .spec_version(SpecVersion::Spec2026)
        .build();
    assert_eq!(scheme.spec_version, SpecVersion::Spec2025);
}

#[test]
fn cmf_keeps_the_requested_version() {
    let scheme = DynamicScheme::builder(seed())
        .variant(Variant::Cmf)
        .spec_version(SpecVersion::Spec2026)
        .build();
    assert_eq!(scheme.spec_version, SpecVersion::Spec2026);
}

#[test]
fn curve_tops_out_at_its_high_anchor() {
    let curve = ContrastCurve::new(1.5, 1.5, 3.0, 5.5);
    assert_eq!(curve.get(1.0), 5.5);
}

#[test]
fn on_primary_reads_against_primary() {
    for is_dark in [false, true] {
        let scheme = DynamicScheme::builder(seed())
            .variant(Variant::TonalSpot)
            .spec_version(SpecVersion::Spec2025)
            .dark(is_dark)
            .build();
        let ratio =
            contrast::ratio_of_tones(scheme.tone(Role::Primary), scheme.tone(Role::OnPrimary));
        assert!(ratio >= 6.0, "ratio {ratio} in dark={is_dark}");
    }
}

#[test]
fn flipping_mode_twice_is_the_identity() {
    let scheme = DynamicScheme::builder(seed())
        .variant(Variant::Vibrant)
        .spec_version(SpecVersion::Spec2025)
        .dark(true)
        .build();
    let round_trip = scheme.with_mode(false).with_mode(true);
    for role in Role::ALL {
        assert_eq!(scheme.argb(role), round_trip.argb(role), "{}", role.name());
    }
}

#[test]
fn fixed_dim_sits_exactly_below_fixed() {
    let scheme = DynamicScheme::builder(seed())
        .variant(Variant::TonalSpot)
        .spec_version(SpecVersion::Spec2025)
        .build();
    let fixed = scheme.tone(Role::PrimaryFixed);
    let dim = scheme.tone(Role::PrimaryFixedDim);
    if fixed >= 5.0 {
        assert!((fixed - dim - 5.0).abs() < 1e-9, "fixed {fixed}, dim {dim}");
    } else {
        assert_eq!(dim, 0.0);
    }
}

#[test]
fn container_keeps_its_distance_from_primary() {
    let scheme = DynamicScheme::builder(seed())
        .variant(Variant::TonalSpot)
        .spec_version(SpecVersion::Spec2025)
        .build();
    let primary = scheme.tone(Role::Primary);
    let container = scheme.tone(Role::PrimaryContainer);
    // The anchored member stops short only when the delta runs out of range.
    let achievable = container.min(100.0 - container);
    assert!(
        (container - primary).abs() + 1e-9 >= 5.0f64.min(achievable),
        "primary {primary}, container {container}"
    );
}

#[test]
fn every_role_resolves_in_range_under_every_table() {
    let cases = [
        (Variant::TonalSpot, SpecVersion::Spec2021, Platform::Phone),
        (Variant::TonalSpot, SpecVersion::Spec2025, Platform::Phone),
        (Variant::Expressive, SpecVersion::Spec2025, Platform::Watch),
        (Variant::Cmf, SpecVersion::Spec2026, Platform::Phone),
    ];
    for (variant, version, platform) in cases {
        for is_dark in [false, true] {
            let scheme = DynamicScheme::builder(seed())
                .variant(variant)
                .spec_version(version)
                .platform(platform)
                .dark(is_dark)
                .build();
            for role in Role::ALL {
                let tone = scheme.tone(role);
                assert!(
                    (0.0..=100.0).contains(&tone),
                    "{:?}/{:?} {}: {tone}",
                    variant,
                    version,
                    role.name()
                );
            }
        }
    }
}

#[test]
fn cmf_tertiary_tracks_the_second_seed() {
    let second = Hct::from(120.0, 30.0, 70.0);
    let scheme = DynamicScheme::builder(seed())
        .sources(vec![seed(), second])
        .variant(Variant::Cmf)
        .spec_version(SpecVersion::Spec2026)
        .build();
    let expected = second.tone().clamp(61.0, 90.0);
    assert!((scheme.tone(Role::TertiaryContainer) - expected).abs() < 1e-9);
}

#[test]
fn increasing_contrast_never_lowers_on_surface_contrast() {
    let low = DynamicScheme::builder(seed())
        .variant(Variant::TonalSpot)
        .spec_version(SpecVersion::Spec2025)
        .contrast_level(0.0)
        .build();
    let high = low.with_mode_and_contrast(false, 1.0);
    let surface = Role::SurfaceDim;
    let low_ratio = contrast::ratio_of_tones(low.tone(surface), low.tone(Role::OnSurface));
    let high_ratio = contrast::ratio_of_tones(high.tone(surface), high.tone(Role::OnSurface));
    assert!(high_ratio + 1e-9 >= low_ratio, "{low_ratio} -> {high_ratio}");
}

#[test]
fn vibrant_accent_stays_colorful_at_low_gamut_hues() {
    // Cyan hues carry little chroma, so the accent tone search cannot reach
    // the palette's requested chroma and must settle on the most chromatic
    // tone instead of walking off the end of the range.
    let scheme = DynamicScheme::builder(Hct::from(200.0, 60.0, 50.0))
        .variant(Variant::Vibrant)
        .spec_version(SpecVersion::Spec2025)
        .dark(false)
        .build();
    let primary = scheme.tone(Role::Primary);
    assert!(primary > 0.0 && primary < 100.0, "primary tone {primary}");
    let hct = scheme.hct(Role::Primary);
    assert!(hct.chroma() > 10.0, "primary chroma {}", hct.chroma());
}
