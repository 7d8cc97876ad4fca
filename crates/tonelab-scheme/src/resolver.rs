#![forbid(unsafe_code)]

//! Tone resolution.
//!
//! Turns a role definition plus a scheme into a concrete tone. Resolution is
//! a pure function of its inputs: pair constraints first, then the contrast
//! pass against the background, then background tone-band clamps. Contrast
//! that cannot be reached inside `[0, 100]` degrades to the closest
//! achievable tone rather than failing.

use crate::dynamic_color::{DynamicColor, foreground_tone, tone_prefers_light_foreground};
use crate::role::Role;
use crate::scheme::DynamicScheme;
use crate::tables;
use crate::tone_delta_pair::{DeltaConstraint, TonePolarity, ToneDeltaPair};
use crate::version::SpecVersion;
use tonelab_hct::contrast;
use tonelab_hct::{Argb, Hct};

/// The surface role with the highest tone in the scheme's mode. Foregrounds
/// contrast against this when they must work on any surface.
#[must_use]
pub fn highest_surface(scheme: &DynamicScheme) -> Role {
    if scheme.is_dark {
        Role::SurfaceBright
    } else {
        Role::SurfaceDim
    }
}

/// Resolves a role definition to its tone under `scheme`.
#[must_use]
pub fn resolve_tone(scheme: &DynamicScheme, color: &DynamicColor) -> f64 {
    let tone = match scheme.spec_version {
        SpecVersion::Spec2021 => tone_2021(scheme, color),
        SpecVersion::Spec2025 | SpecVersion::Spec2026 => tone_2025(scheme, color),
    };
    crate::trace!(role = color.role.name(), tone, "resolved tone");
    tone
}

/// Resolves a role definition to an HCT color under `scheme`.
#[must_use]
pub fn resolve_hct(scheme: &DynamicScheme, color: &DynamicColor) -> Hct {
    let palette = (color.palette)(scheme);
    let tone = resolve_tone(scheme, color);
    let chroma_multiplier = color.chroma_multiplier.as_ref().map_or(1.0, |f| f(scheme));
    Hct::from(palette.hue, palette.chroma * chroma_multiplier, tone)
}

/// Resolves a role definition to an ARGB value, applying any role opacity
/// in the alpha channel.
#[must_use]
pub fn resolve_argb(scheme: &DynamicScheme, color: &DynamicColor) -> Argb {
    let argb = resolve_hct(scheme, color).to_argb();
    if let Some(opacity) = color.opacity.as_ref().and_then(|f| f(scheme)) {
        let alpha = ((opacity * 255.0).round() as u32).min(255);
        return Argb((argb.0 & 0x00ff_ffff) | (alpha << 24));
    }
    argb
}

fn defined(scheme: &DynamicScheme, role: Role) -> &'static DynamicColor {
    tables::role_table(scheme.spec_version).get(role)
}

// The original scheme generation: both pair members are solved together,
// then pulled apart until the delta holds, avoiding the 50..60 band where
// neither black nor white foregrounds work well.
fn tone_2021(scheme: &DynamicScheme, color: &DynamicColor) -> f64 {
    let decreasing_contrast = scheme.contrast_level < 0.0;
    let pair = color.tone_delta_pair.as_ref().and_then(|f| f(scheme));

    if let Some(pair) = pair {
        return pair_tone_2021(scheme, color, &pair, decreasing_contrast);
    }

    let mut answer = (color.tone)(scheme);
    let background = color
        .background
        .as_ref()
        .and_then(|f| f(scheme))
        .map(|role| defined(scheme, role));
    let contrast_curve = color.contrast_curve.as_ref().and_then(|f| f(scheme));
    let (Some(bg_color), Some(curve)) = (background, contrast_curve) else {
        return answer;
    };

    let bg_tone = resolve_tone(scheme, bg_color);
    let desired_ratio = curve.get(scheme.contrast_level);
    if contrast::ratio_of_tones(bg_tone, answer) < desired_ratio {
        answer = foreground_tone(bg_tone, desired_ratio);
    }
    if decreasing_contrast {
        answer = foreground_tone(bg_tone, desired_ratio);
    }
    if color.is_background && (50.0..60.0).contains(&answer) {
        answer = if contrast::ratio_of_tones(49.0, bg_tone) >= desired_ratio {
            49.0
        } else {
            60.0
        };
    }

    let second_background = color
        .second_background
        .as_ref()
        .and_then(|f| f(scheme))
        .map(|role| defined(scheme, role));
    let Some(bg2_color) = second_background else {
        return answer;
    };

    let bg_tone1 = resolve_tone(scheme, bg_color);
    let bg_tone2 = resolve_tone(scheme, bg2_color);
    let upper = bg_tone1.max(bg_tone2);
    let lower = bg_tone1.min(bg_tone2);
    if contrast::ratio_of_tones(upper, answer) >= desired_ratio
        && contrast::ratio_of_tones(lower, answer) >= desired_ratio
    {
        return answer;
    }
    let light_option = contrast::lighter(upper, desired_ratio);
    let dark_option = contrast::darker(lower, desired_ratio);
    if tone_prefers_light_foreground(bg_tone1) || tone_prefers_light_foreground(bg_tone2) {
        return light_option.unwrap_or(100.0);
    }
    match (light_option, dark_option) {
        (Some(_), Some(dark)) => dark,
        (Some(light), None) => light,
        (None, Some(dark)) => dark,
        (None, None) => 0.0,
    }
}

fn pair_tone_2021(
    scheme: &DynamicScheme,
    color: &DynamicColor,
    pair: &ToneDeltaPair,
    decreasing_contrast: bool,
) -> f64 {
    let role_a = defined(scheme, pair.role_a);
    let role_b = defined(scheme, pair.role_b);
    let delta = pair.delta;
    let a_is_nearer = pair.constraint == DeltaConstraint::Nearer
        || (pair.polarity == TonePolarity::Lighter && !scheme.is_dark)
        || (pair.polarity == TonePolarity::Darker && !scheme.is_dark);
    let nearer = if a_is_nearer { role_a } else { role_b };
    let farther = if a_is_nearer { role_b } else { role_a };
    let am_nearer = color.role == nearer.role;
    let expansion_dir: f64 = if scheme.is_dark { 1.0 } else { -1.0 };
    let mut n_tone = (nearer.tone)(scheme);
    let mut f_tone = (farther.tone)(scheme);

    if let (Some(bg_fn), Some(n_curve), Some(f_curve)) = (
        color.background.as_ref(),
        nearer.contrast_curve.as_ref().and_then(|f| f(scheme)),
        farther.contrast_curve.as_ref().and_then(|f| f(scheme)),
    ) && let Some(bg_role) = bg_fn(scheme)
    {
        let n_contrast = n_curve.get(scheme.contrast_level);
        let f_contrast = f_curve.get(scheme.contrast_level);
        let bg_tone = resolve_tone(scheme, defined(scheme, bg_role));
        if contrast::ratio_of_tones(bg_tone, n_tone) < n_contrast {
            n_tone = foreground_tone(bg_tone, n_contrast);
        }
        if contrast::ratio_of_tones(bg_tone, f_tone) < f_contrast {
            f_tone = foreground_tone(bg_tone, f_contrast);
        }
        if decreasing_contrast {
            n_tone = foreground_tone(bg_tone, n_contrast);
            f_tone = foreground_tone(bg_tone, f_contrast);
        }
    }

    if (f_tone - n_tone) * expansion_dir < delta {
        f_tone = delta.mul_add(expansion_dir, n_tone).clamp(0.0, 100.0);
        if (f_tone - n_tone) * expansion_dir < delta {
            n_tone = delta.mul_add(-expansion_dir, f_tone).clamp(0.0, 100.0);
        }
    }

    // Tones 50..60 are a no-man's-land: too dark for black text, too light
    // for white. Both members move out of it together when required.
    if (50.0..60.0).contains(&n_tone) {
        if expansion_dir > 0.0 {
            n_tone = 60.0;
            f_tone = f_tone.max(delta.mul_add(expansion_dir, n_tone));
        } else {
            n_tone = 49.0;
            f_tone = f_tone.min(delta.mul_add(expansion_dir, n_tone));
        }
    } else if (50.0..60.0).contains(&f_tone) {
        if pair.stay_together {
            if expansion_dir > 0.0 {
                n_tone = 60.0;
                f_tone = f_tone.max(delta.mul_add(expansion_dir, n_tone));
            } else {
                n_tone = 49.0;
                f_tone = f_tone.min(delta.mul_add(expansion_dir, n_tone));
            }
        } else {
            f_tone = if expansion_dir > 0.0 { 60.0 } else { 49.0 };
        }
    }

    if am_nearer { n_tone } else { f_tone }
}

// The 2025 scheme generation: a pair member resolves against its partner's
// final tone with a signed delta, then runs its own contrast pass. Reused
// unchanged by 2026 definitions.
fn tone_2025(scheme: &DynamicScheme, color: &DynamicColor) -> f64 {
    let pair = color.tone_delta_pair.as_ref().and_then(|f| f(scheme));

    if let Some(pair) = pair {
        let absolute_delta = if pair.polarity == TonePolarity::Darker
            || (pair.polarity == TonePolarity::RelativeLighter && scheme.is_dark)
            || (pair.polarity == TonePolarity::RelativeDarker && !scheme.is_dark)
        {
            -pair.delta
        } else {
            pair.delta
        };

        let am_role_a = color.role == pair.role_a;
        let reference_role = if am_role_a { pair.role_b } else { pair.role_a };
        let mut self_tone = (color.tone)(scheme);
        let reference_tone = resolve_tone(scheme, defined(scheme, reference_role));
        let relative_delta = absolute_delta * if am_role_a { 1.0 } else { -1.0 };

        match pair.constraint {
            DeltaConstraint::Exact => {
                self_tone = (reference_tone + relative_delta).clamp(0.0, 100.0);
            }
            DeltaConstraint::Nearer => {
                self_tone = if relative_delta > 0.0 {
                    self_tone.clamp(
                        reference_tone,
                        (reference_tone + relative_delta).max(reference_tone),
                    )
                } else {
                    self_tone.clamp(
                        (reference_tone + relative_delta).min(reference_tone),
                        reference_tone,
                    )
                }
                .clamp(0.0, 100.0);
            }
            DeltaConstraint::Farther => {
                self_tone = if relative_delta > 0.0 {
                    self_tone.clamp((reference_tone + relative_delta).min(100.0), 100.0)
                } else {
                    self_tone.clamp(0.0, (reference_tone + relative_delta).max(0.0))
                };
            }
        }

        if let (Some(bg_fn), Some(curve_fn)) =
            (color.background.as_ref(), color.contrast_curve.as_ref())
            && let (Some(bg_role), Some(curve)) = (bg_fn(scheme), curve_fn(scheme))
        {
            let bg_tone = resolve_tone(scheme, defined(scheme, bg_role));
            let self_contrast = curve.get(scheme.contrast_level);
            if !(contrast::ratio_of_tones(bg_tone, self_tone) >= self_contrast
                && scheme.contrast_level >= 0.0)
            {
                self_tone = foreground_tone(bg_tone, self_contrast);
            }
        }

        if color.is_background && !color.role.is_fixed_dim() {
            self_tone = if self_tone >= 57.0 {
                self_tone.clamp(65.0, 100.0)
            } else {
                self_tone.clamp(0.0, 49.0)
            };
        }
        return self_tone;
    }

    let mut answer = (color.tone)(scheme);

    if let (Some(bg_fn), Some(curve_fn)) =
        (color.background.as_ref(), color.contrast_curve.as_ref())
        && let (Some(bg_role), Some(curve)) = (bg_fn(scheme), curve_fn(scheme))
    {
        let bg_tone = resolve_tone(scheme, defined(scheme, bg_role));
        let desired_ratio = curve.get(scheme.contrast_level);
        if !(contrast::ratio_of_tones(bg_tone, answer) >= desired_ratio
            && scheme.contrast_level >= 0.0)
        {
            answer = foreground_tone(bg_tone, desired_ratio);
        }
    }

    if color.is_background && !color.role.is_fixed_dim() {
        answer = if answer >= 57.0 {
            answer.clamp(65.0, 100.0)
        } else {
            answer.clamp(0.0, 49.0)
        };
    }

    if let Some(bg2_fn) = color.second_background.as_ref()
        && let (Some(bg1_role), Some(bg2_role), Some(curve)) = (
            color.background.as_ref().and_then(|f| f(scheme)),
            bg2_fn(scheme),
            color.contrast_curve.as_ref().and_then(|f| f(scheme)),
        )
    {
        let tone1 = resolve_tone(scheme, defined(scheme, bg1_role));
        let tone2 = resolve_tone(scheme, defined(scheme, bg2_role));
        let desired = curve.get(scheme.contrast_level);
        if contrast::ratio_of_tones(tone1.max(tone2), answer) < desired
            || contrast::ratio_of_tones(tone1.min(tone2), answer) < desired
        {
            let light = contrast::lighter(tone1.max(tone2), desired);
            let dark = contrast::darker(tone1.min(tone2), desired);
            if tone_prefers_light_foreground(tone1) || tone_prefers_light_foreground(tone2) {
                return light.unwrap_or(100.0);
            }
            return dark.or(light).unwrap_or(0.0);
        }
    }

    answer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;
    use tonelab_hct::Hct;

    fn scheme(is_dark: bool) -> DynamicScheme {
        DynamicScheme::builder(Hct::from(280.0, 40.0, 50.0))
            .variant(Variant::TonalSpot)
            .dark(is_dark)
            .build()
    }

    #[test]
    fn highest_surface_flips_with_mode() {
        assert_eq!(highest_surface(&scheme(true)), Role::SurfaceBright);
        assert_eq!(highest_surface(&scheme(false)), Role::SurfaceDim);
    }

    #[test]
    fn resolved_tones_stay_in_range() {
        for role in Role::ALL {
            let tone = scheme(false).tone(role);
            assert!((0.0..=100.0).contains(&tone), "{}: {tone}", role.name());
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = scheme(true);
        let b = scheme(true);
        for role in Role::ALL {
            assert_eq!(a.argb(role), b.argb(role), "{}", role.name());
        }
    }

    #[test]
    fn opaque_roles_have_full_alpha() {
        let s = scheme(false);
        assert_eq!(s.argb(Role::Primary).alpha(), 0xFF);
        assert_eq!(s.argb(Role::Surface).alpha(), 0xFF);
    }
}
