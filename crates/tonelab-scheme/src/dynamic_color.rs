#![forbid(unsafe_code)]

//! Color role definitions.
//!
//! A [`DynamicColor`] is a pure description of how a role's tone is chosen
//! for a scheme: which palette carries it, its preferred tone, which role it
//! sits against, how much contrast it owes that role, and which partner role
//! it must keep a tone separation from. All cross-role references are
//! [`Role`] identifiers resolved against the active role table, never
//! captured definition objects.

use crate::contrast_curve::ContrastCurve;
use crate::role::Role;
use crate::scheme::DynamicScheme;
use crate::tone_delta_pair::ToneDeltaPair;
use crate::version::SpecVersion;
use std::sync::Arc;
use tonelab_hct::TonalPalette;
use tonelab_hct::contrast;

/// A pure selector evaluated against a scheme.
pub type SchemeFn<T> = Arc<dyn Fn(&DynamicScheme) -> T + Send + Sync>;

/// The definition of one color role.
#[derive(Clone)]
pub struct DynamicColor {
    /// Which role this definition fills.
    pub role: Role,
    /// The tonal palette carrying the role.
    pub palette: SchemeFn<TonalPalette>,
    /// Preferred tone before contrast and pair adjustment.
    pub tone: SchemeFn<f64>,
    /// Whether other roles treat this one as a background.
    pub is_background: bool,
    /// Scales the palette's chroma during resolution.
    pub chroma_multiplier: Option<SchemeFn<f64>>,
    /// The role this color is read against, when any.
    pub background: Option<SchemeFn<Option<Role>>>,
    /// A second role this color must also be legible against.
    pub second_background: Option<SchemeFn<Option<Role>>>,
    /// Contrast owed to the background at each contrast level.
    pub contrast_curve: Option<SchemeFn<Option<ContrastCurve>>>,
    /// Tone separation constraint against a partner role.
    pub tone_delta_pair: Option<SchemeFn<Option<ToneDeltaPair>>>,
    /// Alpha applied to the resolved color, when not fully opaque.
    pub opacity: Option<SchemeFn<Option<f64>>>,
}

impl std::fmt::Debug for DynamicColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamicColor")
            .field("role", &self.role)
            .field("is_background", &self.is_background)
            .finish_non_exhaustive()
    }
}

impl DynamicColor {
    /// Starts a definition for `role` over `palette`.
    #[must_use]
    pub fn builder(role: Role, palette: SchemeFn<TonalPalette>) -> DynamicColorBuilder {
        DynamicColorBuilder {
            role,
            palette,
            tone: None,
            is_background: false,
            chroma_multiplier: None,
            background: None,
            second_background: None,
            contrast_curve: None,
            tone_delta_pair: None,
            opacity: None,
        }
    }

    /// Checks definition-level invariants. Called once per color when a role
    /// table is built; violations are programmer errors and panic.
    pub(crate) fn validate(&self) {
        assert!(
            self.second_background.is_none() || self.background.is_some(),
            "role {} has second_background but no background",
            self.role.name()
        );
        assert!(
            self.background.is_none() || self.contrast_curve.is_some(),
            "role {} has background but no contrast curve",
            self.role.name()
        );
        assert!(
            self.contrast_curve.is_none() || self.background.is_some(),
            "role {} has contrast curve but no background",
            self.role.name()
        );
    }

    /// Layers a later spec version over this definition.
    ///
    /// Every selector of the result branches at resolution time on
    /// `scheme.spec_version >= version`: schemes resolved under older
    /// versions keep this definition's behavior, newer ones get `extended`.
    #[must_use]
    pub fn extend(&self, version: SpecVersion, extended: &Self) -> Self {
        assert_eq!(
            self.role,
            extended.role,
            "extension must target the same role"
        );
        assert_eq!(
            self.is_background, extended.is_background,
            "extension of {} changes is_background",
            self.role.name()
        );

        Self {
            role: self.role,
            palette: pick(version, self.palette.clone(), extended.palette.clone()),
            tone: pick(version, self.tone.clone(), extended.tone.clone()),
            is_background: self.is_background,
            chroma_multiplier: pick_opt(
                version,
                self.chroma_multiplier.clone(),
                extended.chroma_multiplier.clone(),
                || 1.0,
            ),
            background: pick_opt(
                version,
                self.background.clone(),
                extended.background.clone(),
                || None,
            ),
            second_background: pick_opt(
                version,
                self.second_background.clone(),
                extended.second_background.clone(),
                || None,
            ),
            contrast_curve: pick_opt(
                version,
                self.contrast_curve.clone(),
                extended.contrast_curve.clone(),
                || None,
            ),
            tone_delta_pair: pick_opt(
                version,
                self.tone_delta_pair.clone(),
                extended.tone_delta_pair.clone(),
                || None,
            ),
            opacity: pick_opt(version, self.opacity.clone(), extended.opacity.clone(), || {
                None
            }),
        }
    }
}

// Branches between two mandatory selectors on the scheme's spec version.
fn pick<T: 'static>(version: SpecVersion, base: SchemeFn<T>, ext: SchemeFn<T>) -> SchemeFn<T> {
    Arc::new(move |s| {
        if s.spec_version >= version {
            ext(s)
        } else {
            base(s)
        }
    })
}

// Branches between two optional selectors; a missing side yields `default`.
fn pick_opt<T: 'static>(
    version: SpecVersion,
    base: Option<SchemeFn<T>>,
    ext: Option<SchemeFn<T>>,
    default: impl Fn() -> T + Send + Sync + 'static,
) -> Option<SchemeFn<T>> {
    if base.is_none() && ext.is_none() {
        return None;
    }
    Some(Arc::new(move |s| {
        let side = if s.spec_version >= version {
            &ext
        } else {
            &base
        };
        side.as_ref().map_or_else(&default, |f| f(s))
    }))
}

/// Builder for a [`DynamicColor`].
pub struct DynamicColorBuilder {
    role: Role,
    palette: SchemeFn<TonalPalette>,
    tone: Option<SchemeFn<f64>>,
    is_background: bool,
    chroma_multiplier: Option<SchemeFn<f64>>,
    background: Option<SchemeFn<Option<Role>>>,
    second_background: Option<SchemeFn<Option<Role>>>,
    contrast_curve: Option<SchemeFn<Option<ContrastCurve>>>,
    tone_delta_pair: Option<SchemeFn<Option<ToneDeltaPair>>>,
    opacity: Option<SchemeFn<Option<f64>>>,
}

impl DynamicColorBuilder {
    #[must_use]
    pub fn tone(mut self, tone: impl Fn(&DynamicScheme) -> f64 + Send + Sync + 'static) -> Self {
        self.tone = Some(Arc::new(tone));
        self
    }

    #[must_use]
    pub fn is_background(mut self, is_background: bool) -> Self {
        self.is_background = is_background;
        self
    }

    #[must_use]
    pub fn chroma_multiplier(
        mut self,
        multiplier: impl Fn(&DynamicScheme) -> f64 + Send + Sync + 'static,
    ) -> Self {
        self.chroma_multiplier = Some(Arc::new(multiplier));
        self
    }

    /// Background fixed to one role.
    #[must_use]
    pub fn background(self, role: Role) -> Self {
        self.background_fn(move |_| Some(role))
    }

    /// Background chosen per scheme; `None` disables the contrast pass.
    #[must_use]
    pub fn background_fn(
        mut self,
        background: impl Fn(&DynamicScheme) -> Option<Role> + Send + Sync + 'static,
    ) -> Self {
        self.background = Some(Arc::new(background));
        self
    }

    #[must_use]
    pub fn second_background(self, role: Role) -> Self {
        self.second_background_fn(move |_| Some(role))
    }

    #[must_use]
    pub fn second_background_fn(
        mut self,
        background: impl Fn(&DynamicScheme) -> Option<Role> + Send + Sync + 'static,
    ) -> Self {
        self.second_background = Some(Arc::new(background));
        self
    }

    #[must_use]
    pub fn contrast_curve(self, curve: ContrastCurve) -> Self {
        self.contrast_curve_fn(move |_| Some(curve))
    }

    #[must_use]
    pub fn contrast_curve_fn(
        mut self,
        curve: impl Fn(&DynamicScheme) -> Option<ContrastCurve> + Send + Sync + 'static,
    ) -> Self {
        self.contrast_curve = Some(Arc::new(curve));
        self
    }

    #[must_use]
    pub fn tone_delta_pair(
        mut self,
        pair: impl Fn(&DynamicScheme) -> Option<ToneDeltaPair> + Send + Sync + 'static,
    ) -> Self {
        self.tone_delta_pair = Some(Arc::new(pair));
        self
    }

    #[must_use]
    pub fn opacity(
        mut self,
        opacity: impl Fn(&DynamicScheme) -> Option<f64> + Send + Sync + 'static,
    ) -> Self {
        self.opacity = Some(Arc::new(opacity));
        self
    }

    /// Finishes the definition.
    ///
    /// When no tone selector was given, the default is the background's
    /// resolved tone, or 50 without a background.
    #[must_use]
    pub fn build(self) -> DynamicColor {
        let tone = self.tone.unwrap_or_else(|| {
            let background = self.background.clone();
            Arc::new(move |s: &DynamicScheme| {
                background
                    .as_ref()
                    .and_then(|bg| bg(s))
                    .map_or(50.0, |role| s.tone(role))
            })
        });
        DynamicColor {
            role: self.role,
            palette: self.palette,
            tone,
            is_background: self.is_background,
            chroma_multiplier: self.chroma_multiplier,
            background: self.background,
            second_background: self.second_background,
            contrast_curve: self.contrast_curve,
            tone_delta_pair: self.tone_delta_pair,
            opacity: self.opacity,
        }
    }
}

/// Whether a background tone reads better with light foreground text.
///
/// People prefer white on colors around tone 60 even though black squeaks
/// past 4.5:1 there; rounding keeps T60 itself in the white band.
#[must_use]
pub fn tone_prefers_light_foreground(tone: f64) -> bool {
    tone.round() < 60.0
}

/// Whether a tone can tolerate light foregrounds at all.
#[must_use]
pub fn tone_allows_light_foreground(tone: f64) -> bool {
    tone.round() <= 49.0
}

/// Nudges a tone out of the band where light foregrounds stop working.
#[must_use]
pub fn enable_light_foreground(tone: f64) -> f64 {
    if tone_prefers_light_foreground(tone) && !tone_allows_light_foreground(tone) {
        49.0
    } else {
        tone
    }
}

/// The foreground tone for a background tone at a required ratio.
///
/// Prefers the lighter candidate when the background prefers light
/// foregrounds, or when neither candidate truly reaches the ratio and the
/// lighter one loses by a negligible amount.
#[must_use]
pub fn foreground_tone(bg_tone: f64, ratio: f64) -> f64 {
    let lighter_tone = contrast::lighter_unsafe(bg_tone, ratio);
    let darker_tone = contrast::darker_unsafe(bg_tone, ratio);
    let lighter_ratio = contrast::ratio_of_tones(lighter_tone, bg_tone);
    let darker_ratio = contrast::ratio_of_tones(darker_tone, bg_tone);

    if tone_prefers_light_foreground(bg_tone) {
        let negligible_difference = (lighter_ratio - darker_ratio).abs() < 0.1
            && lighter_ratio < ratio
            && darker_ratio < ratio;
        if lighter_ratio >= ratio || lighter_ratio >= darker_ratio || negligible_difference {
            lighter_tone
        } else {
            darker_tone
        }
    } else if darker_ratio >= ratio || darker_ratio >= lighter_ratio {
        darker_tone
    } else {
        lighter_tone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables;

    #[test]
    fn foreground_prefers_light_on_dark() {
        assert!(foreground_tone(20.0, 4.5) > 60.0);
        assert!(foreground_tone(90.0, 4.5) < 50.0);
        // Unreachable ratios fall back to the far end of the preferred side.
        assert_eq!(foreground_tone(30.0, 21.0), 100.0);
    }

    #[test]
    fn light_foreground_band() {
        assert!(tone_prefers_light_foreground(59.4));
        assert!(!tone_prefers_light_foreground(60.0));
        assert!(tone_allows_light_foreground(49.0));
        assert!(!tone_allows_light_foreground(50.0));
        assert_eq!(enable_light_foreground(55.0), 49.0);
        assert_eq!(enable_light_foreground(30.0), 30.0);
        assert_eq!(enable_light_foreground(70.0), 70.0);
    }

    #[test]
    #[should_panic(expected = "same role")]
    fn extend_rejects_role_mismatch() {
        let table = tables::role_table(SpecVersion::Spec2021);
        let primary = table.get(Role::Primary);
        let secondary = table.get(Role::Secondary);
        let _ = primary.extend(SpecVersion::Spec2025, secondary);
    }
}
