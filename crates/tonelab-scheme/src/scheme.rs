#![forbid(unsafe_code)]

//! Schemes: a seed, a variant, a mode, and six tonal palettes.
//!
//! A [`DynamicScheme`] is plain immutable data. Every role accessor resolves
//! through the spec-version role table; resolving the same role against the
//! same scheme always returns the same answer.
//!
//! # Example
//! ```
//! use tonelab_hct::Hct;
//! use tonelab_scheme::role::Role;
//! use tonelab_scheme::scheme::DynamicScheme;
//! use tonelab_scheme::variant::Variant;
//!
//! let scheme = DynamicScheme::builder(Hct::from(280.0, 40.0, 50.0))
//!     .variant(Variant::TonalSpot)
//!     .dark(false)
//!     .build();
//! let primary = scheme.argb(Role::Primary);
//! assert!(primary.is_opaque());
//! ```

use crate::palettes;
use crate::resolver;
use crate::role::Role;
use crate::tables;
use crate::variant::Variant;
use crate::version::{Platform, SpecVersion};
use tonelab_hct::math::sanitize_degrees;
use tonelab_hct::{Argb, Hct, TonalPalette};

/// An immutable scheme description.
#[derive(Debug, Clone)]
pub struct DynamicScheme {
    /// Seed colors; the first entry drives the primary palette. Some
    /// variants read a second seed for the tertiary palette.
    pub source_color_hct_list: Vec<Hct>,
    pub variant: Variant,
    pub is_dark: bool,
    /// User contrast preference in `[-1, 1]`; 0 is the default contrast.
    pub contrast_level: f64,
    pub platform: Platform,
    /// The resolved spec version. May be older than requested when the
    /// variant is not defined under the requested version.
    pub spec_version: SpecVersion,
    pub primary_palette: TonalPalette,
    pub secondary_palette: TonalPalette,
    pub tertiary_palette: TonalPalette,
    pub neutral_palette: TonalPalette,
    pub neutral_variant_palette: TonalPalette,
    pub error_palette: TonalPalette,
}

impl DynamicScheme {
    /// Starts building a scheme from a single seed color.
    #[must_use]
    pub fn builder(source_color_hct: Hct) -> DynamicSchemeBuilder {
        DynamicSchemeBuilder::new(source_color_hct)
    }

    /// The primary seed color.
    #[must_use]
    pub fn source_color_hct(&self) -> &Hct {
        &self.source_color_hct_list[0]
    }

    #[must_use]
    pub fn source_color_argb(&self) -> Argb {
        self.source_color_hct().to_argb()
    }

    /// A copy of this scheme in the other mode or at another contrast level.
    /// Palettes are shared; only mode and contrast change.
    #[must_use]
    pub fn with_mode_and_contrast(&self, is_dark: bool, contrast_level: f64) -> Self {
        Self {
            source_color_hct_list: self.source_color_hct_list.clone(),
            variant: self.variant,
            is_dark,
            contrast_level: contrast_level.clamp(-1.0, 1.0),
            platform: self.platform,
            spec_version: self.spec_version,
            primary_palette: self.primary_palette.clone(),
            secondary_palette: self.secondary_palette.clone(),
            tertiary_palette: self.tertiary_palette.clone(),
            neutral_palette: self.neutral_palette.clone(),
            neutral_variant_palette: self.neutral_variant_palette.clone(),
            error_palette: self.error_palette.clone(),
        }
    }

    /// A copy in the other mode at this scheme's contrast level.
    #[must_use]
    pub fn with_mode(&self, is_dark: bool) -> Self {
        self.with_mode_and_contrast(is_dark, self.contrast_level)
    }

    /// Resolves a role to its tone (L*), in `[0, 100]`.
    #[must_use]
    pub fn tone(&self, role: Role) -> f64 {
        resolver::resolve_tone(self, tables::role_table(self.spec_version).get(role))
    }

    /// Resolves a role to an HCT color.
    #[must_use]
    pub fn hct(&self, role: Role) -> Hct {
        resolver::resolve_hct(self, tables::role_table(self.spec_version).get(role))
    }

    /// Resolves a role to an ARGB value, with any role opacity applied in
    /// the alpha channel.
    #[must_use]
    pub fn argb(&self, role: Role) -> Argb {
        resolver::resolve_argb(self, tables::role_table(self.spec_version).get(role))
    }

    /// Maps a seed hue through a piecewise table: `hues[i]` applies when the
    /// seed hue falls in `[breakpoints[i], breakpoints[i + 1])`. Falls back
    /// to the seed hue itself when no interval matches.
    #[must_use]
    pub fn piecewise_value(source_color_hct: &Hct, hue_breakpoints: &[f64], hues: &[f64]) -> f64 {
        let size = hue_breakpoints.len().saturating_sub(1).min(hues.len());
        let source_hue = source_color_hct.hue();

        for i in 0..size {
            if source_hue >= hue_breakpoints[i] && source_hue < hue_breakpoints[i + 1] {
                return sanitize_degrees(hues[i]);
            }
        }
        source_hue
    }

    /// The seed hue rotated by the matching entry of a rotation table.
    #[must_use]
    pub fn rotated_hue(source_color_hct: &Hct, hue_breakpoints: &[f64], rotations: &[f64]) -> f64 {
        let mut rotation = Self::piecewise_value(source_color_hct, hue_breakpoints, rotations);
        let size = hue_breakpoints.len().saturating_sub(1).min(rotations.len());
        if size == 0 {
            rotation = 0.0;
        }
        sanitize_degrees(source_color_hct.hue() + rotation)
    }
}

macro_rules! role_getters {
    ($($fn_name:ident => $role:ident),* $(,)?) => {
        impl DynamicScheme {
            $(
                #[must_use]
                pub fn $fn_name(&self) -> Argb {
                    self.argb(Role::$role)
                }
            )*
        }
    };
}

role_getters! {
    primary_palette_key_color => PrimaryPaletteKeyColor,
    secondary_palette_key_color => SecondaryPaletteKeyColor,
    tertiary_palette_key_color => TertiaryPaletteKeyColor,
    neutral_palette_key_color => NeutralPaletteKeyColor,
    neutral_variant_palette_key_color => NeutralVariantPaletteKeyColor,
    error_palette_key_color => ErrorPaletteKeyColor,
    background => Background,
    on_background => OnBackground,
    surface => Surface,
    surface_dim => SurfaceDim,
    surface_bright => SurfaceBright,
    surface_container_lowest => SurfaceContainerLowest,
    surface_container_low => SurfaceContainerLow,
    surface_container => SurfaceContainer,
    surface_container_high => SurfaceContainerHigh,
    surface_container_highest => SurfaceContainerHighest,
    on_surface => OnSurface,
    surface_variant => SurfaceVariant,
    on_surface_variant => OnSurfaceVariant,
    inverse_surface => InverseSurface,
    inverse_on_surface => InverseOnSurface,
    outline => Outline,
    outline_variant => OutlineVariant,
    shadow => Shadow,
    scrim => Scrim,
    surface_tint => SurfaceTint,
    primary => Primary,
    primary_dim => PrimaryDim,
    on_primary => OnPrimary,
    primary_container => PrimaryContainer,
    on_primary_container => OnPrimaryContainer,
    inverse_primary => InversePrimary,
    secondary => Secondary,
    secondary_dim => SecondaryDim,
    on_secondary => OnSecondary,
    secondary_container => SecondaryContainer,
    on_secondary_container => OnSecondaryContainer,
    tertiary => Tertiary,
    tertiary_dim => TertiaryDim,
    on_tertiary => OnTertiary,
    tertiary_container => TertiaryContainer,
    on_tertiary_container => OnTertiaryContainer,
    error => Error,
    error_dim => ErrorDim,
    on_error => OnError,
    error_container => ErrorContainer,
    on_error_container => OnErrorContainer,
    primary_fixed => PrimaryFixed,
    primary_fixed_dim => PrimaryFixedDim,
    on_primary_fixed => OnPrimaryFixed,
    on_primary_fixed_variant => OnPrimaryFixedVariant,
    secondary_fixed => SecondaryFixed,
    secondary_fixed_dim => SecondaryFixedDim,
    on_secondary_fixed => OnSecondaryFixed,
    on_secondary_fixed_variant => OnSecondaryFixedVariant,
    tertiary_fixed => TertiaryFixed,
    tertiary_fixed_dim => TertiaryFixedDim,
    on_tertiary_fixed => OnTertiaryFixed,
    on_tertiary_fixed_variant => OnTertiaryFixedVariant,
}

/// Builder for a [`DynamicScheme`].
#[derive(Debug, Clone)]
pub struct DynamicSchemeBuilder {
    source_color_hct_list: Vec<Hct>,
    variant: Variant,
    is_dark: bool,
    contrast_level: f64,
    platform: Platform,
    spec_version: SpecVersion,
}

impl DynamicSchemeBuilder {
    #[must_use]
    pub fn new(source_color_hct: Hct) -> Self {
        Self {
            source_color_hct_list: vec![source_color_hct],
            variant: Variant::TonalSpot,
            is_dark: false,
            contrast_level: 0.0,
            platform: Platform::Phone,
            spec_version: SpecVersion::Spec2021,
        }
    }

    /// Replaces the seed list. The first entry drives the primary palette;
    /// the list must not be empty.
    #[must_use]
    pub fn sources(mut self, source_color_hct_list: Vec<Hct>) -> Self {
        assert!(!source_color_hct_list.is_empty(), "at least one seed color");
        self.source_color_hct_list = source_color_hct_list;
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn dark(mut self, is_dark: bool) -> Self {
        self.is_dark = is_dark;
        self
    }

    /// Contrast preference; values outside `[-1, 1]` are clamped.
    #[must_use]
    pub fn contrast_level(mut self, contrast_level: f64) -> Self {
        self.contrast_level = contrast_level.clamp(-1.0, 1.0);
        self
    }

    #[must_use]
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Requested spec version. The built scheme may fall back to an older
    /// version when the variant is not defined under the requested one.
    #[must_use]
    pub fn spec_version(mut self, spec_version: SpecVersion) -> Self {
        self.spec_version = spec_version;
        self
    }

    #[must_use]
    pub fn build(self) -> DynamicScheme {
        let spec_version = maybe_fallback_spec_version(self.spec_version, self.variant);
        let core = palettes::build(
            spec_version,
            self.variant,
            &self.source_color_hct_list,
            self.is_dark,
            self.platform,
            self.contrast_level,
        );
        crate::debug!(
            variant = ?self.variant,
            ?spec_version,
            is_dark = self.is_dark,
            "built scheme palettes"
        );
        DynamicScheme {
            source_color_hct_list: self.source_color_hct_list,
            variant: self.variant,
            is_dark: self.is_dark,
            contrast_level: self.contrast_level,
            platform: self.platform,
            spec_version,
            primary_palette: core.primary,
            secondary_palette: core.secondary,
            tertiary_palette: core.tertiary,
            neutral_palette: core.neutral,
            neutral_variant_palette: core.neutral_variant,
            error_palette: core.error,
        }
    }
}

// Variants are only defined up to a certain spec version; later requests
// resolve under the newest version the variant supports.
fn maybe_fallback_spec_version(spec_version: SpecVersion, variant: Variant) -> SpecVersion {
    if variant == Variant::Cmf {
        return spec_version;
    }
    if matches!(
        variant,
        Variant::Expressive | Variant::Vibrant | Variant::TonalSpot | Variant::Neutral
    ) {
        if spec_version == SpecVersion::Spec2026 {
            return SpecVersion::Spec2025;
        }
        return spec_version;
    }
    SpecVersion::Spec2021
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_keeps_cmf_at_requested_version() {
        assert_eq!(
            maybe_fallback_spec_version(SpecVersion::Spec2026, Variant::Cmf),
            SpecVersion::Spec2026
        );
    }

    #[test]
    fn fallback_caps_core_variants_at_2025() {
        assert_eq!(
            maybe_fallback_spec_version(SpecVersion::Spec2026, Variant::TonalSpot),
            SpecVersion::Spec2025
        );
        assert_eq!(
            maybe_fallback_spec_version(SpecVersion::Spec2025, Variant::Vibrant),
            SpecVersion::Spec2025
        );
    }

    #[test]
    fn fallback_sends_legacy_variants_to_2021() {
        assert_eq!(
            maybe_fallback_spec_version(SpecVersion::Spec2026, Variant::Rainbow),
            SpecVersion::Spec2021
        );
        assert_eq!(
            maybe_fallback_spec_version(SpecVersion::Spec2025, Variant::Fidelity),
            SpecVersion::Spec2021
        );
    }

    #[test]
    fn piecewise_value_matches_interval() {
        let source = Hct::from(10.0, 40.0, 50.0);
        let value = DynamicScheme::piecewise_value(&source, &[0.0, 90.0, 360.0], &[45.0, 135.0]);
        assert_eq!(value, 45.0);
    }

    #[test]
    fn rotated_hue_with_empty_table_is_identity() {
        let source = Hct::from(120.0, 40.0, 50.0);
        let rotated = DynamicScheme::rotated_hue(&source, &[], &[]);
        assert!((rotated - source.hue()).abs() < 1e-9);
    }

    #[test]
    fn contrast_level_is_clamped() {
        let scheme = DynamicScheme::builder(Hct::from(280.0, 40.0, 50.0))
            .contrast_level(3.0)
            .build();
        assert_eq!(scheme.contrast_level, 1.0);
    }
}
