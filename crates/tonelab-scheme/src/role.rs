#![forbid(unsafe_code)]

//! Color role identifiers.
//!
//! Every color in a scheme is addressed by a [`Role`]. Role definitions refer
//! to each other (backgrounds, tone-delta partners) through these identifiers
//! and are resolved against the per-version role table, so a definition never
//! captures another definition object.

/// Identifier for one color role in a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Role {
    PrimaryPaletteKeyColor,
    SecondaryPaletteKeyColor,
    TertiaryPaletteKeyColor,
    NeutralPaletteKeyColor,
    NeutralVariantPaletteKeyColor,
    ErrorPaletteKeyColor,
    Background,
    OnBackground,
    Surface,
    SurfaceDim,
    SurfaceBright,
    SurfaceContainerLowest,
    SurfaceContainerLow,
    SurfaceContainer,
    SurfaceContainerHigh,
    SurfaceContainerHighest,
    OnSurface,
    SurfaceVariant,
    OnSurfaceVariant,
    InverseSurface,
    InverseOnSurface,
    Outline,
    OutlineVariant,
    Shadow,
    Scrim,
    SurfaceTint,
    Primary,
    PrimaryDim,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    InversePrimary,
    Secondary,
    SecondaryDim,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    TertiaryDim,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
    Error,
    ErrorDim,
    OnError,
    ErrorContainer,
    OnErrorContainer,
    PrimaryFixed,
    PrimaryFixedDim,
    OnPrimaryFixed,
    OnPrimaryFixedVariant,
    SecondaryFixed,
    SecondaryFixedDim,
    OnSecondaryFixed,
    OnSecondaryFixedVariant,
    TertiaryFixed,
    TertiaryFixedDim,
    OnTertiaryFixed,
    OnTertiaryFixedVariant,
}

impl Role {
    pub const COUNT: usize = 59;

    pub const ALL: [Self; Self::COUNT] = [
        Self::PrimaryPaletteKeyColor,
        Self::SecondaryPaletteKeyColor,
        Self::TertiaryPaletteKeyColor,
        Self::NeutralPaletteKeyColor,
        Self::NeutralVariantPaletteKeyColor,
        Self::ErrorPaletteKeyColor,
        Self::Background,
        Self::OnBackground,
        Self::Surface,
        Self::SurfaceDim,
        Self::SurfaceBright,
        Self::SurfaceContainerLowest,
        Self::SurfaceContainerLow,
        Self::SurfaceContainer,
        Self::SurfaceContainerHigh,
        Self::SurfaceContainerHighest,
        Self::OnSurface,
        Self::SurfaceVariant,
        Self::OnSurfaceVariant,
        Self::InverseSurface,
        Self::InverseOnSurface,
        Self::Outline,
        Self::OutlineVariant,
        Self::Shadow,
        Self::Scrim,
        Self::SurfaceTint,
        Self::Primary,
        Self::PrimaryDim,
        Self::OnPrimary,
        Self::PrimaryContainer,
        Self::OnPrimaryContainer,
        Self::InversePrimary,
        Self::Secondary,
        Self::SecondaryDim,
        Self::OnSecondary,
        Self::SecondaryContainer,
        Self::OnSecondaryContainer,
        Self::Tertiary,
        Self::TertiaryDim,
        Self::OnTertiary,
        Self::TertiaryContainer,
        Self::OnTertiaryContainer,
        Self::Error,
        Self::ErrorDim,
        Self::OnError,
        Self::ErrorContainer,
        Self::OnErrorContainer,
        Self::PrimaryFixed,
        Self::PrimaryFixedDim,
        Self::OnPrimaryFixed,
        Self::OnPrimaryFixedVariant,
        Self::SecondaryFixed,
        Self::SecondaryFixedDim,
        Self::OnSecondaryFixed,
        Self::OnSecondaryFixedVariant,
        Self::TertiaryFixed,
        Self::TertiaryFixedDim,
        Self::OnTertiaryFixed,
        Self::OnTertiaryFixedVariant,
    ];

    /// Table index; stable for the lifetime of the process.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Token name, as published to design systems.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PrimaryPaletteKeyColor => "primary_palette_key_color",
            Self::SecondaryPaletteKeyColor => "secondary_palette_key_color",
            Self::TertiaryPaletteKeyColor => "tertiary_palette_key_color",
            Self::NeutralPaletteKeyColor => "neutral_palette_key_color",
            Self::NeutralVariantPaletteKeyColor => "neutral_variant_palette_key_color",
            Self::ErrorPaletteKeyColor => "error_palette_key_color",
            Self::Background => "background",
            Self::OnBackground => "on_background",
            Self::Surface => "surface",
            Self::SurfaceDim => "surface_dim",
            Self::SurfaceBright => "surface_bright",
            Self::SurfaceContainerLowest => "surface_container_lowest",
            Self::SurfaceContainerLow => "surface_container_low",
            Self::SurfaceContainer => "surface_container",
            Self::SurfaceContainerHigh => "surface_container_high",
            Self::SurfaceContainerHighest => "surface_container_highest",
            Self::OnSurface => "on_surface",
            Self::SurfaceVariant => "surface_variant",
            Self::OnSurfaceVariant => "on_surface_variant",
            Self::InverseSurface => "inverse_surface",
            Self::InverseOnSurface => "inverse_on_surface",
            Self::Outline => "outline",
            Self::OutlineVariant => "outline_variant",
            Self::Shadow => "shadow",
            Self::Scrim => "scrim",
            Self::SurfaceTint => "surface_tint",
            Self::Primary => "primary",
            Self::PrimaryDim => "primary_dim",
            Self::OnPrimary => "on_primary",
            Self::PrimaryContainer => "primary_container",
            Self::OnPrimaryContainer => "on_primary_container",
            Self::InversePrimary => "inverse_primary",
            Self::Secondary => "secondary",
            Self::SecondaryDim => "secondary_dim",
            Self::OnSecondary => "on_secondary",
            Self::SecondaryContainer => "secondary_container",
            Self::OnSecondaryContainer => "on_secondary_container",
            Self::Tertiary => "tertiary",
            Self::TertiaryDim => "tertiary_dim",
            Self::OnTertiary => "on_tertiary",
            Self::TertiaryContainer => "tertiary_container",
            Self::OnTertiaryContainer => "on_tertiary_container",
            Self::Error => "error",
            Self::ErrorDim => "error_dim",
            Self::OnError => "on_error",
            Self::ErrorContainer => "error_container",
            Self::OnErrorContainer => "on_error_container",
            Self::PrimaryFixed => "primary_fixed",
            Self::PrimaryFixedDim => "primary_fixed_dim",
            Self::OnPrimaryFixed => "on_primary_fixed",
            Self::OnPrimaryFixedVariant => "on_primary_fixed_variant",
            Self::SecondaryFixed => "secondary_fixed",
            Self::SecondaryFixedDim => "secondary_fixed_dim",
            Self::OnSecondaryFixed => "on_secondary_fixed",
            Self::OnSecondaryFixedVariant => "on_secondary_fixed_variant",
            Self::TertiaryFixed => "tertiary_fixed",
            Self::TertiaryFixedDim => "tertiary_fixed_dim",
            Self::OnTertiaryFixed => "on_tertiary_fixed",
            Self::OnTertiaryFixedVariant => "on_tertiary_fixed_variant",
        }
    }

    /// The dimmed fixed roles get different background banding than other
    /// background roles under the 2025 algorithm.
    #[must_use]
    pub const fn is_fixed_dim(self) -> bool {
        matches!(
            self,
            Self::PrimaryFixedDim | Self::SecondaryFixedDim | Self::TertiaryFixedDim
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_dense_and_ordered() {
        assert_eq!(Role::ALL.len(), Role::COUNT);
        for (i, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = Role::ALL.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Role::COUNT);
    }

    #[test]
    fn fixed_dim_roles() {
        assert!(Role::PrimaryFixedDim.is_fixed_dim());
        assert!(!Role::PrimaryFixed.is_fixed_dim());
    }
}
