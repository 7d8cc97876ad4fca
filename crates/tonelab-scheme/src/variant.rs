#![forbid(unsafe_code)]

//! Scheme variants: strategies for deriving palettes from a seed color.

/// The family of tonal palettes a scheme derives from its seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// All palettes grayscale.
    Monochrome,
    /// Close to grayscale, a hint of chroma.
    Neutral,
    /// Pastel tokens, the default.
    TonalSpot,
    /// Pastel colors, high chroma palettes.
    Vibrant,
    /// Pastel colors, medium chroma, hues rotated away from the seed.
    Expressive,
    /// Matches the seed color as closely as possible, even its tone.
    Fidelity,
    /// Like Fidelity, with a tertiary that complements the seed.
    Content,
    /// A playful theme, the seed's hue does not appear in the theme.
    Rainbow,
    /// A playful theme, the seed's hue appears rotated.
    FruitSalad,
    /// A two-seed theme for color-material-finish surfaces.
    Cmf,
}
