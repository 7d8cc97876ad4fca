#![forbid(unsafe_code)]

//! Tone separation constraints between two roles.

use crate::role::Role;

/// How strictly a pair's tone delta is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaConstraint {
    /// The tones differ by exactly `delta`, unless clamping at the tone
    /// range boundary makes that impossible.
    Exact,
    /// The tones differ by at most `delta`.
    Nearer,
    /// The tones differ by at least `delta` (or as much as achievable).
    Farther,
}

/// Which of the two roles is expected to be darker or lighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TonePolarity {
    /// Role A is the darker of the pair.
    Darker,
    /// Role A is the lighter of the pair.
    Lighter,
    /// Role A is darker in light mode, lighter in dark mode.
    RelativeDarker,
    /// Role A is lighter in light mode, darker in dark mode.
    RelativeLighter,
}

/// A tone separation constraint between two roles.
///
/// Roles are referenced by identifier; the resolver looks the partner up in
/// the active role table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneDeltaPair {
    /// The role whose tone the constraint is being applied to.
    pub role_a: Role,
    /// The reference role.
    pub role_b: Role,
    /// Required tone separation, in absolute tone units.
    pub delta: f64,
    /// Which role sits on which side of the separation.
    pub polarity: TonePolarity,
    /// Whether both tones must stay on the same side of the 50-59 band.
    pub stay_together: bool,
    /// How strictly `delta` is enforced.
    pub constraint: DeltaConstraint,
}

impl ToneDeltaPair {
    #[must_use]
    pub const fn new(
        role_a: Role,
        role_b: Role,
        delta: f64,
        polarity: TonePolarity,
        stay_together: bool,
        constraint: DeltaConstraint,
    ) -> Self {
        Self {
            role_a,
            role_b,
            delta,
            polarity,
            stay_together,
            constraint,
        }
    }
}
