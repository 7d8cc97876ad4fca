#![forbid(unsafe_code)]

//! Spec versions and target platforms.

/// Color system specification versions, ordered oldest to newest.
///
/// The `Ord` derivation is load-bearing: version-gated role definitions use
/// `>=` at resolution time to pick which branch of a definition applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpecVersion {
    Spec2021,
    Spec2025,
    Spec2026,
}

impl SpecVersion {
    pub const ALL: [Self; 3] = [Self::Spec2021, Self::Spec2025, Self::Spec2026];
}

/// The device class a scheme targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Phone,
    Watch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_are_ordered() {
        assert!(SpecVersion::Spec2021 < SpecVersion::Spec2025);
        assert!(SpecVersion::Spec2025 < SpecVersion::Spec2026);
        assert!(SpecVersion::Spec2026 >= SpecVersion::Spec2021);
    }
}
