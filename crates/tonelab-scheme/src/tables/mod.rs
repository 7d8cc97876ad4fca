#![forbid(unsafe_code)]

//! Per-version role tables.
//!
//! Each [`SpecVersion`] maps to one immutable [`RoleTable`] holding a
//! [`DynamicColor`] for every [`Role`]. The 2021 table is built from the base
//! definitions alone; later tables wrap the previous version's colors with
//! [`DynamicColor::extend`], so a single color carries the whole override
//! chain and dispatches on the scheme's resolved version at lookup time.
//! Tables are built once, on first use, and shared for the process lifetime.

use std::sync::OnceLock;

use crate::dynamic_color::DynamicColor;
use crate::role::Role;
use crate::version::SpecVersion;

mod spec_2021;
mod spec_2025;
mod spec_2026;

/// All role definitions for one spec version, indexed by [`Role::index`].
pub struct RoleTable {
    colors: Vec<DynamicColor>,
}

impl RoleTable {
    fn new(colors: Vec<DynamicColor>) -> Self {
        assert_eq!(colors.len(), Role::COUNT, "table must define every role");
        for (i, color) in colors.iter().enumerate() {
            assert_eq!(color.role.index(), i, "table entry out of place");
            color.validate();
        }
        Self { colors }
    }

    /// Looks up the definition for `role`.
    pub fn get(&self, role: Role) -> &DynamicColor {
        &self.colors[role.index()]
    }

    /// Iterates over every role definition in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &DynamicColor> {
        self.colors.iter()
    }
}

/// Returns the role table for `version`.
///
/// The table is constructed on first call and cached; a malformed role
/// definition panics here rather than surfacing later as a bad color.
pub fn role_table(version: SpecVersion) -> &'static RoleTable {
    static TABLE_2021: OnceLock<RoleTable> = OnceLock::new();
    static TABLE_2025: OnceLock<RoleTable> = OnceLock::new();
    static TABLE_2026: OnceLock<RoleTable> = OnceLock::new();

    match version {
        SpecVersion::Spec2021 => TABLE_2021.get_or_init(build_2021),
        SpecVersion::Spec2025 => TABLE_2025.get_or_init(build_2025),
        SpecVersion::Spec2026 => TABLE_2026.get_or_init(build_2026),
    }
}

/// The dim accent roles have no 2021-era definition, so every table starts
/// from their 2025 form. All other roles start from the base definitions.
fn base_definition(role: Role) -> DynamicColor {
    match role {
        Role::PrimaryDim | Role::SecondaryDim | Role::TertiaryDim | Role::ErrorDim => {
            spec_2025::dim_definition(role)
        }
        _ => spec_2021::define(role),
    }
}

fn build_2021() -> RoleTable {
    RoleTable::new(Role::ALL.iter().map(|&r| base_definition(r)).collect())
}

fn build_2025() -> RoleTable {
    RoleTable::new(
        Role::ALL
            .iter()
            .map(|&r| {
                let base = base_definition(r);
                match spec_2025::override_for(r) {
                    Some(over) => base.extend(SpecVersion::Spec2025, &over),
                    None => base,
                }
            })
            .collect(),
    )
}

fn build_2026() -> RoleTable {
    RoleTable::new(
        Role::ALL
            .iter()
            .map(|&r| {
                let prior = role_table(SpecVersion::Spec2025).get(r).clone();
                match spec_2026::override_for(r) {
                    Some(over) => prior.extend(SpecVersion::Spec2026, &over),
                    None => prior,
                }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_builds_and_covers_every_role() {
        for version in SpecVersion::ALL {
            let table = role_table(version);
            for role in Role::ALL {
                assert_eq!(table.get(role).role, role);
            }
        }
    }

    #[test]
    fn shadow_keeps_its_base_definition_in_every_version() {
        // Shadow has no override in any later version, so each table holds
        // a color whose selectors never branch on the version.
        for version in SpecVersion::ALL {
            let color = role_table(version).get(Role::Shadow);
            assert!(color.background.is_none());
            assert!(color.contrast_curve.is_none());
        }
    }

    #[test]
    fn dim_roles_are_defined_in_every_version() {
        for version in SpecVersion::ALL {
            for role in [
                Role::PrimaryDim,
                Role::SecondaryDim,
                Role::TertiaryDim,
                Role::ErrorDim,
            ] {
                let color = role_table(version).get(role);
                assert_eq!(color.role, role);
                assert!(color.tone_delta_pair.is_some());
            }
        }
    }

    #[test]
    fn later_tables_keep_role_backgrounds_consistent() {
        // extend() refuses to flip is_background, so the flag must agree
        // across versions for every role.
        for role in Role::ALL {
            let base = role_table(SpecVersion::Spec2021).get(role).is_background;
            for version in [SpecVersion::Spec2025, SpecVersion::Spec2026] {
                assert_eq!(role_table(version).get(role).is_background, base);
            }
        }
    }
}
