//! Profiles and profile scoping.
//!
//! A profile is a named user category that controls which manifest entries
//! are in scope for a run. The canonical set is engineering, data, and
//! other; older setup-script revisions that lacked `data` are legacy.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::LoadoutError;

/// A user profile, selected once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Engineering,
    Data,
    Other,
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Profile::Engineering => "engineering",
            Profile::Data => "data",
            Profile::Other => "other",
        };
        f.write_str(name)
    }
}

impl FromStr for Profile {
    type Err = LoadoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "engineering" => Ok(Profile::Engineering),
            "data" => Ok(Profile::Data),
            "other" => Ok(Profile::Other),
            _ => Err(LoadoutError::InvalidProfile {
                value: s.to_string(),
            }),
        }
    }
}

/// The profiles a tool applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSet {
    /// The tool is in scope for every profile.
    All,
    /// The tool is in scope only for the listed profiles.
    Only(Vec<Profile>),
}

impl ProfileSet {
    /// Build a set from a slice of profiles.
    pub fn only(profiles: &[Profile]) -> Self {
        ProfileSet::Only(profiles.to_vec())
    }

    /// Whether a tool with this set is in scope for the selected profile.
    ///
    /// Pure function: true iff the set is `All` or contains `selected`
    /// exactly.
    pub fn is_in_scope(&self, selected: Profile) -> bool {
        match self {
            ProfileSet::All => true,
            ProfileSet::Only(profiles) => profiles.contains(&selected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_every_profile() {
        for profile in [Profile::Engineering, Profile::Data, Profile::Other] {
            assert!(ProfileSet::All.is_in_scope(profile));
        }
    }

    #[test]
    fn engineering_only_excludes_data() {
        let set = ProfileSet::only(&[Profile::Engineering]);
        assert!(set.is_in_scope(Profile::Engineering));
        assert!(!set.is_in_scope(Profile::Data));
        assert!(!set.is_in_scope(Profile::Other));
    }

    #[test]
    fn multi_profile_set_matches_each_member() {
        let set = ProfileSet::only(&[Profile::Engineering, Profile::Data]);
        assert!(set.is_in_scope(Profile::Engineering));
        assert!(set.is_in_scope(Profile::Data));
        assert!(!set.is_in_scope(Profile::Other));
    }

    #[test]
    fn empty_only_set_matches_nothing() {
        let set = ProfileSet::only(&[]);
        assert!(!set.is_in_scope(Profile::Other));
    }

    #[test]
    fn profile_from_str_accepts_canonical_names() {
        assert_eq!("engineering".parse::<Profile>().unwrap(), Profile::Engineering);
        assert_eq!("data".parse::<Profile>().unwrap(), Profile::Data);
        assert_eq!("other".parse::<Profile>().unwrap(), Profile::Other);
    }

    #[test]
    fn profile_from_str_rejects_unknown() {
        let err = "devops".parse::<Profile>().unwrap_err();
        assert!(matches!(err, LoadoutError::InvalidProfile { .. }));
    }

    #[test]
    fn profile_from_str_is_case_sensitive() {
        assert!("Engineering".parse::<Profile>().is_err());
    }

    #[test]
    fn profile_display_round_trips() {
        for profile in [Profile::Engineering, Profile::Data, Profile::Other] {
            assert_eq!(profile.to_string().parse::<Profile>().unwrap(), profile);
        }
    }
}
