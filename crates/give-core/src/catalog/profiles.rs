//! Flattening of the session-id -> profile map.

use std::collections::HashMap;

use crate::api::types::Profile;

/// Profiles ordered by username (ordinal, case-sensitive)
pub fn sort_profiles(sessions: HashMap<String, Profile>) -> Vec<Profile> {
    let mut profiles: Vec<Profile> = sessions.into_values().collect();
    profiles.sort_by(|a, b| a.username().cmp(b.username()));
    profiles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, username: &str) -> (String, Profile) {
        let mut profile = Profile::default();
        profile.info.id = id.to_string();
        profile.info.username = username.to_string();
        (id.to_string(), profile)
    }

    #[test]
    fn test_sorted_by_username() {
        let sessions: HashMap<String, Profile> = [
            profile("3", "charlie"),
            profile("1", "bob"),
            profile("2", "Zed"),
            profile("4", "alice"),
        ]
        .into_iter()
        .collect();

        let names: Vec<String> = sort_profiles(sessions)
            .iter()
            .map(|p| p.username().to_string())
            .collect();
        // uppercase sorts before lowercase
        assert_eq!(names, vec!["Zed", "alice", "bob", "charlie"]);
    }

    #[test]
    fn test_empty() {
        assert!(sort_profiles(HashMap::new()).is_empty());
    }
}
