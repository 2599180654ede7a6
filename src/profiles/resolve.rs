//! Active profile resolution

use log::debug;

use crate::error::{CosmicError, Result};

use super::models::ProfileConfig;

/// Drop profiles that duplicate another profile's URL and credentials.
///
/// The lexicographically first name of each duplicate group is kept. Returns
/// `(dropped, kept)` pairs so the caller can tell the user.
pub fn prune_duplicates(config: &mut ProfileConfig) -> Vec<(String, String)> {
    let mut pruned = Vec::new();
    let names: Vec<String> = config.profiles.keys().cloned().collect();

    for (i, kept) in names.iter().enumerate() {
        if !config.profiles.contains_key(kept) {
            continue;
        }
        for other in &names[i + 1..] {
            let duplicate = match (config.profiles.get(kept), config.profiles.get(other)) {
                (Some(a), Some(b)) => a.is_duplicate_of(b),
                _ => false,
            };
            if duplicate {
                config.profiles.remove(other);
                pruned.push((other.clone(), kept.clone()));
            }
        }
    }

    pruned
}

/// Resolve the ordered list of profiles to query.
///
/// An empty selection means all configured profiles. Every selected name must
/// exist in the configuration.
pub fn select_profiles(config: &ProfileConfig, selection: &[String]) -> Result<Vec<String>> {
    if selection.is_empty() {
        debug!("No profile selection, using all {} profile(s)", config.profiles.len());
        return Ok(config.profiles.keys().cloned().collect());
    }

    for name in selection {
        if !config.profiles.contains_key(name) {
            return Err(CosmicError::Config(format!(
                "Cannot find config for specified profile \"{}\"",
                name
            )));
        }
    }

    let mut result: Vec<String> = config
        .profiles
        .keys()
        .filter(|name| selection.contains(name))
        .cloned()
        .collect();
    result.sort();
    debug!("Selected profiles: {:?}", result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::Profile;

    fn profile(url: &str, key: &str) -> Profile {
        Profile {
            api_url: url.to_string(),
            api_key: key.to_string(),
            secret_key: "secret".to_string(),
            timeout: None,
            verify_ssl: None,
        }
    }

    fn config(entries: &[(&str, Profile)]) -> ProfileConfig {
        let mut config = ProfileConfig::default();
        for (name, p) in entries {
            config.profiles.insert(name.to_string(), p.clone());
        }
        config
    }

    #[test]
    fn test_select_all_when_empty() {
        let cfg = config(&[("beta", profile("b", "k")), ("alpha", profile("a", "k"))]);
        assert_eq!(select_profiles(&cfg, &[]).unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_select_subset() {
        let cfg = config(&[
            ("alpha", profile("a", "k")),
            ("beta", profile("b", "k")),
            ("gamma", profile("c", "k")),
        ]);
        let selection = vec!["gamma".to_string(), "alpha".to_string()];
        assert_eq!(select_profiles(&cfg, &selection).unwrap(), vec!["alpha", "gamma"]);
    }

    #[test]
    fn test_select_unknown_profile() {
        let cfg = config(&[("alpha", profile("a", "k"))]);
        let err = select_profiles(&cfg, &["nope".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "Cannot find config for specified profile \"nope\"");
    }

    #[test]
    fn test_select_empty_config() {
        let cfg = ProfileConfig::default();
        assert!(select_profiles(&cfg, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_prune_duplicates_keeps_first_name() {
        let mut cfg = config(&[
            ("zulu", profile("a", "k")),
            ("alpha", profile("a", "k")),
            ("beta", profile("b", "k")),
        ]);
        let pruned = prune_duplicates(&mut cfg);
        assert_eq!(pruned, vec![("zulu".to_string(), "alpha".to_string())]);
        let names: Vec<&String> = cfg.profiles.keys().collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_prune_duplicates_three_way() {
        let mut cfg = config(&[
            ("a", profile("x", "k")),
            ("b", profile("x", "k")),
            ("c", profile("x", "k")),
        ]);
        let pruned = prune_duplicates(&mut cfg);
        assert_eq!(pruned.len(), 2);
        assert!(pruned.iter().all(|(_, kept)| kept == "a"));
        assert_eq!(cfg.profiles.len(), 1);
    }

    #[test]
    fn test_prune_no_duplicates() {
        let mut cfg = config(&[("a", profile("x", "k")), ("b", profile("x", "other"))]);
        assert!(prune_duplicates(&mut cfg).is_empty());
        assert_eq!(cfg.profiles.len(), 2);
    }
}
