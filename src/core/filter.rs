//! Matching predicates shared by every operation.
//!
//! All matching is plain substring containment. An empty filter behaves like
//! no filter at all.

/// Keep the projects whose name contains `needle`, preserving order.
///
/// An absent or empty needle returns the list unchanged.
pub fn filter_projects(projects: Vec<String>, needle: Option<&str>) -> Vec<String> {
    match needle {
        Some(needle) if !needle.is_empty() => projects
            .into_iter()
            .filter(|p| p.contains(needle))
            .collect(),
        _ => projects,
    }
}

/// Whether `group_name` passes the environment filter.
pub fn matches_env(group_name: &str, env: Option<&str>) -> bool {
    match env {
        Some(env) if !env.is_empty() => group_name.contains(env),
        _ => true,
    }
}

/// Whether `haystack` contains `needle`. A missing haystack never matches.
pub fn contains_term(haystack: Option<&str>, needle: &str, ignore_case: bool) -> bool {
    match haystack {
        None => false,
        Some(haystack) if ignore_case => haystack.to_lowercase().contains(&needle.to_lowercase()),
        Some(haystack) => haystack.contains(needle),
    }
}
