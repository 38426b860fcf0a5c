use crate::dep_analysis::domain::DependencyMap;

/// DependencyMerger service for combining per-package flattened dependency
/// sets into one project-wide mapping, applying the suppression rules.
///
/// Pure logic; the extraction use case feeds it one flattened set per
/// surface-level package in scan order.
pub struct DependencyMerger;

impl DependencyMerger {
    /// Applies suppression rule A to a single surface package's flattened set.
    ///
    /// If any name in `ignore_dependencies` appears as a key in
    /// `library_deps`, the whole set collapses to just the surface package
    /// and its own version. Checking stops at the first match.
    ///
    /// # Arguments
    /// * `surface_package` - The surface-level package the set was flattened for
    /// * `library_deps` - The flattened set including the package itself
    /// * `ignore_dependencies` - Names that trigger the collapse
    pub fn collapse_ignored(
        surface_package: &str,
        library_deps: DependencyMap,
        ignore_dependencies: &[String],
    ) -> DependencyMap {
        for ignored in ignore_dependencies {
            if library_deps.contains_key(ignored) {
                let mut collapsed = DependencyMap::new();
                if let Some(version) = library_deps.get(surface_package) {
                    collapsed.insert(surface_package.to_string(), version.clone());
                }
                return collapsed;
            }
        }
        library_deps
    }

    /// Right-biased union merge: entries of `incoming` are written over
    /// `accumulated`, so a later-scanned package's version wins for shared
    /// transitive dependencies.
    pub fn merge(accumulated: &mut DependencyMap, incoming: DependencyMap) {
        for (name, version) in incoming {
            accumulated.insert(name, version);
        }
    }

    /// Applies suppression rule B: removes every `ignore_libraries` name
    /// from the final mapping regardless of which package introduced it.
    pub fn drop_ignored_libraries(deps: &mut DependencyMap, ignore_libraries: &[String]) {
        for ignored in ignore_libraries {
            deps.shift_remove(ignored);
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> DependencyMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_collapse_triggered_by_ignored_dependency() {
        let deps = map(&[("X", "1.0"), ("Y", "0.2")]);
        let result =
            DependencyMerger::collapse_ignored("X", deps, &["Y".to_string()]);

        assert_eq!(result, map(&[("X", "1.0")]));
    }

    #[test]
    fn test_collapse_not_triggered_without_match() {
        let deps = map(&[("X", "1.0"), ("Y", "0.2")]);
        let result =
            DependencyMerger::collapse_ignored("X", deps.clone(), &["Z".to_string()]);

        assert_eq!(result, deps);
    }

    #[test]
    fn test_collapse_stops_at_first_match() {
        // Both names appear; the first match already collapses the set, so
        // the outcome is identical regardless of the rest of the list.
        let deps = map(&[("X", "1.0"), ("Y", "0.2"), ("Z", "0.3")]);
        let result = DependencyMerger::collapse_ignored(
            "X",
            deps,
            &["Y".to_string(), "Z".to_string()],
        );

        assert_eq!(result, map(&[("X", "1.0")]));
    }

    #[test]
    fn test_collapse_empty_when_surface_package_missing() {
        // The surface package itself was not installed, so there is no own
        // version to keep after the collapse.
        let deps = map(&[("Y", "0.2")]);
        let result = DependencyMerger::collapse_ignored("X", deps, &["Y".to_string()]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_merge_is_right_biased() {
        let mut accumulated = map(&[("urllib3", "1.26.0"), ("requests", "2.31.0")]);
        DependencyMerger::merge(&mut accumulated, map(&[("urllib3", "2.0.0")]));

        assert_eq!(accumulated["urllib3"], "2.0.0");
        assert_eq!(accumulated["requests"], "2.31.0");
    }

    #[test]
    fn test_drop_ignored_libraries() {
        let mut deps = map(&[("requests", "2.31.0"), ("Z", "0.1"), ("urllib3", "2.0.0")]);
        DependencyMerger::drop_ignored_libraries(&mut deps, &["Z".to_string()]);

        assert!(!deps.contains_key("Z"));
        assert_eq!(deps.len(), 2);
    }

    #[test]
    fn test_drop_ignored_libraries_missing_name_is_noop() {
        let mut deps = map(&[("requests", "2.31.0")]);
        DependencyMerger::drop_ignored_libraries(&mut deps, &["absent".to_string()]);
        assert_eq!(deps.len(), 1);
    }

}
