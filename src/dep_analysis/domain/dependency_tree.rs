use indexmap::IndexMap;
use serde::Deserialize;

/// Flat mapping of package name to installed version.
///
/// Insertion order is preserved so that requirements output follows the
/// merge sequence deterministically. Keys are unique; first-wins or
/// right-biased merge semantics are decided by the operation, not the map.
pub type DependencyMap = IndexMap<String, String>;

/// One node of the installed dependency tree as reported by the external
/// graph provider (pipdeptree's `--json-tree` output).
///
/// This shape is consumed, never owned: the provider builds it, the
/// flattener walks it read-only.
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyNode {
    pub package_name: String,
    pub installed_version: String,
    #[serde(default)]
    pub dependencies: Vec<DependencyNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_json_tree() {
        let json = r#"
        [
            {
                "key": "requests",
                "package_name": "requests",
                "installed_version": "2.31.0",
                "dependencies": [
                    {
                        "key": "urllib3",
                        "package_name": "urllib3",
                        "installed_version": "2.0.0",
                        "dependencies": []
                    }
                ]
            }
        ]
        "#;

        let forest: Vec<DependencyNode> = serde_json::from_str(json).unwrap();
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].package_name, "requests");
        assert_eq!(forest[0].installed_version, "2.31.0");
        assert_eq!(forest[0].dependencies.len(), 1);
        assert_eq!(forest[0].dependencies[0].package_name, "urllib3");
    }

    #[test]
    fn test_deserialize_missing_dependencies_field() {
        let json = r#"{"package_name": "six", "installed_version": "1.16.0"}"#;
        let node: DependencyNode = serde_json::from_str(json).unwrap();
        assert!(node.dependencies.is_empty());
    }

    #[test]
    fn test_dependency_map_preserves_insertion_order() {
        let mut map = DependencyMap::new();
        map.insert("requests".to_string(), "2.31.0".to_string());
        map.insert("urllib3".to_string(), "2.0.0".to_string());
        map.insert("certifi".to_string(), "2023.7.22".to_string());

        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, vec!["requests", "urllib3", "certifi"]);
    }
}
