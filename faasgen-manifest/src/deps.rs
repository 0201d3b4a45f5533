//! Parsing of npm dependency declarations into canonical dependency maps.
//!
//! A declaration is a string of the form `[@scope/]name[@versionConstraint]`.
//! Parsing is total: any input string produces an entry, and malformed input
//! is resolved by the splitting rule rather than rejected.

use indexmap::IndexMap;

/// Version constraint used when a declaration omits one.
pub const ANY_VERSION: &str = "*";

/// Mapping from canonical package name (scope prefix included) to version
/// constraint. Keys are unique and kept in lexicographic order.
pub type DependencyMap = IndexMap<String, String>;

/// Parse a list of dependency declarations into a canonical map.
///
/// Declarations are sorted lexicographically before parsing, so the output
/// does not depend on call-site ordering. When two declarations name the
/// same package, the later one in sorted order wins.
pub fn parse<S: AsRef<str>>(declarations: &[S]) -> DependencyMap {
    let mut sorted: Vec<&str> = declarations.iter().map(AsRef::as_ref).collect();
    sorted.sort_unstable();

    let mut map = DependencyMap::with_capacity(sorted.len());
    for declaration in sorted {
        let (name, constraint) = split_declaration(declaration);
        map.insert(name, constraint);
    }
    map
}

/// Split one declaration into `(canonical name, version constraint)`.
///
/// A leading `@` marks a scoped package; it is stripped before splitting and
/// re-prepended to the final key. The remainder is split on the FIRST `@`,
/// so any further `@` characters end up in the constraint. Downstream
/// consumers rely on that first-occurrence split, even for malformed input.
fn split_declaration(declaration: &str) -> (String, String) {
    let (scoped, rest) = match declaration.strip_prefix('@') {
        Some(stripped) => (true, stripped),
        None => (false, declaration),
    };

    let (name, constraint) = match rest.split_once('@') {
        Some((name, version)) if !version.is_empty() => (name, version),
        Some((name, _)) => (name, ANY_VERSION),
        None => (rest, ANY_VERSION),
    };

    let key = if scoped {
        format!("@{name}")
    } else {
        name.to_string()
    };
    (key, constraint.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(declarations: &[&str]) -> Vec<String> {
        declarations.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_name_and_version() {
        let map = parse(&owned(&["koa@2.1.3"]));
        assert_eq!(map.get("koa").map(String::as_str), Some("2.1.3"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_missing_version_defaults_to_wildcard() {
        let map = parse(&owned(&["express"]));
        assert_eq!(map.get("express").map(String::as_str), Some(ANY_VERSION));
    }

    #[test]
    fn test_empty_version_defaults_to_wildcard() {
        let map = parse(&owned(&["express@"]));
        assert_eq!(map.get("express").map(String::as_str), Some(ANY_VERSION));
    }

    #[test]
    fn test_scoped_package_round_trips_scope() {
        let map = parse(&owned(&["@foo/bar@1.0.0"]));
        assert_eq!(map.get("@foo/bar").map(String::as_str), Some("1.0.0"));
    }

    #[test]
    fn test_scoped_package_without_version() {
        let map = parse(&owned(&["@foo/bar"]));
        assert_eq!(map.get("@foo/bar").map(String::as_str), Some(ANY_VERSION));
    }

    #[test]
    fn test_extra_at_stays_in_constraint() {
        // First-occurrence split: "left@1.0.0@beta" keeps "@beta" in the
        // constraint rather than erroring out.
        let map = parse(&owned(&["left@1.0.0@beta"]));
        assert_eq!(map.get("left").map(String::as_str), Some("1.0.0@beta"));
    }

    #[test]
    fn test_output_is_order_independent() {
        let forward = parse(&owned(&["a@1", "b@1"]));
        let reversed = parse(&owned(&["b@1", "a@1"]));
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_keys_in_lexicographic_order() {
        let map = parse(&owned(&["zlib@1", "body-parser@1.18.2", "express@4"]));
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["body-parser", "express", "zlib"]);
    }

    #[test]
    fn test_duplicate_names_last_in_sorted_order_wins() {
        let map = parse(&owned(&["dup@2.0.0", "dup@1.0.0"]));
        assert_eq!(map.get("dup").map(String::as_str), Some("2.0.0"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let map = parse::<String>(&[]);
        assert!(map.is_empty());
    }
}
