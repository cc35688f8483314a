//! Record path helpers.
//!
//! Every transaction carries a hierarchical path such as
//! `/bahrain/bh-module/graphql/project`. Two questions are asked of a
//! path throughout xpgraph:
//!
//! - Does it fall under a given root? (prefix matching, used by the
//!   transaction filter)
//! - Which module does it belong to? (the segment following a known
//!   anchor segment, used to break the XP series out per module)
//!
//! Paths are opaque strings; no normalization is applied beyond segment
//! splitting on `/`.

/// The anchor segment the platform uses for curriculum modules.
pub const DEFAULT_MODULE_ANCHOR: &str = "bh-module";

/// Module name reported when a path carries no anchor segment.
pub const UNKNOWN_MODULE: &str = "Unknown";

/// Extract the module name from a record path.
///
/// The module is the segment immediately following `anchor`. When the
/// anchor is absent, or is the final segment, the literal
/// [`UNKNOWN_MODULE`] is returned.
///
/// # Examples
///
/// ```
/// use xpg_types::path::module_name;
///
/// assert_eq!(module_name("/bahrain/bh-module/graphql/task", "bh-module"), "graphql");
/// assert_eq!(module_name("/bahrain/other/task", "bh-module"), "Unknown");
/// ```
pub fn module_name(path: &str, anchor: &str) -> String {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    while let Some(segment) = segments.next() {
        if segment == anchor {
            return match segments.next() {
                Some(module) if !module.is_empty() => module.to_string(),
                _ => UNKNOWN_MODULE.to_string(),
            };
        }
    }
    UNKNOWN_MODULE.to_string()
}

/// Returns `true` if `path` starts with `prefix`.
///
/// Plain string-prefix semantics, matching the platform's own path
/// filters: `/r/bh-module` matches `/r/bh-module/alpha` but also
/// `/r/bh-modulex`. Callers wanting segment boundaries should include
/// the trailing `/` in the prefix.
pub fn matches_prefix(path: &str, prefix: &str) -> bool {
    path.starts_with(prefix)
}

/// Returns `true` if `path` contains any of the given substrings.
pub fn matches_any_substring(path: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| path.contains(p.as_str()))
}
