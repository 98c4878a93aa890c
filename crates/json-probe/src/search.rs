//! Recursive search over a value tree.
//!
//! The walk is depth-first pre-order: a node is visited before its children.
//! Object children are visited in ascending lexicographic key order, sorted
//! explicitly on every descent; the backing map is unordered, so relying on
//! its iteration order would make results differ from run to run. Array
//! children are visited in index order.
//!
//! Two match modes exist. Key search matches a node that was reached as the
//! value of an object entry with the target key, so the root and array
//! elements never match by key. Predicate search evaluates the supplied
//! predicate on every visited node, root included.

use crate::path::PathComponent;
use crate::value::JsonValue;

/// One search hit: the matched value together with its full path from the
/// search root.
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'a> {
    /// Components from the root to the matched value, root-first.
    pub path: Vec<PathComponent>,
    /// The matched value, borrowed from the searched tree.
    pub value: &'a JsonValue,
}

/// Pre-order walk. `reached_by` is the object key the node was reached
/// through (`None` for the root and for array elements). The visitor
/// returns `false` to stop the whole walk.
fn walk<'a, F>(
    node: &'a JsonValue,
    reached_by: Option<&str>,
    path: &mut Vec<PathComponent>,
    visit: &mut F,
) -> bool
where
    F: FnMut(&'a JsonValue, Option<&str>, &[PathComponent]) -> bool,
{
    if !visit(node, reached_by, path) {
        return false;
    }
    match node {
        JsonValue::Object(map) => {
            let mut entries: Vec<(&String, &JsonValue)> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (key, child) in entries {
                path.push(PathComponent::Key(key.clone()));
                let keep_going = walk(child, Some(key), path, visit);
                path.pop();
                if !keep_going {
                    return false;
                }
            }
        }
        JsonValue::Array(arr) => {
            for (index, child) in arr.iter().enumerate() {
                path.push(PathComponent::Index(index));
                let keep_going = walk(child, None, path, visit);
                path.pop();
                if !keep_going {
                    return false;
                }
            }
        }
        _ => {}
    }
    true
}

impl JsonValue {
    /// First value reached through an object entry named `key`, in
    /// deterministic pre-order. Stops walking at the first hit.
    pub fn find_first(&self, key: &str) -> Option<&JsonValue> {
        let mut found = None;
        let mut path = Vec::new();
        walk(self, None, &mut path, &mut |node, reached_by, _| {
            if reached_by == Some(key) {
                found = Some(node);
                return false;
            }
            true
        });
        found
    }

    /// Every value reached through an object entry named `key`, in visit
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use json_probe::from_json_str;
    ///
    /// let doc = from_json_str(
    ///     r#"{"id":1,"items":[{"id":2,"meta":{"id":3}},{"name":"x"}]}"#,
    /// )
    /// .unwrap();
    ///
    /// let ids: Vec<i64> = doc.find_all("id").iter().filter_map(|v| v.as_i64()).collect();
    /// assert_eq!(ids, [1, 2, 3]);
    /// ```
    pub fn find_all(&self, key: &str) -> Vec<&JsonValue> {
        let mut matches = Vec::new();
        let mut path = Vec::new();
        walk(self, None, &mut path, &mut |node, reached_by, _| {
            if reached_by == Some(key) {
                matches.push(node);
            }
            true
        });
        matches
    }

    /// Every value reached through an object entry named `key`, paired with
    /// its full path from this value, in visit order.
    pub fn find_all_with_paths(&self, key: &str) -> Vec<Match<'_>> {
        let mut matches = Vec::new();
        let mut path = Vec::new();
        walk(self, None, &mut path, &mut |node, reached_by, path| {
            if reached_by == Some(key) {
                matches.push(Match {
                    path: path.to_vec(),
                    value: node,
                });
            }
            true
        });
        matches
    }

    /// First visited value (the receiver included) satisfying `predicate`,
    /// in deterministic pre-order. Stops walking at the first hit.
    pub fn find_first_where<P>(&self, mut predicate: P) -> Option<&JsonValue>
    where
        P: FnMut(&JsonValue) -> bool,
    {
        let mut found = None;
        let mut path = Vec::new();
        walk(self, None, &mut path, &mut |node, _, _| {
            if predicate(node) {
                found = Some(node);
                return false;
            }
            true
        });
        found
    }

    /// Every visited value (the receiver included) satisfying `predicate`,
    /// in visit order.
    pub fn find_all_where<P>(&self, mut predicate: P) -> Vec<&JsonValue>
    where
        P: FnMut(&JsonValue) -> bool,
    {
        let mut matches = Vec::new();
        let mut path = Vec::new();
        walk(self, None, &mut path, &mut |node, _, _| {
            if predicate(node) {
                matches.push(node);
            }
            true
        });
        matches
    }

    /// Every visited value satisfying `predicate`, paired with its full path
    /// from this value, in visit order. A match at the receiver itself
    /// carries the empty path.
    pub fn find_all_with_paths_where<P>(&self, mut predicate: P) -> Vec<Match<'_>>
    where
        P: FnMut(&JsonValue) -> bool,
    {
        let mut matches = Vec::new();
        let mut path = Vec::new();
        walk(self, None, &mut path, &mut |node, _, path| {
            if predicate(node) {
                matches.push(Match {
                    path: path.to_vec(),
                    value: node,
                });
            }
            true
        });
        matches
    }
}
