//! LCOM4 cohesion: connected components of the method relation graph.

use crate::model::graph::UnionFind;
use crate::model::ClassRecord;
use std::collections::BTreeSet;

/// LCOM4 of one class: the number of connected components in the graph
/// whose vertices are the methods and whose edges join two methods that
/// either touch a common self-attribute or where one calls the other.
/// A class with no methods scores 0; a fully cohesive class scores 1.
pub fn lcom4(record: &ClassRecord) -> u32 {
    let methods: Vec<&String> = record.methods.iter().collect();
    if methods.is_empty() {
        return 0;
    }

    let empty = BTreeSet::new();
    let attributes_of = |name: &str| record.method_attributes.get(name).unwrap_or(&empty);
    let calls_of = |name: &str| record.method_calls.get(name).unwrap_or(&empty);

    let mut components = UnionFind::new(methods.len());
    for (i, a) in methods.iter().enumerate() {
        for (j, b) in methods.iter().enumerate().skip(i + 1) {
            let shares_attribute = !attributes_of(a).is_disjoint(attributes_of(b));
            let calls_peer =
                calls_of(a).contains(b.as_str()) || calls_of(b).contains(a.as_str());
            if shares_attribute || calls_peer {
                components.union(i, j);
            }
        }
    }
    components.component_count() as u32
}

/// LCOM4 rescaled to [0, 1]: `(lcom4 - 1) / (m - 1)` over `m` methods.
/// Classes with at most one method are perfectly cohesive by definition.
pub fn normalized_lcom4(method_count: usize, lcom4: u32) -> f64 {
    if method_count <= 1 {
        0.0
    } else {
        (lcom4 as f64 - 1.0) / (method_count as f64 - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_methods(methods: &[&str]) -> ClassRecord {
        let mut record = ClassRecord::new("Test", Vec::new());
        for m in methods {
            record.methods.insert(m.to_string());
        }
        record
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_methods_scores_zero() {
        assert_eq!(lcom4(&record_with_methods(&[])), 0);
    }

    #[test]
    fn unrelated_methods_each_form_a_component() {
        let mut record = record_with_methods(&["a", "b", "c"]);
        record.method_attributes.insert("a".into(), set(&["x"]));
        record.method_attributes.insert("b".into(), set(&["y"]));
        record.method_attributes.insert("c".into(), set(&["z"]));
        assert_eq!(lcom4(&record), 3);
    }

    #[test]
    fn shared_attribute_joins_methods() {
        let mut record = record_with_methods(&["a", "b"]);
        record.method_attributes.insert("a".into(), set(&["state"]));
        record.method_attributes.insert("b".into(), set(&["state"]));
        assert_eq!(lcom4(&record), 1);
    }

    #[test]
    fn internal_call_joins_methods() {
        let mut record = record_with_methods(&["caller", "callee"]);
        record.method_calls.insert("caller".into(), set(&["callee"]));
        assert_eq!(lcom4(&record), 1);
    }

    #[test]
    fn transitive_sharing_forms_one_component() {
        // a-b share x, b-c share y; all three connect transitively.
        let mut record = record_with_methods(&["a", "b", "c"]);
        record.method_attributes.insert("a".into(), set(&["x"]));
        record.method_attributes.insert("b".into(), set(&["x", "y"]));
        record.method_attributes.insert("c".into(), set(&["y"]));
        assert_eq!(lcom4(&record), 1);
    }

    #[test]
    fn normalization_bounds() {
        assert_eq!(normalized_lcom4(0, 0), 0.0);
        assert_eq!(normalized_lcom4(1, 1), 0.0);
        assert_eq!(normalized_lcom4(2, 1), 0.0);
        assert_eq!(normalized_lcom4(2, 2), 1.0);
        assert_eq!(normalized_lcom4(5, 3), 0.5);
    }
}
