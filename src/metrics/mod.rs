//! Chidamber & Kemerer metric calculators over a frozen class model.

pub mod cohesion;

use crate::builtins::is_builtin_function;
use crate::core::{ClassMetrics, FileMetrics, MethodMetrics, ProjectMetrics};
use crate::model::{ClassModel, ClassRecord, SELF_IDENT, UNIVERSAL_ROOT};
use std::collections::BTreeSet;

/// Compute all six C&K metrics (plus normalized LCOM4) for every class in
/// the model, grouped per source file and merged into the class summary.
pub fn calculate_project_metrics(model: &ClassModel) -> ProjectMetrics {
    let mut project = ProjectMetrics::default();

    for (name, record) in model.classes() {
        let metrics = calculate_class_metrics(model, record);
        let file = model
            .file_of(name)
            .map_or_else(|| "unknown".to_string(), |p| p.display().to_string());

        let entry = project.files.entry(file.clone()).or_insert_with(|| FileMetrics {
            path: file.into(),
            classes: Default::default(),
        });
        entry.classes.insert(name.clone(), metrics.clone());
        project.class_summary.insert(name.clone(), metrics);
    }

    project
}

/// Metrics for a single class record within its model.
pub fn calculate_class_metrics(model: &ClassModel, record: &ClassRecord) -> ClassMetrics {
    let lcom4 = cohesion::lcom4(record);
    ClassMetrics {
        wmc: weighted_methods(record),
        dit: model.graph().inheritance_depth(&record.name),
        noc: model.graph().child_count(&record.name),
        cbo: coupling(model, record),
        rfc: response_set_size(record),
        lcom4,
        lcom4_normalized: cohesion::normalized_lcom4(record.methods.len(), lcom4),
        methods: record
            .methods
            .iter()
            .map(|m| {
                let complexity = record.method_complexity.get(m).copied().unwrap_or(1);
                (m.clone(), MethodMetrics { complexity })
            })
            .collect(),
    }
}

/// WMC: sum of per-method cyclomatic complexities, defaulting to 1 for a
/// method with no recorded complexity.
fn weighted_methods(record: &ClassRecord) -> u32 {
    record
        .methods
        .iter()
        .map(|m| record.method_complexity.get(m).copied().unwrap_or(1))
        .sum()
}

/// CBO: count of distinct classes this one references through bases, call
/// receivers, direct constructor calls, or attribute values. `object`,
/// `self`, and the class itself never count.
fn coupling(model: &ClassModel, record: &ClassRecord) -> u32 {
    let mut coupled: BTreeSet<&str> = BTreeSet::new();

    coupled.extend(record.bases.iter().map(String::as_str));
    coupled.extend(record.called_classes.iter().map(String::as_str));

    // Bare calls and stored attribute values couple only when they name a
    // class discovered in this analysis run.
    for calls in record.method_calls.values() {
        coupled.extend(
            calls
                .iter()
                .map(String::as_str)
                .filter(|name| model.contains_class(name)),
        );
    }
    coupled.extend(
        record
            .attributes
            .iter()
            .map(String::as_str)
            .filter(|name| model.contains_class(name)),
    );

    coupled.remove(UNIVERSAL_ROOT);
    coupled.remove(SELF_IDENT);
    coupled.remove(record.name.as_str());
    coupled.len() as u32
}

/// RFC: size of the response set, the class's own methods plus every
/// distinct non-builtin name its methods call.
fn response_set_size(record: &ClassRecord) -> u32 {
    let mut response: BTreeSet<&str> =
        record.methods.iter().map(String::as_str).collect();
    for calls in record.method_calls.values() {
        response.extend(
            calls
                .iter()
                .map(String::as_str)
                .filter(|name| !is_builtin_function(name)),
        );
    }
    response.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelBuilder;
    use std::path::Path;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn freeze(records: Vec<ClassRecord>) -> ClassModel {
        let mut builder = ModelBuilder::new();
        for record in records {
            builder.insert(record, Path::new("test.py"));
        }
        builder.freeze()
    }

    #[test]
    fn wmc_sums_method_complexities() {
        let mut record = ClassRecord::new("C", Vec::new());
        record.methods = set(&["a", "b", "c"]);
        record.method_complexity.insert("a".into(), 3);
        record.method_complexity.insert("b".into(), 2);
        // c has no recorded complexity and defaults to 1.
        assert_eq!(weighted_methods(&record), 6);
    }

    #[test]
    fn coupling_ignores_object_self_and_own_name() {
        let mut record = ClassRecord::new("C", vec!["object".to_string()]);
        record.called_classes = set(&["self", "C", "Other"]);
        let model = freeze(vec![ClassRecord::new("Other", Vec::new())]);
        assert_eq!(coupling(&model, &record), 1);
    }

    #[test]
    fn coupling_counts_bare_calls_only_to_discovered_classes() {
        let mut record = ClassRecord::new("C", Vec::new());
        record.methods = set(&["m"]);
        record
            .method_calls
            .insert("m".into(), set(&["Known", "unknown_helper"]));
        let model = freeze(vec![ClassRecord::new("Known", Vec::new())]);
        assert_eq!(coupling(&model, &record), 1);
    }

    #[test]
    fn response_set_excludes_builtins_but_keeps_super() {
        let mut record = ClassRecord::new("C", Vec::new());
        record.methods = set(&["m"]);
        record
            .method_calls
            .insert("m".into(), set(&["len", "print", "super", "helper"]));
        // m, super, helper; len and print are built-ins.
        assert_eq!(response_set_size(&record), 3);
    }

    #[test]
    fn project_metrics_groups_by_file_and_merges_summary() {
        let mut a = ClassRecord::new("A", Vec::new());
        a.methods = set(&["run"]);
        a.method_complexity.insert("run".into(), 2);
        let b = ClassRecord::new("B", vec!["A".to_string()]);

        let mut builder = ModelBuilder::new();
        builder.insert(a, Path::new("a.py"));
        builder.insert(b, Path::new("b.py"));
        let project = calculate_project_metrics(&builder.freeze());

        assert_eq!(project.class_count(), 2);
        assert_eq!(project.files.len(), 2);
        assert_eq!(project.class_summary["A"].wmc, 2);
        assert_eq!(project.class_summary["A"].noc, 1);
        assert_eq!(project.class_summary["B"].dit, 1);
        assert_eq!(project.class_summary["B"].cbo, 1);
        assert_eq!(project.files["a.py"].classes.len(), 1);
    }
}
