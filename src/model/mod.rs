//! Structural model of the analyzed classes: one record per class, the
//! inheritance graph over them, and the builder that accumulates both
//! during extraction.

pub mod graph;

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use graph::InheritanceGraph;

/// Implicit base of every Python class; never an inheritance edge.
pub const UNIVERSAL_ROOT: &str = "object";

/// Receiver identifier for the instance itself; never a coupling target.
pub const SELF_IDENT: &str = "self";

/// Structural facts about one discovered class.
#[derive(Clone, Debug, Default)]
pub struct ClassRecord {
    pub name: String,
    /// Superclass names as written in source, dotted externals included.
    pub bases: Vec<String>,
    pub methods: BTreeSet<String>,
    /// Class-body assignments plus self-qualified assignment targets.
    pub attributes: BTreeSet<String>,
    /// Method name → names called from its body.
    pub method_calls: BTreeMap<String, BTreeSet<String>>,
    /// Method name → self-qualified attributes it touches.
    pub method_attributes: BTreeMap<String, BTreeSet<String>>,
    /// Bare identifiers used as receivers of qualified calls.
    pub called_classes: BTreeSet<String>,
    /// Method name → cyclomatic complexity (≥ 1).
    pub method_complexity: BTreeMap<String, u32>,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>, bases: Vec<String>) -> Self {
        Self {
            name: name.into(),
            bases,
            ..Default::default()
        }
    }
}

/// Accumulates class records during extraction; `freeze` turns the result
/// into an immutable model the metric calculators consume.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    classes: BTreeMap<String, ClassRecord>,
    file_index: BTreeMap<String, PathBuf>,
    class_filter: Option<HashSet<String>>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict modelling to the listed class names. Skipped classes leave
    /// no record, no graph edges, and no coupling references.
    pub fn with_class_filter(filter: Option<Vec<String>>) -> Self {
        Self {
            class_filter: filter.map(|names| names.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn accepts(&self, class_name: &str) -> bool {
        self.class_filter
            .as_ref()
            .map_or(true, |filter| filter.contains(class_name))
    }

    pub fn insert(&mut self, record: ClassRecord, file: &Path) {
        self.file_index
            .insert(record.name.clone(), file.to_path_buf());
        self.classes.insert(record.name.clone(), record);
    }

    /// Finalize the model. Inheritance edges are materialized here, once
    /// every class is known: an edge exists for each declared base that is
    /// not `object` and is itself a discovered class.
    pub fn freeze(self) -> ClassModel {
        let mut inheritance = InheritanceGraph::default();
        for name in self.classes.keys() {
            inheritance.add_node(name);
        }
        for (name, record) in &self.classes {
            for base in &record.bases {
                if base != UNIVERSAL_ROOT && inheritance.contains(base) {
                    inheritance.add_edge(base, name);
                }
            }
        }
        ClassModel {
            classes: self.classes,
            inheritance,
            file_index: self.file_index,
        }
    }
}

/// Frozen class table and inheritance graph for one analysis run.
#[derive(Debug)]
pub struct ClassModel {
    classes: BTreeMap<String, ClassRecord>,
    inheritance: InheritanceGraph,
    file_index: BTreeMap<String, PathBuf>,
}

impl ClassModel {
    pub fn classes(&self) -> impl Iterator<Item = (&String, &ClassRecord)> {
        self.classes.iter()
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn graph(&self) -> &InheritanceGraph {
        &self.inheritance
    }

    pub fn file_of(&self, class_name: &str) -> Option<&Path> {
        self.file_index.get(class_name).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, bases: &[&str]) -> ClassRecord {
        ClassRecord::new(name, bases.iter().map(|b| b.to_string()).collect())
    }

    #[test]
    fn freeze_links_only_discovered_bases() {
        let mut builder = ModelBuilder::new();
        builder.insert(record("Base", &[]), Path::new("a.py"));
        builder.insert(record("Child", &["Base", "external.Mixin"]), Path::new("a.py"));
        let model = builder.freeze();

        assert_eq!(model.graph().child_count("Base"), 1);
        assert_eq!(model.graph().inheritance_depth("Child"), 1);
        // The external base never became a node.
        assert!(!model.graph().contains("external.Mixin"));
    }

    #[test]
    fn object_base_is_not_an_edge() {
        let mut builder = ModelBuilder::new();
        builder.insert(record("Plain", &["object"]), Path::new("a.py"));
        let model = builder.freeze();
        assert_eq!(model.graph().inheritance_depth("Plain"), 0);
    }

    #[test]
    fn filter_rejects_unlisted_classes() {
        let builder = ModelBuilder::with_class_filter(Some(vec!["Kept".to_string()]));
        assert!(builder.accepts("Kept"));
        assert!(!builder.accepts("Dropped"));

        let unfiltered = ModelBuilder::new();
        assert!(unfiltered.accepts("Anything"));
    }
}
