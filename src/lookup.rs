//! Locating the template a presentation imports.

use indexmap::IndexMap;
use log::debug;

use crate::models::document::Document;

/// Finds a loaded document by the path written in an `import` clause.
pub trait DocumentLookup {
    fn find_document_by_import_path(&self, path: &str) -> Option<&Document>;
}

/// An in-memory set of already parsed documents, keyed by their path and
/// searched in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Workspace {
    documents: IndexMap<String, Document>,
}

impl Workspace {
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a document, replacing any document previously stored at `path`.
    pub fn insert(&mut self, path: impl Into<String>, document: Document) {
        self.documents.insert(normalize(&path.into()), document);
    }

    pub fn with_document(mut self, path: impl Into<String>, document: Document) -> Self {
        self.insert(path, document);
        self
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentLookup for Workspace {
    /// A stored document matches when its path equals the import path or ends
    /// with it, so `import T from "template.slg"` finds `decks/template.slg`.
    fn find_document_by_import_path(&self, path: &str) -> Option<&Document> {
        let wanted = normalize(path);
        let found = self
            .documents
            .iter()
            .find(|(p, _)| p.as_str() == wanted || ends_with_segment(p, &wanted))
            .map(|(_, d)| d);
        debug!(
            "[find_document_by_import_path] '{}' -> {}",
            path,
            found.map_or("<none>", |d| d.name())
        );
        found
    }
}

/// A lookup that never finds anything. Every reference resolves to no binding.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDocuments;

impl DocumentLookup for NoDocuments {
    fn find_document_by_import_path(&self, _path: &str) -> Option<&Document> {
        None
    }
}

fn normalize(path: &str) -> String {
    path.trim_matches(|c| c == '"' || c == '\'')
        .replace('\\', "/")
        .trim_start_matches("./")
        .to_string()
}

fn ends_with_segment(stored: &str, wanted: &str) -> bool {
    stored.len() > wanted.len()
        && stored.ends_with(wanted)
        && stored.as_bytes()[stored.len() - wanted.len() - 1] == b'/'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::Template;

    fn template(name: &str) -> Document {
        Document::Template(Template {
            name: name.to_string(),
            font: None,
            color: None,
            options: vec![],
            slide_templates: vec![],
        })
    }

    #[test]
    fn test_lookup_matches_exact_and_suffix_paths() {
        let ws = Workspace::new()
            .with_document("decks/templates/base.slg", template("Base"))
            .with_document("other.slg", template("Other"));

        assert_eq!(
            ws.find_document_by_import_path("base.slg").map(|d| d.name()),
            Some("Base")
        );
        assert_eq!(
            ws.find_document_by_import_path("templates/base.slg")
                .map(|d| d.name()),
            Some("Base")
        );
        assert_eq!(
            ws.find_document_by_import_path("./other.slg").map(|d| d.name()),
            Some("Other")
        );
        assert!(ws.find_document_by_import_path("missing.slg").is_none());
    }

    #[test]
    fn test_lookup_does_not_match_partial_file_names() {
        let ws = Workspace::new().with_document("mybase.slg", template("MyBase"));
        assert!(ws.find_document_by_import_path("base.slg").is_none());
    }

    #[test]
    fn test_insert_replaces_same_path() {
        let mut ws = Workspace::new();
        ws.insert("a.slg", template("First"));
        ws.insert("./a.slg", template("Second"));
        assert_eq!(ws.len(), 1);
        assert_eq!(
            ws.find_document_by_import_path("a.slg").map(|d| d.name()),
            Some("Second")
        );
    }
}
