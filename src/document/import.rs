use super::{DEFAULT_STEM, DocumentKind, GraphDocument, RelationDocument};
use crate::error::ImportError;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A parsed document together with the name it was read from.
#[derive(Debug, Clone)]
pub(crate) struct Sourced<T> {
    pub(crate) source_name: String,
    pub(crate) document: T,
}

/// Any subset of the three workspace documents, parsed but not yet applied.
///
/// Building a bundle is all-or-nothing: the first unreadable or malformed source aborts
/// the whole bundle, so a caller never ends up applying half an upload.
#[derive(Debug, Clone, Default)]
pub struct ImportBundle {
    pub(crate) flow: Option<Sourced<GraphDocument>>,
    pub(crate) physical: Option<Sourced<GraphDocument>>,
    pub(crate) relations: Option<Sourced<RelationDocument>>,
}

/// What an applied import changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Documents that replaced their in-memory store, in flow/physical/relation order.
    pub replaced: Vec<DocumentKind>,
    /// Relation references dropped because their node did not exist after the import.
    pub pruned_references: usize,
}

impl ImportBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flow(mut self, document: GraphDocument) -> Self {
        self.flow = Some(Self::in_memory(DocumentKind::Flow, document));
        self
    }

    pub fn with_physical(mut self, document: GraphDocument) -> Self {
        self.physical = Some(Self::in_memory(DocumentKind::Physical, document));
        self
    }

    pub fn with_relations(mut self, document: RelationDocument) -> Self {
        self.relations = Some(Self::in_memory(DocumentKind::Relation, document));
        self
    }

    /// Parses every `(file name, contents)` pair; the file name suffix selects the document.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ImportError> {
        let mut bundle = Self::new();
        for (file_name, contents) in sources {
            bundle.add_source(file_name, contents)?;
        }
        Ok(bundle)
    }

    /// Reads and parses files from disk. Nothing is returned unless every file parsed.
    pub fn from_paths<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Self, ImportError> {
        let mut bundle = Self::new();
        for path in paths {
            let path = path.as_ref();
            let display = path.display().to_string();
            let kind = DocumentKind::from_path(path)
                .ok_or_else(|| ImportError::UnrecognizedFile(display.clone()))?;
            bundle.ensure_absent(kind)?;
            let contents = fs::read_to_string(path).map_err(|e| ImportError::Io {
                path: display.clone(),
                message: e.to_string(),
            })?;
            bundle.add_parsed(kind, &display, &contents)?;
        }
        Ok(bundle)
    }

    /// Reads whichever of `<stem>.flow`, `<stem>.physical` and `<stem>.relation` exist in
    /// a directory.
    pub fn from_dir(dir: &Path, stem: &str) -> Result<Self, ImportError> {
        let paths: Vec<_> = DocumentKind::ALL
            .into_iter()
            .map(|kind| kind.path_in(dir, stem))
            .filter(|path| path.is_file())
            .collect();
        Self::from_paths(paths)
    }

    pub fn add_source(&mut self, file_name: &str, contents: &str) -> Result<(), ImportError> {
        let kind = DocumentKind::from_file_name(file_name)
            .ok_or_else(|| ImportError::UnrecognizedFile(file_name.to_string()))?;
        self.ensure_absent(kind)?;
        self.add_parsed(kind, file_name, contents)
    }

    pub fn is_empty(&self) -> bool {
        self.kinds().is_empty()
    }

    /// Document kinds present in the bundle.
    pub fn kinds(&self) -> Vec<DocumentKind> {
        let mut kinds = Vec::new();
        if self.flow.is_some() {
            kinds.push(DocumentKind::Flow);
        }
        if self.physical.is_some() {
            kinds.push(DocumentKind::Physical);
        }
        if self.relations.is_some() {
            kinds.push(DocumentKind::Relation);
        }
        kinds
    }

    pub fn flow(&self) -> Option<&GraphDocument> {
        self.flow.as_ref().map(|s| &s.document)
    }

    pub fn physical(&self) -> Option<&GraphDocument> {
        self.physical.as_ref().map(|s| &s.document)
    }

    pub fn relations(&self) -> Option<&RelationDocument> {
        self.relations.as_ref().map(|s| &s.document)
    }

    fn ensure_absent(&self, kind: DocumentKind) -> Result<(), ImportError> {
        if self.kinds().contains(&kind) {
            return Err(ImportError::DuplicateDocument(kind));
        }
        Ok(())
    }

    fn add_parsed(
        &mut self,
        kind: DocumentKind,
        source_name: &str,
        contents: &str,
    ) -> Result<(), ImportError> {
        match kind {
            DocumentKind::Flow => self.flow = Some(parse(kind, source_name, contents)?),
            DocumentKind::Physical => self.physical = Some(parse(kind, source_name, contents)?),
            DocumentKind::Relation => self.relations = Some(parse(kind, source_name, contents)?),
        }
        debug!(document = %kind, source = source_name, "parsed document");
        Ok(())
    }

    fn in_memory<T>(kind: DocumentKind, document: T) -> Sourced<T> {
        Sourced {
            source_name: kind.file_name(DEFAULT_STEM),
            document,
        }
    }
}

fn parse<T: DeserializeOwned>(
    kind: DocumentKind,
    source_name: &str,
    contents: &str,
) -> Result<Sourced<T>, ImportError> {
    let document = serde_json::from_str(contents).map_err(|e| ImportError::MalformedImport {
        document: kind,
        source_name: source_name.to_string(),
        message: e.to_string(),
    })?;
    Ok(Sourced {
        source_name: source_name.to_string(),
        document,
    })
}
