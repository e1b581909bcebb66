//! Where a document comes from, and how that turns into a document IRI.

use std::fmt;
use std::path::{Path, PathBuf};

use url::Url;

/// A document to load: a local file or a remote IRI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A local file.
    File(PathBuf),
    /// An `http:` or `https:` IRI.
    Remote(String),
}

impl DocumentSource {
    /// Interprets caller input: `http(s):` IRIs are remote, `file:` IRIs and
    /// everything else are local paths.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            return DocumentSource::Remote(input.to_owned());
        }
        match file_iri_to_path(input) {
            Some(path) => DocumentSource::File(path),
            None => DocumentSource::File(PathBuf::from(input)),
        }
    }

    /// The path or IRI as given, for diagnostics.
    #[must_use]
    pub fn location(&self) -> String {
        match self {
            DocumentSource::File(path) => path.display().to_string(),
            DocumentSource::Remote(iri) => iri.clone(),
        }
    }

    /// Lowercase file extension of the last path segment, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        let last = match self {
            DocumentSource::File(path) => path.file_name()?.to_str()?.to_owned(),
            DocumentSource::Remote(iri) => {
                Url::parse(iri).ok()?.path_segments()?.next_back()?.to_owned()
            }
        };
        let (_, ext) = last.rsplit_once('.')?;
        Some(ext.to_ascii_lowercase())
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location())
    }
}

/// Builds a `file:` IRI for an absolute path. Returns `None` for relative
/// paths.
#[must_use]
pub fn path_to_file_iri(path: &Path) -> Option<String> {
    Url::from_file_path(path).ok().map(String::from)
}

/// Converts a `file:` IRI back to a path. Returns `None` for other schemes
/// and for IRIs naming a remote host.
#[must_use]
pub fn file_iri_to_path(iri: &str) -> Option<PathBuf> {
    let url = Url::parse(iri).ok().filter(|u| u.scheme() == "file")?;
    url.to_file_path().ok()
}
