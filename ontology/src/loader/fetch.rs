//! Reading raw document bytes from disk or over HTTP.

use std::io::ErrorKind;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;

use super::source::{path_to_file_iri, DocumentSource};
use super::NetworkPolicy;
use crate::error::LoadError;
use crate::syntax::Syntax;

/// Accept header sent with remote requests, RDF/XML preferred.
const ACCEPT_RDF: &str =
    "application/rdf+xml, text/turtle;q=0.9, application/n-triples;q=0.8, */*;q=0.1";

/// Raw document content plus what is known about it before parsing.
#[derive(Debug)]
pub(crate) struct Fetched {
    /// Document IRI (absolute `file:` IRI or the final URL after redirects).
    pub document_iri: String,
    /// Document body.
    pub bytes: Vec<u8>,
    /// Syntax hinted at by the extension or `Content-Type`.
    pub hint: Option<Syntax>,
}

/// Reads a document.
///
/// # Errors
///
/// Missing or unreadable files map to [`LoadError::NotFound`]; transport
/// failures and disabled network access to [`LoadError::Network`].
pub(crate) fn fetch(
    source: &DocumentSource,
    network: NetworkPolicy,
    timeout: Option<Duration>,
) -> Result<Fetched, LoadError> {
    match source {
        DocumentSource::File(path) => {
            let location = path.display().to_string();
            let bytes = std::fs::read(path).map_err(|e| match e.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => LoadError::NotFound {
                    location: location.clone(),
                    source: Some(e),
                },
                _ => LoadError::Creation {
                    location: location.clone(),
                    message: format!("I/O error: {e}"),
                },
            })?;
            let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
            let document_iri = path_to_file_iri(&absolute).ok_or_else(|| LoadError::Creation {
                location: location.clone(),
                message: "cannot build a file IRI for this path".to_owned(),
            })?;
            Ok(Fetched {
                document_iri,
                bytes,
                hint: source.extension().as_deref().and_then(Syntax::from_extension),
            })
        }
        DocumentSource::Remote(iri) => fetch_remote(iri, source, network, timeout),
    }
}

fn fetch_remote(
    iri: &str,
    source: &DocumentSource,
    network: NetworkPolicy,
    timeout: Option<Duration>,
) -> Result<Fetched, LoadError> {
    let network_error = |message: String| LoadError::Network {
        location: iri.to_owned(),
        message,
    };
    if network == NetworkPolicy::Deny {
        return Err(network_error(
            "network access is disabled by configuration".to_owned(),
        ));
    }

    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder
        .build()
        .map_err(|e| network_error(format!("could not build HTTP client: {e}")))?;

    tracing::debug!(iri, "fetching remote document");
    let response = client
        .get(iri)
        .header(ACCEPT, ACCEPT_RDF)
        .send()
        .map_err(|e| network_error(e.to_string()))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
        return Err(LoadError::NotFound {
            location: iri.to_owned(),
            source: None,
        });
    }
    if !status.is_success() {
        return Err(network_error(format!("HTTP status {status}")));
    }

    let media_hint = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .and_then(Syntax::from_media_type);
    let document_iri = response.url().to_string();
    let bytes = response
        .bytes()
        .map_err(|e| network_error(format!("reading response body: {e}")))?
        .to_vec();

    Ok(Fetched {
        document_iri,
        bytes,
        hint: media_hint.or_else(|| source.extension().as_deref().and_then(Syntax::from_extension)),
    })
}
