//! Ontology document fixtures for validator and client tests.
//!
//! Each constant holds a complete document. Tests write them to a scratch
//! directory with the extension matching their syntax before loading them,
//! so the loader's extension sniffing is exercised too.

mod broken;
mod imports;
mod people;

pub use broken::{
    BAD_RESTRICTION_TTL, DISJOINT_INCONSISTENT_TTL, HEADERLESS_TTL, TRUNCATED_OWL,
    UNCLOSED_ELEMENT_OWL, UNCLOSED_ROOT_OWL,
};
pub use imports::{importing, BASE_IRI, BASE_TTL};
pub use people::{PEOPLE_IRI, PEOPLE_OWL, PEOPLE_TTL};
