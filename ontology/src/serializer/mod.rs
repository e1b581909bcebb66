//! Serializers for loaded ontology documents.
//!
//! Only **N-Triples** ([`ntriples`]) is produced: sorted one statement per
//! line, which keeps output stable for diffs and golden files.

pub mod ntriples;
