//! Shared test material.

pub mod fixtures;
