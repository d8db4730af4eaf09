//! Core data types for the elmkit tool manager.
//!
//! This crate defines the types that describe an Elm project and the
//! tools it can depend on: `elm.json` manifest parsing, the static
//! catalog of known tool versions, and version range matching.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod elm_json;
pub mod known_tools;
pub mod version;
