//! Mirrors of the host's internal type-registry layout, per release family.
//!
//! These definitions track the in-memory shape of the structures the host's released binaries
//! keep their entity type registrations in. They exist to give [`FieldHandle`](crate::FieldHandle)
//! downcasts a concrete target and are not a stable API of the host or of this crate.
//!
//! Two release families are supported:
//! - [`mapped`]: the registry class keeps several parallel lookup maps as separate static
//!   fields, mutated entry by entry.
//! - [`keyed`]: the registry class keeps one registration object that accepts
//!   `(id, namespaced key, class)` triples and exposes no removal entry point.
//!
//! The exact internal identifiers used to reach these structures live in [`fields`].

pub mod fields;
pub mod keyed;
pub mod mapped;
