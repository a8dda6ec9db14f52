//! The host ABI seam for the [`petblocks`](https://crates.io/crates/petblocks) Rust crate.
//!
//! The host application keeps its entity type registry in internal data structures that are
//! neither public API nor stable between releases. This crate is the only doorway to those
//! structures: a [`HostImage`] resolves classes and fields by their exact internal identifiers
//! and hands back type-erased [`FieldHandle`]s, and the [`layout`] module carries the
//! per-release-family mirrors those handles downcast to.
//!
//! Nothing in here is a stable host API. The identifier tables in [`layout::fields`] track the
//! host's released binary layout and change whenever the host does.
//!
//! An in-memory implementation, [`MemoryImage`], stands in for a live host in tests and
//! host-free development.
//!
//! ## Licence
//! `petblocks_abi` is licensed under either of
//!  - the Apache License, Version 2.0 [LICENSE-APACHE](https://docs.rs/crate/petblocks_abi/latest/source/LICENCE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license [LICENSE-MIT](https://docs.rs/crate/petblocks_abi/latest/source/LICENCE-MIT) or <http://opensource.org/licenses/MIT>, at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.

use thiserror::Error;

mod handle;
pub use handle::{ClassHandle, FieldHandle, NamespacedKey};

mod image;
pub use image::{HostImage, MemoryImage};

pub mod layout;

/// An introspection failure at the host boundary.
///
/// Every variant is terminal for the operation that hit it: there is no retry protocol for a
/// class or field the host image does not have.
#[derive(Clone, Debug, Error)]
pub enum AbiError {
    /// No class with the given fully-qualified name is present in the host image.
    #[error("class `{0}` is not present in the host image")]
    ClassNotFound(String),
    /// The named class or object exists but has no field with the given identifier.
    #[error("no field `{field}` on `{owner}`")]
    FieldNotFound {
        /// Qualified class name, or a description of the object, owning the missing field.
        owner: String,
        /// The internal field identifier that was looked up.
        field: String,
    },
    /// The field exists but its value does not have the layout this release family is expected
    /// to have.
    #[error("field `{field}` on `{owner}` does not have the expected layout")]
    LayoutMismatch {
        /// Qualified class name, or a description of the object, owning the field.
        owner: String,
        /// The internal field identifier that was looked up.
        field: String,
    },
}
