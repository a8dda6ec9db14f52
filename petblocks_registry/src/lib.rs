//! The versioned entity type registry bridge for the [`petblocks`](https://crates.io/crates/petblocks) Rust crate.
//!
//! The host application has no public API for adding entity types to its internal type
//! registry, and the registry's shape changes between host release families. This crate
//! detects the running host's version, picks the mutation protocol that release family uses,
//! splices custom entity types into the host's internal structures through the
//! [`petblocks_abi`] seam, and keeps a ledger of every mutation so that all of them can be
//! reversed exactly.
//!
//! The public surface is deliberately small:
//! - [`EntityDescriptor`]: declarative per-entity metadata, validated at construction.
//! - [`EntityRegistrar`]: the facade — [`register`](EntityRegistrar::register),
//!   [`register_from_class_name`](EntityRegistrar::register_from_class_name) and
//!   [`unregister_all`](EntityRegistrar::unregister_all).
//! - [`global_config`] / [`global_config_mut`]: the bridge configuration.
//!
//! Registrar operations are total: a failed registration is logged through [`log`] and the
//! affected entity type simply stays unavailable. The only fatal errors are a host whose
//! version cannot be detected at all ([`ProbeError`]) and invalid static descriptor data
//! ([`InvalidDescriptorError`]).
//!
//! ## Licence
//! `petblocks_registry` is licensed under either of
//!  - the Apache License, Version 2.0 [LICENSE-APACHE](https://docs.rs/crate/petblocks_registry/latest/source/LICENCE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license [LICENSE-MIT](https://docs.rs/crate/petblocks_registry/latest/source/LICENCE-MIT) or <http://opensource.org/licenses/MIT>, at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.

mod config;
pub use config::{global_config, global_config_mut, Config};

mod descriptor;
pub use descriptor::{EntityDescriptor, InvalidDescriptorError};

mod family;
pub use family::VersionFamily;

mod probe;
pub use probe::{detect_server_version, ProbeError, ServerVersion};

mod ledger;

mod strategy;

mod registrar;
pub use registrar::EntityRegistrar;
