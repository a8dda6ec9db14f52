//! Custom pet entity types for a host game server, spliced into the host's internal type
//! registry.
//!
//! The host has no public API for registering entity types; its internal registry changes
//! shape between release families. This crate ties the pieces together:
//! - [`petblocks_registry`] (re-exported as [`registry`]) detects the host version, picks the
//!   matching mutation protocol and keeps the ledger that makes unregistration exact.
//! - [`petblocks_abi`] (re-exported as [`abi`]) is the introspection seam those mutations go
//!   through.
//! - [`builtin`] carries the declarative table of pet entity types the plugin ships.
//! - [`lifecycle`] is what the plugin's enable and disable hooks call.
//!
//! ```
//! use std::sync::Arc;
//!
//! use petblocks::abi::MemoryImage;
//! use petblocks::lifecycle;
//!
//! // A live deployment hands the host's own image to `enable`; the in-memory image stands
//! // in for it here.
//! let mut image = MemoryImage::new("net.minecraft.server.v1_8_R1");
//! image.install_mapped_registry();
//! image.define_class("com.github.petblocks.nms.v1_8_R1.CustomRabbit");
//! image.define_class("com.github.petblocks.nms.v1_8_R1.CustomHorse");
//! image.define_class("com.github.petblocks.nms.v1_8_R1.CustomZombie");
//!
//! let mut registrar = lifecycle::enable(Arc::new(image)).unwrap();
//! assert_eq!(registrar.registered_count(), 3);
//!
//! lifecycle::disable(&mut registrar);
//! assert_eq!(registrar.registered_count(), 0);
//! ```
//!
//! ## Licence
//! `petblocks` is licensed under either of
//!  - the Apache License, Version 2.0 [LICENSE-APACHE](https://docs.rs/crate/petblocks/latest/source/LICENCE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0> or
//!  - the MIT license [LICENSE-MIT](https://docs.rs/crate/petblocks/latest/source/LICENCE-MIT) or <http://opensource.org/licenses/MIT>, at your option.
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.

pub mod builtin;
pub mod lifecycle;

pub use petblocks_abi as abi;
pub use petblocks_registry as registry;
