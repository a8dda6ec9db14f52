//! Registry mutation strategies, one per release family.
//!
//! A strategy encodes how one family's registry layout is mutated: where the structures live,
//! which internal identifiers reach them, and what a reversal has to undo. Raw field
//! identifiers never leave this module and its children; everything above works with
//! descriptors, class handles and registration records.

mod keyed;
mod mapped;

use std::any::Any;
use std::sync::Arc;

use petblocks_abi::{AbiError, ClassHandle, FieldHandle, HostImage};
use thiserror::Error;

use crate::descriptor::EntityDescriptor;
use crate::family::VersionFamily;
use crate::ledger::RegistrationRecord;
use crate::probe::ServerVersion;

/// A custom entity registration failed; the entity type stays unavailable.
#[derive(Debug, Error)]
#[error(transparent)]
pub(crate) struct RegistrationError(#[from] AbiError);

/// Reversing one registration record failed; the record is dropped regardless.
#[derive(Debug, Error)]
#[error(transparent)]
pub(crate) struct UnregistrationError(#[from] AbiError);

/// A mutation protocol against one release family's registry layout.
pub(crate) trait RegistryStrategy: Send + Sync {
    /// Splice `class` into the host registry under `descriptor`'s identifiers and return the
    /// record needed to undo it.
    fn register(
        &self,
        image: &dyn HostImage,
        version: &ServerVersion,
        descriptor: &EntityDescriptor,
        class: &ClassHandle,
    ) -> Result<RegistrationRecord, RegistrationError>;

    /// Undo the mutations captured in `record`.
    ///
    /// Best-effort and idempotent: entries that are already gone are logged and skipped, so a
    /// reversal batch never aborts because the host state moved underneath it.
    fn reverse(
        &self,
        image: &dyn HostImage,
        version: &ServerVersion,
        record: &RegistrationRecord,
    ) -> Result<(), UnregistrationError>;
}

/// The strategy for `family`.
pub(crate) fn for_family(family: VersionFamily) -> &'static dyn RegistryStrategy {
    match family {
        VersionFamily::Mapped => &mapped::MappedStrategy,
        VersionFamily::Keyed => &keyed::KeyedStrategy,
    }
}

/// Fetch a static field of `class` and downcast it to the layout mirror `T`.
fn static_field_as<T: Any + Send + Sync>(
    image: &dyn HostImage,
    class: &ClassHandle,
    field: &str,
) -> Result<Arc<T>, AbiError> {
    downcast_field(
        image.static_field(class, field)?,
        class.qualified_name(),
        field,
    )
}

/// Downcast a field handle to the layout mirror `T`.
fn downcast_field<T: Any + Send + Sync>(
    handle: FieldHandle,
    owner: &str,
    field: &str,
) -> Result<Arc<T>, AbiError> {
    handle.downcast::<T>().map_err(|_| AbiError::LayoutMismatch {
        owner: owner.to_owned(),
        field: field.to_owned(),
    })
}
