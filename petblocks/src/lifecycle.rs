//! Plugin lifecycle glue.
//!
//! The host calls into the plugin for entity registration exactly twice: once when the
//! plugin is enabled and once when it is disabled or reloaded. Both calls arrive on the
//! host's initialization thread and never overlap, so the registrar needs no locking of its
//! own.

use std::sync::Arc;

use petblocks_abi::HostImage;
use petblocks_registry::{EntityRegistrar, InvalidDescriptorError, ProbeError};
use thiserror::Error;

use crate::builtin;

/// The entity registration subsystem could not be brought up at all.
///
/// Per-entity failures are not represented here; they degrade to logged warnings inside the
/// registrar and the affected pet type stays unavailable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EnableError {
    /// The host version could not be detected.
    #[error(transparent)]
    Probe(#[from] ProbeError),
    /// The built-in entity table failed validation.
    #[error(transparent)]
    Descriptor(#[from] InvalidDescriptorError),
}

/// Bring up the registry bridge and register every built-in pet entity type.
///
/// Entities whose custom class cannot be resolved or registered are logged and skipped. The
/// returned registrar owns everything that was registered; hand it to [`disable`] on
/// shutdown so the host registry is restored.
///
/// # Errors
/// Returns an [`EnableError`] if the host version cannot be detected or the built-in table
/// fails validation.
pub fn enable(image: Arc<dyn HostImage>) -> Result<EntityRegistrar, EnableError> {
    let entities = builtin::descriptors()?;
    let mut registrar = EntityRegistrar::new(image)?;
    for entity in &entities {
        registrar.register_from_class_name(entity.descriptor(), entity.class_template());
    }
    log::debug!(
        "enabled entity registration with {} of {} built-in types",
        registrar.registered_count(),
        entities.len(),
    );
    Ok(registrar)
}

/// Reverse every registration the registrar performed.
pub fn disable(registrar: &mut EntityRegistrar) {
    registrar.unregister_all();
    log::debug!("disabled entity registration");
}
