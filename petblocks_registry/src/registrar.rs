use std::sync::Arc;

use petblocks_abi::{ClassHandle, HostImage};

use crate::config::global_config;
use crate::descriptor::EntityDescriptor;
use crate::family::VersionFamily;
use crate::ledger::RegistrationLedger;
use crate::probe::{detect_server_version, ProbeError, ServerVersion};
use crate::strategy;

/// The public face of the registry bridge.
///
/// A registrar probes the host version once at construction and owns the registration ledger
/// for its lifetime. Its operations are total: anything that fails below this boundary is
/// logged and the affected entity type simply stays unavailable, because a compatibility
/// layer built on introspection has to degrade on unknown hosts rather than take the plugin
/// down with it.
///
/// The host drives registration during plugin enable and [`unregister_all`] during disable;
/// its lifecycle contract guarantees the two phases are serialized and never overlap.
///
/// [`unregister_all`]: EntityRegistrar::unregister_all
pub struct EntityRegistrar {
    image: Arc<dyn HostImage>,
    version: ServerVersion,
    family: VersionFamily,
    ledger: RegistrationLedger,
}

impl EntityRegistrar {
    /// Probe `image` and build a registrar for the detected release family.
    ///
    /// # Errors
    /// Returns a [`ProbeError`] if the host version cannot be detected; the registry bridge
    /// as a whole is unusable on such a host.
    pub fn new(image: Arc<dyn HostImage>) -> Result<Self, ProbeError> {
        let version = detect_server_version(image.as_ref())?;
        let family = VersionFamily::of(&version);
        log::debug!("host version `{version}` uses the {family:?} registry protocol");
        Ok(Self {
            image,
            version,
            family,
            ledger: RegistrationLedger::new(),
        })
    }

    /// The detected host version token.
    #[must_use]
    pub fn version(&self) -> &ServerVersion {
        &self.version
    }

    /// The release family the host was classified into.
    #[must_use]
    pub fn family(&self) -> VersionFamily {
        self.family
    }

    /// Number of registrations currently held in the ledger.
    #[must_use]
    pub fn registered_count(&self) -> usize {
        self.ledger.len()
    }

    /// Register `class` as the implementation of `descriptor`'s entity type.
    ///
    /// On success the mutation is recorded for later reversal. On failure a warning is
    /// logged and nothing is recorded.
    pub fn register(&mut self, descriptor: &EntityDescriptor, class: &ClassHandle) {
        let strategy = strategy::for_family(self.family);
        match strategy.register(self.image.as_ref(), &self.version, descriptor, class) {
            Ok(record) => {
                self.ledger.record(record);
                log::debug!(
                    "registered custom entity `{}` as `{class}`",
                    descriptor.name(),
                );
            }
            Err(err) => {
                log::warn!(
                    "failed to register custom entity `{}`: {err}",
                    descriptor.name(),
                );
            }
        }
    }

    /// Resolve an implementation class by name template and register it.
    ///
    /// The configured version token in `class_name_template` is substituted with the detected
    /// host version before resolution. Resolution failures are logged and nothing is
    /// registered.
    pub fn register_from_class_name(
        &mut self,
        descriptor: &EntityDescriptor,
        class_name_template: &str,
    ) {
        let class_name = global_config().substitute_version(class_name_template, &self.version);
        match self.image.class(&class_name) {
            Ok(class) => self.register(descriptor, &class),
            Err(err) => {
                log::warn!(
                    "failed to resolve custom entity class for `{}`: {err}",
                    descriptor.name(),
                );
            }
        }
    }

    /// Reverse every recorded registration, last first, and leave the ledger empty.
    ///
    /// Individual reversal failures are logged and their records dropped anyway. Safe to call
    /// repeatedly; a second call finds nothing to do.
    pub fn unregister_all(&mut self) {
        if self.ledger.is_empty() {
            log::debug!("no custom entity registrations to reverse");
            return;
        }
        self.ledger.drain_and_reverse_all(self.image.as_ref(), &self.version);
    }
}
