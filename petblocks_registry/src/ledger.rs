use petblocks_abi::{ClassHandle, HostImage, NamespacedKey};

use crate::descriptor::EntityDescriptor;
use crate::family::VersionFamily;
use crate::probe::ServerVersion;
use crate::strategy;

/// Everything needed to reverse one registry mutation.
///
/// Created by the strategy that performed the mutation and owned by the
/// [`RegistrationLedger`]; records never leave the crate.
#[derive(Clone, Debug)]
pub(crate) struct RegistrationRecord {
    family: VersionFamily,
    descriptor: EntityDescriptor,
    class: ClassHandle,
    fabricated_key: Option<NamespacedKey>,
}

impl RegistrationRecord {
    /// A record for a mapped-family registration; no key is fabricated in that protocol.
    pub(crate) fn mapped(descriptor: EntityDescriptor, class: ClassHandle) -> Self {
        Self {
            family: VersionFamily::Mapped,
            descriptor,
            class,
            fabricated_key: None,
        }
    }

    /// A record for a keyed-family registration, retaining the fabricated key.
    pub(crate) fn keyed(
        descriptor: EntityDescriptor,
        class: ClassHandle,
        key: NamespacedKey,
    ) -> Self {
        Self {
            family: VersionFamily::Keyed,
            descriptor,
            class,
            fabricated_key: Some(key),
        }
    }

    pub(crate) fn family(&self) -> VersionFamily {
        self.family
    }

    pub(crate) fn descriptor(&self) -> &EntityDescriptor {
        &self.descriptor
    }

    pub(crate) fn class(&self) -> &ClassHandle {
        &self.class
    }

    pub(crate) fn fabricated_key(&self) -> Option<&NamespacedKey> {
        self.fabricated_key.as_ref()
    }
}

/// The ordered record of every mutation performed against the host registry.
///
/// Append-only while registering (no deduplication: the same descriptor registered twice
/// yields two records and two reversals), drained in reverse insertion order on shutdown.
/// After [`drain_and_reverse_all`](RegistrationLedger::drain_and_reverse_all) the ledger is
/// empty no matter what happened: failed reversals are logged and dropped rather than
/// re-queued, so a reload never replays stale records.
#[derive(Default)]
pub(crate) struct RegistrationLedger {
    records: Vec<RegistrationRecord>,
}

impl RegistrationLedger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub(crate) fn record(&mut self, record: RegistrationRecord) {
        self.records.push(record);
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reverse every record, last registered first, and leave the ledger empty.
    pub(crate) fn drain_and_reverse_all(&mut self, image: &dyn HostImage, version: &ServerVersion) {
        for record in self.records.drain(..).rev() {
            log::debug!("reversing registration of `{}`", record.descriptor().name());
            let result = strategy::for_family(record.family()).reverse(image, version, &record);
            if let Err(err) = result {
                log::warn!(
                    "failed to reverse registration of `{}`: {err}",
                    record.descriptor().name(),
                );
            }
        }
    }
}
