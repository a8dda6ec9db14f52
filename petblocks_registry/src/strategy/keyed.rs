use petblocks_abi::layout::fields;
use petblocks_abi::layout::keyed::{KeyedBacking, KeyedTypeRegistry};
use petblocks_abi::{ClassHandle, HostImage, NamespacedKey};

use super::{downcast_field, static_field_as, RegistrationError, RegistryStrategy, UnregistrationError};
use crate::config::global_config;
use crate::descriptor::EntityDescriptor;
use crate::ledger::RegistrationRecord;
use crate::probe::ServerVersion;

/// Mutation protocol for the keyed release family.
///
/// The host exposes a single registration object and no removal entry point. Registration
/// fabricates a namespaced key through the host's key class and hands it to the object's
/// registration method; the key is retained in the record because it is the only handle that
/// can remove the entry again. Reversal reaches the object's backing collection through its
/// instance field and removes the entry under the retained key.
pub(crate) struct KeyedStrategy;

impl RegistryStrategy for KeyedStrategy {
    fn register(
        &self,
        image: &dyn HostImage,
        version: &ServerVersion,
        descriptor: &EntityDescriptor,
        class: &ClassHandle,
    ) -> Result<RegistrationRecord, RegistrationError> {
        let (registry_class_name, key_class_name, namespace) = {
            let config = global_config();
            (
                config.internal_class_name(version, fields::TYPE_REGISTRY_CLASS),
                config.internal_class_name(version, fields::keyed::KEY_CLASS),
                config.key_namespace().to_owned(),
            )
        };

        let registry_class = image.class(&registry_class_name)?;
        // A host without the key class cannot fabricate keys; fail before touching the registry.
        image.class(&key_class_name)?;

        let registry =
            static_field_as::<KeyedTypeRegistry>(image, &registry_class, fields::keyed::REGISTRY)?;
        let key = NamespacedKey::new(namespace, descriptor.save_key());
        registry.add(descriptor.type_id(), key.clone(), class.clone());

        Ok(RegistrationRecord::keyed(
            descriptor.clone(),
            class.clone(),
            key,
        ))
    }

    fn reverse(
        &self,
        image: &dyn HostImage,
        version: &ServerVersion,
        record: &RegistrationRecord,
    ) -> Result<(), UnregistrationError> {
        let Some(key) = record.fabricated_key() else {
            log::warn!(
                "registration record for `{}` carries no namespaced key; nothing to remove",
                record.descriptor().name(),
            );
            return Ok(());
        };

        let registry_class_name =
            global_config().internal_class_name(version, fields::TYPE_REGISTRY_CLASS);
        let registry_class = image.class(&registry_class_name)?;
        let registry = image.static_field(&registry_class, fields::keyed::REGISTRY)?;
        let backing = image.object_field(&registry, fields::keyed::BACKING)?;
        let backing = downcast_field::<KeyedBacking>(
            backing,
            registry_class.qualified_name(),
            fields::keyed::BACKING,
        )?;

        if backing.write().unwrap().remove(key).is_none() {
            log::debug!("`{key}` was already absent from the keyed registry");
        }
        Ok(())
    }
}
