use petblocks_abi::layout::{fields, mapped};
use petblocks_abi::{ClassHandle, HostImage};

use super::{static_field_as, RegistrationError, RegistryStrategy, UnregistrationError};
use crate::config::global_config;
use crate::descriptor::EntityDescriptor;
use crate::ledger::RegistrationRecord;
use crate::probe::ServerVersion;

/// Mutation protocol for the mapped release family.
///
/// Registration locates each lookup map by its internal field identifier and inserts the
/// descriptor's save key, numeric id and class into all of them. The insertions are not
/// atomic: a failure partway leaves the earlier entries in place and reports the failure,
/// matching the host's own lack of atomicity. Reversal removes the same entries, but only
/// where they still point at the registered class.
pub(crate) struct MappedStrategy;

impl RegistryStrategy for MappedStrategy {
    fn register(
        &self,
        image: &dyn HostImage,
        version: &ServerVersion,
        descriptor: &EntityDescriptor,
        class: &ClassHandle,
    ) -> Result<RegistrationRecord, RegistrationError> {
        let registry_class = image.class(
            &global_config().internal_class_name(version, fields::TYPE_REGISTRY_CLASS),
        )?;

        let name_to_class = static_field_as::<mapped::NameToClass>(
            image,
            &registry_class,
            fields::mapped::NAME_TO_CLASS,
        )?;
        name_to_class
            .write()
            .unwrap()
            .insert(descriptor.save_key().to_owned(), class.clone());

        let class_to_name = static_field_as::<mapped::ClassToName>(
            image,
            &registry_class,
            fields::mapped::CLASS_TO_NAME,
        )?;
        class_to_name
            .write()
            .unwrap()
            .insert(class.clone(), descriptor.save_key().to_owned());

        let id_to_class =
            static_field_as::<mapped::IdToClass>(image, &registry_class, fields::mapped::ID_TO_CLASS)?;
        id_to_class
            .write()
            .unwrap()
            .insert(descriptor.type_id(), class.clone());

        let class_to_id =
            static_field_as::<mapped::ClassToId>(image, &registry_class, fields::mapped::CLASS_TO_ID)?;
        class_to_id
            .write()
            .unwrap()
            .insert(class.clone(), descriptor.type_id());

        Ok(RegistrationRecord::mapped(descriptor.clone(), class.clone()))
    }

    fn reverse(
        &self,
        image: &dyn HostImage,
        version: &ServerVersion,
        record: &RegistrationRecord,
    ) -> Result<(), UnregistrationError> {
        let registry_class = image.class(
            &global_config().internal_class_name(version, fields::TYPE_REGISTRY_CLASS),
        )?;
        let descriptor = record.descriptor();
        let class = record.class();

        let name_to_class = static_field_as::<mapped::NameToClass>(
            image,
            &registry_class,
            fields::mapped::NAME_TO_CLASS,
        )?;
        {
            let mut map = name_to_class.write().unwrap();
            let ours = map.get(descriptor.save_key()).map(|current| current == class);
            match ours {
                Some(true) => {
                    map.remove(descriptor.save_key());
                }
                Some(false) => log::warn!(
                    "`{}` is no longer mapped to the registered class; leaving the host's mapping (stock class `{}`) in place",
                    descriptor.save_key(),
                    descriptor.host_class(),
                ),
                None => log::debug!(
                    "`{}` was already absent from the save key mapping",
                    descriptor.save_key(),
                ),
            }
        }

        let class_to_name = static_field_as::<mapped::ClassToName>(
            image,
            &registry_class,
            fields::mapped::CLASS_TO_NAME,
        )?;
        if class_to_name.write().unwrap().remove(class).is_none() {
            log::debug!("`{class}` was already absent from the class name mapping");
        }

        let id_to_class =
            static_field_as::<mapped::IdToClass>(image, &registry_class, fields::mapped::ID_TO_CLASS)?;
        {
            let mut map = id_to_class.write().unwrap();
            let ours = map.get(&descriptor.type_id()).map(|current| current == class);
            match ours {
                Some(true) => {
                    map.remove(&descriptor.type_id());
                }
                Some(false) => log::warn!(
                    "id {} is no longer mapped to the registered class; leaving the host's mapping (stock class `{}`) in place",
                    descriptor.type_id(),
                    descriptor.host_class(),
                ),
                None => log::debug!(
                    "id {} was already absent from the id mapping",
                    descriptor.type_id(),
                ),
            }
        }

        let class_to_id =
            static_field_as::<mapped::ClassToId>(image, &registry_class, fields::mapped::CLASS_TO_ID)?;
        if class_to_id.write().unwrap().remove(class).is_none() {
            log::debug!("`{class}` was already absent from the class id mapping");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use petblocks_abi::MemoryImage;

    use super::*;

    fn rabbit() -> EntityDescriptor {
        EntityDescriptor::new(101, "RABBIT", "Rabbit", "rabbit", "EntityRabbit").unwrap()
    }

    fn mapped_image() -> (MemoryImage, ClassHandle, ServerVersion) {
        let mut image = MemoryImage::new("net.minecraft.server.v1_8_R1");
        let registry_class = image.install_mapped_registry();
        (image, registry_class, ServerVersion::new("v1_8_R1"))
    }

    fn map_snapshot<K, V>(lock: &std::sync::RwLock<HashMap<K, V>>) -> HashMap<K, V>
    where
        K: Clone + Eq + std::hash::Hash,
        V: Clone,
    {
        lock.read().unwrap().clone()
    }

    #[test]
    fn register_inserts_four_entries_and_reverse_removes_them() {
        let (image, registry_class, version) = mapped_image();
        let class = ClassHandle::new("com.github.petblocks.nms.v1_8_R1.CustomRabbit");
        let descriptor = rabbit();

        let name_to_class = static_field_as::<mapped::NameToClass>(
            &image,
            &registry_class,
            fields::mapped::NAME_TO_CLASS,
        )
        .unwrap();
        let class_to_name = static_field_as::<mapped::ClassToName>(
            &image,
            &registry_class,
            fields::mapped::CLASS_TO_NAME,
        )
        .unwrap();
        let id_to_class = static_field_as::<mapped::IdToClass>(
            &image,
            &registry_class,
            fields::mapped::ID_TO_CLASS,
        )
        .unwrap();
        let class_to_id = static_field_as::<mapped::ClassToId>(
            &image,
            &registry_class,
            fields::mapped::CLASS_TO_ID,
        )
        .unwrap();

        let before = (
            map_snapshot(&name_to_class),
            map_snapshot(&class_to_name),
            map_snapshot(&id_to_class),
            map_snapshot(&class_to_id),
        );

        let record = MappedStrategy
            .register(&image, &version, &descriptor, &class)
            .unwrap();
        assert!(record.fabricated_key().is_none());

        assert_eq!(
            name_to_class.read().unwrap().get("Rabbit"),
            Some(&class)
        );
        assert_eq!(
            class_to_name.read().unwrap().get(&class),
            Some(&"Rabbit".to_owned())
        );
        assert_eq!(id_to_class.read().unwrap().get(&101), Some(&class));
        assert_eq!(class_to_id.read().unwrap().get(&class), Some(&101));

        MappedStrategy.reverse(&image, &version, &record).unwrap();

        let after = (
            map_snapshot(&name_to_class),
            map_snapshot(&class_to_name),
            map_snapshot(&id_to_class),
            map_snapshot(&class_to_id),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn partial_failure_leaves_earlier_insertions_in_place() {
        let mut image = MemoryImage::new("net.minecraft.server.v1_8_R1");
        let registry_class =
            image.define_class("net.minecraft.server.v1_8_R1.EntityTypes");
        image.define_static(
            &registry_class,
            fields::mapped::NAME_TO_CLASS,
            Arc::new(mapped::NameToClass::default()),
        );
        let version = ServerVersion::new("v1_8_R1");
        let class = ClassHandle::new("com.github.petblocks.nms.v1_8_R1.CustomRabbit");

        let result = MappedStrategy.register(&image, &version, &rabbit(), &class);
        assert!(result.is_err());

        let name_to_class = static_field_as::<mapped::NameToClass>(
            &image,
            &registry_class,
            fields::mapped::NAME_TO_CLASS,
        )
        .unwrap();
        assert_eq!(name_to_class.read().unwrap().get("Rabbit"), Some(&class));
    }

    #[test]
    fn reverse_leaves_foreign_mappings_in_place() {
        let (image, registry_class, version) = mapped_image();
        let class = ClassHandle::new("com.github.petblocks.nms.v1_8_R1.CustomRabbit");
        let descriptor = rabbit();

        let record = MappedStrategy
            .register(&image, &version, &descriptor, &class)
            .unwrap();

        // The host (or another plugin) re-points the name mapping after our registration.
        let stock = ClassHandle::new("net.minecraft.server.v1_8_R1.EntityRabbit");
        let name_to_class = static_field_as::<mapped::NameToClass>(
            &image,
            &registry_class,
            fields::mapped::NAME_TO_CLASS,
        )
        .unwrap();
        name_to_class
            .write()
            .unwrap()
            .insert("Rabbit".to_owned(), stock.clone());

        MappedStrategy.reverse(&image, &version, &record).unwrap();
        assert_eq!(name_to_class.read().unwrap().get("Rabbit"), Some(&stock));
    }

    #[test]
    fn reverse_is_idempotent() {
        let (image, _, version) = mapped_image();
        let class = ClassHandle::new("com.github.petblocks.nms.v1_8_R1.CustomRabbit");
        let record = MappedStrategy
            .register(&image, &version, &rabbit(), &class)
            .unwrap();

        MappedStrategy.reverse(&image, &version, &record).unwrap();
        MappedStrategy.reverse(&image, &version, &record).unwrap();
    }

    #[test]
    fn missing_registry_class_is_an_error() {
        let image = MemoryImage::new("net.minecraft.server.v1_8_R1");
        let version = ServerVersion::new("v1_8_R1");
        let class = ClassHandle::new("com.github.petblocks.nms.v1_8_R1.CustomRabbit");

        assert!(MappedStrategy
            .register(&image, &version, &rabbit(), &class)
            .is_err());
    }
}
