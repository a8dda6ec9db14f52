//! The built-in pet entity table.
//!
//! Declarative data only: building the table validates every descriptor but never reaches
//! into the host. Registration, the only operation allowed to fail against a live host,
//! happens later in [`lifecycle::enable`](crate::lifecycle::enable).

use petblocks_registry::{EntityDescriptor, InvalidDescriptorError};

/// A built-in pet entity type: its descriptor plus the class-name template of the plugin's
/// custom implementation.
#[derive(Clone, Debug)]
pub struct BuiltinEntity {
    descriptor: EntityDescriptor,
    class_template: &'static str,
}

impl BuiltinEntity {
    /// The validated descriptor.
    #[must_use]
    pub fn descriptor(&self) -> &EntityDescriptor {
        &self.descriptor
    }

    /// Class-name template of the plugin's custom implementation, with the version token
    /// still unresolved.
    #[must_use]
    pub fn class_template(&self) -> &'static str {
        self.class_template
    }
}

/// id, canonical name, save key, legacy save key, host stock class, custom class template.
const TABLE: [(i32, &str, &str, &str, &str, &str); 3] = [
    (
        101,
        "RABBIT",
        "Rabbit",
        "rabbit",
        "EntityRabbit",
        "com.github.petblocks.nms.VERSION.CustomRabbit",
    ),
    (
        100,
        "HORSE",
        "Horse",
        "Horse",
        "EntityHorse",
        "com.github.petblocks.nms.VERSION.CustomHorse",
    ),
    (
        54,
        "ZOMBIE",
        "Zombie",
        "zombie",
        "EntityZombie",
        "com.github.petblocks.nms.VERSION.CustomZombie",
    ),
];

/// Build the built-in entity table.
///
/// # Errors
/// Returns an [`InvalidDescriptorError`] if the static table carries invalid data; that is a
/// programming error and should fail the plugin load outright.
pub fn descriptors() -> Result<Vec<BuiltinEntity>, InvalidDescriptorError> {
    TABLE
        .iter()
        .map(
            |&(id, name, save_key, legacy_save_key, host_class, class_template)| {
                Ok(BuiltinEntity {
                    descriptor: EntityDescriptor::new(
                        id,
                        name,
                        save_key,
                        legacy_save_key,
                        host_class,
                    )?,
                    class_template,
                })
            },
        )
        .collect()
}
