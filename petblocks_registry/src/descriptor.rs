use thiserror::Error;

/// Immutable, declarative metadata for one custom entity type.
///
/// Descriptors are plain data built once at plugin load. Construction validates the fields
/// but never reaches into the host; class resolution is deferred to registration, which is
/// the only operation allowed to fail against a live host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityDescriptor {
    type_id: i32,
    name: String,
    save_key: String,
    legacy_save_key: String,
    host_class: String,
}

/// A descriptor field failed validation.
///
/// Descriptor tables are static data, so this is a programming error: it surfaces at plugin
/// load, before any host mutation is attempted.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidDescriptorError {
    /// The numeric type id is negative.
    #[error("entity type id {0} is negative")]
    NegativeId(i32),
    /// A required string field is empty.
    #[error("entity descriptor field `{0}` is empty")]
    EmptyField(&'static str),
}

impl EntityDescriptor {
    /// Create a validated descriptor.
    ///
    /// `save_key` is the primary save key used for registry entries; `legacy_save_key` is the
    /// alternate spelling older host serializers look entries up under; `host_class` is the
    /// simple name of the host's built-in implementation class for this entity family.
    ///
    /// # Errors
    /// Returns an [`InvalidDescriptorError`] if `type_id` is negative or any string field is
    /// empty.
    pub fn new(
        type_id: i32,
        name: impl Into<String>,
        save_key: impl Into<String>,
        legacy_save_key: impl Into<String>,
        host_class: impl Into<String>,
    ) -> Result<Self, InvalidDescriptorError> {
        let descriptor = Self {
            type_id,
            name: name.into(),
            save_key: save_key.into(),
            legacy_save_key: legacy_save_key.into(),
            host_class: host_class.into(),
        };
        if descriptor.type_id < 0 {
            return Err(InvalidDescriptorError::NegativeId(descriptor.type_id));
        }
        for (field, value) in [
            ("name", &descriptor.name),
            ("save_key", &descriptor.save_key),
            ("legacy_save_key", &descriptor.legacy_save_key),
            ("host_class", &descriptor.host_class),
        ] {
            if value.is_empty() {
                return Err(InvalidDescriptorError::EmptyField(field));
            }
        }
        Ok(descriptor)
    }

    /// The host-internal numeric type id. Unique within a version's id space.
    #[must_use]
    pub fn type_id(&self) -> i32 {
        self.type_id
    }

    /// The canonical entity name, e.g. `RABBIT`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The primary save key, e.g. `Rabbit`.
    #[must_use]
    pub fn save_key(&self) -> &str {
        &self.save_key
    }

    /// The alternate save key older host serializers use, e.g. `rabbit`.
    #[must_use]
    pub fn legacy_save_key(&self) -> &str {
        &self.legacy_save_key
    }

    /// Simple name of the host's built-in implementation class for this entity family.
    #[must_use]
    pub fn host_class(&self) -> &str {
        &self.host_class
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rabbit() -> Result<EntityDescriptor, InvalidDescriptorError> {
        EntityDescriptor::new(101, "RABBIT", "Rabbit", "rabbit", "EntityRabbit")
    }

    #[test]
    fn valid_descriptor() {
        let descriptor = rabbit().unwrap();
        assert_eq!(descriptor.type_id(), 101);
        assert_eq!(descriptor.name(), "RABBIT");
        assert_eq!(descriptor.save_key(), "Rabbit");
        assert_eq!(descriptor.legacy_save_key(), "rabbit");
        assert_eq!(descriptor.host_class(), "EntityRabbit");
    }

    #[test]
    fn negative_id_is_rejected() {
        let result = EntityDescriptor::new(-1, "RABBIT", "Rabbit", "rabbit", "EntityRabbit");
        assert_eq!(result, Err(InvalidDescriptorError::NegativeId(-1)));
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(
            EntityDescriptor::new(101, "", "Rabbit", "rabbit", "EntityRabbit"),
            Err(InvalidDescriptorError::EmptyField("name"))
        );
        assert_eq!(
            EntityDescriptor::new(101, "RABBIT", "", "rabbit", "EntityRabbit"),
            Err(InvalidDescriptorError::EmptyField("save_key"))
        );
        assert_eq!(
            EntityDescriptor::new(101, "RABBIT", "Rabbit", "", "EntityRabbit"),
            Err(InvalidDescriptorError::EmptyField("legacy_save_key"))
        );
        assert_eq!(
            EntityDescriptor::new(101, "RABBIT", "Rabbit", "rabbit", ""),
            Err(InvalidDescriptorError::EmptyField("host_class"))
        );
    }
}
