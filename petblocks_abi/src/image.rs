use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::layout::keyed::KeyedTypeRegistry;
use crate::layout::{fields, mapped};
use crate::{AbiError, ClassHandle, FieldHandle};

/// Introspective access to the host image.
///
/// This is the only doorway the bridge has into the host: everything else is built from class
/// resolution and field lookups by exact internal identifier. Implementations bypass whatever
/// visibility the host declares; an identifier that cannot be found is an error, never a
/// silent skip.
pub trait HostImage: Send + Sync {
    /// The host's own versioned internal package name, e.g. `net.minecraft.server.v1_12_R1`.
    ///
    /// Returns `None` when the host does not follow the expected naming convention at all.
    fn server_package(&self) -> Option<String>;

    /// Resolve a class handle by fully-qualified name.
    ///
    /// # Errors
    /// Returns [`AbiError::ClassNotFound`] if the image has no such class.
    fn class(&self, qualified_name: &str) -> Result<ClassHandle, AbiError>;

    /// Look up a named static field of `class` as a type-erased shared handle.
    ///
    /// # Errors
    /// Returns [`AbiError::FieldNotFound`] if the class has no such static field.
    fn static_field(&self, class: &ClassHandle, field: &str) -> Result<FieldHandle, AbiError>;

    /// Look up a named instance field of a host `object` as a type-erased shared handle.
    ///
    /// # Errors
    /// Returns [`AbiError::FieldNotFound`] if the object has no such field.
    fn object_field(&self, object: &FieldHandle, field: &str) -> Result<FieldHandle, AbiError>;
}

/// An in-memory [`HostImage`].
///
/// Stands in for a live host in tests and host-free development, the way an in-memory store
/// stands in for real storage. Contents are defined up front with [`define_class`] and
/// [`define_static`]; the [`install_mapped_registry`] and [`install_keyed_registry`]
/// conveniences lay out a stock registry for the respective family.
///
/// [`define_class`]: MemoryImage::define_class
/// [`define_static`]: MemoryImage::define_static
/// [`install_mapped_registry`]: MemoryImage::install_mapped_registry
/// [`install_keyed_registry`]: MemoryImage::install_keyed_registry
#[derive(Default)]
pub struct MemoryImage {
    server_package: Option<String>,
    classes: HashSet<String>,
    statics: HashMap<(String, String), FieldHandle>,
}

impl MemoryImage {
    /// Create an image whose internal classes live under `server_package`.
    #[must_use]
    pub fn new(server_package: impl Into<String>) -> Self {
        Self {
            server_package: Some(server_package.into()),
            ..Self::default()
        }
    }

    /// Create an image that does not expose a server package at all.
    #[must_use]
    pub fn without_package() -> Self {
        Self::default()
    }

    /// Define a class and return its handle.
    pub fn define_class(&mut self, qualified_name: impl Into<String>) -> ClassHandle {
        let qualified_name = qualified_name.into();
        let handle = ClassHandle::new(qualified_name.as_str());
        self.classes.insert(qualified_name);
        handle
    }

    /// Define a static field of `class` holding `value`.
    pub fn define_static(&mut self, class: &ClassHandle, field: &str, value: FieldHandle) {
        self.classes.insert(class.qualified_name().to_owned());
        self.statics
            .insert((class.qualified_name().to_owned(), field.to_owned()), value);
    }

    /// Install an empty stock registry laid out like the mapped family and return the
    /// type-registry class handle.
    ///
    /// # Panics
    /// Panics if the image was created without a server package.
    pub fn install_mapped_registry(&mut self) -> ClassHandle {
        let class = self.define_class(self.internal_class_name(fields::TYPE_REGISTRY_CLASS));
        self.define_static(
            &class,
            fields::mapped::NAME_TO_CLASS,
            Arc::new(mapped::NameToClass::default()),
        );
        self.define_static(
            &class,
            fields::mapped::CLASS_TO_NAME,
            Arc::new(mapped::ClassToName::default()),
        );
        self.define_static(
            &class,
            fields::mapped::ID_TO_CLASS,
            Arc::new(mapped::IdToClass::default()),
        );
        self.define_static(
            &class,
            fields::mapped::CLASS_TO_ID,
            Arc::new(mapped::ClassToId::default()),
        );
        class
    }

    /// Install an empty stock registry laid out like the keyed family and return the
    /// registration object, which shares state with the installed field.
    ///
    /// # Panics
    /// Panics if the image was created without a server package.
    pub fn install_keyed_registry(&mut self) -> KeyedTypeRegistry {
        let registry = KeyedTypeRegistry::new();
        let class = self.define_class(self.internal_class_name(fields::TYPE_REGISTRY_CLASS));
        self.define_static(&class, fields::keyed::REGISTRY, Arc::new(registry.clone()));
        self.define_class(self.internal_class_name(fields::keyed::KEY_CLASS));
        registry
    }

    fn internal_class_name(&self, simple_name: &str) -> String {
        let package = self
            .server_package
            .as_deref()
            .expect("image has a server package");
        format!("{package}.{simple_name}")
    }
}

impl HostImage for MemoryImage {
    fn server_package(&self) -> Option<String> {
        self.server_package.clone()
    }

    fn class(&self, qualified_name: &str) -> Result<ClassHandle, AbiError> {
        if self.classes.contains(qualified_name) {
            Ok(ClassHandle::new(qualified_name))
        } else {
            Err(AbiError::ClassNotFound(qualified_name.to_owned()))
        }
    }

    fn static_field(&self, class: &ClassHandle, field: &str) -> Result<FieldHandle, AbiError> {
        self.statics
            .get(&(class.qualified_name().to_owned(), field.to_owned()))
            .cloned()
            .ok_or_else(|| AbiError::FieldNotFound {
                owner: class.qualified_name().to_owned(),
                field: field.to_owned(),
            })
    }

    fn object_field(&self, object: &FieldHandle, field: &str) -> Result<FieldHandle, AbiError> {
        if let Some(registry) = object.downcast_ref::<KeyedTypeRegistry>() {
            if field == fields::keyed::BACKING {
                let backing: FieldHandle = registry.backing();
                return Ok(backing);
            }
        }
        Err(AbiError::FieldNotFound {
            owner: "host object".to_owned(),
            field: field.to_owned(),
        })
    }
}
