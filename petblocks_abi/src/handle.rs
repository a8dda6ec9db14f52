use std::any::Any;
use std::sync::Arc;

/// A type-erased shared handle to a value stored in a host field.
///
/// Callers downcast to the matching [`layout`](crate::layout) mirror for the release family
/// they are operating on.
pub type FieldHandle = Arc<dyn Any + Send + Sync>;

/// Identity of a class inside the host image.
///
/// Handles are cheap to clone and compare by fully-qualified name. They are minted by a
/// [`HostImage`](crate::HostImage) (or directly, when a test defines the image contents) and
/// otherwise treated as opaque.
#[derive(Clone, Debug, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{qualified_name}")]
pub struct ClassHandle {
    qualified_name: Arc<str>,
}

impl ClassHandle {
    /// Create a handle for the class with the given fully-qualified name.
    #[must_use]
    pub fn new(qualified_name: impl Into<Arc<str>>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }

    /// The fully-qualified name, e.g. `net.minecraft.server.v1_12_R1.EntityRabbit`.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// The trailing simple name, e.g. `EntityRabbit`.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }
}

/// A namespaced key, the opaque identifier object the keyed registry protocol registers
/// entries under.
///
/// Keys are fabricated through the host's own key class during registration and retained in
/// the registration record; the retained key is the only handle that can remove the entry
/// again.
#[derive(Clone, Debug, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{namespace}:{path}")]
pub struct NamespacedKey {
    namespace: String,
    path: String,
}

impl NamespacedKey {
    /// Create a key under `namespace` for `path`.
    #[must_use]
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// The namespace component.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The path component.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_handle_names() {
        let class = ClassHandle::new("net.minecraft.server.v1_12_R1.EntityRabbit");
        assert_eq!(
            class.qualified_name(),
            "net.minecraft.server.v1_12_R1.EntityRabbit"
        );
        assert_eq!(class.simple_name(), "EntityRabbit");
        assert_eq!(class.to_string(), class.qualified_name());
    }

    #[test]
    fn class_handle_without_package() {
        let class = ClassHandle::new("EntityRabbit");
        assert_eq!(class.simple_name(), "EntityRabbit");
    }

    #[test]
    fn class_handle_identity() {
        let a = ClassHandle::new("a.B");
        let b = ClassHandle::new(String::from("a.B"));
        assert_eq!(a, b);
        assert_ne!(a, ClassHandle::new("a.C"));
    }

    #[test]
    fn namespaced_key_display() {
        let key = NamespacedKey::new("PetBlocks", "Rabbit");
        assert_eq!(key.to_string(), "PetBlocks:Rabbit");
        assert_eq!(key.namespace(), "PetBlocks");
        assert_eq!(key.path(), "Rabbit");
    }
}
