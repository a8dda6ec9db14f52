//! Bridge configuration.
//!
//! A process-global [`Config`] guards the few knobs the bridge has: the namespace fabricated
//! keys are created under, the host's internal package prefix, the token substituted into
//! class-name templates, and the allow-list of version tokens that belong to the keyed
//! release family.

use std::borrow::Cow;
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::probe::ServerVersion;

/// Global configuration for the entity registry bridge.
#[derive(Clone, Debug)]
pub struct Config {
    key_namespace: Cow<'static, str>,
    internal_package: Cow<'static, str>,
    version_token: Cow<'static, str>,
    keyed_versions: Vec<Cow<'static, str>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_namespace: "PetBlocks".into(),
            internal_package: "net.minecraft.server".into(),
            version_token: "VERSION".into(),
            keyed_versions: vec!["v1_11_R1".into(), "v1_12_R1".into()],
        }
    }
}

impl Config {
    /// The namespace that fabricated registry keys are created under.
    #[must_use]
    pub fn key_namespace(&self) -> &str {
        &self.key_namespace
    }

    /// Set the namespace for fabricated registry keys.
    pub fn set_key_namespace(&mut self, namespace: impl Into<Cow<'static, str>>) {
        self.key_namespace = namespace.into();
    }

    /// The package prefix of the host's versioned internal classes.
    #[must_use]
    pub fn internal_package(&self) -> &str {
        &self.internal_package
    }

    /// Set the package prefix of the host's versioned internal classes.
    pub fn set_internal_package(&mut self, package: impl Into<Cow<'static, str>>) {
        self.internal_package = package.into();
    }

    /// The placeholder token substituted with the detected version in class-name templates.
    #[must_use]
    pub fn version_token(&self) -> &str {
        &self.version_token
    }

    /// The version tokens whose releases use the keyed registry protocol.
    #[must_use]
    pub fn keyed_versions(&self) -> &[Cow<'static, str>] {
        &self.keyed_versions
    }

    /// Replace the keyed-family version allow-list.
    pub fn set_keyed_versions(&mut self, versions: Vec<Cow<'static, str>>) {
        self.keyed_versions = versions;
    }

    /// Returns true if `version` is on the keyed-family allow-list.
    #[must_use]
    pub fn is_keyed_version(&self, version: &ServerVersion) -> bool {
        self.keyed_versions.iter().any(|v| v == version.as_str())
    }

    /// Fully-qualified name of a versioned internal host class.
    #[must_use]
    pub fn internal_class_name(&self, version: &ServerVersion, simple_name: &str) -> String {
        format!("{}.{}.{}", self.internal_package, version, simple_name)
    }

    /// Substitute the version token in `template` with the detected version.
    #[must_use]
    pub fn substitute_version(&self, template: &str, version: &ServerVersion) -> String {
        template.replace(self.version_token(), version.as_str())
    }
}

static CONFIG: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::default()));

/// Read access to the global [`Config`].
///
/// # Panics
/// Panics if the config lock is poisoned.
#[must_use]
pub fn global_config() -> RwLockReadGuard<'static, Config> {
    CONFIG.read().unwrap()
}

/// Write access to the global [`Config`].
///
/// # Panics
/// Panics if the config lock is poisoned.
#[must_use]
pub fn global_config_mut() -> RwLockWriteGuard<'static, Config> {
    CONFIG.write().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.key_namespace(), "PetBlocks");
        assert_eq!(config.internal_package(), "net.minecraft.server");
        assert_eq!(config.version_token(), "VERSION");
        assert_eq!(config.keyed_versions().len(), 2);
    }

    #[test]
    fn class_name_construction() {
        let config = Config::default();
        let version = ServerVersion::new("v1_12_R1");
        assert_eq!(
            config.internal_class_name(&version, "EntityTypes"),
            "net.minecraft.server.v1_12_R1.EntityTypes"
        );
    }

    #[test]
    fn template_substitution() {
        let config = Config::default();
        let version = ServerVersion::new("v1_8_R1");
        assert_eq!(
            config.substitute_version("com.github.petblocks.nms.VERSION.CustomRabbit", &version),
            "com.github.petblocks.nms.v1_8_R1.CustomRabbit"
        );
    }

    #[test]
    fn keyed_version_membership() {
        let config = Config::default();
        assert!(config.is_keyed_version(&ServerVersion::new("v1_11_R1")));
        assert!(config.is_keyed_version(&ServerVersion::new("v1_12_R1")));
        assert!(!config.is_keyed_version(&ServerVersion::new("v1_8_R1")));
    }
}
