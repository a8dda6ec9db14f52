use crate::config::global_config;
use crate::probe::ServerVersion;

/// The host release families, distinguished by how their internal registry is mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VersionFamily {
    /// Releases whose registry keeps parallel lookup maps, mutated field by field.
    Mapped,
    /// Legacy releases whose registry is a single registration object keyed by namespaced
    /// keys.
    Keyed,
}

impl VersionFamily {
    /// Classify a detected version token.
    ///
    /// The keyed family is an exact allow-list
    /// ([`Config::keyed_versions`](crate::Config::keyed_versions)); every other token,
    /// including tokens from host releases that did not exist when this crate was written,
    /// classifies as [`VersionFamily::Mapped`].
    #[must_use]
    pub fn of(version: &ServerVersion) -> Self {
        if global_config().is_keyed_version(version) {
            Self::Keyed
        } else {
            Self::Mapped
        }
    }
}
