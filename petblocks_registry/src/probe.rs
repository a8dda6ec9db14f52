//! Host version detection.
//!
//! The host does not report its version through any API; the only reliable marker is the
//! version token embedded in its internal package naming. The probe extracts that token and
//! validates it against the recognized pattern. Everything downstream (family classification,
//! class-name construction) hangs off the detected token, so an undetectable version is fatal
//! for the whole registry bridge, not for a single entity.

use std::sync::LazyLock;

use petblocks_abi::HostImage;
use regex::Regex;
use thiserror::Error;

/// Pattern a version token must match, e.g. `v1_12_R1`.
static VERSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^v\d+_\d+_R\d+$").expect("the version token pattern is valid"));

/// The version token detected from the host's internal package naming.
#[derive(Clone, Debug, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{_0}")]
pub struct ServerVersion(String);

impl ServerVersion {
    pub(crate) fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, e.g. `v1_12_R1`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The host's version could not be determined.
///
/// This aborts the entity registration subsystem as a whole; it is never a per-entity
/// condition.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    /// The host image does not expose an internal server package at all.
    #[error("the host image does not expose its internal server package")]
    PackageUnavailable,
    /// The internal package does not end in a token the probe recognizes.
    #[error("package `{0}` does not end in a recognized version token")]
    UnrecognizedPackage(String),
}

/// Detect the running host's version token.
///
/// The token is the trailing segment of the host's internal package name and must match
/// `v<major>_<minor>_R<revision>`.
///
/// # Errors
/// Returns a [`ProbeError`] if the package is unavailable or carries no recognized token.
pub fn detect_server_version(image: &dyn HostImage) -> Result<ServerVersion, ProbeError> {
    let Some(package) = image.server_package() else {
        return Err(ProbeError::PackageUnavailable);
    };
    let token = package.rsplit('.').next().unwrap_or(&package);
    if !VERSION_TOKEN.is_match(token) {
        return Err(ProbeError::UnrecognizedPackage(package.clone()));
    }
    Ok(ServerVersion(token.to_owned()))
}

#[cfg(test)]
mod tests {
    use petblocks_abi::MemoryImage;

    use super::*;

    #[test]
    fn detects_trailing_token() {
        let image = MemoryImage::new("net.minecraft.server.v1_12_R1");
        let version = detect_server_version(&image).unwrap();
        assert_eq!(version.as_str(), "v1_12_R1");
        assert_eq!(version.to_string(), "v1_12_R1");
    }

    #[test]
    fn detects_future_tokens() {
        let image = MemoryImage::new("net.minecraft.server.v1_99_R9");
        assert_eq!(
            detect_server_version(&image).unwrap(),
            ServerVersion::new("v1_99_R9")
        );
    }

    #[test]
    fn missing_package_is_fatal() {
        let image = MemoryImage::without_package();
        assert_eq!(
            detect_server_version(&image),
            Err(ProbeError::PackageUnavailable)
        );
    }

    #[test]
    fn unrecognized_package_is_fatal() {
        let image = MemoryImage::new("org.example.host");
        assert_eq!(
            detect_server_version(&image),
            Err(ProbeError::UnrecognizedPackage("org.example.host".into()))
        );
    }

    #[test]
    fn partial_tokens_are_rejected() {
        for package in ["net.minecraft.server.v1_12", "net.minecraft.server.1_12_R1"] {
            assert!(detect_server_version(&MemoryImage::new(package)).is_err());
        }
    }
}
