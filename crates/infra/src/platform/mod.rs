//! Platform-specific implementations
//!
//! This module provides platform-specific contact store adapters.
//!
//! # Platform Support
//!
//! - **macOS**: Full support via the AddressBook framework
//! - **Other platforms**: Fallback stub (returns platform error)
//!
//! The fallback still satisfies the delivery contract: a fetch over it
//! completes with an error in the callback's error slot, never a crash.

use std::sync::Arc;

use rolodex_core::ContactStore;

pub mod label;

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::MacOsContactStore;

// Fallback stub for non-macOS platforms
#[cfg(not(target_os = "macos"))]
pub mod fallback {
    use async_trait::async_trait;
    use rolodex_core::ContactStore;
    use rolodex_domain::{Contact, Result as DomainResult, RolodexError};

    /// Fallback contact store for unsupported platforms.
    ///
    /// This stub implementation returns a platform error on all
    /// operations; the fetch pipeline converts it into a
    /// callback-delivered error value.
    pub struct FallbackContactStore;

    impl FallbackContactStore {
        #[allow(clippy::new_without_default)]
        pub fn new() -> Self {
            Self
        }
    }

    #[async_trait]
    impl ContactStore for FallbackContactStore {
        async fn list_contacts(&self) -> DomainResult<Vec<Contact>> {
            Err(RolodexError::Platform(
                "Contact store access is only supported on macOS".to_string(),
            ))
        }
    }
}

#[cfg(not(target_os = "macos"))]
pub use fallback::FallbackContactStore;

/// Contact store adapter for the current platform.
#[cfg(target_os = "macos")]
pub fn platform_store() -> Arc<dyn ContactStore> {
    Arc::new(MacOsContactStore::new())
}

/// Contact store adapter for the current platform.
#[cfg(not(target_os = "macos"))]
pub fn platform_store() -> Arc<dyn ContactStore> {
    Arc::new(FallbackContactStore::new())
}
