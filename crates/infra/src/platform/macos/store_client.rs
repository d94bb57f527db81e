//! macOS Contact Store Adapter
//!
//! Implements the `ContactStore` port using the AddressBook framework.
//!
//! # Behavior
//!
//! - The blocking enumeration (open store, copy people, marshal, release)
//!   runs inside `tokio::task::spawn_blocking`, so awaiting
//!   `list_contacts` never stalls the caller's runtime
//! - One store connection per call, released before the call returns;
//!   nothing is cached or shared between concurrent fetches
//! - Access denial surfaces as `RolodexError::StoreUnavailable`, which
//!   the fetch pipeline delivers through the callback's error slot

use async_trait::async_trait;
use rolodex_core::ContactStore;
use rolodex_domain::{Contact, Result as DomainResult};

use super::ab_helpers;
use super::error_helpers::map_join_error;

/// Contact store adapter over the macOS AddressBook framework.
pub struct MacOsContactStore;

impl Default for MacOsContactStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MacOsContactStore {
    /// Create a new macOS contact store adapter.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContactStore for MacOsContactStore {
    /// Enumerate all contacts in store-native order.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Contact>)` - Owned records, one per person in the store
    /// * `Err(RolodexError::StoreUnavailable)` - Store could not be
    ///   opened (typically Contacts access denied)
    /// * `Err(RolodexError::Internal)` - Blocking task failed
    async fn list_contacts(&self) -> DomainResult<Vec<Contact>> {
        let join = tokio::task::spawn_blocking(ab_helpers::copy_all_contacts).await;
        let contacts = join.map_err(map_join_error)??; // Flatten Result<Result<T>>

        tracing::debug!(count = contacts.len(), "Fetched contacts from store");
        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Platform-specific test (requires macOS and Contacts access)
    #[tokio::test(flavor = "multi_thread")]
    async fn test_list_contacts_completes_or_reports_unavailable() {
        let store = MacOsContactStore::new();
        let result = store.list_contacts().await;

        // Without Contacts permission the store reports unavailable; it
        // must never wedge or panic
        match result {
            Ok(contacts) => {
                for contact in &contacts {
                    for phone in &contact.phone_numbers {
                        assert!(!phone.label.starts_with("_$!<"));
                        assert!(!phone.label.ends_with(">!$_"));
                    }
                }
            }
            Err(err) => {
                assert!(matches!(
                    err,
                    rolodex_domain::RolodexError::StoreUnavailable(_)
                ));
            }
        }
    }
}
