//! Port interfaces for contact retrieval
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use rolodex_domain::{Contact, Result};

/// Trait for reading contacts from the platform address-book store.
///
/// Implementations open the store, enumerate every record, marshal each
/// one into an owned [`Contact`] and release the store again, all within
/// a single call. The connection is never held across calls and never
/// shared between concurrently running fetches.
///
/// Blocking platform APIs must be moved off the caller's execution
/// context (e.g. via `tokio::task::spawn_blocking`) so that `await`ing
/// this method never stalls the runtime.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Enumerate all contacts in store-native order.
    ///
    /// A store that cannot be opened fails with
    /// `RolodexError::StoreUnavailable`; individual undecodable fields
    /// are omitted from their record rather than failing the whole
    /// enumeration.
    async fn list_contacts(&self) -> Result<Vec<Contact>>;
}
