//! Error mapping helpers for macOS platform operations
//!
//! Converts platform-specific failures (task join errors, store-open
//! failures) into the domain's `RolodexError` type.
//!
//! # Error Mapping Strategy
//!
//! - `tokio::task::JoinError` → `RolodexError::Internal` (runtime/task
//!   errors)
//! - Store open/copy failures → `RolodexError::StoreUnavailable`
//!   (surfaced on the callback's error slot, never thrown across the
//!   thread boundary)

use rolodex_domain::RolodexError;

/// Map a `tokio::task::JoinError` to `RolodexError::Internal`.
///
/// This handles errors from `spawn_blocking` calls, differentiating
/// between task cancellation and task panics.
#[inline]
pub(crate) fn map_join_error(err: tokio::task::JoinError) -> RolodexError {
    if err.is_cancelled() {
        RolodexError::Internal("platform task cancelled".into())
    } else {
        RolodexError::Internal(format!("platform task panicked: {err}"))
    }
}

/// Create a store-unavailable error.
///
/// Returned when the address book cannot be opened or its people array
/// cannot be copied, which usually means Contacts access was denied.
#[inline]
pub(crate) fn store_unavailable_error() -> RolodexError {
    RolodexError::StoreUnavailable(
        "Could not open the contact store. Check: \
         System Settings > Privacy & Security > Contacts"
            .to_string(),
    )
}
