//! macOS AddressBook Integration
//!
//! This module implements the `ContactStore` port over the macOS
//! AddressBook framework:
//!
//! - `ab_helpers` - raw framework FFI and whole-store enumeration
//! - `marshal` - native record handles to owned `Contact` values
//! - `store_client` - the async `ContactStore` adapter
//! - `error_helpers` - mapping platform failures into `RolodexError`
//!
//! All framework calls are synchronous and run inside a single
//! `spawn_blocking` scope per fetch; no framework object ever crosses a
//! thread boundary or outlives its enumeration.

pub(crate) mod ab_helpers;
pub(crate) mod error_helpers;
pub(crate) mod marshal;
pub mod store_client;

pub use store_client::MacOsContactStore;
