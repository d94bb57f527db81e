//! # Rolodex Core
//!
//! Core business logic for asynchronous address-book retrieval.
//!
//! This crate contains:
//! - The `ContactStore` port implemented by platform adapters
//! - The fetch job lifecycle (submit → background phase → delivery)
//! - The completion dispatcher invoking caller-supplied callbacks
//! - The job tracker pinning the host's event loop while work is outstanding
//!
//! ## Architecture
//! - Defines ports (traits) implemented by `rolodex-infra`
//! - Depends only on `rolodex-domain` and external crates
//! - No platform-specific code

pub mod contacts;

// Re-export commonly used items
pub use contacts::dispatcher::CompletionDispatcher;
pub use contacts::job::{FetchCallback, FetchJob, JobHandle, JobState};
pub use contacts::ports::ContactStore;
pub use contacts::service::AddressBookService;
pub use contacts::tracker::{JobGuard, JobTracker};
