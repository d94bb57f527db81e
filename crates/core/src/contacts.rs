//! Asynchronous contact fetch pipeline
//!
//! One fetch request is one [`job::FetchJob`]: submitted by
//! [`service::AddressBookService`], populated off the caller's execution
//! context by a [`ports::ContactStore`] implementation, then handed to
//! [`dispatcher::CompletionDispatcher`] which invokes the caller's
//! completion callback exactly once. [`tracker::JobTracker`] counts
//! outstanding jobs so the host can keep its event loop alive until every
//! submitted job has been disposed.

pub mod dispatcher;
pub mod job;
pub mod ports;
pub mod service;
pub mod tracker;

pub use dispatcher::CompletionDispatcher;
pub use job::{FetchCallback, FetchJob, JobHandle, JobState};
pub use ports::ContactStore;
pub use service::AddressBookService;
pub use tracker::{JobGuard, JobTracker};
