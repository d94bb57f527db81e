//! Address-book service - core business logic
//!
//! Owns the submit side of the fetch pipeline: every call schedules one
//! [`FetchJob`], spawns its background phase and returns immediately.
//! Completion is always delivered through [`CompletionDispatcher`] on the
//! runtime the caller submitted from, never on the blocking worker.

use std::sync::Arc;

use rolodex_domain::RolodexError;

use super::dispatcher::CompletionDispatcher;
use super::job::{FetchCallback, FetchJob, JobHandle};
use super::ports::ContactStore;
use super::tracker::JobTracker;

/// Asynchronous fetch service over a platform contact store.
///
/// Stateless between invocations: each fetch re-opens and re-reads the
/// live store through the injected [`ContactStore`]. Must be used from
/// within a tokio runtime; submission spawns one task per job.
pub struct AddressBookService {
    store: Arc<dyn ContactStore>,
    tracker: JobTracker,
}

impl AddressBookService {
    /// Create a service over the given store.
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        Self { store, tracker: JobTracker::new() }
    }

    /// Use a caller-supplied tracker instead of a fresh one.
    ///
    /// Hosts that pin their event loop on a single tracker can share it
    /// across services; outstanding counts then aggregate.
    pub fn with_tracker(mut self, tracker: JobTracker) -> Self {
        self.tracker = tracker;
        self
    }

    /// Tracker counting outstanding jobs, for hosts that need to hold
    /// their event loop open while work is in flight.
    pub fn tracker(&self) -> &JobTracker {
        &self.tracker
    }

    /// Number of jobs currently outstanding.
    pub fn pending_jobs(&self) -> usize {
        self.tracker.outstanding()
    }

    /// Wait until every submitted job has been disposed.
    pub async fn wait_idle(&self) {
        self.tracker.wait_idle().await;
    }

    /// Schedule one fetch-all-contacts job and return immediately.
    ///
    /// The callback, if any, receives `(error, records)` exactly once.
    /// Passing `None` makes the job fire-and-forget: it still runs to
    /// completion and releases its resources, invoking nothing.
    ///
    /// There is no cancellation and no timeout: once submitted, a job
    /// always runs to completion or failure. A failed fetch is not
    /// retried; callers invoke `fetch_contacts` again.
    pub fn fetch_contacts(&self, callback: Option<FetchCallback>) -> JobHandle {
        let mut job = FetchJob::new(callback, self.tracker.acquire());
        let handle = job.handle();
        let store = Arc::clone(&self.store);

        job.mark_scheduled();
        tokio::spawn(async move {
            job.mark_running();
            match store.list_contacts().await {
                Ok(contacts) => job.complete_with(contacts),
                Err(err) => job.fail_with(err),
            }
            CompletionDispatcher::deliver(job);
        });

        handle
    }

    /// Reserved group-listing entry point.
    ///
    /// Group retrieval is not implemented; the job completes with
    /// `RolodexError::NotSupported` in the callback's error slot rather
    /// than a silent empty success, so callers cannot mistake "no groups"
    /// for "feature absent".
    pub fn fetch_groups(&self, callback: Option<FetchCallback>) -> JobHandle {
        let mut job = FetchJob::new(callback, self.tracker.acquire());
        let handle = job.handle();

        job.mark_scheduled();
        tokio::spawn(async move {
            job.mark_running();
            job.fail_with(RolodexError::NotSupported(
                "group listing is not implemented".to_string(),
            ));
            CompletionDispatcher::deliver(job);
        });

        handle
    }
}
