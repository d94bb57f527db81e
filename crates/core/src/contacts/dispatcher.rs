//! Completion delivery
//!
//! Consumes a finished [`FetchJob`] on the caller's execution context:
//! builds the neutral result collection, invokes the callback exactly
//! once, and disposes the job. Never runs on the background worker.

use std::panic::{self, AssertUnwindSafe};

use rolodex_domain::{Contact, ContactRecord};

use super::job::FetchJob;

/// Builds the delivered collection and invokes the job's callback.
pub struct CompletionDispatcher;

impl CompletionDispatcher {
    /// Deliver a completed job and dispose it.
    ///
    /// With a callback: builds one neutral record per contact in the
    /// result buffer (empty on background failure), invokes the callback
    /// once with `(error, records)`, releases the callback box and the
    /// liveness pin. Without a callback: releases resources directly.
    ///
    /// A panic raised inside the caller-supplied callback is not
    /// swallowed: the job is disposed first, then the panic is re-raised
    /// so the host's fault handler observes it.
    pub fn deliver(mut job: FetchJob) {
        let error = job.take_error();
        let callback = job.take_callback();

        let Some(callback) = callback else {
            tracing::debug!(job_id = %job.id(), "Fetch job has no callback; releasing resources");
            job.dispose();
            return;
        };

        let records = if error.is_none() {
            job.results().iter().map(Contact::to_record).collect::<Vec<ContactRecord>>()
        } else {
            Vec::new()
        };

        tracing::debug!(
            job_id = %job.id(),
            count = records.len(),
            failed = error.is_some(),
            "Delivering fetch results"
        );

        let outcome = panic::catch_unwind(AssertUnwindSafe(move || callback(error, records)));
        job.dispose();

        if let Err(payload) = outcome {
            tracing::error!(job_id = %job.id(), "Fetch callback panicked");
            panic::resume_unwind(payload);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use rolodex_domain::{Contact, PhoneNumber, RolodexError};

    use super::*;
    use crate::contacts::job::FetchJob;
    use crate::contacts::tracker::JobTracker;

    fn finished_job(tracker: &JobTracker, callback: Option<crate::FetchCallback>) -> FetchJob {
        let mut job = FetchJob::new(callback, tracker.acquire());
        job.mark_scheduled();
        job.mark_running();
        job
    }

    #[test]
    fn test_deliver_invokes_callback_once_with_records() {
        let tracker = JobTracker::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_cb = Arc::clone(&calls);

        let mut job = finished_job(
            &tracker,
            Some(Box::new(move |error, records| {
                calls_in_cb.fetch_add(1, Ordering::SeqCst);
                assert!(error.is_none());
                assert_eq!(records.len(), 1);
                assert_eq!(records[0]["firstName"], "Grace");
                let numbers = records[0]["numbers"].as_object().unwrap();
                assert_eq!(numbers["Mobile"], "+1-555-0100");
            })),
        );
        job.complete_with(vec![Contact {
            record_id: 1,
            first_name: Some("Grace".to_string()),
            phone_numbers: vec![PhoneNumber {
                label: "Mobile".to_string(),
                value: "+1-555-0100".to_string(),
            }],
            ..Contact::default()
        }]);

        CompletionDispatcher::deliver(job);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.outstanding(), 0);
    }

    #[test]
    fn test_deliver_failure_passes_error_and_empty_records() {
        let tracker = JobTracker::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in_cb = Arc::clone(&calls);

        let mut job = finished_job(
            &tracker,
            Some(Box::new(move |error, records| {
                calls_in_cb.fetch_add(1, Ordering::SeqCst);
                assert!(matches!(error, Some(RolodexError::StoreUnavailable(_))));
                assert!(records.is_empty());
            })),
        );
        job.fail_with(RolodexError::StoreUnavailable("simulated".to_string()));

        CompletionDispatcher::deliver(job);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.outstanding(), 0);
    }

    #[test]
    fn test_deliver_without_callback_releases_resources() {
        let tracker = JobTracker::new();
        let mut job = finished_job(&tracker, None);
        job.complete_with(vec![Contact::new(3)]);

        CompletionDispatcher::deliver(job);

        assert_eq!(tracker.outstanding(), 0);
    }

    #[test]
    fn test_callback_panic_disposes_job_then_propagates() {
        let tracker = JobTracker::new();
        let mut job = finished_job(
            &tracker,
            Some(Box::new(|_, _| panic!("callback fault"))),
        );
        job.complete_with(Vec::new());

        let result = panic::catch_unwind(AssertUnwindSafe(|| CompletionDispatcher::deliver(job)));

        // The fault propagates to the caller's environment...
        assert!(result.is_err());
        // ...but the job was disposed first
        assert_eq!(tracker.outstanding(), 0);
    }
}
