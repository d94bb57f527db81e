//! Outstanding-job tracking
//!
//! While any fetch job is outstanding the host's event loop must stay
//! alive; a [`JobTracker`] counts in-flight jobs and [`JobGuard`] releases
//! the count exactly once per job, on every path. Hosts call
//! [`JobTracker::wait_idle`] to block shutdown until the count drains to
//! zero.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

#[derive(Debug)]
struct TrackerInner {
    outstanding: AtomicUsize,
    notify: Notify,
}

/// Counts outstanding fetch jobs.
///
/// Cloning is cheap; clones share the same count.
#[derive(Debug, Clone)]
pub struct JobTracker {
    inner: Arc<TrackerInner>,
}

impl Default for JobTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl JobTracker {
    /// Create a tracker with no outstanding jobs.
    pub fn new() -> Self {
        Self { inner: Arc::new(TrackerInner { outstanding: AtomicUsize::new(0), notify: Notify::new() }) }
    }

    /// Register one outstanding job.
    ///
    /// The returned guard must be released (or dropped) exactly when the
    /// job is disposed.
    pub fn acquire(&self) -> JobGuard {
        let outstanding = self.inner.outstanding.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::trace!(outstanding, "Acquired job guard");
        JobGuard { inner: Arc::clone(&self.inner), released: false }
    }

    /// Number of jobs currently outstanding.
    pub fn outstanding(&self) -> usize {
        self.inner.outstanding.load(Ordering::Acquire)
    }

    /// Wait until no jobs are outstanding.
    ///
    /// Returns immediately if the tracker is already idle.
    pub async fn wait_idle(&self) {
        loop {
            // Register interest before re-checking the count so a release
            // between the check and the await cannot be missed
            let notified = self.inner.notify.notified();
            if self.inner.outstanding.load(Ordering::Acquire) == 0 {
                return;
            }
            notified.await;
        }
    }
}

/// Liveness pin for one outstanding job.
///
/// Released explicitly at disposal; dropping an unreleased guard releases
/// it as well, so early error paths cannot leak the count.
#[derive(Debug)]
pub struct JobGuard {
    inner: Arc<TrackerInner>,
    released: bool,
}

impl JobGuard {
    /// Release the pin. Safe to call at most once by construction; the
    /// internal flag makes the drop path a no-op afterwards.
    pub fn release(mut self) {
        self.do_release();
    }

    fn do_release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        let remaining = self.inner.outstanding.fetch_sub(1, Ordering::AcqRel) - 1;
        tracing::trace!(outstanding = remaining, "Released job guard");
        if remaining == 0 {
            self.inner.notify.notify_waiters();
        }
    }
}

impl Drop for JobGuard {
    fn drop(&mut self) {
        self.do_release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release_counts() {
        let tracker = JobTracker::new();
        assert_eq!(tracker.outstanding(), 0);

        let first = tracker.acquire();
        let second = tracker.acquire();
        assert_eq!(tracker.outstanding(), 2);

        first.release();
        assert_eq!(tracker.outstanding(), 1);

        second.release();
        assert_eq!(tracker.outstanding(), 0);
    }

    #[test]
    fn test_drop_releases_guard() {
        let tracker = JobTracker::new();
        {
            let _guard = tracker.acquire();
            assert_eq!(tracker.outstanding(), 1);
        }
        assert_eq!(tracker.outstanding(), 0);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_wait_idle_returns_immediately_when_idle() {
        let tracker = JobTracker::new();
        tracker.wait_idle().await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_wait_idle_blocks_until_release() {
        let tracker = JobTracker::new();
        let guard = tracker.acquire();

        let waiter = {
            let tracker = tracker.clone();
            tokio::spawn(async move { tracker.wait_idle().await })
        };

        // The waiter cannot finish while the guard is held
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());

        guard.release();
        waiter.await.unwrap();
        assert_eq!(tracker.outstanding(), 0);
    }
}
