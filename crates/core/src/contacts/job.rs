//! Fetch job state and lifecycle
//!
//! One [`FetchJob`] represents one outstanding "fetch all contacts"
//! request: the caller-supplied completion callback, the owned result
//! buffer, and the liveness pin keeping the host's event loop alive. The
//! job is created on the caller's execution context, moved into the
//! spawned task for the background phase (ownership guarantees nothing
//! on the caller's side can touch the buffer while it is being written),
//! and consumed by the dispatcher on delivery.
//!
//! States progress `Created → Scheduled → Running → Completed → Disposed`;
//! `Disposed` is reached exactly once per job on every path, including
//! store failure.

use rolodex_domain::{Contact, ContactRecord, RolodexError};
use uuid::Uuid;

use super::tracker::JobGuard;

/// Caller-supplied completion handler.
///
/// Invoked exactly once with `(error, records)`: a `Some` error and empty
/// records when the background phase failed, otherwise `None` and the
/// delivered records. The box is consumed by the invocation, releasing
/// the handler before the job itself is dropped.
pub type FetchCallback = Box<dyn FnOnce(Option<RolodexError>, Vec<ContactRecord>) + Send + 'static>;

/// Lifecycle states of a fetch job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    /// Allocated, callback captured, liveness pin acquired.
    Created,
    /// Handed to the background execution context.
    Scheduled,
    /// Background phase enumerating and marshalling.
    Running,
    /// Background phase finished; back on the caller's context.
    Completed,
    /// Callback returned (or skipped) and resources released. Terminal.
    Disposed,
}

/// Identifier handed back to the submitter for log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobHandle {
    id: Uuid,
}

impl JobHandle {
    /// Unique id of the submitted job.
    pub fn id(&self) -> Uuid {
        self.id
    }
}

/// One in-flight fetch request.
pub struct FetchJob {
    id: Uuid,
    state: JobState,
    callback: Option<FetchCallback>,
    results: Vec<Contact>,
    error: Option<RolodexError>,
    guard: Option<JobGuard>,
}

impl std::fmt::Debug for FetchJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchJob")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("has_callback", &self.callback.is_some())
            .field("results", &self.results.len())
            .field("error", &self.error)
            .finish()
    }
}

impl FetchJob {
    /// Create a job in the `Created` state.
    ///
    /// The guard is the liveness pin acquired at submit time; it is
    /// released exactly once when the job is disposed.
    pub fn new(callback: Option<FetchCallback>, guard: JobGuard) -> Self {
        let id = Uuid::new_v4();
        tracing::debug!(job_id = %id, has_callback = callback.is_some(), "Created fetch job");
        Self { id, state: JobState::Created, callback, results: Vec::new(), error: None, guard: Some(guard) }
    }

    /// Unique id of this job.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> JobState {
        self.state
    }

    /// Whether a completion callback was captured at submit time.
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Handle for the submitter.
    pub fn handle(&self) -> JobHandle {
        JobHandle { id: self.id }
    }

    /// Contacts populated by the background phase.
    pub fn results(&self) -> &[Contact] {
        &self.results
    }

    /// Error recorded by the background phase, if any.
    pub fn error(&self) -> Option<&RolodexError> {
        self.error.as_ref()
    }

    /// Mark the job as handed to the background execution context.
    pub fn mark_scheduled(&mut self) {
        self.transition(JobState::Scheduled);
    }

    /// Mark the background phase as started.
    pub fn mark_running(&mut self) {
        self.transition(JobState::Running);
    }

    /// Record the background phase's results.
    ///
    /// The buffer is written exactly once, entirely by the background
    /// phase, before any read by the completion phase.
    pub fn complete_with(&mut self, contacts: Vec<Contact>) {
        debug_assert!(self.results.is_empty(), "result buffer is written exactly once");
        tracing::debug!(job_id = %self.id, count = contacts.len(), "Fetch job background phase finished");
        self.results = contacts;
        self.transition(JobState::Completed);
    }

    /// Record a background-phase failure.
    ///
    /// The job still completes: the error travels to the callback's error
    /// slot instead of being thrown across the thread boundary.
    pub fn fail_with(&mut self, error: RolodexError) {
        tracing::warn!(job_id = %self.id, error = %error, "Fetch job background phase failed");
        self.error = Some(error);
        self.transition(JobState::Completed);
    }

    /// Take the callback out of the job for its single invocation.
    pub(crate) fn take_callback(&mut self) -> Option<FetchCallback> {
        self.callback.take()
    }

    /// Take the recorded error for delivery.
    pub(crate) fn take_error(&mut self) -> Option<RolodexError> {
        self.error.take()
    }

    /// Release resources and reach the terminal state.
    ///
    /// Idempotent: the guard is taken out on first call.
    pub(crate) fn dispose(&mut self) {
        if let Some(guard) = self.guard.take() {
            guard.release();
        }
        self.transition(JobState::Disposed);
    }

    fn transition(&mut self, next: JobState) {
        tracing::trace!(job_id = %self.id, from = ?self.state, to = ?next, "Fetch job state change");
        self.state = next;
    }
}
