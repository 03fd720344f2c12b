//! Interfaces to the real-time scheduler the event pump runs on.
//!
//! The scheduler itself is an external collaborator: these traits
//! only capture the call and return contracts the pump relies on.

/// Fixed parameters of a task, handed to the scheduler at creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TaskSpec {
    pub name: &'static str,
    /// Stack budget, in words.
    pub stack_words: u16,
    pub priority: u8,
}

/// The scheduler declined to create a task (usually out of memory).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpawnRefused;

/// Task creation.
pub trait Scheduler {
    /// Opaque reference to a running task.
    type Handle: Copy;

    /// Creates a task running `body`. The task is never joined or
    /// destroyed, and `body` is not expected to return.
    fn spawn<F>(&mut self, spec: &TaskSpec, body: F) -> Result<Self::Handle, SpawnRefused>
    where
        F: FnOnce() + Send + 'static;
}

/// Task side of a one-slot notification.
pub trait Notification {
    /// Blocks without timeout until notified. All notifications
    /// pending at that point are cleared before returning, so any
    /// number of signals collapses into a single wake.
    fn take(&self);
}

/// Interrupt side of a one-slot notification.
pub trait IsrNotifier {
    /// Signals the waiting task. Returns whether a task of higher
    /// priority than the interrupted one became runnable.
    fn notify_from_isr(&self) -> bool;

    /// Requests a context switch on interrupt return if one is due.
    fn yield_from_isr(&self, higher_priority_woken: bool);
}
