//! Scheduler for bare metal builds without an RTOS.
//!
//! The single task runs on the thread mode stack, in place: `spawn` only
//! returns once the task body does, which the event pump never does.
use crate::hal::rtos::{Scheduler, SpawnRefused, TaskSpec};

#[derive(Debug, Default)]
pub struct ThreadMode {
    occupied: Option<&'static str>,
}

impl ThreadMode {
    pub const fn new() -> Self { Self { occupied: None } }

    /// Name of the task holding the thread mode context, if any.
    pub fn occupant(&self) -> Option<&'static str> { self.occupied }
}

impl Scheduler for ThreadMode {
    type Handle = ();

    fn spawn<F>(&mut self, spec: &TaskSpec, body: F) -> Result<(), SpawnRefused>
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(occupant) = self.occupied {
            warn!("Cannot run {}, thread mode belongs to {}", spec.name, occupant);
            return Err(SpawnRefused);
        }
        self.occupied = Some(spec.name);
        debug!("Running {} in thread mode (priority {})", spec.name, spec.priority);
        body();
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    const SPEC: TaskSpec = TaskSpec { name: "BLE", stack_words: 256, priority: 2 };

    #[test]
    fn runs_the_first_task_in_place() {
        // Given
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let mut scheduler = ThreadMode::new();

        // When
        let result = scheduler.spawn(&SPEC, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        // Then
        assert_eq!(result, Ok(()));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(scheduler.occupant(), Some("BLE"));
    }

    #[test]
    fn refuses_a_second_task() {
        // Given
        let mut scheduler = ThreadMode::new();
        scheduler.spawn(&SPEC, || {}).unwrap();

        // When
        let result = scheduler.spawn(&TaskSpec { name: "Other", ..SPEC }, || {
            panic!("second task must not run")
        });

        // Then
        assert_eq!(result, Err(SpawnRefused));
        assert_eq!(scheduler.occupant(), Some("BLE"));
    }
}
