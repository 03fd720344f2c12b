use crate::hal::rtos::{IsrNotifier, Notification, Scheduler, SpawnRefused, TaskSpec};
use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Mutex,
    },
    vec::Vec,
};

/// Message of the panic used to stop a task body that would otherwise
/// loop forever.
pub const POWER_OFF: &str = "powered off [TESTING ONLY]";

/// Scheduler that either refuses every task, or accepts it and (optionally)
/// runs its body to the first power off on the calling thread.
#[derive(Debug, Default)]
pub struct MockScheduler {
    pub refuse: bool,
    pub run_bodies: bool,
    pub spawned: Vec<TaskSpec>,
    pub powered_off: usize,
}

impl MockScheduler {
    pub fn refusing() -> Self { Self { refuse: true, ..Default::default() } }
    pub fn running() -> Self { Self { run_bodies: true, ..Default::default() } }
}

impl Scheduler for MockScheduler {
    type Handle = usize;

    fn spawn<F>(&mut self, spec: &TaskSpec, body: F) -> Result<usize, SpawnRefused>
    where
        F: FnOnce() + Send + 'static,
    {
        if self.refuse {
            return Err(SpawnRefused);
        }
        self.spawned.push(*spec);
        if self.run_bodies && panic::catch_unwind(AssertUnwindSafe(body)).is_err() {
            self.powered_off += 1;
        }
        Ok(self.spawned.len() - 1)
    }
}

/// Notification that wakes immediately a fixed number of times, and
/// powers the task off on the next wait.
#[derive(Debug, Default)]
pub struct MockNotification {
    wakes_left: AtomicUsize,
    pub takes: AtomicUsize,
}

impl MockNotification {
    pub fn with_wakes(wakes: usize) -> Self {
        Self { wakes_left: AtomicUsize::new(wakes), takes: AtomicUsize::new(0) }
    }
    pub fn takes(&self) -> usize { self.takes.load(Ordering::SeqCst) }
}

impl Notification for MockNotification {
    fn take(&self) {
        self.takes.fetch_add(1, Ordering::SeqCst);
        if self.wakes_left.load(Ordering::SeqCst) == 0 {
            panic!("{}", POWER_OFF);
        }
        self.wakes_left.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Interrupt-side notifier recording every signal and yield request.
#[derive(Debug, Default)]
pub struct MockNotifier {
    pub higher_priority_waiting: AtomicBool,
    pub notifications: AtomicUsize,
    pub yields: Mutex<Vec<bool>>,
}

impl MockNotifier {
    pub fn notifications(&self) -> usize { self.notifications.load(Ordering::SeqCst) }
    pub fn yields(&self) -> Vec<bool> { self.yields.lock().unwrap().clone() }
}

impl IsrNotifier for MockNotifier {
    fn notify_from_isr(&self) -> bool {
        self.notifications.fetch_add(1, Ordering::SeqCst);
        self.higher_priority_waiting.load(Ordering::SeqCst)
    }

    fn yield_from_isr(&self, higher_priority_woken: bool) {
        self.yields.lock().unwrap().push(higher_priority_woken);
    }
}
