//! Interrupt to thread mode wake signal.
use crate::hal::rtos::{IsrNotifier, Notification};
use core::sync::atomic::{AtomicU32, Ordering};

/// One-slot notification backed by an atomic counter.
///
/// Any number of `give`s collapse into a single successful take, which
/// clears the slot.
#[derive(Debug, Default)]
pub struct TaskNotification {
    pending: AtomicU32,
}

impl TaskNotification {
    pub const fn new() -> Self { Self { pending: AtomicU32::new(0) } }

    pub fn give(&self) { self.pending.fetch_add(1, Ordering::Release); }

    /// Clears the slot, returning whether any notification was pending.
    pub fn try_take(&self) -> bool { self.pending.swap(0, Ordering::Acquire) != 0 }

    /// Notifications given since the last take.
    pub fn pending(&self) -> u32 { self.pending.load(Ordering::Relaxed) }
}

impl Notification for TaskNotification {
    fn take(&self) {
        while !self.try_take() {
            // Exception return sets the event register, so an interrupt
            // that gives the notification always ends the wait.
            #[cfg(target_arch = "arm")]
            cortex_m::asm::wfe();
            #[cfg(not(target_arch = "arm"))]
            core::hint::spin_loop();
        }
    }
}

impl IsrNotifier for TaskNotification {
    fn notify_from_isr(&self) -> bool {
        self.give();
        false
    }

    // Thread mode resumes on interrupt return anyway.
    fn yield_from_isr(&self, _: bool) {}
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn many_gives_collapse_into_one_take() {
        // Given
        let notification = TaskNotification::new();
        notification.give();
        notification.notify_from_isr();
        notification.give();

        // When
        notification.take();

        // Then
        assert_eq!(notification.pending(), 0);
        assert!(!notification.try_take());
    }

    #[test]
    fn nothing_to_take_before_a_give() {
        let notification = TaskNotification::new();
        assert!(!notification.try_take());
        notification.give();
        assert!(notification.try_take());
    }

    #[test]
    fn isr_side_never_requests_a_switch() {
        let notification = TaskNotification::new();
        assert!(!notification.notify_from_isr());
        assert_eq!(notification.pending(), 1);
    }
}
