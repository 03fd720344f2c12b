//! Event pump running in thread mode, woken by the SoftDevice interrupt.
//!
//! The SoftDevice binding supplies the event sources. Its `SWI2_EGU2`
//! handler forwards to the [`InterruptCompanion`] built by [`companion`]:
//!
//! ```ignore
//! #[interrupt]
//! fn SWI2_EGU2() {
//!     // `COMPANION` is set up once from `event_pump::companion(...)`
//!     if let Some(companion) = unsafe { COMPANION.as_mut() } {
//!         companion.on_interrupt(&mut SystemReset);
//!     }
//! }
//! ```
use crate::{
    devices::event_pump::{start_or_halt, EventPump, InterruptCompanion, Observers, PumpConfig},
    drivers::{fatal::SystemReset, notification::TaskNotification, thread_mode::ThreadMode},
    hal::softdevice::EventSource,
};

/// Wake signal shared between the stack interrupt and the pump.
pub static NOTIFICATION: TaskNotification = TaskNotification::new();

/// Runs the pump on the calling context. Doesn't return in practice; a
/// refused start resets the core.
pub fn start<S, H>(source: S, observers: Observers<'static, S::Event>, hook: Option<H>)
where
    S: EventSource + Send + 'static,
    S::Event: 'static,
    H: FnOnce() + Send + 'static,
{
    let config = PumpConfig::default();
    let pump = EventPump::new(source, &NOTIFICATION, observers);
    let mut scheduler = ThreadMode::new();
    start_or_halt(&mut scheduler, &config.task, pump, hook, SystemReset);
}

/// Interrupt side of the pump, draining SoC events in place if the build
/// configuration asks for it.
pub fn companion<C: EventSource>(
    soc: C,
    observers: Observers<'static, C::Event>,
) -> InterruptCompanion<'static, TaskNotification, C, { crate::config::event_pump::MAX_OBSERVERS }> {
    InterruptCompanion::new(&NOTIFICATION, PumpConfig::default().soc_events, soc, observers)
}
