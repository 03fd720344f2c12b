//! BLE stack event pump.
//!
//! A single long-lived task owns the stack's event queue. Each time
//! it is woken it drains every pending event, handing each one to the
//! registered observers, and then blocks on its notification again
//! with no timeout. The stack interrupt is the producer of those
//! wakes, through an [`InterruptCompanion`].
//!
//! Wakes coalesce: any number of notifications raised while the task
//! is draining result in exactly one further drain pass.
//!
//! # Example
//! ```
//! # use bootwire_lib::devices::{event_pump::*, observers::ObserverList};
//! # use bootwire_lib::hal::doubles::{fatal::RecordingFatal, rtos::*, softdevice::MockEventSource};
//! let notification: &'static MockNotification = Box::leak(Box::new(MockNotification::with_wakes(0)));
//! let pump = EventPump::new(MockEventSource::with_events([1, 2]), notification, ObserverList::<u32, 1>::new());
//! let mut scheduler = MockScheduler::default();
//! let config = PumpConfig::default();
//! let handle = start_or_halt(&mut scheduler, &config.task, pump, None::<NoHook>, RecordingFatal::default());
//! # assert_eq!(handle, 0);
//! ```
use crate::{
    devices::observers::ObserverList,
    error::{Error, Fatal},
    hal::{
        rtos::{IsrNotifier, Notification, Scheduler, TaskSpec},
        softdevice::EventSource,
    },
};

/// Placeholder type for starting a pump without a hook.
pub type NoHook = fn();

/// Observer list sized by the build configuration.
pub type Observers<'a, E> = ObserverList<'a, E, { crate::config::event_pump::MAX_OBSERVERS }>;

/// Context in which system-on-chip events are drained.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SocEventMode {
    /// Along with stack events, by the pump task.
    InTask,
    /// Directly by the interrupt companion, before waking the task.
    /// Used when SoC events handled from the task could deadlock against
    /// blocking flash operations scheduled on that same task.
    InInterrupt,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PumpConfig {
    pub task: TaskSpec,
    pub soc_events: SocEventMode,
}

impl Default for PumpConfig {
    fn default() -> Self {
        use crate::config::event_pump as generated;
        Self {
            task: TaskSpec {
                name: generated::TASK_NAME,
                stack_words: generated::STACK_WORDS,
                priority: generated::PRIORITY,
            },
            soc_events: if generated::SOC_EVENTS_IN_INTERRUPT {
                SocEventMode::InInterrupt
            } else {
                SocEventMode::InTask
            },
        }
    }
}

pub struct EventPump<'a, S: EventSource, N, const OBS: usize> {
    source: S,
    notification: &'a N,
    observers: ObserverList<'a, S::Event, OBS>,
}

impl<'a, S: EventSource, N: Notification, const OBS: usize> EventPump<'a, S, N, OBS> {
    pub fn new(source: S, notification: &'a N, observers: ObserverList<'a, S::Event, OBS>) -> Self {
        Self { source, notification, observers }
    }

    /// Polls the stack until it reports no more events, dispatching each
    /// one. Returns the number of events drained.
    pub fn drain(&mut self) -> Result<usize, Error> { drain_into(&mut self.source, &self.observers) }

    /// One wake cycle: drain, then block (idle) until the next notification.
    pub fn cycle(&mut self) -> Result<usize, Error> {
        let drained = self.drain()?;
        trace!("Drained {} stack events", drained);
        self.notification.take();
        Ok(drained)
    }

    /// Task body. Runs `hook` once, then pumps forever. A polling failure
    /// is escalated to `fatal`.
    pub fn run<H: FnOnce(), F: Fatal>(mut self, hook: Option<H>, mut fatal: F) -> ! {
        info!("Event pump running");
        if let Some(hook) = hook {
            hook();
        }
        loop {
            if let Err(error) = self.cycle() {
                error!("Stack event poll failed: {}", error);
                fatal.halt(error);
            }
        }
    }
}

fn drain_into<S: EventSource, const OBS: usize>(
    source: &mut S,
    observers: &ObserverList<'_, S::Event, OBS>,
) -> Result<usize, Error> {
    let mut drained = 0;
    while let Some(event) = source.next_event().map_err(Error::EventPollFailed)? {
        observers.notify(event);
        drained += 1;
    }
    Ok(drained)
}

/// Creates the pump task. The task is never joined; the returned handle
/// lives as long as the system.
pub fn start<Sch, S, N, H, F, const OBS: usize>(
    scheduler: &mut Sch,
    spec: &TaskSpec,
    pump: EventPump<'static, S, N, OBS>,
    hook: Option<H>,
    fatal: F,
) -> Result<Sch::Handle, Error>
where
    Sch: Scheduler,
    S: EventSource + Send + 'static,
    S::Event: 'static,
    N: Notification + Sync + 'static,
    H: FnOnce() + Send + 'static,
    F: Fatal + Send + 'static,
{
    scheduler
        .spawn(spec, move || {
            pump.run(hook, fatal);
        })
        .map_err(|_| {
            error!("Scheduler refused the {} task", spec.name);
            Error::TaskCreationRefused
        })
}

/// Creates the pump task, halting the system through `fatal` if the
/// scheduler refuses it.
pub fn start_or_halt<Sch, S, N, H, F, const OBS: usize>(
    scheduler: &mut Sch,
    spec: &TaskSpec,
    pump: EventPump<'static, S, N, OBS>,
    hook: Option<H>,
    mut fatal: F,
) -> Sch::Handle
where
    Sch: Scheduler,
    S: EventSource + Send + 'static,
    S::Event: 'static,
    N: Notification + Sync + 'static,
    H: FnOnce() + Send + 'static,
    F: Fatal + Clone + Send + 'static,
{
    match start(scheduler, spec, pump, hook, fatal.clone()) {
        Ok(handle) => handle,
        Err(error) => fatal.halt(error),
    }
}

/// Stack interrupt handler logic. Optionally drains SoC events in place,
/// then wakes the pump task.
pub struct InterruptCompanion<'a, I, C: EventSource, const OBS: usize> {
    notifier: &'a I,
    mode: SocEventMode,
    soc: C,
    observers: ObserverList<'a, C::Event, OBS>,
}

impl<'a, I: IsrNotifier, C: EventSource, const OBS: usize> InterruptCompanion<'a, I, C, OBS> {
    pub fn new(
        notifier: &'a I,
        mode: SocEventMode,
        soc: C,
        observers: ObserverList<'a, C::Event, OBS>,
    ) -> Self {
        Self { notifier, mode, soc, observers }
    }

    pub fn mode(&self) -> SocEventMode { self.mode }

    pub fn on_interrupt<F: Fatal>(&mut self, fatal: &mut F) {
        if self.mode == SocEventMode::InInterrupt {
            if let Err(error) = drain_into(&mut self.soc, &self.observers) {
                fatal.halt(error);
            }
        }
        let higher_priority_woken = self.notifier.notify_from_isr();
        self.notifier.yield_from_isr(higher_priority_woken);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        devices::observers::EventObserver,
        drivers::notification::TaskNotification,
        hal::doubles::{
            fatal::RecordingFatal,
            rtos::{MockNotification, MockNotifier, MockScheduler},
            softdevice::MockEventSource,
        },
    };
    use std::{
        panic::{self, AssertUnwindSafe},
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc, Mutex,
        },
    };

    const SPEC: TaskSpec = TaskSpec { name: "BLE", stack_words: 256, priority: 2 };

    struct Recorder<'a>(&'a Mutex<Vec<u32>>);

    impl<'a> EventObserver<u32> for Recorder<'a> {
        fn on_event(&self, event: u32) { self.0.lock().unwrap().push(event); }
    }

    /// Raises the pump's notification from inside the drain, as the stack
    /// interrupt would.
    struct Signaller<'a>(&'a TaskNotification);

    impl<'a> EventObserver<u32> for Signaller<'a> {
        fn on_event(&self, _: u32) { self.0.give(); }
    }

    fn leak<T>(value: T) -> &'static T { Box::leak(Box::new(value)) }

    #[test]
    fn defaults_come_from_the_build_configuration() {
        let config = PumpConfig::default();
        assert_eq!(config.task, SPEC);
        assert_eq!(config.soc_events, SocEventMode::InTask);
    }

    #[test]
    fn one_drain_consumes_every_pending_event() {
        // Given
        let log = Mutex::new(vec![]);
        let recorder = Recorder(&log);
        let mut observers = ObserverList::<u32, 1>::new();
        observers.register(0, &recorder).unwrap();
        let notification = MockNotification::with_wakes(1);
        let mut pump = EventPump::new(MockEventSource::with_events(10..15), &notification, observers);

        // When
        let drained = pump.drain();

        // Then
        assert_eq!(drained, Ok(5));
        assert_eq!(*log.lock().unwrap(), vec![10, 11, 12, 13, 14]);
        assert_eq!(notification.takes(), 0);
    }

    #[test]
    fn notifications_raised_while_draining_coalesce_into_one_wake() {
        // Given
        let notification = TaskNotification::new();
        let signaller = Signaller(&notification);
        let mut observers = ObserverList::<u32, 1>::new();
        observers.register(0, &signaller).unwrap();
        let mut pump = EventPump::new(MockEventSource::with_events([1, 2, 3]), &notification, observers);

        // When
        let drained = pump.cycle();

        // Then
        assert_eq!(drained, Ok(3));
        assert_eq!(notification.pending(), 0);
        assert!(!notification.try_take());
    }

    #[test]
    fn task_runs_hook_once_then_drains_on_every_wake() {
        // Given
        let log = leak(Mutex::new(vec![]));
        let mut observers = ObserverList::<u32, 1>::new();
        observers.register(0, leak(Recorder(log))).unwrap();
        let notification = leak(MockNotification::with_wakes(2));
        let pump = EventPump::new(MockEventSource::with_events([4, 5, 6]), notification, observers);
        let hook_calls = Arc::new(AtomicUsize::new(0));
        let counter = hook_calls.clone();
        let mut scheduler = MockScheduler::running();
        let fatal = RecordingFatal::default();

        // When
        let hook = move || {
            counter.fetch_add(1, Ordering::SeqCst);
        };
        let handle = start(&mut scheduler, &SPEC, pump, Some(hook), fatal.clone());

        // Then
        assert_eq!(handle, Ok(0));
        assert_eq!(scheduler.spawned, vec![SPEC]);
        assert_eq!(hook_calls.load(Ordering::SeqCst), 1);
        assert_eq!(*log.lock().unwrap(), vec![4, 5, 6]);
        // Two wakes, then the third wait powers the task off.
        assert_eq!(notification.takes(), 3);
        assert_eq!(scheduler.powered_off, 1);
        assert!(fatal.errors().is_empty());
    }

    #[test]
    fn refused_task_creation_is_reported_to_the_caller() {
        // Given
        let notification = leak(MockNotification::with_wakes(0));
        let pump = EventPump::new(MockEventSource::default(), notification, ObserverList::<u32, 1>::new());
        let mut scheduler = MockScheduler::refusing();
        let fatal = RecordingFatal::default();

        // When
        let result = start(&mut scheduler, &SPEC, pump, None::<NoHook>, fatal.clone());

        // Then
        assert_eq!(result, Err(Error::TaskCreationRefused));
        assert!(fatal.errors().is_empty());
    }

    #[test]
    fn refused_task_creation_halts_exactly_once() {
        // Given
        let notification = leak(MockNotification::with_wakes(0));
        let pump = EventPump::new(MockEventSource::default(), notification, ObserverList::<u32, 1>::new());
        let mut scheduler = MockScheduler::refusing();
        let fatal = RecordingFatal::default();

        // When
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            start_or_halt(&mut scheduler, &SPEC, pump, None::<NoHook>, fatal.clone())
        }));

        // Then
        assert!(outcome.is_err());
        assert_eq!(fatal.errors(), vec![Error::TaskCreationRefused]);
        assert!(scheduler.spawned.is_empty());
        assert_eq!(notification.takes(), 0);
    }

    #[test]
    fn poll_failure_in_task_halts_the_system() {
        // Given
        let notification = leak(MockNotification::with_wakes(5));
        let source = MockEventSource::with_events([1]).failing_with(0x3001);
        let pump = EventPump::new(source, notification, ObserverList::<u32, 1>::new());
        let mut scheduler = MockScheduler::running();
        let fatal = RecordingFatal::default();

        // When
        start(&mut scheduler, &SPEC, pump, None::<NoHook>, fatal.clone()).unwrap();

        // Then
        assert_eq!(fatal.errors(), vec![Error::EventPollFailed(0x3001)]);
        assert_eq!(notification.takes(), 0);
        assert_eq!(scheduler.powered_off, 1);
    }

    #[test]
    fn interrupt_in_task_mode_only_wakes_the_pump() {
        // Given
        let log = Mutex::new(vec![]);
        let recorder = Recorder(&log);
        let mut observers = ObserverList::<u32, 1>::new();
        observers.register(0, &recorder).unwrap();
        let notifier = MockNotifier::default();
        let mut companion = InterruptCompanion::new(
            &notifier,
            SocEventMode::InTask,
            MockEventSource::with_events([7, 8]),
            observers,
        );
        let mut fatal = RecordingFatal::default();

        // When
        companion.on_interrupt(&mut fatal);
        notifier.higher_priority_waiting.store(true, Ordering::SeqCst);
        companion.on_interrupt(&mut fatal);

        // Then
        assert!(log.lock().unwrap().is_empty());
        assert_eq!(notifier.notifications(), 2);
        assert_eq!(notifier.yields(), vec![false, true]);
    }

    #[test]
    fn interrupt_in_interrupt_mode_drains_soc_events_before_waking() {
        // Given
        let log = Mutex::new(vec![]);
        let recorder = Recorder(&log);
        let mut observers = ObserverList::<u32, 1>::new();
        observers.register(0, &recorder).unwrap();
        let notifier = MockNotifier::default();
        let mut companion = InterruptCompanion::new(
            &notifier,
            SocEventMode::InInterrupt,
            MockEventSource::with_events([7, 8]),
            observers,
        );
        let mut fatal = RecordingFatal::default();

        // When
        companion.on_interrupt(&mut fatal);

        // Then
        assert_eq!(*log.lock().unwrap(), vec![7, 8]);
        assert_eq!(notifier.notifications(), 1);
        assert_eq!(notifier.yields(), vec![false]);
        assert!(fatal.errors().is_empty());
    }

    #[test]
    fn soc_poll_failure_in_interrupt_halts_before_waking() {
        // Given
        let notifier = MockNotifier::default();
        let source = MockEventSource::default().failing_with(8);
        let mut companion =
            InterruptCompanion::new(&notifier, SocEventMode::InInterrupt, source, ObserverList::<u32, 1>::new());
        let mut fatal = RecordingFatal::default();

        // When
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| companion.on_interrupt(&mut fatal)));

        // Then
        assert!(outcome.is_err());
        assert_eq!(fatal.errors(), vec![Error::EventPollFailed(8)]);
        assert_eq!(notifier.notifications(), 0);
    }
}
