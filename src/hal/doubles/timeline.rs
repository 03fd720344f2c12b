//! Virtual clock shared by mock pins and delays.
//!
//! Every pin write and every delay is appended to the same record,
//! so tests can replay the exact waveform a driver produced without
//! waiting on a wall clock.
use crate::hal::gpio::Level;
use std::{cell::RefCell, rc::Rc, vec::Vec};

use super::{gpio::MockPin, time::MockDelay};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trace {
    Configured,
    High,
    Low,
    WaitUs(u32),
    WaitMs(u32),
}

#[derive(Clone, Debug, Default)]
pub struct Timeline(Rc<RefCell<Vec<Trace>>>);

impl Timeline {
    pub fn new() -> Self { Self::default() }

    /// A pin that records on this timeline.
    pub fn pin(&self) -> MockPin { MockPin::on(self.clone()) }

    /// A delay that records on this timeline.
    pub fn delay(&self) -> MockDelay { MockDelay::on(self.clone()) }

    pub fn record(&self, trace: Trace) { self.0.borrow_mut().push(trace); }

    pub fn traces(&self) -> Vec<Trace> { self.0.borrow().clone() }

    pub fn clear(&self) { self.0.borrow_mut().clear(); }

    /// Number of calls made to the GPIO primitives.
    pub fn gpio_calls(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|t| matches!(t, Trace::Configured | Trace::High | Trace::Low))
            .count()
    }

    /// Total time spent waiting, in microseconds.
    pub fn elapsed_us(&self) -> u64 {
        self.0
            .borrow()
            .iter()
            .map(|t| match t {
                Trace::WaitUs(us) => *us as u64,
                Trace::WaitMs(ms) => *ms as u64 * 1000,
                _ => 0,
            })
            .sum()
    }

    /// Samples the line level `count` times, every `period_us`, starting
    /// half a period after time zero. Samples taken before the line was
    /// first driven, or after the record ends, are `None`.
    pub fn sample(&self, period_us: u32, count: usize) -> Vec<Option<Level>> {
        // (level, start, end) for every interval the line was held
        let mut held = Vec::new();
        let mut level = None;
        let mut now = 0u64;
        for trace in self.0.borrow().iter() {
            let wait = match *trace {
                Trace::High => {
                    level = Some(Level::High);
                    continue;
                }
                Trace::Low => {
                    level = Some(Level::Low);
                    continue;
                }
                Trace::Configured => continue,
                Trace::WaitUs(us) => us as u64,
                Trace::WaitMs(ms) => ms as u64 * 1000,
            };
            held.push((level, now, now + wait));
            now += wait;
        }

        (0..count)
            .map(|i| {
                let instant = period_us as u64 * i as u64 + period_us as u64 / 2;
                held.iter()
                    .find(|(_, start, end)| *start <= instant && instant < *end)
                    .and_then(|(level, _, _)| *level)
            })
            .collect()
    }
}
