use super::timeline::{Timeline, Trace};
use crate::hal::time::{Delay, Microseconds, Milliseconds};

/// Delay that returns immediately, recording the requested period.
#[derive(Clone, Debug, Default)]
pub struct MockDelay {
    timeline: Timeline,
}

impl MockDelay {
    pub fn on(timeline: Timeline) -> Self { Self { timeline } }
}

impl Delay for MockDelay {
    fn delay_us(&mut self, period: Microseconds) { self.timeline.record(Trace::WaitUs(period.0)); }
    fn delay_ms(&mut self, period: Milliseconds) { self.timeline.record(Trace::WaitMs(period.0)); }
}
