use super::timeline::{Timeline, Trace};
use crate::hal::gpio::{ConfigurablePin, OutputPin};
use std::vec::Vec;

#[derive(Clone, Debug, Default)]
pub struct MockPin {
    pub state: bool,
    pub configured: bool,
    pub changes: Vec<bool>,
    timeline: Timeline,
}

impl MockPin {
    pub fn on(timeline: Timeline) -> Self { Self { timeline, ..Default::default() } }
    pub fn is_high(&self) -> bool { self.state }
    pub fn is_low(&self) -> bool { !self.state }
}

impl OutputPin for MockPin {
    fn set_low(&mut self) {
        self.state = false;
        self.changes.push(self.state);
        self.timeline.record(Trace::Low);
    }

    fn set_high(&mut self) {
        self.state = true;
        self.changes.push(self.state);
        self.timeline.record(Trace::High);
    }
}

impl ConfigurablePin for MockPin {
    fn configure_as_output(&mut self) {
        self.configured = true;
        self.timeline.record(Trace::Configured);
    }
}
