use crate::hal::softdevice::EventSource;
use std::collections::VecDeque;

/// Stack event queue with scripted contents.
#[derive(Debug, Default)]
pub struct MockEventSource {
    pending: VecDeque<u32>,
    failure: Option<u32>,
    pub polls: usize,
}

impl MockEventSource {
    pub fn with_events<I: IntoIterator<Item = u32>>(events: I) -> Self {
        Self { pending: events.into_iter().collect(), ..Default::default() }
    }

    /// Once the scripted events run out, report `code` instead of "empty".
    pub fn failing_with(mut self, code: u32) -> Self {
        self.failure = Some(code);
        self
    }

    pub fn push(&mut self, event: u32) { self.pending.push_back(event); }

    pub fn pending(&self) -> usize { self.pending.len() }
}

impl EventSource for MockEventSource {
    type Event = u32;

    fn next_event(&mut self) -> Result<Option<u32>, u32> {
        self.polls += 1;
        match (self.pending.pop_front(), self.failure) {
            (Some(event), _) => Ok(Some(event)),
            (None, Some(code)) => Err(code),
            (None, None) => Ok(None),
        }
    }
}
