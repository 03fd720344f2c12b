//! Ordered fan-out of stack events.
//!
//! Observers are registered once at startup, each with a priority
//! level. Events reach lower levels first, and observers sharing a
//! level in the order they were registered.
use crate::error::Error;
use heapless::Vec;

/// Receiver of stack events. The observer itself carries whatever
/// context it needs.
pub trait EventObserver<E> {
    fn on_event(&self, event: E);
}

pub type ObserverRef<'a, E> = &'a (dyn EventObserver<E> + Sync);

pub struct ObserverList<'a, E, const N: usize> {
    entries: Vec<(u8, ObserverRef<'a, E>), N>,
}

impl<'a, E: Copy, const N: usize> ObserverList<'a, E, N> {
    pub const fn new() -> Self { Self { entries: Vec::new() } }

    pub fn register(&mut self, priority: u8, observer: ObserverRef<'a, E>) -> Result<(), Error> {
        let position =
            self.entries.iter().position(|(level, _)| *level > priority).unwrap_or(self.entries.len());
        self.entries.push((priority, observer)).map_err(|_| Error::ObserverListFull)?;
        self.entries[position..].rotate_right(1);
        Ok(())
    }

    /// Hands `event` to every observer, in order.
    pub fn notify(&self, event: E) {
        for (_, observer) in self.entries.iter() {
            observer.on_event(event);
        }
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl<'a, E: Copy, const N: usize> Default for ObserverList<'a, E, N> {
    fn default() -> Self { Self::new() }
}
