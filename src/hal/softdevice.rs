//! Interface to the BLE stack's event queues.

/// A queue of pending stack events, read by polling.
pub trait EventSource {
    type Event: Copy;

    /// Retrieves the next pending event.
    ///
    /// `Ok(None)` means the queue is empty. An `Err` carries the stack's
    /// return code for any other failure.
    fn next_event(&mut self) -> Result<Option<Self::Event>, u32>;
}
