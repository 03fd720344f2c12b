use crate::error::{Error, Fatal};
use std::{
    sync::{Arc, Mutex},
    vec::Vec,
};

/// Message of the panic standing in for a system halt.
pub const HALTED: &str = "system halted [TESTING ONLY]";

/// Records every escalated error, then unwinds in place of halting.
/// Clones share the same record.
#[derive(Clone, Debug, Default)]
pub struct RecordingFatal {
    errors: Arc<Mutex<Vec<Error>>>,
}

impl RecordingFatal {
    pub fn errors(&self) -> Vec<Error> { self.errors.lock().unwrap().clone() }
}

impl Fatal for RecordingFatal {
    fn halt(&mut self, error: Error) -> ! {
        self.errors.lock().unwrap().push(error);
        panic!("{}", HALTED);
    }
}
