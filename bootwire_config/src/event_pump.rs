use serde::{Deserialize, Serialize};

use crate::Problem;

/// Longest task name the scheduler keeps without truncating.
pub const MAX_TASK_NAME_LENGTH: usize = 16;

/// Smallest stack, in words, the pump can run its drain loop on.
pub const MIN_STACK_WORDS: u16 = 64;

/// Where system-on-chip events are drained.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SocEvents {
    /// Together with every other stack event, by the pump task.
    InTask,
    /// Directly by the stack event interrupt, before the pump task is woken.
    InInterrupt,
}

impl Default for SocEvents {
    fn default() -> Self { SocEvents::InTask }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPumpConfiguration {
    pub task_name: String,
    pub stack_words: u16,
    pub priority: u8,
    pub soc_events: SocEvents,
    pub max_observers: usize,
}

impl Default for EventPumpConfiguration {
    fn default() -> Self {
        Self {
            task_name: "BLE".into(),
            stack_words: 256,
            priority: 2,
            soc_events: SocEvents::InTask,
            max_observers: 4,
        }
    }
}

impl EventPumpConfiguration {
    pub fn problems(&self) -> std::vec::IntoIter<Problem> {
        let mut problems = vec![];
        if self.task_name.is_empty() {
            problems.push(Problem::EmptyTaskName);
        } else if self.task_name.len() > MAX_TASK_NAME_LENGTH {
            problems.push(Problem::TaskNameTooLong(self.task_name.len()));
        }
        if self.stack_words < MIN_STACK_WORDS {
            problems.push(Problem::StackTooSmall(self.stack_words));
        }
        if self.max_observers == 0 {
            problems.push(Problem::NoObserverCapacity);
        }
        problems.into_iter()
    }
}
