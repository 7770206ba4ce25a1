use crate::event::{ElementType, LifecycleEvent};

/// Scenario-scoped tally of matching lifecycle events.
///
/// Created fresh for each verification scenario and returned by the consumer
/// session. Counts never decrease; single-threaded use only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventCounters {
    /// Start events matching the target process.
    pub started: u64,
    /// End events matching the target process.
    pub ended: u64,
}

impl EventCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one classified event against the target process id.
    ///
    /// Only exact, case-sensitive process-id matches count; any other
    /// combination is ignored, not an error.
    pub fn record(&mut self, event: &LifecycleEvent, target_process_id: &str) {
        if event.process_id != target_process_id {
            return;
        }
        match event.element_type {
            ElementType::Start => self.started += 1,
            ElementType::End => self.ended += 1,
            ElementType::Other => {}
        }
    }
}
