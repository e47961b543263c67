use std::sync::Mutex;

use crate::shared::infrastructure::event_observer::EventObserver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    pub name: String,
    pub tags: Vec<(String, String)>,
}

/// Keeps every emitted event in memory so tests can assert on them.
#[derive(Debug, Default)]
pub struct RecordingEventObserver {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingEventObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RecordedEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn count(&self, name: &str) -> usize {
        self.events().iter().filter(|e| e.name == name).count()
    }
}

impl EventObserver for RecordingEventObserver {
    fn emit_event(&self, name: &str, tags: &[(&str, &str)]) {
        let event = RecordedEvent {
            name: name.to_string(),
            tags: tags
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        };
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

#[cfg(test)]
mod recording_event_observer_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_record_events_in_order() {
        let observer = RecordingEventObserver::new();
        observer.emit_event("first", &[]);
        observer.emit_event("second", &[("userId", "u1")]);

        let events = observer.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].name, "first");
        assert_eq!(
            events[1].tags,
            vec![("userId".to_string(), "u1".to_string())]
        );
        assert_eq!(observer.count("second"), 1);
    }
}
