//! MemoryReporter - テスト用にイベントを記録する Reporter

use std::sync::{Mutex, PoisonError};

use crate::domain::Anomaly;
use crate::ports::Reporter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Started(String),
    Finished(String),
    Anomaly(Anomaly),
}

#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.lock().clone()
    }

    pub fn anomaly_count(&self) -> usize {
        self.lock()
            .iter()
            .filter(|e| matches!(e, ReportEvent::Anomaly(_)))
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ReportEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Reporter for MemoryReporter {
    fn run_started(&self, strategy: &str) {
        self.lock().push(ReportEvent::Started(strategy.to_string()));
    }

    fn run_finished(&self, strategy: &str) {
        self.lock().push(ReportEvent::Finished(strategy.to_string()));
    }

    fn anomaly(&self, anomaly: &Anomaly) {
        self.lock().push(ReportEvent::Anomaly(anomaly.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_events_in_order() {
        let reporter = MemoryReporter::new();
        reporter.run_started("SafeStrategy");
        reporter.anomaly(&Anomaly {
            thread_id: 3,
            observed: "a".into(),
            expected: "b",
        });
        reporter.run_finished("SafeStrategy");

        let events = reporter.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], ReportEvent::Started("SafeStrategy".into()));
        assert_eq!(events[2], ReportEvent::Finished("SafeStrategy".into()));
        assert_eq!(reporter.anomaly_count(), 1);
    }
}
