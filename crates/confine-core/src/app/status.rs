//! Status - 1 回のハーネス実行の集計

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

/// RunReport は 1 strategy 分の実行結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub strategy: &'static str,
    pub workers: usize,
    pub requests_per_worker: usize,
    /// 実際に Action::execute を呼んだ回数
    pub invocations: usize,
    pub anomalies: usize,
    /// execute_logic が Err を返した回数
    pub failures: usize,
    /// ゲート待ちが打ち切られた、または join に失敗した worker の数
    pub interrupted: usize,
}

/// worker から並行に加算されるカウンタ
#[derive(Debug, Default)]
pub(crate) struct RunTally {
    invocations: AtomicUsize,
    anomalies: AtomicUsize,
    failures: AtomicUsize,
    interrupted: AtomicUsize,
}

impl RunTally {
    pub(crate) fn invocation(&self) {
        self.invocations.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn anomaly(&self) {
        self.anomalies.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn interrupted(&self) {
        self.interrupted.fetch_add(1, Ordering::Relaxed);
    }

    /// 全 worker の join 後に呼ぶ
    pub(crate) fn snapshot(
        &self,
        strategy: &'static str,
        workers: usize,
        requests_per_worker: usize,
    ) -> RunReport {
        RunReport {
            strategy,
            workers,
            requests_per_worker,
            invocations: self.invocations.load(Ordering::Relaxed),
            anomalies: self.anomalies.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            interrupted: self.interrupted.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_counts() {
        let tally = RunTally::default();
        tally.invocation();
        tally.invocation();
        tally.anomaly();
        tally.interrupted();

        let report = tally.snapshot("UnsafeStrategy", 1, 2);
        assert_eq!(report.invocations, 2);
        assert_eq!(report.anomalies, 1);
        assert_eq!(report.failures, 0);
        assert_eq!(report.interrupted, 1);
    }

    #[test]
    fn report_serializes_as_json() {
        let report = RunTally::default().snapshot("SafeStrategy", 100, 10);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["strategy"], "SafeStrategy");
        assert_eq!(json["workers"], 100);
        assert_eq!(json["anomalies"], 0);
    }
}
