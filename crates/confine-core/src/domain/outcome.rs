//! Outcome - ロジック実行 1 回分の結果
//!
//! 期待値と観測値が一致しなければ Anomaly。Anomaly はエラーではなく診断情報なので
//! `Result` の `Err` 側には載せない。

use std::fmt;

use serde::Serialize;

use crate::context::current_thread_number;

/// Anomaly は「上書きしたはずの値が読み戻せなかった」記録
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anomaly {
    pub thread_id: u64,
    pub observed: String,
    pub expected: &'static str,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error: {:>4}, {}, {}, overwrite failed",
            self.thread_id, self.observed, self.expected
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Clean,
    Anomaly(Anomaly),
}

impl Outcome {
    /// 観測値を期待値と比べる。不一致なら呼び出しスレッドの番号つきで Anomaly を作る
    pub fn compare(observed: String, expected: &'static str) -> Self {
        if observed == expected {
            return Outcome::Clean;
        }
        Outcome::Anomaly(Anomaly {
            thread_id: current_thread_number(),
            observed,
            expected,
        })
    }

    pub fn is_anomaly(&self) -> bool {
        matches!(self, Outcome::Anomaly(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_values_are_clean() {
        let outcome = Outcome::compare("same".to_string(), "same");
        assert_eq!(outcome, Outcome::Clean);
        assert!(!outcome.is_anomaly());
    }

    #[test]
    fn mismatch_records_thread_and_values() {
        let outcome = Outcome::compare("stale".to_string(), "fresh");
        let Outcome::Anomaly(anomaly) = outcome else {
            panic!("expected anomaly");
        };
        assert_eq!(anomaly.thread_id, current_thread_number());
        assert_eq!(anomaly.observed, "stale");
        assert_eq!(anomaly.expected, "fresh");
    }

    #[test]
    fn anomaly_line_pads_thread_id() {
        let anomaly = Anomaly {
            thread_id: 7,
            observed: "there is a message".to_string(),
            expected: "the message was overwritten",
        };
        assert_eq!(
            anomaly.to_string(),
            "error:    7, there is a message, the message was overwritten, overwrite failed"
        );
    }
}
