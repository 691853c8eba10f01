//! ConsoleReporter - 標準出力への出力
//!
//! 出力形式:
//! - `<StrategyName> start.`
//! - `<StrategyName> end.`
//! - `error: <thread_id>, <observed>, <expected>, overwrite failed`

use std::io::{self, Write};

use crate::domain::Anomaly;
use crate::ports::Reporter;

#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }

    fn line(&self, line: std::fmt::Arguments<'_>) {
        // stdout が閉じていても実行は続ける
        let _ = writeln!(io::stdout().lock(), "{line}");
    }
}

impl Reporter for ConsoleReporter {
    fn run_started(&self, strategy: &str) {
        self.line(format_args!("{strategy} start."));
    }

    fn run_finished(&self, strategy: &str) {
        self.line(format_args!("{strategy} end."));
    }

    fn anomaly(&self, anomaly: &Anomaly) {
        self.line(format_args!("{anomaly}"));
    }
}
