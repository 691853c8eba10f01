//! Harness - 1 つの Action を多数の worker で共有して叩く
//!
//! # 学習ポイント
//! - `spawn_blocking` の worker はプールされたスレッドで動く（スレッド再利用あり）
//! - StartGate で全 worker を同時に走らせ、JoinHandle を全部 await して待つ
//! - worker の失敗（ゲート打ち切り、join 失敗）はログに残して他の worker は続行

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use super::builder::HarnessBuilder;
use super::config::HarnessConfig;
use super::gate::{AbandonOnDrop, StartGate};
use super::status::{RunReport, RunTally};
use super::worker_loop::WorkerLoop;
use crate::handler::{Action, SafeStrategy, Strategy, UnsafeStrategy};
use crate::ports::Reporter;

pub struct Harness {
    config: HarnessConfig,
    reporter: Arc<dyn Reporter>,
}

impl Harness {
    /// 検証済みの設定で作る。通常は `Harness::builder()` を使う
    pub(crate) fn new(config: HarnessConfig, reporter: Arc<dyn Reporter>) -> Self {
        Self { config, reporter }
    }

    pub fn builder() -> HarnessBuilder {
        HarnessBuilder::new()
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// UnsafeStrategy → SafeStrategy の順に 1 回ずつ実行する
    pub async fn run_all(&self) -> Vec<RunReport> {
        let unsafe_report = self.run(Arc::new(Action::new(UnsafeStrategy::new()))).await;
        let safe_report = self.run(Arc::new(Action::new(SafeStrategy))).await;
        vec![unsafe_report, safe_report]
    }

    /// 1 つの Action を全 worker で共有して実行する
    pub async fn run<S: Strategy + 'static>(&self, action: Arc<Action<S>>) -> RunReport {
        let strategy = action.name();
        let workers = self.config.workers;
        let requests = self.config.requests_per_worker;

        self.reporter.run_started(strategy);
        info!(
            strategy,
            workers,
            requests,
            invocations = self.config.invocations(),
            "run started"
        );

        let gate = Arc::new(StartGate::new());
        let tally = Arc::new(RunTally::default());
        let initial_message: Arc<str> = Arc::from(self.config.initial_message.as_str());

        // release 前にこの future が drop されたら worker を解放する
        let abandon_guard = AbandonOnDrop(&gate);

        let mut joins: Vec<JoinHandle<()>> = Vec::with_capacity(workers);
        for worker_id in 0..workers {
            let worker = WorkerLoop {
                worker_id,
                gate: Arc::clone(&gate),
                action: Arc::clone(&action),
                reporter: Arc::clone(&self.reporter),
                tally: Arc::clone(&tally),
                requests,
                initial_message: Arc::clone(&initial_message),
            };
            joins.push(tokio::task::spawn_blocking(move || worker.run()));
        }

        // 全 worker を spawn し終えてから同時にスタート
        gate.release();

        for (worker_id, join) in joins.into_iter().enumerate() {
            if let Err(e) = join.await {
                error!(worker_id, strategy, error = %e, "worker join failed");
                tally.interrupted();
            }
        }
        drop(abandon_guard);

        let report = tally.snapshot(strategy, workers, requests);
        info!(
            strategy,
            invocations = report.invocations,
            anomalies = report.anomalies,
            failures = report.failures,
            interrupted = report.interrupted,
            "run finished"
        );
        self.reporter.run_finished(strategy);

        report
    }
}
