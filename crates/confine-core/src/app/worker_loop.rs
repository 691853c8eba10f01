//! WorkerLoop - 1 worker 分のリクエスト処理ループ
//!
//! # フロー
//! 1. StartGate が開くのを待つ（打ち切られたらログを出して終了）
//! 2. リクエストごとに新しい RequestForm を作る
//! 3. 共有 Action で execute（bind → logic → unbind）
//! 4. Outcome を集計し、Anomaly は Reporter に流す

use std::sync::Arc;

use tracing::{debug, error, warn};

use super::gate::StartGate;
use super::status::RunTally;
use crate::domain::{Outcome, RequestForm};
use crate::handler::{Action, Strategy};
use crate::ports::Reporter;

pub(crate) struct WorkerLoop<S> {
    pub(crate) worker_id: usize,
    pub(crate) gate: Arc<StartGate>,
    pub(crate) action: Arc<Action<S>>,
    pub(crate) reporter: Arc<dyn Reporter>,
    pub(crate) tally: Arc<RunTally>,
    pub(crate) requests: usize,
    pub(crate) initial_message: Arc<str>,
}

impl<S: Strategy> WorkerLoop<S> {
    /// blocking スレッド上で呼ぶこと（ゲート待ちでブロックする）
    pub(crate) fn run(self) {
        let worker_id = self.worker_id;
        let strategy = self.action.name();

        if let Err(e) = self.gate.wait() {
            error!(worker_id, strategy, error = %e, "worker stopped before start");
            self.tally.interrupted();
            return;
        }
        debug!(worker_id, strategy, requests = self.requests, "worker started");

        for request in 1..=self.requests {
            let form = Arc::new(RequestForm::new(&*self.initial_message));
            self.tally.invocation();

            match self.action.execute(form) {
                Ok(Outcome::Clean) => {}
                Ok(Outcome::Anomaly(anomaly)) => {
                    self.tally.anomaly();
                    warn!(
                        worker_id,
                        strategy,
                        request,
                        thread_id = anomaly.thread_id,
                        observed = %anomaly.observed,
                        expected = anomaly.expected,
                        "overwrite anomaly"
                    );
                    self.reporter.anomaly(&anomaly);
                }
                Err(e) => {
                    self.tally.failure();
                    error!(worker_id, strategy, request, error = %e, "handler failed");
                }
            }
        }

        debug!(worker_id, strategy, "worker finished");
    }
}
