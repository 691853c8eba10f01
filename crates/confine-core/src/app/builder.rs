//! HarnessBuilder - ハーネスの構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）

use std::sync::Arc;

use super::config::HarnessConfig;
use super::harness::Harness;
use crate::error::ConfigError;
use crate::impls::ConsoleReporter;
use crate::ports::Reporter;

/// HarnessBuilder は Harness を構築
///
/// # 使用例
/// ```ignore
/// let harness = Harness::builder()
///     .config(HarnessConfig::load(path)?)
///     .workers(8)
///     .build()?;
/// ```
///
/// # Fail-fast 設計
/// - build() 時に設定を検証し、不正なら ConfigError を返す
/// - reporter を指定しなければ ConsoleReporter
pub struct HarnessBuilder {
    config: HarnessConfig,
    reporter: Option<Arc<dyn Reporter>>,
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            config: HarnessConfig::default(),
            reporter: None,
        }
    }

    /// 設定をまとめて差し替える
    pub fn config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.config.workers = workers;
        self
    }

    pub fn requests_per_worker(mut self, requests: usize) -> Self {
        self.config.requests_per_worker = requests;
        self
    }

    pub fn reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = Some(reporter);
        self
    }

    pub fn build(self) -> Result<Harness, ConfigError> {
        self.config.validate()?;
        let reporter = self
            .reporter
            .unwrap_or_else(|| Arc::new(ConsoleReporter::new()));
        Ok(Harness::new(self.config, reporter))
    }
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}
