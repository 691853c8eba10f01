//! HarnessConfig - ハーネスの設定
//!
//! # 読み込み順
//! 1. デフォルト値（100 workers × 10 requests）
//! 2. TOML ファイル（指定があれば）
//! 3. 環境変数 `CONFINE_WORKERS` / `CONFINE_REQUESTS`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::INITIAL_MESSAGE;
use crate::error::ConfigError;

pub const DEFAULT_WORKERS: usize = 100;
pub const DEFAULT_REQUESTS_PER_WORKER: usize = 10;

pub const ENV_WORKERS: &str = "CONFINE_WORKERS";
pub const ENV_REQUESTS: &str = "CONFINE_REQUESTS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// 同時に走らせる worker スレッド数
    pub workers: usize,
    /// worker 1 本あたりのリクエスト数（順番に処理）
    pub requests_per_worker: usize,
    /// 新しいフォームに入れておくメッセージ
    pub initial_message: String,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            requests_per_worker: DEFAULT_REQUESTS_PER_WORKER,
            initial_message: INITIAL_MESSAGE.to_string(),
        }
    }
}

impl HarnessConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// 環境変数での上書き
    ///
    /// `lookup` は `std::env::var(..).ok()` 相当。テストでは HashMap を渡す。
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_WORKERS) {
            self.workers = parse_count(ENV_WORKERS, &v)?;
        }
        if let Some(v) = lookup(ENV_REQUESTS) {
            self.requests_per_worker = parse_count(ENV_REQUESTS, &v)?;
        }
        Ok(self)
    }

    /// 起動時検証（Fail-fast）
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::Invalid("workers must be at least 1".into()));
        }
        Ok(())
    }

    pub fn invocations(&self) -> usize {
        self.workers.saturating_mul(self.requests_per_worker)
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::Invalid(format!("{key}={value:?}: {e}")))
}
