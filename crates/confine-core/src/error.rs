use std::path::PathBuf;

use thiserror::Error;

/// StartGate の待機が解放されずに終わった
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("start gate was abandoned before release")]
    Abandoned,
}

/// Strategy のロジック実行中のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandlerError {
    #[error("no request form bound for strategy={strategy}")]
    FormNotBound { strategy: &'static str },

    /// 独自の Strategy が自分の失敗を返すためのもの
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// CLI から見たトップレベルのエラー
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to build runtime: {0}")]
    Runtime(#[source] std::io::Error),
}
