use std::path::PathBuf;

use anyhow::Result;
use confine_core::{Harness, HarnessConfig, HarnessError};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout はコンソール出力（start/end/anomaly 行）専用
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// (A) 設定: デフォルト → TOML（第 1 引数）→ 環境変数
fn load_config() -> Result<HarnessConfig, HarnessError> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            HarnessConfig::load(&path)?
        }
        None => HarnessConfig::default(),
    };
    Ok(config.with_overrides(|key| std::env::var(key).ok())?)
}

fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let harness = Harness::builder().config(config).build()?;

    // (B) worker 全員がゲート待ちでブロックできるだけの blocking スレッドを用意
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .max_blocking_threads(harness.config().workers.max(1))
        .build()
        .map_err(HarnessError::Runtime)?;

    // (C) UnsafeStrategy → SafeStrategy
    let reports = runtime.block_on(harness.run_all());

    for report in &reports {
        tracing::info!(report = %serde_json::to_string(report)?, "summary");
    }

    // Anomaly は診断情報なので終了コードは 0
    Ok(())
}
