//! App - アプリケーション層
//!
//! # 主要コンポーネント
//! - **HarnessBuilder**: ハーネスの構築と設定検証
//! - **Harness**: 1 つの Action を多数の worker で共有して実行
//! - **WorkerLoop**: ゲート待ち → リクエストを順番に処理
//! - **StartGate**: 全 worker を同時に走らせるゲート
//! - **RunReport**: 実行結果の集計

pub mod builder;
pub mod config;
pub mod gate;
pub mod harness;
pub mod status;
mod worker_loop;

// 主要な型を再エクスポート
pub use self::builder::HarnessBuilder;
pub use self::config::HarnessConfig;
pub use self::gate::StartGate;
pub use self::harness::Harness;
pub use self::status::RunReport;
