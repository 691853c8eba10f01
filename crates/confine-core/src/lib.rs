//! confine-core
//!
//! 共有ハンドラ上でのリクエスト状態の置き場所を 2 通り比べるハーネス。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（RequestForm, Outcome, Anomaly）
//! - **context**: スレッドに閉じ込めたフォームのスロット（FormContext）
//! - **handler**: Strategy trait と実行ライフサイクル（Action, SafeStrategy, UnsafeStrategy）
//! - **ports**: 抽象化レイヤー（Reporter）
//! - **impls**: 実装（ConsoleReporter, MemoryReporter）
//! - **app**: ハーネス（HarnessBuilder, Harness, StartGate, HarnessConfig）
//! - **error**: エラー型

pub mod app;
pub mod context;
pub mod domain;
pub mod error;
pub mod handler;
pub mod impls;
pub mod ports;

pub use app::{Harness, HarnessBuilder, HarnessConfig, RunReport};
pub use context::FormContext;
pub use domain::{Anomaly, Outcome, RequestForm};
pub use error::{ConfigError, GateError, HandlerError, HarnessError};
pub use handler::{Action, SafeStrategy, Strategy, UnsafeStrategy};
