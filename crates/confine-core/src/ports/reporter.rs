//! Reporter port - 実行イベントの出力先
//!
//! # 実装
//! - **ConsoleReporter**: 標準出力へ書く（本番用）
//! - **MemoryReporter**: メモリに記録する（テスト用）

use crate::domain::Anomaly;

/// Reporter はハーネスの実行イベントを受け取る
///
/// # Thread Safety
/// - `anomaly()` は worker スレッドから並行に呼ばれる
pub trait Reporter: Send + Sync {
    fn run_started(&self, strategy: &str);

    fn run_finished(&self, strategy: &str);

    fn anomaly(&self, anomaly: &Anomaly);
}
