//! Ports - 抽象化レイヤー
//!
//! ハーネスの外側（コンソール、テスト用の記録先）への出力をここで抽象化します。

pub mod reporter;

pub use self::reporter::Reporter;
