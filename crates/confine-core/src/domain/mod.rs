//! Domain model (request form, outcomes, anomalies).
//!
//! - **form**: 1 リクエスト分の可変フォーム
//! - **outcome**: 上書き結果の比較と Anomaly

pub mod form;
pub mod outcome;

pub use self::form::{INITIAL_MESSAGE, RequestForm};
pub use self::outcome::{Anomaly, Outcome};
