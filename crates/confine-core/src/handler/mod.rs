//! Handler - Strategy と実行ライフサイクル
//!
//! # 学習ポイント
//! - 継承の代わりに Strategy trait を Action に注入する
//! - テンプレートメソッド: bind → execute_logic → unbind
//! - unbind は RAII ガードの drop で行うので、ロジックの成否に依存しない
//!
//! # ライフサイクル
//! ```text
//! Idle → Bound → Executing → Unbound (→ Idle)
//! ```

pub mod safe;
pub mod shared;

pub use self::safe::SafeStrategy;
pub use self::shared::UnsafeStrategy;

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::context::FormContext;
use crate::domain::{Outcome, RequestForm};
use crate::error::HandlerError;

/// Strategy はリクエストごとのロジックを提供する
///
/// Action 1 つを全 worker が共有するので `Send + Sync` が必要。
/// 可変な状態を持つなら、それはスレッド間で共有されることになる。
pub trait Strategy: Send + Sync {
    /// ログとコンソール出力に使う名前
    fn name(&self) -> &'static str;

    /// Bound に入った直後に呼ばれる。デフォルトは何もしない
    fn on_bind(&self, _form: &Arc<RequestForm>) {}

    /// Executing で呼ばれるロジック本体
    fn execute_logic(&self) -> Result<Outcome, HandlerError> {
        Ok(Outcome::Clean)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Bound,
    Executing,
    Unbound,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Idle => "idle",
            Phase::Bound => "bound",
            Phase::Executing => "executing",
            Phase::Unbound => "unbound",
        };
        f.write_str(s)
    }
}

/// Action は全 worker で共有される 1 つのハンドラ
///
/// # 使用例
/// ```ignore
/// let action = Arc::new(Action::new(SafeStrategy));
/// let outcome = action.execute(Arc::new(RequestForm::new(INITIAL_MESSAGE)))?;
/// ```
pub struct Action<S> {
    strategy: S,
}

impl<S: Strategy> Action<S> {
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    pub fn name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// フォーム 1 件を処理する
    ///
    /// `execute_logic` が Err を返しても panic しても、戻る前に FormContext は空に戻る。
    pub fn execute(&self, form: Arc<RequestForm>) -> Result<Outcome, HandlerError> {
        let strategy = self.strategy.name();
        trace!(strategy, phase = %Phase::Idle);

        let bound = FormContext::bind(Arc::clone(&form));
        self.strategy.on_bind(&form);
        trace!(strategy, phase = %Phase::Bound);

        trace!(strategy, phase = %Phase::Executing);
        let result = self.strategy.execute_logic();

        drop(bound);
        trace!(strategy, phase = %Phase::Unbound);

        result
    }
}
