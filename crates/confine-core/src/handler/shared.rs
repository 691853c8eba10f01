//! UnsafeStrategy - 全スレッドで共有されるフィールド経由でフォームを扱う
//!
//! # 学習ポイント
//! - これは意図的なアンチパターン（比較対象のネガティブケース）
//! - Mutex はフィールドへの 1 アクセスだけを守る。上書き → 読み戻しの組は守らない
//! - 未定義動作にはならないが、ロジックとしての競合（race condition）は起きる

use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use crate::domain::{Outcome, RequestForm};
use crate::error::HandlerError;

use super::Strategy;

/// 上書きに使う期待値
pub const MESSAGE: &str = "the message was overwritten";

/// UnsafeStrategy は bind されたフォームを共有フィールドに記録する
///
/// Action は全 worker で 1 つなので、このフィールドも全 worker で 1 つ。
/// 自分が上書きしてから読み戻すまでの間に別 worker が bind すると、
/// 読み戻したフォームは別物になり、初期メッセージが見える。
#[derive(Debug, Default)]
pub struct UnsafeStrategy {
    current_form: Mutex<Option<Arc<RequestForm>>>,
}

impl UnsafeStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    fn current_form(&self) -> Result<Arc<RequestForm>, HandlerError> {
        self.current_form
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(HandlerError::FormNotBound {
                strategy: self.name(),
            })
    }
}

impl Strategy for UnsafeStrategy {
    fn name(&self) -> &'static str {
        "UnsafeStrategy"
    }

    fn on_bind(&self, form: &Arc<RequestForm>) {
        *self
            .current_form
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(form));
    }

    fn execute_logic(&self) -> Result<Outcome, HandlerError> {
        // 毎回フィールドを読み直す
        self.current_form()?.set_message(MESSAGE);
        // 上書きと読み戻しの間で一度スケジューラに戻し、割り込みの機会を広げる
        // yield_now はヒントに過ぎず、1 CPU だとほぼ切り替わらない
        thread::sleep(Duration::from_micros(1));
        let message = self.current_form()?.message();

        Ok(Outcome::compare(message, MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::INITIAL_MESSAGE;
    use crate::handler::Action;

    #[test]
    fn single_caller_sees_its_own_overwrite() {
        let action = Action::new(UnsafeStrategy::new());
        let form = Arc::new(RequestForm::new(INITIAL_MESSAGE));

        let outcome = action.execute(Arc::clone(&form)).unwrap();

        assert_eq!(outcome, Outcome::Clean);
        assert_eq!(form.message(), MESSAGE);
    }

    #[test]
    fn rebinding_between_write_and_read_is_an_anomaly() {
        let strategy = UnsafeStrategy::new();
        let mine = Arc::new(RequestForm::new(INITIAL_MESSAGE));
        let theirs = Arc::new(RequestForm::new(INITIAL_MESSAGE));

        strategy.on_bind(&mine);
        strategy.current_form().unwrap().set_message(MESSAGE);
        // 別 worker の bind が割り込んだ状況
        strategy.on_bind(&theirs);
        let observed = strategy.current_form().unwrap().message();

        assert!(Outcome::compare(observed, MESSAGE).is_anomaly());
    }

    #[test]
    fn field_outlives_the_execution() {
        let action = Action::new(UnsafeStrategy::new());
        let form = Arc::new(RequestForm::new(INITIAL_MESSAGE));
        action.execute(Arc::clone(&form)).unwrap();

        // FormContext は空に戻るが、共有フィールドは最後のフォームを握ったまま
        let kept = action.strategy().current_form().unwrap();
        assert!(Arc::ptr_eq(&kept, &form));
    }

    #[test]
    fn logic_before_any_bind_fails() {
        let err = UnsafeStrategy::new().execute_logic().unwrap_err();
        assert_eq!(
            err,
            HandlerError::FormNotBound {
                strategy: "UnsafeStrategy"
            }
        );
    }
}
