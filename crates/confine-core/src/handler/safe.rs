//! SafeStrategy - FormContext 経由でフォームを扱う

use crate::context::FormContext;
use crate::domain::Outcome;
use crate::error::HandlerError;

use super::Strategy;

/// 上書きに使う期待値
pub const MESSAGE: &str = "the message was overwritten";

/// SafeStrategy は自分のスレッドで bind したフォームだけを触る
///
/// フォームは FormContext から取るので、他スレッドの書き込みが
/// 上書きと読み戻しの間に割り込むことはない。Anomaly が出たら閉じ込めの不具合。
#[derive(Debug, Default, Clone, Copy)]
pub struct SafeStrategy;

impl Strategy for SafeStrategy {
    fn name(&self) -> &'static str {
        "SafeStrategy"
    }

    fn execute_logic(&self) -> Result<Outcome, HandlerError> {
        let form = FormContext::get().ok_or(HandlerError::FormNotBound {
            strategy: self.name(),
        })?;

        form.set_message(MESSAGE);
        let message = form.message();

        Ok(Outcome::compare(message, MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{INITIAL_MESSAGE, RequestForm};
    use crate::handler::Action;
    use std::sync::Arc;

    #[test]
    fn overwrites_the_bound_form() {
        let action = Action::new(SafeStrategy);
        let form = Arc::new(RequestForm::new(INITIAL_MESSAGE));

        let outcome = action.execute(Arc::clone(&form)).unwrap();

        assert_eq!(outcome, Outcome::Clean);
        assert_eq!(form.message(), MESSAGE);
    }

    #[test]
    fn logic_without_bound_form_fails() {
        let err = SafeStrategy.execute_logic().unwrap_err();
        assert_eq!(
            err,
            HandlerError::FormNotBound {
                strategy: "SafeStrategy"
            }
        );
    }
}
