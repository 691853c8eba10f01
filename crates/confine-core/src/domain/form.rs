//! RequestForm - リクエストごとに生成されるフォーム
//!
//! # 学習ポイント
//! - `Arc<RequestForm>` で worker / FormContext / 共有フィールドから同じフォームを参照する
//! - 共有フィールド経由で他スレッドから書き込まれる可能性があるので、
//!   message は Mutex で 1 アクセス単位だけ保護する（読み書きの組は保護しない）

use std::sync::{Mutex, PoisonError};

/// worker がフォーム生成時に入れておく初期メッセージ
pub const INITIAL_MESSAGE: &str = "there is a message";

/// RequestForm は message を 1 つだけ持つ値オブジェクト
#[derive(Debug, Default)]
pub struct RequestForm {
    message: Mutex<String>,
}

impl RequestForm {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Mutex::new(message.into()),
        }
    }

    pub fn message(&self) -> String {
        self.message
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_message(&self, message: impl Into<String>) {
        *self.message.lock().unwrap_or_else(PoisonError::into_inner) = message.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_message_overwrites() {
        let form = RequestForm::new(INITIAL_MESSAGE);
        assert_eq!(form.message(), INITIAL_MESSAGE);

        form.set_message("overwritten");
        assert_eq!(form.message(), "overwritten");
    }

    #[test]
    fn default_form_is_empty() {
        assert_eq!(RequestForm::default().message(), "");
    }
}
