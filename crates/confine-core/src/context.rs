//! FormContext - スレッドに閉じ込めたフォームの置き場所
//!
//! # 学習ポイント
//! - `thread_local!` によるスレッド単位のストレージ（ロック不要）
//! - RAII ガード (`BoundForm`) による「必ず外す」保証（エラーでも panic でも）
//! - スレッドプールで再利用されるスレッドでは remove しないと値が残り続ける
//!
//! 引数で明示的に渡さず、どこからでも `FormContext::get()` で取れる
//! 「アンビエント」な参照を再現するための仕組み。

use std::cell::RefCell;
use std::marker::PhantomData;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::RequestForm;

static NEXT_THREAD_NUMBER: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static CURRENT_FORM: RefCell<Option<Arc<RequestForm>>> = const { RefCell::new(None) };
    static THREAD_NUMBER: u64 = NEXT_THREAD_NUMBER.fetch_add(1, Ordering::Relaxed);
}

/// 呼び出しスレッドの番号（初回アクセス時に採番、以後そのスレッドでは不変）
pub fn current_thread_number() -> u64 {
    THREAD_NUMBER.with(|n| *n)
}

/// FormContext は呼び出しスレッドにだけ見えるフォームのスロット
///
/// 全操作は暗黙に「いまのスレッド」が対象。スレッドを指定する引数はない。
pub struct FormContext;

impl FormContext {
    pub fn get() -> Option<Arc<RequestForm>> {
        CURRENT_FORM.with(|slot| slot.borrow().clone())
    }

    pub fn set(form: Arc<RequestForm>) {
        let previous = CURRENT_FORM.with(|slot| slot.borrow_mut().replace(form));
        drop(previous);
    }

    /// 何度呼んでもよい。2 回目以降は何もしない
    pub fn remove() {
        let previous = CURRENT_FORM.with(|slot| slot.borrow_mut().take());
        drop(previous);
    }

    /// フォームをセットし、drop 時に元の状態へ戻すガードを返す
    ///
    /// 外側で何も bind されていなければ drop で remove と同じになる。
    pub fn bind(form: Arc<RequestForm>) -> BoundForm {
        let previous = CURRENT_FORM.with(|slot| slot.borrow_mut().replace(form));
        BoundForm {
            previous,
            _not_send: PhantomData,
        }
    }
}

/// `FormContext::bind` のガード
///
/// `!Send` なので bind したスレッド以外で drop されることはない。
#[must_use = "the form is unbound as soon as the guard is dropped"]
pub struct BoundForm {
    previous: Option<Arc<RequestForm>>,
    _not_send: PhantomData<*const ()>,
}

impl Drop for BoundForm {
    fn drop(&mut self) {
        let previous = self.previous.take();
        // スレッド終了処理中は TLS が既に破棄されていることがある
        let _ = CURRENT_FORM.try_with(|slot| *slot.borrow_mut() = previous);
    }
}
