//! StartGate - 一度だけ開くスタートゲート（CountDownLatch 相当）
//!
//! # 学習ポイント
//! - Mutex + Condvar による blocking wait
//! - `notify_all` で待機中の全スレッドを同時に解放
//! - 解放されないまま捨てられた場合は Abandoned で待機を打ち切る

use std::sync::{Condvar, Mutex, PoisonError};

use crate::error::GateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Closed,
    Open,
    Abandoned,
}

/// StartGate は全 worker を同時に走らせるためのゲート
///
/// # 状態遷移
/// - Closed → Open（release）
/// - Closed → Abandoned（abandon）
/// - Open / Abandoned は終端。以後の release / abandon は無視される
#[derive(Debug)]
pub struct StartGate {
    state: Mutex<GateState>,
    changed: Condvar,
}

impl StartGate {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GateState::Closed),
            changed: Condvar::new(),
        }
    }

    /// ゲートを開く。最初の 1 回だけ効く
    pub fn release(&self) {
        self.transition(GateState::Open);
    }

    /// 開かないまま閉じる。待機中の worker には GateError::Abandoned が返る
    pub fn abandon(&self) {
        self.transition(GateState::Abandoned);
    }

    /// ゲートが開くまでブロックする
    pub fn wait(&self) -> Result<(), GateError> {
        let guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let guard = self
            .changed
            .wait_while(guard, |state| *state == GateState::Closed)
            .unwrap_or_else(PoisonError::into_inner);

        match *guard {
            GateState::Open => Ok(()),
            GateState::Abandoned | GateState::Closed => Err(GateError::Abandoned),
        }
    }

    fn transition(&self, to: GateState) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == GateState::Closed {
            *state = to;
            self.changed.notify_all();
        }
    }
}

impl Default for StartGate {
    fn default() -> Self {
        Self::new()
    }
}

/// drop 時に、まだ開いていなければゲートを abandon するガード
///
/// ハーネスの future が release 前に drop されても worker が永久に待たないようにする。
pub struct AbandonOnDrop<'a>(pub &'a StartGate);

impl Drop for AbandonOnDrop<'_> {
    fn drop(&mut self) {
        self.0.abandon();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn release_wakes_all_waiters() {
        let gate = Arc::new(StartGate::new());

        let waiters: Vec<_> = (0..8)
            .map(|_| {
                let gate = Arc::clone(&gate);
                thread::spawn(move || gate.wait())
            })
            .collect();

        thread::sleep(Duration::from_millis(50));
        gate.release();

        for w in waiters {
            assert_eq!(w.join().unwrap(), Ok(()));
        }
    }

    #[test]
    fn wait_after_release_returns_immediately() {
        let gate = StartGate::new();
        gate.release();
        assert_eq!(gate.wait(), Ok(()));
    }

    #[test]
    fn abandon_interrupts_waiters() {
        let gate = Arc::new(StartGate::new());
        let waiter = {
            let gate = Arc::clone(&gate);
            thread::spawn(move || gate.wait())
        };

        thread::sleep(Duration::from_millis(50));
        gate.abandon();

        assert_eq!(waiter.join().unwrap(), Err(GateError::Abandoned));
        // 終端状態なので後から release しても開かない
        gate.release();
        assert_eq!(gate.wait(), Err(GateError::Abandoned));
    }

    #[test]
    fn abandon_after_release_is_ignored() {
        let gate = StartGate::new();
        gate.release();
        {
            let _guard = AbandonOnDrop(&gate);
        }
        assert_eq!(gate.wait(), Ok(()));
    }
}
