// src/logic/undo.rs

use log::{debug, info};

use crate::components::game_state::GameState;

/// 確定した盤面のスナップショットを積んでおくスタック。
///
/// `GameState` の clone はパイル単位で `Rc` を共有するので、1 手ごとに増えるのは
/// 実際に書き換わったパイルの分だけだよ。
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    snapshots: Vec<GameState>,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいゲーム用。中身を全部捨てて、配った直後の盤面 1 つだけにする。
    pub fn reset(&mut self, initial: &GameState) {
        self.snapshots.clear();
        self.snapshots.push(initial.clone());
        debug!("[Undo] History reset.");
    }

    /// 確定した手のあとに呼ぶ。
    pub fn push(&mut self, state: &GameState) {
        self.snapshots.push(state.clone());
        debug!("[Undo] Pushed snapshot #{}", self.snapshots.len());
    }

    /// 1 手戻す。戻したあとの盤面を返す。
    /// 最初の盤面しか残っていないときは何もしないで None。
    pub fn undo(&mut self) -> Option<GameState> {
        if self.snapshots.len() <= 1 {
            debug!("[Undo] Nothing to undo.");
            return None;
        }
        self.snapshots.pop();
        let restored = self.snapshots.last().cloned();
        info!("[Undo] Restored snapshot #{}", self.snapshots.len());
        restored
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn current(&self) -> Option<&GameState> {
        self.snapshots.last()
    }
}
