//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::game_state::GameState;
use crate::components::stack::StackType;

/// ゲームのクリア条件を判定する。
///
/// 山札・捨て札・7 つの場札が全部空ならクリア。
/// 52 枚は必ずどこかのパイルにあるので、組札は数えなくていい。
pub fn check_win_condition(state: &GameState) -> bool {
    state.stock().is_empty()
        && state.waste().is_empty()
        && StackType::tableaus().all(|t| state.pile(t).is_empty())
}
