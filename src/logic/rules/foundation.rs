//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::{debug, info};

use crate::components::card::{Card, Rank};
use crate::components::game_state::GameState;
use crate::components::stack::{Pile, StackType};

use super::common::stacks_on_foundation;

/// 組札 1 つあたりの加点。どこから来たカードでも同じ。
pub const FOUNDATION_SCORE: u32 = 10;

/// 指定されたカードを、組札の一番上に置けるかチェックする。
///
/// - 空の組札: A だけ置ける。
/// - そうでなければ: 同じスートで、一番上よりちょうど 1 大きいランク。
pub fn can_place_on_foundation(card: &Card, foundation: &Pile) -> bool {
    let result = match foundation.top() {
        None => card.rank == Rank::Ace,
        Some(top) => stacks_on_foundation(card, top),
    };
    debug!(
        "[Foundation Rule] {} onto {:?} (top: {:?}) -> {}",
        card.label(),
        foundation.stack_type,
        foundation.top().map(Card::label),
        result
    );
    result
}

/// 4 つの組札を 0 → 3 の順に見て、最初に受け入れてくれるものを返す。
pub fn first_eligible_foundation(state: &GameState, card: &Card) -> Option<StackType> {
    StackType::foundations().find(|&f| can_place_on_foundation(card, state.pile(f)))
}

/// 指定パイルの `card_index` にあるカードを、最初に置ける組札へ移す。
///
/// 成功したら スコア +10、手数 +1 して移動先を返す。どこにも置けなければ何もしない。
/// 元パイルの新しい一番上を表にするのは呼び出し側の仕事だよ。
pub fn move_to_first_eligible_foundation(
    state: &mut GameState,
    source: StackType,
    card_index: usize,
) -> Option<StackType> {
    let card = *state.pile(source).cards.get(card_index)?;
    let target = first_eligible_foundation(state, &card)?;

    state.pile_mut(source).cards.remove(card_index);
    state.push_card(target, card);
    state.score += FOUNDATION_SCORE;
    state.move_count += 1;
    info!("[Foundation Rule] Moved {} from {:?} to {:?}.", card.label(), source, target);
    Some(target)
}
