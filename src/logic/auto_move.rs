// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄✨
//! どのカードがどの組札に移動できるか、ヒントに何を出すか、を判断するんだ。

use log::debug;
use serde::Serialize;

use crate::components::card::Card;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::logic::animation::PendingMove;
use crate::logic::rules;

/// ヒント 1 つ分。「`source` の `card_index` 番目のカードを `foundation` へ」。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hint {
    pub source: StackType,
    pub card_index: usize,
    pub card: Card,
    pub foundation: StackType,
}

/// 反映待ちの手を全部反映した「この先こうなる」盤面を作る。
///
/// 飛んでいる途中のカードは元パイルからもう外れているけど、まだ組札には載っていない。
/// 新しい自動移動の行き先はこの盤面で選ぶので、2 枚の A が同じ空き組札を取り合うことはない。
pub fn projected_state<'a>(state: &GameState, pending: impl IntoIterator<Item = &'a PendingMove>) -> GameState {
    let mut view = state.clone();
    for commit in pending {
        view.push_card(commit.to, commit.card);
    }
    view
}

/// 指定したカードを置ける最初の組札 (0 → 3 の順) を探す。
pub fn find_automatic_foundation_move(view: &GameState, card: &Card) -> Option<StackType> {
    let target = rules::first_eligible_foundation(view, card);
    debug!("[AutoMove] {} -> {:?}", card.label(), target);
    target
}

/// 組札に 1 手で動かせるカードを 1 つだけ探す。
///
/// 調べるのは、捨て札の一番上 (表向きなら) → 場札 0〜6 の一番上の表向きカード、の順。
/// 埋もれているカードは見ないし、先読みもしない。
pub fn find_hint(view: &GameState) -> Option<Hint> {
    let candidates = std::iter::once(StackType::Waste).chain(StackType::tableaus());
    for source in candidates {
        let pile = view.pile(source);
        let Some(card) = pile.top().filter(|c| c.is_face_up) else {
            continue;
        };
        if let Some(foundation) = find_automatic_foundation_move(view, card) {
            let hint = Hint { source, card_index: pile.len() - 1, card: *card, foundation };
            debug!("[Hint] Found {:?}", hint);
            return Some(hint);
        }
    }
    debug!("[Hint] No move to foundation.");
    None
}
