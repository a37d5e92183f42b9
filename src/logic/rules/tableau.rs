//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use itertools::Itertools;
use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;

use super::common::stacks_on_tableau;

/// 指定されたカードが、場札の一番上に置けるかチェックする。
///
/// - 空の場札: K だけ置ける。
/// - そうでなければ: 色が違って、ランクがちょうど 1 小さいこと。
pub fn can_place_on_tableau(card: &Card, tableau: &Pile) -> bool {
    let result = match tableau.top() {
        None => card.rank == Rank::King,
        Some(top) => stacks_on_tableau(card, top),
    };
    debug!(
        "[Tableau Rule] {} onto {:?} (top: {:?}) -> {}",
        card.label(),
        tableau.stack_type,
        tableau.top().map(Card::label),
        result
    );
    result
}

/// 持ち上げたカードの並び (`run`) をまとめて場札に置けるかチェックする。
///
/// 並びの中の隣り合うカードが全部「色違い・1 ずつ減る」になっていて、
/// さらに先頭のカードが `can_place_on_tableau` を満たすこと。
/// どこか 1 か所でも同じ色が隣り合っていたら、先頭が置けても不可だよ。
pub fn can_move_sequence(run: &[Card], tableau: &Pile) -> bool {
    let Some(first) = run.first() else {
        return false;
    };
    let run_is_valid = run
        .iter()
        .tuple_windows()
        .all(|(lower, upper)| stacks_on_tableau(upper, lower));
    if !run_is_valid {
        debug!("[Tableau Rule] Run starting with {} is not alternating/descending.", first.label());
        return false;
    }
    can_place_on_tableau(first, tableau)
}
