//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::Card;

/// `upper` を `lower` の上に場札のルールで重ねられるか。
/// 色が違って、ランクがちょうど 1 小さいこと。
pub(crate) fn stacks_on_tableau(upper: &Card, lower: &Card) -> bool {
    upper.color() != lower.color() && upper.rank.value() + 1 == lower.rank.value()
}

/// `card` を `top` の上に組札のルールで重ねられるか。
/// 同じスートで、ランクがちょうど 1 大きいこと。
pub(crate) fn stacks_on_foundation(card: &Card, top: &Card) -> bool {
    card.suit == top.suit && card.rank.value() == top.rank.value() + 1
}
