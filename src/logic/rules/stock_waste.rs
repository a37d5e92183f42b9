//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

use log::{debug, info};

use crate::components::game_state::GameState;
use crate::components::stack::StackType;

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(state: &GameState) -> bool {
    !state.stock().is_empty()
}

/// ストックが空のときに、ウェストからストックにカードを戻せるかチェックする。
/// 戻せる回数に上限はないよ。
pub fn can_reset_stock_from_waste(state: &GameState) -> bool {
    state.stock().is_empty() && !state.waste().is_empty()
}

/// 山札をクリックしたときの処理。盤面が変わったら true。
///
/// - 山札にカードがある: 最大 `draw_count` 枚 (足りなければある分だけ) を上から取って表にし、
///   取った順に捨て札へ積む。最後に取ったカードが捨て札の一番上になる。手数は枚数に関係なく +1。
/// - 山札が空で捨て札がある: 捨て札を全部逆順で裏向きにして山札へ戻す。手数は増えない。
/// - どっちも空: 何もしない。
pub fn draw_from_stock(state: &mut GameState, draw_count: u8) -> bool {
    if can_deal_from_stock(state) {
        let stock = state.pile_mut(StackType::Stock);
        let take = usize::from(draw_count.max(1)).min(stock.len());
        let split_at = stock.len() - take;
        // 上から 1 枚ずつ pop する順番 = 末尾から逆順
        let mut drawn: Vec<_> = stock.cards.drain(split_at..).rev().collect();
        for card in drawn.iter_mut() {
            card.is_face_up = true;
        }
        state.pile_mut(StackType::Waste).cards.extend(drawn);
        state.move_count += 1;
        info!("[Stock] Drew {} card(s). Stock left: {}", take, state.stock().len());
        true
    } else if can_reset_stock_from_waste(state) {
        let mut recycled = std::mem::take(&mut state.pile_mut(StackType::Waste).cards);
        recycled.reverse();
        for card in recycled.iter_mut() {
            card.is_face_up = false;
        }
        let count = recycled.len();
        state.pile_mut(StackType::Stock).cards = recycled;
        info!("[Stock] Recycled {} card(s) from waste back to stock.", count);
        true
    } else {
        debug!("[Stock] Stock and waste are both empty. Nothing to draw.");
        false
    }
}
