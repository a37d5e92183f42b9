// src/app/drag_apply_handler.rs
//! ドラッグを離した場所の判定と、置けたときの盤面更新。

use log::info;

use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::GameState;
use crate::components::stack::StackType;
use crate::logic::rules;

use super::game_app::GameApp;

/// 離した位置 `(x, y)` から置き先を決める。
///
/// 1 枚だけなら、まずポインタの下の組札を見る。だめなら (or 複数枚なら) 場札の次の置き場所を見る。
/// 持ち上げた元の場札も候補に入る。そこへ置き直しても 1 手。
/// `view` は飛んでいる途中のカードも組札に載せた盤面を渡すこと。
pub fn find_drop_target(view: &GameState, info: &DraggingInfo, x: f32, y: f32) -> Option<StackType> {
    let first = info.cards.first()?;
    if info.is_single_card() {
        let foundation = StackType::foundations().find(|&f| {
            let pile = view.pile(f);
            pile.card_rect(0).contains(x, y) && rules::can_place_on_foundation(first, pile)
        });
        if foundation.is_some() {
            return foundation;
        }
    }
    StackType::tableaus().find(|&t| {
        let pile = view.pile(t);
        pile.drop_rect().contains(x, y) && rules::can_move_sequence(&info.cards, pile)
    })
}

/// 置き先が決まったドラッグを盤面に反映する。
pub fn apply_drop(app: &mut GameApp, info: DraggingInfo, target: StackType, now_ms: f64) {
    let count = info.cards.len();
    app.game.pile_mut(target).cards.extend(info.cards);
    app.game.move_count += 1;
    if app.game.pile_mut(info.origin).reveal_top() {
        info!("[Drag] Revealed new top of {:?}.", info.origin);
    }
    info!("[Drag] Placed {} card(s) from {:?} onto {:?}.", count, info.origin, target);
    app.hint = None;
    app.sound.play_move_sound();
    app.after_committed_move(now_ms);
}
