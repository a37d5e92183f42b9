// src/app/drag_handler.rs
//! カードのドラッグ (押す → 動かす → 離す) を扱うよ。

use log::{debug, info};

use crate::components::dragging_info::DraggingInfo;
use crate::components::stack::StackType;

use super::drag_apply_handler;
use super::game_app::{GameApp, Screen};

/// ドラッグ開始。持ち上げられたら true。
///
/// 捨て札は一番上の 1 枚だけ、場札は表向きのカードならそのカードから上を全部持ち上げる。
/// 持ち上げた瞬間に元のパイルから外すけど、下から出てきたカードはまだ表にしない。
pub fn handle_drag_start(app: &mut GameApp, stack: StackType, index: usize, x: f32, y: f32) -> bool {
    cancel_drag(app);

    let pile = app.game.pile(stack);
    let Some(card) = pile.cards.get(index) else {
        return false;
    };
    let liftable = card.is_face_up
        && match stack {
            StackType::Waste => index + 1 == pile.len(),
            StackType::Tableau(_) => true,
            StackType::Stock | StackType::Foundation(_) => false,
        };
    if !liftable {
        debug!("[Drag] {} in {:?} cannot be lifted.", card.label(), stack);
        return false;
    }

    let pos = pile.card_position(index);
    let cards = app.game.pile_mut(stack).cards.split_off(index);
    info!("[Drag] Lifted {} card(s) from {:?} (index {}).", cards.len(), stack, index);
    app.dragging = Some(DraggingInfo {
        cards,
        origin: stack,
        offset_x: x - pos.x,
        offset_y: y - pos.y,
        pointer_x: x,
        pointer_y: y,
    });
    true
}

/// ドラッグ中の位置更新。盤面は変えない。
pub fn update_dragged_position(app: &mut GameApp, x: f32, y: f32) {
    if let Some(info) = app.dragging.as_mut() {
        info.pointer_x = x;
        info.pointer_y = y;
    }
}

/// ドラッグ終了。置ける場所があれば置いて、なければ元に戻す。
pub fn handle_drag_end(app: &mut GameApp, x: f32, y: f32, now_ms: f64) {
    let Some(info) = app.dragging.take() else {
        return;
    };
    if app.paused || app.screen != Screen::Playing {
        return_to_origin(app, info);
        return;
    }
    match drag_apply_handler::find_drop_target(&app.projected_view(), &info, x, y) {
        Some(target) => drag_apply_handler::apply_drop(app, info, target, now_ms),
        None => return_to_origin(app, info),
    }
}

/// ドラッグ中なら取り消して、持ち上げていたカードを元の場所へ戻す。
pub fn cancel_drag(app: &mut GameApp) {
    if let Some(info) = app.dragging.take() {
        return_to_origin(app, info);
    }
}

fn return_to_origin(app: &mut GameApp, info: DraggingInfo) {
    debug!("[Drag] Returning {} card(s) to {:?}.", info.cards.len(), info.origin);
    app.game.pile_mut(info.origin).cards.extend(info.cards);
}
