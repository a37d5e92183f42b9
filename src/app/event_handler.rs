// src/app/event_handler.rs
//! ユーザー入力 (ポインタ・キー) の型と、クリック位置の当たり判定だよ。

use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::game_state::GameState;
use crate::components::position::Rect;
use crate::components::stack::StackType;
use crate::config::layout::{CARD_HEIGHT, CARD_WIDTH};

/// 左ボタン。ゲーム操作に使うのはこれだけ。
pub const PRIMARY_BUTTON: i16 = 0;

/// ゲームで使うキー。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// p: 一時停止 / 再開
    Pause,
    /// w: RANDOM ⇔ WINNING モードを切り替えて配り直し
    ToggleMode,
    /// d: 引く枚数 1 ⇔ 3
    ToggleDraw,
    /// u
    Undo,
    /// r
    Restart,
    /// h
    Hint,
    /// a
    AutoComplete,
    Other,
}

impl Key {
    /// ブラウザの `KeyboardEvent.key` / `KeyboardEvent.code` どっちの形でも受け付ける。
    pub fn from_code(code: &str) -> Key {
        let name = code.strip_prefix("Key").unwrap_or(code);
        match name.to_ascii_lowercase().as_str() {
            "p" => Key::Pause,
            "w" => Key::ToggleMode,
            "d" => Key::ToggleDraw,
            "u" => Key::Undo,
            "r" => Key::Restart,
            "h" => Key::Hint,
            "a" => Key::AutoComplete,
            _ => Key::Other,
        }
    }
}

/// シェル (ブラウザ側) から届く入力イベント。座標はキャンバスのピクセル座標。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32, button: i16, clicks: u32 },
    PointerMove { x: f32, y: f32 },
    PointerUp { x: f32, y: f32, button: i16 },
    KeyDown(Key),
}

/// クリックされた要素の種類を表す Enum だよ！
/// カードがクリックされたのか、それともスタックの空きスペースがクリックされたのかを示すんだ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// カードがクリックされた場合。どのパイルの何番目か。
    Card { stack: StackType, index: usize },
    /// スタックの空きエリアがクリックされた場合。
    Stack(StackType),
}

/// `(x, y)` にあるカードを探す。重なっているときは一番手前 (上) のカードが当たる。
///
/// 場札は下にずらして並べているので、上のカードから順に矩形を調べる。
/// ほかのパイルは一番上のカードしか見えないので、そのカードだけ。
pub fn find_card_at_point(state: &GameState, x: f32, y: f32) -> Option<(StackType, usize)> {
    state.piles().find_map(|pile| {
        let top_index = pile.len().checked_sub(1)?;
        if pile.stack_type.is_tableau() {
            (0..=top_index)
                .rev()
                .find(|&i| pile.card_rect(i).contains(x, y))
                .map(|i| (pile.stack_type, i))
        } else {
            pile.card_rect(top_index).contains(x, y).then_some((pile.stack_type, top_index))
        }
    })
}

/// クリックされた座標から、カード or パイルの枠を特定する。何もなければ None。
pub fn find_click_target(state: &GameState, x: f32, y: f32) -> Option<ClickTarget> {
    if let Some((stack, index)) = find_card_at_point(state, x, y) {
        debug!("[Input] Hit card #{} of {:?} at ({}, {})", index, stack, x, y);
        return Some(ClickTarget::Card { stack, index });
    }
    StackType::all()
        .find(|stack| Rect::at(stack.anchor(), CARD_WIDTH, CARD_HEIGHT).contains(x, y))
        .map(ClickTarget::Stack)
}
