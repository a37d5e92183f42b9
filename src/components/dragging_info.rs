// src/components/dragging_info.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::position::Position;
use crate::components::stack::StackType;

/// ドラッグ中のカードに関する情報だよ！🖱️➡️🃏
///
/// 押した瞬間に元のパイルから取り外したカードはここに入っていて、
/// 離した時に「どこかに置く」か「元に戻す」かのどちらかで必ず消費される。
/// GameState には含まれない一時的な状態。
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DraggingInfo {
    /// 持ち上げたカード。先頭が一番下 (置き先の一番上と比べるカード)。
    pub cards: Vec<Card>,
    /// 持ち上げる前にいたパイル。
    pub origin: StackType,
    /// 押した位置とカード左上とのずれ。
    pub offset_x: f32,
    pub offset_y: f32,
    /// 今のポインタ位置。
    pub pointer_x: f32,
    pub pointer_y: f32,
}

impl DraggingInfo {
    /// 一番下のカードを描く左上の位置。
    pub fn draw_origin(&self) -> Position {
        Position::new(self.pointer_x - self.offset_x, self.pointer_y - self.offset_y)
    }

    pub fn is_single_card(&self) -> bool {
        self.cards.len() == 1
    }
}
