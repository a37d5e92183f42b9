// src/components/stack.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::position::{Position, Rect};
use crate::config::layout::{
    CARD_HEIGHT, CARD_SPACING_Y, CARD_WIDTH, FOUNDATION_START_X, FOUNDATION_START_Y, FOUNDATION_X_OFFSET, STOCK_POS_X, STOCK_POS_Y,
    TABLEAU_START_X, TABLEAU_START_Y, TABLEAU_X_OFFSET, WASTE_POS_X, WASTE_POS_Y,
};

pub const FOUNDATION_COUNT: u8 = 4;
pub const TABLEAU_COUNT: u8 = 7;
/// Stock 1 + Waste 1 + Foundation 4 + Tableau 7
pub const PILE_COUNT: usize = 13;

/// カードが存在する場所の種類を示す Enum だよ。
/// 山札なのか、場札の何列目なのか、を区別するのに使う。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 山札 (Stock)。裏向きのカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。番号 (0-3) を持つ。スートは固定じゃなくて、最初に置かれた A で決まるよ。
    Foundation(u8),
    /// 場札 (Tableau)。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
}

impl StackType {
    /// GameState 内の並び順 (Stock, Waste, Foundation 0-3, Tableau 0-6) でのインデックス。
    pub fn index(self) -> usize {
        match self {
            StackType::Stock => 0,
            StackType::Waste => 1,
            StackType::Foundation(i) => 2 + usize::from(i),
            StackType::Tableau(i) => 6 + usize::from(i),
        }
    }

    /// 13 個の固定順。スキャン順はいつもこれ。
    pub fn all() -> impl Iterator<Item = StackType> {
        [StackType::Stock, StackType::Waste]
            .into_iter()
            .chain(Self::foundations())
            .chain(Self::tableaus())
    }

    pub fn foundations() -> impl Iterator<Item = StackType> {
        (0..FOUNDATION_COUNT).map(StackType::Foundation)
    }

    pub fn tableaus() -> impl Iterator<Item = StackType> {
        (0..TABLEAU_COUNT).map(StackType::Tableau)
    }

    /// 画面上の固定アンカー (空のスタックの枠が描かれる左上の位置)。
    pub fn anchor(self) -> Position {
        match self {
            StackType::Stock => Position::new(STOCK_POS_X, STOCK_POS_Y),
            StackType::Waste => Position::new(WASTE_POS_X, WASTE_POS_Y),
            StackType::Foundation(i) => Position::new(
                FOUNDATION_START_X + f32::from(i) * FOUNDATION_X_OFFSET,
                FOUNDATION_START_Y,
            ),
            StackType::Tableau(i) => Position::new(
                TABLEAU_START_X + f32::from(i) * TABLEAU_X_OFFSET,
                TABLEAU_START_Y,
            ),
        }
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }
}

/// カードの山 (パイル) 1つ分。
///
/// `cards` の末尾が「一番上」だよ。普段さわれるのは一番上だけだけど、
/// 場札は下のほうの表向きの並びもまとめて持ち上げられる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pile {
    pub stack_type: StackType,
    pub anchor: Position,
    pub cards: Vec<Card>,
}

impl Pile {
    pub fn new(stack_type: StackType) -> Self {
        Self { stack_type, anchor: stack_type.anchor(), cards: Vec::new() }
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// `index` 番目のカードを描く左上の位置。場札だけ下にずらして並べる。
    pub fn card_position(&self, index: usize) -> Position {
        if self.stack_type.is_tableau() {
            self.anchor.offset(0.0, index as f32 * CARD_SPACING_Y)
        } else {
            self.anchor
        }
    }

    pub fn card_rect(&self, index: usize) -> Rect {
        Rect::at(self.card_position(index), CARD_WIDTH, CARD_HEIGHT)
    }

    /// 次のカードが置かれる場所の矩形。ドロップ判定に使う。
    pub fn drop_rect(&self) -> Rect {
        self.card_rect(self.len())
    }

    /// 一番上のカードが裏向きなら表にする。表にしたら true。
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(card) if !card.is_face_up => {
                card.is_face_up = true;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    #[test]
    fn fixed_pile_order() {
        let all: Vec<StackType> = StackType::all().collect();
        assert_eq!(all.len(), PILE_COUNT);
        for (expected, stack) in all.iter().enumerate() {
            assert_eq!(stack.index(), expected, "{:?} の並び順がずれてる", stack);
        }
        assert_eq!(all[2], StackType::Foundation(0));
        assert_eq!(all[12], StackType::Tableau(6));
    }

    #[test]
    fn reveal_top_only_flips_face_down() {
        let mut pile = Pile::new(StackType::Tableau(2));
        assert!(!pile.reveal_top(), "空なら何もしない");

        pile.cards.push(Card::new(Suit::Heart, Rank::Five, false));
        assert!(pile.reveal_top());
        assert!(pile.top().map_or(false, |c| c.is_face_up));
        assert!(!pile.reveal_top(), "もう表向きなので false");
    }

    #[test]
    fn anchors_follow_layout() {
        assert_eq!(StackType::Stock.anchor(), Position::new(50.0, 50.0));
        assert_eq!(StackType::Foundation(1).anchor(), Position::new(495.0, 50.0));
        assert_eq!(StackType::Tableau(6).anchor(), Position::new(620.0, 200.0));
    }

    #[test]
    fn tableau_cards_fan_downwards() {
        let mut tableau = Pile::new(StackType::Tableau(0));
        tableau.cards.push(Card::new(Suit::Spade, Rank::King, true));
        tableau.cards.push(Card::new(Suit::Heart, Rank::Queen, true));
        assert_eq!(tableau.card_position(1), Position::new(50.0, 230.0));
        assert_eq!(tableau.drop_rect(), Rect::new(50.0, 260.0, 75.0, 110.0));

        let mut waste = Pile::new(StackType::Waste);
        waste.cards.push(Card::new(Suit::Club, Rank::Two, true));
        assert_eq!(waste.card_position(0), waste.anchor, "捨て札は重ねて置く");
    }
}
