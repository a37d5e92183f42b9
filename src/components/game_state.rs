// src/components/game_state.rs

use std::collections::HashSet;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::{Pile, StackType};

/// デッキの作り方だよ。
///
/// - `Random`: 普通にシャッフル。
/// - `Ordered`: (スート, ランク) 順に並べたまま配る。組札に積みやすいデモ用モード！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DealMode {
    #[default]
    Random,
    Ordered,
}

impl DealMode {
    pub fn toggled(self) -> Self {
        match self {
            DealMode::Random => DealMode::Ordered,
            DealMode::Ordered => DealMode::Random,
        }
    }

    /// HUD に出すラベル。
    pub fn label(self) -> &'static str {
        match self {
            DealMode::Random => "RANDOM MODE",
            DealMode::Ordered => "WINNING MODE",
        }
    }
}

/// 盤面全体の状態だよ。13 個のパイル + スコア + 手数。
///
/// パイルは `Rc` で持っていて、`Clone` しても中身はコピーされない (共有される)。
/// 変更するときは `pile_mut` が `Rc::make_mut` でそのパイルだけ複製するので、
/// Undo 用のスナップショットを積んでも、触っていないパイルは共有されたままになるよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub deal_mode: DealMode,
    pub score: u32,
    pub move_count: u32,
    piles: Vec<Rc<Pile>>,
}

impl GameState {
    /// 全パイルが空の盤面。
    pub fn empty(deal_mode: DealMode) -> Self {
        Self {
            deal_mode,
            score: 0,
            move_count: 0,
            piles: StackType::all().map(|stack| Rc::new(Pile::new(stack))).collect(),
        }
    }

    pub fn pile(&self, stack: StackType) -> &Pile {
        &self.piles[stack.index()]
    }

    /// 書き込み用。共有されていたらこのパイルだけ複製される。
    pub fn pile_mut(&mut self, stack: StackType) -> &mut Pile {
        Rc::make_mut(&mut self.piles[stack.index()])
    }

    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        self.piles.iter().map(|pile| pile.as_ref())
    }

    pub fn stock(&self) -> &Pile {
        self.pile(StackType::Stock)
    }

    pub fn waste(&self) -> &Pile {
        self.pile(StackType::Waste)
    }

    pub fn card_count(&self) -> usize {
        self.piles().map(Pile::len).sum()
    }

    /// 全パイルを合わせるとちょうど 52 種類のカードが 1 枚ずつあるか。
    pub fn is_complete_deck(&self) -> bool {
        let mut seen = HashSet::with_capacity(52);
        let all_unique = self.piles().flat_map(|p| p.cards.iter()).all(|c| seen.insert(c.identity()));
        all_unique && seen.len() == 52
    }

    /// 別のスナップショットと同じパイルを共有しているか (テスト・デバッグ用)。
    pub fn shares_pile_with(&self, other: &GameState, stack: StackType) -> bool {
        Rc::ptr_eq(&self.piles[stack.index()], &other.piles[stack.index()])
    }

    /// カードを 1 枚パイルに積む。
    pub fn push_card(&mut self, stack: StackType, card: Card) {
        self.pile_mut(stack).cards.push(card);
    }
}
