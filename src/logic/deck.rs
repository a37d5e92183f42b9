// src/logic/deck.rs

use log::info;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::game_state::{DealMode, GameState};
use crate::components::stack::{StackType, TABLEAU_COUNT};

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// (スート, ランク) 昇順で並んでいて、全部裏向き。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank, false));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// モードに合わせて 52 枚のデッキを作る。
///
/// - `Random`: 一様シャッフル。
/// - `Ordered`: (スート, ランク) 昇順にソート。
pub fn deal_new_deck_with<R: Rng + ?Sized>(mode: DealMode, rng: &mut R) -> Vec<Card> {
    let mut deck = create_standard_deck();
    match mode {
        DealMode::Random => shuffle_deck(&mut deck, rng),
        DealMode::Ordered => deck.sort_by_key(Card::identity),
    }
    deck
}

pub fn deal_new_deck(mode: DealMode) -> Vec<Card> {
    deal_new_deck_with(mode, &mut thread_rng())
}

/// デッキを 13 個のパイルに配った盤面を作るよ。
///
/// 場札 i (0〜6) には i+1 枚、デッキの先頭から 1 列ずつ順番に配る。
/// 各列で最後に配った 1 枚だけ表向き。残りは全部裏向きで山札へ (最後のカードが一番上)。
pub fn layout_piles(deck: Vec<Card>, mode: DealMode) -> GameState {
    let mut state = GameState::empty(mode);
    let mut cards = deck.into_iter();

    for tableau_index in 0..TABLEAU_COUNT {
        for card_in_tableau in 0..=tableau_index {
            let Some(mut card) = cards.next() else {
                break;
            };
            card.is_face_up = card_in_tableau == tableau_index;
            state.push_card(StackType::Tableau(tableau_index), card);
        }
    }

    for mut card in cards {
        card.is_face_up = false;
        state.push_card(StackType::Stock, card);
    }

    info!("[Deal] Dealt {:?} game: {} cards in stock.", mode, state.stock().len());
    state
}
