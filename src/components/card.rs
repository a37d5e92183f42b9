// src/components/card.rs

// serde を使う宣言！カード情報を JSON スナップショットに書き出す時に使うよ。
use serde::{Deserialize, Serialize};

/// カードのスート（マーク）を表す列挙型だよ！♠️❤️♦️♣️
///
/// 宣言順がそのまま並び順 (`Ord`) になるよ。Ordered モードのデッキは
/// この順番 → ランク昇順で並ぶから、順番を入れ替えるとデッキも変わっちゃうので注意！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spade,   // ♠️
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
}

/// カードの色（赤か黒か）だよ。場札のルールで使う！
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardColor {
    Red,
    Black,
}

impl Suit {
    /// スートからカードの色を取得する関数。
    pub fn color(self) -> CardColor {
        match self {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }

    /// 描画用の記号。
    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Spade => "♠",
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// `rank as u8` で 1〜13 の値が取れるようにしてあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

impl Rank {
    /// 1〜13 の数値を返すよ。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 1〜13 の数値からランクを作る。範囲外なら None。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// 表示用の文字列。1 → "A", 11 → "J" みたいな感じ！
    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// 全スート (並び順どおり)。
pub const ALL_SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club];

/// 全ランク (A → K)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものだよ！🃏
///
/// - `suit` / `rank`: カードの正体。一度作ったら変わらない。
/// - `is_face_up`: 表向きかどうか。これだけはゲーム中に変わるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank, is_face_up: bool) -> Self {
        Self { suit, rank, is_face_up }
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    /// 表裏を無視した (スート, ランク) の組。52枚チェックで使うよ。
    pub fn identity(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }

    /// "A♠" とか "10♥" みたいな表示用ラベル。
    pub fn label(&self) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol())
    }
}
