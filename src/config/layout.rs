//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! カードやスタックの座標、オフセットなど。

pub const WINDOW_WIDTH: f32 = 1024.0;
pub const WINDOW_HEIGHT: f32 = 768.0;

pub const CARD_WIDTH: f32 = 75.0; // カードの幅
pub const CARD_HEIGHT: f32 = 110.0; // カードの高さ
pub const CARD_SPACING_Y: f32 = 30.0; // 場札で下のカードとずらす量

// --- 各エリアの開始位置 ---
pub const STOCK_POS_X: f32 = 50.0; // 山札
pub const STOCK_POS_Y: f32 = 50.0;

pub const WASTE_POS_X: f32 = 130.0; // 捨て札置き場
pub const WASTE_POS_Y: f32 = 50.0;

pub const FOUNDATION_START_X: f32 = 400.0; // 組札 (Foundation) の開始X座標
pub const FOUNDATION_START_Y: f32 = 50.0;
pub const FOUNDATION_X_OFFSET: f32 = CARD_WIDTH + 20.0; // 組札同士の間隔

pub const TABLEAU_START_X: f32 = 50.0; // 場札 (Tableau) の開始X座標
pub const TABLEAU_START_Y: f32 = 200.0;
pub const TABLEAU_X_OFFSET: f32 = CARD_WIDTH + 20.0; // 場札の列同士の間隔

// --- ボタン ---
pub const MENU_BUTTON_X: f32 = 410.0;
pub const MENU_BUTTON_START_Y: f32 = 400.0;
pub const MENU_BUTTON_STEP_Y: f32 = 70.0;
pub const MENU_BUTTON_WIDTH: f32 = 200.0;
pub const MENU_BUTTON_HEIGHT: f32 = 50.0;

pub const PLAYING_BUTTON_X: f32 = 800.0;
pub const PLAYING_BUTTON_START_Y: f32 = 150.0;
pub const PLAYING_BUTTON_STEP_Y: f32 = 50.0;
pub const PLAYING_BUTTON_WIDTH: f32 = 150.0;
pub const PLAYING_BUTTON_HEIGHT: f32 = 40.0;

// --- HUD ---
pub const HUD_X: f32 = 800.0;
pub const HUD_START_Y: f32 = 10.0;
pub const HUD_LINE_HEIGHT: f32 = 20.0;
pub const BANNER_X: f32 = 450.0;
pub const BANNER_Y: f32 = 350.0;
