// src/app/button.rs
//! 画面ごとのボタン。見た目の状態 (通常・ホバー・押下) もここで持つよ。

use serde::Serialize;

use crate::components::position::Rect;
use crate::config::layout::{
    MENU_BUTTON_HEIGHT, MENU_BUTTON_START_Y, MENU_BUTTON_STEP_Y, MENU_BUTTON_WIDTH, MENU_BUTTON_X,
    PLAYING_BUTTON_HEIGHT, PLAYING_BUTTON_START_Y, PLAYING_BUTTON_STEP_Y, PLAYING_BUTTON_WIDTH,
    PLAYING_BUTTON_X,
};

use super::game_app::Screen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ButtonState {
    Normal,
    Hovered,
    Pressed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ButtonAction {
    // メニュー
    StartGame,
    OpenSettings,
    OpenStatistics,
    Quit,
    // 設定・統計
    ToggleSound,
    ResetStats,
    Back,
    // プレイ中
    Restart,
    Undo,
    ToggleDraw,
    TogglePause,
    Hint,
    AutoComplete,
}

impl ButtonAction {
    pub fn label(self, paused: bool) -> &'static str {
        match self {
            ButtonAction::StartGame => "Start Game",
            ButtonAction::OpenSettings => "Settings",
            ButtonAction::OpenStatistics => "Statistics",
            ButtonAction::Quit => "Quit",
            ButtonAction::ToggleSound => "Toggle Sound",
            ButtonAction::ResetStats => "Reset Stats",
            ButtonAction::Back => "Back",
            ButtonAction::Restart => "Restart",
            ButtonAction::Undo => "Undo",
            ButtonAction::ToggleDraw => "Toggle Draw",
            ButtonAction::TogglePause if paused => "Resume",
            ButtonAction::TogglePause => "Pause",
            ButtonAction::Hint => "Hint",
            ButtonAction::AutoComplete => "Auto-Complete",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Button {
    pub action: ButtonAction,
    pub rect: Rect,
    pub state: ButtonState,
}

impl Button {
    pub fn new(action: ButtonAction, rect: Rect) -> Self {
        Self { action, rect, state: ButtonState::Normal }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.rect.contains(x, y)
    }

    /// ポインタが動いたとき。押しっぱなしの間は Pressed のまま。
    pub fn update_hover(&mut self, x: f32, y: f32) {
        self.state = match (self.state, self.contains(x, y)) {
            (ButtonState::Pressed, true) => ButtonState::Pressed,
            (_, true) => ButtonState::Hovered,
            (_, false) => ButtonState::Normal,
        };
    }

    pub fn release(&mut self, x: f32, y: f32) {
        self.state = if self.contains(x, y) { ButtonState::Hovered } else { ButtonState::Normal };
    }
}

fn column(actions: &[ButtonAction], x: f32, start_y: f32, step_y: f32, width: f32, height: f32) -> Vec<Button> {
    actions
        .iter()
        .enumerate()
        .map(|(i, &action)| Button::new(action, Rect::new(x, start_y + i as f32 * step_y, width, height)))
        .collect()
}

fn menu_column(actions: &[ButtonAction]) -> Vec<Button> {
    column(actions, MENU_BUTTON_X, MENU_BUTTON_START_Y, MENU_BUTTON_STEP_Y, MENU_BUTTON_WIDTH, MENU_BUTTON_HEIGHT)
}

/// 画面ごとのボタン一覧。
pub fn buttons_for(screen: Screen) -> Vec<Button> {
    use ButtonAction::*;
    match screen {
        Screen::Menu => menu_column(&[StartGame, OpenSettings, OpenStatistics, Quit]),
        Screen::Settings => menu_column(&[ToggleSound, Back]),
        Screen::Statistics => menu_column(&[ResetStats, Back]),
        Screen::Playing => column(
            &[Restart, Undo, ToggleDraw, TogglePause, Hint, AutoComplete],
            PLAYING_BUTTON_X,
            PLAYING_BUTTON_START_Y,
            PLAYING_BUTTON_STEP_Y,
            PLAYING_BUTTON_WIDTH,
            PLAYING_BUTTON_HEIGHT,
        ),
    }
}
