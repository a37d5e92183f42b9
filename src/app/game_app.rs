// src/app/game_app.rs

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::{DealMode, GameState};
use crate::components::stack::StackType;
use crate::config::settings::GameSettings;
use crate::logic::animation::{Animation, AnimationScheduler, PendingMove};
use crate::logic::auto_move::{self, Hint};
use crate::logic::deck;
use crate::logic::rules::{self, FOUNDATION_SCORE};
use crate::logic::undo::UndoHistory;

use super::button::{self, Button, ButtonAction, ButtonState};
use super::event_handler::{self, ClickTarget, InputEvent, Key, PRIMARY_BUTTON};
use super::sound::{SoundBackend, SoundManager};
use super::{drag_handler, stock_handler};

/// 画面の種類。一時停止は `Playing` の中だけで使う別フラグ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Screen {
    Menu,
    Playing,
    Settings,
    Statistics,
}

/// ベスト記録。どちらも「今までで一番小さい値」で、一度も勝っていなければ None。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub best_time_secs: Option<u64>,
    pub best_moves: Option<u32>,
}

impl Stats {
    /// 勝ったときの記録を反映する。前より小さいときだけ更新。
    pub fn record_win(&mut self, time_secs: u64, moves: u32) {
        if self.best_time_secs.map_or(true, |best| time_secs < best) {
            self.best_time_secs = Some(time_secs);
        }
        if self.best_moves.map_or(true, |best| moves < best) {
            self.best_moves = Some(moves);
        }
    }
}

/// 表示中のヒント。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActiveHint {
    pub hint: Hint,
    pub started_ms: f64,
}

/// ソリティア 1 セッション分の状態を全部持つ構造体だよ！
///
/// 入力イベントと `update(now)` でしか状態は変わらない。時間は全部呼び出し側から渡してもらう。
pub struct GameApp {
    pub(crate) settings: GameSettings,
    pub(crate) screen: Screen,
    pub(crate) paused: bool,
    pub(crate) quit_requested: bool,
    pub(crate) game: GameState,
    pub(crate) history: UndoHistory,
    pub(crate) animations: AnimationScheduler,
    pub(crate) dragging: Option<DraggingInfo>,
    pub(crate) draw_count: u8,
    /// 盤面が丸ごと入れ替わる (Undo・新しいゲーム) たびに +1。
    pub(crate) epoch: u64,
    pub(crate) stats: Stats,
    pub(crate) won: bool,
    pub(crate) started_at_ms: f64,
    pub(crate) paused_at_ms: Option<f64>,
    pub(crate) paused_total_ms: f64,
    pub(crate) hint: Option<ActiveHint>,
    pub(crate) sound: SoundManager,
    pub(crate) buttons: Vec<Button>,
    rng: StdRng,
}

impl GameApp {
    pub fn new(settings: GameSettings, backend: Box<dyn SoundBackend>) -> Self {
        Self::with_rng(settings, backend, StdRng::from_entropy())
    }

    /// シャッフルを再現したいとき (テストとか) 用。
    pub fn with_seed(settings: GameSettings, backend: Box<dyn SoundBackend>, seed: u64) -> Self {
        Self::with_rng(settings, backend, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: GameSettings, backend: Box<dyn SoundBackend>, rng: StdRng) -> Self {
        let sound = SoundManager::new(backend, settings.sound_on);
        let game = GameState::empty(settings.deal_mode);
        Self {
            draw_count: settings.draw_count,
            settings,
            screen: Screen::Menu,
            paused: false,
            quit_requested: false,
            history: UndoHistory::new(),
            game,
            animations: AnimationScheduler::new(),
            dragging: None,
            epoch: 0,
            stats: Stats::default(),
            won: false,
            started_at_ms: 0.0,
            paused_at_ms: None,
            paused_total_ms: 0.0,
            hint: None,
            sound,
            buttons: button::buttons_for(Screen::Menu),
            rng,
        }
    }

    // --- 読み取り用 ---

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn should_quit(&self) -> bool {
        self.quit_requested
    }

    pub fn draw_count(&self) -> u8 {
        self.draw_count
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn dragging(&self) -> Option<&DraggingInfo> {
        self.dragging.as_ref()
    }

    pub fn animations(&self) -> &AnimationScheduler {
        &self.animations
    }

    pub fn active_hint(&self) -> Option<&ActiveHint> {
        self.hint.as_ref()
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_sound_on(&self) -> bool {
        self.sound.is_sound_on()
    }

    /// 一時停止していた時間を除いた経過時間 (秒、切り捨て)。
    pub fn elapsed_secs(&self, now_ms: f64) -> u64 {
        let paused_now = self.paused_at_ms.map_or(0.0, |at| now_ms - at);
        let elapsed_ms = now_ms - self.started_at_ms - self.paused_total_ms - paused_now;
        (elapsed_ms.max(0.0) / 1000.0).floor() as u64
    }

    // --- 画面遷移 ---

    pub(crate) fn set_screen(&mut self, screen: Screen) {
        info!("[App] Screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        self.buttons = button::buttons_for(screen);
    }

    // --- ゲーム操作 ---

    /// 今のモードで新しいゲームを配る。
    pub fn start_new_game(&mut self, now_ms: f64) {
        let mode = self.game.deal_mode;
        self.start_new_game_with_mode(mode, now_ms);
    }

    pub fn start_new_game_with_mode(&mut self, mode: DealMode, now_ms: f64) {
        drag_handler::cancel_drag(self);
        let deck = deck::deal_new_deck_with(mode, &mut self.rng);
        self.game = deck::layout_piles(deck, mode);
        self.history.reset(&self.game);
        self.epoch += 1;
        self.draw_count = self.settings.draw_count;
        self.paused = false;
        self.paused_at_ms = None;
        self.paused_total_ms = 0.0;
        self.won = false;
        self.hint = None;
        self.started_at_ms = now_ms;
        info!("[App] New game started ({}). epoch = {}", mode.label(), self.epoch);
    }

    /// モードを切り替えて配り直す。
    pub fn toggle_mode(&mut self, now_ms: f64) {
        let mode = self.game.deal_mode.toggled();
        self.start_new_game_with_mode(mode, now_ms);
    }

    pub fn toggle_draw_count(&mut self) {
        drag_handler::cancel_drag(self);
        self.draw_count = if self.draw_count == 1 { 3 } else { 1 };
        info!("[App] Draw count = {}", self.draw_count);
    }

    pub fn toggle_pause(&mut self, now_ms: f64) {
        if self.screen != Screen::Playing {
            return;
        }
        drag_handler::cancel_drag(self);
        self.paused = !self.paused;
        if self.paused {
            self.paused_at_ms = Some(now_ms);
        } else if let Some(at) = self.paused_at_ms.take() {
            self.paused_total_ms += now_ms - at;
        }
        info!("[App] Paused = {}", self.paused);
    }

    /// 1 手戻す。戻せたら true。飛んでいる途中の自動移動は、着いても盤面に反映されなくなる。
    pub fn undo(&mut self) -> bool {
        drag_handler::cancel_drag(self);
        match self.history.undo() {
            Some(restored) => {
                self.game = restored;
                self.epoch += 1;
                self.hint = None;
                true
            }
            None => false,
        }
    }

    /// 反映待ちの自動移動の行き先だけ積んだ盤面。行き先選びに使う。
    pub(crate) fn projected_view(&self) -> GameState {
        auto_move::projected_state(&self.game, self.animations.pending_for_epoch(self.epoch))
    }

    /// 反映待ちの自動移動を全部「終わったこと」にした盤面。Undo 用のスナップショットはこれを積む。
    /// ドラッグ中のカードも元のパイルに戻した状態で数える。
    pub(crate) fn committed_view(&self) -> GameState {
        self.committed_view_with(&[])
    }

    /// `landing` はこの tick で着いたけど、まだ盤面に反映していない手。
    fn committed_view_with(&self, landing: &[PendingMove]) -> GameState {
        let mut view = self.game.clone();
        if let Some(info) = &self.dragging {
            view.pile_mut(info.origin).cards.extend(info.cards.iter().copied());
        }
        let in_flight = self.animations.pending_for_epoch(self.epoch);
        for commit in landing.iter().filter(|c| c.epoch == self.epoch).chain(in_flight) {
            apply_pending_move(&mut view, commit, true);
        }
        view
    }

    /// 確定した手のあとに必ず呼ぶ。スナップショットを積んで、勝利判定。
    pub(crate) fn after_committed_move(&mut self, now_ms: f64) {
        self.record_move(&[], now_ms);
    }

    fn record_move(&mut self, landing: &[PendingMove], now_ms: f64) {
        let snapshot = self.committed_view_with(landing);
        self.history.push(&snapshot);
        if !landing.iter().any(|c| c.epoch == self.epoch) {
            self.check_win(now_ms);
        }
    }

    fn check_win(&mut self, now_ms: f64) {
        if self.won || self.animations.pending_for_epoch(self.epoch).next().is_some() {
            return;
        }
        if rules::check_win_condition(&self.game) {
            self.won = true;
            let secs = self.elapsed_secs(now_ms);
            self.stats.record_win(secs, self.game.move_count);
            info!("[App] YOU WIN! time = {}s, moves = {}", secs, self.game.move_count);
        }
    }

    /// ヒントを探してハイライトする。
    pub fn request_hint(&mut self, now_ms: f64) -> Option<Hint> {
        let hint = auto_move::find_hint(&self.projected_view());
        self.hint = hint.map(|hint| ActiveHint { hint, started_ms: now_ms });
        hint
    }

    /// 組札に動かせるカードを 1 枚だけ、アニメーション付きで動かす。
    pub fn auto_complete(&mut self, now_ms: f64) -> bool {
        drag_handler::cancel_drag(self);
        match auto_move::find_hint(&self.projected_view()) {
            Some(hint) => self.schedule_auto_move(hint.source, hint.card_index, hint.foundation, now_ms),
            None => false,
        }
    }

    /// ダブルクリックされたカードを組札へ飛ばす。
    /// 捨て札か場札の一番上の表向きカードだけが対象。
    pub fn try_auto_move(&mut self, stack: StackType, index: usize, now_ms: f64) -> bool {
        if !matches!(stack, StackType::Waste | StackType::Tableau(_)) {
            return false;
        }
        drag_handler::cancel_drag(self);
        let pile = self.game.pile(stack);
        let Some(card) = pile.top().filter(|c| c.is_face_up && index + 1 == pile.len()) else {
            return false;
        };
        match auto_move::find_automatic_foundation_move(&self.projected_view(), card) {
            Some(target) => self.schedule_auto_move(stack, index, target, now_ms),
            None => false,
        }
    }

    /// カードを元のパイルから外して、組札へ向かうアニメーションを予約する。
    fn schedule_auto_move(&mut self, source: StackType, index: usize, target: StackType, now_ms: f64) -> bool {
        let from_pos = self.game.pile(source).card_position(index);
        let to_pos = target.anchor();
        let pile = self.game.pile_mut(source);
        if index >= pile.len() {
            warn!("[App] Auto-move index {} out of range for {:?}", index, source);
            return false;
        }
        let card = pile.cards.remove(index);
        let commit = PendingMove { card, from: source, to: target, epoch: self.epoch };
        self.animations.schedule(Animation::new(commit, from_pos, to_pos, now_ms, self.settings.animation_ms));
        self.hint = None;
        true
    }

    /// 1 tick 分の更新。完了したアニメーションをこの tick のうちに盤面へ反映する。
    pub fn update(&mut self, now_ms: f64) {
        let finished = self.animations.advance(now_ms);
        for (i, commit) in finished.iter().enumerate() {
            self.apply_commit(commit, &finished[i + 1..], now_ms);
        }
        let hint_ms = self.settings.hint_ms;
        if self.hint.is_some_and(|h| now_ms - h.started_ms >= hint_ms) {
            self.hint = None;
        }
    }

    /// `landing` は同じ tick で着いた後続の手。スナップショットにはそれも含める。
    fn apply_commit(&mut self, commit: &PendingMove, landing: &[PendingMove], now_ms: f64) {
        if commit.epoch != self.epoch {
            warn!(
                "[Anim] Dropping stale move of {} (epoch {} != {}).",
                commit.card.label(),
                commit.epoch,
                self.epoch
            );
            return;
        }
        // 同じパイルからドラッグ中なら、下のカードはまだ表にしない (離したときに表にする)
        let reveal = self.dragging.as_ref().map_or(true, |d| d.origin != commit.from);
        apply_pending_move(&mut self.game, commit, reveal);
        info!("[Anim] Committed {} to {:?}.", commit.card.label(), commit.to);
        self.sound.play_move_sound();
        self.record_move(landing, now_ms);
    }

    // --- 入力 ---

    pub fn handle_event(&mut self, event: InputEvent, now_ms: f64) {
        match event {
            InputEvent::PointerDown { x, y, button, clicks } => self.on_pointer_down(x, y, button, clicks, now_ms),
            InputEvent::PointerMove { x, y } => {
                for b in self.buttons.iter_mut() {
                    b.update_hover(x, y);
                }
                drag_handler::update_dragged_position(self, x, y);
            }
            InputEvent::PointerUp { x, y, .. } => {
                for b in self.buttons.iter_mut() {
                    b.release(x, y);
                }
                drag_handler::handle_drag_end(self, x, y, now_ms);
            }
            InputEvent::KeyDown(key) => self.on_key(key, now_ms),
        }
    }

    fn on_pointer_down(&mut self, x: f32, y: f32, button: i16, clicks: u32, now_ms: f64) {
        if button != PRIMARY_BUTTON {
            return;
        }
        drag_handler::cancel_drag(self);
        // ボタンはカードより先に調べる
        if let Some(pressed) = self.buttons.iter_mut().find(|b| b.contains(x, y)) {
            pressed.state = ButtonState::Pressed;
            let action = pressed.action;
            self.perform(action, now_ms);
            return;
        }
        if self.screen != Screen::Playing || self.paused {
            return;
        }
        let Some(target) = event_handler::find_click_target(&self.game, x, y) else {
            return;
        };
        match target {
            ClickTarget::Stack(StackType::Stock) | ClickTarget::Card { stack: StackType::Stock, .. } => {
                stock_handler::handle_stock_click(self, now_ms);
            }
            ClickTarget::Card { stack, index } if clicks >= 2 => {
                self.try_auto_move(stack, index, now_ms);
            }
            ClickTarget::Card { stack, index } => {
                drag_handler::handle_drag_start(self, stack, index, x, y);
            }
            ClickTarget::Stack(_) => {}
        }
    }

    fn on_key(&mut self, key: Key, now_ms: f64) {
        if self.screen != Screen::Playing {
            return;
        }
        if key == Key::Pause {
            self.toggle_pause(now_ms);
            return;
        }
        if self.paused {
            return;
        }
        drag_handler::cancel_drag(self);
        match key {
            Key::ToggleMode => self.toggle_mode(now_ms),
            Key::ToggleDraw => self.toggle_draw_count(),
            Key::Undo => {
                self.undo();
            }
            Key::Restart => self.start_new_game(now_ms),
            Key::Hint => {
                self.request_hint(now_ms);
            }
            Key::AutoComplete => {
                self.auto_complete(now_ms);
            }
            Key::Pause | Key::Other => {}
        }
    }

    /// ボタンが押されたときの処理。
    pub(crate) fn perform(&mut self, action: ButtonAction, now_ms: f64) {
        if self.paused && action != ButtonAction::TogglePause {
            return;
        }
        drag_handler::cancel_drag(self);
        match action {
            ButtonAction::StartGame => {
                self.start_new_game(now_ms);
                self.set_screen(Screen::Playing);
            }
            ButtonAction::OpenSettings => self.set_screen(Screen::Settings),
            ButtonAction::OpenStatistics => self.set_screen(Screen::Statistics),
            ButtonAction::Quit => {
                info!("[App] Quit requested.");
                self.quit_requested = true;
            }
            ButtonAction::ToggleSound => self.sound.toggle_sound(),
            ButtonAction::ResetStats => {
                self.stats = Stats::default();
                info!("[App] Statistics reset.");
            }
            ButtonAction::Back => self.set_screen(Screen::Menu),
            ButtonAction::Restart => self.start_new_game(now_ms),
            ButtonAction::Undo => {
                self.undo();
            }
            ButtonAction::ToggleDraw => self.toggle_draw_count(),
            ButtonAction::TogglePause => self.toggle_pause(now_ms),
            ButtonAction::Hint => {
                self.request_hint(now_ms);
            }
            ButtonAction::AutoComplete => {
                self.auto_complete(now_ms);
            }
        }
    }
}

/// 自動移動 1 手分を盤面に反映する。組札に積んで加点、手数 +1。`reveal` なら元のパイルの一番上を表に。
fn apply_pending_move(state: &mut GameState, commit: &PendingMove, reveal: bool) {
    let mut card = commit.card;
    card.is_face_up = true;
    state.push_card(commit.to, card);
    state.score += FOUNDATION_SCORE;
    state.move_count += 1;
    if reveal {
        state.pile_mut(commit.from).reveal_top();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::sound::testing::RecordingBackend;
    use crate::components::card::{Card, Rank, Suit};

    fn new_app(mode: DealMode) -> (GameApp, RecordingBackend) {
        let backend = RecordingBackend::default();
        let settings = GameSettings { deal_mode: mode, ..GameSettings::default() };
        let mut app = GameApp::with_seed(settings, Box::new(backend.clone()), 42);
        app.perform(ButtonAction::StartGame, 0.0);
        (app, backend)
    }

    /// 盤面 + 飛んでいるカードで 52 枚ちょうど。
    fn assert_all_cards_accounted(app: &GameApp) {
        let in_flight = app.animations.iter().filter(|a| a.commit.epoch == app.epoch).count();
        assert_eq!(app.game.card_count() + in_flight, 52);
    }

    #[test]
    fn start_game_from_menu() {
        let (app, _) = new_app(DealMode::Random);
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.history_len(), 1);
        assert!(app.game().is_complete_deck());
        assert_eq!(app.buttons().len(), 6);
    }

    #[test]
    fn double_click_animates_then_commits_once() {
        let (mut app, sound) = new_app(DealMode::Ordered);
        // Ordered の配り方だと場札 0 は ♠A 1 枚だけ
        let top = app.game.pile(StackType::Tableau(0)).top().copied();
        assert_eq!(top.map(|c| c.identity()), Some((Suit::Spade, Rank::Ace)));

        assert!(app.try_auto_move(StackType::Tableau(0), 0, 100.0));
        assert!(app.game.pile(StackType::Tableau(0)).is_empty(), "動き始めた瞬間に元のパイルから外れる");
        assert!(app.game.pile(StackType::Foundation(0)).is_empty(), "まだ組札には載っていない");
        assert_all_cards_accounted(&app);

        app.update(400.0);
        assert!(app.game.pile(StackType::Foundation(0)).is_empty());

        app.update(600.0);
        assert_eq!(app.game.pile(StackType::Foundation(0)).len(), 1);
        assert_eq!(app.game.score, 10);
        assert_eq!(app.game.move_count, 1);
        assert_eq!(app.history_len(), 2);
        assert_eq!(sound.plays.get(), 1);
        assert!(app.game.is_complete_deck());

        app.update(5000.0);
        assert_eq!(app.game.score, 10, "2 回目は反映されない");
        assert_eq!(app.history_len(), 2);
    }

    #[test]
    fn concurrent_aces_get_different_foundations() {
        let (mut app, _) = new_app(DealMode::Random);
        app.game = GameState::empty(DealMode::Random);
        app.game.push_card(StackType::Tableau(0), Card::new(Suit::Heart, Rank::Ace, true));
        app.game.push_card(StackType::Tableau(1), Card::new(Suit::Club, Rank::Ace, true));

        assert!(app.auto_complete(0.0));
        assert!(app.auto_complete(10.0));
        let targets: Vec<_> = app.animations.iter().map(|a| a.commit.to).collect();
        assert_eq!(targets, vec![StackType::Foundation(0), StackType::Foundation(1)]);
    }

    #[test]
    fn undo_during_animation_drops_stale_commit() {
        let (mut app, _) = new_app(DealMode::Ordered);
        // まず 1 手確定させておく
        assert!(stock_handler::handle_stock_click(&mut app, 0.0));
        assert_eq!(app.history_len(), 2);

        assert!(app.try_auto_move(StackType::Tableau(0), 0, 10.0));
        assert!(app.undo());
        assert!(app.game.is_complete_deck(), "戻した盤面には飛んでいたカードも入っている");

        app.update(1000.0);
        assert!(app.animations.is_empty());
        assert!(app.game.is_complete_deck(), "古い手は捨てられるので二重にならない");
        assert!(app.game.pile(StackType::Foundation(0)).is_empty());
    }

    #[test]
    fn snapshot_during_animation_keeps_all_cards() {
        let (mut app, _) = new_app(DealMode::Ordered);
        assert!(app.try_auto_move(StackType::Tableau(0), 0, 0.0));
        // 飛んでいる間に山札を引く (確定する手)
        assert!(stock_handler::handle_stock_click(&mut app, 10.0));
        app.update(1000.0);
        assert!(app.undo());
        assert!(app.game.is_complete_deck(), "途中で積んだスナップショットにも飛んでいたカードが入っている");
    }

    #[test]
    fn hint_highlight_expires() {
        let (mut app, _) = new_app(DealMode::Ordered);
        let hint = app.request_hint(0.0).expect("♠A が出せる");
        assert_eq!(hint.source, StackType::Tableau(0));
        assert_eq!(hint.foundation, StackType::Foundation(0));
        app.update(1999.0);
        assert!(app.active_hint().is_some());
        app.update(2000.0);
        assert!(app.active_hint().is_none());
    }

    #[test]
    fn win_updates_best_stats() {
        let (mut app, _) = new_app(DealMode::Random);
        app.game = GameState::empty(DealMode::Random);
        app.game.push_card(StackType::Waste, Card::new(Suit::Heart, Rank::Ace, true));
        app.game.move_count = 7;
        app.started_at_ms = 0.0;

        assert!(app.auto_complete(1000.0));
        app.update(1200.0);
        assert!(!app.won, "まだ反映されていない");
        app.update(12_500.0);
        assert!(app.won);
        assert_eq!(app.stats.best_time_secs, Some(12));
        assert_eq!(app.stats.best_moves, Some(8));

        app.stats.record_win(20, 3);
        assert_eq!(app.stats.best_time_secs, Some(12), "遅い記録では更新されない");
        assert_eq!(app.stats.best_moves, Some(3));
    }

    #[test]
    fn pause_blocks_gameplay_keys() {
        let (mut app, _) = new_app(DealMode::Random);
        app.handle_event(InputEvent::KeyDown(Key::Pause), 0.0);
        assert!(app.is_paused());

        app.handle_event(InputEvent::KeyDown(Key::ToggleDraw), 0.0);
        assert_eq!(app.draw_count(), 1, "一時停止中はキーが効かない");

        app.handle_event(InputEvent::KeyDown(Key::Pause), 5000.0);
        assert!(!app.is_paused());
        app.handle_event(InputEvent::KeyDown(Key::ToggleDraw), 5000.0);
        assert_eq!(app.draw_count(), 3);
        assert_eq!(app.elapsed_secs(6000.0), 1, "止めていた 5 秒は数えない");
    }

    #[test]
    fn mode_toggle_restarts_and_resets_draw_count() {
        let (mut app, _) = new_app(DealMode::Random);
        app.toggle_draw_count();
        stock_handler::handle_stock_click(&mut app, 0.0);
        app.handle_event(InputEvent::KeyDown(Key::ToggleMode), 10.0);
        assert_eq!(app.game().deal_mode, DealMode::Ordered);
        assert_eq!(app.draw_count(), 1);
        assert_eq!(app.game().move_count, 0);
        assert_eq!(app.history_len(), 1);
    }

    #[test]
    fn menu_navigation_and_quit() {
        let backend = RecordingBackend::default();
        let mut app = GameApp::with_seed(GameSettings::default(), Box::new(backend), 1);
        app.perform(ButtonAction::OpenSettings, 0.0);
        assert_eq!(app.screen(), Screen::Settings);
        app.perform(ButtonAction::ToggleSound, 0.0);
        assert!(!app.is_sound_on());
        app.perform(ButtonAction::Back, 0.0);
        app.perform(ButtonAction::OpenStatistics, 0.0);
        app.stats.record_win(30, 100);
        app.perform(ButtonAction::ResetStats, 0.0);
        assert_eq!(app.stats(), Stats::default());
        app.perform(ButtonAction::Back, 0.0);

        // Quit ボタンをクリック (メニューの 4 番目)
        let quit = app.buttons().iter().find(|b| b.action == ButtonAction::Quit).map(|b| b.rect);
        let rect = quit.expect("Quit ボタンがある");
        app.handle_event(
            InputEvent::PointerDown { x: rect.x + 5.0, y: rect.y + 5.0, button: PRIMARY_BUTTON, clicks: 1 },
            0.0,
        );
        assert!(app.should_quit());
    }
    /// 盤面のどこかにある `(suit, rank)` を抜き出して、表向きで `dest` に積み直す。
    fn relocate(app: &mut GameApp, suit: Suit, rank: Rank, dest: StackType) {
        let found = app.game.piles().find_map(|p| {
            p.cards.iter().position(|c| c.identity() == (suit, rank)).map(|i| (p.stack_type, i))
        });
        let (stack, index) = found.expect("52 枚のどこかにある");
        let mut card = app.game.pile_mut(stack).cards.remove(index);
        card.is_face_up = true;
        app.game.push_card(dest, card);
    }

    fn press(app: &mut GameApp, x: f32, y: f32, clicks: u32, now_ms: f64) {
        app.handle_event(InputEvent::PointerDown { x, y, button: PRIMARY_BUTTON, clicks }, now_ms);
    }

    #[test]
    fn two_commits_in_one_tick_keep_every_snapshot_whole() {
        let (mut app, _) = new_app(DealMode::Ordered);
        relocate(&mut app, Suit::Heart, Rank::Ace, StackType::Waste);
        assert!(app.game.is_complete_deck());

        assert!(app.auto_complete(0.0));
        assert!(app.auto_complete(0.0));
        app.update(1000.0);
        assert_eq!(app.history_len(), 3);
        assert_eq!(app.game.pile(StackType::Foundation(0)).len(), 1);
        assert_eq!(app.game.pile(StackType::Foundation(1)).len(), 1);

        assert!(app.undo());
        assert!(app.game.is_complete_deck(), "1 手目のあとのスナップショットに 2 枚目も入っている");
        assert_eq!(app.game.score, 20);
    }

    #[test]
    fn commit_during_drag_snapshot_holds_lifted_cards() {
        let (mut app, _) = new_app(DealMode::Ordered);
        assert!(app.try_auto_move(StackType::Tableau(0), 0, 0.0));
        let t6 = StackType::Tableau(6);
        assert!(drag_handler::handle_drag_start(&mut app, t6, 6, 0.0, 0.0));

        app.update(1000.0);
        assert_eq!(app.history_len(), 2);
        assert!(app.history.current().is_some_and(GameState::is_complete_deck), "持ち上げ中のカードも数える");

        drag_handler::cancel_drag(&mut app);
        assert!(stock_handler::handle_stock_click(&mut app, 1100.0));
        assert!(app.undo());
        assert!(app.game.is_complete_deck());
        assert_eq!(app.game.pile(t6).len(), 7);
    }

    #[test]
    fn commit_from_dragged_pile_waits_to_reveal() {
        let (mut app, _) = new_app(DealMode::Random);
        app.game = GameState::empty(DealMode::Random);
        let t = StackType::Tableau(2);
        app.game.push_card(t, Card::new(Suit::Club, Rank::Queen, false));
        app.game.push_card(t, Card::new(Suit::Spade, Rank::Nine, true));
        app.game.push_card(t, Card::new(Suit::Heart, Rank::Eight, true));
        app.game.push_card(t, Card::new(Suit::Diamond, Rank::Ace, true));

        assert!(app.try_auto_move(t, 3, 0.0));
        assert!(drag_handler::handle_drag_start(&mut app, t, 1, 0.0, 0.0));
        app.update(1000.0);
        assert!(!app.game.pile(t).cards[0].is_face_up, "ドラッグ中は下のカードを表にしない");

        drag_handler::cancel_drag(&mut app);
        let cards = &app.game.pile(t).cards;
        assert_eq!(cards.len(), 3);
        assert!(!cards[0].is_face_up);
    }

    #[test]
    fn gameplay_key_cancels_drag_first() {
        let (mut app, _) = new_app(DealMode::Random);
        app.game = GameState::empty(DealMode::Random);
        for rank in [Rank::Ace, Rank::Two, Rank::Three, Rank::Four] {
            app.game.push_card(StackType::Foundation(0), Card::new(Suit::Heart, rank, true));
        }
        let t = StackType::Tableau(1);
        app.game.push_card(t, Card::new(Suit::Club, Rank::Queen, false));
        app.game.push_card(t, Card::new(Suit::Heart, Rank::Five, true));
        app.game.push_card(t, Card::new(Suit::Spade, Rank::Four, true));

        // ♠4 (index 2) の帯: y = 200 + 60 + 5
        press(&mut app, 150.0, 265.0, 1, 0.0);
        assert_eq!(app.dragging().map(|d| d.cards.len()), Some(1));

        app.handle_event(InputEvent::KeyDown(Key::AutoComplete), 0.0);
        assert!(app.dragging().is_none());
        assert!(app.animations.is_empty(), "♥5 は ♠4 の下に戻ったので動かない");
        let cards = &app.game.pile(t).cards;
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[2].identity(), (Suit::Spade, Rank::Four));

        press(&mut app, 150.0, 265.0, 1, 0.0);
        app.handle_event(InputEvent::KeyDown(Key::ToggleDraw), 0.0);
        assert!(app.dragging().is_none());
        assert_eq!(app.game.pile(t).len(), 3);
    }

    /// 山札・ドラッグ・ダブルクリック・自動完成・時間経過・Undo を適当に混ぜても、
    /// 盤面 (+ 飛んでいるカード + ドラッグ中のカード) は常に 52 枚ちょうど。
    #[test]
    fn random_play_never_loses_or_duplicates_a_card() {
        use rand::Rng;

        let sources: Vec<StackType> = std::iter::once(StackType::Waste).chain(StackType::tableaus()).collect();
        let targets: Vec<StackType> = StackType::foundations().chain(StackType::tableaus()).collect();

        for seed in 0..6u64 {
            let mode = if seed % 2 == 0 { DealMode::Ordered } else { DealMode::Random };
            let (mut app, _) = new_app(mode);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut now = 0.0;

            for step in 0..400 {
                match rng.gen_range(0..8) {
                    0 => press(&mut app, 60.0, 60.0, 1, now),
                    1 => {
                        let pile = app.game.pile(sources[rng.gen_range(0..sources.len())]);
                        if !pile.is_empty() {
                            let pos = pile.card_position(rng.gen_range(0..pile.len()));
                            press(&mut app, pos.x + 5.0, pos.y + 5.0, 1, now);
                        }
                    }
                    2 => {
                        let view = app.game.pile(targets[rng.gen_range(0..targets.len())]);
                        let rect = if view.stack_type.is_tableau() { view.drop_rect() } else { view.card_rect(0) };
                        app.handle_event(
                            InputEvent::PointerUp { x: rect.x + 5.0, y: rect.y + 5.0, button: PRIMARY_BUTTON },
                            now,
                        );
                    }
                    3 => {
                        let pile = app.game.pile(sources[rng.gen_range(0..sources.len())]);
                        if !pile.is_empty() {
                            let pos = pile.card_position(pile.len() - 1);
                            press(&mut app, pos.x + 5.0, pos.y + 5.0, 2, now);
                        }
                    }
                    4 => app.handle_event(InputEvent::KeyDown(Key::AutoComplete), now),
                    5 | 6 => {
                        now += rng.gen_range(0.0..700.0);
                        app.update(now);
                    }
                    _ => app.handle_event(InputEvent::KeyDown(Key::Undo), now),
                }
                assert!(app.committed_view().is_complete_deck(), "seed {} step {}", seed, step);
            }

            drag_handler::cancel_drag(&mut app);
            app.update(now + 10_000.0);
            assert!(app.game.is_complete_deck(), "seed {}", seed);
            while app.undo() {
                assert!(app.game.is_complete_deck(), "seed {}: 積んだスナップショットはどれも 52 枚", seed);
            }
        }
    }
}
