//! Game session: input handling, deferred serves and the per-tick driver
//!
//! `Game` owns the board, the random source and the scheduler. Hosts feed it
//! pointer input and ticks, then drain the resulting events.

use rand_pcg::Pcg32;

use super::random::{RandomSource, seeded};
use super::scheduler::{Deferred, Scheduler};
use super::state::{Ball, EntityKey, GameEvent, GamePhase, GameState, Paddle};
use super::tick::tick;
use crate::consts::{NUMBER_TURNS, TICK_RATE_HZ};

/// Pointer input, in board coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed at `(x, y)`
    Press { x: f32, y: f32 },
    /// Pointer moved to `x` while pressed
    Drag { x: f32 },
    /// Pointer released
    Release,
}

/// Paddle and pointer positions when the current drag began
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragAnchor {
    paddle_x: f32,
    pointer_x: f32,
}

/// One Breakout game controller
#[derive(Debug, Clone)]
pub struct Game<R: RandomSource = Pcg32> {
    state: GameState,
    rng: R,
    scheduler: Scheduler,
    drag: Option<DragAnchor>,
    tick_rate_hz: u32,
}

impl Game<Pcg32> {
    /// Create a game driven by a seeded generator
    pub fn new(seed: u64) -> Self {
        Self::with_rng(seeded(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a game with an injected random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            state: GameState::new(),
            rng,
            scheduler: Scheduler::new(),
            drag: None,
            tick_rate_hz: TICK_RATE_HZ,
        }
    }

    /// Tick rate used to convert deferred delays into ticks
    pub fn with_tick_rate(mut self, tick_rate_hz: u32) -> Self {
        self.tick_rate_hz = tick_rate_hz.max(1);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct board access for hosts that stage custom layouts
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Deferred actions still waiting to fire
    pub fn pending_deferred(&self) -> usize {
        self.scheduler.len()
    }

    /// Take all events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state.drain_events()
    }

    /// Dispatch one input event
    pub fn handle(&mut self, input: InputEvent) {
        match input {
            InputEvent::Press { x, y } => self.press(x, y),
            InputEvent::Drag { x } => self.drag(x),
            InputEvent::Release => self.release(),
        }
    }

    /// Pointer pressed: advances the game or starts moving the paddle
    pub fn press(&mut self, x: f32, _y: f32) {
        match self.state.phase {
            GamePhase::Inactive => self.start_session(),
            GamePhase::Paused => {
                self.anchor(x);
                self.scheduler.delay(
                    Deferred::Serve,
                    0.0,
                    self.state.time_ticks,
                    self.tick_rate_hz,
                    self.state.session,
                );
            }
            GamePhase::Active => self.anchor(x),
            GamePhase::Complete(_) => {
                self.teardown();
                self.start_session();
            }
        }
    }

    /// Pointer moved: slide the paddle by the distance from the press point
    pub fn drag(&mut self, x: f32) {
        if !matches!(self.state.phase, GamePhase::Active | GamePhase::Paused) {
            return;
        }
        let Some(anchor) = self.drag else {
            log::debug!("drag without press ignored");
            return;
        };
        if let Some(paddle) = self.state.paddle.as_mut() {
            paddle.move_to(anchor.paddle_x + x - anchor.pointer_x);
        }
    }

    /// Pointer released: stop moving the paddle
    pub fn release(&mut self) {
        self.drag = None;
    }

    /// Run one tick: fire due deferred actions, then advance the simulation
    pub fn update(&mut self, _dt: f32) {
        self.state.time_ticks += 1;

        for action in self
            .scheduler
            .take_due(self.state.time_ticks, self.state.session)
        {
            self.run_deferred(action);
        }

        tick(&mut self.state, &mut self.rng);
        self.state.debug_check();
    }

    fn anchor(&mut self, pointer_x: f32) {
        if let Some(paddle) = &self.state.paddle {
            self.drag = Some(DragAnchor {
                paddle_x: paddle.x(),
                pointer_x,
            });
        }
    }

    fn run_deferred(&mut self, action: Deferred) {
        match action {
            Deferred::Serve => self.serve(),
        }
    }

    /// Put a new ball into play (no-op unless waiting for a serve)
    fn serve(&mut self) {
        if self.state.phase != GamePhase::Paused || self.state.ball.is_some() {
            return;
        }
        self.state.ball = Some(Ball::serve(&mut self.rng));
        self.state.emit(GameEvent::Spawned(EntityKey::Ball));
        self.state.emit(GameEvent::Served);
        self.state.set_phase(GamePhase::Active);
    }

    /// Fresh board: bricks, paddle, full lives, zero score
    fn start_session(&mut self) {
        let state = &mut self.state;
        state.session += 1;
        state.score = 0;
        state.lives = NUMBER_TURNS;
        state.ball = None;
        state.power_up = None;
        state.build_bricks();
        state.paddle = Some(Paddle::default());
        self.drag = None;

        let spawned: Vec<_> = state
            .bricks
            .iter()
            .map(|b| GameEvent::Spawned(EntityKey::Brick(b.id)))
            .collect();
        state.events.extend(spawned);
        state.emit(GameEvent::Spawned(EntityKey::Paddle));

        log::info!("session {} started with {} bricks", state.session, state.bricks.len());
        state.set_phase(GamePhase::Paused);
    }

    /// Remove everything from the finished board
    fn teardown(&mut self) {
        let state = &mut self.state;
        let mut gone: Vec<_> = state
            .bricks
            .drain(..)
            .map(|b| GameEvent::Despawned(EntityKey::Brick(b.id)))
            .collect();
        if state.paddle.take().is_some() {
            gone.push(GameEvent::Despawned(EntityKey::Paddle));
        }
        if state.ball.take().is_some() {
            gone.push(GameEvent::Despawned(EntityKey::Ball));
        }
        if state.power_up.take().is_some() {
            gone.push(GameEvent::Despawned(EntityKey::PowerUp));
        }
        state.events.extend(gone);
        state.set_phase(GamePhase::Inactive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::random::ScriptedRandom;
    use crate::sim::state::Outcome;

    fn paused_game() -> Game<ScriptedRandom> {
        let mut game = Game::with_rng(ScriptedRandom::constant(0.5));
        game.press(0.0, 0.0);
        game
    }

    #[test]
    fn test_press_from_inactive_builds_board() {
        let mut game = Game::with_rng(ScriptedRandom::constant(0.5));
        assert_eq!(game.phase(), GamePhase::Inactive);

        game.press(10.0, 10.0);

        let state = game.state();
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.bricks.len(), (BRICKS_IN_ROW * BRICK_ROWS) as usize);
        assert_eq!(state.lives, NUMBER_TURNS);
        assert_eq!(state.score, 0);
        assert!(state.paddle.is_some());
        assert!(state.ball.is_none());

        let events = game.drain_events();
        let spawned = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Spawned(EntityKey::Brick(_))))
            .count();
        assert_eq!(spawned, 50);
    }

    #[test]
    fn test_serve_is_deferred_to_next_tick() {
        let mut game = paused_game();
        game.press(0.0, 0.0);
        assert_eq!(game.phase(), GamePhase::Paused);
        assert!(game.state().ball.is_none());
        assert_eq!(game.pending_deferred(), 1);

        game.update(1.0 / 60.0);
        assert_eq!(game.phase(), GamePhase::Active);
        assert!(game.state().ball.is_some());
        assert_eq!(game.pending_deferred(), 0);
    }

    #[test]
    fn test_repeated_press_serves_once() {
        let mut game = paused_game();
        game.press(0.0, 0.0);
        game.press(0.0, 0.0);
        game.update(1.0 / 60.0);
        game.drain_events();
        assert!(game.state().ball.is_some());
        assert_eq!(game.pending_deferred(), 0);
    }

    #[test]
    fn test_paddle_drag_clamps() {
        let mut game = paused_game();
        game.press(0.0, 0.0);
        game.drag(-50.0);
        assert_eq!(game.state().paddle.as_ref().unwrap().x(), 0.0);
        game.drag(1000.0);
        assert_eq!(game.state().paddle.as_ref().unwrap().x(), 342.0);
        game.drag(100.0);
        assert_eq!(game.state().paddle.as_ref().unwrap().x(), 100.0);
    }

    #[test]
    fn test_drag_is_relative_to_press() {
        let mut game = paused_game();
        game.press(200.0, 0.0);
        game.drag(250.0);
        assert_eq!(game.state().paddle.as_ref().unwrap().x(), 50.0);

        // New press re-anchors at the current paddle position
        game.release();
        game.drag(400.0);
        assert_eq!(game.state().paddle.as_ref().unwrap().x(), 50.0);
        game.press(10.0, 0.0);
        game.drag(20.0);
        assert_eq!(game.state().paddle.as_ref().unwrap().x(), 60.0);
    }

    #[test]
    fn test_drag_ignored_when_inactive() {
        let mut game = Game::with_rng(ScriptedRandom::constant(0.5));
        game.drag(100.0);
        assert!(game.state().paddle.is_none());
    }

    #[test]
    fn test_press_after_complete_restarts() {
        let mut game = paused_game();
        game.state_mut().score = 1234;
        game.state_mut().lives = 0;
        game.state_mut().phase = GamePhase::Complete(Outcome::Lost);
        let old_session = game.state().session;

        game.press(0.0, 0.0);

        let state = game.state();
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, NUMBER_TURNS);
        assert_eq!(state.bricks.len(), 50);
        assert!(state.ball.is_none());
        assert_eq!(state.session, old_session + 1);
    }

    #[test]
    fn test_stale_serve_after_restart_is_noop() {
        let mut game = paused_game();
        game.press(0.0, 0.0); // schedules a serve for this session
        game.state_mut().phase = GamePhase::Complete(Outcome::Won);
        game.press(0.0, 0.0); // restart: new session, Paused

        game.update(1.0 / 60.0);
        assert_eq!(game.phase(), GamePhase::Paused);
        assert!(game.state().ball.is_none());
    }
}
