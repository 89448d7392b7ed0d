use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::config::Validate;
use crate::games::{FrameObserver, NoopObserver, SessionRng};
use crate::{log, log_warn};
use super::game_state::SnakeGameState;
use super::settings::SnakeSettings;
use super::snapshot::GameSnapshot;
use super::types::{Direction, GameStatus};

type ObserverSlot = Arc<Mutex<Box<dyn FrameObserver>>>;

struct SessionState {
    settings: SnakeSettings,
    game_state: SnakeGameState,
    rng: SessionRng,
    /// Bumped whenever the running ticker is invalidated; a ticker only acts
    /// while its own epoch is current.
    epoch: u64,
    ticker: Option<JoinHandle<()>>,
}

impl SessionState {
    fn cancel_ticker(&mut self) {
        self.epoch += 1;
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

/// A single play session with its own ticker.
///
/// All operations are cheap, synchronous and safe to call from any thread.
/// Ticking needs a tokio runtime: `start` and `restart` spawn onto the current one.
/// Observers may call any operation from `on_frame` except `destroy`. Dropping
/// the last `SnakeGame` from `on_frame` counts as a `destroy` and deadlocks the
/// same way.
pub struct SnakeGame {
    session: Arc<Mutex<SessionState>>,
    observer: ObserverSlot,
}

impl SnakeGame {
    pub fn new(settings: SnakeSettings, observer: impl FrameObserver) -> Result<Self, String> {
        settings
            .validate()
            .map_err(|e| format!("Invalid snake settings: {}", e))?;

        let mut rng = SessionRng::from_optional_seed(settings.seed);
        let game_state = SnakeGameState::new(&settings, &mut rng)
            .map_err(|e| format!("Invalid snake settings: {}", e))?;
        log!(
            "New snake game: {}x{} cells of size {}, tick every {} ms, seed {}",
            settings.cell_count,
            settings.cell_count,
            settings.cell_size,
            settings.tick_interval.as_millis(),
            rng.seed()
        );

        Ok(Self::assemble(settings, game_state, rng, Box::new(observer)))
    }

    pub fn without_observer(settings: SnakeSettings) -> Result<Self, String> {
        Self::new(settings, NoopObserver)
    }

    fn assemble(
        settings: SnakeSettings,
        game_state: SnakeGameState,
        rng: SessionRng,
        observer: Box<dyn FrameObserver>,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionState {
                settings,
                game_state,
                rng,
                epoch: 0,
                ticker: None,
            })),
            observer: Arc::new(Mutex::new(observer)),
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, SessionState> {
        self.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn start(&self) {
        let mut session = self.lock_session();
        self.start_locked(&mut session);
    }

    fn start_locked(&self, session: &mut SessionState) {
        match session.game_state.status {
            GameStatus::Started | GameStatus::Destroyed => return,
            GameStatus::Stopped | GameStatus::Died => {}
        }

        let Ok(runtime) = Handle::try_current() else {
            log_warn!("Cannot start the snake game outside a tokio runtime");
            return;
        };

        session.cancel_ticker();
        session.game_state.status = GameStatus::Started;
        let epoch = session.epoch;
        let tick_interval = session.settings.tick_interval;
        session.ticker = Some(runtime.spawn(run_ticker(
            Arc::clone(&self.session),
            Arc::clone(&self.observer),
            epoch,
            tick_interval,
        )));
        log!("Game started at tick {}", session.game_state.tick);
    }

    pub fn pause(&self) {
        let mut session = self.lock_session();
        if session.game_state.status == GameStatus::Destroyed {
            return;
        }

        session.cancel_ticker();
        if session.game_state.status == GameStatus::Started {
            log!("Game paused at tick {}", session.game_state.tick);
        }
        session.game_state.status = GameStatus::Stopped;
    }

    /// Throws the current board away and starts a fresh one. Ignored once destroyed.
    pub fn restart(&self) {
        let mut session = self.lock_session();
        if session.game_state.status == GameStatus::Destroyed {
            return;
        }

        session.cancel_ticker();
        let SessionState { settings, rng, .. } = &mut *session;
        let fresh = match SnakeGameState::new(settings, rng) {
            Ok(fresh) => fresh,
            Err(e) => {
                log_warn!("Cannot restart the snake game: {}", e);
                session.game_state.status = GameStatus::Stopped;
                return;
            }
        };
        session.game_state = fresh;
        log!("Game restarted");
        self.start_locked(&mut session);
    }

    pub fn status(&self) -> GameStatus {
        self.lock_session().game_state.status
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.lock_session().game_state.snapshot()
    }

    /// Takes effect on the next tick; only the last accepted call before a tick counts.
    pub fn change_direction(&self, direction: Direction) {
        self.lock_session().game_state.set_direction(direction);
    }

    /// Space-bar semantics: pause a running game, resume a stopped one, start
    /// over after a death.
    pub fn toggle(&self) {
        match self.status() {
            GameStatus::Started => self.pause(),
            GameStatus::Stopped => self.start(),
            GameStatus::Died => self.restart(),
            GameStatus::Destroyed => {}
        }
    }

    /// Stops ticking for good and releases the observer. No snapshot is
    /// delivered once this returns.
    pub fn destroy(&self) {
        {
            let mut session = self.lock_session();
            if session.game_state.status == GameStatus::Destroyed {
                return;
            }
            session.cancel_ticker();
            session.game_state.status = GameStatus::Destroyed;
            log!("Game destroyed at tick {}", session.game_state.tick);
        }

        let mut observer = self.observer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *observer = Box::new(NoopObserver);
    }

    #[cfg(test)]
    fn from_state(
        settings: SnakeSettings,
        game_state: SnakeGameState,
        observer: impl FrameObserver,
    ) -> Self {
        let rng = SessionRng::from_optional_seed(settings.seed);
        Self::assemble(settings, game_state, rng, Box::new(observer))
    }
}

impl Drop for SnakeGame {
    fn drop(&mut self) {
        self.destroy();
    }
}

async fn run_ticker(
    session: Arc<Mutex<SessionState>>,
    observer: ObserverSlot,
    epoch: u64,
    tick_interval: Duration,
) {
    let mut timer = interval(tick_interval);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        timer.tick().await;
        if !run_tick(&session, &observer, epoch) {
            return;
        }
    }
}

/// Runs one tick and publishes it. Returns whether the ticker should keep going.
fn run_tick(session: &Mutex<SessionState>, observer: &ObserverSlot, epoch: u64) -> bool {
    // Lock order is always observer, then session. Holding the observer
    // across the update keeps a concurrent destroy() from slipping in
    // between the tick and its publication.
    let observer_guard = observer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let mut session_guard = session.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if session_guard.epoch != epoch || session_guard.game_state.status != GameStatus::Started {
        return false;
    }

    let SessionState { game_state, rng, .. } = &mut *session_guard;
    let outcome = game_state.update(rng);
    let snapshot = game_state.snapshot();
    if outcome.died {
        session_guard.ticker = None;
    }
    drop(session_guard);
    observer_guard.on_frame(snapshot);

    !outcome.died
}
