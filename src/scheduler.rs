use std::time::{Duration, Instant};

use crate::config::BONUS_PERIOD_MS;
use crate::engine::GameEngine;
use crate::game::{GameEvent, GameStatus};
use crate::notify::AudioNotifier;
use crate::store::KeyValueStore;

/// Time source for the scheduler.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Duration,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, by: Duration) {
        self.elapsed += by;
    }

    pub fn advance_ms(&mut self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed
    }
}

/// Repeating timer that can be armed and cancelled.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Interval {
    period: Duration,
    next_due: Option<Instant>,
}

impl Interval {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Starts counting from `now`; the first firing is one period later.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Changes the period; an armed timer is re-armed from `now`.
    pub fn set_period(&mut self, period: Duration, now: Instant) {
        self.period = period;
        if self.is_armed() {
            self.arm(now);
        }
    }

    /// Instant of the next firing, if armed.
    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Consumes the firing if it is due at `now`.
    ///
    /// The next firing is one period after `now`, so a stalled caller gets a
    /// single firing rather than a replay of every missed period.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Activity {
    Movement,
    Bonus,
}

/// What one [`Scheduler::pump`] did.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct PumpReport {
    pub moves: u32,
    pub bonus_ticks: u32,
    pub events: Vec<GameEvent>,
}

/// Drives the two periodic activities of a session: movement every
/// `speed_ms` and the bonus countdown every second.
///
/// Movement runs only while the engine is playing; the countdown only while
/// bonus food is on the board. Each is cancelled as soon as its condition
/// stops holding, so a stale timer never fires into a later session.
#[derive(Debug, Clone)]
pub struct Scheduler {
    movement: Interval,
    bonus: Interval,
    // Food count at which the running countdown was armed; a new bonus
    // restarts the second boundary.
    bonus_armed_at_count: Option<u32>,
}

impl Scheduler {
    #[must_use]
    pub fn new(speed_ms: u64) -> Self {
        Self {
            movement: Interval::new(Duration::from_millis(speed_ms)),
            bonus: Interval::new(Duration::from_millis(BONUS_PERIOD_MS)),
            bonus_armed_at_count: None,
        }
    }

    #[must_use]
    pub fn movement(&self) -> &Interval {
        &self.movement
    }

    #[must_use]
    pub fn bonus(&self) -> &Interval {
        &self.bonus
    }

    /// Fires every activity that has come due by `clock.now()`.
    pub fn pump<C, N, S>(&mut self, clock: &C, engine: &mut GameEngine<N, S>) -> PumpReport
    where
        C: Clock + ?Sized,
        N: AudioNotifier,
        S: KeyValueStore,
    {
        let now = clock.now();
        let mut report = PumpReport::default();

        self.sync(engine, now);
        while let Some(activity) = self.earliest_due(now) {
            match activity {
                Activity::Movement => {
                    self.movement.fire(now);
                    report.moves += 1;
                    if let Some(event) = engine.advance() {
                        report.events.push(event);
                    }
                }
                Activity::Bonus => {
                    self.bonus.fire(now);
                    report.bonus_ticks += 1;
                    engine.tick_bonus();
                }
            }
            self.sync(engine, now);
        }

        report
    }

    /// Picks the due activity with the older deadline; the countdown wins
    /// ties so an expiring bonus cannot be eaten at the same instant.
    fn earliest_due(&self, now: Instant) -> Option<Activity> {
        let movement = self.movement.next_due().filter(|due| *due <= now);
        let bonus = self.bonus.next_due().filter(|due| *due <= now);

        match (movement, bonus) {
            (Some(move_due), Some(bonus_due)) if move_due < bonus_due => Some(Activity::Movement),
            (_, Some(_)) => Some(Activity::Bonus),
            (Some(_), None) => Some(Activity::Movement),
            (None, None) => None,
        }
    }

    /// Arms or cancels both timers to match the engine's state.
    pub fn sync<N, S>(&mut self, engine: &GameEngine<N, S>, now: Instant)
    where
        N: AudioNotifier,
        S: KeyValueStore,
    {
        let state = engine.state();
        let playing = state.status == GameStatus::Playing;

        if !playing {
            self.cancel_all();
            return;
        }

        let period = Duration::from_millis(state.speed_ms);
        if self.movement.period() != period {
            self.movement.set_period(period, now);
        }
        if !self.movement.is_armed() {
            self.movement.arm(now);
        }

        if !state.food_kind().is_bonus() {
            self.bonus.cancel();
            self.bonus_armed_at_count = None;
        } else if self.bonus_armed_at_count != Some(state.food_count) {
            self.bonus.arm(now);
            self.bonus_armed_at_count = Some(state.food_count);
        }
    }

    /// Stops both activities, e.g. when the session ends or the client
    /// shuts down.
    pub fn cancel_all(&mut self) {
        self.movement.cancel();
        self.bonus.cancel();
        self.bonus_armed_at_count = None;
    }
}
