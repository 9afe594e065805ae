//! Tick timestamps and cooldown gates
//!
//! Every timed rule (attack recovery, slot switching, invulnerability,
//! enemy attack readiness, menu navigation) is an absolute start timestamp
//! compared against the tick's sampled `now`. Nothing counts down per frame,
//! so two checks made in the same tick always agree.

/// Milliseconds on the session clock
pub type Millis = u64;

/// A minimum elapsed-time gate.
///
/// The gate is *active* from `start(now)` until `now - started_at >= duration`,
/// at which point it reports ready again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cooldown {
    duration: Millis,
    started_at: Option<Millis>,
}

impl Cooldown {
    /// Create an idle gate with a fixed duration
    pub const fn new(duration: Millis) -> Self {
        Self {
            duration,
            started_at: None,
        }
    }

    /// Start the gate at `now`
    pub fn start(&mut self, now: Millis) {
        self.started_at = Some(now);
    }

    /// Start the gate with a duration chosen for this activation
    pub fn start_for(&mut self, now: Millis, duration: Millis) {
        self.duration = duration;
        self.started_at = Some(now);
    }

    /// Whether the gate is still closed at `now`
    pub fn is_active(&self, now: Millis) -> bool {
        match self.started_at {
            Some(start) => now.saturating_sub(start) < self.duration,
            None => false,
        }
    }

    /// Whether the gate is open at `now`
    pub fn is_ready(&self, now: Millis) -> bool {
        !self.is_active(now)
    }

    /// Clear the gate once it has elapsed.
    ///
    /// Returns true exactly once per activation: on the first call at or
    /// after the deadline.
    pub fn expire(&mut self, now: Millis) -> bool {
        if self.started_at.is_some() && !self.is_active(now) {
            self.started_at = None;
            return true;
        }
        false
    }

    /// When the current activation started
    pub fn started_at(&self) -> Option<Millis> {
        self.started_at
    }

    /// Duration of the current (or next) activation
    pub fn duration(&self) -> Millis {
        self.duration
    }
}

/// Fixed-step session clock.
///
/// Hosts sample it once per tick and pass the value to every system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    now: Millis,
    step: Millis,
}

impl TickClock {
    /// Create a clock starting at zero that advances by `step` each tick
    pub const fn new(step: Millis) -> Self {
        Self { now: 0, step }
    }

    /// Clock at 60 ticks per second (16 ms steps)
    pub const fn sixty_hz() -> Self {
        Self::new(16)
    }

    /// Current timestamp
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Step length
    pub fn step(&self) -> Millis {
        self.step
    }

    /// Advance one step and return the new timestamp
    pub fn tick(&mut self) -> Millis {
        self.now += self.step;
        self.now
    }

    /// Advance by an arbitrary amount
    pub fn advance(&mut self, millis: Millis) -> Millis {
        self.now += millis;
        self.now
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::sixty_hz()
    }
}
