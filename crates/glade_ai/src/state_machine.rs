//! Finite State Machine (FSM) implementation
//!
//! The machine is re-evaluated from scratch every tick: rules are checked in
//! priority order regardless of the current state, and when none matches the
//! machine falls back to a rest state. This suits brains whose state is a
//! pure function of what they perceive right now.

use std::fmt;

/// A state in the state machine
pub trait State: Copy + Eq + fmt::Debug {}

/// Transition condition
pub type TransitionCondition<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;

/// A rule leading to a target state
pub struct Transition<S, C> {
    /// Target state
    pub to: S,
    /// Condition function
    pub condition: TransitionCondition<C>,
    /// Priority (higher = checked first)
    pub priority: i32,
}

impl<S, C> Transition<S, C> {
    /// Create a new transition
    pub fn new<F>(to: S, condition: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self {
            to,
            condition: Box::new(condition),
            priority: 0,
        }
    }

    /// Set priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Check if transition should occur
    pub fn should_transition(&self, context: &C) -> bool {
        (self.condition)(context)
    }
}

/// Finite State Machine with prioritized rules and a fallback state
pub struct StateMachine<S: State, C> {
    current: S,
    previous: Option<S>,
    /// Kept sorted by descending priority; equal priorities keep insertion order
    rules: Vec<Transition<S, C>>,
    fallback: S,
}

impl<S: State, C> StateMachine<S, C> {
    /// Create a machine in `initial` that rests in `fallback` when no rule matches
    pub fn new(initial: S, fallback: S) -> Self {
        Self {
            current: initial,
            previous: None,
            rules: Vec::new(),
            fallback,
        }
    }

    /// Add a rule with priority 0
    pub fn add_rule<F>(&mut self, to: S, condition: F)
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.push(Transition::new(to, condition));
    }

    /// Add a rule with priority
    pub fn add_rule_priority<F>(&mut self, to: S, condition: F, priority: i32)
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.push(Transition::new(to, condition).with_priority(priority));
    }

    fn push(&mut self, transition: Transition<S, C>) {
        let at = self
            .rules
            .iter()
            .position(|r| r.priority < transition.priority)
            .unwrap_or(self.rules.len());
        self.rules.insert(at, transition);
    }

    /// Get current state
    pub fn current(&self) -> S {
        self.current
    }

    /// Get previous state
    pub fn previous(&self) -> Option<S> {
        self.previous
    }

    /// Check if in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current == state
    }

    /// State the rules select for `context`, without transitioning
    pub fn decide(&self, context: &C) -> S {
        self.rules
            .iter()
            .find(|rule| rule.should_transition(context))
            .map(|rule| rule.to)
            .unwrap_or(self.fallback)
    }

    /// Re-evaluate the rules and transition.
    ///
    /// Returns the newly entered state, or `None` when the machine stayed put.
    pub fn evaluate(&mut self, context: &C) -> Option<S> {
        let next = self.decide(context);
        if next == self.current {
            return None;
        }
        self.force_transition(next);
        Some(next)
    }

    /// Force transition to a state
    pub fn force_transition(&mut self, to: S) {
        log::trace!("fsm {:?} -> {:?}", self.current, to);
        self.previous = Some(self.current);
        self.current = to;
    }
}

impl<S: State, C> fmt::Debug for StateMachine<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("previous", &self.previous)
            .field("rules", &self.rules.len())
            .field("fallback", &self.fallback)
            .finish()
    }
}
