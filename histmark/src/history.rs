//! Undo/redo history tracking
//!
//! [`History`] stores the successive states of a value together with a
//! cursor. Moving the cursor back and forth gives undo and redo; recording a
//! new state after an undo discards the states that could have been redone.
//!
//! Types that want to carry their own history implement [`Historic`] and get
//! `record`, `step_back` and `step_forward` for free.

/// Ordered states with a cursor pointing at the current one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
    states: Vec<T>,
    cursor: usize,
    limit: Option<usize>,
}

impl<T> History<T> {
    /// Start a history whose only state is `initial`
    pub fn new(initial: T) -> Self {
        Self {
            states: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    /// Start a history that keeps at most `limit` states
    ///
    /// A limit of 0 is treated as 1; the current state is always kept.
    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            limit: Some(limit.max(1)),
            ..Self::new(initial)
        }
    }

    /// Record `state` as the new current state
    ///
    /// Any states ahead of the cursor are dropped. When a limit is set the
    /// oldest states are discarded to stay within it.
    pub fn add_history(&mut self, state: T) {
        self.states.truncate(self.cursor + 1);
        self.states.push(state);

        if let Some(limit) = self.limit {
            if self.states.len() > limit {
                let excess = self.states.len() - limit;
                self.states.drain(..excess);
                log::debug!("History limit {} reached, dropped {} states", limit, excess);
            }
        }
        self.cursor = self.states.len() - 1;
    }

    /// Move one state back, returning it, or `None` at the oldest state
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.states.get(self.cursor)
    }

    /// Move one state forward, returning it, or `None` at the newest state
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.states.get(self.cursor)
    }

    pub fn current(&self) -> &T {
        &self.states[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.states.len()
    }

    /// Number of stored states, including the current one
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always false: a history holds at least its current state
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Forget every state except the current one
    pub fn clear(&mut self) {
        let current = self.states.swap_remove(self.cursor);
        self.states.clear();
        self.states.push(current);
        self.cursor = 0;
    }
}

/// An object that tracks its own states
///
/// Implementors expose their [`History`] and a `load` hook that applies a
/// state to the object.
pub trait Historic {
    /// The snapshot type stored in the history
    type State: Clone;

    fn history(&self) -> &History<Self::State>;

    fn history_mut(&mut self) -> &mut History<Self::State>;

    /// Apply `state` to the object
    fn load(&mut self, state: Self::State);

    /// Record `state` and apply it
    fn record(&mut self, state: Self::State) {
        self.history_mut().add_history(state.clone());
        self.load(state);
    }

    /// Load the previous state; returns false when there is none
    fn step_back(&mut self) -> bool {
        match self.history_mut().undo().cloned() {
            Some(state) => {
                self.load(state);
                true
            }
            None => false,
        }
    }

    /// Load the next state; returns false when there is none
    fn step_forward(&mut self) -> bool {
        match self.history_mut().redo().cloned() {
            Some(state) => {
                self.load(state);
                true
            }
            None => false,
        }
    }
}
