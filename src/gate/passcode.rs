use std::time::{Duration, Instant};

use crate::gate::store::{FlagStore, UNLOCK_KEY, UNLOCKED_VALUE};

/// How long the rejected-code shake stays visible.
pub const SHAKE_DURATION: Duration = Duration::from_millis(420);

pub const DEFAULT_CODE: &str = "12102704";
pub const DEFAULT_HINT: &str = "Hint: a date that matters 💗";
pub const UNLOCKED_HINT: &str = "Just for you.";

pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Compare a typed code with the expected one, ignoring surrounding
/// whitespace and case.
pub fn check(input: &str, expected: &str) -> bool {
    normalize(input) == normalize(expected)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateState {
    Locked,
    Unlocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Unlocked,
    Rejected,
    AlreadyUnlocked,
}

/// Cosmetic passcode gate in front of the private note. Not a security
/// boundary: no rate limiting, no lockout.
#[derive(Debug)]
pub struct Gate<S> {
    code: String,
    hint: String,
    store: S,
    state: GateState,
    input: String,
    shake_until: Option<Instant>,
}

impl<S: FlagStore> Gate<S> {
    /// Reads the unlock flag once. A store that fails to read leaves the gate
    /// locked.
    pub fn open(store: S, code: impl Into<String>, hint: impl Into<String>) -> Self {
        let state = match store.get(UNLOCK_KEY) {
            Ok(Some(v)) if v == UNLOCKED_VALUE => GateState::Unlocked,
            Ok(_) => GateState::Locked,
            Err(err) => {
                tracing::warn!(%err, "unlock flag unreadable; starting locked");
                GateState::Locked
            }
        };
        Self {
            code: code.into(),
            hint: hint.into(),
            store,
            state,
            input: String::new(),
            shake_until: None,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    pub fn title(&self) -> &'static str {
        match self.state {
            GateState::Locked => "A private note",
            GateState::Unlocked => "Unlocked",
        }
    }

    pub fn hint(&self) -> &str {
        match self.state {
            GateState::Locked => &self.hint,
            GateState::Unlocked => UNLOCKED_HINT,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Check the current input. Success persists the flag and clears the
    /// input; failure starts the shake and changes nothing else.
    pub fn submit(&mut self, now: Instant) -> SubmitOutcome {
        if self.is_unlocked() {
            return SubmitOutcome::AlreadyUnlocked;
        }
        if check(&self.input, &self.code) {
            self.state = GateState::Unlocked;
            self.input.clear();
            self.shake_until = None;
            if let Err(err) = self.store.set(UNLOCK_KEY, UNLOCKED_VALUE) {
                tracing::warn!(%err, "failed to persist unlock flag");
            }
            tracing::debug!("gate unlocked");
            SubmitOutcome::Unlocked
        } else {
            self.shake_until = Some(now + SHAKE_DURATION);
            SubmitOutcome::Rejected
        }
    }

    pub fn is_shaking(&self, now: Instant) -> bool {
        self.shake_until.is_some_and(|until| now < until)
    }

    /// User-requested relock ("Lock again"). Never called automatically.
    pub fn relock(&mut self) {
        self.state = GateState::Locked;
        self.input.clear();
        self.shake_until = None;
        if let Err(err) = self.store.remove(UNLOCK_KEY) {
            tracing::warn!(%err, "failed to clear unlock flag");
        }
        tracing::debug!("gate relocked");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gate/passcode.rs"]
mod tests;
