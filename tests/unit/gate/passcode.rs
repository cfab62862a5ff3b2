use super::*;
use crate::{
    foundation::error::{CloserError, CloserResult},
    gate::store::MemoryStore,
};

/// Store whose every operation fails, like a browser with storage disabled.
struct BrokenStore;

impl FlagStore for BrokenStore {
    fn get(&self, _key: &str) -> CloserResult<Option<String>> {
        Err(CloserError::store("unavailable"))
    }

    fn set(&mut self, _key: &str, _value: &str) -> CloserResult<()> {
        Err(CloserError::store("unavailable"))
    }

    fn remove(&mut self, _key: &str) -> CloserResult<()> {
        Err(CloserError::store("unavailable"))
    }
}

#[test]
fn check_normalizes_whitespace_and_case() {
    assert!(check("0812", "0812"));
    assert!(check(" 0812 ", "0812"));
    assert!(!check("0813", "0812"));
    assert!(check("  AbC\t", "abc"));
    assert!(check(" 1210-2704 ", "1210-2704"));
}

#[test]
fn correct_code_unlocks_and_persists() {
    let mut gate = Gate::open(MemoryStore::new(), "0812", "hint");
    assert_eq!(gate.state(), GateState::Locked);
    assert_eq!(gate.title(), "A private note");
    assert_eq!(gate.hint(), "hint");

    gate.set_input(" 0812 ");
    assert_eq!(gate.submit(Instant::now()), SubmitOutcome::Unlocked);
    assert!(gate.is_unlocked());
    assert_eq!(gate.input(), "");
    assert_eq!(gate.hint(), UNLOCKED_HINT);
    assert_eq!(gate.title(), "Unlocked");
    assert_eq!(
        gate.store().get(UNLOCK_KEY).unwrap().as_deref(),
        Some(UNLOCKED_VALUE)
    );

    assert_eq!(gate.submit(Instant::now()), SubmitOutcome::AlreadyUnlocked);
}

#[test]
fn wrong_code_shakes_briefly_and_stays_locked() {
    let mut gate = Gate::open(MemoryStore::new(), DEFAULT_CODE, DEFAULT_HINT);
    let t0 = Instant::now();
    gate.set_input("0000");
    assert_eq!(gate.submit(t0), SubmitOutcome::Rejected);
    assert!(gate.is_shaking(t0));
    assert!(gate.is_shaking(t0 + Duration::from_millis(419)));
    assert!(!gate.is_shaking(t0 + SHAKE_DURATION));
    assert!(!gate.is_unlocked());
    assert_eq!(gate.input(), "0000");
    assert_eq!(gate.store().get(UNLOCK_KEY).unwrap(), None);
}

#[test]
fn no_lockout_after_repeated_failures() {
    let mut gate = Gate::open(MemoryStore::new(), "0812", "");
    let now = Instant::now();
    for _ in 0..50 {
        gate.set_input("nope");
        assert_eq!(gate.submit(now), SubmitOutcome::Rejected);
    }
    gate.set_input("0812");
    assert_eq!(gate.submit(now), SubmitOutcome::Unlocked);
}

#[test]
fn previously_unlocked_flag_is_honoured() {
    let mut store = MemoryStore::new();
    store.set(UNLOCK_KEY, UNLOCKED_VALUE).unwrap();
    let gate = Gate::open(store, "0812", "");
    assert!(gate.is_unlocked());
}

#[test]
fn other_flag_values_mean_locked() {
    let mut store = MemoryStore::new();
    store.set(UNLOCK_KEY, "true").unwrap();
    assert!(!Gate::open(store, "0812", "").is_unlocked());
}

#[test]
fn relock_clears_the_flag() {
    let mut gate = Gate::open(MemoryStore::new(), "0812", "");
    gate.set_input("0812");
    gate.submit(Instant::now());
    gate.relock();
    assert_eq!(gate.state(), GateState::Locked);
    assert_eq!(gate.store().get(UNLOCK_KEY).unwrap(), None);
}

#[test]
fn unavailable_storage_reads_as_locked_and_still_unlocks_in_memory() {
    let mut gate = Gate::open(BrokenStore, "0812", "");
    assert!(!gate.is_unlocked());
    gate.set_input("0812");
    assert_eq!(gate.submit(Instant::now()), SubmitOutcome::Unlocked);
    assert!(gate.is_unlocked());
    gate.relock();
    assert!(!gate.is_unlocked());
}
