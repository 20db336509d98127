use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::models::{Outcome, Player};
use crate::storage::{KeyValueStore, StoreError};

/// Key the score counters live under in the store.
pub const SCORES_KEY: &str = "tic_tac_toe.scores";

/// Cumulative results across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scores {
    pub x: u32,
    pub o: u32,
    pub draws: u32,
}

impl Scores {
    pub fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Win(Player::X) => &mut self.x,
            Outcome::Win(Player::O) => &mut self.o,
            Outcome::Draw => &mut self.draws,
        };
        *counter = counter.saturating_add(1);
    }

    pub fn get(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Win(Player::X) => self.x,
            Outcome::Win(Player::O) => self.o,
            Outcome::Draw => self.draws,
        }
    }

    pub fn total(&self) -> u64 {
        u64::from(self.x) + u64::from(self.o) + u64::from(self.draws)
    }

    /// Reads the stored counters, or `None` when nothing was ever saved.
    pub fn try_load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Option<Scores>, StoreError> {
        match store.get_string(SCORES_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Loads the stored counters. Missing, unreadable or malformed data all
    /// start from zero; the next save replaces whatever was stored.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Scores {
        match Self::try_load(store) {
            Ok(Some(scores)) => {
                debug!("Loaded scores: {:?}", scores);
                scores
            }
            Ok(None) => {
                debug!("No stored scores, starting from zero.");
                Scores::default()
            }
            Err(e) => {
                warn!("Ignoring stored scores: {}", e);
                Scores::default()
            }
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        let raw = serde_json::to_string(self)?;
        store.set_string(SCORES_KEY, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn record_increments_matching_counter() {
        let mut scores = Scores::default();
        scores.record(Outcome::Win(Player::O));
        scores.record(Outcome::Draw);
        scores.record(Outcome::Win(Player::O));

        assert_eq!(scores, Scores { x: 0, o: 2, draws: 1 });
        assert_eq!(scores.get(Outcome::Win(Player::O)), 2);
        assert_eq!(scores.total(), 3);
    }

    #[test]
    fn missing_key_loads_zero() {
        let store = MemoryStore::default();
        assert_eq!(Scores::load(&store), Scores::default());
        assert!(Scores::try_load(&store).unwrap().is_none());
    }

    #[test]
    fn malformed_value_falls_back_to_zero() {
        let mut store = MemoryStore::default();
        store.set_string(SCORES_KEY, "{not json".to_string()).unwrap();

        assert!(matches!(
            Scores::try_load(&store),
            Err(StoreError::Malformed(_))
        ));
        assert_eq!(Scores::load(&store), Scores::default());
    }

    #[test]
    fn partial_object_fills_missing_counters() {
        let mut store = MemoryStore::default();
        store.set_string(SCORES_KEY, r#"{"x": 4}"#.to_string()).unwrap();

        assert_eq!(Scores::load(&store), Scores { x: 4, o: 0, draws: 0 });
    }

    #[test]
    fn save_writes_json_object() {
        let mut store = MemoryStore::default();
        Scores { x: 1, o: 2, draws: 3 }.save(&mut store).unwrap();

        let raw = store.get_string(SCORES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value, serde_json::json!({ "x": 1, "o": 2, "draws": 3 }));
        assert_eq!(Scores::load(&store), Scores { x: 1, o: 2, draws: 3 });
    }
}
