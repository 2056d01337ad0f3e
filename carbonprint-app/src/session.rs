//! The app-owned holder of the most recent calculation.

use carbonprint_schemas::{result::CalculationResult, user::UserProfile};
use chrono::{DateTime, Local};
use std::sync::{Arc, PoisonError, RwLock};

/// One stored calculation, as read back by the display and export steps.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub generation: u64,
    pub result: Arc<CalculationResult>,
    pub user: Option<UserProfile>,
    pub computed_at: DateTime<Local>,
}

/// Holds the latest result. Each `store` supersedes the previous snapshot whole.
#[derive(Debug, Default)]
pub struct ResultSlot {
    current: RwLock<Option<Snapshot>>,
}

impl ResultSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(
        &self,
        result: CalculationResult,
        user: Option<UserProfile>,
        computed_at: DateTime<Local>,
    ) -> Snapshot {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let generation = guard.as_ref().map_or(1, |s| s.generation + 1);
        let snapshot = Snapshot {
            generation,
            result: Arc::new(result),
            user,
            computed_at,
        };
        *guard = Some(snapshot.clone());
        snapshot
    }

    pub fn current(&self) -> Option<Snapshot> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
