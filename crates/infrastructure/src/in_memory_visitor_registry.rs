//! Process-local visitor registry for single-instance deployments.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::Mutex;

use inkpost_application::VisitorRegistry;
use inkpost_core::AppResult;

/// Keeps the visitors of the current day in memory and forgets them when the day changes.
#[derive(Default)]
pub struct InMemoryVisitorRegistry {
    state: Mutex<DailyVisitors>,
}

#[derive(Default)]
struct DailyVisitors {
    day: Option<NaiveDate>,
    visitors: HashSet<String>,
}

impl InMemoryVisitorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VisitorRegistry for InMemoryVisitorRegistry {
    async fn register_visit(&self, day: NaiveDate, visitor: &str) -> AppResult<bool> {
        let mut state = self.state.lock().await;
        if state.day != Some(day) {
            state.day = Some(day);
            state.visitors.clear();
        }

        Ok(state.visitors.insert(visitor.to_owned()))
    }
}
