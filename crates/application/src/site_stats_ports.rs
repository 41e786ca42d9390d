//! Visit statistics ports.

use async_trait::async_trait;
use chrono::NaiveDate;

use inkpost_core::AppResult;

/// Page views and unique visitors for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySiteStats {
    /// Calendar day in UTC.
    pub day: NaiveDate,
    /// Page views recorded that day.
    pub page_views: i64,
    /// Distinct visitors recorded that day.
    pub unique_visitors: i64,
}

/// Totals across all recorded days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteStatsTotals {
    /// Sum of page views.
    pub page_views: i64,
    /// Sum of daily unique visitors.
    pub unique_visitors: i64,
}

/// Repository port for daily counters.
#[async_trait]
pub trait SiteStatsRepository: Send + Sync {
    /// Atomically adds to the counters of `day`, creating the row when missing.
    async fn increment(
        &self,
        day: NaiveDate,
        page_views: i64,
        unique_visitors: i64,
    ) -> AppResult<()>;

    /// Returns the counters of `day`, if recorded.
    async fn find_day(&self, day: NaiveDate) -> AppResult<Option<DailySiteStats>>;

    /// Returns the sums over every recorded day.
    async fn totals(&self) -> AppResult<SiteStatsTotals>;

    /// Returns days on or after `since`, newest first.
    async fn list_since(&self, since: NaiveDate) -> AppResult<Vec<DailySiteStats>>;
}

/// Remembers which visitors were already counted on a given day.
#[async_trait]
pub trait VisitorRegistry: Send + Sync {
    /// Records the visitor for `day`. Returns `true` the first time per day.
    async fn register_visit(&self, day: NaiveDate, visitor: &str) -> AppResult<bool>;
}
