//! Daily page views and unique visitors.

use std::sync::Arc;

use chrono::{Days, NaiveDate, Utc};

use inkpost_core::{AppError, AppResult};

use crate::{DailySiteStats, SiteStatsRepository, VisitorRegistry};


/// Days returned by [`SiteStatsService::recent`] when none are requested.
pub const DEFAULT_RECENT_DAYS: u32 = 7;

/// Largest window accepted by [`SiteStatsService::recent`].
pub const MAX_RECENT_DAYS: u32 = 366;

/// Counters for today and for all time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SiteStatsOverview {
    /// Page views recorded today.
    pub today_page_views: i64,
    /// Unique visitors recorded today.
    pub today_unique_visitors: i64,
    /// Page views over every recorded day.
    pub total_page_views: i64,
    /// Sum of daily unique visitors over every recorded day.
    pub total_unique_visitors: i64,
}

/// Application service for visit statistics.
#[derive(Clone)]
pub struct SiteStatsService {
    repository: Arc<dyn SiteStatsRepository>,
    visitors: Arc<dyn VisitorRegistry>,
}

impl SiteStatsService {
    /// Creates a new site stats service.
    #[must_use]
    pub fn new(
        repository: Arc<dyn SiteStatsRepository>,
        visitors: Arc<dyn VisitorRegistry>,
    ) -> Self {
        Self {
            repository,
            visitors,
        }
    }

    /// Records a page view for today.
    pub async fn record_visit(&self, visitor: Option<&str>) -> AppResult<()> {
        self.record_visit_on(today(), visitor).await
    }

    /// Records a page view on `day`, counting the visitor once per day.
    ///
    /// A visit without an address adds a page view but never a unique visitor.
    pub async fn record_visit_on(&self, day: NaiveDate, visitor: Option<&str>) -> AppResult<()> {
        let first_visit = match visitor.map(str::trim).filter(|value| !value.is_empty()) {
            Some(visitor) => self.visitors.register_visit(day, visitor).await?,
            None => false,
        };

        self.repository
            .increment(day, 1, i64::from(first_visit))
            .await
    }

    /// Returns today's and all-time counters.
    pub async fn overview(&self) -> AppResult<SiteStatsOverview> {
        let today = self.repository.find_day(today()).await?;
        let totals = self.repository.totals().await?;

        Ok(SiteStatsOverview {
            today_page_views: today.map_or(0, |stats| stats.page_views),
            today_unique_visitors: today.map_or(0, |stats| stats.unique_visitors),
            total_page_views: totals.page_views,
            total_unique_visitors: totals.unique_visitors,
        })
    }

    /// Returns the recorded days of the last `days` days, newest first.
    pub async fn recent(&self, days: Option<u32>) -> AppResult<Vec<DailySiteStats>> {
        self.recent_until(today(), days).await
    }

    async fn recent_until(
        &self,
        today: NaiveDate,
        days: Option<u32>,
    ) -> AppResult<Vec<DailySiteStats>> {
        let days = days.unwrap_or(DEFAULT_RECENT_DAYS);
        if !(1..=MAX_RECENT_DAYS).contains(&days) {
            return Err(AppError::Validation(format!(
                "days must be between 1 and {MAX_RECENT_DAYS}"
            )));
        }

        let since = today
            .checked_sub_days(Days::new(u64::from(days - 1)))
            .unwrap_or(NaiveDate::MIN);
        self.repository.list_since(since).await
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
