//! PostgreSQL-backed daily visit counters.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use inkpost_application::{DailySiteStats, SiteStatsRepository, SiteStatsTotals};
use inkpost_core::{AppError, AppResult};

/// PostgreSQL implementation of the site stats repository port.
#[derive(Clone)]
pub struct PostgresSiteStatsRepository {
    pool: PgPool,
}

impl PostgresSiteStatsRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DailyRow {
    day: NaiveDate,
    page_views: i64,
    unique_visitors: i64,
}

impl From<DailyRow> for DailySiteStats {
    fn from(row: DailyRow) -> Self {
        Self {
            day: row.day,
            page_views: row.page_views,
            unique_visitors: row.unique_visitors,
        }
    }
}

#[async_trait]
impl SiteStatsRepository for PostgresSiteStatsRepository {
    async fn increment(
        &self,
        day: NaiveDate,
        page_views: i64,
        unique_visitors: i64,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO site_stats (day, page_views, unique_visitors)
            VALUES ($1, $2, $3)
            ON CONFLICT (day) DO UPDATE
            SET page_views = site_stats.page_views + EXCLUDED.page_views,
                unique_visitors = site_stats.unique_visitors + EXCLUDED.unique_visitors
            "#,
        )
        .bind(day)
        .bind(page_views)
        .bind(unique_visitors)
        .execute(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to record visit: {error}")))?;

        Ok(())
    }

    async fn find_day(&self, day: NaiveDate) -> AppResult<Option<DailySiteStats>> {
        let row = sqlx::query_as::<_, DailyRow>(
            "SELECT day, page_views, unique_visitors FROM site_stats WHERE day = $1",
        )
        .bind(day)
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to load daily stats: {error}")))?;

        Ok(row.map(DailySiteStats::from))
    }

    async fn totals(&self) -> AppResult<SiteStatsTotals> {
        let (page_views, unique_visitors) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            SELECT COALESCE(SUM(page_views), 0)::BIGINT,
                   COALESCE(SUM(unique_visitors), 0)::BIGINT
            FROM site_stats
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to sum site stats: {error}")))?;

        Ok(SiteStatsTotals {
            page_views,
            unique_visitors,
        })
    }

    async fn list_since(&self, since: NaiveDate) -> AppResult<Vec<DailySiteStats>> {
        let rows = sqlx::query_as::<_, DailyRow>(
            r#"
            SELECT day, page_views, unique_visitors
            FROM site_stats
            WHERE day >= $1
            ORDER BY day DESC
            "#,
        )
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| AppError::Internal(format!("failed to list daily stats: {error}")))?;

        Ok(rows.into_iter().map(DailySiteStats::from).collect())
    }
}
