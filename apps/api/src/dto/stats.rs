use inkpost_application::{DailySiteStats, SiteStatsOverview};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Today's and all-time visit counters.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/site-stats-overview-response.ts"
)]
pub struct SiteStatsOverviewResponse {
    #[serde(rename = "todayPV")]
    pub today_page_views: i64,
    #[serde(rename = "todayUV")]
    pub today_unique_visitors: i64,
    #[serde(rename = "totalPV")]
    pub total_page_views: i64,
    #[serde(rename = "totalUV")]
    pub total_unique_visitors: i64,
}

/// Counters of one day.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/daily-site-stats-response.ts"
)]
pub struct DailySiteStatsResponse {
    pub date: String,
    pub page_views: i64,
    pub unique_visitors: i64,
}

/// Query string of the recent-days listing.
#[derive(Debug, Deserialize)]
pub struct RecentStatsQuery {
    pub days: Option<u32>,
}

impl From<SiteStatsOverview> for SiteStatsOverviewResponse {
    fn from(value: SiteStatsOverview) -> Self {
        Self {
            today_page_views: value.today_page_views,
            today_unique_visitors: value.today_unique_visitors,
            total_page_views: value.total_page_views,
            total_unique_visitors: value.total_unique_visitors,
        }
    }
}

impl From<DailySiteStats> for DailySiteStatsResponse {
    fn from(value: DailySiteStats) -> Self {
        Self {
            date: value.day.format("%Y-%m-%d").to_string(),
            page_views: value.page_views,
            unique_visitors: value.unique_visitors,
        }
    }
}
