use axum::Json;
use axum::extract::{Query, State};
use axum::http::HeaderMap;

use crate::dto::{
    DailySiteStatsResponse, GenericMessageResponse, RecentStatsQuery, SiteStatsOverviewResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /api/stats/visit - Count a page view for the calling visitor.
pub async fn record_visit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<GenericMessageResponse>> {
    let visitor = visitor_address(&headers);
    state
        .site_stats_service
        .record_visit(visitor.as_deref())
        .await?;

    Ok(Json(GenericMessageResponse {
        message: "visit recorded".to_owned(),
    }))
}

pub async fn overview_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<SiteStatsOverviewResponse>> {
    let overview = state.site_stats_service.overview().await?;

    Ok(Json(SiteStatsOverviewResponse::from(overview)))
}

/// GET /api/stats/recent?days=N - Daily counters, newest first.
pub async fn recent_stats_handler(
    State(state): State<AppState>,
    Query(query): Query<RecentStatsQuery>,
) -> ApiResult<Json<Vec<DailySiteStatsResponse>>> {
    let days = state
        .site_stats_service
        .recent(query.days)
        .await?
        .into_iter()
        .map(DailySiteStatsResponse::from)
        .collect();

    Ok(Json(days))
}

/// First `X-Forwarded-For` entry, then `X-Real-IP`.
fn visitor_address(headers: &HeaderMap) -> Option<String> {
    header_text(headers, "x-forwarded-for")
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .or_else(|| header_text(headers, "x-real-ip"))
        .map(ToOwned::to_owned)
}

fn header_text<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
