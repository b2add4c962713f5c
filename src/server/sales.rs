use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use chrono::Local;
use serde::{Deserialize, Serialize};

use super::response::{ApiResponse, Status, timestamp};
use super::state::AppState;
use crate::sales::{
    self, FilterOptions, FunnelStage, GroupTotal, Overview, Sale, SalesFilter, TrendPoint,
};

pub async fn overview(State(state): State<AppState>) -> ApiResponse<Overview> {
    ApiResponse::success(sales::overview(state.sales(), Local::now().date_naive()))
}

pub async fn regions(State(state): State<AppState>) -> ApiResponse<Vec<GroupTotal>> {
    ApiResponse::success(sales::by_region(state.sales()))
}

pub async fn products(State(state): State<AppState>) -> ApiResponse<Vec<GroupTotal>> {
    ApiResponse::success(sales::by_product(state.sales()))
}

pub async fn reps(State(state): State<AppState>) -> ApiResponse<Vec<GroupTotal>> {
    ApiResponse::success(sales::by_rep(state.sales()))
}

pub async fn funnel(State(state): State<AppState>) -> ApiResponse<Vec<FunnelStage>> {
    ApiResponse::success(sales::funnel(state.sales()))
}

#[derive(Debug, Deserialize)]
pub struct TrendsQuery {
    months: Option<String>,
}

pub async fn trends(
    State(state): State<AppState>,
    Query(query): Query<TrendsQuery>,
) -> ApiResponse<Vec<TrendPoint>> {
    ApiResponse::success(sales::trends(state.sales(), query.months.as_deref()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FilteredSales<'a> {
    status: Status,
    data: Vec<&'a Sale>,
    total_records: usize,
    filters: &'a SalesFilter,
    timestamp: String,
}

pub async fn data(
    State(state): State<AppState>,
    Query(filter): Query<SalesFilter>,
) -> Response {
    let data = sales::filter_sales(state.sales(), &filter);
    Json(FilteredSales {
        status: Status::Success,
        total_records: data.len(),
        data,
        filters: &filter,
        timestamp: timestamp(),
    })
    .into_response()
}

pub async fn filters(State(state): State<AppState>) -> ApiResponse<FilterOptions> {
    ApiResponse::success(sales::filter_options(state.sales()))
}
