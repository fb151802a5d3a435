use crate::errors::AppError;
use crate::export;
use crate::models::{
    CreateTargetRequest, DashboardParams, DashboardResponse, DashboardRow, HistoryParams,
    HistoryResponse, LogResponse, NewTargetForm, RenameTargetRequest, TargetListResponse,
    TargetSummary, TrackerData, UpsertLogRequest,
};
use crate::range::{self, ViewMode};
use crate::report;
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui;
use axum::{
    Form, Json,
    extract::{Path, Query, State},
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Redirect, Response},
};
use chrono::{NaiveDate, Utc};

pub async fn dashboard_page() -> Html<String> {
    Html(ui::render_dashboard(&range::day_key(today())))
}

pub async fn history_page() -> Html<&'static str> {
    Html(ui::HISTORY_HTML)
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Result<Json<DashboardResponse>, AppError> {
    let today = today();
    let view = ViewMode::parse(params.view.as_deref());
    let offset = params.offset.unwrap_or(0);

    let data = state.data.lock().await;
    let days = range::dashboard_range(view, offset, data.earliest_created_day(), today);
    let targets = data
        .habits
        .iter()
        .map(|habit| DashboardRow {
            id: habit.id,
            name: habit.name.clone(),
            done: days.iter().map(|day| habit.is_done(day)).collect(),
        })
        .collect();
    let streak = report::current_streak(&data.habits, today);

    Ok(Json(DashboardResponse {
        view: view.as_str().to_string(),
        offset,
        today: range::day_key(today),
        days,
        targets,
        streak,
    }))
}

pub async fn get_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HistoryParams>,
) -> Result<Json<HistoryResponse>, AppError> {
    check_gate(&state, &headers, params.key.as_deref())?;

    let view = ViewMode::parse(params.view.as_deref());
    let from = parse_filter_date(params.from.as_deref())?;
    let to = parse_filter_date(params.to.as_deref())?;

    let data = state.data.lock().await;
    let days = range::history_range(view, from, to, data.earliest_created_day(), today());
    let misses = report::miss_summary(&data.habits, &days);
    let records = report::flatten(&data.habits, &days);

    Ok(Json(HistoryResponse {
        view: view.as_str().to_string(),
        day_count: days.len(),
        misses,
        records,
    }))
}

pub async fn export_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<HistoryParams>,
) -> Result<Response, AppError> {
    check_gate(&state, &headers, params.key.as_deref())?;

    let view = ViewMode::parse(params.view.as_deref());
    let from = parse_filter_date(params.from.as_deref())?;
    let to = parse_filter_date(params.to.as_deref())?;

    let data = state.data.lock().await;
    let days = range::history_range(view, from, to, data.earliest_created_day(), today());
    let misses = report::miss_summary(&data.habits, &days);
    let records = report::flatten(&data.habits, &days);
    drop(data);

    let bytes = export::build_report(&records, &misses)?;
    let headers = [
        (
            header::CONTENT_TYPE,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"Tracker_Report.xlsx\"",
        ),
    ];
    Ok((headers, bytes).into_response())
}

pub async fn create_target(
    State(state): State<AppState>,
    Json(payload): Json<CreateTargetRequest>,
) -> Result<Json<TargetListResponse>, AppError> {
    let mut data = state.data.lock().await;
    if data.create_habit(&payload.name, Utc::now()).is_some() {
        persist_data(&state.config.data_path, &data).await?;
    }
    Ok(Json(target_list(&data)))
}

pub async fn create_target_form(
    State(state): State<AppState>,
    Form(form): Form<NewTargetForm>,
) -> Result<Redirect, AppError> {
    let mut data = state.data.lock().await;
    if data.create_habit(&form.name, Utc::now()).is_some() {
        persist_data(&state.config.data_path, &data).await?;
    }
    Ok(Redirect::to("/"))
}

pub async fn rename_target(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<RenameTargetRequest>,
) -> Result<Json<TargetListResponse>, AppError> {
    let mut data = state.data.lock().await;
    if !data.rename_habit(id, &payload.name) {
        return Err(AppError::not_found(format!("unknown target: {id}")));
    }
    persist_data(&state.config.data_path, &data).await?;
    Ok(Json(target_list(&data)))
}

pub async fn delete_target(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<TargetListResponse>, AppError> {
    let mut data = state.data.lock().await;
    if !data.delete_habit(id) {
        return Err(AppError::not_found(format!("unknown target: {id}")));
    }
    persist_data(&state.config.data_path, &data).await?;
    Ok(Json(target_list(&data)))
}

pub async fn upsert_log(
    State(state): State<AppState>,
    Json(payload): Json<UpsertLogRequest>,
) -> Result<Json<LogResponse>, AppError> {
    let day = range::parse_day_key(&payload.date)
        .ok_or_else(|| AppError::bad_request(format!("invalid date: {}", payload.date)))?;
    // Re-format to normalize whatever zero-padding the client sent.
    let key = range::day_key(day);

    let mut data = state.data.lock().await;
    if !data.upsert_log(payload.habit_id, &key, payload.completed) {
        return Err(AppError::not_found(format!(
            "unknown target: {}",
            payload.habit_id
        )));
    }
    persist_data(&state.config.data_path, &data).await?;

    Ok(Json(LogResponse {
        habit_id: payload.habit_id,
        date: key,
        completed: payload.completed,
    }))
}

fn check_gate(state: &AppState, headers: &HeaderMap, query_key: Option<&str>) -> Result<(), AppError> {
    let header_key = headers.get("x-access-key").and_then(|v| v.to_str().ok());
    let presented = header_key.or(query_key);
    if state.gate.allows(presented) {
        Ok(())
    } else {
        Err(AppError::unauthorized("access key required"))
    }
}

fn parse_filter_date(value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value {
        None => Ok(None),
        // Empty form fields submit as empty strings.
        Some("") => Ok(None),
        Some(raw) => range::parse_day_key(raw)
            .map(Some)
            .ok_or_else(|| AppError::bad_request(format!("invalid date: {raw}"))),
    }
}

fn target_list(data: &TrackerData) -> TargetListResponse {
    TargetListResponse {
        targets: data
            .habits
            .iter()
            .map(|habit| TargetSummary {
                id: habit.id,
                name: habit.name.clone(),
                created: range::day_key(habit.created_day()),
            })
            .collect(),
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
