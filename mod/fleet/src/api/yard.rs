use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use mottag_core::{PagedResult, PageParams, Resource, ServiceError};

use super::{AppState, query_prefix};
use crate::model::{Yard, YardInput};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/patios", post(create).get(list))
        .route("/patios/{id}", get(get_one).put(update).delete(delete_one))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    search: Option<String>,
    sort_by: Option<String>,
    sort_dir: Option<String>,
    page: Option<i64>,
    page_size: Option<i64>,
}

async fn list(
    State(svc): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<PagedResult<Yard>>, ServiceError> {
    let page = PageParams::new(q.page, q.page_size);
    let result = svc.list_yards(
        q.search.as_deref(),
        q.sort_by.as_deref(),
        q.sort_dir.as_deref(),
        &page,
    )?;
    let prefix = query_prefix(&[
        ("search", q.search.as_deref()),
        ("sortBy", q.sort_by.as_deref()),
        ("sortDir", q.sort_dir.as_deref()),
    ]);
    Ok(Json(result.with_links(|p, ps| {
        format!("/api/v1/patios?{prefix}page={p}&pageSize={ps}")
    })))
}

async fn get_one(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resource<Yard>>, ServiceError> {
    let yard = svc.get_yard(&id)?;
    Ok(Json(Resource::new("patios", &id, yard)))
}

async fn create(
    State(svc): State<AppState>,
    Json(body): Json<YardInput>,
) -> Result<impl IntoResponse, ServiceError> {
    let yard = svc.create_yard(body)?;
    let location = format!("/api/v1/patios/{}", yard.id);
    let id = yard.id.clone();
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(Resource::new("patios", &id, yard)),
    ))
}

async fn update(
    State(svc): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<YardInput>,
) -> Result<Json<Resource<Yard>>, ServiceError> {
    let yard = svc.update_yard(&id, body)?;
    Ok(Json(Resource::new("patios", &id, yard)))
}

async fn delete_one(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    svc.delete_yard(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
