use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use mottag_core::{PagedResult, PageParams, Resource, ServiceError};

use super::{AppState, query_prefix};
use crate::model::{CreateTag, Tag, UpdateTag};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tags", post(create).get(list))
        .route("/tags/{id}", get(get_one).put(update).delete(delete_one))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    serial: Option<String>,
    sort_by: Option<String>,
    sort_dir: Option<String>,
    page: Option<i64>,
    page_size: Option<i64>,
}

async fn list(
    State(svc): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<PagedResult<Tag>>, ServiceError> {
    let page = PageParams::new(q.page, q.page_size);
    let result = svc.list_tags(
        q.serial.as_deref(),
        q.sort_by.as_deref(),
        q.sort_dir.as_deref(),
        &page,
    )?;
    let prefix = query_prefix(&[
        ("serial", q.serial.as_deref()),
        ("sortBy", q.sort_by.as_deref()),
        ("sortDir", q.sort_dir.as_deref()),
    ]);
    Ok(Json(result.with_links(|p, ps| {
        format!("/api/v1/tags?{prefix}page={p}&pageSize={ps}")
    })))
}

async fn get_one(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resource<Tag>>, ServiceError> {
    let tag = svc.get_tag(&id)?;
    Ok(Json(Resource::new("tags", &id, tag)))
}

async fn create(
    State(svc): State<AppState>,
    Json(body): Json<CreateTag>,
) -> Result<impl IntoResponse, ServiceError> {
    let tag = svc.create_tag(body)?;
    let location = format!("/api/v1/tags/{}", tag.id);
    let id = tag.id.clone();
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(Resource::new("tags", &id, tag)),
    ))
}

async fn update(
    State(svc): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateTag>,
) -> Result<Json<Resource<Tag>>, ServiceError> {
    let tag = svc.update_tag(&id, body)?;
    Ok(Json(Resource::new("tags", &id, tag)))
}

async fn delete_one(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    svc.delete_tag(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
