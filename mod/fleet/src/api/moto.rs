use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use mottag_core::{PagedResult, PageParams, Resource, ServiceError};

use super::{AppState, query_prefix};
use crate::model::{CreateMoto, Moto, MotoStatus, UpdateMoto};
use crate::service::moto::MotoFilters;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/motos", post(create).get(list))
        .route("/motos/{id}", get(get_one).put(update).delete(delete_one))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListQuery {
    yard_id: Option<String>,
    status: Option<MotoStatus>,
    plate: Option<String>,
    sort_by: Option<String>,
    sort_dir: Option<String>,
    page: Option<i64>,
    page_size: Option<i64>,
}

async fn list(
    State(svc): State<AppState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<PagedResult<Moto>>, ServiceError> {
    let page = PageParams::new(q.page, q.page_size);
    let filters = MotoFilters {
        yard_id: q.yard_id.clone(),
        status: q.status,
        plate: q.plate.clone(),
    };
    let result = svc.list_motos(&filters, q.sort_by.as_deref(), q.sort_dir.as_deref(), &page)?;
    let prefix = query_prefix(&[
        ("yardId", q.yard_id.as_deref()),
        ("status", q.status.map(|s| s.as_str())),
        ("plate", q.plate.as_deref()),
        ("sortBy", q.sort_by.as_deref()),
        ("sortDir", q.sort_dir.as_deref()),
    ]);
    Ok(Json(result.with_links(|p, ps| {
        format!("/api/v1/motos?{prefix}page={p}&pageSize={ps}")
    })))
}

async fn get_one(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resource<Moto>>, ServiceError> {
    let moto = svc.get_moto(&id)?;
    Ok(Json(Resource::new("motos", &id, moto)))
}

async fn create(
    State(svc): State<AppState>,
    Json(body): Json<CreateMoto>,
) -> Result<impl IntoResponse, ServiceError> {
    let moto = svc.create_moto(body)?;
    let location = format!("/api/v1/motos/{}", moto.id);
    let id = moto.id.clone();
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(Resource::new("motos", &id, moto)),
    ))
}

async fn update(
    State(svc): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateMoto>,
) -> Result<Json<Resource<Moto>>, ServiceError> {
    let moto = svc.update_moto(&id, body)?;
    Ok(Json(Resource::new("motos", &id, moto)))
}

async fn delete_one(
    State(svc): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    svc.delete_moto(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
