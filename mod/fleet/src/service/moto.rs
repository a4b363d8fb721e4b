use mottag_core::{PagedResult, PageParams, ServiceError, new_id};
use mottag_sql::Value;
use tracing::info;

use super::FleetService;
use crate::model::{CreateMoto, Moto, MotoStatus, Tag, UpdateMoto};
use crate::query::{Filter, is_desc, order_sql, sort_column};
use crate::validation::{validate_create_moto, validate_update_moto};

const SORT_KEYS: &[(&str, &str)] = &[("plate", "plate")];

/// Optional exact-match filters for moto listing.
#[derive(Debug, Default)]
pub struct MotoFilters {
    pub yard_id: Option<String>,
    pub status: Option<MotoStatus>,
    pub plate: Option<String>,
}

impl FleetService {
    pub fn create_moto(&self, input: CreateMoto) -> Result<Moto, ServiceError> {
        validate_create_moto(&input)?;

        if !self.exists("yards", "id = ?1", &[Value::Text(input.yard_id.clone())])? {
            return Err(ServiceError::NotFound(format!(
                "yard '{}' not found",
                input.yard_id
            )));
        }
        if self.exists("motos", "plate = ?1", &[Value::Text(input.plate.clone())])? {
            return Err(ServiceError::Conflict(format!(
                "moto with plate '{}' already exists",
                input.plate
            )));
        }

        let record = Moto {
            id: new_id(),
            yard_id: input.yard_id,
            plate: input.plate,
            model: input.model,
            status: input.status.unwrap_or_default(),
        };
        self.insert_record("motos", &record.id, &record, &moto_indexes(&record))?;
        info!(id = %record.id, plate = %record.plate, "moto created");
        Ok(record)
    }

    pub fn get_moto(&self, id: &str) -> Result<Moto, ServiceError> {
        self.get_record("motos", id, "moto")
    }

    pub fn list_motos(
        &self,
        filters: &MotoFilters,
        sort_by: Option<&str>,
        sort_dir: Option<&str>,
        page: &PageParams,
    ) -> Result<PagedResult<Moto>, ServiceError> {
        let mut filter = Filter::new();
        if let Some(ref yard_id) = filters.yard_id {
            filter.eq("yard_id", Value::Text(yard_id.clone()));
        }
        if let Some(status) = filters.status {
            filter.eq("status", Value::Text(status.as_str().to_string()));
        }
        if let Some(plate) = filters.plate.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            filter.eq("plate", Value::Text(plate.to_string()));
        }
        let order = order_sql(sort_column(sort_by, SORT_KEYS, "plate"), is_desc(sort_dir));
        self.list_records("motos", filter, &order, page)
    }

    /// Plate and yard are immutable; only model and status change.
    pub fn update_moto(&self, id: &str, input: UpdateMoto) -> Result<Moto, ServiceError> {
        validate_update_moto(&input)?;
        let current = self.get_moto(id)?;

        let updated = Moto {
            model: input.model,
            status: input.status,
            ..current
        };
        self.update_record("motos", id, &updated, &moto_indexes(&updated), "moto")?;
        Ok(updated)
    }

    /// Idempotent. A tag attached to the moto is detached first so its
    /// stored document stays consistent with the nulled column.
    pub fn delete_moto(&self, id: &str) -> Result<(), ServiceError> {
        if let Some(tag) = self.find_tag_by_moto(id)? {
            let detached = Tag {
                moto_id: None,
                ..tag
            };
            self.update_record(
                "tags",
                &detached.id,
                &detached,
                &[("moto_id", Value::Null)],
                "tag",
            )?;
        }
        self.delete_record("motos", id)
    }

    pub(crate) fn find_tag_by_moto(&self, moto_id: &str) -> Result<Option<Tag>, ServiceError> {
        let rows = self
            .sql
            .query(
                "SELECT data FROM tags WHERE moto_id = ?1",
                &[Value::Text(moto_id.to_string())],
            )
            .map_err(|e| ServiceError::Storage(e.to_string()))?;
        match rows.first().and_then(|r| r.get_str("data")) {
            Some(data) => serde_json::from_str(data)
                .map(Some)
                .map_err(|e| ServiceError::Internal(e.to_string())),
            None => Ok(None),
        }
    }
}

fn moto_indexes(moto: &Moto) -> Vec<(&'static str, Value)> {
    vec![
        ("yard_id", Value::Text(moto.yard_id.clone())),
        ("plate", Value::Text(moto.plate.clone())),
        ("model", Value::Text(moto.model.clone())),
        ("status", Value::Text(moto.status.as_str().to_string())),
    ]
}
