use mottag_core::{PagedResult, PageParams, ServiceError, new_id};
use mottag_sql::Value;
use tracing::info;

use super::FleetService;
use crate::model::{CreateTag, Tag, UpdateTag};
use crate::query::{Filter, is_desc, order_sql, sort_column};
use crate::validation::{validate_create_tag, validate_update_tag};

const SORT_KEYS: &[(&str, &str)] = &[("serial", "serial")];

impl FleetService {
    pub fn create_tag(&self, input: CreateTag) -> Result<Tag, ServiceError> {
        validate_create_tag(&input)?;

        if self.exists("tags", "serial = ?1", &[Value::Text(input.serial.clone())])? {
            return Err(ServiceError::Conflict(format!(
                "tag with serial '{}' already exists",
                input.serial
            )));
        }
        if let Some(ref moto_id) = input.moto_id {
            self.check_moto_free(moto_id, None)?;
        }

        let record = Tag {
            id: new_id(),
            moto_id: input.moto_id,
            serial: input.serial,
            tag_type: input.tag_type,
            battery_pct: input.battery_pct,
            last_seen_at: None,
        };
        self.insert_record("tags", &record.id, &record, &tag_indexes(&record))?;
        info!(id = %record.id, serial = %record.serial, "tag created");
        Ok(record)
    }

    pub fn get_tag(&self, id: &str) -> Result<Tag, ServiceError> {
        self.get_record("tags", id, "tag")
    }

    pub fn list_tags(
        &self,
        serial: Option<&str>,
        sort_by: Option<&str>,
        sort_dir: Option<&str>,
        page: &PageParams,
    ) -> Result<PagedResult<Tag>, ServiceError> {
        let mut filter = Filter::new();
        if let Some(serial) = serial.map(str::trim).filter(|s| !s.is_empty()) {
            filter.eq("serial", Value::Text(serial.to_string()));
        }
        let order = order_sql(sort_column(sort_by, SORT_KEYS, "serial"), is_desc(sort_dir));
        self.list_records("tags", filter, &order, page)
    }

    /// Serial is immutable. When the moto association changes, the
    /// existence and one-tag-per-moto checks run again, excluding this
    /// tag's own prior association.
    pub fn update_tag(&self, id: &str, input: UpdateTag) -> Result<Tag, ServiceError> {
        validate_update_tag(&input)?;
        let current = self.get_tag(id)?;

        if current.moto_id != input.moto_id {
            if let Some(ref moto_id) = input.moto_id {
                self.check_moto_free(moto_id, Some(id))?;
            }
        }

        let updated = Tag {
            moto_id: input.moto_id,
            tag_type: input.tag_type,
            battery_pct: input.battery_pct,
            ..current
        };
        self.update_record("tags", id, &updated, &tag_indexes(&updated), "tag")?;
        Ok(updated)
    }

    pub fn delete_tag(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("tags", id)
    }

    /// The moto must exist and must not already carry another tag.
    fn check_moto_free(&self, moto_id: &str, exclude_tag: Option<&str>) -> Result<(), ServiceError> {
        if !self.exists("motos", "id = ?1", &[Value::Text(moto_id.to_string())])? {
            return Err(ServiceError::NotFound(format!("moto '{moto_id}' not found")));
        }
        let taken = match exclude_tag {
            Some(tag_id) => self.exists(
                "tags",
                "moto_id = ?1 AND id != ?2",
                &[Value::Text(moto_id.to_string()), Value::Text(tag_id.to_string())],
            )?,
            None => self.exists("tags", "moto_id = ?1", &[Value::Text(moto_id.to_string())])?,
        };
        if taken {
            return Err(ServiceError::Conflict(format!(
                "moto '{moto_id}' already has a tag"
            )));
        }
        Ok(())
    }
}

fn tag_indexes(tag: &Tag) -> Vec<(&'static str, Value)> {
    vec![
        (
            "moto_id",
            match &tag.moto_id {
                Some(id) => Value::Text(id.clone()),
                None => Value::Null,
            },
        ),
        ("serial", Value::Text(tag.serial.clone())),
        ("battery_pct", Value::Integer(tag.battery_pct)),
    ]
}
