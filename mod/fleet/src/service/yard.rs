use mottag_core::{PagedResult, PageParams, ServiceError, new_id};
use mottag_sql::Value;
use tracing::info;

use super::FleetService;
use crate::model::{Yard, YardInput};
use crate::query::{Filter, is_desc, order_sql, sort_column};
use crate::validation::validate_yard_input;

const SORT_KEYS: &[(&str, &str)] = &[("name", "name")];

impl FleetService {
    pub fn create_yard(&self, input: YardInput) -> Result<Yard, ServiceError> {
        validate_yard_input(&input)?;

        // Name is unique, case-sensitive exact match.
        if self.exists("yards", "name = ?1", &[Value::Text(input.name.clone())])? {
            return Err(ServiceError::Conflict(format!(
                "yard with name '{}' already exists",
                input.name
            )));
        }

        let record = Yard {
            id: new_id(),
            name: input.name,
            city: input.city,
            state: input.state,
            country: input.country,
            area_m2: input.area_m2,
        };
        self.insert_record("yards", &record.id, &record, &yard_indexes(&record))?;
        info!(id = %record.id, name = %record.name, "yard created");
        Ok(record)
    }

    pub fn get_yard(&self, id: &str) -> Result<Yard, ServiceError> {
        self.get_record("yards", id, "yard")
    }

    pub fn list_yards(
        &self,
        search: Option<&str>,
        sort_by: Option<&str>,
        sort_dir: Option<&str>,
        page: &PageParams,
    ) -> Result<PagedResult<Yard>, ServiceError> {
        let mut filter = Filter::new();
        if let Some(needle) = search.map(str::trim).filter(|s| !s.is_empty()) {
            filter.contains("name", needle);
        }
        let order = order_sql(sort_column(sort_by, SORT_KEYS, "name"), is_desc(sort_dir));
        self.list_records("yards", filter, &order, page)
    }

    pub fn update_yard(&self, id: &str, input: YardInput) -> Result<Yard, ServiceError> {
        validate_yard_input(&input)?;
        let current = self.get_yard(id)?;

        // Re-check uniqueness only when the name actually changes,
        // excluding this yard itself.
        if current.name != input.name
            && self.exists(
                "yards",
                "name = ?1 AND id != ?2",
                &[Value::Text(input.name.clone()), Value::Text(id.to_string())],
            )?
        {
            return Err(ServiceError::Conflict(format!(
                "yard with name '{}' already exists",
                input.name
            )));
        }

        let updated = Yard {
            id: current.id,
            name: input.name,
            city: input.city,
            state: input.state,
            country: input.country,
            area_m2: input.area_m2,
        };
        self.update_record("yards", id, &updated, &yard_indexes(&updated), "yard")?;
        Ok(updated)
    }

    /// Idempotent: deleting a missing yard succeeds. A yard with motos
    /// still attached is rejected by the restrict FK.
    pub fn delete_yard(&self, id: &str) -> Result<(), ServiceError> {
        self.delete_record("yards", id).map_err(|e| match e {
            ServiceError::Conflict(_) => ServiceError::Conflict(format!(
                "yard '{id}' still has motos attached"
            )),
            other => other,
        })
    }
}

fn yard_indexes(yard: &Yard) -> Vec<(&'static str, Value)> {
    vec![
        ("name", Value::Text(yard.name.clone())),
        ("city", Value::Text(yard.city.clone())),
        ("state", Value::Text(yard.state.clone())),
        ("country", Value::Text(yard.country.clone())),
        ("area_m2", Value::Real(yard.area_m2)),
    ]
}
