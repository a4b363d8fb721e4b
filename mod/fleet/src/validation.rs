//! Structural DTO validation.
//!
//! Checks are per-field only (presence, length, range, pattern) and all
//! failures are collected before returning, so the client sees every
//! problem in one response. Cross-entity rules (uniqueness, references)
//! live in the services.

use std::sync::LazyLock;

use mottag_core::{FieldError, ServiceError};
use regex::Regex;

use crate::model::{CreateMoto, CreateTag, UpdateMoto, UpdateTag, YardInput};

/// Legacy (AAA9999) and Mercosul (AAA9A99) plate formats.
static PLATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z]{3}[0-9]{4}|[A-Z]{3}[0-9][A-Z0-9][0-9]{2})$").unwrap()
});

fn require(errors: &mut Vec<FieldError>, field: &str, value: &str, max_len: usize) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, "must not be empty"));
    } else if value.chars().count() > max_len {
        errors.push(FieldError::new(field, format!("must be at most {max_len} characters")));
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), ServiceError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(errors))
    }
}

pub fn validate_yard_input(input: &YardInput) -> Result<(), ServiceError> {
    let mut errors = Vec::new();
    require(&mut errors, "name", &input.name, 200);
    require(&mut errors, "city", &input.city, 120);
    require(&mut errors, "state", &input.state, 100);
    require(&mut errors, "country", &input.country, 100);
    if input.area_m2 < 0.0 {
        errors.push(FieldError::new("areaM2", "must be >= 0"));
    }
    finish(errors)
}

pub fn validate_create_moto(input: &CreateMoto) -> Result<(), ServiceError> {
    let mut errors = Vec::new();
    if input.yard_id.trim().is_empty() {
        errors.push(FieldError::new("yardId", "must not be empty"));
    }
    if input.plate.trim().is_empty() {
        errors.push(FieldError::new("plate", "must not be empty"));
    } else if !(7..=8).contains(&input.plate.chars().count()) {
        errors.push(FieldError::new("plate", "must be 7 to 8 characters"));
    } else if !PLATE_RE.is_match(&input.plate) {
        errors.push(FieldError::new("plate", "invalid plate"));
    }
    require(&mut errors, "model", &input.model, 120);
    finish(errors)
}

pub fn validate_update_moto(input: &UpdateMoto) -> Result<(), ServiceError> {
    let mut errors = Vec::new();
    require(&mut errors, "model", &input.model, 120);
    finish(errors)
}

pub fn validate_create_tag(input: &CreateTag) -> Result<(), ServiceError> {
    let mut errors = Vec::new();
    require(&mut errors, "serial", &input.serial, 100);
    battery_range(&mut errors, input.battery_pct);
    finish(errors)
}

pub fn validate_update_tag(input: &UpdateTag) -> Result<(), ServiceError> {
    let mut errors = Vec::new();
    battery_range(&mut errors, input.battery_pct);
    finish(errors)
}

fn battery_range(errors: &mut Vec<FieldError>, pct: i64) {
    if !(0..=100).contains(&pct) {
        errors.push(FieldError::new("batteryPct", "must be between 0 and 100"));
    }
}
