//! Application validation rules.
//!
//! Two deliberately separate rule sets guard writes. The create path checks a
//! complete candidate record and collects every violation into human-readable
//! messages; the update path walks the supplied fields in order and stops at
//! the first violation, reporting it as a structured [`FieldViolation`]. The
//! update path also accepts empty name fields that the create path rejects.
//! The asymmetry is an observable part of the service contract and must not
//! be unified without product sign-off.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::Serialize;
use serde_json::Value;

use super::{ApplicationPatch, NewApplication};

/// Minimum applicant age in whole years at validation time.
pub const MIN_APPLICANT_AGE_YEARS: i32 = 16;
/// Oldest model year accepted for a vehicle.
pub const MIN_VEHICLE_YEAR: i64 = 1985;
/// Fewest vehicles an application may carry.
pub const MIN_VEHICLES: usize = 1;
/// Most vehicles an application may carry.
pub const MAX_VEHICLES: usize = 3;

/// A single update-path violation in the shape the wire contract expects:
/// `{"type": "field", "msg": ..., "path": ..., "location": "body"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub msg: String,
    pub path: &'static str,
    pub location: &'static str,
}

impl FieldViolation {
    fn new(path: &'static str, msg: impl Into<String>) -> Self {
        Self {
            kind: "field",
            msg: msg.into(),
            path,
            location: "body",
        }
    }
}

/// Parse a date of birth: a plain ISO 8601 date first, then an RFC 3339
/// date-time reduced to its date.
pub fn parse_dob(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.date_naive())
        .ok()
}

/// The latest acceptable birth date: `today` minus the minimum age, keeping
/// month and day. A 29 February with no counterpart in the cutoff year rolls
/// over to 1 March.
pub fn age_cutoff(today: NaiveDate) -> NaiveDate {
    let year = today.year() - MIN_APPLICANT_AGE_YEARS;
    match NaiveDate::from_ymd_opt(year, today.month(), today.day()) {
        Some(date) => date,
        None => NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or_default(),
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

fn vehicle_text<'a>(vehicle: &'a Value, key: &str) -> &'a str {
    vehicle.get(key).and_then(Value::as_str).unwrap_or_default()
}

/// Per-vehicle rule shared by both paths: non-empty VIN, integer year within
/// `[MIN_VEHICLE_YEAR, max_year]`, non-empty make and model.
fn vehicle_is_valid(vehicle: &Value, max_year: i64) -> bool {
    let year_ok = vehicle
        .get("year")
        .and_then(Value::as_i64)
        .is_some_and(|year| (MIN_VEHICLE_YEAR..=max_year).contains(&year));

    year_ok
        && !vehicle_text(vehicle, "VIN").is_empty()
        && !vehicle_text(vehicle, "make").is_empty()
        && !vehicle_text(vehicle, "model").is_empty()
}

fn invalid_vehicle_message(vehicle: &Value) -> String {
    format!(
        "Vehicle with VIN {} has invalid data.",
        vehicle_text(vehicle, "VIN")
    )
}

fn vehicle_count_in_range(count: usize) -> bool {
    (MIN_VEHICLES..=MAX_VEHICLES).contains(&count)
}

/// Validate a complete candidate record for the create path.
///
/// Every rule runs and every failure is collected; only a `vehicles` JSON
/// parse failure short-circuits, suppressing the count and per-vehicle
/// checks. An empty result means the record is acceptable to persist.
pub fn validate_new_application(draft: &NewApplication, today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();

    if draft.first_name.is_empty() || draft.last_name.is_empty() {
        errors.push("First and Last name are required.".to_owned());
    }

    if draft.dob.is_empty() {
        errors.push("Missing DOB".to_owned());
    }
    // An absent dob is also unparseable, so it collects both messages.
    match parse_dob(&draft.dob) {
        None => errors.push("Malformed date of birth.".to_owned()),
        Some(dob) => {
            if dob > age_cutoff(today) {
                errors.push("Applicant too young.".to_owned());
            }
        }
    }

    let address_complete = !draft.street.is_empty()
        && !draft.city.is_empty()
        && !draft.state.is_empty()
        && is_digits(&draft.zip_code);
    if !address_complete {
        errors.push("Address is incomplete or ZipCode is not numeric.".to_owned());
    }

    let parsed: Value = match serde_json::from_str(&draft.vehicles) {
        Ok(value) => value,
        Err(_) => {
            errors.push("Failed to parse vehicles data. Ensure it is valid JSON.".to_owned());
            return errors;
        }
    };

    // A non-array payload parses but has no elements; only the count check
    // fires for it.
    let vehicles = parsed.as_array().map(Vec::as_slice).unwrap_or_default();
    if !vehicle_count_in_range(vehicles.len()) {
        errors.push("Vehicle count must be between 1 and 3.".to_owned());
    }
    let max_year = i64::from(today.year()) + 1;
    for vehicle in vehicles {
        if !vehicle_is_valid(vehicle, max_year) {
            errors.push(invalid_vehicle_message(vehicle));
        }
    }

    errors
}

fn optional_string(
    body: &Value,
    path: &'static str,
    message: &'static str,
) -> Result<Option<String>, FieldViolation> {
    match body.get(path) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(FieldViolation::new(path, message)),
    }
}

fn optional_non_empty(
    body: &Value,
    path: &'static str,
    message: &'static str,
) -> Result<Option<String>, FieldViolation> {
    match optional_string(body, path, message)? {
        Some(value) if value.is_empty() => Err(FieldViolation::new(path, message)),
        other => Ok(other),
    }
}

fn validate_patch_dob(body: &Value, today: NaiveDate) -> Result<Option<String>, FieldViolation> {
    let dob = optional_string(body, "dob", "Date of birth must be a valid date")?;
    if let Some(raw) = dob.as_deref() {
        // Only a value that parses as a date can violate the cutoff; an
        // unparseable string passes and is stored verbatim.
        if let Some(date) = parse_dob(raw) {
            if date > age_cutoff(today) {
                return Err(FieldViolation::new("dob", "Applicant too young."));
            }
        }
    }
    Ok(dob)
}

fn validate_patch_zip(body: &Value) -> Result<Option<String>, FieldViolation> {
    match optional_string(body, "zipCode", "ZipCode must be numeric")? {
        Some(value) if !is_digits(&value) => {
            Err(FieldViolation::new("zipCode", "ZipCode must be numeric"))
        }
        other => Ok(other),
    }
}

fn validate_patch_vehicles(
    body: &Value,
    today: NaiveDate,
) -> Result<Option<String>, FieldViolation> {
    let Some(raw) = optional_string(body, "vehicles", "Vehicles must be a valid JSON string.")?
    else {
        return Ok(None);
    };

    let parsed: Value = serde_json::from_str(&raw).map_err(|_| {
        FieldViolation::new("vehicles", "Vehicles must be a valid JSON string.")
    })?;
    let vehicles = match parsed.as_array() {
        Some(vehicles) if vehicle_count_in_range(vehicles.len()) => vehicles,
        _ => {
            return Err(FieldViolation::new(
                "vehicles",
                "Vehicle count must be between 1 and 3.",
            ));
        }
    };

    let max_year = i64::from(today.year()) + 1;
    for vehicle in vehicles {
        if !vehicle_is_valid(vehicle, max_year) {
            return Err(FieldViolation::new(
                "vehicles",
                invalid_vehicle_message(vehicle),
            ));
        }
    }

    Ok(Some(raw))
}

/// Validate a partial candidate record for the update path.
///
/// Fields are checked in declaration order and only when present; the first
/// violation is returned and later fields are not inspected. Unknown fields
/// are ignored. Name fields are checked for type only — the create path's
/// non-empty rule does not apply here.
pub fn validate_application_patch(
    body: &Value,
    today: NaiveDate,
) -> Result<ApplicationPatch, FieldViolation> {
    let first_name = optional_string(body, "firstName", "First name must be a string")?;
    let last_name = optional_string(body, "lastName", "Last name must be a string")?;
    let dob = validate_patch_dob(body, today)?;
    let street = optional_non_empty(body, "street", "Street is required.")?;
    let city = optional_non_empty(body, "city", "City is required.")?;
    let state = optional_non_empty(body, "state", "State is required.")?;
    let zip_code = validate_patch_zip(body)?;
    let vehicles = validate_patch_vehicles(body, today)?;

    Ok(ApplicationPatch {
        first_name,
        last_name,
        dob,
        street,
        city,
        state,
        zip_code,
        vehicles,
    })
}
