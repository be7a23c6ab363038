//! Insurance application domain types.
//!
//! An [`Application`] is one intake record identified by an integer id. The
//! `vehicles` field is a JSON-encoded text describing 1–3 embedded
//! [`Vehicle`] records; it is validated at write time and stored verbatim,
//! never normalised into rows.

mod validation;


pub use validation::{
    FieldViolation, MAX_VEHICLES, MIN_APPLICANT_AGE_YEARS, MIN_VEHICLES, MIN_VEHICLE_YEAR,
    age_cutoff, parse_dob, validate_application_patch, validate_new_application,
};

use serde::{Deserialize, Serialize};

/// Placeholder quote returned by the submit operation. Not computed from
/// application data.
pub const FIXED_QUOTE: i32 = 123;

/// A stored insurance application record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    /// ISO 8601 date of birth, stored as entered.
    pub dob: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    /// JSON-encoded vehicle list, stored verbatim.
    pub vehicles: String,
}

/// Candidate record for the create path. Every field is required; the
/// create-path validator reports absent fields as violations rather than
/// rejecting the payload outright.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewApplication {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub vehicles: String,
}

impl NewApplication {
    /// Attach the id assigned by the store.
    pub fn into_application(self, id: i32) -> Application {
        Application {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            dob: self.dob,
            street: self.street,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            vehicles: self.vehicles,
        }
    }
}

/// Partial update produced by the update-path validator. Absent fields retain
/// their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub dob: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub vehicles: Option<String>,
}

impl ApplicationPatch {
    /// True when no field is supplied; such a patch writes nothing.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.dob.is_none()
            && self.street.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.zip_code.is_none()
            && self.vehicles.is_none()
    }

    /// Overlay the supplied fields onto a stored record.
    pub fn apply_to(&self, application: &mut Application) {
        let Self {
            first_name,
            last_name,
            dob,
            street,
            city,
            state,
            zip_code,
            vehicles,
        } = self;
        if let Some(value) = first_name {
            application.first_name = value.clone();
        }
        if let Some(value) = last_name {
            application.last_name = value.clone();
        }
        if let Some(value) = dob {
            application.dob = value.clone();
        }
        if let Some(value) = street {
            application.street = value.clone();
        }
        if let Some(value) = city {
            application.city = value.clone();
        }
        if let Some(value) = state {
            application.state = value.clone();
        }
        if let Some(value) = zip_code {
            application.zip_code = value.clone();
        }
        if let Some(value) = vehicles {
            application.vehicles = value.clone();
        }
    }
}

/// One vehicle embedded in an application's `vehicles` text.
///
/// The wire key for the identification number is uppercase `VIN`. The
/// validators inspect raw JSON rather than this struct so that a single
/// malformed element is reported per vehicle instead of failing the whole
/// payload decode; the struct documents the well-formed shape and backs test
/// fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "VIN")]
    pub vin: String,
    pub year: i32,
    pub make: String,
    pub model: String,
}
