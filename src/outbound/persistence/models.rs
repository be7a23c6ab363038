//! Diesel row types for the applications table.

use diesel::prelude::*;

use crate::domain::application::{Application, ApplicationPatch, NewApplication};

use super::schema::applications;

/// Queryable row for stored applications.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ApplicationRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub vehicles: String,
}

impl From<ApplicationRow> for Application {
    fn from(row: ApplicationRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            dob: row.dob,
            street: row.street,
            city: row.city,
            state: row.state,
            zip_code: row.zip_code,
            vehicles: row.vehicles,
        }
    }
}

/// Insertable row for new applications; the id comes from the sequence.
#[derive(Debug, Insertable)]
#[diesel(table_name = applications)]
pub(crate) struct NewApplicationRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub dob: &'a str,
    pub street: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip_code: &'a str,
    pub vehicles: &'a str,
}

impl<'a> From<&'a NewApplication> for NewApplicationRow<'a> {
    fn from(application: &'a NewApplication) -> Self {
        Self {
            first_name: &application.first_name,
            last_name: &application.last_name,
            dob: &application.dob,
            street: &application.street,
            city: &application.city,
            state: &application.state,
            zip_code: &application.zip_code,
            vehicles: &application.vehicles,
        }
    }
}

/// Changeset writing only the supplied fields; `None` columns are skipped.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = applications)]
pub(crate) struct ApplicationChangeset<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub dob: Option<&'a str>,
    pub street: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: Option<&'a str>,
    pub zip_code: Option<&'a str>,
    pub vehicles: Option<&'a str>,
}

impl<'a> From<&'a ApplicationPatch> for ApplicationChangeset<'a> {
    fn from(patch: &'a ApplicationPatch) -> Self {
        Self {
            first_name: patch.first_name.as_deref(),
            last_name: patch.last_name.as_deref(),
            dob: patch.dob.as_deref(),
            street: patch.street.as_deref(),
            city: patch.city.as_deref(),
            state: patch.state.as_deref(),
            zip_code: patch.zip_code.as_deref(),
            vehicles: patch.vehicles.as_deref(),
        }
    }
}
