//! Persistence seam for the directory and ledger.
//!
//! Services hold the store behind a trait object so the concrete client is
//! built once at startup and handed in.

use async_trait::async_trait;
use chrono::NaiveDate;
use derive_more::{Display, Error};

use crate::model::attendance::{AttendanceEntry, AttendanceRecord, AttendanceStatus, MarkedAttendance};
use crate::model::employee::{Employee, EmployeeProfile};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgStore;

/// SQLSTATE codes the services react to.
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

#[derive(Debug, Display, Error)]
pub enum StoreError {
    #[display(fmt = "unique constraint violated")]
    UniqueViolation,

    #[display(fmt = "foreign key constraint violated")]
    ForeignKeyViolation,

    #[display(fmt = "{}", _0)]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return StoreError::UniqueViolation,
                Some(FOREIGN_KEY_VIOLATION) => return StoreError::ForeignKeyViolation,
                _ => {}
            }
        }
        StoreError::Database(err)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Newest first.
    async fn list_employees(&self) -> StoreResult<Vec<Employee>>;

    async fn find_employee(&self, employee_id: &str) -> StoreResult<Option<Employee>>;

    /// Fails with `UniqueViolation` when the id is taken.
    async fn insert_employee(&self, profile: &EmployeeProfile) -> StoreResult<Employee>;

    /// Overwrites name, email and department. `None` when the id is unknown.
    async fn update_employee(&self, profile: &EmployeeProfile) -> StoreResult<Option<Employee>>;

    /// Removes the employee together with its attendance rows.
    async fn delete_employee(&self, employee_id: &str) -> StoreResult<bool>;
}

#[async_trait]
pub trait AttendanceStore: Send + Sync {
    /// Latest date first.
    async fn list_attendance_for(&self, employee_id: &str) -> StoreResult<Vec<AttendanceRecord>>;

    /// Latest date first, then by employee name.
    async fn list_attendance(&self) -> StoreResult<Vec<AttendanceEntry>>;

    async fn find_attendance(&self, id: i64) -> StoreResult<Option<AttendanceRecord>>;

    /// Inserts the `(employee_id, date)` row or overwrites its status in a
    /// single statement. Fails with `ForeignKeyViolation` for unknown
    /// employees.
    async fn upsert_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> StoreResult<MarkedAttendance>;

    async fn update_attendance_status(
        &self,
        id: i64,
        status: AttendanceStatus,
    ) -> StoreResult<Option<AttendanceRecord>>;

    async fn delete_attendance(&self, id: i64) -> StoreResult<bool>;

    async fn delete_attendance_on(&self, employee_id: &str, date: NaiveDate) -> StoreResult<bool>;
}
