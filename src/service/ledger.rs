use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{info, instrument};

use super::{Directory, non_blank};
use crate::error::ServiceError;
use crate::model::attendance::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, MarkAttendance, MarkedAttendance,
    UpdateAttendance,
};
use crate::store::{AttendanceStore, StoreError};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Owns the per-(employee, date) attendance records.
#[derive(Clone)]
pub struct Ledger {
    store: Arc<dyn AttendanceStore>,
    directory: Directory,
}

impl Ledger {
    pub fn new(store: Arc<dyn AttendanceStore>, directory: Directory) -> Self {
        Self { store, directory }
    }

    pub async fn list_for_employee(
        &self,
        employee_id: &str,
    ) -> Result<Vec<AttendanceRecord>, ServiceError> {
        Ok(self.store.list_attendance_for(employee_id).await?)
    }

    pub async fn list_all(&self) -> Result<Vec<AttendanceEntry>, ServiceError> {
        Ok(self.store.list_attendance().await?)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<AttendanceRecord>, ServiceError> {
        Ok(self.store.find_attendance(id).await?)
    }

    /// Records the status for an employee on a day. A second mark for the
    /// same day overwrites the status of the existing record.
    #[instrument(skip(self, input), fields(employee_id = ?input.employee_id, date = ?input.date))]
    pub async fn mark(&self, input: MarkAttendance) -> Result<MarkedAttendance, ServiceError> {
        let employee_id = non_blank(input.employee_id.as_deref())
            .ok_or_else(|| ServiceError::Validation("Employee ID is required".to_string()))?;
        let date = non_blank(input.date.as_deref())
            .ok_or_else(|| ServiceError::Validation("Date is required".to_string()))
            .and_then(parse_date)?;
        let status = match non_blank(input.status.as_deref()) {
            Some(raw) => parse_status(raw)?,
            None => AttendanceStatus::default(),
        };

        if self.directory.get_by_id(employee_id).await?.is_none() {
            return Err(unknown_employee(employee_id));
        }

        // the employee may vanish between the check and the write
        let marked = self
            .store
            .upsert_attendance(employee_id, date, status)
            .await
            .map_err(|e| match e {
                StoreError::ForeignKeyViolation => unknown_employee(employee_id),
                other => other.into(),
            })?;

        info!(
            attendance_id = marked.record.id,
            outcome = ?marked.outcome,
            %status,
            "Attendance marked"
        );
        Ok(marked)
    }

    pub async fn update_by_id(
        &self,
        id: i64,
        input: UpdateAttendance,
    ) -> Result<AttendanceRecord, ServiceError> {
        let status = non_blank(input.status.as_deref())
            .ok_or_else(|| ServiceError::Validation("Status is required".to_string()))
            .and_then(parse_status)?;

        self.store
            .update_attendance_status(id, status)
            .await?
            .ok_or_else(record_not_found)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        if !self.store.delete_attendance(id).await? {
            return Err(record_not_found());
        }
        Ok(())
    }

    pub async fn delete_by_key(&self, employee_id: &str, date: &str) -> Result<(), ServiceError> {
        let date = parse_date(date.trim())?;
        if !self.store.delete_attendance_on(employee_id, date).await? {
            return Err(record_not_found());
        }
        Ok(())
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ServiceError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        ServiceError::Validation(format!("Invalid date '{raw}', expected YYYY-MM-DD"))
    })
}

fn parse_status(raw: &str) -> Result<AttendanceStatus, ServiceError> {
    raw.parse().map_err(|_| {
        ServiceError::Validation(format!(
            "Invalid status '{raw}'. Allowed: Present, Absent"
        ))
    })
}

fn unknown_employee(employee_id: &str) -> ServiceError {
    ServiceError::Referential(format!("Employee with ID {employee_id} does not exist"))
}

fn record_not_found() -> ServiceError {
    ServiceError::NotFound("Attendance record not found".to_string())
}
