//! In-process store for tests. Mirrors the constraints of the SQL schema:
//! primary keys, the `(employee_id, date)` unique key, the foreign key and
//! the delete cascade.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};

use super::{AttendanceStore, EmployeeStore, StoreError, StoreResult};
use crate::model::attendance::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, MarkOutcome, MarkedAttendance,
};
use crate::model::employee::{Employee, EmployeeProfile};
use crate::service::{Directory, Ledger};

#[derive(Default)]
struct Tables {
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    last_attendance_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn attendance_rows(&self) -> usize {
        self.tables.lock().unwrap().attendance.len()
    }
}

/// Directory and ledger wired to a fresh in-memory store.
pub fn services() -> (Directory, Ledger, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let directory = Directory::new(store.clone());
    let ledger = Ledger::new(store.clone(), directory.clone());
    (directory, ledger, store)
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let tables = self.tables.lock().unwrap();
        // later inserts win ties on created_at
        let mut rows: Vec<Employee> = tables.employees.iter().rev().cloned().collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn find_employee(&self, employee_id: &str) -> StoreResult<Option<Employee>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .employees
            .iter()
            .find(|e| e.employee_id == employee_id)
            .cloned())
    }

    async fn insert_employee(&self, profile: &EmployeeProfile) -> StoreResult<Employee> {
        let mut tables = self.tables.lock().unwrap();
        if tables
            .employees
            .iter()
            .any(|e| e.employee_id == profile.employee_id)
        {
            return Err(StoreError::UniqueViolation);
        }

        let employee = Employee {
            employee_id: profile.employee_id.clone(),
            full_name: profile.full_name.clone(),
            email: profile.email.clone(),
            department: profile.department.clone(),
            created_at: Utc::now(),
        };
        tables.employees.push(employee.clone());
        Ok(employee)
    }

    async fn update_employee(&self, profile: &EmployeeProfile) -> StoreResult<Option<Employee>> {
        let mut tables = self.tables.lock().unwrap();
        let Some(employee) = tables
            .employees
            .iter_mut()
            .find(|e| e.employee_id == profile.employee_id)
        else {
            return Ok(None);
        };

        employee.full_name = profile.full_name.clone();
        employee.email = profile.email.clone();
        employee.department = profile.department.clone();
        Ok(Some(employee.clone()))
    }

    async fn delete_employee(&self, employee_id: &str) -> StoreResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.employees.len();
        tables.employees.retain(|e| e.employee_id != employee_id);
        if tables.employees.len() == before {
            return Ok(false);
        }
        tables.attendance.retain(|a| a.employee_id != employee_id);
        Ok(true)
    }
}

#[async_trait]
impl AttendanceStore for MemoryStore {
    async fn list_attendance_for(&self, employee_id: &str) -> StoreResult<Vec<AttendanceRecord>> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<AttendanceRecord> = tables
            .attendance
            .iter()
            .filter(|a| a.employee_id == employee_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn list_attendance(&self) -> StoreResult<Vec<AttendanceEntry>> {
        let tables = self.tables.lock().unwrap();
        let mut rows: Vec<AttendanceEntry> = tables
            .attendance
            .iter()
            .filter_map(|record| {
                let employee = tables
                    .employees
                    .iter()
                    .find(|e| e.employee_id == record.employee_id)?;
                Some(AttendanceEntry {
                    record: record.clone(),
                    full_name: employee.full_name.clone(),
                    department: employee.department.clone(),
                })
            })
            .collect();
        rows.sort_by(|a, b| {
            b.record
                .date
                .cmp(&a.record.date)
                .then_with(|| a.full_name.cmp(&b.full_name))
        });
        Ok(rows)
    }

    async fn find_attendance(&self, id: i64) -> StoreResult<Option<AttendanceRecord>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.attendance.iter().find(|a| a.id == id).cloned())
    }

    async fn upsert_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> StoreResult<MarkedAttendance> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.employees.iter().any(|e| e.employee_id == employee_id) {
            return Err(StoreError::ForeignKeyViolation);
        }

        if let Some(existing) = tables
            .attendance
            .iter_mut()
            .find(|a| a.employee_id == employee_id && a.date == date)
        {
            existing.status = status;
            return Ok(MarkedAttendance {
                record: existing.clone(),
                outcome: MarkOutcome::Updated,
            });
        }

        tables.last_attendance_id += 1;
        let record = AttendanceRecord {
            id: tables.last_attendance_id,
            employee_id: employee_id.to_string(),
            date,
            status,
            created_at: Utc::now(),
        };
        tables.attendance.push(record.clone());
        Ok(MarkedAttendance {
            record,
            outcome: MarkOutcome::Created,
        })
    }

    async fn update_attendance_status(
        &self,
        id: i64,
        status: AttendanceStatus,
    ) -> StoreResult<Option<AttendanceRecord>> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .attendance
            .iter_mut()
            .find(|a| a.id == id)
            .map(|record| {
                record.status = status;
                record.clone()
            }))
    }

    async fn delete_attendance(&self, id: i64) -> StoreResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.attendance.len();
        tables.attendance.retain(|a| a.id != id);
        Ok(tables.attendance.len() < before)
    }

    async fn delete_attendance_on(&self, employee_id: &str, date: NaiveDate) -> StoreResult<bool> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.attendance.len();
        tables
            .attendance
            .retain(|a| !(a.employee_id == employee_id && a.date == date));
        Ok(tables.attendance.len() < before)
    }
}

/// Employee store whose lookups always miss, as if a concurrent create
/// landed between the existence check and the insert.
pub struct StaleLookups(pub Arc<MemoryStore>);

#[async_trait]
impl EmployeeStore for StaleLookups {
    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        self.0.list_employees().await
    }

    async fn find_employee(&self, _employee_id: &str) -> StoreResult<Option<Employee>> {
        Ok(None)
    }

    async fn insert_employee(&self, profile: &EmployeeProfile) -> StoreResult<Employee> {
        self.0.insert_employee(profile).await
    }

    async fn update_employee(&self, profile: &EmployeeProfile) -> StoreResult<Option<Employee>> {
        self.0.update_employee(profile).await
    }

    async fn delete_employee(&self, employee_id: &str) -> StoreResult<bool> {
        self.0.delete_employee(employee_id).await
    }
}

/// Attendance store that deletes the employee right before each upsert, as
/// if a concurrent delete landed after the existence check.
pub struct DeleteBeforeWrite(pub Arc<MemoryStore>);

#[async_trait]
impl AttendanceStore for DeleteBeforeWrite {
    async fn list_attendance_for(&self, employee_id: &str) -> StoreResult<Vec<AttendanceRecord>> {
        self.0.list_attendance_for(employee_id).await
    }

    async fn list_attendance(&self) -> StoreResult<Vec<AttendanceEntry>> {
        self.0.list_attendance().await
    }

    async fn find_attendance(&self, id: i64) -> StoreResult<Option<AttendanceRecord>> {
        self.0.find_attendance(id).await
    }

    async fn upsert_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> StoreResult<MarkedAttendance> {
        self.0.delete_employee(employee_id).await?;
        self.0.upsert_attendance(employee_id, date, status).await
    }

    async fn update_attendance_status(
        &self,
        id: i64,
        status: AttendanceStatus,
    ) -> StoreResult<Option<AttendanceRecord>> {
        self.0.update_attendance_status(id, status).await
    }

    async fn delete_attendance(&self, id: i64) -> StoreResult<bool> {
        self.0.delete_attendance(id).await
    }

    async fn delete_attendance_on(&self, employee_id: &str, date: NaiveDate) -> StoreResult<bool> {
        self.0.delete_attendance_on(employee_id, date).await
    }
}
