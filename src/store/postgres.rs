use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::debug;

use super::{AttendanceStore, EmployeeStore, StoreResult};
use crate::model::attendance::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, MarkOutcome, MarkedAttendance,
};
use crate::model::employee::{Employee, EmployeeProfile};

const EMPLOYEE_COLUMNS: &str = "employee_id, full_name, email, department, created_at";
const ATTENDANCE_COLUMNS: &str = "id, employee_id, date, status, created_at";

/// PostgreSQL-backed store sharing one connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UpsertedRow {
    #[sqlx(flatten)]
    record: AttendanceRecord,
    inserted: bool,
}

#[async_trait]
impl EmployeeStore for PgStore {
    async fn list_employees(&self) -> StoreResult<Vec<Employee>> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY created_at DESC");
        debug!(sql = %sql, "Fetching employees");

        let rows = sqlx::query_as::<_, Employee>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn find_employee(&self, employee_id: &str) -> StoreResult<Option<Employee>> {
        let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE employee_id = $1");

        let row = sqlx::query_as::<_, Employee>(&sql)
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_employee(&self, profile: &EmployeeProfile) -> StoreResult<Employee> {
        let sql = format!(
            r#"
            INSERT INTO employees (employee_id, full_name, email, department)
            VALUES ($1, $2, $3, $4)
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        );
        debug!(employee_id = %profile.employee_id, "Inserting employee");

        let row = sqlx::query_as::<_, Employee>(&sql)
            .bind(&profile.employee_id)
            .bind(&profile.full_name)
            .bind(&profile.email)
            .bind(&profile.department)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_employee(&self, profile: &EmployeeProfile) -> StoreResult<Option<Employee>> {
        let sql = format!(
            r#"
            UPDATE employees
            SET full_name = $1, email = $2, department = $3
            WHERE employee_id = $4
            RETURNING {EMPLOYEE_COLUMNS}
            "#
        );
        debug!(employee_id = %profile.employee_id, "Updating employee");

        let row = sqlx::query_as::<_, Employee>(&sql)
            .bind(&profile.full_name)
            .bind(&profile.email)
            .bind(&profile.department)
            .bind(&profile.employee_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_employee(&self, employee_id: &str) -> StoreResult<bool> {
        // attendance rows go with it through ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(employee_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl AttendanceStore for PgStore {
    async fn list_attendance_for(&self, employee_id: &str) -> StoreResult<Vec<AttendanceRecord>> {
        let sql = format!(
            "SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE employee_id = $1 ORDER BY date DESC"
        );
        debug!(sql = %sql, employee_id, "Fetching attendance for employee");

        let rows = sqlx::query_as::<_, AttendanceRecord>(&sql)
            .bind(employee_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_attendance(&self) -> StoreResult<Vec<AttendanceEntry>> {
        let rows = sqlx::query_as::<_, AttendanceEntry>(
            r#"
            SELECT a.id, a.employee_id, a.date, a.status, a.created_at,
                   e.full_name, e.department
            FROM attendance a
            JOIN employees e ON a.employee_id = e.employee_id
            ORDER BY a.date DESC, e.full_name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_attendance(&self, id: i64) -> StoreResult<Option<AttendanceRecord>> {
        let sql = format!("SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE id = $1");

        let row = sqlx::query_as::<_, AttendanceRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn upsert_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> StoreResult<MarkedAttendance> {
        // xmax is zero only for a freshly inserted tuple
        let sql = format!(
            r#"
            INSERT INTO attendance (employee_id, date, status)
            VALUES ($1, $2, $3)
            ON CONFLICT (employee_id, date) DO UPDATE SET status = EXCLUDED.status
            RETURNING {ATTENDANCE_COLUMNS}, (xmax = 0) AS inserted
            "#
        );
        debug!(employee_id, %date, %status, "Upserting attendance");

        let row = sqlx::query_as::<_, UpsertedRow>(&sql)
            .bind(employee_id)
            .bind(date)
            .bind(status.as_ref())
            .fetch_one(&self.pool)
            .await?;

        let outcome = if row.inserted {
            MarkOutcome::Created
        } else {
            MarkOutcome::Updated
        };
        Ok(MarkedAttendance {
            record: row.record,
            outcome,
        })
    }

    async fn update_attendance_status(
        &self,
        id: i64,
        status: AttendanceStatus,
    ) -> StoreResult<Option<AttendanceRecord>> {
        let sql = format!(
            "UPDATE attendance SET status = $1 WHERE id = $2 RETURNING {ATTENDANCE_COLUMNS}"
        );

        let row = sqlx::query_as::<_, AttendanceRecord>(&sql)
            .bind(status.as_ref())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete_attendance(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM attendance WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_attendance_on(&self, employee_id: &str, date: NaiveDate) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM attendance WHERE employee_id = $1 AND date = $2")
            .bind(employee_id)
            .bind(date)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
