use std::sync::Arc;

use tracing::{info, instrument};

use super::non_blank;
use crate::error::ServiceError;
use crate::model::employee::{CreateEmployee, Employee, EmployeeProfile, UpdateEmployee};
use crate::store::{EmployeeStore, StoreError};
use crate::utils::employee_id::generate_employee_id;

pub const DEFAULT_DEPARTMENT: &str = "General";

/// Owns employee identity and profile fields.
#[derive(Clone)]
pub struct Directory {
    store: Arc<dyn EmployeeStore>,
}

impl Directory {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Employee>, ServiceError> {
        Ok(self.store.list_employees().await?)
    }

    /// Absence is not an error; callers check the option.
    pub async fn get_by_id(&self, employee_id: &str) -> Result<Option<Employee>, ServiceError> {
        Ok(self.store.find_employee(employee_id).await?)
    }

    #[instrument(skip(self, input), fields(employee_id = ?input.employee_id))]
    pub async fn create(&self, input: CreateEmployee) -> Result<Employee, ServiceError> {
        let full_name = require_full_name(input.full_name.as_deref())?;
        let employee_id = match non_blank(input.employee_id.as_deref()) {
            Some(id) => id.to_string(),
            None => generate_employee_id(),
        };

        if self.store.find_employee(&employee_id).await?.is_some() {
            return Err(already_exists(&employee_id));
        }

        let profile = EmployeeProfile {
            full_name,
            email: resolve_email(input.email.as_deref()),
            department: resolve_department(input.department.as_deref()),
            employee_id,
        };

        // the primary key is the final word when two creates race
        let employee = self
            .store
            .insert_employee(&profile)
            .await
            .map_err(|e| match e {
                StoreError::UniqueViolation => already_exists(&profile.employee_id),
                other => other.into(),
            })?;

        info!(employee_id = %employee.employee_id, "Employee created");
        Ok(employee)
    }

    pub async fn update(
        &self,
        employee_id: &str,
        input: UpdateEmployee,
    ) -> Result<Employee, ServiceError> {
        let full_name = require_full_name(input.full_name.as_deref())?;

        if self.store.find_employee(employee_id).await?.is_none() {
            return Err(not_found());
        }

        let profile = EmployeeProfile {
            employee_id: employee_id.to_string(),
            full_name,
            email: resolve_email(input.email.as_deref()),
            department: resolve_department(input.department.as_deref()),
        };

        self.store
            .update_employee(&profile)
            .await?
            .ok_or_else(not_found)
    }

    /// Removes the employee and, through the store cascade, its attendance.
    pub async fn delete(&self, employee_id: &str) -> Result<(), ServiceError> {
        if !self.store.delete_employee(employee_id).await? {
            return Err(not_found());
        }
        info!(employee_id, "Employee deleted");
        Ok(())
    }
}

fn require_full_name(raw: Option<&str>) -> Result<String, ServiceError> {
    non_blank(raw)
        .map(str::to_string)
        .ok_or_else(|| ServiceError::Validation("Full name is required".to_string()))
}

fn resolve_email(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

fn resolve_department(raw: Option<&str>) -> String {
    non_blank(raw).unwrap_or(DEFAULT_DEPARTMENT).to_string()
}

fn already_exists(employee_id: &str) -> ServiceError {
    ServiceError::Conflict(format!("Employee with ID {employee_id} already exists"))
}

fn not_found() -> ServiceError {
    ServiceError::NotFound("Employee not found".to_string())
}
