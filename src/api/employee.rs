use actix_web::{HttpResponse, web};
use tracing::debug;

use crate::{
    error::ServiceError,
    model::employee::{CreateEmployee, UpdateEmployee},
    models::ApiResponse,
    service::Directory,
};

/// List employees, newest first
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = Object, example = json!({
            "success": true,
            "data": [{
                "employee_id": "EMP001",
                "full_name": "John Doe",
                "email": "john.doe@company.com",
                "department": "Engineering",
                "created_at": "2026-01-01T09:00:00Z"
            }]
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    directory: web::Data<Directory>,
) -> Result<HttpResponse, ServiceError> {
    let employees = directory.list().await?;
    debug!(count = employees.len(), "Listed employees");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(employees)))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = Object),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "success": false,
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    directory: web::Data<Directory>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let employee_id = path.into_inner();

    match directory.get_by_id(&employee_id).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(ApiResponse::ok(employee))),
        None => Err(ServiceError::NotFound("Employee not found".to_string())),
    }
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = Object, example = json!({
            "success": true,
            "message": "Employee added successfully",
            "data": {
                "employee_id": "EMP001",
                "full_name": "John Doe",
                "email": "john.doe@company.com",
                "department": "Engineering",
                "created_at": "2026-01-01T09:00:00Z"
            }
        })),
        (status = 400, description = "Missing name or duplicate employee ID", body = Object, example = json!({
            "success": false,
            "message": "Employee with ID EMP001 already exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    directory: web::Data<Directory>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ServiceError> {
    let employee = directory.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created()
        .json(ApiResponse::ok(employee).with_message("Employee added successfully")))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated successfully", body = Object),
        (status = 400, description = "Full name is required", body = Object, example = json!({
            "success": false,
            "message": "Full name is required"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "success": false,
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    directory: web::Data<Directory>,
    path: web::Path<String>,
    payload: web::Json<UpdateEmployee>,
) -> Result<HttpResponse, ServiceError> {
    let employee_id = path.into_inner();

    let employee = directory.update(&employee_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::ok(employee).with_message("Employee updated successfully")))
}

/// Delete Employee together with its attendance history
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "success": true,
            "message": "Employee deleted successfully"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "success": false,
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error", body = Object)
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    directory: web::Data<Directory>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let employee_id = path.into_inner();

    directory.delete(&employee_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::done("Employee deleted successfully")))
}
