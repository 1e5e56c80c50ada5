use actix_web::{HttpResponse, web};

use crate::{
    error::ServiceError,
    model::attendance::{MarkAttendance, MarkOutcome, UpdateAttendance},
    models::ApiResponse,
    service::Ledger,
};

/// All attendance records joined with employee name and department
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "All attendance records", body = Object, example = json!({
            "success": true,
            "data": [{
                "id": 1,
                "employee_id": "EMP001",
                "date": "2026-01-05",
                "status": "Present",
                "created_at": "2026-01-05T09:00:00Z",
                "full_name": "John Doe",
                "department": "Engineering"
            }]
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(ledger: web::Data<Ledger>) -> Result<HttpResponse, ServiceError> {
    let entries = ledger.list_all().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(entries)))
}

/// Attendance records of one employee, latest date first
#[utoipa::path(
    get,
    path = "/api/attendance/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance records of the employee", body = Object),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_employee_attendance(
    ledger: web::Data<Ledger>,
    path: web::Path<String>,
) -> Result<HttpResponse, ServiceError> {
    let employee_id = path.into_inner();
    let records = ledger.list_for_employee(&employee_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(records)))
}

/// Get one attendance record by ID
#[utoipa::path(
    get,
    path = "/api/attendance/records/{id}",
    params(
        ("id" = i64, Path, description = "Attendance record ID")
    ),
    responses(
        (status = 200, description = "Attendance record found", body = Object),
        (status = 404, description = "Attendance record not found", body = Object, example = json!({
            "success": false,
            "message": "Attendance record not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn get_attendance(
    ledger: web::Data<Ledger>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    match ledger.get_by_id(path.into_inner()).await? {
        Some(record) => Ok(HttpResponse::Ok().json(ApiResponse::ok(record))),
        None => Err(ServiceError::NotFound("Attendance record not found".to_string())),
    }
}

/// Mark attendance; a second mark for the same employee and date updates it
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance marked", body = Object, example = json!({
            "success": true,
            "message": "Attendance marked successfully",
            "data": {
                "id": 1,
                "employee_id": "EMP001",
                "date": "2026-01-05",
                "status": "Present",
                "created_at": "2026-01-05T09:00:00Z"
            }
        })),
        (status = 200, description = "Existing record updated", body = Object, example = json!({
            "success": true,
            "message": "Attendance updated successfully"
        })),
        (status = 400, description = "Missing employeeId/date, invalid value or unknown employee", body = Object, example = json!({
            "success": false,
            "message": "Employee with ID EMP404 does not exist"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    ledger: web::Data<Ledger>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ServiceError> {
    let marked = ledger.mark(payload.into_inner()).await?;

    let response = match marked.outcome {
        MarkOutcome::Created => HttpResponse::Created().json(
            ApiResponse::ok(marked.record).with_message("Attendance marked successfully"),
        ),
        MarkOutcome::Updated => HttpResponse::Ok().json(
            ApiResponse::ok(marked.record).with_message("Attendance updated successfully"),
        ),
    };
    Ok(response)
}

/// Update the status of an attendance record
#[utoipa::path(
    put,
    path = "/api/attendance/{id}",
    params(
        ("id" = i64, Path, description = "Attendance record ID")
    ),
    request_body = UpdateAttendance,
    responses(
        (status = 200, description = "Attendance updated", body = Object),
        (status = 400, description = "Status missing or invalid", body = Object, example = json!({
            "success": false,
            "message": "Status is required"
        })),
        (status = 404, description = "Attendance record not found", body = Object),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn update_attendance(
    ledger: web::Data<Ledger>,
    path: web::Path<i64>,
    payload: web::Json<UpdateAttendance>,
) -> Result<HttpResponse, ServiceError> {
    let id = path.into_inner();

    let record = ledger.update_by_id(id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok()
        .json(ApiResponse::ok(record).with_message("Attendance updated successfully")))
}

/// Delete an attendance record by ID
#[utoipa::path(
    delete,
    path = "/api/attendance/{id}",
    params(
        ("id" = i64, Path, description = "Attendance record ID")
    ),
    responses(
        (status = 200, description = "Attendance record deleted", body = Object, example = json!({
            "success": true,
            "message": "Attendance record deleted successfully"
        })),
        (status = 404, description = "Attendance record not found", body = Object),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    ledger: web::Data<Ledger>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ServiceError> {
    ledger.delete_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::done("Attendance record deleted successfully")))
}

/// Delete the attendance record of an employee on a given date
#[utoipa::path(
    delete,
    path = "/api/attendance/{employee_id}/{date}",
    params(
        ("employee_id", Path, description = "Employee ID"),
        ("date", Path, description = "Date as YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Attendance record deleted", body = Object),
        (status = 400, description = "Malformed date", body = Object),
        (status = 404, description = "Attendance record not found", body = Object),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance_on(
    ledger: web::Data<Ledger>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ServiceError> {
    let (employee_id, date) = path.into_inner();

    ledger.delete_by_key(&employee_id, &date).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::done("Attendance record deleted successfully")))
}
