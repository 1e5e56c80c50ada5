use crate::model::attendance::{
    AttendanceEntry, AttendanceRecord, AttendanceStatus, MarkAttendance, UpdateAttendance,
};
use crate::model::employee::{CreateEmployee, Employee, UpdateEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

Keeps the employee directory and the daily attendance ledger of a small organization.

### Key Features
- **Employee Management**
  - Create, update, list, view and delete employees
  - Deleting an employee removes its attendance history
- **Attendance Management**
  - Mark an employee `Present` or `Absent` for a day
  - Marking the same employee and day again updates the existing record

### Response Format
Every response uses the envelope `{success, data?, message?, error?}`.

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::api::health::health,

        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee,

        crate::api::attendance::list_attendance,
        crate::api::attendance::list_employee_attendance,
        crate::api::attendance::get_attendance,
        crate::api::attendance::mark_attendance,
        crate::api::attendance::update_attendance,
        crate::api::attendance::delete_attendance,
        crate::api::attendance::delete_attendance_on
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            UpdateEmployee,
            AttendanceStatus,
            AttendanceRecord,
            AttendanceEntry,
            MarkAttendance,
            UpdateAttendance
        )
    ),
    tags(
        (name = "Employee", description = "Employee directory APIs"),
        (name = "Attendance", description = "Attendance ledger APIs"),
        (name = "Health", description = "Liveness check"),
    )
)]
pub struct ApiDoc;
