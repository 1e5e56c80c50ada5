//! Loads a sample roster into the employee directory. Employees that already
//! exist are skipped, so the tool can be run repeatedly.

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info, warn};

use hrms_lite::config::Config;
use hrms_lite::db::init_db;
use hrms_lite::error::ServiceError;
use hrms_lite::model::employee::CreateEmployee;
use hrms_lite::service::Directory;
use hrms_lite::store::PgStore;

const SAMPLE_EMPLOYEES: &[(&str, &str, &str, &str)] = &[
    ("EMP001", "John Doe", "john.doe@company.com", "Engineering"),
    ("EMP002", "Jane Smith", "jane.smith@company.com", "Marketing"),
    ("EMP003", "Bob Johnson", "bob.johnson@company.com", "Sales"),
    ("EMP004", "Alice Williams", "alice.williams@company.com", "HR"),
    ("EMP005", "Charlie Brown", "charlie.brown@company.com", "Finance"),
];

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt().with_target(false).init();

    let config = Config::from_env()?;
    let pool = init_db(&config).await?;
    let directory = Directory::new(Arc::new(PgStore::new(pool.clone())));

    let mut added = 0usize;
    let mut skipped = 0usize;
    let mut failed = 0usize;

    for &(employee_id, full_name, email, department) in SAMPLE_EMPLOYEES {
        let input = CreateEmployee {
            employee_id: Some(employee_id.to_string()),
            full_name: Some(full_name.to_string()),
            email: Some(email.to_string()),
            department: Some(department.to_string()),
        };

        match directory.create(input).await {
            Ok(employee) => {
                info!(
                    employee_id = %employee.employee_id,
                    full_name = %employee.full_name,
                    department = %employee.department,
                    "Added"
                );
                added += 1;
            }
            Err(ServiceError::Conflict(_)) => {
                warn!(employee_id, "Already exists, skipping");
                skipped += 1;
            }
            Err(e) => {
                error!(employee_id, error = %e, "Failed to add employee");
                failed += 1;
            }
        }
    }

    info!(added, skipped, failed, "Seeding finished");

    pool.close().await;
    Ok(())
}
