use actix_web::{HttpResponse, Responder};

use crate::models::ApiResponse;

/// Liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Server is running", body = Object, example = json!({
            "success": true,
            "message": "Server is running"
        }))
    ),
    tag = "Health"
)]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(ApiResponse::done("Server is running"))
}
