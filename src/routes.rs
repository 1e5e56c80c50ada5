use crate::{
    api::{attendance, employee, health},
    config::Config,
    models::ApiResponse,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, error::InternalError, web};

pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-peer-IP limiter. Build it once and share it across workers so they
/// count against the same quota.
pub fn build_limiter(requests_per_min: u32) -> RateLimit {
    let burst = requests_per_min.max(1);
    let per_ms = (60_000 / burst as u64).max(1);

    GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(burst)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .expect("period and burst are non-zero")
}

/// Malformed JSON bodies still get the response envelope.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response =
            HttpResponse::BadRequest().json(ApiResponse::failure(format!("Invalid request body: {err}")));
        InternalError::from_response(err, response).into()
    })
}

/// A path segment that does not parse (e.g. a non-numeric record id) names
/// no resource, so it answers 404 inside the envelope.
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response =
            HttpResponse::NotFound().json(ApiResponse::failure(format!("Invalid path: {err}")));
        InternalError::from_response(err, response).into()
    })
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, limiter: &RateLimit) {
    // registered ahead of the scope so health checks are never throttled
    cfg.service(
        web::resource(format!("{}/health", config.api_prefix))
            .route(web::get().to(health::health)),
    );

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(Governor::new(limiter))
            .app_data(json_config())
            .app_data(path_config())
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(
                        web::resource("")
                            .route(web::get().to(attendance::list_attendance))
                            .route(web::post().to(attendance::mark_attendance)),
                    )
                    // /attendance/records/{id}, ahead of the two-segment key route
                    .service(
                        web::resource("/records/{id}")
                            .route(web::get().to(attendance::get_attendance)),
                    )
                    // GET takes an employee id, PUT/DELETE a record id
                    .service(
                        web::resource("/{key}")
                            .route(web::get().to(attendance::list_employee_attendance))
                            .route(web::put().to(attendance::update_attendance))
                            .route(web::delete().to(attendance::delete_attendance)),
                    )
                    // /attendance/{employee_id}/{date}
                    .service(
                        web::resource("/{employee_id}/{date}")
                            .route(web::delete().to(attendance::delete_attendance_on)),
                    ),
            ),
    );
}
