use crate::{
    api::{attendance, employee, health},
    error::HrError,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_cors::Cors;
use actix_web::{http::header, web};

pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-peer-IP limiter. `None` when `requests_per_min` is 0 (disabled).
pub fn rate_limiter(requests_per_min: u32) -> Option<RateLimit> {
    if requests_per_min == 0 {
        return None;
    }
    let per_ms = (60_000 / requests_per_min as u64).max(1);
    GovernorConfigBuilder::default()
        .milliseconds_per_request(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
}

/// CORS for the browser UI, which is served from another origin.
pub fn cors(allowed_origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if allowed_origins.iter().any(|origin| origin == "*") {
        cors.allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str, limiter: Option<&RateLimit>) {
    let scope = web::scope(api_prefix).configure(api_routes);
    match limiter {
        Some(limit) => cfg.service(scope.wrap(Governor::new(limit))),
        None => cfg.service(scope),
    };
}

/// Handlers and extractor configs, relative to the API scope.
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        HrError::InvalidInput(format!("Invalid JSON payload: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        HrError::InvalidInput(format!("Invalid query string: {}", err)).into()
    }))
    .service(web::resource("/health").route(web::get().to(health::health)))
    .service(web::resource("/departments").route(web::get().to(health::list_departments)))
    .service(
        web::scope("/employees")
            // /employees
            .service(
                web::resource("")
                    .route(web::post().to(employee::create_employee))
                    .route(web::get().to(employee::list_employees)),
            )
            // /employees/{employee_id}
            .service(
                web::resource("/{employee_id}")
                    .route(web::get().to(employee::get_employee))
                    .route(web::delete().to(employee::delete_employee)),
            ),
    )
    .service(
        web::scope("/attendance")
            // /attendance
            .service(web::resource("").route(web::post().to(attendance::mark_attendance)))
            // /attendance/{employee_id}
            .service(
                web::resource("/{employee_id}").route(web::get().to(attendance::get_attendance)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::HrService;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::{Value, json};

    macro_rules! app {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data($service.clone())
                    .configure(|cfg| configure(cfg, "/api", None)),
            )
            .await
        };
    }

    fn asha() -> Value {
        json!({
            "employee_id": "EMP-1",
            "full_name": "Asha",
            "email": "asha@co.com",
            "department": "Engineering"
        })
    }

    #[actix_web::test]
    async fn employee_and_attendance_flow() {
        let service = web::Data::new(HrService::in_memory());
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(asha())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["employee_id"], "EMP-1");

        for (date, status) in [
            ("2024-01-01", "Present"),
            ("2024-01-02", "Present"),
            ("2024-01-03", "Absent"),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/attendance")
                .set_json(json!({ "employee_id": "EMP-1", "date": date, "status": status }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let record: Value = test::read_body_json(resp).await;
            assert_eq!(record["date"], date);
            assert_eq!(record["status"], status);
        }

        let req = test::TestRequest::get()
            .uri("/api/attendance/EMP-1")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["full_name"], "Asha");
        assert_eq!(body["records"].as_array().unwrap().len(), 3);
        assert_eq!(body["records"][0]["date"], "2024-01-01");
        assert_eq!(
            body["summary"],
            json!({ "total_present": 2, "total_absent": 1, "total_days_recorded": 3 })
        );

        let req = test::TestRequest::delete()
            .uri("/api/employees/EMP-1")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api/attendance/EMP-1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Employee 'EMP-1' does not exist");
    }

    #[actix_web::test]
    async fn date_filter_narrows_records_but_not_summary() {
        let service = web::Data::new(HrService::in_memory());
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(asha())
            .to_request();
        test::call_service(&app, req).await;
        for date in ["2024-01-01", "2024-01-02"] {
            let req = test::TestRequest::post()
                .uri("/api/attendance")
                .set_json(json!({ "employee_id": "EMP-1", "date": date, "status": "present" }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/attendance/EMP-1?date=2024-01-02")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["records"].as_array().unwrap().len(), 1);
        assert_eq!(body["records"][0]["date"], "2024-01-02");
        assert_eq!(body["summary"]["total_days_recorded"], 2);

        let req = test::TestRequest::get()
            .uri("/api/attendance/EMP-1?date=yesterday")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn failures_are_distinct_and_structured() {
        let service = web::Data::new(HrService::in_memory());
        let app = app!(service);

        let req = test::TestRequest::post()
            .uri("/api/employees")
            .set_json(asha())
            .to_request();
        test::call_service(&app, req).await;

        let cases = [
            (
                test::TestRequest::post().uri("/api/employees").set_json(asha()),
                StatusCode::CONFLICT,
            ),
            (
                test::TestRequest::post()
                    .uri("/api/employees")
                    .set_json(json!({ "employee_id": "EMP-2", "full_name": "Ravi" })),
                StatusCode::BAD_REQUEST,
            ),
            (
                test::TestRequest::post()
                    .uri("/api/employees")
                    .insert_header(("content-type", "application/json"))
                    .set_payload("{not json"),
                StatusCode::BAD_REQUEST,
            ),
            (
                test::TestRequest::post().uri("/api/attendance").set_json(
                    json!({ "employee_id": "EMP-1", "date": "2024-01-01", "status": "Late" }),
                ),
                StatusCode::BAD_REQUEST,
            ),
            (
                test::TestRequest::post().uri("/api/attendance").set_json(
                    json!({ "employee_id": "ghost", "date": "2024-01-01", "status": "Present" }),
                ),
                StatusCode::NOT_FOUND,
            ),
            (
                test::TestRequest::delete().uri("/api/employees/ghost"),
                StatusCode::NOT_FOUND,
            ),
            (
                test::TestRequest::get().uri("/api/employees/ghost"),
                StatusCode::NOT_FOUND,
            ),
            (
                test::TestRequest::post().uri("/api/employees").set_json(json!({
                    "employee_id": "E".repeat(65),
                    "full_name": "Asha",
                    "email": "asha@co.com",
                    "department": "Engineering"
                })),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (req, expected) in cases {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), expected);
            let body: Value = test::read_body_json(resp).await;
            assert!(body["error"].is_string(), "{body}");
        }

        let req = test::TestRequest::get().uri("/api/employees").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["employees"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn health_and_departments() {
        let service = web::Data::new(HrService::in_memory());
        let app = app!(service);

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["backend"], "memory");

        let req = test::TestRequest::get().uri("/api/departments").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["departments"][1], "Human Resources");
        assert_eq!(body["departments"].as_array().unwrap().len(), 7);
    }

    async fn preflight(origins: &[&str], origin: &str) -> Option<String> {
        let origins: Vec<String> = origins.iter().map(|o| o.to_string()).collect();
        let service = web::Data::new(HrService::in_memory());
        let app = test::init_service(
            App::new()
                .wrap(cors(&origins))
                .app_data(service.clone())
                .configure(|cfg| configure(cfg, "/api", None)),
        )
        .await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/employees")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
    }

    #[actix_web::test]
    async fn preflight_from_any_origin_is_allowed_by_default() {
        let allowed = preflight(&["*"], "http://localhost:5173").await;
        assert!(allowed.is_some());
    }

    #[actix_web::test]
    async fn preflight_honours_the_origin_list() {
        let origins = ["https://hr.example.com"];
        assert_eq!(
            preflight(&origins, "https://hr.example.com").await.as_deref(),
            Some("https://hr.example.com")
        );
        assert!(preflight(&origins, "https://elsewhere.example").await.is_none());
    }

    #[actix_web::test]
    async fn simple_requests_carry_the_allow_origin_header() {
        let origins = vec!["http://localhost:5173".to_string()];
        let service = web::Data::new(HrService::in_memory());
        let app = test::init_service(
            App::new()
                .wrap(cors(&origins))
                .app_data(service.clone())
                .configure(|cfg| configure(cfg, "/api", None)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/employees")
            .insert_header((header::ORIGIN, "http://localhost:5173"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }

    #[actix_web::test]
    async fn zero_rate_disables_the_limiter() {
        assert!(rate_limiter(0).is_none());
        assert!(rate_limiter(1000).is_some());
        assert!(rate_limiter(120_000).is_some());
    }
}
