use actix_web::{HttpResponse, Responder, web};

/// Service name from Cargo.toml, available at compile time
pub const SERVICE: &str = env!("CARGO_PKG_NAME");

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/ping").route(web::get().to(ping)));
}

/// Liveness check used by process supervisors and load balancers.
async fn ping() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "Status": "pong",
        "Service": SERVICE
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_ping_payload() {
        let app = test::init_service(App::new().configure(super::config)).await;

        let req = test::TestRequest::get().uri("/api/ping").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            serde_json::json!({"Status": "pong", "Service": "scatter-brain"})
        );
    }
}
