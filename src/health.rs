use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    portfolio: &'static str,
    records: usize,
    assistant: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Portfolio data must be readable
/// - Assistant backend is reported but never blocks readiness
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    let (portfolio_status, records) = match data.portfolio.get_portfolio.execute().await {
        Ok(portfolio) => ("ok", portfolio.record_count()),
        Err(e) => {
            warn!("Readiness: portfolio unavailable: {}", e);
            ("unhealthy", 0)
        }
    };

    let assistant_status = match &data.assistant_api {
        None => "not_configured",
        Some(api) => match api.get_health().await {
            Ok(reported) if reported.is_healthy() => "ok",
            Ok(reported) => {
                warn!("Readiness: assistant reports status {}", reported.status);
                "unhealthy"
            }
            Err(e) => {
                warn!("Readiness: assistant check failed: {}", e);
                "unhealthy"
            }
        },
    };

    let body = ReadinessResponse {
        status: if portfolio_status == "ok" { "ok" } else { "unhealthy" },
        portfolio: portfolio_status,
        records,
        assistant: assistant_status,
    };

    if portfolio_status == "ok" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
