use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::portfolio::application::{
        domain::entities::Portfolio, ports::incoming::use_cases::GetPortfolioError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Get the whole portfolio
///
/// Returns every collection in authored order, already normalised.
#[utoipa::path(
    get,
    path = "/api/public/portfolio",
    tag = "portfolio",
    responses(
        (
            status = 200,
            description = "Portfolio retrieved",
            body = inline(SuccessResponse<Portfolio>)
        ),
        (
            status = 500,
            description = "Portfolio data unavailable",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INTERNAL_ERROR",
                    "message": "An unexpected error occurred"
                }
            })
        )
    )
)]
#[get("/api/public/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.get_portfolio.execute().await {
        Ok(portfolio) => ApiResponse::success(portfolio.as_ref()),

        Err(GetPortfolioError::QueryFailed(msg)) => {
            error!("Failed to fetch portfolio: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
