use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::portfolio::application::{
        domain::entities::Education, ports::incoming::use_cases::GetEducationError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Get a single education record
#[utoipa::path(
    get,
    path = "/api/public/education/{education_id}",
    tag = "portfolio",
    params(
        ("education_id" = String, Path, description = "Education id, e.g. `leicester-msc`")
    ),
    responses(
        (
            status = 200,
            description = "Education record retrieved",
            body = inline(SuccessResponse<Education>)
        ),
        (
            status = 404,
            description = "No education record with this id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EDUCATION_NOT_FOUND",
                    "message": "Education record not found"
                }
            })
        ),
        (
            status = 500,
            description = "Portfolio data unavailable",
            body = ErrorResponse
        )
    )
)]
#[get("/api/public/education/{education_id}")]
pub async fn get_single_education_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let education_id = path.into_inner();

    match data.portfolio.get_education.execute(&education_id).await {
        Ok(education) => ApiResponse::success(education),

        Err(GetEducationError::NotFound) => {
            ApiResponse::not_found("EDUCATION_NOT_FOUND", "Education record not found")
        }

        Err(GetEducationError::RepositoryError(msg)) => {
            error!(
                "Repository error fetching education id={}: {}",
                education_id, msg
            );
            ApiResponse::internal_error()
        }
    }
}
