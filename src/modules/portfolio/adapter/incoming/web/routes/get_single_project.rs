use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    modules::portfolio::application::{
        domain::entities::Project, ports::incoming::use_cases::GetProjectError,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Get a single project
///
/// Looks a project up by its authored id.
#[utoipa::path(
    get,
    path = "/api/public/projects/{project_id}",
    tag = "portfolio",
    params(
        ("project_id" = String, Path, description = "Project id, e.g. `commit-suggester`")
    ),
    responses(
        (
            status = 200,
            description = "Project retrieved",
            body = inline(SuccessResponse<Project>)
        ),
        (
            status = 404,
            description = "No project with this id",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PROJECT_NOT_FOUND",
                    "message": "Project not found"
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
#[get("/api/public/projects/{project_id}")]
pub async fn get_single_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.portfolio.get_project.execute(&project_id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetProjectError::RepositoryError(msg)) => {
            error!("Repository error fetching project id={}: {}", project_id, msg);
            ApiResponse::internal_error()
        }
    }
}
