use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::modules::portfolio::application::domain::entities::{
    Certification, Education, Experience, Hackathon, Portfolio, Profile, Project, TimelineEntry,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Site API",
        version = "1.0.0",
        description = "Read-only JSON view of the portfolio rendered at `/`",
    ),
    paths(
        crate::modules::portfolio::adapter::incoming::web::routes::get_portfolio_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_single_project_handler,
        crate::modules::portfolio::adapter::incoming::web::routes::get_single_education_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Portfolio
            Portfolio,
            Profile,
            Project,
            TimelineEntry,
            Experience,
            Education,
            Certification,
            Hackathon
        )
    ),
    tags(
        (name = "portfolio", description = "Public portfolio data"),
    )
)]
pub struct ApiDoc;
