// src/api/schemas.rs
//
// OpenAPI-only mirrors of `ApiResponse`. Handlers never construct these.

use serde::Serialize;
use utoipa::ToSchema;

/// Envelope of a successful portfolio read.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    /// The requested record or the whole portfolio.
    pub data: T,
}

/// Envelope of a failed portfolio read.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// `PROJECT_NOT_FOUND`, `EDUCATION_NOT_FOUND` or `INTERNAL_ERROR`.
    #[schema(example = "EDUCATION_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Education record not found")]
    pub message: String,
}
