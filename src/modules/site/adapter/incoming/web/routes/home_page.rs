use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::{
    modules::site::{
        adapter::incoming::web::views::{render_error_page, render_home_page},
        application::{domain::Selection, ports::incoming::use_cases::ComposeHomePageError},
    },
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct HomePageQuery {
    pub project: Option<String>,
    pub education: Option<String>,
}

#[get("/")]
pub async fn home_page_handler(
    query: web::Query<HomePageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();
    let selection = Selection::new(query.project, query.education);

    match data.compose_home_page.execute(selection).await {
        Ok(page) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(render_home_page(&page)),

        Err(ComposeHomePageError::QueryFailed(msg)) => {
            error!("Failed to compose home page: {}", msg);
            HttpResponse::InternalServerError()
                .content_type(ContentType::html())
                .body(render_error_page())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::modules::site::application::ports::incoming::use_cases::ComposeHomePageUseCase;
    use crate::modules::site::application::service::ComposeHomePageService;
    use crate::modules::site::application::domain::HomePage;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubPortfolioQuery;

    struct FailingComposeHomePage;

    #[async_trait]
    impl ComposeHomePageUseCase for FailingComposeHomePage {
        async fn execute(&self, _selection: Selection) -> Result<HomePage, ComposeHomePageError> {
            Err(ComposeHomePageError::QueryFailed("gone".to_string()))
        }
    }

    async fn get_page(uri: &str) -> (StatusCode, String) {
        let app_state = TestAppStateBuilder::default()
            .with_compose_home_page(ComposeHomePageService::new(StubPortfolioQuery::sample()))
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(home_page_handler)).await;

        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn test_home_page_renders_every_section_without_overlays() {
        let (status, html) = get_page("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"id="project-card-commit-suggester""#));
        assert!(html.contains(r#"id="education-card-leicester-msc""#));
        assert!(!html.contains(r#"class="modal-overlay""#));
    }

    #[actix_web::test]
    async fn test_card_link_then_close_link_round_trip() {
        let (_, html) = get_page("/").await;
        assert!(html.contains(r#"href="/?project=smart-renamer""#));

        let (status, html) = get_page("/?project=smart-renamer").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches(r#"class="modal-overlay""#).count(), 1);
        assert!(html.contains(r#"class="modal-backdrop" href="/""#));

        let (_, html) = get_page("/").await;
        assert!(!html.contains(r#"class="modal-overlay""#));
    }

    #[actix_web::test]
    async fn test_education_selection_mounts_education_overlay() {
        let (status, html) = get_page("/?education=ktu-btech").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches(r#"class="modal-overlay""#).count(), 1);
        assert!(html.contains(r#"id="education-modal" data-key="ktu-btech""#));
    }

    #[actix_web::test]
    async fn test_unknown_or_blank_selection_renders_no_overlay() {
        let (status, html) = get_page("/?project=ghost&education=").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains(r#"class="modal-overlay""#));
    }

    #[actix_web::test]
    async fn test_compose_failure_returns_html_500() {
        let app_state = TestAppStateBuilder::default()
            .with_compose_home_page(FailingComposeHomePage)
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(home_page_handler)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = test::read_body(resp).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Something went wrong"));
    }
}
