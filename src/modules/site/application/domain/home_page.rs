use std::sync::Arc;

use super::Selection;
use crate::modules::portfolio::application::domain::entities::{Education, Portfolio, Project};

/// Everything the page renderer needs: the data plus the resolved overlays.
#[derive(Debug, Clone)]
pub struct HomePage {
    pub portfolio: Arc<Portfolio>,
    pub selection: Selection,
    pub selected_project: Option<Project>,
    pub selected_education: Option<Education>,
}
