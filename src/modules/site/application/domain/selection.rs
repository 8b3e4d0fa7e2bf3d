// src/modules/site/application/domain/selection.rs

/// Which detail overlays are open. Lives in the page URL (`?project=&education=`);
/// the two fields are independent, so both overlays may be open at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub project: Option<String>,
    pub education: Option<String>,
}

impl Selection {
    /// Blank ids count as no selection.
    pub fn new(project: Option<String>, education: Option<String>) -> Self {
        Self {
            project: non_blank(project),
            education: non_blank(education),
        }
    }

    pub fn with_project(&self, id: &str) -> Self {
        Self {
            project: Some(id.to_string()),
            education: self.education.clone(),
        }
    }

    pub fn without_project(&self) -> Self {
        Self {
            project: None,
            education: self.education.clone(),
        }
    }

    pub fn with_education(&self, id: &str) -> Self {
        Self {
            project: self.project.clone(),
            education: Some(id.to_string()),
        }
    }

    pub fn without_education(&self) -> Self {
        Self {
            project: self.project.clone(),
            education: None,
        }
    }

    /// Page URL that reproduces this selection.
    pub fn href(&self) -> String {
        if self.project.is_none() && self.education.is_none() {
            return "/".to_string();
        }

        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if let Some(project) = &self.project {
            query.append_pair("project", project);
        }
        if let Some(education) = &self.education {
            query.append_pair("education", education);
        }

        format!("/?{}", query.finish())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
