use crate::modules::portfolio::application::domain::entities::*;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Project with every optional field filled in.
pub fn sample_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        title: "Commit Suggester".to_string(),
        summary: "AI-powered CLI that suggests commit messages".to_string(),
        overview: "Reads the staged diff and asks an LLM for conventional commit messages."
            .to_string(),
        repository_url: Some(format!("https://github.com/rishin/{}", id)),
        live_url: Some("https://www.npmjs.com/package/commit-suggester".to_string()),
        technologies: strings(&["TypeScript", "Bun", "Groq"]),
        tech_stack: TechStack::Grouped {
            groups: vec![
                TechGroup {
                    category: "Runtime".to_string(),
                    technologies: strings(&["TypeScript", "Bun"]),
                },
                TechGroup {
                    category: "AI".to_string(),
                    technologies: strings(&["Groq"]),
                },
            ],
        },
        features: vec![
            Feature::Plain {
                text: "Interactive selection".to_string(),
            },
            Feature::Structured {
                title: "Multi-Provider AI Support".to_string(),
                description: Some("Falls back between providers".to_string()),
                details: strings(&["Groq", "Gemini"]),
            },
        ],
        architecture: Some(Architecture {
            backend: strings(&["Bun CLI"]),
            frontend: vec![],
            database: vec![],
            deployment: strings(&["npm"]),
        }),
        achievements: vec![
            Achievement::Metric {
                metric: "95% accuracy".to_string(),
                description: "transcript extraction and processing".to_string(),
            },
            Achievement::Plain {
                text: "Published to npm".to_string(),
            },
        ],
        challenges: strings(&["Large diffs exceed context windows"]),
        solutions: strings(&["Summarise per file before prompting"]),
        learnings: strings(&["Prompt design matters"]),
        category: Some(ProjectCategory::CliTool),
        complexity: Some(Complexity::Intermediate),
        status: Some(ProjectStatus::Completed),
        image_url: Some("/images/commit-suggester.png".to_string()),
    }
}

/// Project carrying only its required fields.
pub fn bare_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        title: format!("Project {}", id),
        summary: String::new(),
        overview: String::new(),
        repository_url: None,
        live_url: None,
        technologies: vec![],
        tech_stack: TechStack::Plain {
            technologies: vec![],
        },
        features: vec![],
        architecture: None,
        achievements: vec![],
        challenges: vec![],
        solutions: vec![],
        learnings: vec![],
        category: None,
        complexity: None,
        status: None,
        image_url: None,
    }
}

/// Education record with a fully populated `details` block.
pub fn sample_education(id: &str) -> Education {
    Education {
        id: id.to_string(),
        institution: "University of Leicester".to_string(),
        degree: "Master of Science in Advanced Computer Science".to_string(),
        duration: Some("Sep 2023 - Sep 2024".to_string()),
        location: Some("Leicester, UK".to_string()),
        grade: Some("Merit".to_string()),
        description: Some("Postgraduate study in machine learning and cloud.".to_string()),
        details: Some(EducationDetails {
            overview: Some("Advanced study across AI and distributed systems.".to_string()),
            college: Some("School of Computing and Mathematical Sciences".to_string()),
            register_number: None,
            academic_performance: Some(AcademicPerformance {
                overall_cgpa: Some("8.5".to_string()),
                classification: Some("Merit".to_string()),
                peak_sgpa: None,
                consistent_performance: None,
            }),
            core_modules: vec![CourseModule {
                name: "Machine Learning".to_string(),
                credits: Some(15),
                grade: Some("A".to_string()),
                description: Some("Supervised and unsupervised learning".to_string()),
            }],
            core_skills: vec![SkillCategory {
                category: "Programming".to_string(),
                skills: strings(&["Python", "Java"]),
            }],
            technologies: strings(&["AWS", "Docker"]),
            laboratory_experience: strings(&["Cloud computing lab"]),
            project_work: strings(&["AI project recommendation system"]),
            achievements: strings(&["Graduated with Merit"]),
        }),
    }
}

/// Education record without a `details` block or optional fields.
pub fn bare_education(id: &str) -> Education {
    Education {
        id: id.to_string(),
        institution: "APJ Abdul Kalam Technological University".to_string(),
        degree: "Bachelor of Technology".to_string(),
        duration: None,
        location: None,
        grade: None,
        description: None,
        details: None,
    }
}

pub fn sample_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Ada Example".to_string(),
            designation: Some("Software Engineer".to_string()),
            about: strings(&["Builds things on the web."]),
            links: vec![ProfileLink {
                label: "GitHub".to_string(),
                url: "https://github.com/ada".to_string(),
                icon: Some("fab fa-github".to_string()),
            }],
            resume_url: Some("/resume.pdf".to_string()),
        },
        timeline: vec![
            TimelineEntry {
                id: "timeline-acme".to_string(),
                date: "2024 - Present".to_string(),
                title: "Software Engineer".to_string(),
                organization: Some("Acme".to_string()),
                location: Some("Remote".to_string()),
                kind: TimelineKind::Experience,
            },
            TimelineEntry {
                id: "timeline-leicester".to_string(),
                date: "2023 - 2024".to_string(),
                title: "MSc Advanced Computer Science".to_string(),
                organization: Some("University of Leicester".to_string()),
                location: Some("Leicester, UK".to_string()),
                kind: TimelineKind::Education,
            },
        ],
        experience: vec![Experience {
            id: "acme".to_string(),
            company: "Acme".to_string(),
            title: "Software Engineer".to_string(),
            duration: Some("Jan 2024 - Present".to_string()),
            location: Some("Remote".to_string()),
            company_description: None,
            company_website: None,
            technologies: strings(&["Rust"]),
            achievements: vec![],
            responsibilities: strings(&["Built services"]),
            impact: vec![],
            skills: vec![],
        }],
        education: vec![sample_education("leicester-msc"), bare_education("ktu-btech")],
        certifications: vec![Certification {
            id: "aws-cloud-practitioner".to_string(),
            title: "AWS Certified Cloud Practitioner".to_string(),
            description: None,
            issuer: "Amazon Web Services".to_string(),
            issue_date: Some("2024".to_string()),
            expiration_date: None,
            credential_id: None,
            verification_url: None,
            competencies: vec![],
            badge_url: Some("https://credly.test/badge".to_string()),
            certificate_url: None,
        }],
        hackathons: vec![Hackathon {
            id: "ibm-cic-hackathon".to_string(),
            title: "IBM CIC Hackathon".to_string(),
            project: Some(HackathonProject::Named {
                name: "Wise Wallet".to_string(),
            }),
            description: None,
            issuer: Some("IBM".to_string()),
            date: None,
            location: None,
            achievement: None,
            skills: vec![],
            badge_url: None,
            certificate_url: None,
        }],
        projects: vec![sample_project("commit-suggester"), {
            let mut project = bare_project("smart-renamer");
            project.title = "Smart Renamer".to_string();
            project.summary = "Built intelligent CLI tool for renaming files".to_string();
            project.overview = project.summary.clone();
            project
        }],
    }
}
