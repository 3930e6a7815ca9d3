use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    pub slug: String,
    pub title: String,
    pub level: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseCatalog {
    pub greeting: String,
    /// True when the request carried a valid token for an active user
    pub personalized: bool,
    pub courses: Vec<CourseSummary>,
}

/// Featured courses shown to every visitor.
pub fn featured_courses() -> Vec<CourseSummary> {
    [
        ("rust-fundamentals", "Rust Fundamentals", "Beginner"),
        ("async-rust", "Async Rust in Practice", "Intermediate"),
        ("web-apis-with-axum", "Web APIs with Axum", "Intermediate"),
    ]
    .into_iter()
    .map(|(slug, title, level)| CourseSummary {
        slug: slug.to_string(),
        title: title.to_string(),
        level: level.to_string(),
    })
    .collect()
}
