//! Article entities backed by the generic content record.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use super::course::CourseSummary;

/// A published admission write-up with its author's credentials.
///
/// Also the input shape for inserting content; the caller supplies `id`.
#[serde_as]
#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct Content {
    pub id: i32,
    pub link: String,
    pub title: String,
    pub author: String,
    #[sqlx(rename = "published_date")]
    pub published_at: DateTime<Utc>,
    /// Channel the article was published on (PTT, FB, Dcard, ...).
    pub source: String,
    pub author_bs_school: String,
    pub author_bs_school_short: String,
    pub author_bs_department: String,
    pub author_bs_gpa: String,
    pub author_ms_school: String,
    pub author_ms_school_short: String,
    pub author_ms_department: String,
    pub author_ms_gpa: String,
    pub author_toefl: String,
    pub author_ielts: String,
    pub author_gre: String,
    pub author_gmat: String,
    pub author_testdaf: String,
    pub author_goethe: String,
    #[serde_as(as = "DisplayFromStr")]
    pub course_type: i32,
}

/// A content record with the courses it reports on.
///
/// `courses` is `None` when enrichment was skipped.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Article {
    #[serde(flatten)]
    pub content: Content,
    pub courses: Option<Vec<ArticleCourse>>,
}

impl Article {
    pub fn new(content: Content) -> Self {
        Self {
            content,
            courses: None,
        }
    }

    pub fn id(&self) -> i32 {
        self.content.id
    }
}

/// A course as seen from an article, with the per-association outcome.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArticleCourse {
    pub result: String,
    pub is_decision: bool,
    pub course: CourseSummary,
}

/// Input for linking an article to a course.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourseArticle {
    pub article_id: i32,
    pub course_id: i32,
    pub result: String,
    pub is_decision: bool,
}
