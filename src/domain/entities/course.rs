//! Course entity and its association views.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

use super::article::Content;

/// A study programme as listed in the directory.
///
/// University fields are denormalized into the course for display.
/// `languages` and `article_count` are derived from the association tables;
/// `articles` is `None` when enrichment was skipped.
#[serde_as]
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Course {
    pub id: i32,
    #[serde_as(as = "DisplayFromStr")]
    pub university_id: i32,
    #[serde_as(as = "DisplayFromStr")]
    pub course_type: i32,
    pub name_en: String,
    pub name_en_short: String,
    #[serde(skip)]
    pub name_ch: String,
    #[serde(skip)]
    pub name_ch_short: String,
    pub tuition_fees: String,
    pub beginning: String,
    pub subject: String,
    pub daadlink: String,
    pub is_elearning: bool,
    pub application_deadline: String,
    pub is_complete_online_possible: bool,
    pub programme_duration: String,
    pub is_from_daad: bool,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub updated_at: DateTime<Utc>,
    pub university_name_en: String,
    pub university_name_ch: String,
    pub city: String,
    pub is_tu9: bool,
    pub is_u15: bool,
    pub qs_ranking: i32,
    pub university_link: String,
    pub languages: Vec<String>,
    pub article_count: i64,
    pub articles: Option<Vec<CourseArticle>>,
}

/// An article as seen from a course, with the per-association outcome.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CourseArticle {
    #[serde(flatten)]
    pub content: Content,
    /// Free-text admission outcome.
    pub result: String,
    /// `true` when `result` is a final admission decision rather than an
    /// application record.
    pub is_decision: bool,
}

/// The subset of course and university fields shown inside an article.
#[serde_as]
#[derive(Debug, Clone, Serialize, PartialEq, sqlx::FromRow)]
pub struct CourseSummary {
    pub id: i32,
    pub name_en: String,
    pub daadlink: String,
    pub is_from_daad: bool,
    #[serde_as(as = "DisplayFromStr")]
    pub course_type: i32,
    pub programme_duration: String,
    pub tuition_fees: String,
    pub beginning: String,
    pub subject: String,
    pub application_deadline: String,
    pub university_name_en: String,
    pub university_name_ch: String,
    pub university_link: String,
    pub is_tu9: bool,
    pub is_u15: bool,
    pub city: String,
}

/// Input for inserting a course. The caller supplies the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub id: i32,
    pub university_id: i32,
    pub course_type: i32,
    pub name_en: String,
    pub name_en_short: String,
    pub name_ch: String,
    pub name_ch_short: String,
    pub tuition_fees: String,
    pub beginning: String,
    pub subject: String,
    pub daadlink: String,
    pub is_elearning: bool,
    pub application_deadline: String,
    pub is_complete_online_possible: bool,
    pub programme_duration: String,
    pub is_from_daad: bool,
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Splits the aggregated, comma-joined language column.
    pub fn languages_from_aggregate(aggregate: &str) -> Vec<String> {
        aggregate
            .split(',')
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_course() -> Course {
        Course {
            id: 7,
            university_id: 3,
            course_type: 2,
            name_en: "Informatics".to_string(),
            name_en_short: "Inf".to_string(),
            name_ch: "資訊".to_string(),
            name_ch_short: String::new(),
            tuition_fees: "none".to_string(),
            beginning: "Winter".to_string(),
            subject: "Computer Science".to_string(),
            daadlink: "https://daad.example/7".to_string(),
            is_elearning: false,
            application_deadline: "31 May".to_string(),
            is_complete_online_possible: false,
            programme_duration: "4 semesters".to_string(),
            is_from_daad: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            university_name_en: "Technical University of Munich".to_string(),
            university_name_ch: "慕尼黑工業大學".to_string(),
            city: "Munich".to_string(),
            is_tu9: true,
            is_u15: true,
            qs_ranking: 37,
            university_link: "https://tum.example".to_string(),
            languages: vec!["English".to_string()],
            article_count: 0,
            articles: None,
        }
    }

    #[test]
    fn test_languages_from_aggregate() {
        assert_eq!(
            Course::languages_from_aggregate("English,German"),
            vec!["English", "German"]
        );
        assert!(Course::languages_from_aggregate("").is_empty());
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(sample_course()).unwrap();

        assert_eq!(value["university_id"], json!("3"));
        assert_eq!(value["course_type"], json!("2"));
        assert_eq!(value["articles"], json!(null));
        assert!(value.get("name_ch").is_none());
        assert!(value.get("created_at").is_none());
        assert_eq!(value["university_name_ch"], json!("慕尼黑工業大學"));
    }
}
