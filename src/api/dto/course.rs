//! Course list query and course form decoding.

use chrono::Utc;
use serde::Deserialize;

use super::forms::FormFields;
use super::pagination::RequestPolicy;
use crate::domain::entities::NewCourse;
use crate::domain::params::CourseParams;
use crate::error::AppError;
use crate::utils::multi_value::{LIST_SEPARATOR, SUBJECT_SEPARATOR, search_term, split_lowercase};
use crate::utils::parse::{parse_flag, parse_number};

/// Raw query string of `GET /v1/courses`.
///
/// Every field stays a string until [`CourseListQuery::into_params`] so that
/// malformed values are handled by the input policy, not by the extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListQuery {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
    pub search_term: Option<String>,
    pub course_types: Option<String>,
    pub languages: Option<String>,
    pub subjects: Option<String>,
    pub institutions: Option<String>,
    pub is_tu9: Option<String>,
    pub is_u15: Option<String>,
    pub has_articles: Option<String>,
    pub hide_language_article: Option<String>,
}

impl CourseListQuery {
    pub fn into_params(self, policy: &RequestPolicy) -> Result<CourseParams, AppError> {
        let page = policy.page(self.page_number.as_deref(), self.page_size.as_deref())?;

        let course_types = split_lowercase(self.course_types.as_deref(), LIST_SEPARATOR)
            .iter()
            .map(|code| parse_number::<i32>(Some(code), "courseTypes", policy.input))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CourseParams {
            page,
            search_term: search_term(self.search_term.as_deref()),
            course_types,
            languages: split_lowercase(self.languages.as_deref(), LIST_SEPARATOR),
            subjects: split_lowercase(self.subjects.as_deref(), SUBJECT_SEPARATOR),
            institutions: split_lowercase(self.institutions.as_deref(), LIST_SEPARATOR),
            is_tu9: parse_flag(self.is_tu9.as_deref(), "isTu9", policy.input)?,
            is_u15: parse_flag(self.is_u15.as_deref(), "isU15", policy.input)?,
            has_articles: parse_flag(self.has_articles.as_deref(), "hasArticles", policy.input)?,
            hide_related: parse_flag(
                self.hide_language_article.as_deref(),
                "hideLanguageArticle",
                policy.input,
            )?,
        })
    }
}

/// Decodes the course write form. `created_at` is set to now.
pub fn new_course_from_form(
    form: &FormFields,
    policy: &RequestPolicy,
) -> Result<NewCourse, AppError> {
    let input = policy.input;

    Ok(NewCourse {
        id: form.int("id", input)?,
        university_id: form.int("universityId", input)?,
        course_type: form.int("courseTypes", input)?,
        name_en: form.text("nameEn"),
        name_en_short: form.text("nameEnShort"),
        name_ch: form.text("nameCh"),
        name_ch_short: form.text("nameChShort"),
        tuition_fees: form.text("tuitionFees"),
        beginning: form.text("beginning"),
        subject: form.text("subjects"),
        daadlink: form.text("daadlink"),
        is_elearning: form.flag("isElearning", input)?,
        application_deadline: form.text("applicationDeadline"),
        is_complete_online_possible: form.flag("isCompleteOnlinePossible", input)?,
        programme_duration: form.text("programmeDuration"),
        is_from_daad: form.flag("isFromDaad", input)?,
        created_at: Utc::now(),
    })
}
