//! Article list query plus content and association form decoding.

use serde::Deserialize;

use super::forms::FormFields;
use super::pagination::RequestPolicy;
use crate::domain::entities::{Content, NewCourseArticle};
use crate::domain::params::ArticleParams;
use crate::error::AppError;
use crate::utils::multi_value::{LIST_SEPARATOR, search_term, split_lowercase};
use crate::utils::parse::{parse_flag, parse_number};

/// Raw query string of `GET /v1/articles`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListQuery {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
    pub search_term: Option<String>,
    pub sources: Option<String>,
    pub bs_schools: Option<String>,
    pub bs_departments: Option<String>,
    pub ms_schools: Option<String>,
    pub ms_departments: Option<String>,
    pub course_type: Option<String>,
    pub hide_application: Option<String>,
}

impl ArticleListQuery {
    pub fn into_params(self, policy: &RequestPolicy) -> Result<ArticleParams, AppError> {
        let page = policy.page(self.page_number.as_deref(), self.page_size.as_deref())?;

        let course_type = match self.course_type.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_number::<i32>(Some(raw), "courseType", policy.input)?),
        };

        Ok(ArticleParams {
            page,
            search_term: search_term(self.search_term.as_deref()),
            sources: split_lowercase(self.sources.as_deref(), LIST_SEPARATOR),
            bs_schools: split_lowercase(self.bs_schools.as_deref(), LIST_SEPARATOR),
            bs_departments: split_lowercase(self.bs_departments.as_deref(), LIST_SEPARATOR),
            ms_schools: split_lowercase(self.ms_schools.as_deref(), LIST_SEPARATOR),
            ms_departments: split_lowercase(self.ms_departments.as_deref(), LIST_SEPARATOR),
            course_type,
            hide_related: parse_flag(
                self.hide_application.as_deref(),
                "hideApplication",
                policy.input,
            )?,
        })
    }
}

/// Decodes the content write form.
pub fn content_from_form(form: &FormFields, policy: &RequestPolicy) -> Result<Content, AppError> {
    let input = policy.input;

    Ok(Content {
        id: form.int("id", input)?,
        link: form.text("link"),
        title: form.text("title"),
        author: form.text("author"),
        published_at: form.date("publishedAt", input)?,
        source: form.text("source"),
        author_bs_school: form.text("authorBsSchool"),
        author_bs_school_short: form.text("authorBsSchoolShort"),
        author_bs_department: form.text("authorBsDepartment"),
        author_bs_gpa: form.text("authorBsGpa"),
        author_ms_school: form.text("authorMsSchool"),
        author_ms_school_short: form.text("authorMsSchoolShort"),
        author_ms_department: form.text("authorMsDepartment"),
        author_ms_gpa: form.text("authorMsGpa"),
        author_toefl: form.text("authorToefl"),
        author_ielts: form.text("authorIelts"),
        author_gre: form.text("authorGre"),
        author_gmat: form.text("authorGmat"),
        author_testdaf: form.text("authorTestdaf"),
        author_goethe: form.text("authorGoethe"),
        course_type: form.int("courseType", input)?,
    })
}

/// Decodes the course/article association form. `id` is the content id.
pub fn association_from_form(
    form: &FormFields,
    policy: &RequestPolicy,
) -> Result<NewCourseArticle, AppError> {
    Ok(NewCourseArticle {
        article_id: form.int("id", policy.input)?,
        course_id: form.int("courseId", policy.input)?,
        result: form.text("result"),
        is_decision: form.flag("isDecision", policy.input)?,
    })
}
