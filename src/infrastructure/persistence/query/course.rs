//! Course list and lookup statements.
//!
//! Courses are joined to their university, their languages and their article
//! associations, then grouped per course. Language membership and the article
//! count depend on the aggregate, so those filters go into `HAVING`.

use super::{FilteredQuery, Predicate};
use crate::domain::params::CourseParams;

const SELECT: &str = "SELECT \
    c.id, c.university_id, c.course_type, c.name_en, c.name_en_short, \
    c.name_ch, c.name_ch_short, c.tuition_fees, c.beginning, c.subject, \
    c.daadlink, c.is_elearning, c.application_deadline, \
    c.is_complete_online_possible, c.programme_duration, c.is_from_daad, \
    c.created_at, COALESCE(c.updated_at, c.created_at) AS updated_at, \
    u.name_en AS university_name_en, u.name_ch AS university_name_ch, \
    u.city, u.is_tu9, u.is_u15, COALESCE(u.qs_ranking, 0) AS qs_ranking, \
    u.link AS university_link, \
    COALESCE(STRING_AGG(DISTINCT l.name, ',' ORDER BY l.name), '') AS languages, \
    COUNT(DISTINCT a.id) AS article_count \
    FROM course c \
    JOIN university u ON u.id = c.university_id \
    LEFT JOIN courses_languages cl ON cl.course_id = c.id \
    LEFT JOIN language l ON l.id = cl.language_id \
    LEFT JOIN article a ON a.course_id = c.id";

const GROUP_BY: &str = "c.id, u.id";

const ORDER_BY: &str = "u.name_en, c.course_type, c.name_en, c.id";

/// Lower-cased language names of the grouped course as a text array.
const LANGUAGE_SET: &str = "STRING_TO_ARRAY(LOWER(COALESCE(STRING_AGG(DISTINCT l.name, ','), '')), ',')";

const ARTICLE_COUNT: &str = "COUNT(DISTINCT a.id)";

/// Columns matched by the free-text search.
pub const SEARCH_COLUMNS: &[&str] = &["c.name_en", "u.name_en", "u.name_ch", "c.subject"];

fn base() -> FilteredQuery {
    FilteredQuery::new(SELECT, ORDER_BY).group_by(GROUP_BY)
}

/// The filtered, grouped course query for one list request.
pub fn course_list_query(params: &CourseParams) -> FilteredQuery {
    base()
        .filter(Predicate::search(
            SEARCH_COLUMNS,
            params.search_term.as_deref(),
        ))
        .filter(Predicate::code_in("c.course_type", &params.course_types))
        .filter(Predicate::text_in("c.subject", &params.subjects))
        .filter(Predicate::text_in("u.name_en", &params.institutions))
        .filter(Predicate::is_true("u.is_tu9", params.is_tu9))
        .filter(Predicate::is_true("u.is_u15", params.is_u15))
        .having(Predicate::any_overlap(LANGUAGE_SET, &params.languages))
        .having(Predicate::positive(ARTICLE_COUNT, params.has_articles))
}

/// The same grouped select restricted to one course id.
pub fn course_by_id_query(id: i32) -> FilteredQuery {
    base().filter(Predicate::code_eq("c.id", Some(id)))
}
