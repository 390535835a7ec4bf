//! Article list and lookup statements over the content table.

use super::{FilteredQuery, Predicate};
use crate::domain::params::ArticleParams;

macro_rules! content_columns {
    () => {
        "id, link, title, author, published_date, source, \
        author_bs_school, author_bs_school_short, author_bs_department, author_bs_gpa, \
        author_ms_school, author_ms_school_short, author_ms_department, author_ms_gpa, \
        author_toefl, author_ielts, author_gre, author_gmat, author_testdaf, author_goethe, \
        course_type"
    };
}

const SELECT: &str = concat!("SELECT ", content_columns!(), " FROM content");

/// Inserts one [`crate::domain::entities::Content`] row, binding fields in column order.
pub const INSERT_CONTENT: &str = concat!(
    "INSERT INTO content (",
    content_columns!(),
    ") VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)"
);

const ORDER_BY: &str = "published_date DESC, id DESC";

pub const SEARCH_COLUMNS: &[&str] = &[
    "author",
    "title",
    "source",
    "author_bs_school",
    "author_bs_school_short",
    "author_bs_department",
    "author_ms_school",
    "author_ms_school_short",
    "author_ms_department",
];

fn base() -> FilteredQuery {
    FilteredQuery::new(SELECT, ORDER_BY)
}

/// The filtered content query for one list request.
pub fn article_list_query(params: &ArticleParams) -> FilteredQuery {
    base()
        .filter(Predicate::search(
            SEARCH_COLUMNS,
            params.search_term.as_deref(),
        ))
        .filter(Predicate::text_in("source", &params.sources))
        .filter(Predicate::text_in("author_bs_school_short", &params.bs_schools))
        .filter(Predicate::text_in("author_bs_department", &params.bs_departments))
        .filter(Predicate::text_in("author_ms_school_short", &params.ms_schools))
        .filter(Predicate::text_in("author_ms_department", &params.ms_departments))
        .filter(Predicate::code_eq("course_type", params.course_type))
}

pub fn article_by_id_query(id: i32) -> FilteredQuery {
    base().filter(Predicate::code_eq("id", Some(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::params::Page;
    use crate::infrastructure::persistence::query::BindValue;

    #[test]
    fn test_insert_binds_every_selected_column() {
        let columns = content_columns!().split(',').count();
        let placeholders = INSERT_CONTENT.matches('$').count();
        assert_eq!(columns, 21);
        assert_eq!(placeholders, columns);
    }

    #[test]
    fn test_empty_params_filter_nothing() {
        let query = article_list_query(&ArticleParams::default());
        assert!(query.filters().is_empty());
        assert!(!query.statement().sql().contains(" WHERE "));
    }

    #[test]
    fn test_filters_are_conjoined() {
        let params = ArticleParams {
            sources: vec!["ptt".to_string(), "fb".to_string()],
            course_type: Some(2),
            ..Default::default()
        };
        let query = article_list_query(&params);

        assert!(query.statement().sql().ends_with(
            "FROM content WHERE LOWER(source) IN ($1, $2) AND course_type = $3"
        ));
        assert_eq!(
            query.binds(),
            vec![
                BindValue::Text("ptt".to_string()),
                BindValue::Text("fb".to_string()),
                BindValue::Int(2)
            ]
        );
    }

    #[test]
    fn test_page_orders_newest_first() {
        let page = Page::new(3, 5, 1000).unwrap();
        let sql = article_list_query(&ArticleParams::default())
            .page_query(&page)
            .sql()
            .to_string();
        assert!(sql.ends_with("ORDER BY published_date DESC, id DESC LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn test_search_covers_author_and_schools() {
        let params = ArticleParams {
            search_term: Some("ntu".to_string()),
            ..Default::default()
        };
        let binds = article_list_query(&params).binds();
        assert_eq!(binds.len(), SEARCH_COLUMNS.len());
    }
}
