//! Distinct filter values offered to search forms.

use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as};

/// Values present in the course table, each list sorted and de-duplicated.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CourseFilters {
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub course_types: Vec<i32>,
    pub languages: Vec<String>,
    pub subjects: Vec<String>,
    pub institutions: Vec<String>,
}

/// Values present in the content table.
///
/// Sources come in a fixed channel order rather than alphabetically.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ArticleFilters {
    pub sources: Vec<String>,
    pub bs_schools: Vec<String>,
    pub bs_departments: Vec<String>,
    pub ms_schools: Vec<String>,
    pub ms_departments: Vec<String>,
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub course_types: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_types_serialize_as_strings() {
        let filters = CourseFilters {
            course_types: vec![1, 2],
            ..Default::default()
        };
        let value = serde_json::to_value(filters).unwrap();
        assert_eq!(value["course_types"], json!(["1", "2"]));
        assert_eq!(value["languages"], json!([]));
    }
}
