//! Query parameter types for list endpoints.

use planboard_core::validation::{FieldErrors, Validator};
use serde::Deserialize;

/// Sort keys accepted by `GET /projects`; a leading `-` sorts descending.
pub const SORT_SAFELIST: &[&str] = &[
    "id",
    "name",
    "created_on",
    "modified_on",
    "-id",
    "-name",
    "-created_on",
    "-modified_on",
];

/// Raw `?name=&page=&page_size=&sort=` parameters.
///
/// Numeric values are kept as strings so a malformed number is reported as a
/// field failure rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListProjectsParams {
    pub name: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort: Option<String>,
}

/// Validated listing filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFilters {
    pub name: String,
    pub page: u32,
    pub page_size: u32,
    pub sort: String,
}

fn read_int(v: &mut Validator, raw: Option<&str>, field: &str, default: u32) -> u32 {
    match raw {
        None => default,
        Some(s) => match s.parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                v.check(false, field, "must be an integer value");
                default
            }
        },
    }
}

impl ListProjectsParams {
    pub fn validate(self) -> Result<ListFilters, FieldErrors> {
        let mut v = Validator::new();
        let page = read_int(&mut v, self.page.as_deref(), "page", 1);
        let page_size = read_int(&mut v, self.page_size.as_deref(), "page_size", 20);
        let sort = self.sort.unwrap_or_else(|| "id".to_string());

        v.check(page > 0, "page", "must be greater than zero");
        v.check(page <= 10_000_000, "page", "must be a maximum of 10 million");
        v.check(page_size > 0, "page_size", "must be greater than zero");
        v.check(page_size <= 100, "page_size", "must be a maximum of 100");
        v.check(
            SORT_SAFELIST.contains(&sort.as_str()),
            "sort",
            "invalid sort value",
        );

        v.finish().map(|()| ListFilters {
            name: self.name.unwrap_or_default(),
            page,
            page_size,
            sort,
        })
    }
}
