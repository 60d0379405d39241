use serde::Deserialize;

use crate::server::{
    data::query::{ListOptions, SortField},
    error::AppError,
    util::parse::{parse_limit, parse_page},
};

/// Paging, sorting and search parameters shared by every list endpoint, as received.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub search: Option<String>,
}

impl ListParams {
    /// Rejects malformed `page` and `limit`; unknown `sortBy` or `order` fall back to the
    /// resource default.
    pub fn into_options<S: SortField>(self) -> Result<ListOptions<S>, AppError> {
        let page = parse_page(self.page.as_deref())?;
        let limit = parse_limit(self.limit.as_deref())?;

        Ok(ListOptions::new(
            page,
            limit,
            self.sort_by.as_deref(),
            self.order.as_deref(),
            self.search.as_deref(),
        ))
    }
}
