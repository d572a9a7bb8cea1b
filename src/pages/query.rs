//! Query lifecycle shared by the read-only pages

use crate::api::{ApiError, ApiResult};

/// State of a page's fetch: loading until the single request resolves
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    Loading,
    Loaded(T),
    Failed(ApiError),
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Loading
    }
}

impl<T> From<ApiResult<T>> for QueryState<T> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => QueryState::Loaded(data),
            Err(err) => {
                tracing::warn!(error = %err, "Query failed");
                QueryState::Failed(err)
            }
        }
    }
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            QueryState::Failed(err) => Some(err),
            _ => None,
        }
    }
}
