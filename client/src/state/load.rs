//! Loading/error/empty/data state for pages that render one fetched list.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use crate::net::api::ApiError;

/// Static copy shown for each list state of one page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListMessages {
    pub loading: &'static str,
    pub failed: &'static str,
    pub empty: &'static str,
}

/// Render state of a fetched list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListState<T> {
    Loading,
    Failed,
    Empty,
    Ready(Vec<T>),
}

impl<T> ListState<T> {
    /// Map a pending (`None`) or finished fetch onto a render state.
    ///
    /// An empty list is [`ListState::Empty`], never a failure.
    pub fn from_fetch(fetch: Option<Result<Vec<T>, ApiError>>, what: &str) -> Self {
        match fetch {
            None => Self::Loading,
            Some(Ok(items)) if items.is_empty() => Self::Empty,
            Some(Ok(items)) => Self::Ready(items),
            Some(Err(e)) => {
                #[cfg(feature = "hydrate")]
                log::error!("failed to load {what}: {e}");
                #[cfg(not(feature = "hydrate"))]
                let _ = (what, e);
                Self::Failed
            }
        }
    }

    /// Message for the non-data states.
    #[must_use]
    pub fn message(&self, messages: ListMessages) -> Option<&'static str> {
        match self {
            Self::Loading => Some(messages.loading),
            Self::Failed => Some(messages.failed),
            Self::Empty => Some(messages.empty),
            Self::Ready(_) => None,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        match self {
            Self::Ready(items) => items,
            _ => &[],
        }
    }
}
