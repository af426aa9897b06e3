//! Loading / error / empty placeholders for list pages.

use leptos::prelude::*;

use crate::state::load::{ListMessages, ListState};

/// Which placeholder to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
    Empty,
}

impl StatusKind {
    /// Placeholder kind for a list that has no rows to draw.
    pub fn for_list<T>(state: &ListState<T>) -> Option<Self> {
        match state {
            ListState::Loading => Some(Self::Loading),
            ListState::Failed => Some(Self::Error),
            ListState::Empty => Some(Self::Empty),
            ListState::Ready(_) => None,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Loading => "",
            Self::Error => "\u{26a0}\u{fe0f}",
            Self::Empty => "\u{1f4cb}",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Self::Loading => "status-panel status-panel--loading",
            Self::Error => "status-panel status-panel--error",
            Self::Empty => "status-panel status-panel--empty",
        }
    }
}

/// Centered status message with an icon.
#[component]
pub fn StatusPanel(kind: StatusKind, message: &'static str) -> impl IntoView {
    view! {
        <div class=kind.class()>
            <Show when=move || kind == StatusKind::Loading>
                <div class="status-panel__spinner"></div>
            </Show>
            <span class="status-panel__icon">{kind.icon()}</span>
            <p>{message}</p>
        </div>
    }
}

/// Placeholder for a list in a non-data state, `None` once rows are ready.
pub fn list_status<T>(state: &ListState<T>, messages: ListMessages) -> Option<AnyView> {
    let kind = StatusKind::for_list(state)?;
    let message = state.message(messages)?;
    Some(view! { <StatusPanel kind=kind message=message/> }.into_any())
}
