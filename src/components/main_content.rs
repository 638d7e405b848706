//! Main Content Component
//!
//! Responsive grid of the seven content sections derived from the payload.

use leptos::*;

use crate::components::Section;
use crate::model::{build_sections, Payload};

/// Content grid
#[component]
pub fn MainContent(payload: Payload) -> impl IntoView {
    view! {
        <main class="grid gap-4 mx-4 md:ml-64 lg:mr-64 sm:grid-cols-2 xl:grid-cols-3">
            {build_sections(&payload)
                .into_iter()
                .map(|s| view! { <Section title=s.title items=s.items /> })
                .collect_view()}
        </main>
    }
}
