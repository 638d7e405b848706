//! Search Filters Component
//!
//! Search input and filter selects. Presentational only: none of the
//! controls are wired to handlers.

use leptos::*;

/// Filter select labels
const FILTERS: [&str; 3] = ["Country", "Category", "Sort"];

/// Search bar with filter selects
#[component]
pub fn SearchFilters() -> impl IntoView {
    view! {
        <div class="md:ml-64 flex flex-col sm:flex-row justify-between items-center mx-4 my-4">
            <input
                type="text"
                placeholder="Search..."
                aria-label="Search posts"
                class="mb-2 sm:mb-0 w-full sm:w-1/2 p-2 rounded bg-gray-800 text-gray-100"
            />
            <div class="flex space-x-2">
                {FILTERS
                    .iter()
                    .map(|text| view! {
                        <select class="p-2 rounded bg-gray-800 text-gray-100">
                            <option>{*text}</option>
                        </select>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
