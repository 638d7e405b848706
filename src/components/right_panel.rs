//! Right Panel Component
//!
//! Statistics chart canvas and follow suggestions. The component only
//! renders the canvas; the chart itself is drawn by `chart::init_stats_chart`
//! after the tree is mounted, keeping this view pure.

use leptos::*;

use crate::chart::STATS_CANVAS_ID;

/// Hard-coded follow suggestions
const SUGGESTED_USERS: [&str; 3] = ["Alice", "Bob", "Carol"];

/// Right-hand panel with stats and suggestions
#[component]
pub fn RightPanels() -> impl IntoView {
    view! {
        <aside class="hidden lg:block w-64 fixed right-0 top-0 bottom-0 bg-gray-900 text-gray-100 p-4 overflow-y-auto">
            <h2 class="text-lg mb-2">"Statistics"</h2>
            <div class="h-40 mb-4">
                <canvas id=STATS_CANVAS_ID width="224" height="160" />
            </div>

            <h2 class="text-lg mb-2">"Suggestions"</h2>
            {SUGGESTED_USERS
                .iter()
                .map(|name| view! {
                    <div class="flex items-center justify-between mb-2">
                        <span>{*name}</span>
                        <button class="text-sm px-2 py-1 bg-indigo-600 rounded">"Follow"</button>
                    </div>
                })
                .collect_view()}
        </aside>
    }
}
