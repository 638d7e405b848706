//! Banner Component
//!
//! Static promotional strip under the header.

use leptos::*;

/// Promotional banner
#[component]
pub fn Banner() -> impl IntoView {
    view! {
        <div class="mx-4 mt-4 p-6 rounded-lg bg-gradient-to-r from-indigo-500 to-purple-600 shadow md:ml-64">
            <div class="flex items-center justify-between">
                <p class="text-white text-lg">"Share your latest AI insights"</p>
                <button class="bg-white text-gray-800 px-4 py-2 rounded">"Upload Post"</button>
            </div>
        </div>
    }
}
