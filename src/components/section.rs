//! Section Component
//!
//! A titled list of external links. An empty list renders an empty list;
//! there is no pagination, truncation, or empty-state handling.

use leptos::*;

use crate::model::Link;

/// One titled content section
#[component]
pub fn Section(
    #[prop(into)]
    title: String,
    items: Vec<Link>,
) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-lg p-4 shadow">
            <h2 class="text-xl text-white mb-3 font-semibold">{title}</h2>
            <ul class="space-y-2">
                {items
                    .into_iter()
                    .map(|item| view! {
                        <li>
                            <a
                                href=item.url
                                target="_blank"
                                class="text-indigo-400 hover:underline"
                            >
                                {item.title}
                            </a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
