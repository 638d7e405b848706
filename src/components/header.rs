//! Header Component
//!
//! Greeting bar with the mobile menu toggle button.

use leptos::*;

use crate::model::User;

/// Greeting text for the signed-in user
pub fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}

/// Page header with greeting and menu toggle
#[component]
pub fn Header(
    user: User,
    #[prop(into)]
    on_menu: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="md:ml-64 p-4 bg-gray-800 flex items-center justify-between">
            <button
                class="md:hidden text-gray-200"
                aria-label="Toggle menu"
                on:click=move |_| on_menu.call(())
            >
                "☰"
            </button>
            <h1 class="text-xl text-white">{greeting(&user.name)}</h1>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_uses_user_name() {
        assert_eq!(greeting("Ada"), "Hello, Ada!");
    }
}
