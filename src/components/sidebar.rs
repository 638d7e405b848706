//! Sidebar Component
//!
//! Fixed navigation panel with the user identity, nav links, and
//! notifications. On small screens its visibility follows the menu toggle;
//! from the `md` breakpoint up it is always shown.

use leptos::*;

use crate::model::User;

/// Fixed navigation labels
const NAV_LABELS: [&str; 5] = ["Dashboard", "My Profile", "Article Feed", "Settings", "Log Out"];

/// Notification strings shown at the bottom of the panel
const NOTIFICATIONS: [&str; 2] = ["New comment", "New follower"];

/// Class string for the sidebar, derived from the menu-open flag.
pub fn sidebar_class(open: bool) -> String {
    let slide = if open { "translate-x-0" } else { "-translate-x-full" };
    format!(
        "{} md:translate-x-0 fixed inset-y-0 left-0 w-64 bg-gray-900 text-gray-100 \
         transform transition-transform duration-200 flex flex-col z-50",
        slide
    )
}

/// Sidebar navigation panel
#[component]
pub fn Sidebar(
    user: User,
    #[prop(into)]
    open: Signal<bool>,
) -> impl IntoView {
    view! {
        <aside
            class=move || sidebar_class(open.get())
            aria-label="Sidebar navigation"
        >
            <div class="p-4 flex items-center space-x-3">
                <img src=user.avatar alt="" class="w-10 h-10 rounded-full" />
                <span>{user.name}</span>
            </div>

            <nav class="flex-1 px-4 space-y-2">
                {NAV_LABELS
                    .iter()
                    .map(|text| view! {
                        <a href="#" class="block py-2 px-3 rounded hover:bg-gray-700">{*text}</a>
                    })
                    .collect_view()}
            </nav>

            <div class="p-4">
                <h3 class="text-sm mb-2">"Notifications"</h3>
                <div class="space-y-1">
                    {NOTIFICATIONS
                        .iter()
                        .map(|n| view! {
                            <span class="block px-2 py-1 text-xs rounded-full bg-blue-600">{*n}</span>
                        })
                        .collect_view()}
                </div>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_sidebar_slides_off_canvas() {
        let class = sidebar_class(false);
        assert!(class.starts_with("-translate-x-full"));
        assert!(class.contains("md:translate-x-0"));
    }

    #[test]
    fn open_sidebar_slides_into_view() {
        assert!(sidebar_class(true).starts_with("translate-x-0"));
    }

    #[test]
    fn double_toggle_restores_class() {
        let runtime = create_runtime();

        let menu_open = create_rw_signal(false);
        let initial = sidebar_class(menu_open.get_untracked());

        menu_open.update(|open| *open = !*open);
        menu_open.update(|open| *open = !*open);
        assert_eq!(sidebar_class(menu_open.get_untracked()), initial);

        runtime.dispose();
    }
}
