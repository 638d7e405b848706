//! App Root Component
//!
//! Composes the view tree and owns the single piece of mutable state: the
//! mobile menu open/closed flag.

use leptos::*;

use crate::components::{Banner, Header, MainContent, RightPanels, SearchFilters, Sidebar};
use crate::model::Payload;

/// Root dashboard component
#[component]
pub fn DashboardApp(payload: Payload) -> impl IntoView {
    let menu_open = create_rw_signal(false);
    let on_menu = Callback::new(move |_: ()| menu_open.update(|open| *open = !*open));

    view! {
        <Sidebar user=payload.user.clone() open=menu_open.read_only() />
        <Header user=payload.user.clone() on_menu=on_menu />
        <Banner />
        <SearchFilters />
        <MainContent payload=payload.clone() />
        <RightPanels />
    }
}
