//! AiHub Dashboard
//!
//! Single-page AI content dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Sidebar navigation with a mobile open/close toggle
//! - Content sections for models, news, repos, papers, and videos
//! - Statistics bar chart rendered on an HTML5 canvas
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The page content comes from a single payload injected into
//! the host page as the `__DATA__` global before load; there is no fetching
//! and no server communication. The payload is read exactly once at startup
//! and handed to the root component as a prop.

use leptos::*;

mod app;
mod boot;
mod chart;
mod components;
mod model;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // No payload means nothing to render; leave the page untouched.
    let Some(payload) = boot::read_boot_payload() else {
        web_sys::console::warn_1(&"AiHub: no __DATA__ payload found, skipping mount".into());
        return;
    };

    // Mount the app to the document body
    mount_to_body(move || view! { <app::DashboardApp payload=payload.clone() /> });

    // CSR mounting is synchronous, so the stats canvas exists by now.
    chart::init_stats_chart();
}
