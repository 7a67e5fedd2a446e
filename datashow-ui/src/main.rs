//! DataShow Dashboard
//!
//! Single-page charting application built with Leptos (WASM).
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. Navigation is driven by
//! the route table from the `datashow` crate: the router hands every
//! location to the application's navigation manager, which picks the Home
//! page, the shared chart page for one chart kind, or the not-found page.
//!
//! Build with `trunk build --release`; set `DATASHOW_BASE_URL` at build time
//! when the app is served under a prefix.

use leptos::*;

mod app;
mod components;
mod pages;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
