//! App Root Component
//!
//! Main application component with routing and the application context.

use datashow::{AppContext, ViewKind};
use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{ChartView, Home, NotFound};

/// URL prefix the app is served under, fixed at build time
pub const BASE_URL: &str = match option_env!("DATASHOW_BASE_URL") {
    Some(base) => base,
    None => "/",
};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // One route table for the whole app, shared through context
    provide_context(AppContext::new(BASE_URL));

    view! {
        <Router base=BASE_URL>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=RouteOutlet />
                        <Route path="/*any" view=RouteOutlet />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Mounts the view bound to the current location in the route table
#[component]
fn RouteOutlet() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let pathname = use_location().pathname;

    let matched = create_memo(move |_| {
        let path = pathname.get();
        let navigation = ctx.navigation();
        // The router may or may not hand us the base along with the path
        navigation
            .resolve(&path)
            .or_else(|| navigation.resolve_relative(&path))
            .map(|resolved| resolved.view())
    });

    move || match matched.get() {
        Some(ViewKind::Home) => view! { <Home /> }.into_view(),
        Some(ViewKind::Chart { chart }) => view! { <ChartView kind=chart /> }.into_view(),
        None => {
            web_sys::console::warn_1(
                &format!(
                    "No match found for location with path {}",
                    pathname.get_untracked()
                )
                .into(),
            );
            view! { <NotFound /> }.into_view()
        }
    }
}

/// Footer with the number of available charts
#[component]
fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let charts = ctx
        .routes()
        .iter()
        .filter(|route| route.view.chart_kind().is_some())
        .count();

    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>{format!("{} chart types", charts)}</span>
                <span>{format!("DataShow v{}", env!("CARGO_PKG_VERSION"))}</span>
            </div>
        </footer>
    }
}
