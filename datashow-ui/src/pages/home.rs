//! Home Page
//!
//! Overview of every chart the application offers.

use datashow::AppContext;
use leptos::*;

use crate::components::ChartCard;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    let cards = ctx
        .routes()
        .iter()
        .filter_map(|route| route.view.chart_kind())
        .map(|kind| view! { <ChartCard kind=kind /> })
        .collect_view();

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"DataShow"</h1>
                <p class="text-gray-400 mt-1">"Pick a chart to explore"</p>
            </div>

            <section class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                {cards}
            </section>
        </div>
    }
}
