//! Chart Page
//!
//! The one page behind every chart route. The kind comes from the matched
//! route; the page provides the mount point the charting library draws
//! into and links to the neighbouring charts.

use datashow::{AppContext, ChartKind};
use leptos::*;
use leptos_router::*;

use crate::components::chart_icon;

/// DOM id of the chart mount point
pub const CHART_HOST_ID: &str = "chart-host";

/// Chart page component
#[component]
pub fn ChartView(kind: ChartKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let navigation = ctx.navigation();

    let prev = kind.prev();
    let next = kind.next();
    let prev_href = navigation.chart_href(prev);
    let next_href = navigation.chart_href(next);
    let home_href = navigation.href_for_path("/");

    view! {
        <div class="space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">
                        <span class="mr-2">{chart_icon(kind)}</span>
                        {kind.title()}
                    </h1>
                    <p class="text-gray-400 mt-1">{kind.description()}</p>
                </div>

                <A href=home_href class="text-sm text-gray-400 hover:text-white">
                    "All charts"
                </A>
            </div>

            // Mount point, keyed by chart kind
            <section class="bg-gray-800 rounded-xl p-6">
                <div
                    id=CHART_HOST_ID
                    class="w-full h-64 md:h-96 rounded-lg"
                    data-chart-kind=kind.slug()
                />
            </section>

            // Neighbouring charts
            <div class="flex justify-between">
                <A
                    href=prev_href
                    class="px-4 py-2 rounded-lg text-sm bg-gray-700 text-gray-300 hover:bg-gray-600"
                >
                    {format!("← {}", prev.title())}
                </A>
                <A
                    href=next_href
                    class="px-4 py-2 rounded-lg text-sm bg-gray-700 text-gray-300 hover:bg-gray-600"
                >
                    {format!("{} →", next.title())}
                </A>
            </div>
        </div>
    }
}
