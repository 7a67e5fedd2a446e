//! Chart Card Component
//!
//! Home page tile linking to one chart page.

use datashow::{AppContext, ChartKind};
use leptos::*;
use leptos_router::*;

/// Chart tile with title, description and link
#[component]
pub fn ChartCard(kind: ChartKind) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let href = ctx.navigation().chart_href(kind);

    view! {
        <A
            href=href
            class="block bg-gray-800 hover:bg-gray-700 rounded-xl p-6 transition-colors"
        >
            <div class="flex items-center space-x-3 mb-2">
                <span class="text-2xl">{chart_icon(kind)}</span>
                <h3 class="text-lg font-semibold">{kind.title()}</h3>
            </div>
            <p class="text-gray-400 text-sm">{kind.description()}</p>
        </A>
    }
}

/// Icon for a chart kind
pub fn chart_icon(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Pie => "🥧",
        ChartKind::Bar => "📊",
        ChartKind::Line => "📈",
        ChartKind::Radar => "🕸️",
        ChartKind::Scatter => "✳️",
        ChartKind::Heatmap => "🟥",
        ChartKind::Funnel => "🔻",
        ChartKind::Gauge => "⏲️",
    }
}
