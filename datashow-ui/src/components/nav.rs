//! Navigation Component
//!
//! Header navigation bar, one link per route in the table.

use datashow::{AppContext, RouteDescriptor};
use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let navigation = ctx.navigation();
    let home_href = navigation.href_for_path("/");

    let links = navigation
        .table()
        .iter()
        .map(|route| {
            view! {
                <NavLink href=navigation.href_for_path(route.path) label=nav_label(route) />
            }
        })
        .collect_view();

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href=home_href class="flex items-center space-x-3">
                        <span class="text-2xl">"📊"</span>
                        <span class="text-xl font-bold text-white">"DataShow"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1 overflow-x-auto">
                        {links}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: String, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-3 py-2 rounded-lg text-sm text-gray-300 hover:text-white hover:bg-gray-700 transition-colors whitespace-nowrap"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

/// Short label shown in the bar
pub fn nav_label(route: &RouteDescriptor) -> &'static str {
    match route.view.chart_kind() {
        // "Pie Chart" -> "Pie"
        Some(kind) => kind.title().trim_end_matches(" Chart"),
        None => "Overview",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datashow::{ChartKind, RouteTable};

    #[test]
    fn test_nav_labels() {
        let table = RouteTable::standard();
        let labels: Vec<_> = table.iter().map(nav_label).collect();
        assert_eq!(
            labels,
            vec!["Overview", "Pie", "Bar", "Line", "Radar", "Scatter", "Heatmap", "Funnel", "Gauge"]
        );
        assert_eq!(nav_label(&RouteDescriptor::chart(ChartKind::Gauge)), "Gauge");
    }
}
