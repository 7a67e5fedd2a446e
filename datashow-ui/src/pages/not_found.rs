//! 404 Page

use datashow::AppContext;
use leptos::*;
use leptos_router::*;

/// Shown for locations that match no route
#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");
    let home_href = ctx.navigation().href_for_path("/");

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=home_href
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Overview"
            </A>
        </div>
    }
}
