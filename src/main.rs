use leptos::*;

mod components;
mod models;
mod pricing;
mod utils;

use components::ProductSection;
use models::PRODUCTS;

#[component]
fn App() -> impl IntoView {
    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Custom Apparel"</h1>
                <p class="tagline">"Upload your artwork and make it yours."</p>
            </header>
            <main class="container">
                {PRODUCTS
                    .iter()
                    .map(|config| view! { <ProductSection config=*config /> })
                    .collect_view()}
            </main>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    utils::log::info("app", "custom apparel storefront starting");
    mount_to_body(App);
}
