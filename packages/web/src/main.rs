use api::{HttpBackend, Settings};
use dioxus::prelude::*;

use ui::views::ActivityBoardView;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[cfg(target_arch = "wasm32")]
fn load_settings() -> Settings {
    Settings::from_location()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_settings() -> Settings {
    Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Falling back to default settings: {}", e);
        Settings::default()
    })
}

#[component]
fn App() -> Element {
    let settings = use_context_provider(load_settings);
    use_context_provider(|| HttpBackend::from_settings(&settings));
    use_hook(|| tracing::info!("Activity board using backend at {}", settings.api_base));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        header {
            h1 { "Mergington High School" }
            h2 { "Extracurricular Activities" }
        }

        ActivityBoardView {}
    }
}
