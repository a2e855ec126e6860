use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod pages;
pub mod api_client;
pub mod common;
pub mod hooks;
pub mod router;
pub mod settings;

use crate::common::theme::ThemeProvider;
use crate::common::toast::ToastProvider;
pub use router::Route;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <ToastProvider>
                <BrowserRouter>
                    <Switch<Route> render={router::switch} />
                </BrowserRouter>
            </ToastProvider>
        </ThemeProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== EcoSync Console Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API origin: {}", settings.api_origin);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
