mod app;
mod components;

use app::App;
use softsell_frontend_common::logging;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init() {
        web_sys::console::error_1(&err.into());
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting SoftSell");
    yew::Renderer::<App>::new().render();
}
