use sweetheart::config::AppConfig;
use sweetheart::{App, AppProps};

fn main() {
    console_error_panic_hook::set_once();
    // Start verbose so config warnings are not lost, then narrow.
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));

    let config = AppConfig::from_location();
    if !config.debug {
        log::set_max_level(log::LevelFilter::Info);
    }
    log::info!("Starting page for {}", config.nickname);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
