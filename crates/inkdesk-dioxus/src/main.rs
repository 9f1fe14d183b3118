use std::process;

use dioxus::prelude::*;
use inkdesk_config::Config;
use inkdesk_dioxus::ui::App;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("inkdesk starting up");

    // Fail early on a broken config file; a missing one just means defaults.
    match Config::load() {
        Ok(Some(config)) => {
            log::info!(
                "loaded config from {} (preview endpoint {})",
                Config::config_path().display(),
                config.preview_endpoint
            );
        }
        Ok(None) => {
            log::info!(
                "no config file at {}, using defaults",
                Config::config_path().display()
            );
        }
        Err(e) => {
            eprintln!("Error: failed to load config file: {e}");
            process::exit(1);
        }
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    // Re-read inside the component tree; `main` already validated it.
    let config = Config::load().ok().flatten().unwrap_or_default();

    rsx! {
        App { config }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("inkdesk")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
