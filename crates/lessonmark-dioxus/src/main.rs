use dioxus::prelude::*;
use lessonmark_config::Config;
use lessonmark_dioxus::ui::App;
use lessonmark_engine::io;
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("lessonmark starting up!");

    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "lessonmark-dioxus".to_string());
    let args: Vec<String> = env::args().skip(1).collect();

    // An explicit config file wins over the default location
    let config_path = match args.as_slice() {
        [] => Config::config_path(),
        [path] => PathBuf::from(path),
        _ => {
            eprintln!("Usage: {program_name} [config-file]");
            process::exit(1);
        }
    };
    log::info!("Config path: {}", config_path.display());

    let config = match Config::load_from_path(&config_path) {
        Ok(Some(config)) => config,
        Ok(None) => {
            eprintln!("Error: No config file found at {}", config_path.display());
            eprintln!("Create one with at least `content_root` and `class_id`.");
            eprintln!("Usage: {program_name} [config-file]");
            process::exit(1);
        }
        Err(e) => {
            log::error!("Config::load_from_path() failed with error: {e}");
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_content_dir(&config.content_root) {
        eprintln!(
            "Error: Content root '{}' from config file '{}' is invalid: {e}",
            config.content_root.display(),
            config_path.display()
        );
        process::exit(1);
    }

    log::info!("About to launch Dioxus app for desktop");
    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .with_context(config)
        .launch(app_root);
}

fn app_root() -> Element {
    let config = use_context::<Config>();
    log::info!(
        "app_root() creating App component for class {}",
        config.class_id
    );

    rsx! {
        App { config }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("lessonmark")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
