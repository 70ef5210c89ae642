mod app_state;
mod cli;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use sumeru_config::SumeruConfig;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        eprintln!("\n--- Sumeru crashed ---");
        eprintln!("Please report this issue at: https://github.com/sumeru/sumeru/issues");
        eprintln!("----------------------\n");
        default_hook(info);
    }));
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config loads before logging init so the configured filter level
    // can take effect; any load failure is reported right after.
    let config_result = match args.config.as_deref() {
        Some(path) => sumeru_config::load_from_path(std::path::Path::new(path)),
        None => sumeru_config::load_config(),
    };
    let (mut config, config_err) = match config_result {
        Ok(c) => (c, None),
        Err(e) => (SumeruConfig::default(), Some(e)),
    };

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap_or_else(|_| "info".parse().unwrap())),
        )
        .init();

    tracing::info!("Sumeru v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_err {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }

    if args.no_right_panel {
        config.layout.show_right_panel = false;
    }

    if args.dump_config {
        println!("{}", sumeru_config::config_to_json(&config));
        return;
    }

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::SumeruApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
