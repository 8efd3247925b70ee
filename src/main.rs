use pedra_viewer::{
    config::Config,
    error::{AppError, AppResult},
    initialize_logging,
    pedra::Inventory,
    ui::components::StoneDetailsView,
    App,
};
use std::{env, path::PathBuf, process, time::Instant};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> AppResult<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        process::exit(0);
    }

    let start_time = Instant::now();

    // The log level lives in the config file, so it is read before logging starts
    let loaded = Config::load().await;
    let log_level = loaded
        .as_ref()
        .map_or_else(|_| "info".to_string(), |c| c.app.log_level.clone());
    initialize_logging(&log_level).map_err(|e| AppError::application(e.to_string()))?;

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return Err(e);
        }
    };

    let inventory_path = args.iter().find(|a| !a.starts_with('-')).map(PathBuf::from);

    let demo_mode = args.iter().any(|a| a == "--demo")
        || env::var("PEDRA_VIEWER_DEMO_MODE").is_ok()
        || env::var("TERM").unwrap_or_default().is_empty();

    if demo_mode {
        info!("Pedra Viewer demo mode starting");
        run_demo_mode(&config, inventory_path, start_time).await
    } else {
        info!("Pedra Viewer starting");
        run_full_tui_mode(config, inventory_path, start_time).await
    }
}

/// Log what the details modal would show for every stone
async fn run_demo_mode(
    config: &Config,
    inventory_path: Option<PathBuf>,
    start_time: Instant,
) -> AppResult<()> {
    let path = inventory_path.unwrap_or_else(|| config.inventory.path.clone());

    let mut inventory = Inventory::load_from_file(&path).await?;
    if config.inventory.sort_on_load {
        inventory = inventory.sorted();
    }
    info!("{} stones in {}", inventory.len(), path.display());

    for stone in inventory.iter() {
        let view = StoneDetailsView::from_request(stone.clone());
        info!(
            "{} | {} | {} | {}",
            view.name,
            view.tier_text,
            view.enhancement_text.as_deref().unwrap_or("-"),
            view.uid_text
        );
        if view.shows_status_table() {
            for row in &view.status_rows {
                info!("    {}: {}", row.name, row.value);
            }
        } else {
            info!("    {}", config.modal.empty_status_text);
        }
    }

    info!("Demo finished in {:?}", start_time.elapsed());
    Ok(())
}

async fn run_full_tui_mode(
    config: Config,
    inventory_path: Option<PathBuf>,
    start_time: Instant,
) -> AppResult<()> {
    let app = App::with_config(config.clone(), inventory_path.clone(), start_time);
    info!("Startup took {:?}", app.startup_time());

    match app.run().await {
        Ok(()) => {
            info!("Pedra Viewer terminated gracefully");
            Ok(())
        }
        Err(e) => {
            warn!(
                "TUI mode failed [{}]: {}. Falling back to demo mode.",
                e.severity().as_str(),
                e
            );
            warn!("Use 'pedra-viewer --demo' to run in demo mode explicitly.");
            run_demo_mode(&config, inventory_path, start_time).await
        }
    }
}

fn print_help() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] [INVENTORY]", env!("CARGO_PKG_NAME"));
    println!();
    println!("ARGS:");
    println!("    <INVENTORY>      JSON file with the stone list (default: pedras.json)");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Print this help message and exit");
    println!("    -V, --version    Print version information and exit");
    println!("        --demo       Print stone details to the log instead of opening the TUI");
    println!();
    println!("ENVIRONMENT:");
    println!("    PEDRA_VIEWER_DEMO_MODE   Set to run in demo mode");
    println!("    RUST_LOG                 Set logging level (overrides app.log_level)");
    println!();
    println!("KEYS:");
    println!("    Up/Down, j/k     Move through the inventory");
    println!("    Enter, click     Open stone details");
    println!("    Esc              Close the details; quits when nothing is open");
    println!("    q                Quit");
}
