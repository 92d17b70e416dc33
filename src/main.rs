use clap::Parser;
use std::io::Write;

use symbol_art::acquire::ImageLoader;
use symbol_art::cli::{handle_config_action, Args, Command, RunSettings};
use symbol_art::config::Config;
use symbol_art::output::OutputPanel;
use symbol_art::pipeline::Converter;

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Load config: an explicit --config path must exist, the default one may not.
fn load_config(args: &Args) -> Result<Config, String> {
    match &args.config {
        Some(path) => Config::load_from_explicit(path).map_err(|e| e.to_string()),
        None => match Config::load(None) {
            Ok(c) => Ok(c),
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.\n");
                Ok(Config::default())
            }
        },
    }
}

async fn run_convert(settings: RunSettings) -> Result<(), String> {
    let loader = ImageLoader::new(settings.acquire.clone()).map_err(|e| e.to_string())?;
    let mut converter = Converter::new(settings.render.clone());
    let mut panel = OutputPanel::new();

    let outcome = match converter.load(&loader, &settings.source).await {
        Ok(()) => converter.convert().await,
        Err(e) => Err(e),
    };
    let ok = panel.show(outcome);
    if !ok {
        return Err(panel.lines().join("\n"));
    }

    let rendered = settings.format.render(panel.lines(), &settings.style);
    match &settings.output {
        Some(path) => {
            std::fs::write(path, rendered + "\n")
                .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
            log::info!("Wrote {} lines to {}", panel.lines().len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered).map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(Command::Config { action }) = &args.command {
        if let Err(e) = handle_config_action(action.clone(), args.config.as_deref()) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        return;
    }

    let result = load_config(&args)
        .and_then(|cfg| RunSettings::resolve(&args, &cfg).map_err(|e| e.to_string()))
        .and_then(|settings| {
            let rt = tokio::runtime::Runtime::new()
                .map_err(|e| format!("Failed to start async runtime: {}", e))?;
            rt.block_on(run_convert(settings))
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
