use clap::Parser;
use pixelboard::cli::Cli;
use pixelboard::config::Config;
use pixelboard::logging::init_tracing;
use pixelboard::shutdown::ShutdownHandle;
use pixelboard::ui::runtime;

fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded.and_then(|config| config.apply(cli.overrides())) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = start(&config) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn start(config: &Config) -> anyhow::Result<()> {
    let log_path = init_tracing(&config.logging)?;
    tracing::info!(log = %log_path.display(), "pixelboard v{}", env!("CARGO_PKG_VERSION"));

    let shutdown = ShutdownHandle::new();
    shutdown.install_signal_handlers()?;
    runtime::run(config, shutdown)
}
