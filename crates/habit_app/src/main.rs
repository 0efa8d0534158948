use clap::Parser;
use habit_app::{
    app::{run, AppConfig},
    cli::Cli,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(%err, "ignoring invalid environment configuration");
            AppConfig::default()
        }
    };
    if let Some(dir) = cli.data_dir.clone() {
        config = config.with_data_dir(dir);
    }
    if let Err(err) = run(config, cli.command()) {
        eprintln!("habits: {err:#}");
        std::process::exit(1);
    }
}
