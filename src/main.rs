mod adapters;
mod app;
mod core;
mod global_constants;

#[cfg(test)]
mod app_tests;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!(
        "{} Starting {}",
        global_constants::LOG_TAG_MAIN,
        global_constants::APPLICATION_NAME
    );

    let cli = app::CliArgs::parse();
    let mut out = std::io::stdout().lock();
    let mut err = std::io::stderr().lock();

    app::run(cli, &mut out, &mut err, app::build_default_orchestrator)
}
