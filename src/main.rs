//! VPNGate: multi-provider VPN gateway
//!
//! Entry point for the vpngate application.

use std::path::Path;
use std::process::ExitCode;

use vpngate::config::{Cli, Command, FragmentSet, write_default_config};
use vpngate::provider::{Catalog, UniformPicker, resolve};
use vpngate::settings::Settings;

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Handle init subcommand before any logging setup
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    setup_tracing(cli.verbose);

    // Load fragments and reconcile
    let fragments = match FragmentSet::load(&cli) {
        Ok(fragments) => fragments,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    let settings = match fragments.reconcile() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    tracing::info!("{settings}");

    match &cli.command {
        Some(Command::Resolve { catalog, seed }) => handle_resolve(&settings, catalog, *seed),
        Some(Command::Check) => {
            println!("{settings}");
            exit_code::SUCCESS
        }
        _ => run_application(&cli, settings),
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Handles the `resolve` subcommand: one catalog in, one endpoint out.
fn handle_resolve(settings: &Settings, catalog_path: &Path, seed: Option<u64>) -> ExitCode {
    let catalog = match Catalog::load(catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Catalog error: {e}");
            return exit_code::CONFIG_ERROR;
        }
    };

    let selected_provider = *settings.vpn.provider.get();
    if catalog.provider != selected_provider {
        tracing::warn!(
            "Catalog belongs to {}, but the selection targets {}",
            catalog.provider,
            selected_provider
        );
    }

    let mut picker = seed.map_or_else(UniformPicker::from_entropy, UniformPicker::seeded);

    match resolve(&settings.vpn, &catalog, &mut picker) {
        Ok(connection) => {
            println!("{connection}");
            exit_code::SUCCESS
        }
        Err(e) => {
            tracing::error!("Connection resolution failed: {e}");
            exit_code::runtime_error()
        }
    }
}

/// Runs the long-lived application with the given configuration.
fn run_application(cli: &Cli, settings: Settings) -> ExitCode {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");

    match runtime.block_on(run::execute(cli, settings)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("Application error: {e}");
            exit_code::runtime_error()
        }
    }
}
