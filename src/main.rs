//! kexplain - Entry Point

use clap::Parser;
use kexplain::config::{BellStyle, KeyBindings};
use kexplain::model::AppError;
use kexplain::source::CommandExplainer;
use kexplain::view::PagerArgs;
use std::path::PathBuf;
use tracing::info;

/// kexplain - page through `kubectl explain` output with search
#[derive(Parser, Debug)]
#[command(name = "kexplain")]
#[command(version)]
#[command(about = "Terminal pager for kubectl explain output")]
pub struct Args {
    /// Resource to explain first, e.g. `pod.spec` (default: `--help`)
    pub target: Option<String>,

    /// Program that produces explanations (default: kubectl)
    #[arg(long)]
    pub command: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How to signal a key that did nothing
    #[arg(long, value_enum)]
    pub bell: Option<BellStyle>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    start(Args::parse())?;
    Ok(())
}

fn start(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = kexplain::config::load_config_with_precedence(args.config.clone())?;
        let merged = kexplain::config::merge_config(config_file);
        let with_env = kexplain::config::apply_env_overrides(merged);
        kexplain::config::apply_cli_overrides(with_env, args.target, args.command, args.bell)
    };

    kexplain::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let bindings = KeyBindings::default().with_overrides(&config.keybindings)?;
    let explainer = CommandExplainer::new(config.command, config.command_args);

    kexplain::view::run(
        Box::new(explainer),
        PagerArgs {
            initial_target: config.initial_target,
            bell: config.bell,
            bindings,
        },
    )
}
