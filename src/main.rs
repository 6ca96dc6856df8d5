use std::fs;
use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{filter::LevelFilter, fmt};

use text_cleaner::app::infrastructure::input::read_input;
use text_cleaner::cli::{Cli, Commands, RunArgs, StatsArgs, ThemeAction};
use text_cleaner::{AppSettings, Operation, Result, Workspace, text_ops};

fn main() {
    let cli = Cli::parse();
    init_tracing(log_level(cli.verbose));

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(AppSettings::config_path);
    debug!("Using settings file {}", config_path.display());

    match cli.command {
        Commands::Run(args) => {
            let settings = AppSettings::load_from(&config_path);
            run_operations(args, &settings)
        }
        Commands::Stats(args) => print_stats(args),
        Commands::Ops => list_operations(),
        Commands::Theme(args) => {
            let mut settings = AppSettings::load_from(&config_path);
            let action = args.action.unwrap_or(ThemeAction::Show);
            update_theme(action, &mut settings)?;
            if action != ThemeAction::Show {
                settings.save_to(&config_path)?;
            }
            Ok(())
        }
    }
}

fn run_operations(args: RunArgs, settings: &AppSettings) -> Result<()> {
    let mut workspace = Workspace::from_settings(settings);
    workspace.input = read_input(args.input.as_deref())?;
    if let Some(remove) = args.remove_accents_override() {
        workspace.remove_accents = remove;
    }
    if let Some(chain) = args.apply_to_output_override() {
        workspace.apply_to_output = chain;
    }

    workspace.apply_all(&args.operations);
    info!(
        "Ran {} operation(s): {}",
        args.operations.len(),
        args.operations
            .iter()
            .map(Operation::name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    if args.stats {
        eprintln!("Input:  {}", workspace.input_stats());
        eprintln!("Output: {}", workspace.output_stats());
    }

    if let Some(dir) = &args.export {
        let path = workspace.export_to_dir(dir)?;
        eprintln!("File saved: {}", path.display());
    }

    if let Some(path) = &args.output {
        fs::write(path, &workspace.output)?;
        info!("Wrote output to {}", path.display());
    }

    if args.output.is_none() && args.export.is_none() {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", workspace.output)?;
    }

    Ok(())
}

fn print_stats(args: StatsArgs) -> Result<()> {
    let text = read_input(args.input.as_deref())?;
    let stats = text_ops::stats(&text);

    let mut stdout = io::stdout().lock();
    if args.json {
        writeln!(stdout, "{}", serde_json::to_string(&stats)?)?;
    } else {
        writeln!(stdout, "{}", stats)?;
    }
    Ok(())
}

fn list_operations() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for op in Operation::all() {
        writeln!(stdout, "{:<22}{}", op.name(), op.label())?;
    }
    Ok(())
}

fn update_theme(action: ThemeAction, settings: &mut AppSettings) -> Result<()> {
    settings.theme = match action {
        ThemeAction::Show => settings.theme,
        ThemeAction::Toggle => settings.theme.toggled(),
        ThemeAction::Set { theme } => theme,
    };
    info!("Theme is {}", settings.theme.storage_value());

    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "{} (toggle: {})",
        settings.theme.storage_value(),
        settings.theme.toggle_label()
    )?;
    Ok(())
}
