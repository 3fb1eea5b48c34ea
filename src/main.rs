use clap::Parser;
use log::{debug, error, info};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use todo_tui::AppError;
use todo_tui::core::config::{self, ResolvedConfig, TodoConfig};
use todo_tui::core::state::{App, DraftPolicy};
use todo_tui::core::todo_file;
use todo_tui::tui;

#[derive(Parser)]
#[command(name = "todo-tui", about = "Terminal to-do list backed by a plain text file")]
struct Args {
    /// File to load todos from (one per line); rewritten on exit
    file: PathBuf,

    /// Keep or discard an unfinished entry when tabbing away from "Add Todos"
    #[arg(long, value_enum)]
    draft_policy: Option<DraftPolicy>,

    /// Config file to use instead of ~/.todo-tui/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        // Usage problems go to stdout with a failing status, before any UI.
        Err(e) if e.use_stderr() => {
            print!("{}", e.render());
            return ExitCode::FAILURE;
        }
        Err(e) => e.exit(),
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let (file_config, source) = match config::load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            // Bring up the default logger so the failure reaches the log file.
            init_logging(&config::resolve(&TodoConfig::default(), args.draft_policy));
            return Err(AppError::Config(e));
        }
    };
    let resolved = config::resolve(&file_config, args.draft_policy);
    init_logging(&resolved);
    source.log();
    debug!("Config: {:?}", file_config);

    info!(
        "todo-tui starting on {} (draft policy: {:?})",
        args.file.display(),
        resolved.draft_policy
    );

    let items = todo_file::load(&args.file)?;
    let mut app = App::new(items, resolved.draft_policy);

    tui::run(&mut app).map_err(AppError::Terminal)?;

    todo_file::save(&args.file, app.items.items())?;
    Ok(())
}

/// File logger; the terminal belongs to the UI so nothing goes to stdout.
fn init_logging(resolved: &ResolvedConfig) {
    let Some(path) = &resolved.log_file else {
        return;
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
}
