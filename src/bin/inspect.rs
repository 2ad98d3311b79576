use std::path::{Path, PathBuf};

use clap::Parser;
use miette::IntoDiagnostic;
use pasquim::cli::{report, Options};
use rustyline::{error::ReadlineError, history::DefaultHistory, Editor};

fn main() -> miette::Result<()> {
    // Install the panic handler.
    bupropion::install(bupropion::BupropionHandlerOpts::new).into_diagnostic()?;
    env_logger::init();

    // Parse the command line arguments.
    let options = Options::parse();

    options
        .run_inputs(&mut std::io::stdout(), &mut std::io::stderr())
        .into_diagnostic()?;

    if options.repl {
        repl(&options)?;
    }

    Ok(())
}

fn get_history_path() -> Option<PathBuf> {
    let home_env = std::env::var("HOME").ok()?;
    let path = format!("{home_env}/.pasquim.history");
    Some(PathBuf::from(path))
}

fn repl(options: &Options) -> miette::Result<()> {
    // No helper: lines are words and literals such as #\( that a bracket
    // validator would refuse.
    let mut rl = Editor::<(), DefaultHistory>::new().into_diagnostic()?;
    let path = get_history_path();

    if let Some(path) = path.clone() {
        if rl.load_history(&path).is_err() {
            log::info!("no previous history at {}", path.display());
        }
    }

    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str()).into_diagnostic()?;

                report(
                    options.eval_line(&line),
                    &mut std::io::stdout(),
                    &mut std::io::stderr(),
                )
                .into_diagnostic()?;
            }
            Err(ReadlineError::Interrupted) => {
                println!("Interrupted");
                break;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                log::error!("cannot read line: {err}");
                break;
            }
        }
    }

    if let Some(path) = path {
        save_history(&mut rl, &path);
    }

    Ok(())
}

/// Appends the session to the history file, warning when it cannot.
fn save_history(rl: &mut Editor<(), DefaultHistory>, path: &Path) -> bool {
    match rl.append_history(path) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("cannot save history to {}: {err}", path.display());
            false
        }
    }
}
