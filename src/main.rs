mod app;
mod cli;
mod consts;
mod game;
mod key;
mod logging;
mod render;
mod term;
use crate::app::{App, Outcome};
use crate::cli::{Arguments, Command};
use crate::game::GameState;
use crate::term::Term;
use anyhow::Context;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::io::{self, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    match Command::from_env() {
        Ok(Command::Run(args)) => app_exit(run(args)),
        Ok(Command::Help) => {
            print!("{}", cli::USAGE);
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("termsnake: {e}");
            eprintln!("Run `termsnake --help` for usage.");
            ExitCode::from(2)
        }
    }
}

fn run(args: Arguments) -> anyhow::Result<()> {
    if let Some(ref path) = args.log_file {
        logging::init(path)
            .with_context(|| format!("failed to set up logging to {}", path.display()))?;
    }
    tracing::info!(seed = ?args.seed, version = env!("CARGO_PKG_VERSION"), "Starting");
    let outcome = match args.seed {
        Some(seed) => play(GameState::new_with_rng(StdRng::seed_from_u64(seed)))?,
        None => play(GameState::new())?,
    };
    tracing::info!(phase = ?outcome.phase, score = outcome.score, "Exiting");
    // The alternate screen is gone by now, so leave the last status line
    // behind on the normal screen.
    println!("{}", outcome.status);
    Ok(())
}

fn play<R: Rng>(state: GameState<R>) -> anyhow::Result<Outcome> {
    let mut term = Term::acquire().context("failed to prepare terminal")?;
    let r = App::new(state).run(&mut term);
    drop(term);
    r.context("terminal I/O failed")
}

fn app_exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = ?e, "Exiting on error");
            eprintln!("termsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}
