use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tylam_cli::{
    Repl,
    cli::{Cli, Commands},
    report,
};
use tylam_driver::{Conf, SourceFile, Worker, check, parse};

fn main() -> ExitCode {
    let command = Cli::parse().command;
    let level = if command.verbose() { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    match dispatch(command) {
        | Ok(()) => ExitCode::SUCCESS,
        | Err(()) => ExitCode::FAILURE,
    }
}

fn load(file: std::path::PathBuf) -> Result<SourceFile, ()> {
    SourceFile::load(&file).map_err(|err| {
        eprintln!("{} `{}`: {}", "error:".red().bold(), file.display(), err);
    })
}

fn dispatch(command: Commands) -> Result<(), ()> {
    let mut conf = Conf::load();
    match command {
        | Commands::Run { file, timeout, no_type, .. } => {
            if let Some(ms) = timeout {
                conf.timeout_ms = Some(ms);
            }
            if no_type {
                conf.show_type = false;
            }
            let src = load(file)?;
            match Worker::new(&conf).run(src.text.clone()) {
                | Ok(outcome) => println!("{}", outcome.render(conf.show_type)),
                | Err(err) => {
                    report(&err, &src.info());
                    Err(())?
                }
            }
        }
        | Commands::Check { file, .. } => {
            let src = load(file)?;
            let text = src.text.clone();
            match Worker::new(&conf).spawn(move || check(&text)).and_then(|res| res) {
                | Ok((_, ty)) => println!("{}", ty),
                | Err(err) => {
                    report(&err, &src.info());
                    Err(())?
                }
            }
        }
        | Commands::Parse { file } => {
            let src = load(file)?;
            match parse(&src.text) {
                | Ok(expr) => println!("{}", expr),
                | Err(err) => {
                    report(&err, &src.info());
                    Err(())?
                }
            }
        }
        | Commands::Repl { .. } => {
            let repl = Repl { worker: Worker::new(&conf), show_type: conf.show_type };
            repl.launch().map_err(|err| {
                eprintln!("{} {}", "error:".red().bold(), err);
            })?
        }
    }
    Ok(())
}
