use clap::{CommandFactory, ValueEnum};
use clap_complete::{Shell, generate_to};
use std::io;

include!("src/cli.rs");

fn main() -> Result<(), io::Error> {
    let Some(outdir) = std::env::var_os("OUT_DIR") else {
        return Ok(());
    };
    let mut app = Cli::command();
    for &shell in Shell::value_variants() {
        generate_to(shell, &mut app, "tylam", &outdir)?;
    }
    println!("cargo:rerun-if-changed=src/cli.rs");

    Ok(())
}
