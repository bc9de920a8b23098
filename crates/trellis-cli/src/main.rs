//! `trellis` binary

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use trellis_cli::{Cli, logging, run};

fn main() {
	let cli = Cli::parse();
	logging::init(cli.verbosity);

	let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
	let stdout = io::stdout();
	let result = run(&cli, &dir, &mut stdout.lock());

	if let Err(e) = result {
		eprintln!("Error: {}", e);
		process::exit(1);
	}
}
