//! jsonlinks - summarize the URLs found in a JSON document.

use clap::Parser;
use jsonlinks_cli::{logging, Cli, Formatter};
use std::io::IsTerminal;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();

    let cli = Cli::parse();
    let formatter = Formatter::new(std::io::stderr().is_terminal());

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = jsonlinks_cli::run(cli, &formatter, &mut stdout).await {
        eprintln!("{}", formatter.error(&e.to_string()));
        process::exit(1);
    }
}
