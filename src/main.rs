mod cli;
mod error;
mod hardware;
mod logging;
mod output;
mod report;

use clap::Parser;
use cli::Cli;
use output::print_error;

fn main() {
    let _cli = Cli::parse();
    logging::init_tracing();

    let stdout = std::io::stdout();
    if let Err(e) = report::write_report(&mut stdout.lock()) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
