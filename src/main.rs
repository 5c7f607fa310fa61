use clap::Parser;
use tasksink::cli::commands::Cli;
use tasksink::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match handlers::dispatch(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
