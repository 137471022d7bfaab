use funcss_rs::cli::{Cli, Parser, execute};
use funcss_rs::log_init::{init_logger, level_for_verbosity};

fn main() {
    let cli = Cli::parse();
    init_logger(level_for_verbosity(cli.verbose));

    if let Err(err) = execute(&cli, std::io::stdout().lock()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
