use std::io;

fn main() {
    yahtzee_cli::logging::init_logging();
    let code = yahtzee_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
