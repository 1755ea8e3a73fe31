use std::io;

fn main() {
    dailyset_cli::logging::init_logging();
    let code = dailyset_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
