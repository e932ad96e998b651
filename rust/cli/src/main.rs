use std::env;
use std::io;
use std::process::exit;

fn main() {
    let code = sevenstud_cli::run(env::args(), &mut io::stdout(), &mut io::stderr());
    exit(code);
}
