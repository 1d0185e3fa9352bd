//! `dsa`: run one recursion exercise from the command line.

use dsa_cli::{init_tracing, usage, Command, Invocation};

fn main() {
    let invocation = Invocation::parse(std::env::args().skip(1));
    init_tracing(&invocation.config);

    let result = Command::from_invocation(&invocation).and_then(Command::run);
    match result {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err}");
            if err.wants_usage() {
                eprintln!();
                eprintln!("{}", usage());
            }
            std::process::exit(1);
        }
    }
}
