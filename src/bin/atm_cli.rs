use challenge_core::{cli::run_atm_cli, init};

fn main() {
    init();

    if let Err(err) = run_atm_cli() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
