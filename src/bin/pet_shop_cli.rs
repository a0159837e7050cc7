use challenge_core::{cli::run_pet_shop_cli, init};

fn main() {
    init();

    if let Err(err) = run_pet_shop_cli() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
