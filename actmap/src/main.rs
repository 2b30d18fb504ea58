use clap::Parser;
use std::io;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = actmap::Args::parse();

    if let Err(e) = actmap::run(&args, &mut io::stdout().lock()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(actmap::exit_code(&e));
    }
}
