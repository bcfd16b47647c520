mod cli;

fn main() {
    if let Err(e) = cli::run() {
        if let Some(usage) = e.downcast_ref::<clap::Error>() {
            usage.exit(); // prints usage, exits 2
        }
        eprintln!("{e:#}"); // pretty anyhow chain
        std::process::exit(1);
    }
}
