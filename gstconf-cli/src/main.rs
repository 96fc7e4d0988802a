//! gstconf CLI entry point.

fn main() {
    if let Err(e) = gstconf_cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
