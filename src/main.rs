fn main() {
    // Delegate to CLI runner; errors are printed here.
    if let Err(err) = format_all::cli::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
