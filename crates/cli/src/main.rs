fn main() {
    if let Err(e) = autodoc_cli::run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
