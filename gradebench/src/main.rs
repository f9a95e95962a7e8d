fn main() {
    if let Err(e) = gradebench::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
