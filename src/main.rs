fn main() {
    if let Err(e) = seawater_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
