fn main() {
    if let Err(err) = ttr::run() {
        eprintln!("{}", ttr::format_error(&err));
        std::process::exit(1);
    }
}
