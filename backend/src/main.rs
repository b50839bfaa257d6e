fn main() {
  if let Err(e) = urata_lib::run(std::env::args().skip(1)) {
    eprintln!("urata: {e:#}");
    std::process::exit(1);
  }
}
