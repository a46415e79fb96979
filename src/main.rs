fn main() {
    #[cfg(feature = "cli")]
    wirecursor::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("wirecursor: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
