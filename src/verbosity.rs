/// How much the binaries log. Maps onto the [`tracing`] level filter handed to
/// the subscriber.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    #[clap(help = "Only report errors")]
    Silent,
    #[clap(help = "Search progress and per-trial results")]
    Normal,
    #[clap(help = "Also log every pruned and decreased frontier entry")]
    Verbose,
    Debug,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => tracing::Level::ERROR,
            Verbosity::Normal => tracing::Level::INFO,
            Verbosity::Verbose => tracing::Level::DEBUG,
            Verbosity::Debug => tracing::Level::TRACE,
        }
    }
}
