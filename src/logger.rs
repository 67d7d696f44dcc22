use simplelog::{ConfigBuilder, LevelFilter, SimpleLogger};

/// Install the process logger. Only this crate's records are kept so
/// `--verbose` does not drown answers in HTTP client chatter.
pub fn init(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let config = ConfigBuilder::new()
        .add_filter_allow_str(env!("CARGO_CRATE_NAME"))
        .build();
    let _ = SimpleLogger::init(level, config);
}
