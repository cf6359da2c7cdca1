use log::LevelFilter;

/// Environment variable read by [`init_logger`].
pub const LOG_ENV: &str = "MATLAB_COMPAT_LOG";

/// Install an `env_logger` backend filtered by `MATLAB_COMPAT_LOG`, falling back
/// to `default_filter` when the variable is unset.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_logger(default_filter: &str) {
    let _ = env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, default_filter))
        .try_init();
}
