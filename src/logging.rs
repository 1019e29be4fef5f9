use std::io::Write;

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialise the stderr logger. `RUST_LOG` still overrides the level.
///
/// Stdout is reserved for the plugin status line, so every log record goes to
/// stderr as `[LEVEL] (module) message`.
pub fn init(debug: bool) {
    let default_level = default_level(debug);
    let env = Env::default().default_filter_or(default_level.as_str());

    Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] ({}) {}",
                record.level(),
                record.module_path().unwrap_or("check_wmi"),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok();
}

#[must_use]
pub const fn default_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}
