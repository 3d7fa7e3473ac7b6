use std::io::Write;

use env_logger::{Builder, Env};
use log::Level;
use owo_colors::OwoColorize;

/// Log to stderr with coloured levels. Quiet by default; set `RUST_LOG` for more.
pub fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            let level = record.level();
            let label = match level {
                Level::Error => level.red().bold().to_string(),
                Level::Warn => level.yellow().bold().to_string(),
                Level::Info => level.green().bold().to_string(),
                Level::Debug => level.blue().bold().to_string(),
                Level::Trace => level.magenta().bold().to_string(),
            };
            writeln!(buf, "{} - {}", label, record.args())
        })
        .init()
}
