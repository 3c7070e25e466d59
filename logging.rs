use std::io::Write as _;

use log::Level;
use pretty_env_logger::env_logger;

/// Install the stderr logger. Level comes from `RUST_LOG`; errors only by default.
pub fn init() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(log::LevelFilter::Error);
    builder.parse_default_env();

    builder.format(|buf, record| {
        let mut level_style = buf.style();
        level_style.set_color(match record.level() {
            Level::Error => env_logger::fmt::Color::Red,
            Level::Warn => env_logger::fmt::Color::Yellow,
            Level::Info => env_logger::fmt::Color::Green,
            Level::Debug => env_logger::fmt::Color::Blue,
            Level::Trace => env_logger::fmt::Color::Magenta,
        });
        level_style.set_bold(true);

        writeln!(
            buf,
            "{} {} {} > {}",
            buf.timestamp(),
            level_style.value(format!("{:<5}", record.level())),
            record.target(),
            record.args()
        )
    });

    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
