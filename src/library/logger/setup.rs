use chrono::Utc;
use env_logger::{Builder, Env};
use std::io::Write;

/// Installs `env_logger` as the global logger. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init(timezone: chrono::FixedOffset) -> Result<(), log::SetLoggerError> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let local_time = Utc::now().with_timezone(&timezone);
            let formatted = local_time.format("%Y-%m-%d %I:%M:%S%.3f %p");
            writeln!(
                buf,
                "[{}] {:<5} {}: {}",
                formatted,
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
}
