//! Rule Config - typed config properties for game mods.
//!
//! Properties hold validated integer, percentage or boolean values with a
//! default. A property can mirror a host game rule, in which case live rule
//! values are read and written through a context supplied by the caller.
//! A [`PropertySet`] registers those rules once at startup and saves or loads
//! all values as a flat JSON object.
//!
//! ```no_run
//! use std::path::Path;
//! use rule_config::{
//!     ConfigProperty, IntProperty, MemoryRules, PropertySet, RuleCategory,
//! };
//!
//! # fn main() -> rule_config::Result<()> {
//! let mut rules = MemoryRules::new();
//! let mut config = PropertySet::new()
//!     .with(IntProperty::with_rule("spawnRadius", 16, 0, 128, RuleCategory::Spawning)?);
//! config.initialize(&mut rules)?;
//!
//! let path = Path::new("config/mymod.json");
//! config.load_from(path, Some(&mut rules))?;
//! config.int_mut("spawnRadius").unwrap().set_value(64, Some(&mut rules))?;
//! config.save_to(path, Some(&rules));
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod property;

pub use config::{config_file_path, AnyProperty, LoadReport, LoadStatus, PropertySet, SaveStatus};
pub use error::{ConfigError, Result};
pub use host::{
    MemoryRules, ReadContext, RuleCategory, RuleKey, RuleRegistry, RuleValue, WriteContext,
};
pub use property::{
    BooleanProperty, ConfigProperty, IntProperty, PercentageProperty, Property, Scalar,
};

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` takes precedence over `level`. Fails if a global subscriber is
/// already installed, e.g. by the host.
pub fn init_logging(level: &str, json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
