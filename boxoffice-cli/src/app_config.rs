use boxoffice_order::OrderRules;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub business_rules: OrderRules,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::with_name("config/default").required(false))
                .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
                // Not checked in
                .add_source(config::File::with_name("config/local").required(false))
                // e.g. `BOXOFFICE__BUSINESS_RULES__MAX_SEATS_PER_ORDER=10`
                .add_source(config::Environment::with_prefix("BOXOFFICE").separator("__")),
        )
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        builder.build()?.try_deserialize()
    }
}
