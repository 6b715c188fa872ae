use dioxus::prelude::*;
use tracing::{error, info, Level};
use wrm_common::SiteConfig;
use wrm_web::App;

fn configure_logging(level: Level) {
    // Must run before launch, which otherwise installs its own default logger
    dioxus::logger::init(level).expect("Failed to initialize logger");
}

fn main() {
    let (config, config_error) = match SiteConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    configure_logging(config.log_level);

    if let Some(e) = config_error {
        error!("Invalid build configuration, using defaults: {}", e);
    }
    info!("Serving screenshots from {}", config.asset_base);

    LaunchBuilder::web().with_context(config).launch(App);
}
