use clap::ArgMatches;
use config::Config;
use std::error::Error;

pub fn setup(app_m: &ArgMatches) -> Result<config::Config, Box<dyn Error>> {
    let mut config = defaults()?;
    config
        .merge(config::File::with_name("config").required(false))?
        .merge(config::Environment::with_prefix("APP"))?;

    if app_m.is_present("debug") {
        config.set("debug", true)?;
        config.set("log_level", "debug")?;
    }

    Ok(config)
}

fn defaults() -> Result<config::Config, Box<dyn Error>> {
    let mut config = Config::default();
    config
        .set_default("debug", false)?
        .set_default("log_level", "info")?
        .set_default("database_url", "postboard.sqlite")?
        .set_default("database_pool_max_size", 8)?
        .set_default("http_server_address", "0.0.0.0:3010")?
        .set_default("http_server_static_path", "./www/")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::command;

    #[test]
    fn defaults_cover_every_key() {
        let config = defaults().unwrap();
        assert!(!config.get_bool("debug").unwrap());
        assert_eq!(config.get_str("log_level").unwrap(), "info");
        assert_eq!(config.get_str("database_url").unwrap(), "postboard.sqlite");
        assert_eq!(config.get::<u32>("database_pool_max_size").unwrap(), 8);
        assert_eq!(
            config.get_str("http_server_address").unwrap(),
            "0.0.0.0:3010"
        );
        assert_eq!(config.get_str("http_server_static_path").unwrap(), "./www/");
    }

    #[test]
    fn debug_flag_raises_log_level() {
        let app_m = command().get_matches_from(vec!["postboard", "-d", "serve"]);
        let config = setup(&app_m).unwrap();
        assert!(config.get_bool("debug").unwrap());
        assert_eq!(config.get_str("log_level").unwrap(), "debug");
    }

    #[test]
    fn without_debug_flag_keeps_info_level() {
        let app_m = command().get_matches_from(vec!["postboard", "serve"]);
        let config = setup(&app_m).unwrap();
        assert!(!config.get_bool("debug").unwrap());
        assert_eq!(config.get_str("log_level").unwrap(), "info");
    }

    #[test]
    fn environment_overrides_defaults() {
        std::env::set_var("APP_DATABASE_URL", "from-env.sqlite");
        let app_m = command().get_matches_from(vec!["postboard", "serve"]);
        let config = setup(&app_m);
        std::env::remove_var("APP_DATABASE_URL");

        let config = config.unwrap();
        assert_eq!(config.get_str("database_url").unwrap(), "from-env.sqlite");
        assert_eq!(config.get::<u32>("database_pool_max_size").unwrap(), 8);
    }
}
