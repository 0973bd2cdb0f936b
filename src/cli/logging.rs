/// `POSTBOARD_LOG` overrides the configured `log_level` filter.
pub fn setup(config: &config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = config.get_str("log_level")?;
    let env = env_logger::Env::default()
        .filter_or("POSTBOARD_LOG", log_level)
        .write_style("POSTBOARD_LOG_STYLE");
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .try_init()?;
    Ok(())
}
