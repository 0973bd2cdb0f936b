use clap::{crate_authors, crate_description, crate_version, App, AppSettings, Arg};
use std::error::Error;

pub mod config;
pub mod logging;
pub mod subcommands;

pub async fn execute() -> Result<(), Box<dyn Error>> {
    let app_m = command().get_matches();
    let config = config::setup(&app_m)?;
    logging::setup(&config)?;
    subcommands::execute(&config, app_m).await?;
    Ok(())
}

/// The full command line: global flags plus every subcommand.
fn command() -> App<'static> {
    subcommands::setup(app())
}

fn app() -> App<'static> {
    App::new("postboard")
        .about(crate_description!())
        .version(crate_version!())
        .author(crate_authors!())
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .about("Turn debugging information on"),
        )
}
