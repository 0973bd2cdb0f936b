use clap::{App, Arg, ArgMatches};
use diesel::sqlite::SqliteConnection;
use std::error::Error;

use postboard::{db, models, posts};

pub const NAME: &str = "show";

pub fn app() -> App<'static> {
    App::new(NAME).about("Show a post").arg(
        Arg::new("id")
            .long("id")
            .about("Post ID")
            .takes_value(true)
            .required(true),
    )
}

pub async fn execute(matches: &ArgMatches, config: &config::Config) -> Result<(), Box<dyn Error>> {
    let conn = db::connect(&config)?;
    let post = show(&conn, matches)?;
    println!("{}", super::post_json(&post)?);
    Ok(())
}

/// # Errors
///
/// Will return Err if no post has the requested id
pub fn show(
    conn: &SqliteConnection,
    matches: &ArgMatches,
) -> Result<models::Post, Box<dyn Error>> {
    let id = matches.value_of("id").ok_or("--id is required")?;
    Ok(posts::find_post(conn, id)?)
}
