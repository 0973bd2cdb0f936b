use clap::{App, Arg, ArgMatches};
use diesel::sqlite::SqliteConnection;
use std::error::Error;

use postboard::{db, models, posts};

pub const NAME: &str = "create";

pub fn app() -> App<'static> {
    App::new(NAME)
        .about("Create a post")
        .arg(
            Arg::new("id")
                .long("id")
                .about("Post ID")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .about("Post title")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::new("body")
                .long("body")
                .about("Post body")
                .takes_value(true)
                .required(true),
        )
}

pub async fn execute(matches: &ArgMatches, config: &config::Config) -> Result<(), Box<dyn Error>> {
    let conn = db::connect(&config)?;
    let post = create(&conn, matches)?;
    log::info!("Created post {}", &post.id);
    println!("{}", super::post_json(&post)?);
    Ok(())
}

/// # Errors
///
/// Will return Err if the post cannot be written
pub fn create(
    conn: &SqliteConnection,
    matches: &ArgMatches,
) -> Result<models::Post, Box<dyn Error>> {
    let create = models::PostCreate {
        id: String::from(matches.value_of("id").ok_or("--id is required")?),
        title: String::from(matches.value_of("title").ok_or("--title is required")?),
        body: String::from(matches.value_of("body").ok_or("--body is required")?),
    };
    Ok(posts::create_post(conn, &create)?)
}
