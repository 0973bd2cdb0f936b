use clap::App;
use clap::ArgMatches;
use postboard::models::Post;
use std::error::Error;

pub mod create;
pub mod serve;
pub mod show;

pub fn setup(app: App<'static>) -> App<'static> {
    app.subcommand(serve::app())
        .subcommand(create::app())
        .subcommand(show::app())
}

pub async fn execute(config: &config::Config, app_m: ArgMatches) -> Result<(), Box<dyn Error>> {
    postboard::db::setup(&config)?;
    match app_m.subcommand() {
        Some((serve::NAME, sub_m)) => serve::execute(&sub_m, &config).await,
        Some((create::NAME, sub_m)) => create::execute(&sub_m, &config).await,
        Some((show::NAME, sub_m)) => show::execute(&sub_m, &config).await,
        _ => Ok(()),
    }
}

/// Output format shared by subcommands that print a post.
pub fn post_json(post: &Post) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(post)
}

#[cfg(test)]
pub(crate) fn test_connection() -> diesel::sqlite::SqliteConnection {
    use diesel::Connection;

    let conn = diesel::sqlite::SqliteConnection::establish(":memory:").expect("in-memory db");
    postboard::db::run_migrations(&conn, false).expect("migrations");
    conn
}
