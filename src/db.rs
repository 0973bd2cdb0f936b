use diesel::prelude::*;
use diesel::r2d2::ConnectionManager;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::embed_migrations;

pub mod paginate_dsl;

embed_migrations!("migrations");

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

/// # Errors
///
/// Will return Err for any problem in connection to database or running migrations
pub fn setup(config: &config::Config) -> Result<SqliteConnection, Box<dyn std::error::Error>> {
    let debug = config.get_bool("debug")?;
    let conn = connect(config)?;
    run_migrations(&conn, debug)?;
    Ok(conn)
}

/// # Errors
///
/// Will return Err if any pending migration fails to apply
pub fn run_migrations(
    conn: &SqliteConnection,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if verbose {
        embedded_migrations::run_with_output(conn, &mut std::io::stdout())?;
    } else {
        embedded_migrations::run(conn)?;
    }
    Ok(())
}

/// # Errors
///
/// Will return Err for any problem in connection to database
pub fn connect(config: &config::Config) -> Result<SqliteConnection, Box<dyn std::error::Error>> {
    let database_url = &config.get_str("database_url")?;
    Ok(SqliteConnection::establish(&database_url)?)
}

/// # Errors
///
/// Will return Err if the pool cannot open its initial connections
pub fn create_pool(config: &config::Config) -> Result<SqlitePool, Box<dyn std::error::Error>> {
    let database_url = config.get_str("database_url")?;
    let max_size = config.get::<u32>("database_pool_max_size")?;
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Ok(r2d2::Pool::builder().max_size(max_size).build(manager)?)
}

/// Single-connection in-memory database with migrations applied. Every
/// connection to `:memory:` is its own database, so the pool never grows.
#[cfg(test)]
pub(crate) fn test_pool() -> SqlitePool {
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .expect("in-memory pool");
    {
        let conn = pool.get().expect("pooled connection");
        run_migrations(&conn, false).expect("migrations");
    }
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_create_posts_table() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        let count = crate::schema::posts::table
            .count()
            .get_result::<i64>(&*conn)
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn migrations_are_idempotent() {
        let pool = test_pool();
        let conn = pool.get().unwrap();
        run_migrations(&conn, false).unwrap();
    }
}
