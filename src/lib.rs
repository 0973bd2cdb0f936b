#[macro_use]
extern crate diesel;

#[macro_use]
extern crate diesel_migrations;

pub mod db;
pub mod gql;
pub mod models;
pub mod posts;
pub mod schema;
