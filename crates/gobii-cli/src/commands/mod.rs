pub mod fetch;
pub mod schema;
pub mod submit;
pub mod watch;
