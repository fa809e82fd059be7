pub mod bootstrap;
pub mod users;
