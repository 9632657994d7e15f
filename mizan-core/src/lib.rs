pub mod authorization;
pub mod users;
