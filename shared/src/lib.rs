pub mod messages;
pub mod password;
