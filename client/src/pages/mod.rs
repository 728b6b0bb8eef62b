pub mod register;
pub mod register_complete;
