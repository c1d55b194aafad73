mod common;
pub mod fight;
pub mod fighter;
pub mod ranking;
