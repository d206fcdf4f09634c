pub mod calculator;
pub mod config;
pub mod user;

pub use calculator::{add, divide, multiply, subtract, Operation};
pub use user::{Profile, User};
