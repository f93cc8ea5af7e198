pub mod catalog;
pub mod cli;
pub mod config;
pub mod db;
pub mod exec;
pub mod utils;

pub use db::{CommandProfile, Method, ProfileStore};
pub use exec::{DispatchClient, Outcome};
