pub mod cli;
pub mod config;
pub mod model;
pub mod platform;
pub mod quirk;
pub mod resolver;
pub mod schedule;
pub mod workspace;

mod api;

pub use api::{Packfetch, PackfetchBuilder};
