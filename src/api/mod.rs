mod backend;
mod client;
mod record;
mod result;

#[cfg(test)]
pub mod fake;

pub use backend::Backend;
pub use client::Client;
pub use record::{Field, ListResponse, MonitorRecord};
pub use result::{Error, Result};
