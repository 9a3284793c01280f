pub mod service;
pub mod time;

pub use service::*;
pub use time::*;
