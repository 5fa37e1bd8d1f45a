pub mod types;

pub use types::{ProductName, SessionId};
