pub mod greeting_client;

pub use greeting_client::*;
