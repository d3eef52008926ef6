pub mod client;
pub mod order;
