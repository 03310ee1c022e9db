pub mod data;
pub mod payloads;
