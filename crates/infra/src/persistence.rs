// crates/infra/src/persistence.rs
mod request_file;

pub use request_file::{RequestFormat, load_request, parse_request};
