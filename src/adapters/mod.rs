// Adapters layer: concrete implementations of the domain ports for external
// systems. The core only sees the traits in domain::ports.

pub mod http;
