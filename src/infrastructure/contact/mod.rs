//! Contact inquiry delivery.

mod logging_gateway;

pub use logging_gateway::LoggingContactGateway;
