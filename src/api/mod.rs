pub mod client;
pub mod endpoints;
pub mod executor;
pub mod params;
pub mod transport;
