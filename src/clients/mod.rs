//! Client handles for talking to the registry service.

mod registry_client;

pub use registry_client::RegistryClient;
