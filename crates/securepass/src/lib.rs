#![doc = include_str!("../README.md")]

use securepass_breach::BreachClientExt as _;

/// Re-export subclients for easier access
pub mod clients {
    pub use securepass_breach::BreachClient;
}

/// The main entry point for the SecurePass SDK
pub struct SecurePassClient(pub securepass_core::Client);

impl SecurePassClient {
    /// Initialize a new instance of the SDK client
    pub fn new(settings: Option<securepass_core::ClientSettings>) -> Self {
        Self(securepass_core::Client::new(settings))
    }

    /// Breach lookup operations
    pub fn breaches(&self) -> securepass_breach::BreachClient {
        self.0.breaches()
    }
}
