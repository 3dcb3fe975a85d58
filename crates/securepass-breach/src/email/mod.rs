pub(crate) mod breach_directory;
pub(crate) mod check;
pub(crate) mod hibp;
mod provider;

pub use check::{CredentialSource, EmailBreachResult};
pub use provider::EmailBreachProvider;
