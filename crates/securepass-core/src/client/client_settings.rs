use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the various targets and behavior of the
/// SecurePass Client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use securepass_core::{ClientSettings, EmailProvider};
/// let settings = ClientSettings {
///     breach_api_url: "https://haveibeenpwned.com/api/v3".to_string(),
///     range_api_url: "https://api.pwnedpasswords.com".to_string(),
///     provider: EmailProvider::HaveIBeenPwned,
///     fallback_credential: None,
///     user_agent: "SecurePass Rust-SDK".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The base url of the breach-by-email source. Defaults to `https://haveibeenpwned.com/api/v3`
    pub breach_api_url: String,
    /// The base url of the password range source. Defaults to `https://api.pwnedpasswords.com`
    pub range_api_url: String,
    /// Which breach-by-email response shape to expect. Defaults to HaveIBeenPwned
    pub provider: EmailProvider,
    /// Shared credential used when a call does not supply its own. Defaults to `None`, in which
    /// case lookups without a per-call credential are sent unauthenticated.
    pub fallback_credential: Option<String>,
    /// The user_agent to send with every request. Defaults to `SecurePass Rust-SDK`
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            breach_api_url: "https://haveibeenpwned.com/api/v3".into(),
            range_api_url: "https://api.pwnedpasswords.com".into(),
            provider: EmailProvider::HaveIBeenPwned,
            fallback_credential: None,
            user_agent: "SecurePass Rust-SDK".into(),
        }
    }
}

/// Breach-by-email sources this client can talk to.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub enum EmailProvider {
    /// The Have I Been Pwned v3 `breachedaccount` API.
    HaveIBeenPwned,
    /// The BreachDirectory API as exposed through RapidAPI.
    BreachDirectory,
}
