//! K-anonymity password exposure checks against a Pwned Passwords compatible range API.

use securepass_core::ApiError;

/// Hash a password with SHA-1 and split the hex digest for the k-anonymity range query.
///
/// Returns a tuple of (prefix: first 5 chars, suffix: remaining 35 chars), both uppercase.
fn hash_password(password: &str) -> (String, String) {
    use sha1::{Digest, Sha1};

    let hash = Sha1::digest(password.as_bytes());
    let hash_hex = format!("{:X}", hash);
    let (prefix, suffix) = hash_hex.split_at(5);
    (prefix.to_string(), suffix.to_string())
}

/// Parse a range response and return the observation count for `target_suffix`.
///
/// Response format: "SUFFIX:COUNT\r\n..." (e.g.
/// "0018A45C4D1DEF81644B54AB7F969B88D65:3\r\n..."). Lines without a colon and matching lines
/// with a non-numeric count are skipped without aborting the scan. Suffixes are compared
/// ignoring case since provider casing is not guaranteed to match ours.
/// Returns 0 when no line matches.
fn parse_range_response(response: &str, target_suffix: &str) -> u32 {
    response
        .lines()
        .filter_map(|l| l.split_once(':'))
        .filter(|(hash_suffix, _)| hash_suffix.trim().eq_ignore_ascii_case(target_suffix))
        .find_map(|(_, count_str)| count_str.trim().parse().ok())
        .unwrap_or(0)
}

/// Check how many times a password appears in known breach corpora, using the k-anonymity model:
///
/// 1. Hash the password with SHA-1
/// 2. Send only the first 5 characters of the hash
/// 3. The API returns all hash suffixes matching that prefix
/// 4. Check locally if the full hash exists in the results
///
/// This ensures the actual password never leaves the client.
/// Returns the number of times the password appears in the corpus (0 if not found).
pub(crate) async fn check_password_exposure(
    http_client: &reqwest::Client,
    password: &str,
    range_base_url: &str,
) -> Result<u32, ApiError> {
    let (prefix, suffix) = hash_password(password);

    // Query with the prefix only (k-anonymity)
    let url = format!("{}/range/{}", range_base_url, prefix);
    let response = http_client
        .get(&url)
        .send()
        .await
        .map_err(|e| e.without_url())?
        .error_for_status()
        .map_err(|e| e.without_url())?
        .text()
        .await
        .map_err(|e| e.without_url())?;

    Ok(parse_range_response(&response, &suffix))
}
