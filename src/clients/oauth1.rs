//! OAuth 1.0a request signing (HMAC-SHA1) for Twitter user-context calls.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha1::Sha1;
use tracing::error;

use crate::core::config::TwitterCredentials;

/// RFC 3986 unreserved characters are left as-is; everything else is encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

#[must_use]
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Per-request values that must be unique for every signed call.
#[derive(Debug, Clone)]
pub struct Nonce {
    pub nonce: String,
    pub timestamp: i64,
}

impl Nonce {
    #[must_use]
    pub fn generate() -> Self {
        Self {
            nonce: uuid::Uuid::new_v4().simple().to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

fn oauth_params(credentials: &TwitterCredentials, nonce: &Nonce) -> Vec<(String, String)> {
    vec![
        (
            "oauth_consumer_key".to_string(),
            credentials.consumer_key.clone(),
        ),
        ("oauth_nonce".to_string(), nonce.nonce.clone()),
        (
            "oauth_signature_method".to_string(),
            SIGNATURE_METHOD.to_string(),
        ),
        ("oauth_timestamp".to_string(), nonce.timestamp.to_string()),
        ("oauth_token".to_string(), credentials.access_token.clone()),
        ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
    ]
}

/// Computes the base64 HMAC-SHA1 signature for a request.
///
/// `request_params` are query or form parameters that take part in the
/// signature. JSON bodies are not signed.
#[must_use]
pub fn signature(
    method: &str,
    url: &str,
    request_params: &[(&str, &str)],
    credentials: &TwitterCredentials,
    nonce: &Nonce,
) -> String {
    let mut params: Vec<(String, String)> = oauth_params(credentials, nonce)
        .into_iter()
        .chain(
            request_params
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        )
        .map(|(k, v)| (encode(&k), encode(&v)))
        .collect();
    params.sort();

    let param_string = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let base_string = format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(url),
        encode(&param_string)
    );
    let signing_key = format!(
        "{}&{}",
        encode(&credentials.consumer_secret),
        encode(&credentials.access_token_secret)
    );

    let mut mac = match Hmac::<Sha1>::new_from_slice(signing_key.as_bytes()) {
        Ok(mac) => mac,
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            return String::new();
        }
    };
    mac.update(base_string.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

/// Builds the `Authorization` header value for a signed request.
#[must_use]
pub fn authorization_header(
    method: &str,
    url: &str,
    request_params: &[(&str, &str)],
    credentials: &TwitterCredentials,
    nonce: &Nonce,
) -> String {
    let signature = signature(method, url, request_params, credentials, nonce);

    let mut params = oauth_params(credentials, nonce);
    params.push(("oauth_signature".to_string(), signature));
    params.sort();

    let fields = params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("OAuth {fields}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_credentials() -> TwitterCredentials {
        TwitterCredentials {
            consumer_key: "xvz1evFS4wEEPTGEFPHBog".to_string(),
            consumer_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".to_string(),
            access_token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string(),
            access_token_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".to_string(),
        }
    }

    fn reference_nonce() -> Nonce {
        Nonce {
            nonce: "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg".to_string(),
            timestamp: 1_318_622_958,
        }
    }

    #[test]
    fn encode_leaves_unreserved_characters() {
        assert_eq!(encode("Az09-._~"), "Az09-._~");
        assert_eq!(encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
        assert_eq!(encode("a!b"), "a%21b");
        assert_eq!(encode("☃"), "%E2%98%83");
    }

    #[test]
    fn signature_matches_twitter_reference_vector() {
        let sig = signature(
            "POST",
            "https://api.twitter.com/1.1/statuses/update.json",
            &[
                ("status", "Hello Ladies + Gentlemen, a signed OAuth request!"),
                ("include_entities", "true"),
            ],
            &reference_credentials(),
            &reference_nonce(),
        );
        assert_eq!(sig, "hCtSmYh+iHYCEqBWrE7C7hYmtUk=");
    }

    #[test]
    fn header_contains_all_oauth_fields() {
        let header = authorization_header(
            "POST",
            "https://api.twitter.com/2/tweets",
            &[],
            &reference_credentials(),
            &reference_nonce(),
        );

        assert!(header.starts_with("OAuth "));
        for field in [
            "oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\"",
            "oauth_nonce=\"kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg\"",
            "oauth_signature_method=\"HMAC-SHA1\"",
            "oauth_timestamp=\"1318622958\"",
            "oauth_version=\"1.0\"",
            "oauth_signature=\"",
        ] {
            assert!(header.contains(field), "missing {field} in {header}");
        }
    }

    #[test]
    fn generated_nonces_differ() {
        assert_ne!(Nonce::generate().nonce, Nonce::generate().nonce);
    }
}
