use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::ClientError;

/// Append path segments to `base`, tolerating a trailing slash on it.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ClientError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ClientError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    accept: fn(StatusCode) -> bool,
) -> Result<T, ClientError> {
    let status = response.status();
    if !accept(status) {
        return Err(ClientError::Status {
            status,
            url: response.url().to_string(),
        });
    }
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

pub(crate) fn is_success(status: StatusCode) -> bool {
    status.is_success()
}

pub(crate) fn is_ok(status: StatusCode) -> bool {
    status == StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_segments() {
        let base = Url::parse("https://ordinals.gorillapool.io/api").unwrap();
        let url = endpoint(&base, &["txos", "outpoints"]).unwrap();
        assert_eq!(url.as_str(), "https://ordinals.gorillapool.io/api/txos/outpoints");

        let slashed = Url::parse("https://ordinals.gorillapool.io/api/").unwrap();
        assert_eq!(endpoint(&slashed, &["txos", "outpoints"]).unwrap(), url);
    }

    #[test]
    fn endpoint_escapes_segments() {
        let base = Url::parse("http://localhost:8080").unwrap();
        let url = endpoint(&base, &["inscriptions", "a/b_0", "latest"]).unwrap();
        assert_eq!(url.path(), "/inscriptions/a%2Fb_0/latest");
    }

    #[test]
    fn endpoint_rejects_opaque_base() {
        let base = Url::parse("mailto:ordinals@example.com").unwrap();
        assert!(matches!(
            endpoint(&base, &["txos"]),
            Err(ClientError::InvalidBaseUrl(_))
        ));
    }
}
