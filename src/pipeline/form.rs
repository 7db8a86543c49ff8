use std::collections::HashMap;
use std::convert::Infallible;

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;

/// Submitted form fields.
///
/// Extracting never rejects a request: fields come from the query string,
/// then from a urlencoded or multipart body (body values win). Any other
/// body, or one that cannot be parsed, contributes nothing, so the handler
/// just sees missing fields.
#[derive(Debug, Clone, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    /// Value of `name`, or `""` when the field was not submitted.
    pub fn value(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    fn extend_urlencoded(&mut self, input: &[u8]) {
        match serde_urlencoded::from_bytes::<Vec<(String, String)>>(input) {
            Ok(pairs) => self.0.extend(pairs),
            Err(e) => tracing::warn!("ignoring malformed form data: {}", e),
        }
    }

    async fn extend_multipart(&mut self, mut multipart: Multipart) {
        loop {
            let field = match multipart.next_field().await {
                Ok(Some(field)) => field,
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!("ignoring rest of multipart body: {}", e);
                    break;
                }
            };

            // Uploaded files are not form values
            if field.file_name().is_some() {
                continue;
            }
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            match field.text().await {
                Ok(text) => {
                    self.0.insert(name, text);
                }
                Err(e) => {
                    tracing::warn!("ignoring rest of multipart body: {}", e);
                    break;
                }
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

enum BodyKind {
    Urlencoded,
    Multipart,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_ascii_lowercase();

    if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::Urlencoded
    } else if content_type.starts_with("multipart/form-data") {
        BodyKind::Multipart
    } else {
        BodyKind::Other
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut fields = FormFields::default();

        if let Some(query) = req.uri().query() {
            fields.extend_urlencoded(query.as_bytes());
        }

        match body_kind(&req) {
            BodyKind::Urlencoded => match Bytes::from_request(req, state).await {
                Ok(body) => fields.extend_urlencoded(&body),
                Err(e) => tracing::warn!("failed to read form body: {}", e),
            },
            BodyKind::Multipart => match Multipart::from_request(req, state).await {
                Ok(multipart) => fields.extend_multipart(multipart).await,
                Err(e) => tracing::warn!("failed to read multipart body: {}", e),
            },
            BodyKind::Other => {}
        }

        Ok(fields)
    }
}
