//! Request body decoding

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// JSON body extractor that ignores `Content-Type` and reports decode
/// failures as [`Error::InvalidArgument`] with the decoder's message.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| Error::invalid_argument(e.body_text()))?;
        decode_json(&body).map(JsonBody)
    }
}

/// Decode the first JSON document of a raw body; anything after it is ignored
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    match serde_json::Deserializer::from_slice(body).into_iter::<T>().next() {
        Some(value) => Ok(value?),
        None => Err(Error::invalid_argument("EOF")),
    }
}
