//! Shape-tagged JSON decoding.
//!
//! Every endpoint serves either one object or an array of objects. The call
//! site names which with a type-level tag ([`One`] or [`Many`]), so a list
//! endpoint can never be decoded as a single record by accident.

use crate::utils::error::{FeedError, Result};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use url::Url;

/// Expected JSON shape of a response body.
pub trait BodyShape {
    type Output;

    fn decode(url: &Url, payload: &[u8]) -> Result<Self::Output>;
}

/// A single JSON object decoding to `T`.
pub struct One<T>(PhantomData<T>);

/// A JSON array decoding to `Vec<T>`, in wire order.
pub struct Many<T>(PhantomData<T>);

impl<T: DeserializeOwned> BodyShape for One<T> {
    type Output = T;

    fn decode(url: &Url, payload: &[u8]) -> Result<T> {
        serde_json::from_slice(payload).map_err(|source| FeedError::DecodeError {
            url: url.clone(),
            source,
        })
    }
}

impl<T: DeserializeOwned> BodyShape for Many<T> {
    type Output = Vec<T>;

    fn decode(url: &Url, payload: &[u8]) -> Result<Vec<T>> {
        serde_json::from_slice(payload).map_err(|source| FeedError::DecodeError {
            url: url.clone(),
            source,
        })
    }
}
