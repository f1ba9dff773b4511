use serde::Deserialize;

/// List responses arrive either as a bare JSON array or wrapped in a
/// `{ "data": [...] }` object depending on the endpoint. Both shapes are
/// accepted and flattened to the item list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) => items,
            ListEnvelope::Wrapped { data } => data,
        }
    }
}

/// Single-object responses follow the same convention as lists: either the
/// object itself or `{ "data": {...} }`.
///
/// `Wrapped` must be tried first: a DTO whose fields are all optional would
/// otherwise match the bare variant even for a wrapped body.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> ItemEnvelope<T> {
    pub fn into_item(self) -> T {
        match self {
            ItemEnvelope::Bare(item) => item,
            ItemEnvelope::Wrapped { data } => data,
        }
    }
}
