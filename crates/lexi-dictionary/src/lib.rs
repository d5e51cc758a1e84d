mod client;
mod normalize;
mod words;

pub use client::{DictionaryClient, LookupError};
