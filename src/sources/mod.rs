//! One module per supported origin site.

pub mod anonymous;

pub use anonymous::{AnonymousScraper, Recipes};
