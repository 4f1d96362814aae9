mod documents;
mod questions;
mod retry;
