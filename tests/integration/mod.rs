//! Integration tests driving the router over HTTP

mod api;
mod identity;
