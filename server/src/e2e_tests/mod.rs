//! End-to-end tests at the HTTP request/response level.
//!
//! Each test file covers one group of routes, driving the full router
//! in-process without binding a socket.

#![cfg(test)]


mod test_authenticate;
mod test_public_routes;
mod test_static_files;
