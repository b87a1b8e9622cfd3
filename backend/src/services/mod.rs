//! HTTP services. Each submodule exposes a `configure_routes` returning the
//! actix `Scope` for its path prefix.

pub mod components;
pub(crate) mod identity;
pub(crate) mod media;
pub mod reviews;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;
