//! Domain port implementations backed by the `auth` library.

pub mod hasher;
pub mod token;

pub use token::JwtTokenIssuer;
