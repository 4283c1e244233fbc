//! Request middleware: signed-cookie sessions, authorization guard and security
//! headers.

pub mod auth;
pub mod security;
pub mod session;

#[cfg(test)]
mod test;
