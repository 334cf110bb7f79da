//! Everything that talks to the X-Server

pub mod backend;
pub mod event;
pub mod xconnection;

#[cfg(test)]
pub(crate) mod fake;
