//! Request middleware.

pub mod client_ip;
pub mod visits;
