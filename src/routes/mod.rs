//! Route definitions for the blog, its dashboard and the health probes.

pub mod dashboard;
pub mod health;
pub mod pages;
pub mod posts;
