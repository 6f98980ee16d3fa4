//! Outbound adapters connecting the domain to backing services.

pub mod persistence;
