//! GitHub profile analytics over the public REST API.
//!
//! The core is pure and UI-independent: [`pagination`] walks a paged
//! list endpoint to completion, [`analysis`] computes which followed
//! accounts do not follow back, [`compare`] scores two profiles against
//! each other and [`readme`] generates a profile README. [`client`]
//! provides the HTTP access, and [`session`] guards a consumer against
//! stale results from superseded requests.

pub mod analysis;
pub mod client;
pub mod compare;
pub mod models;
pub mod pagination;
pub mod readme;
pub mod session;
