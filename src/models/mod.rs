//! Lockstep Platform data-transfer records.
//!
//! Every model serializes with camelCase wire names and omits unset fields,
//! so the same type serves as a create body and as a decoded response.

mod application;
mod common;
mod company;
mod contact;
mod invoice;
mod payment;
mod provisioning;
mod user;

pub use application::*;
pub use common::*;
pub use company::*;
pub use contact::*;
pub use invoice::*;
pub use payment::*;
pub use provisioning::*;
pub use user::*;
