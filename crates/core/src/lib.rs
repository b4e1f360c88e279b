//! Domain types shared by every AquaWatch crate.
//!
//! Nothing in here touches the network or the database; the types are
//! consumed by the repository layer, the alert dispatcher and the HTTP
//! handlers alike.

pub mod alert;
pub mod error;
pub mod reading;
pub mod types;
