//! `rf-fleet` — the simulated vehicle fleet and proximity queries.
//!
//! # Crate layout
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`store`]     | `FleetEntity`, `FleetStore` — batch population       |
//! | [`proximity`] | `nearest` — linear-scan closest-entity query         |
//!
//! The fleet is read-mostly: it is generated as a whole batch at session
//! start (and again on reset) and entities never move afterwards.

pub mod proximity;
pub mod store;


pub use proximity::{Nearest, nearest};
pub use store::{FleetEntity, FleetStore};
