//! Course catalogue: session pages, widget controls, quiz and PDF materials.

pub mod controls;
pub mod materials;
pub mod quiz;
pub mod session;

pub use controls::{Calculator, Control};
pub use session::{SessionPage, SessionPageBuilder};
