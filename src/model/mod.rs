//! Session model - the state one editing session owns
//!
//! The buffer, its selection, and the externally supplied labels.

pub mod labeling;
pub mod session;

pub use labeling::{Label, Labeling};
pub use session::{Session, SessionDump};
