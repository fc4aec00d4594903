//! Framework-free core of the booking site's landing surface.
//!
//! Everything here compiles natively so it can be unit-tested without a
//! browser; the `frontend` crate wires these types into Yew components.

pub mod error;
pub mod model;
pub mod navigation;
pub mod routes;
pub mod ui_state;

pub use error::CatalogError;
pub use model::{default_specialities, SpecialityCatalog, SpecialityEntry};
pub use navigation::{dispatch, NavigationRequest, Navigator, RecordingNavigator};
pub use routes::NavigationAction;
pub use ui_state::{EntrancePhase, EntranceTransition, HoverTracker};
