//! Character inventory model
//!
//! - [`Backpack`] and [`EquipmentSlots`] hold state for one category
//! - [`Loadout`] pairs them and moves units between the two
//! - [`LoadoutManager`] adds catalog and race checks on top
//! - [`DragSession`] maps drag gestures onto manager calls

mod backpack;
mod drag;
mod equipment;
mod listing;
mod loadout;
mod manager;

pub use backpack::{Backpack, BackpackEntry};
pub use drag::{DragOrigin, DragSession, DraggedItem, DropOutcome, DropTarget};
pub use equipment::EquipmentSlots;
pub use listing::{list_backpack, BackpackListing, BackpackQuery};
pub use loadout::Loadout;
pub use manager::LoadoutManager;
