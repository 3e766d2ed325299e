//! Domain events returned from loadout mutations

mod inventory_events;

pub use inventory_events::{
    BackpackChange, ConsumptionNotice, EquipOutcome, UnequipOutcome,
};
