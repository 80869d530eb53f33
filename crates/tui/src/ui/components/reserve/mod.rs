//! Reservation modal: form state plus the dialog that renders it.

mod reserve_modal_component;
mod state;

pub use reserve_modal_component::ReserveModalComponent;
pub use state::{ReserveField, ReserveFormState};
