pub mod imposition;
pub mod work_order;

pub use imposition::{ImpositionState, show_imposition};
pub use work_order::{WorkOrderState, show_work_order};
