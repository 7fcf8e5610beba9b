pub mod record;
pub mod work_order;
