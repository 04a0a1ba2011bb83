pub mod notify;
pub mod store;
pub mod totals;

pub use notify::{schedule_notification_clear, NOTIFICATION_TTL};
pub use store::{AddReceipt, CartStore, ADDED_MESSAGE};
pub use totals::{derive_totals, CartTotals, DELIVERY_FEE, DISCOUNT_PERCENT};
