//! Routed Pages

mod change_item;
mod dashboard;

pub use change_item::ChangeItemPage;
pub use dashboard::DashboardPage;
