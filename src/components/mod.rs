//! UI Components
//!
//! Reusable Leptos components.

mod button;
mod input;
mod page_header;
mod toast_container;

pub use button::Button;
pub use input::Input;
pub use page_header::PageHeader;
pub use toast_container::ToastContainer;
