//! Stable facade for pagination helpers used by the filter controller.

/// Products shown per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 12;

mod components;
mod page;
pub mod token;
mod view;

pub use components::{ControlElement, build_page_controls};
pub use page::{PageSlice, clamp_page, page_window, paginate, parse_one_based_page, total_pages};
pub use token::{ControlToken, ControlValidationError, validate_control_id};
pub use view::{build_controls_view, build_product_page_view, page_footer};
