//! Reusable widget components.

pub mod card;
pub mod chips;
pub mod detail;

pub use card::recipe_list_item;
pub use chips::{Chip, ChipRow};
pub use detail::DetailPanel;
