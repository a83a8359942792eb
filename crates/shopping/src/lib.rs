pub mod aggregation;

pub use aggregation::{ShoppingItem, ShoppingListService, group_by_category, toggle_item};
