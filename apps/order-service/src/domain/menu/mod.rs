//! Menu Catalog Bounded Context
//!
//! Menu item records and their persistence port. The catalog is a
//! collaborator of the order lifecycle: placement reads current prices from
//! here but never writes back.

pub mod menu_item;
pub mod repository;

pub use menu_item::{MenuItem, MenuItemPatch, NewMenuItem};
pub use repository::MenuRepository;
