pub mod errors;
pub mod types;

pub use errors::{EngineError, Result};
pub use types::{
    Item, ItemId, LineItem, OrderId, OrderStatus, PurchaseOrder, Snapshot, Supplier, SupplierId,
};
