//! Domain models and request/response shapes.

pub mod item;
pub mod movement;
pub mod order;
pub mod response;
pub mod validate;

pub use item::{CreateItemInput, Item, UpdateItemInput};
pub use movement::{Movement, MovementInput, MovementWithItem};
pub use order::{ItemSummary, Order, OrderInput, OrderWithItem};
pub use response::ApiResponse;
pub use validate::ValidationErrors;
