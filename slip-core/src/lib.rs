pub mod db;
pub mod models;
pub mod numeric;
pub mod session;

pub use db::store::{RecordStore, StoreError};
pub use models::*;
pub use session::ReceiptSession;
