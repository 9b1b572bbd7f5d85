pub mod batch;
pub mod factory;
pub mod store;

pub use batch::save_batch;
pub use factory::{StoreConfig, StoreFactory, StoreRegistry};
pub use store::{RecordStore, StoreError};
