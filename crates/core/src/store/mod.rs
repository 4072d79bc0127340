mod error;
mod http_mapping;
mod traits;
mod types;
mod value;

pub use error::{Result, StoreError};
pub use http_mapping::store_error_to_status_code;
pub use traits::RecordStore;
pub use types::{Collection, Filter, Index, Key, KeyCondition, Query};
pub use value::{Item, Number, StoreValue};
