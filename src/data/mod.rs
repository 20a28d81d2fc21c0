//! Storage backends for enriched person records.

pub mod db {
    pub use crate::db::*;
}

pub mod db_storage {
    pub use crate::db_storage::*;
}

pub mod memory_storage {
    pub use crate::memory_storage::*;
}
