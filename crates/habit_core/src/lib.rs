pub mod clock;
pub mod date;
pub mod error;
pub mod habit;
pub mod observer;
pub mod stats;
pub mod storage;
pub mod store;
pub mod summary;

pub use crate::error::{HabitError, StorageError};
pub use crate::habit::{Habit, HabitId, HabitStats};
pub use crate::store::{HabitStore, HabitStoreBuilder};
