pub mod todo;

pub use todo::{Todo, TodoPayload, STATUS_RANGE};
