pub mod store;
pub mod terminal;

pub use store::{SessionStore, StoreError};
pub use terminal::{PromptError, Terminal};
