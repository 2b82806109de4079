pub mod forms;
pub mod render;
pub mod session;
pub mod studio;

pub use crate::domain::model::{ChatPlan, Content, GenerationConfig, Mode, Rendered};
pub use crate::domain::ports::{ConfigProvider, Storage, TextGenerator};
pub use crate::utils::error::Result;
