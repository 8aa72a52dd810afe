pub mod sonify;

pub use sonify::{load_config, SonifyOutputConfig, SonifyToolConfig};
