pub mod pipeline;
pub mod validator;

pub use pipeline::{prepare_dataset, PrepareConfig, PreparePipeline, PrepareResult};
pub use validator::{DatasetValidator, ValidationResult, ValidationStats};
