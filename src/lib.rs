pub mod prediction;
pub mod settings;
pub mod utils;
