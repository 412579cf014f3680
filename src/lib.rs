pub mod analyzers;
pub mod loader;
pub mod output;
pub mod record;
