// Data loading: batches of identifiers read from delimited files
pub mod batch_loader;

pub use batch_loader::BatchLoader;
