//! Data module - CSV loading and train/test splitting

mod loader;
mod splitter;

pub use loader::DataLoader;
pub use splitter::{split_train_test, TrainTestSplit};
