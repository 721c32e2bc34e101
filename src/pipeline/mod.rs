pub mod segmenter;
pub mod prompt;
pub mod extraction;
pub mod analysis;
pub mod decision;
pub mod runner;
