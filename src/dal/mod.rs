pub mod fetcher;
pub mod model;
pub mod reader;
