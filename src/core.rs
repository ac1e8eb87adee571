pub mod aggregator;
pub mod bucket;
pub mod event;
pub mod fetch;
pub mod normalizer;
pub mod record;
pub mod table;
