pub mod clock;
pub mod review_queue;
pub mod speed_records;
pub mod srs;
