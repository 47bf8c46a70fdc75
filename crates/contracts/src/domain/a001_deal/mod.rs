pub mod aggregate;
pub mod normalizer;

pub use aggregate::DealRecord;
pub use normalizer::parse_deal_record;
