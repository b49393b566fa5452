pub mod samples;
pub mod valuation;
