//! Pure domain logic for the comparable-sales valuation engine.
//!
//! Everything in this crate is synchronous and free of I/O: property and
//! sample types, the comparable matcher, the valuation estimator, the
//! report assembler, and the wizard step contract. Persistence lives in
//! `laudo-store`, orchestration in `laudo-engine`.

pub mod currency;
pub mod error;
pub mod matcher;
pub mod property;
pub mod report;
pub mod sample;
pub mod valuation;
pub mod wizard;
