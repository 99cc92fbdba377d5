// chameleon-rs/libchameleon/src/cmd/mod.rs
//! One method per device operation, in two call styles over the same
//! connection: [`ChameleonCmd`] returns each reply frame unchecked and
//! [`PositiveCmd`] accepts only the statuses the operation defines as
//! success and decodes the reply.

pub mod positive;
pub mod raw;

pub use positive::PositiveCmd;
pub use raw::ChameleonCmd;
