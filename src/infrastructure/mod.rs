//! Infrastructure layer implementing domain storage traits.
//!
//! - [`storage`] - Filesystem and no-op upload stores

pub mod storage;
