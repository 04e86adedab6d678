pub mod bin_common;
pub mod borders;
pub mod codec;

/// For stand-alone functionality that fit comfortably within one file.
pub mod utils;
