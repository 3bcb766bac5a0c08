/// Everything went fine.
pub(crate) const NO_ERROR: i32 = 0;
/// Some of the requested work couldn't be done, the output is incomplete.
pub(crate) const NON_FATAL_ERROR: i32 = 1;
/// Nothing could be done.
pub(crate) const FATAL_ERROR: i32 = 2;
