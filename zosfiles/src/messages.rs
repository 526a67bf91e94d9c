//! Fixed user-facing messages.
//!
//! Callers match on these strings, keep them stable.

pub const MISSING_DATASET_NAME: &str = "Specify the data set name.";

pub const DATA_SET_RENAMED_SUCCESSFULLY: &str = "Data set renamed successfully.";
