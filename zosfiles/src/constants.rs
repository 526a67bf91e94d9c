//! Resource paths of the z/OSMF REST files service.

/// Root of every REST files resource.
pub const RESOURCE: &str = "/zosmf/restfiles";

/// Segment addressing data sets and their members.
pub const RES_DS_FILES: &str = "/ds";
