//! Client for the z/OSMF REST files interface.
//!
//! Renames data sets and partitioned data set members by issuing a single
//! PUT request per call through a [`rest::Transport`].

pub mod constants;
pub mod error;
pub mod messages;
pub mod rename;
pub mod response;
pub mod rest;
pub mod session;

pub use error::{Result, ZosFilesError};
pub use response::ZosFilesResponse;
pub use rest::{Header, RestError, Transport, ZosmfRestClient};
pub use session::{Protocol, Session};
