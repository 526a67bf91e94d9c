//! Rename data sets and data set members.
//!
//! Each call validates its names, sends exactly one PUT through the given
//! [`Transport`] and reports a fixed success message. Names may be passed as
//! `&str` or `Option<&str>`; `None` and `""` are both rejected before any
//! request is made.

pub mod request;

use crate::error::Result;
use crate::messages;
use crate::response::ZosFilesResponse;
use crate::rest::Transport;
use crate::session::Session;

use request::{require_name, RenamePayload};

/// Rename a data set.
pub async fn data_set<'a, T>(
    transport: &T,
    session: &Session,
    before_data_set_name: impl Into<Option<&'a str>>,
    after_data_set_name: impl Into<Option<&'a str>>,
) -> Result<ZosFilesResponse>
where
    T: Transport + ?Sized,
{
    let before = require_name(before_data_set_name.into())?;
    let after = require_name(after_data_set_name.into())?;

    let endpoint = request::data_set_endpoint(after);
    tracing::debug!("Endpoint: {}", endpoint);

    dispatch(transport, session, &endpoint, &RenamePayload::data_set(before)).await
}

/// Rename a member of a partitioned data set.
pub async fn data_set_member<'a, T>(
    transport: &T,
    session: &Session,
    data_set_name: impl Into<Option<&'a str>>,
    before_member_name: impl Into<Option<&'a str>>,
    after_member_name: impl Into<Option<&'a str>>,
) -> Result<ZosFilesResponse>
where
    T: Transport + ?Sized,
{
    let data_set = require_name(data_set_name.into())?;
    let before = require_name(before_member_name.into())?;
    let after = require_name(after_member_name.into())?;

    let endpoint = request::data_set_endpoint(&request::member_target(data_set, after));
    tracing::debug!("Endpoint: {}", endpoint);

    dispatch(
        transport,
        session,
        &endpoint,
        &RenamePayload::member(data_set, before),
    )
    .await
}

async fn dispatch<T>(
    transport: &T,
    session: &Session,
    endpoint: &str,
    payload: &RenamePayload<'_>,
) -> Result<ZosFilesResponse>
where
    T: Transport + ?Sized,
{
    let body = payload.to_json()?;
    let headers = request::request_headers(&body);

    match transport
        .put_expect_string(session, endpoint, &headers, &body)
        .await
    {
        Ok(_) => Ok(ZosFilesResponse::success(
            messages::DATA_SET_RENAMED_SUCCESSFULLY,
        )),
        Err(err) => {
            tracing::error!(endpoint = %endpoint, "{}", err);
            Err(err.into())
        }
    }
}
