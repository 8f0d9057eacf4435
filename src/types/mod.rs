//! Shared response envelopes.

mod response;

pub use response::{Created, IdResponse, NoContent, UserEnvelope, UserList, UsersEnvelope};
