//! Linking table sources.
//!
//! A source produces the raw rows of one linking table snapshot, either from
//! an exported spreadsheet or from the inventory system's API. Sources do not
//! validate rows; missing fields are reported when the resolver is built.

use anyhow::Result;

use crate::model::LinkRecord;

mod recent;
mod remote;
mod table_file;

pub use self::recent::recent_linking_file;
pub use self::remote::{RemoteLinkingTable, TOKEN_ENV, records_from_json, resolve_token};
pub use self::table_file::TableFile;

pub trait LinkingSource {
    /// Human readable origin, for logs and messages.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Vec<LinkRecord>>;
}
