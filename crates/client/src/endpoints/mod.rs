//! REST API endpoint implementations.

mod indices;
mod request;
mod snapshots;
pub mod url_encoding;

pub use indices::{cat_indices, delete_index};
pub use request::send_request;
pub use snapshots::{restore_snapshot, snapshot_index};
pub use url_encoding::{encode_path_segment, encode_snapshot_list};
