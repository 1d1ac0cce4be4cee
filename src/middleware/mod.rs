pub mod request_id;

pub use request_id::{with_request_span, REQUEST_ID_HEADER};
