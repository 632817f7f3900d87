mod cookie;
mod etag;
mod query;

pub use cookie::cookie_value;
pub use etag::compute_etag;
pub use query::QueryParams;
