mod params;
pub use self::params::{Options, QueryParams, API_KEY_PARAM, OFFSET_PARAM, QUERY_PARAM};

mod unwrap;
pub use self::unwrap::{results, Unwrap};
