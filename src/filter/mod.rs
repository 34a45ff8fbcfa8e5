//! Typed search filters for captured network requests
//!
//! User-chosen search criteria are represented as serializable, composable
//! predicates and evaluated against read-only request records. Distinct
//! filter kinds combine with AND; values within one kind combine with OR.
//!
//! # Expression syntax
//!
//! ```text
//! field:value          One term per criterion, whitespace-separated
//! ```
//!
//! # Fields
//!
//! - `status:` / `code:` / `s:` - status code, bucket, or range
//! - `host:` / `h:` - exact URL host
//! - `method:` / `m:` - HTTP verb (or STREAM / WEBSOCKET task kinds)
//! - `path:` / `p:` - URL path substring
//!
//! # Examples
//!
//! ```text
//! status:2XX                              # Any success response
//! status:200..300 host:example.com        # Success responses from one host
//! method:GET method:POST                  # Either verb
//! path:/login status:401                  # Failed logins
//! path:"/some path"                       # Quoted values keep spaces
//! ```

pub mod error;
pub mod kinds;
pub mod matcher;
pub mod method;
pub mod parser;
pub mod range;
pub mod token;
pub mod variant;

pub use error::{FilterDecodeError, FilterParseError};
pub use kinds::{FilterKind, HostFilter, MethodFilter, PathFilter, StatusCodeFilter};
pub use matcher::{filter_records, matches_all};
pub use method::HttpMethod;
pub use parser::{FilterExpression, FilterField, FilterTerm};
pub use range::{RangeModifier, ValueRange};
pub use token::make_token;
pub use variant::{Filter, decode_filters, encode_filters};
