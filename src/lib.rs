//! A canonical, collision-free registry of HTTP status codes.
//!
//! ```
//! use statusreg::status::{self, StatusClass};
//!
//! let not_found = status::by_code(404).unwrap();
//! assert_eq!(not_found.canonical_name(), "NOT_FOUND");
//! assert_eq!(not_found.class(), StatusClass::ClientError);
//! assert_eq!(status::by_name("UNPROCESSABLE_ENTITY").unwrap().code(), 422);
//! ```

pub mod status;

pub type StatusRegistry = status::Registry;
pub type StatusEntry = status::Entry;
