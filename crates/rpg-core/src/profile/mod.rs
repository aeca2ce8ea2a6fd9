//! Profile URL handling.
//!
//! Turns the free-text URL a user types into a [`ProfileQuery`] and extracts
//! the Reddit username from it.

mod resolver;

pub use resolver::{
    ANONYMOUS_USER, PROFILE_PATH_MARKER, ProfileQuery, resolve, validate_profile_url,
};
