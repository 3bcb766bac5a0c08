use displaydoc::Display;
use thiserror::Error;

use crate::data::UserId;

/// Errors of the recommender.
#[derive(Clone, Copy, Debug, Display, Error, PartialEq)]
pub enum Error {
    /// User not found in the system
    UserNotFound(UserId),
}
