use thiserror::Error;

/// Errors returned by fallible [`RobinHoodMap`](crate::RobinHoodMap) accessors.
///
/// Returning an error never mutates the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// The requested key is not present in the map.
    #[error("key not found")]
    KeyNotFound,
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_message() {
        assert_eq!(Error::KeyNotFound.to_string(), "key not found");
    }
}
