//! Sealed trait marker for Transport implementations.
//!
//! Only this crate can implement `Transport`; tests outside the crate stand
//! up a fake API server instead of substituting the transport.

pub(crate) mod private {
    /// Sealed trait marker.
    pub trait Sealed {}
}
