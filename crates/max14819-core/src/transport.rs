//! Transport trait definition
//!
//! A transport exchanges exactly one frame for one frame over a
//! full-duplex bus. Implementations must not split, retry or reorder
//! exchanges; timeouts belong to the implementation and surface as
//! [`Error::TransportFailure`](crate::Error::TransportFailure).

use crate::error::Result;
use crate::spi::CommandFrame;

/// Byte-exchange primitive for one chip-select line
///
/// The bus is exclusive: every call is one complete chip-select cycle and
/// callers hold `&mut` access for its duration.
///
/// ## Example: loopback transport
///
/// ```ignore
/// struct Loopback;
///
/// impl Transport for Loopback {
///     fn transfer(&mut self, frame: CommandFrame) -> Result<CommandFrame> {
///         Ok(frame)
///     }
/// }
/// ```
pub trait Transport {
    /// Send `frame` and return the frame clocked in at the same time
    fn transfer(&mut self, frame: CommandFrame) -> Result<CommandFrame>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn transfer(&mut self, frame: CommandFrame) -> Result<CommandFrame> {
        (**self).transfer(frame)
    }
}

#[cfg(feature = "alloc")]
impl<T: Transport + ?Sized> Transport for alloc::boxed::Box<T> {
    fn transfer(&mut self, frame: CommandFrame) -> Result<CommandFrame> {
        (**self).transfer(frame)
    }
}
