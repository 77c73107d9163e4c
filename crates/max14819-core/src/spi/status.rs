//! In-band status byte
//!
//! While the command byte is clocked out, the chip clocks back a status
//! byte with receive-ready/error flags for both channels and the interrupt
//! line state.

use bitflags::bitflags;

use super::CommandFrame;

bitflags! {
    /// Status flags returned in the first byte of every response
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InbandStatus: u8 {
        /// Channel A has received data ready
        const RRDY_A = 1 << 0;
        /// Channel A receive error
        const RERR_A = 1 << 1;
        /// Channel B has received data ready
        const RRDY_B = 1 << 2;
        /// Channel B receive error
        const RERR_B = 1 << 3;
        /// Interrupt pending
        const IRQ    = 1 << 4;

        const _ = !0;
    }
}

impl InbandStatus {
    /// Check if any receive error flag is set
    pub fn has_rx_error(&self) -> bool {
        self.intersects(Self::RERR_A | Self::RERR_B)
    }
}

/// In-band status carried by a received frame
pub fn decode_status(frame: CommandFrame) -> InbandStatus {
    InbandStatus::from_bits_retain(frame.command)
}
