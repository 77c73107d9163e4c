//! SPI command codec
//!
//! This module turns register accesses into the 2-byte frames exchanged
//! with the chip and turns responses back into values and named bits.

mod bits;
mod frame;
mod status;

pub use bits::{decode_bits, Bit, BitVector};
pub use frame::{
    decode_response, encode_read, encode_write, CommandFrame, CHIP_ADDRESS_MASK,
    CHIP_ADDRESS_MAX, CHIP_ADDRESS_SHIFT, COMMAND_READ, COMMAND_WRITE, FRAME_LEN, REGISTER_ADDRESS_MASK,
    REGISTER_ADDRESS_MAX,
};
pub use status::{decode_status, InbandStatus};
