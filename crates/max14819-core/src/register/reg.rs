//! MAX14819 register addresses
//!
//! Symbolic names for the 5-bit register addresses, matching the order of
//! the register table.

// ============================================================================
// Data and interrupts
// ============================================================================

/// Channel A transmit/receive FIFO
pub const TX_RX_DATA_A: u8 = 0x00;
/// Channel B transmit/receive FIFO
pub const TX_RX_DATA_B: u8 = 0x01;
/// Interrupt flags
pub const INTERRUPT: u8 = 0x02;
/// Interrupt enables
pub const INTERRUPT_EN: u8 = 0x03;
/// Channel A receive FIFO level
pub const RX_FIFO_LVL_A: u8 = 0x04;
/// Channel B receive FIFO level
pub const RX_FIFO_LVL_B: u8 = 0x05;

// ============================================================================
// Per-channel communication control
// ============================================================================

/// Channel A C/Q control
pub const CQ_CTRL_A: u8 = 0x06;
/// Channel B C/Q control
pub const CQ_CTRL_B: u8 = 0x07;
/// Channel A C/Q error flags
pub const CQ_ERR_A: u8 = 0x08;
/// Channel B C/Q error flags
pub const CQ_ERR_B: u8 = 0x09;
/// Channel A message control
pub const MSG_CTRL_A: u8 = 0x0A;
/// Channel B message control
pub const MSG_CTRL_B: u8 = 0x0B;
/// Channel A status
pub const CHAN_STAT_A: u8 = 0x0C;
/// Channel B status
pub const CHAN_STAT_B: u8 = 0x0D;
/// LED control
pub const LED_CTRL: u8 = 0x0E;
/// Trigger
pub const TRIGGER: u8 = 0x0F;

// ============================================================================
// Per-channel configuration
// ============================================================================

/// Channel A C/Q configuration
pub const CQ_CFG_A: u8 = 0x10;
/// Channel B C/Q configuration
pub const CQ_CFG_B: u8 = 0x11;
/// Channel A cycle timer
pub const CYCL_TMR_A: u8 = 0x12;
/// Channel B cycle timer
pub const CYCL_TMR_B: u8 = 0x13;
/// Channel A device delay
pub const DEVICE_DLY_A: u8 = 0x14;
/// Channel B device delay
pub const DEVICE_DLY_B: u8 = 0x15;
/// Channel A trigger assignment
pub const TRIG_ASSGN_A: u8 = 0x16;
/// Channel B trigger assignment
pub const TRIG_ASSGN_B: u8 = 0x17;
/// Channel A L+ configuration
pub const LP_CNFG_A: u8 = 0x18;
/// Channel B L+ configuration
pub const LP_CNFG_B: u8 = 0x19;
/// Channel A I/O status and configuration
pub const IO_ST_CFG_A: u8 = 0x1A;
/// Channel B I/O status and configuration
pub const IO_ST_CFG_B: u8 = 0x1B;

// ============================================================================
// Global
// ============================================================================

/// Driver current limit
pub const DRVR_CURR_LIM: u8 = 0x1C;
/// Clock configuration
pub const CLOCK: u8 = 0x1D;
/// Global status
pub const STATUS: u8 = 0x1E;
/// Silicon revision
pub const REV_ID: u8 = 0x1F;
