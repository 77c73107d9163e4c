//! The MAX14819 register table

use super::reg;
use super::types::{find_invalid_entry, RegisterDef, RegisterTable};
use crate::error::Result;

/// Number of registers on the chip (one per 5-bit address)
pub const REGISTER_COUNT: usize = 32;

const TABLE: [RegisterDef; REGISTER_COUNT] = [
    RegisterDef::new(reg::TX_RX_DATA_A, "TxRxDataA", ["D7A", "D6A", "D5A", "D4A", "D3A", "D2A", "D1A", "D0A"]),
    RegisterDef::new(reg::TX_RX_DATA_B, "TxRxDataB", ["D7B", "D6B", "D5B", "D4B", "D3B", "D2B", "D1B", "D0B"]),
    RegisterDef::new(reg::INTERRUPT, "Interupt", ["StatusErr", "WURQErr", "TxErrorB", "TxErrorA", "RxErrorB", "RxErrorA", "RxDataRdyB", "RxDataRdyA"]),
    RegisterDef::new(reg::INTERRUPT_EN, "InteruptEn", ["StatusIntEn", "WURQErrEn", "TxErrIntEnB", "TxErrIntEnA", "RxErrIntEnB", "RxErrIntEnA", "RDaRdyIntEnB", "RDaRdyIntEnA"]),
    RegisterDef::new(reg::RX_FIFO_LVL_A, "RxFIFOLvlA", ["FifoLvl7A", "FifoLvl6A", "FifoLvl5A", "FifoLvl4A", "FifoLvl3A", "FifoLvl2A", "FifoLvl1A", "FifoLvl0A"]),
    RegisterDef::new(reg::RX_FIFO_LVL_B, "RxFIFOLvlB", ["FifoLvl7B", "FifoLvl6B", "FifoLvl5B", "FifoLvl4B", "FifoLvl3B", "FifoLvl2B", "FifoLvl1B", "FifoLvl0B"]),
    RegisterDef::new(reg::CQ_CTRL_A, "CQCntrolA", ["ComRt1A", "ComRt0A", "EstComA", "WuPulsA", "TxFifoRstA", "RxFifoRstA", "CyclTmrEnA", "CQSendA"]),
    RegisterDef::new(reg::CQ_CTRL_B, "CQCntrolB", ["ComRt1B", "ComRt0B", "EstComB", "WuPulsB", "TxFifoRstB", "RxFifoRstB", "CyclTmrEnB", "CQSendB"]),
    RegisterDef::new(reg::CQ_ERR_A, "CQErrorA", ["TransmErrA", "TCyclErrA", "TChksmErA", "TSizeErrA", "RChksmErA", "RSizeErrA", "FrameErrA", "ParityErrA"]),
    RegisterDef::new(reg::CQ_ERR_B, "CQErrorB", ["TransmErrB", "TCyclErrB", "TChksmErB", "TSizeErrB", "RChksmErB", "RSizeErrB", "FrameErrB", "ParityErrB"]),
    RegisterDef::new(reg::MSG_CTRL_A, "MesgCntlA", ["TxErDestroyA", "SPIChksA", "InsChksA", "TSizeEnA", "TxKeepMsgA", "RChksEnA", "RMessgRdyEnA", "InvCQA"]),
    RegisterDef::new(reg::MSG_CTRL_B, "MesgCntlB", ["TxErDestroyB", "SPIChksB", "InsChksB", "TSizeEnB", "TxKeepMsgB", "RChksEnB", "RMessgRdyEnB", "InvCQB"]),
    RegisterDef::new(reg::CHAN_STAT_A, "ChanStatA", ["RstA", "FramerEnA", "L+CLimErrA", "UVL+ErrA", "CQLimErrA", "L+CLimA", "UVL+A", "CQLimA"]),
    RegisterDef::new(reg::CHAN_STAT_B, "ChanStatB", ["RstB", "FramerEnB", "L+CLimErrB", "UVL+ErrB", "CQLimErrB", "L+CLimB", "UVL+B", "CQLimB"]),
    RegisterDef::new(reg::LED_CTRL, "LEDCntrl", ["LEDEn2B", "RxErrEnB", "LEDEn1B", "RxRdyEnB", "LEDEn2A", "RxErrEnA", "LEDEn1A", "RxRdyEnA"]),
    RegisterDef::new(reg::TRIGGER, "Trigger", ["-", "-", "-", "-", "Trigger3", "Trigger2", "Trigger1", "Trigger0"]),
    RegisterDef::new(reg::CQ_CFG_A, "CQConfgA", ["IEC3ThA", "SorceSinkA", "SinkSel1A", "SinkSel0A", "NPNA", "PushPulA", "DrvrDisA", "RFilterEnA"]),
    RegisterDef::new(reg::CQ_CFG_B, "CQConfgB", ["IEC3ThB", "SorceSinkB", "SinkSel1B", "SinkSel0B", "NPNB", "PushPulB", "DrvrDisB", "RFilterEnB"]),
    RegisterDef::new(reg::CYCL_TMR_A, "CyclTimeA", ["TCycBsA1", "TCycBsA0", "TCycMA5", "TCycMA4", "TCycMA3", "TCycMA2", "TCycMA1", "TCycMA0"]),
    RegisterDef::new(reg::CYCL_TMR_B, "CyclTimeB", ["TCycBsB1", "TCycBsB0", "TCycMB5", "TCycMB4", "TCycMB3", "TCycMB2", "TCycMB1", "TCycMB0"]),
    RegisterDef::new(reg::DEVICE_DLY_A, "DevicDelyA", ["DelayErrA", "BDelay1A", "BDelay0A", "DDelay3A", "DDelay2A", "DDelay1A", "DDelay0A", "RspnsTmrEnA"]),
    RegisterDef::new(reg::DEVICE_DLY_B, "DevicDelyB", ["DelayErrB", "BDelay1B", "BDelay0B", "DDelay3B", "DDelay2B", "DDelay1B", "DDelay0B", "RspnsTmrEnB"]),
    RegisterDef::new(reg::TRIG_ASSGN_A, "TrigAssgnA", ["Trig3A", "Trig2A", "Trig1A", "Trig0A", "-", "-", "-", "TrigEnA"]),
    RegisterDef::new(reg::TRIG_ASSGN_B, "TrigAssgnB", ["Trig3B", "Trig2B", "Trig1B", "Trig0B", "-", "-", "-", "TrigEnB"]),
    RegisterDef::new(reg::LP_CNFG_A, "L+ConfigA", ["L+RT1A", "L+RT0A", "L+DynBLA", "L+BL1A", "L+BL0A", "L+CL2xA", "L+CLimDisA", "L+EnA"]),
    RegisterDef::new(reg::LP_CNFG_B, "L+ConfigB", ["L+RT1B", "L+RT0B", "L+DynBLB", "L+BL1B", "L+BL0B", "L+CL2xB", "L+CLimDisB", "L+EnB"]),
    RegisterDef::new(reg::IO_ST_CFG_A, "IoStatCfgA", ["DiLevelA", "CQLevelA", "TxEnA", "TxA", "DiFilterEnA", "DiIEC3ThA", "DiCSorceA", "DiCSinkA"]),
    RegisterDef::new(reg::IO_ST_CFG_B, "IoStatCfgB", ["DiLevelB", "CQLevelB", "TxEnB", "TxB", "DiFilterEnB", "DiIEC3ThB", "DiCSorceB", "DiCSinkB"]),
    RegisterDef::new(reg::DRVR_CURR_LIM, "DrvrCurLim", ["CL1", "CL0", "CLDis", "CLBL1", "CLBL0", "TAr1", "TAr0", "ArEn"]),
    RegisterDef::new(reg::CLOCK, "Clock", ["VCCWEn", "TxTxenDis", "-", "ClkOEn", "ClkDiv1", "ClkDiv0", "ExtClkEn", "XtalEn"]),
    // Bit 4 is the latched counterpart of VCCWarn, like the other *Err flags.
    RegisterDef::new(reg::STATUS, "Status", ["ThrmShutErr", "ThrmWarnErr", "UVCCErr", "VCCWarnErr", "ThrmShut", "TempWarn", "UVCC", "VCCWarn"]),
    RegisterDef::new(reg::REV_ID, "RevID", ["-", "-", "-", "-", "ID3", "ID2", "ID1", "ID0"]),
];

const _: () = assert!(find_invalid_entry(&TABLE).is_none());

/// All MAX14819 registers, indexed by address
pub static REGISTERS: [RegisterDef; REGISTER_COUNT] = TABLE;

/// The MAX14819 register table
pub static MAX14819_REGISTERS: RegisterTable = RegisterTable::new_unchecked(&REGISTERS);

/// Look up a MAX14819 register by address
pub fn lookup(address: u8) -> Result<&'static RegisterDef> {
    MAX14819_REGISTERS.lookup(address)
}

/// Name of bit `position` (0 = MSB) of `def`
pub fn bit_name(def: &RegisterDef, position: u8) -> Result<&'static str> {
    def.bit_name(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_table_is_complete() {
        assert_eq!(MAX14819_REGISTERS.len(), REGISTER_COUNT);
        for (i, def) in MAX14819_REGISTERS.iter().enumerate() {
            assert_eq!(def.address as usize, i);
            assert_eq!(lookup(i as u8).unwrap().name, def.name);
        }
        assert!(RegisterTable::new(&REGISTERS).is_ok());
    }

    #[test]
    fn test_lookup_unknown() {
        for addr in [0x20u8, 0x21, 0x7F, 0x80, 0xFF] {
            assert_eq!(lookup(addr).unwrap_err(), Error::UnknownRegister(addr));
        }
    }

    #[test]
    fn test_bit_names_unique_per_register() {
        for def in MAX14819_REGISTERS.iter() {
            for (i, a) in def.bits.iter().enumerate() {
                if *a == "-" {
                    continue;
                }
                for b in &def.bits[i + 1..] {
                    assert_ne!(a, b, "duplicate bit name in {}", def.name);
                }
            }
        }
    }

    #[test]
    fn test_status_vccwarn_split() {
        let status = lookup(reg::STATUS).unwrap();
        assert_eq!(bit_name(status, 3).unwrap(), "VCCWarnErr");
        assert_eq!(bit_name(status, 7).unwrap(), "VCCWarn");
    }

    #[test]
    fn test_find_by_name() {
        let def = MAX14819_REGISTERS.find_by_name("ledcntrl").unwrap();
        assert_eq!(def.address, reg::LED_CTRL);
        assert_eq!(
            MAX14819_REGISTERS.find_by_name("L+ConfigB").unwrap().address,
            reg::LP_CNFG_B
        );
        assert!(MAX14819_REGISTERS.find_by_name("NoSuchReg").is_none());
    }

    #[test]
    fn test_reserved_bits() {
        let rev = lookup(reg::REV_ID).unwrap();
        assert_eq!(bit_name(rev, 0).unwrap(), "-");
        assert_eq!(bit_name(rev, 4).unwrap(), "ID3");
        assert_eq!(rev.writable_mask(), 0x0F);
        assert_eq!(
            bit_name(rev, 8).unwrap_err(),
            Error::InvalidBitPosition(8)
        );
    }
}
