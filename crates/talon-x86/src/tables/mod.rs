//! Opcode dispatch tables.
//!
//! Decode is table-driven in two levels. A per-mode dispatch array maps
//! every (escape, opcode) slot to a [`DecodeEntry`]: the strategy for the
//! bytes that follow the opcode, usually carrying the descriptor group
//! that lists the candidate instruction forms for that slot. Group rows
//! are matched against the prefix/modrm state by `matcher::find_opcode`.
//! The VEX, EVEX and XOP escapes get their own flat 768-entry group maps
//! since they re-key the same opcode space by embedded prefix bits.
//!
//! [`TableSet`] ties the whole thing to one CPU feature mask.

mod avx;
mod dispatch;
mod evex;
mod opmap;
mod opmap_0f;
mod opmap_0f38;
mod opmap_0f3a;
mod tdnow;
mod x87;
mod xop;

pub(crate) use tdnow::TDNOW;
pub(crate) use x87::X87Table;

use crate::matcher::OpcodeGroup;
use talon_types::CpuFeatures;

/// Decode strategy for one opcode-map slot.
#[derive(Clone, Copy)]
pub(crate) enum DecodeEntry {
    /// Unassigned or removed encoding, decodes to the error id.
    Invalid,
    /// No modrm byte and no matching: the group's lone row is taken as-is.
    Simple(OpcodeGroup),
    /// No modrm byte, the row is picked on prefix state alone.
    Plain(OpcodeGroup),
    /// Modrm byte, then displacement and immediates per the matched form.
    Modrm(OpcodeGroup),
    /// Modrm byte that always encodes a register pair, as in MOV to or
    /// from a control register. The mod field is forced to 11.
    MovCrDr(OpcodeGroup),
    /// D8 through DF: the modrm byte indexes a flat x87 form table.
    FpEscape(&'static X87Table),
    /// 0F 0F: modrm and operands first, then an opcode selector byte.
    ThreeDNow,
    /// 90 through 97: XCHG unless the encoding collapses to NOP or PAUSE.
    NopPause(OpcodeGroup),
    /// C4/C5 VEX escape; the group is the legacy fallback for 32-bit
    /// encodings whose top modrm bits disqualify the prefix form.
    Vex(OpcodeGroup),
    /// 62 EVEX escape, fallback group as for VEX.
    Evex(OpcodeGroup),
    /// 8F XOP escape, falling back to the POP Ev group.
    Xop(OpcodeGroup),
}

/// Decode tables specialized to one CPU feature mask.
///
/// Construction starts from the full-featured dispatch maps and rewrites
/// the slots whose meaning the mask changes. Absent features either free
/// an encoding for its legacy meaning (LES/LDS/BOUND/POP Ev, BSF/BSR) or
/// mark it invalid; nothing else in the tables varies, so the escape maps
/// are shared statics.
pub struct TableSet {
    map32: [DecodeEntry; 1024],
    map64: [DecodeEntry; 1024],
    vex: &'static [OpcodeGroup; 768],
    evex: &'static [OpcodeGroup; 768],
    xop: &'static [OpcodeGroup; 768],
    features: CpuFeatures,
}

impl TableSet {
    pub fn new(features: CpuFeatures) -> Self {
        let mut map32 = dispatch::DISPATCH32;
        let mut map64 = dispatch::DISPATCH64;

        if !features.contains(CpuFeatures::AVX) {
            map32[0xC4] = DecodeEntry::Modrm(opmap::G_C4_32);
            map32[0xC5] = DecodeEntry::Modrm(opmap::G_C5_32);
            map64[0xC4] = DecodeEntry::Invalid;
            map64[0xC5] = DecodeEntry::Invalid;
        }
        if !features.contains(CpuFeatures::AVX512) {
            map32[0x62] = DecodeEntry::Modrm(opmap::G_62);
            map64[0x62] = DecodeEntry::Invalid;
        }
        if !features.contains(CpuFeatures::XOP) {
            map32[0x8F] = DecodeEntry::Modrm(opmap::G_8F);
            map64[0x8F] = DecodeEntry::Modrm(opmap::G_8F);
        }
        if !features.contains(CpuFeatures::D3NOW) {
            // FEMMS (0F 0E) survives on its own, only the selector goes.
            map32[0x10F] = DecodeEntry::Invalid;
            map64[0x10F] = DecodeEntry::Invalid;
        }
        if !features.contains(CpuFeatures::CET) {
            map32[0x11E] = DecodeEntry::Modrm(opmap_0f::G_MULTI_BYTE_NOP);
            map64[0x11E] = DecodeEntry::Modrm(opmap_0f::G_MULTI_BYTE_NOP);
        }
        if !features.contains(CpuFeatures::BMI1) {
            map32[0x1BC] = DecodeEntry::Modrm(opmap_0f::G_0FBC_BSF);
            map64[0x1BC] = DecodeEntry::Modrm(opmap_0f::G_0FBC_BSF);
        }
        if !features.contains(CpuFeatures::LZCNT) {
            map32[0x1BD] = DecodeEntry::Modrm(opmap_0f::G_0FBD_BSR);
            map64[0x1BD] = DecodeEntry::Modrm(opmap_0f::G_0FBD_BSR);
        }

        TableSet {
            map32,
            map64,
            vex: &avx::VEX_MAP,
            evex: &evex::EVEX_MAP,
            xop: &xop::XOP_MAP,
            features,
        }
    }

    pub fn features(&self) -> CpuFeatures {
        self.features
    }

    pub(crate) fn entry32(&self, index: usize) -> DecodeEntry {
        self.map32[index]
    }

    pub(crate) fn entry64(&self, index: usize) -> DecodeEntry {
        self.map64[index]
    }

    /// Group for a VEX-encoded opcode, index `map << 8 | opcode`.
    pub(crate) fn vex_group(&self, index: usize) -> OpcodeGroup {
        self.vex[index]
    }

    pub(crate) fn evex_group(&self, index: usize) -> OpcodeGroup {
        self.evex[index]
    }

    pub(crate) fn xop_group(&self, index: usize) -> OpcodeGroup {
        self.xop[index]
    }
}

impl Default for TableSet {
    /// Tables with every decodable feature enabled.
    fn default() -> Self {
        TableSet::new(CpuFeatures::all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::IaOpcode;
    use crate::matcher::ERR;

    #[test]
    fn full_feature_tables_keep_prefix_escapes() {
        let t = TableSet::default();
        assert!(matches!(t.entry32(0xC4), DecodeEntry::Vex(_)));
        assert!(matches!(t.entry32(0x62), DecodeEntry::Evex(_)));
        assert!(matches!(t.entry64(0x8F), DecodeEntry::Xop(_)));
        assert!(matches!(t.entry64(0x10F), DecodeEntry::ThreeDNow));
    }

    #[test]
    fn stripped_tables_restore_legacy_meanings() {
        let t = TableSet::new(CpuFeatures::empty());
        // LES / LDS / BOUND / POP Ev come back in 32-bit mode.
        assert!(matches!(t.entry32(0xC4), DecodeEntry::Modrm(_)));
        assert!(matches!(t.entry32(0xC5), DecodeEntry::Modrm(_)));
        assert!(matches!(t.entry32(0x62), DecodeEntry::Modrm(_)));
        assert!(matches!(t.entry32(0x8F), DecodeEntry::Modrm(_)));
        // 64-bit mode has no legacy meaning to fall back to.
        assert!(matches!(t.entry64(0xC4), DecodeEntry::Invalid));
        assert!(matches!(t.entry64(0xC5), DecodeEntry::Invalid));
        assert!(matches!(t.entry64(0x62), DecodeEntry::Invalid));
        assert!(matches!(t.entry64(0x8F), DecodeEntry::Modrm(_)));
        assert!(matches!(t.entry32(0x10F), DecodeEntry::Invalid));
    }

    #[test]
    fn femms_survives_without_the_selector() {
        let t = TableSet::new(CpuFeatures::empty());
        assert!(matches!(t.entry32(0x10E), DecodeEntry::Simple(_)));
        assert!(matches!(t.entry64(0x10E), DecodeEntry::Simple(_)));
    }

    #[test]
    fn count_swaps_fall_back_to_bit_scans() {
        let t = TableSet::new(CpuFeatures::empty());
        let DecodeEntry::Modrm(group) = t.entry64(0x1BC) else {
            panic!("0F BC should stay a modrm slot");
        };
        assert!(group
            .iter()
            .all(|e| !matches!(e.id, IaOpcode::Tzcnt_GdEd | IaOpcode::Tzcnt_GqEq)));
    }

    #[test]
    fn prefix_bytes_have_no_dispatch_slot() {
        let t = TableSet::default();
        for b in [0x0F, 0x26, 0x2E, 0x36, 0x3E, 0x64, 0x65, 0x66, 0x67, 0xF0, 0xF2, 0xF3] {
            assert!(matches!(t.entry32(b), DecodeEntry::Invalid), "{b:#x}");
        }
        // REX bytes dispatch only in 32-bit mode, where they are INC/DEC.
        for b in 0x40..=0x4F {
            assert!(matches!(t.entry32(b), DecodeEntry::Plain(_)));
            assert!(matches!(t.entry64(b), DecodeEntry::Invalid));
        }
    }

    #[test]
    fn escape_maps_populate_expected_slots() {
        let t = TableSet::default();
        assert!(!std::ptr::eq(t.vex_group(0x010), ERR));
        assert!(!std::ptr::eq(t.evex_group(0x06F), ERR));
        assert!(!std::ptr::eq(t.xop_group(0x101), ERR));
        // Slots this build does not translate share the error group.
        assert!(std::ptr::eq(t.vex_group(0x0FF), ERR));
    }
}
