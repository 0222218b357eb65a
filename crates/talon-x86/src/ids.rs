//! Instruction identities and per-instruction decode metadata.
//!
//! Every instruction the dispatch tables can resolve has an [`IaOpcode`]
//! variant; the metadata row behind it drives immediate fetching and source
//! assignment, so the decode loop itself never has to switch on individual
//! opcodes. Variant names spell the operand forms the way opcode maps
//! usually do: `Add_EdGd` is `add r/m32, r32`, `Jz_Jbd` is `jz rel8` with a
//! 32-bit target.
//!
//! Up to four sources describe an instruction. A source pairs *where it
//! comes from* ([`SrcRole`]) with *what it is* ([`OperandKind`]); the kind
//! doubles as the memory tuple category for EVEX compressed displacement
//! and as the immediate format for the fetch stage.

use bitflags::bitflags;
use std::fmt;

/// Where a source operand is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SrcRole {
    None,
    /// Implicit AL/AX/EAX/RAX, or ST(0) for x87.
    Acc,
    /// modrm.nnn (or the opcode extension field for VEX/EVEX).
    Nnn,
    /// modrm.rm: a register, or a memory reference.
    Rm,
    /// modrm.rm where the memory form is an EVEX-maskable vector access.
    VecRm,
    /// The inverted (e)vex.vvvv register field.
    Vvv,
    /// Register number carried in the high bits of a trailing immediate.
    Vib,
    /// Gather/scatter vector index from the sib byte.
    Vsib,
    Imm,
    /// Immediate used as a branch displacement.
    Branch,
    /// Fixed register or string-op memory reference; nothing to decode.
    Implicit,
}

/// What a source operand is. For `VecRm`/`Vsib` sources the `Tuple*`
/// variants give the memory access shape; for `Imm`/`Branch` sources the
/// `Imm*`/`Moffs*` variants give the encoding of the immediate itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    None,
    Gpr8,
    /// Byte in memory, doubleword register otherwise (pinsrb and friends).
    Gpr32Mem8,
    Gpr16,
    /// Word in memory, doubleword register otherwise.
    Gpr32Mem16,
    Gpr32,
    Gpr64,
    FpuReg,
    MmxReg,
    /// Low half of an mmx register.
    MmxHalfReg,
    VmmReg,
    KmaskReg,
    /// Even/odd opmask register pair.
    KmaskRegPair,
    SegReg,
    CtrlReg,
    DebugReg,
    /// Whole vector of the current vector length.
    TupleFull,
    TupleByte,
    TupleWord,
    TupleDword,
    TupleQword,
    /// Scalar element sized by EVEX.W.
    TupleScalar,
    TupleHalf,
    TupleQuarter,
    TupleEighth,
    TupleVec128,
    TupleVec256,
    /// Constant one; no immediate byte is fetched.
    Imm1,
    ImmB,
    /// Byte, sign-extended to 16 bits at fetch.
    ImmBsW,
    /// Byte, sign-extended to 32 bits at fetch.
    ImmBsD,
    ImmW,
    ImmD,
    ImmQ,
    /// Second immediate byte (enter iw, ib).
    ImmB2,
    /// 16:16 or 16:32 far pointer.
    DirectPtr,
    MoffsB,
    MoffsW,
    MoffsD,
    MoffsQ,
    SiRefB,
    SiRefW,
    SiRefD,
    SiRefQ,
    DiRefB,
    DiRefW,
    DiRefD,
    DiRefQ,
    /// maskmovq writes through (r/e)di.
    MmxDiRef,
    /// maskmovdqu writes through (r/e)di.
    VecDiRef,
    UseCl,
    UseDx,
}

/// One source operand slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrcSpec {
    pub role: SrcRole,
    pub kind: OperandKind,
}

impl SrcSpec {
    pub const NONE: SrcSpec = SrcSpec {
        role: SrcRole::None,
        kind: OperandKind::None,
    };

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self.role, SrcRole::None)
    }
}

bitflags! {
    /// Per-instruction attributes consulted while finalizing a decode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OpFlags: u8 {
        /// A lock prefix is tolerated when the destination is memory.
        const LOCKABLE = 1 << 0;
    }
}

/// Decode metadata for one [`IaOpcode`].
#[derive(Debug, Clone, Copy)]
pub struct OpcodeInfo {
    pub flags: OpFlags,
    pub srcs: [SrcSpec; 4],
}

const fn src(role: SrcRole, kind: OperandKind) -> SrcSpec {
    SrcSpec { role, kind }
}

const fn pad(list: &[SrcSpec]) -> [SrcSpec; 4] {
    let mut out = [SrcSpec::NONE; 4];
    let mut i = 0;
    while i < list.len() {
        out[i] = list[i];
        i += 1;
    }
    out
}

// Source forms referenced by the metadata rows below, named after the
// operand abbreviations the rows themselves use.
const AL: SrcSpec = src(SrcRole::Acc, OperandKind::Gpr8);
const AX: SrcSpec = src(SrcRole::Acc, OperandKind::Gpr16);
const EAX: SrcSpec = src(SrcRole::Acc, OperandKind::Gpr32);
const RAX: SrcSpec = src(SrcRole::Acc, OperandKind::Gpr64);
const CL: SrcSpec = src(SrcRole::Implicit, OperandKind::UseCl);
const DX: SrcSpec = src(SrcRole::Implicit, OperandKind::UseDx);

const EB: SrcSpec = src(SrcRole::Rm, OperandKind::Gpr8);
const EBD: SrcSpec = src(SrcRole::Rm, OperandKind::Gpr32Mem8);
const EW: SrcSpec = src(SrcRole::Rm, OperandKind::Gpr16);
const EWD: SrcSpec = src(SrcRole::Rm, OperandKind::Gpr32Mem16);
const ED: SrcSpec = src(SrcRole::Rm, OperandKind::Gpr32);
const EQ: SrcSpec = src(SrcRole::Rm, OperandKind::Gpr64);
const GB: SrcSpec = src(SrcRole::Nnn, OperandKind::Gpr8);
const GW: SrcSpec = src(SrcRole::Nnn, OperandKind::Gpr16);
const GD: SrcSpec = src(SrcRole::Nnn, OperandKind::Gpr32);
const GQ: SrcSpec = src(SrcRole::Nnn, OperandKind::Gpr64);

const I1: SrcSpec = src(SrcRole::Imm, OperandKind::Imm1);
const IB: SrcSpec = src(SrcRole::Imm, OperandKind::ImmB);
const SIBW: SrcSpec = src(SrcRole::Imm, OperandKind::ImmBsW);
const SIBD: SrcSpec = src(SrcRole::Imm, OperandKind::ImmBsD);
const IW: SrcSpec = src(SrcRole::Imm, OperandKind::ImmW);
const ID: SrcSpec = src(SrcRole::Imm, OperandKind::ImmD);
const IQ: SrcSpec = src(SrcRole::Imm, OperandKind::ImmQ);
const IB2: SrcSpec = src(SrcRole::Imm, OperandKind::ImmB2);
const JW: SrcSpec = src(SrcRole::Branch, OperandKind::ImmW);
const JD: SrcSpec = src(SrcRole::Branch, OperandKind::ImmD);
const JQ: SrcSpec = src(SrcRole::Branch, OperandKind::ImmD);
const JBW: SrcSpec = src(SrcRole::Branch, OperandKind::ImmBsW);
const JBD: SrcSpec = src(SrcRole::Branch, OperandKind::ImmBsD);
const JBQ: SrcSpec = src(SrcRole::Branch, OperandKind::ImmBsD);
const OD: SrcSpec = src(SrcRole::Imm, OperandKind::MoffsD);
const OQ: SrcSpec = src(SrcRole::Imm, OperandKind::MoffsQ);
const AP: SrcSpec = src(SrcRole::Imm, OperandKind::DirectPtr);

const M: SrcSpec = src(SrcRole::Rm, OperandKind::None);
const MT: SrcSpec = src(SrcRole::Rm, OperandKind::FpuReg);
const MDQ: SrcSpec = src(SrcRole::VecRm, OperandKind::TupleFull);

const PQ: SrcSpec = src(SrcRole::Nnn, OperandKind::MmxReg);
const QQ: SrcSpec = src(SrcRole::Rm, OperandKind::MmxReg);
const QD: SrcSpec = src(SrcRole::Rm, OperandKind::MmxHalfReg);
const NQ: SrcSpec = src(SrcRole::Rm, OperandKind::MmxReg);

const VDQ: SrcSpec = src(SrcRole::Nnn, OperandKind::VmmReg);
const VPS: SrcSpec = VDQ;
const VPD: SrcSpec = VDQ;
const VSS: SrcSpec = VDQ;
const VSD: SrcSpec = VDQ;
const VQ: SrcSpec = VDQ;
const VD: SrcSpec = VDQ;
const UDQ: SrcSpec = src(SrcRole::Rm, OperandKind::VmmReg);
const UPS: SrcSpec = UDQ;
const UPD: SrcSpec = UDQ;

const WQ: SrcSpec = src(SrcRole::VecRm, OperandKind::TupleQword);
const WD: SrcSpec = src(SrcRole::VecRm, OperandKind::TupleDword);
const WW: SrcSpec = src(SrcRole::VecRm, OperandKind::TupleWord);
const WDQ: SrcSpec = src(SrcRole::VecRm, OperandKind::TupleFull);
const WPS: SrcSpec = WDQ;
const WPD: SrcSpec = WDQ;
const WSS: SrcSpec = src(SrcRole::VecRm, OperandKind::TupleDword);
const WSD: SrcSpec = src(SrcRole::VecRm, OperandKind::TupleQword);
const MVHV: SrcSpec = src(SrcRole::VecRm, OperandKind::TupleHalf);
const MVQV: SrcSpec = src(SrcRole::VecRm, OperandKind::TupleQuarter);
const MVOV: SrcSpec = src(SrcRole::VecRm, OperandKind::TupleEighth);
const MVDQ128: SrcSpec = src(SrcRole::VecRm, OperandKind::TupleVec128);
const MVDQ256: SrcSpec = src(SrcRole::VecRm, OperandKind::TupleVec256);
const VSIB: SrcSpec = src(SrcRole::Vsib, OperandKind::TupleScalar);

const HDQ: SrcSpec = src(SrcRole::Vvv, OperandKind::VmmReg);
const HPS: SrcSpec = HDQ;
const HPD: SrcSpec = HDQ;
const HSS: SrcSpec = HDQ;
const HSD: SrcSpec = HDQ;
const BD: SrcSpec = src(SrcRole::Vvv, OperandKind::Gpr32);
const BQ: SrcSpec = src(SrcRole::Vvv, OperandKind::Gpr64);
const VIB: SrcSpec = src(SrcRole::Vib, OperandKind::VmmReg);

const CD: SrcSpec = src(SrcRole::Nnn, OperandKind::CtrlReg);
const CQ: SrcSpec = src(SrcRole::Nnn, OperandKind::CtrlReg);
const DD: SrcSpec = src(SrcRole::Nnn, OperandKind::DebugReg);
const DQ: SrcSpec = src(SrcRole::Nnn, OperandKind::DebugReg);
const SW: SrcSpec = src(SrcRole::Nnn, OperandKind::SegReg);

const KGB: SrcSpec = src(SrcRole::Nnn, OperandKind::KmaskReg);
const KGW: SrcSpec = KGB;
const KGD: SrcSpec = KGB;
const KGQ: SrcSpec = KGB;
const KEB: SrcSpec = src(SrcRole::Rm, OperandKind::KmaskReg);
const KEW: SrcSpec = KEB;
const KED: SrcSpec = KEB;
const KEQ: SrcSpec = KEB;
const KHB: SrcSpec = src(SrcRole::Vvv, OperandKind::KmaskReg);
const KHW: SrcSpec = KHB;
const KHD: SrcSpec = KHB;
const KHQ: SrcSpec = KHB;

const ST0: SrcSpec = src(SrcRole::Acc, OperandKind::FpuReg);
const STI: SrcSpec = src(SrcRole::Rm, OperandKind::FpuReg);

const XB: SrcSpec = src(SrcRole::Implicit, OperandKind::SiRefB);
const XW: SrcSpec = src(SrcRole::Implicit, OperandKind::SiRefW);
const XD: SrcSpec = src(SrcRole::Implicit, OperandKind::SiRefD);
const XQ: SrcSpec = src(SrcRole::Implicit, OperandKind::SiRefQ);
const YB: SrcSpec = src(SrcRole::Implicit, OperandKind::DiRefB);
const YW: SrcSpec = src(SrcRole::Implicit, OperandKind::DiRefW);
const YD: SrcSpec = src(SrcRole::Implicit, OperandKind::DiRefD);
const YQ: SrcSpec = src(SrcRole::Implicit, OperandKind::DiRefQ);
const SYQ: SrcSpec = src(SrcRole::Implicit, OperandKind::MmxDiRef);
const SYDQ: SrcSpec = src(SrcRole::Implicit, OperandKind::VecDiRef);

macro_rules! opcode_flags {
    () => {
        OpFlags::empty()
    };
    (lockable) => {
        OpFlags::LOCKABLE
    };
}

macro_rules! opcodes {
    ($( $name:ident $( : $flag:ident )? => [ $( $src:expr ),* ] ),+ $(,)?) => {
        /// Identity of a decoded instruction form.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum IaOpcode {
            $( $name ),+
        }

        static OPCODE_NAMES: &[&str] = &[ $( stringify!($name) ),+ ];

        static OPCODE_INFO: &[OpcodeInfo] = &[
            $( OpcodeInfo {
                flags: opcode_flags!($($flag)?),
                srcs: pad(&[ $( $src ),* ]),
            } ),+
        ];
    };
}

opcodes! {
    Error => [],
    Aaa => [],
    Aad => [IB],
    Aam => [IB],
    Aas => [],
    Adc_ALIb => [AL, IB],
    Adc_AXIw => [AX, IW],
    Adc_EAXId => [EAX, ID],
    Adc_EbGb : lockable => [EB, GB],
    Adc_EbIb : lockable => [EB, IB],
    Adc_EdGd : lockable => [ED, GD],
    Adc_EdId : lockable => [ED, ID],
    Adc_EdsIb : lockable => [ED, SIBD],
    Adc_EqGq : lockable => [EQ, GQ],
    Adc_EqId : lockable => [EQ, ID],
    Adc_EqsIb : lockable => [EQ, SIBD],
    Adc_EwGw : lockable => [EW, GW],
    Adc_EwIw : lockable => [EW, IW],
    Adc_EwsIb : lockable => [EW, SIBW],
    Adc_GbEb => [GB, EB],
    Adc_GdEd => [GD, ED],
    Adc_GqEq => [GQ, EQ],
    Adc_GwEw => [GW, EW],
    Adc_RAXId => [RAX, ID],
    Adcx_GdEd => [GD, ED],
    Adcx_GqEq => [GQ, EQ],
    Add_ALIb => [AL, IB],
    Add_AXIw => [AX, IW],
    Add_EAXId => [EAX, ID],
    Add_EbGb : lockable => [EB, GB],
    Add_EbIb : lockable => [EB, IB],
    Add_EdGd : lockable => [ED, GD],
    Add_EdId : lockable => [ED, ID],
    Add_EdsIb : lockable => [ED, SIBD],
    Add_EqGq : lockable => [EQ, GQ],
    Add_EqId : lockable => [EQ, ID],
    Add_EqsIb : lockable => [EQ, SIBD],
    Add_EwGw : lockable => [EW, GW],
    Add_EwIw : lockable => [EW, IW],
    Add_EwsIb : lockable => [EW, SIBW],
    Add_GbEb => [GB, EB],
    Add_GdEd => [GD, ED],
    Add_GqEq => [GQ, EQ],
    Add_GwEw => [GW, EW],
    Add_RAXId => [RAX, ID],
    Addpd_VpdWpd => [VPD, WPD],
    Addps_VpsWps => [VPS, WPS],
    Addsd_VsdWsd => [VSD, WSD],
    Addss_VssWss => [VSS, WSS],
    Addsubpd_VpdWpd => [VPD, WPD],
    Addsubps_VpsWps => [VPS, WPS],
    Adox_GdEd => [GD, ED],
    Adox_GqEq => [GQ, EQ],
    Aesdec_VdqWdq => [VDQ, WDQ],
    Aesdeclast_VdqWdq => [VDQ, WDQ],
    Aesenc_VdqWdq => [VDQ, WDQ],
    Aesenclast_VdqWdq => [VDQ, WDQ],
    Aesimc_VdqWdq => [VDQ, WDQ],
    Aeskeygenassist_VdqWdqIb => [VDQ, WDQ, IB],
    And_ALIb => [AL, IB],
    And_AXIw => [AX, IW],
    And_EAXId => [EAX, ID],
    And_EbGb : lockable => [EB, GB],
    And_EbIb : lockable => [EB, IB],
    And_EdGd : lockable => [ED, GD],
    And_EdId : lockable => [ED, ID],
    And_EdsIb : lockable => [ED, SIBD],
    And_EqGq : lockable => [EQ, GQ],
    And_EqId : lockable => [EQ, ID],
    And_EqsIb : lockable => [EQ, SIBD],
    And_EwGw : lockable => [EW, GW],
    And_EwIw : lockable => [EW, IW],
    And_EwsIb : lockable => [EW, SIBW],
    And_GbEb => [GB, EB],
    And_GdEd => [GD, ED],
    And_GqEq => [GQ, EQ],
    And_GwEw => [GW, EW],
    And_RAXId => [RAX, ID],
    Andn_GdBdEd => [GD, BD, ED],
    Andn_GqBqEq => [GQ, BQ, EQ],
    Andnpd_VpdWpd => [VPD, WPD],
    Andnps_VpsWps => [VPS, WPS],
    Andpd_VpdWpd => [VPD, WPD],
    Andps_VpsWps => [VPS, WPS],
    Arpl_EwGw => [EW, GW],
    Bextr_GdEdBd => [GD, ED, BD],
    Bextr_GdEdId => [GD, ED, ID],
    Bextr_GqEqBq => [GQ, EQ, BQ],
    Bextr_GqEqId => [GQ, EQ, ID],
    Blcfill_BdEd => [BD, ED],
    Blcfill_BqEq => [BQ, EQ],
    Blci_BdEd => [BD, ED],
    Blci_BqEq => [BQ, EQ],
    Blcic_BdEd => [BD, ED],
    Blcic_BqEq => [BQ, EQ],
    Blcmsk_BdEd => [BD, ED],
    Blcmsk_BqEq => [BQ, EQ],
    Blcs_BdEd => [BD, ED],
    Blcs_BqEq => [BQ, EQ],
    Blendpd_VpdWpdIb => [VPD, WPD, IB],
    Blendps_VpsWpsIb => [VPS, WPS, IB],
    Blendvpd_VpdWpd => [VPD, WPD],
    Blendvps_VpsWps => [VPS, WPS],
    Blsfill_BdEd => [BD, ED],
    Blsfill_BqEq => [BQ, EQ],
    Blsi_BdEd => [BD, ED],
    Blsi_BqEq => [BQ, EQ],
    Blsic_BdEd => [BD, ED],
    Blsic_BqEq => [BQ, EQ],
    Blsmsk_BdEd => [BD, ED],
    Blsmsk_BqEq => [BQ, EQ],
    Blsr_BdEd => [BD, ED],
    Blsr_BqEq => [BQ, EQ],
    Bound_GdMa => [GD, M],
    Bound_GwMa => [GW, M],
    Bsf_GdEd => [GD, ED],
    Bsf_GqEq => [GQ, EQ],
    Bsf_GwEw => [GW, EW],
    Bsr_GdEd => [GD, ED],
    Bsr_GqEq => [GQ, EQ],
    Bsr_GwEw => [GW, EW],
    Bswap_ERX => [ED],
    Bswap_RRX => [EQ],
    Bswap_RX => [EW],
    Bt_EdGd => [ED, GD],
    Bt_EdIb => [ED, IB],
    Bt_EqGq => [EQ, GQ],
    Bt_EqIb => [EQ, IB],
    Bt_EwGw => [EW, GW],
    Bt_EwIb => [EW, IB],
    Btc_EdGd : lockable => [ED, GD],
    Btc_EdIb : lockable => [ED, IB],
    Btc_EqGq : lockable => [EQ, GQ],
    Btc_EqIb : lockable => [EQ, IB],
    Btc_EwGw : lockable => [EW, GW],
    Btc_EwIb : lockable => [EW, IB],
    Btr_EdGd : lockable => [ED, GD],
    Btr_EdIb : lockable => [ED, IB],
    Btr_EqGq : lockable => [EQ, GQ],
    Btr_EqIb : lockable => [EQ, IB],
    Btr_EwGw : lockable => [EW, GW],
    Btr_EwIb : lockable => [EW, IB],
    Bts_EdGd : lockable => [ED, GD],
    Bts_EdIb : lockable => [ED, IB],
    Bts_EqGq : lockable => [EQ, GQ],
    Bts_EqIb : lockable => [EQ, IB],
    Bts_EwGw : lockable => [EW, GW],
    Bts_EwIb : lockable => [EW, IB],
    Bzhi_GdBdEd => [GD, BD, ED],
    Bzhi_GqBqEq => [GQ, BQ, EQ],
    Call_Ed => [ED],
    Call_Eq => [EQ],
    Call_Ew => [EW],
    Call_Jd => [JD],
    Call_Jq => [JQ],
    Call_Jw => [JW],
    Callf_Op16_Ap => [AP],
    Callf_Op16_Ep => [M],
    Callf_Op32_Ap => [AP],
    Callf_Op32_Ep => [M],
    Callf_Op64_Ep => [M],
    Cbw => [],
    Cdq => [],
    Cdqe => [],
    Clac => [],
    Clc => [],
    Cld => [],
    Clflush => [EB],
    Clflushopt => [EB],
    Clgi => [],
    Cli => [],
    Clrssbsy => [],
    Clts => [],
    Clwb => [EB],
    Clzero => [],
    Cmc => [],
    Cmovb_GdEd => [GD, ED],
    Cmovb_GqEq => [GQ, EQ],
    Cmovb_GwEw => [GW, EW],
    Cmovbe_GdEd => [GD, ED],
    Cmovbe_GqEq => [GQ, EQ],
    Cmovbe_GwEw => [GW, EW],
    Cmovl_GdEd => [GD, ED],
    Cmovl_GqEq => [GQ, EQ],
    Cmovl_GwEw => [GW, EW],
    Cmovle_GdEd => [GD, ED],
    Cmovle_GqEq => [GQ, EQ],
    Cmovle_GwEw => [GW, EW],
    Cmovnb_GdEd => [GD, ED],
    Cmovnb_GqEq => [GQ, EQ],
    Cmovnb_GwEw => [GW, EW],
    Cmovnbe_GdEd => [GD, ED],
    Cmovnbe_GqEq => [GQ, EQ],
    Cmovnbe_GwEw => [GW, EW],
    Cmovnl_GdEd => [GD, ED],
    Cmovnl_GqEq => [GQ, EQ],
    Cmovnl_GwEw => [GW, EW],
    Cmovnle_GdEd => [GD, ED],
    Cmovnle_GqEq => [GQ, EQ],
    Cmovnle_GwEw => [GW, EW],
    Cmovno_GdEd => [GD, ED],
    Cmovno_GqEq => [GQ, EQ],
    Cmovno_GwEw => [GW, EW],
    Cmovnp_GdEd => [GD, ED],
    Cmovnp_GqEq => [GQ, EQ],
    Cmovnp_GwEw => [GW, EW],
    Cmovns_GdEd => [GD, ED],
    Cmovns_GqEq => [GQ, EQ],
    Cmovns_GwEw => [GW, EW],
    Cmovnz_GdEd => [GD, ED],
    Cmovnz_GqEq => [GQ, EQ],
    Cmovnz_GwEw => [GW, EW],
    Cmovo_GdEd => [GD, ED],
    Cmovo_GqEq => [GQ, EQ],
    Cmovo_GwEw => [GW, EW],
    Cmovp_GdEd => [GD, ED],
    Cmovp_GqEq => [GQ, EQ],
    Cmovp_GwEw => [GW, EW],
    Cmovs_GdEd => [GD, ED],
    Cmovs_GqEq => [GQ, EQ],
    Cmovs_GwEw => [GW, EW],
    Cmovz_GdEd => [GD, ED],
    Cmovz_GqEq => [GQ, EQ],
    Cmovz_GwEw => [GW, EW],
    Cmp_ALIb => [AL, IB],
    Cmp_AXIw => [AX, IW],
    Cmp_EAXId => [EAX, ID],
    Cmp_EbGb => [EB, GB],
    Cmp_EbIb => [EB, IB],
    Cmp_EdGd => [ED, GD],
    Cmp_EdId => [ED, ID],
    Cmp_EdsIb => [ED, SIBD],
    Cmp_EqGq => [EQ, GQ],
    Cmp_EqId => [EQ, ID],
    Cmp_EqsIb => [EQ, SIBD],
    Cmp_EwGw => [EW, GW],
    Cmp_EwIw => [EW, IW],
    Cmp_EwsIb => [EW, SIBW],
    Cmp_GbEb => [GB, EB],
    Cmp_GdEd => [GD, ED],
    Cmp_GqEq => [GQ, EQ],
    Cmp_GwEw => [GW, EW],
    Cmp_RAXId => [RAX, ID],
    Cmppd_VpdWpdIb => [VPD, WPD, IB],
    Cmpps_VpsWpsIb => [VPS, WPS, IB],
    Cmpsd_VsdWsdIb => [VSD, WSD, IB],
    Cmpss_VssWssIb => [VSS, WSS, IB],
    Cmpxchg16b : lockable => [MDQ],
    Cmpxchg8b : lockable => [EQ],
    Cmpxchg_EbGb : lockable => [EB, GB],
    Cmpxchg_EdGd : lockable => [ED, GD],
    Cmpxchg_EqGq : lockable => [EQ, GQ],
    Cmpxchg_EwGw : lockable => [EW, GW],
    Comisd_VsdWsd => [VSD, WSD],
    Comiss_VssWss => [VSS, WSS],
    Cpuid => [],
    Cqo => [],
    Crc32_GdEb => [GD, EB],
    Crc32_GdEd => [GD, ED],
    Crc32_GdEq => [GD, EQ],
    Crc32_GdEw => [GD, EW],
    Cvtdq2pd_VpdWq => [VPD, WQ],
    Cvtdq2ps_VpsWdq => [VPS, WDQ],
    Cvtpd2dq_VqWpd => [VQ, WPD],
    Cvtpd2pi_PqWpd => [PQ, WPD],
    Cvtpd2ps_VpsWpd => [VPS, WPD],
    Cvtpi2pd_VpdQq => [VPD, QQ],
    Cvtpi2ps_VpsQq => [VPS, QQ],
    Cvtps2dq_VdqWps => [VDQ, WPS],
    Cvtps2pd_VpdWps => [VPD, WPS],
    Cvtps2pi_PqWps => [PQ, WPS],
    Cvtsd2si_GdWsd => [GD, WSD],
    Cvtsd2si_GqWsd => [GQ, WSD],
    Cvtsd2ss_VssWsd => [VSS, WSD],
    Cvtsi2sd_VsdEd => [VSD, ED],
    Cvtsi2sd_VsdEq => [VSD, EQ],
    Cvtsi2ss_VssEd => [VSS, ED],
    Cvtsi2ss_VssEq => [VSS, EQ],
    Cvtss2sd_VsdWss => [VSD, WSS],
    Cvtss2si_GdWss => [GD, WSS],
    Cvtss2si_GqWss => [GQ, WSS],
    Cvttpd2dq_VqWpd => [VQ, WPD],
    Cvttpd2pi_PqWpd => [PQ, WPD],
    Cvttps2dq_VdqWps => [VDQ, WPS],
    Cvttps2pi_PqWps => [PQ, WPS],
    Cvttsd2si_GdWsd => [GD, WSD],
    Cvttsd2si_GqWsd => [GQ, WSD],
    Cvttss2si_GdWss => [GD, WSS],
    Cvttss2si_GqWss => [GQ, WSS],
    Cwd => [],
    Cwde => [],
    Daa => [],
    Das => [],
    Dec_Eb : lockable => [EB],
    Dec_Ed : lockable => [ED],
    Dec_Eq : lockable => [EQ],
    Dec_Ew : lockable => [EW],
    Div_ALEb => [AL, EB],
    Div_AXEw => [AX, EW],
    Div_EAXEd => [EAX, ED],
    Div_RAXEq => [RAX, EQ],
    Divpd_VpdWpd => [VPD, WPD],
    Divps_VpsWps => [VPS, WPS],
    Divsd_VsdWsd => [VSD, WSD],
    Divss_VssWss => [VSS, WSS],
    Dppd_VpdWpdIb => [VPD, WPD, IB],
    Dpps_VpsWpsIb => [VPS, WPS, IB],
    Emms => [],
    Endbranch32 => [],
    Endbranch64 => [],
    Enter_Op16_IwIb => [IW, IB2],
    Enter_Op32_IwIb => [IW, IB2],
    Enter_Op64_IwIb => [IW, IB2],
    Extractps_EdVpsIb => [ED, VPS, IB],
    Extrq_UdqIbIb => [UDQ, IB, IB2],
    Extrq_VdqUq => [VDQ, UDQ],
    F2xm1 => [ST0],
    Fabs => [ST0],
    Fadd_DoubleReal => [EQ],
    Fadd_SingleReal => [ED],
    Fadd_St0Stj => [ST0, STI],
    Fadd_StiSt0 => [STI, ST0],
    Faddp_StiSt0 => [STI, ST0],
    Fbld_PackedBcd => [MT],
    Fbstp_PackedBcd => [MT],
    Fchs => [ST0],
    Fcmovb_St0Stj => [ST0, STI],
    Fcmovbe_St0Stj => [ST0, STI],
    Fcmove_St0Stj => [ST0, STI],
    Fcmovnb_St0Stj => [ST0, STI],
    Fcmovnbe_St0Stj => [ST0, STI],
    Fcmovne_St0Stj => [ST0, STI],
    Fcmovnu_St0Stj => [ST0, STI],
    Fcmovu_St0Stj => [ST0, STI],
    Fcom_DoubleReal => [EQ],
    Fcom_SingleReal => [ED],
    Fcom_Stj => [ST0, STI],
    Fcomi_St0Stj => [ST0, STI],
    Fcomip_St0Stj => [ST0, STI],
    Fcomp_DoubleReal => [EQ],
    Fcomp_SingleReal => [ED],
    Fcomp_Stj => [ST0, STI],
    Fcompp => [],
    Fcos => [ST0],
    Fdecstp => [],
    Fdiv_DoubleReal => [EQ],
    Fdiv_SingleReal => [ED],
    Fdiv_St0Stj => [ST0, STI],
    Fdiv_StiSt0 => [STI, ST0],
    Fdivp_StiSt0 => [STI, ST0],
    Fdivr_DoubleReal => [EQ],
    Fdivr_SingleReal => [ED],
    Fdivr_St0Stj => [ST0, STI],
    Fdivr_StiSt0 => [STI, ST0],
    Fdivrp_StiSt0 => [STI, ST0],
    Femms => [],
    Ffree_Sti => [STI],
    Ffreep_Sti => [STI],
    Fiadd_DwordInteger => [ED],
    Fiadd_WordInteger => [EW],
    Ficom_DwordInteger => [ED],
    Ficom_WordInteger => [EW],
    Ficomp_DwordInteger => [ED],
    Ficomp_WordInteger => [EW],
    Fidiv_DwordInteger => [ED],
    Fidiv_WordInteger => [EW],
    Fidivr_DwordInteger => [ED],
    Fidivr_WordInteger => [EW],
    Fild_DwordInteger => [ED],
    Fild_QwordInteger => [EQ],
    Fild_WordInteger => [EW],
    Fimul_DwordInteger => [ED],
    Fimul_WordInteger => [EW],
    Fincstp => [],
    Fist_DwordInteger => [ED],
    Fist_WordInteger => [EW],
    Fistp_DwordInteger => [ED],
    Fistp_QwordInteger => [EQ],
    Fistp_WordInteger => [EW],
    Fisttp_DwordInteger => [ED],
    Fisttp_QwordInteger => [EQ],
    Fisttp_WordInteger => [EW],
    Fisub_DwordInteger => [ED],
    Fisub_WordInteger => [EW],
    Fisubr_DwordInteger => [ED],
    Fisubr_WordInteger => [EW],
    Fld1 => [],
    Fld_DoubleReal => [EQ],
    Fld_ExtendedReal => [MT],
    Fld_SingleReal => [ED],
    Fld_Sti => [STI],
    Fldcw => [EW],
    Fldenv => [M],
    Fldl2e => [],
    Fldl2t => [],
    Fldlg2 => [],
    Fldln2 => [],
    Fldpi => [],
    Fldz => [],
    Fmul_DoubleReal => [EQ],
    Fmul_SingleReal => [ED],
    Fmul_St0Stj => [ST0, STI],
    Fmul_StiSt0 => [STI, ST0],
    Fmulp_StiSt0 => [STI, ST0],
    Fnclex => [],
    Fninit => [],
    Fnop => [],
    Fnsave => [M],
    Fnstcw => [EW],
    Fnstenv => [M],
    Fnstsw => [EW],
    Fnstsw_Ax => [AX],
    Fpatan => [],
    Fplegacy => [],
    Fprem => [ST0],
    Fprem1 => [ST0],
    Fptan => [ST0],
    Frndint => [ST0],
    Frstor => [M],
    Fscale => [ST0],
    Fsin => [ST0],
    Fsincos => [ST0],
    Fsqrt => [ST0],
    Fst_DoubleReal => [EQ],
    Fst_SingleReal => [ED],
    Fst_Sti => [STI],
    Fstp_DoubleReal => [EQ],
    Fstp_ExtendedReal => [MT],
    Fstp_SingleReal => [ED],
    Fstp_Sti => [STI],
    Fsub_DoubleReal => [EQ],
    Fsub_SingleReal => [ED],
    Fsub_St0Stj => [ST0, STI],
    Fsub_StiSt0 => [STI, ST0],
    Fsubp_StiSt0 => [STI, ST0],
    Fsubr_DoubleReal => [EQ],
    Fsubr_SingleReal => [ED],
    Fsubr_St0Stj => [ST0, STI],
    Fsubr_StiSt0 => [STI, ST0],
    Fsubrp_StiSt0 => [STI, ST0],
    Ftst => [ST0],
    Fucom_Sti => [ST0, STI],
    Fucomi_St0Stj => [ST0, STI],
    Fucomip_St0Stj => [ST0, STI],
    Fucomp_Sti => [ST0, STI],
    Fucompp => [],
    Fwait => [],
    Fxam => [ST0],
    Fxch_Sti => [STI],
    Fxrstor => [M],
    Fxsave => [M],
    Fxtract => [ST0],
    Fyl2x => [],
    Fyl2xp1 => [],
    Getsec => [],
    Gf2p8affineinvqb_VdqWdqIb => [VDQ, WDQ, IB],
    Gf2p8affineqb_VdqWdqIb => [VDQ, WDQ, IB],
    Gf2p8mulb_VdqWdq => [VDQ, WDQ],
    Haddpd_VpdWpd => [VPD, WPD],
    Haddps_VpsWps => [VPS, WPS],
    Hlt => [],
    Hsubpd_VpdWpd => [VPD, WPD],
    Hsubps_VpsWps => [VPS, WPS],
    Idiv_ALEb => [AL, EB],
    Idiv_AXEw => [AX, EW],
    Idiv_EAXEd => [EAX, ED],
    Idiv_RAXEq => [RAX, EQ],
    Imul_ALEb => [AL, EB],
    Imul_AXEw => [AX, EW],
    Imul_EAXEd => [EAX, ED],
    Imul_GdEd => [GD, ED],
    Imul_GdEdId => [GD, ED, ID],
    Imul_GdEdsIb => [GD, ED, SIBD],
    Imul_GqEq => [GQ, EQ],
    Imul_GqEqId => [GQ, EQ, ID],
    Imul_GqEqsIb => [GQ, EQ, SIBD],
    Imul_GwEw => [GW, EW],
    Imul_GwEwIw => [GW, EW, IW],
    Imul_GwEwsIb => [GW, EW, SIBW],
    Imul_RAXEq => [RAX, EQ],
    In_ALDX => [AL, DX],
    In_ALIb => [AL, IB],
    In_AXDX => [AX, DX],
    In_AXIb => [AX, IB],
    In_EAXDX => [EAX, DX],
    In_EAXIb => [EAX, IB],
    Inc_Eb : lockable => [EB],
    Inc_Ed : lockable => [ED],
    Inc_Eq : lockable => [EQ],
    Inc_Ew : lockable => [EW],
    Incsspd => [],
    Incsspq => [],
    Insertps_VpsWssIb => [VPS, WSS, IB],
    Insertq_VdqUdq => [VDQ, UDQ],
    Insertq_VdqUqIbIb => [VDQ, UDQ, IB, IB2],
    Int1 => [],
    Int3 => [],
    Int_Ib : lockable => [IB],
    Into => [],
    Invd => [],
    Invept => [GD, MDQ],
    Invlpg => [M],
    Invlpga => [],
    Invpcid => [GD, MDQ],
    Invvpid => [GD, MDQ],
    Iret_Op16 => [],
    Iret_Op32 => [],
    Iret_Op64 => [],
    Jb_Jbd => [JBD],
    Jb_Jbq => [JBQ],
    Jb_Jbw => [JBW],
    Jb_Jd => [JD],
    Jb_Jq => [JQ],
    Jb_Jw => [JW],
    Jbe_Jbd => [JBD],
    Jbe_Jbq => [JBQ],
    Jbe_Jbw => [JBW],
    Jbe_Jd => [JD],
    Jbe_Jq => [JQ],
    Jbe_Jw => [JW],
    Jcxz_Jbw => [JBW],
    Jecxz_Jbd => [JBD],
    Jl_Jbd => [JBD],
    Jl_Jbq => [JBQ],
    Jl_Jbw => [JBW],
    Jl_Jd => [JD],
    Jl_Jq => [JQ],
    Jl_Jw => [JW],
    Jle_Jbd => [JBD],
    Jle_Jbq => [JBQ],
    Jle_Jbw => [JBW],
    Jle_Jd => [JD],
    Jle_Jq => [JQ],
    Jle_Jw => [JW],
    Jmp_Ed => [ED],
    Jmp_Eq => [EQ],
    Jmp_Ew => [EW],
    Jmp_Jbd => [JBD],
    Jmp_Jbq => [JBQ],
    Jmp_Jbw => [JBW],
    Jmp_Jd => [JD],
    Jmp_Jq => [JQ],
    Jmp_Jw => [JW],
    Jmpf_Ap => [AP],
    Jmpf_Op16_Ep => [M],
    Jmpf_Op32_Ep => [M],
    Jmpf_Op64_Ep => [M],
    Jnb_Jbd => [JBD],
    Jnb_Jbq => [JBQ],
    Jnb_Jbw => [JBW],
    Jnb_Jd => [JD],
    Jnb_Jq => [JQ],
    Jnb_Jw => [JW],
    Jnbe_Jbd => [JBD],
    Jnbe_Jbq => [JBQ],
    Jnbe_Jbw => [JBW],
    Jnbe_Jd => [JD],
    Jnbe_Jq => [JQ],
    Jnbe_Jw => [JW],
    Jnl_Jbd => [JBD],
    Jnl_Jbq => [JBQ],
    Jnl_Jbw => [JBW],
    Jnl_Jd => [JD],
    Jnl_Jq => [JQ],
    Jnl_Jw => [JW],
    Jnle_Jbd => [JBD],
    Jnle_Jbq => [JBQ],
    Jnle_Jbw => [JBW],
    Jnle_Jd => [JD],
    Jnle_Jq => [JQ],
    Jnle_Jw => [JW],
    Jno_Jbd => [JBD],
    Jno_Jbq => [JBQ],
    Jno_Jbw => [JBW],
    Jno_Jd => [JD],
    Jno_Jq => [JQ],
    Jno_Jw => [JW],
    Jnp_Jbd => [JBD],
    Jnp_Jbq => [JBQ],
    Jnp_Jbw => [JBW],
    Jnp_Jd => [JD],
    Jnp_Jq => [JQ],
    Jnp_Jw => [JW],
    Jns_Jbd => [JBD],
    Jns_Jbq => [JBQ],
    Jns_Jbw => [JBW],
    Jns_Jd => [JD],
    Jns_Jq => [JQ],
    Jns_Jw => [JW],
    Jnz_Jbd => [JBD],
    Jnz_Jbq => [JBQ],
    Jnz_Jbw => [JBW],
    Jnz_Jd => [JD],
    Jnz_Jq => [JQ],
    Jnz_Jw => [JW],
    Jo_Jbd => [JBD],
    Jo_Jbq => [JBQ],
    Jo_Jbw => [JBW],
    Jo_Jd => [JD],
    Jo_Jq => [JQ],
    Jo_Jw => [JW],
    Jp_Jbd => [JBD],
    Jp_Jbq => [JBQ],
    Jp_Jbw => [JBW],
    Jp_Jd => [JD],
    Jp_Jq => [JQ],
    Jp_Jw => [JW],
    Jrcxz_Jbq => [JBQ],
    Js_Jbd => [JBD],
    Js_Jbq => [JBQ],
    Js_Jbw => [JBW],
    Js_Jd => [JD],
    Js_Jq => [JQ],
    Js_Jw => [JW],
    Jz_Jbd => [JBD],
    Jz_Jbq => [JBQ],
    Jz_Jbw => [JBW],
    Jz_Jd => [JD],
    Jz_Jq => [JQ],
    Jz_Jw => [JW],
    Kaddb_KGbKHbKEb => [KGB, KHB, KEB],
    Kaddd_KGdKHdKEd => [KGD, KHD, KED],
    Kaddq_KGqKHqKEq => [KGQ, KHQ, KEQ],
    Kaddw_KGwKHwKEw => [KGW, KHW, KEW],
    Kandb_KGbKHbKEb => [KGB, KHB, KEB],
    Kandd_KGdKHdKEd => [KGD, KHD, KED],
    Kandq_KGqKHqKEq => [KGQ, KHQ, KEQ],
    Kandw_KGwKHwKEw => [KGW, KHW, KEW],
    Kmovb_KGbEb => [KGB, EB],
    Kmovb_KGbKEb => [KGB, KEB],
    Kmovd_KGdEd => [KGD, ED],
    Kmovd_KGdKEd => [KGD, KED],
    Kmovq_KGqEq => [KGQ, EQ],
    Kmovq_KGqKEq => [KGQ, KEQ],
    Kmovw_KGwEw => [KGW, EW],
    Kmovw_KGwKEw => [KGW, KEW],
    Knotb_KGbKEb => [KGB, KEB],
    Knotd_KGdKEd => [KGD, KED],
    Knotq_KGqKEq => [KGQ, KEQ],
    Knotw_KGwKEw => [KGW, KEW],
    Kortestb_KGbKEb => [KGB, KEB],
    Kortestd_KGdKEd => [KGD, KED],
    Kortestq_KGqKEq => [KGQ, KEQ],
    Kortestw_KGwKEw => [KGW, KEW],
    Kunpckbw_KGwKHbKEb => [KGW, KHB, KEB],
    Kunpckdq_KGqKHdKEd => [KGQ, KHD, KED],
    Kunpckwd_KGdKHwKEw => [KGD, KHW, KEW],
    Kxorb_KGbKHbKEb => [KGB, KHB, KEB],
    Kxord_KGdKHdKEd => [KGD, KHD, KED],
    Kxorq_KGqKHqKEq => [KGQ, KHQ, KEQ],
    Kxorw_KGwKHwKEw => [KGW, KHW, KEW],
    Lahf => [],
    LahfLm => [],
    Lar_GdEw => [GD, EW],
    Lar_GwEw => [GW, EW],
    Lddqu_VdqMdq => [VDQ, MDQ],
    Ldmxcsr => [ED],
    Lds_GdMp => [GD, M],
    Lds_GwMp => [GW, M],
    Lea_GdM => [GD, M],
    Lea_GqM => [GQ, M],
    Lea_GwM => [GW, M],
    Leave_Op16 => [],
    Leave_Op32 => [],
    Leave_Op64 => [],
    Les_GdMp => [GD, M],
    Les_GwMp => [GW, M],
    Lfence => [],
    Lfs_GdMp => [GD, M],
    Lfs_GqMp => [GQ, M],
    Lfs_GwMp => [GW, M],
    Lgdt_Ms => [M],
    Lgdt_Op64_Ms => [M],
    Lgs_GdMp => [GD, M],
    Lgs_GqMp => [GQ, M],
    Lgs_GwMp => [GW, M],
    Lidt_Ms => [M],
    Lidt_Op64_Ms => [M],
    Lldt_Ew => [EW],
    Lmsw_Ew => [EW],
    Loop_Jbd => [JBD],
    Loop_Jbq => [JBQ],
    Loop_Jbw => [JBW],
    Loope_Jbd => [JBD],
    Loope_Jbq => [JBQ],
    Loope_Jbw => [JBW],
    Loopne_Jbd => [JBD],
    Loopne_Jbq => [JBQ],
    Loopne_Jbw => [JBW],
    Lsl_GdEw => [GD, EW],
    Lsl_GwEw => [GW, EW],
    Lss_GdMp => [GD, M],
    Lss_GqMp => [GQ, M],
    Lss_GwMp => [GW, M],
    Ltr_Ew => [EW],
    Lzcnt_GdEd => [GD, ED],
    Lzcnt_GqEq => [GQ, EQ],
    Lzcnt_GwEw => [GW, EW],
    Maskmovdqu_VdqUdq => [VDQ, UDQ, SYDQ],
    Maskmovq_PqNq => [PQ, NQ, SYQ],
    Maxpd_VpdWpd => [VPD, WPD],
    Maxps_VpsWps => [VPS, WPS],
    Maxsd_VsdWsd => [VSD, WSD],
    Maxss_VssWss => [VSS, WSS],
    Mfence => [],
    Minpd_VpdWpd => [VPD, WPD],
    Minps_VpsWps => [VPS, WPS],
    Minsd_VsdWsd => [VSD, WSD],
    Minss_VssWss => [VSS, WSS],
    Monitor => [],
    Monitorx => [],
    Mov_ALOd => [AL, OD],
    Mov_ALOq => [AL, OQ],
    Mov_AXOd => [AX, OD],
    Mov_AXOq => [AX, OQ],
    Mov_CR0Rd => [CD, ED],
    Mov_CR0Rq => [CQ, EQ],
    Mov_CR2Rd => [CD, ED],
    Mov_CR2Rq => [CQ, EQ],
    Mov_CR3Rd => [CD, ED],
    Mov_CR3Rq => [CQ, EQ],
    Mov_CR4Rd => [CD, ED],
    Mov_CR4Rq => [CQ, EQ],
    Mov_DdRd => [DD, ED],
    Mov_DqRq => [DQ, EQ],
    Mov_EAXOd => [EAX, OD],
    Mov_EAXOq => [EAX, OQ],
    Mov_EbGb => [EB, GB],
    Mov_EbIb => [EB, IB],
    Mov_EdId => [ED, ID],
    Mov_EqGq => [EQ, GQ],
    Mov_EqId => [EQ, ID],
    Mov_EwGw => [EW, GW],
    Mov_EwIw => [EW, IW],
    Mov_EwSw => [EW, SW],
    Mov_GbEb => [GB, EB],
    Mov_GqEq => [GQ, EQ],
    Mov_GwEw => [GW, EW],
    Mov_OdAL => [OD, AL],
    Mov_OdAX => [OD, AX],
    Mov_OdEAX => [OD, EAX],
    Mov_Op32_EdGd => [ED, GD],
    Mov_Op32_GdEd => [GD, ED],
    Mov_Op64_EdGd => [ED, GD],
    Mov_Op64_GdEd => [GD, ED],
    Mov_OqAL => [OQ, AL],
    Mov_OqAX => [OQ, AX],
    Mov_OqEAX => [OQ, EAX],
    Mov_OqRAX => [OQ, RAX],
    Mov_RAXOq => [RAX, OQ],
    Mov_RdCR0 => [ED, CD],
    Mov_RdCR2 => [ED, CD],
    Mov_RdCR3 => [ED, CD],
    Mov_RdCR4 => [ED, CD],
    Mov_RdDd => [ED, DD],
    Mov_RdTd => [ED, DD],
    Mov_RqCR0 => [EQ, CQ],
    Mov_RqCR2 => [EQ, CQ],
    Mov_RqCR3 => [EQ, CQ],
    Mov_RqCR4 => [EQ, CQ],
    Mov_RqDq => [EQ, DQ],
    Mov_RRXIq => [EQ, IQ],
    Mov_SwEw => [SW, EW],
    Mov_TdRd => [DD, ED],
    Movapd_VpdWpd => [VPD, WPD],
    Movapd_WpdVpd => [WPD, VPD],
    Movaps_VpsWps => [VPS, WPS],
    Movaps_WpsVps => [WPS, VPS],
    Movbe_GdMd => [GD, ED],
    Movbe_GqMq => [GQ, EQ],
    Movbe_GwMw => [GW, EW],
    Movbe_MdGd => [ED, GD],
    Movbe_MqGq => [EQ, GQ],
    Movbe_MwGw => [EW, GW],
    Movd_EdPq => [ED, PQ],
    Movd_EdVd => [ED, VD],
    Movd_PqEd => [PQ, ED],
    Movd_VdqEd => [VDQ, ED],
    Movddup_VpdWq => [VPD, WQ],
    Movdq2q_PqUdq => [PQ, UDQ],
    Movdqa_VdqWdq => [VDQ, WDQ],
    Movdqa_WdqVdq => [WDQ, VDQ],
    Movdqu_VdqWdq => [VDQ, WDQ],
    Movdqu_WdqVdq => [WDQ, VDQ],
    Movhlps_VpsWps => [VPS, WPS],
    Movhpd_MqVsd => [EQ, VSD],
    Movhpd_VsdMq => [VSD, EQ],
    Movhps_MqVps => [EQ, VPS],
    Movhps_VpsMq => [VPS, EQ],
    Movlhps_VpsWps => [VPS, WPS],
    Movlpd_MqVsd => [EQ, VSD],
    Movlpd_VsdMq => [VSD, EQ],
    Movlps_MqVps => [EQ, VPS],
    Movlps_VpsMq => [VPS, EQ],
    Movmskpd_GdUpd => [GD, UPD],
    Movmskps_GdUps => [GD, UPS],
    Movntdq_MdqVdq => [MDQ, VDQ],
    Movntdqa_VdqMdq => [VDQ, MDQ],
    Movnti_MqGq => [EQ, GQ],
    Movnti_Op32_MdGd => [ED, GD],
    Movnti_Op64_MdGd => [ED, GD],
    Movntpd_MpdVpd => [MDQ, VPD],
    Movntps_MpsVps => [MDQ, VPS],
    Movntq_MqPq => [EQ, PQ],
    Movntsd_MsdVsd => [WSD, VSD],
    Movntss_MssVss => [WSS, VSS],
    Movq2dq_VdqQq => [VDQ, QQ],
    Movq_EqPq => [EQ, PQ],
    Movq_EqVq => [EQ, VQ],
    Movq_PqEq => [PQ, EQ],
    Movq_PqQq => [PQ, QQ],
    Movq_QqPq => [QQ, PQ],
    Movq_VdqEq => [VDQ, EQ],
    Movq_VqWq => [VQ, WQ],
    Movq_WqVq => [WQ, VQ],
    Movsd_VsdWsd => [VSD, WSD],
    Movsd_WsdVsd => [WSD, VSD],
    Movshdup_VpsWps => [VPS, WPS],
    Movsldup_VpsWps => [VPS, WPS],
    Movss_VssWss => [VSS, WSS],
    Movss_WssVss => [WSS, VSS],
    Movsx_GdEb => [GD, EB],
    Movsx_GdEw => [GD, EW],
    Movsx_GqEb => [GQ, EB],
    Movsx_GqEw => [GQ, EW],
    Movsx_GwEb => [GW, EB],
    Movsxd_GqEd => [GQ, ED],
    Movupd_VpdWpd => [VPD, WPD],
    Movupd_WpdVpd => [WPD, VPD],
    Movups_VpsWps => [VPS, WPS],
    Movups_WpsVps => [WPS, VPS],
    Movzx_GdEb => [GD, EB],
    Movzx_GdEw => [GD, EW],
    Movzx_GqEb => [GQ, EB],
    Movzx_GqEw => [GQ, EW],
    Movzx_GwEb => [GW, EB],
    Mpsadbw_VdqWdqIb => [VDQ, WDQ, IB],
    Mul_ALEb => [AL, EB],
    Mul_AXEw => [AX, EW],
    Mul_EAXEd => [EAX, ED],
    Mul_RAXEq => [RAX, EQ],
    Mulpd_VpdWpd => [VPD, WPD],
    Mulps_VpsWps => [VPS, WPS],
    Mulsd_VsdWsd => [VSD, WSD],
    Mulss_VssWss => [VSS, WSS],
    Mulx_GdBdEd => [GD, BD, ED],
    Mulx_GqBqEq => [GQ, BQ, EQ],
    Mwait => [],
    Mwaitx => [],
    Neg_Eb : lockable => [EB],
    Neg_Ed : lockable => [ED],
    Neg_Eq : lockable => [EQ],
    Neg_Ew : lockable => [EW],
    Nop => [],
    Not_Eb : lockable => [EB],
    Not_Ed : lockable => [ED],
    Not_Eq : lockable => [EQ],
    Not_Ew : lockable => [EW],
    Or_ALIb => [AL, IB],
    Or_AXIw => [AX, IW],
    Or_EAXId => [EAX, ID],
    Or_EbGb : lockable => [EB, GB],
    Or_EbIb : lockable => [EB, IB],
    Or_EdGd : lockable => [ED, GD],
    Or_EdId : lockable => [ED, ID],
    Or_EdsIb : lockable => [ED, SIBD],
    Or_EqGq : lockable => [EQ, GQ],
    Or_EqId : lockable => [EQ, ID],
    Or_EqsIb : lockable => [EQ, SIBD],
    Or_EwGw : lockable => [EW, GW],
    Or_EwIw : lockable => [EW, IW],
    Or_EwsIb : lockable => [EW, SIBW],
    Or_GbEb => [GB, EB],
    Or_GdEd => [GD, ED],
    Or_GqEq => [GQ, EQ],
    Or_GwEw => [GW, EW],
    Or_RAXId => [RAX, ID],
    Orpd_VpdWpd => [VPD, WPD],
    Orps_VpsWps => [VPS, WPS],
    Out_DXAL => [DX, AL],
    Out_DXAX => [DX, AX],
    Out_DXEAX => [DX, EAX],
    Out_IbAL => [IB, AL],
    Out_IbAX => [IB, AX],
    Out_IbEAX => [IB, EAX],
    Pabsb_PqQq => [PQ, QQ],
    Pabsb_VdqWdq => [VDQ, WDQ],
    Pabsd_PqQq => [PQ, QQ],
    Pabsd_VdqWdq => [VDQ, WDQ],
    Pabsw_PqQq => [PQ, QQ],
    Pabsw_VdqWdq => [VDQ, WDQ],
    Packssdw_PqQq => [PQ, QQ],
    Packssdw_VdqWdq => [VDQ, WDQ],
    Packsswb_PqQq => [PQ, QQ],
    Packsswb_VdqWdq => [VDQ, WDQ],
    Packusdw_VdqWdq => [VDQ, WDQ],
    Packuswb_PqQq => [PQ, QQ],
    Packuswb_VdqWdq => [VDQ, WDQ],
    Paddb_PqQq => [PQ, QQ],
    Paddb_VdqWdq => [VDQ, WDQ],
    Paddd_PqQq => [PQ, QQ],
    Paddd_VdqWdq => [VDQ, WDQ],
    Paddq_PqQq => [PQ, QQ],
    Paddq_VdqWdq => [VDQ, WDQ],
    Paddsb_PqQq => [PQ, QQ],
    Paddsb_VdqWdq => [VDQ, WDQ],
    Paddsw_PqQq => [PQ, QQ],
    Paddsw_VdqWdq => [VDQ, WDQ],
    Paddusb_PqQq => [PQ, QQ],
    Paddusb_VdqWdq => [VDQ, WDQ],
    Paddusw_PqQq => [PQ, QQ],
    Paddusw_VdqWdq => [VDQ, WDQ],
    Paddw_PqQq => [PQ, QQ],
    Paddw_VdqWdq => [VDQ, WDQ],
    Palignr_PqQqIb => [PQ, QQ, IB],
    Palignr_VdqWdqIb => [VDQ, WDQ, IB],
    Pand_PqQq => [PQ, QQ],
    Pand_VdqWdq => [VDQ, WDQ],
    Pandn_PqQq => [PQ, QQ],
    Pandn_VdqWdq => [VDQ, WDQ],
    Pause => [],
    Pavgb_PqQq => [PQ, QQ],
    Pavgb_VdqWdq => [VDQ, WDQ],
    Pavgusb_PqQq => [PQ, QQ],
    Pavgw_PqQq => [PQ, QQ],
    Pavgw_VdqWdq => [VDQ, WDQ],
    Pblendvb_VdqWdq => [VDQ, WDQ],
    Pblendw_VdqWdqIb => [VDQ, WDQ, IB],
    Pclmulqdq_VdqWdqIb => [VDQ, WDQ, IB],
    Pcmpeqb_PqQq => [PQ, QQ],
    Pcmpeqb_VdqWdq => [VDQ, WDQ],
    Pcmpeqd_PqQq => [PQ, QQ],
    Pcmpeqd_VdqWdq => [VDQ, WDQ],
    Pcmpeqq_VdqWdq => [VDQ, WDQ],
    Pcmpeqw_PqQq => [PQ, QQ],
    Pcmpeqw_VdqWdq => [VDQ, WDQ],
    Pcmpestri_VdqWdqIb => [VDQ, WDQ, IB],
    Pcmpestrm_VdqWdqIb => [VDQ, WDQ, IB],
    Pcmpgtb_PqQq => [PQ, QQ],
    Pcmpgtb_VdqWdq => [VDQ, WDQ],
    Pcmpgtd_PqQq => [PQ, QQ],
    Pcmpgtd_VdqWdq => [VDQ, WDQ],
    Pcmpgtq_VdqWdq => [VDQ, WDQ],
    Pcmpgtw_PqQq => [PQ, QQ],
    Pcmpgtw_VdqWdq => [VDQ, WDQ],
    Pcmpistri_VdqWdqIb => [VDQ, WDQ, IB],
    Pcmpistrm_VdqWdqIb => [VDQ, WDQ, IB],
    Pdep_GdBdEd => [GD, BD, ED],
    Pdep_GqBqEq => [GQ, BQ, EQ],
    Pext_GdBdEd => [GD, BD, ED],
    Pext_GqBqEq => [GQ, BQ, EQ],
    Pextrb_EbdVdqIb => [EBD, VDQ, IB],
    Pextrd_EdVdqIb => [ED, VDQ, IB],
    Pextrq_EqVdqIb => [EQ, VDQ, IB],
    Pextrw_EwdVdqIb => [EWD, VDQ, IB],
    Pextrw_GdNqIb => [GD, NQ, IB],
    Pextrw_GdUdqIb => [GD, UDQ, IB],
    Pf2id_PqQq => [PQ, QQ],
    Pf2iw_PqQq => [PQ, QQ],
    Pfacc_PqQq => [PQ, QQ],
    Pfadd_PqQq => [PQ, QQ],
    Pfcmpeq_PqQq => [PQ, QQ],
    Pfcmpge_PqQq => [PQ, QQ],
    Pfcmpgt_PqQq => [PQ, QQ],
    Pfmax_PqQq => [PQ, QQ],
    Pfmin_PqQq => [PQ, QQ],
    Pfmul_PqQq => [PQ, QQ],
    Pfnacc_PqQq => [PQ, QQ],
    Pfpnacc_PqQq => [PQ, QQ],
    Pfrcp_PqQq => [PQ, QQ],
    Pfrcpit1_PqQq => [PQ, QQ],
    Pfrcpit2_PqQq => [PQ, QQ],
    Pfrsqit1_PqQq => [PQ, QQ],
    Pfrsqrt_PqQq => [PQ, QQ],
    Pfsub_PqQq => [PQ, QQ],
    Pfsubr_PqQq => [PQ, QQ],
    Phaddd_PqQq => [PQ, QQ],
    Phaddd_VdqWdq => [VDQ, WDQ],
    Phaddsw_PqQq => [PQ, QQ],
    Phaddsw_VdqWdq => [VDQ, WDQ],
    Phaddw_PqQq => [PQ, QQ],
    Phaddw_VdqWdq => [VDQ, WDQ],
    Phminposuw_VdqWdq => [VDQ, WDQ],
    Phsubd_PqQq => [PQ, QQ],
    Phsubd_VdqWdq => [VDQ, WDQ],
    Phsubsw_PqQq => [PQ, QQ],
    Phsubsw_VdqWdq => [VDQ, WDQ],
    Phsubw_PqQq => [PQ, QQ],
    Phsubw_VdqWdq => [VDQ, WDQ],
    Pi2fd_PqQq => [PQ, QQ],
    Pi2fw_PqQq => [PQ, QQ],
    Pinsrb_VdqEbIb => [VDQ, EB, IB],
    Pinsrd_VdqEdIb => [VDQ, ED, IB],
    Pinsrq_VdqEqIb => [VDQ, EQ, IB],
    Pinsrw_PqEwIb => [PQ, EW, IB],
    Pinsrw_VdqEwIb => [VDQ, EW, IB],
    Pmaddubsw_PqQq => [PQ, QQ],
    Pmaddubsw_VdqWdq => [VDQ, WDQ],
    Pmaddwd_PqQq => [PQ, QQ],
    Pmaddwd_VdqWdq => [VDQ, WDQ],
    Pmaxsb_VdqWdq => [VDQ, WDQ],
    Pmaxsd_VdqWdq => [VDQ, WDQ],
    Pmaxsw_PqQq => [PQ, QQ],
    Pmaxsw_VdqWdq => [VDQ, WDQ],
    Pmaxub_PqQq => [PQ, QQ],
    Pmaxub_VdqWdq => [VDQ, WDQ],
    Pmaxud_VdqWdq => [VDQ, WDQ],
    Pmaxuw_VdqWdq => [VDQ, WDQ],
    Pminsb_VdqWdq => [VDQ, WDQ],
    Pminsd_VdqWdq => [VDQ, WDQ],
    Pminsw_PqQq => [PQ, QQ],
    Pminsw_VdqWdq => [VDQ, WDQ],
    Pminub_PqQq => [PQ, QQ],
    Pminub_VdqWdq => [VDQ, WDQ],
    Pminud_VdqWdq => [VDQ, WDQ],
    Pminuw_VdqWdq => [VDQ, WDQ],
    Pmovmskb_GdNq => [GD, NQ],
    Pmovmskb_GdUdq => [GD, UDQ],
    Pmovsxbd_VdqWd => [VDQ, WD],
    Pmovsxbq_VdqWw => [VDQ, WW],
    Pmovsxbw_VdqWq => [VDQ, WQ],
    Pmovsxdq_VdqWq => [VDQ, WQ],
    Pmovsxwd_VdqWq => [VDQ, WQ],
    Pmovsxwq_VdqWd => [VDQ, WD],
    Pmovzxbd_VdqWd => [VDQ, WD],
    Pmovzxbq_VdqWw => [VDQ, WW],
    Pmovzxbw_VdqWq => [VDQ, WQ],
    Pmovzxdq_VdqWq => [VDQ, WQ],
    Pmovzxwd_VdqWq => [VDQ, WQ],
    Pmovzxwq_VdqWd => [VDQ, WD],
    Pmuldq_VdqWdq => [VDQ, WDQ],
    Pmulhrsw_PqQq => [PQ, QQ],
    Pmulhrsw_VdqWdq => [VDQ, WDQ],
    Pmulhrw_PqQq => [PQ, QQ],
    Pmulhuw_PqQq => [PQ, QQ],
    Pmulhuw_VdqWdq => [VDQ, WDQ],
    Pmulhw_PqQq => [PQ, QQ],
    Pmulhw_VdqWdq => [VDQ, WDQ],
    Pmulld_VdqWdq => [VDQ, WDQ],
    Pmullw_PqQq => [PQ, QQ],
    Pmullw_VdqWdq => [VDQ, WDQ],
    Pmuludq_PqQq => [PQ, QQ],
    Pmuludq_VdqWdq => [VDQ, WDQ],
    Pop_Ed => [ED],
    Pop_Eq => [EQ],
    Pop_Ew => [EW],
    Pop_Op16_Sw => [SW],
    Pop_Op32_Sw => [SW],
    Pop_Op64_Sw => [SW],
    Popa_Op16 => [],
    Popa_Op32 => [],
    Popcnt_GdEd => [GD, ED],
    Popcnt_GqEq => [GQ, EQ],
    Popcnt_GwEw => [GW, EW],
    Popf_Fd => [],
    Popf_Fq => [],
    Popf_Fw => [],
    Por_PqQq => [PQ, QQ],
    Por_VdqWdq => [VDQ, WDQ],
    Prefetch_Mb => [EB],
    Prefetchnta_Mb => [EB],
    Prefetcht0_Mb => [EB],
    Prefetcht1_Mb => [EB],
    Prefetcht2_Mb => [EB],
    Prefetchw_Mb => [EB],
    Psadbw_PqQq => [PQ, QQ],
    Psadbw_VdqWdq => [VDQ, WDQ],
    Pshufb_PqQq => [PQ, QQ],
    Pshufb_VdqWdq => [VDQ, WDQ],
    Pshufd_VdqWdqIb => [VDQ, WDQ, IB],
    Pshufhw_VdqWdqIb => [VDQ, WDQ, IB],
    Pshuflw_VdqWdqIb => [VDQ, WDQ, IB],
    Pshufw_PqQqIb => [PQ, QQ, IB],
    Psignb_PqQq => [PQ, QQ],
    Psignb_VdqWdq => [VDQ, WDQ],
    Psignd_PqQq => [PQ, QQ],
    Psignd_VdqWdq => [VDQ, WDQ],
    Psignw_PqQq => [PQ, QQ],
    Psignw_VdqWdq => [VDQ, WDQ],
    Pslld_NqIb => [NQ, IB],
    Pslld_PqQq => [PQ, QQ],
    Pslld_UdqIb => [UDQ, IB],
    Pslld_VdqWdq => [VDQ, WDQ],
    Pslldq_UdqIb => [UDQ, IB],
    Psllq_NqIb => [NQ, IB],
    Psllq_PqQq => [PQ, QQ],
    Psllq_UdqIb => [UDQ, IB],
    Psllq_VdqWdq => [VDQ, WDQ],
    Psllw_NqIb => [NQ, IB],
    Psllw_PqQq => [PQ, QQ],
    Psllw_UdqIb => [UDQ, IB],
    Psllw_VdqWdq => [VDQ, WDQ],
    Psrad_NqIb => [NQ, IB],
    Psrad_PqQq => [PQ, QQ],
    Psrad_UdqIb => [UDQ, IB],
    Psrad_VdqWdq => [VDQ, WDQ],
    Psraw_NqIb => [NQ, IB],
    Psraw_PqQq => [PQ, QQ],
    Psraw_UdqIb => [UDQ, IB],
    Psraw_VdqWdq => [VDQ, WDQ],
    Psrld_NqIb => [NQ, IB],
    Psrld_PqQq => [PQ, QQ],
    Psrld_UdqIb => [UDQ, IB],
    Psrld_VdqWdq => [VDQ, WDQ],
    Psrldq_UdqIb => [UDQ, IB],
    Psrlq_NqIb => [NQ, IB],
    Psrlq_PqQq => [PQ, QQ],
    Psrlq_UdqIb => [UDQ, IB],
    Psrlq_VdqWdq => [VDQ, WDQ],
    Psrlw_NqIb => [NQ, IB],
    Psrlw_PqQq => [PQ, QQ],
    Psrlw_UdqIb => [UDQ, IB],
    Psrlw_VdqWdq => [VDQ, WDQ],
    Psubb_PqQq => [PQ, QQ],
    Psubb_VdqWdq => [VDQ, WDQ],
    Psubd_PqQq => [PQ, QQ],
    Psubd_VdqWdq => [VDQ, WDQ],
    Psubq_PqQq => [PQ, QQ],
    Psubq_VdqWdq => [VDQ, WDQ],
    Psubsb_PqQq => [PQ, QQ],
    Psubsb_VdqWdq => [VDQ, WDQ],
    Psubsw_PqQq => [PQ, QQ],
    Psubsw_VdqWdq => [VDQ, WDQ],
    Psubusb_PqQq => [PQ, QQ],
    Psubusb_VdqWdq => [VDQ, WDQ],
    Psubusw_PqQq => [PQ, QQ],
    Psubusw_VdqWdq => [VDQ, WDQ],
    Psubw_PqQq => [PQ, QQ],
    Psubw_VdqWdq => [VDQ, WDQ],
    Pswapd_PqQq => [PQ, QQ],
    Ptest_VdqWdq => [VDQ, WDQ],
    Punpckhbw_PqQq => [PQ, QQ],
    Punpckhbw_VdqWdq => [VDQ, WDQ],
    Punpckhdq_PqQq => [PQ, QQ],
    Punpckhdq_VdqWdq => [VDQ, WDQ],
    Punpckhqdq_VdqWdq => [VDQ, WDQ],
    Punpckhwd_PqQq => [PQ, QQ],
    Punpckhwd_VdqWdq => [VDQ, WDQ],
    Punpcklbw_PqQd => [PQ, QD],
    Punpcklbw_VdqWdq => [VDQ, WDQ],
    Punpckldq_PqQd => [PQ, QD],
    Punpckldq_VdqWdq => [VDQ, WDQ],
    Punpcklqdq_VdqWdq => [VDQ, WDQ],
    Punpcklwd_PqQd => [PQ, QD],
    Punpcklwd_VdqWdq => [VDQ, WDQ],
    Push_Ed => [ED],
    Push_Eq => [EQ],
    Push_Ew => [EW],
    Push_Id => [ID],
    Push_Iw => [IW],
    Push_Op16_Sw => [SW],
    Push_Op32_Sw => [SW],
    Push_Op64_Id => [ID],
    Push_Op64_sIb => [SIBD],
    Push_Op64_Sw => [SW],
    Push_sIb16 => [SIBW],
    Push_sIb32 => [SIBD],
    Pusha_Op16 => [],
    Pusha_Op32 => [],
    Pushf_Fd => [],
    Pushf_Fq => [],
    Pushf_Fw => [],
    Pxor_PqQq => [PQ, QQ],
    Pxor_VdqWdq => [VDQ, WDQ],
    Rcl_Eb => [EB, CL],
    Rcl_EbI1 => [EB, I1],
    Rcl_EbIb => [EB, IB],
    Rcl_Ed => [ED, CL],
    Rcl_EdI1 => [ED, I1],
    Rcl_EdIb => [ED, IB],
    Rcl_Eq => [EQ, CL],
    Rcl_EqI1 => [EQ, I1],
    Rcl_EqIb => [EQ, IB],
    Rcl_Ew => [EW, CL],
    Rcl_EwI1 => [EW, I1],
    Rcl_EwIb => [EW, IB],
    Rcpps_VpsWps => [VPS, WPS],
    Rcpss_VssWss => [VSS, WSS],
    Rcr_Eb => [EB, CL],
    Rcr_EbI1 => [EB, I1],
    Rcr_EbIb => [EB, IB],
    Rcr_Ed => [ED, CL],
    Rcr_EdI1 => [ED, I1],
    Rcr_EdIb => [ED, IB],
    Rcr_Eq => [EQ, CL],
    Rcr_EqI1 => [EQ, I1],
    Rcr_EqIb => [EQ, IB],
    Rcr_Ew => [EW, CL],
    Rcr_EwI1 => [EW, I1],
    Rcr_EwIb => [EW, IB],
    Rdfsbase_Ed => [ED],
    Rdfsbase_Eq => [EQ],
    Rdgsbase_Ed => [ED],
    Rdgsbase_Eq => [EQ],
    Rdmsr => [],
    Rdpid_Ed => [ED],
    Rdpkru => [],
    Rdpmc => [],
    Rdrand_Ed => [ED],
    Rdrand_Eq => [EQ],
    Rdrand_Ew => [EW],
    Rdseed_Ed => [ED],
    Rdseed_Eq => [EQ],
    Rdseed_Ew => [EW],
    Rdsspd => [],
    Rdsspq => [],
    Rdtsc => [],
    Rdtscp => [],
    RepCmpsb_XbYb => [XB, YB],
    RepCmpsd_XdYd => [XD, YD],
    RepCmpsq_XqYq => [XQ, YQ],
    RepCmpsw_XwYw => [XW, YW],
    RepInsb_YbDX => [YB, DX],
    RepInsd_YdDX => [YD, DX],
    RepInsw_YwDX => [YW, DX],
    RepLodsb_ALXb => [AL, XB],
    RepLodsd_EAXXd => [EAX, XD],
    RepLodsq_RAXXq => [RAX, XQ],
    RepLodsw_AXXw => [AX, XW],
    RepMovsb_YbXb => [YB, XB],
    RepMovsd_YdXd => [YD, XD],
    RepMovsq_YqXq => [YQ, XQ],
    RepMovsw_YwXw => [YW, XW],
    RepOutsb_DXXb => [DX, XB],
    RepOutsd_DXXd => [DX, XD],
    RepOutsw_DXXw => [DX, XW],
    RepScasb_ALYb => [AL, YB],
    RepScasd_EAXYd => [EAX, YD],
    RepScasq_RAXYq => [RAX, YQ],
    RepScasw_AXYw => [AX, YW],
    RepStosb_YbAL => [YB, AL],
    RepStosd_YdEAX => [YD, EAX],
    RepStosq_YqRAX => [YQ, RAX],
    RepStosw_YwAX => [YW, AX],
    Ret_Op16 => [],
    Ret_Op16_Iw => [IW],
    Ret_Op32 => [],
    Ret_Op32_Iw => [IW],
    Ret_Op64 => [],
    Ret_Op64_Iw => [IW],
    Retf_Op16 => [],
    Retf_Op16_Iw => [IW],
    Retf_Op32 => [],
    Retf_Op32_Iw => [IW],
    Retf_Op64 => [],
    Retf_Op64_Iw => [IW],
    Rol_Eb => [EB, CL],
    Rol_EbI1 => [EB, I1],
    Rol_EbIb => [EB, IB],
    Rol_Ed => [ED, CL],
    Rol_EdI1 => [ED, I1],
    Rol_EdIb => [ED, IB],
    Rol_Eq => [EQ, CL],
    Rol_EqI1 => [EQ, I1],
    Rol_EqIb => [EQ, IB],
    Rol_Ew => [EW, CL],
    Rol_EwI1 => [EW, I1],
    Rol_EwIb => [EW, IB],
    Ror_Eb => [EB, CL],
    Ror_EbI1 => [EB, I1],
    Ror_EbIb => [EB, IB],
    Ror_Ed => [ED, CL],
    Ror_EdI1 => [ED, I1],
    Ror_EdIb => [ED, IB],
    Ror_Eq => [EQ, CL],
    Ror_EqI1 => [EQ, I1],
    Ror_EqIb => [EQ, IB],
    Ror_Ew => [EW, CL],
    Ror_EwI1 => [EW, I1],
    Ror_EwIb => [EW, IB],
    Roundpd_VpdWpdIb => [VPD, WPD, IB],
    Roundps_VpsWpsIb => [VPS, WPS, IB],
    Roundsd_VsdWsdIb => [VSD, WSD, IB],
    Roundss_VssWssIb => [VSS, WSS, IB],
    Rsm => [],
    Rsqrtps_VpsWps => [VPS, WPS],
    Rsqrtss_VssWss => [VSS, WSS],
    Rstorssp => [],
    Sahf => [],
    SahfLm => [],
    Salc => [],
    Sar_Eb => [EB, CL],
    Sar_EbI1 => [EB, I1],
    Sar_EbIb => [EB, IB],
    Sar_Ed => [ED, CL],
    Sar_EdI1 => [ED, I1],
    Sar_EdIb => [ED, IB],
    Sar_Eq => [EQ, CL],
    Sar_EqI1 => [EQ, I1],
    Sar_EqIb => [EQ, IB],
    Sar_Ew => [EW, CL],
    Sar_EwI1 => [EW, I1],
    Sar_EwIb => [EW, IB],
    Sarx_GdEdBd => [GD, ED, BD],
    Sarx_GqEqBq => [GQ, EQ, BQ],
    Saveprevssp => [],
    Sbb_ALIb => [AL, IB],
    Sbb_AXIw => [AX, IW],
    Sbb_EAXId => [EAX, ID],
    Sbb_EbGb : lockable => [EB, GB],
    Sbb_EbIb : lockable => [EB, IB],
    Sbb_EdGd : lockable => [ED, GD],
    Sbb_EdId : lockable => [ED, ID],
    Sbb_EdsIb : lockable => [ED, SIBD],
    Sbb_EqGq : lockable => [EQ, GQ],
    Sbb_EqId : lockable => [EQ, ID],
    Sbb_EqsIb : lockable => [EQ, SIBD],
    Sbb_EwGw : lockable => [EW, GW],
    Sbb_EwIw : lockable => [EW, IW],
    Sbb_EwsIb : lockable => [EW, SIBW],
    Sbb_GbEb => [GB, EB],
    Sbb_GdEd => [GD, ED],
    Sbb_GqEq => [GQ, EQ],
    Sbb_GwEw => [GW, EW],
    Sbb_RAXId => [RAX, ID],
    Setb_Eb => [EB],
    Setbe_Eb => [EB],
    Setl_Eb => [EB],
    Setle_Eb => [EB],
    Setnb_Eb => [EB],
    Setnbe_Eb => [EB],
    Setnl_Eb => [EB],
    Setnle_Eb => [EB],
    Setno_Eb => [EB],
    Setnp_Eb => [EB],
    Setns_Eb => [EB],
    Setnz_Eb => [EB],
    Seto_Eb => [EB],
    Setp_Eb => [EB],
    Sets_Eb => [EB],
    Setssbsy => [],
    Setz_Eb => [EB],
    Sfence => [],
    Sgdt_Ms => [M],
    Sgdt_Op64_Ms => [M],
    Sha1msg1_VdqWdq => [VDQ, WDQ],
    Sha1msg2_VdqWdq => [VDQ, WDQ],
    Sha1nexte_VdqWdq => [VDQ, WDQ],
    Sha1rnds4_VdqWdqIb => [VDQ, WDQ, IB],
    Sha256msg1_VdqWdq => [VDQ, WDQ],
    Sha256msg2_VdqWdq => [VDQ, WDQ],
    Sha256rnds2_VdqWdq => [VDQ, WDQ],
    Shl_Eb => [EB, CL],
    Shl_EbI1 => [EB, I1],
    Shl_EbIb => [EB, IB],
    Shl_Ed => [ED, CL],
    Shl_EdI1 => [ED, I1],
    Shl_EdIb => [ED, IB],
    Shl_Eq => [EQ, CL],
    Shl_EqI1 => [EQ, I1],
    Shl_EqIb => [EQ, IB],
    Shl_Ew => [EW, CL],
    Shl_EwI1 => [EW, I1],
    Shl_EwIb => [EW, IB],
    Shld_EdGd => [ED, GD, CL],
    Shld_EdGdIb => [ED, GD, IB],
    Shld_EqGq => [EQ, GQ, CL],
    Shld_EqGqIb => [EQ, GQ, IB],
    Shld_EwGw => [EW, GW, CL],
    Shld_EwGwIb => [EW, GW, IB],
    Shlx_GdEdBd => [GD, ED, BD],
    Shlx_GqEqBq => [GQ, EQ, BQ],
    Shr_Eb => [EB, CL],
    Shr_EbI1 => [EB, I1],
    Shr_EbIb => [EB, IB],
    Shr_Ed => [ED, CL],
    Shr_EdI1 => [ED, I1],
    Shr_EdIb => [ED, IB],
    Shr_Eq => [EQ, CL],
    Shr_EqI1 => [EQ, I1],
    Shr_EqIb => [EQ, IB],
    Shr_Ew => [EW, CL],
    Shr_EwI1 => [EW, I1],
    Shr_EwIb => [EW, IB],
    Shrd_EdGd => [ED, GD, CL],
    Shrd_EdGdIb => [ED, GD, IB],
    Shrd_EqGq => [EQ, GQ, CL],
    Shrd_EqGqIb => [EQ, GQ, IB],
    Shrd_EwGw => [EW, GW, CL],
    Shrd_EwGwIb => [EW, GW, IB],
    Shrx_GdEdBd => [GD, ED, BD],
    Shrx_GqEqBq => [GQ, EQ, BQ],
    Shufpd_VpdWpdIb => [VPD, WPD, IB],
    Shufps_VpsWpsIb => [VPS, WPS, IB],
    Sidt_Ms => [M],
    Sidt_Op64_Ms => [M],
    Skinit => [],
    Sldt_Ew => [EW],
    Smsw_Ew => [EW],
    Sqrtpd_VpdWpd => [VPD, WPD],
    Sqrtps_VpsWps => [VPS, WPS],
    Sqrtsd_VsdWsd => [VSD, WSD],
    Sqrtss_VssWss => [VSS, WSS],
    Stac => [],
    Stc => [],
    Std => [],
    Stgi => [],
    Sti => [],
    Stmxcsr => [ED],
    Str_Ew => [EW],
    Sub_ALIb => [AL, IB],
    Sub_AXIw => [AX, IW],
    Sub_EAXId => [EAX, ID],
    Sub_EbGb : lockable => [EB, GB],
    Sub_EbIb : lockable => [EB, IB],
    Sub_EdGd : lockable => [ED, GD],
    Sub_EdGd_ZeroIdiom => [ED, GD],
    Sub_EdId : lockable => [ED, ID],
    Sub_EdsIb : lockable => [ED, SIBD],
    Sub_EqGq : lockable => [EQ, GQ],
    Sub_EqGq_ZeroIdiom => [EQ, GQ],
    Sub_EqId : lockable => [EQ, ID],
    Sub_EqsIb : lockable => [EQ, SIBD],
    Sub_EwGw : lockable => [EW, GW],
    Sub_EwGw_ZeroIdiom => [EW, GW],
    Sub_EwIw : lockable => [EW, IW],
    Sub_EwsIb : lockable => [EW, SIBW],
    Sub_GbEb => [GB, EB],
    Sub_GdEd => [GD, ED],
    Sub_GdEd_ZeroIdiom => [GD, ED],
    Sub_GqEq => [GQ, EQ],
    Sub_GqEq_ZeroIdiom => [GQ, EQ],
    Sub_GwEw => [GW, EW],
    Sub_GwEw_ZeroIdiom => [GW, EW],
    Sub_RAXId => [RAX, ID],
    Subpd_VpdWpd => [VPD, WPD],
    Subps_VpsWps => [VPS, WPS],
    Subsd_VsdWsd => [VSD, WSD],
    Subss_VssWss => [VSS, WSS],
    Swapgs => [],
    Syscall => [],
    SyscallLegacy => [],
    Sysenter => [],
    Sysexit => [],
    Sysret => [],
    SysretLegacy => [],
    T1mskc_BdEd => [BD, ED],
    T1mskc_BqEq => [BQ, EQ],
    Test_ALIb => [AL, IB],
    Test_AXIw => [AX, IW],
    Test_EAXId => [EAX, ID],
    Test_EbGb => [EB, GB],
    Test_EbIb => [EB, IB],
    Test_EdGd => [ED, GD],
    Test_EdId => [ED, ID],
    Test_EqGq => [EQ, GQ],
    Test_EqId => [EQ, ID],
    Test_EwGw => [EW, GW],
    Test_EwIw => [EW, IW],
    Test_RAXId => [RAX, ID],
    Tzcnt_GdEd => [GD, ED],
    Tzcnt_GqEq => [GQ, EQ],
    Tzcnt_GwEw => [GW, EW],
    Tzmsk_BdEd => [BD, ED],
    Tzmsk_BqEq => [BQ, EQ],
    Ucomisd_VsdWsd => [VSD, WSD],
    Ucomiss_VssWss => [VSS, WSS],
    Ud0 => [],
    Ud1 => [],
    Ud2 => [],
    Unpckhpd_VpdWdq => [VPD, WDQ],
    Unpckhps_VpsWdq => [VPS, WDQ],
    Unpcklpd_VpdWdq => [VPD, WDQ],
    Unpcklps_VpsWdq => [VPS, WDQ],
    V128_Vmovapd_WpdVpd => [WPD, VPD],
    V128_Vmovaps_WpsVps => [WPS, VPS],
    V128_Vmovd_EdVd => [ED, VD],
    V128_Vmovd_VdqEd => [VDQ, ED],
    V128_Vmovddup_VpdWpd => [VPD, WPD],
    V128_Vmovhlps_VpsHpsWps => [VPS, HPS, WPS],
    V128_Vmovlpd_MqVsd => [EQ, VSD],
    V128_Vmovlpd_VpdHpdMq => [VPD, HPD, EQ],
    V128_Vmovlps_MqVps => [EQ, VPS],
    V128_Vmovlps_VpsHpsMq => [VPS, HPS, EQ],
    V128_Vmovq_EqVq => [EQ, VQ],
    V128_Vmovq_VdqEq => [VDQ, EQ],
    V128_Vmovsd_VsdHpdWsd => [VSD, HPD, WSD],
    V128_Vmovsd_VsdWsd => [VSD, WSD],
    V128_Vmovsd_WsdHpdVsd => [WSD, HPD, VSD],
    V128_Vmovsd_WsdVsd => [WSD, VSD],
    V128_Vmovss_VssHpsWss => [VSS, HPS, WSS],
    V128_Vmovss_VssWss => [VSS, WSS],
    V128_Vmovss_WssHpsVss => [WSS, HPS, VSS],
    V128_Vmovss_WssVss => [WSS, VSS],
    V128_Vmovupd_WpdVpd => [WPD, VPD],
    V128_Vmovups_WpsVps => [WPS, VPS],
    V128_Vpalignr_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    V128_Vpblendvb_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    V128_Vpextrw_GdUdqIb => [GD, UDQ, IB],
    V128_Vpinsrb_VdqEbIb => [VDQ, EB, IB],
    V128_Vpinsrw_VdqEwIb => [VDQ, EW, IB],
    V128_Vpshufb_VdqHdqWdq => [VDQ, HDQ, WDQ],
    V128_Vpshufd_VdqWdqIb => [VDQ, WDQ, IB],
    V128_Vpshufhw_VdqWdqIb => [VDQ, WDQ, IB],
    V128_Vpshuflw_VdqWdqIb => [VDQ, WDQ, IB],
    V128_Vpslld_UdqIb => [UDQ, IB],
    V128_Vpslldq_UdqIb => [UDQ, IB],
    V128_Vpsllq_UdqIb => [UDQ, IB],
    V128_Vpsllw_UdqIb => [UDQ, IB],
    V128_Vpsrad_UdqIb => [UDQ, IB],
    V128_Vpsraw_UdqIb => [UDQ, IB],
    V128_Vpsrld_UdqIb => [UDQ, IB],
    V128_Vpsrldq_UdqIb => [UDQ, IB],
    V128_Vpsrlq_UdqIb => [UDQ, IB],
    V128_Vpsrlw_UdqIb => [UDQ, IB],
    V128_Vpxor_VdqHdqWdq => [VDQ, HDQ, WDQ],
    V256_Vbroadcastsd_VpdMsd => [VPD, WSD],
    V256_Vbroadcastsd_VpdWsd => [VPD, WSD],
    V256_Vextractf128_WdqVdqIb => [WDQ, VDQ, IB],
    V256_Vinsertf128_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    V256_Vmovapd_WpdVpd => [WPD, VPD],
    V256_Vmovaps_WpsVps => [WPS, VPS],
    V256_Vmovddup_VpdWpd => [VPD, WPD],
    V256_Vmovupd_WpdVpd => [WPD, VPD],
    V256_Vmovups_WpsVps => [WPS, VPS],
    V256_Vpalignr_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    V256_Vpblendvb_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    V256_Vperm2f128_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    V256_Vpshufb_VdqHdqWdq => [VDQ, HDQ, WDQ],
    V256_Vpshufd_VdqWdqIb => [VDQ, WDQ, IB],
    V256_Vpshufhw_VdqWdqIb => [VDQ, WDQ, IB],
    V256_Vpshuflw_VdqWdqIb => [VDQ, WDQ, IB],
    V256_Vpslld_UdqIb => [UDQ, IB],
    V256_Vpslldq_UdqIb => [UDQ, IB],
    V256_Vpsllq_UdqIb => [UDQ, IB],
    V256_Vpsllw_UdqIb => [UDQ, IB],
    V256_Vpsrad_UdqIb => [UDQ, IB],
    V256_Vpsraw_UdqIb => [UDQ, IB],
    V256_Vpsrld_UdqIb => [UDQ, IB],
    V256_Vpsrldq_UdqIb => [UDQ, IB],
    V256_Vpsrlq_UdqIb => [UDQ, IB],
    V256_Vpsrlw_UdqIb => [UDQ, IB],
    V256_Vpxor_VdqHdqWdq => [VDQ, HDQ, WDQ],
    V512_Vaddpd_VpdHpdWpd => [VPD, HPD, WPD],
    V512_Vaddpd_VpdHpdWpd_Kmask => [VPD, HPD, WPD],
    V512_Vaddps_VpsHpsWps => [VPS, HPS, WPS],
    V512_Vaddps_VpsHpsWps_Kmask => [VPS, HPS, WPS],
    V512_Vaddsd_VsdHpdWsd => [VSD, HPD, WSD],
    V512_Vaddsd_VsdHpdWsd_Kmask => [VSD, HPD, WSD],
    V512_Vaddss_VssHpsWss => [VSS, HPS, WSS],
    V512_Vaddss_VssHpsWss_Kmask => [VSS, HPS, WSS],
    V512_Vbroadcastss_VpsWss => [VPS, WSS],
    V512_Vbroadcastss_VpsWss_Kmask => [VPS, WSS],
    V512_Vcmppd_KGbHpdWpdIb => [KGB, HPD, WPD, IB],
    V512_Vcmpps_KGwHpsWpsIb => [KGW, HPS, WPS, IB],
    V512_Vcmpsd_KGbHsdWsdIb => [KGB, HSD, WSD, IB],
    V512_Vcmpss_KGbHssWssIb => [KGB, HSS, WSS, IB],
    V512_Vcvtpd2ps_VpsWpd => [VPS, WPD],
    V512_Vcvtpd2ps_VpsWpd_Kmask => [VPS, WPD],
    V512_Vcvtps2pd_VpdWps => [VPD, MVHV],
    V512_Vcvtps2pd_VpdWps_Kmask => [VPD, MVHV],
    V512_Vcvtsd2ss_VssWsd => [VSS, WSD],
    V512_Vcvtsd2ss_VssWsd_Kmask => [VSS, WSD],
    V512_Vcvtss2sd_VsdWss => [VSD, WSS],
    V512_Vcvtss2sd_VsdWss_Kmask => [VSD, WSS],
    V512_Vextractf32x4_WpsVpsIb => [MVDQ128, VPS, IB],
    V512_Vextractf32x4_WpsVpsIb_Kmask => [MVDQ128, VPS, IB],
    V512_Vextractf32x8_WpsVpsIb => [MVDQ256, VPS, IB],
    V512_Vextractf32x8_WpsVpsIb_Kmask => [MVDQ256, VPS, IB],
    V512_Vextractf64x2_WpdVpdIb => [MVDQ128, VPD, IB],
    V512_Vextractf64x2_WpdVpdIb_Kmask => [MVDQ128, VPD, IB],
    V512_Vextractf64x4_WpdVpdIb => [MVDQ256, VPD, IB],
    V512_Vextractf64x4_WpdVpdIb_Kmask => [MVDQ256, VPD, IB],
    V512_Vgatherdd_VdqVSib => [VDQ, VSIB],
    V512_Vgatherdq_VdqVSib => [VDQ, VSIB],
    V512_Vgatherqd_VdqVSib => [VDQ, VSIB],
    V512_Vgatherqq_VdqVSib => [VDQ, VSIB],
    V512_Vmovapd_VpdWpd => [VPD, WPD],
    V512_Vmovapd_VpdWpd_Kmask => [VPD, WPD],
    V512_Vmovapd_WpdVpd => [WPD, VPD],
    V512_Vmovapd_WpdVpd_Kmask => [WPD, VPD],
    V512_Vmovaps_VpsWps => [VPS, WPS],
    V512_Vmovaps_VpsWps_Kmask => [VPS, WPS],
    V512_Vmovaps_WpsVps => [WPS, VPS],
    V512_Vmovaps_WpsVps_Kmask => [WPS, VPS],
    V512_Vmovddup_VpdWpd => [VPD, WPD],
    V512_Vmovddup_VpdWpd_Kmask => [VPD, WPD],
    V512_Vmovdqa32_VdqWdq => [VDQ, WDQ],
    V512_Vmovdqa32_VdqWdq_Kmask => [VDQ, WDQ],
    V512_Vmovdqa32_WdqVdq => [WDQ, VDQ],
    V512_Vmovdqa32_WdqVdq_Kmask => [WDQ, VDQ],
    V512_Vmovdqa64_VdqWdq => [VDQ, WDQ],
    V512_Vmovdqa64_VdqWdq_Kmask => [VDQ, WDQ],
    V512_Vmovdqa64_WdqVdq => [WDQ, VDQ],
    V512_Vmovdqa64_WdqVdq_Kmask => [WDQ, VDQ],
    V512_Vmovdqu16_VdqWdq => [VDQ, WDQ],
    V512_Vmovdqu16_VdqWdq_Kmask => [VDQ, WDQ],
    V512_Vmovdqu16_WdqVdq => [WDQ, VDQ],
    V512_Vmovdqu16_WdqVdq_Kmask => [WDQ, VDQ],
    V512_Vmovdqu32_VdqWdq => [VDQ, WDQ],
    V512_Vmovdqu32_VdqWdq_Kmask => [VDQ, WDQ],
    V512_Vmovdqu32_WdqVdq => [WDQ, VDQ],
    V512_Vmovdqu32_WdqVdq_Kmask => [WDQ, VDQ],
    V512_Vmovdqu64_VdqWdq => [VDQ, WDQ],
    V512_Vmovdqu64_VdqWdq_Kmask => [VDQ, WDQ],
    V512_Vmovdqu64_WdqVdq => [WDQ, VDQ],
    V512_Vmovdqu64_WdqVdq_Kmask => [WDQ, VDQ],
    V512_Vmovdqu8_VdqWdq => [VDQ, WDQ],
    V512_Vmovdqu8_VdqWdq_Kmask => [VDQ, WDQ],
    V512_Vmovdqu8_WdqVdq => [WDQ, VDQ],
    V512_Vmovdqu8_WdqVdq_Kmask => [WDQ, VDQ],
    V512_Vmovhlps_VpsHpsWps => [VPS, HPS, WPS],
    V512_Vmovlpd_VpdHpdMq => [VPD, HPD, EQ],
    V512_Vmovlps_VpsHpsMq => [VPS, HPS, EQ],
    V512_Vmovsd_VsdHpdWsd => [VSD, HPD, WSD],
    V512_Vmovsd_VsdHpdWsd_Kmask => [VSD, HPD, WSD],
    V512_Vmovsd_VsdWsd => [VSD, WSD],
    V512_Vmovsd_VsdWsd_Kmask => [VSD, WSD],
    V512_Vmovsd_WsdHpdVsd => [WSD, HPD, VSD],
    V512_Vmovsd_WsdHpdVsd_Kmask => [WSD, HPD, VSD],
    V512_Vmovsd_WsdVsd => [WSD, VSD],
    V512_Vmovsd_WsdVsd_Kmask => [WSD, VSD],
    V512_Vmovsldup_VpsWps => [VPS, WPS],
    V512_Vmovsldup_VpsWps_Kmask => [VPS, WPS],
    V512_Vmovss_VssHpsWss => [VSS, HPS, WSS],
    V512_Vmovss_VssHpsWss_Kmask => [VSS, HPS, WSS],
    V512_Vmovss_VssWss => [VSS, WSS],
    V512_Vmovss_VssWss_Kmask => [VSS, WSS],
    V512_Vmovss_WssHpsVss => [WSS, HPS, VSS],
    V512_Vmovss_WssHpsVss_Kmask => [WSS, HPS, VSS],
    V512_Vmovss_WssVss => [WSS, VSS],
    V512_Vmovss_WssVss_Kmask => [WSS, VSS],
    V512_Vmovupd_VpdWpd => [VPD, WPD],
    V512_Vmovupd_VpdWpd_Kmask => [VPD, WPD],
    V512_Vmovupd_WpdVpd => [WPD, VPD],
    V512_Vmovupd_WpdVpd_Kmask => [WPD, VPD],
    V512_Vmovups_VpsWps => [VPS, WPS],
    V512_Vmovups_VpsWps_Kmask => [VPS, WPS],
    V512_Vmovups_WpsVps => [WPS, VPS],
    V512_Vmovups_WpsVps_Kmask => [WPS, VPS],
    V512_Vpmovdb_WdqVdq => [MVQV, VDQ],
    V512_Vpmovdb_WdqVdq_Kmask => [MVQV, VDQ],
    V512_Vpmovqb_WdqVdq => [MVOV, VDQ],
    V512_Vpmovqb_WdqVdq_Kmask => [MVOV, VDQ],
    V512_Vpmovwb_WdqVdq => [MVHV, VDQ],
    V512_Vpmovwb_WdqVdq_Kmask => [MVHV, VDQ],
    V512_Vpmovzxbd_VdqWdq => [VDQ, WDQ],
    V512_Vpmovzxbd_VdqWdq_Kmask => [VDQ, WDQ],
    V512_Vpmovzxbq_VdqWdq => [VDQ, WDQ],
    V512_Vpmovzxbq_VdqWdq_Kmask => [VDQ, WDQ],
    V512_Vpmovzxbw_VdqWdq => [VDQ, WDQ],
    V512_Vpmovzxbw_VdqWdq_Kmask => [VDQ, WDQ],
    V512_Vrndscaleps_VpsWpsIb_Kmask => [VPS, WPS, IB],
    Vaddpd_VpdHpdWpd => [VPD, HPD, WPD],
    Vaddps_VpsHpsWps => [VPS, HPS, WPS],
    Vaddsd_VsdHpdWsd => [VSD, HPD, WSD],
    Vaddss_VssHpsWss => [VSS, HPS, WSS],
    Vandpd_VpdHpdWpd => [VPD, HPD, WPD],
    Vandps_VpsHpsWps => [VPS, HPS, WPS],
    Vblendvps_VpsHpsWpsIb => [VPS, HPS, WPS, IB],
    Vbroadcastss_VpsMss => [VPS, WSS],
    Vbroadcastss_VpsWss => [VPS, WSS],
    Vcmppd_VpdHpdWpdIb => [VPD, HPD, WPD, IB],
    Vcmpps_VpsHpsWpsIb => [VPS, HPS, WPS, IB],
    Vcmpsd_VsdHpdWsdIb => [VSD, HPD, WSD, IB],
    Vcmpss_VssHpsWssIb => [VSS, HPS, WSS, IB],
    Vcomisd_VsdWsd => [VSD, WSD],
    Vcomiss_VssWss => [VSS, WSS],
    Vcvtpd2ps_VpsWpd => [VPS, WPD],
    Vcvtps2pd_VpdWps => [VPD, WPS],
    Vcvtsd2ss_VssWsd => [VSS, WSD],
    Vcvtsi2sd_VsdEd => [VSD, ED],
    Vcvtsi2sd_VsdEq => [VSD, EQ],
    Vcvtsi2ss_VssEd => [VSS, ED],
    Vcvtsi2ss_VssEq => [VSS, EQ],
    Vcvtss2sd_VsdWss => [VSD, WSS],
    Verr_Ew => [EW],
    Verw_Ew => [EW],
    Vfmadd132pd_VpdHpdWpd => [VPD, HPD, WPD],
    Vfmadd132ps_VpsHpsWps => [VPS, HPS, WPS],
    Vfrczpd_VpdWpd => [VPD, WPD],
    Vfrczps_VpsWps => [VPS, WPS],
    Vfrczsd_VsdWsd => [VSD, WSD],
    Vfrczss_VssWss => [VSS, WSS],
    Vgatherdd_VdqHdq => [VDQ, VSIB, HDQ],
    Vgatherdpd_VpdHpd => [VPD, VSIB, HPD],
    Vgatherdps_VpsHps => [VPS, VSIB, HPS],
    Vgatherdq_VdqHdq => [VDQ, VSIB, HDQ],
    Vgatherqd_VdqHdq => [VDQ, VSIB, HDQ],
    Vgatherqpd_VpdHpd => [VPD, VSIB, HPD],
    Vgatherqps_VpsHps => [VPS, VSIB, HPS],
    Vgatherqq_VdqHdq => [VDQ, VSIB, HDQ],
    Vmcall => [],
    Vmclear_Mq => [EQ],
    Vmfunc => [],
    Vmlaunch => [],
    Vmload => [],
    Vmmcall => [],
    Vmovapd_VpdWpd => [VPD, WPD],
    Vmovaps_VpsWps => [VPS, WPS],
    Vmovdqa_VdqWdq => [VDQ, WDQ],
    Vmovdqu_VdqWdq => [VDQ, WDQ],
    Vmovmskpd_GdUpd => [GD, UPD],
    Vmovmskps_GdUps => [GD, UPS],
    Vmovq_VqWq => [VQ, WQ],
    Vmovsldup_VpsWps => [VPS, WPS],
    Vmovupd_VpdWpd => [VPD, WPD],
    Vmovups_VpsWps => [VPS, WPS],
    Vmptrld_Mq => [EQ],
    Vmptrst_Mq => [EQ],
    Vmread_EdGd => [ED, GD],
    Vmread_EqGq => [EQ, GQ],
    Vmresume => [],
    Vmrun => [],
    Vmsave => [],
    Vmwrite_GdEd => [GD, ED],
    Vmwrite_GqEq => [GQ, EQ],
    Vmxoff => [],
    Vmxon_Mq => [EQ],
    Vpcmov_VdqHdqVIbWdq => [VDQ, HDQ, VIB, WDQ],
    Vpcmov_VdqHdqWdqVIb => [VDQ, HDQ, WDQ, VIB],
    Vpcomb_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    Vpcomd_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    Vpcomq_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    Vpcomub_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    Vpcomud_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    Vpcomuq_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    Vpcomuw_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    Vpcomw_VdqHdqWdqIb => [VDQ, HDQ, WDQ, IB],
    Vpermilps_VpsWpsIb => [VPS, WPS, IB],
    Vpmacsdd_VdqHdqWdqVIb => [VDQ, HDQ, WDQ, VIB],
    Vprotb_VdqHdqWdq => [VDQ, HDQ, WDQ],
    Vprotb_VdqWdqHdq => [VDQ, WDQ, HDQ],
    Vprotb_VdqWdqIb => [VDQ, WDQ, IB],
    Vprotd_VdqHdqWdq => [VDQ, HDQ, WDQ],
    Vprotd_VdqWdqHdq => [VDQ, WDQ, HDQ],
    Vprotd_VdqWdqIb => [VDQ, WDQ, IB],
    Vprotq_VdqHdqWdq => [VDQ, HDQ, WDQ],
    Vprotq_VdqWdqHdq => [VDQ, WDQ, HDQ],
    Vprotq_VdqWdqIb => [VDQ, WDQ, IB],
    Vprotw_VdqHdqWdq => [VDQ, HDQ, WDQ],
    Vprotw_VdqWdqHdq => [VDQ, WDQ, HDQ],
    Vprotw_VdqWdqIb => [VDQ, WDQ, IB],
    Vshufpd_VpdHpdWpdIb => [VPD, HPD, WPD, IB],
    Vshufps_VpsHpsWpsIb => [VPS, HPS, WPS, IB],
    Vsqrtpd_VpdWpd => [VPD, WPD],
    Vsqrtps_VpsWps => [VPS, WPS],
    Vsqrtsd_VsdHpdWsd => [VSD, HPD, WSD],
    Vsqrtss_VssHpsWss => [VSS, HPS, WSS],
    Vzeroall => [],
    Vzeroupper => [],
    Wbinvd => [],
    Wrfsbase_Ed => [ED],
    Wrfsbase_Eq => [EQ],
    Wrgsbase_Ed => [ED],
    Wrgsbase_Eq => [EQ],
    Wrmsr => [],
    Wrmsrns => [],
    Wrpkru => [],
    Wrssd => [],
    Wrssq => [],
    Wrussd => [],
    Wrussq => [],
    Xadd_EbGb : lockable => [EB, GB],
    Xadd_EdGd : lockable => [ED, GD],
    Xadd_EqGq : lockable => [EQ, GQ],
    Xadd_EwGw : lockable => [EW, GW],
    Xchg_EbGb : lockable => [EB, GB],
    Xchg_EdGd : lockable => [ED, GD],
    Xchg_EqGq : lockable => [EQ, GQ],
    Xchg_ERXEAX => [ED, EAX],
    Xchg_EwGw : lockable => [EW, GW],
    Xchg_RRXRAX => [EQ, RAX],
    Xchg_RXAX => [EW, AX],
    Xgetbv => [],
    Xlat => [AL],
    Xor_ALIb => [AL, IB],
    Xor_AXIw => [AX, IW],
    Xor_EAXId => [EAX, ID],
    Xor_EbGb : lockable => [EB, GB],
    Xor_EbIb : lockable => [EB, IB],
    Xor_EdGd : lockable => [ED, GD],
    Xor_EdGd_ZeroIdiom => [ED, GD],
    Xor_EdId : lockable => [ED, ID],
    Xor_EdsIb : lockable => [ED, SIBD],
    Xor_EqGq : lockable => [EQ, GQ],
    Xor_EqGq_ZeroIdiom => [EQ, GQ],
    Xor_EqId : lockable => [EQ, ID],
    Xor_EqsIb : lockable => [EQ, SIBD],
    Xor_EwGw : lockable => [EW, GW],
    Xor_EwGw_ZeroIdiom => [EW, GW],
    Xor_EwIw : lockable => [EW, IW],
    Xor_EwsIb : lockable => [EW, SIBW],
    Xor_GbEb => [GB, EB],
    Xor_GdEd => [GD, ED],
    Xor_GdEd_ZeroIdiom => [GD, ED],
    Xor_GqEq => [GQ, EQ],
    Xor_GqEq_ZeroIdiom => [GQ, EQ],
    Xor_GwEw => [GW, EW],
    Xor_GwEw_ZeroIdiom => [GW, EW],
    Xor_RAXId => [RAX, ID],
    Xorpd_VpdWpd => [VPD, WPD],
    Xorps_VpsWps => [VPS, WPS],
    Xrstor => [],
    Xrstors => [],
    Xsave => [],
    Xsavec => [],
    Xsaveopt => [],
    Xsaves => [],
    Xsetbv => [],
}

impl IaOpcode {
    /// Decode metadata for this instruction form.
    #[must_use]
    pub fn info(self) -> &'static OpcodeInfo {
        &OPCODE_INFO[self as usize]
    }

    /// The up-to-four source operand slots.
    #[must_use]
    pub fn srcs(self) -> [SrcSpec; 4] {
        self.info().srcs
    }

    /// Whether a lock prefix is tolerated on the memory form.
    #[must_use]
    pub fn lockable(self) -> bool {
        self.info().flags.contains(OpFlags::LOCKABLE)
    }
}

impl fmt::Display for IaOpcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(OPCODE_NAMES[*self as usize])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_is_the_zero_id() {
        assert_eq!(IaOpcode::Error as u16, 0);
        assert!(IaOpcode::Error.srcs().iter().all(SrcSpec::is_none));
    }

    #[test]
    fn metadata_tables_align_with_the_enum() {
        assert_eq!(OPCODE_NAMES.len(), OPCODE_INFO.len());
    }

    #[test]
    fn add_edgd_reads_rm_and_reg() {
        let srcs = IaOpcode::Add_EdGd.srcs();
        assert_eq!(srcs[0], src(SrcRole::Rm, OperandKind::Gpr32));
        assert_eq!(srcs[1], src(SrcRole::Nnn, OperandKind::Gpr32));
        assert!(srcs[2].is_none());
        assert!(IaOpcode::Add_EdGd.lockable());
        assert!(!IaOpcode::Mov_Op32_GdEd.lockable());
    }

    #[test]
    fn short_branches_sign_extend() {
        let srcs = IaOpcode::Jz_Jbd.srcs();
        assert_eq!(srcs[0], src(SrcRole::Branch, OperandKind::ImmBsD));
    }

    #[test]
    fn shifts_carry_an_implicit_cl_slot() {
        let srcs = IaOpcode::Shl_Ed.srcs();
        assert_eq!(srcs[0].role, SrcRole::Rm);
        assert_eq!(srcs[1].kind, OperandKind::UseCl);
    }

    #[test]
    fn gathers_take_a_vector_index() {
        let srcs = IaOpcode::Vgatherdps_VpsHps.srcs();
        assert_eq!(srcs[0].role, SrcRole::Nnn);
        assert_eq!(srcs[1].role, SrcRole::Vsib);
        assert_eq!(srcs[2].role, SrcRole::Vvv);
    }

    #[test]
    fn display_prints_the_form_name() {
        assert_eq!(IaOpcode::Pause.to_string(), "Pause");
        assert_eq!(IaOpcode::Add_EdGd.to_string(), "Add_EdGd");
    }
}
