//! Descriptor groups for the XOP-encoded maps.
//!
//! Same flat layout as the VEX table, indexed by the map_select field of
//! the second prefix byte: map 8 at `0x000`, map 9 at `0x100`, map 10 at
//! `0x200`. There is no SSE-prefix axis here, a nonzero pp field rejects
//! the encoding before the table is consulted.

use crate::ids::IaOpcode;
use crate::matcher::*;

pub(super) static XOP_MAP: [OpcodeGroup; 768] = build();

const fn build() -> [OpcodeGroup; 768] {
    let mut m: [OpcodeGroup; 768] = [ERR; 768];
    m[0x09E] = G_XOP8_9E;
    m[0x0A2] = G_XOP8_A2;
    m[0x0C0] = G_XOP8_C0;
    m[0x0C1] = G_XOP8_C1;
    m[0x0C2] = G_XOP8_C2;
    m[0x0C3] = G_XOP8_C3;
    m[0x0CC] = G_XOP8_CC;
    m[0x0CD] = G_XOP8_CD;
    m[0x0CE] = G_XOP8_CE;
    m[0x0CF] = G_XOP8_CF;
    m[0x0EC] = G_XOP8_EC;
    m[0x0ED] = G_XOP8_ED;
    m[0x0EE] = G_XOP8_EE;
    m[0x0EF] = G_XOP8_EF;
    m[0x101] = G_XOP9_01;
    m[0x102] = G_XOP9_02;
    m[0x180] = G_XOP9_80;
    m[0x181] = G_XOP9_81;
    m[0x182] = G_XOP9_82;
    m[0x183] = G_XOP9_83;
    m[0x190] = G_XOP9_90;
    m[0x191] = G_XOP9_91;
    m[0x192] = G_XOP9_92;
    m[0x193] = G_XOP9_93;
    m[0x210] = G_XOPA_10;
    m
}

// xop.8 9E
static G_XOP8_9E: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vpmacsdd_VdqHdqWdqVIb),
    last(ANY, IaOpcode::Error),
];

// xop.8 A2, the W bit swaps the selector and the second source
static G_XOP8_A2: OpcodeGroup = &[
    op(W0, IaOpcode::Vpcmov_VdqHdqWdqVIb),
    op(W1, IaOpcode::Vpcmov_VdqHdqVIbWdq),
    last(ANY, IaOpcode::Error),
];

// xop.8 C0
static G_XOP8_C0: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vprotb_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// xop.8 C1
static G_XOP8_C1: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vprotw_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// xop.8 C2
static G_XOP8_C2: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vprotd_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// xop.8 C3
static G_XOP8_C3: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vprotq_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// xop.8 CC
static G_XOP8_CC: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vpcomb_VdqHdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// xop.8 CD
static G_XOP8_CD: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vpcomw_VdqHdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// xop.8 CE
static G_XOP8_CE: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vpcomd_VdqHdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// xop.8 CF
static G_XOP8_CF: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vpcomq_VdqHdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// xop.8 EC
static G_XOP8_EC: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vpcomub_VdqHdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// xop.8 ED
static G_XOP8_ED: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vpcomuw_VdqHdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// xop.8 EE
static G_XOP8_EE: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vpcomud_VdqHdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// xop.8 EF
static G_XOP8_EF: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vpcomuq_VdqHdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// xop.9 01, the trailing bit-manipulation group selected by nnn
static G_XOP9_01: OpcodeGroup = &[
    op(NNN1.and(VL128).and(W0), IaOpcode::Blcfill_BdEd),
    op(NNN1.and(VL128).and(W1).and(IS64), IaOpcode::Blcfill_BqEq),
    op(NNN2.and(VL128).and(W0), IaOpcode::Blsfill_BdEd),
    op(NNN2.and(VL128).and(W1).and(IS64), IaOpcode::Blsfill_BqEq),
    op(NNN3.and(VL128).and(W0), IaOpcode::Blcs_BdEd),
    op(NNN3.and(VL128).and(W1).and(IS64), IaOpcode::Blcs_BqEq),
    op(NNN4.and(VL128).and(W0), IaOpcode::Tzmsk_BdEd),
    op(NNN4.and(VL128).and(W1).and(IS64), IaOpcode::Tzmsk_BqEq),
    op(NNN5.and(VL128).and(W0), IaOpcode::Blcic_BdEd),
    op(NNN5.and(VL128).and(W1).and(IS64), IaOpcode::Blcic_BqEq),
    op(NNN6.and(VL128).and(W0), IaOpcode::Blsic_BdEd),
    op(NNN6.and(VL128).and(W1).and(IS64), IaOpcode::Blsic_BqEq),
    op(NNN7.and(VL128).and(W0), IaOpcode::T1mskc_BdEd),
    op(NNN7.and(VL128).and(W1).and(IS64), IaOpcode::T1mskc_BqEq),
    last(ANY, IaOpcode::Error),
];

// xop.9 02
static G_XOP9_02: OpcodeGroup = &[
    op(NNN1.and(VL128).and(W0), IaOpcode::Blcmsk_BdEd),
    op(NNN1.and(VL128).and(W1).and(IS64), IaOpcode::Blcmsk_BqEq),
    op(NNN6.and(VL128).and(W0), IaOpcode::Blci_BdEd),
    op(NNN6.and(VL128).and(W1).and(IS64), IaOpcode::Blci_BqEq),
    last(ANY, IaOpcode::Error),
];

// xop.9 80
static G_XOP9_80: OpcodeGroup = &[
    op(W0, IaOpcode::Vfrczps_VpsWps),
    last(ANY, IaOpcode::Error),
];

// xop.9 81
static G_XOP9_81: OpcodeGroup = &[
    op(W0, IaOpcode::Vfrczpd_VpdWpd),
    last(ANY, IaOpcode::Error),
];

// xop.9 82
static G_XOP9_82: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vfrczss_VssWss),
    last(ANY, IaOpcode::Error),
];

// xop.9 83
static G_XOP9_83: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vfrczsd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// xop.9 90, the W bit swaps the source and the rotate count
static G_XOP9_90: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vprotb_VdqWdqHdq),
    op(W1.and(VL128), IaOpcode::Vprotb_VdqHdqWdq),
    last(ANY, IaOpcode::Error),
];

// xop.9 91
static G_XOP9_91: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vprotw_VdqWdqHdq),
    op(W1.and(VL128), IaOpcode::Vprotw_VdqHdqWdq),
    last(ANY, IaOpcode::Error),
];

// xop.9 92
static G_XOP9_92: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vprotd_VdqWdqHdq),
    op(W1.and(VL128), IaOpcode::Vprotd_VdqHdqWdq),
    last(ANY, IaOpcode::Error),
];

// xop.9 93
static G_XOP9_93: OpcodeGroup = &[
    op(W0.and(VL128), IaOpcode::Vprotq_VdqWdqHdq),
    op(W1.and(VL128), IaOpcode::Vprotq_VdqHdqWdq),
    last(ANY, IaOpcode::Error),
];

// xop.10 10
static G_XOPA_10: OpcodeGroup = &[
    op(VL128.and(W0), IaOpcode::Bextr_GdEdId),
    op(VL128.and(W1).and(IS64), IaOpcode::Bextr_GqEqId),
    last(ANY, IaOpcode::Error),
];
