//! Descriptor groups for the EVEX-encoded maps.
//!
//! Same flat layout as the VEX table: 0F at `0x000`, 0F 38 at `0x100`,
//! 0F 3A at `0x200`. Masked and unmasked forms are separate rows keyed on
//! the opmask field, with the zero-mask form listed first.

use crate::ids::IaOpcode;
use crate::matcher::*;

pub(super) static EVEX_MAP: [OpcodeGroup; 768] = build();

const fn build() -> [OpcodeGroup; 768] {
    let mut m: [OpcodeGroup; 768] = [ERR; 768];
    m[0x010] = G_EVEX_0F10;
    m[0x011] = G_EVEX_0F11;
    m[0x012] = G_EVEX_0F12;
    m[0x028] = G_EVEX_0F28;
    m[0x029] = G_EVEX_0F29;
    m[0x058] = G_EVEX_0F58;
    m[0x05A] = G_EVEX_0F5A;
    m[0x06F] = G_EVEX_0F6F;
    m[0x07F] = G_EVEX_0F7F;
    m[0x0C2] = G_EVEX_0FC2;
    m[0x118] = G_EVEX_0F3818;
    m[0x130] = G_EVEX_0F3830;
    m[0x131] = G_EVEX_0F3831;
    m[0x132] = G_EVEX_0F3832;
    m[0x190] = G_EVEX_0F3890;
    m[0x191] = G_EVEX_0F3891;
    m[0x208] = G_EVEX_0F3A08;
    m[0x219] = G_EVEX_0F3A19;
    m[0x21B] = G_EVEX_0F3A1B;
    m
}

// opcode 0F 10
static G_EVEX_0F10: OpcodeGroup = &[
    op(W0.and(MASK_K0).and(SSE_NONE), IaOpcode::V512_Vmovups_VpsWps),
    op(W1.and(MASK_K0).and(SSE_66), IaOpcode::V512_Vmovupd_VpdWpd),
    op(W0.and(MASK_K0).and(MOD_REG).and(SSE_F3), IaOpcode::V512_Vmovss_VssHpsWss),
    op(W1.and(MASK_K0).and(MOD_REG).and(SSE_F2), IaOpcode::V512_Vmovsd_VsdHpdWsd),
    op(W0.and(MASK_K0).and(MOD_MEM).and(SSE_F3), IaOpcode::V512_Vmovss_VssWss),
    op(W1.and(MASK_K0).and(MOD_MEM).and(SSE_F2), IaOpcode::V512_Vmovsd_VsdWsd),
    op(W0.and(SSE_NONE), IaOpcode::V512_Vmovups_VpsWps_Kmask),
    op(W1.and(SSE_66), IaOpcode::V512_Vmovupd_VpdWpd_Kmask),
    op(W0.and(MOD_REG).and(SSE_F3), IaOpcode::V512_Vmovss_VssHpsWss_Kmask),
    op(W1.and(MOD_REG).and(SSE_F2), IaOpcode::V512_Vmovsd_VsdHpdWsd_Kmask),
    op(W0.and(MOD_MEM).and(SSE_F3), IaOpcode::V512_Vmovss_VssWss_Kmask),
    op(W1.and(MOD_MEM).and(SSE_F2), IaOpcode::V512_Vmovsd_VsdWsd_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 11
static G_EVEX_0F11: OpcodeGroup = &[
    op(W0.and(MASK_K0).and(SSE_NONE), IaOpcode::V512_Vmovups_WpsVps),
    op(W1.and(MASK_K0).and(SSE_66), IaOpcode::V512_Vmovupd_WpdVpd),
    op(W0.and(MASK_K0).and(MOD_REG).and(SSE_F3), IaOpcode::V512_Vmovss_WssHpsVss),
    op(W1.and(MASK_K0).and(MOD_REG).and(SSE_F2), IaOpcode::V512_Vmovsd_WsdHpdVsd),
    op(W0.and(MASK_K0).and(MOD_MEM).and(SSE_F3), IaOpcode::V512_Vmovss_WssVss),
    op(W1.and(MASK_K0).and(MOD_MEM).and(SSE_F2), IaOpcode::V512_Vmovsd_WsdVsd),
    op(W0.and(SSE_NONE), IaOpcode::V512_Vmovups_WpsVps_Kmask),
    op(W1.and(SSE_66), IaOpcode::V512_Vmovupd_WpdVpd_Kmask),
    op(W0.and(MOD_REG).and(SSE_F3), IaOpcode::V512_Vmovss_WssHpsVss_Kmask),
    op(W1.and(MOD_REG).and(SSE_F2), IaOpcode::V512_Vmovsd_WsdHpdVsd_Kmask),
    op(W0.and(MOD_MEM).and(SSE_F3), IaOpcode::V512_Vmovss_WssVss_Kmask),
    op(W1.and(MOD_MEM).and(SSE_F2), IaOpcode::V512_Vmovsd_WsdVsd_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 12
static G_EVEX_0F12: OpcodeGroup = &[
    op(W0.and(MASK_K0).and(VEX_L0).and(SSE_NONE).and(MOD_MEM), IaOpcode::V512_Vmovlps_VpsHpsMq),
    op(W0.and(MASK_K0).and(VEX_L0).and(SSE_NONE).and(MOD_REG), IaOpcode::V512_Vmovhlps_VpsHpsWps),
    op(W1.and(MASK_K0).and(VEX_L0).and(SSE_66).and(MOD_MEM), IaOpcode::V512_Vmovlpd_VpdHpdMq),
    op(W0.and(MASK_K0).and(SSE_F3), IaOpcode::V512_Vmovsldup_VpsWps),
    op(W1.and(MASK_K0).and(SSE_F2), IaOpcode::V512_Vmovddup_VpdWpd),
    op(W0.and(SSE_F3), IaOpcode::V512_Vmovsldup_VpsWps_Kmask),
    op(W1.and(SSE_F2), IaOpcode::V512_Vmovddup_VpdWpd_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 28
static G_EVEX_0F28: OpcodeGroup = &[
    op(W0.and(MASK_K0).and(SSE_NONE), IaOpcode::V512_Vmovaps_VpsWps),
    op(W0.and(SSE_NONE), IaOpcode::V512_Vmovaps_VpsWps_Kmask),
    op(W1.and(MASK_K0).and(SSE_66), IaOpcode::V512_Vmovapd_VpdWpd),
    op(W1.and(SSE_66), IaOpcode::V512_Vmovapd_VpdWpd_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 29
static G_EVEX_0F29: OpcodeGroup = &[
    op(W0.and(MASK_K0).and(SSE_NONE), IaOpcode::V512_Vmovaps_WpsVps),
    op(W0.and(SSE_NONE), IaOpcode::V512_Vmovaps_WpsVps_Kmask),
    op(W1.and(MASK_K0).and(SSE_66), IaOpcode::V512_Vmovapd_WpdVpd),
    op(W1.and(SSE_66), IaOpcode::V512_Vmovapd_WpdVpd_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 58
static G_EVEX_0F58: OpcodeGroup = &[
    op(W0.and(MASK_K0).and(SSE_NONE), IaOpcode::V512_Vaddps_VpsHpsWps),
    op(W0.and(SSE_NONE), IaOpcode::V512_Vaddps_VpsHpsWps_Kmask),
    op(W1.and(MASK_K0).and(SSE_66), IaOpcode::V512_Vaddpd_VpdHpdWpd),
    op(W1.and(SSE_66), IaOpcode::V512_Vaddpd_VpdHpdWpd_Kmask),
    op(W0.and(MASK_K0).and(SSE_F3), IaOpcode::V512_Vaddss_VssHpsWss),
    op(W0.and(SSE_F3), IaOpcode::V512_Vaddss_VssHpsWss_Kmask),
    op(W1.and(MASK_K0).and(SSE_F2), IaOpcode::V512_Vaddsd_VsdHpdWsd),
    op(W1.and(SSE_F2), IaOpcode::V512_Vaddsd_VsdHpdWsd_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 5A
static G_EVEX_0F5A: OpcodeGroup = &[
    op(W0.and(MASK_K0).and(SSE_NONE), IaOpcode::V512_Vcvtps2pd_VpdWps),
    op(W0.and(SSE_NONE), IaOpcode::V512_Vcvtps2pd_VpdWps_Kmask),
    op(W1.and(MASK_K0).and(SSE_66), IaOpcode::V512_Vcvtpd2ps_VpsWpd),
    op(W1.and(SSE_66), IaOpcode::V512_Vcvtpd2ps_VpsWpd_Kmask),
    op(W0.and(MASK_K0).and(SSE_F3), IaOpcode::V512_Vcvtss2sd_VsdWss),
    op(W0.and(SSE_F3), IaOpcode::V512_Vcvtss2sd_VsdWss_Kmask),
    op(W1.and(MASK_K0).and(SSE_F2), IaOpcode::V512_Vcvtsd2ss_VssWsd),
    op(W1.and(SSE_F2), IaOpcode::V512_Vcvtsd2ss_VssWsd_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 6F
static G_EVEX_0F6F: OpcodeGroup = &[
    op(W0.and(MASK_K0).and(SSE_66), IaOpcode::V512_Vmovdqa32_VdqWdq),
    op(W0.and(SSE_66), IaOpcode::V512_Vmovdqa32_VdqWdq_Kmask),
    op(W1.and(MASK_K0).and(SSE_66), IaOpcode::V512_Vmovdqa64_VdqWdq),
    op(W1.and(SSE_66), IaOpcode::V512_Vmovdqa64_VdqWdq_Kmask),
    op(W0.and(MASK_K0).and(SSE_F3), IaOpcode::V512_Vmovdqu32_VdqWdq),
    op(W0.and(SSE_F3), IaOpcode::V512_Vmovdqu32_VdqWdq_Kmask),
    op(W1.and(MASK_K0).and(SSE_F3), IaOpcode::V512_Vmovdqu64_VdqWdq),
    op(W1.and(SSE_F3), IaOpcode::V512_Vmovdqu64_VdqWdq_Kmask),
    op(W0.and(MASK_K0).and(SSE_F2), IaOpcode::V512_Vmovdqu8_VdqWdq),
    op(W0.and(SSE_F2), IaOpcode::V512_Vmovdqu8_VdqWdq_Kmask),
    op(W1.and(MASK_K0).and(SSE_F2), IaOpcode::V512_Vmovdqu16_VdqWdq),
    op(W1.and(SSE_F2), IaOpcode::V512_Vmovdqu16_VdqWdq_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 7F
static G_EVEX_0F7F: OpcodeGroup = &[
    op(W0.and(MASK_K0).and(SSE_66), IaOpcode::V512_Vmovdqa32_WdqVdq),
    op(W0.and(SSE_66), IaOpcode::V512_Vmovdqa32_WdqVdq_Kmask),
    op(W1.and(MASK_K0).and(SSE_66), IaOpcode::V512_Vmovdqa64_WdqVdq),
    op(W1.and(SSE_66), IaOpcode::V512_Vmovdqa64_WdqVdq_Kmask),
    op(W0.and(MASK_K0).and(SSE_F3), IaOpcode::V512_Vmovdqu32_WdqVdq),
    op(W0.and(SSE_F3), IaOpcode::V512_Vmovdqu32_WdqVdq_Kmask),
    op(W1.and(MASK_K0).and(SSE_F3), IaOpcode::V512_Vmovdqu64_WdqVdq),
    op(W1.and(SSE_F3), IaOpcode::V512_Vmovdqu64_WdqVdq_Kmask),
    op(W0.and(MASK_K0).and(SSE_F2), IaOpcode::V512_Vmovdqu8_WdqVdq),
    op(W0.and(SSE_F2), IaOpcode::V512_Vmovdqu8_WdqVdq_Kmask),
    op(W1.and(MASK_K0).and(SSE_F2), IaOpcode::V512_Vmovdqu16_WdqVdq),
    op(W1.and(SSE_F2), IaOpcode::V512_Vmovdqu16_WdqVdq_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F C2
static G_EVEX_0FC2: OpcodeGroup = &[
    op(W0.and(SSE_NONE), IaOpcode::V512_Vcmpps_KGwHpsWpsIb),
    op(W1.and(SSE_66), IaOpcode::V512_Vcmppd_KGbHpdWpdIb),
    op(W0.and(SSE_F3), IaOpcode::V512_Vcmpss_KGbHssWssIb),
    op(W1.and(SSE_F2), IaOpcode::V512_Vcmpsd_KGbHsdWsdIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 18
static G_EVEX_0F3818: OpcodeGroup = &[
    op(SSE_66.and(W0).and(MASK_K0), IaOpcode::V512_Vbroadcastss_VpsWss),
    op(SSE_66.and(W0), IaOpcode::V512_Vbroadcastss_VpsWss_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 30
static G_EVEX_0F3830: OpcodeGroup = &[
    op(SSE_66.and(MASK_K0), IaOpcode::V512_Vpmovzxbw_VdqWdq),
    op(SSE_66, IaOpcode::V512_Vpmovzxbw_VdqWdq_Kmask),
    op(SSE_F3.and(W0).and(MASK_K0), IaOpcode::V512_Vpmovwb_WdqVdq),
    op(SSE_F3.and(W0), IaOpcode::V512_Vpmovwb_WdqVdq_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 31
static G_EVEX_0F3831: OpcodeGroup = &[
    op(SSE_66.and(MASK_K0), IaOpcode::V512_Vpmovzxbd_VdqWdq),
    op(SSE_66, IaOpcode::V512_Vpmovzxbd_VdqWdq_Kmask),
    op(SSE_F3.and(W0).and(MASK_K0), IaOpcode::V512_Vpmovdb_WdqVdq),
    op(SSE_F3.and(W0), IaOpcode::V512_Vpmovdb_WdqVdq_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 32
static G_EVEX_0F3832: OpcodeGroup = &[
    op(SSE_66.and(MASK_K0), IaOpcode::V512_Vpmovzxbq_VdqWdq),
    op(SSE_66, IaOpcode::V512_Vpmovzxbq_VdqWdq_Kmask),
    op(SSE_F3.and(W0).and(MASK_K0), IaOpcode::V512_Vpmovqb_WdqVdq),
    op(SSE_F3.and(W0), IaOpcode::V512_Vpmovqb_WdqVdq_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 90
static G_EVEX_0F3890: OpcodeGroup = &[
    op(SSE_66.and(W0).and(MOD_MEM).and(MASK_REQUIRED), IaOpcode::V512_Vgatherdd_VdqVSib),
    op(SSE_66.and(W1).and(MOD_MEM).and(MASK_REQUIRED), IaOpcode::V512_Vgatherdq_VdqVSib),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 91
static G_EVEX_0F3891: OpcodeGroup = &[
    op(SSE_66.and(W0).and(MOD_MEM).and(MASK_REQUIRED), IaOpcode::V512_Vgatherqd_VdqVSib),
    op(SSE_66.and(W1).and(MOD_MEM).and(MASK_REQUIRED), IaOpcode::V512_Vgatherqq_VdqVSib),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 08
static G_EVEX_0F3A08: OpcodeGroup = &[
    op(SSE_66.and(W0), IaOpcode::V512_Vrndscaleps_VpsWpsIb_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 19
static G_EVEX_0F3A19: OpcodeGroup = &[
    op(SSE_66.and(VL256_512).and(W0).and(MASK_K0), IaOpcode::V512_Vextractf32x4_WpsVpsIb),
    op(SSE_66.and(VL256_512).and(W0), IaOpcode::V512_Vextractf32x4_WpsVpsIb_Kmask),
    op(SSE_66.and(VL256_512).and(W1).and(MASK_K0), IaOpcode::V512_Vextractf64x2_WpdVpdIb),
    op(SSE_66.and(VL256_512).and(W1), IaOpcode::V512_Vextractf64x2_WpdVpdIb_Kmask),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 1B
static G_EVEX_0F3A1B: OpcodeGroup = &[
    op(SSE_66.and(VL512).and(W0).and(MASK_K0), IaOpcode::V512_Vextractf32x8_WpsVpsIb),
    op(SSE_66.and(VL512).and(W0), IaOpcode::V512_Vextractf32x8_WpsVpsIb_Kmask),
    op(SSE_66.and(VL512).and(W1).and(MASK_K0), IaOpcode::V512_Vextractf64x4_WpdVpdIb),
    op(SSE_66.and(VL512).and(W1), IaOpcode::V512_Vextractf64x4_WpdVpdIb_Kmask),
    last(ANY, IaOpcode::Error),
];
