//! Descriptor groups for the VEX-encoded maps.
//!
//! A single flat table covers all three escape maps: `0x000..=0x0FF` for
//! 0F, `0x100..=0x1FF` for 0F 38 and `0x200..=0x2FF` for 0F 3A. Slots this
//! build does not translate hold the shared error group.

use crate::ids::IaOpcode;
use crate::matcher::*;

pub(super) static VEX_MAP: [OpcodeGroup; 768] = build();

const fn build() -> [OpcodeGroup; 768] {
    let mut m: [OpcodeGroup; 768] = [ERR; 768];
    m[0x010] = G_VEX_0F10;
    m[0x011] = G_VEX_0F11;
    m[0x012] = G_VEX_0F12;
    m[0x013] = G_VEX_0F13;
    m[0x028] = G_VEX_0F28;
    m[0x029] = G_VEX_0F29;
    m[0x02A] = G_VEX_0F2A;
    m[0x02F] = G_VEX_0F2F;
    m[0x041] = G_VEX_0F41;
    m[0x044] = G_VEX_0F44;
    m[0x047] = G_VEX_0F47;
    m[0x04A] = G_VEX_0F4A;
    m[0x04B] = G_VEX_0F4B;
    m[0x050] = G_VEX_0F50;
    m[0x051] = G_VEX_0F51;
    m[0x054] = G_VEX_0F54;
    m[0x058] = G_VEX_0F58;
    m[0x05A] = G_VEX_0F5A;
    m[0x06E] = G_VEX_0F6E;
    m[0x06F] = G_VEX_0F6F;
    m[0x070] = G_VEX_0F70;
    m[0x071] = G_VEX_0F71;
    m[0x072] = G_VEX_0F72;
    m[0x073] = G_VEX_0F73;
    m[0x077] = G_VEX_0F77;
    m[0x07E] = G_VEX_0F7E;
    m[0x090] = G_VEX_0F90;
    m[0x092] = G_VEX_0F92;
    m[0x098] = G_VEX_0F98;
    m[0x0C2] = G_VEX_0FC2;
    m[0x0C4] = G_VEX_0FC4;
    m[0x0C5] = G_VEX_0FC5;
    m[0x0C6] = G_VEX_0FC6;
    m[0x0EF] = G_VEX_0FEF;
    m[0x100] = G_VEX_0F3800;
    m[0x118] = G_VEX_0F3818;
    m[0x119] = G_VEX_0F3819;
    m[0x190] = G_VEX_0F3890;
    m[0x191] = G_VEX_0F3891;
    m[0x192] = G_VEX_0F3892;
    m[0x193] = G_VEX_0F3893;
    m[0x198] = G_VEX_0F3898;
    m[0x1F2] = G_VEX_0F38F2;
    m[0x1F3] = G_VEX_0F38F3;
    m[0x1F5] = G_VEX_0F38F5;
    m[0x1F6] = G_VEX_0F38F6;
    m[0x1F7] = G_VEX_0F38F7;
    m[0x204] = G_VEX_0F3A04;
    m[0x206] = G_VEX_0F3A06;
    m[0x20F] = G_VEX_0F3A0F;
    m[0x218] = G_VEX_0F3A18;
    m[0x219] = G_VEX_0F3A19;
    m[0x220] = G_VEX_0F3A20;
    m[0x24A] = G_VEX_0F3A4A;
    m[0x24C] = G_VEX_0F3A4C;
    m
}

// opcode 0F 10
static G_VEX_0F10: OpcodeGroup = &[
    op(SSE_NONE.and(VL128_256), IaOpcode::Vmovups_VpsWps),
    op(SSE_66.and(VL128_256), IaOpcode::Vmovupd_VpdWpd),
    op(SSE_F3.and(MOD_REG), IaOpcode::V128_Vmovss_VssHpsWss),
    op(SSE_F2.and(MOD_REG), IaOpcode::V128_Vmovsd_VsdHpdWsd),
    op(SSE_F3.and(MOD_MEM), IaOpcode::V128_Vmovss_VssWss),
    op(SSE_F2.and(MOD_MEM), IaOpcode::V128_Vmovsd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 11
static G_VEX_0F11: OpcodeGroup = &[
    op(SSE_NONE.and(VL128), IaOpcode::V128_Vmovups_WpsVps),
    op(SSE_NONE.and(VL256), IaOpcode::V256_Vmovups_WpsVps),
    op(SSE_66.and(VL128), IaOpcode::V128_Vmovupd_WpdVpd),
    op(SSE_66.and(VL256), IaOpcode::V256_Vmovupd_WpdVpd),
    op(SSE_F3.and(MOD_REG), IaOpcode::V128_Vmovss_WssHpsVss),
    op(SSE_F2.and(MOD_REG), IaOpcode::V128_Vmovsd_WsdHpdVsd),
    op(SSE_F3.and(MOD_MEM), IaOpcode::V128_Vmovss_WssVss),
    op(SSE_F2.and(MOD_MEM), IaOpcode::V128_Vmovsd_WsdVsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 12
static G_VEX_0F12: OpcodeGroup = &[
    op(SSE_NONE.and(VL128).and(MOD_MEM), IaOpcode::V128_Vmovlps_VpsHpsMq),
    op(SSE_NONE.and(VL128).and(MOD_REG), IaOpcode::V128_Vmovhlps_VpsHpsWps),
    op(SSE_66.and(VL128).and(MOD_MEM), IaOpcode::V128_Vmovlpd_VpdHpdMq),
    op(SSE_F3, IaOpcode::Vmovsldup_VpsWps),
    op(SSE_F2.and(VL128), IaOpcode::V128_Vmovddup_VpdWpd),
    op(SSE_F2.and(VL256), IaOpcode::V256_Vmovddup_VpdWpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 13
static G_VEX_0F13: OpcodeGroup = &[
    op(VL128.and(MOD_MEM).and(SSE_NONE), IaOpcode::V128_Vmovlps_MqVps),
    op(VL128.and(MOD_MEM).and(SSE_66), IaOpcode::V128_Vmovlpd_MqVsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 28
static G_VEX_0F28: OpcodeGroup = &[
    op(SSE_NONE.and(VL128_256), IaOpcode::Vmovaps_VpsWps),
    op(SSE_66.and(VL128_256), IaOpcode::Vmovapd_VpdWpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 29
static G_VEX_0F29: OpcodeGroup = &[
    op(SSE_NONE.and(VL128), IaOpcode::V128_Vmovaps_WpsVps),
    op(SSE_NONE.and(VL256), IaOpcode::V256_Vmovaps_WpsVps),
    op(SSE_66.and(VL128), IaOpcode::V128_Vmovapd_WpdVpd),
    op(SSE_66.and(VL256), IaOpcode::V256_Vmovapd_WpdVpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 2A
static G_VEX_0F2A: OpcodeGroup = &[
    op(W0.and(SSE_F3), IaOpcode::Vcvtsi2ss_VssEd),
    op(W1.and(SSE_F3).and(IS64), IaOpcode::Vcvtsi2ss_VssEq),
    op(W0.and(SSE_F2), IaOpcode::Vcvtsi2sd_VsdEd),
    op(W1.and(SSE_F2).and(IS64), IaOpcode::Vcvtsi2sd_VsdEq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 2F
static G_VEX_0F2F: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Vcomiss_VssWss),
    op(SSE_66, IaOpcode::Vcomisd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 41
static G_VEX_0F41: OpcodeGroup = &[
    op(W0.and(VL256).and(MOD_REG).and(SSE_NONE), IaOpcode::Kandw_KGwKHwKEw),
    op(W1.and(VL256).and(MOD_REG).and(SSE_NONE), IaOpcode::Kandq_KGqKHqKEq),
    op(W0.and(VL256).and(MOD_REG).and(SSE_66), IaOpcode::Kandb_KGbKHbKEb),
    op(W1.and(VL256).and(MOD_REG).and(SSE_66), IaOpcode::Kandd_KGdKHdKEd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 44
static G_VEX_0F44: OpcodeGroup = &[
    op(W0.and(VL128).and(MOD_REG).and(SSE_NONE), IaOpcode::Knotw_KGwKEw),
    op(W1.and(VL128).and(MOD_REG).and(SSE_NONE), IaOpcode::Knotq_KGqKEq),
    op(W0.and(VL128).and(MOD_REG).and(SSE_66), IaOpcode::Knotb_KGbKEb),
    op(W1.and(VL128).and(MOD_REG).and(SSE_66), IaOpcode::Knotd_KGdKEd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 47
static G_VEX_0F47: OpcodeGroup = &[
    op(W0.and(VL256).and(MOD_REG).and(SSE_NONE), IaOpcode::Kxorw_KGwKHwKEw),
    op(W1.and(VL256).and(MOD_REG).and(SSE_NONE), IaOpcode::Kxorq_KGqKHqKEq),
    op(W0.and(VL256).and(MOD_REG).and(SSE_66), IaOpcode::Kxorb_KGbKHbKEb),
    op(W1.and(VL256).and(MOD_REG).and(SSE_66), IaOpcode::Kxord_KGdKHdKEd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 4A
static G_VEX_0F4A: OpcodeGroup = &[
    op(W0.and(VL256).and(MOD_REG).and(SSE_NONE), IaOpcode::Kaddw_KGwKHwKEw),
    op(W1.and(VL256).and(MOD_REG).and(SSE_NONE), IaOpcode::Kaddq_KGqKHqKEq),
    op(W0.and(VL256).and(MOD_REG).and(SSE_66), IaOpcode::Kaddb_KGbKHbKEb),
    op(W1.and(VL256).and(MOD_REG).and(SSE_66), IaOpcode::Kaddd_KGdKHdKEd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 4B
static G_VEX_0F4B: OpcodeGroup = &[
    op(W0.and(VL256).and(MOD_REG).and(SSE_NONE), IaOpcode::Kunpckwd_KGdKHwKEw),
    op(W1.and(VL256).and(MOD_REG).and(SSE_NONE), IaOpcode::Kunpckdq_KGqKHdKEd),
    op(W0.and(VL256).and(MOD_REG).and(SSE_66), IaOpcode::Kunpckbw_KGwKHbKEb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 50
static G_VEX_0F50: OpcodeGroup = &[
    op(SSE_NONE.and(MOD_REG), IaOpcode::Vmovmskps_GdUps),
    op(SSE_66.and(MOD_REG), IaOpcode::Vmovmskpd_GdUpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 51
static G_VEX_0F51: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Vsqrtps_VpsWps),
    op(SSE_66, IaOpcode::Vsqrtpd_VpdWpd),
    op(SSE_F3, IaOpcode::Vsqrtss_VssHpsWss),
    op(SSE_F2, IaOpcode::Vsqrtsd_VsdHpdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 54
static G_VEX_0F54: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Vandps_VpsHpsWps),
    op(SSE_66, IaOpcode::Vandpd_VpdHpdWpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 58
static G_VEX_0F58: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Vaddps_VpsHpsWps),
    op(SSE_66, IaOpcode::Vaddpd_VpdHpdWpd),
    op(SSE_F3, IaOpcode::Vaddss_VssHpsWss),
    op(SSE_F2, IaOpcode::Vaddsd_VsdHpdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 5A
static G_VEX_0F5A: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Vcvtps2pd_VpdWps),
    op(SSE_66, IaOpcode::Vcvtpd2ps_VpsWpd),
    op(SSE_F3, IaOpcode::Vcvtss2sd_VsdWss),
    op(SSE_F2, IaOpcode::Vcvtsd2ss_VssWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 6E
static G_VEX_0F6E: OpcodeGroup = &[
    op(SSE_66.and(VL128).and(W0), IaOpcode::V128_Vmovd_VdqEd),
    op(SSE_66.and(VL128).and(W1).and(IS64), IaOpcode::V128_Vmovq_VdqEq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 6F
static G_VEX_0F6F: OpcodeGroup = &[
    op(SSE_66.and(VL128_256), IaOpcode::Vmovdqa_VdqWdq),
    op(SSE_F3.and(VL128_256), IaOpcode::Vmovdqu_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 70
static G_VEX_0F70: OpcodeGroup = &[
    op(SSE_66.and(VL128), IaOpcode::V128_Vpshufd_VdqWdqIb),
    op(SSE_66.and(VL256), IaOpcode::V256_Vpshufd_VdqWdqIb),
    op(SSE_F3.and(VL128), IaOpcode::V128_Vpshufhw_VdqWdqIb),
    op(SSE_F3.and(VL256), IaOpcode::V256_Vpshufhw_VdqWdqIb),
    op(SSE_F2.and(VL128), IaOpcode::V128_Vpshuflw_VdqWdqIb),
    op(SSE_F2.and(VL256), IaOpcode::V256_Vpshuflw_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 71
static G_VEX_0F71: OpcodeGroup = &[
    op(SSE_66.and(NNN2).and(VL128), IaOpcode::V128_Vpsrlw_UdqIb),
    op(SSE_66.and(NNN2).and(VL256), IaOpcode::V256_Vpsrlw_UdqIb),
    op(SSE_66.and(NNN4).and(VL128), IaOpcode::V128_Vpsraw_UdqIb),
    op(SSE_66.and(NNN4).and(VL256), IaOpcode::V256_Vpsraw_UdqIb),
    op(SSE_66.and(NNN6).and(VL128), IaOpcode::V128_Vpsllw_UdqIb),
    op(SSE_66.and(NNN6).and(VL256), IaOpcode::V256_Vpsllw_UdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 72
static G_VEX_0F72: OpcodeGroup = &[
    op(SSE_66.and(NNN2).and(VL128), IaOpcode::V128_Vpsrld_UdqIb),
    op(SSE_66.and(NNN2).and(VL256), IaOpcode::V256_Vpsrld_UdqIb),
    op(SSE_66.and(NNN4).and(VL128), IaOpcode::V128_Vpsrad_UdqIb),
    op(SSE_66.and(NNN4).and(VL256), IaOpcode::V256_Vpsrad_UdqIb),
    op(SSE_66.and(NNN6).and(VL128), IaOpcode::V128_Vpslld_UdqIb),
    op(SSE_66.and(NNN6).and(VL256), IaOpcode::V256_Vpslld_UdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 73
static G_VEX_0F73: OpcodeGroup = &[
    op(SSE_66.and(NNN2).and(VL128), IaOpcode::V128_Vpsrlq_UdqIb),
    op(SSE_66.and(NNN2).and(VL256), IaOpcode::V256_Vpsrlq_UdqIb),
    op(SSE_66.and(NNN3).and(VL128), IaOpcode::V128_Vpsrldq_UdqIb),
    op(SSE_66.and(NNN3).and(VL256), IaOpcode::V256_Vpsrldq_UdqIb),
    op(SSE_66.and(NNN6).and(VL128), IaOpcode::V128_Vpsllq_UdqIb),
    op(SSE_66.and(NNN6).and(VL256), IaOpcode::V256_Vpsllq_UdqIb),
    op(SSE_66.and(NNN7).and(VL128), IaOpcode::V128_Vpslldq_UdqIb),
    op(SSE_66.and(NNN7).and(VL256), IaOpcode::V256_Vpslldq_UdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 77
static G_VEX_0F77: OpcodeGroup = &[
    op(SSE_NONE.and(VL128).and(MOD_REG), IaOpcode::Vzeroupper),
    op(SSE_NONE.and(VL256).and(MOD_REG), IaOpcode::Vzeroall),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 7E
static G_VEX_0F7E: OpcodeGroup = &[
    op(SSE_66.and(VL128).and(W0), IaOpcode::V128_Vmovd_EdVd),
    op(SSE_66.and(VL128).and(W1).and(IS64), IaOpcode::V128_Vmovq_EqVq),
    op(SSE_F3.and(VL128), IaOpcode::Vmovq_VqWq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 90
static G_VEX_0F90: OpcodeGroup = &[
    op(W0.and(VL128).and(SSE_NONE), IaOpcode::Kmovw_KGwKEw),
    op(W1.and(VL128).and(SSE_NONE), IaOpcode::Kmovq_KGqKEq),
    op(W0.and(VL128).and(SSE_66), IaOpcode::Kmovb_KGbKEb),
    op(W1.and(VL128).and(SSE_66), IaOpcode::Kmovd_KGdKEd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 92
static G_VEX_0F92: OpcodeGroup = &[
    op(W0.and(VL128).and(MOD_REG).and(SSE_NONE), IaOpcode::Kmovw_KGwEw),
    op(W0.and(VL128).and(MOD_REG).and(SSE_66), IaOpcode::Kmovb_KGbEb),
    op(W0.and(VL128).and(MOD_REG).and(SSE_F2), IaOpcode::Kmovd_KGdEd),
    op(W1.and(VL128).and(MOD_REG).and(SSE_F2).and(IS64), IaOpcode::Kmovq_KGqEq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 98
static G_VEX_0F98: OpcodeGroup = &[
    op(W0.and(VL128).and(MOD_REG).and(SSE_NONE), IaOpcode::Kortestw_KGwKEw),
    op(W1.and(VL128).and(MOD_REG).and(SSE_NONE), IaOpcode::Kortestq_KGqKEq),
    op(W0.and(VL128).and(MOD_REG).and(SSE_66), IaOpcode::Kortestb_KGbKEb),
    op(W1.and(VL128).and(MOD_REG).and(SSE_66), IaOpcode::Kortestd_KGdKEd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F C2
static G_VEX_0FC2: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Vcmpps_VpsHpsWpsIb),
    op(SSE_66, IaOpcode::Vcmppd_VpdHpdWpdIb),
    op(SSE_F3, IaOpcode::Vcmpss_VssHpsWssIb),
    op(SSE_F2, IaOpcode::Vcmpsd_VsdHpdWsdIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F C4
static G_VEX_0FC4: OpcodeGroup = &[
    op(SSE_66.and(VL128), IaOpcode::V128_Vpinsrw_VdqEwIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F C5
static G_VEX_0FC5: OpcodeGroup = &[
    op(SSE_66.and(VL128).and(MOD_REG), IaOpcode::V128_Vpextrw_GdUdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F C6
static G_VEX_0FC6: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Vshufps_VpsHpsWpsIb),
    op(SSE_66, IaOpcode::Vshufpd_VpdHpdWpdIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F EF
static G_VEX_0FEF: OpcodeGroup = &[
    op(SSE_66.and(VL128), IaOpcode::V128_Vpxor_VdqHdqWdq),
    op(SSE_66.and(VL256), IaOpcode::V256_Vpxor_VdqHdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 00
static G_VEX_0F3800: OpcodeGroup = &[
    op(SSE_66.and(VL128), IaOpcode::V128_Vpshufb_VdqHdqWdq),
    op(SSE_66.and(VL256), IaOpcode::V256_Vpshufb_VdqHdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 18
static G_VEX_0F3818: OpcodeGroup = &[
    op(SSE_66.and(W0).and(MOD_REG), IaOpcode::Vbroadcastss_VpsWss),
    op(SSE_66.and(W0).and(MOD_MEM), IaOpcode::Vbroadcastss_VpsMss),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 19
static G_VEX_0F3819: OpcodeGroup = &[
    op(SSE_66.and(W0).and(VL256).and(MOD_REG), IaOpcode::V256_Vbroadcastsd_VpdWsd),
    op(SSE_66.and(W0).and(VL256).and(MOD_MEM), IaOpcode::V256_Vbroadcastsd_VpdMsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 90
static G_VEX_0F3890: OpcodeGroup = &[
    op(SSE_66.and(W0).and(MOD_MEM), IaOpcode::Vgatherdd_VdqHdq),
    op(SSE_66.and(W1).and(MOD_MEM), IaOpcode::Vgatherdq_VdqHdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 91
static G_VEX_0F3891: OpcodeGroup = &[
    op(SSE_66.and(W0).and(MOD_MEM), IaOpcode::Vgatherqd_VdqHdq),
    op(SSE_66.and(W1).and(MOD_MEM), IaOpcode::Vgatherqq_VdqHdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 92
static G_VEX_0F3892: OpcodeGroup = &[
    op(SSE_66.and(W0).and(MOD_MEM), IaOpcode::Vgatherdps_VpsHps),
    op(SSE_66.and(W1).and(MOD_MEM), IaOpcode::Vgatherdpd_VpdHpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 93
static G_VEX_0F3893: OpcodeGroup = &[
    op(SSE_66.and(W0).and(MOD_MEM), IaOpcode::Vgatherqps_VpsHps),
    op(SSE_66.and(W1).and(MOD_MEM), IaOpcode::Vgatherqpd_VpdHpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 98
static G_VEX_0F3898: OpcodeGroup = &[
    op(SSE_66.and(W0), IaOpcode::Vfmadd132ps_VpsHpsWps),
    op(SSE_66.and(W1), IaOpcode::Vfmadd132pd_VpdHpdWpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 F2
static G_VEX_0F38F2: OpcodeGroup = &[
    op(SSE_NONE.and(VL128).and(W0), IaOpcode::Andn_GdBdEd),
    op(SSE_NONE.and(VL128).and(W1).and(IS64), IaOpcode::Andn_GqBqEq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 F3
static G_VEX_0F38F3: OpcodeGroup = &[
    op(NNN1.and(SSE_NONE).and(VL128).and(W0), IaOpcode::Blsr_BdEd),
    op(NNN1.and(SSE_NONE).and(VL128).and(W1).and(IS64), IaOpcode::Blsr_BqEq),
    op(NNN2.and(SSE_NONE).and(VL128).and(W0), IaOpcode::Blsmsk_BdEd),
    op(NNN2.and(SSE_NONE).and(VL128).and(W1).and(IS64), IaOpcode::Blsmsk_BqEq),
    op(NNN3.and(SSE_NONE).and(VL128).and(W0), IaOpcode::Blsi_BdEd),
    op(NNN3.and(SSE_NONE).and(VL128).and(W1).and(IS64), IaOpcode::Blsi_BqEq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 F5
static G_VEX_0F38F5: OpcodeGroup = &[
    op(SSE_NONE.and(VL128).and(W0), IaOpcode::Bzhi_GdBdEd),
    op(SSE_NONE.and(VL128).and(W1).and(IS64), IaOpcode::Bzhi_GqBqEq),
    op(SSE_F3.and(VL128).and(W0), IaOpcode::Pext_GdBdEd),
    op(SSE_F3.and(VL128).and(W1).and(IS64), IaOpcode::Pext_GqBqEq),
    op(SSE_F2.and(VL128).and(W0), IaOpcode::Pdep_GdBdEd),
    op(SSE_F2.and(VL128).and(W1).and(IS64), IaOpcode::Pdep_GqBqEq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 F6
static G_VEX_0F38F6: OpcodeGroup = &[
    op(SSE_F2.and(VL128).and(W0), IaOpcode::Mulx_GdBdEd),
    op(SSE_F2.and(VL128).and(W1).and(IS64), IaOpcode::Mulx_GqBqEq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 F7
static G_VEX_0F38F7: OpcodeGroup = &[
    op(SSE_NONE.and(VL128).and(W0), IaOpcode::Bextr_GdEdBd),
    op(SSE_NONE.and(VL128).and(W1).and(IS64), IaOpcode::Bextr_GqEqBq),
    op(SSE_66.and(VL128).and(W0), IaOpcode::Shlx_GdEdBd),
    op(SSE_66.and(VL128).and(W1).and(IS64), IaOpcode::Shlx_GqEqBq),
    op(SSE_F3.and(VL128).and(W0), IaOpcode::Sarx_GdEdBd),
    op(SSE_F3.and(VL128).and(W1).and(IS64), IaOpcode::Sarx_GqEqBq),
    op(SSE_F2.and(VL128).and(W0), IaOpcode::Shrx_GdEdBd),
    op(SSE_F2.and(VL128).and(W1).and(IS64), IaOpcode::Shrx_GqEqBq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 04
static G_VEX_0F3A04: OpcodeGroup = &[
    op(SSE_66.and(W0), IaOpcode::Vpermilps_VpsWpsIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 06
static G_VEX_0F3A06: OpcodeGroup = &[
    op(SSE_66.and(W0).and(VL256), IaOpcode::V256_Vperm2f128_VdqHdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 0F
static G_VEX_0F3A0F: OpcodeGroup = &[
    op(SSE_66.and(VL128), IaOpcode::V128_Vpalignr_VdqHdqWdqIb),
    op(SSE_66.and(VL256), IaOpcode::V256_Vpalignr_VdqHdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 18
static G_VEX_0F3A18: OpcodeGroup = &[
    op(SSE_66.and(VL256).and(W0), IaOpcode::V256_Vinsertf128_VdqHdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 19
static G_VEX_0F3A19: OpcodeGroup = &[
    op(SSE_66.and(VL256).and(W0), IaOpcode::V256_Vextractf128_WdqVdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 20
static G_VEX_0F3A20: OpcodeGroup = &[
    op(SSE_66.and(VL128), IaOpcode::V128_Vpinsrb_VdqEbIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 4A
static G_VEX_0F3A4A: OpcodeGroup = &[
    op(SSE_66.and(W0), IaOpcode::Vblendvps_VpsHpsWpsIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 4C
static G_VEX_0F3A4C: OpcodeGroup = &[
    op(SSE_66.and(VL128), IaOpcode::V128_Vpblendvb_VdqHdqWdqIb),
    op(SSE_66.and(VL256), IaOpcode::V256_Vpblendvb_VdqHdqWdqIb),
    last(ANY, IaOpcode::Error),
];
