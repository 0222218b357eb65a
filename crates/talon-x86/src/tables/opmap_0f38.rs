//! Descriptor groups for the 0F 38 opcode map.

use crate::ids::IaOpcode;
use crate::matcher::*;

// opcode 0F 38 00
pub(crate) static G_0F3800: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pshufb_PqQq),
    op(SSE_66, IaOpcode::Pshufb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 01
pub(crate) static G_0F3801: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Phaddw_PqQq),
    op(SSE_66, IaOpcode::Phaddw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 02
pub(crate) static G_0F3802: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Phaddd_PqQq),
    op(SSE_66, IaOpcode::Phaddd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 03
pub(crate) static G_0F3803: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Phaddsw_PqQq),
    op(SSE_66, IaOpcode::Phaddsw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 04
pub(crate) static G_0F3804: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pmaddubsw_PqQq),
    op(SSE_66, IaOpcode::Pmaddubsw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 05
pub(crate) static G_0F3805: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Phsubw_PqQq),
    op(SSE_66, IaOpcode::Phsubw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 06
pub(crate) static G_0F3806: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Phsubd_PqQq),
    op(SSE_66, IaOpcode::Phsubd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 07
pub(crate) static G_0F3807: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Phsubsw_PqQq),
    op(SSE_66, IaOpcode::Phsubsw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 08
pub(crate) static G_0F3808: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psignb_PqQq),
    op(SSE_66, IaOpcode::Psignb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 09
pub(crate) static G_0F3809: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psignw_PqQq),
    op(SSE_66, IaOpcode::Psignw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 0A
pub(crate) static G_0F380A: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psignd_PqQq),
    op(SSE_66, IaOpcode::Psignd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 0B
pub(crate) static G_0F380B: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pmulhrsw_PqQq),
    op(SSE_66, IaOpcode::Pmulhrsw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 10
pub(crate) static G_0F3810: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pblendvb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 14
pub(crate) static G_0F3814: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Blendvps_VpsWps),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 15
pub(crate) static G_0F3815: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Blendvpd_VpdWpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 17
pub(crate) static G_0F3817: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Ptest_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 1C
pub(crate) static G_0F381C: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pabsb_PqQq),
    op(SSE_66, IaOpcode::Pabsb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 1D
pub(crate) static G_0F381D: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pabsw_PqQq),
    op(SSE_66, IaOpcode::Pabsw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 1E
pub(crate) static G_0F381E: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pabsd_PqQq),
    op(SSE_66, IaOpcode::Pabsd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 20
pub(crate) static G_0F3820: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmovsxbw_VdqWq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 21
pub(crate) static G_0F3821: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmovsxbd_VdqWd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 22
pub(crate) static G_0F3822: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmovsxbq_VdqWw),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 23
pub(crate) static G_0F3823: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmovsxwd_VdqWq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 24
pub(crate) static G_0F3824: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmovsxwq_VdqWd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 25
pub(crate) static G_0F3825: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmovsxdq_VdqWq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 28
pub(crate) static G_0F3828: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmuldq_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 29
pub(crate) static G_0F3829: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pcmpeqq_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 2A
pub(crate) static G_0F382A: OpcodeGroup = &[
    op(SSE_66.and(MOD_MEM), IaOpcode::Movntdqa_VdqMdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 2B
pub(crate) static G_0F382B: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Packusdw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 30
pub(crate) static G_0F3830: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmovzxbw_VdqWq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 31
pub(crate) static G_0F3831: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmovzxbd_VdqWd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 32
pub(crate) static G_0F3832: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmovzxbq_VdqWw),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 33
pub(crate) static G_0F3833: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmovzxwd_VdqWq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 34
pub(crate) static G_0F3834: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmovzxwq_VdqWd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 35
pub(crate) static G_0F3835: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmovzxdq_VdqWq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 37
pub(crate) static G_0F3837: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pcmpgtq_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 38
pub(crate) static G_0F3838: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pminsb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 39
pub(crate) static G_0F3839: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pminsd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 3A
pub(crate) static G_0F383A: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pminuw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 3B
pub(crate) static G_0F383B: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pminud_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 3C
pub(crate) static G_0F383C: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmaxsb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 3D
pub(crate) static G_0F383D: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmaxsd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 3E
pub(crate) static G_0F383E: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmaxuw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 3F
pub(crate) static G_0F383F: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmaxud_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 40
pub(crate) static G_0F3840: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pmulld_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 41
pub(crate) static G_0F3841: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Phminposuw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 80
pub(crate) static G_0F3880: OpcodeGroup = &[
    op(SSE_66.and(MOD_MEM), IaOpcode::Invept),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 81
pub(crate) static G_0F3881: OpcodeGroup = &[
    op(SSE_66.and(MOD_MEM), IaOpcode::Invvpid),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 82
pub(crate) static G_0F3882: OpcodeGroup = &[
    op(SSE_66.and(MOD_MEM), IaOpcode::Invpcid),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 C8
pub(crate) static G_0F38C8: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Sha1nexte_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 C9
pub(crate) static G_0F38C9: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Sha1msg1_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 CA
pub(crate) static G_0F38CA: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Sha1msg2_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 CB
pub(crate) static G_0F38CB: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Sha256rnds2_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 CC
pub(crate) static G_0F38CC: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Sha256msg1_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 CD
pub(crate) static G_0F38CD: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Sha256msg2_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 CF
pub(crate) static G_0F38CF: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Gf2p8mulb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 DB
pub(crate) static G_0F38DB: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Aesimc_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 DC
pub(crate) static G_0F38DC: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Aesenc_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 DD
pub(crate) static G_0F38DD: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Aesenclast_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 DE
pub(crate) static G_0F38DE: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Aesdec_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 DF
pub(crate) static G_0F38DF: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Aesdeclast_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 F0
pub(crate) static G_0F38F0: OpcodeGroup = &[
    op(NO_F2_F3.and(OS16).and(MOD_MEM), IaOpcode::Movbe_GwMw),
    op(NO_F2_F3.and(OS32).and(MOD_MEM), IaOpcode::Movbe_GdMd),
    op(NO_F2_F3.and(OS64).and(MOD_MEM), IaOpcode::Movbe_GqMq),
    op(SSE_F2, IaOpcode::Crc32_GdEb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 F1
pub(crate) static G_0F38F1: OpcodeGroup = &[
    op(NO_F2_F3.and(OS64).and(MOD_MEM), IaOpcode::Movbe_MqGq),
    op(NO_F2_F3.and(OS32).and(MOD_MEM), IaOpcode::Movbe_MdGd),
    op(NO_F2_F3.and(OS16).and(MOD_MEM), IaOpcode::Movbe_MwGw),
    op(SSE_F2.and(OS64), IaOpcode::Crc32_GdEq),
    op(SSE_F2.and(OS32), IaOpcode::Crc32_GdEd),
    op(SSE_F2.and(OS16), IaOpcode::Crc32_GdEw),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 F5
pub(crate) static G_0F38F5: OpcodeGroup = &[
    op(OS64.and(MOD_MEM).and(SSE_66), IaOpcode::Wrussq),
    op(OS16_32.and(MOD_MEM).and(SSE_66), IaOpcode::Wrussd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 38 F6
pub(crate) static G_0F38F6: OpcodeGroup = &[
    op(OS64.and(MOD_MEM).and(SSE_NONE), IaOpcode::Wrssq),
    op(OS16_32.and(MOD_MEM).and(SSE_NONE), IaOpcode::Wrssd),
    op(SSE_66.and(OS64), IaOpcode::Adcx_GqEq),
    op(SSE_F3.and(OS64), IaOpcode::Adox_GqEq),
    op(SSE_66, IaOpcode::Adcx_GdEd),
    op(SSE_F3, IaOpcode::Adox_GdEd),
    last(ANY, IaOpcode::Error),
];
