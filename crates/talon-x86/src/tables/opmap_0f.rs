//! Descriptor groups for the two-byte (0F) opcode map.

use crate::ids::IaOpcode;
use crate::matcher::*;

// opcode 0F 00
pub(crate) static G_0F00: OpcodeGroup = &[
    op(NNN0, IaOpcode::Sldt_Ew),
    op(NNN1, IaOpcode::Str_Ew),
    op(NNN2, IaOpcode::Lldt_Ew),
    op(NNN3, IaOpcode::Ltr_Ew),
    op(NNN4, IaOpcode::Verr_Ew),
    op(NNN5, IaOpcode::Verw_Ew),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 01
pub(crate) static G_0F01: OpcodeGroup = &[
    op(IS32.and(MOD_MEM).and(NNN0), IaOpcode::Sgdt_Ms),
    op(IS32.and(MOD_MEM).and(NNN1), IaOpcode::Sidt_Ms),
    op(IS32.and(MOD_MEM).and(NNN2), IaOpcode::Lgdt_Ms),
    op(IS32.and(MOD_MEM).and(NNN3), IaOpcode::Lidt_Ms),
    op(IS64.and(MOD_MEM).and(NNN0), IaOpcode::Sgdt_Op64_Ms),
    op(IS64.and(MOD_MEM).and(NNN1), IaOpcode::Sidt_Op64_Ms),
    op(IS64.and(MOD_MEM).and(NNN2), IaOpcode::Lgdt_Op64_Ms),
    op(IS64.and(MOD_MEM).and(NNN3), IaOpcode::Lidt_Op64_Ms),
    op(NNN4, IaOpcode::Smsw_Ew),
    op(NNN6, IaOpcode::Lmsw_Ew),
    op(NNN7.and(MOD_MEM), IaOpcode::Invlpg),
    op(NNN0.and(RRR1).and(MOD_REG).and(SSE_NONE), IaOpcode::Vmcall),
    op(NNN0.and(RRR2).and(MOD_REG).and(SSE_NONE), IaOpcode::Vmlaunch),
    op(NNN0.and(RRR3).and(MOD_REG).and(SSE_NONE), IaOpcode::Vmresume),
    op(NNN0.and(RRR4).and(MOD_REG).and(SSE_NONE), IaOpcode::Vmxoff),
    op(NNN0.and(RRR6).and(MOD_REG).and(SSE_NONE), IaOpcode::Wrmsrns),
    op(NNN1.and(RRR0).and(MOD_REG).and(SSE_NONE), IaOpcode::Monitor),
    op(NNN1.and(RRR1).and(MOD_REG).and(SSE_NONE), IaOpcode::Mwait),
    op(NNN1.and(RRR2).and(MOD_REG).and(SSE_NONE), IaOpcode::Clac),
    op(NNN1.and(RRR3).and(MOD_REG).and(SSE_NONE), IaOpcode::Stac),
    op(NNN2.and(RRR0).and(MOD_REG).and(SSE_NONE), IaOpcode::Xgetbv),
    op(NNN2.and(RRR1).and(MOD_REG).and(SSE_NONE), IaOpcode::Xsetbv),
    op(NNN2.and(RRR4).and(MOD_REG).and(SSE_NONE), IaOpcode::Vmfunc),
    op(NNN3.and(RRR0).and(MOD_REG), IaOpcode::Vmrun),
    op(NNN3.and(RRR1).and(MOD_REG), IaOpcode::Vmmcall),
    op(NNN3.and(RRR2).and(MOD_REG), IaOpcode::Vmload),
    op(NNN3.and(RRR3).and(MOD_REG), IaOpcode::Vmsave),
    op(NNN3.and(RRR4).and(MOD_REG), IaOpcode::Stgi),
    op(NNN3.and(RRR5).and(MOD_REG), IaOpcode::Clgi),
    op(NNN3.and(RRR6).and(MOD_REG), IaOpcode::Skinit),
    op(NNN3.and(RRR7).and(MOD_REG), IaOpcode::Invlpga),
    op(NNN5.and(RRR0).and(MOD_REG).and(SSE_F3), IaOpcode::Setssbsy),
    op(NNN5.and(RRR2).and(MOD_REG).and(SSE_F3), IaOpcode::Saveprevssp),
    op(NNN5.and(MOD_MEM).and(SSE_F3), IaOpcode::Rstorssp),
    op(NNN5.and(RRR6).and(MOD_REG).and(SSE_NONE), IaOpcode::Rdpkru),
    op(NNN5.and(RRR7).and(MOD_REG).and(SSE_NONE), IaOpcode::Wrpkru),
    op(NNN7.and(RRR0).and(MOD_REG).and(IS64), IaOpcode::Swapgs),
    op(NNN7.and(RRR1).and(MOD_REG), IaOpcode::Rdtscp),
    op(NNN7.and(RRR2).and(MOD_REG), IaOpcode::Monitorx),
    op(NNN7.and(RRR3).and(MOD_REG), IaOpcode::Mwaitx),
    op(NNN7.and(RRR4).and(MOD_REG), IaOpcode::Clzero),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 02
pub(crate) static G_0F02: OpcodeGroup = &[
    op(OS32_64, IaOpcode::Lar_GdEw),
    last(OS16, IaOpcode::Lar_GwEw),
];

// opcode 0F 03
pub(crate) static G_0F03: OpcodeGroup = &[
    op(OS32_64, IaOpcode::Lsl_GdEw),
    last(OS16, IaOpcode::Lsl_GwEw),
];

// opcode 0F 05
pub(crate) static G_0F05_32: OpcodeGroup = &[last(ANY, IaOpcode::SyscallLegacy)];

// opcode 0F 05
pub(crate) static G_0F05_64: OpcodeGroup = &[last(ANY, IaOpcode::Syscall)];

// opcode 0F 06
pub(crate) static G_0F06: OpcodeGroup = &[last(ANY, IaOpcode::Clts)];

// opcode 0F 07
pub(crate) static G_0F07_32: OpcodeGroup = &[last(ANY, IaOpcode::SysretLegacy)];

// opcode 0F 07
pub(crate) static G_0F07_64: OpcodeGroup = &[last(ANY, IaOpcode::Sysret)];

// opcode 0F 08
pub(crate) static G_0F08: OpcodeGroup = &[last(ANY, IaOpcode::Invd)];

// opcode 0F 09
pub(crate) static G_0F09: OpcodeGroup = &[last(ANY, IaOpcode::Wbinvd)];

// opcode 0F 0B
pub(crate) static G_0F0B: OpcodeGroup = &[last(ANY, IaOpcode::Ud2)];

// opcode 0F 0D
pub(crate) static G_0F0D: OpcodeGroup = &[last(ANY, IaOpcode::Prefetchw_Mb)];

// opcode 0F 0E
pub(crate) static G_0F0E: OpcodeGroup = &[last(ANY, IaOpcode::Femms)];

// opcode 0F 10
pub(crate) static G_0F10: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Movups_VpsWps),
    op(SSE_66, IaOpcode::Movupd_VpdWpd),
    op(SSE_F3, IaOpcode::Movss_VssWss),
    op(SSE_F2, IaOpcode::Movsd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 11
pub(crate) static G_0F11: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Movups_WpsVps),
    op(SSE_66, IaOpcode::Movupd_WpdVpd),
    op(SSE_F3, IaOpcode::Movss_WssVss),
    op(SSE_F2, IaOpcode::Movsd_WsdVsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 12
pub(crate) static G_0F12: OpcodeGroup = &[
    op(SSE_NONE.and(MOD_MEM), IaOpcode::Movlps_VpsMq),
    op(SSE_NONE.and(MOD_REG), IaOpcode::Movhlps_VpsWps),
    op(SSE_66.and(MOD_MEM), IaOpcode::Movlpd_VsdMq),
    op(SSE_F3, IaOpcode::Movsldup_VpsWps),
    op(SSE_F2, IaOpcode::Movddup_VpdWq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 13
pub(crate) static G_0F13: OpcodeGroup = &[
    op(SSE_NONE.and(MOD_MEM), IaOpcode::Movlps_MqVps),
    op(SSE_66.and(MOD_MEM), IaOpcode::Movlpd_MqVsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 14
pub(crate) static G_0F14: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Unpcklps_VpsWdq),
    op(SSE_66, IaOpcode::Unpcklpd_VpdWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 15
pub(crate) static G_0F15: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Unpckhps_VpsWdq),
    op(SSE_66, IaOpcode::Unpckhpd_VpdWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 16
pub(crate) static G_0F16: OpcodeGroup = &[
    op(SSE_NONE.and(MOD_MEM), IaOpcode::Movhps_VpsMq),
    op(SSE_NONE.and(MOD_REG), IaOpcode::Movlhps_VpsWps),
    op(SSE_66.and(MOD_MEM), IaOpcode::Movhpd_VsdMq),
    op(SSE_F3, IaOpcode::Movshdup_VpsWps),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 17
pub(crate) static G_0F17: OpcodeGroup = &[
    op(SSE_NONE.and(MOD_MEM), IaOpcode::Movhps_MqVps),
    op(SSE_66.and(MOD_MEM), IaOpcode::Movhpd_MqVsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 18
pub(crate) static G_0F18: OpcodeGroup = &[
    op(NNN0, IaOpcode::Prefetchnta_Mb),
    op(NNN1, IaOpcode::Prefetcht0_Mb),
    op(NNN2, IaOpcode::Prefetcht1_Mb),
    op(NNN3, IaOpcode::Prefetcht2_Mb),
    last(ANY, IaOpcode::Prefetch_Mb),
];

// opcode 0F 19
pub(crate) static G_MULTI_BYTE_NOP: OpcodeGroup = &[last(ANY, IaOpcode::Nop)];

// opcode 0F 1E
pub(crate) static G_0F1E: OpcodeGroup = &[
    op(OS16_32.and(NNN1).and(MOD_REG).and(SSE_F3), IaOpcode::Rdsspd),
    op(OS64.and(NNN1).and(MOD_REG).and(SSE_F3), IaOpcode::Rdsspq),
    op(NNN7.and(RRR2).and(MOD_REG).and(SSE_F3), IaOpcode::Endbranch64),
    op(NNN7.and(RRR3).and(MOD_REG).and(SSE_F3), IaOpcode::Endbranch32),
    last(ANY, IaOpcode::Nop),
];

// opcode 0F 20
pub(crate) static G_0F20_32: OpcodeGroup = &[
    op(NNN0, IaOpcode::Mov_RdCR0),
    op(NNN2, IaOpcode::Mov_RdCR2),
    op(NNN3, IaOpcode::Mov_RdCR3),
    op(NNN4, IaOpcode::Mov_RdCR4),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 20
pub(crate) static G_0F20_64: OpcodeGroup = &[
    op(NNN0, IaOpcode::Mov_RqCR0),
    op(NNN2, IaOpcode::Mov_RqCR2),
    op(NNN3, IaOpcode::Mov_RqCR3),
    op(NNN4, IaOpcode::Mov_RqCR4),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 21
pub(crate) static G_0F21_32: OpcodeGroup = &[last(ANY, IaOpcode::Mov_RdDd)];

// opcode 0F 21
pub(crate) static G_0F21_64: OpcodeGroup = &[last(ANY, IaOpcode::Mov_RqDq)];

// opcode 0F 22
pub(crate) static G_0F22_32: OpcodeGroup = &[
    op(NNN0, IaOpcode::Mov_CR0Rd),
    op(NNN2, IaOpcode::Mov_CR2Rd),
    op(NNN3, IaOpcode::Mov_CR3Rd),
    op(NNN4, IaOpcode::Mov_CR4Rd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 22
pub(crate) static G_0F22_64: OpcodeGroup = &[
    op(NNN0, IaOpcode::Mov_CR0Rq),
    op(NNN2, IaOpcode::Mov_CR2Rq),
    op(NNN3, IaOpcode::Mov_CR3Rq),
    op(NNN4, IaOpcode::Mov_CR4Rq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 23
pub(crate) static G_0F23_32: OpcodeGroup = &[last(ANY, IaOpcode::Mov_DdRd)];

// opcode 0F 23
pub(crate) static G_0F23_64: OpcodeGroup = &[last(ANY, IaOpcode::Mov_DqRq)];

// opcode 0F 24
pub(crate) static G_0F24: OpcodeGroup = &[last(ANY, IaOpcode::Error)];

// opcode 0F 26
pub(crate) static G_0F26: OpcodeGroup = &[last(ANY, IaOpcode::Error)];

// opcode 0F 28
pub(crate) static G_0F28: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Movaps_VpsWps),
    op(SSE_66, IaOpcode::Movapd_VpdWpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 29
pub(crate) static G_0F29: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Movaps_WpsVps),
    op(SSE_66, IaOpcode::Movapd_WpdVpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 2A
pub(crate) static G_0F2A: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Cvtpi2ps_VpsQq),
    op(SSE_66, IaOpcode::Cvtpi2pd_VpdQq),
    op(SSE_F3.and(OS64), IaOpcode::Cvtsi2ss_VssEq),
    op(SSE_F2.and(OS64), IaOpcode::Cvtsi2sd_VsdEq),
    op(SSE_F3, IaOpcode::Cvtsi2ss_VssEd),
    op(SSE_F2, IaOpcode::Cvtsi2sd_VsdEd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 2B
pub(crate) static G_0F2B: OpcodeGroup = &[
    op(SSE_NONE.and(MOD_MEM), IaOpcode::Movntps_MpsVps),
    op(SSE_66.and(MOD_MEM), IaOpcode::Movntpd_MpdVpd),
    op(SSE_F3.and(MOD_MEM), IaOpcode::Movntss_MssVss),
    op(SSE_F2.and(MOD_MEM), IaOpcode::Movntsd_MsdVsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 2C
pub(crate) static G_0F2C: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Cvttps2pi_PqWps),
    op(SSE_66, IaOpcode::Cvttpd2pi_PqWpd),
    op(SSE_F3.and(OS64), IaOpcode::Cvttss2si_GqWss),
    op(SSE_F2.and(OS64), IaOpcode::Cvttsd2si_GqWsd),
    op(SSE_F3, IaOpcode::Cvttss2si_GdWss),
    op(SSE_F2, IaOpcode::Cvttsd2si_GdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 2D
pub(crate) static G_0F2D: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Cvtps2pi_PqWps),
    op(SSE_66, IaOpcode::Cvtpd2pi_PqWpd),
    op(SSE_F3.and(OS64), IaOpcode::Cvtss2si_GqWss),
    op(SSE_F2.and(OS64), IaOpcode::Cvtsd2si_GqWsd),
    op(SSE_F3, IaOpcode::Cvtss2si_GdWss),
    op(SSE_F2, IaOpcode::Cvtsd2si_GdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 2E
pub(crate) static G_0F2E: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Ucomiss_VssWss),
    op(SSE_66, IaOpcode::Ucomisd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 2F
pub(crate) static G_0F2F: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Comiss_VssWss),
    op(SSE_66, IaOpcode::Comisd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 30
pub(crate) static G_0F30: OpcodeGroup = &[last(ANY, IaOpcode::Wrmsr)];

// opcode 0F 31
pub(crate) static G_0F31: OpcodeGroup = &[last(ANY, IaOpcode::Rdtsc)];

// opcode 0F 32
pub(crate) static G_0F32: OpcodeGroup = &[last(ANY, IaOpcode::Rdmsr)];

// opcode 0F 33
pub(crate) static G_0F33: OpcodeGroup = &[last(ANY, IaOpcode::Rdpmc)];

// opcode 0F 34
pub(crate) static G_0F34: OpcodeGroup = &[last(ANY, IaOpcode::Sysenter)];

// opcode 0F 35
pub(crate) static G_0F35: OpcodeGroup = &[last(ANY, IaOpcode::Sysexit)];

// opcode 0F 37
pub(crate) static G_0F37: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Getsec),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 40
pub(crate) static G_0F40: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovo_GqEq),
    op(OS32, IaOpcode::Cmovo_GdEd),
    last(OS16, IaOpcode::Cmovo_GwEw),
];

// opcode 0F 41
pub(crate) static G_0F41: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovno_GqEq),
    op(OS32, IaOpcode::Cmovno_GdEd),
    last(OS16, IaOpcode::Cmovno_GwEw),
];

// opcode 0F 42
pub(crate) static G_0F42: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovb_GqEq),
    op(OS32, IaOpcode::Cmovb_GdEd),
    last(OS16, IaOpcode::Cmovb_GwEw),
];

// opcode 0F 43
pub(crate) static G_0F43: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovnb_GqEq),
    op(OS32, IaOpcode::Cmovnb_GdEd),
    last(OS16, IaOpcode::Cmovnb_GwEw),
];

// opcode 0F 44
pub(crate) static G_0F44: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovz_GqEq),
    op(OS32, IaOpcode::Cmovz_GdEd),
    last(OS16, IaOpcode::Cmovz_GwEw),
];

// opcode 0F 45
pub(crate) static G_0F45: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovnz_GqEq),
    op(OS32, IaOpcode::Cmovnz_GdEd),
    last(OS16, IaOpcode::Cmovnz_GwEw),
];

// opcode 0F 46
pub(crate) static G_0F46: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovbe_GqEq),
    op(OS32, IaOpcode::Cmovbe_GdEd),
    last(OS16, IaOpcode::Cmovbe_GwEw),
];

// opcode 0F 47
pub(crate) static G_0F47: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovnbe_GqEq),
    op(OS32, IaOpcode::Cmovnbe_GdEd),
    last(OS16, IaOpcode::Cmovnbe_GwEw),
];

// opcode 0F 48
pub(crate) static G_0F48: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovs_GqEq),
    op(OS32, IaOpcode::Cmovs_GdEd),
    last(OS16, IaOpcode::Cmovs_GwEw),
];

// opcode 0F 49
pub(crate) static G_0F49: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovns_GqEq),
    op(OS32, IaOpcode::Cmovns_GdEd),
    last(OS16, IaOpcode::Cmovns_GwEw),
];

// opcode 0F 4A
pub(crate) static G_0F4A: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovp_GqEq),
    op(OS32, IaOpcode::Cmovp_GdEd),
    last(OS16, IaOpcode::Cmovp_GwEw),
];

// opcode 0F 4B
pub(crate) static G_0F4B: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovnp_GqEq),
    op(OS32, IaOpcode::Cmovnp_GdEd),
    last(OS16, IaOpcode::Cmovnp_GwEw),
];

// opcode 0F 4C
pub(crate) static G_0F4C: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovl_GqEq),
    op(OS32, IaOpcode::Cmovl_GdEd),
    last(OS16, IaOpcode::Cmovl_GwEw),
];

// opcode 0F 4D
pub(crate) static G_0F4D: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovnl_GqEq),
    op(OS32, IaOpcode::Cmovnl_GdEd),
    last(OS16, IaOpcode::Cmovnl_GwEw),
];

// opcode 0F 4E
pub(crate) static G_0F4E: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovle_GqEq),
    op(OS32, IaOpcode::Cmovle_GdEd),
    last(OS16, IaOpcode::Cmovle_GwEw),
];

// opcode 0F 4F
pub(crate) static G_0F4F: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmovnle_GqEq),
    op(OS32, IaOpcode::Cmovnle_GdEd),
    last(OS16, IaOpcode::Cmovnle_GwEw),
];

// opcode 0F 50
pub(crate) static G_0F50: OpcodeGroup = &[
    op(SSE_NONE.and(MOD_REG), IaOpcode::Movmskps_GdUps),
    op(SSE_66.and(MOD_REG), IaOpcode::Movmskpd_GdUpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 51
pub(crate) static G_0F51: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Sqrtps_VpsWps),
    op(SSE_66, IaOpcode::Sqrtpd_VpdWpd),
    op(SSE_F3, IaOpcode::Sqrtss_VssWss),
    op(SSE_F2, IaOpcode::Sqrtsd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 52
pub(crate) static G_0F52: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Rsqrtps_VpsWps),
    op(SSE_F3, IaOpcode::Rsqrtss_VssWss),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 53
pub(crate) static G_0F53: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Rcpps_VpsWps),
    op(SSE_F3, IaOpcode::Rcpss_VssWss),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 54
pub(crate) static G_0F54: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Andps_VpsWps),
    op(SSE_66, IaOpcode::Andpd_VpdWpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 55
pub(crate) static G_0F55: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Andnps_VpsWps),
    op(SSE_66, IaOpcode::Andnpd_VpdWpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 56
pub(crate) static G_0F56: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Orps_VpsWps),
    op(SSE_66, IaOpcode::Orpd_VpdWpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 57
pub(crate) static G_0F57: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Xorps_VpsWps),
    op(SSE_66, IaOpcode::Xorpd_VpdWpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 58
pub(crate) static G_0F58: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Addps_VpsWps),
    op(SSE_66, IaOpcode::Addpd_VpdWpd),
    op(SSE_F3, IaOpcode::Addss_VssWss),
    op(SSE_F2, IaOpcode::Addsd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 59
pub(crate) static G_0F59: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Mulps_VpsWps),
    op(SSE_66, IaOpcode::Mulpd_VpdWpd),
    op(SSE_F3, IaOpcode::Mulss_VssWss),
    op(SSE_F2, IaOpcode::Mulsd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 5A
pub(crate) static G_0F5A: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Cvtps2pd_VpdWps),
    op(SSE_66, IaOpcode::Cvtpd2ps_VpsWpd),
    op(SSE_F3, IaOpcode::Cvtss2sd_VsdWss),
    op(SSE_F2, IaOpcode::Cvtsd2ss_VssWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 5B
pub(crate) static G_0F5B: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Cvtdq2ps_VpsWdq),
    op(SSE_66, IaOpcode::Cvtps2dq_VdqWps),
    op(SSE_F3, IaOpcode::Cvttps2dq_VdqWps),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 5C
pub(crate) static G_0F5C: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Subps_VpsWps),
    op(SSE_66, IaOpcode::Subpd_VpdWpd),
    op(SSE_F3, IaOpcode::Subss_VssWss),
    op(SSE_F2, IaOpcode::Subsd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 5D
pub(crate) static G_0F5D: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Minps_VpsWps),
    op(SSE_66, IaOpcode::Minpd_VpdWpd),
    op(SSE_F3, IaOpcode::Minss_VssWss),
    op(SSE_F2, IaOpcode::Minsd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 5E
pub(crate) static G_0F5E: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Divps_VpsWps),
    op(SSE_66, IaOpcode::Divpd_VpdWpd),
    op(SSE_F3, IaOpcode::Divss_VssWss),
    op(SSE_F2, IaOpcode::Divsd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 5F
pub(crate) static G_0F5F: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Maxps_VpsWps),
    op(SSE_66, IaOpcode::Maxpd_VpdWpd),
    op(SSE_F3, IaOpcode::Maxss_VssWss),
    op(SSE_F2, IaOpcode::Maxsd_VsdWsd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 60
pub(crate) static G_0F60: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Punpcklbw_PqQd),
    op(SSE_66, IaOpcode::Punpcklbw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 61
pub(crate) static G_0F61: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Punpcklwd_PqQd),
    op(SSE_66, IaOpcode::Punpcklwd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 62
pub(crate) static G_0F62: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Punpckldq_PqQd),
    op(SSE_66, IaOpcode::Punpckldq_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 63
pub(crate) static G_0F63: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Packsswb_PqQq),
    op(SSE_66, IaOpcode::Packsswb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 64
pub(crate) static G_0F64: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pcmpgtb_PqQq),
    op(SSE_66, IaOpcode::Pcmpgtb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 65
pub(crate) static G_0F65: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pcmpgtw_PqQq),
    op(SSE_66, IaOpcode::Pcmpgtw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 66
pub(crate) static G_0F66: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pcmpgtd_PqQq),
    op(SSE_66, IaOpcode::Pcmpgtd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 67
pub(crate) static G_0F67: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Packuswb_PqQq),
    op(SSE_66, IaOpcode::Packuswb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 68
pub(crate) static G_0F68: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Punpckhbw_PqQq),
    op(SSE_66, IaOpcode::Punpckhbw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 69
pub(crate) static G_0F69: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Punpckhwd_PqQq),
    op(SSE_66, IaOpcode::Punpckhwd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 6A
pub(crate) static G_0F6A: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Punpckhdq_PqQq),
    op(SSE_66, IaOpcode::Punpckhdq_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 6B
pub(crate) static G_0F6B: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Packssdw_PqQq),
    op(SSE_66, IaOpcode::Packssdw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 6C
pub(crate) static G_0F6C: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Punpcklqdq_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 6D
pub(crate) static G_0F6D: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Punpckhqdq_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 6E
pub(crate) static G_0F6E: OpcodeGroup = &[
    op(SSE_NONE.and(OS64), IaOpcode::Movq_PqEq),
    op(SSE_66.and(OS64), IaOpcode::Movq_VdqEq),
    op(SSE_NONE, IaOpcode::Movd_PqEd),
    op(SSE_66, IaOpcode::Movd_VdqEd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 6F
pub(crate) static G_0F6F: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Movq_PqQq),
    op(SSE_66, IaOpcode::Movdqa_VdqWdq),
    op(SSE_F3, IaOpcode::Movdqu_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 70
pub(crate) static G_0F70: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pshufw_PqQqIb),
    op(SSE_66, IaOpcode::Pshufd_VdqWdqIb),
    op(SSE_F3, IaOpcode::Pshufhw_VdqWdqIb),
    op(SSE_F2, IaOpcode::Pshuflw_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 71
pub(crate) static G_0F71: OpcodeGroup = &[
    op(NNN2.and(SSE_NONE).and(MOD_REG), IaOpcode::Psrlw_NqIb),
    op(NNN2.and(SSE_66).and(MOD_REG), IaOpcode::Psrlw_UdqIb),
    op(NNN4.and(SSE_NONE).and(MOD_REG), IaOpcode::Psraw_NqIb),
    op(NNN4.and(SSE_66).and(MOD_REG), IaOpcode::Psraw_UdqIb),
    op(NNN6.and(SSE_NONE).and(MOD_REG), IaOpcode::Psllw_NqIb),
    op(NNN6.and(SSE_66).and(MOD_REG), IaOpcode::Psllw_UdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 72
pub(crate) static G_0F72: OpcodeGroup = &[
    op(NNN2.and(SSE_NONE).and(MOD_REG), IaOpcode::Psrld_NqIb),
    op(NNN2.and(SSE_66).and(MOD_REG), IaOpcode::Psrld_UdqIb),
    op(NNN4.and(SSE_NONE).and(MOD_REG), IaOpcode::Psrad_NqIb),
    op(NNN4.and(SSE_66).and(MOD_REG), IaOpcode::Psrad_UdqIb),
    op(NNN6.and(SSE_NONE).and(MOD_REG), IaOpcode::Pslld_NqIb),
    op(NNN6.and(SSE_66).and(MOD_REG), IaOpcode::Pslld_UdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 73
pub(crate) static G_0F73: OpcodeGroup = &[
    op(NNN2.and(SSE_NONE).and(MOD_REG), IaOpcode::Psrlq_NqIb),
    op(NNN2.and(SSE_66).and(MOD_REG), IaOpcode::Psrlq_UdqIb),
    op(NNN3.and(SSE_66).and(MOD_REG), IaOpcode::Psrldq_UdqIb),
    op(NNN6.and(SSE_NONE).and(MOD_REG), IaOpcode::Psllq_NqIb),
    op(NNN6.and(SSE_66).and(MOD_REG), IaOpcode::Psllq_UdqIb),
    op(NNN7.and(SSE_66).and(MOD_REG), IaOpcode::Pslldq_UdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 74
pub(crate) static G_0F74: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pcmpeqb_PqQq),
    op(SSE_66, IaOpcode::Pcmpeqb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 75
pub(crate) static G_0F75: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pcmpeqw_PqQq),
    op(SSE_66, IaOpcode::Pcmpeqw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 76
pub(crate) static G_0F76: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pcmpeqd_PqQq),
    op(SSE_66, IaOpcode::Pcmpeqd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 77
pub(crate) static G_0F77: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Emms),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 78
pub(crate) static G_0F78: OpcodeGroup = &[
    op(SSE_NONE.and(IS32), IaOpcode::Vmread_EdGd),
    op(SSE_NONE.and(IS64), IaOpcode::Vmread_EqGq),
    op(SSE_66.and(MOD_REG).and(NNN0), IaOpcode::Extrq_UdqIbIb),
    op(SSE_F2.and(MOD_REG), IaOpcode::Insertq_VdqUqIbIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 79
pub(crate) static G_0F79: OpcodeGroup = &[
    op(SSE_NONE.and(IS32), IaOpcode::Vmwrite_GdEd),
    op(SSE_NONE.and(IS64), IaOpcode::Vmwrite_GqEq),
    op(SSE_66.and(MOD_REG), IaOpcode::Extrq_VdqUq),
    op(SSE_F2.and(MOD_REG), IaOpcode::Insertq_VdqUdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 7C
pub(crate) static G_0F7C: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Haddpd_VpdWpd),
    op(SSE_F2, IaOpcode::Haddps_VpsWps),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 7D
pub(crate) static G_0F7D: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Hsubpd_VpdWpd),
    op(SSE_F2, IaOpcode::Hsubps_VpsWps),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 7E
pub(crate) static G_0F7E: OpcodeGroup = &[
    op(SSE_NONE.and(OS64), IaOpcode::Movq_EqPq),
    op(SSE_66.and(OS64), IaOpcode::Movq_EqVq),
    op(SSE_NONE, IaOpcode::Movd_EdPq),
    op(SSE_66, IaOpcode::Movd_EdVd),
    op(SSE_F3, IaOpcode::Movq_VqWq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 7F
pub(crate) static G_0F7F: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Movq_QqPq),
    op(SSE_66, IaOpcode::Movdqa_WdqVdq),
    op(SSE_F3, IaOpcode::Movdqu_WdqVdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 80
pub(crate) static G_0F80_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jo_Jd),
    last(OS16, IaOpcode::Jo_Jw),
];

// opcode 0F 80
pub(crate) static G_0F80_64: OpcodeGroup = &[last(ANY, IaOpcode::Jo_Jq)];

// opcode 0F 81
pub(crate) static G_0F81_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jno_Jd),
    last(OS16, IaOpcode::Jno_Jw),
];

// opcode 0F 81
pub(crate) static G_0F81_64: OpcodeGroup = &[last(ANY, IaOpcode::Jno_Jq)];

// opcode 0F 82
pub(crate) static G_0F82_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jb_Jd),
    last(OS16, IaOpcode::Jb_Jw),
];

// opcode 0F 82
pub(crate) static G_0F82_64: OpcodeGroup = &[last(ANY, IaOpcode::Jb_Jq)];

// opcode 0F 83
pub(crate) static G_0F83_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jnb_Jd),
    last(OS16, IaOpcode::Jnb_Jw),
];

// opcode 0F 83
pub(crate) static G_0F83_64: OpcodeGroup = &[last(ANY, IaOpcode::Jnb_Jq)];

// opcode 0F 84
pub(crate) static G_0F84_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jz_Jd),
    last(OS16, IaOpcode::Jz_Jw),
];

// opcode 0F 84
pub(crate) static G_0F84_64: OpcodeGroup = &[last(ANY, IaOpcode::Jz_Jq)];

// opcode 0F 85
pub(crate) static G_0F85_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jnz_Jd),
    last(OS16, IaOpcode::Jnz_Jw),
];

// opcode 0F 85
pub(crate) static G_0F85_64: OpcodeGroup = &[last(ANY, IaOpcode::Jnz_Jq)];

// opcode 0F 86
pub(crate) static G_0F86_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jbe_Jd),
    last(OS16, IaOpcode::Jbe_Jw),
];

// opcode 0F 86
pub(crate) static G_0F86_64: OpcodeGroup = &[last(ANY, IaOpcode::Jbe_Jq)];

// opcode 0F 87
pub(crate) static G_0F87_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jnbe_Jd),
    last(OS16, IaOpcode::Jnbe_Jw),
];

// opcode 0F 87
pub(crate) static G_0F87_64: OpcodeGroup = &[last(ANY, IaOpcode::Jnbe_Jq)];

// opcode 0F 88
pub(crate) static G_0F88_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Js_Jd),
    last(OS16, IaOpcode::Js_Jw),
];

// opcode 0F 88
pub(crate) static G_0F88_64: OpcodeGroup = &[last(ANY, IaOpcode::Js_Jq)];

// opcode 0F 89
pub(crate) static G_0F89_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jns_Jd),
    last(OS16, IaOpcode::Jns_Jw),
];

// opcode 0F 89
pub(crate) static G_0F89_64: OpcodeGroup = &[last(ANY, IaOpcode::Jns_Jq)];

// opcode 0F 8A
pub(crate) static G_0F8A_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jp_Jd),
    last(OS16, IaOpcode::Jp_Jw),
];

// opcode 0F 8A
pub(crate) static G_0F8A_64: OpcodeGroup = &[last(ANY, IaOpcode::Jp_Jq)];

// opcode 0F 8B
pub(crate) static G_0F8B_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jnp_Jd),
    last(OS16, IaOpcode::Jnp_Jw),
];

// opcode 0F 8B
pub(crate) static G_0F8B_64: OpcodeGroup = &[last(ANY, IaOpcode::Jnp_Jq)];

// opcode 0F 8C
pub(crate) static G_0F8C_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jl_Jd),
    last(OS16, IaOpcode::Jl_Jw),
];

// opcode 0F 8C
pub(crate) static G_0F8C_64: OpcodeGroup = &[last(ANY, IaOpcode::Jl_Jq)];

// opcode 0F 8D
pub(crate) static G_0F8D_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jnl_Jd),
    last(OS16, IaOpcode::Jnl_Jw),
];

// opcode 0F 8D
pub(crate) static G_0F8D_64: OpcodeGroup = &[last(ANY, IaOpcode::Jnl_Jq)];

// opcode 0F 8E
pub(crate) static G_0F8E_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jle_Jd),
    last(OS16, IaOpcode::Jle_Jw),
];

// opcode 0F 8E
pub(crate) static G_0F8E_64: OpcodeGroup = &[last(ANY, IaOpcode::Jle_Jq)];

// opcode 0F 8F
pub(crate) static G_0F8F_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jnle_Jd),
    last(OS16, IaOpcode::Jnle_Jw),
];

// opcode 0F 8F
pub(crate) static G_0F8F_64: OpcodeGroup = &[last(ANY, IaOpcode::Jnle_Jq)];

// opcode 0F 90
pub(crate) static G_0F90: OpcodeGroup = &[last(ANY, IaOpcode::Seto_Eb)];

// opcode 0F 91
pub(crate) static G_0F91: OpcodeGroup = &[last(ANY, IaOpcode::Setno_Eb)];

// opcode 0F 92
pub(crate) static G_0F92: OpcodeGroup = &[last(ANY, IaOpcode::Setb_Eb)];

// opcode 0F 93
pub(crate) static G_0F93: OpcodeGroup = &[last(ANY, IaOpcode::Setnb_Eb)];

// opcode 0F 94
pub(crate) static G_0F94: OpcodeGroup = &[last(ANY, IaOpcode::Setz_Eb)];

// opcode 0F 95
pub(crate) static G_0F95: OpcodeGroup = &[last(ANY, IaOpcode::Setnz_Eb)];

// opcode 0F 96
pub(crate) static G_0F96: OpcodeGroup = &[last(ANY, IaOpcode::Setbe_Eb)];

// opcode 0F 97
pub(crate) static G_0F97: OpcodeGroup = &[last(ANY, IaOpcode::Setnbe_Eb)];

// opcode 0F 98
pub(crate) static G_0F98: OpcodeGroup = &[last(ANY, IaOpcode::Sets_Eb)];

// opcode 0F 99
pub(crate) static G_0F99: OpcodeGroup = &[last(ANY, IaOpcode::Setns_Eb)];

// opcode 0F 9A
pub(crate) static G_0F9A: OpcodeGroup = &[last(ANY, IaOpcode::Setp_Eb)];

// opcode 0F 9B
pub(crate) static G_0F9B: OpcodeGroup = &[last(ANY, IaOpcode::Setnp_Eb)];

// opcode 0F 9C
pub(crate) static G_0F9C: OpcodeGroup = &[last(ANY, IaOpcode::Setl_Eb)];

// opcode 0F 9D
pub(crate) static G_0F9D: OpcodeGroup = &[last(ANY, IaOpcode::Setnl_Eb)];

// opcode 0F 9E
pub(crate) static G_0F9E: OpcodeGroup = &[last(ANY, IaOpcode::Setle_Eb)];

// opcode 0F 9F
pub(crate) static G_0F9F: OpcodeGroup = &[last(ANY, IaOpcode::Setnle_Eb)];

// opcode 0F A0
pub(crate) static G_0FA0: OpcodeGroup = &[
    op(IS64.and(OS32_64), IaOpcode::Push_Op64_Sw),
    op(IS32.and(OS32), IaOpcode::Push_Op32_Sw),
    last(OS16, IaOpcode::Push_Op16_Sw),
];

// opcode 0F A1
pub(crate) static G_0FA1: OpcodeGroup = &[
    op(IS64.and(OS32_64), IaOpcode::Pop_Op64_Sw),
    op(IS32.and(OS32), IaOpcode::Pop_Op32_Sw),
    last(OS16, IaOpcode::Pop_Op16_Sw),
];

// opcode 0F A2
pub(crate) static G_0FA2: OpcodeGroup = &[last(ANY, IaOpcode::Cpuid)];

// opcode 0F A3
pub(crate) static G_0FA3: OpcodeGroup = &[
    op(OS64, IaOpcode::Bt_EqGq),
    op(OS32, IaOpcode::Bt_EdGd),
    last(OS16, IaOpcode::Bt_EwGw),
];

// opcode 0F A4
pub(crate) static G_0FA4: OpcodeGroup = &[
    op(OS64, IaOpcode::Shld_EqGqIb),
    op(OS32, IaOpcode::Shld_EdGdIb),
    last(OS16, IaOpcode::Shld_EwGwIb),
];

// opcode 0F A5
pub(crate) static G_0FA5: OpcodeGroup = &[
    op(OS64, IaOpcode::Shld_EqGq),
    op(OS32, IaOpcode::Shld_EdGd),
    last(OS16, IaOpcode::Shld_EwGw),
];

// opcode 0F A8
pub(crate) static G_0FA8: OpcodeGroup = &[
    op(IS64.and(OS32_64), IaOpcode::Push_Op64_Sw),
    op(IS32.and(OS32), IaOpcode::Push_Op32_Sw),
    last(OS16, IaOpcode::Push_Op16_Sw),
];

// opcode 0F A9
pub(crate) static G_0FA9: OpcodeGroup = &[
    op(IS64.and(OS32_64), IaOpcode::Pop_Op64_Sw),
    op(IS32.and(OS32), IaOpcode::Pop_Op32_Sw),
    last(OS16, IaOpcode::Pop_Op16_Sw),
];

// opcode 0F AA
pub(crate) static G_0FAA: OpcodeGroup = &[last(ANY, IaOpcode::Rsm)];

// opcode 0F AB
pub(crate) static G_0FAB: OpcodeGroup = &[
    op_lockable(OS64, IaOpcode::Bts_EqGq),
    op_lockable(OS32, IaOpcode::Bts_EdGd),
    last_lockable(OS16, IaOpcode::Bts_EwGw),
];

// opcode 0F AC
pub(crate) static G_0FAC: OpcodeGroup = &[
    op(OS64, IaOpcode::Shrd_EqGqIb),
    op(OS32, IaOpcode::Shrd_EdGdIb),
    last(OS16, IaOpcode::Shrd_EwGwIb),
];

// opcode 0F AD
pub(crate) static G_0FAD: OpcodeGroup = &[
    op(OS64, IaOpcode::Shrd_EqGq),
    op(OS32, IaOpcode::Shrd_EdGd),
    last(OS16, IaOpcode::Shrd_EwGw),
];

// opcode 0F AE
pub(crate) static G_0FAE: OpcodeGroup = &[
    op(OS16_32.and(IS64).and(MOD_REG).and(NNN0).and(SSE_F3), IaOpcode::Rdfsbase_Ed),
    op(OS16_32.and(IS64).and(MOD_REG).and(NNN1).and(SSE_F3), IaOpcode::Rdgsbase_Ed),
    op(OS16_32.and(IS64).and(MOD_REG).and(NNN2).and(SSE_F3), IaOpcode::Wrfsbase_Ed),
    op(OS16_32.and(IS64).and(MOD_REG).and(NNN3).and(SSE_F3), IaOpcode::Wrgsbase_Ed),
    op(OS64.and(MOD_REG).and(NNN0).and(SSE_F3), IaOpcode::Rdfsbase_Eq),
    op(OS64.and(MOD_REG).and(NNN1).and(SSE_F3), IaOpcode::Rdgsbase_Eq),
    op(OS64.and(MOD_REG).and(NNN2).and(SSE_F3), IaOpcode::Wrfsbase_Eq),
    op(OS64.and(MOD_REG).and(NNN3).and(SSE_F3), IaOpcode::Wrgsbase_Eq),
    op(OS16_32.and(NNN5).and(MOD_REG).and(SSE_F3), IaOpcode::Incsspd),
    op(OS64.and(NNN5).and(MOD_REG).and(SSE_F3), IaOpcode::Incsspq),
    op(NNN5.and(MOD_REG).and(SSE_NONE), IaOpcode::Lfence),
    op(NNN6.and(MOD_REG).and(SSE_NONE), IaOpcode::Mfence),
    op(NNN7.and(MOD_REG).and(SSE_NONE), IaOpcode::Sfence),
    op(NNN0.and(MOD_MEM).and(SSE_NONE), IaOpcode::Fxsave),
    op(NNN1.and(MOD_MEM).and(SSE_NONE), IaOpcode::Fxrstor),
    op(NNN2.and(MOD_MEM).and(SSE_NONE), IaOpcode::Ldmxcsr),
    op(NNN3.and(MOD_MEM).and(SSE_NONE), IaOpcode::Stmxcsr),
    op(NNN4.and(MOD_MEM).and(SSE_NONE), IaOpcode::Xsave),
    op(NNN5.and(MOD_MEM).and(SSE_NONE), IaOpcode::Xrstor),
    op(NNN6.and(MOD_MEM).and(SSE_NONE), IaOpcode::Xsaveopt),
    op(NNN6.and(MOD_MEM).and(SSE_66), IaOpcode::Clwb),
    op(NNN6.and(MOD_MEM).and(SSE_F3), IaOpcode::Clrssbsy),
    op(NNN7.and(MOD_MEM).and(SSE_NONE), IaOpcode::Clflush),
    op(NNN7.and(MOD_MEM).and(SSE_66), IaOpcode::Clflushopt),
    last(ANY, IaOpcode::Error),
];

// opcode 0F AF
pub(crate) static G_0FAF: OpcodeGroup = &[
    op(OS64, IaOpcode::Imul_GqEq),
    op(OS32, IaOpcode::Imul_GdEd),
    last(OS16, IaOpcode::Imul_GwEw),
];

// opcode 0F B0
pub(crate) static G_0FB0: OpcodeGroup = &[last_lockable(ANY, IaOpcode::Cmpxchg_EbGb)];

// opcode 0F B1
pub(crate) static G_0FB1: OpcodeGroup = &[
    op_lockable(OS64, IaOpcode::Cmpxchg_EqGq),
    op_lockable(OS32, IaOpcode::Cmpxchg_EdGd),
    last_lockable(OS16, IaOpcode::Cmpxchg_EwGw),
];

// opcode 0F B2
pub(crate) static G_0FB2: OpcodeGroup = &[
    op(OS64.and(MOD_MEM), IaOpcode::Lss_GqMp),
    op(OS32.and(MOD_MEM), IaOpcode::Lss_GdMp),
    op(OS16.and(MOD_MEM), IaOpcode::Lss_GwMp),
    last(ANY, IaOpcode::Error),
];

// opcode 0F B3
pub(crate) static G_0FB3: OpcodeGroup = &[
    op_lockable(OS64, IaOpcode::Btr_EqGq),
    op_lockable(OS32, IaOpcode::Btr_EdGd),
    last_lockable(OS16, IaOpcode::Btr_EwGw),
];

// opcode 0F B4
pub(crate) static G_0FB4: OpcodeGroup = &[
    op(OS64.and(MOD_MEM), IaOpcode::Lfs_GqMp),
    op(OS32.and(MOD_MEM), IaOpcode::Lfs_GdMp),
    op(OS16.and(MOD_MEM), IaOpcode::Lfs_GwMp),
    last(ANY, IaOpcode::Error),
];

// opcode 0F B5
pub(crate) static G_0FB5: OpcodeGroup = &[
    op(OS64.and(MOD_MEM), IaOpcode::Lgs_GqMp),
    op(OS32.and(MOD_MEM), IaOpcode::Lgs_GdMp),
    op(OS16.and(MOD_MEM), IaOpcode::Lgs_GwMp),
    last(ANY, IaOpcode::Error),
];

// opcode 0F B6
pub(crate) static G_0FB6: OpcodeGroup = &[
    op(OS64, IaOpcode::Movzx_GqEb),
    op(OS32, IaOpcode::Movzx_GdEb),
    last(OS16, IaOpcode::Movzx_GwEb),
];

// opcode 0F B7
pub(crate) static G_0FB7: OpcodeGroup = &[
    op(OS64, IaOpcode::Movzx_GqEw),
    op(OS32, IaOpcode::Movzx_GdEw),
    last(OS16, IaOpcode::Mov_GwEw),
];

// opcode 0F B8
pub(crate) static G_0FB8: OpcodeGroup = &[
    op(OS64.and(SSE_F3), IaOpcode::Popcnt_GqEq),
    op(OS32.and(SSE_F3), IaOpcode::Popcnt_GdEd),
    op(OS16.and(SSE_F3), IaOpcode::Popcnt_GwEw),
    last(ANY, IaOpcode::Error),
];

// opcode 0F B9
pub(crate) static G_0FB9: OpcodeGroup = &[last(ANY, IaOpcode::Ud1)];

// opcode 0F BA
pub(crate) static G_0FBA: OpcodeGroup = &[
    op(NNN4.and(OS64), IaOpcode::Bt_EqIb),
    op_lockable(NNN5.and(OS64), IaOpcode::Bts_EqIb),
    op_lockable(NNN6.and(OS64), IaOpcode::Btr_EqIb),
    op_lockable(NNN7.and(OS64), IaOpcode::Btc_EqIb),
    op(NNN4.and(OS32), IaOpcode::Bt_EdIb),
    op_lockable(NNN5.and(OS32), IaOpcode::Bts_EdIb),
    op_lockable(NNN6.and(OS32), IaOpcode::Btr_EdIb),
    op_lockable(NNN7.and(OS32), IaOpcode::Btc_EdIb),
    op(NNN4.and(OS16), IaOpcode::Bt_EwIb),
    op_lockable(NNN5.and(OS16), IaOpcode::Bts_EwIb),
    op_lockable(NNN6.and(OS16), IaOpcode::Btr_EwIb),
    op_lockable(NNN7.and(OS16), IaOpcode::Btc_EwIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F BB
pub(crate) static G_0FBB: OpcodeGroup = &[
    op_lockable(OS64, IaOpcode::Btc_EqGq),
    op_lockable(OS32, IaOpcode::Btc_EdGd),
    last_lockable(OS16, IaOpcode::Btc_EwGw),
];

// opcode 0F BC
pub(crate) static G_0FBC: OpcodeGroup = &[
    op(OS64.and(SSE_F3), IaOpcode::Tzcnt_GqEq),
    op(OS32.and(SSE_F3), IaOpcode::Tzcnt_GdEd),
    op(OS16.and(SSE_F3), IaOpcode::Tzcnt_GwEw),
    op(OS64, IaOpcode::Bsf_GqEq),
    op(OS32, IaOpcode::Bsf_GdEd),
    op(OS16, IaOpcode::Bsf_GwEw),
    last(ANY, IaOpcode::Error),
];

// opcode 0F BD
pub(crate) static G_0FBD: OpcodeGroup = &[
    op(OS64.and(SSE_F3), IaOpcode::Lzcnt_GqEq),
    op(OS32.and(SSE_F3), IaOpcode::Lzcnt_GdEd),
    op(OS16.and(SSE_F3), IaOpcode::Lzcnt_GwEw),
    op(OS64, IaOpcode::Bsr_GqEq),
    op(OS32, IaOpcode::Bsr_GdEd),
    op(OS16, IaOpcode::Bsr_GwEw),
    last(ANY, IaOpcode::Error),
];

// opcode 0F BC without BMI1: the F3 form stays BSF
pub(crate) static G_0FBC_BSF: OpcodeGroup = &[
    op(OS64, IaOpcode::Bsf_GqEq),
    op(OS32, IaOpcode::Bsf_GdEd),
    last(OS16, IaOpcode::Bsf_GwEw),
];

// opcode 0F BD without LZCNT: the F3 form stays BSR
pub(crate) static G_0FBD_BSR: OpcodeGroup = &[
    op(OS64, IaOpcode::Bsr_GqEq),
    op(OS32, IaOpcode::Bsr_GdEd),
    last(OS16, IaOpcode::Bsr_GwEw),
];

// opcode 0F BE
pub(crate) static G_0FBE: OpcodeGroup = &[
    op(OS64, IaOpcode::Movsx_GqEb),
    op(OS32, IaOpcode::Movsx_GdEb),
    last(OS16, IaOpcode::Movsx_GwEb),
];

// opcode 0F BF
pub(crate) static G_0FBF: OpcodeGroup = &[
    op(OS64, IaOpcode::Movsx_GqEw),
    op(OS32, IaOpcode::Movsx_GdEw),
    last(OS16, IaOpcode::Mov_GwEw),
];

// opcode 0F C0
pub(crate) static G_0FC0: OpcodeGroup = &[last_lockable(ANY, IaOpcode::Xadd_EbGb)];

// opcode 0F C1
pub(crate) static G_0FC1: OpcodeGroup = &[
    op_lockable(OS64, IaOpcode::Xadd_EqGq),
    op_lockable(OS32, IaOpcode::Xadd_EdGd),
    last_lockable(OS16, IaOpcode::Xadd_EwGw),
];

// opcode 0F C2
pub(crate) static G_0FC2: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Cmpps_VpsWpsIb),
    op(SSE_66, IaOpcode::Cmppd_VpdWpdIb),
    op(SSE_F3, IaOpcode::Cmpss_VssWssIb),
    op(SSE_F2, IaOpcode::Cmpsd_VsdWsdIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F C3
pub(crate) static G_0FC3: OpcodeGroup = &[
    op(SSE_NONE.and(MOD_MEM).and(IS64).and(OS16_32), IaOpcode::Movnti_Op64_MdGd),
    op(SSE_NONE.and(MOD_MEM).and(IS64).and(OS64), IaOpcode::Movnti_MqGq),
    op(SSE_NONE.and(MOD_MEM).and(IS32), IaOpcode::Movnti_Op32_MdGd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F C4
pub(crate) static G_0FC4: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pinsrw_PqEwIb),
    op(SSE_66, IaOpcode::Pinsrw_VdqEwIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F C5
pub(crate) static G_0FC5: OpcodeGroup = &[
    op(SSE_NONE.and(MOD_REG), IaOpcode::Pextrw_GdNqIb),
    op(SSE_66.and(MOD_REG), IaOpcode::Pextrw_GdUdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F C6
pub(crate) static G_0FC6: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Shufps_VpsWpsIb),
    op(SSE_66, IaOpcode::Shufpd_VpdWpdIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F C7
pub(crate) static G_0FC7: OpcodeGroup = &[
    op(OS16.and(MOD_REG).and(NNN6).and(NO_F2_F3), IaOpcode::Rdrand_Ew),
    op(OS16.and(MOD_REG).and(NNN7).and(NO_F2_F3), IaOpcode::Rdseed_Ew),
    op(OS32.and(MOD_REG).and(NNN6).and(NO_F2_F3), IaOpcode::Rdrand_Ed),
    op(OS32.and(MOD_REG).and(NNN7).and(NO_F2_F3), IaOpcode::Rdseed_Ed),
    op(OS64.and(MOD_REG).and(NNN6).and(NO_F2_F3), IaOpcode::Rdrand_Eq),
    op(OS64.and(MOD_REG).and(NNN7).and(NO_F2_F3), IaOpcode::Rdseed_Eq),
    op(NNN7.and(MOD_REG).and(SSE_F3), IaOpcode::Rdpid_Ed),
    op_lockable(OS16_32.and(NNN1).and(MOD_MEM), IaOpcode::Cmpxchg8b),
    op_lockable(OS64.and(NNN1).and(MOD_MEM), IaOpcode::Cmpxchg16b),
    op(NNN3.and(MOD_MEM).and(SSE_NONE), IaOpcode::Xrstors),
    op(NNN4.and(MOD_MEM).and(SSE_NONE), IaOpcode::Xsavec),
    op(NNN5.and(MOD_MEM).and(SSE_NONE), IaOpcode::Xsaves),
    op(NNN6.and(MOD_MEM).and(SSE_NONE), IaOpcode::Vmptrld_Mq),
    op(NNN6.and(MOD_MEM).and(SSE_66), IaOpcode::Vmclear_Mq),
    op(NNN6.and(MOD_MEM).and(SSE_F3), IaOpcode::Vmxon_Mq),
    op(NNN7.and(MOD_MEM).and(SSE_NONE), IaOpcode::Vmptrst_Mq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F C8
pub(crate) static G_0FC8X0FCF: OpcodeGroup = &[
    op(OS64, IaOpcode::Bswap_RRX),
    op(OS32, IaOpcode::Bswap_ERX),
    last(OS16, IaOpcode::Bswap_RX),
];

// opcode 0F D0
pub(crate) static G_0FD0: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Addsubpd_VpdWpd),
    op(SSE_F2, IaOpcode::Addsubps_VpsWps),
    last(ANY, IaOpcode::Error),
];

// opcode 0F D1
pub(crate) static G_0FD1: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psrlw_PqQq),
    op(SSE_66, IaOpcode::Psrlw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F D2
pub(crate) static G_0FD2: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psrld_PqQq),
    op(SSE_66, IaOpcode::Psrld_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F D3
pub(crate) static G_0FD3: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psrlq_PqQq),
    op(SSE_66, IaOpcode::Psrlq_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F D4
pub(crate) static G_0FD4: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Paddq_PqQq),
    op(SSE_66, IaOpcode::Paddq_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F D5
pub(crate) static G_0FD5: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pmullw_PqQq),
    op(SSE_66, IaOpcode::Pmullw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F D6
pub(crate) static G_0FD6: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Movq_WqVq),
    op(SSE_F3.and(MOD_REG), IaOpcode::Movq2dq_VdqQq),
    op(SSE_F2.and(MOD_REG), IaOpcode::Movdq2q_PqUdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F D7
pub(crate) static G_0FD7: OpcodeGroup = &[
    op(SSE_NONE.and(MOD_REG), IaOpcode::Pmovmskb_GdNq),
    op(SSE_66.and(MOD_REG), IaOpcode::Pmovmskb_GdUdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F D8
pub(crate) static G_0FD8: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psubusb_PqQq),
    op(SSE_66, IaOpcode::Psubusb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F D9
pub(crate) static G_0FD9: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psubusw_PqQq),
    op(SSE_66, IaOpcode::Psubusw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F DA
pub(crate) static G_0FDA: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pminub_PqQq),
    op(SSE_66, IaOpcode::Pminub_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F DB
pub(crate) static G_0FDB: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pand_PqQq),
    op(SSE_66, IaOpcode::Pand_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F DC
pub(crate) static G_0FDC: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Paddusb_PqQq),
    op(SSE_66, IaOpcode::Paddusb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F DD
pub(crate) static G_0FDD: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Paddusw_PqQq),
    op(SSE_66, IaOpcode::Paddusw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F DE
pub(crate) static G_0FDE: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pmaxub_PqQq),
    op(SSE_66, IaOpcode::Pmaxub_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F DF
pub(crate) static G_0FDF: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pandn_PqQq),
    op(SSE_66, IaOpcode::Pandn_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F E0
pub(crate) static G_0FE0: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pavgb_PqQq),
    op(SSE_66, IaOpcode::Pavgb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F E1
pub(crate) static G_0FE1: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psraw_PqQq),
    op(SSE_66, IaOpcode::Psraw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F E2
pub(crate) static G_0FE2: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psrad_PqQq),
    op(SSE_66, IaOpcode::Psrad_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F E3
pub(crate) static G_0FE3: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pavgw_PqQq),
    op(SSE_66, IaOpcode::Pavgw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F E4
pub(crate) static G_0FE4: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pmulhuw_PqQq),
    op(SSE_66, IaOpcode::Pmulhuw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F E5
pub(crate) static G_0FE5: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pmulhw_PqQq),
    op(SSE_66, IaOpcode::Pmulhw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F E6
pub(crate) static G_0FE6: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Cvttpd2dq_VqWpd),
    op(SSE_F3, IaOpcode::Cvtdq2pd_VpdWq),
    op(SSE_F2, IaOpcode::Cvtpd2dq_VqWpd),
    last(ANY, IaOpcode::Error),
];

// opcode 0F E7
pub(crate) static G_0FE7: OpcodeGroup = &[
    op(SSE_NONE.and(MOD_MEM), IaOpcode::Movntq_MqPq),
    op(SSE_66.and(MOD_MEM), IaOpcode::Movntdq_MdqVdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F E8
pub(crate) static G_0FE8: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psubsb_PqQq),
    op(SSE_66, IaOpcode::Psubsb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F E9
pub(crate) static G_0FE9: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psubsw_PqQq),
    op(SSE_66, IaOpcode::Psubsw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F EA
pub(crate) static G_0FEA: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pminsw_PqQq),
    op(SSE_66, IaOpcode::Pminsw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F EB
pub(crate) static G_0FEB: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Por_PqQq),
    op(SSE_66, IaOpcode::Por_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F EC
pub(crate) static G_0FEC: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Paddsb_PqQq),
    op(SSE_66, IaOpcode::Paddsb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F ED
pub(crate) static G_0FED: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Paddsw_PqQq),
    op(SSE_66, IaOpcode::Paddsw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F EE
pub(crate) static G_0FEE: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pmaxsw_PqQq),
    op(SSE_66, IaOpcode::Pmaxsw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F EF
pub(crate) static G_0FEF: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pxor_PqQq),
    op(SSE_66, IaOpcode::Pxor_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F F0
pub(crate) static G_0FF0: OpcodeGroup = &[
    op(SSE_F2.and(MOD_MEM), IaOpcode::Lddqu_VdqMdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F F1
pub(crate) static G_0FF1: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psllw_PqQq),
    op(SSE_66, IaOpcode::Psllw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F F2
pub(crate) static G_0FF2: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pslld_PqQq),
    op(SSE_66, IaOpcode::Pslld_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F F3
pub(crate) static G_0FF3: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psllq_PqQq),
    op(SSE_66, IaOpcode::Psllq_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F F4
pub(crate) static G_0FF4: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pmuludq_PqQq),
    op(SSE_66, IaOpcode::Pmuludq_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F F5
pub(crate) static G_0FF5: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Pmaddwd_PqQq),
    op(SSE_66, IaOpcode::Pmaddwd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F F6
pub(crate) static G_0FF6: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psadbw_PqQq),
    op(SSE_66, IaOpcode::Psadbw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F F7
pub(crate) static G_0FF7: OpcodeGroup = &[
    op(SSE_NONE.and(MOD_REG), IaOpcode::Maskmovq_PqNq),
    op(SSE_66.and(MOD_REG), IaOpcode::Maskmovdqu_VdqUdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F F8
pub(crate) static G_0FF8: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psubb_PqQq),
    op(SSE_66, IaOpcode::Psubb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F F9
pub(crate) static G_0FF9: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psubw_PqQq),
    op(SSE_66, IaOpcode::Psubw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F FA
pub(crate) static G_0FFA: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psubd_PqQq),
    op(SSE_66, IaOpcode::Psubd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F FB
pub(crate) static G_0FFB: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Psubq_PqQq),
    op(SSE_66, IaOpcode::Psubq_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F FC
pub(crate) static G_0FFC: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Paddb_PqQq),
    op(SSE_66, IaOpcode::Paddb_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F FD
pub(crate) static G_0FFD: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Paddw_PqQq),
    op(SSE_66, IaOpcode::Paddw_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F FE
pub(crate) static G_0FFE: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Paddd_PqQq),
    op(SSE_66, IaOpcode::Paddd_VdqWdq),
    last(ANY, IaOpcode::Error),
];

// opcode 0F FF
pub(crate) static G_0FFF: OpcodeGroup = &[last(ANY, IaOpcode::Ud0)];
