//! Descriptor groups for the one-byte opcode map.

use crate::ids::IaOpcode;
use crate::matcher::*;

// opcode 00
pub(crate) static G_00: OpcodeGroup = &[last_lockable(ANY, IaOpcode::Add_EbGb)];

// opcode 01
pub(crate) static G_01: OpcodeGroup = &[
    op_lockable(OS64, IaOpcode::Add_EqGq),
    op_lockable(OS32, IaOpcode::Add_EdGd),
    last_lockable(OS16, IaOpcode::Add_EwGw),
];

// opcode 02
pub(crate) static G_02: OpcodeGroup = &[last(ANY, IaOpcode::Add_GbEb)];

// opcode 03
pub(crate) static G_03: OpcodeGroup = &[
    op(OS64, IaOpcode::Add_GqEq),
    op(OS32, IaOpcode::Add_GdEd),
    last(OS16, IaOpcode::Add_GwEw),
];

// opcode 04
pub(crate) static G_04: OpcodeGroup = &[last(ANY, IaOpcode::Add_ALIb)];

// opcode 05
pub(crate) static G_05: OpcodeGroup = &[
    op(OS64, IaOpcode::Add_RAXId),
    op(OS32, IaOpcode::Add_EAXId),
    last(OS16, IaOpcode::Add_AXIw),
];

// opcode 06
pub(crate) static G_06: OpcodeGroup = &[
    op(OS32.and(IS32), IaOpcode::Push_Op32_Sw),
    last(OS16.and(IS32), IaOpcode::Push_Op16_Sw),
];

// opcode 07
pub(crate) static G_07: OpcodeGroup = &[
    op(OS32.and(IS32), IaOpcode::Pop_Op32_Sw),
    last(OS16.and(IS32), IaOpcode::Pop_Op16_Sw),
];

// opcode 08
pub(crate) static G_08: OpcodeGroup = &[last_lockable(ANY, IaOpcode::Or_EbGb)];

// opcode 09
pub(crate) static G_09: OpcodeGroup = &[
    op_lockable(OS64, IaOpcode::Or_EqGq),
    op_lockable(OS32, IaOpcode::Or_EdGd),
    last_lockable(OS16, IaOpcode::Or_EwGw),
];

// opcode 0A
pub(crate) static G_0A: OpcodeGroup = &[last(ANY, IaOpcode::Or_GbEb)];

// opcode 0B
pub(crate) static G_0B: OpcodeGroup = &[
    op(OS64, IaOpcode::Or_GqEq),
    op(OS32, IaOpcode::Or_GdEd),
    last(OS16, IaOpcode::Or_GwEw),
];

// opcode 0C
pub(crate) static G_0C: OpcodeGroup = &[last(ANY, IaOpcode::Or_ALIb)];

// opcode 0D
pub(crate) static G_0D: OpcodeGroup = &[
    op(OS64, IaOpcode::Or_RAXId),
    op(OS32, IaOpcode::Or_EAXId),
    last(OS16, IaOpcode::Or_AXIw),
];

// opcode 0E
pub(crate) static G_0E: OpcodeGroup = &[
    op(OS32.and(IS32), IaOpcode::Push_Op32_Sw),
    last(OS16.and(IS32), IaOpcode::Push_Op16_Sw),
];

// opcode 10
pub(crate) static G_10: OpcodeGroup = &[last_lockable(ANY, IaOpcode::Adc_EbGb)];

// opcode 11
pub(crate) static G_11: OpcodeGroup = &[
    op_lockable(OS64, IaOpcode::Adc_EqGq),
    op_lockable(OS32, IaOpcode::Adc_EdGd),
    last_lockable(OS16, IaOpcode::Adc_EwGw),
];

// opcode 12
pub(crate) static G_12: OpcodeGroup = &[last(ANY, IaOpcode::Adc_GbEb)];

// opcode 13
pub(crate) static G_13: OpcodeGroup = &[
    op(OS64, IaOpcode::Adc_GqEq),
    op(OS32, IaOpcode::Adc_GdEd),
    last(OS16, IaOpcode::Adc_GwEw),
];

// opcode 14
pub(crate) static G_14: OpcodeGroup = &[last(ANY, IaOpcode::Adc_ALIb)];

// opcode 15
pub(crate) static G_15: OpcodeGroup = &[
    op(OS64, IaOpcode::Adc_RAXId),
    op(OS32, IaOpcode::Adc_EAXId),
    last(OS16, IaOpcode::Adc_AXIw),
];

// opcode 16
pub(crate) static G_16: OpcodeGroup = &[
    op(OS32.and(IS32), IaOpcode::Push_Op32_Sw),
    last(OS16.and(IS32), IaOpcode::Push_Op16_Sw),
];

// opcode 17
pub(crate) static G_17: OpcodeGroup = &[
    op(OS32.and(IS32), IaOpcode::Pop_Op32_Sw),
    last(OS16.and(IS32), IaOpcode::Pop_Op16_Sw),
];

// opcode 18
pub(crate) static G_18: OpcodeGroup = &[last_lockable(ANY, IaOpcode::Sbb_EbGb)];

// opcode 19
pub(crate) static G_19: OpcodeGroup = &[
    op_lockable(OS64, IaOpcode::Sbb_EqGq),
    op_lockable(OS32, IaOpcode::Sbb_EdGd),
    last_lockable(OS16, IaOpcode::Sbb_EwGw),
];

// opcode 1A
pub(crate) static G_1A: OpcodeGroup = &[last(ANY, IaOpcode::Sbb_GbEb)];

// opcode 1B
pub(crate) static G_1B: OpcodeGroup = &[
    op(OS64, IaOpcode::Sbb_GqEq),
    op(OS32, IaOpcode::Sbb_GdEd),
    last(OS16, IaOpcode::Sbb_GwEw),
];

// opcode 1C
pub(crate) static G_1C: OpcodeGroup = &[last(ANY, IaOpcode::Sbb_ALIb)];

// opcode 1D
pub(crate) static G_1D: OpcodeGroup = &[
    op(OS64, IaOpcode::Sbb_RAXId),
    op(OS32, IaOpcode::Sbb_EAXId),
    last(OS16, IaOpcode::Sbb_AXIw),
];

// opcode 1E
pub(crate) static G_1E: OpcodeGroup = &[
    op(OS32.and(IS32), IaOpcode::Push_Op32_Sw),
    last(OS16.and(IS32), IaOpcode::Push_Op16_Sw),
];

// opcode 1F
pub(crate) static G_1F: OpcodeGroup = &[
    op(OS32.and(IS32), IaOpcode::Pop_Op32_Sw),
    last(OS16.and(IS32), IaOpcode::Pop_Op16_Sw),
];

// opcode 20
pub(crate) static G_20: OpcodeGroup = &[last_lockable(ANY, IaOpcode::And_EbGb)];

// opcode 21
pub(crate) static G_21: OpcodeGroup = &[
    op_lockable(OS64, IaOpcode::And_EqGq),
    op_lockable(OS32, IaOpcode::And_EdGd),
    last_lockable(OS16, IaOpcode::And_EwGw),
];

// opcode 22
pub(crate) static G_22: OpcodeGroup = &[last(ANY, IaOpcode::And_GbEb)];

// opcode 23
pub(crate) static G_23: OpcodeGroup = &[
    op(OS64, IaOpcode::And_GqEq),
    op(OS32, IaOpcode::And_GdEd),
    last(OS16, IaOpcode::And_GwEw),
];

// opcode 24
pub(crate) static G_24: OpcodeGroup = &[last(ANY, IaOpcode::And_ALIb)];

// opcode 25
pub(crate) static G_25: OpcodeGroup = &[
    op(OS64, IaOpcode::And_RAXId),
    op(OS32, IaOpcode::And_EAXId),
    last(OS16, IaOpcode::And_AXIw),
];

// opcode 27
pub(crate) static G_27: OpcodeGroup = &[last(ANY, IaOpcode::Daa)];

// opcode 28
pub(crate) static G_28: OpcodeGroup = &[last_lockable(ANY, IaOpcode::Sub_EbGb)];

// opcode 29
pub(crate) static G_29: OpcodeGroup = &[
    op(OS64.and(SRC_EQ_DST), IaOpcode::Sub_EqGq_ZeroIdiom),
    op(OS32.and(SRC_EQ_DST), IaOpcode::Sub_EdGd_ZeroIdiom),
    op(OS16.and(SRC_EQ_DST), IaOpcode::Sub_EwGw_ZeroIdiom),
    op_lockable(OS64, IaOpcode::Sub_EqGq),
    op_lockable(OS32, IaOpcode::Sub_EdGd),
    op_lockable(OS16, IaOpcode::Sub_EwGw),
    last(ANY, IaOpcode::Error),
];

// opcode 2A
pub(crate) static G_2A: OpcodeGroup = &[last(ANY, IaOpcode::Sub_GbEb)];

// opcode 2B
pub(crate) static G_2B: OpcodeGroup = &[
    op(OS64.and(SRC_EQ_DST), IaOpcode::Sub_GqEq_ZeroIdiom),
    op(OS32.and(SRC_EQ_DST), IaOpcode::Sub_GdEd_ZeroIdiom),
    op(OS16.and(SRC_EQ_DST), IaOpcode::Sub_GwEw_ZeroIdiom),
    op(OS64, IaOpcode::Sub_GqEq),
    op(OS32, IaOpcode::Sub_GdEd),
    op(OS16, IaOpcode::Sub_GwEw),
    last(ANY, IaOpcode::Error),
];

// opcode 2C
pub(crate) static G_2C: OpcodeGroup = &[last(ANY, IaOpcode::Sub_ALIb)];

// opcode 2D
pub(crate) static G_2D: OpcodeGroup = &[
    op(OS64, IaOpcode::Sub_RAXId),
    op(OS32, IaOpcode::Sub_EAXId),
    last(OS16, IaOpcode::Sub_AXIw),
];

// opcode 2F
pub(crate) static G_2F: OpcodeGroup = &[last(ANY, IaOpcode::Das)];

// opcode 30
pub(crate) static G_30: OpcodeGroup = &[last_lockable(ANY, IaOpcode::Xor_EbGb)];

// opcode 31
pub(crate) static G_31: OpcodeGroup = &[
    op(OS64.and(SRC_EQ_DST), IaOpcode::Xor_EqGq_ZeroIdiom),
    op(OS32.and(SRC_EQ_DST), IaOpcode::Xor_EdGd_ZeroIdiom),
    op(OS16.and(SRC_EQ_DST), IaOpcode::Xor_EwGw_ZeroIdiom),
    op_lockable(OS64, IaOpcode::Xor_EqGq),
    op_lockable(OS32, IaOpcode::Xor_EdGd),
    op_lockable(OS16, IaOpcode::Xor_EwGw),
    last(ANY, IaOpcode::Error),
];

// opcode 32
pub(crate) static G_32: OpcodeGroup = &[last(ANY, IaOpcode::Xor_GbEb)];

// opcode 33
pub(crate) static G_33: OpcodeGroup = &[
    op(OS64.and(SRC_EQ_DST), IaOpcode::Xor_GqEq_ZeroIdiom),
    op(OS32.and(SRC_EQ_DST), IaOpcode::Xor_GdEd_ZeroIdiom),
    op(OS16.and(SRC_EQ_DST), IaOpcode::Xor_GwEw_ZeroIdiom),
    op(OS64, IaOpcode::Xor_GqEq),
    op(OS32, IaOpcode::Xor_GdEd),
    op(OS16, IaOpcode::Xor_GwEw),
    last(ANY, IaOpcode::Error),
];

// opcode 34
pub(crate) static G_34: OpcodeGroup = &[last(ANY, IaOpcode::Xor_ALIb)];

// opcode 35
pub(crate) static G_35: OpcodeGroup = &[
    op(OS64, IaOpcode::Xor_RAXId),
    op(OS32, IaOpcode::Xor_EAXId),
    last(OS16, IaOpcode::Xor_AXIw),
];

// opcode 37
pub(crate) static G_37: OpcodeGroup = &[last(ANY, IaOpcode::Aaa)];

// opcode 38
pub(crate) static G_38: OpcodeGroup = &[last(ANY, IaOpcode::Cmp_EbGb)];

// opcode 39
pub(crate) static G_39: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmp_EqGq),
    op(OS32, IaOpcode::Cmp_EdGd),
    last(OS16, IaOpcode::Cmp_EwGw),
];

// opcode 3A
pub(crate) static G_3A: OpcodeGroup = &[last(ANY, IaOpcode::Cmp_GbEb)];

// opcode 3B
pub(crate) static G_3B: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmp_GqEq),
    op(OS32, IaOpcode::Cmp_GdEd),
    last(OS16, IaOpcode::Cmp_GwEw),
];

// opcode 3C
pub(crate) static G_3C: OpcodeGroup = &[last(ANY, IaOpcode::Cmp_ALIb)];

// opcode 3D
pub(crate) static G_3D: OpcodeGroup = &[
    op(OS64, IaOpcode::Cmp_RAXId),
    op(OS32, IaOpcode::Cmp_EAXId),
    last(OS16, IaOpcode::Cmp_AXIw),
];

// opcode 3F
pub(crate) static G_3F: OpcodeGroup = &[last(ANY, IaOpcode::Aas)];

// opcode 40
pub(crate) static G_40X47: OpcodeGroup = &[
    op_lockable(OS32.and(IS32), IaOpcode::Inc_Ed),
    last_lockable(OS16.and(IS32), IaOpcode::Inc_Ew),
];

// opcode 48
pub(crate) static G_48X4F: OpcodeGroup = &[
    op_lockable(OS32.and(IS32), IaOpcode::Dec_Ed),
    last_lockable(OS16.and(IS32), IaOpcode::Dec_Ew),
];

// opcode 50
pub(crate) static G_50X57: OpcodeGroup = &[
    op(OS32_64.and(IS64), IaOpcode::Push_Eq),
    op(OS32.and(IS32), IaOpcode::Push_Ed),
    last(OS16, IaOpcode::Push_Ew),
];

// opcode 58
pub(crate) static G_58X5F: OpcodeGroup = &[
    op(OS32_64.and(IS64), IaOpcode::Pop_Eq),
    op(OS32.and(IS32), IaOpcode::Pop_Ed),
    last(OS16, IaOpcode::Pop_Ew),
];

// opcode 60
pub(crate) static G_60: OpcodeGroup = &[
    op(OS32.and(IS32), IaOpcode::Pusha_Op32),
    last(OS16.and(IS32), IaOpcode::Pusha_Op16),
];

// opcode 61
pub(crate) static G_61: OpcodeGroup = &[
    op(OS32.and(IS32), IaOpcode::Popa_Op32),
    last(OS16.and(IS32), IaOpcode::Popa_Op16),
];

// opcode 62
pub(crate) static G_62: OpcodeGroup = &[
    op(OS32.and(MOD_MEM).and(IS32), IaOpcode::Bound_GdMa),
    op(OS16.and(MOD_MEM).and(IS32), IaOpcode::Bound_GwMa),
    last(ANY, IaOpcode::Error),
];

// opcode 63
pub(crate) static G_63_32: OpcodeGroup = &[last(OS16_32, IaOpcode::Arpl_EwGw)];

// opcode 63
pub(crate) static G_63_64: OpcodeGroup = &[
    op(OS64, IaOpcode::Movsxd_GqEd),
    op(OS32, IaOpcode::Mov_Op64_GdEd),
    last(OS16, IaOpcode::Mov_GwEw),
];

// opcode 68
pub(crate) static G_68: OpcodeGroup = &[
    op(OS32_64.and(IS64), IaOpcode::Push_Op64_Id),
    op(OS32.and(IS32), IaOpcode::Push_Id),
    last(OS16, IaOpcode::Push_Iw),
];

// opcode 69
pub(crate) static G_69: OpcodeGroup = &[
    op(OS64, IaOpcode::Imul_GqEqId),
    op(OS32, IaOpcode::Imul_GdEdId),
    last(OS16, IaOpcode::Imul_GwEwIw),
];

// opcode 6A
pub(crate) static G_6A: OpcodeGroup = &[
    op(OS32_64.and(IS64), IaOpcode::Push_Op64_sIb),
    op(OS32.and(IS32), IaOpcode::Push_sIb32),
    last(OS16, IaOpcode::Push_sIb16),
];

// opcode 6B
pub(crate) static G_6B: OpcodeGroup = &[
    op(OS64, IaOpcode::Imul_GqEqsIb),
    op(OS32, IaOpcode::Imul_GdEdsIb),
    last(OS16, IaOpcode::Imul_GwEwsIb),
];

// opcode 6C
pub(crate) static G_6C: OpcodeGroup = &[last(ANY, IaOpcode::RepInsb_YbDX)];

// opcode 6D
pub(crate) static G_6D: OpcodeGroup = &[
    op(OS32_64, IaOpcode::RepInsd_YdDX),
    last(OS16, IaOpcode::RepInsw_YwDX),
];

// opcode 6E
pub(crate) static G_6E: OpcodeGroup = &[last(ANY, IaOpcode::RepOutsb_DXXb)];

// opcode 6F
pub(crate) static G_6F: OpcodeGroup = &[
    op(OS32_64, IaOpcode::RepOutsd_DXXd),
    last(OS16, IaOpcode::RepOutsw_DXXw),
];

// opcode 70
pub(crate) static G_70_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jo_Jbd),
    last(OS16, IaOpcode::Jo_Jbw),
];

// opcode 70
pub(crate) static G_70_64: OpcodeGroup = &[last(ANY, IaOpcode::Jo_Jbq)];

// opcode 71
pub(crate) static G_71_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jno_Jbd),
    last(OS16, IaOpcode::Jno_Jbw),
];

// opcode 71
pub(crate) static G_71_64: OpcodeGroup = &[last(ANY, IaOpcode::Jno_Jbq)];

// opcode 72
pub(crate) static G_72_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jb_Jbd),
    last(OS16, IaOpcode::Jb_Jbw),
];

// opcode 72
pub(crate) static G_72_64: OpcodeGroup = &[last(ANY, IaOpcode::Jb_Jbq)];

// opcode 73
pub(crate) static G_73_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jnb_Jbd),
    last(OS16, IaOpcode::Jnb_Jbw),
];

// opcode 73
pub(crate) static G_73_64: OpcodeGroup = &[last(ANY, IaOpcode::Jnb_Jbq)];

// opcode 74
pub(crate) static G_74_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jz_Jbd),
    last(OS16, IaOpcode::Jz_Jbw),
];

// opcode 74
pub(crate) static G_74_64: OpcodeGroup = &[last(ANY, IaOpcode::Jz_Jbq)];

// opcode 75
pub(crate) static G_75_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jnz_Jbd),
    last(OS16, IaOpcode::Jnz_Jbw),
];

// opcode 75
pub(crate) static G_75_64: OpcodeGroup = &[last(ANY, IaOpcode::Jnz_Jbq)];

// opcode 76
pub(crate) static G_76_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jbe_Jbd),
    last(OS16, IaOpcode::Jbe_Jbw),
];

// opcode 76
pub(crate) static G_76_64: OpcodeGroup = &[last(ANY, IaOpcode::Jbe_Jbq)];

// opcode 77
pub(crate) static G_77_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jnbe_Jbd),
    last(OS16, IaOpcode::Jnbe_Jbw),
];

// opcode 77
pub(crate) static G_77_64: OpcodeGroup = &[last(ANY, IaOpcode::Jnbe_Jbq)];

// opcode 78
pub(crate) static G_78_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Js_Jbd),
    last(OS16, IaOpcode::Js_Jbw),
];

// opcode 78
pub(crate) static G_78_64: OpcodeGroup = &[last(ANY, IaOpcode::Js_Jbq)];

// opcode 79
pub(crate) static G_79_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jns_Jbd),
    last(OS16, IaOpcode::Jns_Jbw),
];

// opcode 79
pub(crate) static G_79_64: OpcodeGroup = &[last(ANY, IaOpcode::Jns_Jbq)];

// opcode 7A
pub(crate) static G_7A_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jp_Jbd),
    last(OS16, IaOpcode::Jp_Jbw),
];

// opcode 7A
pub(crate) static G_7A_64: OpcodeGroup = &[last(ANY, IaOpcode::Jp_Jbq)];

// opcode 7B
pub(crate) static G_7B_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jnp_Jbd),
    last(OS16, IaOpcode::Jnp_Jbw),
];

// opcode 7B
pub(crate) static G_7B_64: OpcodeGroup = &[last(ANY, IaOpcode::Jnp_Jbq)];

// opcode 7C
pub(crate) static G_7C_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jl_Jbd),
    last(OS16, IaOpcode::Jl_Jbw),
];

// opcode 7C
pub(crate) static G_7C_64: OpcodeGroup = &[last(ANY, IaOpcode::Jl_Jbq)];

// opcode 7D
pub(crate) static G_7D_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jnl_Jbd),
    last(OS16, IaOpcode::Jnl_Jbw),
];

// opcode 7D
pub(crate) static G_7D_64: OpcodeGroup = &[last(ANY, IaOpcode::Jnl_Jbq)];

// opcode 7E
pub(crate) static G_7E_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jle_Jbd),
    last(OS16, IaOpcode::Jle_Jbw),
];

// opcode 7E
pub(crate) static G_7E_64: OpcodeGroup = &[last(ANY, IaOpcode::Jle_Jbq)];

// opcode 7F
pub(crate) static G_7F_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jnle_Jbd),
    last(OS16, IaOpcode::Jnle_Jbw),
];

// opcode 7F
pub(crate) static G_7F_64: OpcodeGroup = &[last(ANY, IaOpcode::Jnle_Jbq)];

// opcode 80
pub(crate) static G_80: OpcodeGroup = &[
    op_lockable(NNN0, IaOpcode::Add_EbIb),
    op_lockable(NNN1, IaOpcode::Or_EbIb),
    op_lockable(NNN2, IaOpcode::Adc_EbIb),
    op_lockable(NNN3, IaOpcode::Sbb_EbIb),
    op_lockable(NNN4, IaOpcode::And_EbIb),
    op_lockable(NNN5, IaOpcode::Sub_EbIb),
    op_lockable(NNN6, IaOpcode::Xor_EbIb),
    op(NNN7, IaOpcode::Cmp_EbIb),
    last(ANY, IaOpcode::Error),
];

// opcode 81
pub(crate) static G_81: OpcodeGroup = &[
    op_lockable(NNN0.and(OS64), IaOpcode::Add_EqId),
    op_lockable(NNN1.and(OS64), IaOpcode::Or_EqId),
    op_lockable(NNN2.and(OS64), IaOpcode::Adc_EqId),
    op_lockable(NNN3.and(OS64), IaOpcode::Sbb_EqId),
    op_lockable(NNN4.and(OS64), IaOpcode::And_EqId),
    op_lockable(NNN5.and(OS64), IaOpcode::Sub_EqId),
    op_lockable(NNN6.and(OS64), IaOpcode::Xor_EqId),
    op(NNN7.and(OS64), IaOpcode::Cmp_EqId),
    op_lockable(NNN0.and(OS32), IaOpcode::Add_EdId),
    op_lockable(NNN1.and(OS32), IaOpcode::Or_EdId),
    op_lockable(NNN2.and(OS32), IaOpcode::Adc_EdId),
    op_lockable(NNN3.and(OS32), IaOpcode::Sbb_EdId),
    op_lockable(NNN4.and(OS32), IaOpcode::And_EdId),
    op_lockable(NNN5.and(OS32), IaOpcode::Sub_EdId),
    op_lockable(NNN6.and(OS32), IaOpcode::Xor_EdId),
    op(NNN7.and(OS32), IaOpcode::Cmp_EdId),
    op_lockable(NNN0.and(OS16), IaOpcode::Add_EwIw),
    op_lockable(NNN1.and(OS16), IaOpcode::Or_EwIw),
    op_lockable(NNN2.and(OS16), IaOpcode::Adc_EwIw),
    op_lockable(NNN3.and(OS16), IaOpcode::Sbb_EwIw),
    op_lockable(NNN4.and(OS16), IaOpcode::And_EwIw),
    op_lockable(NNN5.and(OS16), IaOpcode::Sub_EwIw),
    op_lockable(NNN6.and(OS16), IaOpcode::Xor_EwIw),
    op(NNN7.and(OS16), IaOpcode::Cmp_EwIw),
    last(ANY, IaOpcode::Error),
];

// opcode 83
pub(crate) static G_83: OpcodeGroup = &[
    op_lockable(NNN0.and(OS64), IaOpcode::Add_EqsIb),
    op_lockable(NNN1.and(OS64), IaOpcode::Or_EqsIb),
    op_lockable(NNN2.and(OS64), IaOpcode::Adc_EqsIb),
    op_lockable(NNN3.and(OS64), IaOpcode::Sbb_EqsIb),
    op_lockable(NNN4.and(OS64), IaOpcode::And_EqsIb),
    op_lockable(NNN5.and(OS64), IaOpcode::Sub_EqsIb),
    op_lockable(NNN6.and(OS64), IaOpcode::Xor_EqsIb),
    op(NNN7.and(OS64), IaOpcode::Cmp_EqsIb),
    op_lockable(NNN0.and(OS32), IaOpcode::Add_EdsIb),
    op_lockable(NNN1.and(OS32), IaOpcode::Or_EdsIb),
    op_lockable(NNN2.and(OS32), IaOpcode::Adc_EdsIb),
    op_lockable(NNN3.and(OS32), IaOpcode::Sbb_EdsIb),
    op_lockable(NNN4.and(OS32), IaOpcode::And_EdsIb),
    op_lockable(NNN5.and(OS32), IaOpcode::Sub_EdsIb),
    op_lockable(NNN6.and(OS32), IaOpcode::Xor_EdsIb),
    op(NNN7.and(OS32), IaOpcode::Cmp_EdsIb),
    op_lockable(NNN0.and(OS16), IaOpcode::Add_EwsIb),
    op_lockable(NNN1.and(OS16), IaOpcode::Or_EwsIb),
    op_lockable(NNN2.and(OS16), IaOpcode::Adc_EwsIb),
    op_lockable(NNN3.and(OS16), IaOpcode::Sbb_EwsIb),
    op_lockable(NNN4.and(OS16), IaOpcode::And_EwsIb),
    op_lockable(NNN5.and(OS16), IaOpcode::Sub_EwsIb),
    op_lockable(NNN6.and(OS16), IaOpcode::Xor_EwsIb),
    op(NNN7.and(OS16), IaOpcode::Cmp_EwsIb),
    last(ANY, IaOpcode::Error),
];

// opcode 84
pub(crate) static G_84: OpcodeGroup = &[last(ANY, IaOpcode::Test_EbGb)];

// opcode 85
pub(crate) static G_85: OpcodeGroup = &[
    op(OS64, IaOpcode::Test_EqGq),
    op(OS32, IaOpcode::Test_EdGd),
    last(OS16, IaOpcode::Test_EwGw),
];

// opcode 86
pub(crate) static G_86: OpcodeGroup = &[last_lockable(ANY, IaOpcode::Xchg_EbGb)];

// opcode 87
pub(crate) static G_87: OpcodeGroup = &[
    op_lockable(OS64, IaOpcode::Xchg_EqGq),
    op_lockable(OS32, IaOpcode::Xchg_EdGd),
    last_lockable(OS16, IaOpcode::Xchg_EwGw),
];

// opcode 88
pub(crate) static G_88: OpcodeGroup = &[last(ANY, IaOpcode::Mov_EbGb)];

// opcode 89
pub(crate) static G_89: OpcodeGroup = &[
    op(OS64, IaOpcode::Mov_EqGq),
    op(OS32.and(IS64), IaOpcode::Mov_Op64_EdGd),
    op(OS32.and(IS32), IaOpcode::Mov_Op32_EdGd),
    last(OS16, IaOpcode::Mov_EwGw),
];

// opcode 8A
pub(crate) static G_8A: OpcodeGroup = &[last(ANY, IaOpcode::Mov_GbEb)];

// opcode 8B
pub(crate) static G_8B: OpcodeGroup = &[
    op(OS64, IaOpcode::Mov_GqEq),
    op(OS32.and(IS64), IaOpcode::Mov_Op64_GdEd),
    op(OS32.and(IS32), IaOpcode::Mov_Op32_GdEd),
    last(OS16, IaOpcode::Mov_GwEw),
];

// opcode 8C
pub(crate) static G_8C: OpcodeGroup = &[last(ANY, IaOpcode::Mov_EwSw)];

// opcode 8D
pub(crate) static G_8D: OpcodeGroup = &[
    op(OS64.and(MOD_MEM), IaOpcode::Lea_GqM),
    op(OS32.and(MOD_MEM), IaOpcode::Lea_GdM),
    op(OS16.and(MOD_MEM), IaOpcode::Lea_GwM),
    last(ANY, IaOpcode::Error),
];

// opcode 8E
pub(crate) static G_8E: OpcodeGroup = &[last(ANY, IaOpcode::Mov_SwEw)];

// opcode 8F
pub(crate) static G_8F: OpcodeGroup = &[
    op(IS64.and(OS32_64).and(NNN0), IaOpcode::Pop_Eq),
    op(IS32.and(OS32).and(NNN0), IaOpcode::Pop_Ed),
    op(OS16.and(NNN0), IaOpcode::Pop_Ew),
    last(ANY, IaOpcode::Error),
];

// opcode 90
pub(crate) static G_90X97: OpcodeGroup = &[
    op(OS64, IaOpcode::Xchg_RRXRAX),
    op(OS32, IaOpcode::Xchg_ERXEAX),
    last(OS16, IaOpcode::Xchg_RXAX),
];

// opcode 98
pub(crate) static G_98: OpcodeGroup = &[
    op(OS64, IaOpcode::Cdqe),
    op(OS32, IaOpcode::Cwde),
    last(OS16, IaOpcode::Cbw),
];

// opcode 99
pub(crate) static G_99: OpcodeGroup = &[
    op(OS64, IaOpcode::Cqo),
    op(OS32, IaOpcode::Cdq),
    last(OS16, IaOpcode::Cwd),
];

// opcode 9A
pub(crate) static G_9A: OpcodeGroup = &[
    op(OS32.and(IS32), IaOpcode::Callf_Op32_Ap),
    last(OS16.and(IS32), IaOpcode::Callf_Op16_Ap),
];

// opcode 9B
pub(crate) static G_9B: OpcodeGroup = &[last(ANY, IaOpcode::Fwait)];

// opcode 9C
pub(crate) static G_9C: OpcodeGroup = &[
    op(OS32_64.and(IS64), IaOpcode::Pushf_Fq),
    op(OS32.and(IS32), IaOpcode::Pushf_Fd),
    last(OS16, IaOpcode::Pushf_Fw),
];

// opcode 9D
pub(crate) static G_9D: OpcodeGroup = &[
    op(OS32_64.and(IS64), IaOpcode::Popf_Fq),
    op(OS32.and(IS32), IaOpcode::Popf_Fd),
    last(OS16, IaOpcode::Popf_Fw),
];

// opcode 9E
pub(crate) static G_9E_32: OpcodeGroup = &[last(ANY, IaOpcode::Sahf)];

// opcode 9E
pub(crate) static G_9E_64: OpcodeGroup = &[last(ANY, IaOpcode::SahfLm)];

// opcode 9F
pub(crate) static G_9F_32: OpcodeGroup = &[last(ANY, IaOpcode::Lahf)];

// opcode 9F
pub(crate) static G_9F_64: OpcodeGroup = &[last(ANY, IaOpcode::LahfLm)];

// opcode A0
pub(crate) static G_A0_32: OpcodeGroup = &[last(ANY, IaOpcode::Mov_ALOd)];

// opcode A0
pub(crate) static G_A0_64: OpcodeGroup = &[last(ANY, IaOpcode::Mov_ALOq)];

// opcode A1
pub(crate) static G_A1_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Mov_EAXOd),
    last(OS16, IaOpcode::Mov_AXOd),
];

// opcode A1
pub(crate) static G_A1_64: OpcodeGroup = &[
    op(OS64, IaOpcode::Mov_RAXOq),
    op(OS32, IaOpcode::Mov_EAXOq),
    last(OS16, IaOpcode::Mov_AXOq),
];

// opcode A2
pub(crate) static G_A2_32: OpcodeGroup = &[last(ANY, IaOpcode::Mov_OdAL)];

// opcode A2
pub(crate) static G_A2_64: OpcodeGroup = &[last(ANY, IaOpcode::Mov_OqAL)];

// opcode A3
pub(crate) static G_A3_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Mov_OdEAX),
    last(OS16, IaOpcode::Mov_OdAX),
];

// opcode A3
pub(crate) static G_A3_64: OpcodeGroup = &[
    op(OS64, IaOpcode::Mov_OqRAX),
    op(OS32, IaOpcode::Mov_OqEAX),
    last(OS16, IaOpcode::Mov_OqAX),
];

// opcode A4
pub(crate) static G_A4: OpcodeGroup = &[last(ANY, IaOpcode::RepMovsb_YbXb)];

// opcode A5
pub(crate) static G_A5: OpcodeGroup = &[
    op(OS64, IaOpcode::RepMovsq_YqXq),
    op(OS32, IaOpcode::RepMovsd_YdXd),
    last(OS16, IaOpcode::RepMovsw_YwXw),
];

// opcode A6
pub(crate) static G_A6: OpcodeGroup = &[last(ANY, IaOpcode::RepCmpsb_XbYb)];

// opcode A7
pub(crate) static G_A7: OpcodeGroup = &[
    op(OS64, IaOpcode::RepCmpsq_XqYq),
    op(OS32, IaOpcode::RepCmpsd_XdYd),
    last(OS16, IaOpcode::RepCmpsw_XwYw),
];

// opcode A8
pub(crate) static G_A8: OpcodeGroup = &[last(ANY, IaOpcode::Test_ALIb)];

// opcode A9
pub(crate) static G_A9: OpcodeGroup = &[
    op(OS64, IaOpcode::Test_RAXId),
    op(OS32, IaOpcode::Test_EAXId),
    last(OS16, IaOpcode::Test_AXIw),
];

// opcode AA
pub(crate) static G_AA: OpcodeGroup = &[last(ANY, IaOpcode::RepStosb_YbAL)];

// opcode AB
pub(crate) static G_AB: OpcodeGroup = &[
    op(OS64, IaOpcode::RepStosq_YqRAX),
    op(OS32, IaOpcode::RepStosd_YdEAX),
    last(OS16, IaOpcode::RepStosw_YwAX),
];

// opcode AC
pub(crate) static G_AC: OpcodeGroup = &[last(ANY, IaOpcode::RepLodsb_ALXb)];

// opcode AD
pub(crate) static G_AD: OpcodeGroup = &[
    op(OS64, IaOpcode::RepLodsq_RAXXq),
    op(OS32, IaOpcode::RepLodsd_EAXXd),
    last(OS16, IaOpcode::RepLodsw_AXXw),
];

// opcode AE
pub(crate) static G_AE: OpcodeGroup = &[last(ANY, IaOpcode::RepScasb_ALYb)];

// opcode AF
pub(crate) static G_AF: OpcodeGroup = &[
    op(OS64, IaOpcode::RepScasq_RAXYq),
    op(OS32, IaOpcode::RepScasd_EAXYd),
    last(OS16, IaOpcode::RepScasw_AXYw),
];

// opcode B0
pub(crate) static G_B0X_B7: OpcodeGroup = &[last(ANY, IaOpcode::Mov_EbIb)];

// opcode B8
pub(crate) static G_B8X_BF: OpcodeGroup = &[
    op(OS64, IaOpcode::Mov_RRXIq),
    op(OS32, IaOpcode::Mov_EdId),
    last(OS16, IaOpcode::Mov_EwIw),
];

// opcode C0
pub(crate) static G_C0: OpcodeGroup = &[
    op(NNN0, IaOpcode::Rol_EbIb),
    op(NNN1, IaOpcode::Ror_EbIb),
    op(NNN2, IaOpcode::Rcl_EbIb),
    op(NNN3, IaOpcode::Rcr_EbIb),
    op(NNN4, IaOpcode::Shl_EbIb),
    op(NNN5, IaOpcode::Shr_EbIb),
    op(NNN6, IaOpcode::Shl_EbIb),
    op(NNN7, IaOpcode::Sar_EbIb),
    last(ANY, IaOpcode::Error),
];

// opcode C1
pub(crate) static G_C1: OpcodeGroup = &[
    op(NNN0.and(OS64), IaOpcode::Rol_EqIb),
    op(NNN1.and(OS64), IaOpcode::Ror_EqIb),
    op(NNN2.and(OS64), IaOpcode::Rcl_EqIb),
    op(NNN3.and(OS64), IaOpcode::Rcr_EqIb),
    op(NNN4.and(OS64), IaOpcode::Shl_EqIb),
    op(NNN5.and(OS64), IaOpcode::Shr_EqIb),
    op(NNN6.and(OS64), IaOpcode::Shl_EqIb),
    op(NNN7.and(OS64), IaOpcode::Sar_EqIb),
    op(NNN0.and(OS32), IaOpcode::Rol_EdIb),
    op(NNN1.and(OS32), IaOpcode::Ror_EdIb),
    op(NNN2.and(OS32), IaOpcode::Rcl_EdIb),
    op(NNN3.and(OS32), IaOpcode::Rcr_EdIb),
    op(NNN4.and(OS32), IaOpcode::Shl_EdIb),
    op(NNN5.and(OS32), IaOpcode::Shr_EdIb),
    op(NNN6.and(OS32), IaOpcode::Shl_EdIb),
    op(NNN7.and(OS32), IaOpcode::Sar_EdIb),
    op(NNN0.and(OS16), IaOpcode::Rol_EwIb),
    op(NNN1.and(OS16), IaOpcode::Ror_EwIb),
    op(NNN2.and(OS16), IaOpcode::Rcl_EwIb),
    op(NNN3.and(OS16), IaOpcode::Rcr_EwIb),
    op(NNN4.and(OS16), IaOpcode::Shl_EwIb),
    op(NNN5.and(OS16), IaOpcode::Shr_EwIb),
    op(NNN6.and(OS16), IaOpcode::Shl_EwIb),
    op(NNN7.and(OS16), IaOpcode::Sar_EwIb),
    last(ANY, IaOpcode::Error),
];

// opcode C2
pub(crate) static G_C2_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Ret_Op32_Iw),
    last(OS16, IaOpcode::Ret_Op16_Iw),
];

// opcode C2
pub(crate) static G_C2_64: OpcodeGroup = &[last(ANY, IaOpcode::Ret_Op64_Iw)];

// opcode C3
pub(crate) static G_C3_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Ret_Op32),
    last(OS16, IaOpcode::Ret_Op16),
];

// opcode C3
pub(crate) static G_C3_64: OpcodeGroup = &[last(ANY, IaOpcode::Ret_Op64)];

// opcode C4
pub(crate) static G_C4_32: OpcodeGroup = &[
    op(OS32.and(MOD_MEM).and(IS32), IaOpcode::Les_GdMp),
    op(OS16.and(MOD_MEM).and(IS32), IaOpcode::Les_GwMp),
    last(ANY, IaOpcode::Error),
];

// opcode C5
pub(crate) static G_C5_32: OpcodeGroup = &[
    op(OS32.and(MOD_MEM).and(IS32), IaOpcode::Lds_GdMp),
    op(OS16.and(MOD_MEM).and(IS32), IaOpcode::Lds_GwMp),
    last(ANY, IaOpcode::Error),
];

// opcode C6
pub(crate) static G_C6: OpcodeGroup = &[
    op(NNN0, IaOpcode::Mov_EbIb),
    last(ANY, IaOpcode::Error),
];

// opcode C7
pub(crate) static G_C7: OpcodeGroup = &[
    op(NNN0.and(OS64), IaOpcode::Mov_EqId),
    op(NNN0.and(OS32), IaOpcode::Mov_EdId),
    op(NNN0.and(OS16), IaOpcode::Mov_EwIw),
    last(ANY, IaOpcode::Error),
];

// opcode C8
pub(crate) static G_C8_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Enter_Op32_IwIb),
    last(OS16, IaOpcode::Enter_Op16_IwIb),
];

// opcode C8
pub(crate) static G_C8_64: OpcodeGroup = &[last(ANY, IaOpcode::Enter_Op64_IwIb)];

// opcode C9
pub(crate) static G_C9_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Leave_Op32),
    last(OS16, IaOpcode::Leave_Op16),
];

// opcode C9
pub(crate) static G_C9_64: OpcodeGroup = &[last(ANY, IaOpcode::Leave_Op64)];

// opcode CA
pub(crate) static G_CA: OpcodeGroup = &[
    op(OS64, IaOpcode::Retf_Op64_Iw),
    op(OS32, IaOpcode::Retf_Op32_Iw),
    last(OS16, IaOpcode::Retf_Op16_Iw),
];

// opcode CB
pub(crate) static G_CB: OpcodeGroup = &[
    op(OS64, IaOpcode::Retf_Op64),
    op(OS32, IaOpcode::Retf_Op32),
    last(OS16, IaOpcode::Retf_Op16),
];

// opcode CC
pub(crate) static G_CC: OpcodeGroup = &[last(ANY, IaOpcode::Int3)];

// opcode CD
pub(crate) static G_CD: OpcodeGroup = &[last_lockable(ANY, IaOpcode::Int_Ib)];

// opcode CE
pub(crate) static G_CE: OpcodeGroup = &[last(ANY, IaOpcode::Into)];

// opcode CF
pub(crate) static G_CF_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Iret_Op32),
    last(OS16, IaOpcode::Iret_Op16),
];

// opcode CF
pub(crate) static G_CF_64: OpcodeGroup = &[last(ANY, IaOpcode::Iret_Op64)];

// opcode D0
pub(crate) static G_D0: OpcodeGroup = &[
    op(NNN0, IaOpcode::Rol_EbI1),
    op(NNN1, IaOpcode::Ror_EbI1),
    op(NNN2, IaOpcode::Rcl_EbI1),
    op(NNN3, IaOpcode::Rcr_EbI1),
    op(NNN4, IaOpcode::Shl_EbI1),
    op(NNN5, IaOpcode::Shr_EbI1),
    op(NNN6, IaOpcode::Shl_EbI1),
    op(NNN7, IaOpcode::Sar_EbI1),
    last(ANY, IaOpcode::Error),
];

// opcode D1
pub(crate) static G_D1: OpcodeGroup = &[
    op(NNN0.and(OS64), IaOpcode::Rol_EqI1),
    op(NNN1.and(OS64), IaOpcode::Ror_EqI1),
    op(NNN2.and(OS64), IaOpcode::Rcl_EqI1),
    op(NNN3.and(OS64), IaOpcode::Rcr_EqI1),
    op(NNN4.and(OS64), IaOpcode::Shl_EqI1),
    op(NNN5.and(OS64), IaOpcode::Shr_EqI1),
    op(NNN6.and(OS64), IaOpcode::Shl_EqI1),
    op(NNN7.and(OS64), IaOpcode::Sar_EqI1),
    op(NNN0.and(OS32), IaOpcode::Rol_EdI1),
    op(NNN1.and(OS32), IaOpcode::Ror_EdI1),
    op(NNN2.and(OS32), IaOpcode::Rcl_EdI1),
    op(NNN3.and(OS32), IaOpcode::Rcr_EdI1),
    op(NNN4.and(OS32), IaOpcode::Shl_EdI1),
    op(NNN5.and(OS32), IaOpcode::Shr_EdI1),
    op(NNN6.and(OS32), IaOpcode::Shl_EdI1),
    op(NNN7.and(OS32), IaOpcode::Sar_EdI1),
    op(NNN0.and(OS16), IaOpcode::Rol_EwI1),
    op(NNN1.and(OS16), IaOpcode::Ror_EwI1),
    op(NNN2.and(OS16), IaOpcode::Rcl_EwI1),
    op(NNN3.and(OS16), IaOpcode::Rcr_EwI1),
    op(NNN4.and(OS16), IaOpcode::Shl_EwI1),
    op(NNN5.and(OS16), IaOpcode::Shr_EwI1),
    op(NNN6.and(OS16), IaOpcode::Shl_EwI1),
    op(NNN7.and(OS16), IaOpcode::Sar_EwI1),
    last(ANY, IaOpcode::Error),
];

// opcode D2
pub(crate) static G_D2: OpcodeGroup = &[
    op(NNN0, IaOpcode::Rol_Eb),
    op(NNN1, IaOpcode::Ror_Eb),
    op(NNN2, IaOpcode::Rcl_Eb),
    op(NNN3, IaOpcode::Rcr_Eb),
    op(NNN4, IaOpcode::Shl_Eb),
    op(NNN5, IaOpcode::Shr_Eb),
    op(NNN6, IaOpcode::Shl_Eb),
    op(NNN7, IaOpcode::Sar_Eb),
    last(ANY, IaOpcode::Error),
];

// opcode D3
pub(crate) static G_D3: OpcodeGroup = &[
    op(NNN0.and(OS64), IaOpcode::Rol_Eq),
    op(NNN1.and(OS64), IaOpcode::Ror_Eq),
    op(NNN2.and(OS64), IaOpcode::Rcl_Eq),
    op(NNN3.and(OS64), IaOpcode::Rcr_Eq),
    op(NNN4.and(OS64), IaOpcode::Shl_Eq),
    op(NNN5.and(OS64), IaOpcode::Shr_Eq),
    op(NNN6.and(OS64), IaOpcode::Shl_Eq),
    op(NNN7.and(OS64), IaOpcode::Sar_Eq),
    op(NNN0.and(OS32), IaOpcode::Rol_Ed),
    op(NNN1.and(OS32), IaOpcode::Ror_Ed),
    op(NNN2.and(OS32), IaOpcode::Rcl_Ed),
    op(NNN3.and(OS32), IaOpcode::Rcr_Ed),
    op(NNN4.and(OS32), IaOpcode::Shl_Ed),
    op(NNN5.and(OS32), IaOpcode::Shr_Ed),
    op(NNN6.and(OS32), IaOpcode::Shl_Ed),
    op(NNN7.and(OS32), IaOpcode::Sar_Ed),
    op(NNN0.and(OS16), IaOpcode::Rol_Ew),
    op(NNN1.and(OS16), IaOpcode::Ror_Ew),
    op(NNN2.and(OS16), IaOpcode::Rcl_Ew),
    op(NNN3.and(OS16), IaOpcode::Rcr_Ew),
    op(NNN4.and(OS16), IaOpcode::Shl_Ew),
    op(NNN5.and(OS16), IaOpcode::Shr_Ew),
    op(NNN6.and(OS16), IaOpcode::Shl_Ew),
    op(NNN7.and(OS16), IaOpcode::Sar_Ew),
    last(ANY, IaOpcode::Error),
];

// opcode D4
pub(crate) static G_D4: OpcodeGroup = &[last(IS32, IaOpcode::Aam)];

// opcode D5
pub(crate) static G_D5: OpcodeGroup = &[last(IS32, IaOpcode::Aad)];

// opcode D6
pub(crate) static G_D6: OpcodeGroup = &[last(ANY, IaOpcode::Salc)];

// opcode D7
pub(crate) static G_D7: OpcodeGroup = &[last(ANY, IaOpcode::Xlat)];

// opcode E0
pub(crate) static G_E0_32: OpcodeGroup = &[
    op(IS32.and(OS32), IaOpcode::Loopne_Jbd),
    last(IS32.and(OS16), IaOpcode::Loopne_Jbw),
];

// opcode E0
pub(crate) static G_E0_64: OpcodeGroup = &[last(IS64, IaOpcode::Loopne_Jbq)];

// opcode E1
pub(crate) static G_E1_32: OpcodeGroup = &[
    op(IS32.and(OS32), IaOpcode::Loope_Jbd),
    last(IS32.and(OS16), IaOpcode::Loope_Jbw),
];

// opcode E1
pub(crate) static G_E1_64: OpcodeGroup = &[last(IS64, IaOpcode::Loope_Jbq)];

// opcode E2
pub(crate) static G_E2_32: OpcodeGroup = &[
    op(IS32.and(OS32), IaOpcode::Loop_Jbd),
    last(IS32.and(OS16), IaOpcode::Loop_Jbw),
];

// opcode E2
pub(crate) static G_E2_64: OpcodeGroup = &[last(IS64, IaOpcode::Loop_Jbq)];

// opcode E3
pub(crate) static G_E3_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jecxz_Jbd),
    last(OS16, IaOpcode::Jcxz_Jbw),
];

// opcode E3
pub(crate) static G_E3_64: OpcodeGroup = &[last(IS64, IaOpcode::Jrcxz_Jbq)];

// opcode E4
pub(crate) static G_E4: OpcodeGroup = &[last(ANY, IaOpcode::In_ALIb)];

// opcode E5
pub(crate) static G_E5: OpcodeGroup = &[
    op(OS32_64, IaOpcode::In_EAXIb),
    last(OS16, IaOpcode::In_AXIb),
];

// opcode E6
pub(crate) static G_E6: OpcodeGroup = &[last(ANY, IaOpcode::Out_IbAL)];

// opcode E7
pub(crate) static G_E7: OpcodeGroup = &[
    op(OS32_64, IaOpcode::Out_IbEAX),
    last(OS16, IaOpcode::Out_IbAX),
];

// opcode E8
pub(crate) static G_E8_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Call_Jd),
    last(OS16, IaOpcode::Call_Jw),
];

// opcode E8
pub(crate) static G_E8_64: OpcodeGroup = &[last(ANY, IaOpcode::Call_Jq)];

// opcode E9
pub(crate) static G_E9_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jmp_Jd),
    last(OS16, IaOpcode::Jmp_Jw),
];

// opcode E9
pub(crate) static G_E9_64: OpcodeGroup = &[last(ANY, IaOpcode::Jmp_Jq)];

// opcode EA
pub(crate) static G_EA_32: OpcodeGroup = &[last(ANY, IaOpcode::Jmpf_Ap)];

// opcode EB
pub(crate) static G_EB_32: OpcodeGroup = &[
    op(OS32, IaOpcode::Jmp_Jbd),
    last(OS16, IaOpcode::Jmp_Jbw),
];

// opcode EB
pub(crate) static G_EB_64: OpcodeGroup = &[last(ANY, IaOpcode::Jmp_Jbq)];

// opcode EC
pub(crate) static G_EC: OpcodeGroup = &[last(ANY, IaOpcode::In_ALDX)];

// opcode ED
pub(crate) static G_ED: OpcodeGroup = &[
    op(OS32_64, IaOpcode::In_EAXDX),
    last(OS16, IaOpcode::In_AXDX),
];

// opcode EE
pub(crate) static G_EE: OpcodeGroup = &[last(ANY, IaOpcode::Out_DXAL)];

// opcode EF
pub(crate) static G_EF: OpcodeGroup = &[
    op(OS32_64, IaOpcode::Out_DXEAX),
    last(OS16, IaOpcode::Out_DXAX),
];

// opcode F1
pub(crate) static G_F1: OpcodeGroup = &[last(ANY, IaOpcode::Int1)];

// opcode F4
pub(crate) static G_F4: OpcodeGroup = &[last(ANY, IaOpcode::Hlt)];

// opcode F5
pub(crate) static G_F5: OpcodeGroup = &[last(ANY, IaOpcode::Cmc)];

// opcode F6
pub(crate) static G_F6: OpcodeGroup = &[
    op(NNN0, IaOpcode::Test_EbIb),
    op(NNN1, IaOpcode::Test_EbIb),
    op_lockable(NNN2, IaOpcode::Not_Eb),
    op_lockable(NNN3, IaOpcode::Neg_Eb),
    op(NNN4, IaOpcode::Mul_ALEb),
    op(NNN5, IaOpcode::Imul_ALEb),
    op(NNN6, IaOpcode::Div_ALEb),
    op(NNN7, IaOpcode::Idiv_ALEb),
    last(ANY, IaOpcode::Error),
];

// opcode F7
pub(crate) static G_F7: OpcodeGroup = &[
    op(NNN0.and(OS64), IaOpcode::Test_EqId),
    op(NNN1.and(OS64), IaOpcode::Test_EqId),
    op_lockable(NNN2.and(OS64), IaOpcode::Not_Eq),
    op_lockable(NNN3.and(OS64), IaOpcode::Neg_Eq),
    op(NNN4.and(OS64), IaOpcode::Mul_RAXEq),
    op(NNN5.and(OS64), IaOpcode::Imul_RAXEq),
    op(NNN6.and(OS64), IaOpcode::Div_RAXEq),
    op(NNN7.and(OS64), IaOpcode::Idiv_RAXEq),
    op(NNN0.and(OS32), IaOpcode::Test_EdId),
    op(NNN1.and(OS32), IaOpcode::Test_EdId),
    op_lockable(NNN2.and(OS32), IaOpcode::Not_Ed),
    op_lockable(NNN3.and(OS32), IaOpcode::Neg_Ed),
    op(NNN4.and(OS32), IaOpcode::Mul_EAXEd),
    op(NNN5.and(OS32), IaOpcode::Imul_EAXEd),
    op(NNN6.and(OS32), IaOpcode::Div_EAXEd),
    op(NNN7.and(OS32), IaOpcode::Idiv_EAXEd),
    op(NNN0.and(OS16), IaOpcode::Test_EwIw),
    op(NNN1.and(OS16), IaOpcode::Test_EwIw),
    op_lockable(NNN2.and(OS16), IaOpcode::Not_Ew),
    op_lockable(NNN3.and(OS16), IaOpcode::Neg_Ew),
    op(NNN4.and(OS16), IaOpcode::Mul_AXEw),
    op(NNN5.and(OS16), IaOpcode::Imul_AXEw),
    op(NNN6.and(OS16), IaOpcode::Div_AXEw),
    op(NNN7.and(OS16), IaOpcode::Idiv_AXEw),
    last(ANY, IaOpcode::Error),
];

// opcode F8
pub(crate) static G_F8: OpcodeGroup = &[last(ANY, IaOpcode::Clc)];

// opcode F9
pub(crate) static G_F9: OpcodeGroup = &[last(ANY, IaOpcode::Stc)];

// opcode FA
pub(crate) static G_FA: OpcodeGroup = &[last(ANY, IaOpcode::Cli)];

// opcode FB
pub(crate) static G_FB: OpcodeGroup = &[last(ANY, IaOpcode::Sti)];

// opcode FC
pub(crate) static G_FC: OpcodeGroup = &[last(ANY, IaOpcode::Cld)];

// opcode FD
pub(crate) static G_FD: OpcodeGroup = &[last(ANY, IaOpcode::Std)];

// opcode FE
pub(crate) static G_FE: OpcodeGroup = &[
    op_lockable(NNN0, IaOpcode::Inc_Eb),
    op_lockable(NNN1, IaOpcode::Dec_Eb),
    last(ANY, IaOpcode::Error),
];

// opcode FF
pub(crate) static G_FF: OpcodeGroup = &[
    op_lockable(NNN0.and(OS64), IaOpcode::Inc_Eq),
    op_lockable(NNN0.and(OS32), IaOpcode::Inc_Ed),
    op_lockable(NNN0.and(OS16), IaOpcode::Inc_Ew),
    op_lockable(NNN1.and(OS64), IaOpcode::Dec_Eq),
    op_lockable(NNN1.and(OS32), IaOpcode::Dec_Ed),
    op_lockable(NNN1.and(OS16), IaOpcode::Dec_Ew),
    op(NNN2.and(IS64), IaOpcode::Call_Eq),
    op(NNN2.and(IS32).and(OS16), IaOpcode::Call_Ew),
    op(NNN2.and(IS32).and(OS32), IaOpcode::Call_Ed),
    op(NNN3.and(OS64).and(MOD_MEM), IaOpcode::Callf_Op64_Ep),
    op(NNN3.and(OS32).and(MOD_MEM), IaOpcode::Callf_Op32_Ep),
    op(NNN3.and(OS16).and(MOD_MEM), IaOpcode::Callf_Op16_Ep),
    op(NNN4.and(IS64), IaOpcode::Jmp_Eq),
    op(NNN4.and(IS32).and(OS16), IaOpcode::Jmp_Ew),
    op(NNN4.and(IS32).and(OS32), IaOpcode::Jmp_Ed),
    op(NNN5.and(OS64).and(MOD_MEM), IaOpcode::Jmpf_Op64_Ep),
    op(NNN5.and(OS32).and(MOD_MEM), IaOpcode::Jmpf_Op32_Ep),
    op(NNN5.and(OS16).and(MOD_MEM), IaOpcode::Jmpf_Op16_Ep),
    op(NNN6.and(IS64).and(OS32_64), IaOpcode::Push_Eq),
    op(NNN6.and(OS32), IaOpcode::Push_Ed),
    op(NNN6.and(OS16), IaOpcode::Push_Ew),
    last(ANY, IaOpcode::Error),
];
