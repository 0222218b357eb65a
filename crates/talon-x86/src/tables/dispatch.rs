//! Mode-indexed dispatch: one strategy cell per opcode-map slot.
//!
//! Index layout: 0x000-0x0FF covers the one-byte map, 0x100-0x1FF the 0F
//! map, 0x200-0x2FF the 0F 38 map and 0x300-0x3FF the 0F 3A map. Prefix
//! bytes are consumed by the fetch loop before dispatch, so their slots
//! stay `Invalid`. These are the full-featured tables; `TableSet::new`
//! copies and then downgrades the slots a feature set does not carry.

use super::DecodeEntry::{self, *};
use super::{opmap, opmap_0f, opmap_0f38, opmap_0f3a, x87};
use crate::matcher::ERR;

pub(super) static DISPATCH32: [DecodeEntry; 1024] = [
    /* 00 */ Modrm(opmap::G_00),
    /* 01 */ Modrm(opmap::G_01),
    /* 02 */ Modrm(opmap::G_02),
    /* 03 */ Modrm(opmap::G_03),
    /* 04 */ Plain(opmap::G_04),
    /* 05 */ Plain(opmap::G_05),
    /* 06 */ Plain(opmap::G_06),
    /* 07 */ Plain(opmap::G_07),
    /* 08 */ Modrm(opmap::G_08),
    /* 09 */ Modrm(opmap::G_09),
    /* 0A */ Modrm(opmap::G_0A),
    /* 0B */ Modrm(opmap::G_0B),
    /* 0C */ Plain(opmap::G_0C),
    /* 0D */ Plain(opmap::G_0D),
    /* 0E */ Plain(opmap::G_0E),
    /* 0F */ Invalid, // 2-byte escape
    /* 10 */ Modrm(opmap::G_10),
    /* 11 */ Modrm(opmap::G_11),
    /* 12 */ Modrm(opmap::G_12),
    /* 13 */ Modrm(opmap::G_13),
    /* 14 */ Plain(opmap::G_14),
    /* 15 */ Plain(opmap::G_15),
    /* 16 */ Plain(opmap::G_16),
    /* 17 */ Plain(opmap::G_17),
    /* 18 */ Modrm(opmap::G_18),
    /* 19 */ Modrm(opmap::G_19),
    /* 1A */ Modrm(opmap::G_1A),
    /* 1B */ Modrm(opmap::G_1B),
    /* 1C */ Plain(opmap::G_1C),
    /* 1D */ Plain(opmap::G_1D),
    /* 1E */ Plain(opmap::G_1E),
    /* 1F */ Plain(opmap::G_1F),
    /* 20 */ Modrm(opmap::G_20),
    /* 21 */ Modrm(opmap::G_21),
    /* 22 */ Modrm(opmap::G_22),
    /* 23 */ Modrm(opmap::G_23),
    /* 24 */ Plain(opmap::G_24),
    /* 25 */ Plain(opmap::G_25),
    /* 26 */ Invalid, // ES:
    /* 27 */ Simple(opmap::G_27),
    /* 28 */ Modrm(opmap::G_28),
    /* 29 */ Modrm(opmap::G_29),
    /* 2A */ Modrm(opmap::G_2A),
    /* 2B */ Modrm(opmap::G_2B),
    /* 2C */ Plain(opmap::G_2C),
    /* 2D */ Plain(opmap::G_2D),
    /* 2E */ Invalid, // CS:
    /* 2F */ Simple(opmap::G_2F),
    /* 30 */ Modrm(opmap::G_30),
    /* 31 */ Modrm(opmap::G_31),
    /* 32 */ Modrm(opmap::G_32),
    /* 33 */ Modrm(opmap::G_33),
    /* 34 */ Plain(opmap::G_34),
    /* 35 */ Plain(opmap::G_35),
    /* 36 */ Invalid, // SS:
    /* 37 */ Simple(opmap::G_37),
    /* 38 */ Modrm(opmap::G_38),
    /* 39 */ Modrm(opmap::G_39),
    /* 3A */ Modrm(opmap::G_3A),
    /* 3B */ Modrm(opmap::G_3B),
    /* 3C */ Plain(opmap::G_3C),
    /* 3D */ Plain(opmap::G_3D),
    /* 3E */ Invalid, // DS:
    /* 3F */ Simple(opmap::G_3F),
    /* 40 */ Plain(opmap::G_40X47),
    /* 41 */ Plain(opmap::G_40X47),
    /* 42 */ Plain(opmap::G_40X47),
    /* 43 */ Plain(opmap::G_40X47),
    /* 44 */ Plain(opmap::G_40X47),
    /* 45 */ Plain(opmap::G_40X47),
    /* 46 */ Plain(opmap::G_40X47),
    /* 47 */ Plain(opmap::G_40X47),
    /* 48 */ Plain(opmap::G_48X4F),
    /* 49 */ Plain(opmap::G_48X4F),
    /* 4A */ Plain(opmap::G_48X4F),
    /* 4B */ Plain(opmap::G_48X4F),
    /* 4C */ Plain(opmap::G_48X4F),
    /* 4D */ Plain(opmap::G_48X4F),
    /* 4E */ Plain(opmap::G_48X4F),
    /* 4F */ Plain(opmap::G_48X4F),
    /* 50 */ Plain(opmap::G_50X57),
    /* 51 */ Plain(opmap::G_50X57),
    /* 52 */ Plain(opmap::G_50X57),
    /* 53 */ Plain(opmap::G_50X57),
    /* 54 */ Plain(opmap::G_50X57),
    /* 55 */ Plain(opmap::G_50X57),
    /* 56 */ Plain(opmap::G_50X57),
    /* 57 */ Plain(opmap::G_50X57),
    /* 58 */ Plain(opmap::G_58X5F),
    /* 59 */ Plain(opmap::G_58X5F),
    /* 5A */ Plain(opmap::G_58X5F),
    /* 5B */ Plain(opmap::G_58X5F),
    /* 5C */ Plain(opmap::G_58X5F),
    /* 5D */ Plain(opmap::G_58X5F),
    /* 5E */ Plain(opmap::G_58X5F),
    /* 5F */ Plain(opmap::G_58X5F),
    /* 60 */ Plain(opmap::G_60),
    /* 61 */ Plain(opmap::G_61),
    /* 62 */ Evex(opmap::G_62), // EVEX prefix
    /* 63 */ Modrm(opmap::G_63_32),
    /* 64 */ Invalid, // FS:
    /* 65 */ Invalid, // GS:
    /* 66 */ Invalid, // OSIZE:
    /* 67 */ Invalid, // ASIZE:
    /* 68 */ Plain(opmap::G_68),
    /* 69 */ Modrm(opmap::G_69),
    /* 6A */ Plain(opmap::G_6A),
    /* 6B */ Modrm(opmap::G_6B),
    /* 6C */ Plain(opmap::G_6C),
    /* 6D */ Plain(opmap::G_6D),
    /* 6E */ Plain(opmap::G_6E),
    /* 6F */ Plain(opmap::G_6F),
    /* 70 */ Plain(opmap::G_70_32),
    /* 71 */ Plain(opmap::G_71_32),
    /* 72 */ Plain(opmap::G_72_32),
    /* 73 */ Plain(opmap::G_73_32),
    /* 74 */ Plain(opmap::G_74_32),
    /* 75 */ Plain(opmap::G_75_32),
    /* 76 */ Plain(opmap::G_76_32),
    /* 77 */ Plain(opmap::G_77_32),
    /* 78 */ Plain(opmap::G_78_32),
    /* 79 */ Plain(opmap::G_79_32),
    /* 7A */ Plain(opmap::G_7A_32),
    /* 7B */ Plain(opmap::G_7B_32),
    /* 7C */ Plain(opmap::G_7C_32),
    /* 7D */ Plain(opmap::G_7D_32),
    /* 7E */ Plain(opmap::G_7E_32),
    /* 7F */ Plain(opmap::G_7F_32),
    /* 80 */ Modrm(opmap::G_80),
    /* 81 */ Modrm(opmap::G_81),
    /* 82 */ Modrm(opmap::G_80), // opcode 0x82 is copy of the 0x80
    /* 83 */ Modrm(opmap::G_83),
    /* 84 */ Modrm(opmap::G_84),
    /* 85 */ Modrm(opmap::G_85),
    /* 86 */ Modrm(opmap::G_86),
    /* 87 */ Modrm(opmap::G_87),
    /* 88 */ Modrm(opmap::G_88),
    /* 89 */ Modrm(opmap::G_89),
    /* 8A */ Modrm(opmap::G_8A),
    /* 8B */ Modrm(opmap::G_8B),
    /* 8C */ Modrm(opmap::G_8C),
    /* 8D */ Modrm(opmap::G_8D),
    /* 8E */ Modrm(opmap::G_8E),
    /* 8F */ Xop(opmap::G_8F), // XOP prefix
    /* 90 */ NopPause(opmap::G_90X97),
    /* 91 */ Plain(opmap::G_90X97),
    /* 92 */ Plain(opmap::G_90X97),
    /* 93 */ Plain(opmap::G_90X97),
    /* 94 */ Plain(opmap::G_90X97),
    /* 95 */ Plain(opmap::G_90X97),
    /* 96 */ Plain(opmap::G_90X97),
    /* 97 */ Plain(opmap::G_90X97),
    /* 98 */ Plain(opmap::G_98),
    /* 99 */ Plain(opmap::G_99),
    /* 9A */ Plain(opmap::G_9A),
    /* 9B */ Simple(opmap::G_9B),
    /* 9C */ Plain(opmap::G_9C),
    /* 9D */ Plain(opmap::G_9D),
    /* 9E */ Simple(opmap::G_9E_32),
    /* 9F */ Simple(opmap::G_9F_32),
    /* A0 */ Plain(opmap::G_A0_32),
    /* A1 */ Plain(opmap::G_A1_32),
    /* A2 */ Plain(opmap::G_A2_32),
    /* A3 */ Plain(opmap::G_A3_32),
    /* A4 */ Plain(opmap::G_A4),
    /* A5 */ Plain(opmap::G_A5),
    /* A6 */ Plain(opmap::G_A6),
    /* A7 */ Plain(opmap::G_A7),
    /* A8 */ Plain(opmap::G_A8),
    /* A9 */ Plain(opmap::G_A9),
    /* AA */ Plain(opmap::G_AA),
    /* AB */ Plain(opmap::G_AB),
    /* AC */ Plain(opmap::G_AC),
    /* AD */ Plain(opmap::G_AD),
    /* AE */ Plain(opmap::G_AE),
    /* AF */ Plain(opmap::G_AF),
    /* B0 */ Plain(opmap::G_B0X_B7),
    /* B1 */ Plain(opmap::G_B0X_B7),
    /* B2 */ Plain(opmap::G_B0X_B7),
    /* B3 */ Plain(opmap::G_B0X_B7),
    /* B4 */ Plain(opmap::G_B0X_B7),
    /* B5 */ Plain(opmap::G_B0X_B7),
    /* B6 */ Plain(opmap::G_B0X_B7),
    /* B7 */ Plain(opmap::G_B0X_B7),
    /* B8 */ Plain(opmap::G_B8X_BF),
    /* B9 */ Plain(opmap::G_B8X_BF),
    /* BA */ Plain(opmap::G_B8X_BF),
    /* BB */ Plain(opmap::G_B8X_BF),
    /* BC */ Plain(opmap::G_B8X_BF),
    /* BD */ Plain(opmap::G_B8X_BF),
    /* BE */ Plain(opmap::G_B8X_BF),
    /* BF */ Plain(opmap::G_B8X_BF),
    /* C0 */ Modrm(opmap::G_C0),
    /* C1 */ Modrm(opmap::G_C1),
    /* C2 */ Plain(opmap::G_C2_32),
    /* C3 */ Plain(opmap::G_C3_32),
    /* C4 */ Vex(opmap::G_C4_32), // VEX prefix
    /* C5 */ Vex(opmap::G_C5_32), // VEX prefix
    /* C6 */ Modrm(opmap::G_C6),
    /* C7 */ Modrm(opmap::G_C7),
    /* C8 */ Plain(opmap::G_C8_32),
    /* C9 */ Plain(opmap::G_C9_32),
    /* CA */ Plain(opmap::G_CA),
    /* CB */ Plain(opmap::G_CB),
    /* CC */ Simple(opmap::G_CC),
    /* CD */ Plain(opmap::G_CD),
    /* CE */ Simple(opmap::G_CE),
    /* CF */ Plain(opmap::G_CF_32),
    /* D0 */ Modrm(opmap::G_D0),
    /* D1 */ Modrm(opmap::G_D1),
    /* D2 */ Modrm(opmap::G_D2),
    /* D3 */ Modrm(opmap::G_D3),
    /* D4 */ Plain(opmap::G_D4),
    /* D5 */ Plain(opmap::G_D5),
    /* D6 */ Simple(opmap::G_D6),
    /* D7 */ Simple(opmap::G_D7),
    /* D8 */ FpEscape(&x87::D8),
    /* D9 */ FpEscape(&x87::D9),
    /* DA */ FpEscape(&x87::DA),
    /* DB */ FpEscape(&x87::DB),
    /* DC */ FpEscape(&x87::DC),
    /* DD */ FpEscape(&x87::DD),
    /* DE */ FpEscape(&x87::DE),
    /* DF */ FpEscape(&x87::DF),
    /* E0 */ Plain(opmap::G_E0_32),
    /* E1 */ Plain(opmap::G_E1_32),
    /* E2 */ Plain(opmap::G_E2_32),
    /* E3 */ Plain(opmap::G_E3_32),
    /* E4 */ Plain(opmap::G_E4),
    /* E5 */ Plain(opmap::G_E5),
    /* E6 */ Plain(opmap::G_E6),
    /* E7 */ Plain(opmap::G_E7),
    /* E8 */ Plain(opmap::G_E8_32),
    /* E9 */ Plain(opmap::G_E9_32),
    /* EA */ Plain(opmap::G_EA_32),
    /* EB */ Plain(opmap::G_EB_32),
    /* EC */ Plain(opmap::G_EC),
    /* ED */ Plain(opmap::G_ED),
    /* EE */ Plain(opmap::G_EE),
    /* EF */ Plain(opmap::G_EF),
    /* F0 */ Invalid, // LOCK:
    /* F1 */ Simple(opmap::G_F1),
    /* F2 */ Invalid, // REPNE/REPNZ
    /* F3 */ Invalid, // REP, REPE/REPZ
    /* F4 */ Simple(opmap::G_F4),
    /* F5 */ Simple(opmap::G_F5),
    /* F6 */ Modrm(opmap::G_F6),
    /* F7 */ Modrm(opmap::G_F7),
    /* F8 */ Simple(opmap::G_F8),
    /* F9 */ Simple(opmap::G_F9),
    /* FA */ Simple(opmap::G_FA),
    /* FB */ Simple(opmap::G_FB),
    /* FC */ Simple(opmap::G_FC),
    /* FD */ Simple(opmap::G_FD),
    /* FE */ Modrm(opmap::G_FE),
    /* FF */ Modrm(opmap::G_FF),
    /* 0F 00 */ Modrm(opmap_0f::G_0F00),
    /* 0F 01 */ Modrm(opmap_0f::G_0F01),
    /* 0F 02 */ Modrm(opmap_0f::G_0F02),
    /* 0F 03 */ Modrm(opmap_0f::G_0F03),
    /* 0F 04 */ Invalid,
    /* 0F 05 */ Simple(opmap_0f::G_0F05_32),
    /* 0F 06 */ Simple(opmap_0f::G_0F06),
    /* 0F 07 */ Simple(opmap_0f::G_0F07_32),
    /* 0F 08 */ Simple(opmap_0f::G_0F08),
    /* 0F 09 */ Simple(opmap_0f::G_0F09),
    /* 0F 0A */ Invalid,
    /* 0F 0B */ Simple(opmap_0f::G_0F0B),
    /* 0F 0C */ Invalid,
    /* 0F 0D */ Modrm(opmap_0f::G_0F0D),
    /* 0F 0E */ Simple(opmap_0f::G_0F0E),
    /* 0F 0F */ ThreeDNow,
    /* 0F 10 */ Modrm(opmap_0f::G_0F10),
    /* 0F 11 */ Modrm(opmap_0f::G_0F11),
    /* 0F 12 */ Modrm(opmap_0f::G_0F12),
    /* 0F 13 */ Modrm(opmap_0f::G_0F13),
    /* 0F 14 */ Modrm(opmap_0f::G_0F14),
    /* 0F 15 */ Modrm(opmap_0f::G_0F15),
    /* 0F 16 */ Modrm(opmap_0f::G_0F16),
    /* 0F 17 */ Modrm(opmap_0f::G_0F17),
    /* 0F 18 */ Modrm(opmap_0f::G_0F18),
    /* 0F 19 */ Modrm(opmap_0f::G_MULTI_BYTE_NOP),
    /* 0F 1A */ Modrm(opmap_0f::G_MULTI_BYTE_NOP),
    /* 0F 1B */ Modrm(opmap_0f::G_MULTI_BYTE_NOP),
    /* 0F 1C */ Modrm(opmap_0f::G_MULTI_BYTE_NOP),
    /* 0F 1D */ Modrm(opmap_0f::G_MULTI_BYTE_NOP),
    /* 0F 1E */ Modrm(opmap_0f::G_0F1E),
    /* 0F 1F */ Modrm(opmap_0f::G_MULTI_BYTE_NOP),
    /* 0F 20 */ MovCrDr(opmap_0f::G_0F20_32),
    /* 0F 21 */ MovCrDr(opmap_0f::G_0F21_32),
    /* 0F 22 */ MovCrDr(opmap_0f::G_0F22_32),
    /* 0F 23 */ MovCrDr(opmap_0f::G_0F23_32),
    /* 0F 24 */ MovCrDr(opmap_0f::G_0F24),
    /* 0F 25 */ Invalid,
    /* 0F 26 */ MovCrDr(opmap_0f::G_0F26),
    /* 0F 27 */ Invalid,
    /* 0F 28 */ Modrm(opmap_0f::G_0F28),
    /* 0F 29 */ Modrm(opmap_0f::G_0F29),
    /* 0F 2A */ Modrm(opmap_0f::G_0F2A),
    /* 0F 2B */ Modrm(opmap_0f::G_0F2B),
    /* 0F 2C */ Modrm(opmap_0f::G_0F2C),
    /* 0F 2D */ Modrm(opmap_0f::G_0F2D),
    /* 0F 2E */ Modrm(opmap_0f::G_0F2E),
    /* 0F 2F */ Modrm(opmap_0f::G_0F2F),
    /* 0F 30 */ Simple(opmap_0f::G_0F30),
    /* 0F 31 */ Simple(opmap_0f::G_0F31),
    /* 0F 32 */ Simple(opmap_0f::G_0F32),
    /* 0F 33 */ Simple(opmap_0f::G_0F33),
    /* 0F 34 */ Simple(opmap_0f::G_0F34),
    /* 0F 35 */ Simple(opmap_0f::G_0F35),
    /* 0F 36 */ Invalid,
    /* 0F 37 */ Plain(opmap_0f::G_0F37),
    /* 0F 38 */ Invalid, // 3-byte escape
    /* 0F 39 */ Invalid,
    /* 0F 3A */ Invalid, // 3-byte escape
    /* 0F 3B */ Invalid,
    /* 0F 3C */ Invalid,
    /* 0F 3D */ Invalid,
    /* 0F 3E */ Invalid,
    /* 0F 3F */ Invalid,
    /* 0F 40 */ Modrm(opmap_0f::G_0F40),
    /* 0F 41 */ Modrm(opmap_0f::G_0F41),
    /* 0F 42 */ Modrm(opmap_0f::G_0F42),
    /* 0F 43 */ Modrm(opmap_0f::G_0F43),
    /* 0F 44 */ Modrm(opmap_0f::G_0F44),
    /* 0F 45 */ Modrm(opmap_0f::G_0F45),
    /* 0F 46 */ Modrm(opmap_0f::G_0F46),
    /* 0F 47 */ Modrm(opmap_0f::G_0F47),
    /* 0F 48 */ Modrm(opmap_0f::G_0F48),
    /* 0F 49 */ Modrm(opmap_0f::G_0F49),
    /* 0F 4A */ Modrm(opmap_0f::G_0F4A),
    /* 0F 4B */ Modrm(opmap_0f::G_0F4B),
    /* 0F 4C */ Modrm(opmap_0f::G_0F4C),
    /* 0F 4D */ Modrm(opmap_0f::G_0F4D),
    /* 0F 4E */ Modrm(opmap_0f::G_0F4E),
    /* 0F 4F */ Modrm(opmap_0f::G_0F4F),
    /* 0F 50 */ Modrm(opmap_0f::G_0F50),
    /* 0F 51 */ Modrm(opmap_0f::G_0F51),
    /* 0F 52 */ Modrm(opmap_0f::G_0F52),
    /* 0F 53 */ Modrm(opmap_0f::G_0F53),
    /* 0F 54 */ Modrm(opmap_0f::G_0F54),
    /* 0F 55 */ Modrm(opmap_0f::G_0F55),
    /* 0F 56 */ Modrm(opmap_0f::G_0F56),
    /* 0F 57 */ Modrm(opmap_0f::G_0F57),
    /* 0F 58 */ Modrm(opmap_0f::G_0F58),
    /* 0F 59 */ Modrm(opmap_0f::G_0F59),
    /* 0F 5A */ Modrm(opmap_0f::G_0F5A),
    /* 0F 5B */ Modrm(opmap_0f::G_0F5B),
    /* 0F 5C */ Modrm(opmap_0f::G_0F5C),
    /* 0F 5D */ Modrm(opmap_0f::G_0F5D),
    /* 0F 5E */ Modrm(opmap_0f::G_0F5E),
    /* 0F 5F */ Modrm(opmap_0f::G_0F5F),
    /* 0F 60 */ Modrm(opmap_0f::G_0F60),
    /* 0F 61 */ Modrm(opmap_0f::G_0F61),
    /* 0F 62 */ Modrm(opmap_0f::G_0F62),
    /* 0F 63 */ Modrm(opmap_0f::G_0F63),
    /* 0F 64 */ Modrm(opmap_0f::G_0F64),
    /* 0F 65 */ Modrm(opmap_0f::G_0F65),
    /* 0F 66 */ Modrm(opmap_0f::G_0F66),
    /* 0F 67 */ Modrm(opmap_0f::G_0F67),
    /* 0F 68 */ Modrm(opmap_0f::G_0F68),
    /* 0F 69 */ Modrm(opmap_0f::G_0F69),
    /* 0F 6A */ Modrm(opmap_0f::G_0F6A),
    /* 0F 6B */ Modrm(opmap_0f::G_0F6B),
    /* 0F 6C */ Modrm(opmap_0f::G_0F6C),
    /* 0F 6D */ Modrm(opmap_0f::G_0F6D),
    /* 0F 6E */ Modrm(opmap_0f::G_0F6E),
    /* 0F 6F */ Modrm(opmap_0f::G_0F6F),
    /* 0F 70 */ Modrm(opmap_0f::G_0F70),
    /* 0F 71 */ Modrm(opmap_0f::G_0F71),
    /* 0F 72 */ Modrm(opmap_0f::G_0F72),
    /* 0F 73 */ Modrm(opmap_0f::G_0F73),
    /* 0F 74 */ Modrm(opmap_0f::G_0F74),
    /* 0F 75 */ Modrm(opmap_0f::G_0F75),
    /* 0F 76 */ Modrm(opmap_0f::G_0F76),
    /* 0F 77 */ Plain(opmap_0f::G_0F77),
    /* 0F 78 */ Modrm(opmap_0f::G_0F78),
    /* 0F 79 */ Modrm(opmap_0f::G_0F79),
    /* 0F 7A */ Invalid,
    /* 0F 7B */ Invalid,
    /* 0F 7C */ Modrm(opmap_0f::G_0F7C),
    /* 0F 7D */ Modrm(opmap_0f::G_0F7D),
    /* 0F 7E */ Modrm(opmap_0f::G_0F7E),
    /* 0F 7F */ Modrm(opmap_0f::G_0F7F),
    /* 0F 80 */ Plain(opmap_0f::G_0F80_32),
    /* 0F 81 */ Plain(opmap_0f::G_0F81_32),
    /* 0F 82 */ Plain(opmap_0f::G_0F82_32),
    /* 0F 83 */ Plain(opmap_0f::G_0F83_32),
    /* 0F 84 */ Plain(opmap_0f::G_0F84_32),
    /* 0F 85 */ Plain(opmap_0f::G_0F85_32),
    /* 0F 86 */ Plain(opmap_0f::G_0F86_32),
    /* 0F 87 */ Plain(opmap_0f::G_0F87_32),
    /* 0F 88 */ Plain(opmap_0f::G_0F88_32),
    /* 0F 89 */ Plain(opmap_0f::G_0F89_32),
    /* 0F 8A */ Plain(opmap_0f::G_0F8A_32),
    /* 0F 8B */ Plain(opmap_0f::G_0F8B_32),
    /* 0F 8C */ Plain(opmap_0f::G_0F8C_32),
    /* 0F 8D */ Plain(opmap_0f::G_0F8D_32),
    /* 0F 8E */ Plain(opmap_0f::G_0F8E_32),
    /* 0F 8F */ Plain(opmap_0f::G_0F8F_32),
    /* 0F 90 */ Modrm(opmap_0f::G_0F90),
    /* 0F 91 */ Modrm(opmap_0f::G_0F91),
    /* 0F 92 */ Modrm(opmap_0f::G_0F92),
    /* 0F 93 */ Modrm(opmap_0f::G_0F93),
    /* 0F 94 */ Modrm(opmap_0f::G_0F94),
    /* 0F 95 */ Modrm(opmap_0f::G_0F95),
    /* 0F 96 */ Modrm(opmap_0f::G_0F96),
    /* 0F 97 */ Modrm(opmap_0f::G_0F97),
    /* 0F 98 */ Modrm(opmap_0f::G_0F98),
    /* 0F 99 */ Modrm(opmap_0f::G_0F99),
    /* 0F 9A */ Modrm(opmap_0f::G_0F9A),
    /* 0F 9B */ Modrm(opmap_0f::G_0F9B),
    /* 0F 9C */ Modrm(opmap_0f::G_0F9C),
    /* 0F 9D */ Modrm(opmap_0f::G_0F9D),
    /* 0F 9E */ Modrm(opmap_0f::G_0F9E),
    /* 0F 9F */ Modrm(opmap_0f::G_0F9F),
    /* 0F A0 */ Plain(opmap_0f::G_0FA0),
    /* 0F A1 */ Plain(opmap_0f::G_0FA1),
    /* 0F A2 */ Simple(opmap_0f::G_0FA2),
    /* 0F A3 */ Modrm(opmap_0f::G_0FA3),
    /* 0F A4 */ Modrm(opmap_0f::G_0FA4),
    /* 0F A5 */ Modrm(opmap_0f::G_0FA5),
    /* 0F A6 */ Invalid,
    /* 0F A7 */ Invalid,
    /* 0F A8 */ Plain(opmap_0f::G_0FA8),
    /* 0F A9 */ Plain(opmap_0f::G_0FA9),
    /* 0F AA */ Simple(opmap_0f::G_0FAA),
    /* 0F AB */ Modrm(opmap_0f::G_0FAB),
    /* 0F AC */ Modrm(opmap_0f::G_0FAC),
    /* 0F AD */ Modrm(opmap_0f::G_0FAD),
    /* 0F AE */ Modrm(opmap_0f::G_0FAE),
    /* 0F AF */ Modrm(opmap_0f::G_0FAF),
    /* 0F B0 */ Modrm(opmap_0f::G_0FB0),
    /* 0F B1 */ Modrm(opmap_0f::G_0FB1),
    /* 0F B2 */ Modrm(opmap_0f::G_0FB2),
    /* 0F B3 */ Modrm(opmap_0f::G_0FB3),
    /* 0F B4 */ Modrm(opmap_0f::G_0FB4),
    /* 0F B5 */ Modrm(opmap_0f::G_0FB5),
    /* 0F B6 */ Modrm(opmap_0f::G_0FB6),
    /* 0F B7 */ Modrm(opmap_0f::G_0FB7),
    /* 0F B8 */ Modrm(opmap_0f::G_0FB8),
    /* 0F B9 */ Modrm(opmap_0f::G_0FB9),
    /* 0F BA */ Modrm(opmap_0f::G_0FBA),
    /* 0F BB */ Modrm(opmap_0f::G_0FBB),
    /* 0F BC */ Modrm(opmap_0f::G_0FBC),
    /* 0F BD */ Modrm(opmap_0f::G_0FBD),
    /* 0F BE */ Modrm(opmap_0f::G_0FBE),
    /* 0F BF */ Modrm(opmap_0f::G_0FBF),
    /* 0F C0 */ Modrm(opmap_0f::G_0FC0),
    /* 0F C1 */ Modrm(opmap_0f::G_0FC1),
    /* 0F C2 */ Modrm(opmap_0f::G_0FC2),
    /* 0F C3 */ Modrm(opmap_0f::G_0FC3),
    /* 0F C4 */ Modrm(opmap_0f::G_0FC4),
    /* 0F C5 */ Modrm(opmap_0f::G_0FC5),
    /* 0F C6 */ Modrm(opmap_0f::G_0FC6),
    /* 0F C7 */ Modrm(opmap_0f::G_0FC7),
    /* 0F C8 */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F C9 */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F CA */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F CB */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F CC */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F CD */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F CE */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F CF */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F D0 */ Modrm(opmap_0f::G_0FD0),
    /* 0F D1 */ Modrm(opmap_0f::G_0FD1),
    /* 0F D2 */ Modrm(opmap_0f::G_0FD2),
    /* 0F D3 */ Modrm(opmap_0f::G_0FD3),
    /* 0F D4 */ Modrm(opmap_0f::G_0FD4),
    /* 0F D5 */ Modrm(opmap_0f::G_0FD5),
    /* 0F D6 */ Modrm(opmap_0f::G_0FD6),
    /* 0F D7 */ Modrm(opmap_0f::G_0FD7),
    /* 0F D8 */ Modrm(opmap_0f::G_0FD8),
    /* 0F D9 */ Modrm(opmap_0f::G_0FD9),
    /* 0F DA */ Modrm(opmap_0f::G_0FDA),
    /* 0F DB */ Modrm(opmap_0f::G_0FDB),
    /* 0F DC */ Modrm(opmap_0f::G_0FDC),
    /* 0F DD */ Modrm(opmap_0f::G_0FDD),
    /* 0F DE */ Modrm(opmap_0f::G_0FDE),
    /* 0F DF */ Modrm(opmap_0f::G_0FDF),
    /* 0F E0 */ Modrm(opmap_0f::G_0FE0),
    /* 0F E1 */ Modrm(opmap_0f::G_0FE1),
    /* 0F E2 */ Modrm(opmap_0f::G_0FE2),
    /* 0F E3 */ Modrm(opmap_0f::G_0FE3),
    /* 0F E4 */ Modrm(opmap_0f::G_0FE4),
    /* 0F E5 */ Modrm(opmap_0f::G_0FE5),
    /* 0F E6 */ Modrm(opmap_0f::G_0FE6),
    /* 0F E7 */ Modrm(opmap_0f::G_0FE7),
    /* 0F E8 */ Modrm(opmap_0f::G_0FE8),
    /* 0F E9 */ Modrm(opmap_0f::G_0FE9),
    /* 0F EA */ Modrm(opmap_0f::G_0FEA),
    /* 0F EB */ Modrm(opmap_0f::G_0FEB),
    /* 0F EC */ Modrm(opmap_0f::G_0FEC),
    /* 0F ED */ Modrm(opmap_0f::G_0FED),
    /* 0F EE */ Modrm(opmap_0f::G_0FEE),
    /* 0F EF */ Modrm(opmap_0f::G_0FEF),
    /* 0F F0 */ Modrm(opmap_0f::G_0FF0),
    /* 0F F1 */ Modrm(opmap_0f::G_0FF1),
    /* 0F F2 */ Modrm(opmap_0f::G_0FF2),
    /* 0F F3 */ Modrm(opmap_0f::G_0FF3),
    /* 0F F4 */ Modrm(opmap_0f::G_0FF4),
    /* 0F F5 */ Modrm(opmap_0f::G_0FF5),
    /* 0F F6 */ Modrm(opmap_0f::G_0FF6),
    /* 0F F7 */ Modrm(opmap_0f::G_0FF7),
    /* 0F F8 */ Modrm(opmap_0f::G_0FF8),
    /* 0F F9 */ Modrm(opmap_0f::G_0FF9),
    /* 0F FA */ Modrm(opmap_0f::G_0FFA),
    /* 0F FB */ Modrm(opmap_0f::G_0FFB),
    /* 0F FC */ Modrm(opmap_0f::G_0FFC),
    /* 0F FD */ Modrm(opmap_0f::G_0FFD),
    /* 0F FE */ Modrm(opmap_0f::G_0FFE),
    /* 0F FF */ Simple(opmap_0f::G_0FFF),
    /* 0F 38 00 */ Modrm(opmap_0f38::G_0F3800),
    /* 0F 38 01 */ Modrm(opmap_0f38::G_0F3801),
    /* 0F 38 02 */ Modrm(opmap_0f38::G_0F3802),
    /* 0F 38 03 */ Modrm(opmap_0f38::G_0F3803),
    /* 0F 38 04 */ Modrm(opmap_0f38::G_0F3804),
    /* 0F 38 05 */ Modrm(opmap_0f38::G_0F3805),
    /* 0F 38 06 */ Modrm(opmap_0f38::G_0F3806),
    /* 0F 38 07 */ Modrm(opmap_0f38::G_0F3807),
    /* 0F 38 08 */ Modrm(opmap_0f38::G_0F3808),
    /* 0F 38 09 */ Modrm(opmap_0f38::G_0F3809),
    /* 0F 38 0A */ Modrm(opmap_0f38::G_0F380A),
    /* 0F 38 0B */ Modrm(opmap_0f38::G_0F380B),
    /* 0F 38 0C */ Invalid,
    /* 0F 38 0D */ Invalid,
    /* 0F 38 0E */ Invalid,
    /* 0F 38 0F */ Invalid,
    /* 0F 38 10 */ Modrm(opmap_0f38::G_0F3810),
    /* 0F 38 11 */ Invalid,
    /* 0F 38 12 */ Invalid,
    /* 0F 38 13 */ Invalid,
    /* 0F 38 14 */ Modrm(opmap_0f38::G_0F3814),
    /* 0F 38 15 */ Modrm(opmap_0f38::G_0F3815),
    /* 0F 38 16 */ Invalid,
    /* 0F 38 17 */ Modrm(opmap_0f38::G_0F3817),
    /* 0F 38 18 */ Invalid,
    /* 0F 38 19 */ Invalid,
    /* 0F 38 1A */ Invalid,
    /* 0F 38 1B */ Invalid,
    /* 0F 38 1C */ Modrm(opmap_0f38::G_0F381C),
    /* 0F 38 1D */ Modrm(opmap_0f38::G_0F381D),
    /* 0F 38 1E */ Modrm(opmap_0f38::G_0F381E),
    /* 0F 38 1F */ Invalid,
    /* 0F 38 20 */ Modrm(opmap_0f38::G_0F3820),
    /* 0F 38 21 */ Modrm(opmap_0f38::G_0F3821),
    /* 0F 38 22 */ Modrm(opmap_0f38::G_0F3822),
    /* 0F 38 23 */ Modrm(opmap_0f38::G_0F3823),
    /* 0F 38 24 */ Modrm(opmap_0f38::G_0F3824),
    /* 0F 38 25 */ Modrm(opmap_0f38::G_0F3825),
    /* 0F 38 26 */ Invalid,
    /* 0F 38 27 */ Invalid,
    /* 0F 38 28 */ Modrm(opmap_0f38::G_0F3828),
    /* 0F 38 29 */ Modrm(opmap_0f38::G_0F3829),
    /* 0F 38 2A */ Modrm(opmap_0f38::G_0F382A),
    /* 0F 38 2B */ Modrm(opmap_0f38::G_0F382B),
    /* 0F 38 2C */ Invalid,
    /* 0F 38 2D */ Invalid,
    /* 0F 38 2E */ Invalid,
    /* 0F 38 2F */ Invalid,
    /* 0F 38 30 */ Modrm(opmap_0f38::G_0F3830),
    /* 0F 38 31 */ Modrm(opmap_0f38::G_0F3831),
    /* 0F 38 32 */ Modrm(opmap_0f38::G_0F3832),
    /* 0F 38 33 */ Modrm(opmap_0f38::G_0F3833),
    /* 0F 38 34 */ Modrm(opmap_0f38::G_0F3834),
    /* 0F 38 35 */ Modrm(opmap_0f38::G_0F3835),
    /* 0F 38 36 */ Invalid,
    /* 0F 38 37 */ Modrm(opmap_0f38::G_0F3837),
    /* 0F 38 38 */ Modrm(opmap_0f38::G_0F3838),
    /* 0F 38 39 */ Modrm(opmap_0f38::G_0F3839),
    /* 0F 38 3A */ Modrm(opmap_0f38::G_0F383A),
    /* 0F 38 3B */ Modrm(opmap_0f38::G_0F383B),
    /* 0F 38 3C */ Modrm(opmap_0f38::G_0F383C),
    /* 0F 38 3D */ Modrm(opmap_0f38::G_0F383D),
    /* 0F 38 3E */ Modrm(opmap_0f38::G_0F383E),
    /* 0F 38 3F */ Modrm(opmap_0f38::G_0F383F),
    /* 0F 38 40 */ Modrm(opmap_0f38::G_0F3840),
    /* 0F 38 41 */ Modrm(opmap_0f38::G_0F3841),
    /* 0F 38 42 */ Invalid,
    /* 0F 38 43 */ Invalid,
    /* 0F 38 44 */ Invalid,
    /* 0F 38 45 */ Invalid,
    /* 0F 38 46 */ Invalid,
    /* 0F 38 47 */ Invalid,
    /* 0F 38 48 */ Invalid,
    /* 0F 38 49 */ Invalid,
    /* 0F 38 4A */ Invalid,
    /* 0F 38 4B */ Invalid,
    /* 0F 38 4C */ Invalid,
    /* 0F 38 4D */ Invalid,
    /* 0F 38 4E */ Invalid,
    /* 0F 38 4F */ Invalid,
    /* 0F 38 50 */ Invalid,
    /* 0F 38 51 */ Invalid,
    /* 0F 38 52 */ Invalid,
    /* 0F 38 53 */ Invalid,
    /* 0F 38 54 */ Invalid,
    /* 0F 38 55 */ Invalid,
    /* 0F 38 56 */ Invalid,
    /* 0F 38 57 */ Invalid,
    /* 0F 38 58 */ Invalid,
    /* 0F 38 59 */ Invalid,
    /* 0F 38 5A */ Invalid,
    /* 0F 38 5B */ Invalid,
    /* 0F 38 5C */ Invalid,
    /* 0F 38 5D */ Invalid,
    /* 0F 38 5E */ Invalid,
    /* 0F 38 5F */ Invalid,
    /* 0F 38 60 */ Invalid,
    /* 0F 38 61 */ Invalid,
    /* 0F 38 62 */ Invalid,
    /* 0F 38 63 */ Invalid,
    /* 0F 38 64 */ Invalid,
    /* 0F 38 65 */ Invalid,
    /* 0F 38 66 */ Invalid,
    /* 0F 38 67 */ Invalid,
    /* 0F 38 68 */ Invalid,
    /* 0F 38 69 */ Invalid,
    /* 0F 38 6A */ Invalid,
    /* 0F 38 6B */ Invalid,
    /* 0F 38 6C */ Invalid,
    /* 0F 38 6D */ Invalid,
    /* 0F 38 6E */ Invalid,
    /* 0F 38 6F */ Invalid,
    /* 0F 38 70 */ Invalid,
    /* 0F 38 71 */ Invalid,
    /* 0F 38 72 */ Invalid,
    /* 0F 38 73 */ Invalid,
    /* 0F 38 74 */ Invalid,
    /* 0F 38 75 */ Invalid,
    /* 0F 38 76 */ Invalid,
    /* 0F 38 77 */ Invalid,
    /* 0F 38 78 */ Invalid,
    /* 0F 38 79 */ Invalid,
    /* 0F 38 7A */ Invalid,
    /* 0F 38 7B */ Invalid,
    /* 0F 38 7C */ Invalid,
    /* 0F 38 7D */ Invalid,
    /* 0F 38 7E */ Invalid,
    /* 0F 38 7F */ Invalid,
    /* 0F 38 80 */ Modrm(opmap_0f38::G_0F3880),
    /* 0F 38 81 */ Modrm(opmap_0f38::G_0F3881),
    /* 0F 38 82 */ Modrm(opmap_0f38::G_0F3882),
    /* 0F 38 83 */ Invalid,
    /* 0F 38 84 */ Invalid,
    /* 0F 38 85 */ Invalid,
    /* 0F 38 86 */ Invalid,
    /* 0F 38 87 */ Invalid,
    /* 0F 38 88 */ Invalid,
    /* 0F 38 89 */ Invalid,
    /* 0F 38 8A */ Invalid,
    /* 0F 38 8B */ Invalid,
    /* 0F 38 8C */ Invalid,
    /* 0F 38 8D */ Invalid,
    /* 0F 38 8E */ Invalid,
    /* 0F 38 8F */ Invalid,
    /* 0F 38 90 */ Invalid,
    /* 0F 38 91 */ Invalid,
    /* 0F 38 92 */ Invalid,
    /* 0F 38 93 */ Invalid,
    /* 0F 38 94 */ Invalid,
    /* 0F 38 95 */ Invalid,
    /* 0F 38 96 */ Invalid,
    /* 0F 38 97 */ Invalid,
    /* 0F 38 98 */ Invalid,
    /* 0F 38 99 */ Invalid,
    /* 0F 38 9A */ Invalid,
    /* 0F 38 9B */ Invalid,
    /* 0F 38 9C */ Invalid,
    /* 0F 38 9D */ Invalid,
    /* 0F 38 9E */ Invalid,
    /* 0F 38 9F */ Invalid,
    /* 0F 38 A0 */ Invalid,
    /* 0F 38 A1 */ Invalid,
    /* 0F 38 A2 */ Invalid,
    /* 0F 38 A3 */ Invalid,
    /* 0F 38 A4 */ Invalid,
    /* 0F 38 A5 */ Invalid,
    /* 0F 38 A6 */ Invalid,
    /* 0F 38 A7 */ Invalid,
    /* 0F 38 A8 */ Invalid,
    /* 0F 38 A9 */ Invalid,
    /* 0F 38 AA */ Invalid,
    /* 0F 38 AB */ Invalid,
    /* 0F 38 AC */ Invalid,
    /* 0F 38 AD */ Invalid,
    /* 0F 38 AE */ Invalid,
    /* 0F 38 AF */ Invalid,
    /* 0F 38 B0 */ Invalid,
    /* 0F 38 B1 */ Invalid,
    /* 0F 38 B2 */ Invalid,
    /* 0F 38 B3 */ Invalid,
    /* 0F 38 B4 */ Invalid,
    /* 0F 38 B5 */ Invalid,
    /* 0F 38 B6 */ Invalid,
    /* 0F 38 B7 */ Invalid,
    /* 0F 38 B8 */ Invalid,
    /* 0F 38 B9 */ Invalid,
    /* 0F 38 BA */ Invalid,
    /* 0F 38 BB */ Invalid,
    /* 0F 38 BC */ Invalid,
    /* 0F 38 BD */ Invalid,
    /* 0F 38 BE */ Invalid,
    /* 0F 38 BF */ Invalid,
    /* 0F 38 C0 */ Invalid,
    /* 0F 38 C1 */ Invalid,
    /* 0F 38 C2 */ Invalid,
    /* 0F 38 C3 */ Invalid,
    /* 0F 38 C4 */ Invalid,
    /* 0F 38 C5 */ Invalid,
    /* 0F 38 C6 */ Invalid,
    /* 0F 38 C7 */ Invalid,
    /* 0F 38 C8 */ Modrm(opmap_0f38::G_0F38C8),
    /* 0F 38 C9 */ Modrm(opmap_0f38::G_0F38C9),
    /* 0F 38 CA */ Modrm(opmap_0f38::G_0F38CA),
    /* 0F 38 CB */ Modrm(opmap_0f38::G_0F38CB),
    /* 0F 38 CC */ Modrm(opmap_0f38::G_0F38CC),
    /* 0F 38 CD */ Modrm(opmap_0f38::G_0F38CD),
    /* 0F 38 CE */ Invalid,
    /* 0F 38 CF */ Modrm(opmap_0f38::G_0F38CF),
    /* 0F 38 D0 */ Invalid,
    /* 0F 38 D1 */ Invalid,
    /* 0F 38 D2 */ Invalid,
    /* 0F 38 D3 */ Invalid,
    /* 0F 38 D4 */ Invalid,
    /* 0F 38 D5 */ Invalid,
    /* 0F 38 D6 */ Invalid,
    /* 0F 38 D7 */ Invalid,
    /* 0F 38 D8 */ Invalid,
    /* 0F 38 D9 */ Invalid,
    /* 0F 38 DA */ Invalid,
    /* 0F 38 DB */ Modrm(opmap_0f38::G_0F38DB),
    /* 0F 38 DC */ Modrm(opmap_0f38::G_0F38DC),
    /* 0F 38 DD */ Modrm(opmap_0f38::G_0F38DD),
    /* 0F 38 DE */ Modrm(opmap_0f38::G_0F38DE),
    /* 0F 38 DF */ Modrm(opmap_0f38::G_0F38DF),
    /* 0F 38 E0 */ Invalid,
    /* 0F 38 E1 */ Invalid,
    /* 0F 38 E2 */ Invalid,
    /* 0F 38 E3 */ Invalid,
    /* 0F 38 E4 */ Invalid,
    /* 0F 38 E5 */ Invalid,
    /* 0F 38 E6 */ Invalid,
    /* 0F 38 E7 */ Invalid,
    /* 0F 38 E8 */ Invalid,
    /* 0F 38 E9 */ Invalid,
    /* 0F 38 EA */ Invalid,
    /* 0F 38 EB */ Invalid,
    /* 0F 38 EC */ Invalid,
    /* 0F 38 ED */ Invalid,
    /* 0F 38 EE */ Invalid,
    /* 0F 38 EF */ Invalid,
    /* 0F 38 F0 */ Modrm(opmap_0f38::G_0F38F0),
    /* 0F 38 F1 */ Modrm(opmap_0f38::G_0F38F1),
    /* 0F 38 F2 */ Invalid,
    /* 0F 38 F3 */ Invalid,
    /* 0F 38 F4 */ Invalid,
    /* 0F 38 F5 */ Modrm(opmap_0f38::G_0F38F5),
    /* 0F 38 F6 */ Modrm(opmap_0f38::G_0F38F6),
    /* 0F 38 F7 */ Invalid,
    /* 0F 38 F8 */ Invalid,
    /* 0F 38 F9 */ Modrm(opmap_0f38::G_0F38F6),
    /* 0F 38 FA */ Invalid,
    /* 0F 38 FB */ Invalid,
    /* 0F 38 FC */ Invalid,
    /* 0F 38 FD */ Invalid,
    /* 0F 38 FE */ Invalid,
    /* 0F 38 FF */ Invalid,
    /* 0F 38 00 */ Invalid,
    /* 0F 3A 01 */ Invalid,
    /* 0F 3A 02 */ Invalid,
    /* 0F 3A 03 */ Invalid,
    /* 0F 3A 04 */ Invalid,
    /* 0F 3A 05 */ Invalid,
    /* 0F 3A 06 */ Invalid,
    /* 0F 3A 07 */ Invalid,
    /* 0F 3A 08 */ Modrm(opmap_0f3a::G_0F3A08),
    /* 0F 3A 09 */ Modrm(opmap_0f3a::G_0F3A09),
    /* 0F 3A 0A */ Modrm(opmap_0f3a::G_0F3A0A),
    /* 0F 3A 0B */ Modrm(opmap_0f3a::G_0F3A0B),
    /* 0F 3A 0C */ Modrm(opmap_0f3a::G_0F3A0C),
    /* 0F 3A 0D */ Modrm(opmap_0f3a::G_0F3A0D),
    /* 0F 3A 0E */ Modrm(opmap_0f3a::G_0F3A0E),
    /* 0F 3A 0F */ Modrm(opmap_0f3a::G_0F3A0F),
    /* 0F 3A 10 */ Invalid,
    /* 0F 3A 11 */ Invalid,
    /* 0F 3A 12 */ Invalid,
    /* 0F 3A 13 */ Invalid,
    /* 0F 3A 14 */ Modrm(opmap_0f3a::G_0F3A14),
    /* 0F 3A 15 */ Modrm(opmap_0f3a::G_0F3A15),
    /* 0F 3A 16 */ Modrm(opmap_0f3a::G_0F3A16),
    /* 0F 3A 17 */ Modrm(opmap_0f3a::G_0F3A17),
    /* 0F 3A 18 */ Invalid,
    /* 0F 3A 19 */ Invalid,
    /* 0F 3A 1A */ Invalid,
    /* 0F 3A 1B */ Invalid,
    /* 0F 3A 1C */ Invalid,
    /* 0F 3A 1D */ Invalid,
    /* 0F 3A 1E */ Invalid,
    /* 0F 3A 1F */ Invalid,
    /* 0F 3A 20 */ Modrm(opmap_0f3a::G_0F3A20),
    /* 0F 3A 21 */ Modrm(opmap_0f3a::G_0F3A21),
    /* 0F 3A 22 */ Modrm(opmap_0f3a::G_0F3A22),
    /* 0F 3A 23 */ Invalid,
    /* 0F 3A 24 */ Invalid,
    /* 0F 3A 25 */ Invalid,
    /* 0F 3A 26 */ Invalid,
    /* 0F 3A 27 */ Invalid,
    /* 0F 3A 28 */ Invalid,
    /* 0F 3A 29 */ Invalid,
    /* 0F 3A 2A */ Invalid,
    /* 0F 3A 2B */ Invalid,
    /* 0F 3A 2C */ Invalid,
    /* 0F 3A 2D */ Invalid,
    /* 0F 3A 2E */ Invalid,
    /* 0F 3A 2F */ Invalid,
    /* 0F 3A 30 */ Invalid,
    /* 0F 3A 31 */ Invalid,
    /* 0F 3A 32 */ Invalid,
    /* 0F 3A 33 */ Invalid,
    /* 0F 3A 34 */ Invalid,
    /* 0F 3A 35 */ Invalid,
    /* 0F 3A 36 */ Invalid,
    /* 0F 3A 37 */ Invalid,
    /* 0F 3A 38 */ Invalid,
    /* 0F 3A 39 */ Invalid,
    /* 0F 3A 3A */ Invalid,
    /* 0F 3A 3B */ Invalid,
    /* 0F 3A 3C */ Invalid,
    /* 0F 3A 3D */ Invalid,
    /* 0F 3A 3E */ Invalid,
    /* 0F 3A 3F */ Invalid,
    /* 0F 3A 40 */ Modrm(opmap_0f3a::G_0F3A40),
    /* 0F 3A 41 */ Modrm(opmap_0f3a::G_0F3A41),
    /* 0F 3A 42 */ Modrm(opmap_0f3a::G_0F3A42),
    /* 0F 3A 43 */ Invalid,
    /* 0F 3A 44 */ Modrm(opmap_0f3a::G_0F3A44),
    /* 0F 3A 45 */ Invalid,
    /* 0F 3A 46 */ Invalid,
    /* 0F 3A 47 */ Invalid,
    /* 0F 3A 48 */ Invalid,
    /* 0F 3A 49 */ Invalid,
    /* 0F 3A 4A */ Invalid,
    /* 0F 3A 4B */ Invalid,
    /* 0F 3A 4C */ Invalid,
    /* 0F 3A 4D */ Invalid,
    /* 0F 3A 4E */ Invalid,
    /* 0F 3A 4F */ Invalid,
    /* 0F 3A 50 */ Invalid,
    /* 0F 3A 51 */ Invalid,
    /* 0F 3A 52 */ Invalid,
    /* 0F 3A 53 */ Invalid,
    /* 0F 3A 54 */ Invalid,
    /* 0F 3A 55 */ Invalid,
    /* 0F 3A 56 */ Invalid,
    /* 0F 3A 57 */ Invalid,
    /* 0F 3A 58 */ Invalid,
    /* 0F 3A 59 */ Invalid,
    /* 0F 3A 5A */ Invalid,
    /* 0F 3A 5B */ Invalid,
    /* 0F 3A 5C */ Invalid,
    /* 0F 3A 5D */ Invalid,
    /* 0F 3A 5E */ Invalid,
    /* 0F 3A 5F */ Invalid,
    /* 0F 3A 60 */ Modrm(opmap_0f3a::G_0F3A60),
    /* 0F 3A 61 */ Modrm(opmap_0f3a::G_0F3A61),
    /* 0F 3A 62 */ Modrm(opmap_0f3a::G_0F3A62),
    /* 0F 3A 64 */ Modrm(opmap_0f3a::G_0F3A63),
    /* 0F 3A 64 */ Invalid,
    /* 0F 3A 65 */ Invalid,
    /* 0F 3A 66 */ Invalid,
    /* 0F 3A 67 */ Invalid,
    /* 0F 3A 68 */ Invalid,
    /* 0F 3A 69 */ Invalid,
    /* 0F 3A 6A */ Invalid,
    /* 0F 3A 6B */ Invalid,
    /* 0F 3A 6C */ Invalid,
    /* 0F 3A 6D */ Invalid,
    /* 0F 3A 6E */ Invalid,
    /* 0F 3A 6F */ Invalid,
    /* 0F 3A 70 */ Invalid,
    /* 0F 3A 71 */ Invalid,
    /* 0F 3A 72 */ Invalid,
    /* 0F 3A 73 */ Invalid,
    /* 0F 3A 74 */ Invalid,
    /* 0F 3A 75 */ Invalid,
    /* 0F 3A 76 */ Invalid,
    /* 0F 3A 77 */ Invalid,
    /* 0F 3A 78 */ Invalid,
    /* 0F 3A 79 */ Invalid,
    /* 0F 3A 7A */ Invalid,
    /* 0F 3A 7B */ Invalid,
    /* 0F 3A 7C */ Invalid,
    /* 0F 3A 7D */ Invalid,
    /* 0F 3A 7E */ Invalid,
    /* 0F 3A 7F */ Invalid,
    /* 0F 3A 80 */ Invalid,
    /* 0F 3A 81 */ Invalid,
    /* 0F 3A 82 */ Invalid,
    /* 0F 3A 83 */ Invalid,
    /* 0F 3A 84 */ Invalid,
    /* 0F 3A 85 */ Invalid,
    /* 0F 3A 86 */ Invalid,
    /* 0F 3A 87 */ Invalid,
    /* 0F 3A 88 */ Invalid,
    /* 0F 3A 89 */ Invalid,
    /* 0F 3A 8A */ Invalid,
    /* 0F 3A 8B */ Invalid,
    /* 0F 3A 8C */ Invalid,
    /* 0F 3A 8D */ Invalid,
    /* 0F 3A 8E */ Invalid,
    /* 0F 3A 8F */ Invalid,
    /* 0F 3A 90 */ Invalid,
    /* 0F 3A 91 */ Invalid,
    /* 0F 3A 92 */ Invalid,
    /* 0F 3A 93 */ Invalid,
    /* 0F 3A 94 */ Invalid,
    /* 0F 3A 95 */ Invalid,
    /* 0F 3A 96 */ Invalid,
    /* 0F 3A 97 */ Invalid,
    /* 0F 3A 98 */ Invalid,
    /* 0F 3A 99 */ Invalid,
    /* 0F 3A 9A */ Invalid,
    /* 0F 3A 9B */ Invalid,
    /* 0F 3A 9C */ Invalid,
    /* 0F 3A 9D */ Invalid,
    /* 0F 3A 9E */ Invalid,
    /* 0F 3A 9F */ Invalid,
    /* 0F 3A A0 */ Invalid,
    /* 0F 3A A1 */ Invalid,
    /* 0F 3A A2 */ Invalid,
    /* 0F 3A A3 */ Invalid,
    /* 0F 3A A4 */ Invalid,
    /* 0F 3A A5 */ Invalid,
    /* 0F 3A A6 */ Invalid,
    /* 0F 3A A7 */ Invalid,
    /* 0F 3A A8 */ Invalid,
    /* 0F 3A A9 */ Invalid,
    /* 0F 3A AA */ Invalid,
    /* 0F 3A AB */ Invalid,
    /* 0F 3A AC */ Invalid,
    /* 0F 3A AD */ Invalid,
    /* 0F 3A AE */ Invalid,
    /* 0F 3A AF */ Invalid,
    /* 0F 3A B0 */ Invalid,
    /* 0F 3A B1 */ Invalid,
    /* 0F 3A B2 */ Invalid,
    /* 0F 3A B3 */ Invalid,
    /* 0F 3A B4 */ Invalid,
    /* 0F 3A B5 */ Invalid,
    /* 0F 3A B6 */ Invalid,
    /* 0F 3A B7 */ Invalid,
    /* 0F 3A B8 */ Invalid,
    /* 0F 3A B9 */ Invalid,
    /* 0F 3A BA */ Invalid,
    /* 0F 3A BB */ Invalid,
    /* 0F 3A BC */ Invalid,
    /* 0F 3A BD */ Invalid,
    /* 0F 3A BE */ Invalid,
    /* 0F 3A BF */ Invalid,
    /* 0F 3A C0 */ Invalid,
    /* 0F 3A C1 */ Invalid,
    /* 0F 3A C2 */ Invalid,
    /* 0F 3A C3 */ Invalid,
    /* 0F 3A C4 */ Invalid,
    /* 0F 3A C5 */ Invalid,
    /* 0F 3A C6 */ Invalid,
    /* 0F 3A C7 */ Invalid,
    /* 0F 3A C8 */ Invalid,
    /* 0F 3A C9 */ Invalid,
    /* 0F 3A CA */ Invalid,
    /* 0F 3A CB */ Invalid,
    /* 0F 3A CC */ Modrm(opmap_0f3a::G_0F3ACC),
    /* 0F 3A CD */ Invalid,
    /* 0F 3A CE */ Modrm(opmap_0f3a::G_0F3ACE),
    /* 0F 3A CF */ Modrm(opmap_0f3a::G_0F3ACF),
    /* 0F 3A D0 */ Invalid,
    /* 0F 3A D1 */ Invalid,
    /* 0F 3A D2 */ Invalid,
    /* 0F 3A D3 */ Invalid,
    /* 0F 3A D4 */ Invalid,
    /* 0F 3A D5 */ Invalid,
    /* 0F 3A D6 */ Invalid,
    /* 0F 3A D7 */ Invalid,
    /* 0F 3A D8 */ Invalid,
    /* 0F 3A D9 */ Invalid,
    /* 0F 3A DA */ Invalid,
    /* 0F 3A DB */ Invalid,
    /* 0F 3A DC */ Invalid,
    /* 0F 3A DD */ Invalid,
    /* 0F 3A DE */ Invalid,
    /* 0F 3A DF */ Modrm(opmap_0f3a::G_0F3ADF),
    /* 0F 3A E0 */ Invalid,
    /* 0F 3A E1 */ Invalid,
    /* 0F 3A E2 */ Invalid,
    /* 0F 3A E3 */ Invalid,
    /* 0F 3A E4 */ Invalid,
    /* 0F 3A E5 */ Invalid,
    /* 0F 3A E6 */ Invalid,
    /* 0F 3A E7 */ Invalid,
    /* 0F 3A E8 */ Invalid,
    /* 0F 3A E9 */ Invalid,
    /* 0F 3A EA */ Invalid,
    /* 0F 3A EB */ Invalid,
    /* 0F 3A EC */ Invalid,
    /* 0F 3A ED */ Invalid,
    /* 0F 3A EE */ Invalid,
    /* 0F 3A EF */ Invalid,
    /* 0F 3A F0 */ Invalid,
    /* 0F 3A F1 */ Invalid,
    /* 0F 3A F2 */ Invalid,
    /* 0F 3A F3 */ Invalid,
    /* 0F 3A F4 */ Invalid,
    /* 0F 3A F5 */ Invalid,
    /* 0F 3A F6 */ Invalid,
    /* 0F 3A F7 */ Invalid,
    /* 0F 3A F8 */ Invalid,
    /* 0F 3A F9 */ Invalid,
    /* 0F 3A FA */ Invalid,
    /* 0F 3A FB */ Invalid,
    /* 0F 3A FC */ Invalid,
    /* 0F 3A FD */ Invalid,
    /* 0F 3A FE */ Invalid,
    /* 0F 3A FF */ Invalid,
];

pub(super) static DISPATCH64: [DecodeEntry; 1024] = [
    /* 00 */ Modrm(opmap::G_00),
    /* 01 */ Modrm(opmap::G_01),
    /* 02 */ Modrm(opmap::G_02),
    /* 03 */ Modrm(opmap::G_03),
    /* 04 */ Plain(opmap::G_04),
    /* 05 */ Plain(opmap::G_05),
    /* 06 */ Invalid,
    /* 07 */ Invalid,
    /* 08 */ Modrm(opmap::G_08),
    /* 09 */ Modrm(opmap::G_09),
    /* 0A */ Modrm(opmap::G_0A),
    /* 0B */ Modrm(opmap::G_0B),
    /* 0C */ Plain(opmap::G_0C),
    /* 0D */ Plain(opmap::G_0D),
    /* 0E */ Invalid,
    /* 0F */ Invalid, // 2-byte escape
    /* 10 */ Modrm(opmap::G_10),
    /* 11 */ Modrm(opmap::G_11),
    /* 12 */ Modrm(opmap::G_12),
    /* 13 */ Modrm(opmap::G_13),
    /* 14 */ Plain(opmap::G_14),
    /* 15 */ Plain(opmap::G_15),
    /* 16 */ Invalid,
    /* 17 */ Invalid,
    /* 18 */ Modrm(opmap::G_18),
    /* 19 */ Modrm(opmap::G_19),
    /* 1A */ Modrm(opmap::G_1A),
    /* 1B */ Modrm(opmap::G_1B),
    /* 1C */ Plain(opmap::G_1C),
    /* 1D */ Plain(opmap::G_1D),
    /* 1E */ Invalid,
    /* 1F */ Invalid,
    /* 20 */ Modrm(opmap::G_20),
    /* 21 */ Modrm(opmap::G_21),
    /* 22 */ Modrm(opmap::G_22),
    /* 23 */ Modrm(opmap::G_23),
    /* 24 */ Plain(opmap::G_24),
    /* 25 */ Plain(opmap::G_25),
    /* 26 */ Invalid, // ES:
    /* 27 */ Invalid,
    /* 28 */ Modrm(opmap::G_28),
    /* 29 */ Modrm(opmap::G_29),
    /* 2A */ Modrm(opmap::G_2A),
    /* 2B */ Modrm(opmap::G_2B),
    /* 2C */ Plain(opmap::G_2C),
    /* 2D */ Plain(opmap::G_2D),
    /* 2E */ Invalid, // CS:
    /* 2F */ Invalid,
    /* 30 */ Modrm(opmap::G_30),
    /* 31 */ Modrm(opmap::G_31),
    /* 32 */ Modrm(opmap::G_32),
    /* 33 */ Modrm(opmap::G_33),
    /* 34 */ Plain(opmap::G_34),
    /* 35 */ Plain(opmap::G_35),
    /* 36 */ Invalid, // SS:
    /* 37 */ Invalid,
    /* 38 */ Modrm(opmap::G_38),
    /* 39 */ Modrm(opmap::G_39),
    /* 3A */ Modrm(opmap::G_3A),
    /* 3B */ Modrm(opmap::G_3B),
    /* 3C */ Plain(opmap::G_3C),
    /* 3D */ Plain(opmap::G_3D),
    /* 3E */ Invalid, // DS:
    /* 3F */ Invalid,
    /* 40 */ Invalid, // REX prefix
    /* 41 */ Invalid, // REX prefix
    /* 42 */ Invalid, // REX prefix
    /* 43 */ Invalid, // REX prefix
    /* 44 */ Invalid, // REX prefix
    /* 45 */ Invalid, // REX prefix
    /* 46 */ Invalid, // REX prefix
    /* 47 */ Invalid, // REX prefix
    /* 48 */ Invalid, // REX prefix
    /* 49 */ Invalid, // REX prefix
    /* 4A */ Invalid, // REX prefix
    /* 4B */ Invalid, // REX prefix
    /* 4C */ Invalid, // REX prefix
    /* 4D */ Invalid, // REX prefix
    /* 4E */ Invalid, // REX prefix
    /* 4F */ Invalid, // REX prefix
    /* 50 */ Plain(opmap::G_50X57),
    /* 51 */ Plain(opmap::G_50X57),
    /* 52 */ Plain(opmap::G_50X57),
    /* 53 */ Plain(opmap::G_50X57),
    /* 54 */ Plain(opmap::G_50X57),
    /* 55 */ Plain(opmap::G_50X57),
    /* 56 */ Plain(opmap::G_50X57),
    /* 57 */ Plain(opmap::G_50X57),
    /* 58 */ Plain(opmap::G_58X5F),
    /* 59 */ Plain(opmap::G_58X5F),
    /* 5A */ Plain(opmap::G_58X5F),
    /* 5B */ Plain(opmap::G_58X5F),
    /* 5C */ Plain(opmap::G_58X5F),
    /* 5D */ Plain(opmap::G_58X5F),
    /* 5E */ Plain(opmap::G_58X5F),
    /* 5F */ Plain(opmap::G_58X5F),
    /* 60 */ Invalid,
    /* 61 */ Invalid,
    /* 62 */ Evex(ERR), // EVEX prefix
    /* 63 */ Modrm(opmap::G_63_64),
    /* 64 */ Invalid, // FS:
    /* 65 */ Invalid, // GS:
    /* 66 */ Invalid, // OSIZE:
    /* 67 */ Invalid, // ASIZE:
    /* 68 */ Plain(opmap::G_68),
    /* 69 */ Modrm(opmap::G_69),
    /* 6A */ Plain(opmap::G_6A),
    /* 6B */ Modrm(opmap::G_6B),
    /* 6C */ Plain(opmap::G_6C),
    /* 6D */ Plain(opmap::G_6D),
    /* 6E */ Plain(opmap::G_6E),
    /* 6F */ Plain(opmap::G_6F),
    /* 70 */ Plain(opmap::G_70_64),
    /* 71 */ Plain(opmap::G_71_64),
    /* 72 */ Plain(opmap::G_72_64),
    /* 73 */ Plain(opmap::G_73_64),
    /* 74 */ Plain(opmap::G_74_64),
    /* 75 */ Plain(opmap::G_75_64),
    /* 76 */ Plain(opmap::G_76_64),
    /* 77 */ Plain(opmap::G_77_64),
    /* 78 */ Plain(opmap::G_78_64),
    /* 79 */ Plain(opmap::G_79_64),
    /* 7A */ Plain(opmap::G_7A_64),
    /* 7B */ Plain(opmap::G_7B_64),
    /* 7C */ Plain(opmap::G_7C_64),
    /* 7D */ Plain(opmap::G_7D_64),
    /* 7E */ Plain(opmap::G_7E_64),
    /* 7F */ Plain(opmap::G_7F_64),
    /* 80 */ Modrm(opmap::G_80),
    /* 81 */ Modrm(opmap::G_81),
    /* 82 */ Invalid,
    /* 83 */ Modrm(opmap::G_83),
    /* 84 */ Modrm(opmap::G_84),
    /* 85 */ Modrm(opmap::G_85),
    /* 86 */ Modrm(opmap::G_86),
    /* 87 */ Modrm(opmap::G_87),
    /* 88 */ Modrm(opmap::G_88),
    /* 89 */ Modrm(opmap::G_89),
    /* 8A */ Modrm(opmap::G_8A),
    /* 8B */ Modrm(opmap::G_8B),
    /* 8C */ Modrm(opmap::G_8C),
    /* 8D */ Modrm(opmap::G_8D),
    /* 8E */ Modrm(opmap::G_8E),
    /* 8F */ Xop(opmap::G_8F), // XOP prefix
    /* 90 */ NopPause(opmap::G_90X97),
    /* 91 */ Plain(opmap::G_90X97),
    /* 92 */ Plain(opmap::G_90X97),
    /* 93 */ Plain(opmap::G_90X97),
    /* 94 */ Plain(opmap::G_90X97),
    /* 95 */ Plain(opmap::G_90X97),
    /* 96 */ Plain(opmap::G_90X97),
    /* 97 */ Plain(opmap::G_90X97),
    /* 98 */ Plain(opmap::G_98),
    /* 99 */ Plain(opmap::G_99),
    /* 9A */ Invalid,
    /* 9B */ Simple(opmap::G_9B),
    /* 9C */ Plain(opmap::G_9C),
    /* 9D */ Plain(opmap::G_9D),
    /* 9E */ Simple(opmap::G_9E_64),
    /* 9F */ Simple(opmap::G_9F_64),
    /* A0 */ Plain(opmap::G_A0_64),
    /* A1 */ Plain(opmap::G_A1_64),
    /* A2 */ Plain(opmap::G_A2_64),
    /* A3 */ Plain(opmap::G_A3_64),
    /* A4 */ Plain(opmap::G_A4),
    /* A5 */ Plain(opmap::G_A5),
    /* A6 */ Plain(opmap::G_A6),
    /* A7 */ Plain(opmap::G_A7),
    /* A8 */ Plain(opmap::G_A8),
    /* A9 */ Plain(opmap::G_A9),
    /* AA */ Plain(opmap::G_AA),
    /* AB */ Plain(opmap::G_AB),
    /* AC */ Plain(opmap::G_AC),
    /* AD */ Plain(opmap::G_AD),
    /* AE */ Plain(opmap::G_AE),
    /* AF */ Plain(opmap::G_AF),
    /* B0 */ Plain(opmap::G_B0X_B7),
    /* B1 */ Plain(opmap::G_B0X_B7),
    /* B2 */ Plain(opmap::G_B0X_B7),
    /* B3 */ Plain(opmap::G_B0X_B7),
    /* B4 */ Plain(opmap::G_B0X_B7),
    /* B5 */ Plain(opmap::G_B0X_B7),
    /* B6 */ Plain(opmap::G_B0X_B7),
    /* B7 */ Plain(opmap::G_B0X_B7),
    /* B8 */ Plain(opmap::G_B8X_BF),
    /* B9 */ Plain(opmap::G_B8X_BF),
    /* BA */ Plain(opmap::G_B8X_BF),
    /* BB */ Plain(opmap::G_B8X_BF),
    /* BC */ Plain(opmap::G_B8X_BF),
    /* BD */ Plain(opmap::G_B8X_BF),
    /* BE */ Plain(opmap::G_B8X_BF),
    /* BF */ Plain(opmap::G_B8X_BF),
    /* C0 */ Modrm(opmap::G_C0),
    /* C1 */ Modrm(opmap::G_C1),
    /* C2 */ Plain(opmap::G_C2_64),
    /* C3 */ Plain(opmap::G_C3_64),
    /* C4 */ Vex(ERR), // VEX prefix
    /* C5 */ Vex(ERR), // VEX prefix
    /* C6 */ Modrm(opmap::G_C6),
    /* C7 */ Modrm(opmap::G_C7),
    /* C8 */ Plain(opmap::G_C8_64),
    /* C9 */ Plain(opmap::G_C9_64),
    /* CA */ Plain(opmap::G_CA),
    /* CB */ Plain(opmap::G_CB),
    /* CC */ Simple(opmap::G_CC),
    /* CD */ Plain(opmap::G_CD),
    /* CE */ Invalid,
    /* CF */ Plain(opmap::G_CF_64),
    /* D0 */ Modrm(opmap::G_D0),
    /* D1 */ Modrm(opmap::G_D1),
    /* D2 */ Modrm(opmap::G_D2),
    /* D3 */ Modrm(opmap::G_D3),
    /* D4 */ Invalid,
    /* D5 */ Invalid,
    /* D6 */ Invalid,
    /* D7 */ Simple(opmap::G_D7),
    /* D8 */ FpEscape(&x87::D8),
    /* D9 */ FpEscape(&x87::D9),
    /* DA */ FpEscape(&x87::DA),
    /* DB */ FpEscape(&x87::DB),
    /* DC */ FpEscape(&x87::DC),
    /* DD */ FpEscape(&x87::DD),
    /* DE */ FpEscape(&x87::DE),
    /* DF */ FpEscape(&x87::DF),
    /* E0 */ Plain(opmap::G_E0_64),
    /* E1 */ Plain(opmap::G_E1_64),
    /* E2 */ Plain(opmap::G_E2_64),
    /* E3 */ Plain(opmap::G_E3_64),
    /* E4 */ Plain(opmap::G_E4),
    /* E5 */ Plain(opmap::G_E5),
    /* E6 */ Plain(opmap::G_E6),
    /* E7 */ Plain(opmap::G_E7),
    /* E8 */ Plain(opmap::G_E8_64),
    /* E9 */ Plain(opmap::G_E9_64),
    /* EA */ Invalid,
    /* EB */ Plain(opmap::G_EB_64),
    /* EC */ Plain(opmap::G_EC),
    /* ED */ Plain(opmap::G_ED),
    /* EE */ Plain(opmap::G_EE),
    /* EF */ Plain(opmap::G_EF),
    /* F0 */ Invalid, // LOCK
    /* F1 */ Simple(opmap::G_F1),
    /* F2 */ Invalid, // REPNE/REPNZ
    /* F3 */ Invalid, // REP, REPE/REPZ
    /* F4 */ Simple(opmap::G_F4),
    /* F5 */ Simple(opmap::G_F5),
    /* F6 */ Modrm(opmap::G_F6),
    /* F7 */ Modrm(opmap::G_F7),
    /* F8 */ Simple(opmap::G_F8),
    /* F9 */ Simple(opmap::G_F9),
    /* FA */ Simple(opmap::G_FA),
    /* FB */ Simple(opmap::G_FB),
    /* FC */ Simple(opmap::G_FC),
    /* FD */ Simple(opmap::G_FD),
    /* FE */ Modrm(opmap::G_FE),
    /* FF */ Modrm(opmap::G_FF),
    /* 0F 00 */ Modrm(opmap_0f::G_0F00),
    /* 0F 01 */ Modrm(opmap_0f::G_0F01),
    /* 0F 02 */ Modrm(opmap_0f::G_0F02),
    /* 0F 03 */ Modrm(opmap_0f::G_0F03),
    /* 0F 04 */ Invalid,
    /* 0F 05 */ Simple(opmap_0f::G_0F05_64),
    /* 0F 06 */ Simple(opmap_0f::G_0F06),
    /* 0F 07 */ Simple(opmap_0f::G_0F07_64),
    /* 0F 08 */ Simple(opmap_0f::G_0F08),
    /* 0F 09 */ Simple(opmap_0f::G_0F09),
    /* 0F 0A */ Invalid,
    /* 0F 0B */ Simple(opmap_0f::G_0F0B),
    /* 0F 0C */ Invalid,
    /* 0F 0D */ Modrm(opmap_0f::G_0F0D),
    /* 0F 0E */ Simple(opmap_0f::G_0F0E),
    /* 0F 0F */ ThreeDNow,
    /* 0F 10 */ Modrm(opmap_0f::G_0F10),
    /* 0F 11 */ Modrm(opmap_0f::G_0F11),
    /* 0F 12 */ Modrm(opmap_0f::G_0F12),
    /* 0F 13 */ Modrm(opmap_0f::G_0F13),
    /* 0F 14 */ Modrm(opmap_0f::G_0F14),
    /* 0F 15 */ Modrm(opmap_0f::G_0F15),
    /* 0F 16 */ Modrm(opmap_0f::G_0F16),
    /* 0F 17 */ Modrm(opmap_0f::G_0F17),
    /* 0F 18 */ Modrm(opmap_0f::G_0F18),
    /* 0F 19 */ Modrm(opmap_0f::G_MULTI_BYTE_NOP),
    /* 0F 1A */ Modrm(opmap_0f::G_MULTI_BYTE_NOP),
    /* 0F 1B */ Modrm(opmap_0f::G_MULTI_BYTE_NOP),
    /* 0F 1C */ Modrm(opmap_0f::G_MULTI_BYTE_NOP),
    /* 0F 1D */ Modrm(opmap_0f::G_MULTI_BYTE_NOP),
    /* 0F 1E */ Modrm(opmap_0f::G_0F1E),
    /* 0F 1F */ Modrm(opmap_0f::G_MULTI_BYTE_NOP),
    /* 0F 20 */ MovCrDr(opmap_0f::G_0F20_64),
    /* 0F 21 */ MovCrDr(opmap_0f::G_0F21_64),
    /* 0F 22 */ MovCrDr(opmap_0f::G_0F22_64),
    /* 0F 23 */ MovCrDr(opmap_0f::G_0F23_64),
    /* 0F 24 */ Invalid,
    /* 0F 25 */ Invalid,
    /* 0F 26 */ Invalid,
    /* 0F 27 */ Invalid,
    /* 0F 28 */ Modrm(opmap_0f::G_0F28),
    /* 0F 29 */ Modrm(opmap_0f::G_0F29),
    /* 0F 2A */ Modrm(opmap_0f::G_0F2A),
    /* 0F 2B */ Modrm(opmap_0f::G_0F2B),
    /* 0F 2C */ Modrm(opmap_0f::G_0F2C),
    /* 0F 2D */ Modrm(opmap_0f::G_0F2D),
    /* 0F 2E */ Modrm(opmap_0f::G_0F2E),
    /* 0F 2F */ Modrm(opmap_0f::G_0F2F),
    /* 0F 30 */ Simple(opmap_0f::G_0F30),
    /* 0F 31 */ Simple(opmap_0f::G_0F31),
    /* 0F 32 */ Simple(opmap_0f::G_0F32),
    /* 0F 33 */ Simple(opmap_0f::G_0F33),
    /* 0F 34 */ Simple(opmap_0f::G_0F34),
    /* 0F 35 */ Simple(opmap_0f::G_0F35),
    /* 0F 36 */ Invalid,
    /* 0F 37 */ Plain(opmap_0f::G_0F37),
    /* 0F 38 */ Invalid, // 3-byte escape
    /* 0F 39 */ Invalid,
    /* 0F 3A */ Invalid, // 3-byte escape
    /* 0F 3B */ Invalid,
    /* 0F 3C */ Invalid,
    /* 0F 3D */ Invalid,
    /* 0F 3E */ Invalid,
    /* 0F 3F */ Invalid,
    /* 0F 40 */ Modrm(opmap_0f::G_0F40),
    /* 0F 41 */ Modrm(opmap_0f::G_0F41),
    /* 0F 42 */ Modrm(opmap_0f::G_0F42),
    /* 0F 43 */ Modrm(opmap_0f::G_0F43),
    /* 0F 44 */ Modrm(opmap_0f::G_0F44),
    /* 0F 45 */ Modrm(opmap_0f::G_0F45),
    /* 0F 46 */ Modrm(opmap_0f::G_0F46),
    /* 0F 47 */ Modrm(opmap_0f::G_0F47),
    /* 0F 48 */ Modrm(opmap_0f::G_0F48),
    /* 0F 49 */ Modrm(opmap_0f::G_0F49),
    /* 0F 4A */ Modrm(opmap_0f::G_0F4A),
    /* 0F 4B */ Modrm(opmap_0f::G_0F4B),
    /* 0F 4C */ Modrm(opmap_0f::G_0F4C),
    /* 0F 4D */ Modrm(opmap_0f::G_0F4D),
    /* 0F 4E */ Modrm(opmap_0f::G_0F4E),
    /* 0F 4F */ Modrm(opmap_0f::G_0F4F),
    /* 0F 50 */ Modrm(opmap_0f::G_0F50),
    /* 0F 51 */ Modrm(opmap_0f::G_0F51),
    /* 0F 52 */ Modrm(opmap_0f::G_0F52),
    /* 0F 53 */ Modrm(opmap_0f::G_0F53),
    /* 0F 54 */ Modrm(opmap_0f::G_0F54),
    /* 0F 55 */ Modrm(opmap_0f::G_0F55),
    /* 0F 56 */ Modrm(opmap_0f::G_0F56),
    /* 0F 57 */ Modrm(opmap_0f::G_0F57),
    /* 0F 58 */ Modrm(opmap_0f::G_0F58),
    /* 0F 59 */ Modrm(opmap_0f::G_0F59),
    /* 0F 5A */ Modrm(opmap_0f::G_0F5A),
    /* 0F 5B */ Modrm(opmap_0f::G_0F5B),
    /* 0F 5C */ Modrm(opmap_0f::G_0F5C),
    /* 0F 5D */ Modrm(opmap_0f::G_0F5D),
    /* 0F 5E */ Modrm(opmap_0f::G_0F5E),
    /* 0F 5F */ Modrm(opmap_0f::G_0F5F),
    /* 0F 60 */ Modrm(opmap_0f::G_0F60),
    /* 0F 61 */ Modrm(opmap_0f::G_0F61),
    /* 0F 62 */ Modrm(opmap_0f::G_0F62),
    /* 0F 63 */ Modrm(opmap_0f::G_0F63),
    /* 0F 64 */ Modrm(opmap_0f::G_0F64),
    /* 0F 65 */ Modrm(opmap_0f::G_0F65),
    /* 0F 66 */ Modrm(opmap_0f::G_0F66),
    /* 0F 67 */ Modrm(opmap_0f::G_0F67),
    /* 0F 68 */ Modrm(opmap_0f::G_0F68),
    /* 0F 69 */ Modrm(opmap_0f::G_0F69),
    /* 0F 6A */ Modrm(opmap_0f::G_0F6A),
    /* 0F 6B */ Modrm(opmap_0f::G_0F6B),
    /* 0F 6C */ Modrm(opmap_0f::G_0F6C),
    /* 0F 6D */ Modrm(opmap_0f::G_0F6D),
    /* 0F 6E */ Modrm(opmap_0f::G_0F6E),
    /* 0F 6F */ Modrm(opmap_0f::G_0F6F),
    /* 0F 70 */ Modrm(opmap_0f::G_0F70),
    /* 0F 71 */ Modrm(opmap_0f::G_0F71),
    /* 0F 72 */ Modrm(opmap_0f::G_0F72),
    /* 0F 73 */ Modrm(opmap_0f::G_0F73),
    /* 0F 74 */ Modrm(opmap_0f::G_0F74),
    /* 0F 75 */ Modrm(opmap_0f::G_0F75),
    /* 0F 76 */ Modrm(opmap_0f::G_0F76),
    /* 0F 77 */ Plain(opmap_0f::G_0F77),
    /* 0F 78 */ Modrm(opmap_0f::G_0F78),
    /* 0F 79 */ Modrm(opmap_0f::G_0F79),
    /* 0F 7A */ Invalid,
    /* 0F 7B */ Invalid,
    /* 0F 7C */ Modrm(opmap_0f::G_0F7C),
    /* 0F 7D */ Modrm(opmap_0f::G_0F7D),
    /* 0F 7E */ Modrm(opmap_0f::G_0F7E),
    /* 0F 7F */ Modrm(opmap_0f::G_0F7F),
    /* 0F 80 */ Plain(opmap_0f::G_0F80_64),
    /* 0F 81 */ Plain(opmap_0f::G_0F81_64),
    /* 0F 82 */ Plain(opmap_0f::G_0F82_64),
    /* 0F 83 */ Plain(opmap_0f::G_0F83_64),
    /* 0F 84 */ Plain(opmap_0f::G_0F84_64),
    /* 0F 85 */ Plain(opmap_0f::G_0F85_64),
    /* 0F 86 */ Plain(opmap_0f::G_0F86_64),
    /* 0F 87 */ Plain(opmap_0f::G_0F87_64),
    /* 0F 88 */ Plain(opmap_0f::G_0F88_64),
    /* 0F 89 */ Plain(opmap_0f::G_0F89_64),
    /* 0F 8A */ Plain(opmap_0f::G_0F8A_64),
    /* 0F 8B */ Plain(opmap_0f::G_0F8B_64),
    /* 0F 8C */ Plain(opmap_0f::G_0F8C_64),
    /* 0F 8D */ Plain(opmap_0f::G_0F8D_64),
    /* 0F 8E */ Plain(opmap_0f::G_0F8E_64),
    /* 0F 8F */ Plain(opmap_0f::G_0F8F_64),
    /* 0F 90 */ Modrm(opmap_0f::G_0F90),
    /* 0F 91 */ Modrm(opmap_0f::G_0F91),
    /* 0F 92 */ Modrm(opmap_0f::G_0F92),
    /* 0F 93 */ Modrm(opmap_0f::G_0F93),
    /* 0F 94 */ Modrm(opmap_0f::G_0F94),
    /* 0F 95 */ Modrm(opmap_0f::G_0F95),
    /* 0F 96 */ Modrm(opmap_0f::G_0F96),
    /* 0F 97 */ Modrm(opmap_0f::G_0F97),
    /* 0F 98 */ Modrm(opmap_0f::G_0F98),
    /* 0F 99 */ Modrm(opmap_0f::G_0F99),
    /* 0F 9A */ Modrm(opmap_0f::G_0F9A),
    /* 0F 9B */ Modrm(opmap_0f::G_0F9B),
    /* 0F 9C */ Modrm(opmap_0f::G_0F9C),
    /* 0F 9D */ Modrm(opmap_0f::G_0F9D),
    /* 0F 9E */ Modrm(opmap_0f::G_0F9E),
    /* 0F 9F */ Modrm(opmap_0f::G_0F9F),
    /* 0F A0 */ Plain(opmap_0f::G_0FA0),
    /* 0F A1 */ Plain(opmap_0f::G_0FA1),
    /* 0F A2 */ Simple(opmap_0f::G_0FA2),
    /* 0F A3 */ Modrm(opmap_0f::G_0FA3),
    /* 0F A4 */ Modrm(opmap_0f::G_0FA4),
    /* 0F A5 */ Modrm(opmap_0f::G_0FA5),
    /* 0F A6 */ Invalid,
    /* 0F A7 */ Invalid,
    /* 0F A8 */ Plain(opmap_0f::G_0FA8),
    /* 0F A9 */ Plain(opmap_0f::G_0FA9),
    /* 0F AA */ Simple(opmap_0f::G_0FAA),
    /* 0F AB */ Modrm(opmap_0f::G_0FAB),
    /* 0F AC */ Modrm(opmap_0f::G_0FAC),
    /* 0F AD */ Modrm(opmap_0f::G_0FAD),
    /* 0F AE */ Modrm(opmap_0f::G_0FAE),
    /* 0F AF */ Modrm(opmap_0f::G_0FAF),
    /* 0F B0 */ Modrm(opmap_0f::G_0FB0),
    /* 0F B1 */ Modrm(opmap_0f::G_0FB1),
    /* 0F B2 */ Modrm(opmap_0f::G_0FB2),
    /* 0F B3 */ Modrm(opmap_0f::G_0FB3),
    /* 0F B4 */ Modrm(opmap_0f::G_0FB4),
    /* 0F B5 */ Modrm(opmap_0f::G_0FB5),
    /* 0F B6 */ Modrm(opmap_0f::G_0FB6),
    /* 0F B7 */ Modrm(opmap_0f::G_0FB7),
    /* 0F B8 */ Modrm(opmap_0f::G_0FB8),
    /* 0F B9 */ Modrm(opmap_0f::G_0FB9),
    /* 0F BA */ Modrm(opmap_0f::G_0FBA),
    /* 0F BB */ Modrm(opmap_0f::G_0FBB),
    /* 0F BC */ Modrm(opmap_0f::G_0FBC),
    /* 0F BD */ Modrm(opmap_0f::G_0FBD),
    /* 0F BE */ Modrm(opmap_0f::G_0FBE),
    /* 0F BF */ Modrm(opmap_0f::G_0FBF),
    /* 0F C0 */ Modrm(opmap_0f::G_0FC0),
    /* 0F C1 */ Modrm(opmap_0f::G_0FC1),
    /* 0F C2 */ Modrm(opmap_0f::G_0FC2),
    /* 0F C3 */ Modrm(opmap_0f::G_0FC3),
    /* 0F C4 */ Modrm(opmap_0f::G_0FC4),
    /* 0F C5 */ Modrm(opmap_0f::G_0FC5),
    /* 0F C6 */ Modrm(opmap_0f::G_0FC6),
    /* 0F C7 */ Modrm(opmap_0f::G_0FC7),
    /* 0F C8 */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F C9 */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F CA */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F CB */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F CC */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F CD */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F CE */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F CF */ Plain(opmap_0f::G_0FC8X0FCF),
    /* 0F D0 */ Modrm(opmap_0f::G_0FD0),
    /* 0F D1 */ Modrm(opmap_0f::G_0FD1),
    /* 0F D2 */ Modrm(opmap_0f::G_0FD2),
    /* 0F D3 */ Modrm(opmap_0f::G_0FD3),
    /* 0F D4 */ Modrm(opmap_0f::G_0FD4),
    /* 0F D5 */ Modrm(opmap_0f::G_0FD5),
    /* 0F D6 */ Modrm(opmap_0f::G_0FD6),
    /* 0F D7 */ Modrm(opmap_0f::G_0FD7),
    /* 0F D8 */ Modrm(opmap_0f::G_0FD8),
    /* 0F D9 */ Modrm(opmap_0f::G_0FD9),
    /* 0F DA */ Modrm(opmap_0f::G_0FDA),
    /* 0F DB */ Modrm(opmap_0f::G_0FDB),
    /* 0F DC */ Modrm(opmap_0f::G_0FDC),
    /* 0F DD */ Modrm(opmap_0f::G_0FDD),
    /* 0F DE */ Modrm(opmap_0f::G_0FDE),
    /* 0F DF */ Modrm(opmap_0f::G_0FDF),
    /* 0F E0 */ Modrm(opmap_0f::G_0FE0),
    /* 0F E1 */ Modrm(opmap_0f::G_0FE1),
    /* 0F E2 */ Modrm(opmap_0f::G_0FE2),
    /* 0F E3 */ Modrm(opmap_0f::G_0FE3),
    /* 0F E4 */ Modrm(opmap_0f::G_0FE4),
    /* 0F E5 */ Modrm(opmap_0f::G_0FE5),
    /* 0F E6 */ Modrm(opmap_0f::G_0FE6),
    /* 0F E7 */ Modrm(opmap_0f::G_0FE7),
    /* 0F E8 */ Modrm(opmap_0f::G_0FE8),
    /* 0F E9 */ Modrm(opmap_0f::G_0FE9),
    /* 0F EA */ Modrm(opmap_0f::G_0FEA),
    /* 0F EB */ Modrm(opmap_0f::G_0FEB),
    /* 0F EC */ Modrm(opmap_0f::G_0FEC),
    /* 0F ED */ Modrm(opmap_0f::G_0FED),
    /* 0F EE */ Modrm(opmap_0f::G_0FEE),
    /* 0F EF */ Modrm(opmap_0f::G_0FEF),
    /* 0F F0 */ Modrm(opmap_0f::G_0FF0),
    /* 0F F1 */ Modrm(opmap_0f::G_0FF1),
    /* 0F F2 */ Modrm(opmap_0f::G_0FF2),
    /* 0F F3 */ Modrm(opmap_0f::G_0FF3),
    /* 0F F4 */ Modrm(opmap_0f::G_0FF4),
    /* 0F F5 */ Modrm(opmap_0f::G_0FF5),
    /* 0F F6 */ Modrm(opmap_0f::G_0FF6),
    /* 0F F7 */ Modrm(opmap_0f::G_0FF7),
    /* 0F F8 */ Modrm(opmap_0f::G_0FF8),
    /* 0F F9 */ Modrm(opmap_0f::G_0FF9),
    /* 0F FA */ Modrm(opmap_0f::G_0FFA),
    /* 0F FB */ Modrm(opmap_0f::G_0FFB),
    /* 0F FC */ Modrm(opmap_0f::G_0FFC),
    /* 0F FD */ Modrm(opmap_0f::G_0FFD),
    /* 0F FE */ Modrm(opmap_0f::G_0FFE),
    /* 0F FF */ Simple(opmap_0f::G_0FFF),
    /* 0F 38 00 */ Modrm(opmap_0f38::G_0F3800),
    /* 0F 38 01 */ Modrm(opmap_0f38::G_0F3801),
    /* 0F 38 02 */ Modrm(opmap_0f38::G_0F3802),
    /* 0F 38 03 */ Modrm(opmap_0f38::G_0F3803),
    /* 0F 38 04 */ Modrm(opmap_0f38::G_0F3804),
    /* 0F 38 05 */ Modrm(opmap_0f38::G_0F3805),
    /* 0F 38 06 */ Modrm(opmap_0f38::G_0F3806),
    /* 0F 38 07 */ Modrm(opmap_0f38::G_0F3807),
    /* 0F 38 08 */ Modrm(opmap_0f38::G_0F3808),
    /* 0F 38 09 */ Modrm(opmap_0f38::G_0F3809),
    /* 0F 38 0A */ Modrm(opmap_0f38::G_0F380A),
    /* 0F 38 0B */ Modrm(opmap_0f38::G_0F380B),
    /* 0F 38 0C */ Invalid,
    /* 0F 38 0D */ Invalid,
    /* 0F 38 0E */ Invalid,
    /* 0F 38 0F */ Invalid,
    /* 0F 38 10 */ Modrm(opmap_0f38::G_0F3810),
    /* 0F 38 11 */ Invalid,
    /* 0F 38 12 */ Invalid,
    /* 0F 38 13 */ Invalid,
    /* 0F 38 14 */ Modrm(opmap_0f38::G_0F3814),
    /* 0F 38 15 */ Modrm(opmap_0f38::G_0F3815),
    /* 0F 38 16 */ Invalid,
    /* 0F 38 17 */ Modrm(opmap_0f38::G_0F3817),
    /* 0F 38 18 */ Invalid,
    /* 0F 38 19 */ Invalid,
    /* 0F 38 1A */ Invalid,
    /* 0F 38 1B */ Invalid,
    /* 0F 38 1C */ Modrm(opmap_0f38::G_0F381C),
    /* 0F 38 1D */ Modrm(opmap_0f38::G_0F381D),
    /* 0F 38 1E */ Modrm(opmap_0f38::G_0F381E),
    /* 0F 38 1F */ Invalid,
    /* 0F 38 20 */ Modrm(opmap_0f38::G_0F3820),
    /* 0F 38 21 */ Modrm(opmap_0f38::G_0F3821),
    /* 0F 38 22 */ Modrm(opmap_0f38::G_0F3822),
    /* 0F 38 23 */ Modrm(opmap_0f38::G_0F3823),
    /* 0F 38 24 */ Modrm(opmap_0f38::G_0F3824),
    /* 0F 38 25 */ Modrm(opmap_0f38::G_0F3825),
    /* 0F 38 26 */ Invalid,
    /* 0F 38 27 */ Invalid,
    /* 0F 38 28 */ Modrm(opmap_0f38::G_0F3828),
    /* 0F 38 29 */ Modrm(opmap_0f38::G_0F3829),
    /* 0F 38 2A */ Modrm(opmap_0f38::G_0F382A),
    /* 0F 38 2B */ Modrm(opmap_0f38::G_0F382B),
    /* 0F 38 2C */ Invalid,
    /* 0F 38 2D */ Invalid,
    /* 0F 38 2E */ Invalid,
    /* 0F 38 2F */ Invalid,
    /* 0F 38 30 */ Modrm(opmap_0f38::G_0F3830),
    /* 0F 38 31 */ Modrm(opmap_0f38::G_0F3831),
    /* 0F 38 32 */ Modrm(opmap_0f38::G_0F3832),
    /* 0F 38 33 */ Modrm(opmap_0f38::G_0F3833),
    /* 0F 38 34 */ Modrm(opmap_0f38::G_0F3834),
    /* 0F 38 35 */ Modrm(opmap_0f38::G_0F3835),
    /* 0F 38 36 */ Invalid,
    /* 0F 38 37 */ Modrm(opmap_0f38::G_0F3837),
    /* 0F 38 38 */ Modrm(opmap_0f38::G_0F3838),
    /* 0F 38 39 */ Modrm(opmap_0f38::G_0F3839),
    /* 0F 38 3A */ Modrm(opmap_0f38::G_0F383A),
    /* 0F 38 3B */ Modrm(opmap_0f38::G_0F383B),
    /* 0F 38 3C */ Modrm(opmap_0f38::G_0F383C),
    /* 0F 38 3D */ Modrm(opmap_0f38::G_0F383D),
    /* 0F 38 3E */ Modrm(opmap_0f38::G_0F383E),
    /* 0F 38 3F */ Modrm(opmap_0f38::G_0F383F),
    /* 0F 38 40 */ Modrm(opmap_0f38::G_0F3840),
    /* 0F 38 41 */ Modrm(opmap_0f38::G_0F3841),
    /* 0F 38 42 */ Invalid,
    /* 0F 38 43 */ Invalid,
    /* 0F 38 44 */ Invalid,
    /* 0F 38 45 */ Invalid,
    /* 0F 38 46 */ Invalid,
    /* 0F 38 47 */ Invalid,
    /* 0F 38 48 */ Invalid,
    /* 0F 38 49 */ Invalid,
    /* 0F 38 4A */ Invalid,
    /* 0F 38 4B */ Invalid,
    /* 0F 38 4C */ Invalid,
    /* 0F 38 4D */ Invalid,
    /* 0F 38 4E */ Invalid,
    /* 0F 38 4F */ Invalid,
    /* 0F 38 50 */ Invalid,
    /* 0F 38 51 */ Invalid,
    /* 0F 38 52 */ Invalid,
    /* 0F 38 53 */ Invalid,
    /* 0F 38 54 */ Invalid,
    /* 0F 38 55 */ Invalid,
    /* 0F 38 56 */ Invalid,
    /* 0F 38 57 */ Invalid,
    /* 0F 38 58 */ Invalid,
    /* 0F 38 59 */ Invalid,
    /* 0F 38 5A */ Invalid,
    /* 0F 38 5B */ Invalid,
    /* 0F 38 5C */ Invalid,
    /* 0F 38 5D */ Invalid,
    /* 0F 38 5E */ Invalid,
    /* 0F 38 5F */ Invalid,
    /* 0F 38 60 */ Invalid,
    /* 0F 38 61 */ Invalid,
    /* 0F 38 62 */ Invalid,
    /* 0F 38 63 */ Invalid,
    /* 0F 38 64 */ Invalid,
    /* 0F 38 65 */ Invalid,
    /* 0F 38 66 */ Invalid,
    /* 0F 38 67 */ Invalid,
    /* 0F 38 68 */ Invalid,
    /* 0F 38 69 */ Invalid,
    /* 0F 38 6A */ Invalid,
    /* 0F 38 6B */ Invalid,
    /* 0F 38 6C */ Invalid,
    /* 0F 38 6D */ Invalid,
    /* 0F 38 6E */ Invalid,
    /* 0F 38 6F */ Invalid,
    /* 0F 38 70 */ Invalid,
    /* 0F 38 71 */ Invalid,
    /* 0F 38 72 */ Invalid,
    /* 0F 38 73 */ Invalid,
    /* 0F 38 74 */ Invalid,
    /* 0F 38 75 */ Invalid,
    /* 0F 38 76 */ Invalid,
    /* 0F 38 77 */ Invalid,
    /* 0F 38 78 */ Invalid,
    /* 0F 38 79 */ Invalid,
    /* 0F 38 7A */ Invalid,
    /* 0F 38 7B */ Invalid,
    /* 0F 38 7C */ Invalid,
    /* 0F 38 7D */ Invalid,
    /* 0F 38 7E */ Invalid,
    /* 0F 38 7F */ Invalid,
    /* 0F 38 80 */ Modrm(opmap_0f38::G_0F3880),
    /* 0F 38 81 */ Modrm(opmap_0f38::G_0F3881),
    /* 0F 38 82 */ Modrm(opmap_0f38::G_0F3882),
    /* 0F 38 83 */ Invalid,
    /* 0F 38 84 */ Invalid,
    /* 0F 38 85 */ Invalid,
    /* 0F 38 86 */ Invalid,
    /* 0F 38 87 */ Invalid,
    /* 0F 38 88 */ Invalid,
    /* 0F 38 89 */ Invalid,
    /* 0F 38 8A */ Invalid,
    /* 0F 38 8B */ Invalid,
    /* 0F 38 8C */ Invalid,
    /* 0F 38 8D */ Invalid,
    /* 0F 38 8E */ Invalid,
    /* 0F 38 8F */ Invalid,
    /* 0F 38 90 */ Invalid,
    /* 0F 38 91 */ Invalid,
    /* 0F 38 92 */ Invalid,
    /* 0F 38 93 */ Invalid,
    /* 0F 38 94 */ Invalid,
    /* 0F 38 95 */ Invalid,
    /* 0F 38 96 */ Invalid,
    /* 0F 38 97 */ Invalid,
    /* 0F 38 98 */ Invalid,
    /* 0F 38 99 */ Invalid,
    /* 0F 38 9A */ Invalid,
    /* 0F 38 9B */ Invalid,
    /* 0F 38 9C */ Invalid,
    /* 0F 38 9D */ Invalid,
    /* 0F 38 9E */ Invalid,
    /* 0F 38 9F */ Invalid,
    /* 0F 38 A0 */ Invalid,
    /* 0F 38 A1 */ Invalid,
    /* 0F 38 A2 */ Invalid,
    /* 0F 38 A3 */ Invalid,
    /* 0F 38 A4 */ Invalid,
    /* 0F 38 A5 */ Invalid,
    /* 0F 38 A6 */ Invalid,
    /* 0F 38 A7 */ Invalid,
    /* 0F 38 A8 */ Invalid,
    /* 0F 38 A9 */ Invalid,
    /* 0F 38 AA */ Invalid,
    /* 0F 38 AB */ Invalid,
    /* 0F 38 AC */ Invalid,
    /* 0F 38 AD */ Invalid,
    /* 0F 38 AE */ Invalid,
    /* 0F 38 AF */ Invalid,
    /* 0F 38 B0 */ Invalid,
    /* 0F 38 B1 */ Invalid,
    /* 0F 38 B2 */ Invalid,
    /* 0F 38 B3 */ Invalid,
    /* 0F 38 B4 */ Invalid,
    /* 0F 38 B5 */ Invalid,
    /* 0F 38 B6 */ Invalid,
    /* 0F 38 B7 */ Invalid,
    /* 0F 38 B8 */ Invalid,
    /* 0F 38 B9 */ Invalid,
    /* 0F 38 BA */ Invalid,
    /* 0F 38 BB */ Invalid,
    /* 0F 38 BC */ Invalid,
    /* 0F 38 BD */ Invalid,
    /* 0F 38 BE */ Invalid,
    /* 0F 38 BF */ Invalid,
    /* 0F 38 C0 */ Invalid,
    /* 0F 38 C1 */ Invalid,
    /* 0F 38 C2 */ Invalid,
    /* 0F 38 C3 */ Invalid,
    /* 0F 38 C4 */ Invalid,
    /* 0F 38 C5 */ Invalid,
    /* 0F 38 C6 */ Invalid,
    /* 0F 38 C7 */ Invalid,
    /* 0F 38 C8 */ Modrm(opmap_0f38::G_0F38C8),
    /* 0F 38 C9 */ Modrm(opmap_0f38::G_0F38C9),
    /* 0F 38 CA */ Modrm(opmap_0f38::G_0F38CA),
    /* 0F 38 CB */ Modrm(opmap_0f38::G_0F38CB),
    /* 0F 38 CC */ Modrm(opmap_0f38::G_0F38CC),
    /* 0F 38 CD */ Modrm(opmap_0f38::G_0F38CD),
    /* 0F 38 CE */ Invalid,
    /* 0F 38 CF */ Modrm(opmap_0f38::G_0F38CF),
    /* 0F 38 D0 */ Invalid,
    /* 0F 38 D1 */ Invalid,
    /* 0F 38 D2 */ Invalid,
    /* 0F 38 D3 */ Invalid,
    /* 0F 38 D4 */ Invalid,
    /* 0F 38 D5 */ Invalid,
    /* 0F 38 D6 */ Invalid,
    /* 0F 38 D7 */ Invalid,
    /* 0F 38 D8 */ Invalid,
    /* 0F 38 D9 */ Invalid,
    /* 0F 38 DA */ Invalid,
    /* 0F 38 DB */ Modrm(opmap_0f38::G_0F38DB),
    /* 0F 38 DC */ Modrm(opmap_0f38::G_0F38DC),
    /* 0F 38 DD */ Modrm(opmap_0f38::G_0F38DD),
    /* 0F 38 DE */ Modrm(opmap_0f38::G_0F38DE),
    /* 0F 38 DF */ Modrm(opmap_0f38::G_0F38DF),
    /* 0F 38 E0 */ Invalid,
    /* 0F 38 E1 */ Invalid,
    /* 0F 38 E2 */ Invalid,
    /* 0F 38 E3 */ Invalid,
    /* 0F 38 E4 */ Invalid,
    /* 0F 38 E5 */ Invalid,
    /* 0F 38 E6 */ Invalid,
    /* 0F 38 E7 */ Invalid,
    /* 0F 38 E8 */ Invalid,
    /* 0F 38 E9 */ Invalid,
    /* 0F 38 EA */ Invalid,
    /* 0F 38 EB */ Invalid,
    /* 0F 38 EC */ Invalid,
    /* 0F 38 ED */ Invalid,
    /* 0F 38 EE */ Invalid,
    /* 0F 38 EF */ Invalid,
    /* 0F 38 F0 */ Modrm(opmap_0f38::G_0F38F0),
    /* 0F 38 F1 */ Modrm(opmap_0f38::G_0F38F1),
    /* 0F 38 F2 */ Invalid,
    /* 0F 38 F3 */ Invalid,
    /* 0F 38 F4 */ Invalid,
    /* 0F 38 F5 */ Modrm(opmap_0f38::G_0F38F5),
    /* 0F 38 F6 */ Modrm(opmap_0f38::G_0F38F6),
    /* 0F 38 F7 */ Invalid,
    /* 0F 38 F8 */ Invalid,
    /* 0F 38 F9 */ Modrm(opmap_0f38::G_0F38F6),
    /* 0F 38 FA */ Invalid,
    /* 0F 38 FB */ Invalid,
    /* 0F 38 FC */ Invalid,
    /* 0F 38 FD */ Invalid,
    /* 0F 38 FE */ Invalid,
    /* 0F 38 FF */ Invalid,
    /* 0F 38 00 */ Invalid,
    /* 0F 3A 01 */ Invalid,
    /* 0F 3A 02 */ Invalid,
    /* 0F 3A 03 */ Invalid,
    /* 0F 3A 04 */ Invalid,
    /* 0F 3A 05 */ Invalid,
    /* 0F 3A 06 */ Invalid,
    /* 0F 3A 07 */ Invalid,
    /* 0F 3A 08 */ Modrm(opmap_0f3a::G_0F3A08),
    /* 0F 3A 09 */ Modrm(opmap_0f3a::G_0F3A09),
    /* 0F 3A 0A */ Modrm(opmap_0f3a::G_0F3A0A),
    /* 0F 3A 0B */ Modrm(opmap_0f3a::G_0F3A0B),
    /* 0F 3A 0C */ Modrm(opmap_0f3a::G_0F3A0C),
    /* 0F 3A 0D */ Modrm(opmap_0f3a::G_0F3A0D),
    /* 0F 3A 0E */ Modrm(opmap_0f3a::G_0F3A0E),
    /* 0F 3A 0F */ Modrm(opmap_0f3a::G_0F3A0F),
    /* 0F 3A 10 */ Invalid,
    /* 0F 3A 11 */ Invalid,
    /* 0F 3A 12 */ Invalid,
    /* 0F 3A 13 */ Invalid,
    /* 0F 3A 14 */ Modrm(opmap_0f3a::G_0F3A14),
    /* 0F 3A 15 */ Modrm(opmap_0f3a::G_0F3A15),
    /* 0F 3A 16 */ Modrm(opmap_0f3a::G_0F3A16),
    /* 0F 3A 17 */ Modrm(opmap_0f3a::G_0F3A17),
    /* 0F 3A 18 */ Invalid,
    /* 0F 3A 19 */ Invalid,
    /* 0F 3A 1A */ Invalid,
    /* 0F 3A 1B */ Invalid,
    /* 0F 3A 1C */ Invalid,
    /* 0F 3A 1D */ Invalid,
    /* 0F 3A 1E */ Invalid,
    /* 0F 3A 1F */ Invalid,
    /* 0F 3A 20 */ Modrm(opmap_0f3a::G_0F3A20),
    /* 0F 3A 21 */ Modrm(opmap_0f3a::G_0F3A21),
    /* 0F 3A 22 */ Modrm(opmap_0f3a::G_0F3A22),
    /* 0F 3A 23 */ Invalid,
    /* 0F 3A 24 */ Invalid,
    /* 0F 3A 25 */ Invalid,
    /* 0F 3A 26 */ Invalid,
    /* 0F 3A 27 */ Invalid,
    /* 0F 3A 28 */ Invalid,
    /* 0F 3A 29 */ Invalid,
    /* 0F 3A 2A */ Invalid,
    /* 0F 3A 2B */ Invalid,
    /* 0F 3A 2C */ Invalid,
    /* 0F 3A 2D */ Invalid,
    /* 0F 3A 2E */ Invalid,
    /* 0F 3A 2F */ Invalid,
    /* 0F 3A 30 */ Invalid,
    /* 0F 3A 31 */ Invalid,
    /* 0F 3A 32 */ Invalid,
    /* 0F 3A 33 */ Invalid,
    /* 0F 3A 34 */ Invalid,
    /* 0F 3A 35 */ Invalid,
    /* 0F 3A 36 */ Invalid,
    /* 0F 3A 37 */ Invalid,
    /* 0F 3A 38 */ Invalid,
    /* 0F 3A 39 */ Invalid,
    /* 0F 3A 3A */ Invalid,
    /* 0F 3A 3B */ Invalid,
    /* 0F 3A 3C */ Invalid,
    /* 0F 3A 3D */ Invalid,
    /* 0F 3A 3E */ Invalid,
    /* 0F 3A 3F */ Invalid,
    /* 0F 3A 40 */ Modrm(opmap_0f3a::G_0F3A40),
    /* 0F 3A 41 */ Modrm(opmap_0f3a::G_0F3A41),
    /* 0F 3A 42 */ Modrm(opmap_0f3a::G_0F3A42),
    /* 0F 3A 43 */ Invalid,
    /* 0F 3A 44 */ Modrm(opmap_0f3a::G_0F3A44),
    /* 0F 3A 45 */ Invalid,
    /* 0F 3A 46 */ Invalid,
    /* 0F 3A 47 */ Invalid,
    /* 0F 3A 48 */ Invalid,
    /* 0F 3A 49 */ Invalid,
    /* 0F 3A 4A */ Invalid,
    /* 0F 3A 4B */ Invalid,
    /* 0F 3A 4C */ Invalid,
    /* 0F 3A 4D */ Invalid,
    /* 0F 3A 4E */ Invalid,
    /* 0F 3A 4F */ Invalid,
    /* 0F 3A 50 */ Invalid,
    /* 0F 3A 51 */ Invalid,
    /* 0F 3A 52 */ Invalid,
    /* 0F 3A 53 */ Invalid,
    /* 0F 3A 54 */ Invalid,
    /* 0F 3A 55 */ Invalid,
    /* 0F 3A 56 */ Invalid,
    /* 0F 3A 57 */ Invalid,
    /* 0F 3A 58 */ Invalid,
    /* 0F 3A 59 */ Invalid,
    /* 0F 3A 5A */ Invalid,
    /* 0F 3A 5B */ Invalid,
    /* 0F 3A 5C */ Invalid,
    /* 0F 3A 5D */ Invalid,
    /* 0F 3A 5E */ Invalid,
    /* 0F 3A 5F */ Invalid,
    /* 0F 3A 60 */ Modrm(opmap_0f3a::G_0F3A60),
    /* 0F 3A 61 */ Modrm(opmap_0f3a::G_0F3A61),
    /* 0F 3A 62 */ Modrm(opmap_0f3a::G_0F3A62),
    /* 0F 3A 64 */ Modrm(opmap_0f3a::G_0F3A63),
    /* 0F 3A 64 */ Invalid,
    /* 0F 3A 65 */ Invalid,
    /* 0F 3A 66 */ Invalid,
    /* 0F 3A 67 */ Invalid,
    /* 0F 3A 68 */ Invalid,
    /* 0F 3A 69 */ Invalid,
    /* 0F 3A 6A */ Invalid,
    /* 0F 3A 6B */ Invalid,
    /* 0F 3A 6C */ Invalid,
    /* 0F 3A 6D */ Invalid,
    /* 0F 3A 6E */ Invalid,
    /* 0F 3A 6F */ Invalid,
    /* 0F 3A 70 */ Invalid,
    /* 0F 3A 71 */ Invalid,
    /* 0F 3A 72 */ Invalid,
    /* 0F 3A 73 */ Invalid,
    /* 0F 3A 74 */ Invalid,
    /* 0F 3A 75 */ Invalid,
    /* 0F 3A 76 */ Invalid,
    /* 0F 3A 77 */ Invalid,
    /* 0F 3A 78 */ Invalid,
    /* 0F 3A 79 */ Invalid,
    /* 0F 3A 7A */ Invalid,
    /* 0F 3A 7B */ Invalid,
    /* 0F 3A 7C */ Invalid,
    /* 0F 3A 7D */ Invalid,
    /* 0F 3A 7E */ Invalid,
    /* 0F 3A 7F */ Invalid,
    /* 0F 3A 80 */ Invalid,
    /* 0F 3A 81 */ Invalid,
    /* 0F 3A 82 */ Invalid,
    /* 0F 3A 83 */ Invalid,
    /* 0F 3A 84 */ Invalid,
    /* 0F 3A 85 */ Invalid,
    /* 0F 3A 86 */ Invalid,
    /* 0F 3A 87 */ Invalid,
    /* 0F 3A 88 */ Invalid,
    /* 0F 3A 89 */ Invalid,
    /* 0F 3A 8A */ Invalid,
    /* 0F 3A 8B */ Invalid,
    /* 0F 3A 8C */ Invalid,
    /* 0F 3A 8D */ Invalid,
    /* 0F 3A 8E */ Invalid,
    /* 0F 3A 8F */ Invalid,
    /* 0F 3A 90 */ Invalid,
    /* 0F 3A 91 */ Invalid,
    /* 0F 3A 92 */ Invalid,
    /* 0F 3A 93 */ Invalid,
    /* 0F 3A 94 */ Invalid,
    /* 0F 3A 95 */ Invalid,
    /* 0F 3A 96 */ Invalid,
    /* 0F 3A 97 */ Invalid,
    /* 0F 3A 98 */ Invalid,
    /* 0F 3A 99 */ Invalid,
    /* 0F 3A 9A */ Invalid,
    /* 0F 3A 9B */ Invalid,
    /* 0F 3A 9C */ Invalid,
    /* 0F 3A 9D */ Invalid,
    /* 0F 3A 9E */ Invalid,
    /* 0F 3A 9F */ Invalid,
    /* 0F 3A A0 */ Invalid,
    /* 0F 3A A1 */ Invalid,
    /* 0F 3A A2 */ Invalid,
    /* 0F 3A A3 */ Invalid,
    /* 0F 3A A4 */ Invalid,
    /* 0F 3A A5 */ Invalid,
    /* 0F 3A A6 */ Invalid,
    /* 0F 3A A7 */ Invalid,
    /* 0F 3A A8 */ Invalid,
    /* 0F 3A A9 */ Invalid,
    /* 0F 3A AA */ Invalid,
    /* 0F 3A AB */ Invalid,
    /* 0F 3A AC */ Invalid,
    /* 0F 3A AD */ Invalid,
    /* 0F 3A AE */ Invalid,
    /* 0F 3A AF */ Invalid,
    /* 0F 3A B0 */ Invalid,
    /* 0F 3A B1 */ Invalid,
    /* 0F 3A B2 */ Invalid,
    /* 0F 3A B3 */ Invalid,
    /* 0F 3A B4 */ Invalid,
    /* 0F 3A B5 */ Invalid,
    /* 0F 3A B6 */ Invalid,
    /* 0F 3A B7 */ Invalid,
    /* 0F 3A B8 */ Invalid,
    /* 0F 3A B9 */ Invalid,
    /* 0F 3A BA */ Invalid,
    /* 0F 3A BB */ Invalid,
    /* 0F 3A BC */ Invalid,
    /* 0F 3A BD */ Invalid,
    /* 0F 3A BE */ Invalid,
    /* 0F 3A BF */ Invalid,
    /* 0F 3A C0 */ Invalid,
    /* 0F 3A C1 */ Invalid,
    /* 0F 3A C2 */ Invalid,
    /* 0F 3A C3 */ Invalid,
    /* 0F 3A C4 */ Invalid,
    /* 0F 3A C5 */ Invalid,
    /* 0F 3A C6 */ Invalid,
    /* 0F 3A C7 */ Invalid,
    /* 0F 3A C8 */ Invalid,
    /* 0F 3A C9 */ Invalid,
    /* 0F 3A CA */ Invalid,
    /* 0F 3A CB */ Invalid,
    /* 0F 3A CC */ Modrm(opmap_0f3a::G_0F3ACC),
    /* 0F 3A CD */ Invalid,
    /* 0F 3A CE */ Modrm(opmap_0f3a::G_0F3ACE),
    /* 0F 3A CF */ Modrm(opmap_0f3a::G_0F3ACF),
    /* 0F 3A D0 */ Invalid,
    /* 0F 3A D1 */ Invalid,
    /* 0F 3A D2 */ Invalid,
    /* 0F 3A D3 */ Invalid,
    /* 0F 3A D4 */ Invalid,
    /* 0F 3A D5 */ Invalid,
    /* 0F 3A D6 */ Invalid,
    /* 0F 3A D7 */ Invalid,
    /* 0F 3A D8 */ Invalid,
    /* 0F 3A D9 */ Invalid,
    /* 0F 3A DA */ Invalid,
    /* 0F 3A DB */ Invalid,
    /* 0F 3A DC */ Invalid,
    /* 0F 3A DD */ Invalid,
    /* 0F 3A DE */ Invalid,
    /* 0F 3A DF */ Modrm(opmap_0f3a::G_0F3ADF),
    /* 0F 3A E0 */ Invalid,
    /* 0F 3A E1 */ Invalid,
    /* 0F 3A E2 */ Invalid,
    /* 0F 3A E3 */ Invalid,
    /* 0F 3A E4 */ Invalid,
    /* 0F 3A E5 */ Invalid,
    /* 0F 3A E6 */ Invalid,
    /* 0F 3A E7 */ Invalid,
    /* 0F 3A E8 */ Invalid,
    /* 0F 3A E9 */ Invalid,
    /* 0F 3A EA */ Invalid,
    /* 0F 3A EB */ Invalid,
    /* 0F 3A EC */ Invalid,
    /* 0F 3A ED */ Invalid,
    /* 0F 3A EE */ Invalid,
    /* 0F 3A EF */ Invalid,
    /* 0F 3A F0 */ Invalid,
    /* 0F 3A F1 */ Invalid,
    /* 0F 3A F2 */ Invalid,
    /* 0F 3A F3 */ Invalid,
    /* 0F 3A F4 */ Invalid,
    /* 0F 3A F5 */ Invalid,
    /* 0F 3A F6 */ Invalid,
    /* 0F 3A F7 */ Invalid,
    /* 0F 3A F8 */ Invalid,
    /* 0F 3A F9 */ Invalid,
    /* 0F 3A FA */ Invalid,
    /* 0F 3A FB */ Invalid,
    /* 0F 3A FC */ Invalid,
    /* 0F 3A FD */ Invalid,
    /* 0F 3A FE */ Invalid,
    /* 0F 3A FF */ Invalid,
];
