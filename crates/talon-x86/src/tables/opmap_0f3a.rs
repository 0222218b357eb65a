//! Descriptor groups for the 0F 3A opcode map.

use crate::ids::IaOpcode;
use crate::matcher::*;

// opcode 0F 3A 08
pub(crate) static G_0F3A08: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Roundps_VpsWpsIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 09
pub(crate) static G_0F3A09: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Roundpd_VpdWpdIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 0A
pub(crate) static G_0F3A0A: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Roundss_VssWssIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 0B
pub(crate) static G_0F3A0B: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Roundsd_VsdWsdIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 0C
pub(crate) static G_0F3A0C: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Blendps_VpsWpsIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 0D
pub(crate) static G_0F3A0D: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Blendpd_VpdWpdIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 0E
pub(crate) static G_0F3A0E: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pblendw_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 0F
pub(crate) static G_0F3A0F: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Palignr_PqQqIb),
    op(SSE_66, IaOpcode::Palignr_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 14
pub(crate) static G_0F3A14: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pextrb_EbdVdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 15
pub(crate) static G_0F3A15: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pextrw_EwdVdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 16
pub(crate) static G_0F3A16: OpcodeGroup = &[
    op(SSE_66.and(OS64), IaOpcode::Pextrq_EqVdqIb),
    op(SSE_66, IaOpcode::Pextrd_EdVdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 17
pub(crate) static G_0F3A17: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Extractps_EdVpsIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 20
pub(crate) static G_0F3A20: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pinsrb_VdqEbIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 21
pub(crate) static G_0F3A21: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Insertps_VpsWssIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 22
pub(crate) static G_0F3A22: OpcodeGroup = &[
    op(SSE_66.and(OS64), IaOpcode::Pinsrq_VdqEqIb),
    op(SSE_66, IaOpcode::Pinsrd_VdqEdIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 40
pub(crate) static G_0F3A40: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Dpps_VpsWpsIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 41
pub(crate) static G_0F3A41: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Dppd_VpdWpdIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 42
pub(crate) static G_0F3A42: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Mpsadbw_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 44
pub(crate) static G_0F3A44: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pclmulqdq_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 60
pub(crate) static G_0F3A60: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pcmpestrm_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 61
pub(crate) static G_0F3A61: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pcmpestri_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 62
pub(crate) static G_0F3A62: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pcmpistrm_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A 64
pub(crate) static G_0F3A63: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Pcmpistri_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A CC
pub(crate) static G_0F3ACC: OpcodeGroup = &[
    op(SSE_NONE, IaOpcode::Sha1rnds4_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A CE
pub(crate) static G_0F3ACE: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Gf2p8affineqb_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A CF
pub(crate) static G_0F3ACF: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Gf2p8affineinvqb_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];

// opcode 0F 3A DF
pub(crate) static G_0F3ADF: OpcodeGroup = &[
    op(SSE_66, IaOpcode::Aeskeygenassist_VdqWdqIb),
    last(ANY, IaOpcode::Error),
];
