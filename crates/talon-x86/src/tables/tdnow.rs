//! 3DNow! selector: opcode 0F 0F picks the operation from the immediate
//! byte that trails the modrm/displacement fields.

use crate::ids::IaOpcode::{self, *};

pub(crate) static TDNOW: [IaOpcode; 256] = build();

const fn build() -> [IaOpcode; 256] {
    let mut t = [Error; 256];
    t[0x0C] = Pi2fw_PqQq;
    t[0x0D] = Pi2fd_PqQq;
    t[0x1C] = Pf2iw_PqQq;
    t[0x1D] = Pf2id_PqQq;
    t[0x8A] = Pfnacc_PqQq;
    t[0x8E] = Pfpnacc_PqQq;
    t[0x90] = Pfcmpge_PqQq;
    t[0x94] = Pfmin_PqQq;
    t[0x96] = Pfrcp_PqQq;
    t[0x97] = Pfrsqrt_PqQq;
    t[0x9A] = Pfsub_PqQq;
    t[0x9E] = Pfadd_PqQq;
    t[0xA0] = Pfcmpgt_PqQq;
    t[0xA4] = Pfmax_PqQq;
    t[0xA6] = Pfrcpit1_PqQq;
    t[0xA7] = Pfrsqit1_PqQq;
    t[0xAA] = Pfsubr_PqQq;
    t[0xAE] = Pfacc_PqQq;
    t[0xB0] = Pfcmpeq_PqQq;
    t[0xB4] = Pfmul_PqQq;
    t[0xB6] = Pfrcpit2_PqQq;
    t[0xB7] = Pmulhrw_PqQq;
    t[0xBB] = Pswapd_PqQq;
    t[0xBF] = Pavgusb_PqQq;
    t
}
