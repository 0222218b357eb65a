//! FP escape tables for opcodes D8 through DF.
//!
//! Each escape byte owns 72 slots: the first eight pick the memory form by
//! the modrm reg field, the remaining 64 pick the register form by
//! `modrm & 0x3f`. Undefined slots hold `Error`.

use crate::ids::IaOpcode::{self, *};

pub(crate) type X87Table = [IaOpcode; 72];

pub(crate) static D8: X87Table = [
    // memory forms /0../7
    Fadd_SingleReal, Fmul_SingleReal, Fcom_SingleReal, Fcomp_SingleReal, Fsub_SingleReal,
    Fsubr_SingleReal, Fdiv_SingleReal, Fdivr_SingleReal,
    // d8 c0..c7
    Fadd_St0Stj, Fadd_St0Stj, Fadd_St0Stj, Fadd_St0Stj, Fadd_St0Stj, Fadd_St0Stj, Fadd_St0Stj,
    Fadd_St0Stj,
    // d8 c8..cf
    Fmul_St0Stj, Fmul_St0Stj, Fmul_St0Stj, Fmul_St0Stj, Fmul_St0Stj, Fmul_St0Stj, Fmul_St0Stj,
    Fmul_St0Stj,
    // d8 d0..d7
    Fcom_Stj, Fcom_Stj, Fcom_Stj, Fcom_Stj, Fcom_Stj, Fcom_Stj, Fcom_Stj, Fcom_Stj,
    // d8 d8..df
    Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj,
    // d8 e0..e7
    Fsub_St0Stj, Fsub_St0Stj, Fsub_St0Stj, Fsub_St0Stj, Fsub_St0Stj, Fsub_St0Stj, Fsub_St0Stj,
    Fsub_St0Stj,
    // d8 e8..ef
    Fsubr_St0Stj, Fsubr_St0Stj, Fsubr_St0Stj, Fsubr_St0Stj, Fsubr_St0Stj, Fsubr_St0Stj,
    Fsubr_St0Stj, Fsubr_St0Stj,
    // d8 f0..f7
    Fdiv_St0Stj, Fdiv_St0Stj, Fdiv_St0Stj, Fdiv_St0Stj, Fdiv_St0Stj, Fdiv_St0Stj, Fdiv_St0Stj,
    Fdiv_St0Stj,
    // d8 f8..ff
    Fdivr_St0Stj, Fdivr_St0Stj, Fdivr_St0Stj, Fdivr_St0Stj, Fdivr_St0Stj, Fdivr_St0Stj,
    Fdivr_St0Stj, Fdivr_St0Stj,
];

pub(crate) static D9: X87Table = [
    // memory forms /0../7
    Fld_SingleReal, Error, Fst_SingleReal, Fstp_SingleReal, Fldenv, Fldcw, Fnstenv, Fnstcw,
    // d9 c0..c7
    Fld_Sti, Fld_Sti, Fld_Sti, Fld_Sti, Fld_Sti, Fld_Sti, Fld_Sti, Fld_Sti,
    // d9 c8..cf
    Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti,
    // d9 d0..d7
    Fnop, Error, Error, Error, Error, Error, Error, Error,
    // d9 d8..df (undocumented fstp alias)
    Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti,
    // d9 e0..e7
    Fchs, Fabs, Error, Error, Ftst, Fxam, Error, Error,
    // d9 e8..ef
    Fld1, Fldl2t, Fldl2e, Fldpi, Fldlg2, Fldln2, Fldz, Error,
    // d9 f0..f7
    F2xm1, Fyl2x, Fptan, Fpatan, Fxtract, Fprem1, Fdecstp, Fincstp,
    // d9 f8..ff
    Fprem, Fyl2xp1, Fsqrt, Fsincos, Frndint, Fscale, Fsin, Fcos,
];

pub(crate) static DA: X87Table = [
    // memory forms /0../7
    Fiadd_DwordInteger, Fimul_DwordInteger, Ficom_DwordInteger, Ficomp_DwordInteger,
    Fisub_DwordInteger, Fisubr_DwordInteger, Fidiv_DwordInteger, Fidivr_DwordInteger,
    // da c0..c7
    Fcmovb_St0Stj, Fcmovb_St0Stj, Fcmovb_St0Stj, Fcmovb_St0Stj, Fcmovb_St0Stj, Fcmovb_St0Stj,
    Fcmovb_St0Stj, Fcmovb_St0Stj,
    // da c8..cf
    Fcmove_St0Stj, Fcmove_St0Stj, Fcmove_St0Stj, Fcmove_St0Stj, Fcmove_St0Stj, Fcmove_St0Stj,
    Fcmove_St0Stj, Fcmove_St0Stj,
    // da d0..d7
    Fcmovbe_St0Stj, Fcmovbe_St0Stj, Fcmovbe_St0Stj, Fcmovbe_St0Stj, Fcmovbe_St0Stj,
    Fcmovbe_St0Stj, Fcmovbe_St0Stj, Fcmovbe_St0Stj,
    // da d8..df
    Fcmovu_St0Stj, Fcmovu_St0Stj, Fcmovu_St0Stj, Fcmovu_St0Stj, Fcmovu_St0Stj, Fcmovu_St0Stj,
    Fcmovu_St0Stj, Fcmovu_St0Stj,
    // da e0..e7
    Error, Error, Error, Error, Error, Error, Error, Error,
    // da e8..ef
    Error, Fucompp, Error, Error, Error, Error, Error, Error,
    // da f0..f7
    Error, Error, Error, Error, Error, Error, Error, Error,
    // da f8..ff
    Error, Error, Error, Error, Error, Error, Error, Error,
];

pub(crate) static DB: X87Table = [
    // memory forms /0../7
    Fild_DwordInteger, Fisttp_DwordInteger, Fist_DwordInteger, Fistp_DwordInteger, Error,
    Fld_ExtendedReal, Error, Fstp_ExtendedReal,
    // db c0..c7
    Fcmovnb_St0Stj, Fcmovnb_St0Stj, Fcmovnb_St0Stj, Fcmovnb_St0Stj, Fcmovnb_St0Stj,
    Fcmovnb_St0Stj, Fcmovnb_St0Stj, Fcmovnb_St0Stj,
    // db c8..cf
    Fcmovne_St0Stj, Fcmovne_St0Stj, Fcmovne_St0Stj, Fcmovne_St0Stj, Fcmovne_St0Stj,
    Fcmovne_St0Stj, Fcmovne_St0Stj, Fcmovne_St0Stj,
    // db d0..d7
    Fcmovnbe_St0Stj, Fcmovnbe_St0Stj, Fcmovnbe_St0Stj, Fcmovnbe_St0Stj, Fcmovnbe_St0Stj,
    Fcmovnbe_St0Stj, Fcmovnbe_St0Stj, Fcmovnbe_St0Stj,
    // db d8..df
    Fcmovnu_St0Stj, Fcmovnu_St0Stj, Fcmovnu_St0Stj, Fcmovnu_St0Stj, Fcmovnu_St0Stj,
    Fcmovnu_St0Stj, Fcmovnu_St0Stj, Fcmovnu_St0Stj,
    // db e0..e7 (feni, fdisi and fsetpm execute as no-ops past the 287)
    Fplegacy, Fplegacy, Fnclex, Fninit, Fplegacy, Error, Error, Error,
    // db e8..ef
    Fucomi_St0Stj, Fucomi_St0Stj, Fucomi_St0Stj, Fucomi_St0Stj, Fucomi_St0Stj, Fucomi_St0Stj,
    Fucomi_St0Stj, Fucomi_St0Stj,
    // db f0..f7
    Fcomi_St0Stj, Fcomi_St0Stj, Fcomi_St0Stj, Fcomi_St0Stj, Fcomi_St0Stj, Fcomi_St0Stj,
    Fcomi_St0Stj, Fcomi_St0Stj,
    // db f8..ff
    Error, Error, Error, Error, Error, Error, Error, Error,
];

pub(crate) static DC: X87Table = [
    // memory forms /0../7
    Fadd_DoubleReal, Fmul_DoubleReal, Fcom_DoubleReal, Fcomp_DoubleReal, Fsub_DoubleReal,
    Fsubr_DoubleReal, Fdiv_DoubleReal, Fdivr_DoubleReal,
    // dc c0..c7
    Fadd_StiSt0, Fadd_StiSt0, Fadd_StiSt0, Fadd_StiSt0, Fadd_StiSt0, Fadd_StiSt0, Fadd_StiSt0,
    Fadd_StiSt0,
    // dc c8..cf
    Fmul_StiSt0, Fmul_StiSt0, Fmul_StiSt0, Fmul_StiSt0, Fmul_StiSt0, Fmul_StiSt0, Fmul_StiSt0,
    Fmul_StiSt0,
    // dc d0..d7
    Fcom_Stj, Fcom_Stj, Fcom_Stj, Fcom_Stj, Fcom_Stj, Fcom_Stj, Fcom_Stj, Fcom_Stj,
    // dc d8..df
    Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj,
    // dc e0..e7 (sub and div swap direction in the sti forms)
    Fsubr_StiSt0, Fsubr_StiSt0, Fsubr_StiSt0, Fsubr_StiSt0, Fsubr_StiSt0, Fsubr_StiSt0,
    Fsubr_StiSt0, Fsubr_StiSt0,
    // dc e8..ef
    Fsub_StiSt0, Fsub_StiSt0, Fsub_StiSt0, Fsub_StiSt0, Fsub_StiSt0, Fsub_StiSt0, Fsub_StiSt0,
    Fsub_StiSt0,
    // dc f0..f7
    Fdivr_StiSt0, Fdivr_StiSt0, Fdivr_StiSt0, Fdivr_StiSt0, Fdivr_StiSt0, Fdivr_StiSt0,
    Fdivr_StiSt0, Fdivr_StiSt0,
    // dc f8..ff
    Fdiv_StiSt0, Fdiv_StiSt0, Fdiv_StiSt0, Fdiv_StiSt0, Fdiv_StiSt0, Fdiv_StiSt0, Fdiv_StiSt0,
    Fdiv_StiSt0,
];

pub(crate) static DD: X87Table = [
    // memory forms /0../7
    Fld_DoubleReal, Fisttp_QwordInteger, Fst_DoubleReal, Fstp_DoubleReal, Frstor, Error,
    Fnsave, Fnstsw,
    // dd c0..c7
    Ffree_Sti, Ffree_Sti, Ffree_Sti, Ffree_Sti, Ffree_Sti, Ffree_Sti, Ffree_Sti, Ffree_Sti,
    // dd c8..cf
    Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti,
    // dd d0..d7
    Fst_Sti, Fst_Sti, Fst_Sti, Fst_Sti, Fst_Sti, Fst_Sti, Fst_Sti, Fst_Sti,
    // dd d8..df
    Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti,
    // dd e0..e7
    Fucom_Sti, Fucom_Sti, Fucom_Sti, Fucom_Sti, Fucom_Sti, Fucom_Sti, Fucom_Sti, Fucom_Sti,
    // dd e8..ef
    Fucomp_Sti, Fucomp_Sti, Fucomp_Sti, Fucomp_Sti, Fucomp_Sti, Fucomp_Sti, Fucomp_Sti,
    Fucomp_Sti,
    // dd f0..f7
    Error, Error, Error, Error, Error, Error, Error, Error,
    // dd f8..ff
    Error, Error, Error, Error, Error, Error, Error, Error,
];

pub(crate) static DE: X87Table = [
    // memory forms /0../7
    Fiadd_WordInteger, Fimul_WordInteger, Ficom_WordInteger, Ficomp_WordInteger,
    Fisub_WordInteger, Fisubr_WordInteger, Fidiv_WordInteger, Fidivr_WordInteger,
    // de c0..c7
    Faddp_StiSt0, Faddp_StiSt0, Faddp_StiSt0, Faddp_StiSt0, Faddp_StiSt0, Faddp_StiSt0,
    Faddp_StiSt0, Faddp_StiSt0,
    // de c8..cf
    Fmulp_StiSt0, Fmulp_StiSt0, Fmulp_StiSt0, Fmulp_StiSt0, Fmulp_StiSt0, Fmulp_StiSt0,
    Fmulp_StiSt0, Fmulp_StiSt0,
    // de d0..d7
    Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj, Fcomp_Stj,
    // de d8..df
    Error, Fcompp, Error, Error, Error, Error, Error, Error,
    // de e0..e7
    Fsubrp_StiSt0, Fsubrp_StiSt0, Fsubrp_StiSt0, Fsubrp_StiSt0, Fsubrp_StiSt0, Fsubrp_StiSt0,
    Fsubrp_StiSt0, Fsubrp_StiSt0,
    // de e8..ef
    Fsubp_StiSt0, Fsubp_StiSt0, Fsubp_StiSt0, Fsubp_StiSt0, Fsubp_StiSt0, Fsubp_StiSt0,
    Fsubp_StiSt0, Fsubp_StiSt0,
    // de f0..f7
    Fdivrp_StiSt0, Fdivrp_StiSt0, Fdivrp_StiSt0, Fdivrp_StiSt0, Fdivrp_StiSt0, Fdivrp_StiSt0,
    Fdivrp_StiSt0, Fdivrp_StiSt0,
    // de f8..ff
    Fdivp_StiSt0, Fdivp_StiSt0, Fdivp_StiSt0, Fdivp_StiSt0, Fdivp_StiSt0, Fdivp_StiSt0,
    Fdivp_StiSt0, Fdivp_StiSt0,
];

pub(crate) static DF: X87Table = [
    // memory forms /0../7
    Fild_WordInteger, Fisttp_WordInteger, Fist_WordInteger, Fistp_WordInteger, Fbld_PackedBcd,
    Fild_QwordInteger, Fbstp_PackedBcd, Fistp_QwordInteger,
    // df c0..c7
    Ffreep_Sti, Ffreep_Sti, Ffreep_Sti, Ffreep_Sti, Ffreep_Sti, Ffreep_Sti, Ffreep_Sti,
    Ffreep_Sti,
    // df c8..cf
    Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti, Fxch_Sti,
    // df d0..d7
    Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti,
    // df d8..df
    Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti, Fstp_Sti,
    // df e0..e7
    Fnstsw_Ax, Error, Error, Error, Error, Error, Error, Error,
    // df e8..ef
    Fucomip_St0Stj, Fucomip_St0Stj, Fucomip_St0Stj, Fucomip_St0Stj, Fucomip_St0Stj,
    Fucomip_St0Stj, Fucomip_St0Stj, Fucomip_St0Stj,
    // df f0..f7
    Fcomip_St0Stj, Fcomip_St0Stj, Fcomip_St0Stj, Fcomip_St0Stj, Fcomip_St0Stj, Fcomip_St0Stj,
    Fcomip_St0Stj, Fcomip_St0Stj,
    // df f8..ff
    Error, Error, Error, Error, Error, Error, Error, Error,
];
