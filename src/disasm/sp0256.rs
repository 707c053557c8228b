// Wed Jan 15 2026 - Alex

//! SP0256 instruction encodings.
//!
//! Every format starts with a 4-bit immediate followed by the 4-bit opcode.
//! Field names follow the chip's parameter names: `B*`/`F*` are filter
//! coefficients, `[S=0]` marks a coefficient whose sign bit is implied.

use crate::disasm::format::{align, mnemonic, plain, rev, FieldDesc};

const RTS_PAGE: &[FieldDesc] = &[
    mnemonic(8, "RTS/PAGE"),
    align(),
];

const LOADALL_00: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOADALL.00"),
    rev(5, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(8, "B0"),
    rev(8, "F0"),
    rev(8, "B1"),
    rev(8, "F1"),
    rev(8, "B2"),
    rev(8, "F2"),
    rev(8, "B3"),
    rev(8, "F3"),
    rev(8, "B4"),
    rev(8, "F4"),
    rev(8, "Ampl Interp"),
    rev(8, "Period Interp"),
];

const LOADALL_01: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOADALL.01"),
    rev(5, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(8, "B0"),
    rev(8, "F0"),
    rev(8, "B1"),
    rev(8, "F1"),
    rev(8, "B2"),
    rev(8, "F2"),
    rev(8, "B3"),
    rev(8, "F3"),
    rev(8, "B4"),
    rev(8, "F4"),
    rev(8, "B5"),
    rev(8, "F5"),
    rev(8, "Ampl Interp"),
    rev(8, "Period Interp"),
];

const LOADALL_10: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOADALL.10"),
    rev(5, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(8, "B0"),
    rev(8, "F0"),
    rev(8, "B1"),
    rev(8, "F1"),
    rev(8, "B2"),
    rev(8, "F2"),
    rev(8, "B3"),
    rev(8, "F3"),
    rev(8, "B4"),
    rev(8, "F4"),
    rev(8, "Ampl Interp"),
    rev(8, "Period Interp"),
];

const LOADALL_11: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOADALL.11"),
    rev(5, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(8, "B0"),
    rev(8, "F0"),
    rev(8, "B1"),
    rev(8, "F1"),
    rev(8, "B2"),
    rev(8, "F2"),
    rev(8, "B3"),
    rev(8, "F3"),
    rev(8, "B4"),
    rev(8, "F4"),
    rev(8, "B5"),
    rev(8, "F5"),
    rev(8, "Ampl Interp"),
    rev(8, "Period Interp"),
];

const LOAD_2_00: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_2"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(3, "B0 [S=0]"),
    rev(5, "F0"),
    rev(3, "B1 [S=0]"),
    rev(5, "F1"),
    rev(3, "B2 [S=0]"),
    rev(5, "F2"),
    rev(4, "B3 [S=0]"),
    rev(6, "F3"),
    rev(7, "B4"),
    rev(6, "F4"),
    rev(5, "Ampl Interp"),
    rev(5, "Period Interp"),
];

const LOAD_2_01: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_2.01"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(3, "B0 [S=0]"),
    rev(5, "F0"),
    rev(3, "B1 [S=0]"),
    rev(5, "F1"),
    rev(3, "B2 [S=0]"),
    rev(5, "F2"),
    rev(4, "B3 [S=0]"),
    rev(6, "F3"),
    rev(7, "B4"),
    rev(6, "F4"),
    rev(8, "B5"),
    rev(8, "F5"),
    rev(5, "Ampl Interp"),
    rev(5, "Period Interp"),
];

const LOAD_2_10: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_2.10"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(6, "B0 [S=0]"),
    rev(6, "F0"),
    rev(6, "B1 [S=0]"),
    rev(6, "F1"),
    rev(6, "B2 [S=0]"),
    rev(6, "F2"),
    rev(6, "B3 [S=0]"),
    rev(7, "F3"),
    rev(8, "B4"),
    rev(8, "F4"),
    rev(5, "Ampl Interp"),
    rev(5, "Period Interp"),
];

const LOAD_2_11: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_2.11"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(6, "B0 [S=0]"),
    rev(6, "F0"),
    rev(6, "B1 [S=0]"),
    rev(6, "F1"),
    rev(6, "B2 [S=0]"),
    rev(6, "F2"),
    rev(6, "B3 [S=0]"),
    rev(7, "F3"),
    rev(8, "B4"),
    rev(8, "F4"),
    rev(8, "B5"),
    rev(8, "F5"),
    rev(5, "Ampl Interp"),
    rev(5, "Period Interp"),
];

const SETMSB_3_00: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "SETMSB_3.00"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(5, "F0 5 MSBs"),
    rev(5, "F1 5 MSBs"),
    rev(5, "F2 5 MSBs"),
    rev(5, "Ampl Interp"),
    rev(5, "Period Interp"),
];

const SETMSB_3_01: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "SETMSB_3.01"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(5, "F0 5 MSBs"),
    rev(5, "F1 5 MSBs"),
    rev(5, "F2 5 MSBs"),
    rev(5, "Ampl Interp"),
    rev(5, "Period Interp"),
];

const SETMSB_3_10: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "SETMSB_3.10"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(6, "F0 6 MSBs"),
    rev(6, "F1 6 MSBs"),
    rev(6, "F2 6 MSBs"),
    rev(5, "Ampl Interp"),
    rev(5, "Period Interp"),
];

const SETMSB_3_11: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "SETMSB_3.11"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(6, "F0 6 MSBs"),
    rev(6, "F1 6 MSBs"),
    rev(6, "F2 6 MSBs"),
    rev(5, "Ampl Interp"),
    rev(5, "Period Interp"),
];

const LOAD_4_00: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_4.00"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(4, "B3 [S=0]"),
    rev(6, "F3"),
    rev(7, "B4"),
    rev(6, "F4"),
];

const LOAD_4_01: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_4.01"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(4, "B3 [S=0]"),
    rev(6, "F3"),
    rev(7, "B4"),
    rev(6, "F4"),
    rev(8, "B5"),
    rev(8, "F5"),
];

const LOAD_4_10: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_4.10"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(6, "B3 [S=0]"),
    rev(7, "F3"),
    rev(8, "B4"),
    rev(8, "F4"),
];

const LOAD_4_11: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_4.11"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(6, "B3 [S=0]"),
    rev(7, "F3"),
    rev(8, "B4"),
    rev(8, "F4"),
    rev(8, "B5"),
    rev(8, "F5"),
];

const SETMSB_5_00: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "SETMSB_5.00"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(5, "F0 5 MSBs"),
    rev(5, "F1 5 MSBs"),
    rev(5, "F2 5 MSBs"),
];

const SETMSB_5_01: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "SETMSB_5.01"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(5, "F0 5 MSBs"),
    rev(5, "F1 5 MSBs"),
    rev(5, "F2 5 MSBs"),
];

const SETMSB_5_10: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "SETMSB_5.10"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(6, "F0 6 MSBs"),
    rev(6, "F1 6 MSBs"),
    rev(6, "F2 6 MSBs"),
];

const SETMSB_5_11: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "SETMSB_5.11"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(6, "F0 6 MSBs"),
    rev(6, "F1 6 MSBs"),
    rev(6, "F2 6 MSBs"),
];

const OPCODE_6_00: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "OPCODE_6"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(6, "F3 6 MSBs"),
    rev(6, "F4 6 MSBs"),
];

const OPCODE_6_01: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "OPCODE_6"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(6, "F3 6 MSBs"),
    rev(6, "F4 6 MSBs"),
    rev(8, "F5 8 MSBs"),
];

const OPCODE_6_10: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "OPCODE_6"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(7, "F3 7 MSBs"),
    rev(8, "F4 8 MSBs"),
];

const OPCODE_6_11: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "OPCODE_6"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(7, "F3 7 MSBs"),
    rev(8, "F4 8 MSBs"),
    rev(8, "F5 8 MSBs"),
];

const JMP: &[FieldDesc] = &[
    plain(4, "BTrg MSBs"),
    mnemonic(4, "JMP"),
    plain(8, "BTrg LSBs"),
    align(),
];

const SETMODE: &[FieldDesc] = &[
    plain(2, "Rpt MSBs"),
    plain(2, "Mode"),
    mnemonic(4, "SETMODE"),
];

const DELTA_9_00: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "DELTA_9.00"),
    rev(4, "+/- AmpMant"),
    rev(5, "+/- Period"),
    rev(3, "+/- B0 4 MSBs"),
    rev(3, "+/- F0 5 MSBs"),
    rev(3, "+/- B1 4 MSBs"),
    rev(3, "+/- F1 5 MSBs"),
    rev(3, "+/- B2 4 MSBs"),
    rev(3, "+/- F2 5 MSBs"),
    rev(3, "+/- B3 5 MSBs"),
    rev(4, "+/- F3 6 MSBs"),
    rev(4, "+/- B4 6 MSBs"),
    rev(4, "+/- F4 6 MSBs"),
];

const DELTA_9_01: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "DELTA_9.01"),
    rev(4, "+/- AmpMant"),
    rev(5, "+/- Period"),
    rev(3, "+/- B0 4 MSBs"),
    rev(3, "+/- F0 5 MSBs"),
    rev(3, "+/- B1 4 MSBs"),
    rev(3, "+/- F1 5 MSBs"),
    rev(3, "+/- B2 4 MSBs"),
    rev(3, "+/- F2 5 MSBs"),
    rev(3, "+/- B3 5 MSBs"),
    rev(4, "+/- F3 6 MSBs"),
    rev(4, "+/- B4 6 MSBs"),
    rev(4, "+/- F4 6 MSBs"),
    rev(5, "+/- B5 8 MSBs"),
    rev(5, "+/- F5 8 MSBs"),
];

const DELTA_9_10: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "DELTA_9.10"),
    rev(4, "+/- AmpMant"),
    rev(5, "+/- Period"),
    rev(4, "+/- B0 7 MSBs"),
    rev(4, "+/- F0 6 MSBs"),
    rev(4, "+/- B1 7 MSBs"),
    rev(4, "+/- F1 6 MSBs"),
    rev(4, "+/- B2 7 MSBs"),
    rev(4, "+/- F2 6 MSBs"),
    rev(4, "+/- B3 7 MSBs"),
    rev(5, "+/- F3 7 MSBs"),
    rev(5, "+/- B4 8 MSBs"),
    rev(5, "+/- F4 8 MSBs"),
];

const DELTA_9_11: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "DELTA_9.11"),
    rev(4, "+/- AmpMant"),
    rev(5, "+/- Period"),
    rev(4, "+/- B0 7 MSBs"),
    rev(4, "+/- F0 6 MSBs"),
    rev(4, "+/- B1 7 MSBs"),
    rev(4, "+/- F1 6 MSBs"),
    rev(4, "+/- B2 7 MSBs"),
    rev(4, "+/- F2 6 MSBs"),
    rev(4, "+/- B3 7 MSBs"),
    rev(5, "+/- F3 7 MSBs"),
    rev(5, "+/- B4 8 MSBs"),
    rev(5, "+/- F4 8 MSBs"),
    rev(5, "+/- B5 8 MSBs"),
    rev(5, "+/- F5 8 MSBs"),
];

const SETMSB_A_00: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "SETMSB_A.00"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(5, "F0 5 MSBs"),
    rev(5, "F1 5 MSBs"),
    rev(5, "F2 5 MSBs"),
];

const SETMSB_A_01: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "SETMSB_A.01"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(5, "F0 5 MSBs"),
    rev(5, "F1 5 MSBs"),
    rev(5, "F2 5 MSBs"),
];

const SETMSB_A_10: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "SETMSB_A.10"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(6, "F0 6 MSBs"),
    rev(6, "F1 6 MSBs"),
    rev(6, "F2 6 MSBs"),
];

const SETMSB_A_11: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "SETMSB_A.11"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(6, "F0 6 MSBs"),
    rev(6, "F1 6 MSBs"),
    rev(6, "F2 6 MSBs"),
];

const JSR: &[FieldDesc] = &[
    plain(4, "BTrg MSBs"),
    mnemonic(4, "JSR"),
    plain(8, "BTrg LSBs"),
    align(),
];

const LOAD_C_00: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_C.00"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(3, "B0 [S=0]"),
    rev(5, "F0"),
    rev(3, "B1 [S=0]"),
    rev(5, "F1"),
    rev(3, "B2 [S=0]"),
    rev(5, "F2"),
    rev(4, "B3 [S=0]"),
    rev(6, "F3"),
    rev(7, "B4"),
    rev(6, "F4"),
];

const LOAD_C_01: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_C.01"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(3, "B0 [S=0]"),
    rev(5, "F0"),
    rev(3, "B1 [S=0]"),
    rev(5, "F1"),
    rev(3, "B2 [S=0]"),
    rev(5, "F2"),
    rev(4, "B3 [S=0]"),
    rev(6, "F3"),
    rev(7, "B4"),
    rev(6, "F4"),
    rev(8, "B5"),
    rev(8, "F5"),
];

const LOAD_C_10: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_C.10"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(6, "B0 [S=0]"),
    rev(6, "F0"),
    rev(6, "B1 [S=0]"),
    rev(6, "F1"),
    rev(6, "B2 [S=0]"),
    rev(6, "F2"),
    rev(6, "B3 [S=0]"),
    rev(7, "F3"),
    rev(8, "B4"),
    rev(8, "F4"),
];

const LOAD_C_11: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_C.11"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
    rev(6, "B0 [S=0]"),
    rev(6, "F0"),
    rev(6, "B1 [S=0]"),
    rev(6, "F1"),
    rev(6, "B2 [S=0]"),
    rev(6, "F2"),
    rev(6, "B3 [S=0]"),
    rev(7, "F3"),
    rev(8, "B4"),
    rev(8, "F4"),
    rev(8, "B5"),
    rev(8, "F5"),
];

const DELTA_D_00: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "DELTA_D.00"),
    rev(4, "+/- AmpMant"),
    rev(5, "+/- Period"),
    rev(3, "+/- B3 5 MSBs"),
    rev(4, "+/- F3 6 MSBs"),
    rev(4, "+/- B4 7 MSBs"),
    rev(4, "+/- F4 6 MSBs"),
];

const DELTA_D_01: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "DELTA_D.01"),
    rev(4, "+/- AmpMant"),
    rev(5, "+/- Period"),
    rev(3, "+/- B3 5 MSBs"),
    rev(4, "+/- F3 6 MSBs"),
    rev(4, "+/- B4 7 MSBs"),
    rev(4, "+/- F4 6 MSBs"),
    rev(5, "+/- B5 8 MSBs"),
    rev(5, "+/- F5 8 MSBs"),
];

const DELTA_D_10: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "DELTA_D.10"),
    rev(4, "+/- AmpMant"),
    rev(5, "+/- Period"),
    rev(4, "+/- B3 7 MSBs"),
    rev(5, "+/- F3 7 MSBs"),
    rev(5, "+/- B4 8 MSBs"),
    rev(5, "+/- F4 8 MSBs"),
];

const DELTA_D_11: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "DELTA_D.11"),
    rev(4, "+/- AmpMant"),
    rev(5, "+/- Period"),
    rev(4, "+/- B3 7 MSBs"),
    rev(5, "+/- F3 7 MSBs"),
    rev(5, "+/- B4 8 MSBs"),
    rev(5, "+/- F4 8 MSBs"),
    rev(5, "+/- B5 8 MSBs"),
    rev(5, "+/- F5 8 MSBs"),
];

const LOAD_E: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "LOAD_E"),
    rev(3, "AmpMant"),
    rev(3, "AmpExp"),
    rev(8, "Period"),
];

const PAUSE: &[FieldDesc] = &[
    rev(4, "Repeat"),
    mnemonic(4, "PAUSE"),
];

pub(crate) static SP0256_FORMATS: [[&[FieldDesc]; 4]; 16] = [
    [RTS_PAGE, RTS_PAGE, RTS_PAGE, RTS_PAGE],
    [LOADALL_00, LOADALL_01, LOADALL_10, LOADALL_11],
    [LOAD_2_00, LOAD_2_01, LOAD_2_10, LOAD_2_11],
    [SETMSB_3_00, SETMSB_3_01, SETMSB_3_10, SETMSB_3_11],
    [LOAD_4_00, LOAD_4_01, LOAD_4_10, LOAD_4_11],
    [SETMSB_5_00, SETMSB_5_01, SETMSB_5_10, SETMSB_5_11],
    [OPCODE_6_00, OPCODE_6_01, OPCODE_6_10, OPCODE_6_11],
    [JMP, JMP, JMP, JMP],
    [SETMODE, SETMODE, SETMODE, SETMODE],
    [DELTA_9_00, DELTA_9_01, DELTA_9_10, DELTA_9_11],
    [SETMSB_A_00, SETMSB_A_01, SETMSB_A_10, SETMSB_A_11],
    [JSR, JSR, JSR, JSR],
    [LOAD_C_00, LOAD_C_01, LOAD_C_10, LOAD_C_11],
    [DELTA_D_00, DELTA_D_01, DELTA_D_10, DELTA_D_11],
    [LOAD_E, LOAD_E, LOAD_E, LOAD_E],
    [PAUSE, PAUSE, PAUSE, PAUSE],
];
