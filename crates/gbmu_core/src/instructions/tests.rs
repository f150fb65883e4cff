use super::*;
use crate::regs::Flags;
use crate::ENTRY_POINT;

const HOLES: [u8; 11] = [
    0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
];

/// Registers at power-on and a memory image with `program` at PC.
fn machine(program: &[u8]) -> (Registers, Memory) {
    let regs = Registers::new();
    let mut mem = Memory::new();
    mem.load(ENTRY_POINT, program);
    (regs, mem)
}

fn run(regs: &mut Registers, mem: &mut Memory) -> Executed {
    let opcode = mem.read8(regs.pc);
    execute(regs, mem, opcode).unwrap()
}

#[test]
fn base_table_shape() {
    for (op, row) in BASE.iter().enumerate() {
        let op = op as u8;
        if HOLES.contains(&op) {
            assert!(row.is_illegal(), "0x{op:02X} should be a hole");
            assert_eq!(row.length, 1);
            assert_eq!(row.cycles, 0);
            continue;
        }
        assert!(!row.is_illegal(), "0x{op:02X} is defined");
        assert!((1..=3).contains(&row.length), "0x{op:02X} {}", row.mnemonic);
        assert!(row.cycles >= 4 && row.cycles % 4 == 0, "0x{op:02X}");
        assert!(row.branch_cycles >= row.cycles, "0x{op:02X}");
    }
}

#[test]
fn immediate_operands_match_lengths() {
    for row in BASE.iter().filter(|row| !row.is_illegal()) {
        let m = row.mnemonic;
        let expected = if m.contains("16") {
            3
        } else if m.contains("d8") || m.contains("a8") || m.contains("r8") || m == "STOP 0" {
            2
        } else {
            1
        };
        assert_eq!(row.length, expected, "{m}");
    }
}

#[test]
fn known_rows() {
    let nop = &BASE[0x00];
    assert_eq!((nop.mnemonic, nop.length, nop.cycles), ("NOP", 1, 4));

    let jp_nz = &BASE[0xC2];
    assert_eq!(jp_nz.mnemonic, "JP NZ,a16");
    assert_eq!((jp_nz.length, jp_nz.cycles, jp_nz.branch_cycles), (3, 12, 16));

    assert_eq!(BASE[0xE2].mnemonic, "LD (C),A");
    assert_eq!(BASE[0xE2].length, 1);
    assert_eq!(BASE[0xF2].length, 1);
    assert_eq!(BASE[0x1C].cycles, 4);
    assert_eq!(BASE[0x76].mnemonic, "HALT");
    assert_eq!(BASE[0xCB].mnemonic, "PREFIX CB");

    let branches = [
        (0x20, 8, 12),
        (0xC0, 8, 20),
        (0xC4, 12, 24),
        (0xDA, 12, 16),
    ];
    for (op, not_taken, taken) in branches {
        assert_eq!(BASE[op].cycles, not_taken, "0x{op:02X}");
        assert_eq!(BASE[op].branch_cycles, taken, "0x{op:02X}");
    }
}

#[test]
fn prefixed_table_shape() {
    for (cb, row) in PREFIXED.iter().enumerate() {
        assert_eq!(row.length, 2);
        let expected = match (cb & 0x07 == 6, cb >> 6) {
            (false, _) => 8,
            (true, 1) => 12,
            (true, _) => 16,
        };
        assert_eq!(row.cycles, expected, "CB {cb:02X}");
        assert_eq!(row.cycles, row.branch_cycles);
    }
    assert_eq!(PREFIXED[0x00].mnemonic, "RLC B");
    assert_eq!(PREFIXED[0x37].mnemonic, "SWAP A");
    assert_eq!(PREFIXED[0x7C].mnemonic, "BIT 7,H");
    assert_eq!(PREFIXED[0x86].mnemonic, "RES 0,(HL)");
    assert_eq!(PREFIXED[0xFF].mnemonic, "SET 7,A");
}

#[test]
fn decode_follows_prefix() {
    let (_, mem) = machine(&[0xCB, 0x11]);
    let (row, index) = decode(&mem, ENTRY_POINT);
    assert_eq!(row.mnemonic, "RL C");
    assert_eq!(index, 0x11);

    let (row, index) = decode(&mem, ENTRY_POINT + 1);
    assert_eq!(row.mnemonic, "LD DE,d16");
    assert_eq!(index, 0x11);
}

#[test]
fn straight_line_advances_by_length() {
    // LD BC,$1234 ; LD A,$42 ; LD (BC),A
    let (mut regs, mut mem) = machine(&[0x01, 0x34, 0x12, 0x3E, 0x42, 0x02]);

    let done = run(&mut regs, &mut mem);
    assert_eq!((done.cycles, done.outcome), (12, Outcome::Next));
    assert_eq!(regs.bc(), 0x1234);
    assert_eq!(regs.pc, ENTRY_POINT + 3);

    run(&mut regs, &mut mem);
    assert_eq!(regs.a, 0x42);
    assert_eq!(regs.pc, ENTRY_POINT + 5);

    let done = run(&mut regs, &mut mem);
    assert_eq!(done.cycles, 8);
    assert_eq!(mem.read8(0x1234), 0x42);
}

#[test]
fn jr_targets_are_relative_to_next_instruction() {
    // JR -2 loops onto itself.
    let (mut regs, mut mem) = machine(&[0x18, 0xFE]);
    let done = run(&mut regs, &mut mem);
    assert_eq!((done.cycles, done.outcome), (12, Outcome::Jumped));
    assert_eq!(regs.pc, ENTRY_POINT);

    // JR +5
    let (mut regs, mut mem) = machine(&[0x18, 0x05]);
    run(&mut regs, &mut mem);
    assert_eq!(regs.pc, ENTRY_POINT + 7);
}

#[test]
fn conditional_branches_report_actual_cycles() {
    // JR NZ,+4 with Z set: not taken.
    let (mut regs, mut mem) = machine(&[0x20, 0x04]);
    regs.set_flag(Flags::Z, true);
    let done = run(&mut regs, &mut mem);
    assert_eq!((done.cycles, done.outcome), (8, Outcome::Next));
    assert_eq!(regs.pc, ENTRY_POINT + 2);

    // Same instruction with Z clear: taken.
    let (mut regs, mut mem) = machine(&[0x20, 0x04]);
    let done = run(&mut regs, &mut mem);
    assert_eq!(done.cycles, 12);
    assert_eq!(regs.pc, ENTRY_POINT + 6);

    // JP C,$2000
    let (mut regs, mut mem) = machine(&[0xDA, 0x00, 0x20]);
    assert_eq!(run(&mut regs, &mut mem).cycles, 12);
    assert_eq!(regs.pc, ENTRY_POINT + 3);
    let (mut regs, mut mem) = machine(&[0xDA, 0x00, 0x20]);
    regs.set_flag(Flags::C, true);
    assert_eq!(run(&mut regs, &mut mem).cycles, 16);
    assert_eq!(regs.pc, 0x2000);
}

#[test]
fn call_and_ret_round_trip() {
    // CALL $0200 ; ... at $0200: RET
    let (mut regs, mut mem) = machine(&[0xCD, 0x00, 0x02]);
    mem.write8(0x0200, 0xC9);

    let done = run(&mut regs, &mut mem);
    assert_eq!(done.cycles, 24);
    assert_eq!(regs.pc, 0x0200);
    assert_eq!(regs.sp, 0xFFFC);
    // High byte at the higher address.
    assert_eq!(mem.read8(0xFFFD), 0x01);
    assert_eq!(mem.read8(0xFFFC), 0x53);

    let done = run(&mut regs, &mut mem);
    assert_eq!(done.cycles, 16);
    assert_eq!(regs.pc, ENTRY_POINT + 3);
    assert_eq!(regs.sp, 0xFFFE);
}

#[test]
fn ret_cc_cycles() {
    let (mut regs, mut mem) = machine(&[0xC8]); // RET Z
    mem.write16(0xFFFC, 0x4000);
    regs.sp = 0xFFFC;
    assert_eq!(run(&mut regs, &mut mem).cycles, 8);
    assert_eq!(regs.pc, ENTRY_POINT + 1);

    regs.pc = ENTRY_POINT;
    regs.set_flag(Flags::Z, true);
    assert_eq!(run(&mut regs, &mut mem).cycles, 20);
    assert_eq!(regs.pc, 0x4000);
    assert_eq!(regs.sp, 0xFFFE);
}

#[test]
fn rst_pushes_next_address() {
    let (mut regs, mut mem) = machine(&[0xEF]); // RST 28H
    let done = run(&mut regs, &mut mem);
    assert_eq!(done.cycles, 16);
    assert_eq!(regs.pc, 0x0028);
    assert_eq!(mem.read16(regs.sp), ENTRY_POINT + 1);
}

#[test]
fn reti_and_ime_outcomes() {
    let (mut regs, mut mem) = machine(&[0xF3, 0xFB, 0xD9]);
    mem.write16(0xFFFC, 0x1234);
    regs.sp = 0xFFFC;

    assert_eq!(run(&mut regs, &mut mem).outcome, Outcome::SetIme(false));
    assert_eq!(run(&mut regs, &mut mem).outcome, Outcome::SetIme(true));
    let done = run(&mut regs, &mut mem);
    assert_eq!(done.outcome, Outcome::ReturnFromInterrupt);
    assert_eq!(done.cycles, 16);
    assert_eq!(regs.pc, 0x1234);
}

#[test]
fn holes_fail_without_side_effects() {
    for op in HOLES {
        let (mut regs, mut mem) = machine(&[op]);
        let before = regs;
        let err = execute(&mut regs, &mut mem, op).unwrap_err();
        assert_eq!(
            err,
            Error::IllegalOpcode {
                addr: ENTRY_POINT,
                opcode: op
            }
        );
        assert_eq!(regs, before);
    }
}

#[test]
fn prefixed_rlc_b() {
    let (mut regs, mut mem) = machine(&[0xCB, 0x00]);
    regs.b = 0x85;
    let done = run(&mut regs, &mut mem);
    assert_eq!(done.instruction.mnemonic, "RLC B");
    assert_eq!(done.cycles, 8);
    assert_eq!(regs.b, 0x0B);
    assert_eq!(regs.flags(), Flags::C);
    assert_eq!(regs.pc, ENTRY_POINT + 2);
}

#[test]
fn prefixed_shifts_set_zero_and_carry() {
    // SRL A
    let (mut regs, mut mem) = machine(&[0xCB, 0x3F]);
    regs.a = 0x01;
    run(&mut regs, &mut mem);
    assert_eq!(regs.a, 0x00);
    assert_eq!(regs.flags(), Flags::Z | Flags::C);

    // RR D folds the old carry into bit 7.
    let (mut regs, mut mem) = machine(&[0xCB, 0x1A]);
    regs.d = 0x02;
    regs.set_flag(Flags::C, true);
    run(&mut regs, &mut mem);
    assert_eq!(regs.d, 0x81);
    assert_eq!(regs.flags(), Flags::empty());

    // SWAP E
    let (mut regs, mut mem) = machine(&[0xCB, 0x33]);
    regs.e = 0xF1;
    run(&mut regs, &mut mem);
    assert_eq!(regs.e, 0x1F);
    assert_eq!(regs.flags(), Flags::empty());

    // SRA (HL) keeps the sign bit.
    let (mut regs, mut mem) = machine(&[0xCB, 0x2E]);
    regs.set_hl(0xC000);
    mem.write8(0xC000, 0x81);
    let done = run(&mut regs, &mut mem);
    assert_eq!(done.cycles, 16);
    assert_eq!(mem.read8(0xC000), 0xC0);
    assert!(regs.get_flag(Flags::C));
}

#[test]
fn prefixed_bit_res_set() {
    // BIT 7,H with bit clear, carry preserved.
    let (mut regs, mut mem) = machine(&[0xCB, 0x7C]);
    regs.h = 0x7F;
    regs.set_flag(Flags::C, true);
    regs.set_flag(Flags::N, true);
    run(&mut regs, &mut mem);
    assert_eq!(regs.flags(), Flags::Z | Flags::H | Flags::C);

    // BIT 0,(HL) with bit set costs 12.
    let (mut regs, mut mem) = machine(&[0xCB, 0x46]);
    regs.set_hl(0xC000);
    mem.write8(0xC000, 0x01);
    let done = run(&mut regs, &mut mem);
    assert_eq!(done.cycles, 12);
    assert_eq!(regs.flags(), Flags::H);

    // RES 0,(HL) then SET 7,(HL), no flags touched.
    let (mut regs, mut mem) = machine(&[0xCB, 0x86, 0xCB, 0xFE]);
    regs.set_hl(0xC000);
    mem.write8(0xC000, 0x01);
    regs.set_flags(true, true, true, true);
    run(&mut regs, &mut mem);
    assert_eq!(mem.read8(0xC000), 0x00);
    run(&mut regs, &mut mem);
    assert_eq!(mem.read8(0xC000), 0x80);
    assert_eq!(regs.flags(), Flags::all());
}

#[test]
fn disassembly_substitutes_operands() {
    let program = [
        0x01, 0x34, 0x12, // LD BC,$1234
        0xE0, 0x40, // LDH ($40),A
        0x18, 0xFE, // JR $0155
        0xF8, 0xFE, // LD HL,SP-2
        0xE8, 0x05, // ADD SP,5
        0xCB, 0x7C, // BIT 7,H
        0xD3, // ???
    ];
    let (_, mem) = machine(&program);
    let mut addr = ENTRY_POINT;
    let mut lines = Vec::new();
    while usize::from(addr - ENTRY_POINT) < program.len() {
        let line = disassemble(&mem, addr);
        addr += u16::from(line.length);
        lines.push(line.text);
    }
    assert_eq!(
        lines,
        [
            "LD BC,$1234",
            "LDH ($40),A",
            "JR $0155",
            "LD HL,SP-2",
            "ADD SP,5",
            "BIT 7,H",
            "???",
        ]
    );
    assert_eq!(disassemble(&mem, ENTRY_POINT).to_string(), "0150: LD BC,$1234");
}

const HL_ADDR: u16 = 0xC008;

/// `program` at PC with a distinct value in every 8-bit operand slot:
/// B, C, D, E, H, L, (HL), A.
fn loaded(program: &[u8]) -> (Registers, Memory) {
    let (mut regs, mut mem) = machine(program);
    regs.b = 0x11;
    regs.c = 0x2F;
    regs.d = 0x80;
    regs.e = 0xFF;
    regs.set_hl(HL_ADDR);
    mem.write8(HL_ADDR, 0x0F);
    regs.a = 0x3A;
    (regs, mem)
}

fn operand(regs: &Registers, mem: &Memory, index: u8) -> u8 {
    match index {
        0 => regs.b,
        1 => regs.c,
        2 => regs.d,
        3 => regs.e,
        4 => regs.h,
        5 => regs.l,
        6 => mem.read8(regs.hl()),
        _ => regs.a,
    }
}

fn set_operand(regs: &mut Registers, mem: &mut Memory, index: u8, value: u8) {
    match index {
        0 => regs.b = value,
        1 => regs.c = value,
        2 => regs.d = value,
        3 => regs.e = value,
        4 => regs.h = value,
        5 => regs.l = value,
        6 => mem.write8(regs.hl(), value),
        _ => regs.a = value,
    }
}

#[test]
fn ld_r_r_moves_the_encoded_operands() {
    for op in (0x40..=0x7Fu8).filter(|&op| op != 0x76) {
        let (dst, src) = ((op >> 3) & 0x07, op & 0x07);
        let (mut regs, mut mem) = loaded(&[op]);
        let mut expected = regs;
        let mut expected_mem = mem.clone();
        set_operand(&mut expected, &mut expected_mem, dst, operand(&regs, &mem, src));
        expected.pc = ENTRY_POINT + 1;

        let done = run(&mut regs, &mut mem);
        let cost = if dst == 6 || src == 6 { 8 } else { 4 };
        assert_eq!(done.cycles, cost, "{}", BASE[usize::from(op)].mnemonic);
        assert_eq!(regs, expected, "{}", BASE[usize::from(op)].mnemonic);
        assert_eq!(mem.as_slice(), expected_mem.as_slice(), "{}", BASE[usize::from(op)].mnemonic);
    }
}

#[test]
fn inc_dec_r_touch_only_their_operand() {
    for index in 0..8u8 {
        for (op, delta) in [(0x04 | (index << 3), 1u8), (0x05 | (index << 3), 0xFF)] {
            let m = BASE[usize::from(op)].mnemonic;
            let (mut regs, mut mem) = loaded(&[op]);
            regs.set_flag(Flags::C, true);
            let mut expected = regs;
            let mut expected_mem = mem.clone();
            let value = operand(&regs, &mem, index);
            set_operand(&mut expected, &mut expected_mem, index, value.wrapping_add(delta));

            let done = run(&mut regs, &mut mem);
            assert_eq!(done.cycles, if index == 6 { 12 } else { 4 }, "{m}");
            expected.pc = regs.pc;
            expected.set_f(regs.f());
            assert_eq!(regs, expected, "{m}");
            assert_eq!(mem.as_slice(), expected_mem.as_slice(), "{m}");
            assert!(regs.get_flag(Flags::C), "{m} must keep C");
            assert_eq!(regs.get_flag(Flags::N), delta == 0xFF, "{m}");
        }
    }
}

#[test]
fn inc_dec_hl_indirect_flags() {
    // INC (HL) on 0xFF wraps to zero with a half carry.
    let (mut regs, mut mem) = loaded(&[0x34]);
    mem.write8(HL_ADDR, 0xFF);
    run(&mut regs, &mut mem);
    assert_eq!(mem.read8(HL_ADDR), 0x00);
    assert_eq!(regs.flags(), Flags::Z | Flags::H);

    // DEC (HL) on 0x10 borrows from bit 4.
    let (mut regs, mut mem) = loaded(&[0x35]);
    mem.write8(HL_ADDR, 0x10);
    run(&mut regs, &mut mem);
    assert_eq!(mem.read8(HL_ADDR), 0x0F);
    assert_eq!(regs.flags(), Flags::N | Flags::H);
}

#[test]
fn alu_register_forms_match_immediate_forms() {
    for op in 0x80..=0xBFu8 {
        let register_form = BASE[usize::from(op)].mnemonic;
        let imm_op = 0xC6 | (op & 0x38);
        let imm_form = BASE[usize::from(imm_op)].mnemonic;
        let split = |m: &'static str| m.rsplit_once(|c: char| c == ',' || c == ' ').map(|(head, _)| head);
        assert_eq!(split(register_form), split(imm_form), "0x{op:02X}");

        for carry in [false, true] {
            let (mut regs, mut mem) = loaded(&[op]);
            regs.set_flag(Flags::C, carry);
            let value = operand(&regs, &mem, op & 0x07);
            let done = run(&mut regs, &mut mem);
            assert_eq!(done.cycles, if op & 0x07 == 6 { 8 } else { 4 }, "{register_form}");

            let (mut imm_regs, mut imm_mem) = loaded(&[imm_op, value]);
            imm_regs.set_flag(Flags::C, carry);
            run(&mut imm_regs, &mut imm_mem);

            assert_eq!(regs.a, imm_regs.a, "{register_form} carry={carry}");
            assert_eq!(regs.flags(), imm_regs.flags(), "{register_form} carry={carry}");
        }
    }
}

#[test]
fn alu_immediate_results() {
    // (opcode, A, operand, carry in, A after, flags after)
    let cases = [
        (0xC6, 0x3A, 0xC6, false, 0x00, Flags::Z | Flags::H | Flags::C), // ADD
        (0xCE, 0xE1, 0x0F, true, 0xF1, Flags::H),                       // ADC
        (0xD6, 0x3E, 0x0F, false, 0x2F, Flags::N | Flags::H),           // SUB
        (0xDE, 0x3B, 0x4F, true, 0xEB, Flags::N | Flags::H | Flags::C), // SBC
        (0xE6, 0x5A, 0x3F, true, 0x1A, Flags::H),                       // AND
        (0xEE, 0xFF, 0xFF, true, 0x00, Flags::Z),                       // XOR
        (0xF6, 0x00, 0x00, true, 0x00, Flags::Z),                       // OR
        (0xFE, 0x3C, 0x40, false, 0x3C, Flags::N | Flags::C),           // CP
        (0xFE, 0x3C, 0x3C, false, 0x3C, Flags::Z | Flags::N),           // CP
    ];
    for (op, a, value, carry, result, flags) in cases {
        let (mut regs, mut mem) = machine(&[op, value]);
        regs.a = a;
        regs.set_flag(Flags::C, carry);
        let done = run(&mut regs, &mut mem);
        assert_eq!(done.cycles, 8);
        assert_eq!(regs.a, result, "{}", done.instruction.mnemonic);
        assert_eq!(regs.flags(), flags, "{}", done.instruction.mnemonic);
    }
}

#[test]
fn accumulator_rotates_always_clear_zero() {
    // (opcode, A, carry in, A after, carry out)
    let cases = [
        (0x07, 0x85, false, 0x0B, true),  // RLCA
        (0x0F, 0x01, false, 0x80, true),  // RRCA
        (0x17, 0x80, false, 0x00, true),  // RLA
        (0x17, 0x40, true, 0x81, false),  // RLA
        (0x1F, 0x01, false, 0x00, true),  // RRA
        (0x1F, 0x02, true, 0x81, false),  // RRA
    ];
    for (op, a, carry, result, carry_out) in cases {
        let (mut regs, mut mem) = machine(&[op]);
        regs.a = a;
        regs.set_flags(true, true, true, carry);
        let done = run(&mut regs, &mut mem);
        let m = done.instruction.mnemonic;
        assert_eq!(done.cycles, 4);
        assert_eq!(regs.a, result, "{m}");
        let expected = if carry_out { Flags::C } else { Flags::empty() };
        assert_eq!(regs.flags(), expected, "{m}");
    }

    // The prefixed RL A reports the zero result.
    let (mut regs, mut mem) = machine(&[0xCB, 0x17]);
    regs.a = 0x80;
    run(&mut regs, &mut mem);
    assert_eq!(regs.flags(), Flags::Z | Flags::C);
}

#[test]
fn cpl_scf_ccf() {
    // CPL keeps Z and C.
    let (mut regs, mut mem) = machine(&[0x2F]);
    regs.a = 0x35;
    regs.set_flags(true, false, false, true);
    run(&mut regs, &mut mem);
    assert_eq!(regs.a, 0xCA);
    assert_eq!(regs.flags(), Flags::all());

    // SCF keeps Z.
    let (mut regs, mut mem) = machine(&[0x37]);
    regs.set_flags(true, true, true, false);
    run(&mut regs, &mut mem);
    assert_eq!(regs.flags(), Flags::Z | Flags::C);

    // CCF twice.
    let (mut regs, mut mem) = machine(&[0x3F, 0x3F]);
    regs.set_flags(false, true, true, true);
    run(&mut regs, &mut mem);
    assert_eq!(regs.flags(), Flags::empty());
    run(&mut regs, &mut mem);
    assert_eq!(regs.flags(), Flags::C);
}

#[test]
fn indirect_loads_through_pairs() {
    // LD (BC),A ; LD A,(DE)
    let (mut regs, mut mem) = machine(&[0x02, 0x1A]);
    regs.a = 0x5E;
    regs.set_bc(0xC100);
    regs.set_de(0xC200);
    mem.write8(0xC200, 0x99);
    run(&mut regs, &mut mem);
    assert_eq!(mem.read8(0xC100), 0x5E);
    assert_eq!(run(&mut regs, &mut mem).cycles, 8);
    assert_eq!(regs.a, 0x99);

    // LD (HL+),A ; LD (HL-),A ; LD A,(HL+) ; LD A,(HL-)
    let (mut regs, mut mem) = machine(&[0x22, 0x32, 0x2A, 0x3A]);
    regs.a = 0x42;
    regs.set_hl(0xC000);
    run(&mut regs, &mut mem);
    assert_eq!(mem.read8(0xC000), 0x42);
    assert_eq!(regs.hl(), 0xC001);
    regs.a = 0x43;
    run(&mut regs, &mut mem);
    assert_eq!(mem.read8(0xC001), 0x43);
    assert_eq!(regs.hl(), 0xC000);

    run(&mut regs, &mut mem);
    assert_eq!(regs.a, 0x42);
    assert_eq!(regs.hl(), 0xC001);
    run(&mut regs, &mut mem);
    assert_eq!(regs.a, 0x43);
    assert_eq!(regs.hl(), 0xC000);
    assert_eq!(regs.pc, ENTRY_POINT + 4);
}

#[test]
fn high_page_and_absolute_loads() {
    // LDH ($80),A ; LDH A,($81) ; LD (C),A ; LD A,(C)
    let (mut regs, mut mem) = machine(&[0xE0, 0x80, 0xF0, 0x81, 0xE2, 0xF2]);
    regs.a = 0x11;
    regs.c = 0x90;
    mem.write8(0xFF81, 0x22);
    mem.write8(0xFF90, 0x44);

    assert_eq!(run(&mut regs, &mut mem).cycles, 12);
    assert_eq!(mem.read8(0xFF80), 0x11);
    run(&mut regs, &mut mem);
    assert_eq!(regs.a, 0x22);
    assert_eq!(run(&mut regs, &mut mem).cycles, 8);
    assert_eq!(mem.read8(0xFF90), 0x22);
    regs.a = 0;
    mem.write8(0xFF90, 0x44);
    run(&mut regs, &mut mem);
    assert_eq!(regs.a, 0x44);
    assert_eq!(regs.pc, ENTRY_POINT + 6);

    // LD ($C123),A ; LD A,($C124) ; LD ($C200),SP
    let (mut regs, mut mem) = machine(&[0xEA, 0x23, 0xC1, 0xFA, 0x24, 0xC1, 0x08, 0x00, 0xC2]);
    regs.a = 0x7B;
    mem.write8(0xC124, 0x9C);
    assert_eq!(run(&mut regs, &mut mem).cycles, 16);
    assert_eq!(mem.read8(0xC123), 0x7B);
    run(&mut regs, &mut mem);
    assert_eq!(regs.a, 0x9C);
    assert_eq!(run(&mut regs, &mut mem).cycles, 20);
    assert_eq!(mem.read16(0xC200), 0xFFFE);
}

#[test]
fn sixteen_bit_inc_dec_and_loads() {
    for index in 0..4u8 {
        let inc = 0x03 | (index << 4);
        let dec = 0x0B | (index << 4);
        let ld = 0x01 | (index << 4);
        let (mut regs, mut mem) = machine(&[ld, 0xFF, 0xFF, inc, dec, dec]);
        regs.set_flags(true, false, true, false);
        let pair = |regs: &Registers| match index {
            0 => regs.bc(),
            1 => regs.de(),
            2 => regs.hl(),
            _ => regs.sp,
        };

        run(&mut regs, &mut mem);
        assert_eq!(pair(&regs), 0xFFFF);
        assert_eq!(run(&mut regs, &mut mem).cycles, 8);
        assert_eq!(pair(&regs), 0x0000);
        run(&mut regs, &mut mem);
        assert_eq!(pair(&regs), 0xFFFF);
        run(&mut regs, &mut mem);
        assert_eq!(pair(&regs), 0xFFFE);
        assert_eq!(regs.flags(), Flags::Z | Flags::H, "{}", BASE[usize::from(inc)].mnemonic);
    }
}

#[test]
fn add_hl_rr_flags() {
    // ADD HL,BC: carry out of bit 11, Z untouched.
    let (mut regs, mut mem) = machine(&[0x09]);
    regs.set_hl(0x0FFF);
    regs.set_bc(0x0001);
    regs.set_flags(true, true, false, false);
    assert_eq!(run(&mut regs, &mut mem).cycles, 8);
    assert_eq!(regs.hl(), 0x1000);
    assert_eq!(regs.flags(), Flags::Z | Flags::H);

    // ADD HL,HL: carry out of bit 15.
    let (mut regs, mut mem) = machine(&[0x29]);
    regs.set_hl(0x8000);
    run(&mut regs, &mut mem);
    assert_eq!(regs.hl(), 0x0000);
    assert_eq!(regs.flags(), Flags::C);

    // ADD HL,DE and ADD HL,SP pick the right pair.
    let (mut regs, mut mem) = machine(&[0x19, 0x39]);
    regs.set_hl(0x0100);
    regs.set_de(0x0020);
    regs.sp = 0x0003;
    run(&mut regs, &mut mem);
    assert_eq!(regs.hl(), 0x0120);
    run(&mut regs, &mut mem);
    assert_eq!(regs.hl(), 0x0123);
    assert_eq!(regs.flags(), Flags::empty());
}

#[test]
fn signed_stack_offsets() {
    // ADD SP,8 from 0xFFF8: carries from bits 3 and 7, Z cleared.
    let (mut regs, mut mem) = machine(&[0xE8, 0x08]);
    regs.sp = 0xFFF8;
    regs.set_flags(true, true, false, false);
    assert_eq!(run(&mut regs, &mut mem).cycles, 16);
    assert_eq!(regs.sp, 0x0000);
    assert_eq!(regs.flags(), Flags::H | Flags::C);

    // LD HL,SP-1 leaves SP alone.
    let (mut regs, mut mem) = machine(&[0xF8, 0xFF]);
    assert_eq!(run(&mut regs, &mut mem).cycles, 12);
    assert_eq!(regs.hl(), 0xFFFD);
    assert_eq!(regs.sp, 0xFFFE);
    assert_eq!(regs.flags(), Flags::H | Flags::C);

    // LD HL,SP+2 without carries ; LD SP,HL
    let (mut regs, mut mem) = machine(&[0xF8, 0x02, 0xF9]);
    regs.sp = 0xC000;
    run(&mut regs, &mut mem);
    assert_eq!(regs.hl(), 0xC002);
    assert_eq!(regs.flags(), Flags::empty());
    assert_eq!(run(&mut regs, &mut mem).cycles, 8);
    assert_eq!(regs.sp, 0xC002);
}
