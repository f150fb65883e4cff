//! Base (unprefixed) opcode table.
//!
//! Lengths include the opcode byte. Cycle counts are clock cycles; rows
//! built with [`Instruction::branch`] list the not-taken cost first.

use super::exec::alu::*;
use super::exec::control::*;
use super::exec::incdec::*;
use super::exec::ld::*;
use super::exec::stack::*;
use super::exec::system::*;
use super::Instruction;

#[rustfmt::skip]
pub static BASE: [Instruction; 256] = [
    /* 0x00 */ Instruction::new("NOP", 1, 4, nop),
    /* 0x01 */ Instruction::new("LD BC,d16", 3, 12, ld_rr_d16),
    /* 0x02 */ Instruction::new("LD (BC),A", 1, 8, ld_indirect_a),
    /* 0x03 */ Instruction::new("INC BC", 1, 8, inc_rr),
    /* 0x04 */ Instruction::new("INC B", 1, 4, inc_r),
    /* 0x05 */ Instruction::new("DEC B", 1, 4, dec_r),
    /* 0x06 */ Instruction::new("LD B,d8", 2, 8, ld_r_d8),
    /* 0x07 */ Instruction::new("RLCA", 1, 4, rotate_a),
    /* 0x08 */ Instruction::new("LD (a16),SP", 3, 20, ld_a16_sp),
    /* 0x09 */ Instruction::new("ADD HL,BC", 1, 8, add_hl_rr),
    /* 0x0A */ Instruction::new("LD A,(BC)", 1, 8, ld_a_indirect),
    /* 0x0B */ Instruction::new("DEC BC", 1, 8, dec_rr),
    /* 0x0C */ Instruction::new("INC C", 1, 4, inc_r),
    /* 0x0D */ Instruction::new("DEC C", 1, 4, dec_r),
    /* 0x0E */ Instruction::new("LD C,d8", 2, 8, ld_r_d8),
    /* 0x0F */ Instruction::new("RRCA", 1, 4, rotate_a),
    /* 0x10 */ Instruction::new("STOP 0", 2, 4, stop),
    /* 0x11 */ Instruction::new("LD DE,d16", 3, 12, ld_rr_d16),
    /* 0x12 */ Instruction::new("LD (DE),A", 1, 8, ld_indirect_a),
    /* 0x13 */ Instruction::new("INC DE", 1, 8, inc_rr),
    /* 0x14 */ Instruction::new("INC D", 1, 4, inc_r),
    /* 0x15 */ Instruction::new("DEC D", 1, 4, dec_r),
    /* 0x16 */ Instruction::new("LD D,d8", 2, 8, ld_r_d8),
    /* 0x17 */ Instruction::new("RLA", 1, 4, rotate_a),
    /* 0x18 */ Instruction::new("JR r8", 2, 12, jr),
    /* 0x19 */ Instruction::new("ADD HL,DE", 1, 8, add_hl_rr),
    /* 0x1A */ Instruction::new("LD A,(DE)", 1, 8, ld_a_indirect),
    /* 0x1B */ Instruction::new("DEC DE", 1, 8, dec_rr),
    /* 0x1C */ Instruction::new("INC E", 1, 4, inc_r),
    /* 0x1D */ Instruction::new("DEC E", 1, 4, dec_r),
    /* 0x1E */ Instruction::new("LD E,d8", 2, 8, ld_r_d8),
    /* 0x1F */ Instruction::new("RRA", 1, 4, rotate_a),
    /* 0x20 */ Instruction::branch("JR NZ,r8", 2, 8, 12, jr_cc),
    /* 0x21 */ Instruction::new("LD HL,d16", 3, 12, ld_rr_d16),
    /* 0x22 */ Instruction::new("LD (HL+),A", 1, 8, ld_indirect_a),
    /* 0x23 */ Instruction::new("INC HL", 1, 8, inc_rr),
    /* 0x24 */ Instruction::new("INC H", 1, 4, inc_r),
    /* 0x25 */ Instruction::new("DEC H", 1, 4, dec_r),
    /* 0x26 */ Instruction::new("LD H,d8", 2, 8, ld_r_d8),
    /* 0x27 */ Instruction::new("DAA", 1, 4, daa),
    /* 0x28 */ Instruction::branch("JR Z,r8", 2, 8, 12, jr_cc),
    /* 0x29 */ Instruction::new("ADD HL,HL", 1, 8, add_hl_rr),
    /* 0x2A */ Instruction::new("LD A,(HL+)", 1, 8, ld_a_indirect),
    /* 0x2B */ Instruction::new("DEC HL", 1, 8, dec_rr),
    /* 0x2C */ Instruction::new("INC L", 1, 4, inc_r),
    /* 0x2D */ Instruction::new("DEC L", 1, 4, dec_r),
    /* 0x2E */ Instruction::new("LD L,d8", 2, 8, ld_r_d8),
    /* 0x2F */ Instruction::new("CPL", 1, 4, cpl),
    /* 0x30 */ Instruction::branch("JR NC,r8", 2, 8, 12, jr_cc),
    /* 0x31 */ Instruction::new("LD SP,d16", 3, 12, ld_rr_d16),
    /* 0x32 */ Instruction::new("LD (HL-),A", 1, 8, ld_indirect_a),
    /* 0x33 */ Instruction::new("INC SP", 1, 8, inc_rr),
    /* 0x34 */ Instruction::new("INC (HL)", 1, 12, inc_r),
    /* 0x35 */ Instruction::new("DEC (HL)", 1, 12, dec_r),
    /* 0x36 */ Instruction::new("LD (HL),d8", 2, 12, ld_r_d8),
    /* 0x37 */ Instruction::new("SCF", 1, 4, scf),
    /* 0x38 */ Instruction::branch("JR C,r8", 2, 8, 12, jr_cc),
    /* 0x39 */ Instruction::new("ADD HL,SP", 1, 8, add_hl_rr),
    /* 0x3A */ Instruction::new("LD A,(HL-)", 1, 8, ld_a_indirect),
    /* 0x3B */ Instruction::new("DEC SP", 1, 8, dec_rr),
    /* 0x3C */ Instruction::new("INC A", 1, 4, inc_r),
    /* 0x3D */ Instruction::new("DEC A", 1, 4, dec_r),
    /* 0x3E */ Instruction::new("LD A,d8", 2, 8, ld_r_d8),
    /* 0x3F */ Instruction::new("CCF", 1, 4, ccf),
    /* 0x40 */ Instruction::new("LD B,B", 1, 4, ld_r_r),
    /* 0x41 */ Instruction::new("LD B,C", 1, 4, ld_r_r),
    /* 0x42 */ Instruction::new("LD B,D", 1, 4, ld_r_r),
    /* 0x43 */ Instruction::new("LD B,E", 1, 4, ld_r_r),
    /* 0x44 */ Instruction::new("LD B,H", 1, 4, ld_r_r),
    /* 0x45 */ Instruction::new("LD B,L", 1, 4, ld_r_r),
    /* 0x46 */ Instruction::new("LD B,(HL)", 1, 8, ld_r_r),
    /* 0x47 */ Instruction::new("LD B,A", 1, 4, ld_r_r),
    /* 0x48 */ Instruction::new("LD C,B", 1, 4, ld_r_r),
    /* 0x49 */ Instruction::new("LD C,C", 1, 4, ld_r_r),
    /* 0x4A */ Instruction::new("LD C,D", 1, 4, ld_r_r),
    /* 0x4B */ Instruction::new("LD C,E", 1, 4, ld_r_r),
    /* 0x4C */ Instruction::new("LD C,H", 1, 4, ld_r_r),
    /* 0x4D */ Instruction::new("LD C,L", 1, 4, ld_r_r),
    /* 0x4E */ Instruction::new("LD C,(HL)", 1, 8, ld_r_r),
    /* 0x4F */ Instruction::new("LD C,A", 1, 4, ld_r_r),
    /* 0x50 */ Instruction::new("LD D,B", 1, 4, ld_r_r),
    /* 0x51 */ Instruction::new("LD D,C", 1, 4, ld_r_r),
    /* 0x52 */ Instruction::new("LD D,D", 1, 4, ld_r_r),
    /* 0x53 */ Instruction::new("LD D,E", 1, 4, ld_r_r),
    /* 0x54 */ Instruction::new("LD D,H", 1, 4, ld_r_r),
    /* 0x55 */ Instruction::new("LD D,L", 1, 4, ld_r_r),
    /* 0x56 */ Instruction::new("LD D,(HL)", 1, 8, ld_r_r),
    /* 0x57 */ Instruction::new("LD D,A", 1, 4, ld_r_r),
    /* 0x58 */ Instruction::new("LD E,B", 1, 4, ld_r_r),
    /* 0x59 */ Instruction::new("LD E,C", 1, 4, ld_r_r),
    /* 0x5A */ Instruction::new("LD E,D", 1, 4, ld_r_r),
    /* 0x5B */ Instruction::new("LD E,E", 1, 4, ld_r_r),
    /* 0x5C */ Instruction::new("LD E,H", 1, 4, ld_r_r),
    /* 0x5D */ Instruction::new("LD E,L", 1, 4, ld_r_r),
    /* 0x5E */ Instruction::new("LD E,(HL)", 1, 8, ld_r_r),
    /* 0x5F */ Instruction::new("LD E,A", 1, 4, ld_r_r),
    /* 0x60 */ Instruction::new("LD H,B", 1, 4, ld_r_r),
    /* 0x61 */ Instruction::new("LD H,C", 1, 4, ld_r_r),
    /* 0x62 */ Instruction::new("LD H,D", 1, 4, ld_r_r),
    /* 0x63 */ Instruction::new("LD H,E", 1, 4, ld_r_r),
    /* 0x64 */ Instruction::new("LD H,H", 1, 4, ld_r_r),
    /* 0x65 */ Instruction::new("LD H,L", 1, 4, ld_r_r),
    /* 0x66 */ Instruction::new("LD H,(HL)", 1, 8, ld_r_r),
    /* 0x67 */ Instruction::new("LD H,A", 1, 4, ld_r_r),
    /* 0x68 */ Instruction::new("LD L,B", 1, 4, ld_r_r),
    /* 0x69 */ Instruction::new("LD L,C", 1, 4, ld_r_r),
    /* 0x6A */ Instruction::new("LD L,D", 1, 4, ld_r_r),
    /* 0x6B */ Instruction::new("LD L,E", 1, 4, ld_r_r),
    /* 0x6C */ Instruction::new("LD L,H", 1, 4, ld_r_r),
    /* 0x6D */ Instruction::new("LD L,L", 1, 4, ld_r_r),
    /* 0x6E */ Instruction::new("LD L,(HL)", 1, 8, ld_r_r),
    /* 0x6F */ Instruction::new("LD L,A", 1, 4, ld_r_r),
    /* 0x70 */ Instruction::new("LD (HL),B", 1, 8, ld_r_r),
    /* 0x71 */ Instruction::new("LD (HL),C", 1, 8, ld_r_r),
    /* 0x72 */ Instruction::new("LD (HL),D", 1, 8, ld_r_r),
    /* 0x73 */ Instruction::new("LD (HL),E", 1, 8, ld_r_r),
    /* 0x74 */ Instruction::new("LD (HL),H", 1, 8, ld_r_r),
    /* 0x75 */ Instruction::new("LD (HL),L", 1, 8, ld_r_r),
    /* 0x76 */ Instruction::new("HALT", 1, 4, halt),
    /* 0x77 */ Instruction::new("LD (HL),A", 1, 8, ld_r_r),
    /* 0x78 */ Instruction::new("LD A,B", 1, 4, ld_r_r),
    /* 0x79 */ Instruction::new("LD A,C", 1, 4, ld_r_r),
    /* 0x7A */ Instruction::new("LD A,D", 1, 4, ld_r_r),
    /* 0x7B */ Instruction::new("LD A,E", 1, 4, ld_r_r),
    /* 0x7C */ Instruction::new("LD A,H", 1, 4, ld_r_r),
    /* 0x7D */ Instruction::new("LD A,L", 1, 4, ld_r_r),
    /* 0x7E */ Instruction::new("LD A,(HL)", 1, 8, ld_r_r),
    /* 0x7F */ Instruction::new("LD A,A", 1, 4, ld_r_r),
    /* 0x80 */ Instruction::new("ADD A,B", 1, 4, alu_r),
    /* 0x81 */ Instruction::new("ADD A,C", 1, 4, alu_r),
    /* 0x82 */ Instruction::new("ADD A,D", 1, 4, alu_r),
    /* 0x83 */ Instruction::new("ADD A,E", 1, 4, alu_r),
    /* 0x84 */ Instruction::new("ADD A,H", 1, 4, alu_r),
    /* 0x85 */ Instruction::new("ADD A,L", 1, 4, alu_r),
    /* 0x86 */ Instruction::new("ADD A,(HL)", 1, 8, alu_r),
    /* 0x87 */ Instruction::new("ADD A,A", 1, 4, alu_r),
    /* 0x88 */ Instruction::new("ADC A,B", 1, 4, alu_r),
    /* 0x89 */ Instruction::new("ADC A,C", 1, 4, alu_r),
    /* 0x8A */ Instruction::new("ADC A,D", 1, 4, alu_r),
    /* 0x8B */ Instruction::new("ADC A,E", 1, 4, alu_r),
    /* 0x8C */ Instruction::new("ADC A,H", 1, 4, alu_r),
    /* 0x8D */ Instruction::new("ADC A,L", 1, 4, alu_r),
    /* 0x8E */ Instruction::new("ADC A,(HL)", 1, 8, alu_r),
    /* 0x8F */ Instruction::new("ADC A,A", 1, 4, alu_r),
    /* 0x90 */ Instruction::new("SUB B", 1, 4, alu_r),
    /* 0x91 */ Instruction::new("SUB C", 1, 4, alu_r),
    /* 0x92 */ Instruction::new("SUB D", 1, 4, alu_r),
    /* 0x93 */ Instruction::new("SUB E", 1, 4, alu_r),
    /* 0x94 */ Instruction::new("SUB H", 1, 4, alu_r),
    /* 0x95 */ Instruction::new("SUB L", 1, 4, alu_r),
    /* 0x96 */ Instruction::new("SUB (HL)", 1, 8, alu_r),
    /* 0x97 */ Instruction::new("SUB A", 1, 4, alu_r),
    /* 0x98 */ Instruction::new("SBC A,B", 1, 4, alu_r),
    /* 0x99 */ Instruction::new("SBC A,C", 1, 4, alu_r),
    /* 0x9A */ Instruction::new("SBC A,D", 1, 4, alu_r),
    /* 0x9B */ Instruction::new("SBC A,E", 1, 4, alu_r),
    /* 0x9C */ Instruction::new("SBC A,H", 1, 4, alu_r),
    /* 0x9D */ Instruction::new("SBC A,L", 1, 4, alu_r),
    /* 0x9E */ Instruction::new("SBC A,(HL)", 1, 8, alu_r),
    /* 0x9F */ Instruction::new("SBC A,A", 1, 4, alu_r),
    /* 0xA0 */ Instruction::new("AND B", 1, 4, alu_r),
    /* 0xA1 */ Instruction::new("AND C", 1, 4, alu_r),
    /* 0xA2 */ Instruction::new("AND D", 1, 4, alu_r),
    /* 0xA3 */ Instruction::new("AND E", 1, 4, alu_r),
    /* 0xA4 */ Instruction::new("AND H", 1, 4, alu_r),
    /* 0xA5 */ Instruction::new("AND L", 1, 4, alu_r),
    /* 0xA6 */ Instruction::new("AND (HL)", 1, 8, alu_r),
    /* 0xA7 */ Instruction::new("AND A", 1, 4, alu_r),
    /* 0xA8 */ Instruction::new("XOR B", 1, 4, alu_r),
    /* 0xA9 */ Instruction::new("XOR C", 1, 4, alu_r),
    /* 0xAA */ Instruction::new("XOR D", 1, 4, alu_r),
    /* 0xAB */ Instruction::new("XOR E", 1, 4, alu_r),
    /* 0xAC */ Instruction::new("XOR H", 1, 4, alu_r),
    /* 0xAD */ Instruction::new("XOR L", 1, 4, alu_r),
    /* 0xAE */ Instruction::new("XOR (HL)", 1, 8, alu_r),
    /* 0xAF */ Instruction::new("XOR A", 1, 4, alu_r),
    /* 0xB0 */ Instruction::new("OR B", 1, 4, alu_r),
    /* 0xB1 */ Instruction::new("OR C", 1, 4, alu_r),
    /* 0xB2 */ Instruction::new("OR D", 1, 4, alu_r),
    /* 0xB3 */ Instruction::new("OR E", 1, 4, alu_r),
    /* 0xB4 */ Instruction::new("OR H", 1, 4, alu_r),
    /* 0xB5 */ Instruction::new("OR L", 1, 4, alu_r),
    /* 0xB6 */ Instruction::new("OR (HL)", 1, 8, alu_r),
    /* 0xB7 */ Instruction::new("OR A", 1, 4, alu_r),
    /* 0xB8 */ Instruction::new("CP B", 1, 4, alu_r),
    /* 0xB9 */ Instruction::new("CP C", 1, 4, alu_r),
    /* 0xBA */ Instruction::new("CP D", 1, 4, alu_r),
    /* 0xBB */ Instruction::new("CP E", 1, 4, alu_r),
    /* 0xBC */ Instruction::new("CP H", 1, 4, alu_r),
    /* 0xBD */ Instruction::new("CP L", 1, 4, alu_r),
    /* 0xBE */ Instruction::new("CP (HL)", 1, 8, alu_r),
    /* 0xBF */ Instruction::new("CP A", 1, 4, alu_r),
    /* 0xC0 */ Instruction::branch("RET NZ", 1, 8, 20, ret_cc),
    /* 0xC1 */ Instruction::new("POP BC", 1, 12, pop),
    /* 0xC2 */ Instruction::branch("JP NZ,a16", 3, 12, 16, jp_cc),
    /* 0xC3 */ Instruction::new("JP a16", 3, 16, jp),
    /* 0xC4 */ Instruction::branch("CALL NZ,a16", 3, 12, 24, call_cc),
    /* 0xC5 */ Instruction::new("PUSH BC", 1, 16, push),
    /* 0xC6 */ Instruction::new("ADD A,d8", 2, 8, alu_d8),
    /* 0xC7 */ Instruction::new("RST 00H", 1, 16, rst),
    /* 0xC8 */ Instruction::branch("RET Z", 1, 8, 20, ret_cc),
    /* 0xC9 */ Instruction::new("RET", 1, 16, ret),
    /* 0xCA */ Instruction::branch("JP Z,a16", 3, 12, 16, jp_cc),
    /* 0xCB */ Instruction::new("PREFIX CB", 1, 4, prefix),
    /* 0xCC */ Instruction::branch("CALL Z,a16", 3, 12, 24, call_cc),
    /* 0xCD */ Instruction::new("CALL a16", 3, 24, call),
    /* 0xCE */ Instruction::new("ADC A,d8", 2, 8, alu_d8),
    /* 0xCF */ Instruction::new("RST 08H", 1, 16, rst),
    /* 0xD0 */ Instruction::branch("RET NC", 1, 8, 20, ret_cc),
    /* 0xD1 */ Instruction::new("POP DE", 1, 12, pop),
    /* 0xD2 */ Instruction::branch("JP NC,a16", 3, 12, 16, jp_cc),
    /* 0xD3 */ Instruction::new("???", 1, 0, illegal),
    /* 0xD4 */ Instruction::branch("CALL NC,a16", 3, 12, 24, call_cc),
    /* 0xD5 */ Instruction::new("PUSH DE", 1, 16, push),
    /* 0xD6 */ Instruction::new("SUB d8", 2, 8, alu_d8),
    /* 0xD7 */ Instruction::new("RST 10H", 1, 16, rst),
    /* 0xD8 */ Instruction::branch("RET C", 1, 8, 20, ret_cc),
    /* 0xD9 */ Instruction::new("RETI", 1, 16, reti),
    /* 0xDA */ Instruction::branch("JP C,a16", 3, 12, 16, jp_cc),
    /* 0xDB */ Instruction::new("???", 1, 0, illegal),
    /* 0xDC */ Instruction::branch("CALL C,a16", 3, 12, 24, call_cc),
    /* 0xDD */ Instruction::new("???", 1, 0, illegal),
    /* 0xDE */ Instruction::new("SBC A,d8", 2, 8, alu_d8),
    /* 0xDF */ Instruction::new("RST 18H", 1, 16, rst),
    /* 0xE0 */ Instruction::new("LDH (a8),A", 2, 12, ldh_a8),
    /* 0xE1 */ Instruction::new("POP HL", 1, 12, pop),
    /* 0xE2 */ Instruction::new("LD (C),A", 1, 8, ldh_c),
    /* 0xE3 */ Instruction::new("???", 1, 0, illegal),
    /* 0xE4 */ Instruction::new("???", 1, 0, illegal),
    /* 0xE5 */ Instruction::new("PUSH HL", 1, 16, push),
    /* 0xE6 */ Instruction::new("AND d8", 2, 8, alu_d8),
    /* 0xE7 */ Instruction::new("RST 20H", 1, 16, rst),
    /* 0xE8 */ Instruction::new("ADD SP,r8", 2, 16, add_sp_r8),
    /* 0xE9 */ Instruction::new("JP (HL)", 1, 4, jp_hl),
    /* 0xEA */ Instruction::new("LD (a16),A", 3, 16, ld_a16_a),
    /* 0xEB */ Instruction::new("???", 1, 0, illegal),
    /* 0xEC */ Instruction::new("???", 1, 0, illegal),
    /* 0xED */ Instruction::new("???", 1, 0, illegal),
    /* 0xEE */ Instruction::new("XOR d8", 2, 8, alu_d8),
    /* 0xEF */ Instruction::new("RST 28H", 1, 16, rst),
    /* 0xF0 */ Instruction::new("LDH A,(a8)", 2, 12, ldh_a8),
    /* 0xF1 */ Instruction::new("POP AF", 1, 12, pop),
    /* 0xF2 */ Instruction::new("LD A,(C)", 1, 8, ldh_c),
    /* 0xF3 */ Instruction::new("DI", 1, 4, di_ei),
    /* 0xF4 */ Instruction::new("???", 1, 0, illegal),
    /* 0xF5 */ Instruction::new("PUSH AF", 1, 16, push),
    /* 0xF6 */ Instruction::new("OR d8", 2, 8, alu_d8),
    /* 0xF7 */ Instruction::new("RST 30H", 1, 16, rst),
    /* 0xF8 */ Instruction::new("LD HL,SP+r8", 2, 12, ld_hl_sp_r8),
    /* 0xF9 */ Instruction::new("LD SP,HL", 1, 8, ld_sp_hl),
    /* 0xFA */ Instruction::new("LD A,(a16)", 3, 16, ld_a16_a),
    /* 0xFB */ Instruction::new("EI", 1, 4, di_ei),
    /* 0xFC */ Instruction::new("???", 1, 0, illegal),
    /* 0xFD */ Instruction::new("???", 1, 0, illegal),
    /* 0xFE */ Instruction::new("CP d8", 2, 8, alu_d8),
    /* 0xFF */ Instruction::new("RST 38H", 1, 16, rst),
];
