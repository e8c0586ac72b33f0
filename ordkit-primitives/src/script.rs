//! Locking script parsing and assembly rendering.
//!
//! Opcode names follow the BSV conventions, so the restored opcodes
//! (`OP_CAT`, `OP_SPLIT`, `OP_MUL`, ...) keep their names and the locktime
//! opcodes are still the `OP_NOPn` placeholders.

use std::fmt;

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_IF: u8 = 0x63;
pub const OP_NOTIF: u8 = 0x64;
pub const OP_VERIF: u8 = 0x65;
pub const OP_VERNOTIF: u8 = 0x66;
pub const OP_ENDIF: u8 = 0x68;
pub const OP_RETURN: u8 = 0x6a;
pub const OP_DUP: u8 = 0x76;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    /// A push declared more bytes than the script has left
    #[error("Push at offset {offset} wants {wanted} bytes but only {available} remain")]
    Truncated {
        offset: usize,
        wanted: usize,
        available: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// A bare opcode
    Op(u8),
    /// A data push, along with the opcode that introduced it
    Push { op: u8, data: Vec<u8> },
    /// `OP_RETURN` outside of any conditional, carrying every byte after it
    Return(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    chunks: Vec<Chunk>,
}

impl Script {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ScriptError> {
        let mut chunks = Vec::new();
        let mut pos = 0;
        // Unbalanced `OP_ENDIF`s drive this negative, which also keeps a later
        // `OP_RETURN` from ending the script.
        let mut depth = 0isize;

        while pos < bytes.len() {
            let offset = pos;
            let op = bytes[pos];
            pos += 1;

            let chunk = match op {
                OP_RETURN if depth == 0 => {
                    chunks.push(Chunk::Return(bytes[pos..].to_vec()));
                    break;
                }
                0x01..=0x4b => Chunk::Push {
                    op,
                    data: take(bytes, &mut pos, offset, op as usize)?.to_vec(),
                },
                OP_PUSHDATA1 | OP_PUSHDATA2 | OP_PUSHDATA4 => {
                    let width = match op {
                        OP_PUSHDATA1 => 1,
                        OP_PUSHDATA2 => 2,
                        _ => 4,
                    };
                    let mut len = [0u8; 4];
                    len[..width].copy_from_slice(take(bytes, &mut pos, offset, width)?);
                    let len = u32::from_le_bytes(len) as usize;
                    Chunk::Push {
                        op,
                        data: take(bytes, &mut pos, offset, len)?.to_vec(),
                    }
                }
                _ => {
                    match op {
                        OP_IF | OP_NOTIF | OP_VERIF | OP_VERNOTIF => depth += 1,
                        OP_ENDIF => depth -= 1,
                        _ => {}
                    }
                    Chunk::Op(op)
                }
            };
            chunks.push(chunk);
        }

        Ok(Self { chunks })
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn to_asm(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chunk) in self.chunks.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match chunk {
                Chunk::Op(op) => write_opcode(f, *op)?,
                // An empty push leaves the same thing on the stack as OP_0
                Chunk::Push { data, .. } if data.is_empty() => f.write_str("OP_0")?,
                Chunk::Push { data, .. } => f.write_str(&hex::encode(data))?,
                Chunk::Return(data) if data.is_empty() => f.write_str("OP_RETURN")?,
                Chunk::Return(data) => write!(f, "OP_RETURN {}", hex::encode(data))?,
            }
        }
        Ok(())
    }
}

fn take<'a>(
    bytes: &'a [u8],
    pos: &mut usize,
    offset: usize,
    len: usize,
) -> Result<&'a [u8], ScriptError> {
    let available = bytes.len() - *pos;
    if len > available {
        return Err(ScriptError::Truncated {
            offset,
            wanted: len,
            available,
        });
    }
    let slice = &bytes[*pos..*pos + len];
    *pos += len;
    Ok(slice)
}

fn write_opcode(f: &mut fmt::Formatter<'_>, op: u8) -> fmt::Result {
    match op {
        0x51..=0x60 => write!(f, "OP_{}", op - 0x50),
        _ => match opcode_name(op) {
            Some(name) => f.write_str(name),
            None => write!(f, "OP_UNKNOWN{op}"),
        },
    }
}

/// Name of a non-push opcode, `OP_1`..`OP_16` excluded.
pub fn opcode_name(op: u8) -> Option<&'static str> {
    let name = match op {
        0x00 => "OP_0",
        0x4c => "OP_PUSHDATA1",
        0x4d => "OP_PUSHDATA2",
        0x4e => "OP_PUSHDATA4",
        0x4f => "OP_1NEGATE",
        0x50 => "OP_RESERVED",
        0x61 => "OP_NOP",
        0x62 => "OP_VER",
        0x63 => "OP_IF",
        0x64 => "OP_NOTIF",
        0x65 => "OP_VERIF",
        0x66 => "OP_VERNOTIF",
        0x67 => "OP_ELSE",
        0x68 => "OP_ENDIF",
        0x69 => "OP_VERIFY",
        0x6a => "OP_RETURN",
        0x6b => "OP_TOALTSTACK",
        0x6c => "OP_FROMALTSTACK",
        0x6d => "OP_2DROP",
        0x6e => "OP_2DUP",
        0x6f => "OP_3DUP",
        0x70 => "OP_2OVER",
        0x71 => "OP_2ROT",
        0x72 => "OP_2SWAP",
        0x73 => "OP_IFDUP",
        0x74 => "OP_DEPTH",
        0x75 => "OP_DROP",
        0x76 => "OP_DUP",
        0x77 => "OP_NIP",
        0x78 => "OP_OVER",
        0x79 => "OP_PICK",
        0x7a => "OP_ROLL",
        0x7b => "OP_ROT",
        0x7c => "OP_SWAP",
        0x7d => "OP_TUCK",
        0x7e => "OP_CAT",
        0x7f => "OP_SPLIT",
        0x80 => "OP_NUM2BIN",
        0x81 => "OP_BIN2NUM",
        0x82 => "OP_SIZE",
        0x83 => "OP_INVERT",
        0x84 => "OP_AND",
        0x85 => "OP_OR",
        0x86 => "OP_XOR",
        0x87 => "OP_EQUAL",
        0x88 => "OP_EQUALVERIFY",
        0x89 => "OP_RESERVED1",
        0x8a => "OP_RESERVED2",
        0x8b => "OP_1ADD",
        0x8c => "OP_1SUB",
        0x8d => "OP_2MUL",
        0x8e => "OP_2DIV",
        0x8f => "OP_NEGATE",
        0x90 => "OP_ABS",
        0x91 => "OP_NOT",
        0x92 => "OP_0NOTEQUAL",
        0x93 => "OP_ADD",
        0x94 => "OP_SUB",
        0x95 => "OP_MUL",
        0x96 => "OP_DIV",
        0x97 => "OP_MOD",
        0x98 => "OP_LSHIFT",
        0x99 => "OP_RSHIFT",
        0x9a => "OP_BOOLAND",
        0x9b => "OP_BOOLOR",
        0x9c => "OP_NUMEQUAL",
        0x9d => "OP_NUMEQUALVERIFY",
        0x9e => "OP_NUMNOTEQUAL",
        0x9f => "OP_LESSTHAN",
        0xa0 => "OP_GREATERTHAN",
        0xa1 => "OP_LESSTHANOREQUAL",
        0xa2 => "OP_GREATERTHANOREQUAL",
        0xa3 => "OP_MIN",
        0xa4 => "OP_MAX",
        0xa5 => "OP_WITHIN",
        0xa6 => "OP_RIPEMD160",
        0xa7 => "OP_SHA1",
        0xa8 => "OP_SHA256",
        0xa9 => "OP_HASH160",
        0xaa => "OP_HASH256",
        0xab => "OP_CODESEPARATOR",
        0xac => "OP_CHECKSIG",
        0xad => "OP_CHECKSIGVERIFY",
        0xae => "OP_CHECKMULTISIG",
        0xaf => "OP_CHECKMULTISIGVERIFY",
        0xb0 => "OP_NOP1",
        0xb1 => "OP_NOP2",
        0xb2 => "OP_NOP3",
        0xb3 => "OP_NOP4",
        0xb4 => "OP_NOP5",
        0xb5 => "OP_NOP6",
        0xb6 => "OP_NOP7",
        0xb7 => "OP_NOP8",
        0xb8 => "OP_NOP9",
        0xb9 => "OP_NOP10",
        0xfa => "OP_SMALLINTEGER",
        0xfb => "OP_PUBKEYS",
        0xfd => "OP_PUBKEYHASH",
        0xfe => "OP_PUBKEY",
        0xff => "OP_INVALIDOPCODE",
        _ => return None,
    };
    Some(name)
}
