/// Bit-level buffer for building segment payloads and data codewords
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty buffer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True if no bits were appended
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits in append order
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Append the low `len` bits of `value`, most significant first
    ///
    /// # Panics
    /// Panics if `len > 31` or `value` does not fit in `len` bits.
    pub fn append_bits(&mut self, value: u32, len: u8) {
        assert!(len <= 31 && value >> len == 0, "value out of range");
        self.bits.extend((0..len).rev().map(|i| (value >> i) & 1 == 1));
    }

    /// Append all bits of `other`
    pub fn append(&mut self, other: &BitBuffer) {
        self.bits.extend_from_slice(&other.bits);
    }

    /// Pack into bytes, most significant bit first; the last byte is zero-padded
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |byte, (i, &bit)| byte | (u8::from(bit) << (7 - i)))
            })
            .collect()
    }
}
