/// Reed-Solomon error correction for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use crate::error::InvalidArgument;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

/// GF(256) field operations modulo 0x11D
pub struct Gf256;

impl Gf256 {
    /// Reducing polynomial x^8 + x^4 + x^3 + x^2 + 1
    pub const POLY: u16 = 0x11D;

    /// Russian peasant multiplication, high bit of `b` first
    pub fn mul(a: u8, b: u8) -> u8 {
        let x = a as u16;
        let mut z: u16 = 0;
        for i in (0..8).rev() {
            z = (z << 1) ^ ((z >> 7) * Self::POLY);
            z ^= ((b as u16 >> i) & 1) * x;
        }
        debug_assert!(z >> 8 == 0);
        z as u8
    }

    /// `a` raised to the `n`th power
    pub fn pow(a: u8, n: usize) -> u8 {
        (0..n).fold(1, |acc, _| Self::mul(acc, a))
    }
}

/// Computes Reed-Solomon ECC codewords for data blocks at a fixed degree
///
/// Immutable after construction, so one instance can serve every block of a
/// symbol (and every symbol) with the same number of ECC codewords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReedSolomonGenerator {
    /// Divisor polynomial coefficients, highest power first, without the leading 1
    divisor: Vec<u8>,
}

impl ReedSolomonGenerator {
    /// Generator with `degree` ECC codewords, in [1, 255]
    pub fn new(degree: usize) -> Result<Self, InvalidArgument> {
        if !(1..=255).contains(&degree) {
            return Err(InvalidArgument::DegreeOutOfRange(degree));
        }

        // Product of (x - r^i) for i in 0..degree, r = 0x02
        let mut divisor = vec![0u8; degree];
        divisor[degree - 1] = 1;
        let mut root: u8 = 1;
        for _ in 0..degree {
            for j in 0..degree {
                divisor[j] = Gf256::mul(divisor[j], root);
                if j + 1 < degree {
                    divisor[j] ^= divisor[j + 1];
                }
            }
            root = Gf256::mul(root, 0x02);
        }

        Ok(Self { divisor })
    }

    /// Number of ECC codewords produced per block
    pub fn degree(&self) -> usize {
        self.divisor.len()
    }

    /// Divisor coefficients, highest power first, leading 1 omitted
    pub fn coefficients(&self) -> &[u8] {
        &self.divisor
    }

    /// Remainder of `data * x^degree` divided by the generator polynomial
    pub fn remainder(&self, data: &[u8]) -> Result<Vec<u8>, InvalidArgument> {
        if data.is_empty() {
            return Err(InvalidArgument::EmptyData);
        }

        let degree = self.degree();
        let mut remainder = vec![0u8; degree];
        for &b in data {
            let factor = b ^ remainder[0];
            remainder.copy_within(1.., 0);
            remainder[degree - 1] = 0;
            for (r, &coeff) in remainder.iter_mut().zip(&self.divisor) {
                *r ^= Gf256::mul(coeff, factor);
            }
        }
        Ok(remainder)
    }
}

type GeneratorCache = RwLock<HashMap<usize, Arc<ReedSolomonGenerator>>>;

static GENERATORS: OnceLock<GeneratorCache> = OnceLock::new();

/// Shared generator for `degree`, built on first use
pub fn cached_generator(degree: usize) -> Result<Arc<ReedSolomonGenerator>, InvalidArgument> {
    let cache = GENERATORS.get_or_init(|| RwLock::new(HashMap::new()));

    if let Some(generator) = cache
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&degree)
    {
        return Ok(Arc::clone(generator));
    }

    let generator = Arc::new(ReedSolomonGenerator::new(degree)?);
    let mut cache = cache.write().unwrap_or_else(PoisonError::into_inner);
    Ok(Arc::clone(cache.entry(degree).or_insert(generator)))
}
