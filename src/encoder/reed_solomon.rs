/// Reed-Solomon parity generation for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
/// GF(256) field operations using log/exp tables
pub struct Gf256;

const PRIMITIVE: u16 = 0x11D;

const fn build_tables() -> ([u8; 256], [u8; 256]) {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE;
        }
        i += 1;
    }
    // alpha^255 = alpha^0
    exp[255] = 1;
    (exp, log)
}

const TABLES: ([u8; 256], [u8; 256]) = build_tables();
static EXP_TABLE: [u8; 256] = TABLES.0;
static LOG_TABLE: [u8; 256] = TABLES.1;

impl Gf256 {
    /// Field multiplication via log/exp lookup
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// alpha^n
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }

    /// a^n, with 0^0 = 1
    pub fn pow_usize(a: u8, n: usize) -> u8 {
        if a == 0 {
            return if n == 0 { 1 } else { 0 };
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let exp = (log_a * (n % 255)) % 255;
        EXP_TABLE[exp]
    }
}

/// Reed-Solomon encoder for a fixed number of parity codewords
#[derive(Debug, Clone)]
pub struct ReedSolomonEncoder {
    /// Non-leading generator coefficients, highest degree first
    divisor: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Build the generator polynomial with roots alpha^0 .. alpha^(num_ecc-1)
    pub fn new(num_ecc_codewords: usize) -> Self {
        // Ascending coefficients; gpoly[num_ecc] stays the monic leading 1
        let mut gpoly = vec![0u8; num_ecc_codewords + 1];
        gpoly[0] = 1;
        for i in 0..num_ecc_codewords {
            let root = Gf256::exp(i);
            // Multiply gpoly by (x - root) = (x + root) in GF(256)
            for j in (1..=i + 1).rev() {
                gpoly[j] = gpoly[j - 1] ^ Gf256::mul(gpoly[j], root);
            }
            gpoly[0] = Gf256::mul(gpoly[0], root);
        }

        let mut divisor = gpoly[..num_ecc_codewords].to_vec();
        divisor.reverse();
        Self { divisor }
    }

    /// Number of parity codewords produced by `encode`
    pub fn ecc_len(&self) -> usize {
        self.divisor.len()
    }

    /// Remainder of data * x^num_ecc divided by the generator
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let mut remainder = vec![0u8; self.divisor.len()];
        if remainder.is_empty() {
            return remainder;
        }
        for &d in data {
            let factor = d ^ remainder[0];
            remainder.rotate_left(1);
            if let Some(last) = remainder.last_mut() {
                *last = 0;
            }
            for (r, &g) in remainder.iter_mut().zip(&self.divisor) {
                *r ^= Gf256::mul(g, factor);
            }
        }
        remainder
    }

    /// True if every syndrome of `codeword` is zero
    pub fn is_codeword(&self, codeword: &[u8]) -> bool {
        let n = codeword.len();
        (0..self.divisor.len()).all(|i| {
            codeword.iter().enumerate().fold(0u8, |sum, (j, &c)| {
                // Descending convention: c[0] is coefficient of x^(n-1)
                sum ^ Gf256::mul(c, Gf256::pow_usize(Gf256::exp(i), n - 1 - j))
            }) == 0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf256_tables() {
        assert_eq!(Gf256::exp(0), 1);
        assert_eq!(Gf256::exp(8), 29);
        assert_eq!(Gf256::exp(255), 1);
        assert_eq!(LOG_TABLE[2], 1);
        assert_eq!(LOG_TABLE[29], 8);
    }

    #[test]
    fn test_gf256_basic() {
        // 0 * anything = 0
        assert_eq!(Gf256::mul(0, 5), 0);
        assert_eq!(Gf256::mul(5, 0), 0);
        assert_eq!(Gf256::mul(1, 123), 123);
        // alpha^7 * alpha = alpha^8 = 0x1D after reduction
        assert_eq!(Gf256::mul(128, 2), 29);
    }

    #[test]
    fn test_gf256_pow_usize() {
        assert_eq!(Gf256::pow_usize(2, 255), 1);
        assert_eq!(Gf256::pow_usize(2, 256), 2);
        assert_eq!(Gf256::pow_usize(2, 260), Gf256::pow_usize(2, 5));
        assert_eq!(Gf256::pow_usize(0, 10), 0);
        assert_eq!(Gf256::pow_usize(0, 0), 1);
    }

    #[test]
    fn test_generator_degree_7() {
        // g(x) for 7 ECC codewords, exponents of alpha: 0, 87, 229, 146, 149, 238, 102, 21
        let rs = ReedSolomonEncoder::new(7);
        let expected: Vec<u8> = [87, 229, 146, 149, 238, 102, 21]
            .iter()
            .map(|&e| Gf256::exp(e))
            .collect();
        assert_eq!(rs.divisor, expected);
    }

    #[test]
    fn test_parity_makes_codeword() {
        // Byte-mode header + "HELLO" + padding; data ++ parity must be divisible by g(x)
        let data = [0x40, 0x54, 0x84, 0x54, 0xC4, 0xC4, 0xF0, 0xEC, 0x11, 0xEC];
        let rs = ReedSolomonEncoder::new(7);
        let parity = rs.encode(&data);
        assert_eq!(parity.len(), 7);

        let mut codeword = data.to_vec();
        codeword.extend_from_slice(&parity);
        assert!(rs.is_codeword(&codeword));

        codeword[2] ^= 0x01;
        assert!(!rs.is_codeword(&codeword));
    }

    #[test]
    fn test_iso_annex_example() {
        // ISO 18004 Annex I: 1-M "01234567" data codewords and their 10 ECC codewords
        let data = [
            0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
            0xEC, 0x11,
        ];
        let rs = ReedSolomonEncoder::new(10);
        assert_eq!(
            rs.encode(&data),
            vec![0xA5, 0x24, 0xD4, 0xC1, 0xED, 0x36, 0xC7, 0x87, 0x2C, 0x55]
        );
    }

    #[test]
    fn test_zero_data_zero_parity() {
        let rs = ReedSolomonEncoder::new(10);
        assert_eq!(rs.encode(&[0u8; 16]), vec![0u8; 10]);
        assert_eq!(ReedSolomonEncoder::new(0).encode(&[1, 2, 3]), Vec::<u8>::new());
    }
}
