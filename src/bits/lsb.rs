//! Least-significant-bit access on color channel values.

/// Return `value` with bit 0 forced to `bit`, all other bits unchanged.
#[inline]
pub fn set_lsb(value: u8, bit: bool) -> u8 {
    if bit {
        value | 1
    } else {
        value & !1
    }
}

/// Whether bit 0 of `value` is set.
#[inline]
pub fn get_lsb(value: u8) -> bool {
    value & 1 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_lsb_only_touches_bit_zero() {
        for value in 0..=u8::MAX {
            assert_eq!(set_lsb(value, true), value | 1);
            assert_eq!(set_lsb(value, false), value & 0xFE);
            assert_eq!(set_lsb(value, true) & 0xFE, value & 0xFE);
        }
    }

    #[test]
    fn test_get_lsb() {
        assert!(!get_lsb(0));
        assert!(get_lsb(1));
        assert!(get_lsb(0xFF));
        assert!(!get_lsb(0xFE));
        assert!(get_lsb(set_lsb(0x80, true)));
    }
}
