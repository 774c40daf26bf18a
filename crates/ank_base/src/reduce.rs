//! Digit reduction: the repeated digit sum at the root of every number here.

/// Master numbers that halt reduction when preservation is enabled.
pub const MASTER_NUMBERS: [u64; 3] = [11, 22, 33];

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeated digit sum until a single digit remains. `0` stays `0`.
pub fn reduce_to_digit(n: u64) -> u8 {
    reduce_with_masters(n, false)
}

/// Like [`reduce_to_digit`], but stops at 11, 22 or 33 when
/// `preserve_masters` is set.
pub fn reduce_with_masters(n: u64, preserve_masters: bool) -> u8 {
    let mut n = n;
    while n > 9 {
        if preserve_masters && MASTER_NUMBERS.contains(&n) {
            break;
        }
        n = digit_sum(n);
    }
    n as u8
}

/// Reduce the digits found anywhere in `s`. Non-digit characters are ignored;
/// a string without digits reduces to `0`.
pub fn reduce_digit_string(s: &str) -> u8 {
    let sum: u64 = s
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(u64::from)
        .sum();
    reduce_to_digit(sum)
}

/// Vibration of an arbitrary number-bearing string (house, vehicle, account).
///
/// `None` when the string carries no digit at all.
pub fn asset_vibration(s: &str) -> Option<u8> {
    if s.chars().any(|c| c.is_ascii_digit()) {
        Some(reduce_digit_string(s))
    } else {
        None
    }
}

/// Cyclic successor on 1..=9: 9 wraps to 1.
///
/// Values outside 1..=9 are first reduced, with `0` treated as 9.
pub const fn next_number(n: u8) -> u8 {
    let n = if n == 0 { 9 } else { (n - 1) % 9 + 1 };
    if n >= 9 { 1 } else { n + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_to_single_digit() {
        assert_eq!(reduce_to_digit(0), 0);
        assert_eq!(reduce_to_digit(7), 7);
        assert_eq!(reduce_to_digit(22), 4);
        assert_eq!(reduce_to_digit(2014), 7);
        assert_eq!(reduce_to_digit(99_999), 9);
    }

    #[test]
    fn masters_only_when_asked() {
        assert_eq!(reduce_with_masters(29, true), 11);
        assert_eq!(reduce_with_masters(29, false), 2);
        assert_eq!(reduce_with_masters(22, true), 22);
        assert_eq!(reduce_with_masters(33, true), 33);
        assert_eq!(reduce_with_masters(44, true), 8);
    }

    #[test]
    fn digit_string_ignores_noise() {
        assert_eq!(reduce_digit_string("MH-12 AB 3456"), 3);
        assert_eq!(reduce_digit_string("no digits"), 0);
    }

    #[test]
    fn vibration_none_without_digits() {
        assert_eq!(asset_vibration("Flat 402"), Some(6));
        assert_eq!(asset_vibration("Rosewood"), None);
    }

    #[test]
    fn next_wraps() {
        assert_eq!(next_number(9), 1);
        assert_eq!(next_number(1), 2);
        assert_eq!(next_number(8), 9);
    }
}
