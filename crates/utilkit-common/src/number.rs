//! Decimal rounding and small numeric formatting helpers.

/// Round `number` half-up (ties away from zero) to `ndigits` decimal places.
///
/// Rounding happens on the shortest decimal representation of the float, so values such as
/// `0.125` and `0.155` round the way they read: `0.13` and `0.16`.
pub fn round_half_up(number: f64, ndigits: u32) -> f64 {
    if !number.is_finite() {
        return number;
    }

    let repr = number.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let ndigits = ndigits as usize;
    if frac_part.len() <= ndigits {
        return number;
    }

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(ndigits))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes()[ndigits] >= b'5' {
        carry_one(&mut digits);
    }

    let split = digits.len() - ndigits;
    let mut text: String = digits[..split].iter().map(|d| char::from(b'0' + d)).collect();
    if ndigits > 0 {
        text.push('.');
        text.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }

    text.parse::<f64>().map_or(number, |v| v.copysign(number))
}

fn carry_one(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

/// Round an integer half-up to a multiple of `10^ndigits` (`10500, 3` -> `11000`).
pub fn round_half_up_int(number: i64, ndigits: u32) -> i64 {
    let Some(unit) = 10i128.checked_pow(ndigits) else {
        return 0;
    };

    let magnitude = (i128::from(number).abs() + unit / 2) / unit * unit;
    let rounded = if number < 0 { -magnitude } else { magnitude };
    i64::try_from(rounded).unwrap_or(if number < 0 { i64::MIN } else { i64::MAX })
}

/// The decimal digit of `number` at `position` (0 is the ones digit, 1 the tens, ...).
pub fn get_number(number: i64, position: u32) -> u8 {
    match 10u64.checked_pow(position) {
        Some(unit) => ((number.unsigned_abs() / unit) % 10) as u8,
        None => 0,
    }
}

/// `part / total` as a percentage rounded to two decimals; a zero `total` gives `0.0`.
pub fn percentage(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        return 0.0;
    }
    round_half_up(part / total * 100.0, 2)
}

/// [`percentage`] formatted as `"12.34%"`.
pub fn format_percentage(part: f64, total: f64) -> String {
    format!("{:.2}%", percentage(part, total))
}
