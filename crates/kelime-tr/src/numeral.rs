// Numerals written with digits.
//
// A digit token has no lexicon entry; its pronunciation is the Turkish
// reading of the number, which drives suffix harmony: "4'ten" (dört),
// "5'e" (beş), "100'ü" (yüz).

const ONES: [&str; 10] = [
    "", "bir", "iki", "\u{00FC}\u{00E7}", "d\u{00F6}rt", "be\u{015F}", "alt\u{0131}", "yedi",
    "sekiz", "dokuz",
];

const TENS: [&str; 10] = [
    "", "on", "yirmi", "otuz", "k\u{0131}rk", "elli", "altm\u{0131}\u{015F}", "yetmi\u{015F}",
    "seksen", "doksan",
];

/// Powers of a thousand, smallest first.
const SCALES: [&str; 7] = ["", "bin", "milyon", "milyar", "trilyon", "katrilyon", "kentilyon"];

const ZERO: &str = "s\u{0131}f\u{0131}r";
const DECIMAL_SEPARATOR_WORD: &str = "virg\u{00FC}l";

/// A number at the start of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPrefix<'a> {
    /// The number as written, separators included.
    pub text: &'a str,
    /// Has a decimal part after `,` (`12,5`).
    pub decimal: bool,
}

/// Find the number at the start of `token`: a digit run, then `.` + three
/// digit thousands groups, then an optional `,` + digits decimal part.
pub fn leading_number(token: &str) -> Option<NumberPrefix<'_>> {
    let bytes = token.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = digits_from(0);
    if end == 0 {
        return None;
    }
    while bytes.get(end) == Some(&b'.') && digits_from(end + 1) == 3 {
        end += 4;
    }
    let mut decimal = false;
    if bytes.get(end) == Some(&b',') {
        let fraction = digits_from(end + 1);
        if fraction > 0 {
            end += 1 + fraction;
            decimal = true;
        }
    }
    Some(NumberPrefix {
        text: &token[..end],
        decimal,
    })
}

/// Read an integer in Turkish: `123` → `yüz yirmi üç`.
pub fn read_integer(value: u64) -> String {
    if value == 0 {
        return ZERO.to_string();
    }
    let mut groups = Vec::new();
    let mut rest = value;
    while rest > 0 {
        groups.push((rest % 1000) as usize);
        rest /= 1000;
    }

    let mut words: Vec<&str> = Vec::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        // "bin", not "bir bin".
        if !(scale == 1 && group == 1) {
            push_hundreds(group, &mut words);
        }
        if scale > 0 {
            words.push(SCALES[scale]);
        }
    }
    words.join(" ")
}

fn push_hundreds(group: usize, words: &mut Vec<&'static str>) {
    let (hundreds, tens, ones) = (group / 100, group / 10 % 10, group % 10);
    if hundreds > 0 {
        if hundreds > 1 {
            words.push(ONES[hundreds]);
        }
        words.push("y\u{00FC}z");
    }
    if tens > 0 {
        words.push(TENS[tens]);
    }
    if ones > 0 {
        words.push(ONES[ones]);
    }
}

/// Read a written number: `12,5` → `on iki virgül beş`, `1.000` → `bin`.
///
/// Returns `None` when the text is not a number or does not fit in `u64`.
pub fn read_number(text: &str) -> Option<String> {
    let (integer, fraction) = match text.split_once(',') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text, None),
    };
    let mut groups = integer.split('.');
    let mut digits = groups.next()?.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        digits.push_str(group);
    }
    if !is_digits(&digits) {
        return None;
    }
    let mut out = read_integer(digits.parse().ok()?);

    if let Some(fraction) = fraction {
        if !is_digits(fraction) {
            return None;
        }
        out.push(' ');
        out.push_str(DECIMAL_SEPARATOR_WORD);
        let significant = fraction.trim_start_matches('0');
        for _ in 0..fraction.len() - significant.len() {
            out.push(' ');
            out.push_str(ZERO);
        }
        if !significant.is_empty() {
            out.push(' ');
            out.push_str(&read_integer(significant.parse().ok()?));
        }
    }
    Some(out)
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers() {
        assert_eq!(read_integer(0), "s\u{0131}f\u{0131}r");
        assert_eq!(read_integer(4), "d\u{00F6}rt");
        assert_eq!(read_integer(10), "on");
        assert_eq!(read_integer(12), "on iki");
        assert_eq!(read_integer(100), "y\u{00FC}z");
        assert_eq!(read_integer(123), "y\u{00FC}z yirmi \u{00FC}\u{00E7}");
        assert_eq!(read_integer(200), "iki y\u{00FC}z");
    }

    #[test]
    fn large_numbers() {
        assert_eq!(read_integer(1000), "bin");
        assert_eq!(read_integer(1001), "bin bir");
        assert_eq!(read_integer(2000), "iki bin");
        assert_eq!(read_integer(1_000_000), "bir milyon");
        assert_eq!(read_integer(3_000_050), "\u{00FC}\u{00E7} milyon elli");
        assert_eq!(read_integer(u64::MAX).split(' ').next(), Some("on"));
    }

    #[test]
    fn decimal_reading() {
        assert_eq!(
            read_number("12,5").as_deref(),
            Some("on iki virg\u{00FC}l be\u{015F}")
        );
        assert_eq!(
            read_number("0,05").as_deref(),
            Some("s\u{0131}f\u{0131}r virg\u{00FC}l s\u{0131}f\u{0131}r be\u{015F}")
        );
        assert_eq!(read_number("99999999999999999999999"), None);
        assert_eq!(read_number("abc"), None);
        assert_eq!(read_number("1,"), None);
    }

    #[test]
    fn thousands_groups() {
        assert_eq!(read_number("1.000").as_deref(), Some("bin"));
        assert_eq!(
            read_number("2.500.000").as_deref(),
            Some("iki milyon be\u{015F} y\u{00FC}z bin")
        );
        assert_eq!(
            read_number("1.000,5").as_deref(),
            Some("bin virg\u{00FC}l be\u{015F}")
        );
        assert_eq!(read_number("1.00"), None);
    }

    #[test]
    fn leading_number_boundaries() {
        assert_eq!(
            leading_number("4ten"),
            Some(NumberPrefix {
                text: "4",
                decimal: false
            })
        );
        assert_eq!(
            leading_number("12,5ten"),
            Some(NumberPrefix {
                text: "12,5",
                decimal: true
            })
        );
        assert_eq!(
            leading_number("1.000'e"),
            Some(NumberPrefix {
                text: "1.000",
                decimal: false
            })
        );
        // A dot is only a thousands separator before exactly three digits.
        assert_eq!(leading_number("3.5ten").map(|n| n.text), Some("3"));
        assert_eq!(leading_number("1.0000").map(|n| n.text), Some("1"));
        // A trailing separator without digits is not part of the number.
        assert_eq!(leading_number("3,a").map(|n| n.text), Some("3"));
        assert_eq!(leading_number("ten"), None);
    }
}
