const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

/// Word-conversion capability: spells a non-negative integer as English
/// text numerals, e.g. 21 -> "twenty-one". Injected so the UI layer can
/// swap it for another language or stub it in tests.
pub trait NumeralSpeller: Send + Sync {
    fn spell(&self, n: u64) -> String;
}

/// Default short-scale English speller: hyphenated tens, space-joined
/// thousand groups, no "and".
pub struct EnglishNumerals;

impl NumeralSpeller for EnglishNumerals {
    fn spell(&self, n: u64) -> String {
        spell_number(n)
    }
}

fn spell_number(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut groups = Vec::new();
    let mut rest = n;
    let mut scale = 0;
    while rest > 0 {
        let group = (rest % 1000) as usize;
        if group > 0 {
            let mut words = spell_group(group);
            if !SCALES[scale].is_empty() {
                words.push(' ');
                words.push_str(SCALES[scale]);
            }
            groups.push(words);
        }
        rest /= 1000;
        scale += 1;
    }

    groups.reverse();
    groups.join(" ")
}

fn spell_group(n: usize) -> String {
    debug_assert!(n > 0 && n < 1000);
    let mut words = String::new();
    if n >= 100 {
        words.push_str(ONES[n / 100]);
        words.push_str(" hundred");
    }

    let tail = n % 100;
    if tail > 0 {
        if !words.is_empty() {
            words.push(' ');
        }
        words.push_str(&spell_tail(tail));
    }
    words
}

fn spell_tail(n: usize) -> String {
    if n < 20 {
        return ONES[n].to_string();
    }

    let tens = TENS[n / 10];
    match n % 10 {
        0 => tens.to_string(),
        unit => format!("{tens}-{}", ONES[unit]),
    }
}

#[cfg(test)]
#[path = "tests/numerals_tests.rs"]
mod tests;
