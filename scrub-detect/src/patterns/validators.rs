/// Luhn checksum over the digits of a candidate card number. Separators
/// (spaces, dashes) are ignored; anything else disqualifies the match.
pub fn luhn_valid(candidate: &str) -> bool {
    let mut digits = Vec::with_capacity(19);
    for c in candidate.chars() {
        match c {
            '0'..='9' => digits.push(c as u32 - '0' as u32),
            ' ' | '-' => {}
            _ => return false,
        }
    }
    if digits.len() < 12 {
        return false;
    }

    let mut sum = 0;
    for (i, d) in digits.iter().rev().enumerate() {
        let mut d = *d;
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    sum % 10 == 0
}
