use anyhow::{Result, bail};
use rand::{Rng, rng};
use regex::Regex;

/// Generates a Mastercard-style 16-digit card number (issuer prefix 51-55).
pub fn random_card_number() -> Result<String> {
    let mut rng = rng();

    let random_digits: String = (0..14)
        .map(|_| rng.random_range(0..10).to_string())
        .collect();

    let candidate = format!("5{}{random_digits}", rng.random_range(1..=5));

    let re = Regex::new(r"^\d{16}$")?;
    if re.is_match(&candidate) {
        Ok(candidate)
    } else {
        bail!("Generated card number is invalid")
    }
}

/// Generates a 3-digit security code, zero-padded.
pub fn random_security_code() -> String {
    let mut rng = rng();

    (0..3)
        .map(|_| rng.random_range(0..10).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_number_is_sixteen_digits_with_vendor_prefix() {
        let number = random_card_number().unwrap();

        assert_eq!(number.len(), 16);
        assert!(number.chars().all(|c| c.is_ascii_digit()));
        assert!(number.starts_with('5'));
    }

    #[test]
    fn security_code_is_three_digits() {
        let code = random_security_code();

        assert_eq!(code.len(), 3);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }
}
