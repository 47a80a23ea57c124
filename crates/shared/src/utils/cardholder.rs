/// Derives the printed cardholder name from an employee's full name.
///
/// Names with more than two tokens keep the first and last token verbatim;
/// interior tokens of three or more characters collapse to their initial,
/// shorter ones are dropped, and the result is uppercased. Names with two or
/// fewer tokens pass through unmodified, case preserved.
pub fn cardholder_name(full_name: &str) -> String {
    let tokens: Vec<&str> = full_name.split_whitespace().collect();

    if tokens.len() <= 2 {
        return full_name.to_string();
    }

    let last = tokens.len() - 1;
    let mut kept: Vec<String> = Vec::with_capacity(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        if index == 0 || index == last {
            kept.push((*token).to_string());
        } else if token.chars().count() >= 3 {
            if let Some(initial) = token.chars().next() {
                kept.push(initial.to_string());
            }
        }
    }

    kept.join(" ").to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_interior_tokens_to_initials() {
        assert_eq!(
            cardholder_name("Ana Maria Souza Oliveira"),
            "ANA M S OLIVEIRA"
        );
    }

    #[test]
    fn drops_short_interior_tokens() {
        assert_eq!(cardholder_name("Ana de Souza"), "ANA SOUZA");
    }

    #[test]
    fn two_token_names_pass_through_verbatim() {
        assert_eq!(cardholder_name("Ana Souza"), "Ana Souza");
    }

    #[test]
    fn single_token_names_pass_through_verbatim() {
        assert_eq!(cardholder_name("Cher"), "Cher");
    }

    #[test]
    fn handles_multibyte_initials() {
        assert_eq!(cardholder_name("Ana Ágata Souza"), "ANA Á SOUZA");
    }
}
