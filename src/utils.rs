/// Map an accented Latin letter onto its plain ASCII base letter.
fn fold_diacritic(c: char) -> char {
    match c {
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ç' => 'C',
        'Ñ' => 'N',
        _ => c,
    }
}

/// Normalize a word to the game alphabet: uppercase, diacritics stripped,
/// everything outside A-Z and the space dropped, whitespace runs collapsed
/// to a single space, leading and trailing spaces removed.
pub fn normalize_word(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.chars() {
        for upper in c.to_uppercase() {
            let upper = fold_diacritic(upper);
            if upper.is_ascii_uppercase() {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(upper);
            } else if upper.is_whitespace() {
                pending_space = true;
            }
        }
    }

    out
}

/// Count the letters of a word, excluding spaces.
pub fn letter_count(word: &str) -> usize {
    word.chars().filter(|c| c.is_ascii_alphabetic()).count()
}

/// Drop the spaces of an already normalized word, for whole-word comparison.
pub fn strip_spaces(word: &str) -> String {
    word.chars().filter(|c| *c != ' ').collect()
}
