//! Caesar shift cipher
//!
//! Only ASCII letters rotate; output letters are uppercase, everything else
//! passes through untouched.

/// Rotate every letter forward by `shift` positions (mod 26)
pub fn encrypt(text: &str, shift: u32) -> String {
    rotate(text, shift % 26)
}

/// Inverse of [`encrypt`]
pub fn decrypt(text: &str, shift: u32) -> String {
    rotate(text, (26 - shift % 26) % 26)
}

fn rotate(text: &str, by: u32) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let pos = c.to_ascii_uppercase() as u32 - 'A' as u32;
                char::from(b'A' + ((pos + by) % 26) as u8)
            } else {
                c
            }
        })
        .collect()
}

/// A freshly generated prompt for the hour-keyed puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaesarPrompt {
    pub ciphertext: String,
    pub hint: String,
    pub shift: u32,
}

/// Shift is the wall-clock hour, recomputed for every request.
///
/// Correctness is checked against the fixed phrase, not a decryption, so a
/// prompt generated at 10:59 still accepts the same answer at 11:00.
pub fn prompt_for_hour(phrase: &str, hint: &str, hour: u32) -> CaesarPrompt {
    let shift = hour % 24;
    CaesarPrompt {
        ciphertext: encrypt(phrase, shift),
        hint: hint.to_string(),
        shift,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "ME GUSTA EL FERNET";

    #[test]
    fn test_known_shift() {
        assert_eq!(encrypt("ABC XYZ", 3), "DEF ABC");
        assert_eq!(encrypt(PHRASE, 0), PHRASE);
        assert_eq!(encrypt("hola", 1), "IPMB");
    }

    #[test]
    fn test_decrypt_inverts_encrypt_for_every_shift() {
        for s in 0..26 {
            assert_eq!(decrypt(&encrypt(PHRASE, s), s), PHRASE, "shift {s}");
        }
    }

    #[test]
    fn test_non_letters_are_invariant() {
        let text = "¡HOLA, 5G! ñ";
        for s in 0..26 {
            let out: Vec<char> = encrypt(text, s).chars().collect();
            for (i, c) in text.chars().enumerate() {
                if !c.is_ascii_alphabetic() {
                    assert_eq!(out[i], c);
                }
            }
        }
    }

    #[test]
    fn test_prompt_uses_hour_as_shift() {
        let prompt = prompt_for_hour(PHRASE, "La clave esta en la hora", 13);
        assert_eq!(prompt.shift, 13);
        assert_eq!(prompt.ciphertext, encrypt(PHRASE, 13));
        assert_eq!(prompt.hint, "La clave esta en la hora");
    }
}
