//! Double metaphone keys for name tokens.
//!
//! Player records carry the keys of their first and last name tokens. The keys
//! are computed once when the reference store is built and compared verbatim
//! at query time, so both sides must go through [`encode`].

use rphonetic::DoubleMetaphone;
use std::sync::LazyLock;

use super::sanitize::tokens;

static ENCODER: LazyLock<DoubleMetaphone> = LazyLock::new(DoubleMetaphone::default);

/// Primary and optional secondary double metaphone code of one token.
///
/// `secondary` is `None` when the algorithm produces no distinct alternate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneticCode {
    pub primary: String,
    pub secondary: Option<String>,
}

impl PhoneticCode {
    /// True when the token produced no code at all (digits, punctuation).
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
    }

    /// Conjunctive comparison used by the phonetic stage.
    ///
    /// `self` is the query code, `stored` the precomputed one. Primaries must
    /// be equal; when the query has a secondary, the stored secondary must be
    /// equal to it as well.
    pub fn matches_stored(&self, stored: &PhoneticCode) -> bool {
        if self.primary != stored.primary {
            return false;
        }
        match &self.secondary {
            Some(secondary) => stored.secondary.as_ref() == Some(secondary),
            None => true,
        }
    }
}

/// Reduces a token to the ASCII letters the encoder understands.
///
/// Latin letters with diacritics fold to their base letter. Anything else
/// (digits, punctuation, other scripts) is dropped.
fn ascii_letters(token: &str) -> String {
    let mut folded = String::with_capacity(token.len());
    for c in token.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphabetic() {
            folded.push(c);
            continue;
        }
        let replacement = match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => "a",
            'ç' | 'ć' | 'č' => "c",
            'ď' | 'đ' | 'ð' => "d",
            'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => "e",
            'ğ' => "g",
            'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' | 'ı' => "i",
            'ł' => "l",
            'ñ' | 'ń' | 'ň' => "n",
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => "o",
            'ř' => "r",
            'ś' | 'š' | 'ş' => "s",
            'ť' | 'ţ' => "t",
            'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => "u",
            'ý' | 'ÿ' => "y",
            'ź' | 'ż' | 'ž' => "z",
            'ß' => "ss",
            'æ' => "ae",
            'œ' => "oe",
            'þ' => "th",
            _ => "",
        };
        folded.push_str(replacement);
    }
    folded
}

/// Encodes a single name token.
///
/// Tokens with no encodable letters get an empty code, which never matches.
///
/// # Examples
/// ```
/// use gridiron_lookup::names::encode;
///
/// assert_eq!(encode("brady"), encode("braddy"));
/// assert_ne!(encode("brady"), encode("manning"));
/// ```
pub fn encode(token: &str) -> PhoneticCode {
    // The encoder slices by byte offset, so it only ever sees ASCII.
    let letters = ascii_letters(token);
    if letters.is_empty() {
        return PhoneticCode::default();
    }
    let result = ENCODER.double_metaphone(&letters);
    let primary = result.primary();
    let alternate = result.alternate();
    let secondary = if alternate.is_empty() || alternate == primary {
        None
    } else {
        Some(alternate)
    };
    PhoneticCode { primary, secondary }
}

/// First and last name keys of a player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameKeys {
    pub first: Option<PhoneticCode>,
    pub last: Option<PhoneticCode>,
}

impl NameKeys {
    /// Computes keys from a sanitized name.
    ///
    /// Token 0 is the first name and token 1 the last name, mirroring how
    /// queries are split. A single token fills only the last name key, since
    /// one-word queries are matched against last names.
    pub fn from_sanitized(name: &str) -> Self {
        match tokens(name).as_slice() {
            [] => NameKeys::default(),
            [only] => NameKeys {
                first: None,
                last: Some(encode(only)),
            },
            [first, last, ..] => NameKeys {
                first: Some(encode(first)),
                last: Some(encode(last)),
            },
        }
    }

    /// Whether a stored record with these keys satisfies the query keys.
    ///
    /// The query must have a last name key. A query first name key is only
    /// checked when present.
    pub fn satisfies(&self, query: &NameKeys) -> bool {
        let Some(query_last) = &query.last else {
            return false;
        };
        let last_ok = self
            .last
            .as_ref()
            .is_some_and(|stored| query_last.matches_stored(stored));
        if !last_ok {
            return false;
        }
        match &query.first {
            Some(query_first) => self
                .first
                .as_ref()
                .is_some_and(|stored| query_first.matches_stored(stored)),
            None => true,
        }
    }
}
