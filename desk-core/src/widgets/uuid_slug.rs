use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DeskError, DeskResult};

pub const MAX_UUIDS: usize = 100;

pub fn generate_uuids(count: usize, uppercase: bool, hyphens: bool) -> DeskResult<Vec<String>> {
    if !(1..=MAX_UUIDS).contains(&count) {
        return Err(DeskError::invalid(format!(
            "Count must be between 1 and {MAX_UUIDS}"
        )));
    }
    Ok((0..count)
        .map(|_| {
            let id = Uuid::new_v4();
            let text = if hyphens {
                id.hyphenated().to_string()
            } else {
                id.simple().to_string()
            };
            if uppercase {
                text.to_uppercase()
            } else {
                text
            }
        })
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugOptions {
    pub separator: char,
    pub lowercase: bool,
    /// 0 means unlimited
    pub max_len: usize,
}

impl Default for SlugOptions {
    fn default() -> Self {
        Self {
            separator: '-',
            lowercase: true,
            max_len: 0,
        }
    }
}

fn fold_accent(c: char) -> Option<&'static str> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' => "a",
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' => "A",
        'æ' => "ae",
        'Æ' => "AE",
        'ç' | 'ć' | 'č' => "c",
        'Ç' | 'Ć' | 'Č' => "C",
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ę' | 'ě' => "e",
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ę' | 'Ě' => "E",
        'ì' | 'í' | 'î' | 'ï' | 'ī' => "i",
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ī' => "I",
        'ł' => "l",
        'Ł' => "L",
        'ñ' | 'ń' | 'ň' => "n",
        'Ñ' | 'Ń' | 'Ň' => "N",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' => "o",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' | 'Ō' => "O",
        'œ' => "oe",
        'Œ' => "OE",
        'ś' | 'š' => "s",
        'Ś' | 'Š' => "S",
        'ß' => "ss",
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' => "u",
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ū' | 'Ů' => "U",
        'ý' | 'ÿ' => "y",
        'Ý' | 'Ÿ' => "Y",
        'ź' | 'ż' | 'ž' => "z",
        'Ź' | 'Ż' | 'Ž' => "Z",
        _ => return None,
    };
    Some(folded)
}

fn push_piece(slug: &mut String, piece: &str, pending_sep: &mut bool, sep: char) {
    if *pending_sep && !slug.is_empty() {
        slug.push(sep);
    }
    *pending_sep = false;
    slug.push_str(piece);
}

pub fn slugify(text: &str, options: &SlugOptions) -> String {
    let sep = options.separator;
    let mut slug = String::with_capacity(text.len());
    let mut pending_sep = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            let mut buf = [0u8; 4];
            push_piece(&mut slug, c.encode_utf8(&mut buf), &mut pending_sep, sep);
        } else if let Some(folded) = fold_accent(c) {
            push_piece(&mut slug, folded, &mut pending_sep, sep);
        } else {
            pending_sep = true;
        }
    }

    if options.lowercase {
        slug = slug.to_lowercase();
    }
    if options.max_len > 0 && slug.len() > options.max_len {
        slug = truncate_at_word(&slug, options.max_len, sep);
    }
    slug
}

/// Cut to at most `max_len` bytes, preferring the last separator so words
/// stay whole.
fn truncate_at_word(slug: &str, max_len: usize, sep: char) -> String {
    let mut end = max_len;
    while !slug.is_char_boundary(end) {
        end -= 1;
    }
    let head = &slug[..end];
    let next_is_boundary = slug[end..].starts_with(sep);
    if next_is_boundary {
        return head.to_string();
    }
    match head.rfind(sep) {
        Some(idx) if idx > 0 => head[..idx].to_string(),
        _ => head.trim_end_matches(sep).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_count_and_format() {
        let ids = generate_uuids(5, false, true).unwrap();
        assert_eq!(ids.len(), 5);
        for id in &ids {
            assert_eq!(id.len(), 36);
            assert_eq!(Uuid::parse_str(id).unwrap().get_version_num(), 4);
        }

        let compact = generate_uuids(1, true, false).unwrap();
        assert_eq!(compact[0].len(), 32);
        assert!(!compact[0].contains('-'));
        assert_eq!(compact[0], compact[0].to_uppercase());
    }

    #[test]
    fn uuid_count_bounds() {
        assert!(generate_uuids(0, false, true).is_err());
        assert!(generate_uuids(101, false, true).is_err());
        assert_eq!(generate_uuids(100, false, true).unwrap().len(), 100);
    }

    #[test]
    fn slugify_basics() {
        let opts = SlugOptions::default();
        assert_eq!(slugify("Hello, World!", &opts), "hello-world");
        assert_eq!(slugify("  --Crème Brûlée à la carte--  ", &opts), "creme-brulee-a-la-carte");
        assert_eq!(slugify("Straße & Łódź", &opts), "strasse-lodz");
        assert_eq!(slugify("日本語", &opts), "");
        assert_eq!(slugify("a   b___c", &opts), "a-b-c");
    }

    #[test]
    fn slugify_options() {
        let opts = SlugOptions {
            separator: '_',
            lowercase: false,
            max_len: 0,
        };
        assert_eq!(slugify("Rust Is Fun", &opts), "Rust_Is_Fun");
    }

    #[test]
    fn slugify_trims_at_word_boundary() {
        let opts = SlugOptions {
            max_len: 12,
            ..SlugOptions::default()
        };
        assert_eq!(slugify("the quick brown fox", &opts), "the-quick");
        let exact = SlugOptions {
            max_len: 9,
            ..SlugOptions::default()
        };
        assert_eq!(slugify("the quick brown fox", &exact), "the-quick");
        let single = SlugOptions {
            max_len: 5,
            ..SlugOptions::default()
        };
        assert_eq!(slugify("extraordinary", &single), "extra");
    }
}
