use std::collections::HashMap;

/// Render-scoped registry of anchor ids handed out to session titles.
///
/// Each render owns one registry, so ids are unique within a page but two
/// renders never see each other's ids.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    slugs: HashMap<String, String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a non-empty id for `title` that no earlier call on this
    /// registry returned. Repeats of the same base get `1`, `2`, ... appended.
    pub fn slug_for_title(&mut self, title: &str) -> String {
        let base = slugify(title);
        let mut id = base.clone();
        let mut suffix = 0u32;
        while id.is_empty() || self.slugs.contains_key(&id) {
            suffix += 1;
            id = format!("{}{}", base, suffix);
        }
        if suffix > 0 {
            tracing::debug!(base = %base, id = %id, "slug collision, using suffixed id");
        }
        self.slugs.insert(id.clone(), title.to_string());
        id
    }

    pub fn title_for(&self, id: &str) -> Option<&str> {
        self.slugs.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}

/// Lowercase, strict slug: letters and digits joined by single hyphens.
///
/// Hyphens in the input count as spaces and everything else outside
/// `[A-Za-z0-9]` is dropped after transliteration.
pub fn slugify(title: &str) -> String {
    let mut cleaned = String::with_capacity(title.len());
    for c in title.chars() {
        if let Some(repl) = transliterate(c) {
            cleaned.push_str(repl);
        } else if c == '-' || c.is_whitespace() {
            cleaned.push(' ');
        } else if c.is_ascii_alphanumeric() {
            cleaned.push(c);
        }
    }

    cleaned
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

fn transliterate(c: char) -> Option<&'static str> {
    let s = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'Æ' => "AE",
        'æ' => "ae",
        'Ç' => "C",
        'ç' => "c",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'Ñ' => "N",
        'ñ' => "n",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'Ý' => "Y",
        'ý' | 'ÿ' => "y",
        'ß' => "ss",
        '&' => "and",
        '$' => "dollar",
        '%' => "percent",
        '<' => "less",
        '>' => "greater",
        '|' => "or",
        _ => return None,
    };
    Some(s)
}
