use rand::{Rng, distr::Alphanumeric, seq::IndexedRandom};

pub fn generate_record_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(24)
        .map(char::from)
        .collect()
}

pub fn sample_up_to<T: Clone>(pool: Vec<T>, limit: usize) -> Vec<T> {
    if pool.len() <= limit {
        return pool; // nothing to sample, keep upstream order
    }

    let mut rng = rand::rng();
    pool.choose_multiple(&mut rng, limit).cloned().collect()
}

pub fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
