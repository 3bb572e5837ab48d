// src/core/sanitize.rs

/// Decode the HTML entities that show up in ranking tables:
/// a few named ones plus any numeric `&#NNN;` / `&#xHH;`.
/// Unknown or malformed entities are left as-is.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s!(s);
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        // Entities are short; don't scan the whole tail for a ';'.
        let semi = tail.char_indices().take(12).find(|&(_, c)| c == ';').map(|(i, _)| i);
        match semi.and_then(|i| decode_one(&tail[1..i]).map(|ch| (i, ch))) {
            Some((i, ch)) => {
                out.push(ch);
                rest = &tail[i + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_one(name: &str) -> Option<char> {
    match name {
        "nbsp" => Some(' '),
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "copy" => Some('©'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}
