// src/core/html.rs
//
// Tolerant, case-insensitive tag slicing. No DOM: we find `<tag …>…</tag>`
// blocks by scanning, which is all the ranking tables need.

use super::sanitize::{decode_entities, normalize_ws};

/// ASCII-only lowercase. Byte offsets stay valid against the original string.
pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Next `<o …>…c` block at or after `from`, as byte range into `s`.
/// `o` only matches a whole tag name (`<tr` does not match `<track`).
pub fn next_tag_block_ci(s: &str, o: &str, c: &str, from: usize) -> Option<(usize, usize)> {
    next_block_lc(s, &to_lower(s), &to_lower(o), &to_lower(c), from)
}

/// Same as `next_tag_block_ci` with everything already lowercased; use when walking a block repeatedly.
fn next_block_lc(s: &str, lc: &str, ol: &str, cl: &str, from: usize) -> Option<(usize, usize)> {
    let mut at = from;
    loop {
        let start = lc.get(at..)?.find(ol)? + at;
        let after_name = start + ol.len();
        let boundary = lc[after_name..]
            .chars()
            .next()
            .is_none_or(|ch| ch.is_ascii_whitespace() || ch == '>' || ch == '/');
        if !boundary {
            at = after_name;
            continue;
        }
        let open_end = s[start..].find('>')? + start + 1;
        let end_rel = lc[open_end..].find(cl)?;
        let end = open_end + end_rel + cl.len();
        return Some((start, end));
    }
}

/// Every `<o …>…c` block in `s`, in document order.
pub fn tag_blocks_ci<'a>(s: &'a str, o: &str, c: &str) -> Vec<&'a str> {
    let lc = to_lower(s);
    let ol = to_lower(o);
    let cl = to_lower(c);
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some((b_s, b_e)) = next_block_lc(s, &lc, &ol, &cl, pos) {
        out.push(&s[b_s..b_e]);
        pos = b_e;
    }
    out
}

/// The opening tag of a block, up to and including `>`.
pub fn opener(block: &str) -> &str {
    match block.find('>') {
        Some(i) => &block[..=i],
        None => block,
    }
}

pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(oe) = block.find('>') {
        if let Some(cs) = block.rfind('<') {
            if cs > oe {
                return block[oe + 1..cs].to_string();
            }
        }
    }
    s!()
}

pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Value of attribute `name` in an opening tag. Quotes optional in source.
pub fn attr_value(opener: &str, name: &str) -> Option<String> {
    let lc = to_lower(opener);
    let needle = join!(&to_lower(name), "=");
    let mut at = 0usize;
    loop {
        let hit = lc.get(at..)?.find(&needle)? + at;
        // must be a whole attribute name (`data-id=` is not `id=`)
        let prev_ok = lc[..hit].chars().last().is_none_or(|c| c.is_ascii_whitespace());
        if !prev_ok {
            at = hit + needle.len();
            continue;
        }
        let val = &opener[hit + needle.len()..];
        let (quote, start_off) = match val.as_bytes().first() {
            Some(b'"') => (Some('"'), 1),
            Some(b'\'') => (Some('\''), 1),
            _ => (None, 0),
        };
        let end = match quote {
            Some(q) => val[start_off..].find(q).map(|e| start_off + e).unwrap_or(val.len()),
            None => val
                .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                .unwrap_or(val.len()),
        };
        return Some(val[start_off..end].to_string());
    }
}

/// True if the opener's `class` list contains `class` as a whole word.
pub fn has_class(opener: &str, class: &str) -> bool {
    attr_value(opener, "class")
        .map(|v| v.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(class)))
        .unwrap_or(false)
}

pub fn has_id(opener: &str, id: &str) -> bool {
    attr_value(opener, "id").is_some_and(|v| v == id)
}

/// Visible text of a cell: tags stripped, entities decoded, whitespace collapsed.
pub fn cell_text(td_block: &str) -> String {
    normalize_ws(&decode_entities(&strip_tags(inner_after_open_tag(td_block))))
}

/// Body rows of one `<table>` block as `<td>` cell texts.
/// Rows under `<tbody>` when the table has one (or several); otherwise every row,
/// which is what a browser's implied tbody would hold. Rows without `<td>` are skipped.
pub fn table_body_rows(table_block: &str) -> Vec<Vec<String>> {
    let bodies = tag_blocks_ci(table_block, "<tbody", "</tbody>");
    let scopes: Vec<&str> = if bodies.is_empty() { vec![table_block] } else { bodies };

    let mut rows = Vec::new();
    for scope in scopes {
        for tr in tag_blocks_ci(scope, "<tr", "</tr>") {
            let cells: Vec<String> = tag_blocks_ci(tr, "<td", "</td>")
                .into_iter()
                .map(cell_text)
                .collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_name_must_be_whole() {
        let doc = "<track src=x></track><TR class=a><td>1</td></tr>";
        let (s, e) = next_tag_block_ci(doc, "<tr", "</tr>", 0).unwrap();
        assert!(doc[s..e].starts_with("<TR"));
    }

    #[test]
    fn attrs_quoted_and_bare() {
        let op = r#"<table data-id="x" id=top20 class='a  wp-block-table'>"#;
        assert_eq!(attr_value(op, "id").as_deref(), Some("top20"));
        assert!(has_id(op, "top20"));
        assert!(has_class(op, "wp-block-table"));
        assert!(!has_class(op, "wp-block"));
    }

    #[test]
    fn cell_text_cleans_markup() {
        let td = r#"<td class="x"><a href="/c">C&#35;</a>&nbsp; <b>lang</b></td>"#;
        assert_eq!(cell_text(td), "C# lang");
    }

    #[test]
    fn body_rows_prefer_tbody() {
        let table = r#"<table>
            <thead><tr><th>Rank</th><th>Lang</th></tr></thead>
            <tbody>
              <tr><td>1</td><td>Python</td></tr>
              <tr><td>2</td><td> Java </td></tr>
            </tbody>
            <tfoot><tr><td>x</td><td>footer</td></tr></tfoot>
        </table>"#;
        let rows = table_body_rows(table);
        assert_eq!(rows, vec![vec![s!("1"), s!("Python")], vec![s!("2"), s!("Java")]]);
    }

    #[test]
    fn body_rows_without_tbody_skip_header_only_rows() {
        let table = "<table><tr><th>H</th></tr><tr><td>a</td></tr></table>";
        assert_eq!(table_body_rows(table), vec![vec![s!("a")]]);
    }
}
