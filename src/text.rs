use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Hard-wraps at `width` display columns, breaking inside words.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = vec![String::new()];
    for c in s.chars() {
        let Some(last) = lines.last_mut() else {
            break;
        };
        if last.width() + c.width().unwrap_or(0) > width {
            lines.push(c.to_string());
        } else {
            last.push(c);
        }
    }
    lines
}

/// Wraps on whitespace. Words wider than `width` are split with [`wrap_text`].
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines: Vec<String> = vec![];
    let mut current = String::new();
    for word in s.split_whitespace() {
        let word_width = word.width();
        if current.is_empty() {
            if word_width > width {
                let mut pieces = wrap_text(word, width);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            } else {
                current.push_str(word);
            }
        } else if current.width() + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            if word_width > width {
                let mut pieces = wrap_text(word, width);
                current = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            } else {
                current.push_str(word);
            }
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cuts `s` to at most `width` columns, ending with `...` when shortened.
pub fn truncate_text(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width < 3 {
        return ".".repeat(width);
    }

    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.width().unwrap_or(0) + 3 > width {
            break;
        }
        out.push(c);
    }
    out.push_str("...");
    out
}
