// Splits passages that are too long for one embed into ordered chunks.

/// Splits `text` into chunks of at most `max_len` characters.
///
/// The text is split on the first (coarsest) delimiter and the segments are packed
/// greedily. A segment that is too long on its own is split again with the remaining
/// delimiters, and as a last resort at character boundaries.
///
/// With `keep_delim` the delimiters stay attached to the end of their segment, so the
/// chunks concatenate back to `text`. Without it the delimiter at each chunk boundary
/// is dropped.
pub fn split_within(text: &str, max_len: usize, delimiters: &[&str], keep_delim: bool) -> Vec<String> {
    let max_len = max_len.max(1);

    if char_len(text) <= max_len {
        return vec![text.to_string()];
    }

    let Some((delim, finer)) = delimiters.split_first() else {
        return split_chars(text, max_len);
    };
    if delim.is_empty() {
        return split_chars(text, max_len);
    }

    let delim_len = char_len(delim);
    let segments: Vec<&str> = text.split(delim).collect();
    let last = segments.len() - 1;

    let mut chunks = Vec::new();
    let mut current = String::new();
    // length of `current` in characters
    let mut current_len = 0;
    // false until something has been put in `current`, which may still be empty
    let mut started = false;

    for (i, segment) in segments.into_iter().enumerate() {
        let piece = if keep_delim && i < last {
            format!("{}{}", segment, delim)
        } else {
            segment.to_string()
        };
        let piece_len = char_len(&piece);
        let joiner = if started && !keep_delim { delim_len } else { 0 };

        if started && current_len + joiner + piece_len <= max_len {
            if joiner > 0 {
                current.push_str(delim);
            }
            current.push_str(&piece);
            current_len += joiner + piece_len;
            continue;
        }

        if started && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }
        current.clear();

        if piece_len <= max_len {
            current = piece;
            current_len = piece_len;
        } else {
            let mut parts = split_within(&piece, max_len, finer, keep_delim);
            // the tail stays open so the next segments can join it
            current = parts.pop().unwrap_or_default();
            current_len = char_len(&current);
            chunks.extend(parts);
        }
        started = true;
    }

    if !current.is_empty() || chunks.is_empty() {
        chunks.push(current);
    }

    chunks
}

fn split_chars(text: &str, max_len: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(max_len)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
