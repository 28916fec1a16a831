/// Mathematical modulo: the result always lies in `[0, modulus)`, also for
/// negative `value`. `modulus` must be non-zero.
pub fn wrap_index(value: i64, modulus: usize) -> usize {
    value.rem_euclid(modulus as i64) as usize
}

/// Strips whitespace and splits the rest into space separated blocks of
/// `size` characters, e.g. `"ABCDEFG"` -> `"ABCDE FG"`.
///
/// A `size` of zero only strips whitespace.
pub fn group_blocks(text: &str, size: usize) -> String {
    let compact = text.chars().filter(|c| !c.is_whitespace());

    if size == 0 {
        return compact.collect();
    }

    let mut grouped = String::with_capacity(text.len() + text.len() / size);
    for (i, c) in compact.enumerate() {
        if i > 0 && i % size == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    grouped
}
