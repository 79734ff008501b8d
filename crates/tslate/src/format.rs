//! Placeholder substitution for display strings
//!
//! Translations carry positional markers (`%1`, `%2`, ... up to `%99`) and
//! the count marker `%n`. Substitution is a single left-to-right pass and
//! never fails: whatever does not resolve stays in the output verbatim.

/// Substitute placeholders in `template` with `args`.
///
/// `%k` takes `args[k - 1]`, longest match over at most two digits, so
/// `%12` is placeholder twelve, never `%1` followed by `2`. Each `%n` takes
/// the next argument in order of appearance, counting `%n` occurrences
/// only: the sequence is independent of any positional indices used
/// alongside it, so in `"%n of %2"` the `%n` reads `args[0]` and `%2` reads
/// `args[1]`. A `%` followed by anything else, and any placeholder without
/// a matching argument, passes through unchanged.
pub fn format(template: &str, args: &[&str]) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut pos = 0;
    let mut next_n = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'%' {
            let start = pos;
            while pos < bytes.len() && bytes[pos] != b'%' {
                pos += 1;
            }
            out.push_str(&template[start..pos]);
            continue;
        }

        match bytes.get(pos + 1).copied() {
            Some(b'n') => {
                match args.get(next_n) {
                    Some(value) => {
                        out.push_str(value);
                        next_n += 1;
                    }
                    None => out.push_str("%n"),
                }
                pos += 2;
            }
            Some(digit @ b'1'..=b'9') => {
                let mut index = usize::from(digit - b'0');
                let mut end = pos + 2;
                if let Some(more @ b'0'..=b'9') = bytes.get(end).copied() {
                    index = index * 10 + usize::from(more - b'0');
                    end += 1;
                }
                match index.checked_sub(1).and_then(|i| args.get(i)) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&template[pos..end]),
                }
                pos = end;
            }
            _ => {
                out.push('%');
                pos += 1;
            }
        }
    }
    out
}
