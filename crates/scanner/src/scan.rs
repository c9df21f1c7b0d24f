use memchr::memchr;

/// Finds every occurrence of `needle` in `haystack`.
///
/// Returns inclusive `(start, end)` index pairs, local to the haystack and
/// in ascending start order. Every occurrence is reported, including
/// overlapping ones — the scan advances one byte past each candidate start
/// rather than skipping over a found match. A needle longer than the
/// haystack yields no matches. Callers must not pass an empty needle; an
/// empty needle yields no matches here, but upstream code is expected to
/// filter them out.
///
/// The haystack is bounded by the visible viewport slice (hundreds to a few
/// thousand bytes), so a simple scan is plenty: candidate starts are located
/// by first byte and the remainder is verified with an early-exit byte
/// comparison.
pub fn find_all(haystack: &[u8], needle: &[u8]) -> Vec<(usize, usize)> {
    let mut found = Vec::new();
    if needle.is_empty() || needle.len() > haystack.len() {
        return found;
    }
    // The last index at which the needle could still fit.
    let last_start = haystack.len() - needle.len();
    let mut at = 0;
    while at <= last_start {
        let i = match memchr(needle[0], &haystack[at..=last_start]) {
            None => break,
            Some(i) => i,
        };
        let start = at + i;
        if &haystack[start..start + needle.len()] == needle {
            found.push((start, start + needle.len() - 1));
        }
        at = start + 1;
    }
    found
}
