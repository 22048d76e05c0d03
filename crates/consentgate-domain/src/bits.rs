/// Whether the 1-based `index` is set in a `'0'`/`'1'` bit-string. Positions count characters,
/// not bytes.
///
/// Fails closed: an absent string, index 0, an index past the end, or any character other than
/// `'1'` all read as not-set.
pub fn has_attribute(bits: Option<&str>, index: usize) -> bool {
    let Some(bits) = bits else {
        return false;
    };
    index
        .checked_sub(1)
        .and_then(|pos| bits.chars().nth(pos))
        .is_some_and(|c| c == '1')
}
