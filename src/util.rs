/// Returns the length of the longest common prefix of `key` and `edge`.
pub fn prefix_match(key: &[u8], edge: &[u8]) -> usize {
    key.iter()
        .zip(edge)
        .take_while(|(a, b)| a == b)
        .count()
}
