use super::error::GameError;

/// Slides a line toward index 0, merging equal neighbours once each.
/// Returns the new line (same length, `0` padded) and the score gained.
pub fn merge_toward_front(line: &[u32]) -> Result<(Vec<u32>, u64), GameError> {
    let mut result: Vec<u32> = Vec::with_capacity(line.len());
    let mut score: u64 = 0;

    let non_zero: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();

    let mut i = 0;
    while i < non_zero.len() {
        if i + 1 < non_zero.len() && non_zero[i] == non_zero[i + 1] {
            let merged = non_zero[i]
                .checked_mul(2)
                .ok_or(GameError::ValueOverflow { value: non_zero[i] })?;
            result.push(merged);
            score += u64::from(merged);
            i += 2;
        } else {
            result.push(non_zero[i]);
            i += 1;
        }
    }

    result.resize(line.len(), 0);

    Ok((result, score))
}
