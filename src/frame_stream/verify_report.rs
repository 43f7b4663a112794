/// Outcome of checking a sequence of frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Number of complete frames examined.
    pub total: u64,
    /// Zero-based indices of frames whose CRC did not match, in ascending order.
    pub invalid: Vec<u64>,
}

impl VerifyReport {
    #[inline]
    pub fn valid_count(&self) -> u64 {
        self.total - self.invalid.len() as u64
    }

    #[inline]
    pub fn invalid_count(&self) -> u64 {
        self.invalid.len() as u64
    }

    /// `true` if every frame validated.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}
