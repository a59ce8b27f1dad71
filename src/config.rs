/// Tuning for the streaming and batch helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashOptions {
    buffer_size: usize,
    parallel_threshold: usize,
}

impl HashOptions {
    pub const DEFAULT_BUFFER_SIZE: usize = 8192;
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

    pub const fn new() -> Self {
        Self {
            buffer_size: Self::DEFAULT_BUFFER_SIZE,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Read chunk size for streamed input. Zero is clamped to one byte.
    #[must_use]
    pub const fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = if size == 0 { 1 } else { size };
        self
    }

    /// Batches at least this long are hashed on the rayon pool.
    #[must_use]
    pub const fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub const fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    pub const fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }
}

impl Default for HashOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = HashOptions::default();
        assert_eq!(options.buffer_size(), 8192);
        assert_eq!(options.parallel_threshold(), 64);
    }

    #[test]
    fn zero_buffer_is_clamped() {
        assert_eq!(HashOptions::new().with_buffer_size(0).buffer_size(), 1);
    }
}
