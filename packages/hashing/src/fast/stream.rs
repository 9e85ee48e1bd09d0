use std::hash::Hasher;
use twox_hash::XxHash3_64;

/// Incremental XXH3-64 hasher
///
/// ```
/// use hashlab_hashing::fast::Xxh3Stream;
///
/// let mut stream = Xxh3Stream::with_seed(0);
/// stream.update(b"hello ").update(b"world");
/// assert_eq!(stream.digest(), Xxh3Stream::with_seed(0).update(b"hello world").digest());
/// ```
pub struct Xxh3Stream {
    hasher: XxHash3_64,
}

impl Xxh3Stream {
    /// Start a stream keyed with `seed`
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            hasher: XxHash3_64::with_seed(seed),
        }
    }

    /// Feed more input
    pub fn update(&mut self, chunk: &[u8]) -> &mut Self {
        self.hasher.write(chunk);
        self
    }

    /// Digest of everything fed so far; the stream stays usable
    #[must_use]
    pub fn digest(&self) -> u64 {
        self.hasher.finish()
    }
}

impl Default for Xxh3Stream {
    fn default() -> Self {
        Self::with_seed(0)
    }
}
