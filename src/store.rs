use parking_lot::RwLock;
use std::collections::HashMap;

/// Length of every generated short code.
const CODE_LEN: usize = 6;

/// The two inverse maps forming the store's state. Kept in one struct so a
/// single lock guards both and they can never drift apart.
#[derive(Default)]
struct MappingTable {
    code_to_url: HashMap<String, String>,
    url_to_code: HashMap<String, String>,
}

/// Thread-safe in-memory store mapping short codes to original URLs and back.
///
/// Shortening is idempotent per normalized (whitespace-trimmed) URL: the
/// first call creates a mapping, every later call for the same URL returns
/// the existing code. Entries are never updated or deleted; the table lives
/// for the life of the process.
///
/// Both maps sit behind one `RwLock`. `shorten` holds the write lock for its
/// whole body so the dedup-check-then-insert sequence is atomic — two
/// concurrent calls for the same URL cannot both miss the check and mint two
/// codes. `resolve` only takes the read lock, so lookups run in parallel.
pub struct ShortenerStore {
    table: RwLock<MappingTable>,
}

impl ShortenerStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(MappingTable::default()),
        }
    }

    /// Return the short code for `original_url`, minting one if the URL has
    /// not been seen before. Never fails.
    pub fn shorten(&self, original_url: &str) -> String {
        let url = original_url.trim();

        let mut table = self.table.write();

        if let Some(code) = table.url_to_code.get(url) {
            return code.clone();
        }

        // Probe until we hit an unused code. At 62^6 combinations a retry is
        // already rare; the loop is unbounded.
        let mut code = random_code(CODE_LEN);
        while table.code_to_url.contains_key(&code) {
            code = random_code(CODE_LEN);
        }

        table.code_to_url.insert(code.clone(), url.to_owned());
        table.url_to_code.insert(url.to_owned(), code.clone());
        code
    }

    /// Look up a short code. Returns a clone of the original URL if present;
    /// `None` is a normal miss, not an error.
    pub fn resolve(&self, code: &str) -> Option<String> {
        self.table.read().code_to_url.get(code).cloned()
    }

    /// Number of URLs currently stored.
    pub fn len(&self) -> usize {
        self.table.read().code_to_url.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().code_to_url.is_empty()
    }
}

impl Default for ShortenerStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a random alphanumeric string of the given length.
fn random_code(len: usize) -> String {
    use rand::Rng;
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn codes_are_six_alphanumeric_chars() {
        let store = ShortenerStore::new();
        let code = store.shorten("https://google.com");
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn shorten_is_idempotent() {
        let store = ShortenerStore::new();
        let first = store.shorten("https://google.com");
        let second = store.shorten("https://google.com");
        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn shorten_ignores_surrounding_whitespace() {
        let store = ShortenerStore::new();
        let clean = store.shorten("https://google.com");
        let padded = store.shorten("   https://google.com   ");
        assert_eq!(clean, padded);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn resolve_round_trips_the_trimmed_url() {
        let store = ShortenerStore::new();
        let code = store.shorten("  https://example.com/page  ");
        assert_eq!(
            store.resolve(&code),
            Some("https://example.com/page".to_owned())
        );
    }

    #[test]
    fn distinct_urls_get_distinct_codes() {
        let store = ShortenerStore::new();
        let a = store.shorten("https://example.com/a");
        let b = store.shorten("https://example.com/b");
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn resolve_misses_on_unknown_code() {
        let store = ShortenerStore::new();
        assert!(store.is_empty());
        assert_eq!(store.resolve("zzzzzz"), None);

        store.shorten("https://example.com");
        assert_eq!(store.resolve("doesnotexist"), None);
    }

    #[test]
    fn concurrent_shortens_of_one_url_agree_on_a_single_code() {
        let store = Arc::new(ShortenerStore::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.shorten(" https://example.com/contended "))
            })
            .collect();

        let codes: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().expect("shorten thread panicked"))
            .collect();

        assert!(codes.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.resolve(&codes[0]),
            Some("https://example.com/contended".to_owned())
        );
    }
}
