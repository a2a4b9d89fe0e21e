use std::collections::HashSet;
use std::env;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

const WIDE_CHARS: [char; 8] = ['a', 'z', 'é', 'ß', 'ж', '日', '本', '🦀'];

// Lengths drawn from the zipf distribution are in 1..=MAX_ZIPF_LEN.
const MAX_ZIPF_LEN: usize = 12;

/// Seed shared by every generator in this process. Set `OVERRIDE_SEED` to replay a failing run.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| {
        let seed = env::var("OVERRIDE_SEED")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or_else(|| thread_rng().gen());

        println!("Seed: {seed}");
        seed
    })
}

fn new_rng(len: usize) -> StdRng {
    StdRng::seed_from_u64(random_init_seed() ^ len as u64)
}

fn random_ascii<R: Rng>(rng: &mut R, str_len: usize) -> String {
    (0..str_len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Lengths uniform in `0..=max_str_len`.
pub fn random_uniform(len: usize, max_str_len: usize) -> Vec<String> {
    let mut rng = new_rng(len);

    (0..len)
        .map(|_| {
            let str_len = rng.gen_range(0..=max_str_len);
            random_ascii(&mut rng, str_len)
        })
        .collect()
}

/// Lengths skewed towards short strings, so most lengths are shared by many elements.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<String> {
    let mut rng = new_rng(len);
    let dist = ZipfDistribution::new(MAX_ZIPF_LEN, exponent).unwrap();

    (0..len)
        .map(|_| {
            // zipf yields 1..=MAX_ZIPF_LEN, shift down so the empty string shows up too.
            let str_len = rng.sample(&dist) - 1;
            random_ascii(&mut rng, str_len)
        })
        .collect()
}

/// Like `random_zipf`, without duplicates. Lets tests tell equal-length elements apart.
pub fn random_unique(len: usize) -> Vec<String> {
    let mut rng = new_rng(len);
    let dist = ZipfDistribution::new(MAX_ZIPF_LEN, 0.5).unwrap();

    let mut seen = HashSet::with_capacity(len);
    let mut strings = Vec::with_capacity(len);
    while strings.len() < len {
        let str_len = rng.sample(&dist);
        let s = random_ascii(&mut rng, str_len);
        if seen.insert(s.clone()) {
            strings.push(s);
        }
    }

    strings
}

/// Every string has length `str_len`.
pub fn equal_len(len: usize, str_len: usize) -> Vec<String> {
    let mut rng = new_rng(len);

    (0..len).map(|_| random_ascii(&mut rng, str_len)).collect()
}

/// A handful of distinct values repeated many times.
pub fn few_unique(len: usize) -> Vec<String> {
    const VALUES: [&str; 5] = ["", "b", "a", "ab", "ba"];
    let mut rng = new_rng(len);

    (0..len)
        .map(|_| VALUES[rng.gen_range(0..VALUES.len())].to_string())
        .collect()
}

/// Mixes one, two, three and four byte UTF-8 characters.
pub fn random_wide(len: usize) -> Vec<String> {
    let mut rng = new_rng(len);

    (0..len)
        .map(|_| {
            let str_len = rng.gen_range(0..=6);
            (0..str_len)
                .map(|_| WIDE_CHARS[rng.gen_range(0..WIDE_CHARS.len())])
                .collect::<String>()
        })
        .collect()
}

pub fn descending_len(len: usize) -> Vec<String> {
    (0..len).rev().map(|i| "x".repeat(i % 64)).collect()
}
