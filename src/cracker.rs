use rayon::iter::{IntoParallelIterator, ParallelIterator};

pub const PASSWORD_LEN: usize = 8;

// Counters are hashed in fixed-size blocks; the indexed collect keeps each
// block's hits in counter order, so the parallel scan reads exactly like
// the sequential one.
const BLOCK: u64 = 1 << 16;

/// A digest whose hex form starts with five zero nibbles, reduced to the
/// two hex digits the password schemes look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Hit {
    sixth: u8,
    seventh: u8,
}

fn qualify(door_id: &str, counter: u64) -> Option<Hit> {
    let digest = md5::compute(format!("{}{}", door_id, counter));
    let [a, b, c, d, ..] = digest.0;
    (a == 0 && b == 0 && c & 0xF0 == 0).then(|| Hit {
        sixth: c & 0x0F,
        seventh: d >> 4,
    })
}

// qualifying digests in counter order, starting from counter 1
fn hits(door_id: &str) -> impl Iterator<Item = Hit> + '_ {
    (0u64..).flat_map(move |block| {
        let start = 1 + block * BLOCK;
        (start..start + BLOCK)
            .into_par_iter()
            .filter_map(|counter| qualify(door_id, counter))
            .collect::<Vec<_>>()
    })
}

// nibble -> lowercase hex, matching the canonical digest rendering
fn hex_char(nibble: u8) -> char {
    (match nibble {
        0..=9 => b'0' + nibble,
        _ => b'a' + nibble - 10,
    }) as char
}

/// First door scheme: each qualifying digest contributes its sixth hex
/// character, left to right.
pub fn crack(door_id: &str) -> String {
    assemble(hits(door_id)).expect("hit stream is endless")
}

/// Second door scheme: the sixth hex character names a slot, the seventh
/// fills it. Slots fill at most once, in counter order.
pub fn crack_secure(door_id: &str) -> String {
    assemble_slotted(hits(door_id)).expect("hit stream is endless")
}

fn assemble(hits: impl Iterator<Item = Hit>) -> Option<String> {
    let mut password = String::new();
    for hit in hits {
        password.push(hex_char(hit.sixth));
        if password.len() == PASSWORD_LEN {
            return Some(password);
        }
    }
    None
}

fn assemble_slotted(hits: impl Iterator<Item = Hit>) -> Option<String> {
    let mut slots = [None; PASSWORD_LEN];
    for hit in hits {
        let index = hit.sixth as usize;
        // slots beyond 7 are skipped, the counter advances regardless
        if index >= slots.len() || slots[index].is_some() {
            continue;
        }
        slots[index] = Some(hex_char(hit.seventh));
        if slots.iter().all(Option::is_some) {
            return Some(slots.iter().copied().flatten().collect());
        }
    }
    None
}

#[cfg(test)]
fn hit(sixth: u8, seventh: u8) -> Hit {
    Hit { sixth, seventh }
}

#[test]
fn qualifying_digest() {
    // abc3231929 is the first qualifying hash for "abc": 0000015...
    let found = qualify("abc", 3231929).unwrap();
    assert_eq!(hex_char(found.sixth), '1');
    assert_eq!(hex_char(found.seventh), '5');

    assert!(qualify("abc", 3231928).is_none());
    assert!(qualify("abc", 1).is_none());
}

#[test]
fn sequential_assembly() {
    let stream = [0x1, 0x8, 0xf, 0x4, 0x7, 0xa, 0x3, 0x0, 0x9]
        .into_iter()
        .map(|sixth| hit(sixth, 0));
    assert_eq!(assemble(stream).as_deref(), Some("18f47a30"));
}

#[test]
fn assembly_runs_dry() {
    assert_eq!(assemble(std::iter::empty()), None);
    assert_eq!(assemble_slotted([hit(3, 0xc)].into_iter()), None);
}

#[test]
fn slots_fill_once() {
    let stream = [
        (1, 5), // slot 1 takes '5'
        (4, 0xe),
        (8, 0x0),   // out of range, skipped
        (0xf, 0x9), // non-digit slot, skipped
        (0, 0),
        (1, 0xd), // slot 1 already taken, first writer wins
        (2, 0xa),
        (3, 0xc),
        (5, 8),
        (6, 0xe),
        (7, 3),
    ]
    .into_iter()
    .map(|(sixth, seventh)| hit(sixth, seventh));
    assert_eq!(assemble_slotted(stream).as_deref(), Some("05ace8e3"));
}

// the full searches hash tens of millions of counters; run with --ignored
#[test]
#[ignore]
fn cracks_passwords() {
    assert_eq!(crack("abc"), "18f47a30");
}

#[test]
#[ignore]
fn cracks_secure_passwords() {
    assert_eq!(crack_secure("abc"), "05ace8e3");
}
