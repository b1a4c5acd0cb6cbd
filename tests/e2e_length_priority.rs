//! The default length-priority table interleaves a short, low-priority
//! length ahead of a longer, higher-priority one — length 1 (priority 15)
//! is visited before length 2 (priority 56) finishes its first batch.

use princeproc::{Count, Engine, EngineParams, LineWriter, WordTable};

#[test]
fn short_low_priority_length_surfaces_candidates_before_longer_length_drains() {
    let mut words = WordTable::new();
    words.insert(b"a");
    words.insert(b"b");
    for i in 0..1000u32 {
        words.insert(format!("{i:04}").as_bytes());
    }

    let params = EngineParams::validate(1, 4, 1, 8, false).unwrap();
    let mut engine = Engine::new(words, params);
    let mut cursor = engine
        .cursor(Count::from_u64(0), Count::from_u64(0))
        .unwrap();
    let mut out = Vec::new();
    {
        let mut writer = LineWriter::new(&mut out);
        engine.run(&mut cursor, &mut writer).unwrap();
    }

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // Both length-1 candidates appear before the first length-4 one, since
    // length 1 (priority 15) is scheduled ahead of length 4 (priority 3540)
    // and its entire keyspace (2) fits in one batch.
    let first_len4_pos = lines.iter().position(|l| l.len() == 4).unwrap();
    let len1_before: usize = lines[..first_len4_pos]
        .iter()
        .filter(|l| l.len() == 1)
        .count();
    assert_eq!(len1_before, 2);
}
