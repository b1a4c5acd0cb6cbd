//! With `elem-cnt-min = elem-cnt-max = 2`, the length-3 chain `(1,1,1)`
//! is excluded, leaving exactly the two two-element chains in their
//! canonical generation order.

use princeproc::{Count, Engine, EngineParams, LineWriter, WordTable};

#[test]
fn elem_count_bounds_exclude_the_three_element_chain() {
    let mut words = WordTable::new();
    words.insert(b"a");
    words.insert(b"bc");

    let params = EngineParams::validate(3, 3, 2, 2, false).unwrap();
    let mut engine = Engine::new(words, params);

    let mut cursor = engine.cursor(Count::from_u64(0), Count::from_u64(0)).unwrap();
    let mut out = Vec::new();
    {
        let mut writer = LineWriter::new(&mut out);
        engine.run(&mut cursor, &mut writer).unwrap();
    }

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["abc", "bca"]);
}
