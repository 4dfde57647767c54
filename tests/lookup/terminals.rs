//! Terminal resolution against the embedded dataset.

use airside_lookup::{LookupSource, Terminal};

fn terminals() -> airside_lookup::LookupIndex<Terminal> {
    LookupSource::Embedded.build().unwrap()
}

#[test]
fn terminals_by_date_and_currency() {
    let index = terminals();
    assert_eq!(index.find_current("T2").unwrap().wof_id, 1_914_601_345);
    assert_eq!(index.find_for_date("T2", "2023").unwrap().wof_id, 1_763_588_123);
    assert_eq!(index.find_for_date("T1", "2024-07-23").unwrap().wof_id, 1_914_601_197);
}

#[test]
fn variant_names_are_aliases() {
    let index = terminals();
    let current = index.find_current("Terminal 1").unwrap();
    assert_eq!(current.name, "Harvey Milk Terminal 1");
    assert_eq!(index.find("Terminal 1").len(), 2);
    assert_eq!(index.find_current("International Terminal Building").unwrap().terminal_id, "ITB");
}

#[test]
fn display_line() {
    let index = terminals();
    assert_eq!(index.find_current("T3").unwrap().to_string(), "1763588119 Terminal 3 (1)");
}
