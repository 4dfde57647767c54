//! Properties of derivation over generated hierarchies.

use airside_campus::{DeriveOptions, Deriver};
use airside_storage::Catalog;
use proptest::prelude::*;
use serde_json::json;

/// Per terminal: whether it is deprecated, and the deprecation flags of the
/// gates in its single boarding area.
type Layout = Vec<(bool, Vec<bool>)>;

fn build(layout: &Layout) -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert_properties(json!({"wof:id": 1, "mz:is_current": 1})).unwrap();

    for (i, (deprecated, gates)) in layout.iter().enumerate() {
        let i = i64::try_from(i).unwrap();
        let terminal = 100 + i;
        let area = 1000 + i;
        let mut doc = json!({
            "wof:id": terminal, "wof:parent_id": 1, "sfomuseum:placetype": "terminal",
            "mz:is_current": 1, "sfo:id": format!("T{i}"),
        });
        if *deprecated {
            doc["edtf:deprecated"] = json!("2020-01-01");
        }
        catalog.insert_properties(doc).unwrap();
        catalog
            .insert_properties(json!({
                "wof:id": area, "wof:parent_id": terminal, "sfomuseum:placetype": "boardingarea",
                "mz:is_current": 1, "sfo:id": format!("BA{i}"),
            }))
            .unwrap();

        for (j, gate_deprecated) in gates.iter().enumerate() {
            let j = i64::try_from(j).unwrap();
            let mut doc = json!({
                "wof:id": 10_000 + i * 10 + j, "wof:parent_id": area, "sfomuseum:placetype": "gate",
                "mz:is_current": 1, "wof:name": format!("G{i}-{j}"),
            });
            if *gate_deprecated {
                doc["edtf:deprecated"] = json!("2020-01-01");
            }
            catalog.insert_properties(doc).unwrap();
        }
    }
    catalog
}

fn layout() -> impl Strategy<Value = Layout> {
    prop::collection::vec((any::<bool>(), prop::collection::vec(any::<bool>(), 0..5)), 0..5)
}

proptest! {
    #[test]
    fn derived_trees_hold_no_deprecated_records(layout in layout()) {
        let catalog = build(&layout);
        let deriver = Deriver::with_options(&catalog, &catalog, DeriveOptions::quiet());
        let complex = deriver.derive_complex(Some(1)).unwrap();

        for ids in complex.ids_by_placetype().values() {
            for id in ids {
                prop_assert!(!catalog.get(*id).unwrap().is_deprecated());
            }
        }

        let expected: usize = 1 + layout
            .iter()
            .filter(|(deprecated, _)| !deprecated)
            .map(|(_, gates)| 2 + gates.iter().filter(|d| !**d).count())
            .sum::<usize>();
        prop_assert_eq!(complex.count(), expected);
    }
}
