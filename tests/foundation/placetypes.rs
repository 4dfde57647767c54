//! Integration tests for the placetype schema

use airside_foundation::Placetype;

#[test]
fn hierarchy_reaches_every_placetype_but_garage_and_hotel() {
    let mut reached = vec![Placetype::Complex];
    let mut frontier = vec![Placetype::Complex];
    while let Some(pt) = frontier.pop() {
        for &child in pt.child_placetypes() {
            if !reached.contains(&child) {
                reached.push(child);
                frontier.push(child);
            }
        }
    }
    for pt in Placetype::ALL {
        let expected = !matches!(pt, Placetype::Garage | Placetype::Hotel);
        assert_eq!(reached.contains(&pt), expected, "{pt}");
    }
}

#[test]
fn collection_keys_are_distinct() {
    let mut keys: Vec<_> = Placetype::ALL.iter().map(|pt| pt.collection_key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), Placetype::ALL.len());
}

#[test]
fn museum_placetypes_use_museum_ids() {
    for pt in Placetype::ALL {
        let museum = matches!(pt, Placetype::Gallery | Placetype::PublicArt);
        assert_eq!(pt.alt_id_key() == "sfomuseum:id", museum, "{pt}");
    }
}

#[test]
fn garages_and_hotels_only_hold_public_art() {
    assert_eq!(Placetype::Garage.child_placetypes(), &[Placetype::PublicArt]);
    assert_eq!(Placetype::Hotel.child_placetypes(), &[Placetype::PublicArt]);
}

#[test]
fn display_is_the_index_label() {
    assert_eq!(Placetype::CommonArea.to_string(), "commonarea");
    assert_eq!("observationdeck".parse::<Placetype>().unwrap(), Placetype::ObservationDeck);
}
