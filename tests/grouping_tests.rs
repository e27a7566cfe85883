use dotplot_rs::core::{Record, group_by_state};
use proptest::prelude::*;

#[test]
fn grouping_keeps_first_seen_state_order() {
    let records = vec![
        Record::new("Texas", 24.0, 12.0),
        Record::new("Alaska", 17.3, 13.5),
        Record::new("Texas", 20.0, 10.0),
        Record::new("Alabama", 14.1, 10.2),
    ];

    let grouped = group_by_state(&records);
    let keys: Vec<&str> = grouped.iter().map(|entry| entry.key.as_str()).collect();
    assert_eq!(keys, vec!["Texas", "Alaska", "Alabama"]);

    let texas = &grouped[0];
    assert_eq!(texas.values().len(), 2);
    assert_eq!(texas.first(), &records[0]);
    assert_eq!(texas.values()[1], records[2]);
}

#[test]
fn grouping_empty_input_yields_no_entries() {
    assert!(group_by_state(&[]).is_empty());
}

#[test]
fn one_record_per_state_maps_one_to_one() {
    let records = vec![
        Record::new("Ohio", 9.0, 7.0),
        Record::new("Utah", 10.0, 8.5),
    ];
    let grouped = group_by_state(&records);
    assert_eq!(grouped.len(), 2);
    for (entry, record) in grouped.iter().zip(&records) {
        assert_eq!(entry.key, record.state);
        assert_eq!(entry.values(), std::slice::from_ref(record));
    }
}

proptest! {
    #[test]
    fn grouping_partitions_the_input(
        rows in proptest::collection::vec((0usize..8, 0.0f64..30.0, 0.0f64..30.0), 0..64)
    ) {
        let records: Vec<Record> = rows
            .iter()
            .map(|(state, male, female)| Record::new(format!("state-{state}"), *male, *female))
            .collect();

        let grouped = group_by_state(&records);

        let mut distinct: Vec<&str> = Vec::new();
        for record in &records {
            if !distinct.contains(&record.state.as_str()) {
                distinct.push(record.state.as_str());
            }
        }
        prop_assert_eq!(grouped.len(), distinct.len());

        let mut total = 0;
        for (entry, key) in grouped.iter().zip(&distinct) {
            prop_assert_eq!(entry.key.as_str(), *key);
            prop_assert!(!entry.values().is_empty());
            for value in entry.values() {
                prop_assert_eq!(&value.state, &entry.key);
            }
            let expected: Vec<&Record> =
                records.iter().filter(|record| record.state == entry.key).collect();
            let actual: Vec<&Record> = entry.values().iter().collect();
            prop_assert_eq!(actual, expected);
            total += entry.values().len();
        }
        prop_assert_eq!(total, records.len());
    }
}
