use super::normalize;
use super::schema::FileRecord;
use std::collections::HashMap;

/// All records sharing one series key. Never constructed empty.
#[derive(Debug, Clone)]
pub struct SeriesGroup {
    pub key: String,
    pub records: Vec<FileRecord>,
}

/// Partition records by series key.
///
/// Groups come back in first-encounter order of their key and records stay
/// in input order within a group; the assembler's tie-breaking relies on
/// both orderings being deterministic.
pub fn group_by_series(records: Vec<FileRecord>) -> Vec<SeriesGroup> {
    let mut groups: Vec<SeriesGroup> = Vec::new();
    let mut by_key: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = normalize(&record.name);
        match by_key.get(&key).copied() {
            Some(slot) => groups[slot].records.push(record),
            None => {
                by_key.insert(key.clone(), groups.len());
                groups.push(SeriesGroup { key, records: vec![record] });
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn record(name: &str, epoch: i64) -> FileRecord {
        let modified = Local.timestamp_opt(epoch, 0).unwrap();
        FileRecord::new(format!("/tmp/{name}"), name.to_string(), modified)
    }

    #[test]
    fn partitions_without_losing_records() {
        let input = vec![
            record("a_v1.txt", 100),
            record("b.txt", 150),
            record("a_v2.txt", 200),
            record("b (2).txt", 120),
        ];
        let total: usize = input.len();

        let groups = group_by_series(input);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.iter().map(|g| g.records.len()).sum::<usize>(), total);
        for group in &groups {
            assert!(!group.records.is_empty());
            for r in &group.records {
                assert_eq!(normalize(&r.name), group.key);
            }
        }
    }

    #[test]
    fn groups_appear_in_first_encounter_order() {
        let groups = group_by_series(vec![
            record("zeta_v1.txt", 10),
            record("alpha.txt", 20),
            record("zeta_v2.txt", 30),
        ]);
        assert_eq!(groups[0].key, "zeta");
        assert_eq!(groups[1].key, "alpha");
    }

    #[test]
    fn records_keep_input_order_within_a_group() {
        let groups = group_by_series(vec![
            record("n_1.txt", 300),
            record("n_2.txt", 100),
            record("n_3.txt", 200),
        ]);
        assert_eq!(groups.len(), 1);
        let names: Vec<&str> = groups[0].records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["n_1.txt", "n_2.txt", "n_3.txt"]);
    }
}
