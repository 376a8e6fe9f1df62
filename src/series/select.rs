use super::group::group_by_series;
use super::schema::FileRecord;

/// Pick the record with the greatest modification instant.
///
/// Ties go to the record that appeared earliest in the slice, so callers
/// feeding input-ordered groups get a deterministic winner.
pub fn select_latest(records: &[FileRecord]) -> Option<&FileRecord> {
    records.iter().fold(None, |best, candidate| match best {
        Some(current) if current.modified >= candidate.modified => Some(current),
        _ => Some(candidate),
    })
}

/// Reduce search hits to one latest file per series, newest first.
///
/// Winners are collected in group first-encounter order and sorted with a
/// stable sort, so records with identical timestamps keep that order.
pub fn assemble(records: Vec<FileRecord>) -> Vec<FileRecord> {
    let mut winners: Vec<FileRecord> = group_by_series(records)
        .iter()
        .filter_map(|group| select_latest(&group.records).cloned())
        .collect();
    winners.sort_by(|a, b| b.modified.cmp(&a.modified));
    winners
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
    fn selects_the_maximum_timestamp() {
        let group = vec![
            record("a_v1.txt", 100),
            record("a_v3.txt", 300),
            record("a_v2.txt", 200),
        ];
        let latest = select_latest(&group).unwrap();
        assert_eq!(latest.name, "a_v3.txt");
        for r in &group {
            assert!(latest.modified >= r.modified);
        }
    }

    #[test]
    fn timestamp_ties_go_to_the_earliest_input() {
        let group = vec![
            record("a_v1.txt", 500),
            record("a_v2.txt", 500),
            record("a_v3.txt", 500),
        ];
        assert_eq!(select_latest(&group).unwrap().name, "a_v1.txt");
    }

    #[test]
    fn empty_group_yields_none() {
        assert!(select_latest(&[]).is_none());
    }

    #[test]
    fn assembles_one_winner_per_series_newest_first() {
        let out = assemble(vec![
            record("a_v1.txt", 100),
            record("a_v2.txt", 200),
            record("b.txt", 150),
        ]);
        let names: Vec<&str> = out.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a_v2.txt", "b.txt"]);
    }

    #[test]
    fn output_is_non_increasing_in_mtime() {
        let out = assemble(vec![
            record("a_v1.txt", 10),
            record("b_1.txt", 400),
            record("c.txt", 250),
            record("a_v2.txt", 300),
            record("d (2).txt", 250),
        ]);
        for pair in out.windows(2) {
            assert!(pair[0].modified >= pair[1].modified);
        }
    }

    #[test]
    fn cross_group_ties_keep_first_encounter_order() {
        let out = assemble(vec![
            record("x_v1.txt", 100),
            record("y_v1.txt", 100),
        ]);
        let names: Vec<&str> = out.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["x_v1.txt", "y_v1.txt"]);
    }

    #[test]
    fn single_record_survives_untouched() {
        let out = assemble(vec![record("only.txt", 42)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "only.txt");
        assert_eq!(out[0].modified_epoch, 42);
    }
}
