//! Tie-group resolution: golfers sharing an ordinal finishing position
//! form one group and split that range of the payout curve.

use golfer_registry::GolferResult;
use std::collections::BTreeMap;

/// Golfers tied at one ordinal finishing position.
#[derive(Debug, Clone)]
pub struct TieGroup {
    /// 1-indexed finishing position shared by the group
    pub ordinal: u32,
    /// Members in input order
    pub golfers: Vec<GolferResult>,
}

impl TieGroup {
    /// Number of golfers sharing the position.
    pub fn count(&self) -> usize {
        self.golfers.len()
    }
}

/// Group golfers by parsed ordinal position, ascending. Golfers whose
/// position carries no ordinal (cut, withdrawn, unparseable) are
/// dropped; callers are expected to have filtered those already.
/// Input order is preserved within each group.
pub fn resolve_tie_groups(golfers: &[GolferResult]) -> Vec<TieGroup> {
    let mut grouped: BTreeMap<u32, Vec<GolferResult>> = BTreeMap::new();
    for golfer in golfers {
        if let Some(ordinal) = golfer.position.ordinal() {
            grouped.entry(ordinal).or_default().push(golfer.clone());
        }
    }
    grouped.into_iter().map(|(ordinal, golfers)| TieGroup { ordinal, golfers }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use golfer_registry::RawGolfer;

    fn golfer(name: &str, position: &str) -> GolferResult {
        GolferResult::from_raw(RawGolfer {
            name: name.to_string(),
            position: position.to_string(),
            score: "E".to_string(),
            thru_status: "F".to_string(),
            round: None,
            country: None,
            rounds: vec![],
        })
    }

    #[test]
    fn test_groups_tied_golfers() {
        let golfers = vec![
            golfer("A", "1"),
            golfer("B", "T2"),
            golfer("C", "T2"),
            golfer("D", "4"),
        ];

        let groups = resolve_tie_groups(&golfers);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].ordinal, 1);
        assert_eq!(groups[1].ordinal, 2);
        assert_eq!(groups[1].count(), 2);
        assert_eq!(groups[2].ordinal, 4);
    }

    #[test]
    fn test_groups_sorted_ascending_regardless_of_input_order() {
        let golfers = vec![golfer("D", "4"), golfer("A", "1"), golfer("B", "T2")];

        let groups = resolve_tie_groups(&golfers);
        let ordinals: Vec<u32> = groups.iter().map(|g| g.ordinal).collect();
        assert_eq!(ordinals, vec![1, 2, 4]);
    }

    #[test]
    fn test_insertion_order_within_group() {
        let golfers = vec![golfer("B", "T2"), golfer("C", "T2"), golfer("A", "T2")];

        let groups = resolve_tie_groups(&golfers);
        assert_eq!(groups.len(), 1);
        let names: Vec<&str> = groups[0].golfers.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_drops_golfers_without_ordinal() {
        let golfers = vec![golfer("A", "1"), golfer("B", "CUT"), golfer("C", "N/A")];

        let groups = resolve_tie_groups(&golfers);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].golfers[0].name, "A");
    }

    #[test]
    fn test_empty_input() {
        assert!(resolve_tie_groups(&[]).is_empty());
    }
}
