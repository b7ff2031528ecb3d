//! Read-only aggregation backing the admin landing view: hiring
//! candidates counted per applied position.

use crate::models::Candidate;

#[derive(Debug, Clone, PartialEq)]
pub struct HiringSummary {
    pub total: usize,
    /// Position counts in first-seen order.
    pub by_position: Vec<(String, usize)>,
}

pub fn hiring_summary(candidates: &[Candidate]) -> HiringSummary {
    let mut by_position: Vec<(String, usize)> = Vec::new();
    for candidate in candidates {
        match by_position
            .iter_mut()
            .find(|(position, _)| *position == candidate.posisi_yang_dilamar)
        {
            Some((_, count)) => *count += 1,
            None => by_position.push((candidate.posisi_yang_dilamar.clone(), 1)),
        }
    }

    HiringSummary {
        total: candidates.len(),
        by_position,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(position: &str) -> Candidate {
        Candidate {
            posisi_yang_dilamar: position.to_string(),
            ..Candidate::default()
        }
    }

    #[test]
    fn counts_per_position_in_first_seen_order() {
        let candidates = vec![
            candidate("Backend"),
            candidate("Frontend"),
            candidate("Backend"),
        ];
        let summary = hiring_summary(&candidates);
        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.by_position,
            vec![("Backend".to_string(), 2), ("Frontend".to_string(), 1)]
        );
    }

    #[test]
    fn empty_collection_yields_empty_summary() {
        let summary = hiring_summary(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.by_position.is_empty());
    }
}
