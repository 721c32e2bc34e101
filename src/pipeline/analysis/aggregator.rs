use super::types::Finding;

/// Merge ordered findings into one summary document.
///
/// Callers hand in findings already sorted by chunk index; the merge itself
/// is a plain blank-line join and adds no markers of its own, the per-part
/// headers were written by the analyzer.
pub fn merge_findings(findings: &[Finding]) -> String {
    findings
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Count the findings that were degraded to quota placeholders.
pub fn degraded_count(findings: &[Finding]) -> usize {
    findings.iter().filter(|f| f.degraded).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(index: usize, text: &str, degraded: bool) -> Finding {
        Finding {
            index,
            text: text.into(),
            degraded,
        }
    }

    #[test]
    fn joins_with_blank_lines_in_given_order() {
        let findings = vec![
            finding(0, "Findings from Part 1:\n- a", false),
            finding(1, "Findings from Part 2:\n- b", false),
            finding(2, "Findings from Part 3:\n- c", false),
        ];

        let merged = merge_findings(&findings);
        assert_eq!(
            merged,
            "Findings from Part 1:\n- a\n\nFindings from Part 2:\n- b\n\nFindings from Part 3:\n- c"
        );
    }

    #[test]
    fn single_finding_has_no_separator() {
        let merged = merge_findings(&[finding(0, "Findings from Part 1:\n- only", false)]);
        assert!(!merged.contains("\n\n"));
    }

    #[test]
    fn empty_findings_merge_to_empty_string() {
        assert_eq!(merge_findings(&[]), "");
    }

    #[test]
    fn counts_degraded_findings() {
        let findings = vec![
            finding(0, "ok", false),
            finding(1, "placeholder", true),
            finding(2, "placeholder", true),
        ];
        assert_eq!(degraded_count(&findings), 2);
        assert_eq!(degraded_count(&[]), 0);
    }
}
