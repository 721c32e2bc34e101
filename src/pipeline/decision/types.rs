use serde::Serialize;

/// The structured verdict parsed from the decision model's response.
///
/// Every field is optional: the model is asked for all three but real
/// responses omit or null fields, and a partial decision is still worth
/// surfacing. Parsing from model output goes through the tolerant scanner
/// in the parser module, not through a serde derive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub decision: Option<String>,
    pub amount: Option<String>,
    pub justification: Option<String>,
}

/// Classified reading of the free-text decision field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Rejected,
    Unclear,
}

impl Decision {
    /// Classify the decision field. Anything other than a clean
    /// approved/rejected value reads as unclear, never as a default verdict.
    pub fn verdict(&self) -> Verdict {
        match self.decision.as_deref().map(|d| d.trim().to_ascii_lowercase()) {
            Some(d) if d == "approved" => Verdict::Approved,
            Some(d) if d == "rejected" => Verdict::Rejected,
            _ => Verdict::Unclear,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Approved => write!(f, "APPROVED"),
            Verdict::Rejected => write!(f, "REJECTED"),
            Verdict::Unclear => write!(f, "UNCLEAR"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(field: Option<&str>) -> Decision {
        Decision {
            decision: field.map(String::from),
            amount: None,
            justification: None,
        }
    }

    #[test]
    fn classifies_approved_and_rejected_case_insensitively() {
        assert_eq!(decision(Some("approved")).verdict(), Verdict::Approved);
        assert_eq!(decision(Some("  Approved ")).verdict(), Verdict::Approved);
        assert_eq!(decision(Some("REJECTED")).verdict(), Verdict::Rejected);
    }

    #[test]
    fn anything_else_is_unclear() {
        assert_eq!(decision(None).verdict(), Verdict::Unclear);
        assert_eq!(decision(Some("")).verdict(), Verdict::Unclear);
        assert_eq!(decision(Some("partially approved")).verdict(), Verdict::Unclear);
        assert_eq!(decision(Some("pending")).verdict(), Verdict::Unclear);
    }

    #[test]
    fn verdict_display_is_uppercase() {
        assert_eq!(Verdict::Approved.to_string(), "APPROVED");
        assert_eq!(Verdict::Unclear.to_string(), "UNCLEAR");
    }
}
