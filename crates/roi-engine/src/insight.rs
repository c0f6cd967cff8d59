//! Staff insight classification

use serde::{Deserialize, Serialize};

/// Staffing narrative chosen for a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StaffInsight {
    /// One person and no reduction possible
    SingleStaffOptimal { coverage_upgrade: bool },
    /// Several people, none reducible; the team is repurposed
    TeamRepurposed { coverage_upgrade: bool },
    /// Staff reducible while widening coverage
    ReduceWithUpgrade,
    /// Staff reducible at the same coverage
    ReduceWithoutUpgrade {
        /// A single escalation agent suffices
        single_escalation_agent: bool,
    },
}

impl StaffInsight {
    /// Whether the narrative talks about widening coverage
    pub fn is_coverage_upgrade(&self) -> bool {
        match self {
            Self::SingleStaffOptimal { coverage_upgrade }
            | Self::TeamRepurposed { coverage_upgrade } => *coverage_upgrade,
            Self::ReduceWithUpgrade => true,
            Self::ReduceWithoutUpgrade { .. } => false,
        }
    }
}

/// Pick the narrative. `None` when there is no current staff to talk about.
pub fn classify(
    support_staff: u32,
    optimal_staff: u32,
    staff_reduction: u32,
    coverage_upgrade: bool,
) -> Option<StaffInsight> {
    match (staff_reduction, support_staff) {
        (0, 0) => None,
        (0, 1) => Some(StaffInsight::SingleStaffOptimal { coverage_upgrade }),
        (0, _) => Some(StaffInsight::TeamRepurposed { coverage_upgrade }),
        _ if coverage_upgrade => Some(StaffInsight::ReduceWithUpgrade),
        _ => Some(StaffInsight::ReduceWithoutUpgrade {
            single_escalation_agent: optimal_staff == 1,
        }),
    }
}
