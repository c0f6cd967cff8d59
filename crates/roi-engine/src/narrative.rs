//! Staff insight narrative templates
//!
//! Decision logic lives in [`crate::insight`]; this module only turns a
//! chosen [`StaffInsight`] into text.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::coverage::CoverageHours;
use crate::insight::StaffInsight;
use crate::presentation::format::{format_count, round_half_up};

/// Figures a narrative may quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsightContext {
    pub current_staff: u32,
    pub optimal_staff: u32,
    pub staff_reduction: u32,
    pub ai_tickets: u64,
    pub human_tickets: u64,
    pub total_tickets: u64,
    pub current_coverage: CoverageHours,
    pub desired_coverage: CoverageHours,
}

impl InsightContext {
    /// Share of tickets the AI handles, whole percent
    pub fn ai_share_percent(&self) -> u64 {
        percent(self.ai_tickets, self.total_tickets)
    }

    /// Staff reduction relative to current staff, whole percent
    pub fn reduction_percent(&self) -> u64 {
        percent(u64::from(self.staff_reduction), u64::from(self.current_staff))
    }
}

/// Rendered insight card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightMessage {
    pub headline: String,
    pub body: String,
}

impl InsightMessage {
    fn new(headline: &str, body: String) -> Self {
        Self {
            headline: headline.into(),
            body,
        }
    }
}

fn percent(part: u64, whole: u64) -> u64 {
    if whole == 0 {
        return 0;
    }
    let ratio = Decimal::from(part) / Decimal::from(whole) * Decimal::ONE_HUNDRED;
    round_half_up(ratio).to_u64().unwrap_or_default()
}

fn plural(count: u32, singular: &'static str, plural: &'static str) -> &'static str {
    if count > 1 {
        plural
    } else {
        singular
    }
}

/// Render the narrative for `insight`
pub fn render(insight: StaffInsight, ctx: &InsightContext) -> InsightMessage {
    let current = ctx.current_coverage.label();
    let desired = ctx.desired_coverage.label();
    let ai_share = ctx.ai_share_percent();
    let ai_tickets = format_count(ctx.ai_tickets);
    let human_tickets = format_count(ctx.human_tickets);

    match insight {
        StaffInsight::SingleStaffOptimal { coverage_upgrade: true } => InsightMessage::new(
            "Expand coverage smartly!",
            format!(
                "Upgrading from {current} to {desired}. AI handles {ai_tickets} routine queries \
                 ({ai_share}%) instantly 24/7. Your single support person only handles \
                 {human_tickets} complex escalations during {desired}, and since AI resolves \
                 most issues instantly, escalations are rare and manageable with your current staff."
            ),
        ),
        StaffInsight::SingleStaffOptimal { coverage_upgrade: false } => InsightMessage::new(
            "Optimal staffing!",
            format!(
                "With AI handling {ai_tickets} tickets ({ai_share}%) instantly during {desired}, \
                 your single support person focuses on {human_tickets} complex escalations that \
                 truly need human expertise. This makes them more productive and less burned out."
            ),
        ),
        StaffInsight::TeamRepurposed { coverage_upgrade: true } => InsightMessage::new(
            "Expand coverage with same team!",
            format!(
                "Upgrading from {current} to {desired}. AI provides instant responses 24/7 for \
                 {ai_share}% of queries. Your {staff} staff members cover {desired} for escalations \
                 and complex cases only, with no additional hiring required! Most customers get \
                 instant AI help; humans handle the exceptions.",
                staff = ctx.current_staff,
            ),
        ),
        StaffInsight::TeamRepurposed { coverage_upgrade: false } => InsightMessage::new(
            "Repurpose your team!",
            format!(
                "While maintaining {desired} coverage with {staff} staff, AI handles {ai_share}% \
                 of routine queries instantly. Your team becomes an escalation team, focusing only \
                 on complex issues that need human expertise and turning support into a strategic, \
                 high-value function.",
                staff = ctx.current_staff,
            ),
        ),
        StaffInsight::ReduceWithUpgrade => InsightMessage::new(
            "Expand AND optimize!",
            format!(
                "Upgrading from {current} to {desired}. AI provides instant 24/7 responses for \
                 {ai_share}% of queries. You only need {optimal} staff for escalation coverage \
                 during {desired}, a {reduction_pct}% reduction from {staff} staff while \
                 dramatically expanding coverage! Reassign {reduction} team {members} to growth \
                 initiatives.",
                optimal = ctx.optimal_staff,
                reduction_pct = ctx.reduction_percent(),
                staff = ctx.current_staff,
                reduction = ctx.staff_reduction,
                members = plural(ctx.staff_reduction, "member", "members"),
            ),
        ),
        StaffInsight::ReduceWithoutUpgrade { single_escalation_agent: true } => InsightMessage::new(
            "Significant optimization possible!",
            format!(
                "For {desired} coverage, AI handles {ai_tickets} of {total} queries ({ai_share}%) \
                 instantly. You only need {optimal} person to handle escalations during {desired}, \
                 a {reduction_pct}% reduction from {staff} staff. Reassign {reduction} team \
                 {members} to revenue-generating work like sales or product development.",
                total = format_count(ctx.total_tickets),
                optimal = ctx.optimal_staff,
                reduction_pct = ctx.reduction_percent(),
                staff = ctx.current_staff,
                reduction = ctx.staff_reduction,
                members = plural(ctx.staff_reduction, "member", "members"),
            ),
        ),
        StaffInsight::ReduceWithoutUpgrade { single_escalation_agent: false } => InsightMessage::new(
            "Smart team optimization!",
            format!(
                "For {desired} coverage, AI handles {ai_share}% of queries instantly. Reduce from \
                 {staff} to {optimal} staff for escalation coverage, freeing {reduction} \
                 {persons} for higher-value work. Your team becomes specialists handling only \
                 complex cases that need human expertise during {desired}.",
                staff = ctx.current_staff,
                optimal = ctx.optimal_staff,
                reduction = ctx.staff_reduction,
                persons = plural(ctx.staff_reduction, "person", "persons"),
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> InsightContext {
        InsightContext {
            current_staff: 5,
            optimal_staff: 1,
            staff_reduction: 4,
            ai_tickets: 8_000,
            human_tickets: 2_000,
            total_tickets: 10_000,
            current_coverage: CoverageHours::NineByFive,
            desired_coverage: CoverageHours::NineByFive,
        }
    }

    #[test]
    fn test_percentages() {
        let ctx = context();
        assert_eq!(ctx.ai_share_percent(), 80);
        assert_eq!(ctx.reduction_percent(), 80);

        let ctx = InsightContext {
            current_staff: 3,
            staff_reduction: 2,
            ..context()
        };
        // 66.67 rounds to 67
        assert_eq!(ctx.reduction_percent(), 67);
    }

    #[test]
    fn test_zero_tickets_share_is_zero() {
        let ctx = InsightContext {
            ai_tickets: 0,
            human_tickets: 0,
            total_tickets: 0,
            ..context()
        };
        assert_eq!(ctx.ai_share_percent(), 0);
    }

    #[test]
    fn test_single_agent_reduction_text() {
        let msg = render(
            StaffInsight::ReduceWithoutUpgrade { single_escalation_agent: true },
            &context(),
        );
        assert_eq!(msg.headline, "Significant optimization possible!");
        assert!(msg.body.contains("AI handles 8,000 of 10,000 queries (80%)"));
        assert!(msg.body.contains("80% reduction from 5 staff"));
        assert!(msg.body.contains("Reassign 4 team members"));
    }

    #[test]
    fn test_upgrade_text_names_both_windows() {
        let ctx = InsightContext {
            desired_coverage: CoverageHours::AroundTheClock,
            optimal_staff: 2,
            staff_reduction: 1,
            current_staff: 3,
            ..context()
        };
        let msg = render(StaffInsight::ReduceWithUpgrade, &ctx);
        assert_eq!(msg.headline, "Expand AND optimize!");
        assert!(msg.body.starts_with("Upgrading from 9×5 business hours to 24×7 around-the-clock."));
        assert!(msg.body.contains("Reassign 1 team member to"));
    }

    #[test]
    fn test_team_plural_wording() {
        let ctx = InsightContext {
            optimal_staff: 3,
            staff_reduction: 1,
            current_staff: 4,
            ..context()
        };
        let msg = render(
            StaffInsight::ReduceWithoutUpgrade { single_escalation_agent: false },
            &ctx,
        );
        assert!(msg.body.contains("Reduce from 4 to 3 staff"));
        assert!(msg.body.contains("freeing 1 person for"));
    }

    #[test]
    fn test_every_variant_renders() {
        let variants = [
            StaffInsight::SingleStaffOptimal { coverage_upgrade: true },
            StaffInsight::SingleStaffOptimal { coverage_upgrade: false },
            StaffInsight::TeamRepurposed { coverage_upgrade: true },
            StaffInsight::TeamRepurposed { coverage_upgrade: false },
            StaffInsight::ReduceWithUpgrade,
            StaffInsight::ReduceWithoutUpgrade { single_escalation_agent: true },
            StaffInsight::ReduceWithoutUpgrade { single_escalation_agent: false },
        ];
        let headlines: std::collections::HashSet<_> = variants
            .iter()
            .map(|v| render(*v, &context()).headline)
            .collect();
        assert_eq!(headlines.len(), variants.len());
    }
}
