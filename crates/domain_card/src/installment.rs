//! Installment display projection and cross-statement sibling resolution
//!
//! An installment's stored purchase date is the original purchase date;
//! what a statement shows is that date transposed into the statement's
//! month. Sibling resolution finds the rest of a deferred purchase when a
//! single statement is on screen: the charges of the same group billed on
//! other statements, past or future.

use std::collections::{BTreeSet, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use core_kernel::calendar::clamp_day;
use core_kernel::InstallmentGroupId;

use crate::charge::Charge;

/// Projects the display date of one installment into its statement's month
///
/// The result keeps the statement's year and month and carries the
/// original purchase day, clamped to the month's length. Display-only: it
/// never feeds back into the charge's statement assignment.
pub fn project_display_date(
    statement_due_date: NaiveDate,
    original_purchase_date: NaiveDate,
) -> NaiveDate {
    // Both components come from valid dates, so the clamp cannot fail.
    clamp_day(
        statement_due_date.year(),
        statement_due_date.month(),
        original_purchase_date.day(),
    )
    .unwrap_or(statement_due_date)
}

/// An installment of a group present in the current statement, billed on a
/// different statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalSibling {
    pub charge: Charge,
    /// Always true; kept so mixed charge lists stay self-describing
    pub is_external: bool,
    pub can_edit: bool,
    pub can_delete: bool,
}

impl ExternalSibling {
    fn tag(charge: Charge) -> Self {
        let editable = !charge.settled;
        Self {
            is_external: true,
            can_edit: editable,
            can_delete: editable,
            charge,
        }
    }
}

/// Advisory finding for a group whose members do not line up
///
/// Non-fatal: a partially-migrated dataset must still render. The caller
/// decides whether to badge the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDiagnostic {
    pub group_id: InstallmentGroupId,
    pub expected_count: u32,
    pub actual_count: u32,
    pub missing_indices: Vec<u32>,
    pub duplicate_indices: Vec<u32>,
}

/// Result of sibling resolution for one statement
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiblingResolution {
    /// External siblings, ascending by installment index
    pub externals: Vec<ExternalSibling>,
    /// Groups in the current statement with inconsistent membership
    pub diagnostics: Vec<GroupDiagnostic>,
}

/// Finds the sibling installments of the current statement's groups that
/// are billed on other statements
///
/// `all_charges_for_card` is the full charge set of the card; charges of
/// the current statement found there are not reported as external. Each
/// external is tagged editable/deletable iff it has not settled.
pub fn resolve_external_siblings(
    current_statement_charges: &[Charge],
    all_charges_for_card: &[Charge],
) -> SiblingResolution {
    let Some(current_due) = current_statement_charges
        .first()
        .map(|c| c.statement_due_date)
    else {
        return SiblingResolution::default();
    };

    let group_ids: BTreeSet<InstallmentGroupId> = current_statement_charges
        .iter()
        .filter_map(|c| c.installment_group_id)
        .collect();

    let mut externals: Vec<ExternalSibling> = all_charges_for_card
        .iter()
        .filter(|c| {
            c.installment_group_id
                .is_some_and(|group| group_ids.contains(&group))
                && c.statement_due_date != current_due
        })
        .cloned()
        .map(ExternalSibling::tag)
        .collect();
    externals.sort_by_key(|s| s.charge.installment_index);

    let diagnostics = group_ids
        .iter()
        .filter_map(|group_id| {
            check_group_membership(*group_id, current_statement_charges, all_charges_for_card)
        })
        .collect();

    SiblingResolution {
        externals,
        diagnostics,
    }
}

/// Verifies that a group's members, across every statement, carry exactly
/// the indices `1..=installment_count`
fn check_group_membership(
    group_id: InstallmentGroupId,
    current_statement_charges: &[Charge],
    all_charges_for_card: &[Charge],
) -> Option<GroupDiagnostic> {
    let mut seen = HashSet::new();
    let mut indices: Vec<u32> = Vec::new();
    let mut expected_count = 0u32;

    // The current statement's charges may or may not be repeated in the
    // full set; dedupe by charge id.
    for charge in all_charges_for_card
        .iter()
        .chain(current_statement_charges.iter())
    {
        if charge.installment_group_id == Some(group_id) && seen.insert(charge.id) {
            indices.push(charge.installment_index);
            expected_count = expected_count.max(charge.installment_count);
        }
    }
    indices.sort_unstable();

    let actual_count = indices.len() as u32;
    let missing_indices: Vec<u32> = (1..=expected_count)
        .filter(|index| indices.binary_search(index).is_err())
        .collect();
    let mut duplicate_indices: Vec<u32> = indices
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0])
        .collect();
    duplicate_indices.dedup();

    if actual_count == expected_count && missing_indices.is_empty() && duplicate_indices.is_empty()
    {
        return None;
    }

    tracing::warn!(
        group_id = %group_id,
        expected_count,
        actual_count,
        "installment group has inconsistent membership"
    );

    Some(GroupDiagnostic {
        group_id,
        expected_count,
        actual_count,
        missing_indices,
        duplicate_indices,
    })
}
