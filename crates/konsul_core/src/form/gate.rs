use crate::form::steps::{field_label, missing_fields, step, STEPS};
use crate::models::ConsultationForm;

/// Result of asking to move from one step to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Navigation permitted; the new current step.
    Moved(usize),
    /// A step between current and target is incomplete. The current step
    /// is driven back to `step` so the user lands on the offending page.
    Blocked {
        step: usize,
        title: String,
        missing: Vec<String>,
    },
    /// The form is locked; no navigation of any kind is allowed. Distinct
    /// from a validation failure on purpose.
    Locked,
}

/// Decides whether the user may move from `current` to `target`.
///
/// Going back (or staying put) is always allowed. Going forward validates
/// every step in `[current, target)` in order and halts on the first one
/// with unfilled required fields.
pub fn plan_step_change(
    current: usize,
    target: usize,
    locked: bool,
    form: &ConsultationForm,
) -> NavigationOutcome {
    if locked {
        return NavigationOutcome::Locked;
    }

    // An out-of-range target lands on the nearest real step.
    let target = target.clamp(1, STEPS.len());

    if target <= current {
        return NavigationOutcome::Moved(target);
    }

    for s in current..target {
        let Some(descriptor) = step(s) else {
            continue;
        };
        let missing = missing_fields(descriptor, form);
        if !missing.is_empty() {
            return NavigationOutcome::Blocked {
                step: s,
                title: descriptor.title.to_string(),
                missing: missing
                    .into_iter()
                    .map(|f| field_label(f).to_string())
                    .collect(),
            };
        }
    }

    NavigationOutcome::Moved(target)
}
