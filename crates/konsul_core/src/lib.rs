pub mod form;
pub mod models;
pub mod render;
pub mod validation;

use validation::{rules, ValidationEngine};

/// The full rule set a consultation form must pass before it may be
/// persisted. The public intake and the final workflow gate both run this.
pub fn standard_validator() -> ValidationEngine {
    ValidationEngine::new()
        .add_rule(rules::RuleKons001)
        .add_rule(rules::RuleKons002)
        .add_rule(rules::RuleKons003)
        .add_rule(rules::RuleKons004)
        .add_rule(rules::RuleKons005)
        .add_rule(rules::RuleKons006)
        .add_rule(rules::RuleKons007)
}
