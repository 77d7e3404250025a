//! Keybind validator
//!
//! Validates that the critical actions have keybinds assigned
//! and checks for duplicate bindings.

use super::Keybinds;
use crate::core::actions::normalize_keybind;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub enum ValidationIssue {
    MissingCriticalBinding {
        action: String,
        field: String,
        default: String,
    },
    DuplicateBinding {
        keybind: String,
        actions: Vec<String>,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> ValidationSeverity {
        match self {
            ValidationIssue::MissingCriticalBinding { .. } => ValidationSeverity::Error,
            ValidationIssue::DuplicateBinding { .. } => ValidationSeverity::Warning,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ValidationIssue::MissingCriticalBinding {
                action,
                field,
                default,
            } => {
                format!(
                    "Critical action '{}' has no keybind! Field '{}' is empty. Default: {}",
                    action, field, default
                )
            }
            ValidationIssue::DuplicateBinding { keybind, actions } => {
                format!(
                    "Keybind '{}' is assigned to multiple actions: {}",
                    keybind,
                    actions.join(", ")
                )
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationSeverity {
    Error,
    Warning,
}

pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    #[cfg(test)]
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn has_errors(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.issues
            .iter()
            .any(|i| matches!(i.severity(), ValidationSeverity::Warning))
    }

    pub fn errors(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Error))
            .collect()
    }

    pub fn warnings(&self) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i.severity(), ValidationSeverity::Warning))
            .collect()
    }
}

/// Validate keybinds configuration
pub fn validate_keybinds(keybinds: &Keybinds) -> ValidationResult {
    let mut issues = Vec::new();

    check_critical_binding(&mut issues, "Quit", "quit", &keybinds.quit, &super::default_quit());
    check_critical_binding(
        &mut issues,
        "Next Zone",
        "next_zone",
        &keybinds.next_zone,
        "Tab",
    );

    check_duplicates(&mut issues, keybinds);

    ValidationResult { issues }
}

/// Check if a critical binding is empty
fn check_critical_binding(
    issues: &mut Vec<ValidationIssue>,
    action: &str,
    field: &str,
    value: &str,
    default: &str,
) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::MissingCriticalBinding {
            action: action.to_string(),
            field: field.to_string(),
            default: default.to_string(),
        });
    }
}

/// Check for duplicate keybind assignments
fn check_duplicates(issues: &mut Vec<ValidationIssue>, keybinds: &Keybinds) {
    // BTreeMap keeps the report order stable
    let mut keybind_map: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (field, keybind, _) in keybinds.bindings() {
        if !keybind.trim().is_empty() {
            keybind_map
                .entry(normalize_keybind(keybind))
                .or_default()
                .push(field.to_string());
        }
    }

    for (keybind, actions) in keybind_map {
        if actions.len() > 1 {
            issues.push(ValidationIssue::DuplicateBinding { keybind, actions });
        }
    }
}

/// Auto-fix validation issues by restoring defaults
pub fn auto_fix_keybinds(keybinds: &mut Keybinds, issues: &[ValidationIssue]) -> usize {
    let mut fixed_count = 0;

    for issue in issues {
        if let ValidationIssue::MissingCriticalBinding { field, default, .. } = issue {
            match field.as_str() {
                "quit" => {
                    keybinds.quit = default.clone();
                    fixed_count += 1;
                }
                "next_zone" => {
                    keybinds.next_zone = default.clone();
                    fixed_count += 1;
                }
                _ => {}
            }
        }
    }

    fixed_count
}
