//! Role classification
//!
//! Derives the role flags every view decision is built from. Pure and
//! side-effect-free: no network, no store access, so it can be recomputed
//! on every claims snapshot and unit-tested with synthetic inputs.

use super::permission_set::PermissionSet;
use serde::{Deserialize, Serialize};

/// The single role a user primarily acts as, for display purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimaryRole {
    Admin,
    Support,
    Hr,
    Manager,
    Vendor,
    Employee,
    Customer,
}

/// Derived role flags, recomputed whenever the permission set changes
///
/// Flags are assigned in strict precedence order: admin > support > hr >
/// manager > vendor > employee > customer. Once a higher flag is set, no
/// lower flag is, so a support agent who also holds a purchase code is
/// support, never vendor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleClassification {
    pub is_admin: bool,
    pub is_support: bool,
    pub is_hr: bool,
    pub is_manager: bool,
    pub is_vendor: bool,
    pub is_employee: bool,
    pub is_customer: bool,
}

impl RoleClassification {
    /// The highest-precedence flag that is set
    pub fn primary(&self) -> PrimaryRole {
        if self.is_admin {
            PrimaryRole::Admin
        } else if self.is_support {
            PrimaryRole::Support
        } else if self.is_hr {
            PrimaryRole::Hr
        } else if self.is_manager {
            PrimaryRole::Manager
        } else if self.is_vendor {
            PrimaryRole::Vendor
        } else if self.is_employee {
            PrimaryRole::Employee
        } else {
            PrimaryRole::Customer
        }
    }

    /// Whether any elevated flag is set
    pub fn is_elevated(&self) -> bool {
        self.is_admin || self.is_support || self.is_hr || self.is_manager
    }
}

/// True when any role name contains one of the given fragments,
/// case-insensitively.
fn name_matches(role_names: &[String], fragments: &[&str]) -> bool {
    role_names.iter().any(|name| {
        let lower = name.to_lowercase();
        fragments.iter().any(|f| lower.contains(f))
    })
}

/// Classify a permission set (and, as a secondary signal, role names)
/// into role flags.
///
/// Permission codes decide first: any code in a role's namespace sets
/// that role's raw signal. A role-name substring match is consulted only
/// when the codes carry no code in that namespace at all, so two inputs
/// with identical codes classify identically wherever the codes are
/// decisive. Precedence is applied by short-circuiting, top flag first.
///
/// Empty codes and empty role names yield the customer-default state:
/// every flag false except `is_customer`.
pub fn classify(codes: &PermissionSet, role_names: &[String]) -> RoleClassification {
    // Raw signals: code rule first, name fallback only where the codes
    // are silent on that namespace. A name match can add a signal the
    // codes lack, but never remove one the codes carry.
    let admin = codes.has_namespace("admin") || name_matches(role_names, &["admin"]);
    let support = codes.has_namespace("support") || name_matches(role_names, &["support"]);
    let hr = codes.has_namespace("hr") || name_matches(role_names, &["hr", "human resource"]);
    let manager = codes.has_namespace("manager") || name_matches(role_names, &["manager"]);
    let vendor = codes.has_namespace("purchase")
        || codes.has_namespace("orders")
        || name_matches(role_names, &["vendor"]);
    let employee = !codes.is_empty() || name_matches(role_names, &["employee", "staff"]);

    // Strict precedence: a set higher flag suppresses everything below.
    let is_admin = admin;
    let is_support = !is_admin && support;
    let is_hr = !is_admin && !is_support && hr;
    let is_manager = !is_admin && !is_support && !is_hr && manager;
    let is_vendor = !is_admin && !is_support && !is_hr && !is_manager && vendor;
    let is_employee = !is_admin && !is_support && !is_hr && !is_manager && !is_vendor && employee;
    let is_customer = !is_admin && !is_support && !is_hr && !is_manager && !is_vendor && !is_employee;

    RoleClassification {
        is_admin,
        is_support,
        is_hr,
        is_manager,
        is_vendor,
        is_employee,
        is_customer,
    }
}
