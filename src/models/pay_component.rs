//! Pay component model.
//!
//! This module contains the [`PayComponent`] line item produced by the award
//! interpreter and consumed when a payslip's gross pay is computed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the category of pay for a component.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayComponentType;
///
/// let kind = PayComponentType::Ordinary;
/// assert_eq!(format!("{:?}", kind), "Ordinary");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayComponentType {
    /// Hours up to the daily threshold, paid at the loaded ordinary rate.
    Ordinary,
    /// Hours above the daily threshold, paid at the overtime rate.
    Overtime,
}

/// Represents a single line item in an interpreted attendance record.
///
/// Each component captures the hours worked in a category, the applicable
/// hourly rate and the resulting amount. Gross pay is the sum of all
/// component amounts, performed by the payslip builder rather than here.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayComponent, PayComponentType};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let component = PayComponent::new(
///     "ORD",
///     "Ordinary hours",
///     Decimal::from(8),
///     Decimal::from_str("30.00").unwrap(),
///     PayComponentType::Ordinary,
/// );
/// assert_eq!(component.amount, Decimal::from_str("240.00").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayComponent {
    /// Short code identifying the component (e.g. "ORD", "OT").
    pub code: String,
    /// A human-readable description of the component.
    pub description: String,
    /// The number of hours in this component.
    pub units: Decimal,
    /// The hourly rate for this component.
    pub rate: Decimal,
    /// The total amount for this component (units × rate).
    pub amount: Decimal,
    /// The category of pay.
    #[serde(rename = "type")]
    pub component_type: PayComponentType,
}

impl PayComponent {
    /// Creates a component, computing the amount from units and rate.
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        units: Decimal,
        rate: Decimal,
        component_type: PayComponentType,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            units,
            rate,
            amount: units * rate,
            component_type,
        }
    }
}
