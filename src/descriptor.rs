use std::collections::HashMap;

use lazy_static::lazy_static;
use serde::Serialize;
use utoipa::ToSchema;

use crate::constants::{
    DECIMAL_CHOICE, ENABLE_BUSINESS_DATE, EXPORT_CSV, IS_SELF_SERVICE_USER_REPORT, OBLIG_DATE_TYPE,
    OUTPUT_TYPE, PARAMETER_TYPE, PORTFOLIO_RISK_BRANCH, REPORT_PARAMETER_WILDCARD,
};

/// One documented request parameter of the run-reports resource.
///
/// `example` is absent for the `R_*` wildcard entry, which documents a name
/// pattern rather than a concrete parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ReportParameterDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<&'static str>,
}

/// Every parameter the run-reports resource recognizes, in documentation
/// display order: control parameters first, then the common `R_`-prefixed
/// report filters, then the remaining common filters, closing with the
/// wildcard entry.
pub const REPORT_RUN_PARAMETERS: &[ReportParameterDescriptor] = &[
    ReportParameterDescriptor {
        name: IS_SELF_SERVICE_USER_REPORT,
        description: "Optional - Indicates if this is a self-service user report",
        example: Some("false"),
    },
    ReportParameterDescriptor {
        name: EXPORT_CSV,
        description: "Optional - Set to true to export results as CSV",
        example: Some("true"),
    },
    ReportParameterDescriptor {
        name: PARAMETER_TYPE,
        description: "Optional - Indicates if this is a parameter type request",
        example: Some("false"),
    },
    ReportParameterDescriptor {
        name: OUTPUT_TYPE,
        description: "Optional - Output format type (HTML, XLS, CSV, PDF)",
        example: Some("HTML"),
    },
    ReportParameterDescriptor {
        name: ENABLE_BUSINESS_DATE,
        description: "Optional - Enable business date filtering",
        example: Some("true"),
    },
    ReportParameterDescriptor {
        name: OBLIG_DATE_TYPE,
        description: "Optional - Obligation date type",
        example: Some("due"),
    },
    ReportParameterDescriptor {
        name: DECIMAL_CHOICE,
        description: "Optional - Decimal formatting choice",
        example: Some("2"),
    },
    ReportParameterDescriptor {
        name: PORTFOLIO_RISK_BRANCH,
        description: "Optional - Portfolio at Risk by Branch parameter",
        example: Some("30"),
    },
    ReportParameterDescriptor {
        name: "R_officeId",
        description: "Optional - Office ID filter",
        example: Some("1"),
    },
    ReportParameterDescriptor {
        name: "R_loanOfficerId",
        description: "Optional - Loan officer ID filter",
        example: Some("5"),
    },
    ReportParameterDescriptor {
        name: "R_currencyId",
        description: "Optional - Currency ID filter",
        example: Some("USD"),
    },
    ReportParameterDescriptor {
        name: "R_fromDate",
        description: "Optional - Start date filter (yyyy-MM-dd)",
        example: Some("2023-01-01"),
    },
    ReportParameterDescriptor {
        name: "R_toDate",
        description: "Optional - End date filter (yyyy-MM-dd)",
        example: Some("2023-12-31"),
    },
    ReportParameterDescriptor {
        name: "R_accountNo",
        description: "Optional - Account number filter",
        example: Some("00010001"),
    },
    ReportParameterDescriptor {
        name: "R_transactionId",
        description: "Optional - Transaction ID filter",
        example: Some("12345"),
    },
    ReportParameterDescriptor {
        name: "R_centerId",
        description: "Optional - Center ID filter",
        example: Some("10"),
    },
    ReportParameterDescriptor {
        name: "R_branch",
        description: "Optional - Branch filter",
        example: Some("Main"),
    },
    ReportParameterDescriptor {
        name: "R_ondate",
        description: "Optional - Specific date filter",
        example: Some("2023-06-15"),
    },
    ReportParameterDescriptor {
        name: "R_cycleX",
        description: "Optional - Cycle X filter",
        example: Some("1"),
    },
    ReportParameterDescriptor {
        name: "R_cycleY",
        description: "Optional - Cycle Y filter",
        example: Some("12"),
    },
    ReportParameterDescriptor {
        name: "R_fromX",
        description: "Optional - From X value filter",
        example: Some("0"),
    },
    ReportParameterDescriptor {
        name: "R_toY",
        description: "Optional - To Y value filter",
        example: Some("100"),
    },
    ReportParameterDescriptor {
        name: "R_overdueX",
        description: "Optional - Overdue X days filter",
        example: Some("30"),
    },
    ReportParameterDescriptor {
        name: "R_overdueY",
        description: "Optional - Overdue Y days filter",
        example: Some("90"),
    },
    ReportParameterDescriptor {
        name: "R_endDate",
        description: "Optional - End date filter",
        example: Some("2023-12-31"),
    },
    ReportParameterDescriptor {
        name: "OfficeId",
        description: "Optional - Office ID filter (alternative)",
        example: Some("1"),
    },
    ReportParameterDescriptor {
        name: "loanOfficerId",
        description: "Optional - Loan officer ID filter (alternative)",
        example: Some("5"),
    },
    ReportParameterDescriptor {
        name: "currencyId",
        description: "Optional - Currency ID filter (alternative)",
        example: Some("USD"),
    },
    ReportParameterDescriptor {
        name: "fundId",
        description: "Optional - Fund ID filter",
        example: Some("1"),
    },
    ReportParameterDescriptor {
        name: "loanProductId",
        description: "Optional - Loan product ID filter",
        example: Some("2"),
    },
    ReportParameterDescriptor {
        name: "loanPurposeId",
        description: "Optional - Loan purpose ID filter",
        example: Some("3"),
    },
    ReportParameterDescriptor {
        name: "parType",
        description: "Optional - Portfolio at risk type",
        example: Some("30"),
    },
    ReportParameterDescriptor {
        name: "SelectGLAccountNO",
        description: "Optional - GL account number selection",
        example: Some("11001"),
    },
    ReportParameterDescriptor {
        name: "SavingsAccountSubStatus",
        description: "Optional - Savings account sub-status",
        example: Some("active"),
    },
    ReportParameterDescriptor {
        name: "SelectLoanType",
        description: "Optional - Loan type selection",
        example: Some("individual"),
    },
    ReportParameterDescriptor {
        name: REPORT_PARAMETER_WILDCARD,
        description: "Optional - Additional report-specific parameters prefixed with 'R_'",
        example: None,
    },
];

/// Reduced catalog for endpoints that only honor the core control parameters.
pub const MINIMAL_REPORT_RUN_PARAMETERS: &[ReportParameterDescriptor] = &[
    ReportParameterDescriptor {
        name: IS_SELF_SERVICE_USER_REPORT,
        description: "Optional - Indicates if this is a self-service user report",
        example: Some("false"),
    },
    ReportParameterDescriptor {
        name: EXPORT_CSV,
        description: "Optional - Set to true to export results as CSV",
        example: Some("true"),
    },
    ReportParameterDescriptor {
        name: PARAMETER_TYPE,
        description: "Optional - Indicates if this is a parameter type request",
        example: Some("false"),
    },
    ReportParameterDescriptor {
        name: OUTPUT_TYPE,
        description: "Optional - Output format type (HTML, XLS, CSV, PDF)",
        example: Some("HTML"),
    },
    ReportParameterDescriptor {
        name: REPORT_PARAMETER_WILDCARD,
        description: "Optional - Report-specific parameters prefixed with 'R_'",
        example: None,
    },
];

lazy_static! {
    /// Index over the full table, keyed by parameter name.
    static ref BY_NAME: HashMap<&'static str, &'static ReportParameterDescriptor> =
        REPORT_RUN_PARAMETERS.iter().map(|d| (d.name, d)).collect();
}

/// Look up a parameter's descriptor by its exact name.
///
/// Only names present in the full catalog resolve; this is catalog access,
/// not request validation.
pub fn by_name(name: &str) -> Option<&'static ReportParameterDescriptor> {
    BY_NAME.get(name).copied()
}
