// =============================================================================
// RUN-REPORTS CONTROL PARAMETER NAMES
// =============================================================================

/// Marks the request as a self-service user report
pub const IS_SELF_SERVICE_USER_REPORT: &str = "isSelfServiceUserReport";

/// Set to true to export results as CSV instead of the JSON resultset
pub const EXPORT_CSV: &str = "exportCSV";

/// Marks the request as a parameter-type request
pub const PARAMETER_TYPE: &str = "parameterType";

/// Output format for engine-rendered reports (HTML, XLS, CSV, PDF)
pub const OUTPUT_TYPE: &str = "output-type";

/// Enables business-date filtering
pub const ENABLE_BUSINESS_DATE: &str = "enable-business-date";

/// Obligation date type
pub const OBLIG_DATE_TYPE: &str = "obligDateType";

/// Decimal formatting choice
pub const DECIMAL_CHOICE: &str = "decimalChoice";

/// Portfolio at Risk by Branch parameter
pub const PORTFOLIO_RISK_BRANCH: &str = "Portfolio at Risk by Branch";

/// Prefix shared by report-specific filter parameters. The reporting engine
/// forwards any `R_`-prefixed query parameter to the report definition as a
/// filter value; this crate only documents the convention.
pub const REPORT_PARAMETER_PREFIX: &str = "R_";

/// Catalog entry standing in for the open-ended set of `R_`-prefixed
/// report-specific parameters.
pub const REPORT_PARAMETER_WILDCARD: &str = "R_*";

/// Long-form usage documentation for the run-reports resource, rendered as the
/// endpoint description by the OpenAPI documentation UI.
pub const FULL_DESCRIPTION: &str = r#"This resource allows you to run and receive output from pre-defined platform reports.

Reports can also be used to provide data for searching and workflow functionality.

The default output is a JSON formatted "Generic Resultset". The Generic Resultset contains Column Heading as well as Data information. However, you can export to CSV format by simply adding "&exportCSV=true" to the end of your URL.

If Pentaho reports have been pre-defined, they can also be run through this resource. Pentaho reports can return HTML, PDF or CSV formats.

The reference web application uses a JQuery plugin called stretchy reporting which, itself, uses this reports resource to provide a pretty flexible reporting User Interface (UI).

Example Requests:

runreports/Client%20Listing?R_officeId=1

runreports/Client%20Listing?R_officeId=1&exportCSV=true

runreports/OfficeIdSelectOne?R_officeId=1&parameterType=true

runreports/OfficeIdSelectOne?R_officeId=1&parameterType=true&exportCSV=true

runreports/Expected%20Payments%20By%20Date%20-%20Formatted?R_endDate=2013-04-30&R_loanOfficerId=-1&R_officeId=1&R_startDate=2013-04-16&output-type=HTML&R_officeId=1

runreports/Expected%20Payments%20By%20Date%20-%20Formatted?R_endDate=2013-04-30&R_loanOfficerId=-1&R_officeId=1&R_startDate=2013-04-16&output-type=XLS&R_officeId=1

runreports/Expected%20Payments%20By%20Date%20-%20Formatted?R_endDate=2013-04-30&R_loanOfficerId=-1&R_officeId=1&R_startDate=2013-04-16&output-type=CSV&R_officeId=1

runreports/Expected%20Payments%20By%20Date%20-%20Formatted?R_endDate=2013-04-30&R_loanOfficerId=-1&R_officeId=1&R_startDate=2013-04-16&output-type=PDF&R_officeId=1

**Available Parameters (All Optional):**

**Common Control Parameters:**
- `isSelfServiceUserReport`: Indicates if this is a self-service user report (default: false)
- `exportCSV`: Set to true to export results as CSV (default: false)
- `parameterType`: Indicates if this is a parameter type request (default: false)
- `output-type`: Output format type (HTML, XLS, CSV, PDF)
- `enable-business-date`: Enable business date filtering
- `obligDateType`: Obligation date type
- `decimalChoice`: Decimal formatting choice
- `Portfolio at Risk by Branch`: Portfolio risk parameter

**Common Report Parameters (R_ prefixed):**
- `R_officeId`: Office ID filter
- `R_loanOfficerId`: Loan officer ID filter
- `R_currencyId`: Currency ID filter
- `R_fromDate`, `R_toDate`: Date range filters (yyyy-MM-dd)
- `R_accountNo`: Account number filter
- `R_transactionId`: Transaction ID filter
- `R_centerId`: Center ID filter
- `R_branch`: Branch filter
- `R_ondate`: Specific date filter
- `R_cycleX`, `R_cycleY`: Cycle filters
- `R_fromX`, `R_toY`: Range filters
- `R_overdueX`, `R_overdueY`: Overdue filters
- `R_endDate`: End date filter

**Other Common Parameters:**
- `OfficeId`: Office ID filter (alternative)
- `loanOfficerId`: Loan officer ID filter (alternative)
- `currencyId`: Currency ID filter (alternative)
- `fundId`: Fund ID filter
- `loanProductId`: Loan product ID filter
- `loanPurposeId`: Loan purpose ID filter
- `parType`: Portfolio at risk type
- `SelectGLAccountNO`: GL account number selection
- `SavingsAccountSubStatus`: Savings account status
- `SelectLoanType`: Loan type selection

**Note:** All parameters are optional and report-specific.
The exact parameters required depend on the specific report being executed.
Some reports may accept additional parameters not listed here."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_name_literals() {
        assert_eq!(IS_SELF_SERVICE_USER_REPORT, "isSelfServiceUserReport");
        assert_eq!(EXPORT_CSV, "exportCSV");
        assert_eq!(PARAMETER_TYPE, "parameterType");
        assert_eq!(OUTPUT_TYPE, "output-type");
        assert_eq!(ENABLE_BUSINESS_DATE, "enable-business-date");
        assert_eq!(OBLIG_DATE_TYPE, "obligDateType");
        assert_eq!(DECIMAL_CHOICE, "decimalChoice");
        assert_eq!(PORTFOLIO_RISK_BRANCH, "Portfolio at Risk by Branch");
    }

    #[test]
    fn test_no_duplicate_control_parameter_names() {
        let names = [
            IS_SELF_SERVICE_USER_REPORT,
            EXPORT_CSV,
            PARAMETER_TYPE,
            OUTPUT_TYPE,
            ENABLE_BUSINESS_DATE,
            OBLIG_DATE_TYPE,
            DECIMAL_CHOICE,
            PORTFOLIO_RISK_BRANCH,
        ];
        for (i, name) in names.iter().enumerate() {
            assert!(!name.is_empty());
            assert!(!names[i + 1..].contains(name), "duplicate name: {}", name);
        }
    }

    #[test]
    fn test_wildcard_matches_report_parameter_prefix() {
        assert!(REPORT_PARAMETER_WILDCARD.starts_with(REPORT_PARAMETER_PREFIX));
    }

    #[test]
    fn test_description_contains_example_requests() {
        let examples = [
            "runreports/Client%20Listing?R_officeId=1",
            "runreports/Client%20Listing?R_officeId=1&exportCSV=true",
            "runreports/OfficeIdSelectOne?R_officeId=1&parameterType=true",
            "runreports/OfficeIdSelectOne?R_officeId=1&parameterType=true&exportCSV=true",
            "runreports/Expected%20Payments%20By%20Date%20-%20Formatted?R_endDate=2013-04-30&R_loanOfficerId=-1&R_officeId=1&R_startDate=2013-04-16&output-type=HTML&R_officeId=1",
            "runreports/Expected%20Payments%20By%20Date%20-%20Formatted?R_endDate=2013-04-30&R_loanOfficerId=-1&R_officeId=1&R_startDate=2013-04-16&output-type=XLS&R_officeId=1",
            "runreports/Expected%20Payments%20By%20Date%20-%20Formatted?R_endDate=2013-04-30&R_loanOfficerId=-1&R_officeId=1&R_startDate=2013-04-16&output-type=CSV&R_officeId=1",
            "runreports/Expected%20Payments%20By%20Date%20-%20Formatted?R_endDate=2013-04-30&R_loanOfficerId=-1&R_officeId=1&R_startDate=2013-04-16&output-type=PDF&R_officeId=1",
        ];
        for example in examples {
            assert!(FULL_DESCRIPTION.contains(example), "missing example: {}", example);
        }
    }

    #[test]
    fn test_description_mentions_every_control_parameter() {
        for name in [
            IS_SELF_SERVICE_USER_REPORT,
            EXPORT_CSV,
            PARAMETER_TYPE,
            OUTPUT_TYPE,
            ENABLE_BUSINESS_DATE,
            OBLIG_DATE_TYPE,
            DECIMAL_CHOICE,
            PORTFOLIO_RISK_BRANCH,
        ] {
            assert!(FULL_DESCRIPTION.contains(name), "not documented: {}", name);
        }
    }
}
