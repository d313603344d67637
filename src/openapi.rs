use serde_json::Value;
use utoipa::openapi::path::{Parameter, ParameterBuilder, ParameterIn};
use utoipa::openapi::schema::{ObjectBuilder, SchemaType, Type};
use utoipa::openapi::Required;
use utoipa::IntoParams;

use crate::descriptor::{
    ReportParameterDescriptor, MINIMAL_REPORT_RUN_PARAMETERS, REPORT_RUN_PARAMETERS,
};

/// The full run-reports parameter catalog, for handler docs:
///
/// ```ignore
/// #[utoipa::path(get, path = "/runreports/{reportName}", params(ReportRunParams))]
/// ```
///
/// The derive cannot express this catalog: the names are not legal field
/// identifiers (`output-type`, `Portfolio at Risk by Branch`) and the set is
/// open-ended through the `R_*` wildcard, so the trait is implemented over the
/// descriptor table instead.
pub struct ReportRunParams;

/// Reduced catalog for endpoints that only honor the core control parameters.
pub struct MinimalReportRunParams;

impl IntoParams for ReportRunParams {
    fn into_params(parameter_in_provider: impl Fn() -> Option<ParameterIn>) -> Vec<Parameter> {
        render(
            REPORT_RUN_PARAMETERS,
            parameter_in_provider().unwrap_or(ParameterIn::Query),
        )
    }
}

impl IntoParams for MinimalReportRunParams {
    fn into_params(parameter_in_provider: impl Fn() -> Option<ParameterIn>) -> Vec<Parameter> {
        render(
            MINIMAL_REPORT_RUN_PARAMETERS,
            parameter_in_provider().unwrap_or(ParameterIn::Query),
        )
    }
}

/// Render a descriptor table as OpenAPI parameters, preserving table order.
/// Every entry is an optional string-typed parameter; values are interpreted
/// by the report definition, not by the endpoint.
fn render(table: &[ReportParameterDescriptor], location: ParameterIn) -> Vec<Parameter> {
    table
        .iter()
        .map(|d| {
            let mut parameter = ParameterBuilder::new()
                .name(d.name)
                .parameter_in(location.clone())
                .required(Required::False)
                .description(Some(d.description))
                .schema(Some(
                    ObjectBuilder::new().schema_type(SchemaType::Type(Type::String)),
                ));
            if let Some(example) = d.example {
                parameter = parameter.example(Some(Value::String(example.to_string())));
            }
            parameter.build()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_params_match_catalog_order() {
        let params = ReportRunParams::into_params(|| None);
        assert_eq!(params.len(), REPORT_RUN_PARAMETERS.len());
        for (p, d) in params.iter().zip(REPORT_RUN_PARAMETERS) {
            assert_eq!(p.name, d.name);
            assert_eq!(p.description.as_deref(), Some(d.description));
        }
    }

    #[test]
    fn test_params_are_optional_query_parameters() {
        for p in ReportRunParams::into_params(|| None) {
            assert!(matches!(p.parameter_in, ParameterIn::Query));
            assert!(matches!(p.required, Required::False));
        }
    }

    #[test]
    fn test_explicit_location_is_respected() {
        let params = MinimalReportRunParams::into_params(|| Some(ParameterIn::Query));
        assert_eq!(params.len(), MINIMAL_REPORT_RUN_PARAMETERS.len());
    }

    #[test]
    fn test_examples_carry_over() {
        let params = ReportRunParams::into_params(|| None);
        let export_csv = params.iter().find(|p| p.name == "exportCSV").unwrap();
        assert_eq!(export_csv.example, Some(Value::String("true".into())));

        let wildcard = params.iter().find(|p| p.name == "R_*").unwrap();
        assert_eq!(wildcard.example, None);
    }
}
