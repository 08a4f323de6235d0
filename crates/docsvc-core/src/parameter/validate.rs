//! Validation of built list parameters.

use super::query::SqlQueryParameters;
use super::{DATE_LAYOUT, MAX_PER_PAGE};
use crate::error::FieldError;
use crate::validation::Validator;

impl SqlQueryParameters {
    /// Validate the parameters against the entity's filterable and time
    /// fields. Returns one error per offending field.
    pub fn validate(&self, filterable_fields: &[&str], time_fields: &[&str]) -> Vec<FieldError> {
        let qp = &self.query_parameters;
        let mut validation = Validator::new();

        validation
            .set(
                "per_page",
                qp.per_page,
                Validator::rules().required().between(1, MAX_PER_PAGE as i32),
            )
            .set("page", qp.page, Validator::rules().required().min_value(1))
            .set(
                "order_by",
                &qp.order_by,
                Validator::rules().required().is_in(time_fields.iter().copied()),
            )
            .set(
                "order_method",
                &qp.order_method,
                Validator::rules().required().is_in(["asc", "desc"]),
            )
            .set(
                "search_condition",
                qp.search_condition.trim(),
                Validator::rules().is_in(["and", "or"]),
            )
            .set(
                "date_range_by",
                &qp.date_range_by,
                Validator::rules()
                    .is_lower_alpha_underscore()
                    .is_in(time_fields.iter().copied()),
            )
            .set("date_start", &qp.date_start, Validator::rules().is_date(DATE_LAYOUT))
            .set("date_end", &qp.date_end, Validator::rules().is_date(DATE_LAYOUT));

        for condition in &qp.equals {
            validation
                .set(
                    "equal",
                    &condition.field,
                    Validator::rules()
                        .is_lower_alpha_underscore()
                        .is_in(filterable_fields.iter().copied()),
                )
                .set(
                    format!("equal[{}]", condition.field),
                    &condition.value,
                    Validator::rules().is_alpha_numeric_space_and_special_character(),
                );
        }

        for condition in &qp.likes {
            validation
                .set(
                    "like",
                    &condition.field,
                    Validator::rules()
                        .is_lower_alpha_underscore()
                        .is_in(filterable_fields.iter().copied()),
                )
                .set(
                    format!("like[{}]", condition.field),
                    &condition.value,
                    Validator::rules().is_alpha_numeric_space_and_special_character(),
                );
        }

        for condition in &qp.not_equals {
            validation
                .set(
                    "not",
                    &condition.field,
                    Validator::rules()
                        .is_alpha()
                        .is_in(filterable_fields.iter().copied()),
                )
                .set(
                    format!("not[{}]", condition.field),
                    &condition.value,
                    Validator::rules().is_alpha_numeric_space_and_special_character(),
                );
        }

        validation.validate()
    }
}
