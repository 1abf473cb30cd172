use thiserror::Error;

use super::{FormField, FormState, Parameter};

/// Raised when a required form field is left empty.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
#[error("Please fill all required fields (missing: {})", .field.label())]
pub struct ValidationError {
    pub field: FormField,
}

/// Form input that passed the required-field gate.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ValidatedForm {
    pub start_date: String,
    pub end_date: String,
    pub parameter: Parameter,
    pub parameter_value: String,
}

/// Require every field to be non-empty. No format or range checks are made.
pub fn validate(form: &FormState) -> Result<ValidatedForm, ValidationError> {
    let missing = |field| ValidationError { field };

    if form.start_date.is_empty() {
        return Err(missing(FormField::StartDate));
    }
    if form.end_date.is_empty() {
        return Err(missing(FormField::EndDate));
    }
    let parameter = form.parameter.ok_or_else(|| missing(FormField::Parameter))?;
    if form.parameter_value.is_empty() {
        return Err(missing(FormField::ParameterValue));
    }

    Ok(ValidatedForm {
        start_date: form.start_date.clone(),
        end_date: form.end_date.clone(),
        parameter,
        parameter_value: form.parameter_value.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            start_date: "2024-01-01".into(),
            end_date: "2024-01-31".into(),
            parameter: Some(Parameter::Phone),
            parameter_value: "5551234".into(),
        }
    }

    #[test]
    fn accepts_fully_populated_form() {
        let validated = validate(&filled()).unwrap();
        assert_eq!(validated.parameter, Parameter::Phone);
        assert_eq!(validated.parameter_value, "5551234");
    }

    #[test]
    fn rejects_each_missing_field() {
        let cases: [(fn(&mut FormState), FormField); 4] = [
            (|f| f.start_date.clear(), FormField::StartDate),
            (|f| f.end_date.clear(), FormField::EndDate),
            (|f| f.parameter = None, FormField::Parameter),
            (|f| f.parameter_value.clear(), FormField::ParameterValue),
        ];

        for (clear, field) in cases {
            let mut form = filled();
            clear(&mut form);
            assert_eq!(validate(&form), Err(ValidationError { field }));
        }
    }

    #[test]
    fn does_not_check_date_format_or_order() {
        let mut form = filled();
        form.start_date = "next tuesday".into();
        form.end_date = "1999-01-01".into();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn whitespace_counts_as_filled() {
        let mut form = filled();
        form.parameter_value = " ".into();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn error_message_carries_alert_text() {
        let err = validate(&FormState::default()).unwrap_err();
        assert!(err.to_string().starts_with("Please fill all required fields"));
    }
}
