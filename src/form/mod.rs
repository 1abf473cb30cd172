pub mod validator;

pub use validator::{validate, ValidationError};

/// Filter field sent alongside the date range.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Parameter {
    Phone,
    Voicemail,
    UserId,
    ClusterId,
}

impl Parameter {
    pub const ALL: [Parameter; 4] = [
        Parameter::Phone,
        Parameter::Voicemail,
        Parameter::UserId,
        Parameter::ClusterId,
    ];

    /// Query-string key the records endpoint expects for this filter.
    pub fn query_key(self) -> &'static str {
        match self {
            Parameter::Phone => "phone",
            Parameter::Voicemail => "voicemail",
            Parameter::UserId => "user_id",
            Parameter::ClusterId => "cluster_id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Parameter::Phone => "Phone Number",
            Parameter::Voicemail => "Voicemail",
            Parameter::UserId => "User ID",
            Parameter::ClusterId => "Cluster ID",
        }
    }

    pub fn from_query_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|param| param.query_key() == key)
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|param| *param == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.query_key())
    }
}

impl std::str::FromStr for Parameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::from_query_key(s).ok_or_else(|| {
            format!("unknown parameter `{s}` (expected phone, voicemail, user_id or cluster_id)")
        })
    }
}

/// Focusable inputs of the request form, in tab order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormField {
    StartDate,
    EndDate,
    Parameter,
    ParameterValue,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::StartDate,
        FormField::EndDate,
        FormField::Parameter,
        FormField::ParameterValue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::StartDate => "Start Date (YYYY-MM-DD)",
            FormField::EndDate => "End Date (YYYY-MM-DD)",
            FormField::Parameter => "Parameter",
            FormField::ParameterValue => "Parameter Value",
        }
    }
}

/// Raw user input. Fields are kept as typed and survive submissions.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormState {
    pub start_date: String,
    pub end_date: String,
    pub parameter: Option<Parameter>,
    pub parameter_value: String,
}

impl FormState {
    /// Text buffer behind a free-text field; `None` for the parameter selector.
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::StartDate => Some(&mut self.start_date),
            FormField::EndDate => Some(&mut self.end_date),
            FormField::ParameterValue => Some(&mut self.parameter_value),
            FormField::Parameter => None,
        }
    }

    pub fn display_value(&self, field: FormField) -> String {
        match field {
            FormField::StartDate => self.start_date.clone(),
            FormField::EndDate => self.end_date.clone(),
            FormField::ParameterValue => self.parameter_value.clone(),
            FormField::Parameter => self
                .parameter
                .map(|param| param.label().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn cycle_parameter_forward(&mut self) {
        self.parameter = Some(match self.parameter {
            Some(param) => param.next(),
            None => Parameter::ALL[0],
        });
    }

    pub fn cycle_parameter_backward(&mut self) {
        self.parameter = Some(match self.parameter {
            Some(param) => param.prev(),
            None => Parameter::ALL[Parameter::ALL.len() - 1],
        });
    }
}
