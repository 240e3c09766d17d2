//! Field data model for the registration form

use super::error::InputError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one of the seven form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Address,
    Mobile,
    Email,
    Gender,
    Dob,
    Course,
}

impl FieldName {
    pub const ALL: [FieldName; 7] = [
        FieldName::Name,
        FieldName::Address,
        FieldName::Mobile,
        FieldName::Email,
        FieldName::Gender,
        FieldName::Dob,
        FieldName::Course,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::Mobile => "mobile",
            Self::Email => "email",
            Self::Gender => "gender",
            Self::Dob => "dob",
            Self::Course => "course",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Mobile => "Mobile",
            Self::Email => "Email (abc@gmail.com)",
            Self::Gender => "Gender",
            Self::Dob => "Date of Birth (YYYY-MM-DD)",
            Self::Course => "Course",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| InputError::UnknownField(s.to_string()))
    }
}

/// Which gender checkbox an update targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderOption {
    Male,
    Female,
}

impl GenderOption {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for GenderOption {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            other => Err(InputError::UnknownField(format!("gender:{other}"))),
        }
    }
}

/// Two independent checkboxes. Both or neither checked is representable;
/// only validation rejects it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gender {
    pub male: bool,
    pub female: bool,
}

impl Gender {
    pub fn get(&self, option: GenderOption) -> bool {
        match option {
            GenderOption::Male => self.male,
            GenderOption::Female => self.female,
        }
    }

    pub fn set(&mut self, option: GenderOption, checked: bool) {
        match option {
            GenderOption::Male => self.male = checked,
            GenderOption::Female => self.female = checked,
        }
    }

    /// Exactly one box checked
    pub fn is_exclusive(&self) -> bool {
        self.male ^ self.female
    }
}

/// Selectable courses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Course {
    Biology,
    ComputerScience,
    Commerce,
    Humanities,
}

impl Course {
    pub const ALL: [Course; 4] = [
        Course::Biology,
        Course::ComputerScience,
        Course::Commerce,
        Course::Humanities,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Biology => "biology",
            Self::ComputerScience => "computer-science",
            Self::Commerce => "commerce",
            Self::Humanities => "humanities",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Biology => "Biology",
            Self::ComputerScience => "Computer Science",
            Self::Commerce => "Commerce",
            Self::Humanities => "Humanities",
        }
    }

    /// Cycle forward through the options, passing through "no selection"
    pub fn next(selection: Option<Course>) -> Option<Course> {
        match selection {
            None => Some(Self::Biology),
            Some(Self::Biology) => Some(Self::ComputerScience),
            Some(Self::ComputerScience) => Some(Self::Commerce),
            Some(Self::Commerce) => Some(Self::Humanities),
            Some(Self::Humanities) => None,
        }
    }

    /// Cycle backward through the options, passing through "no selection"
    pub fn prev(selection: Option<Course>) -> Option<Course> {
        match selection {
            None => Some(Self::Humanities),
            Some(Self::Humanities) => Some(Self::Commerce),
            Some(Self::Commerce) => Some(Self::ComputerScience),
            Some(Self::ComputerScience) => Some(Self::Biology),
            Some(Self::Biology) => None,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Course::ALL
            .into_iter()
            .find(|course| course.as_str() == s)
            .ok_or_else(|| InputError::UnknownCourse(s.to_string()))
    }
}

/// All user-entered values for one registration attempt
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub address: String,
    pub mobile: String,
    pub email: String,
    pub gender: Gender,
    pub dob: String,
    pub course: Option<Course>,
}

impl FormFields {
    /// Text value of a text-backed field, `None` for gender and course
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Name => Some(&self.name),
            FieldName::Address => Some(&self.address),
            FieldName::Mobile => Some(&self.mobile),
            FieldName::Email => Some(&self.email),
            FieldName::Dob => Some(&self.dob),
            FieldName::Gender | FieldName::Course => None,
        }
    }

    /// Date of birth as a calendar date, when it is in `YYYY-MM-DD` form
    pub fn dob_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.dob.trim(), "%Y-%m-%d").ok()
    }
}

/// A single field-change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Address(String),
    Mobile(String),
    Email(String),
    Gender(GenderOption, bool),
    Dob(String),
    Course(Option<Course>),
}

impl FieldUpdate {
    /// Build an update for a text-backed field
    pub fn text(field: FieldName, value: String) -> Option<Self> {
        match field {
            FieldName::Name => Some(Self::Name(value)),
            FieldName::Address => Some(Self::Address(value)),
            FieldName::Mobile => Some(Self::Mobile(value)),
            FieldName::Email => Some(Self::Email(value)),
            FieldName::Dob => Some(Self::Dob(value)),
            FieldName::Gender | FieldName::Course => None,
        }
    }

    /// Parse a raw `(fieldName, value)` pair as dispatched by an input surface.
    ///
    /// Gender sub-fields are addressed as `gender:male` / `gender:female`
    /// with `true` or `false` as the value. An empty course value clears the
    /// selection.
    pub fn parse(name: &str, value: &str) -> Result<Self, InputError> {
        if let Some(option) = name.strip_prefix("gender:") {
            let option: GenderOption = option.parse()?;
            let checked = value
                .parse::<bool>()
                .map_err(|_| InputError::InvalidCheckboxValue(value.to_string()))?;
            return Ok(Self::Gender(option, checked));
        }

        match name.parse::<FieldName>()? {
            FieldName::Gender => Err(InputError::UnknownField(name.to_string())),
            FieldName::Course if value.is_empty() => Ok(Self::Course(None)),
            FieldName::Course => Ok(Self::Course(Some(value.parse()?))),
            text_field => Self::text(text_field, value.to_string())
                .ok_or_else(|| InputError::UnknownField(name.to_string())),
        }
    }

    pub fn field(&self) -> FieldName {
        match self {
            Self::Name(_) => FieldName::Name,
            Self::Address(_) => FieldName::Address,
            Self::Mobile(_) => FieldName::Mobile,
            Self::Email(_) => FieldName::Email,
            Self::Gender(..) => FieldName::Gender,
            Self::Dob(_) => FieldName::Dob,
            Self::Course(_) => FieldName::Course,
        }
    }

    /// Overwrite the targeted value in `fields`
    pub fn apply(self, fields: &mut FormFields) {
        match self {
            Self::Name(v) => fields.name = v,
            Self::Address(v) => fields.address = v,
            Self::Mobile(v) => fields.mobile = v,
            Self::Email(v) => fields.email = v,
            Self::Gender(option, checked) => fields.gender.set(option, checked),
            Self::Dob(v) => fields.dob = v,
            Self::Course(v) => fields.course = v,
        }
    }
}
