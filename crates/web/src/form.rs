use std::str::FromStr as _;

use chrono::NaiveDate;
use model::{
    decimal::Decimal,
    record::{pay_range, SessionRecord, Studio, DURATION_MINUTES, PAY_MAX, STUDENTS},
};
use serde::Deserialize;
use thiserror::Error;

/// Raw fields of the entry form, as submitted.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct RecordForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub duration_minutes: String,
    #[serde(default)]
    pub pay: String,
    #[serde(default)]
    pub studio: String,
    #[serde(default)]
    pub class_type: String,
    #[serde(default)]
    pub students: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Date must be in YYYY-MM-DD format")]
    Date,
    #[error("Duration must be between {} and {} minutes", DURATION_MINUTES.start(), DURATION_MINUTES.end())]
    Duration,
    #[error("Pay must be between 0 and {}", PAY_MAX)]
    Pay,
    #[error("Unknown studio: {0}")]
    Studio(String),
    #[error("Unknown class type: {0}")]
    ClassType(String),
    #[error("Students must be between {} and {}", STUDENTS.start(), STUDENTS.end())]
    Students,
}

impl RecordForm {
    /// Checks the ranges the form promises and builds the record.
    /// `class_types` are the options the form offered.
    pub fn validate(&self, class_types: &[String]) -> Result<SessionRecord, FormError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| FormError::Date)?;

        let duration_minutes = self
            .duration_minutes
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|minutes| DURATION_MINUTES.contains(minutes))
            .ok_or(FormError::Duration)?;

        let pay = Decimal::from_str(&self.pay)
            .ok()
            .filter(|pay| pay_range().contains(pay))
            .ok_or(FormError::Pay)?;

        let studio = Studio::from_str(self.studio.trim())
            .map_err(|_| FormError::Studio(self.studio.clone()))?;

        let class_type = self.class_type.trim();
        if !class_types.iter().any(|label| label == class_type) {
            return Err(FormError::ClassType(self.class_type.clone()));
        }

        let students = self
            .students
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|students| STUDENTS.contains(students))
            .ok_or(FormError::Students)?;

        Ok(SessionRecord::new(
            date,
            duration_minutes,
            pay,
            studio,
            class_type.to_string(),
            students,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RecordForm {
        RecordForm {
            date: "2024-01-01".to_string(),
            duration_minutes: "75".to_string(),
            pay: "30".to_string(),
            studio: "Mindful Motion".to_string(),
            class_type: "Restorative".to_string(),
            students: "2".to_string(),
        }
    }

    fn types() -> Vec<String> {
        vec!["Restorative".to_string(), "Test".to_string()]
    }

    #[test]
    fn test_valid_form() {
        let record = form().validate(&types()).unwrap();
        assert_eq!(record.day(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(record.duration_minutes, 75);
        assert_eq!(record.pay, Decimal::int(30));
        assert_eq!(record.studio, Studio::MindfulMotion);
        assert_eq!(record.class_type, "Restorative");
        assert_eq!(record.students, 2);
    }

    #[test]
    fn test_range_limits() {
        let mut f = form();
        f.duration_minutes = "600".to_string();
        f.pay = "1000".to_string();
        f.students = "1000".to_string();
        assert!(f.validate(&types()).is_ok());

        f.pay = "0".to_string();
        f.duration_minutes = "1".to_string();
        f.students = "1".to_string();
        assert!(f.validate(&types()).is_ok());

        let mut f = form();
        f.duration_minutes = "0".to_string();
        assert_eq!(f.validate(&types()).unwrap_err(), FormError::Duration);
        f.duration_minutes = "601".to_string();
        assert_eq!(f.validate(&types()).unwrap_err(), FormError::Duration);

        let mut f = form();
        f.pay = "1000.01".to_string();
        assert_eq!(f.validate(&types()).unwrap_err(), FormError::Pay);
        f.pay = "-1".to_string();
        assert_eq!(f.validate(&types()).unwrap_err(), FormError::Pay);

        let mut f = form();
        f.students = "0".to_string();
        assert_eq!(f.validate(&types()).unwrap_err(), FormError::Students);
        f.students = "1001".to_string();
        assert_eq!(f.validate(&types()).unwrap_err(), FormError::Students);
    }

    #[test]
    fn test_unknown_choices() {
        let mut f = form();
        f.class_type = "Hot".to_string();
        assert_eq!(
            f.validate(&types()).unwrap_err(),
            FormError::ClassType("Hot".to_string())
        );

        let mut f = form();
        f.studio = "Elsewhere".to_string();
        assert!(matches!(f.validate(&types()), Err(FormError::Studio(_))));

        assert!(matches!(form().validate(&[]), Err(FormError::ClassType(_))));
    }

    #[test]
    fn test_bad_date() {
        let mut f = form();
        f.date = "01/01/2024".to_string();
        assert_eq!(f.validate(&types()).unwrap_err(), FormError::Date);
    }
}
