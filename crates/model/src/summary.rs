use std::fmt;

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize,
};

use crate::decimal::Decimal;

/// Totals over every stored session.
///
/// Each field falls back to zero when the aggregation row omits it. `$sum`
/// returns Int32, Int64 or Double depending on what was stored, so every
/// field accepts any of them.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SummaryAggregate {
    #[serde(deserialize_with = "count")]
    pub total_minutes: u64,
    pub total_pay: Decimal,
    #[serde(deserialize_with = "count")]
    pub sessions: u64,
    #[serde(deserialize_with = "count")]
    pub total_students: u64,
}

impl SummaryAggregate {
    pub fn view(&self) -> SummaryView {
        SummaryView::from(*self)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub classes: u64,
    pub hours: String,
    pub income: String,
    pub students: u64,
}

impl From<SummaryAggregate> for SummaryView {
    fn from(agg: SummaryAggregate) -> Self {
        SummaryView {
            classes: agg.sessions,
            hours: format_hours(agg.total_minutes),
            income: format_income(agg.total_pay),
            students: agg.total_students,
        }
    }
}

pub fn format_hours(minutes: u64) -> String {
    format!("{:.2}", minutes as f64 / 60.0)
}

pub fn format_income(amount: Decimal) -> String {
    format!("${}", amount)
}

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a non-negative whole number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
        u64::try_from(value).map_err(|_| E::custom("count is negative"))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
        Ok(value)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<u64, E> {
        if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
            return Err(E::custom("count is not a non-negative whole number"));
        }
        Ok(value as u64)
    }
}

fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CountVisitor)
}

#[cfg(test)]
mod tests {
    use bson::{doc, Bson};

    use super::*;

    #[test]
    fn test_view_formatting() {
        let agg = SummaryAggregate {
            total_minutes: 150,
            total_pay: Decimal::from(45.5),
            sessions: 2,
            total_students: 5,
        };
        let view = agg.view();
        assert_eq!(view.hours, "2.50");
        assert_eq!(view.income, "$45.50");
        assert_eq!(view.classes, 2);
        assert_eq!(view.students, 5);
    }

    #[test]
    fn test_missing_fields_are_zero() {
        let agg: SummaryAggregate = bson::from_document(doc! {
            "_id": Bson::Null,
            "sessions": 3_i32,
        })
        .unwrap();
        assert_eq!(agg.sessions, 3);
        assert_eq!(agg.total_minutes, 0);
        assert_eq!(agg.total_pay, Decimal::zero());
        assert_eq!(agg.total_students, 0);

        let view = agg.view();
        assert_eq!(view.hours, "0.00");
        assert_eq!(view.income, "$0.00");
    }

    #[test]
    fn test_aggregation_row_with_double_pay() {
        let agg: SummaryAggregate = bson::from_document(doc! {
            "_id": Bson::Null,
            "total_minutes": 75_i32,
            "total_pay": 30.0,
            "sessions": 1_i32,
            "total_students": 2_i64,
        })
        .unwrap();
        let view = agg.view();
        assert_eq!(view.classes, 1);
        assert_eq!(view.hours, "1.25");
        assert_eq!(view.income, "$30.00");
        assert_eq!(view.students, 2);
    }

    #[test]
    fn test_aggregation_row_mixed_numeric_types() {
        for (minutes, pay, sessions, students) in [
            (Bson::Int32(150), Bson::Int32(45), Bson::Int32(2), Bson::Int32(5)),
            (Bson::Int64(150), Bson::Int64(45), Bson::Int64(2), Bson::Int64(5)),
            (Bson::Double(150.0), Bson::Double(45.0), Bson::Double(2.0), Bson::Double(5.0)),
            (Bson::Int64(150), Bson::Double(45.0), Bson::Int32(2), Bson::Double(5.0)),
        ] {
            let agg: SummaryAggregate = bson::from_document(doc! {
                "_id": Bson::Null,
                "total_minutes": minutes,
                "total_pay": pay,
                "sessions": sessions,
                "total_students": students,
            })
            .unwrap();
            assert_eq!(
                agg,
                SummaryAggregate {
                    total_minutes: 150,
                    total_pay: Decimal::int(45),
                    sessions: 2,
                    total_students: 5,
                }
            );
        }
    }

    #[test]
    fn test_fractional_count_is_rejected() {
        let result = bson::from_document::<SummaryAggregate>(doc! { "sessions": 1.5 });
        assert!(result.is_err());
    }
}
