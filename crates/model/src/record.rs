use std::ops::RangeInclusive;

use bson::oid::ObjectId;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::decimal::Decimal;

pub const DURATION_MINUTES: RangeInclusive<u32> = 1..=600;
pub const STUDENTS: RangeInclusive<u32> = 1..=1000;
pub const PAY_MAX: i64 = 1000;

/// One taught class.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionRecord {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub date: DateTime<Utc>,
    pub duration_minutes: u32,
    pub pay: Decimal,
    pub studio: Studio,
    pub class_type: String,
    pub students: u32,
}

impl SessionRecord {
    pub fn new(
        date: NaiveDate,
        duration_minutes: u32,
        pay: Decimal,
        studio: Studio,
        class_type: String,
        students: u32,
    ) -> Self {
        SessionRecord {
            id: ObjectId::new(),
            date: day_start(date),
            duration_minutes,
            pay,
            studio,
            class_type,
            students,
        }
    }

    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Compares everything except the identifier.
    pub fn same_session(&self, other: &SessionRecord) -> bool {
        self.date == other.date
            && self.duration_minutes == other.duration_minutes
            && self.pay == other.pay
            && self.studio == other.studio
            && self.class_type == other.class_type
            && self.students == other.students
    }
}

pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub fn pay_range() -> RangeInclusive<Decimal> {
    Decimal::zero()..=Decimal::int(PAY_MAX)
}

#[derive(
    Debug,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
)]
pub enum Studio {
    #[default]
    #[serde(rename = "Mindful Motion")]
    #[strum(serialize = "Mindful Motion")]
    MindfulMotion,
}
