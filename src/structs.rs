use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    pub name: String,
    pub url: String,
    pub course_number: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub number: u32,
    pub time: String,
    pub subject: String,
    pub teacher: String,
    pub teacher_url: String,
    pub classroom: String,
    pub subgroup: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// None when the day header carried no parseable date.
    pub date: Option<NaiveDate>,
    pub day_of_week: String,
    pub lessons: Vec<Lesson>,
    // Kept for interface compatibility; no known row shape marks a day off.
    pub is_day_off: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSchedule {
    pub group_name: String,
    pub curator: String,
    pub curator_url: String,
    pub department: String,
    pub speciality: String,
    pub qualification: String,
    pub study_period: String,
    pub education_base: String,
    pub study_form: String,
    pub last_update: Option<NaiveDate>,
    pub days: Vec<DaySchedule>,
}
