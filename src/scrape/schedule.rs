use log::error;
use percent_encoding::percent_decode_str;
use scraper::{ElementRef, Html};

use crate::html;
use crate::net::Fetcher;
use crate::structs::{DaySchedule, GroupSchedule, Lesson};

use super::{make_absolute, parse_date_loose, value_after_colon};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

const GROUP_NAME_LABEL: &str = "Расписание занятий группы";
const LAST_UPDATE_LABEL: &str = "Последнее обновление";

/// Fetch one group's page and extract its metadata and day-by-day lesson
/// table. The URL arrives percent-encoded from the caller's path segment.
/// Never fails upward: fetch trouble is logged and `None` returned.
pub async fn get_schedule(schedule_url: &str) -> Option<GroupSchedule> {
    let url = percent_decode_str(schedule_url).decode_utf8_lossy();
    match fetch_page(&url).await {
        Ok(body) => Some(parse_schedule(&Html::parse_document(&body))),
        Err(err) => {
            error!("fetching schedule {url}: {err}");
            None
        }
    }
}

async fn fetch_page(url: &str) -> Result<String> {
    let fetcher = Fetcher::new()?;
    fetcher.get_text(url).await
}

/// Split out for unit tests. Every extraction rule is independent; a
/// missing fragment leaves its field at the default.
pub fn parse_schedule(doc: &Html) -> GroupSchedule {
    let mut schedule = GroupSchedule::default();
    parse_group_info(doc, &mut schedule);
    parse_schedule_table(doc, &mut schedule);
    schedule
}

fn parse_group_info(doc: &Html, schedule: &mut GroupSchedule) {
    if let Some(title) = html::elements_by_tag(doc, "h1").next() {
        schedule.group_name = html::text_of(title)
            .replace(GROUP_NAME_LABEL, "")
            .trim()
            .to_string();
    }

    if let Some(heading) = html::find_containing_text(doc, "h4", "Куратор группы") {
        let link = html::following_siblings_tagged(heading, "p")
            .find_map(|p| html::first_descendant_tagged(p, "a"));
        if let Some(link) = link {
            schedule.curator = html::text_of(link).trim().to_string();
            schedule.curator_url = make_absolute(link.value().attr("href").unwrap_or(""));
        }
    }

    if let Some(heading) = html::find_containing_text(doc, "h4", "Отделение") {
        if let Some(paragraph) = html::following_siblings_tagged(heading, "p").next() {
            schedule.department = html::text_of(paragraph).trim().to_string();
        }
    }

    if let Some(heading) = html::find_containing_text(doc, "h4", "Сведения о группе") {
        for paragraph in html::following_siblings_tagged(heading, "p") {
            let text = html::text_of(paragraph);
            let text = text.trim();
            if text.contains("Специальность:") {
                schedule.speciality = value_after_colon(text).to_string();
            } else if text.contains("Квалификация:") {
                schedule.qualification = value_after_colon(text).to_string();
            } else if text.contains("Срок обучения:") {
                schedule.study_period = value_after_colon(text).to_string();
            } else if text.contains("Базовое образование:") {
                schedule.education_base = value_after_colon(text).to_string();
            } else if text.contains("Форма обучения:") {
                schedule.study_form = value_after_colon(text).to_string();
            }
        }
    }

    if let Some(paragraph) = html::find_containing_text(doc, "p", LAST_UPDATE_LABEL) {
        let text = html::text_of(paragraph).replace(LAST_UPDATE_LABEL, "");
        schedule.last_update = parse_date_loose(text.trim().trim_start_matches(':'));
    }
}

// Rows stream through in document order; a `date` row closes the open day
// and starts the next one, anything else feeds lessons into the open day.
// A day still open after the last row is closed implicitly.
fn parse_schedule_table(doc: &Html, schedule: &mut GroupSchedule) {
    let Some(table) = html::find_with_class(doc, "table", "sura_shedule") else {
        return;
    };

    let mut current_day: Option<DaySchedule> = None;

    for row in html::descendants_by_tag(table, "tr") {
        if html::has_class(row, "date") {
            if let Some(day) = current_day.take() {
                schedule.days.push(day);
            }
            current_day = Some(parse_day_header(row));
        } else if let Some(day) = current_day.as_mut() {
            day.lessons.extend(parse_lesson_row(row));
        }
    }

    if let Some(day) = current_day {
        schedule.days.push(day);
    }
}

// Header shape: "02.09.2025 - Вторник". Without a parseable date the day
// keeps its defaults but still collects the rows that follow it.
fn parse_day_header(row: ElementRef) -> DaySchedule {
    let mut day = DaySchedule::default();

    let text = html::text_of(row);
    let parts: Vec<&str> = text
        .trim()
        .split(" - ")
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() >= 2 {
        if let Some(date) = parse_date_loose(parts[0]) {
            day.date = Some(date);
            day.day_of_week = parts[1].to_string();
        }
    }

    day
}

// A lesson row is |number|time|content|. Content either holds the lesson
// directly or splits into exactly two `podguppa` cells taught in parallel.
fn parse_lesson_row(row: ElementRef) -> Vec<Lesson> {
    let cells: Vec<ElementRef> = html::child_elements(row)
        .filter(|el| el.value().name() == "td")
        .collect();
    if cells.len() < 3 {
        return Vec::new();
    }

    let Ok(number) = html::text_of(cells[0]).trim().parse::<u32>() else {
        return Vec::new();
    };
    let time = html::text_of(cells[1]).trim().to_string();

    let subgroup_cells = html::descendants_with_class(cells[2], "podguppa");
    if subgroup_cells.len() == 2 {
        subgroup_cells
            .into_iter()
            .zip(["1 подгруппа", "2 подгруппа"])
            .map(|(cell, subgroup)| {
                let mut lesson = parse_lesson_cell(cell, number, &time);
                lesson.subgroup = Some(subgroup.to_string());
                lesson
            })
            .collect()
    } else {
        vec![parse_lesson_cell(cells[2], number, &time)]
    }
}

// Explicit fold over the cell's child spans, in document order: the first
// non-empty text is the subject, the last linked span names the teacher,
// the last span mentioning a room sets the classroom.
fn parse_lesson_cell(cell: ElementRef, number: u32, time: &str) -> Lesson {
    let mut lesson = Lesson {
        number,
        time: time.to_string(),
        ..Lesson::default()
    };

    for span in html::child_elements(cell).filter(|el| el.value().name() == "span") {
        let text = html::text_of(span);
        let text = text.trim();

        if lesson.subject.is_empty() && !text.is_empty() {
            lesson.subject = text.to_string();
        }

        if let Some(link) = html::first_descendant_tagged(span, "a") {
            lesson.teacher = html::text_of(link).trim().to_string();
            lesson.teacher_url = make_absolute(link.value().attr("href").unwrap_or(""));
        }

        if text.contains("Кабинет") || text.contains("адресу") {
            lesson.classroom = text.to_string();
        }
    }

    lesson
}
