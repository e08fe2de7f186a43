use log::error;
use scraper::Html;

use crate::html;
use crate::net::Fetcher;
use crate::structs::GroupInfo;

use super::make_absolute;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Fetch the schedule index and list every group filed under a course
/// header. Never fails upward: fetch trouble is logged and an empty list
/// returned.
pub async fn list_groups(index_url: &str) -> Vec<GroupInfo> {
    match fetch_index(index_url).await {
        Ok(body) => parse_groups(&Html::parse_document(&body)),
        Err(err) => {
            error!("fetching group index {index_url}: {err}");
            Vec::new()
        }
    }
}

async fn fetch_index(index_url: &str) -> Result<String> {
    let fetcher = Fetcher::new()?;
    fetcher.get_text(index_url).await
}

/// Split out for unit tests.
///
/// The index groups anchors under `h3` course headers inside one container
/// div; an anchor only counts while the most recent header named a course.
pub fn parse_groups(doc: &Html) -> Vec<GroupInfo> {
    let mut groups = Vec::new();

    let Some(container) = html::find_with_class(doc, "div", "surapage_shedule") else {
        return groups;
    };

    let mut current_course = 0;
    for child in html::child_elements(container) {
        match child.value().name() {
            "h3" => current_course = extract_course_number(html::text_of(child).trim()),
            "a" if html::has_class(child, "group") && current_course > 0 => {
                groups.push(GroupInfo {
                    name: html::text_of(child).trim().to_string(),
                    url: make_absolute(child.value().attr("href").unwrap_or("")),
                    course_number: current_course,
                });
            }
            _ => {}
        }
    }

    groups
}

// "2 курс" -> 2; headers not led by a digit reset the course to 0.
fn extract_course_number(header_text: &str) -> u32 {
    header_text
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .unwrap_or(0)
}
