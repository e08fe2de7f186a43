// tests/groups.rs
//
// Group index parsing: course headers, the reset rule, anchor filtering.

use natk_schedule::scrape::groups::parse_groups;
use natk_schedule::structs::GroupInfo;
use scraper::Html;

fn parse(html_doc: &str) -> Vec<GroupInfo> {
    parse_groups(&Html::parse_document(html_doc))
}

const INDEX_PAGE: &str = r#"
<html><body>
<div class="surapage_shedule">
  <a class="group" href="/gruppy/rannyaya">Ранняя</a>
  <h3>1 курс</h3>
  <a class="group" href="/gruppy/p-11">П-11</a>
  <a class="group" href="https://natk.ru/gruppy/s-12">С-12</a>
  <h3>Абитуриентам</h3>
  <a class="group" href="/gruppy/x-1">X-1</a>
  <h3>2 курс</h3>
  <a class="group" href="/gruppy/p-21">П-21</a>
  <a href="/news">Новости</a>
</div>
</body></html>
"#;

#[test]
fn groups_follow_their_course_headers_in_document_order() {
    let groups = parse(INDEX_PAGE);
    let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, ["П-11", "С-12", "П-21"]);
    assert_eq!(groups[0].course_number, 1);
    assert_eq!(groups[1].course_number, 1);
    assert_eq!(groups[2].course_number, 2);
}

#[test]
fn anchors_before_any_course_header_are_dropped() {
    let groups = parse(INDEX_PAGE);
    assert!(groups.iter().all(|g| g.name != "Ранняя"));
}

#[test]
fn non_digit_header_resets_course_until_the_next_valid_one() {
    // X-1 sits under "Абитуриентам" and must not appear.
    let groups = parse(INDEX_PAGE);
    assert!(groups.iter().all(|g| g.name != "X-1"));
}

#[test]
fn anchors_without_the_group_class_are_ignored() {
    let groups = parse(INDEX_PAGE);
    assert!(groups.iter().all(|g| g.name != "Новости"));
}

#[test]
fn hrefs_are_normalized_against_the_origin() {
    let groups = parse(INDEX_PAGE);
    assert_eq!(groups[0].url, "https://natk.ru/gruppy/p-11");
    assert_eq!(groups[1].url, "https://natk.ru/gruppy/s-12");
}

#[test]
fn missing_container_yields_no_groups() {
    let groups = parse("<html><body><h3>1 курс</h3></body></html>");
    assert!(groups.is_empty());
}

#[test]
fn container_with_no_headers_yields_no_groups() {
    let groups = parse(
        r#"<div class="surapage_shedule">
             <a class="group" href="/gruppy/p-11">П-11</a>
           </div>"#,
    );
    assert!(groups.is_empty());
}
