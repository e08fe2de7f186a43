//! Structural queries over a parsed document: tag, class-token and
//! text-contains selection in document order. The extraction rules in
//! `scrape` are written entirely against these helpers.

use scraper::{ElementRef, Html};

/// Concatenated text of the element's subtree.
pub fn text_of(el: ElementRef) -> String {
    el.text().collect()
}

/// Whitespace-separated class-token match on the `class` attribute.
pub fn has_class(el: ElementRef, class: &str) -> bool {
    el.value()
        .attr("class")
        .map(|attr| attr.split_whitespace().any(|token| token == class))
        .unwrap_or(false)
}

/// Direct child elements, document order.
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}

pub fn elements_by_tag<'a>(
    doc: &'a Html,
    tag: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name() == tag)
}

pub fn descendants_by_tag<'a>(
    el: ElementRef<'a>,
    tag: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.descendants()
        .filter_map(ElementRef::wrap)
        .filter(move |e| e.value().name() == tag)
}

/// First element of `tag` whose text contains `needle`.
pub fn find_containing_text<'a>(
    doc: &'a Html,
    tag: &'static str,
    needle: &str,
) -> Option<ElementRef<'a>> {
    elements_by_tag(doc, tag).find(|el| text_of(*el).contains(needle))
}

pub fn find_with_class<'a>(
    doc: &'a Html,
    tag: &'static str,
    class: &str,
) -> Option<ElementRef<'a>> {
    elements_by_tag(doc, tag).find(|el| has_class(*el, class))
}

/// `following-sibling::<tag>` — every later sibling of `el` with that tag,
/// not stopping at intervening elements of other kinds.
pub fn following_siblings_tagged<'a>(
    el: ElementRef<'a>,
    tag: &'static str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.next_siblings()
        .filter_map(ElementRef::wrap)
        .filter(move |e| e.value().name() == tag)
}

pub fn first_descendant_tagged<'a>(el: ElementRef<'a>, tag: &'static str) -> Option<ElementRef<'a>> {
    descendants_by_tag(el, tag).next()
}

pub fn descendants_with_class<'a>(el: ElementRef<'a>, class: &'static str) -> Vec<ElementRef<'a>> {
    el.descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| has_class(*e, class))
        .collect()
}
