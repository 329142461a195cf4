//! Track listing and track page extraction

use crate::classify::classify_item_url;
use crate::model::{EntityTag, Track, TrackInstructor, TrackItem, TrackSummary};
use crate::parser::{parse_int, require, selector, text_of, ExtractionError};
use crate::url::absolutize;
use scraper::{ElementRef, Html};

// Listing page selectors
const LISTING_CARD: &str = "a.css-y0hih7-ContentCard";
const LISTING_DETAILS: &str = "div.css-1ujh897-TrackCard";
const SECONDARY_TEXT: &str = "span.css-1rbq0za";

// Track page selectors
const TRACK_TITLE: &str = "h1[data-cy=\"track-title\"]";
const TRACK_DESCRIPTION: &str = "p.css-14idxgz-TracksPage";
const TRACK_CATEGORY: &str = "span.css-1g6a7hg-TracksPage";
const CONTENT_SECTION: &str = "section.css-e3d8dw-TracksPage";
const CONTENT_CARD: &str = "a.css-duaogc-TrackContentCard";
const STEP_BADGE: &str = "div.css-54nx8s-TrackContentCard";
const CARD_NAME: &str = "strong.css-1dbp6pz-TrackContentCard";
const CARD_CATEGORY: &str = "svg.css-gwz4il-TrackContentCard title";
const CARD_DESCRIPTION: &str = "p.css-r9ojyg-TrackContentCard";
const CARD_DURATION: &str = "p.css-1jr04uj-TrackContentCard";
const CARD_FOOTER: &str = "footer";
const INSTRUCTOR_NAME: &str = "p.css-v0xch9-TrackContentCard";
const INSTRUCTOR_TITLE: &str = "p.css-1rbq0za";

/// Parses the career-track listing page into its ordered summary cards.
///
/// Duration and course count are the first two secondary text fields in card
/// order; the count strips a literal "courses" suffix before the integer
/// parse. An empty listing parses as an empty vector.
pub fn parse_track_listing(html: &str) -> Result<Vec<TrackSummary>, ExtractionError> {
    let document = Html::parse_document(html);

    let card_sel = selector(LISTING_CARD)?;
    let details_sel = selector(LISTING_DETAILS)?;
    let span_sel = selector(SECONDARY_TEXT)?;
    let name_sel = selector("h3")?;
    let description_sel = selector("p")?;
    let category_sel = selector("svg title")?;

    let mut listing = Vec::new();
    for card in document.select(&card_sel) {
        let href = card.value().attr("href").ok_or(ExtractionError::MissingAttr {
            element: "listing card",
            attr: "href",
        })?;

        let details = require(card, &details_sel, "track card details")?;
        let secondary: Vec<String> = details.select(&span_sel).map(text_of).collect();
        let duration = secondary
            .first()
            .ok_or(ExtractionError::MissingElement("track duration"))?
            .clone();
        let count_text = secondary
            .get(1)
            .ok_or(ExtractionError::MissingElement("track course count"))?;

        listing.push(TrackSummary {
            name: text_of(require(card, &name_sel, "track name")?),
            description: text_of(require(card, &description_sel, "track description")?),
            tag: EntityTag::Track,
            category: text_of(require(card, &category_sel, "track category")?),
            duration,
            course_count: parse_int("course_count", count_text, "courses")?,
            url: absolutize(href),
        });
    }

    Ok(listing)
}

/// Parses a track page into a [`Track`] record.
///
/// Each content card is classified by its href; Course and Project cards get
/// the full detail fields, Milestone and Unknown cards only name, category
/// and url. The step label and the card are extracted together from the
/// card's own wrapper, so a malformed card cannot shift the labels of the
/// cards after it.
pub fn parse_track(html: &str, url: &str) -> Result<Track, ExtractionError> {
    let document = Html::parse_document(html);

    let header_sel = selector("header")?;
    let title_sel = selector(TRACK_TITLE)?;
    let description_sel = selector(TRACK_DESCRIPTION)?;
    let category_sel = selector(TRACK_CATEGORY)?;
    let section_sel = selector(CONTENT_SECTION)?;
    let card_sel = selector(CONTENT_CARD)?;

    let header = document
        .select(&header_sel)
        .next()
        .ok_or(ExtractionError::MissingElement("track header"))?;
    let name = text_of(require(header, &title_sel, "track title")?);
    let description = text_of(require(header, &description_sel, "track description")?);
    let category = text_of(require(header, &category_sel, "track category")?);

    let section = document
        .select(&section_sel)
        .next()
        .ok_or(ExtractionError::MissingElement("track content section"))?;

    let mut items = Vec::new();
    for card in section.select(&card_sel) {
        items.push(parse_content_card(card, &name)?);
    }

    Ok(Track {
        name,
        description,
        tag: EntityTag::Track,
        category,
        items,
        url: url.to_string(),
    })
}

/// Extracts one content card together with its step label.
///
/// The step badge lives in the card's wrapper element, next to the anchor, so
/// both are read from that single scope.
fn parse_content_card(card: ElementRef<'_>, track_name: &str) -> Result<TrackItem, ExtractionError> {
    let step_sel = selector(STEP_BADGE)?;
    let name_sel = selector(CARD_NAME)?;
    let category_sel = selector(CARD_CATEGORY)?;

    let href = card.value().attr("href").ok_or(ExtractionError::MissingAttr {
        element: "track content card",
        attr: "href",
    })?;

    let scope = card
        .parent()
        .and_then(ElementRef::wrap)
        .ok_or(ExtractionError::MissingElement("track content card wrapper"))?;
    let step = parse_int("step", &text_of(require(scope, &step_sel, "step badge")?), "")?;

    let name = text_of(require(card, &name_sel, "card name")?);
    let category = text_of(require(card, &category_sel, "card category")?);
    let item_type = classify_item_url(href);
    let url = absolutize(href);

    if item_type == crate::classify::ItemType::Unknown {
        tracing::debug!("Unclassified item on track {}: {}", track_name, url);
    }

    if !item_type.has_details() {
        return Ok(TrackItem {
            step,
            name,
            description: None,
            item_type,
            category,
            duration: None,
            instructor: None,
            url,
        });
    }

    let description_sel = selector(CARD_DESCRIPTION)?;
    let duration_sel = selector(CARD_DURATION)?;
    let footer_sel = selector(CARD_FOOTER)?;
    let instructor_name_sel = selector(INSTRUCTOR_NAME)?;
    let instructor_title_sel = selector(INSTRUCTOR_TITLE)?;

    let footer = require(card, &footer_sel, "card footer")?;

    Ok(TrackItem {
        step,
        name,
        description: Some(text_of(require(card, &description_sel, "card description")?)),
        item_type,
        category,
        duration: Some(text_of(require(card, &duration_sel, "card duration")?)),
        instructor: Some(TrackInstructor {
            name: text_of(require(footer, &instructor_name_sel, "instructor name")?),
            title: text_of(require(footer, &instructor_title_sel, "instructor title")?),
        }),
        url,
    })
}
