//! Course page extraction

use crate::classify::classify_icon;
use crate::model::{CatalogRef, Chapter, Course, EntityTag, Person, Subchapter};
use crate::parser::{parse_int, require, selector, text_of, ExtractionError};
use crate::url::absolutize;
use scraper::{ElementRef, Html};

const COURSE_TITLE: &str = "h1[data-cy=\"course-title\"]";
const CHAPTER_BLOCK: &str = "li.css-vurnku";
const CHAPTER_STEP: &str = "span.css-1slh6p0";
const CHAPTER_DESCRIPTION: &str = "p.dc-chapter-block-description";
const FREE_BADGE: &str = "strong.css-1gzxid2";
const CHAPTER_CONTENTS: &str = "div.css-1jg92yp";
const SUBCHAPTER_LINK: &str = "a[href]";
const SUBCHAPTER_NAME: &str = "span.css-1rbq0za";
const SUBCHAPTER_ICON: &str = "div.css-1nobm1w path";
const SUBCHAPTER_XP: &str = "span.css-4ldgir";
const INFO_SECTION: &str = "div.css-5is1tl-CoursePage";
const INFO_BLOCK: &str = "div.css-3r6l5t-CoursePage";
// The site has shipped two instructor layouts; the second is the fallback.
const INSTRUCTOR_PRIMARY: &str = "div.css-1qrdlp0-CoursePage";
const INSTRUCTOR_FALLBACK: &str = "div.css-1f254jt-CoursePage";

const PREREQUISITES_LABEL: &str = "Prerequisites";
const ROADMAP_LABEL: &str = "In the following tracks";

/// Parses a course page into a [`Course`] record.
///
/// Chapters are re-sorted by their step label after extraction because
/// extraction order is not guaranteed to match display order. The "free"
/// badge is optional and defaults to false. The prerequisite and
/// "in tracks" sections are found by label-text equality; sibling blocks
/// matching neither label are ignored.
pub fn parse_course(html: &str, url: &str) -> Result<Course, ExtractionError> {
    let document = Html::parse_document(html);

    let title_sel = selector(COURSE_TITLE)?;
    let name = document
        .select(&title_sel)
        .next()
        .map(text_of)
        .ok_or(ExtractionError::MissingElement("course title"))?;

    let mut chapters = parse_chapters(&document)?;
    chapters.sort_by_key(|c| c.step);

    let (prerequisite, roadmap) = parse_info_blocks(&document)?;
    let instructor = parse_instructors(&document)?;

    Ok(Course {
        name,
        tag: EntityTag::Course,
        prerequisite,
        roadmap,
        instructor,
        chapter: chapters,
        url: url.to_string(),
    })
}

fn parse_chapters(document: &Html) -> Result<Vec<Chapter>, ExtractionError> {
    let block_sel = selector(CHAPTER_BLOCK)?;
    let name_sel = selector("h3")?;
    let step_sel = selector(CHAPTER_STEP)?;
    let description_sel = selector(CHAPTER_DESCRIPTION)?;
    let free_sel = selector(FREE_BADGE)?;
    let contents_sel = selector(CHAPTER_CONTENTS)?;

    let mut chapters = Vec::new();
    for block in document.select(&block_sel) {
        let name = text_of(require(block, &name_sel, "chapter name")?);
        let step = parse_int("step", &text_of(require(block, &step_sel, "chapter step")?), "")?;
        let description = text_of(require(block, &description_sel, "chapter description")?);

        // The badge is only rendered on free chapters
        let free = block
            .select(&free_sel)
            .next()
            .map(|badge| text_of(badge) == "Free")
            .unwrap_or(false);

        let contents = require(block, &contents_sel, "chapter contents")?;
        let subchapter = parse_subchapters(contents)?;

        chapters.push(Chapter {
            step,
            name,
            description,
            tag: EntityTag::Chapter,
            free,
            subchapter,
        });
    }

    Ok(chapters)
}

fn parse_subchapters(contents: ElementRef<'_>) -> Result<Vec<Subchapter>, ExtractionError> {
    let link_sel = selector(SUBCHAPTER_LINK)?;
    let name_sel = selector(SUBCHAPTER_NAME)?;
    let icon_sel = selector(SUBCHAPTER_ICON)?;
    let xp_sel = selector(SUBCHAPTER_XP)?;

    let mut subchapters = Vec::new();
    for link in contents.select(&link_sel) {
        let name = text_of(require(link, &name_sel, "sub-chapter name")?);

        let icon = require(link, &icon_sel, "sub-chapter icon")?;
        let shape = icon.value().attr("d").ok_or(ExtractionError::MissingAttr {
            element: "sub-chapter icon",
            attr: "d",
        })?;

        let reward = parse_int(
            "reward",
            &text_of(require(link, &xp_sel, "sub-chapter reward")?),
            "xp",
        )?;

        subchapters.push(Subchapter {
            name,
            tag: EntityTag::SubChapter,
            content_type: classify_icon(shape),
            reward,
        });
    }

    Ok(subchapters)
}

/// Scans the course info section's sibling blocks for the prerequisite and
/// roadmap lists. Either may be absent, in which case it stays `None` so the
/// persisted record carries an explicit `null`.
#[allow(clippy::type_complexity)]
fn parse_info_blocks(
    document: &Html,
) -> Result<(Option<Vec<CatalogRef>>, Option<Vec<CatalogRef>>), ExtractionError> {
    let section_sel = selector(INFO_SECTION)?;
    let block_sel = selector(INFO_BLOCK)?;
    let label_sel = selector("p")?;
    let link_sel = selector("a[href]")?;

    let section = document
        .select(&section_sel)
        .next()
        .ok_or(ExtractionError::MissingElement("course info section"))?;

    let mut prerequisite = None;
    let mut roadmap = None;
    for block in section.select(&block_sel) {
        let label = block.select(&label_sel).next().map(text_of).unwrap_or_default();
        match label.as_str() {
            PREREQUISITES_LABEL => {
                prerequisite = Some(collect_refs(block, &link_sel, EntityTag::Course)?);
            }
            ROADMAP_LABEL => {
                roadmap = Some(collect_refs(block, &link_sel, EntityTag::Track)?);
            }
            _ => {}
        }
    }

    Ok((prerequisite, roadmap))
}

fn collect_refs(
    block: ElementRef<'_>,
    link_sel: &scraper::Selector,
    tag: EntityTag,
) -> Result<Vec<CatalogRef>, ExtractionError> {
    let mut refs = Vec::new();
    for link in block.select(link_sel) {
        let href = link.value().attr("href").ok_or(ExtractionError::MissingAttr {
            element: "info block link",
            attr: "href",
        })?;
        refs.push(CatalogRef {
            name: text_of(link),
            tag,
            url: absolutize(href),
        });
    }
    Ok(refs)
}

fn parse_instructors(document: &Html) -> Result<Vec<Person>, ExtractionError> {
    let primary_sel = selector(INSTRUCTOR_PRIMARY)?;
    let fallback_sel = selector(INSTRUCTOR_FALLBACK)?;
    let name_sel = selector("h4")?;

    let mut cards: Vec<ElementRef<'_>> = document.select(&primary_sel).collect();
    if cards.is_empty() {
        cards = document.select(&fallback_sel).collect();
    }

    let mut instructors = Vec::new();
    for card in cards {
        let name = text_of(require(card, &name_sel, "instructor name")?);
        instructors.push(Person::new(name));
    }
    Ok(instructors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::ContentType;

    const ICON_VIDEO: &str = "M5.562 4v10l6.875-5-6.875-5zm8.113 3.4a1.96 1.96 0 01.412 2.8 2.032 2.032 0 01-.412.4l-6.875 5c-.911.663-2.204.484-2.888-.4A1.96 1.96 0 013.5 14V4c0-1.105.923-2 2.062-2 .447 0 .881.14 1.238.4l6.875 5z";

    fn chapter_html(step: u32, name: &str, free_badge: &str) -> String {
        format!(
            r#"<li class="css-vurnku">
                <h3>{name}</h3>
                <span class="css-1slh6p0">{step}</span>
                <p class="dc-chapter-block-description">About {name}</p>
                {free_badge}
                <div class="css-1jg92yp">
                    <a href="/courses/c/chapters/1">
                        <span class="css-1rbq0za">Lesson one</span>
                        <div class="css-1nobm1w"><svg><path d="{ICON_VIDEO}"/></svg></div>
                        <span class="css-4ldgir">50 xp</span>
                    </a>
                </div>
            </li>"#
        )
    }

    fn course_html(chapters: &str, info_blocks: &str) -> String {
        format!(
            r#"<html><body>
            <h1 data-cy="course-title">Introduction to Data Engineering</h1>
            <ul>{chapters}</ul>
            <div class="css-5is1tl-CoursePage">{info_blocks}</div>
            <div class="css-1qrdlp0-CoursePage"><h4>Vincent Vankrunkelsven</h4></div>
            </body></html>"#
        )
    }

    #[test]
    fn test_parse_course_basics() {
        let html = course_html(
            &chapter_html(1, "Introduction", r#"<strong class="css-1gzxid2">Free</strong>"#),
            "",
        );
        let url = "https://www.datacamp.com/courses/introduction-to-data-engineering";
        let course = parse_course(&html, url).unwrap();

        assert_eq!(course.name, "Introduction to Data Engineering");
        assert_eq!(course.url, url);
        assert_eq!(course.instructor, vec![Person::new("Vincent Vankrunkelsven")]);
        assert_eq!(course.chapter.len(), 1);

        let chapter = &course.chapter[0];
        assert!(chapter.free);
        assert_eq!(chapter.subchapter.len(), 1);
        let sub = &chapter.subchapter[0];
        assert_eq!(sub.name, "Lesson one");
        assert_eq!(sub.content_type, ContentType::Explanation);
        assert_eq!(sub.reward, 50);
    }

    #[test]
    fn test_missing_free_badge_defaults_to_false() {
        let html = course_html(&chapter_html(1, "Introduction", ""), "");
        let course =
            parse_course(&html, "https://www.datacamp.com/courses/x").unwrap();
        assert!(!course.chapter[0].free);
    }

    #[test]
    fn test_chapters_sorted_by_step() {
        let chapters = format!(
            "{}{}",
            chapter_html(3, "Third", ""),
            chapter_html(1, "First", "")
        );
        let html = course_html(&chapters, "");
        let course =
            parse_course(&html, "https://www.datacamp.com/courses/x").unwrap();
        let steps: Vec<u32> = course.chapter.iter().map(|c| c.step).collect();
        assert_eq!(steps, vec![1, 3]);
        assert_eq!(course.chapter[0].name, "First");
    }

    #[test]
    fn test_prerequisite_and_roadmap_blocks() {
        let info = r#"
            <div class="css-3r6l5t-CoursePage">
                <p>Prerequisites</p>
                <a href="/courses/intermediate-python">Intermediate Python</a>
            </div>
            <div class="css-3r6l5t-CoursePage">
                <p>In the following tracks</p>
                <a href="/tracks/data-engineer">Data Engineer</a>
            </div>
            <div class="css-3r6l5t-CoursePage">
                <p>Collaborators</p>
                <a href="/someone">Someone</a>
            </div>"#;
        let html = course_html(&chapter_html(1, "Introduction", ""), info);
        let course =
            parse_course(&html, "https://www.datacamp.com/courses/x").unwrap();

        let prereq = course.prerequisite.unwrap();
        assert_eq!(prereq.len(), 1);
        assert_eq!(prereq[0].name, "Intermediate Python");
        assert_eq!(prereq[0].tag, EntityTag::Course);
        assert_eq!(
            prereq[0].url,
            "https://www.datacamp.com/courses/intermediate-python"
        );

        let roadmap = course.roadmap.unwrap();
        assert_eq!(roadmap.len(), 1);
        assert_eq!(roadmap[0].tag, EntityTag::Track);
    }

    #[test]
    fn test_absent_blocks_stay_none() {
        let html = course_html(&chapter_html(1, "Introduction", ""), "");
        let course =
            parse_course(&html, "https://www.datacamp.com/courses/x").unwrap();
        assert_eq!(course.prerequisite, None);
        assert_eq!(course.roadmap, None);
    }

    #[test]
    fn test_instructor_fallback_layout() {
        let html = r#"<html><body>
            <h1 data-cy="course-title">X</h1>
            <div class="css-5is1tl-CoursePage"></div>
            <div class="css-1f254jt-CoursePage"><h4>Old Layout Instructor</h4></div>
            </body></html>"#;
        let course =
            parse_course(html, "https://www.datacamp.com/courses/x").unwrap();
        assert_eq!(course.instructor, vec![Person::new("Old Layout Instructor")]);
    }

    #[test]
    fn test_missing_title_fails() {
        let html = r#"<html><body><div class="css-5is1tl-CoursePage"></div></body></html>"#;
        let err = parse_course(html, "https://www.datacamp.com/courses/x").unwrap_err();
        assert!(matches!(err, ExtractionError::MissingElement("course title")));
    }

    #[test]
    fn test_unknown_icon_is_unknown_content_type() {
        let chapter = r#"<li class="css-vurnku">
            <h3>C</h3><span class="css-1slh6p0">1</span>
            <p class="dc-chapter-block-description">d</p>
            <div class="css-1jg92yp">
                <a href="/x"><span class="css-1rbq0za">S</span>
                <div class="css-1nobm1w"><svg><path d="M0 0"/></svg></div>
                <span class="css-4ldgir">100 xp</span></a>
            </div>
        </li>"#;
        let html = course_html(chapter, "");
        let course =
            parse_course(&html, "https://www.datacamp.com/courses/x").unwrap();
        assert_eq!(
            course.chapter[0].subchapter[0].content_type,
            ContentType::Unknown
        );
    }
}
