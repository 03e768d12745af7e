//! Form pages shared by every prototype version.
//!
//! Forms post back to the URL they were loaded from (no `action`), and links
//! are relative, so a page rendered under `/v2` never points outside `/v2`.

pub const QUESTION_1: &str = include_str!("../pages/question-1.html");
pub const QUESTION_2: &str = include_str!("../pages/question-2.html");
pub const NESTED_QUESTION_1: &str = include_str!("../pages/nested/question-1.html");
pub const NESTED_QUESTION_2: &str = include_str!("../pages/nested/question-2.html");
pub const CHECK_ANSWERS: &str = include_str!("../pages/check-answers.html");
pub const CONFIRMATION: &str = include_str!("../pages/confirmation.html");

/// Every page with its group-relative route, in journey order.
pub const ALL: [(&str, &str); 6] = [
    ("/question-1", QUESTION_1),
    ("/question-2", QUESTION_2),
    ("/nested/question-1", NESTED_QUESTION_1),
    ("/nested/question-2", NESTED_QUESTION_2),
    ("/check-answers", CHECK_ANSWERS),
    ("/confirmation", CONFIRMATION),
];

/// First page of the journey, relative to a version's prefix.
pub const START_PAGE: &str = "/question-1";

/// index
///
/// Landing page linking to the start of each mounted version.
pub fn index<I, P>(versions: I) -> String
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    let items: String = versions
        .into_iter()
        .map(|prefix| {
            let prefix = prefix.as_ref();
            format!("      <li><a href=\"{prefix}{START_PAGE}\">{}</a></li>\n", prefix.trim_start_matches('/'))
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>Prototype versions</title>\n</head>\n<body>\n  <main>\n    <h1>Prototype versions</h1>\n    <ul>\n{items}    </ul>\n  </main>\n</body>\n</html>\n"
    )
}
