//! Output formatting for CLI display
//!
//! Text helpers return strings so commands decide where to print them. The
//! JSON and CSV writers take any `io::Write` so search results can go to
//! stdout or a file alike.

use crate::matching::MatchResult;
use crate::model::{Game, Review, Sentiment, Source, Tag, TagColor};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// Paint a tag name in its category color
#[must_use]
pub fn colorize_tag(name: &str, color: TagColor, enabled: bool) -> String {
    if !enabled {
        return name.to_string();
    }
    match color {
        TagColor::Green => name.green().to_string(),
        TagColor::Orange => name.yellow().to_string(),
        TagColor::Red => name.red().to_string(),
        TagColor::Gray => name.dimmed().to_string(),
    }
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &Tag, count: usize, quiet: bool, color: bool) -> String {
    if quiet {
        tag.name.clone()
    } else {
        format!(
            "  {} (used by {count} game(s))",
            colorize_tag(&tag.name, tag.color, color)
        )
    }
}

/// One-line summary of a game
#[must_use]
pub fn game_line(game: &Game, quiet: bool) -> String {
    if quiet {
        return game.name.clone();
    }

    let year = game
        .release_date
        .map(|date| format!(" ({})", date.format("%Y")))
        .unwrap_or_default();
    let tags: Vec<&str> = game.tags.iter().map(String::as_str).collect();

    if tags.is_empty() {
        format!("  #{} {}{year}", game.id, game.name)
    } else {
        format!("  #{} {}{year} [{}]", game.id, game.name, tags.join(", "))
    }
}

/// Multi-line description of a game for `show`
#[must_use]
pub fn game_details(game: &Game) -> String {
    let mut lines = vec![format!("{} (#{})", game.name.bold(), game.id)];

    if let Some(igdb_id) = game.igdb_id {
        lines.push(format!("  IGDB id:   {igdb_id}"));
    }
    if let Some(date) = game.release_date {
        lines.push(format!("  Released:  {date}"));
    }
    if !game.platforms.is_empty() {
        lines.push(format!("  Platforms: {}", game.platforms.join(", ")));
    }
    if !game.tags.is_empty() {
        let tags: Vec<&str> = game.tags.iter().map(String::as_str).collect();
        lines.push(format!("  Tags:      {}", tags.join(", ")));
    }
    if let Some(cover) = &game.cover_image {
        lines.push(format!("  Cover:     {cover}"));
    }
    if let Some(summary) = &game.summary {
        lines.push(String::new());
        lines.push(format!("  {summary}"));
    }

    lines.join("\n")
}

/// Paint a sentiment label: positive green, mixed yellow, negative red
#[must_use]
pub fn colorize_sentiment(sentiment: Sentiment, enabled: bool) -> String {
    let label = sentiment.as_str();
    if !enabled {
        return label.to_string();
    }
    match sentiment {
        Sentiment::Positive => label.green().to_string(),
        Sentiment::Mixed => label.yellow().to_string(),
        Sentiment::Negative => label.red().to_string(),
    }
}

/// Summary of one review, followed by its snippet and link when present
///
/// Quiet mode prints only the review id.
#[must_use]
pub fn review_line(review: &Review, source: Option<&Source>, quiet: bool, color: bool) -> String {
    if quiet {
        return review.id.to_string();
    }

    let sentiment = review
        .sentiment
        .map(|sentiment| format!(" [{}]", colorize_sentiment(sentiment, color)))
        .unwrap_or_default();
    let author = match (source, review.reviewer_name.as_deref()) {
        (Some(source), Some(reviewer)) => format!("{}, {reviewer}", source.name),
        (Some(source), None) => source.name.clone(),
        (None, Some(reviewer)) => reviewer.to_string(),
        (None, None) => "unattributed".to_string(),
    };
    let date = review
        .published_at
        .map(|date| format!(" ({date})"))
        .unwrap_or_default();

    let mut lines = vec![format!("  #{}{sentiment} {author}{date}", review.id)];
    if let Some(snippet) = &review.review_snippet {
        lines.push(format!("      {snippet}"));
    }
    if let Some(url) = &review.review_url {
        lines.push(format!("      {url}"));
    }
    lines.join("\n")
}

/// Heading for a result bucket, e.g. "Matches 2 of 3 tags"
#[must_use]
pub fn bucket_header(missing: usize, total_required: usize) -> String {
    let matching = total_required.saturating_sub(missing);
    if missing == 0 {
        format!("Matches all {total_required} tag(s)")
    } else {
        format!("Matches {matching} of {total_required} tag(s)")
    }
}

/// Render a result as grouped text lines, best matches first
#[must_use]
pub fn result_text(result: &MatchResult, quiet: bool) -> Vec<String> {
    let mut lines = Vec::new();
    for (missing, games) in result.iter() {
        if !quiet {
            lines.push(bucket_header(missing, result.total_required_tags).bold().to_string());
        }
        lines.extend(games.iter().map(|game| game_line(game, quiet)));
    }
    lines
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    #[serde(flatten)]
    game: &'a Game,
    matching_tags: usize,
    missing_tags: usize,
}

#[derive(Serialize)]
struct SearchReport<'a> {
    included_tags: &'a [String],
    excluded_tags: &'a [String],
    total_required_tags: usize,
    results: BTreeMap<usize, Vec<ReportEntry<'a>>>,
}

impl<'a> From<&'a MatchResult> for SearchReport<'a> {
    fn from(result: &'a MatchResult) -> Self {
        let mut results: BTreeMap<usize, Vec<ReportEntry<'a>>> = BTreeMap::new();
        for ranked in result.ranked() {
            results.entry(ranked.missing_tags).or_default().push(ReportEntry {
                game: ranked.game,
                matching_tags: ranked.matching_tags,
                missing_tags: ranked.missing_tags,
            });
        }

        Self {
            included_tags: &result.included_tags,
            excluded_tags: &result.excluded_tags,
            total_required_tags: result.total_required_tags,
            results,
        }
    }
}

/// Write a result as pretty JSON grouped by missing count
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization or writing fails.
pub fn write_json<W: Write>(result: &MatchResult, writer: W) -> Result<(), serde_json::Error> {
    serde_json::to_writer_pretty(writer, &SearchReport::from(result))
}

#[derive(Serialize)]
struct CsvRow<'a> {
    missing_tags: usize,
    matching_tags: usize,
    id: u64,
    name: &'a str,
    release_date: String,
    tags: String,
}

/// Write a result as CSV, one row per game in display order
///
/// # Errors
///
/// Returns `csv::Error` if writing fails.
pub fn write_csv<W: Write>(result: &MatchResult, writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for ranked in result.ranked() {
        let tags: Vec<&str> = ranked.game.tags.iter().map(String::as_str).collect();
        csv_writer.serialize(CsvRow {
            missing_tags: ranked.missing_tags,
            matching_tags: ranked.matching_tags,
            id: ranked.game.id.0,
            name: &ranked.game.name,
            release_date: ranked
                .game
                .release_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
            tags: tags.join(";"),
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::{TagQuery, bucket_matches};
    use crate::testing::sample_games;

    fn result() -> MatchResult {
        let query = TagQuery::new(["Action", "Horror"], Vec::<String>::new()).unwrap();
        bucket_matches(sample_games(), &query)
    }

    #[test]
    fn test_bucket_header() {
        assert_eq!(bucket_header(0, 2), "Matches all 2 tag(s)");
        assert_eq!(bucket_header(1, 3), "Matches 2 of 3 tag(s)");
    }

    #[test]
    fn test_tag_with_count() {
        let tag = Tag::new(1, "Action", TagColor::Green);
        assert_eq!(tag_with_count(&tag, 3, true, true), "Action");
        assert_eq!(tag_with_count(&tag, 3, false, false), "  Action (used by 3 game(s))");
    }

    #[test]
    fn test_game_line() {
        let mut game = Game::new(7, "Hades").with_tags(["Action", "Roguelike"]);
        assert_eq!(game_line(&game, true), "Hades");
        game.release_date = chrono::NaiveDate::from_ymd_opt(2020, 9, 17);
        assert_eq!(game_line(&game, false), "  #7 Hades (2020) [Action, Roguelike]");
    }

    #[test]
    fn test_review_line() {
        let source = Source::new(1, "IGN", crate::model::SourceKind::Website);
        let review = Review {
            reviewer_name: Some("Jane Doe".into()),
            review_snippet: Some("Tense and tight.".into()),
            sentiment: Some(Sentiment::Positive),
            published_at: chrono::NaiveDate::from_ymd_opt(2023, 3, 24),
            ..Review::new(5, 2)
        };

        assert_eq!(review_line(&review, Some(&source), true, false), "5");
        assert_eq!(
            review_line(&review, Some(&source), false, false),
            "  #5 [positive] IGN, Jane Doe (2023-03-24)\n      Tense and tight."
        );
        assert_eq!(
            review_line(&Review::new(6, 2), None, false, false),
            "  #6 unattributed"
        );
    }

    #[test]
    fn test_colorize_disabled_is_plain() {
        assert_eq!(colorize_tag("Horror", TagColor::Red, false), "Horror");
    }

    #[test]
    fn test_result_text_quiet_lists_names_in_order() {
        assert_eq!(result_text(&result(), true), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_json_report_shape() {
        let mut buffer = Vec::new();
        write_json(&result(), &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["total_required_tags"], 2);
        assert_eq!(value["included_tags"][1], "Horror");
        assert_eq!(value["results"]["0"][0]["name"], "B");
        assert_eq!(value["results"]["0"][0]["matching_tags"], 2);
        assert_eq!(value["results"]["1"][1]["name"], "C");
        assert_eq!(value["results"]["1"][1]["missing_tags"], 1);
    }

    #[test]
    fn test_csv_rows() {
        let mut buffer = Vec::new();
        write_csv(&result(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "missing_tags,matching_tags,id,name,release_date,tags");
        assert_eq!(lines[1], "0,2,2,B,,Action;Horror");
        assert_eq!(lines.len(), 4);
    }
}
