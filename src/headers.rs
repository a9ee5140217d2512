use crate::{Row, Table};
use std::collections::HashMap;
use std::io::{self, Write};

/// Survey questions and their short column names, in sheet order.
///
/// Two different questions share `talk`.
pub const SURVEY_HEADINGS: &[(&str, &str)] = &[
    ("Timestamp", "timestamp"),
    ("Who is your favorite music artist (broadly defined)?", "artist"),
    ("What physical height would you like to be?", "height"),
    (
        "If you had to live in the city, but could pick any city in the world, what city would you live in?",
        "city",
    ),
    (
        "If you could have 30 minutes to talk with any person, living or dead, who would you pick?",
        "talk",
    ),
    (
        "If you could travel to any location in the world for vacation, where would you go?",
        "vacation",
    ),
    (
        "On a scale of 1 (gross) to five (awesome) how much do you like pizza?",
        "pizza",
    ),
    (
        "Is Chicago-style deep dish actually pizza or is it really casserole?",
        "casserole",
    ),
    ("What sport do you most enjoy watching?", "sport"),
    ("Which is the most difficult to spell?", "spell"),
    ("What is the optimal number of people to hang out with?", "hangout"),
    (
        "Do you think you talk more or less than the average person?",
        "talk",
    ),
    (
        "If you had a time machine and could visit any year you like, which year would you pick?",
        "year",
    ),
    (
        "What's you favorite inspirational quote? You don't need to do this from memory. Feel free to look something up and then paste it in here.",
        "quote",
    ),
    ("What is the area code of your phone number?", "areacode"),
    ("What pet(s) did you have as a child?", "pets"),
    (
        "If you had to have one superpower, what would if be?",
        "superpower",
    ),
    (
        "How many different pairs of shoes have you worn in the last week?",
        "shoes",
    ),
];

/// Immutable question-text to short-name mapping with identity fallback.
#[derive(Debug, Clone)]
pub struct HeaderLookup {
    // insertion order, for the description dump
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl HeaderLookup {
    /// Build from `(question, short_name)` pairs. A repeated question keeps
    /// its first position and its last short name.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for (question, short) in pairs {
            let (question, short) = (question.into(), short.into());
            match index.get(&question) {
                Some(&i) => entries[i].1 = short,
                None => {
                    index.insert(question.clone(), entries.len());
                    entries.push((question, short));
                }
            }
        }
        Self { entries, index }
    }

    /// The survey sheet's table.
    pub fn survey() -> Self {
        Self::from_pairs(SURVEY_HEADINGS.iter().copied())
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.index
            .get(question)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Field `value` replaced by its short name, or unchanged when unmapped.
    pub fn normalize_field<'a>(&'a self, value: &'a str) -> &'a str {
        self.get(value).unwrap_or(value)
    }

    /// A new header row with the same order and count as `header`.
    pub fn normalize_header(&self, header: &[String]) -> Row {
        header
            .iter()
            .map(|field| self.normalize_field(field).to_owned())
            .collect()
    }

    /// Rewrite row 0 only. An empty table is left empty.
    pub fn normalize_table(&self, table: &mut Table) {
        if let Some(header) = table.first_mut() {
            *header = self.normalize_header(header);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write `<short>:\n\t<question>\n` and a blank line per entry, in table order.
    pub fn describe<W: Write>(&self, mut out: W) -> io::Result<()> {
        for (question, short) in &self.entries {
            writeln!(out, "{short}:\n\t{question}\n")?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn maps_known_and_passes_through_unknown() {
        let lookup = HeaderLookup::from_pairs([("Timestamp", "timestamp")]);
        let header = row(&["Timestamp", "Unmapped Question"]);
        assert_eq!(
            lookup.normalize_header(&header),
            row(&["timestamp", "Unmapped Question"])
        );
    }

    #[test]
    fn normalizing_twice_changes_nothing_more() {
        let lookup = HeaderLookup::survey();
        let header: Row = SURVEY_HEADINGS
            .iter()
            .map(|(q, _)| q.to_string())
            .chain(["favorite color".to_string(), String::new()])
            .collect();

        let once = lookup.normalize_header(&header);
        assert_eq!(lookup.normalize_header(&once), once);
        assert_eq!(once.len(), header.len());
    }

    #[test]
    fn only_header_row_is_rewritten() {
        let lookup = HeaderLookup::survey();
        let mut table = vec![
            row(&["Timestamp", "What sport do you most enjoy watching?"]),
            row(&["Timestamp", "What sport do you most enjoy watching?"]),
        ];
        lookup.normalize_table(&mut table);

        assert_eq!(table[0], row(&["timestamp", "sport"]));
        assert_eq!(
            table[1],
            row(&["Timestamp", "What sport do you most enjoy watching?"])
        );

        let mut empty: Table = Vec::new();
        lookup.normalize_table(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn survey_table_keeps_both_talk_questions() {
        let lookup = HeaderLookup::survey();
        assert_eq!(lookup.len(), 18);
        assert_eq!(
            lookup.get("Do you think you talk more or less than the average person?"),
            Some("talk")
        );
        assert_eq!(
            lookup.get(
                "If you could have 30 minutes to talk with any person, living or dead, who would you pick?"
            ),
            Some("talk")
        );
    }

    #[test]
    fn repeated_question_takes_last_short_name() {
        let lookup = HeaderLookup::from_pairs([("Q", "first"), ("R", "r"), ("Q", "second")]);
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get("Q"), Some("second"));
    }

    #[test]
    fn builds_from_owned_pairs() {
        let pairs = vec![
            ("Timestamp".to_string(), "timestamp".to_string()),
            ("Which is the most difficult to spell?".to_string(), "spell".to_string()),
        ];
        let lookup = HeaderLookup::from_pairs(pairs);
        assert_eq!(lookup.normalize_field("Which is the most difficult to spell?"), "spell");
        assert_eq!(lookup.normalize_field("Timestamp"), "timestamp");
    }

    #[test]
    fn describe_lists_entries_in_order() -> io::Result<()> {
        let lookup = HeaderLookup::from_pairs([
            ("Timestamp", "timestamp"),
            ("What pet(s) did you have as a child?", "pets"),
        ]);
        let mut out = Vec::new();
        lookup.describe(&mut out)?;

        assert_eq!(
            String::from_utf8_lossy(&out),
            "timestamp:\n\tTimestamp\n\npets:\n\tWhat pet(s) did you have as a child?\n\n"
        );
        Ok(())
    }
}
