//! Selector parser.
//!
//! ```text
//! selector = type *filter
//! type     = 1*WORDCHAR
//! filter   = "[" property ["=" value] "]"
//! ```
//!
//! The grammar only produces `exists` and `=` filters. Bracket contents are
//! not unescaped, so a literal `]` cannot appear inside a filter.

use crate::error::{QueryError, Result};

use super::expression::{Filter, FilterOperator, FilterValue, Query};

pub struct SelectorParser<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> SelectorParser<'a> {
    pub fn parse(selector: &'a str) -> Result<Query> {
        let type_end = selector
            .char_indices()
            .find(|(_, ch)| !is_word_char(*ch))
            .map(|(index, _)| index)
            .unwrap_or(selector.len());
        if type_end == 0 {
            return Err(QueryError::Syntax(format!(
                "selector must start with a query type: {selector:?}"
            )));
        }

        let mut parser = Self {
            input: selector,
            cursor: type_end,
        };
        let mut filters = Vec::new();
        while let Some(filter) = parser.next_filter() {
            filters.push(filter);
        }

        Ok(Query {
            query_type: selector[..type_end].to_string(),
            filters,
            original: selector.to_string(),
        })
    }

    /// Scans forward to the next complete bracket segment.
    ///
    /// Text between segments and unterminated brackets are skipped.
    fn next_filter(&mut self) -> Option<Filter> {
        loop {
            let open = self.input[self.cursor..].find('[')? + self.cursor;
            let body_start = open + 1;
            match scan_bracket(&self.input[body_start..]) {
                Some((segment, consumed)) => {
                    self.cursor = body_start + consumed;
                    return Some(segment.into_filter());
                }
                None => self.cursor = body_start,
            }
        }
    }
}

struct BracketSegment<'a> {
    property: &'a str,
    value: Option<&'a str>,
}

impl BracketSegment<'_> {
    fn into_filter(self) -> Filter {
        let property = self.property.trim();
        match self.value {
            Some(value) => Filter::new(
                property,
                FilterOperator::Equals,
                FilterValue::from(value.trim()),
            ),
            None => Filter::exists(property),
        }
    }
}

/// Reads `property ["=" value] "]"` from the text following a `[`.
///
/// Returns the segment and the number of bytes consumed, including the
/// closing bracket.
fn scan_bracket(rest: &str) -> Option<(BracketSegment<'_>, usize)> {
    let property_end = rest.find(['=', ']'])?;
    let property = &rest[..property_end];
    if rest[property_end..].starts_with(']') {
        return Some((
            BracketSegment {
                property,
                value: None,
            },
            property_end + 1,
        ));
    }

    let value_start = property_end + 1;
    let value_len = rest[value_start..].find(']')?;
    let value = &rest[value_start..value_start + value_len];
    Some((
        BracketSegment {
            property,
            value: Some(value),
        },
        value_start + value_len + 1,
    ))
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(value: &str) -> FilterValue {
        FilterValue::from(value)
    }

    #[test]
    fn parses_bare_type() {
        let query = SelectorParser::parse("components").expect("parse");
        assert_eq!(query.query_type, "components");
        assert!(query.filters.is_empty());
        assert_eq!(query.original, "components");
    }

    #[test]
    fn parses_filters_in_order() {
        let query =
            SelectorParser::parse("components[category=actions][props.name]").expect("parse");
        assert_eq!(
            query.filters,
            vec![
                Filter::new("category", FilterOperator::Equals, literal("actions")),
                Filter::exists("props.name"),
            ]
        );
    }

    #[test]
    fn trims_property_and_value() {
        let query = SelectorParser::parse("tokens[ type = color ]").expect("parse");
        assert_eq!(query.filters[0].property, "type");
        assert_eq!(query.filters[0].value, literal("color"));
    }

    #[test]
    fn value_keeps_later_equals_signs() {
        let query = SelectorParser::parse("components[a=b=c]").expect("parse");
        assert_eq!(query.filters[0].property, "a");
        assert_eq!(query.filters[0].value, literal("b=c"));
    }

    #[test]
    fn value_is_not_unescaped() {
        let query = SelectorParser::parse(r"components[name=a\]b]").expect("parse");
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters[0].value, literal(r"a\"));
    }

    #[test]
    fn skips_unterminated_bracket() {
        let query = SelectorParser::parse("components[name=Button").expect("parse");
        assert!(query.filters.is_empty());
    }

    #[test]
    fn skips_text_between_brackets() {
        let query = SelectorParser::parse("components junk [category=forms] more").expect("parse");
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters[0].value, literal("forms"));
    }

    #[test]
    fn unknown_type_still_parses() {
        let query = SelectorParser::parse("bogus[x]").expect("parse");
        assert_eq!(query.query_type, "bogus");
        assert!(query.kind().is_none());
    }

    #[test]
    fn rejects_missing_type() {
        for selector in ["", "[category=actions]", " components", "-tokens"] {
            let err = SelectorParser::parse(selector).expect_err("should fail");
            assert!(matches!(err, QueryError::Syntax(_)), "{selector:?}");
        }
    }

    #[test]
    fn grammar_never_produces_rich_operators() {
        let query = SelectorParser::parse("components[name^=But][name!=x]").expect("parse");
        assert_eq!(query.filters[0].property, "name^");
        assert_eq!(query.filters[0].operator, FilterOperator::Equals);
        assert_eq!(query.filters[1].property, "name!");
        assert_eq!(query.filters[1].operator, FilterOperator::Equals);
    }
}
