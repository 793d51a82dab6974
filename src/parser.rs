//! A `nom`-based parser for the OData `$select` expression language.
use crate::ast::SelectProperty;
use nom::{
    IResult, Parser,
    character::complete::{alphanumeric1, char, multispace0},
    combinator::{map, opt},
    multi::separated_list0,
    sequence::{delimited, pair},
};
use url::form_urlencoded;

const SELECT: &str = "$select";

// --- Main Public Parser ---

/// Extracts and parses the `$select` parameter of a raw query string.
///
/// The query string may carry a leading `?` and any number of other
/// parameters; only `$select` is interpreted. Returns `None` when the
/// parameter is missing or its value is empty, which is a normal outcome and
/// not an error. Parsing is best-effort and never fails: input the grammar
/// cannot classify is ignored rather than reported.
pub fn parse_select(query: &str) -> Option<Vec<SelectProperty>> {
    odata_parameter(query, SELECT)
        .filter(|value| !value.trim().is_empty())
        .map(|value| parse_value(&value))
}

/// Picks the percent-decoded value of one `$`-prefixed OData parameter out of
/// a query string. Every other parameter passes through untouched.
fn odata_parameter(query: &str, name: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key.starts_with('$'))
        .find(|(key, _)| key.as_ref() == name)
        .map(|(_, value)| value.into_owned())
}

fn parse_value(raw: &str) -> Vec<SelectProperty> {
    select_list(raw.trim())
        .map(|(_, properties)| properties)
        .unwrap_or_default()
}

// --- Combinators ---

/// `list := property (',' property)*`
fn select_list(input: &str) -> IResult<&str, Vec<SelectProperty>> {
    separated_list0(ws(char(',')), property).parse(input)
}

/// `property := ident ('(' list ')')?` where `ident := [A-Za-z0-9]+`.
fn property(input: &str) -> IResult<&str, SelectProperty> {
    map(
        pair(
            ws(alphanumeric1),
            opt(delimited(char('('), select_list, ws(char(')')))),
        ),
        |(name, children): (&str, _)| SelectProperty {
            name: name.to_string(),
            children: children.unwrap_or_default(),
        },
    )
    .parse(input)
}

/// A combinator that takes a parser `inner` and produces a parser that consumes surrounding whitespace.
fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_select_is_absent() {
        assert_eq!(parse_select("?$skip=1&$top=2&contact=1"), None);
        assert_eq!(parse_select(""), None);
    }

    #[test]
    fn test_empty_select_is_absent() {
        assert_eq!(parse_select("?$select="), None);
        assert_eq!(parse_select("?$select=&$top=2"), None);
    }

    #[test]
    fn test_flat_list_keeps_source_order() {
        let forest = parse_select("?$select=id,name,phone").unwrap();
        assert_eq!(
            forest,
            vec![
                SelectProperty::new("id"),
                SelectProperty::new("name"),
                SelectProperty::new("phone"),
            ]
        );
    }

    #[test]
    fn test_nested_selection() {
        let forest = parse_select("?$select=location(street,city(name))").unwrap();
        assert_eq!(
            forest,
            vec![SelectProperty::with_children(
                "location",
                vec![
                    SelectProperty::new("street"),
                    SelectProperty::with_children("city", vec![SelectProperty::new("name")]),
                ]
            )]
        );
    }

    #[test]
    fn test_whitespace_around_names_and_commas_is_tolerated() {
        // '+' decodes to a space in a query string.
        let forest = parse_select("?$select=id,+location(+street+,+city+)").unwrap();
        assert_eq!(
            forest,
            vec![
                SelectProperty::new("id"),
                SelectProperty::with_children(
                    "location",
                    vec![SelectProperty::new("street"), SelectProperty::new("city")]
                ),
            ]
        );
    }

    #[test]
    fn test_sibling_groups_after_nesting() {
        let forest = parse_select("$select=a(b),c(d(e),f)").unwrap();
        assert_eq!(
            forest,
            vec![
                SelectProperty::with_children("a", vec![SelectProperty::new("b")]),
                SelectProperty::with_children(
                    "c",
                    vec![
                        SelectProperty::with_children("d", vec![SelectProperty::new("e")]),
                        SelectProperty::new("f"),
                    ]
                ),
            ]
        );
    }

    #[test]
    fn test_digits_are_valid_identifier_characters() {
        let forest = parse_select("$select=address1(line2)").unwrap();
        assert_eq!(
            forest,
            vec![SelectProperty::with_children(
                "address1",
                vec![SelectProperty::new("line2")]
            )]
        );
    }

    #[test]
    fn test_unparseable_input_is_best_effort() {
        // Trailing garbage after the parseable prefix is dropped, not reported.
        let forest = parse_select("$select=id,location(street").unwrap();
        assert_eq!(forest[0], SelectProperty::new("id"));
        // A value with no identifiers at all parses to an empty forest.
        assert_eq!(parse_select("$select=(((").unwrap(), vec![]);
    }

    #[test]
    fn test_select_name_must_match_exactly() {
        assert_eq!(parse_select("?$selection=id"), None);
        assert_eq!(parse_select("?select=id"), None);
    }

    #[test]
    fn test_percent_encoded_select_value() {
        let forest = parse_select("?$select=id%2Cphone%28cel%29").unwrap();
        assert_eq!(
            forest,
            vec![
                SelectProperty::new("id"),
                SelectProperty::with_children("phone", vec![SelectProperty::new("cel")]),
            ]
        );
    }
}
