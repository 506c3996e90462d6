//! Whole-identifier substitution of row values into formula strings
//!
//! The formula is tokenized once, left to right. Only complete
//! identifiers that name another column of the row are replaced, so a
//! column name that is a substring of another name, of a numeric
//! literal or of a quoted string is never touched, and the result does
//! not depend on column order.

use crate::model::{format_number, CellValue, Row};

fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '$'
}

/// Text substituted for a column reference, if the column can be
/// substituted at all
fn replacement(row: &Row, name: &str) -> Option<String> {
    match row.get(name) {
        Some(CellValue::Number(n)) if *n < 0.0 => Some(format!("({})", format_number(*n))),
        Some(value) if value.is_primitive() => Some(value.display()),
        Some(_) => None,
        None if name == "id" => Some(row.id.to_string()),
        None => None,
    }
}

/// Replace every identifier naming another column of `row` with that
/// column's value; the formula's own column is left alone
pub fn substitute(formula: &str, row: &Row, own_column: &str) -> String {
    let chars: Vec<char> = formula.chars().collect();
    let mut out = String::with_capacity(formula.len());
    let mut i = 0;

    while let Some(&ch) = chars.get(i) {
        if ch == '"' || ch == '\'' {
            // Quoted literal, copied verbatim
            let quote = ch;
            out.push(ch);
            i += 1;
            while let Some(&c) = chars.get(i) {
                out.push(c);
                i += 1;
                if c == '\\' {
                    if let Some(&escaped) = chars.get(i) {
                        out.push(escaped);
                        i += 1;
                    }
                } else if c == quote {
                    break;
                }
            }
        } else if ch.is_ascii_digit()
            || (ch == '.' && chars.get(i + 1).is_some_and(|c| c.is_ascii_digit()))
        {
            let start = i;
            while chars
                .get(i)
                .is_some_and(|c| c.is_ascii_digit() || *c == '.')
            {
                i += 1;
            }
            // Exponent: 1e5, 2.5E-3
            if chars.get(i).is_some_and(|c| *c == 'e' || *c == 'E') {
                let mut j = i + 1;
                if chars.get(j).is_some_and(|c| *c == '+' || *c == '-') {
                    j += 1;
                }
                if chars.get(j).is_some_and(|c| c.is_ascii_digit()) {
                    i = j;
                    while chars.get(i).is_some_and(|c| c.is_ascii_digit()) {
                        i += 1;
                    }
                }
            }
            out.extend(chars.get(start..i).unwrap_or_default());
        } else if is_ident_start(ch) {
            let start = i;
            while chars.get(i).is_some_and(|c| is_ident_continue(*c)) {
                i += 1;
            }
            let ident: String = chars.get(start..i).unwrap_or_default().iter().collect();
            match replacement(row, &ident) {
                Some(value) if ident != own_column => out.push_str(&value),
                _ => out.push_str(&ident),
            }
        } else {
            out.push(ch);
            i += 1;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> Row {
        Row::new(4)
            .with("price", 10.0)
            .with("qty", 3.0)
            .with("priceTotal", 99.0)
            .with("e", 7.0)
            .with("delta", -2.0)
            .with("note", "hello")
    }

    #[test]
    fn test_basic_substitution() {
        assert_eq!(substitute("price*qty", &row(), "total"), "10*3");
    }

    #[test]
    fn test_name_prefix_of_other_name() {
        assert_eq!(
            substitute("priceTotal - price", &row(), "total"),
            "99 - 10"
        );
    }

    #[test]
    fn test_numeric_literals_untouched() {
        assert_eq!(substitute("1e5 + e", &row(), "total"), "1e5 + 7");
        assert_eq!(substitute("2.5E-3*qty", &row(), "total"), "2.5E-3*3");
    }

    #[test]
    fn test_string_literals_untouched() {
        assert_eq!(
            substitute("\"price\" + 'qty\\'s' + qty", &row(), "total"),
            "\"price\" + 'qty\\'s' + 3"
        );
    }

    #[test]
    fn test_negative_values_parenthesized() {
        assert_eq!(substitute("delta^2", &row(), "total"), "(-2)^2");
    }

    #[test]
    fn test_own_column_and_unknown_names_kept() {
        assert_eq!(
            substitute("total + unknown", &row().with("total", 1.0), "total"),
            "total + unknown"
        );
    }

    #[test]
    fn test_id_resolves_to_row_id() {
        assert_eq!(substitute("id * 2", &row(), "total"), "4 * 2");
    }

    #[test]
    fn test_text_values_substituted_raw() {
        assert_eq!(substitute("note", &row(), "total"), "hello");
    }
}
