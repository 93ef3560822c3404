//! Column-filter predicates.
//!
//! A filter selects rows by comparing one column against a threshold, e.g.
//! `snr > 5`. Filters are written in a small string form that also allows
//! the chained-inequality shorthand `10 <= frequency < 100`, which expands
//! to two predicates. Parsed filters render back to SQL `WHERE` fragments.
//!
//! Column names are restricted to identifiers and text thresholds are
//! rendered as quoted SQL literals, so a parsed filter can never smuggle
//! arbitrary SQL into a query.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Comparison operator of a filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `>=`
    Ge,
    /// `>`
    Gt,
}

impl CompareOp {
    /// SQL spelling of the operator.
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Ge => ">=",
            Self::Gt => ">",
        }
    }

    /// The operator with its operands swapped: `10 <= x` reads as `x >= 10`.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Lt => Self::Gt,
            Self::Le => Self::Ge,
            Self::Gt => Self::Lt,
            Self::Ge => Self::Le,
            Self::Eq | Self::Ne => self,
        }
    }
}

impl FromStr for CompareOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            "=" | "==" => Ok(Self::Eq),
            "!=" => Ok(Self::Ne),
            ">=" => Ok(Self::Ge),
            ">" => Ok(Self::Gt),
            other => Err(Error::Filter(format!("unknown operator {other:?}"))),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Threshold value of a filter predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// Integer threshold.
    Int(i64),
    /// Floating-point threshold.
    Float(f64),
    /// Text threshold.
    Text(String),
}

impl FilterValue {
    /// Renders the value as a SQL literal.
    ///
    /// Text is single-quoted with embedded quotes doubled, per SQL string
    /// literal rules.
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Text(s) => format!("'{}'", s.replace('\'', "''")),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// One predicate: `column OP value`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilter {
    /// Column the predicate applies to.
    pub column: String,
    /// Comparison operator.
    pub op: CompareOp,
    /// Threshold operand.
    pub value: FilterValue,
}

impl ColumnFilter {
    /// Builds a predicate, validating the column name.
    ///
    /// # Errors
    ///
    /// Returns an error if `column` is not a plain identifier.
    pub fn new(column: impl Into<String>, op: CompareOp, value: FilterValue) -> Result<Self> {
        let column = column.into();
        if !is_identifier(&column) {
            return Err(Error::InvalidIdentifier(column));
        }
        Ok(Self { column, op, value })
    }

    /// SQL `WHERE` fragment for this predicate.
    #[must_use]
    pub fn to_sql(&self) -> String {
        format!("{} {} {}", self.column, self.op.as_sql(), self.value.to_sql())
    }
}

impl fmt::Display for ColumnFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

/// True for `[A-Za-z_][A-Za-z0-9_]*`.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parses one filter string into predicates.
///
/// Accepts `column OP value`, the reversed `value OP column`, and chained
/// inequalities such as `10 <= frequency < 100` (two predicates). Text
/// thresholds may be quoted with `'` or `"`; bare non-numeric operands in
/// value position are taken as text.
///
/// # Errors
///
/// Returns an error for unknown operators, dangling operands, thresholds on
/// both sides, or column names that are not identifiers.
pub fn parse_filter(input: &str) -> Result<Vec<ColumnFilter>> {
    let tokens = tokenize(input)?;

    if tokens.len() < 3 || tokens.len() % 2 == 0 {
        return Err(Error::Filter(format!(
            "expected 'column OP value' in {input:?}"
        )));
    }
    for (i, token) in tokens.iter().enumerate() {
        let ok = if i % 2 == 0 {
            matches!(token, Token::Operand(_))
        } else {
            matches!(token, Token::Op(_))
        };
        if !ok {
            return Err(Error::Filter(format!(
                "misplaced operator or operand in {input:?}"
            )));
        }
    }

    let mut filters = Vec::with_capacity(tokens.len() / 2);
    for window in tokens.windows(3).step_by(2) {
        let (Token::Operand(left), Token::Op(op), Token::Operand(right)) =
            (&window[0], &window[1], &window[2])
        else {
            unreachable!("token shape validated above");
        };
        filters.push(pair_to_filter(left, *op, right, input)?);
    }
    Ok(filters)
}

/// Parses and flattens many filter strings.
///
/// # Errors
///
/// Returns the first parse error encountered.
pub fn parse_filters<I, S>(inputs: I) -> Result<Vec<ColumnFilter>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut filters = Vec::new();
    for input in inputs {
        filters.extend(parse_filter(input.as_ref())?);
    }
    Ok(filters)
}

#[derive(Debug, Clone)]
enum Token {
    Operand(Operand),
    Op(CompareOp),
}

#[derive(Debug, Clone)]
enum Operand {
    /// Identifier-shaped word: a column name, or bare text in value position.
    Word(String),
    /// Definite literal: number or quoted text.
    Literal(FilterValue),
}

fn pair_to_filter(
    left: &Operand,
    op: CompareOp,
    right: &Operand,
    input: &str,
) -> Result<ColumnFilter> {
    match (left, right) {
        // `snr > 5`, or `label = Blip` with a bare word threshold
        (Operand::Word(column), Operand::Literal(value)) => {
            ColumnFilter::new(column.clone(), op, value.clone())
        }
        (Operand::Word(column), Operand::Word(word)) => {
            ColumnFilter::new(column.clone(), op, FilterValue::Text(word.clone()))
        }
        // `10 <= frequency`
        (Operand::Literal(value), Operand::Word(column)) => {
            ColumnFilter::new(column.clone(), op.reversed(), value.clone())
        }
        (Operand::Literal(_), Operand::Literal(_)) => Err(Error::Filter(format!(
            "no column name in comparison: {input:?}"
        ))),
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
        } else if matches!(c, '<' | '>' | '=' | '!') {
            let end = (i + 2).min(chars.len());
            let pair: String = chars[i..end].iter().collect();
            let (op, len) = match pair.as_str() {
                "<=" | ">=" | "==" | "!=" => (pair.parse::<CompareOp>()?, 2),
                _ => (chars[i].to_string().parse::<CompareOp>()?, 1),
            };
            tokens.push(Token::Op(op));
            i += len;
        } else if c == '\'' || c == '"' {
            let close = chars[i + 1..]
                .iter()
                .position(|&q| q == c)
                .ok_or_else(|| Error::Filter(format!("unterminated quote in {input:?}")))?;
            let text: String = chars[i + 1..=i + close].iter().collect();
            tokens.push(Token::Operand(Operand::Literal(FilterValue::Text(text))));
            i += close + 2;
        } else {
            let start = i;
            while i < chars.len()
                && !chars[i].is_whitespace()
                && !matches!(chars[i], '<' | '>' | '=' | '!' | '\'' | '"')
            {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            tokens.push(Token::Operand(parse_operand(&word, input)?));
        }
    }
    Ok(tokens)
}

fn parse_operand(word: &str, input: &str) -> Result<Operand> {
    // Identifier check first: words like `inf` or `nan` are column names or
    // text, never float literals.
    if is_identifier(word) {
        return Ok(Operand::Word(word.to_string()));
    }
    if let Ok(v) = word.parse::<i64>() {
        return Ok(Operand::Literal(FilterValue::Int(v)));
    }
    if let Ok(v) = word.parse::<f64>() {
        if !v.is_finite() {
            return Err(Error::Filter(format!(
                "non-finite threshold {word:?} in {input:?}"
            )));
        }
        return Ok(Operand::Literal(FilterValue::Float(v)));
    }
    Err(Error::Filter(format!("bad operand {word:?} in {input:?}")))
}
