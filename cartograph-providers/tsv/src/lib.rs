//! Tab-separated road listing provider.
//!
//! A listing starts with a query record `start<TAB>end` followed by road
//! records `endpoint_a<TAB>endpoint_b<TAB>length<TAB>id`. Lines are trimmed
//! and blank lines ignored. Road records with the wrong number of fields or
//! an empty endpoint name are skipped; a four-field record whose length or id
//! does not parse aborts the listing.

use std::{fmt, io::BufRead};

use cartograph_core::{Road, RouteQuery};
use thiserror::Error;
use tracing::{Span, debug, field, instrument};

/// Numeric column of a road record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RoadField {
    /// Third column, the road length.
    Length,
    /// Fourth column, the road identifier.
    Id,
}

impl fmt::Display for RoadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Length => "length",
            Self::Id => "id",
        })
    }
}

/// Errors produced while reading a road listing.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TsvProviderError {
    /// The listing contained no records.
    #[error("road listing contains no records")]
    EmptyInput,
    /// The first record does not name a start and an end location.
    #[error("line {line}: expected `start<TAB>end` query record")]
    MissingQuery {
        /// One-based line number of the offending record.
        line: usize,
    },
    /// A road record carries a value that is not an integer.
    #[error("line {line}: road {field} `{value}` is not a valid integer")]
    InvalidNumber {
        /// One-based line number of the offending record.
        line: usize,
        /// Column that failed to parse.
        field: RoadField,
        /// Raw text of the column.
        value: String,
    },
    /// Reading the underlying source failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed route query and its road map.
#[derive(Clone, Debug)]
pub struct RoadListing {
    query: RouteQuery,
    roads: Vec<Road>,
    skipped: usize,
}

impl RoadListing {
    /// Parses a listing from `reader`.
    ///
    /// # Errors
    /// Returns [`TsvProviderError::EmptyInput`] when the reader holds no
    /// non-blank line, [`TsvProviderError::MissingQuery`] when the first
    /// record has fewer than two fields, [`TsvProviderError::InvalidNumber`]
    /// for a road record with a malformed length or id and
    /// [`TsvProviderError::Io`] when reading fails.
    #[instrument(
        name = "tsv.parse",
        err,
        skip(reader),
        fields(roads = field::Empty, skipped = field::Empty),
    )]
    pub fn try_from_reader<R: BufRead>(reader: R) -> Result<Self, TsvProviderError> {
        let mut query = None;
        let mut roads = Vec::new();
        let mut skipped = 0_usize;

        for (offset, line) in reader.lines().enumerate() {
            let line = line?;
            let record = line.trim();
            if record.is_empty() {
                continue;
            }
            let number = offset + 1;
            if query.is_none() {
                query = Some(parse_query(record, number)?);
                continue;
            }
            match parse_road(record, number)? {
                Some(road) => roads.push(road),
                None => {
                    debug!(line = number, "skipping malformed road record");
                    skipped += 1;
                }
            }
        }

        let query = query.ok_or(TsvProviderError::EmptyInput)?;
        let span = Span::current();
        span.record("roads", roads.len());
        span.record("skipped", skipped);
        Ok(Self {
            query,
            roads,
            skipped,
        })
    }

    /// Parses a listing held in memory.
    ///
    /// # Errors
    /// See [`RoadListing::try_from_reader`].
    ///
    /// # Examples
    /// ```
    /// use cartograph_providers_tsv::RoadListing;
    ///
    /// let listing = RoadListing::try_from_str("A\tC\nA\tB\t10\t1\nB\tC\t10\t2\n")?;
    /// assert_eq!(listing.query().start(), "A");
    /// assert_eq!(listing.roads().len(), 2);
    /// # Ok::<(), cartograph_providers_tsv::TsvProviderError>(())
    /// ```
    pub fn try_from_str(text: &str) -> Result<Self, TsvProviderError> {
        Self::try_from_reader(text.as_bytes())
    }

    /// Returns the route query.
    #[must_use]
    pub fn query(&self) -> &RouteQuery {
        &self.query
    }

    /// Returns the roads in input order.
    #[must_use]
    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Returns how many road records were skipped for having the wrong
    /// number of fields or an empty endpoint name.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Splits the listing into its query and roads.
    #[must_use]
    pub fn into_parts(self) -> (RouteQuery, Vec<Road>) {
        (self.query, self.roads)
    }
}

fn parse_query(record: &str, line: usize) -> Result<RouteQuery, TsvProviderError> {
    let mut fields = record.split('\t');
    match (fields.next(), fields.next()) {
        (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
            Ok(RouteQuery::new(start, end))
        }
        _ => Err(TsvProviderError::MissingQuery { line }),
    }
}

fn parse_road(record: &str, line: usize) -> Result<Option<Road>, TsvProviderError> {
    let fields: Vec<&str> = record.split('\t').collect();
    let [endpoint_a, endpoint_b, length, id] = fields.as_slice() else {
        return Ok(None);
    };
    if endpoint_a.is_empty() || endpoint_b.is_empty() {
        return Ok(None);
    }
    let length = parse_number(length, line, RoadField::Length)?;
    let id = parse_number(id, line, RoadField::Id)?;
    Ok(Some(Road::new(*endpoint_a, *endpoint_b, length, id)))
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    line: usize,
    field: RoadField,
) -> Result<T, TsvProviderError> {
    value
        .trim()
        .parse()
        .map_err(|_| TsvProviderError::InvalidNumber {
            line,
            field,
            value: value.to_owned(),
        })
}
