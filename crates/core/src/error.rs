//! Error types for macrodiff queries.

use alloc::string::String;
use core::fmt;

/// Result type alias for macrodiff operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types raised while building tables or running a query.
///
/// Every variant is fatal to the query that raised it and to nothing else:
/// the caller reports it and keeps accepting queries.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// A predicate or attribute list names a column the schema lacks.
    UnknownColumn {
        column: String,
    },
    /// A cell that must be numeric could not be parsed.
    NumericParse {
        column: String,
        value: String,
    },
    /// The compare-by function is not registered.
    UnknownMetric {
        name: String,
    },
    /// A DIFF was given without its inlier subquery.
    MissingInlierSubquery,
    /// A ratio would divide by an empty population.
    DivisionByZero {
        quantity: String,
    },
    /// A schema was built with the same column name twice.
    DuplicateColumn {
        column: String,
    },
    /// A row does not have one cell per schema column.
    RowWidth {
        expected: usize,
        got: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownColumn { column } => {
                write!(f, "Unknown column: {}", column)
            }
            Error::NumericParse { column, value } => {
                write!(
                    f,
                    "Cannot parse value {:?} in column {} as a number",
                    value, column
                )
            }
            Error::UnknownMetric { name } => {
                write!(f, "Unknown compare-by function: {}", name)
            }
            Error::MissingInlierSubquery => {
                write!(f, "DIFF requires a second subquery defining the inliers")
            }
            Error::DivisionByZero { quantity } => {
                write!(f, "Division by zero: {} is 0", quantity)
            }
            Error::DuplicateColumn { column } => {
                write!(f, "Duplicate column name: {}", column)
            }
            Error::RowWidth { expected, got } => {
                write!(f, "Row has {} values, schema has {} columns", got, expected)
            }
        }
    }
}

impl core::error::Error for Error {}

impl Error {
    /// Creates an unknown column error.
    pub fn unknown_column(column: impl Into<String>) -> Self {
        Error::UnknownColumn {
            column: column.into(),
        }
    }

    /// Creates a numeric parse error.
    pub fn numeric_parse(column: impl Into<String>, value: impl Into<String>) -> Self {
        Error::NumericParse {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Creates an unknown metric error.
    pub fn unknown_metric(name: impl Into<String>) -> Self {
        Error::UnknownMetric { name: name.into() }
    }

    /// Creates a division by zero error.
    pub fn division_by_zero(quantity: impl Into<String>) -> Self {
        Error::DivisionByZero {
            quantity: quantity.into(),
        }
    }

    /// Creates a duplicate column error.
    pub fn duplicate_column(column: impl Into<String>) -> Self {
        Error::DuplicateColumn {
            column: column.into(),
        }
    }

    /// Creates a row width error.
    pub fn row_width(expected: usize, got: usize) -> Self {
        Error::RowWidth { expected, got }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::unknown_column("latency");
        assert!(err.to_string().contains("latency"));

        let err = Error::numeric_parse("usage", "abc");
        assert!(err.to_string().contains("\"abc\""));
        assert!(err.to_string().contains("usage"));

        let err = Error::unknown_metric("odds_ratio");
        assert!(err.to_string().contains("odds_ratio"));

        assert!(Error::MissingInlierSubquery
            .to_string()
            .contains("second subquery"));
    }

    #[test]
    fn test_error_constructors() {
        match Error::division_by_zero("outlier count") {
            Error::DivisionByZero { quantity } => assert_eq!(quantity, "outlier count"),
            _ => panic!("Wrong error type"),
        }
        assert_eq!(
            Error::row_width(2, 3),
            Error::RowWidth {
                expected: 2,
                got: 3
            }
        );
    }
}
