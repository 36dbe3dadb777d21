//! Translate query-string parameters into a SeaORM [`Condition`].
//!
//! Every list endpoint declares a static table of [`Filter`]s. A parameter
//! that is missing or empty contributes nothing; a parameter that is present
//! but cannot be read as the field's type is rejected with [`FilterError`].

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{ColumnTrait, Condition};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid value '{value}' for query parameter '{param}'")]
    InvalidValue { param: &'static str, value: String },
}

/// One filterable field of a model.
#[derive(Debug, Clone, Copy)]
pub enum Filter<C: 'static> {
    /// Exact equality on the raw value (enum columns).
    Exact { param: &'static str, column: C },
    /// Exact equality on a UUID column.
    Id { param: &'static str, column: C },
    /// Case-insensitive substring match on any of the columns.
    Contains {
        param: &'static str,
        columns: &'static [C],
    },
    /// `min <= column <= max`, each bound optional.
    NumberRange {
        min: &'static str,
        max: &'static str,
        column: C,
    },
    /// Same as `NumberRange` for `YYYY-MM-DD` dates.
    DateRange {
        from: &'static str,
        to: &'static str,
        column: C,
    },
}

impl<C: 'static> Filter<C> {
    pub const fn exact(param: &'static str, column: C) -> Self {
        Filter::Exact { param, column }
    }

    pub const fn id(param: &'static str, column: C) -> Self {
        Filter::Id { param, column }
    }

    pub const fn contains(param: &'static str, columns: &'static [C]) -> Self {
        Filter::Contains { param, columns }
    }

    pub const fn number_range(min: &'static str, max: &'static str, column: C) -> Self {
        Filter::NumberRange { min, max, column }
    }

    pub const fn date_range(from: &'static str, to: &'static str, column: C) -> Self {
        Filter::DateRange { from, to, column }
    }
}

/// Build the `WHERE` condition for `params` from a model's filter table.
pub fn build_condition<C>(
    params: &HashMap<String, String>,
    filters: &[Filter<C>],
) -> Result<Condition, FilterError>
where
    C: ColumnTrait + Copy + 'static,
{
    let mut condition = Condition::all();

    for filter in filters {
        match *filter {
            Filter::Exact { param, column } => {
                if let Some(value) = value_of(params, param) {
                    condition = condition.add(ColumnTrait::eq(&column, value));
                }
            }
            Filter::Id { param, column } => {
                if let Some(value) = value_of(params, param) {
                    let id = parse::<Uuid>(param, value)?;
                    condition = condition.add(ColumnTrait::eq(&column, id));
                }
            }
            Filter::Contains { param, columns } => {
                if let Some(value) = value_of(params, param) {
                    let pattern = like_pattern(value);
                    let mut any = Condition::any();
                    for column in columns {
                        any = any.add(
                            Expr::expr(Func::lower(Expr::col(ColumnTrait::as_column_ref(column))))
                                .like(pattern.clone()),
                        );
                    }
                    condition = condition.add(any);
                }
            }
            Filter::NumberRange { min, max, column } => {
                if let Some(value) = value_of(params, min) {
                    condition = condition.add(ColumnTrait::gte(&column, parse_number(min, value)?));
                }
                if let Some(value) = value_of(params, max) {
                    condition = condition.add(ColumnTrait::lte(&column, parse_number(max, value)?));
                }
            }
            Filter::DateRange { from, to, column } => {
                if let Some(value) = value_of(params, from) {
                    condition = condition.add(ColumnTrait::gte(&column, parse::<NaiveDate>(from, value)?));
                }
                if let Some(value) = value_of(params, to) {
                    condition = condition.add(ColumnTrait::lte(&column, parse::<NaiveDate>(to, value)?));
                }
            }
        }
    }

    Ok(condition)
}

fn value_of<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn parse<T: std::str::FromStr>(param: &'static str, value: &str) -> Result<T, FilterError> {
    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(FilterError::InvalidValue {
            param,
            value: value.to_string(),
        }),
    }
}

fn parse_number(param: &'static str, value: &str) -> Result<f64, FilterError> {
    let number = parse::<f64>(param, value)?;
    if !number.is_finite() {
        return Err(FilterError::InvalidValue {
            param,
            value: value.to_string(),
        });
    }
    Ok(number)
}

/// `%needle%`, lower-cased, with LIKE wildcards in the input escaped.
pub fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
