//! Column tables and the reshaping of response bodies into records.
//!
//! A column names a JSON location relative to its row object, the kind of
//! value expected there and whether the row is meaningless without it.
//! Missing optional columns become [`FieldValue::Null`]; a missing required
//! column, or any column holding the wrong JSON type, is a data-shape error.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use super::record::{FieldValue, ProjectedRecord};
use crate::error::{HarnessError, Result};

/// Expected JSON type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// JSON string.
    Text,
    /// JSON integer.
    Integer,
    /// JSON number, kept exact.
    Decimal,
    /// JSON boolean.
    Bool,
}

/// One projected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    /// Column name in the record.
    pub name: &'static str,
    /// JSON pointer relative to the row object.
    pub pointer: &'static str,
    /// Expected value type.
    pub kind: ColumnKind,
    /// Whether absence or null is an error.
    pub required: bool,
}

const fn column(
    name: &'static str,
    pointer: &'static str,
    kind: ColumnKind,
    required: bool,
) -> Column {
    Column { name, pointer, kind, required }
}

/// Columns of an order row, read from `data`.
pub const ORDER_COLUMNS: &[Column] = &[
    column("orderId", "/orderId", ColumnKind::Text, true),
    column("distributorOrderId", "/distributorOrderId", ColumnKind::Text, false),
    column("poNumber", "/poNumber", ColumnKind::Text, false),
    column("distributorId", "/distributorId", ColumnKind::Text, false),
    column("status", "/status", ColumnKind::Text, false),
    column("subtotal", "/costs/subtotal", ColumnKind::Decimal, true),
    column("total", "/costs/total", ColumnKind::Decimal, true),
    column("shipping", "/costs/shipping", ColumnKind::Decimal, true),
    column("tax", "/costs/tax", ColumnKind::Decimal, false),
    column("smallOrderFee", "/costs/smallOrderFee", ColumnKind::Decimal, false),
    column("warehouseCode", "/warehouseCode", ColumnKind::Text, false),
    column("warehouseName", "/warehouseName", ColumnKind::Text, false),
    column("orderTimestamp", "/orderTimestamp", ColumnKind::Text, false),
    column("expectedDeliveryDate", "/expectedDeliveryDate", ColumnKind::Text, false),
];

/// Columns of an order-costs row, read from `data`.
pub const COSTS_COLUMNS: &[Column] = &[
    column("subtotal", "/subtotal", ColumnKind::Decimal, true),
    column("total", "/total", ColumnKind::Decimal, true),
    column("shipping", "/shipping", ColumnKind::Decimal, true),
    column("tax", "/tax", ColumnKind::Decimal, false),
    column("smallOrderFee", "/smallOrderFee", ColumnKind::Decimal, false),
];

/// Columns of an order-line row, read from each element of `data.lines`.
pub const LINE_COLUMNS: &[Column] = &[
    column("sku", "/sku", ColumnKind::Text, true),
    column("gtin", "/gtin", ColumnKind::Text, false),
    column("quantity", "/quantity", ColumnKind::Integer, true),
    column("quantityShipped", "/quantityShipped", ColumnKind::Integer, true),
    column("price", "/price", ColumnKind::Decimal, true),
    column("lineTotal", "/lineTotal", ColumnKind::Decimal, true),
    column("styleCode", "/styleCode", ColumnKind::Text, false),
    column("color", "/color", ColumnKind::Text, false),
    column("size", "/size", ColumnKind::Text, false),
];

/// Projects an order body (`{ "data": { ... } }`) into one record.
///
/// # Errors
///
/// Returns [`HarnessError::DataShape`] if `data` is missing or a column
/// breaks its declaration.
pub fn order_record(body: &Value) -> Result<ProjectedRecord> {
    project_row(data(body)?, ORDER_COLUMNS, "data")
}

/// Projects an order-costs body into one record.
///
/// # Errors
///
/// Returns [`HarnessError::DataShape`] if `data` is missing or a column
/// breaks its declaration.
pub fn costs_record(body: &Value) -> Result<ProjectedRecord> {
    project_row(data(body)?, COSTS_COLUMNS, "data")
}

/// Projects `data.lines` of an order body into one record per line, in order.
///
/// # Errors
///
/// Returns [`HarnessError::DataShape`] if `data.lines` is missing or not an
/// array, or any line breaks a column declaration.
pub fn line_records(body: &Value) -> Result<Vec<ProjectedRecord>> {
    let lines = data(body)?.get("lines").and_then(Value::as_array).ok_or_else(|| {
        HarnessError::DataShape("data.lines is missing or not an array".to_owned())
    })?;

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| project_row(line, LINE_COLUMNS, &format!("data.lines[{i}]")))
        .collect()
}

fn data(body: &Value) -> Result<&Value> {
    match body.get("data") {
        Some(data) if data.is_object() => Ok(data),
        _ => Err(HarnessError::DataShape("data is missing or not an object".to_owned())),
    }
}

/// Reads every column of `columns` from `row`; `location` prefixes error paths.
pub(crate) fn project_row(
    row: &Value,
    columns: &[Column],
    location: &str,
) -> Result<ProjectedRecord> {
    let mut record = ProjectedRecord::with_capacity(columns.len());
    for column in columns {
        record.push(column.name, extract(row, column, location)?);
    }
    Ok(record)
}

fn extract(row: &Value, column: &Column, location: &str) -> Result<FieldValue> {
    let path = || format!("{location}{}", column.pointer.replace('/', "."));

    let value = match row.pointer(column.pointer) {
        None | Some(Value::Null) if column.required => {
            return Err(HarnessError::DataShape(format!("missing required field {}", path())));
        }
        None | Some(Value::Null) => return Ok(FieldValue::Null),
        Some(value) => value,
    };

    let converted = match (column.kind, value) {
        (ColumnKind::Text, Value::String(s)) => Some(FieldValue::Text(s.clone())),
        (ColumnKind::Integer, Value::Number(n)) => n.as_i64().map(FieldValue::Integer),
        (ColumnKind::Decimal, Value::Number(n)) => {
            parse_decimal(&n.to_string()).map(FieldValue::Decimal)
        }
        (ColumnKind::Bool, Value::Bool(b)) => Some(FieldValue::Bool(*b)),
        _ => None,
    };

    converted.ok_or_else(|| {
        HarnessError::DataShape(format!(
            "{} has unexpected value {value}, expected {:?}",
            path(),
            column.kind
        ))
    })
}

fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)).ok()
}
