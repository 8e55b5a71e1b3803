//! Data tables: normalization of both table schemas and cell formatting.

use crate::format::Formatter;
use crate::models::{Scalar, SemanticType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DATA_TABLE_TITLE: &str = "Data Table";
pub const EMPTY_TABLE: &str = "No data to display";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnDef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub semantic: Option<SemanticType>,
}

impl ColumnDef {
    /// Key used to look the column up in keyed rows.
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

/// A row as positional cells or as a record keyed by column id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TableRow {
    Positional(Vec<Value>),
    Keyed(Map<String, Value>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableInput {
    /// `{type: "DataTable", category, columns, data}`
    DataTable {
        category: Option<String>,
        columns: Vec<ColumnDef>,
        data: Vec<TableRow>,
    },
    /// `{title, headers, rows}`
    Legacy {
        title: String,
        headers: Vec<String>,
        rows: Vec<TableRow>,
    },
}

impl TableInput {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        struct DataTable {
            #[serde(default)]
            category: Option<String>,
            #[serde(default)]
            columns: Option<Vec<ColumnDef>>,
            #[serde(default)]
            data: Option<Vec<TableRow>>,
        }
        #[derive(Deserialize)]
        struct Legacy {
            #[serde(default)]
            title: Option<String>,
            #[serde(default)]
            headers: Option<Vec<String>>,
            #[serde(default)]
            rows: Option<Vec<TableRow>>,
        }

        if value.get("type").and_then(Value::as_str) == Some("DataTable") {
            let t = DataTable::deserialize(value)?;
            Ok(TableInput::DataTable {
                category: t.category,
                columns: t.columns.unwrap_or_default(),
                data: t.data.unwrap_or_default(),
            })
        } else {
            let t = Legacy::deserialize(value)?;
            Ok(TableInput::Legacy {
                title: t.title.unwrap_or_default(),
                headers: t.headers.unwrap_or_default(),
                rows: t.rows.unwrap_or_default(),
            })
        }
    }
}

/// Canonical table.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub title: String,
    pub columns: Vec<ColumnDef>,
    pub rows: Vec<TableRow>,
}

impl From<TableInput> for Table {
    fn from(input: TableInput) -> Self {
        match input {
            TableInput::DataTable {
                category,
                columns,
                data,
            } => Table {
                title: category
                    .filter(|c| !c.is_empty())
                    .unwrap_or_else(|| DATA_TABLE_TITLE.to_string()),
                columns,
                rows: data,
            },
            TableInput::Legacy {
                title,
                headers,
                rows,
            } => Table {
                title,
                columns: headers
                    .into_iter()
                    .map(|name| ColumnDef {
                        id: None,
                        name,
                        semantic: None,
                    })
                    .collect(),
                rows,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Right,
}

impl Align {
    /// First column left, the rest right.
    pub fn for_column(index: usize) -> Self {
        if index == 0 { Align::Left } else { Align::Right }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnView {
    pub name: String,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub title: String,
    pub columns: Vec<ColumnView>,
    pub rows: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl Table {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        TableInput::from_value(value).map(Table::from)
    }

    /// Format every cell with its column's semantic type.
    pub fn render(&self, fmt: &Formatter) -> TableView {
        let columns = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| ColumnView {
                name: c.name.clone(),
                align: Align::for_column(i),
            })
            .collect();

        if self.columns.is_empty() || self.rows.is_empty() {
            return TableView {
                title: self.title.clone(),
                columns,
                rows: Vec::new(),
                empty_message: Some(EMPTY_TABLE.to_string()),
            };
        }

        let rows = self
            .rows
            .iter()
            .map(|row| match row {
                TableRow::Positional(cells) => cells
                    .iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        let ty = self.columns.get(i).and_then(|c| c.semantic);
                        fmt.format(scalar_of(cell).as_ref(), ty)
                    })
                    .collect(),
                TableRow::Keyed(record) => self
                    .columns
                    .iter()
                    .map(|c| {
                        let cell = record.get(c.key()).and_then(scalar_of);
                        fmt.format(cell.as_ref(), c.semantic)
                    })
                    .collect(),
            })
            .collect();

        TableView {
            title: self.title.clone(),
            columns,
            rows,
            empty_message: None,
        }
    }
}

/// Scalar reading of a raw cell. Nested values render as their JSON text.
fn scalar_of(value: &Value) -> Option<Scalar> {
    Some(Scalar::from(value)).filter(|s| !s.is_null())
}
