//! Metric cards: normalization of both card schemas and grouped layout.

use crate::format::Formatter;
use crate::models::{Scalar, SemanticType};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_COLUMNS: u32 = 2;
pub const EMPTY_CARD: &str = "No items to display";

/// One labelled metric.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CardItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub value: Option<Scalar>,
    #[serde(rename = "type", default)]
    pub semantic: Option<SemanticType>,
    /// Items sharing a group are laid out together.
    #[serde(default)]
    pub group: Option<Scalar>,
}

/// Card as it arrives: `{data, group_size?}` or legacy `{title?, items}`.
#[derive(Debug, Clone, PartialEq)]
pub enum CardInput {
    New {
        data: Vec<CardItem>,
        group_size: Option<u32>,
    },
    Legacy {
        items: Vec<CardItem>,
    },
}

impl CardInput {
    /// Pick the schema by whether `data` is an array.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        struct New {
            data: Vec<CardItem>,
            #[serde(default)]
            group_size: Option<u32>,
        }
        #[derive(Deserialize)]
        struct Legacy {
            #[serde(default)]
            items: Option<Vec<CardItem>>,
        }

        if value.get("data").is_some_and(Value::is_array) {
            let New { data, group_size } = New::deserialize(value)?;
            Ok(CardInput::New { data, group_size })
        } else {
            let Legacy { items } = Legacy::deserialize(value)?;
            Ok(CardInput::Legacy {
                items: items.unwrap_or_default(),
            })
        }
    }
}

/// Canonical card: items plus the column count used to lay them out.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub items: Vec<CardItem>,
    pub columns: u32,
}

impl From<CardInput> for Card {
    fn from(input: CardInput) -> Self {
        match input {
            CardInput::New { data, group_size } => Card {
                items: data,
                columns: group_size.filter(|n| *n > 0).unwrap_or(DEFAULT_COLUMNS),
            },
            CardInput::Legacy { items } => Card {
                items,
                columns: DEFAULT_COLUMNS,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardEntry {
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardGroup {
    pub group: Scalar,
    pub entries: Vec<CardEntry>,
}

/// Laid-out card: groups first (in first-seen order), then standalone items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub columns: u32,
    pub groups: Vec<CardGroup>,
    pub items: Vec<CardEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
}

impl Card {
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        CardInput::from_value(value).map(Card::from)
    }

    pub fn render(&self, fmt: &Formatter) -> CardView {
        let entry = |item: &CardItem| CardEntry {
            title: item.title.clone(),
            value: fmt.format(item.value.as_ref(), item.semantic),
        };

        let mut groups: Vec<CardGroup> = Vec::new();
        let mut items = Vec::new();
        for item in &self.items {
            match &item.group {
                Some(g) => match groups.iter_mut().find(|existing| &existing.group == g) {
                    Some(existing) => existing.entries.push(entry(item)),
                    None => groups.push(CardGroup {
                        group: g.clone(),
                        entries: vec![entry(item)],
                    }),
                },
                None => items.push(entry(item)),
            }
        }

        CardView {
            columns: self.columns,
            groups,
            items,
            empty_message: self.items.is_empty().then(|| EMPTY_CARD.to_string()),
        }
    }
}
