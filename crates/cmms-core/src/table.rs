//! Column, cell and row-action descriptors.
//!
//! Screens declare *what* their table shows; the query pipeline in
//! [`crate::query`] and the renderers decide *how*. Cell content is a closed
//! set of typed variants instead of an opaque render callback, so search,
//! filter and sort semantics are defined once, here.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Typed cell content.
///
/// Each variant defines its own display string, search text and ordering.
/// `Missing` stands in for values a record does not carry (an unperformed
/// inspection has no result); renderers show their empty-state token for it
/// and sorting puts it last.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Date(NaiveDate),
    Badge { label: String, tone: BadgeTone },
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn badge(label: impl Into<String>, tone: BadgeTone) -> Self {
        Self::Badge {
            label: label.into(),
            tone,
        }
    }

    pub fn opt_date(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::Missing, Self::Date)
    }

    /// Display string; `Missing` yields an empty string and renderers
    /// substitute their own token.
    pub fn display(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => format!("{value:.2}"),
            Self::Date(value) => value.format("%Y-%m-%d").to_string(),
            Self::Badge { label, .. } => label.clone(),
            Self::Missing => String::new(),
        }
    }

    /// Lowercased haystack for free-text search. Missing values never match.
    pub fn search_text(&self) -> String {
        self.display().to_lowercase()
    }

    /// Canonical token compared against a filter option's value.
    pub fn filter_token(&self) -> String {
        self.display()
    }

    /// True when the cell should render the empty-state token.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Ordering used by sortable columns: numbers numerically, dates
    /// chronologically, text case-insensitively; `Missing` sorts last.
    pub fn sort_cmp(&self, other: &CellValue) -> Ordering {
        fn rank(value: &CellValue) -> u8 {
            match value {
                CellValue::Integer(_) | CellValue::Float(_) => 0,
                CellValue::Date(_) => 1,
                CellValue::Text(_) | CellValue::Badge { .. } => 2,
                CellValue::Missing => 3,
            }
        }

        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Integer(a), Self::Float(b)) => (*a as f64).total_cmp(b),
            (Self::Float(a), Self::Integer(b)) => a.total_cmp(&(*b as f64)),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (a, b) if rank(a) == rank(b) => a.search_text().cmp(&b.search_text()),
            (a, b) => rank(a).cmp(&rank(b)),
        }
    }
}

/// Visual tone of a badge cell; renderers map tones to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Neutral,
    Info,
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Width hint for renderers; the GUI maps this onto its layout lengths.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ColumnWidth {
    Fixed(f32),
    #[default]
    Fill,
    Portion(u16),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    /// Token compared against `CellValue::filter_token`.
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose value and label are the same string.
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Column descriptor for one field of a record.
///
/// A column is filterable exactly when it carries filter options, so the
/// "filterable implies options" invariant holds by construction.
pub struct Column<T> {
    pub key: &'static str,
    pub title: String,
    pub width: ColumnWidth,
    pub align: CellAlign,
    pub sortable: bool,
    pub searchable: bool,
    pub filter_options: Vec<FilterOption>,
    accessor: fn(&T) -> CellValue,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, title: impl Into<String>, accessor: fn(&T) -> CellValue) -> Self {
        Self {
            key,
            title: title.into(),
            width: ColumnWidth::default(),
            align: CellAlign::default(),
            sortable: false,
            searchable: false,
            filter_options: Vec::new(),
            accessor,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn filterable(mut self, options: Vec<FilterOption>) -> Self {
        self.filter_options = options;
        self
    }

    pub fn width(mut self, width: ColumnWidth) -> Self {
        self.width = width;
        self
    }

    pub fn align(mut self, align: CellAlign) -> Self {
        self.align = align;
        self
    }

    pub fn value(&self, record: &T) -> CellValue {
        (self.accessor)(record)
    }

    pub fn is_filterable(&self) -> bool {
        !self.filter_options.is_empty()
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            title: self.title.clone(),
            width: self.width,
            align: self.align,
            sortable: self.sortable,
            searchable: self.searchable,
            filter_options: self.filter_options.clone(),
            accessor: self.accessor,
        }
    }
}

/// Row action descriptor.
///
/// Whether an action shows up for a given row is the AND of its record
/// predicate and the caller's permission check; the click itself carries no
/// built-in confirmation.
pub struct Action<T> {
    pub key: &'static str,
    pub label: String,
    pub icon: ActionIcon,
    pub tone: ActionTone,
    pub requires: Option<cmms_model::Permission>,
    hidden: Option<fn(&T) -> bool>,
}

impl<T> Action<T> {
    pub fn new(key: &'static str, label: impl Into<String>, icon: ActionIcon) -> Self {
        Self {
            key,
            label: label.into(),
            icon,
            tone: ActionTone::Default,
            requires: None,
            hidden: None,
        }
    }

    pub fn tone(mut self, tone: ActionTone) -> Self {
        self.tone = tone;
        self
    }

    pub fn requires(mut self, permission: cmms_model::Permission) -> Self {
        self.requires = Some(permission);
        self
    }

    pub fn hidden_when(mut self, predicate: fn(&T) -> bool) -> Self {
        self.hidden = Some(predicate);
        self
    }

    pub fn visible_for(&self, record: &T) -> bool {
        match self.hidden {
            Some(predicate) => !predicate(record),
            None => true,
        }
    }
}

impl<T> Clone for Action<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label.clone(),
            icon: self.icon,
            tone: self.tone,
            requires: self.requires,
            hidden: self.hidden,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionIcon {
    Eye,
    Pencil,
    Trash,
    Play,
    Check,
    Download,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionTone {
    #[default]
    Default,
    Danger,
}
