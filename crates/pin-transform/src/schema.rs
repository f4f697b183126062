//! Header resolution: maps input column names to attributes.

use pin_model::{Attribute, derived_headers};
use tracing::{debug, warn};

use crate::error::{Result, TransformError};

/// Input column chosen for each attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnResolution {
    columns: [Option<String>; Attribute::COUNT],
}

impl ColumnResolution {
    /// The input column (as named in the frame) bound to `attribute`.
    pub fn column(&self, attribute: Attribute) -> Option<&str> {
        self.columns[attribute.index()].as_deref()
    }

    /// Bound attributes with their input column names, in attribute order.
    pub fn bound(&self) -> impl Iterator<Item = (Attribute, &str)> {
        Attribute::ALL
            .into_iter()
            .filter_map(|attribute| self.column(attribute).map(|name| (attribute, name)))
    }

    /// Optional attributes with no input column.
    pub fn absent_optional(&self) -> impl Iterator<Item = Attribute> + '_ {
        Attribute::ALL
            .into_iter()
            .filter(|attribute| !attribute.is_required() && self.column(*attribute).is_none())
    }
}

/// Resolve input headers to attributes.
///
/// Headers are trimmed before matching. When two headers trim to the same
/// attribute the first one wins. Every missing required attribute is reported
/// in a single [`TransformError::MissingColumns`].
pub fn resolve_columns<S: AsRef<str>>(headers: &[S]) -> Result<ColumnResolution> {
    let mut resolution = ColumnResolution::default();
    for header in headers {
        let header = header.as_ref();
        let Some(attribute) = Attribute::from_header(header) else {
            continue;
        };
        if let Some(existing) = resolution.column(attribute) {
            warn!(
                attribute = %attribute,
                kept = %existing,
                ignored = %header,
                "duplicate attribute column ignored"
            );
            continue;
        }
        debug!(attribute = %attribute, column = %header, "attribute column resolved");
        resolution.columns[attribute.index()] = Some(header.to_string());
    }

    let missing: Vec<String> = Attribute::required()
        .filter(|attribute| resolution.column(*attribute).is_none())
        .map(|attribute| attribute.header().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(TransformError::MissingColumns { columns: missing });
    }
    Ok(resolution)
}

/// Input columns that carry a derived header and will be replaced.
pub fn stale_derived_columns<S: AsRef<str>>(headers: &[S]) -> Vec<String> {
    headers
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|header| {
            let trimmed = header.trim();
            derived_headers().any(|derived| derived == trimmed)
        })
        .map(str::to_string)
        .collect()
}
